use crate::domain::errors::DomainError;

const CNT_URL_ACTIVE_KEY: &str = "url_mappings_active_key_idx";
const CNT_PRODUCT_MANUAL_KEY: &str = "products_manual_url_key_chk";
const CNT_CATEGORY_MANUAL_KEY: &str = "categories_manual_url_key_chk";
const CNT_PRODUCT_BACKEND: &str = "products_backend_id_fkey";
const CNT_CATEGORY_BACKEND: &str = "categories_backend_id_fkey";
const CNT_URL_BACKEND: &str = "url_mappings_backend_id_fkey";
const CNT_PRODUCT_LANG: &str = "products_lang_id_fkey";
const CNT_CATEGORY_LANG: &str = "categories_lang_id_fkey";
const CNT_URL_LANG: &str = "url_mappings_lang_id_fkey";

fn known_constraint(constraint: &str) -> Option<DomainError> {
    let err = match constraint {
        CNT_URL_ACTIVE_KEY => DomainError::Conflict(
            "url key already used by another record in this backend and language".into(),
        ),
        CNT_PRODUCT_MANUAL_KEY | CNT_CATEGORY_MANUAL_KEY => DomainError::Validation(
            "manual url key is required if builder is set to manual".into(),
        ),
        CNT_PRODUCT_BACKEND | CNT_CATEGORY_BACKEND | CNT_URL_BACKEND => {
            DomainError::NotFound("backend not found".into())
        }
        CNT_PRODUCT_LANG | CNT_CATEGORY_LANG | CNT_URL_LANG => {
            DomainError::NotFound("language not found".into())
        }
        _ => return None,
    };
    Some(err)
}

pub fn map_sqlx(err: sqlx::Error) -> DomainError {
    match &err {
        sqlx::Error::Database(db_err) => {
            if let Some(mapped) = db_err.constraint().and_then(known_constraint) {
                return mapped;
            }

            if let Some(code) = db_err.code() {
                match code.as_ref() {
                    "23505" => {
                        return DomainError::Conflict("unique constraint violated".into());
                    }
                    "23503" => {
                        return DomainError::NotFound("referenced record not found".into());
                    }
                    "23514" => {
                        return DomainError::Validation("check constraint violated".into());
                    }
                    _ => {}
                }
            }

            DomainError::Persistence(db_err.message().to_string())
        }
        _ => DomainError::Persistence(err.to_string()),
    }
}
