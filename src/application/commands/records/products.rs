// src/application/commands/records/products.rs
use super::{RecordCommandService, UrlKeyInput};
use crate::{
    application::{
        dto::{ProductDto, RecordOutcome},
        error::ApplicationResult,
    },
    domain::{
        catalog::{NewProduct, Product, RecordName},
        url::{BackendId, LangId, RecordId, UrlKeyState},
    },
};

pub struct CreateProductCommand {
    pub backend_id: i64,
    pub lang_id: i64,
    pub name: String,
    pub default_code: Option<String>,
    pub url: UrlKeyInput,
}

pub struct UpdateProductCommand {
    pub id: i64,
    pub name: Option<String>,
    /// `Some("")` removes the reference code.
    pub default_code: Option<String>,
    pub url: UrlKeyInput,
}

pub struct DeleteProductCommand {
    pub id: i64,
}

impl RecordCommandService {
    pub async fn create_product(
        &self,
        command: CreateProductCommand,
    ) -> ApplicationResult<RecordOutcome<ProductDto>> {
        let mut url = UrlKeyState::new(LangId::new(command.lang_id)?);
        let advisory = command.url.apply(&mut url, self.slugger.as_ref())?;

        let draft = NewProduct {
            backend: BackendId::new(command.backend_id)?,
            name: RecordName::new(command.name)?,
            default_code: command.default_code.filter(|code| !code.trim().is_empty()),
            url,
            created_at: self.clock.now(),
        };

        let product: Product = self.create(draft).await?;
        Ok(RecordOutcome::new(vec![product.into()], advisory.into_iter().collect()))
    }

    pub async fn update_product(
        &self,
        command: UpdateProductCommand,
    ) -> ApplicationResult<RecordOutcome<ProductDto>> {
        let id = RecordId::new(command.id)?;
        let name = command.name.map(RecordName::new).transpose()?;
        let now = self.clock.now();

        let outcome = self
            .write::<Product, _>(&[id], |product, slugger| {
                if let Some(name) = &name {
                    product.name = name.clone();
                }
                if let Some(code) = &command.default_code {
                    product.default_code = Some(code.trim().to_string()).filter(|c| !c.is_empty());
                }
                product.updated_at = now;
                Ok(command.url.apply(&mut product.url, slugger)?.into_iter().collect())
            })
            .await?;

        Ok(RecordOutcome::new(outcome.records, outcome.advisories).map(ProductDto::from))
    }

    pub async fn delete_product(&self, command: DeleteProductCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.unlink::<Product>(&[id]).await
    }
}
