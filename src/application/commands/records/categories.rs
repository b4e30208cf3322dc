// src/application/commands/records/categories.rs
use super::{RecordCommandService, UrlKeyInput};
use crate::{
    application::{
        dto::{CategoryDto, RecordOutcome},
        error::ApplicationResult,
    },
    domain::{
        catalog::{Category, NewCategory, RecordName},
        url::{BackendId, LangId, RecordId, UrlKeyState},
    },
};

pub struct CreateCategoryCommand {
    pub backend_id: i64,
    pub lang_id: i64,
    pub name: String,
    pub url: UrlKeyInput,
}

pub struct UpdateCategoryCommand {
    pub id: i64,
    pub name: Option<String>,
    pub url: UrlKeyInput,
}

pub struct DeleteCategoryCommand {
    pub id: i64,
}

impl RecordCommandService {
    pub async fn create_category(
        &self,
        command: CreateCategoryCommand,
    ) -> ApplicationResult<RecordOutcome<CategoryDto>> {
        let mut url = UrlKeyState::new(LangId::new(command.lang_id)?);
        let advisory = command.url.apply(&mut url, self.slugger.as_ref())?;

        let draft = NewCategory {
            backend: BackendId::new(command.backend_id)?,
            name: RecordName::new(command.name)?,
            url,
            created_at: self.clock.now(),
        };

        let category: Category = self.create(draft).await?;
        Ok(RecordOutcome::new(vec![category.into()], advisory.into_iter().collect()))
    }

    pub async fn update_category(
        &self,
        command: UpdateCategoryCommand,
    ) -> ApplicationResult<RecordOutcome<CategoryDto>> {
        let id = RecordId::new(command.id)?;
        let name = command.name.map(RecordName::new).transpose()?;
        let now = self.clock.now();

        let outcome = self
            .write::<Category, _>(&[id], |category, slugger| {
                if let Some(name) = &name {
                    category.name = name.clone();
                }
                category.updated_at = now;
                Ok(command.url.apply(&mut category.url, slugger)?.into_iter().collect())
            })
            .await?;

        Ok(RecordOutcome::new(outcome.records, outcome.advisories).map(CategoryDto::from))
    }

    pub async fn delete_category(&self, command: DeleteCategoryCommand) -> ApplicationResult<()> {
        let id = RecordId::new(command.id)?;
        self.unlink::<Category>(&[id]).await
    }
}
