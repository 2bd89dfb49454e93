use super::{linked_ids, PokemonRepository, Repository};
use crate::error::AppError;
use crate::model::{Category, Pokemon};
use crate::store::schema::POKEMON_CATEGORY;
use crate::store::Session;
use crate::validation::same_name;

impl Repository<Category> {
    pub async fn name_exists(uow: &mut dyn Session, name: &str) -> Result<bool, AppError> {
        let all = Self::get_all(uow).await?;
        Ok(all.iter().any(|c| same_name(&c.name, name)))
    }

    pub async fn pokemon_by_category(uow: &mut dyn Session, category_id: i32) -> Result<Vec<Pokemon>, AppError> {
        let ids = linked_ids(uow, &POKEMON_CATEGORY, "category_id", category_id, "pokemon_id").await?;
        PokemonRepository::get_many(uow, &ids).await
    }
}
