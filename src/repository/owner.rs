use super::{linked_ids, PokemonRepository, Repository};
use crate::error::AppError;
use crate::model::{Owner, Pokemon};
use crate::store::schema::POKEMON_OWNER;
use crate::store::Session;
use crate::validation::same_name;

impl Repository<Owner> {
    pub async fn last_name_exists(uow: &mut dyn Session, last_name: &str) -> Result<bool, AppError> {
        let all = Self::get_all(uow).await?;
        Ok(all.iter().any(|o| same_name(&o.last_name, last_name)))
    }

    pub async fn pokemon_by_owner(uow: &mut dyn Session, owner_id: i32) -> Result<Vec<Pokemon>, AppError> {
        let ids = linked_ids(uow, &POKEMON_OWNER, "owner_id", owner_id, "pokemon_id").await?;
        PokemonRepository::get_many(uow, &ids).await
    }

    pub async fn owners_of_pokemon(uow: &mut dyn Session, pokemon_id: i32) -> Result<Vec<Owner>, AppError> {
        let ids = linked_ids(uow, &POKEMON_OWNER, "pokemon_id", pokemon_id, "owner_id").await?;
        Self::get_many(uow, &ids).await
    }
}
