use super::{OwnerRepository, Repository};
use crate::error::AppError;
use crate::model::{Country, Owner};
use crate::store::Session;
use crate::validation::same_name;
use serde_json::Value;

impl Repository<Country> {
    pub async fn name_exists(uow: &mut dyn Session, name: &str) -> Result<bool, AppError> {
        let all = Self::get_all(uow).await?;
        Ok(all.iter().any(|c| same_name(&c.name, name)))
    }

    /// Country the owner belongs to; None when the owner does not exist.
    pub async fn country_of_owner(uow: &mut dyn Session, owner_id: i32) -> Result<Option<Country>, AppError> {
        match OwnerRepository::get_by_id(uow, owner_id).await? {
            Some(owner) => Self::get_by_id(uow, owner.country_id).await,
            None => Ok(None),
        }
    }

    pub async fn owners_from_country(uow: &mut dyn Session, country_id: i32) -> Result<Vec<Owner>, AppError> {
        OwnerRepository::find_by(uow, "country_id", Value::from(country_id)).await
    }
}
