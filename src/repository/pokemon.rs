use super::{link_pokemon, PokemonRepository, Repository, ReviewRepository};
use crate::error::AppError;
use crate::model::{Pokemon, Review};
use crate::store::schema::{POKEMON_CATEGORY, POKEMON_OWNER};
use crate::store::Session;

impl Repository<Pokemon> {
    /// Exact match after trimming both sides.
    pub async fn get_by_name(uow: &mut dyn Session, name: &str) -> Result<Option<Pokemon>, AppError> {
        let all = PokemonRepository::get_all(uow).await?;
        Ok(all.into_iter().find(|p| p.name.trim() == name.trim()))
    }

    pub async fn name_exists(uow: &mut dyn Session, name: &str) -> Result<bool, AppError> {
        Ok(Self::get_by_name(uow, name).await?.is_some())
    }

    /// Inserts the pokemon and links it to `owner_id` and `category_id`.
    pub async fn create_with(
        uow: &mut dyn Session,
        owner_id: i32,
        category_id: i32,
        pokemon: &Pokemon,
    ) -> Result<Pokemon, AppError> {
        let created = PokemonRepository::create(uow, pokemon).await?;
        link_pokemon(uow, &POKEMON_OWNER, created.id, "owner_id", owner_id).await?;
        link_pokemon(uow, &POKEMON_CATEGORY, created.id, "category_id", category_id).await?;
        Ok(created)
    }

    /// Updates the pokemon row and makes sure both join rows exist.
    pub async fn update_with(
        uow: &mut dyn Session,
        owner_id: i32,
        category_id: i32,
        pokemon: &Pokemon,
    ) -> Result<(), AppError> {
        PokemonRepository::update(uow, pokemon).await?;
        link_pokemon(uow, &POKEMON_OWNER, pokemon.id, "owner_id", owner_id).await?;
        link_pokemon(uow, &POKEMON_CATEGORY, pokemon.id, "category_id", category_id).await
    }

    /// Mean review rating of the pokemon; 0 when it has no reviews.
    pub async fn rating(uow: &mut dyn Session, pokemon_id: i32) -> Result<f64, AppError> {
        let reviews = ReviewRepository::reviews_for_pokemon(uow, pokemon_id).await?;
        Ok(mean_rating(&reviews))
    }
}

pub fn mean_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let total: i64 = reviews.iter().map(|r| i64::from(r.rating)).sum();
    total as f64 / reviews.len() as f64
}
