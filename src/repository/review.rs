use super::Repository;
use crate::error::AppError;
use crate::model::{Entity, Review};
use crate::store::Session;
use serde_json::Value;

impl Repository<Review> {
    pub async fn reviews_for_pokemon(uow: &mut dyn Session, pokemon_id: i32) -> Result<Vec<Review>, AppError> {
        Self::find_by(uow, "pokemon_id", Value::from(pokemon_id)).await
    }

    pub async fn reviews_from_reviewer(uow: &mut dyn Session, reviewer_id: i32) -> Result<Vec<Review>, AppError> {
        Self::find_by(uow, "reviewer_id", Value::from(reviewer_id)).await
    }

    /// Deletes every review given. An empty slice succeeds without touching the store.
    pub async fn delete_many(uow: &mut dyn Session, reviews: &[Review]) -> Result<(), AppError> {
        if reviews.is_empty() {
            return Ok(());
        }
        let ids: Vec<Value> = reviews.iter().map(|r| Value::from(r.id())).collect();
        let affected = uow.delete_where_in(Review::TABLE, "id", &ids).await?;
        if affected != reviews.len() as u64 {
            return Err(AppError::Persistence(format!(
                "deleted {} of {} reviews",
                affected,
                reviews.len()
            )));
        }
        tracing::info!(count = affected, "reviews deleted");
        Ok(())
    }
}
