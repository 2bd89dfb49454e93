use super::{Repository, ReviewRepository};
use crate::error::AppError;
use crate::model::{Review, Reviewer};
use crate::store::Session;

impl Repository<Reviewer> {
    pub async fn reviews_by_reviewer(uow: &mut dyn Session, reviewer_id: i32) -> Result<Vec<Review>, AppError> {
        ReviewRepository::reviews_from_reviewer(uow, reviewer_id).await
    }

    /// The one single-get that loads a relation eagerly.
    pub async fn get_with_reviews(
        uow: &mut dyn Session,
        reviewer_id: i32,
    ) -> Result<Option<(Reviewer, Vec<Review>)>, AppError> {
        let Some(reviewer) = Self::get_by_id(uow, reviewer_id).await? else {
            return Ok(None);
        };
        let reviews = Self::reviews_by_reviewer(uow, reviewer_id).await?;
        Ok(Some((reviewer, reviews)))
    }
}
