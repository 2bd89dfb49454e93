//! Generic repository over any `Entity`, plus per-entity relationship queries.
//! Every call takes the request's session explicitly; nothing is committed here.

mod category;
mod country;
mod owner;
mod pokemon;
mod review;
mod reviewer;

pub use pokemon::mean_rating;

use crate::error::AppError;
use crate::model::{Category, Country, Entity, Owner, Pokemon, Review, Reviewer};
use crate::store::schema::Table;
use crate::store::{Row, Session};
use serde_json::Value;
use std::marker::PhantomData;

pub struct Repository<E>(PhantomData<E>);

pub type PokemonRepository = Repository<Pokemon>;
pub type CategoryRepository = Repository<Category>;
pub type CountryRepository = Repository<Country>;
pub type OwnerRepository = Repository<Owner>;
pub type ReviewerRepository = Repository<Reviewer>;
pub type ReviewRepository = Repository<Review>;

fn to_row<E: Entity>(entity: &E) -> Result<Row, AppError> {
    match serde_json::to_value(entity) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(AppError::Persistence(format!("{} did not encode as a row", E::LABEL))),
        Err(e) => Err(AppError::Persistence(format!("encode {}: {}", E::LABEL, e))),
    }
}

fn from_row<E: Entity>(row: Row) -> Result<E, AppError> {
    serde_json::from_value(Value::Object(row))
        .map_err(|e| AppError::Persistence(format!("decode {}: {}", E::LABEL, e)))
}

fn from_rows<E: Entity>(rows: Vec<Row>) -> Result<Vec<E>, AppError> {
    rows.into_iter().map(from_row).collect()
}

impl<E: Entity> Repository<E> {
    pub async fn exists(uow: &mut dyn Session, id: i32) -> Result<bool, AppError> {
        let rows = uow.fetch_where_in(E::TABLE, "id", &[Value::from(id)]).await?;
        Ok(!rows.is_empty())
    }

    pub async fn get_all(uow: &mut dyn Session) -> Result<Vec<E>, AppError> {
        from_rows(uow.fetch_all(E::TABLE).await?)
    }

    pub async fn get_by_id(uow: &mut dyn Session, id: i32) -> Result<Option<E>, AppError> {
        let rows = uow.fetch_where_in(E::TABLE, "id", &[Value::from(id)]).await?;
        rows.into_iter().next().map(from_row).transpose()
    }

    /// Entities with any of `ids`, ordered by id. Missing ids are skipped.
    pub async fn get_many(uow: &mut dyn Session, ids: &[i32]) -> Result<Vec<E>, AppError> {
        let values: Vec<Value> = ids.iter().map(|id| Value::from(*id)).collect();
        from_rows(uow.fetch_where_in(E::TABLE, "id", &values).await?)
    }

    /// Entities whose `column` equals `value`.
    pub async fn find_by(uow: &mut dyn Session, column: &str, value: Value) -> Result<Vec<E>, AppError> {
        from_rows(uow.fetch_where_in(E::TABLE, column, &[value]).await?)
    }

    /// Inserts `entity` (its id is ignored) and returns it with the assigned id.
    pub async fn create(uow: &mut dyn Session, entity: &E) -> Result<E, AppError> {
        let stored = uow.insert(E::TABLE, &to_row(entity)?).await?;
        let created: E = from_row(stored)?;
        tracing::info!(entity = E::LABEL, id = created.id(), "created");
        Ok(created)
    }

    pub async fn update(uow: &mut dyn Session, entity: &E) -> Result<(), AppError> {
        let affected = uow.update(E::TABLE, entity.id(), &to_row(entity)?).await?;
        if affected == 0 {
            return Err(AppError::Persistence(format!("update {} {} affected no rows", E::LABEL, entity.id())));
        }
        tracing::info!(entity = E::LABEL, id = entity.id(), "updated");
        Ok(())
    }

    pub async fn delete(uow: &mut dyn Session, entity: &E) -> Result<(), AppError> {
        let affected = uow
            .delete_where_in(E::TABLE, "id", &[Value::from(entity.id())])
            .await?;
        if affected == 0 {
            return Err(AppError::Persistence(format!("delete {} {} affected no rows", E::LABEL, entity.id())));
        }
        tracing::info!(entity = E::LABEL, id = entity.id(), "deleted");
        Ok(())
    }
}

/// Ids in `other_column` of join rows whose `column` equals `id`.
async fn linked_ids(
    uow: &mut dyn Session,
    join: &'static Table,
    column: &str,
    id: i32,
    other_column: &str,
) -> Result<Vec<i32>, AppError> {
    let rows = uow.fetch_where_in(join, column, &[Value::from(id)]).await?;
    Ok(rows
        .iter()
        .filter_map(|r| r.get(other_column).and_then(Value::as_i64))
        .filter_map(|v| i32::try_from(v).ok())
        .collect())
}

/// Inserts the join row (pokemon_id, `other_column` = other_id) unless it already exists.
async fn link_pokemon(
    uow: &mut dyn Session,
    join: &'static Table,
    pokemon_id: i32,
    other_column: &str,
    other_id: i32,
) -> Result<(), AppError> {
    let linked = linked_ids(uow, join, "pokemon_id", pokemon_id, other_column).await?;
    if linked.contains(&other_id) {
        return Ok(());
    }
    let mut row = Row::new();
    row.insert("pokemon_id".to_string(), Value::from(pokemon_id));
    row.insert(other_column.to_string(), Value::from(other_id));
    uow.insert(join, &row).await?;
    Ok(())
}
