//! Persisted entities. Field names are column names; see `store::schema` for the tables.

pub mod dto;

use crate::store::schema::{self, Table};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

pub use dto::*;

/// A row type with a serial `id` stored in `TABLE`.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static Table;
    /// Human name used in messages and `Location` paths.
    const LABEL: &'static str;

    fn id(&self) -> i32;
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Pokemon {
    pub id: i32,
    pub name: String,
    pub birth_date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Country {
    pub id: i32,
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Owner {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub gym: Option<String>,
    pub country_id: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Reviewer {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: i32,
    pub title: String,
    pub text: String,
    pub rating: i32,
    pub pokemon_id: i32,
    pub reviewer_id: i32,
}

macro_rules! entity {
    ($ty:ty, $table:expr, $label:literal) => {
        impl Entity for $ty {
            const TABLE: &'static Table = &$table;
            const LABEL: &'static str = $label;

            fn id(&self) -> i32 {
                self.id
            }
        }
    };
}

entity!(Pokemon, schema::POKEMON, "pokemon");
entity!(Category, schema::CATEGORY, "category");
entity!(Country, schema::COUNTRY, "country");
entity!(Owner, schema::OWNER, "owner");
entity!(Reviewer, schema::REVIEWER, "reviewer");
entity!(Review, schema::REVIEW, "review");
