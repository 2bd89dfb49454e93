//! Table metadata shared by the SQL builder, the DDL bootstrap and the in-memory store.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OnDelete {
    /// Dependent rows are removed with the referenced row.
    Cascade,
    /// Deleting a referenced row fails while dependents exist.
    Restrict,
}

#[derive(Debug)]
pub struct Column {
    pub name: &'static str,
    /// PostgreSQL type used in DDL and in `$n::type` casts.
    pub pg_type: &'static str,
    /// Assigned by the store on insert.
    pub serial: bool,
    pub nullable: bool,
}

impl Column {
    pub const fn serial(name: &'static str) -> Self {
        Column { name, pg_type: "int4", serial: true, nullable: false }
    }

    pub const fn required(name: &'static str, pg_type: &'static str) -> Self {
        Column { name, pg_type, serial: false, nullable: false }
    }

    pub const fn optional(name: &'static str, pg_type: &'static str) -> Self {
        Column { name, pg_type, serial: false, nullable: true }
    }
}

#[derive(Debug)]
pub struct ForeignKey {
    pub column: &'static str,
    /// Referenced table; the referenced column is always `id`.
    pub references: &'static str,
    pub on_delete: OnDelete,
}

#[derive(Debug)]
pub struct Table {
    pub name: &'static str,
    pub columns: &'static [Column],
    pub primary_key: &'static [&'static str],
    pub foreign_keys: &'static [ForeignKey],
}

impl Table {
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn is_key(&self, name: &str) -> bool {
        self.primary_key.contains(&name)
    }
}

pub const POKEMON: Table = Table {
    name: "pokemon",
    columns: &[
        Column::serial("id"),
        Column::required("name", "text"),
        Column::required("birth_date", "date"),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const CATEGORY: Table = Table {
    name: "category",
    columns: &[Column::serial("id"), Column::required("name", "text")],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const COUNTRY: Table = Table {
    name: "country",
    columns: &[Column::serial("id"), Column::required("name", "text")],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const OWNER: Table = Table {
    name: "owner",
    columns: &[
        Column::serial("id"),
        Column::required("first_name", "text"),
        Column::required("last_name", "text"),
        Column::optional("gym", "text"),
        Column::required("country_id", "int4"),
    ],
    primary_key: &["id"],
    foreign_keys: &[ForeignKey { column: "country_id", references: "country", on_delete: OnDelete::Restrict }],
};

pub const REVIEWER: Table = Table {
    name: "reviewer",
    columns: &[
        Column::serial("id"),
        Column::required("first_name", "text"),
        Column::required("last_name", "text"),
    ],
    primary_key: &["id"],
    foreign_keys: &[],
};

pub const REVIEW: Table = Table {
    name: "review",
    columns: &[
        Column::serial("id"),
        Column::required("title", "text"),
        Column::required("text", "text"),
        Column::required("rating", "int4"),
        Column::required("pokemon_id", "int4"),
        Column::required("reviewer_id", "int4"),
    ],
    primary_key: &["id"],
    foreign_keys: &[
        ForeignKey { column: "pokemon_id", references: "pokemon", on_delete: OnDelete::Restrict },
        ForeignKey { column: "reviewer_id", references: "reviewer", on_delete: OnDelete::Restrict },
    ],
};

pub const POKEMON_CATEGORY: Table = Table {
    name: "pokemon_category",
    columns: &[Column::required("pokemon_id", "int4"), Column::required("category_id", "int4")],
    primary_key: &["pokemon_id", "category_id"],
    foreign_keys: &[
        ForeignKey { column: "pokemon_id", references: "pokemon", on_delete: OnDelete::Cascade },
        ForeignKey { column: "category_id", references: "category", on_delete: OnDelete::Cascade },
    ],
};

pub const POKEMON_OWNER: Table = Table {
    name: "pokemon_owner",
    columns: &[Column::required("pokemon_id", "int4"), Column::required("owner_id", "int4")],
    primary_key: &["pokemon_id", "owner_id"],
    foreign_keys: &[
        ForeignKey { column: "pokemon_id", references: "pokemon", on_delete: OnDelete::Cascade },
        ForeignKey { column: "owner_id", references: "owner", on_delete: OnDelete::Cascade },
    ],
};

/// Every table, referenced tables before the tables that point at them.
pub const TABLES: &[&Table] = &[
    &POKEMON,
    &CATEGORY,
    &COUNTRY,
    &OWNER,
    &REVIEWER,
    &REVIEW,
    &POKEMON_CATEGORY,
    &POKEMON_OWNER,
];
