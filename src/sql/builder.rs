//! Builds parameterized INSERT, SELECT, UPDATE, DELETE and DDL from table metadata.

use crate::store::schema::{OnDelete, Table};
use crate::store::Row;
use serde_json::Value;

/// Quote identifier for PostgreSQL (safe: only from table metadata and validated config).
fn quoted(s: &str) -> String {
    format!("\"{}\"", s.replace('"', "\"\""))
}

/// Full qualified table name.
fn qualified_table(schema: &str, table: &str) -> String {
    format!("{}.{}", quoted(schema), quoted(table))
}

#[derive(Debug)]
pub struct QueryBuf {
    pub sql: String,
    pub params: Vec<Value>,
}

impl QueryBuf {
    fn new() -> Self {
        QueryBuf {
            sql: String::new(),
            params: Vec::new(),
        }
    }

    fn push_param(&mut self, v: Value) -> u32 {
        let n = self.params.len() as u32 + 1;
        self.params.push(v);
        n
    }

    /// Pushes `v` and returns its placeholder cast to the column type.
    fn push_cast(&mut self, v: Value, pg_type: &str) -> String {
        let n = self.push_param(v);
        format!("${}::{}", n, pg_type)
    }
}

fn select_column_list(table: &Table) -> String {
    table
        .columns
        .iter()
        .map(|c| quoted(c.name))
        .collect::<Vec<_>>()
        .join(", ")
}

fn order_clause(table: &Table) -> String {
    let keys: Vec<String> = table.primary_key.iter().map(|k| quoted(k)).collect();
    format!(" ORDER BY {}", keys.join(", "))
}

fn pg_type_of<'t>(table: &'t Table, column: &str) -> &'t str {
    table.column(column).map(|c| c.pg_type).unwrap_or("text")
}

/// SELECT every row ordered by primary key.
pub fn select_all(table: &Table, schema: &str) -> QueryBuf {
    let mut q = QueryBuf::new();
    q.sql = format!(
        "SELECT {} FROM {}{}",
        select_column_list(table),
        qualified_table(schema, table.name),
        order_clause(table)
    );
    q
}

/// SELECT rows where `column IN ($1, $2, ...)`, ordered by primary key.
pub fn select_where_in(table: &Table, schema: &str, column: &str, values: &[Value]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let from = qualified_table(schema, table.name);
    let cols = select_column_list(table);
    if values.is_empty() {
        q.sql = format!("SELECT {} FROM {} WHERE 1 = 0", cols, from);
        return q;
    }
    let pg_type = pg_type_of(table, column);
    let placeholders: Vec<String> = values.iter().map(|v| q.push_cast(v.clone(), pg_type)).collect();
    q.sql = format!(
        "SELECT {} FROM {} WHERE {} IN ({}){}",
        cols,
        from,
        quoted(column),
        placeholders.join(", "),
        order_clause(table)
    );
    q
}

/// INSERT one row. Serial columns are left to the database; missing values bind as NULL.
pub fn insert(table: &Table, schema: &str, row: &Row) -> QueryBuf {
    let mut q = QueryBuf::new();
    let mut cols = Vec::new();
    let mut placeholders = Vec::new();
    for c in table.columns.iter().filter(|c| !c.serial) {
        let val = row.get(c.name).cloned().unwrap_or(Value::Null);
        placeholders.push(q.push_cast(val, c.pg_type));
        cols.push(quoted(c.name));
    }
    q.sql = format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING {}",
        qualified_table(schema, table.name),
        cols.join(", "),
        placeholders.join(", "),
        select_column_list(table)
    );
    q
}

/// UPDATE by id: SET every non-key column present in `row`.
/// Returns None when `row` carries nothing to set.
pub fn update_by_id(table: &Table, schema: &str, id: &Value, row: &Row) -> Option<QueryBuf> {
    let mut q = QueryBuf::new();
    let mut sets = Vec::new();
    for c in table.columns.iter().filter(|c| !table.is_key(c.name)) {
        let Some(v) = row.get(c.name) else { continue };
        let rhs = q.push_cast(v.clone(), c.pg_type);
        sets.push(format!("{} = {}", quoted(c.name), rhs));
    }
    if sets.is_empty() {
        return None;
    }
    let id_ph = q.push_cast(id.clone(), pg_type_of(table, "id"));
    q.sql = format!(
        "UPDATE {} SET {} WHERE {} = {}",
        qualified_table(schema, table.name),
        sets.join(", "),
        quoted("id"),
        id_ph
    );
    Some(q)
}

/// DELETE rows where `column IN (...)`.
pub fn delete_where_in(table: &Table, schema: &str, column: &str, values: &[Value]) -> QueryBuf {
    let mut q = QueryBuf::new();
    let pg_type = pg_type_of(table, column);
    let placeholders: Vec<String> = values.iter().map(|v| q.push_cast(v.clone(), pg_type)).collect();
    let condition = if placeholders.is_empty() {
        "1 = 0".to_string()
    } else {
        format!("{} IN ({})", quoted(column), placeholders.join(", "))
    };
    q.sql = format!("DELETE FROM {} WHERE {}", qualified_table(schema, table.name), condition);
    q
}

/// CREATE TABLE IF NOT EXISTS with primary and foreign keys.
pub fn create_table(table: &Table, schema: &str) -> String {
    let mut defs: Vec<String> = table
        .columns
        .iter()
        .map(|c| {
            if c.serial {
                format!("{} SERIAL", quoted(c.name))
            } else if c.nullable {
                format!("{} {}", quoted(c.name), c.pg_type.to_uppercase())
            } else {
                format!("{} {} NOT NULL", quoted(c.name), c.pg_type.to_uppercase())
            }
        })
        .collect();
    let keys: Vec<String> = table.primary_key.iter().map(|k| quoted(k)).collect();
    defs.push(format!("PRIMARY KEY ({})", keys.join(", ")));
    for fk in table.foreign_keys {
        let action = match fk.on_delete {
            OnDelete::Cascade => "CASCADE",
            OnDelete::Restrict => "RESTRICT",
        };
        defs.push(format!(
            "FOREIGN KEY ({}) REFERENCES {} ({}) ON DELETE {}",
            quoted(fk.column),
            qualified_table(schema, fk.references),
            quoted("id"),
            action
        ));
    }
    format!(
        "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
        qualified_table(schema, table.name),
        defs.join(",\n    ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::schema::{POKEMON, POKEMON_CATEGORY, REVIEW};
    use serde_json::json;

    fn row(v: Value) -> Row {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn insert_skips_serial_id_and_casts() {
        let q = insert(&POKEMON, "pokedex", &row(json!({"id": 9, "name": "Pikachu", "birth_date": "1996-02-27"})));
        assert_eq!(
            q.sql,
            r#"INSERT INTO "pokedex"."pokemon" ("name", "birth_date") VALUES ($1::text, $2::date) RETURNING "id", "name", "birth_date""#
        );
        assert_eq!(q.params, vec![json!("Pikachu"), json!("1996-02-27")]);
    }

    #[test]
    fn update_sets_only_present_columns() {
        let q = update_by_id(&REVIEW, "pokedex", &json!(3), &row(json!({"id": 3, "rating": 5}))).unwrap();
        assert_eq!(q.sql, r#"UPDATE "pokedex"."review" SET "rating" = $1::int4 WHERE "id" = $2::int4"#);
        assert_eq!(q.params, vec![json!(5), json!(3)]);
        assert!(update_by_id(&REVIEW, "pokedex", &json!(3), &row(json!({"id": 3}))).is_none());
    }

    #[test]
    fn select_where_in_orders_by_composite_key() {
        let q = select_where_in(&POKEMON_CATEGORY, "s", "category_id", &[json!(1), json!(2)]);
        assert_eq!(
            q.sql,
            r#"SELECT "pokemon_id", "category_id" FROM "s"."pokemon_category" WHERE "category_id" IN ($1::int4, $2::int4) ORDER BY "pokemon_id", "category_id""#
        );
        let empty = select_where_in(&POKEMON, "s", "id", &[]);
        assert!(empty.sql.ends_with("WHERE 1 = 0"));
    }

    #[test]
    fn delete_with_no_values_matches_nothing() {
        let q = delete_where_in(&REVIEW, "s", "id", &[]);
        assert_eq!(q.sql, r#"DELETE FROM "s"."review" WHERE 1 = 0"#);
        assert!(q.params.is_empty());
    }

    #[test]
    fn ddl_carries_keys_and_cascade() {
        let ddl = create_table(&POKEMON_CATEGORY, "pokedex");
        assert!(ddl.starts_with(r#"CREATE TABLE IF NOT EXISTS "pokedex"."pokemon_category""#));
        assert!(ddl.contains(r#"PRIMARY KEY ("pokemon_id", "category_id")"#));
        assert!(ddl.contains(r#"REFERENCES "pokedex"."pokemon" ("id") ON DELETE CASCADE"#));
        let ddl = create_table(&REVIEW, "pokedex");
        assert!(ddl.contains(r#""id" SERIAL"#));
        assert!(ddl.contains(r#"REFERENCES "pokedex"."reviewer" ("id") ON DELETE RESTRICT"#));
    }
}
