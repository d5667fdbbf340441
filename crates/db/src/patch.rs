//! Partial-update (`PATCH`) statement construction.
//!
//! A [`PartialUpdate`] is declared with the table's mutable columns in a fixed
//! priority order. Callers then `set` only the fields they were given; the
//! generated statement touches exactly those columns, in declaration order
//! regardless of the order `set` was called, followed by a `WHERE` on the
//! row id:
//!
//! ```text
//! UPDATE movies SET name = $1, rating = $2 WHERE movie_id = $3
//! ```
//!
//! With no fields set the statement degrades to a self-assignment of the id
//! column, which is valid SQL and leaves the row unchanged while still
//! reporting whether it exists.

use cinedex_core::types::{Date, DbId};
use sqlx::PgExecutor;

/// A value bound to one `SET` assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum PatchValue {
    Text(String),
    Date(Date),
    Float(f64),
}

impl From<String> for PatchValue {
    fn from(value: String) -> Self {
        PatchValue::Text(value)
    }
}

impl From<Date> for PatchValue {
    fn from(value: Date) -> Self {
        PatchValue::Date(value)
    }
}

impl From<f64> for PatchValue {
    fn from(value: f64) -> Self {
        PatchValue::Float(value)
    }
}

/// Builder for a parameterized `UPDATE ... SET ... WHERE <id> = $n` statement.
#[derive(Debug, Clone)]
pub struct PartialUpdate {
    table: &'static str,
    id_column: &'static str,
    columns: &'static [&'static str],
    /// One slot per entry in `columns`.
    values: Vec<Option<PatchValue>>,
}

impl PartialUpdate {
    pub fn new(
        table: &'static str,
        id_column: &'static str,
        columns: &'static [&'static str],
    ) -> Self {
        Self {
            table,
            id_column,
            columns,
            values: vec![None; columns.len()],
        }
    }

    /// Assign `value` to `column`. Setting the same column twice keeps the
    /// last value.
    ///
    /// # Panics
    ///
    /// Panics if `column` is not one of the declared mutable columns; column
    /// names are compile-time constants so this is a programming error.
    pub fn set(mut self, column: &str, value: impl Into<PatchValue>) -> Self {
        let slot = self
            .columns
            .iter()
            .position(|c| *c == column)
            .unwrap_or_else(|| panic!("column '{column}' is not patchable on {}", self.table));
        self.values[slot] = Some(value.into());
        self
    }

    /// Assign `value` to `column` only when present.
    pub fn set_opt<V: Into<PatchValue>>(self, column: &str, value: Option<V>) -> Self {
        match value {
            Some(v) => self.set(column, v),
            None => self,
        }
    }

    /// True when no column has been assigned.
    pub fn is_empty(&self) -> bool {
        self.values.iter().all(Option::is_none)
    }

    /// Assignments in column-priority order.
    pub fn assignments(&self) -> Vec<(&'static str, &PatchValue)> {
        self.columns
            .iter()
            .zip(&self.values)
            .filter_map(|(column, value)| value.as_ref().map(|v| (*column, v)))
            .collect()
    }

    /// Positional index of the placeholder bound to the row id.
    pub fn id_placeholder(&self) -> usize {
        self.assignments().len() + 1
    }

    /// Render the statement text.
    pub fn sql(&self) -> String {
        let mut sql = format!("UPDATE {} SET", self.table);
        let mut param_idx = 1usize;

        for (column, _) in self.assignments() {
            sql.push_str(&format!(" {column} = ${param_idx},"));
            param_idx += 1;
        }
        if param_idx == 1 {
            let id = self.id_column;
            sql.push_str(&format!(" {id} = {id},"));
        }

        // Strip exactly one trailing separator before the WHERE clause.
        if sql.ends_with(',') {
            sql.pop();
        }
        sql.push_str(&format!(" WHERE {} = ${param_idx}", self.id_column));
        sql
    }

    /// Execute against row `id`, returning the number of rows affected
    /// (0 when no such row exists).
    pub async fn execute<'e, E>(&self, executor: E, id: DbId) -> Result<u64, sqlx::Error>
    where
        E: PgExecutor<'e>,
    {
        let sql = self.sql();
        let mut query = sqlx::query(&sql);
        for (_, value) in self.assignments() {
            query = match value {
                PatchValue::Text(s) => query.bind(s.as_str()),
                PatchValue::Date(d) => query.bind(*d),
                PatchValue::Float(f) => query.bind(*f),
            };
        }
        let result = query.bind(id).execute(executor).await?;
        Ok(result.rows_affected())
    }
}
