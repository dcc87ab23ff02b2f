//! Ad-hoc table creation from column specs
//!
//! The blueprint is plain caller-owned state: build it up column by column,
//! then render or execute it.

use mixtape_core::ColumnSpec;
use serde::{Deserialize, Serialize};
use sqlx::SqlitePool;

use crate::error::{Result, StorageError};

/// A table to be created
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableBlueprint {
    pub table: String,
    pub columns: Vec<ColumnSpec>,
}

impl TableBlueprint {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: Vec::new(),
        }
    }

    /// Append a column
    #[must_use]
    pub fn column(mut self, column: ColumnSpec) -> Self {
        self.columns.push(column);
        self
    }

    /// Render `CREATE TABLE IF NOT EXISTS ...`
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for a bad table or column name, an empty column
    /// list, or a duplicated column
    pub fn create_statement(&self) -> Result<String> {
        check_identifier("table", &self.table)?;
        if self.columns.is_empty() {
            return Err(StorageError::InvalidInput(format!(
                "table '{}' has no columns",
                self.table
            )));
        }

        let mut seen = std::collections::HashSet::new();
        for column in &self.columns {
            check_identifier("column", &column.name)?;
            check_sql_type(&column.sql_type)?;
            if !seen.insert(column.name.to_ascii_lowercase()) {
                return Err(StorageError::InvalidInput(format!(
                    "duplicate column '{}'",
                    column.name
                )));
            }
        }

        let columns = self
            .columns
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        Ok(format!(
            "CREATE TABLE IF NOT EXISTS {} ({})",
            self.table, columns
        ))
    }
}

fn check_identifier(kind: &str, name: &str) -> Result<()> {
    let mut chars = name.chars();
    let valid = match chars.next() {
        Some(first) => {
            (first.is_ascii_alphabetic() || first == '_')
                && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidInput(format!(
            "invalid {kind} name '{name}'"
        )))
    }
}

// Types like VARCHAR(255) or DECIMAL(10,2) are fine; statement separators
// and quotes are not.
fn check_sql_type(sql_type: &str) -> Result<()> {
    let valid = !sql_type.is_empty()
        && sql_type
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, ' ' | '(' | ')' | ',' | '_'))
        && sql_type.matches('(').count() == sql_type.matches(')').count();
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidInput(format!(
            "invalid column type '{sql_type}'"
        )))
    }
}

/// Execute the blueprint against a `SQLite` database
pub async fn create_table(pool: &SqlitePool, blueprint: &TableBlueprint) -> Result<String> {
    let statement = blueprint.create_statement()?;
    sqlx::query(&statement).execute(pool).await?;
    tracing::info!("Created table '{}'", blueprint.table);
    Ok(statement)
}
