/// Column definitions for ad-hoc table creation
use crate::error::{MixtapeError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Constraint attached to a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ColumnConstraint {
    /// `PRIMARY KEY`
    PrimaryKey,
    /// `NOT NULL`
    NotNull,
}

impl ColumnConstraint {
    /// SQL keyword(s) for this constraint
    pub fn as_sql(self) -> &'static str {
        match self {
            Self::PrimaryKey => "PRIMARY KEY",
            Self::NotNull => "NOT NULL",
        }
    }
}

/// A single column of a table blueprint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    /// Column name, never empty
    pub name: String,
    /// SQL type, e.g. `INTEGER` or `TEXT`
    pub sql_type: String,
    /// Constraints, rendered in a stable order
    pub constraints: BTreeSet<ColumnConstraint>,
}

impl ColumnSpec {
    /// Create a column without constraints
    ///
    /// # Errors
    /// Returns `InvalidInput` if `name` is blank
    pub fn new(name: impl Into<String>, sql_type: impl Into<String>) -> Result<Self> {
        let name = name.into().trim().to_string();
        if name.is_empty() {
            return Err(MixtapeError::invalid_input("column name must not be empty"));
        }
        Ok(Self {
            name,
            sql_type: sql_type.into().trim().to_uppercase(),
            constraints: BTreeSet::new(),
        })
    }

    /// Add a constraint
    #[must_use]
    pub fn with(mut self, constraint: ColumnConstraint) -> Self {
        self.constraints.insert(constraint);
        self
    }

    /// Parse `name:TYPE[:pk][:notnull]`
    ///
    /// # Errors
    /// Returns `InvalidInput` for a missing type or an unknown flag
    pub fn parse(raw: &str) -> Result<Self> {
        let mut parts = raw.split(':');
        let name = parts.next().unwrap_or_default();
        let sql_type = parts
            .next()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| MixtapeError::invalid_input(format!("column '{raw}' has no type")))?;

        let mut column = Self::new(name, sql_type)?;
        for flag in parts {
            let constraint = match flag.trim().to_ascii_lowercase().as_str() {
                "pk" | "primary" | "primary_key" => ColumnConstraint::PrimaryKey,
                "notnull" | "not_null" | "nn" => ColumnConstraint::NotNull,
                other => {
                    return Err(MixtapeError::invalid_input(format!(
                        "unknown column flag '{other}'"
                    )))
                }
            };
            column = column.with(constraint);
        }
        Ok(column)
    }
}

impl fmt::Display for ColumnSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.name, self.sql_type)?;
        for constraint in &self.constraints {
            write!(f, " {}", constraint.as_sql())?;
        }
        Ok(())
    }
}
