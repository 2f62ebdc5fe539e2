//! Table and column definitions for `CREATE TABLE` emission.

use std::fmt;
use std::sync::LazyLock;

use floe_sql::{Identifier, escape_string};
use regex::Regex;
use thiserror::Error;

use crate::types::DataType;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no default value for column {column}")]
    MissingDefault { column: String },
}

// Quoted 'YYYY-MM-DD HH:MM:SS' literals, which Snowflake would otherwise
// read as strings.
static TIMESTAMP_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^'\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2}'$").expect("valid pattern")
});

/// A column definition within a table.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    name: Identifier,
    data_type: DataType,
    nullable: bool,
    default: Option<String>,
    description: Option<String>,
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: DataType) -> Self {
        Self {
            name: Identifier::new(name),
            data_type,
            nullable: true,
            default: None,
            description: None,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    pub fn default_value(mut self, default: impl Into<String>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    /// The expression emitted after `DEFAULT`.
    pub fn default_expr(&self) -> Result<String, Error> {
        match &self.default {
            Some(default) => Ok(self.coerce_default(default)),
            None => Err(Error::MissingDefault {
                column: self.name.raw().to_string(),
            }),
        }
    }

    fn coerce_default(&self, default: &str) -> String {
        if matches!(self.data_type, DataType::DateTime { .. })
            && TIMESTAMP_LITERAL.is_match(default)
        {
            format!("TIMESTAMP {default}")
        } else {
            default.to_string()
        }
    }

    pub fn comment(&self) -> Option<String> {
        self.description.as_deref().map(escape_string)
    }

    /// `{name} {type}[ NOT NULL][ DEFAULT ..][ COMMENT '..']`
    pub fn column_spec(&self) -> String {
        format!("{} {}", self.name, self.data_spec())
    }

    pub fn data_spec(&self) -> String {
        let mut spec = self.data_type.to_string();
        if !self.nullable {
            spec.push_str(" NOT NULL");
        }
        if let Some(default) = &self.default {
            spec.push_str(" DEFAULT ");
            spec.push_str(&self.coerce_default(default));
        }
        if let Some(comment) = self.comment() {
            spec.push_str(" COMMENT ");
            spec.push_str(&comment);
        }
        spec
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.column_spec())
    }
}

/// A table definition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Table {
    name: Identifier,
    columns: Vec<Column>,
    description: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            name: Identifier::new(name),
            columns: columns.into_iter().collect(),
            description: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn name(&self) -> &Identifier {
        &self.name
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Emits the statement that creates the table.
    ///
    /// `replace` switches between `CREATE` and `CREATE OR REPLACE`.
    pub fn create_stmt(&self, replace: bool) -> String {
        let definitions: Vec<String> = self.columns.iter().map(|c| c.column_spec()).collect();
        let or_replace = if replace { " OR REPLACE" } else { "" };
        let comment = match &self.description {
            Some(text) => format!("\nCOMMENT = {}", escape_string(text)),
            None => String::new(),
        };
        format!(
            "CREATE{or_replace} TABLE {} (\n{}\n){comment};",
            self.name,
            definitions.join(",\n")
        )
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.create_stmt(false))
    }
}
