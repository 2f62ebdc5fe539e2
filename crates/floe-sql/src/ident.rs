//! Identifiers in Snowflake SQL expressions.

use std::collections::HashSet;
use std::fmt;
use std::sync::OnceLock;

// Reserved and limited keywords, minus those that can still be used as an
// identifier in a SHOW command.
#[rustfmt::skip]
const KEYWORDS: &[&str] = &[
    "ALL", "ALTER", "AND", "ANY", "AS", "BETWEEN", "BY", "CASE", "CAST", "CHECK", "COLUMN", "CONNECT", "CONSTRAINT",
    "CREATE", "CROSS", "CURRENT", "DELETE", "DISTINCT", "DROP", "ELSE", "EXISTS", "FALSE", "FOLLOWING", "FOR", "FROM",
    "FULL", "GRANT", "GROUP", "HAVING", "ILIKE", "IN", "INCREMENT", "INNER", "INSERT", "INTERSECT", "INTO", "IS",
    "JOIN", "LATERAL", "LEFT", "LIKE", "LOCALTIME", "LOCALTIMESTAMP", "MINUS", "NATURAL", "NOT", "NULL", "OF", "ON",
    "OR", "ORDER", "QUALIFY", "REGEXP", "REVOKE", "RIGHT", "RLIKE", "ROW", "ROWS", "SAMPLE", "SELECT", "SET", "SOME",
    "START", "TABLE", "TABLESAMPLE", "THEN", "TO", "TRIGGER", "TRUE", "UNION", "UNIQUE", "UPDATE", "USING", "VALUES",
    "WHEN", "WHENEVER", "WHERE", "WITH",
];

static KEYWORD_SET: OnceLock<HashSet<&'static str>> = OnceLock::new();

fn keyword_set() -> &'static HashSet<&'static str> {
    KEYWORD_SET.get_or_init(|| KEYWORDS.iter().copied().collect())
}

fn is_reserved(name: &str) -> bool {
    keyword_set().contains(name.to_ascii_uppercase().as_str())
}

/// A schema, table or column identifier, optionally with a VARIANT path.
///
/// Names that collide with a reserved word are escaped with a trailing
/// underscore so they never trip the parser. Path components are separated
/// by a forward slash and always quoted when converted into a string,
/// joined with the Snowflake colon accessor syntax.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Identifier {
    name: String,
    path: Option<String>,
}

impl Identifier {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: None,
        }
    }

    pub fn with_path(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: Some(path.into()),
        }
    }

    /// The unescaped identifier.
    pub fn raw(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_reserved(&self.name) {
            write!(f, "{}_", self.name)?;
        } else {
            f.write_str(&self.name)?;
        }
        if let Some(path) = &self.path {
            for component in path.split('/') {
                write!(f, ":\"{}\"", component.replace('"', "\"\""))?;
            }
        }
        Ok(())
    }
}

/// Quotes an identifier, escaping reserved words and VARIANT path segments.
pub fn quote(name: &str, path: Option<&str>) -> String {
    match path {
        Some(path) => Identifier::with_path(name, path).to_string(),
        None => Identifier::new(name).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_is_untouched() {
        assert_eq!(Identifier::new("customer").to_string(), "customer");
        assert_eq!(Identifier::new("customer").raw(), "customer");
    }

    #[test]
    fn test_reserved_word_gains_underscore() {
        assert_eq!(Identifier::new("order").to_string(), "order_");
        assert_eq!(Identifier::new("SELECT").to_string(), "SELECT_");
        assert_eq!(Identifier::new("Qualify").to_string(), "Qualify_");
    }

    #[test]
    fn test_path_components_are_quoted() {
        assert_eq!(
            Identifier::with_path("payload", "contact/phone").to_string(),
            "payload:\"contact\":\"phone\""
        );
        assert_eq!(
            Identifier::with_path("payload", "odd\"key").to_string(),
            "payload:\"odd\"\"key\""
        );
    }

    #[test]
    fn test_quote_helper() {
        assert_eq!(quote("table", None), "table_");
        assert_eq!(quote("payload", Some("a/b")), "payload:\"a\":\"b\"");
    }
}
