//! Projections, FROM-clause targets, joins, and the query tree.

use std::fmt;

use crate::expr::BoolExpr;
use crate::render::{Render, indent};

/// A projection item: an expression with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Column {
    pub expr: String,
    pub alias: Option<String>,
}

impl Column {
    pub fn expr(expr: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

impl Render for Column {
    fn packed(&self) -> String {
        match &self.alias {
            Some(alias) => format!("{} AS {}", self.expr, alias),
            None => self.expr.clone(),
        }
    }

    fn spacious(&self) -> String {
        self.packed()
    }
}

/// An ordered projection list.
///
/// Renders without parentheses: the compact form joins columns with `, `,
/// the expanded form places one column per line. An empty list renders as
/// an empty string in both modes; callers are expected to supply at least
/// one column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct ColumnList(Vec<Column>);

impl ColumnList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, column: Column) {
        self.0.push(column);
    }

    pub fn extend(&mut self, columns: impl IntoIterator<Item = Column>) {
        self.0.extend(columns);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<Column>> for ColumnList {
    fn from(columns: Vec<Column>) -> Self {
        Self(columns)
    }
}

impl FromIterator<Column> for ColumnList {
    fn from_iter<I: IntoIterator<Item = Column>>(columns: I) -> Self {
        Self(columns.into_iter().collect())
    }
}

impl Render for ColumnList {
    fn packed(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| c.packed()).collect();
        parts.join(", ")
    }

    fn spacious(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(|c| c.packed()).collect();
        parts.join(",\n")
    }
}

/// The wrapped source of a table reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TableSource {
    /// A table name or an inline table-valued expression.
    Expr(String),
    /// A nested query, parenthesized when rendered.
    Query(Box<Query>),
}

/// A FROM-clause target with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FromExpr {
    pub source: TableSource,
    pub alias: Option<String>,
}

impl FromExpr {
    pub fn table(expr: impl Into<String>) -> Self {
        Self {
            source: TableSource::Expr(expr.into()),
            alias: None,
        }
    }

    pub fn aliased(expr: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Expr(expr.into()),
            alias: Some(alias.into()),
        }
    }

    pub fn subquery(query: Query) -> Self {
        Self {
            source: TableSource::Query(Box::new(query)),
            alias: None,
        }
    }

    pub fn subquery_aliased(query: Query, alias: impl Into<String>) -> Self {
        Self {
            source: TableSource::Query(Box::new(query)),
            alias: Some(alias.into()),
        }
    }

    fn with_alias(&self, source: String) -> String {
        match &self.alias {
            Some(alias) => format!("{source} AS {alias}"),
            None => source,
        }
    }
}

impl Render for FromExpr {
    fn packed(&self) -> String {
        let source = match &self.source {
            TableSource::Expr(expr) => expr.clone(),
            TableSource::Query(query) => format!("({})", query.packed()),
        };
        self.with_alias(source)
    }

    fn spacious(&self) -> String {
        let source = match &self.source {
            TableSource::Expr(expr) => expr.clone(),
            TableSource::Query(query) => format!("(\n{}\n)", indent(&query.render())),
        };
        self.with_alias(source)
    }
}

/// Type of join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JoinKind {
    Inner,
    Left,
    Right,
    Lateral,
}

impl JoinKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JoinKind::Inner => "INNER JOIN",
            JoinKind::Left => "LEFT JOIN",
            JoinKind::Right => "RIGHT JOIN",
            JoinKind::Lateral => "INNER JOIN LATERAL",
        }
    }
}

/// A join of two sources.
///
/// All variants except [`JoinKind::Lateral`] carry an `ON` condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Join {
    pub kind: JoinKind,
    pub left: SourceExpr,
    pub right: SourceExpr,
    pub on: Option<BoolExpr>,
}

impl Join {
    pub fn inner(left: impl Into<SourceExpr>, right: impl Into<SourceExpr>, on: BoolExpr) -> Self {
        Self {
            kind: JoinKind::Inner,
            left: left.into(),
            right: right.into(),
            on: Some(on),
        }
    }

    pub fn left(left: impl Into<SourceExpr>, right: impl Into<SourceExpr>, on: BoolExpr) -> Self {
        Self {
            kind: JoinKind::Left,
            left: left.into(),
            right: right.into(),
            on: Some(on),
        }
    }

    pub fn right(left: impl Into<SourceExpr>, right: impl Into<SourceExpr>, on: BoolExpr) -> Self {
        Self {
            kind: JoinKind::Right,
            left: left.into(),
            right: right.into(),
            on: Some(on),
        }
    }

    /// A lateral join carries no `ON` clause.
    pub fn lateral(left: impl Into<SourceExpr>, right: impl Into<SourceExpr>) -> Self {
        Self {
            kind: JoinKind::Lateral,
            left: left.into(),
            right: right.into(),
            on: None,
        }
    }
}

impl Render for Join {
    fn packed(&self) -> String {
        let mut text = format!(
            "{} {} {}",
            self.left.packed(),
            self.kind.as_str(),
            self.right.packed()
        );
        if let Some(on) = &self.on {
            text.push_str(" ON ");
            text.push_str(&on.packed());
        }
        text
    }

    fn spacious(&self) -> String {
        let mut text = format!(
            "{}\n{}",
            self.left.render(),
            indent(&format!("{} {}", self.kind.as_str(), self.right.render()))
        );
        if let Some(on) = &self.on {
            text.push('\n');
            text.push_str(&indent(&indent(&format!("ON {}", on.render()))));
        }
        text
    }
}

/// Anything usable as a FROM-clause target: a table reference, a join, or a
/// nested query.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SourceExpr {
    From(FromExpr),
    Join(Box<Join>),
    Query(Box<Query>),
}

impl From<FromExpr> for SourceExpr {
    fn from(from: FromExpr) -> Self {
        SourceExpr::From(from)
    }
}

impl From<Join> for SourceExpr {
    fn from(join: Join) -> Self {
        SourceExpr::Join(Box::new(join))
    }
}

impl From<Query> for SourceExpr {
    fn from(query: Query) -> Self {
        SourceExpr::Query(Box::new(query))
    }
}

impl Render for SourceExpr {
    fn packed(&self) -> String {
        match self {
            SourceExpr::From(from) => from.packed(),
            SourceExpr::Join(join) => join.packed(),
            SourceExpr::Query(query) => format!("({})", query.packed()),
        }
    }

    fn spacious(&self) -> String {
        match self {
            SourceExpr::From(from) => from.spacious(),
            SourceExpr::Join(join) => join.spacious(),
            SourceExpr::Query(query) => format!("(\n{}\n)", indent(&query.render())),
        }
    }
}

/// A SELECT query over a source, with optional WHERE, GROUP BY and QUALIFY
/// clauses appended in that fixed order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Query {
    pub source: SourceExpr,
    pub columns: ColumnList,
    pub where_: Option<BoolExpr>,
    pub group_by: Vec<String>,
    pub qualify: Option<BoolExpr>,
}

impl Query {
    pub fn new(source: impl Into<SourceExpr>, columns: impl IntoIterator<Item = Column>) -> Self {
        Self {
            source: source.into(),
            columns: columns.into_iter().collect(),
            where_: None,
            group_by: Vec::new(),
            qualify: None,
        }
    }

    pub fn where_(mut self, condition: BoolExpr) -> Self {
        self.where_ = Some(condition);
        self
    }

    /// ANDs a condition onto the existing WHERE clause, if any.
    pub fn and_where(mut self, condition: BoolExpr) -> Self {
        self.where_ = Some(match self.where_ {
            Some(existing) => existing.and(condition),
            None => condition,
        });
        self
    }

    pub fn group_by(mut self, exprs: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.group_by.extend(exprs.into_iter().map(Into::into));
        self
    }

    pub fn qualify(mut self, condition: BoolExpr) -> Self {
        self.qualify = Some(condition);
        self
    }
}

impl Render for Query {
    fn packed(&self) -> String {
        let mut text = format!(
            "SELECT {} FROM {}",
            self.columns.packed(),
            self.source.packed()
        );
        if let Some(where_) = &self.where_ {
            text.push_str(" WHERE ");
            text.push_str(&where_.packed());
        }
        if !self.group_by.is_empty() {
            text.push_str(" GROUP BY ");
            text.push_str(&self.group_by.join(", "));
        }
        if let Some(qualify) = &self.qualify {
            text.push_str(" QUALIFY ");
            text.push_str(&qualify.packed());
        }
        text
    }

    fn spacious(&self) -> String {
        // The projection always expands one column per line; other children
        // go through the width threshold and may stay compact.
        let mut text = format!(
            "SELECT\n{}\nFROM\n{}",
            indent(&self.columns.spacious()),
            indent(&self.source.render())
        );
        if let Some(where_) = &self.where_ {
            text.push_str("\nWHERE\n");
            text.push_str(&indent(&where_.render()));
        }
        if !self.group_by.is_empty() {
            text.push_str("\nGROUP BY ");
            text.push_str(&self.group_by.join(", "));
        }
        if let Some(qualify) = &self.qualify {
            text.push_str("\nQUALIFY\n");
            text.push_str(&indent(&qualify.render()));
        }
        text
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for ColumnList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for FromExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for SourceExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl fmt::Display for Query {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
