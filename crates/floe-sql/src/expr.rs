//! Boolean expressions and their connective algebra.
//!
//! Chains of AND/OR are kept as flat operand sequences rather than binary
//! trees: combining two conjunctions splices their operands together, and a
//! one-element group of the opposite connective collapses to its operand.

use std::fmt;

use crate::render::{Render, indent};

/// Display data for a logical connective.
struct Connective {
    keyword: &'static str,
    label: &'static str,
}

const CONJUNCTION: Connective = Connective {
    keyword: "AND",
    label: "conjunction",
};

const DISJUNCTION: Connective = Connective {
    keyword: "OR",
    label: "disjunction",
};

/// A Boolean expression that yields TRUE, FALSE or NULL.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BoolExpr {
    /// An opaque fragment with a Boolean result, such as an equality test,
    /// a comparison, or `IS [NOT] NULL`.
    Predicate(String),
    /// A conjunction (logical AND) over an ordered operand sequence.
    Conjunction(Vec<BoolExpr>),
    /// A disjunction (logical OR) over an ordered operand sequence.
    Disjunction(Vec<BoolExpr>),
}

impl BoolExpr {
    pub fn predicate(expr: impl Into<String>) -> Self {
        BoolExpr::Predicate(expr.into())
    }

    /// Builds a conjunction from an operand sequence.
    ///
    /// The sequence may still be empty or hold a single operand while a
    /// larger expression is being assembled; emptiness is only checked when
    /// the composite is rendered.
    pub fn conjunction(ops: impl IntoIterator<Item = BoolExpr>) -> Self {
        BoolExpr::Conjunction(ops.into_iter().collect())
    }

    /// Builds a disjunction from an operand sequence.
    pub fn disjunction(ops: impl IntoIterator<Item = BoolExpr>) -> Self {
        BoolExpr::Disjunction(ops.into_iter().collect())
    }

    /// Combines two expressions under AND.
    ///
    /// Conjunction operands are spliced in rather than nested, so
    /// `a.and(b).and(c)` and `a.and(b.and(c))` produce the same flat
    /// three-operand conjunction. A disjunction stays a single nested
    /// operand, collapsing first if it holds exactly one element.
    pub fn and(self, other: BoolExpr) -> BoolExpr {
        let mut ops = match self {
            BoolExpr::Conjunction(ops) => ops,
            disj @ BoolExpr::Disjunction(_) => vec![disj.unwrap()],
            pred @ BoolExpr::Predicate(_) => vec![pred],
        };
        match other {
            pred @ BoolExpr::Predicate(_) => ops.push(pred),
            BoolExpr::Conjunction(rest) => ops.extend(rest),
            disj @ BoolExpr::Disjunction(_) => ops.push(disj.unwrap()),
        }
        BoolExpr::Conjunction(ops)
    }

    /// Combines two expressions under OR, mirroring [`BoolExpr::and`].
    pub fn or(self, other: BoolExpr) -> BoolExpr {
        let mut ops = match self {
            BoolExpr::Disjunction(ops) => ops,
            conj @ BoolExpr::Conjunction(_) => vec![conj.unwrap()],
            pred @ BoolExpr::Predicate(_) => vec![pred],
        };
        match other {
            pred @ BoolExpr::Predicate(_) => ops.push(pred),
            BoolExpr::Disjunction(rest) => ops.extend(rest),
            conj @ BoolExpr::Conjunction(_) => ops.push(conj.unwrap()),
        }
        BoolExpr::Disjunction(ops)
    }

    /// Collapses a single-operand composite to its lone operand; any other
    /// expression is returned unchanged.
    pub fn unwrap(self) -> BoolExpr {
        match self {
            BoolExpr::Conjunction(mut ops) | BoolExpr::Disjunction(mut ops)
                if ops.len() == 1 =>
            {
                ops.remove(0)
            }
            other => other,
        }
    }
}

fn packed_logical(ops: &[BoolExpr], connective: &Connective) -> String {
    assert!(!ops.is_empty(), "empty {}", connective.label);
    let sep = format!(" {} ", connective.keyword);
    let parts: Vec<String> = ops.iter().map(|op| op.packed()).collect();
    format!("({})", parts.join(&sep))
}

fn spacious_logical(ops: &[BoolExpr], connective: &Connective) -> String {
    assert!(!ops.is_empty(), "empty {}", connective.label);
    let sep = format!("\n{}\n", connective.keyword);
    let parts: Vec<String> = ops.iter().map(|op| indent(&op.spacious())).collect();
    format!("(\n{}\n)", parts.join(&sep))
}

impl Render for BoolExpr {
    fn packed(&self) -> String {
        match self {
            BoolExpr::Predicate(expr) => expr.clone(),
            BoolExpr::Conjunction(ops) => packed_logical(ops, &CONJUNCTION),
            BoolExpr::Disjunction(ops) => packed_logical(ops, &DISJUNCTION),
        }
    }

    fn spacious(&self) -> String {
        match self {
            BoolExpr::Predicate(expr) => expr.clone(),
            BoolExpr::Conjunction(ops) => spacious_logical(ops, &CONJUNCTION),
            BoolExpr::Disjunction(ops) => spacious_logical(ops, &DISJUNCTION),
        }
    }
}

impl fmt::Display for BoolExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
