//! Law-style properties of the connective algebra and the rendering modes.

use floe_sql::*;
use proptest::prelude::*;

fn collapse(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

proptest! {
    #[test]
    fn and_chains_flatten_regardless_of_association(
        a in "[a-z]{1,12}",
        b in "[a-z]{1,12}",
        c in "[a-z]{1,12}",
    ) {
        let left = BoolExpr::predicate(a.as_str())
            .and(BoolExpr::predicate(b.as_str()))
            .and(BoolExpr::predicate(c.as_str()));
        let right = BoolExpr::predicate(a.as_str())
            .and(BoolExpr::predicate(b.as_str()).and(BoolExpr::predicate(c.as_str())));
        let flat = BoolExpr::conjunction([
            BoolExpr::predicate(a.as_str()),
            BoolExpr::predicate(b.as_str()),
            BoolExpr::predicate(c.as_str()),
        ]);
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(&left, &flat);
        prop_assert_eq!(left.packed(), flat.packed());
        prop_assert_eq!(right.spacious(), flat.spacious());
    }

    #[test]
    fn or_chains_flatten_regardless_of_association(
        a in "[a-z]{1,12}",
        b in "[a-z]{1,12}",
        c in "[a-z]{1,12}",
    ) {
        let left = BoolExpr::predicate(a.as_str())
            .or(BoolExpr::predicate(b.as_str()))
            .or(BoolExpr::predicate(c.as_str()));
        let right = BoolExpr::predicate(a.as_str())
            .or(BoolExpr::predicate(b.as_str()).or(BoolExpr::predicate(c.as_str())));
        prop_assert_eq!(&left, &right);
        prop_assert_eq!(left.packed(), format!("({a} OR {b} OR {c})"));
    }

    #[test]
    fn single_operand_group_merges_directly(
        a in "[a-z]{1,12}",
        b in "[a-z]{1,12}",
        x in "[a-z]{1,12}",
    ) {
        let conj = BoolExpr::predicate(a.as_str())
            .and(BoolExpr::predicate(b.as_str()))
            .and(BoolExpr::disjunction([BoolExpr::predicate(x.as_str())]));
        let flat = BoolExpr::conjunction([
            BoolExpr::predicate(a.as_str()),
            BoolExpr::predicate(b.as_str()),
            BoolExpr::predicate(x.as_str()),
        ]);
        prop_assert_eq!(conj, flat);
    }

    #[test]
    fn packed_and_spacious_denote_the_same_tokens(
        ops in prop::collection::vec("[a-z0-9_]{1,16}( [=<>] [0-9]{1,4})?", 1..6),
        disjunction in any::<bool>(),
    ) {
        let operands = ops.iter().map(|op| BoolExpr::predicate(op.as_str()));
        let expr = if disjunction {
            BoolExpr::disjunction(operands)
        } else {
            BoolExpr::conjunction(operands)
        };
        prop_assert_eq!(collapse(&expr.packed()), collapse(&expr.spacious()));
    }

    #[test]
    fn display_obeys_the_width_threshold(
        ops in prop::collection::vec("[a-z]{1,30}", 1..8),
    ) {
        let expr = BoolExpr::conjunction(ops.iter().map(|op| BoolExpr::predicate(op.as_str())));
        let expected = if expr.packed().len() < MAX_WIDTH {
            expr.packed()
        } else {
            expr.spacious()
        };
        prop_assert_eq!(expr.to_string(), expected);
    }

    #[test]
    fn query_modes_denote_the_same_tokens(
        table in "[a-z]{1,12}",
        cols in prop::collection::vec("[a-z]{1,10}", 1..5),
        cond in "[a-z]{1,10} = [0-9]{1,4}",
    ) {
        let query = Query::new(
            FromExpr::table(table.as_str()),
            cols.iter().map(|c| Column::expr(c.as_str())),
        )
        .where_(BoolExpr::predicate(cond.as_str()));
        prop_assert_eq!(collapse(&query.packed()), collapse(&query.spacious()));
    }
}
