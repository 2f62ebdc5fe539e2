//! Snapshot tests for rendered SQL.

use floe_sql::*;

fn pred(expr: &str) -> BoolExpr {
    BoolExpr::predicate(expr)
}

#[test]
fn test_packed_query_with_all_clauses() {
    let query = Query::new(
        FromExpr::aliased("orders", "o"),
        [Column::expr("o.id"), Column::aliased("o.total", "total")],
    )
    .where_(pred("o.total > 100").and(pred("o.cancelled_at IS NULL")))
    .group_by(["o.id", "o.total"])
    .qualify(pred("rn = 1"));

    insta::assert_snapshot!(
        query.packed(),
        @"SELECT o.id, o.total AS total FROM orders AS o WHERE (o.total > 100 AND o.cancelled_at IS NULL) GROUP BY o.id, o.total QUALIFY rn = 1"
    );
}

#[test]
fn test_spacious_query() {
    let query = Query::new(
        FromExpr::table("source"),
        [
            Column::aliased("a", "alias"),
            Column::expr("b"),
            Column::expr("c"),
        ],
    )
    .where_(pred("a > 1").and(pred("b IS NOT NULL")));

    insta::assert_snapshot!(query.spacious(), @r"
    SELECT
        a AS alias,
        b,
        c
    FROM
        source
    WHERE
        (a > 1 AND b IS NOT NULL)
    ");
}

#[test]
fn test_spacious_boolean_expression() {
    let expr = pred("a").or(pred("b").and(pred("c")));

    insta::assert_snapshot!(expr.spacious(), @r"
    (
        a
    OR
        (
            b
        AND
            c
        )
    )
    ");
}

#[test]
fn test_lateral_join_under_inner_join() {
    let join = Join::inner(
        Join::lateral(
            FromExpr::aliased("address", "a"),
            FromExpr::aliased("FLATTEN(INPUT => a.phone_numbers)", "p"),
        ),
        FromExpr::aliased("country", "c"),
        pred("a.country_id = c.id"),
    );

    insta::assert_snapshot!(join.spacious(), @r"
    address AS a INNER JOIN LATERAL FLATTEN(INPUT => a.phone_numbers) AS p
        INNER JOIN country AS c
            ON a.country_id = c.id
    ");
}

#[test]
fn test_subquery_source() {
    let inner = Query::new(
        FromExpr::table("payments"),
        [Column::expr("customer_id"), Column::aliased("SUM(amount)", "total")],
    )
    .group_by(["customer_id"]);
    let outer = Query::new(
        FromExpr::subquery_aliased(inner, "totals"),
        [Column::expr("customer_id")],
    )
    .where_(pred("total > 1000"));

    insta::assert_snapshot!(
        outer.packed(),
        @"SELECT customer_id FROM (SELECT customer_id, SUM(amount) AS total FROM payments GROUP BY customer_id) AS totals WHERE total > 1000"
    );
}
