//! Tests for the restricted expression/statement language.
use nagare::context::Context;
use nagare::error::ExprError;
use nagare::expr::{Value, eval_expression, exec_statement};

fn ctx_with(pairs: &[(&str, Value)]) -> Context {
    let mut ctx = Context::new();
    for (name, value) in pairs {
        ctx.set(*name, value.clone());
    }
    ctx
}

#[test]
fn arithmetic_precedence_and_grouping() {
    let ctx = Context::new();
    assert_eq!(
        eval_expression("1 + 2 * 3", &ctx).unwrap(),
        Value::Number(7.0)
    );
    assert_eq!(
        eval_expression("(1 + 2) * 3", &ctx).unwrap(),
        Value::Number(9.0)
    );
    assert_eq!(
        eval_expression("10 % 4 - -1", &ctx).unwrap(),
        Value::Number(3.0)
    );
}

#[test]
fn comparisons_and_equality() {
    let ctx = ctx_with(&[("x", Value::Number(5.0))]);
    assert_eq!(eval_expression("x > 3", &ctx).unwrap(), Value::Bool(true));
    assert_eq!(eval_expression("x <= 4", &ctx).unwrap(), Value::Bool(false));
    assert_eq!(eval_expression("x == 5", &ctx).unwrap(), Value::Bool(true));
    assert_eq!(
        eval_expression("x != 'five'", &ctx).unwrap(),
        Value::Bool(true)
    );
    // Cross-type equality is simply false, never an error.
    assert_eq!(
        eval_expression("x == 'five'", &ctx).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn boolean_operators_use_truthiness() {
    let ctx = ctx_with(&[
        ("zero", Value::Number(0.0)),
        ("text", Value::Str("hi".to_string())),
    ]);
    assert_eq!(
        eval_expression("zero || text", &ctx).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        eval_expression("zero && text", &ctx).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(eval_expression("!zero", &ctx).unwrap(), Value::Bool(true));
}

#[test]
fn string_concatenation_works_from_either_side() {
    let ctx = ctx_with(&[("n", Value::Number(3.0))]);
    assert_eq!(
        eval_expression("'count: ' + n", &ctx).unwrap(),
        Value::Str("count: 3".to_string())
    );
    assert_eq!(
        eval_expression("n + ' items'", &ctx).unwrap(),
        Value::Str("3 items".to_string())
    );
}

#[test]
fn statement_lists_execute_in_order() {
    let mut ctx = Context::new();
    exec_statement("x = 2; y = x * 10; x++;", &mut ctx).unwrap();
    assert_eq!(ctx.get("x"), Some(&Value::Number(3.0)));
    assert_eq!(ctx.get("y"), Some(&Value::Number(20.0)));
}

#[test]
fn the_ctx_spelling_is_accepted_everywhere() {
    let mut ctx = Context::new();
    exec_statement("ctx.x = 10", &mut ctx).unwrap();
    assert_eq!(ctx.get("x"), Some(&Value::Number(10.0)));
    assert_eq!(
        eval_expression("ctx.x > 5", &ctx).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn division_by_zero_follows_float_semantics() {
    let ctx = Context::new();
    let value = eval_expression("1 / 0", &ctx).unwrap();
    assert!(matches!(value, Value::Number(n) if n.is_infinite()));
}

#[test]
fn type_mismatch_reports_operation_and_value() {
    let ctx = ctx_with(&[("s", Value::Str("abc".to_string()))]);
    let err = eval_expression("s - 1", &ctx).unwrap_err();
    let message = err.to_string();
    assert!(message.contains('-'));
    assert!(message.contains("Number"));
    assert!(message.contains("abc"));
}

#[test]
fn assignment_is_not_an_expression() {
    let ctx = Context::new();
    assert!(matches!(
        eval_expression("x = 5", &ctx),
        Err(ExprError::UnexpectedToken(_))
    ));
}

#[test]
fn evaluating_does_not_touch_the_context() {
    let ctx = ctx_with(&[("x", Value::Number(1.0))]);
    eval_expression("x + 1", &ctx).unwrap();
    assert_eq!(ctx.len(), 1);
    assert_eq!(ctx.get("x"), Some(&Value::Number(1.0)));
}

#[test]
fn garbage_code_reports_where_it_went_wrong() {
    let mut ctx = Context::new();
    assert_eq!(
        exec_statement("x = 1 §", &mut ctx).unwrap_err(),
        ExprError::UnexpectedChar('§')
    );
    assert_eq!(
        exec_statement("x = ", &mut ctx).unwrap_err(),
        ExprError::UnexpectedEnd
    );
}
