//! The restricted expression/statement language embedded in node code.
//!
//! Node code strings are compiled on every evaluation: lexed
//! ([`lexer`]), parsed by recursive descent ([`parser`]), and walked
//! against the run's [`Context`] ([`eval`]). The grammar covers
//! arithmetic, comparisons, boolean operators with short-circuiting,
//! string concatenation, and simple assignment forms (`=`, `+=`, `++`,
//! …). Bare identifiers resolve against context entries only — there is
//! no access to anything outside the explicit variable store, and the
//! editor's `ctx.x` spelling is accepted as an alias for `x`.

mod eval;
mod lexer;
mod parser;
mod value;

pub use value::Value;

use crate::context::Context;
use crate::error::ExprError;

/// Evaluates `code` as a single expression against the context.
///
/// Expressions in the restricted grammar cannot mutate the context.
pub fn eval_expression(code: &str, ctx: &Context) -> Result<Value, ExprError> {
    let tokens = lexer::tokenize(code)?;
    let expr = parser::parse_expression(tokens)?;
    eval::eval_expr(&expr, ctx)
}

/// Executes `code` as a `;`-separated statement list, mutating the context
/// in place.
pub fn exec_statement(code: &str, ctx: &mut Context) -> Result<(), ExprError> {
    let tokens = lexer::tokenize(code)?;
    let statements = parser::parse_statements(tokens)?;
    for statement in &statements {
        eval::exec_stmt(statement, ctx)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn assignment_then_expression() {
        let mut ctx = Context::new();
        exec_statement("x = 5", &mut ctx).unwrap();
        assert_eq!(eval_expression("x * 2 + 1", &ctx).unwrap(), Value::Number(11.0));
    }

    #[test]
    fn undefined_variable_reads_like_a_reference_error() {
        let ctx = Context::new();
        let err = eval_expression("missing > 3", &ctx).unwrap_err();
        assert_eq!(err.to_string(), "missing is not defined");
    }

    #[test]
    fn string_concatenation() {
        let mut ctx = Context::new();
        exec_statement("name = 'world'; greeting = 'hello ' + name", &mut ctx).unwrap();
        assert_eq!(
            ctx.get("greeting"),
            Some(&Value::Str("hello world".to_string()))
        );
    }

    #[test]
    fn short_circuit_skips_the_right_side() {
        let ctx = Context::new();
        // `missing` is undefined, but the left side already decides.
        assert_eq!(
            eval_expression("false && missing", &ctx).unwrap(),
            Value::Bool(false)
        );
        assert_eq!(
            eval_expression("true || missing", &ctx).unwrap(),
            Value::Bool(true)
        );
    }

    #[test]
    fn compound_assignment_requires_an_existing_variable() {
        let mut ctx = Context::new();
        assert!(exec_statement("x += 1", &mut ctx).is_err());
        exec_statement("x = 1; x += 2; x *= 3", &mut ctx).unwrap();
        assert_eq!(ctx.get("x"), Some(&Value::Number(9.0)));
    }

    #[test]
    fn comparison_on_strings_is_a_type_mismatch() {
        let mut ctx = Context::new();
        exec_statement("s = 'abc'", &mut ctx).unwrap();
        assert!(matches!(
            eval_expression("s > 3", &ctx),
            Err(ExprError::TypeMismatch { .. })
        ));
    }
}
