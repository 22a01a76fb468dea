use super::parser::{AssignOp, BinaryOp, Expr, Stmt, UnaryOp};
use super::value::Value;
use crate::context::Context;
use crate::error::ExprError;

/// Evaluates an expression tree against the context. Expressions in the
/// restricted grammar are side-effect free, so the context is borrowed
/// immutably.
pub(super) fn eval_expr(expr: &Expr, ctx: &Context) -> Result<Value, ExprError> {
    match expr {
        Expr::Literal(value) => Ok(value.clone()),
        Expr::Var(name) => ctx
            .get(name)
            .cloned()
            .ok_or_else(|| ExprError::UndefinedVariable(name.clone())),
        Expr::Unary(op, inner) => {
            let value = eval_expr(inner, ctx)?;
            match op {
                UnaryOp::Not => Ok(Value::Bool(!value.is_truthy())),
                UnaryOp::Neg => match value {
                    Value::Number(n) => Ok(Value::Number(-n)),
                    found => Err(type_mismatch("-", "Number", found)),
                },
            }
        }
        Expr::Binary(op, lhs, rhs) => match op {
            // Short-circuit forms evaluate the right side lazily.
            BinaryOp::And => {
                let left = eval_expr(lhs, ctx)?;
                if !left.is_truthy() {
                    return Ok(Value::Bool(false));
                }
                Ok(Value::Bool(eval_expr(rhs, ctx)?.is_truthy()))
            }
            BinaryOp::Or => {
                let left = eval_expr(lhs, ctx)?;
                if left.is_truthy() {
                    return Ok(Value::Bool(true));
                }
                Ok(Value::Bool(eval_expr(rhs, ctx)?.is_truthy()))
            }
            _ => {
                let left = eval_expr(lhs, ctx)?;
                let right = eval_expr(rhs, ctx)?;
                binary(*op, left, right)
            }
        },
    }
}

/// Executes one statement, mutating the context in place.
pub(super) fn exec_stmt(stmt: &Stmt, ctx: &mut Context) -> Result<(), ExprError> {
    match stmt {
        Stmt::Assign { name, op, value } => {
            let rhs = eval_expr(value, ctx)?;
            let next = match op {
                AssignOp::Set => rhs,
                AssignOp::Add | AssignOp::Sub | AssignOp::Mul | AssignOp::Div => {
                    let current = ctx
                        .get(name)
                        .cloned()
                        .ok_or_else(|| ExprError::UndefinedVariable(name.clone()))?;
                    let bin_op = match op {
                        AssignOp::Add => BinaryOp::Add,
                        AssignOp::Sub => BinaryOp::Sub,
                        AssignOp::Mul => BinaryOp::Mul,
                        _ => BinaryOp::Div,
                    };
                    binary(bin_op, current, rhs)?
                }
            };
            ctx.set(name.clone(), next);
            Ok(())
        }
        Stmt::Incr { name, delta } => {
            let current = ctx
                .get(name)
                .cloned()
                .ok_or_else(|| ExprError::UndefinedVariable(name.clone()))?;
            match current {
                Value::Number(n) => {
                    ctx.set(name.clone(), Value::Number(n + delta));
                    Ok(())
                }
                found => Err(type_mismatch(if *delta > 0.0 { "++" } else { "--" }, "Number", found)),
            }
        }
        Stmt::Expr(expr) => {
            eval_expr(expr, ctx)?;
            Ok(())
        }
    }
}

fn binary(op: BinaryOp, left: Value, right: Value) -> Result<Value, ExprError> {
    match op {
        // `+` concatenates as soon as either side is a string.
        BinaryOp::Add => match (left, right) {
            (Value::Number(l), Value::Number(r)) => Ok(Value::Number(l + r)),
            (Value::Str(l), r) => Ok(Value::Str(format!("{}{}", l, r))),
            (l, Value::Str(r)) => Ok(Value::Str(format!("{}{}", l, r))),
            (found, _) => Err(type_mismatch("+", "Number", found)),
        },
        BinaryOp::Sub => numeric(op, left, right, |l, r| l - r),
        BinaryOp::Mul => numeric(op, left, right, |l, r| l * r),
        BinaryOp::Div => numeric(op, left, right, |l, r| l / r),
        BinaryOp::Rem => numeric(op, left, right, |l, r| l % r),
        BinaryOp::Lt => compare(op, left, right, |l, r| l < r),
        BinaryOp::LtEq => compare(op, left, right, |l, r| l <= r),
        BinaryOp::Gt => compare(op, left, right, |l, r| l > r),
        BinaryOp::GtEq => compare(op, left, right, |l, r| l >= r),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::NotEq => Ok(Value::Bool(left != right)),
        // Handled in eval_expr for short-circuiting.
        BinaryOp::And | BinaryOp::Or => unreachable!("short-circuit ops evaluated eagerly"),
    }
}

fn numeric<F>(op: BinaryOp, left: Value, right: Value, f: F) -> Result<Value, ExprError>
where
    F: Fn(f64, f64) -> f64,
{
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Number(f(l, r))),
        (Value::Number(_), found) | (found, _) => Err(type_mismatch(op.symbol(), "Number", found)),
    }
}

fn compare<F>(op: BinaryOp, left: Value, right: Value, f: F) -> Result<Value, ExprError>
where
    F: Fn(f64, f64) -> bool,
{
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => Ok(Value::Bool(f(l, r))),
        (Value::Number(_), found) | (found, _) => Err(type_mismatch(op.symbol(), "Number", found)),
    }
}

fn type_mismatch(op: &str, expected: &str, found: Value) -> ExprError {
    ExprError::TypeMismatch {
        operation: op.to_string(),
        expected: expected.to_string(),
        found,
    }
}
