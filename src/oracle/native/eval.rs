use super::poly::Poly;
use crate::oracle::OracleError;
use crate::syntax::{binary, expr_to_string, negate, BinaryOperator, Expr};
use std::fmt;

const MAX_EXPONENT: i128 = 64;

/// Result of evaluating an expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) enum Value {
  Poly(Poly),
  /// `sqrt(p)` of a polynomial that is not a perfect square.
  Radical(Poly),
  /// Anything left unevaluated, such as an inexact quotient.
  Opaque(Expr),
}

impl Value {
  fn to_expr(&self) -> Expr {
    match self {
      Value::Poly(p) => p.to_polynomial().to_expr(),
      Value::Radical(p) => Expr::FunctionCall {
        name: "sqrt".into(),
        args: vec![p.to_polynomial().to_expr()],
      },
      Value::Opaque(e) => e.clone(),
    }
  }
}

impl fmt::Display for Value {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Value::Poly(p) => write!(f, "{}", p.to_polynomial()),
      other => f.write_str(&expr_to_string(&other.to_expr())),
    }
  }
}

fn opaque(op: BinaryOperator, a: &Value, b: &Value) -> Value {
  Value::Opaque(binary(op, a.to_expr(), b.to_expr()))
}

pub(super) fn evaluate(expr: &Expr) -> Result<Value, OracleError> {
  match expr {
    Expr::Integer(n) => Ok(Value::Poly(Poly::constant(*n))),
    Expr::Identifier(name) => Ok(Value::Poly(Poly::variable(name))),
    Expr::UnaryOp { operand, .. } => match evaluate(operand)? {
      Value::Poly(p) => Ok(Value::Poly(p.neg()?)),
      other => Ok(Value::Opaque(negate(other.to_expr()))),
    },
    Expr::BinaryOp { op, left, right } => {
      let a = evaluate(left)?;
      let b = evaluate(right)?;
      match op {
        BinaryOperator::Plus => add(&a, &b),
        BinaryOperator::Minus => subtract(&a, &b),
        BinaryOperator::Times => multiply(&a, &b),
        BinaryOperator::Divide => divide(&a, &b),
        BinaryOperator::Power => power(&a, &b),
      }
    }
    Expr::FunctionCall { name, args } => match (name.as_str(), args.as_slice())
    {
      ("sqrt", [arg]) => sqrt(evaluate(arg)?),
      _ => Err(OracleError::Unsupported(format!(
        "{name} with {} arguments",
        args.len()
      ))),
    },
  }
}

fn add(a: &Value, b: &Value) -> Result<Value, OracleError> {
  match (a, b) {
    (Value::Poly(x), Value::Poly(y)) => Ok(Value::Poly(x.add(y)?)),
    _ => Ok(opaque(BinaryOperator::Plus, a, b)),
  }
}

fn subtract(a: &Value, b: &Value) -> Result<Value, OracleError> {
  match (a, b) {
    (Value::Poly(x), Value::Poly(y)) => Ok(Value::Poly(x.sub(y)?)),
    _ if a == b => Ok(Value::Poly(Poly::constant(0))),
    _ => Ok(opaque(BinaryOperator::Minus, a, b)),
  }
}

fn multiply(a: &Value, b: &Value) -> Result<Value, OracleError> {
  match (a, b) {
    (Value::Poly(x), Value::Poly(y)) => Ok(Value::Poly(x.mul(y)?)),
    (Value::Radical(x), Value::Radical(y)) if x == y => {
      Ok(Value::Poly(x.clone()))
    }
    _ => Ok(opaque(BinaryOperator::Times, a, b)),
  }
}

fn divide(a: &Value, b: &Value) -> Result<Value, OracleError> {
  match (a, b) {
    (Value::Poly(x), Value::Poly(y)) => match x.div_exact(y)? {
      Some(q) => Ok(Value::Poly(q)),
      None => Ok(opaque(BinaryOperator::Divide, a, b)),
    },
    _ => Ok(opaque(BinaryOperator::Divide, a, b)),
  }
}

fn power(base: &Value, exponent: &Value) -> Result<Value, OracleError> {
  let k = match exponent {
    Value::Poly(p) => p.as_constant(),
    _ => None,
  }
  .filter(|k| (0..=MAX_EXPONENT).contains(k))
  .ok_or_else(|| {
    OracleError::Unsupported(format!(
      "exponents must be integers from 0 to {MAX_EXPONENT}"
    ))
  })? as u32;

  match base {
    Value::Poly(p) => Ok(Value::Poly(p.pow(k)?)),
    Value::Radical(p) if k % 2 == 0 => Ok(Value::Poly(p.pow(k / 2)?)),
    _ => Ok(opaque(BinaryOperator::Power, base, exponent)),
  }
}

fn sqrt(arg: Value) -> Result<Value, OracleError> {
  match arg {
    Value::Poly(p) => Ok(match p.sqrt() {
      Some(root) => Value::Poly(root),
      None => Value::Radical(p),
    }),
    other => Ok(Value::Opaque(Expr::FunctionCall {
      name: "sqrt".into(),
      args: vec![other.to_expr()],
    })),
  }
}
