//! Built-in oracle for univariate polynomials with integer
//! coefficients.

mod eval;
mod factor;
mod poly;

use super::{Oracle, OracleError};
use crate::syntax::parse;
use eval::{evaluate, Value};
use log::trace;

fn evaluate_str(text: &str) -> Result<Value, OracleError> {
  let expr = parse(text.trim())?;
  evaluate(&expr)
}

/// Exact arithmetic over `i128` coefficients in a single variable.
/// Overflow and multivariable input are reported as errors rather than
/// approximated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeOracle;

impl Oracle for NativeOracle {
  fn factor(&self, expr: &str) -> Result<String, OracleError> {
    let out = match evaluate_str(expr)? {
      Value::Poly(p) => {
        let factored = factor::factor_poly(&p)?;
        if factored.is_trivial() {
          p.to_polynomial().to_string()
        } else {
          factored.to_string()
        }
      }
      other => other.to_string(),
    };
    trace!("factor({expr}) = {out}");
    Ok(out)
  }

  fn expand(&self, expr: &str) -> Result<String, OracleError> {
    let out = evaluate_str(expr)?.to_string();
    trace!("expand({expr}) = {out}");
    Ok(out)
  }

  fn run(&self, expr: &str) -> Result<String, OracleError> {
    Ok(evaluate_str(expr)?.to_string())
  }

  fn gcd(&self, a: &str, b: &str) -> Result<String, OracleError> {
    match (evaluate_str(a)?, evaluate_str(b)?) {
      (Value::Poly(x), Value::Poly(y)) => {
        Ok(x.gcd(&y)?.to_polynomial().to_string())
      }
      _ => Err(OracleError::Unsupported(format!(
        "gcd of non-polynomials {a} and {b}"
      ))),
    }
  }
}
