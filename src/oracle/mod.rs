//! The computer-algebra contract the step engine is built on.
//!
//! The engine never does polynomial algebra of its own: every factoring,
//! expansion, simplification and GCD goes through an [`Oracle`]. The
//! crate ships [`NativeOracle`] as the default collaborator.

mod native;

pub use native::NativeOracle;

use crate::syntax::SyntaxError;
use log::trace;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OracleError {
  #[error("Parse error: {0}")]
  Parse(#[from] SyntaxError),
  #[error("Unsupported expression: {0}")]
  Unsupported(String),
  #[error("Evaluation error: {0}")]
  Evaluation(String),
  #[error("Coefficient overflow")]
  Overflow,
}

/// Symbolic operations over a single textual expression grammar with
/// `*` for multiplication, `^` for powers and the usual precedence.
pub trait Oracle {
  /// Fully factored canonical form; the normalized input when the
  /// expression does not factor.
  fn factor(&self, expr: &str) -> Result<String, OracleError>;

  /// Expanded polynomial form.
  fn expand(&self, expr: &str) -> Result<String, OracleError>;

  /// Evaluate and simplify an arbitrary expression, e.g. `sqrt(4*x^2)`
  /// or `(x^2 - 1)/(x - 1)`.
  fn run(&self, expr: &str) -> Result<String, OracleError>;

  /// Greatest common divisor of two polynomials or integers.
  fn gcd(&self, a: &str, b: &str) -> Result<String, OracleError>;
}

impl<T: Oracle + ?Sized> Oracle for &T {
  fn factor(&self, expr: &str) -> Result<String, OracleError> {
    (**self).factor(expr)
  }

  fn expand(&self, expr: &str) -> Result<String, OracleError> {
    (**self).expand(expr)
  }

  fn run(&self, expr: &str) -> Result<String, OracleError> {
    (**self).run(expr)
  }

  fn gcd(&self, a: &str, b: &str) -> Result<String, OracleError> {
    (**self).gcd(a, b)
  }
}

impl<T: Oracle + ?Sized> Oracle for Box<T> {
  fn factor(&self, expr: &str) -> Result<String, OracleError> {
    (**self).factor(expr)
  }

  fn expand(&self, expr: &str) -> Result<String, OracleError> {
    (**self).expand(expr)
  }

  fn run(&self, expr: &str) -> Result<String, OracleError> {
    (**self).run(expr)
  }

  fn gcd(&self, a: &str, b: &str) -> Result<String, OracleError> {
    (**self).gcd(a, b)
  }
}

/// True when both expressions expand to the same text. Oracle failures
/// count as "not equal".
pub fn same_expansion(oracle: &dyn Oracle, a: &str, b: &str) -> bool {
  match (oracle.expand(a), oracle.expand(b)) {
    (Ok(x), Ok(y)) => {
      trace!("compare expansions {x:?} and {y:?}");
      x == y
    }
    _ => false,
  }
}

/// True when the oracle simplifies `expr` to the literal `0`.
pub fn is_zero(oracle: &dyn Oracle, expr: &str) -> bool {
  oracle.run(expr).is_ok_and(|v| v.trim() == "0")
}
