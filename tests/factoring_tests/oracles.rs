use super::*;

/// Native oracle whose expansion of products is off by one.
struct SkewedOracle;

impl Oracle for SkewedOracle {
  fn factor(&self, expr: &str) -> Result<String, OracleError> {
    NativeOracle.factor(expr)
  }

  fn expand(&self, expr: &str) -> Result<String, OracleError> {
    let expanded = NativeOracle.expand(expr)?;
    if expr.contains(")*(") {
      Ok(format!("{expanded} + 1"))
    } else {
      Ok(expanded)
    }
  }

  fn run(&self, expr: &str) -> Result<String, OracleError> {
    NativeOracle.run(expr)
  }

  fn gcd(&self, a: &str, b: &str) -> Result<String, OracleError> {
    NativeOracle.gcd(a, b)
  }
}

/// Native oracle without a GCD.
struct NoGcdOracle;

impl Oracle for NoGcdOracle {
  fn factor(&self, expr: &str) -> Result<String, OracleError> {
    NativeOracle.factor(expr)
  }

  fn expand(&self, expr: &str) -> Result<String, OracleError> {
    NativeOracle.expand(expr)
  }

  fn run(&self, expr: &str) -> Result<String, OracleError> {
    NativeOracle.run(expr)
  }

  fn gcd(&self, _: &str, _: &str) -> Result<String, OracleError> {
    Err(OracleError::Unsupported("gcd".into()))
  }
}

mod pluggable {
  use super::*;

  #[test]
  fn mismatched_claims_lose_their_verification() {
    let result = Factorizer::new(SkewedOracle).factor_with_steps("x^2 - 4");
    assert_eq!(result.factored, "(x + 2)*(x - 2)");
    let steps = result.steps();
    assert_eq!(steps.len(), 1);
    assert!(steps[0].verification.is_none());
  }

  #[test]
  fn gcf_falls_back_to_the_factored_form() {
    let result = Factorizer::new(NoGcdOracle).factor_with_steps("3*x^2 - 12");
    assert_eq!(result.factored, "3*(x + 2)*(x - 2)");
    let steps = result.steps();
    assert_eq!(steps[0].technique, Technique::Gcf);
    assert_eq!(steps[0].expression, "3*x^2 - 12 = 3*(x^2 - 4)");
  }

  #[test]
  fn boxed_and_borrowed_oracles() {
    let boxed: Box<dyn Oracle> = Box::new(NativeOracle);
    let result = Factorizer::new(boxed).factor_with_steps("x^2 - 4");
    assert_eq!(result.factored, "(x + 2)*(x - 2)");

    let native = NativeOracle;
    let result = Factorizer::new(&native).factor_with_steps("x^2 - 9");
    assert_eq!(result.factored, "(x + 3)*(x - 3)");
  }
}
