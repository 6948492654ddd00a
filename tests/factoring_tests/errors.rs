use super::*;

mod oracle_errors {
  use super::*;

  #[test]
  fn malformed_input() {
    let result = factor_with_steps("x^2 +");
    let error = result.error.unwrap();
    assert!(error.starts_with("Parse error"), "{error}");
    assert_eq!(result.factored, "");
    assert!(!result.is_factorable);
    assert!(result.steps.is_none());
  }

  #[test]
  fn multivariable_input() {
    let result = factor_with_steps("x*y + x");
    let error = result.error.unwrap();
    assert!(error.starts_with("Unsupported expression"), "{error}");
    assert_eq!(result.factored, "");
  }

  #[test]
  fn fractional_exponents() {
    let result = factor_with_steps("x^(1/2) - 1");
    assert!(result.error.is_some());
  }

  #[test]
  fn typed_errors() {
    let factorizer = Factorizer::new(NativeOracle);
    assert_eq!(
      factorizer.try_factor_with_steps(" ").unwrap_err(),
      stepfactor::FactorError::EmptyInput
    );
    assert!(matches!(
      factorizer.try_factor_with_steps("x^2 +").unwrap_err(),
      stepfactor::FactorError::Oracle(OracleError::Parse(_))
    ));
  }
}

mod validation {
  use super::*;

  #[test]
  fn validate_expression_asks_the_oracle() {
    assert!(validate_expression("x^2 - 4"));
    assert!(validate_expression("sqrt(x^2 + 1)"));
    assert!(!validate_expression("x^2 +"));
    assert!(!validate_expression(""));
    assert!(!validate_expression("x + y"));
  }
}

mod plain_factoring {
  use super::*;

  #[test]
  fn factor_expression_has_no_steps() {
    let result = factor_expression("x^2 - 4");
    assert_eq!(result.factored, "(x + 2)*(x - 2)");
    assert!(result.is_factorable);
    assert!(result.steps.is_none());
  }

  #[test]
  fn compares_with_the_trimmed_text() {
    let result = factor_expression(" x^2 + 1 ");
    assert!(!result.is_factorable);
    assert_eq!(result.factored, "x^2 + 1");
  }

  #[test]
  fn rejects_blank_input() {
    let result = factor_expression("");
    assert_eq!(result.error.as_deref(), Some("Please enter an expression"));
  }
}
