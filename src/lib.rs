//! Step-by-step polynomial factoring.
//!
//! ```
//! let result = stepfactor::factor_with_steps("x^2 - 4");
//! assert_eq!(result.factored, "(x + 2)*(x - 2)");
//! assert!(result.is_factorable);
//! ```

use thiserror::Error;

mod builder;
pub mod config;
pub mod detect;
pub mod numeric;
pub mod oracle;
pub mod steps;
pub mod syntax;

pub use config::{FactorConfig, NestingPolicy};
pub use oracle::{NativeOracle, Oracle, OracleError};
pub use steps::{
  FactoringResult, FactoringStep, GcfExtraction, Technique, Verification,
};

use builder::StepBuilder;
use log::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FactorError {
  #[error("Please enter an expression")]
  EmptyInput,
  #[error(transparent)]
  Oracle(#[from] OracleError),
}

/// A sample input and what it demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExampleExpression {
  pub expression: &'static str,
  pub description: &'static str,
}

pub const EXAMPLE_EXPRESSIONS: &[ExampleExpression] = &[
  ExampleExpression {
    expression: "x^2 - 4",
    description: "Difference of squares",
  },
  ExampleExpression {
    expression: "x^2 + 5*x + 6",
    description: "Quadratic trinomial",
  },
  ExampleExpression {
    expression: "x^2 - 6*x + 9",
    description: "Perfect square trinomial",
  },
  ExampleExpression {
    expression: "x^3 - 8",
    description: "Difference of cubes",
  },
  ExampleExpression {
    expression: "2*x^2 + 8*x + 8",
    description: "Quadratic with common factor",
  },
  ExampleExpression {
    expression: "x^4 - 16",
    description: "Difference of fourth powers",
  },
];

/// Factors expressions through an [`Oracle`] and explains how.
#[derive(Debug, Clone, Default)]
pub struct Factorizer<O: Oracle = NativeOracle> {
  oracle: O,
  config: FactorConfig,
}

impl<O: Oracle> Factorizer<O> {
  pub fn new(oracle: O) -> Self {
    Factorizer {
      oracle,
      config: FactorConfig::default(),
    }
  }

  pub fn with_config(oracle: O, config: FactorConfig) -> Self {
    Factorizer { oracle, config }
  }

  pub fn config(&self) -> &FactorConfig {
    &self.config
  }

  pub fn oracle(&self) -> &O {
    &self.oracle
  }

  /// Factor `expression` and narrate the techniques that lead there.
  ///
  /// Failures are reported in [`FactoringResult::error`] with an empty
  /// `factored` field.
  pub fn factor_with_steps(&self, expression: &str) -> FactoringResult {
    match self.try_factor_with_steps(expression) {
      Ok(result) => result,
      Err(e) => {
        debug!("factoring {expression:?} failed: {e}");
        FactoringResult::failure(expression, e.to_string())
      }
    }
  }

  pub fn try_factor_with_steps(
    &self,
    expression: &str,
  ) -> Result<FactoringResult, FactorError> {
    StepBuilder::new(&self.oracle, &self.config, expression).run()
  }

  /// Factor without narration. `is_factorable` is true when the
  /// oracle's answer differs from the trimmed input text.
  pub fn factor_expression(&self, expression: &str) -> FactoringResult {
    let trimmed = expression.trim();
    if trimmed.is_empty() {
      return FactoringResult::failure(
        expression,
        FactorError::EmptyInput.to_string(),
      );
    }
    match self.oracle.factor(trimmed) {
      Ok(factored) => FactoringResult {
        original: expression.to_string(),
        is_factorable: factored != trimmed,
        factored,
        error: None,
        steps: None,
      },
      Err(e) => FactoringResult::failure(expression, e.to_string()),
    }
  }

  /// True when the oracle can evaluate `expression`.
  pub fn validate_expression(&self, expression: &str) -> bool {
    !expression.trim().is_empty() && self.oracle.run(expression).is_ok()
  }
}

/// [`Factorizer::factor_with_steps`] with the native oracle and the
/// default configuration.
pub fn factor_with_steps(expression: &str) -> FactoringResult {
  Factorizer::new(NativeOracle).factor_with_steps(expression)
}

/// [`Factorizer::factor_expression`] with the native oracle.
pub fn factor_expression(expression: &str) -> FactoringResult {
  Factorizer::new(NativeOracle).factor_expression(expression)
}

/// [`Factorizer::validate_expression`] with the native oracle.
pub fn validate_expression(expression: &str) -> bool {
  Factorizer::new(NativeOracle).validate_expression(expression)
}
