use serde::{Deserialize, Serialize};

/// How far the difference-of-squares narration descends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NestingPolicy {
  /// Keep splitting `a - b` factors that are themselves differences of
  /// squares, e.g. `x^4 - 16` then `x^2 - 4`.
  #[default]
  Recursive,
  /// Narrate only the outermost split.
  SinglePass,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FactorConfig {
  pub nesting: NestingPolicy,
  /// Absolute tolerance of the perfect-power middle-term check.
  pub tolerance: f64,
  pub include_tips: bool,
  /// Names tried, in order, for the substituted variable.
  pub substitution_vars: Vec<String>,
}

impl Default for FactorConfig {
  fn default() -> Self {
    FactorConfig {
      nesting: NestingPolicy::Recursive,
      tolerance: 1e-9,
      include_tips: true,
      substitution_vars: ["u", "t", "w", "z"].map(String::from).to_vec(),
    }
  }
}

impl FactorConfig {
  /// The first substitution name that differs from `var`.
  pub fn fresh_variable(&self, var: &str) -> Option<&str> {
    self
      .substitution_vars
      .iter()
      .map(String::as_str)
      .find(|v| *v != var)
  }
}
