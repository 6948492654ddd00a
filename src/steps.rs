//! Values handed back to callers: the factored result and its numbered
//! narration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The factoring technique a step demonstrates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Technique {
  Gcf,
  DifferenceOfSquares,
  PerfectSquare,
  Quadratic,
  Grouping,
  SumDifferenceCubes,
  Other,
}

impl Technique {
  pub fn as_str(&self) -> &'static str {
    match self {
      Technique::Gcf => "gcf",
      Technique::DifferenceOfSquares => "difference-of-squares",
      Technique::PerfectSquare => "perfect-square",
      Technique::Quadratic => "quadratic",
      Technique::Grouping => "grouping",
      Technique::SumDifferenceCubes => "sum-difference-cubes",
      Technique::Other => "other",
    }
  }
}

impl fmt::Display for Technique {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Oracle confirmation that `factored` expands to `expanded`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verification {
  pub factored: String,
  pub expanded: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoringStep {
  pub step_number: usize,
  pub description: String,
  pub expression: String,
  pub explanation: String,
  pub technique: Technique,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub tip: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub verification: Option<Verification>,
}

impl FactoringStep {
  /// An unnumbered step; [`StepLog::push`] assigns the number.
  pub fn new(
    technique: Technique,
    description: impl Into<String>,
    expression: impl Into<String>,
    explanation: impl Into<String>,
  ) -> Self {
    FactoringStep {
      step_number: 0,
      description: description.into(),
      expression: expression.into(),
      explanation: explanation.into(),
      technique,
      tip: None,
      verification: None,
    }
  }

  pub fn with_tip(mut self, tip: impl Into<String>) -> Self {
    self.tip = Some(tip.into());
    self
  }
}

/// Accumulates steps, numbering them 1, 2, 3, ... in push order.
#[derive(Debug, Default)]
pub struct StepLog {
  steps: Vec<FactoringStep>,
}

impl StepLog {
  pub fn push(&mut self, mut step: FactoringStep) -> usize {
    step.step_number = self.steps.len() + 1;
    self.steps.push(step);
    self.steps.len()
  }

  pub fn len(&self) -> usize {
    self.steps.len()
  }

  pub fn is_empty(&self) -> bool {
    self.steps.is_empty()
  }

  pub fn count(&self, technique: Technique) -> usize {
    self.steps.iter().filter(|s| s.technique == technique).count()
  }

  /// `None` when nothing was narrated.
  pub fn into_steps(self) -> Option<Vec<FactoringStep>> {
    (!self.steps.is_empty()).then_some(self.steps)
  }
}

/// Result of pulling the greatest common factor out of an expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GcfExtraction {
  pub gcf: String,
  pub remaining: String,
  pub has_gcf: bool,
}

impl GcfExtraction {
  pub fn none(expr: &str) -> Self {
    GcfExtraction {
      gcf: "1".into(),
      remaining: expr.to_string(),
      has_gcf: false,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FactoringResult {
  pub original: String,
  pub factored: String,
  pub is_factorable: bool,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub error: Option<String>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub steps: Option<Vec<FactoringStep>>,
}

impl FactoringResult {
  pub fn failure(original: &str, message: impl Into<String>) -> Self {
    let message = message.into();
    FactoringResult {
      original: original.to_string(),
      factored: String::new(),
      is_factorable: false,
      error: Some(if message.is_empty() {
        "Invalid expression".into()
      } else {
        message
      }),
      steps: None,
    }
  }

  pub fn not_factorable(original: &str, factored: impl Into<String>) -> Self {
    FactoringResult {
      original: original.to_string(),
      factored: factored.into(),
      is_factorable: false,
      error: None,
      steps: None,
    }
  }

  pub fn steps(&self) -> &[FactoringStep] {
    self.steps.as_deref().unwrap_or(&[])
  }

  /// Techniques in step order.
  pub fn techniques(&self) -> Vec<Technique> {
    self.steps().iter().map(|s| s.technique).collect()
  }
}

impl fmt::Display for FactoringStep {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    writeln!(
      f,
      "Step {}: {} [{}]",
      self.step_number, self.description, self.technique
    )?;
    writeln!(f, "  {}", self.expression)?;
    write!(f, "  {}", self.explanation)?;
    if let Some(tip) = &self.tip {
      write!(f, "\n  Tip: {tip}")?;
    }
    if let Some(v) = &self.verification {
      write!(f, "\n  Check: {} expands to {}", v.factored, v.expanded)?;
    }
    Ok(())
  }
}

impl fmt::Display for FactoringResult {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let original = self.original.trim();
    if let Some(error) = &self.error {
      return write!(f, "Error: {error}");
    }
    if !self.is_factorable {
      return write!(f, "{original} cannot be factored further");
    }
    write!(f, "{original} = {}", self.factored)?;
    for step in self.steps() {
      write!(f, "\n\n{step}")?;
    }
    Ok(())
  }
}
