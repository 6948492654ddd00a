use super::{Detection, Narrated};
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use log::debug;

/// One generic step when the oracle factors `expr` into something with
/// a grouping but no named pattern applied.
pub fn fallback(oracle: &dyn Oracle, expr: &str) -> Option<Detection> {
  let text = oracle
    .factor(expr)
    .map_err(|e| debug!("factor({expr}) failed: {e}"))
    .ok()?;
  let normalized = oracle.run(expr).unwrap_or_else(|_| expr.to_string());
  if text == expr.trim() || text == normalized || !text.contains('(') {
    return None;
  }
  let step = FactoringStep::new(
    Technique::Other,
    "Factor the expression",
    format!("{normalized} = {text}"),
    format!(
      "No single standard pattern covers {normalized}. Factoring it \
       completely gives {text}."
    ),
  );
  Some(Detection {
    steps: vec![Narrated::claiming(step, &text, normalized)],
    factored: text,
  })
}
