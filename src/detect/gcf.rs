use super::{expanded, factored, group, leading_factor, Narrated};
use crate::oracle::{Oracle, OracleError};
use crate::steps::{FactoringStep, GcfExtraction, Technique};
use crate::syntax::render_factor;
use log::debug;

/// Pull the greatest common factor out of `expr`.
///
/// The GCD is folded across the additive terms of the expanded form. If
/// the oracle cannot do that, the leading constant and monomial factors
/// of its `factor` output are used instead.
pub fn extract_gcf(oracle: &dyn Oracle, expr: &str) -> GcfExtraction {
  let Some(poly) = expanded(oracle, expr) else {
    return GcfExtraction::none(expr);
  };
  let terms = poly.term_strings();
  if terms.len() < 2 {
    return GcfExtraction::none(expr);
  }

  let gcf = match fold_gcd(oracle, &terms) {
    Ok(g) => g,
    Err(e) => {
      debug!("gcd fold over {terms:?} failed: {e}");
      match gcf_from_factorization(oracle, expr) {
        Some(g) => g,
        None => return GcfExtraction::none(expr),
      }
    }
  };
  if gcf == "1" || gcf == "-1" {
    return GcfExtraction::none(expr);
  }
  // A negative leading term moves its sign into the factor.
  let gcf = if poly.leading().is_some_and(|m| m.coeff < 0) {
    match oracle.run(&format!("-({gcf})")) {
      Ok(negated) => negated,
      Err(e) => {
        debug!("negating {gcf} failed: {e}");
        return GcfExtraction::none(expr);
      }
    }
  } else {
    gcf
  };

  match oracle.run(&format!("({expr})/({gcf})")) {
    Ok(remaining) => GcfExtraction {
      gcf,
      remaining,
      has_gcf: true,
    },
    Err(e) => {
      debug!("dividing {expr} by {gcf} failed: {e}");
      GcfExtraction::none(expr)
    }
  }
}

fn fold_gcd(
  oracle: &dyn Oracle,
  terms: &[String],
) -> Result<String, OracleError> {
  let mut acc = terms[0].clone();
  for term in &terms[1..] {
    acc = oracle.gcd(&acc, term)?;
  }
  Ok(acc)
}

fn gcf_from_factorization(oracle: &dyn Oracle, expr: &str) -> Option<String> {
  let (_, f) = factored(oracle, expr)?;
  let mut parts = Vec::new();
  if f.constant.abs() > 1 {
    parts.push(f.constant.abs().to_string());
  }
  parts.extend(
    f.non_constant()
      .filter(|(base, _)| base.term_count() == 1)
      .map(|(base, power)| render_factor(base, *power)),
  );
  (!parts.is_empty()).then(|| parts.join("*"))
}

/// The step that shows `expr = gcf*(remaining)`.
pub fn narrate_gcf(expr: &str, extraction: &GcfExtraction) -> Narrated {
  let GcfExtraction { gcf, remaining, .. } = extraction;
  let product = format!("{}*{}", leading_factor(gcf), group(remaining));
  let step = FactoringStep::new(
    Technique::Gcf,
    "Factor out the greatest common factor",
    format!("{expr} = {product}"),
    format!(
      "Every term of {expr} is divisible by {gcf}. Dividing each term by \
       {gcf} leaves {remaining}."
    ),
  )
  .with_tip("Always look for a common factor before trying anything else.");
  Narrated::claiming(step, product, expr)
}
