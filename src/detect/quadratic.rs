use super::difference_of_squares::is_difference_shape;
use super::{expanded, factored, Detection, Narrated};
use crate::numeric::{find_factor_pairs, FactorPair};
use crate::oracle::Oracle;
use crate::steps::{FactoringStep, Technique};
use crate::syntax::{Monomial, Polynomial};
use log::debug;

/// Degree two with a linear or constant term next to the square term.
/// The bare `a x^2 - c` difference belongs to difference of squares.
pub fn is_quadratic_shape(poly: &Polynomial) -> bool {
  poly.degree() == 2
    && poly.coefficient(2) != 0
    && (poly.coefficient(1) != 0 || poly.coefficient(0) != 0)
    && !is_difference_shape(poly)
}

/// Factor `a x^2 + b x + c` by searching the factor pairs of `a*c` for
/// one that sums to `b`.
pub fn quadratic(oracle: &dyn Oracle, expr: &str) -> Option<Detection> {
  let poly = expanded(oracle, expr)?;
  if !is_quadratic_shape(&poly) {
    debug!("{poly} is not a quadratic trinomial");
    return None;
  }
  let var = poly.var()?;
  let (a, b, c) = (
    poly.coefficient(2),
    poly.coefficient(1),
    poly.coefficient(0),
  );
  let product = a.checked_mul(c)?;
  let pair = find_factor_pairs(product)
    .into_iter()
    .find(|(p, q)| p.checked_add(*q) == Some(b));

  let mut steps = vec![Narrated::plain(FactoringStep::new(
    Technique::Quadratic,
    "Identify the coefficients",
    format!("a = {a}, b = {b}, c = {c}"),
    format!("{poly} has the form a*{var}^2 + b*{var} + c."),
  ))];

  let Some((p, q)) = pair else {
    let (text, structure) = factored(oracle, expr)?;
    if text == poly.to_string() || structure.is_trivial() {
      debug!("no factor pair of {product} sums to {b}");
      return None;
    }
    steps.push(Narrated::claiming(
      FactoringStep::new(
        Technique::Quadratic,
        "Factor the quadratic",
        format!("{poly} = {text}"),
        format!(
          "No pair of integers has product {product} and sum {b}, but the \
           quadratic still factors as {text}."
        ),
      ),
      &text,
      poly.to_string(),
    ));
    return Some(Detection {
      steps,
      factored: text,
    });
  };

  steps.push(Narrated::plain(pair_step(product, b, (p, q))));

  if a == 1 {
    let first = Polynomial::from_coeffs(Some(var), &[p, 1]);
    let factored = if p == q {
      format!("({first})^2")
    } else {
      format!("({first})*({})", Polynomial::from_coeffs(Some(var), &[q, 1]))
    };
    let step = FactoringStep::new(
      Technique::Quadratic,
      "Write the factored form",
      format!("{poly} = {factored}"),
      format!(
        "With p = {p} and q = {q}, {var}^2 + b*{var} + c = \
         ({var} + p)({var} + q)."
      ),
    );
    steps.push(Narrated::claiming(step, &factored, poly.to_string()));
    return Some(Detection { steps, factored });
  }

  let split = join_terms(
    var,
    &[
      Monomial { coeff: a, exp: 2 },
      Monomial { coeff: p, exp: 1 },
      Monomial { coeff: q, exp: 1 },
      Monomial { coeff: c, exp: 0 },
    ],
  );
  let middle = Monomial { coeff: b, exp: 1 }.render(Some(var));
  steps.push(Narrated::claiming(
    FactoringStep::new(
      Technique::Grouping,
      "Split the middle term",
      format!("{poly} = {split}"),
      format!(
        "Rewrite {middle} as {} + {} using the pair {p} and {q}.",
        Monomial { coeff: p, exp: 1 }.render(Some(var)),
        Monomial { coeff: q, exp: 1 }.render(Some(var)),
      ),
    )
    .with_tip(
      "Splitting the middle term turns the trinomial into four terms \
       that can be grouped in pairs.",
    ),
    &split,
    poly.to_string(),
  ));

  let (text, _) = factored(oracle, expr)?;
  steps.push(Narrated::claiming(
    FactoringStep::new(
      Technique::Grouping,
      "Factor by grouping",
      format!("{poly} = {text}"),
      "Factor each pair of terms, then pull out the binomial they share.",
    ),
    &text,
    poly.to_string(),
  ));
  Some(Detection {
    steps,
    factored: text,
  })
}

fn pair_step(product: i128, sum: i128, (p, q): FactorPair) -> FactoringStep {
  FactoringStep::new(
    Technique::Quadratic,
    "Find two numbers",
    format!(
      "{} * {} = {product}, {} + {} = {sum}",
      signed(p),
      signed(q),
      signed(p),
      signed(q)
    ),
    format!(
      "We need two integers whose product is a*c = {product} and whose sum \
       is b = {sum}. Checking the factor pairs of {product}, the pair {p} \
       and {q} works."
    ),
  )
  .with_tip("List the factor pairs of a*c and check each sum.")
}

fn signed(n: i128) -> String {
  if n < 0 {
    format!("({n})")
  } else {
    n.to_string()
  }
}

/// Terms joined without combining like powers.
fn join_terms(var: &str, terms: &[Monomial]) -> String {
  let mut out = String::new();
  for (i, m) in terms.iter().enumerate() {
    if i == 0 {
      out.push_str(&m.render(Some(var)));
    } else if m.coeff < 0 {
      let positive = Monomial {
        coeff: -m.coeff,
        exp: m.exp,
      };
      out.push_str(&format!(" - {}", positive.render(Some(var))));
    } else {
      out.push_str(&format!(" + {}", m.render(Some(var))));
    }
  }
  out
}
