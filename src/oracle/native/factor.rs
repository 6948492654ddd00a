use super::poly::{evaluate_poly, integer_divisors, poly_div, Poly};
use crate::numeric::gcd_int;
use crate::oracle::OracleError;
use crate::syntax::{Factorization, Polynomial};

// ─── Factor ─────────────────────────────────────────────────────────

/// Factor over the integers: content and sign first, then powers of the
/// variable, rational roots, and Kronecker's method for what is left.
pub(super) fn factor_poly(p: &Poly) -> Result<Factorization, OracleError> {
  if let Some(c) = p.as_constant() {
    return Ok(Factorization {
      constant: c,
      factors: Vec::new(),
    });
  }

  let sign = if p.lead() < 0 { -1 } else { 1 };
  let constant = p
    .content()
    .checked_mul(sign)
    .ok_or(OracleError::Overflow)?;
  let mut remaining: Vec<i128> =
    p.coeffs.iter().map(|c| c / constant).collect();

  let mut factors: Vec<Vec<i128>> = Vec::new();

  // x^k
  let leading_zeros = remaining.iter().take_while(|&&c| c == 0).count();
  for _ in 0..leading_zeros {
    factors.push(vec![0, 1]);
  }
  remaining.drain(..leading_zeros);

  loop {
    if remaining.len() <= 1 {
      break;
    }
    if remaining.len() == 2 {
      factors.push(std::mem::take(&mut remaining));
      break;
    }
    match find_rational_root(&remaining) {
      Some((num, den)) => {
        let linear = vec![-num, den];
        let (quot, _) = poly_div(&remaining, &linear).ok_or_else(|| {
          OracleError::Evaluation("inexact division by a root".into())
        })?;
        factors.push(linear);
        remaining = quot;
      }
      None => break,
    }
  }

  if remaining.len() > 1 {
    factors.extend(kronecker_split(&remaining));
  }

  let var = p.var.as_deref();
  let mut grouped: Vec<(Vec<i128>, u32)> = Vec::new();
  for f in factors {
    match grouped.iter_mut().find(|(g, _)| *g == f) {
      Some(entry) => entry.1 += 1,
      None => grouped.push((f, 1)),
    }
  }

  Ok(Factorization {
    constant,
    factors: grouped
      .into_iter()
      .map(|(coeffs, count)| (Polynomial::from_coeffs(var, &coeffs), count))
      .collect(),
  })
}

/// A rational root `num/den` (`den > 0`, reduced) of a primitive
/// polynomial with non-zero constant term. Candidates are tried with
/// divisors ascending, `-p/q` before `p/q`.
fn find_rational_root(coeffs: &[i128]) -> Option<(i128, i128)> {
  let c0 = *coeffs.first()?;
  let lead = *coeffs.last()?;
  if c0 == 0 {
    return Some((0, 1));
  }
  for &p in &integer_divisors(c0) {
    for &q in &integer_divisors(lead) {
      if gcd_int(p, q) != 1 {
        continue;
      }
      for num in [-p, p] {
        if evaluate_scaled(coeffs, num, q) == Some(0) {
          return Some((num, q));
        }
      }
    }
  }
  None
}

/// `den^n * P(num/den)`, which is zero exactly when `num/den` is a root.
fn evaluate_scaled(coeffs: &[i128], num: i128, den: i128) -> Option<i128> {
  let n = coeffs.len() - 1;
  let mut total = 0i128;
  for (i, &c) in coeffs.iter().enumerate() {
    let term = c
      .checked_mul(num.checked_pow(i as u32)?)?
      .checked_mul(den.checked_pow((n - i) as u32)?)?;
    total = total.checked_add(term)?;
  }
  Some(total)
}

/// Kronecker's method: split off factors of degree 2..=deg/2 found by
/// interpolating divisor combinations of sample values. Returns the
/// input unchanged when it is irreducible or the search is too large.
fn kronecker_split(coeffs: &[i128]) -> Vec<Vec<i128>> {
  let deg = coeffs.len() - 1;
  // Without rational roots, degree 2 and 3 are irreducible.
  if deg <= 3 {
    return vec![coeffs.to_vec()];
  }
  let max_trial_degree = deg / 2;
  if max_trial_degree > 20 {
    return vec![coeffs.to_vec()];
  }

  let num_points = max_trial_degree + 1;
  let eval_points: Vec<i128> = (0..num_points as i128)
    .flat_map(|i| if i == 0 { vec![0] } else { vec![i, -i] })
    .take(num_points)
    .collect();

  let Some(values) = eval_points
    .iter()
    .map(|&x| evaluate_poly(coeffs, x))
    .collect::<Option<Vec<_>>>()
  else {
    return vec![coeffs.to_vec()];
  };

  for trial_deg in 2..=max_trial_degree {
    let n_pts = trial_deg + 1;
    let divisor_sets: Vec<Vec<i128>> = values[..n_pts]
      .iter()
      .map(|&val| {
        if val == 0 {
          vec![0]
        } else {
          integer_divisors(val)
            .into_iter()
            .flat_map(|d| [d, -d])
            .collect()
        }
      })
      .collect();

    for combo in cartesian_product(&divisor_sets) {
      let Some(mut candidate) =
        lagrange_interpolate_integer(&eval_points[..n_pts], &combo)
      else {
        continue;
      };
      if candidate.len() != trial_deg + 1 {
        continue;
      }
      let Some((mut quot, rem)) = poly_div(coeffs, &candidate) else {
        continue;
      };
      if rem.iter().any(|&c| c != 0) {
        continue;
      }
      if candidate.last().is_some_and(|&c| c < 0) {
        candidate.iter_mut().for_each(|c| *c = -*c);
        quot.iter_mut().for_each(|c| *c = -*c);
      }
      let mut result = kronecker_split(&candidate);
      result.extend(kronecker_split(&quot));
      return result;
    }
  }

  vec![coeffs.to_vec()]
}

/// Cartesian product of divisor sets; empty when it would exceed 10000
/// combinations.
fn cartesian_product(sets: &[Vec<i128>]) -> Vec<Vec<i128>> {
  let total = sets
    .iter()
    .try_fold(1usize, |acc, s| acc.checked_mul(s.len()));
  if total.map_or(true, |t| t > 10000) {
    return vec![];
  }

  let mut result = vec![vec![]];
  for set in sets {
    let mut next = Vec::with_capacity(result.len() * set.len());
    for combo in &result {
      for &val in set {
        let mut extended = combo.clone();
        extended.push(val);
        next.push(extended);
      }
    }
    result = next;
  }
  result
}

/// Newton interpolation through `(xs[i], ys[i])`; `None` unless every
/// divided difference is an integer.
fn lagrange_interpolate_integer(xs: &[i128], ys: &[i128]) -> Option<Vec<i128>> {
  let n = xs.len();
  if n == 0 {
    return None;
  }

  let mut diffs = ys.to_vec();
  for j in 1..n {
    for i in (j..n).rev() {
      let num = diffs[i].checked_sub(diffs[i - 1])?;
      let den = xs[i] - xs[i - j];
      if den == 0 || num % den != 0 {
        return None;
      }
      diffs[i] = num / den;
    }
  }

  // P(x) = d0 + d1 (x - x0) + d2 (x - x0)(x - x1) + ...
  let mut coeffs = vec![0i128; n];
  coeffs[0] = diffs[n - 1];
  for i in (0..n - 1).rev() {
    let mut next = vec![0i128; n];
    for j in (0..n).rev() {
      let shifted = if j > 0 { coeffs[j - 1] } else { 0 };
      next[j] = shifted.checked_sub(xs[i].checked_mul(coeffs[j])?)?;
    }
    next[0] = next[0].checked_add(diffs[i])?;
    coeffs = next;
  }

  while coeffs.len() > 1 && coeffs.last() == Some(&0) {
    coeffs.pop();
  }
  Some(coeffs)
}
