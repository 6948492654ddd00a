//! Integer helpers used by the detectors. Only [`is_perfect_square`]
//! talks to the oracle.

use crate::oracle::{is_zero, Oracle};
use crate::syntax::Polynomial;
use log::trace;

/// Trial division stops here, so pairs and divisors whose smaller side
/// is larger than this are not found.
pub const DIVISOR_SEARCH_LIMIT: u32 = 1 << 20;

/// `(f1, f2)` with `f1 * f2` equal to the product being split.
pub type FactorPair = (i128, i128);

/// Every integer pair multiplying to `n`, with all sign combinations
/// consistent with the sign of `n`. Ordered by the smaller absolute
/// factor, then `(i, j)`, `(j, i)` and their negated counterparts.
/// The smaller absolute factor is at most [`DIVISOR_SEARCH_LIMIT`].
pub fn find_factor_pairs(n: i128) -> Vec<FactorPair> {
  let mut pairs = Vec::new();
  if n == 0 {
    return pairs;
  }
  let abs = n.unsigned_abs();
  let mut i: u128 = 1;
  while i <= u128::from(DIVISOR_SEARCH_LIMIT)
    && i.checked_mul(i).is_some_and(|sq| sq <= abs)
  {
    if abs % i == 0 {
      let (a, b) = (i as i128, (abs / i) as i128);
      let candidates: [FactorPair; 4] = if n > 0 {
        [(a, b), (b, a), (-a, -b), (-b, -a)]
      } else {
        [(a, -b), (-a, b), (b, -a), (-b, a)]
      };
      for pair in candidates {
        if !pairs.contains(&pair) {
          pairs.push(pair);
        }
      }
    }
    i += 1;
  }
  pairs
}

/// Euclid's algorithm on absolute values.
pub fn gcd_int(a: i128, b: i128) -> i128 {
  let (mut a, mut b) = (a.abs(), b.abs());
  while b != 0 {
    let t = b;
    b = a % b;
    a = t;
  }
  a
}

/// Exact square root of a non-negative integer.
pub fn integer_sqrt(n: i128) -> Option<i128> {
  if n < 0 {
    return None;
  }
  let mut r = (n as f64).sqrt() as i128;
  while r > 0 && r.checked_mul(r).map_or(true, |sq| sq > n) {
    r -= 1;
  }
  while (r + 1).checked_mul(r + 1).is_some_and(|sq| sq <= n) {
    r += 1;
  }
  (r * r == n).then_some(r)
}

/// Exact cube root, keeping the sign.
pub fn integer_cbrt(n: i128) -> Option<i128> {
  let abs = n.checked_abs()?;
  let mut r = (abs as f64).cbrt().round() as i128;
  let cube = |v: i128| v.checked_mul(v).and_then(|sq| sq.checked_mul(v));
  while r > 0 && cube(r).map_or(true, |c| c > abs) {
    r -= 1;
  }
  while cube(r + 1).is_some_and(|c| c <= abs) {
    r += 1;
  }
  if cube(r) != Some(abs) {
    return None;
  }
  Some(if n < 0 { -r } else { r })
}

/// The polynomial square root of `expr`, when it has one.
///
/// Asks the oracle for `sqrt(expr)`, squares the answer and checks that
/// the difference with `expr` simplifies to the literal `0`. A root that
/// is still a radical is rejected.
pub fn is_perfect_square(oracle: &dyn Oracle, expr: &str) -> Option<String> {
  let root = oracle.run(&format!("sqrt({expr})")).ok()?;
  if !is_zero(oracle, &format!("({root})^2 - ({expr})")) {
    trace!("{expr} is not a perfect square");
    return None;
  }
  Polynomial::parse(&root).map(|p| p.to_string())
}
