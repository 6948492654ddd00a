use crate::numeric::{gcd_int, integer_sqrt, DIVISOR_SEARCH_LIMIT};
use crate::oracle::OracleError;
use crate::syntax::Polynomial;

/// Dense polynomial in at most one variable. `coeffs[i]` multiplies
/// `var^i`; trailing zeros are trimmed so the zero polynomial is empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct Poly {
  pub var: Option<String>,
  pub coeffs: Vec<i128>,
}

const MAX_DEGREE: usize = 4096;

fn overflow<T>(v: Option<T>) -> Result<T, OracleError> {
  v.ok_or(OracleError::Overflow)
}

impl Poly {
  pub fn new(var: Option<String>, mut coeffs: Vec<i128>) -> Self {
    while coeffs.last() == Some(&0) {
      coeffs.pop();
    }
    let var = if coeffs.len() > 1 { var } else { None };
    Poly { var, coeffs }
  }

  pub fn constant(c: i128) -> Self {
    Poly::new(None, vec![c])
  }

  pub fn variable(name: &str) -> Self {
    Poly::new(Some(name.to_string()), vec![0, 1])
  }

  pub fn is_zero(&self) -> bool {
    self.coeffs.is_empty()
  }

  pub fn degree(&self) -> usize {
    self.coeffs.len().saturating_sub(1)
  }

  pub fn lead(&self) -> i128 {
    self.coeffs.last().copied().unwrap_or(0)
  }

  pub fn as_constant(&self) -> Option<i128> {
    match self.coeffs.len() {
      0 => Some(0),
      1 => Some(self.coeffs[0]),
      _ => None,
    }
  }

  pub fn to_polynomial(&self) -> Polynomial {
    Polynomial::from_coeffs(self.var.as_deref(), &self.coeffs)
  }

  fn unify_var(&self, other: &Poly) -> Result<Option<String>, OracleError> {
    match (&self.var, &other.var) {
      (Some(a), Some(b)) if a != b => Err(OracleError::Unsupported(
        "multivariable expressions are not supported".into(),
      )),
      (Some(a), _) => Ok(Some(a.clone())),
      (None, b) => Ok(b.clone()),
    }
  }

  pub fn add(&self, other: &Poly) -> Result<Poly, OracleError> {
    let var = self.unify_var(other)?;
    let len = self.coeffs.len().max(other.coeffs.len());
    let mut out = vec![0i128; len];
    for (i, slot) in out.iter_mut().enumerate() {
      let a = self.coeffs.get(i).copied().unwrap_or(0);
      let b = other.coeffs.get(i).copied().unwrap_or(0);
      *slot = overflow(a.checked_add(b))?;
    }
    Ok(Poly::new(var, out))
  }

  pub fn neg(&self) -> Result<Poly, OracleError> {
    let coeffs = overflow(
      self
        .coeffs
        .iter()
        .map(|c| c.checked_neg())
        .collect::<Option<Vec<_>>>(),
    )?;
    Ok(Poly::new(self.var.clone(), coeffs))
  }

  pub fn sub(&self, other: &Poly) -> Result<Poly, OracleError> {
    self.add(&other.neg()?)
  }

  pub fn scale(&self, k: i128) -> Result<Poly, OracleError> {
    let coeffs = overflow(
      self
        .coeffs
        .iter()
        .map(|c| c.checked_mul(k))
        .collect::<Option<Vec<_>>>(),
    )?;
    Ok(Poly::new(self.var.clone(), coeffs))
  }

  pub fn mul(&self, other: &Poly) -> Result<Poly, OracleError> {
    let var = self.unify_var(other)?;
    if self.is_zero() || other.is_zero() {
      return Ok(Poly::constant(0));
    }
    let coeffs = overflow(poly_mul_coeffs(&self.coeffs, &other.coeffs))?;
    Ok(Poly::new(var, coeffs))
  }

  pub fn pow(&self, k: u32) -> Result<Poly, OracleError> {
    if self.degree().saturating_mul(k as usize) > MAX_DEGREE {
      return Err(OracleError::Unsupported(format!(
        "degree above {MAX_DEGREE}"
      )));
    }
    let mut result = Poly::constant(1);
    for _ in 0..k {
      result = result.mul(self)?;
    }
    Ok(result)
  }

  /// Exact division. `Ok(None)` when the quotient is not a polynomial
  /// with integer coefficients.
  pub fn div_exact(&self, other: &Poly) -> Result<Option<Poly>, OracleError> {
    if other.is_zero() {
      return Err(OracleError::Evaluation("division by zero".into()));
    }
    let var = self.unify_var(other)?;
    if self.is_zero() {
      return Ok(Some(Poly::constant(0)));
    }
    Ok(
      poly_div(&self.coeffs, &other.coeffs)
        .filter(|(_, rem)| rem.iter().all(|&c| c == 0))
        .map(|(quot, _)| Poly::new(var, quot)),
    )
  }

  /// Square root with a positive leading coefficient, when the
  /// polynomial is the square of one with integer coefficients.
  pub fn sqrt(&self) -> Option<Poly> {
    if self.is_zero() {
      return Some(Poly::constant(0));
    }
    let deg = self.degree();
    if deg % 2 != 0 {
      return None;
    }
    let half = deg / 2;
    let top = integer_sqrt(self.lead())?;
    if top == 0 {
      return None;
    }
    let mut root = vec![0i128; half + 1];
    root[half] = top;
    // Match coefficients of x^(half + k) from the top down.
    for k in (0..half).rev() {
      let mut partial = 0i128;
      for i in (k + 1)..half {
        let j = half + k - i;
        if j > k && j < half {
          partial = partial.checked_add(root[i].checked_mul(root[j])?)?;
        }
      }
      let target = self.coeffs[half + k].checked_sub(partial)?;
      let denom = top.checked_mul(2)?;
      if target % denom != 0 {
        return None;
      }
      root[k] = target / denom;
    }
    let candidate = Poly::new(self.var.clone(), root);
    match candidate.mul(&candidate) {
      Ok(square) if square.coeffs == self.coeffs => Some(candidate),
      _ => None,
    }
  }

  /// Positive GCD of the coefficients; `0` for the zero polynomial.
  pub fn content(&self) -> i128 {
    self.coeffs.iter().copied().fold(0i128, gcd_int)
  }

  /// Divide out the content and make the leading coefficient positive.
  pub fn primitive(&self) -> Poly {
    let content = self.content();
    if content == 0 {
      return self.clone();
    }
    let sign = if self.lead() < 0 { -1 } else { 1 };
    let coeffs = self.coeffs.iter().map(|c| c / content * sign).collect();
    Poly::new(self.var.clone(), coeffs)
  }

  fn pseudo_rem(&self, divisor: &Poly) -> Result<Poly, OracleError> {
    let d = divisor.lead();
    let m = divisor.degree();
    let mut rem = self.coeffs.clone();
    while !rem.is_empty() && rem.len() > m {
      let shift = rem.len() - 1 - m;
      let lr = *rem.last().unwrap_or(&0);
      for c in rem.iter_mut() {
        *c = overflow(c.checked_mul(d))?;
      }
      for (i, &bc) in divisor.coeffs.iter().enumerate() {
        let delta = overflow(lr.checked_mul(bc))?;
        rem[i + shift] = overflow(rem[i + shift].checked_sub(delta))?;
      }
      while rem.last() == Some(&0) {
        rem.pop();
      }
    }
    Ok(Poly::new(self.var.clone(), rem))
  }

  /// Content GCD times the primitive-part GCD, leading coefficient
  /// positive.
  pub fn gcd(&self, other: &Poly) -> Result<Poly, OracleError> {
    let var = self.unify_var(other)?;
    if self.is_zero() {
      return Ok(other.normalized_sign());
    }
    if other.is_zero() {
      return Ok(self.normalized_sign());
    }
    let content = gcd_int(self.content(), other.content());
    let (mut a, mut b) = (self.primitive(), other.primitive());
    if a.degree() < b.degree() {
      std::mem::swap(&mut a, &mut b);
    }
    while !b.is_zero() {
      let rem = a.pseudo_rem(&b)?;
      a = b;
      b = rem.primitive();
    }
    let mut g = a.primitive().scale(content)?;
    if g.degree() > 0 {
      g.var = var;
    }
    Ok(g)
  }

  fn normalized_sign(&self) -> Poly {
    if self.lead() < 0 {
      Poly::new(
        self.var.clone(),
        self.coeffs.iter().map(|c| -c).collect(),
      )
    } else {
      self.clone()
    }
  }
}

// ─── coefficient helpers ────────────────────────────────────────────

/// Multiply two ascending coefficient vectors.
pub(super) fn poly_mul_coeffs(a: &[i128], b: &[i128]) -> Option<Vec<i128>> {
  if a.is_empty() || b.is_empty() {
    return Some(vec![]);
  }
  let mut out = vec![0i128; a.len() + b.len() - 1];
  for (i, &x) in a.iter().enumerate() {
    for (j, &y) in b.iter().enumerate() {
      out[i + j] = out[i + j].checked_add(x.checked_mul(y)?)?;
    }
  }
  Some(out)
}

/// Polynomial long division of `num` by `den` over the integers.
/// Returns `(quotient, remainder)`, or `None` when a quotient
/// coefficient is not an integer.
pub(super) fn poly_div(
  num: &[i128],
  den: &[i128],
) -> Option<(Vec<i128>, Vec<i128>)> {
  let n = num.len();
  let m = den.len();
  if m == 0 {
    return None;
  }
  let lead_den = *den.last()?;
  if lead_den == 0 {
    return None;
  }
  if m > n {
    return Some((vec![0], num.to_vec()));
  }

  let mut rem = num.to_vec();
  let quot_len = n - m + 1;
  let mut quot = vec![0i128; quot_len];

  for i in (0..quot_len).rev() {
    if rem[i + m - 1] % lead_den != 0 {
      return None;
    }
    let coeff = rem[i + m - 1] / lead_den;
    quot[i] = coeff;
    for j in 0..m {
      rem[i + j] = rem[i + j].checked_sub(coeff.checked_mul(den[j])?)?;
    }
  }

  while rem.len() > 1 && rem.last() == Some(&0) {
    rem.pop();
  }

  Some((quot, rem))
}

/// Evaluate at an integer point; `None` on overflow.
pub(super) fn evaluate_poly(coeffs: &[i128], x: i128) -> Option<i128> {
  coeffs
    .iter()
    .rev()
    .try_fold(0i128, |acc, &c| acc.checked_mul(x)?.checked_add(c))
}

/// Positive divisors of `n`, ascending. `[1]` for zero. Divisors strictly
/// between [`DIVISOR_SEARCH_LIMIT`] and `n / DIVISOR_SEARCH_LIMIT` are
/// skipped.
pub(super) fn integer_divisors(n: i128) -> Vec<i128> {
  if n == 0 {
    return vec![1];
  }
  let n = n.abs();
  let mut small = Vec::new();
  let mut large = Vec::new();
  let mut i = 1i128;
  while i <= i128::from(DIVISOR_SEARCH_LIMIT)
    && i.checked_mul(i).is_some_and(|sq| sq <= n)
  {
    if n % i == 0 {
      small.push(i);
      if i != n / i {
        large.push(n / i);
      }
    }
    i += 1;
  }
  large.reverse();
  small.extend(large);
  small
}
