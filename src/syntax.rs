//! Expression syntax shared by the detectors and the native oracle.
//!
//! Oracle output is parsed once into an [`Expr`] tree and then viewed
//! either as an expanded [`Polynomial`] (a sum of `coeff * var^exp`
//! terms) or as a [`Factorization`] (a constant times powers of
//! polynomials). Detectors read coefficients and exponents from these
//! views instead of matching text.

use pest::iterators::Pair;
use pest::Parser;
use pest_derive::Parser;
use std::fmt;
use thiserror::Error;

#[derive(Parser)]
#[grammar = "expression.pest"]
pub struct ExpressionParser;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SyntaxError {
  #[error("unexpected input at column {0}")]
  Unexpected(usize),
  #[error("integer literal {0} is too large")]
  IntegerTooLarge(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOperator {
  Minus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
  Plus,
  Minus,
  Times,
  Divide,
  Power,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Integer(i128),
  Identifier(String),
  UnaryOp {
    op: UnaryOperator,
    operand: Box<Expr>,
  },
  BinaryOp {
    op: BinaryOperator,
    left: Box<Expr>,
    right: Box<Expr>,
  },
  FunctionCall {
    name: String,
    args: Vec<Expr>,
  },
}

/// Parse an expression in the oracle's surface syntax.
pub fn parse(input: &str) -> Result<Expr, SyntaxError> {
  let mut pairs =
    ExpressionParser::parse(Rule::Program, input).map_err(|e| {
      let column = match e.line_col {
        pest::error::LineColLocation::Pos((_, col)) => col,
        pest::error::LineColLocation::Span((_, col), _) => col,
      };
      SyntaxError::Unexpected(column)
    })?;
  let program = pairs.next().ok_or(SyntaxError::Unexpected(1))?;
  let expr = program
    .into_inner()
    .find(|p| p.as_rule() == Rule::Expr)
    .ok_or(SyntaxError::Unexpected(1))?;
  build_expr(expr)
}

fn build_expr(pair: Pair<Rule>) -> Result<Expr, SyntaxError> {
  match pair.as_rule() {
    Rule::Expr => {
      let mut inner = pair.into_inner();
      let first = inner.next().ok_or(SyntaxError::Unexpected(1))?;
      let mut acc = build_expr(first)?;
      while let Some(op) = inner.next() {
        let rhs = match inner.next() {
          Some(term) => build_expr(term)?,
          None => break,
        };
        let op = if op.as_str() == "-" {
          BinaryOperator::Minus
        } else {
          BinaryOperator::Plus
        };
        acc = binary(op, acc, rhs);
      }
      Ok(acc)
    }
    Rule::Term => {
      let mut inner = pair.into_inner();
      let first = inner.next().ok_or(SyntaxError::Unexpected(1))?;
      let mut acc = build_expr(first)?;
      while let Some(next) = inner.next() {
        match next.as_rule() {
          Rule::MulOp => {
            let op = if next.as_str() == "/" {
              BinaryOperator::Divide
            } else {
              BinaryOperator::Times
            };
            let rhs = match inner.next() {
              Some(factor) => build_expr(factor)?,
              None => break,
            };
            acc = binary(op, acc, rhs);
          }
          _ => {
            let rhs = build_expr(next)?;
            acc = binary(BinaryOperator::Times, acc, rhs);
          }
        }
      }
      Ok(acc)
    }
    Rule::Unary | Rule::Exponent => {
      let mut negations = 0usize;
      let mut operand = None;
      for p in pair.into_inner() {
        match p.as_rule() {
          Rule::Negate => negations += 1,
          _ => operand = Some(build_expr(p)?),
        }
      }
      let mut expr = operand.ok_or(SyntaxError::Unexpected(1))?;
      for _ in 0..negations {
        expr = negate(expr);
      }
      Ok(expr)
    }
    Rule::Power => {
      let mut inner = pair.into_inner();
      let base = build_expr(inner.next().ok_or(SyntaxError::Unexpected(1))?)?;
      match inner.next() {
        Some(exponent) => {
          Ok(binary(BinaryOperator::Power, base, build_expr(exponent)?))
        }
        None => Ok(base),
      }
    }
    Rule::Call => {
      let mut inner = pair.into_inner();
      let name = inner
        .next()
        .map(|p| p.as_str().to_string())
        .ok_or(SyntaxError::Unexpected(1))?;
      let args = inner.map(build_expr).collect::<Result<Vec<_>, _>>()?;
      Ok(Expr::FunctionCall { name, args })
    }
    Rule::Identifier => Ok(Expr::Identifier(pair.as_str().to_string())),
    Rule::Integer => pair
      .as_str()
      .parse::<i128>()
      .map(Expr::Integer)
      .map_err(|_| SyntaxError::IntegerTooLarge(pair.as_str().to_string())),
    _ => {
      let (_, col) = pair.line_col();
      Err(SyntaxError::Unexpected(col))
    }
  }
}

pub fn binary(op: BinaryOperator, left: Expr, right: Expr) -> Expr {
  Expr::BinaryOp {
    op,
    left: Box::new(left),
    right: Box::new(right),
  }
}

pub fn negate(expr: Expr) -> Expr {
  Expr::UnaryOp {
    op: UnaryOperator::Minus,
    operand: Box::new(expr),
  }
}

// ─── printing ───────────────────────────────────────────────────────

fn precedence(expr: &Expr) -> u8 {
  match expr {
    Expr::BinaryOp { op, .. } => match op {
      BinaryOperator::Plus | BinaryOperator::Minus => 1,
      BinaryOperator::Times | BinaryOperator::Divide => 2,
      BinaryOperator::Power => 4,
    },
    Expr::UnaryOp { .. } => 3,
    Expr::Integer(n) if *n < 0 => 3,
    _ => 5,
  }
}

fn wrap(expr: &Expr, min_precedence: u8) -> String {
  let s = expr_to_string(expr);
  if precedence(expr) < min_precedence {
    format!("({s})")
  } else {
    s
  }
}

/// Render an expression in the oracle's surface syntax.
pub fn expr_to_string(expr: &Expr) -> String {
  match expr {
    Expr::Integer(n) => n.to_string(),
    Expr::Identifier(name) => name.clone(),
    Expr::UnaryOp { operand, .. } => format!("-{}", wrap(operand, 3)),
    Expr::BinaryOp { op, left, right } => match op {
      BinaryOperator::Plus => match right.as_ref() {
        Expr::UnaryOp { operand, .. } => {
          format!("{} - {}", expr_to_string(left), wrap(operand, 2))
        }
        Expr::Integer(n) if *n < 0 => {
          format!("{} - {}", expr_to_string(left), -n)
        }
        _ => format!("{} + {}", expr_to_string(left), wrap(right, 2)),
      },
      BinaryOperator::Minus => {
        format!("{} - {}", expr_to_string(left), wrap(right, 2))
      }
      BinaryOperator::Times => {
        format!("{}*{}", wrap(left, 2), wrap(right, 4))
      }
      BinaryOperator::Divide => {
        format!("{}/{}", wrap(left, 2), wrap(right, 4))
      }
      BinaryOperator::Power => {
        format!("{}^{}", wrap(left, 5), wrap(right, 5))
      }
    },
    Expr::FunctionCall { name, args } => {
      let args: Vec<String> = args.iter().map(expr_to_string).collect();
      format!("{}({})", name, args.join(", "))
    }
  }
}

/// True when both texts parse to the same expression, so `(x+2)*(x-2)`
/// matches `(x + 2)*(x - 2)` and `2(x+1)` matches `2*(x + 1)`.
pub fn same_form(a: &str, b: &str) -> bool {
  if a.trim() == b.trim() {
    return true;
  }
  match (parse(a.trim()), parse(b.trim())) {
    (Ok(x), Ok(y)) => expr_to_string(&x) == expr_to_string(&y),
    _ => false,
  }
}

impl fmt::Display for Expr {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&expr_to_string(self))
  }
}

// ─── Polynomial ─────────────────────────────────────────────────────

/// One additive term `coeff * var^exp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Monomial {
  pub coeff: i128,
  pub exp: u32,
}

impl Monomial {
  /// Render with its own sign, e.g. `-3*x^2`, `x`, `7`.
  pub fn render(&self, var: Option<&str>) -> String {
    let var_part = match (var, self.exp) {
      (_, 0) | (None, _) => None,
      (Some(v), 1) => Some(v.to_string()),
      (Some(v), e) => Some(format!("{v}^{e}")),
    };
    match (self.coeff, var_part) {
      (c, None) => c.to_string(),
      (1, Some(v)) => v,
      (-1, Some(v)) => format!("-{v}"),
      (c, Some(v)) => format!("{c}*{v}"),
    }
  }
}

/// Expanded single-variable polynomial, terms sorted by descending
/// exponent with like terms combined and zero terms removed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Polynomial {
  pub var: Option<String>,
  pub terms: Vec<Monomial>,
}

impl Polynomial {
  /// Combine like terms. `None` when a combined coefficient overflows.
  pub fn new(var: Option<String>, terms: Vec<Monomial>) -> Option<Self> {
    let mut combined: Vec<Monomial> = Vec::new();
    for term in terms {
      match combined.iter_mut().find(|m| m.exp == term.exp) {
        Some(existing) => {
          existing.coeff = existing.coeff.checked_add(term.coeff)?
        }
        None => combined.push(term),
      }
    }
    Some(Polynomial::from_distinct(var, combined))
  }

  /// Terms already carry distinct exponents.
  fn from_distinct(var: Option<String>, mut terms: Vec<Monomial>) -> Self {
    terms.retain(|m| m.coeff != 0);
    terms.sort_by(|a, b| b.exp.cmp(&a.exp));
    let var = if terms.iter().all(|m| m.exp == 0) {
      None
    } else {
      var
    };
    Polynomial { var, terms }
  }

  /// Build from ascending coefficients: `coeffs[i]` multiplies `var^i`.
  pub fn from_coeffs(var: Option<&str>, coeffs: &[i128]) -> Self {
    let terms = coeffs
      .iter()
      .enumerate()
      .map(|(i, &coeff)| Monomial {
        coeff,
        exp: i as u32,
      })
      .collect();
    Polynomial::from_distinct(var.map(str::to_string), terms)
  }

  /// Parse text that is already in expanded form. Returns `None` for
  /// anything that is not a flat sum of monomials in one variable.
  pub fn parse(text: &str) -> Option<Self> {
    Polynomial::from_expr(&parse(text).ok()?)
  }

  pub fn from_expr(expr: &Expr) -> Option<Self> {
    let mut var = None;
    let mut terms = Vec::new();
    collect_terms(expr, 1, &mut var, &mut terms)?;
    Polynomial::new(var, terms)
  }

  pub fn var(&self) -> Option<&str> {
    self.var.as_deref()
  }

  pub fn is_constant(&self) -> bool {
    self.degree() == 0
  }

  pub fn degree(&self) -> u32 {
    self.terms.first().map_or(0, |m| m.exp)
  }

  pub fn term_count(&self) -> usize {
    self.terms.len()
  }

  pub fn leading(&self) -> Option<Monomial> {
    self.terms.first().copied()
  }

  pub fn coefficient(&self, exp: u32) -> i128 {
    self
      .terms
      .iter()
      .find(|m| m.exp == exp)
      .map_or(0, |m| m.coeff)
  }

  /// Exponents of the terms with a non-zero coefficient, descending.
  pub fn exponents(&self) -> Vec<u32> {
    self.terms.iter().map(|m| m.exp).collect()
  }

  /// Build an [`Expr`] tree for this polynomial.
  pub fn to_expr(&self) -> Expr {
    let var = self.var();
    let term_expr = |m: &Monomial| {
      let var_part = match (var, m.exp) {
        (_, 0) | (None, _) => None,
        (Some(v), 1) => Some(Expr::Identifier(v.to_string())),
        (Some(v), e) => Some(binary(
          BinaryOperator::Power,
          Expr::Identifier(v.to_string()),
          Expr::Integer(i128::from(e)),
        )),
      };
      match (m.coeff.abs(), var_part) {
        (c, None) => Expr::Integer(c),
        (1, Some(v)) => v,
        (c, Some(v)) => binary(BinaryOperator::Times, Expr::Integer(c), v),
      }
    };
    let mut terms = self.terms.iter();
    let Some(first) = terms.next() else {
      return Expr::Integer(0);
    };
    let mut acc = if first.coeff < 0 {
      negate(term_expr(first))
    } else {
      term_expr(first)
    };
    for m in terms {
      let op = if m.coeff < 0 {
        BinaryOperator::Minus
      } else {
        BinaryOperator::Plus
      };
      acc = binary(op, acc, term_expr(m));
    }
    acc
  }

  /// Render each term on its own, e.g. `["2*x^2", "8*x", "8"]`.
  pub fn term_strings(&self) -> Vec<String> {
    self.terms.iter().map(|m| m.render(self.var())).collect()
  }

  /// Replace `var^step` by `new_var`. Every exponent must be a multiple
  /// of `step`.
  pub fn compress_exponents(&self, step: u32, new_var: &str) -> Option<Self> {
    if step == 0 || self.terms.iter().any(|m| m.exp % step != 0) {
      return None;
    }
    let terms = self
      .terms
      .iter()
      .map(|m| Monomial {
        coeff: m.coeff,
        exp: m.exp / step,
      })
      .collect();
    Some(Polynomial::from_distinct(Some(new_var.to_string()), terms))
  }

  /// Replace `var` by `new_var^step`.
  pub fn stretch_exponents(&self, step: u32, new_var: &str) -> Self {
    let terms = self
      .terms
      .iter()
      .map(|m| Monomial {
        coeff: m.coeff,
        exp: m.exp * step,
      })
      .collect();
    Polynomial::from_distinct(Some(new_var.to_string()), terms)
  }
}

impl fmt::Display for Polynomial {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.terms.is_empty() {
      return f.write_str("0");
    }
    for (i, term) in self.terms.iter().enumerate() {
      if i == 0 {
        f.write_str(&term.render(self.var()))?;
      } else if term.coeff < 0 {
        let positive = Monomial {
          coeff: -term.coeff,
          exp: term.exp,
        };
        write!(f, " - {}", positive.render(self.var()))?;
      } else {
        write!(f, " + {}", term.render(self.var()))?;
      }
    }
    Ok(())
  }
}

fn merge_var(var: &mut Option<String>, name: &str) -> Option<()> {
  match var {
    Some(existing) if existing != name => None,
    Some(_) => Some(()),
    None => {
      *var = Some(name.to_string());
      Some(())
    }
  }
}

fn collect_terms(
  expr: &Expr,
  sign: i128,
  var: &mut Option<String>,
  terms: &mut Vec<Monomial>,
) -> Option<()> {
  match expr {
    Expr::BinaryOp {
      op: BinaryOperator::Plus,
      left,
      right,
    } => {
      collect_terms(left, sign, var, terms)?;
      collect_terms(right, sign, var, terms)
    }
    Expr::BinaryOp {
      op: BinaryOperator::Minus,
      left,
      right,
    } => {
      collect_terms(left, sign, var, terms)?;
      collect_terms(right, -sign, var, terms)
    }
    Expr::UnaryOp { operand, .. } => collect_terms(operand, -sign, var, terms),
    _ => {
      let mut m = monomial(expr, var)?;
      m.coeff = m.coeff.checked_mul(sign)?;
      terms.push(m);
      Some(())
    }
  }
}

/// Read a single product term such as `3*x^2`, `-x`, `x^4` or `5`.
fn monomial(expr: &Expr, var: &mut Option<String>) -> Option<Monomial> {
  match expr {
    Expr::Integer(n) => Some(Monomial { coeff: *n, exp: 0 }),
    Expr::Identifier(name) => {
      merge_var(var, name)?;
      Some(Monomial { coeff: 1, exp: 1 })
    }
    Expr::UnaryOp { operand, .. } => {
      let m = monomial(operand, var)?;
      Some(Monomial {
        coeff: m.coeff.checked_neg()?,
        exp: m.exp,
      })
    }
    Expr::BinaryOp {
      op: BinaryOperator::Power,
      left,
      right,
    } => {
      let (Expr::Identifier(name), Expr::Integer(e)) =
        (left.as_ref(), right.as_ref())
      else {
        return None;
      };
      merge_var(var, name)?;
      Some(Monomial {
        coeff: 1,
        exp: u32::try_from(*e).ok()?,
      })
    }
    Expr::BinaryOp {
      op: BinaryOperator::Times,
      left,
      right,
    } => {
      let a = monomial(left, var)?;
      let b = monomial(right, var)?;
      Some(Monomial {
        coeff: a.coeff.checked_mul(b.coeff)?,
        exp: a.exp.checked_add(b.exp)?,
      })
    }
    _ => None,
  }
}

// ─── Factorization ──────────────────────────────────────────────────

/// A product `constant * f1^e1 * f2^e2 * ...` of expanded polynomials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factorization {
  pub constant: i128,
  pub factors: Vec<(Polynomial, u32)>,
}

impl Factorization {
  pub fn parse(text: &str) -> Option<Self> {
    Factorization::from_expr(&parse(text).ok()?)
  }

  pub fn from_expr(expr: &Expr) -> Option<Self> {
    let mut result = Factorization {
      constant: 1,
      factors: Vec::new(),
    };
    collect_factors(expr, &mut result)?;
    Some(result)
  }

  /// Nothing beyond a unit `1` or `-1` was split off.
  pub fn is_trivial(&self) -> bool {
    self.factors.is_empty()
      || (self.constant.abs() == 1
        && self.factors.len() == 1
        && self.factors[0].1 == 1)
  }

  /// Factors that are not plain constants.
  pub fn non_constant(&self) -> impl Iterator<Item = &(Polynomial, u32)> {
    self.factors.iter().filter(|(p, _)| !p.is_constant())
  }

  /// The single factor of a `(base)^power` shape, when that is all
  /// there is apart from a unit constant.
  pub fn single_power(&self) -> Option<(&Polynomial, u32)> {
    if self.constant != 1 || self.factors.len() != 1 {
      return None;
    }
    let (base, power) = &self.factors[0];
    (*power >= 2).then_some((base, *power))
  }
}

fn collect_factors(expr: &Expr, out: &mut Factorization) -> Option<()> {
  match expr {
    Expr::BinaryOp {
      op: BinaryOperator::Times,
      left,
      right,
    } => {
      collect_factors(left, out)?;
      collect_factors(right, out)
    }
    Expr::UnaryOp { operand, .. } => {
      out.constant = out.constant.checked_neg()?;
      collect_factors(operand, out)
    }
    Expr::Integer(n) => {
      out.constant = out.constant.checked_mul(*n)?;
      Some(())
    }
    Expr::BinaryOp {
      op: BinaryOperator::Power,
      left,
      right,
    } if is_sum(left) => {
      let Expr::Integer(e) = right.as_ref() else {
        return None;
      };
      let base = Polynomial::from_expr(left)?;
      out.factors.push((base, u32::try_from(*e).ok()?));
      Some(())
    }
    Expr::BinaryOp {
      op: BinaryOperator::Power,
      left,
      right,
    } if matches!(left.as_ref(), Expr::Identifier(_)) => {
      let Expr::Integer(e) = right.as_ref() else {
        return None;
      };
      let base = Polynomial::from_expr(left)?;
      out.factors.push((base, u32::try_from(*e).ok()?));
      Some(())
    }
    _ => {
      let poly = Polynomial::from_expr(expr)?;
      out.factors.push((poly, 1));
      Some(())
    }
  }
}

fn is_sum(expr: &Expr) -> bool {
  matches!(
    expr,
    Expr::BinaryOp {
      op: BinaryOperator::Plus | BinaryOperator::Minus,
      ..
    }
  )
}

/// Render one factor of a product, adding parentheses where the base is
/// a sum or a scaled monomial.
pub fn render_factor(base: &Polynomial, power: u32) -> String {
  let text = base.to_string();
  let needs_parens = base.term_count() > 1
    || (power > 1
      && base
        .leading()
        .is_some_and(|m| (m.coeff != 1 && m.exp > 0) || m.exp > 1));
  let text = if needs_parens { format!("({text})") } else { text };
  if power > 1 {
    format!("{text}^{power}")
  } else {
    text
  }
}

impl fmt::Display for Factorization {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let rendered: Vec<String> = self
      .factors
      .iter()
      .map(|(base, power)| render_factor(base, *power))
      .collect();
    let body = rendered.join("*");
    match (self.constant, body.is_empty()) {
      (c, true) => write!(f, "{c}"),
      (1, false) => f.write_str(&body),
      (-1, false) => write!(f, "-{body}"),
      (c, false) => write!(f, "{c}*{body}"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parses_expanded_polynomial() {
    let p = Polynomial::parse("x^2 + 5*x + 6").unwrap();
    assert_eq!(p.var(), Some("x"));
    assert_eq!(p.degree(), 2);
    assert_eq!(p.coefficient(1), 5);
    assert_eq!(p.coefficient(0), 6);
    assert_eq!(p.to_string(), "x^2 + 5*x + 6");
  }

  #[test]
  fn implicit_multiplication_and_unordered_terms() {
    let p = Polynomial::parse("6 - 2x^3 + x").unwrap();
    assert_eq!(p.to_string(), "-2*x^3 + x + 6");
  }

  #[test]
  fn overflowing_like_terms_are_rejected() {
    let max = i128::MAX;
    assert!(Polynomial::parse(&format!("{max}*x + {max}*x")).is_none());
    let p = Polynomial::parse(&format!("{max}*x - {max}*x + 1")).unwrap();
    assert_eq!(p.to_string(), "1");
  }

  #[test]
  fn rejects_two_variables() {
    assert!(Polynomial::parse("x^2 + y").is_none());
  }

  #[test]
  fn rejects_grouped_sums() {
    assert!(Polynomial::parse("(x + 1)*(x + 2)").is_none());
  }

  #[test]
  fn same_form_ignores_spacing_only() {
    assert!(same_form("(x+2)*(x-2)", "(x + 2)*(x - 2)"));
    assert!(same_form("2(x+2)^2", "2*(x + 2)^2"));
    assert!(same_form(" x^2 + 1", "x^2 + 1"));
    assert!(!same_form("(x+2)*(x-2)", "x^2 - 4"));
    assert!(!same_form("(x + 1)*(x + 1)", "(x + 1)^2"));
    assert!(!same_form("x^2 +", "x^2 - 1"));
  }

  #[test]
  fn unit_multiples_are_trivial() {
    let trivial = |s: &str| Factorization::parse(s).unwrap().is_trivial();
    assert!(trivial("x^2 + 1"));
    assert!(trivial("-(x^2 + 1)"));
    assert!(trivial("7"));
    assert!(!trivial("2*(x + 1)"));
    assert!(!trivial("-(x + 2)*(x - 2)"));
    assert!(!trivial("(x + 1)^2"));
  }

  #[test]
  fn parses_factorizations() {
    let f = Factorization::parse("2*(x + 2)^2").unwrap();
    assert_eq!(f.constant, 2);
    assert_eq!(f.factors.len(), 1);
    assert_eq!(f.factors[0].1, 2);
    assert_eq!(f.to_string(), "2*(x + 2)^2");

    let f = Factorization::parse("-x^2*(x - 1)").unwrap();
    assert_eq!(f.constant, -1);
    assert_eq!(f.to_string(), "-x^2*(x - 1)");

    let f = Factorization::parse("-(x + 2)*(x - 2)").unwrap();
    assert_eq!(f.constant, -1);
    assert_eq!(f.to_string(), "-(x + 2)*(x - 2)");
  }

  #[test]
  fn reports_syntax_errors() {
    assert!(matches!(parse("x^2 +* 4"), Err(SyntaxError::Unexpected(_))));
    assert!(matches!(
      parse("99999999999999999999999999999999999999999*x"),
      Err(SyntaxError::IntegerTooLarge(_))
    ));
  }

  #[test]
  fn prints_nested_expressions() {
    let e = parse("(x+1)^2 - (x - 1)").unwrap();
    assert_eq!(expr_to_string(&e), "(x + 1)^2 - (x - 1)");
    let e = parse("sqrt(4*x^2)").unwrap();
    assert_eq!(e.to_string(), "sqrt(4*x^2)");
  }

  #[test]
  fn compresses_and_stretches_exponents() {
    let p = Polynomial::parse("x^4 - 5*x^2 + 4").unwrap();
    let u = p.compress_exponents(2, "u").unwrap();
    assert_eq!(u.to_string(), "u^2 - 5*u + 4");
    assert_eq!(u.stretch_exponents(2, "x"), p);
  }
}
