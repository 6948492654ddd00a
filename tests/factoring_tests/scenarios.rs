use super::*;

mod difference_of_squares {
  use super::*;

  #[test]
  fn single_split() {
    let result = factor_with_steps("x^2 - 4");
    assert_eq!(result.factored, "(x + 2)*(x - 2)");
    assert!(result.is_factorable);
    assert_eq!(techniques(&result), vec![Technique::DifferenceOfSquares]);
  }

  #[test]
  fn fourth_powers_split_twice_by_default() {
    let result = factor_with_steps("x^4 - 16");
    assert_eq!(result.factored, "(x + 2)*(x - 2)*(x^2 + 4)");
    let steps = result.steps();
    assert_eq!(steps.len(), 2);
    assert_eq!(steps[0].expression, "x^4 - 16 = (x^2 + 4)*(x^2 - 4)");
    assert_eq!(steps[1].expression, "x^2 - 4 = (x + 2)*(x - 2)");
    assert!(steps
      .iter()
      .all(|s| s.technique == Technique::DifferenceOfSquares));
  }

  #[test]
  fn single_pass_stops_after_the_outer_split() {
    let config = FactorConfig {
      nesting: NestingPolicy::SinglePass,
      ..FactorConfig::default()
    };
    let result = Factorizer::with_config(NativeOracle, config)
      .factor_with_steps("x^4 - 16");
    assert_eq!(result.factored, "(x + 2)*(x - 2)*(x^2 + 4)");
    assert_eq!(techniques(&result), vec![Technique::DifferenceOfSquares]);
    assert_eq!(
      result.steps()[0].expression,
      "x^4 - 16 = (x^2 + 4)*(x^2 - 4)"
    );
  }
}

mod quadratic {
  use super::*;

  #[test]
  fn factor_pair_search() {
    let result = factor_with_steps("x^2 + 5*x + 6");
    assert_eq!(result.factored, "(x + 2)*(x + 3)");
    assert!(techniques(&result)
      .iter()
      .all(|t| *t == Technique::Quadratic));
    let search = result
      .steps()
      .iter()
      .find(|s| s.description == "Find two numbers")
      .unwrap();
    assert_eq!(search.expression, "2 * 3 = 6, 2 + 3 = 5");
    assert!(search.explanation.contains("product is a*c = 6"));
    assert!(search.explanation.contains("sum is b = 5"));
  }

  #[test]
  fn leading_coefficient_uses_grouping() {
    let result = factor_with_steps("2*x^2 + 5*x + 3");
    assert_eq!(result.factored, "(x + 1)*(2*x + 3)");
    assert_eq!(
      techniques(&result),
      vec![
        Technique::Quadratic,
        Technique::Quadratic,
        Technique::Grouping,
        Technique::Grouping,
      ]
    );
  }
}

mod perfect_square {
  use super::*;

  #[test]
  fn trinomial() {
    let result = factor_with_steps("x^2 - 6*x + 9");
    assert_eq!(result.factored, "(x - 3)^2");
    assert_eq!(
      techniques(&result),
      vec![Technique::PerfectSquare, Technique::PerfectSquare]
    );
  }

  #[test]
  fn with_common_factor() {
    let result = factor_with_steps("2*x^2 + 8*x + 8");
    assert_eq!(result.factored, "2*(x + 2)^2");
    assert_eq!(
      techniques(&result),
      vec![
        Technique::Gcf,
        Technique::PerfectSquare,
        Technique::PerfectSquare,
        Technique::Gcf,
      ]
    );
    let steps = result.steps();
    assert_eq!(steps[0].expression, "2*x^2 + 8*x + 8 = 2*(x^2 + 4*x + 4)");
    assert_eq!(steps[2].expression, "x^2 + 4*x + 4 = (x + 2)^2");
    assert_eq!(steps[3].description, "Combine all factors");
    assert_eq!(steps[3].expression, "2*x^2 + 8*x + 8 = 2*(x + 2)^2");
  }

  #[test]
  fn quartic() {
    let result = factor_with_steps("x^4 + 6*x^2 + 9");
    assert_eq!(result.factored, "(x^2 + 3)^2");
    assert_eq!(
      techniques(&result),
      vec![Technique::PerfectSquare, Technique::PerfectSquare]
    );
  }
}

mod cubes {
  use super::*;

  #[test]
  fn difference_of_cubes() {
    let result = factor_with_steps("x^3 - 8");
    assert_eq!(result.factored, "(x - 2)*(x^2 + 2*x + 4)");
    assert_eq!(
      techniques(&result),
      vec![Technique::SumDifferenceCubes, Technique::SumDifferenceCubes]
    );
  }

  #[test]
  fn sum_of_cubes() {
    let result = factor_with_steps("x^3 + 27");
    assert_eq!(result.factored, "(x + 3)*(x^2 - 3*x + 9)");
    assert_eq!(result.steps()[0].description, "Recognize a sum of cubes");
  }
}

mod empty_input {
  use super::*;

  #[test]
  fn asks_for_an_expression() {
    let result = factor_with_steps("");
    assert_eq!(result.error.as_deref(), Some("Please enter an expression"));
    assert_eq!(result.factored, "");
    assert!(!result.is_factorable);
    assert!(result.steps.is_none());
  }

  #[test]
  fn whitespace_counts_as_empty() {
    let result = factor_with_steps("   ");
    assert_eq!(result.error.as_deref(), Some("Please enter an expression"));
    assert_eq!(result.original, "   ");
  }
}
