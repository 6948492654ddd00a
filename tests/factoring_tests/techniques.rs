use super::*;

mod common_factor {
  use super::*;

  #[test]
  fn irreducible_remainder_stops_after_the_gcf() {
    let result = factor_with_steps("2*x^2 + 4");
    assert_eq!(result.factored, "2*(x^2 + 2)");
    assert_eq!(techniques(&result), vec![Technique::Gcf]);
  }

  #[test]
  fn monomial_factor_then_difference_of_squares() {
    let result = factor_with_steps("x^3 - 4*x");
    assert_eq!(result.factored, "x*(x + 2)*(x - 2)");
    assert_eq!(
      techniques(&result),
      vec![Technique::Gcf, Technique::DifferenceOfSquares]
    );
    assert_eq!(result.steps()[0].expression, "x^3 - 4*x = x*(x^2 - 4)");
  }
}

mod substitution {
  use super::*;

  #[test]
  fn reduces_to_a_quadratic_and_substitutes_back() {
    let result = factor_with_steps("x^4 - 5*x^2 + 4");
    assert_eq!(result.factored, "(x^2 - 1)*(x^2 - 4)");
    let steps = result.steps();
    assert_eq!(steps[0].description, "Substitute u = x^2");
    assert_eq!(
      steps[0].expression,
      "x^4 - 5*x^2 + 4 = u^2 - 5*u + 4, where u = x^2"
    );
    assert_eq!(steps.last().unwrap().description, "Substitute back");
    assert_eq!(
      techniques(&result),
      vec![
        Technique::Other,
        Technique::Quadratic,
        Technique::Quadratic,
        Technique::Quadratic,
        Technique::Other,
      ]
    );
  }

  #[test]
  fn keeps_the_common_factor_in_front() {
    let result = factor_with_steps("2*x^4 - 10*x^2 + 8");
    assert_eq!(result.factored, "2*(x^2 - 1)*(x^2 - 4)");
    let steps = result.steps();
    assert_eq!(steps.first().unwrap().technique, Technique::Gcf);
    let combine = steps.last().unwrap();
    assert_eq!(combine.description, "Combine all factors");
    assert_eq!(
      combine.expression,
      "2*x^4 - 10*x^2 + 8 = 2*(x^2 - 1)*(x^2 - 4)"
    );
  }

  #[test]
  fn repeated_factor_comes_back_as_a_square() {
    let result = factor_with_steps("x^4 - 2*x^2 + 1");
    assert_eq!(result.factored, "(x^2 - 1)^2");
    let back = result.steps().last().unwrap();
    assert_eq!(back.expression, "(u - 1)^2 = (x^2 - 1)^2");
    assert!(back.verification.is_some());
  }
}

mod perfect_power {
  use super::*;

  #[test]
  fn cube_of_a_binomial() {
    let result = factor_with_steps("x^3 + 3*x^2 + 3*x + 1");
    assert_eq!(result.factored, "(x + 1)^3");
    assert_eq!(techniques(&result), vec![Technique::Other]);
    assert_eq!(result.steps()[0].description, "Recognize a perfect cube");
  }
}

mod fallback {
  use super::*;

  #[test]
  fn unnamed_shapes_get_one_generic_step() {
    let result = factor_with_steps("x^3 + 2*x^2 - x - 2");
    assert_eq!(result.factored, "(x + 1)*(x - 1)*(x + 2)");
    assert_eq!(techniques(&result), vec![Technique::Other]);
  }
}

mod signs {
  use super::*;

  #[test]
  fn negative_leading_coefficient() {
    let result = factor_with_steps("4 - x^2");
    assert_eq!(result.factored, "-(x + 2)*(x - 2)");
    assert!(result.is_factorable);
    assert!(!result.steps().is_empty());
  }
}

mod configuration {
  use super::*;

  #[test]
  fn tips_can_be_left_out() {
    let config = FactorConfig {
      include_tips: false,
      ..FactorConfig::default()
    };
    let factorizer = Factorizer::with_config(NativeOracle, config);
    let result = factorizer.factor_with_steps("2*x^2 + 8*x + 8");
    assert!(result.steps().iter().all(|s| s.tip.is_none()));

    let result = factor_with_steps("2*x^2 + 8*x + 8");
    assert!(result.steps().iter().any(|s| s.tip.is_some()));
  }

  #[test]
  fn substitution_variable_avoids_the_input_variable() {
    let result = factor_with_steps("u^4 - 5*u^2 + 4");
    assert_eq!(result.factored, "(u^2 - 1)*(u^2 - 4)");
    assert_eq!(result.steps()[0].description, "Substitute t = u^2");
  }
}
