use super::*;
use stepfactor::detect::extract_gcf;
use stepfactor::EXAMPLE_EXPRESSIONS;

const INPUTS: &[&str] = &[
  "x^2 - 4",
  "x^2 + 5*x + 6",
  "x^2 - 6*x + 9",
  "x^3 - 8",
  "2*x^2 + 8*x + 8",
  "x^4 - 16",
  "x^4 - 5*x^2 + 4",
  "2*x^4 - 10*x^2 + 8",
  "3*x^3 - 12*x",
  "2*x^2 + 5*x + 3",
  "x^3 + 2*x^2 - x - 2",
  "x^3 + 3*x^2 + 3*x + 1",
  "4 - x^2",
  "-2*x^2 - 4",
  "x^4 - 2*x^2 + 1",
];

mod idempotence {
  use super::*;

  #[test]
  fn factored_input_is_not_factorable() {
    for input in ["(x + 2)*(x - 2)", "2*(x + 2)^2", "(x - 2)*(x^2 + 2*x + 4)"]
    {
      let result = factor_with_steps(input);
      assert!(!result.is_factorable, "{input}");
      assert!(result.steps.is_none(), "{input}");
      assert_eq!(result.factored, input);
    }
  }

  #[test]
  fn factored_input_in_other_spacing_is_not_factorable() {
    for (input, canonical) in [
      ("(x+2)*(x-2)", "(x + 2)*(x - 2)"),
      ("2(x+2)^2", "2*(x + 2)^2"),
      ("-(x+2)*(x-2)", "-(x + 2)*(x - 2)"),
    ] {
      let result = factor_with_steps(input);
      assert!(!result.is_factorable, "{input}");
      assert!(result.steps.is_none(), "{input}");
      assert_eq!(result.factored, canonical);
      assert_eq!(result.original, input);
    }
  }

  #[test]
  fn negative_leading_irreducibles_are_not_factorable() {
    for input in ["-x - 1", "-x^2 - 1", "-x", "-x^2 + x - 1"] {
      let result = factor_with_steps(input);
      assert!(!result.is_factorable, "{input}");
      assert!(result.steps.is_none(), "{input}");
      assert_eq!(result.factored, input);
    }
  }

  #[test]
  fn irreducible_input_is_not_factorable() {
    for input in ["x^2 + 1", "x^2+1", "x + 1", "7", "x"] {
      let result = factor_with_steps(input);
      assert!(!result.is_factorable, "{input}");
      assert!(result.steps.is_none(), "{input}");
      assert!(result.error.is_none(), "{input}");
    }
  }

  #[test]
  fn factoring_the_answer_again_changes_nothing() {
    for input in INPUTS {
      let first = factor_with_steps(input);
      let oracle_answer = NativeOracle.factor(input).unwrap();
      if first.factored == oracle_answer {
        let second = factor_with_steps(&first.factored);
        assert!(!second.is_factorable, "{input}");
      }
    }
  }
}

mod verification {
  use super::*;

  #[test]
  fn every_verification_agrees_with_the_oracle() {
    for input in INPUTS {
      let result = factor_with_steps(input);
      for step in result.steps() {
        if let Some(v) = &step.verification {
          assert_eq!(
            NativeOracle.expand(&v.factored).unwrap(),
            v.expanded,
            "{input}: step {}",
            step.step_number
          );
        }
      }
    }
  }

  #[test]
  fn recognized_patterns_are_all_verified() {
    for example in EXAMPLE_EXPRESSIONS {
      let result = factor_with_steps(example.expression);
      let last = result.steps().last().unwrap();
      assert!(last.verification.is_some(), "{}", example.expression);
    }
  }

  #[test]
  fn combine_step_reproduces_the_original() {
    let result = factor_with_steps("2*x^2 + 8*x + 8");
    let combine = result.steps().last().unwrap();
    let v = combine.verification.as_ref().unwrap();
    assert_eq!(v.factored, "2*(x + 2)^2");
    assert_eq!(v.expanded, "2*x^2 + 8*x + 8");
  }
}

mod contiguity {
  use super::*;

  #[test]
  fn step_numbers_count_from_one() {
    for input in INPUTS {
      let result = factor_with_steps(input);
      assert!(result.is_factorable, "{input}");
      for (i, step) in result.steps().iter().enumerate() {
        assert_eq!(step.step_number, i + 1, "{input}");
      }
    }
  }
}

mod gcf_monotonicity {
  use super::*;

  #[test]
  fn gcf_times_remaining_expands_to_the_original() {
    for input in [
      "2*x^2 + 8*x + 8",
      "3*x^3 - 12*x",
      "6*x^4 + 9*x^2",
      "4*x + 8",
      "-2*x^2 - 4",
      "-6*x^3 + 9*x",
    ] {
      let g = extract_gcf(&NativeOracle, input);
      assert!(g.has_gcf, "{input}");
      let product = format!("({})*({})", g.gcf, g.remaining);
      assert_eq!(
        NativeOracle.expand(&product).unwrap(),
        NativeOracle.expand(input).unwrap(),
        "{input}"
      );
    }
  }
}

mod signs {
  use super::*;

  #[test]
  fn negative_common_factor_is_pulled_out_whole() {
    let result = factor_with_steps("-2*x^2 - 4");
    assert_eq!(result.factored, "-2*(x^2 + 2)");
    assert_eq!(techniques(&result), vec![Technique::Gcf]);
    let step = &result.steps()[0];
    assert_eq!(step.expression, "-2*x^2 - 4 = -2*(x^2 + 2)");
    assert!(step.verification.is_some());
  }

  #[test]
  fn negative_common_factor_before_a_pattern() {
    let result = factor_with_steps("-3*x^2 + 12");
    assert_eq!(result.factored, "-3*(x + 2)*(x - 2)");
    assert_eq!(
      techniques(&result),
      vec![Technique::Gcf, Technique::DifferenceOfSquares]
    );
    assert_eq!(result.steps()[0].expression, "-3*x^2 + 12 = -3*(x^2 - 4)");
  }
}

mod reporting {
  use super::*;

  #[test]
  fn original_is_kept_verbatim() {
    let result = factor_with_steps("  x^2 - 4  ");
    assert_eq!(result.original, "  x^2 - 4  ");
    assert_eq!(result.factored, "(x + 2)*(x - 2)");
  }
}
