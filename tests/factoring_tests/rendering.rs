use super::*;

mod json {
  use super::*;

  #[test]
  fn camel_case_keys_and_kebab_techniques() {
    let result = factor_with_steps("x^2 - 4");
    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["original"], "x^2 - 4");
    assert_eq!(json["factored"], "(x + 2)*(x - 2)");
    assert_eq!(json["isFactorable"], true);
    assert!(json.get("error").is_none());
    let step = &json["steps"][0];
    assert_eq!(step["stepNumber"], 1);
    assert_eq!(step["technique"], "difference-of-squares");
    assert_eq!(step["verification"]["factored"], "(x + 2)*(x - 2)");
    assert_eq!(step["verification"]["expanded"], "x^2 - 4");
  }

  #[test]
  fn errors_omit_steps() {
    let json = serde_json::to_value(factor_with_steps("")).unwrap();
    assert_eq!(json["error"], "Please enter an expression");
    assert_eq!(json["factored"], "");
    assert!(json.get("steps").is_none());
  }

  #[test]
  fn round_trips_through_serde() {
    let result = factor_with_steps("2*x^2 + 8*x + 8");
    let text = serde_json::to_string(&result).unwrap();
    let back: FactoringResult = serde_json::from_str(&text).unwrap();
    assert_eq!(back, result);
  }
}

mod text {
  use super::*;

  #[test]
  fn difference_of_squares() {
    insta::assert_snapshot!(factor_with_steps("x^2 - 4").to_string(), @r###"
    x^2 - 4 = (x + 2)*(x - 2)

    Step 1: Factor the difference of squares [difference-of-squares]
      x^2 - 4 = (x + 2)*(x - 2)
      x^2 = (x)^2 and 4 = (2)^2, so this is a^2 - b^2 with a = x and b = 2, which factors as (a + b)(a - b).
      Tip: A difference of two squares always splits as (a + b)(a - b).
      Check: (x + 2)*(x - 2) expands to x^2 - 4
    "###);
  }

  #[test]
  fn technique_sequence_of_the_examples() {
    let lines: Vec<String> = stepfactor::EXAMPLE_EXPRESSIONS
      .iter()
      .map(|e| {
        let result = factor_with_steps(e.expression);
        let names: Vec<&str> =
          result.techniques().iter().map(|t| t.as_str()).collect();
        format!("{}: {}", e.expression, names.join(", "))
      })
      .collect();
    insta::assert_snapshot!(lines.join("\n"), @r###"
    x^2 - 4: difference-of-squares
    x^2 + 5*x + 6: quadratic, quadratic, quadratic
    x^2 - 6*x + 9: perfect-square, perfect-square
    x^3 - 8: sum-difference-cubes, sum-difference-cubes
    2*x^2 + 8*x + 8: gcf, perfect-square, perfect-square, gcf
    x^4 - 16: difference-of-squares, difference-of-squares
    "###);
  }

  #[test]
  fn not_factorable() {
    assert_eq!(
      factor_with_steps("x^2 + 1").to_string(),
      "x^2 + 1 cannot be factored further"
    );
  }
}
