use anyhow::Result;
use clap::{Parser, Subcommand};
use log::info;
use stepfactor::{
  FactorConfig, Factorizer, FactoringResult, NativeOracle, NestingPolicy,
  EXAMPLE_EXPRESSIONS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
  /// Log level: off, error, warn, info, debug or trace
  #[arg(long, global = true, default_value = "warn")]
  log_level: String,

  #[command(subcommand)]
  command: Commands,
}

#[derive(Subcommand)]
enum Commands {
  /// Factor a polynomial and explain each step
  Factor {
    /// The polynomial, e.g. "2*x^2 + 8*x + 8"
    expression: String,
    /// Print the result as JSON
    #[arg(long)]
    json: bool,
    /// Only split the outermost difference of squares
    #[arg(long)]
    single_pass: bool,
    /// Leave tips out of the steps
    #[arg(long)]
    no_tips: bool,
    /// Tolerance of the perfect-power middle-term check
    #[arg(long, default_value_t = 1e-9)]
    tolerance: f64,
  },
  /// Check whether an expression can be evaluated
  Check {
    expression: String,
  },
  /// Factor every built-in example
  Examples {
    #[arg(long)]
    json: bool,
  },
}

fn print_result(result: &FactoringResult, json: bool) -> Result<()> {
  if json {
    println!("{}", serde_json::to_string_pretty(result)?);
  } else {
    println!("{result}");
  }
  Ok(())
}

fn main() -> Result<()> {
  let cli = Cli::parse();
  simple_log::console(cli.log_level.as_str()).map_err(anyhow::Error::msg)?;

  match cli.command {
    Commands::Factor {
      expression,
      json,
      single_pass,
      no_tips,
      tolerance,
    } => {
      let config = FactorConfig {
        nesting: if single_pass {
          NestingPolicy::SinglePass
        } else {
          NestingPolicy::Recursive
        },
        tolerance,
        include_tips: !no_tips,
        ..FactorConfig::default()
      };
      let factorizer = Factorizer::with_config(NativeOracle, config);
      let result = factorizer.factor_with_steps(&expression);
      print_result(&result, json)?;
      if result.error.is_some() {
        std::process::exit(1);
      }
    }
    Commands::Check { expression } => {
      if stepfactor::validate_expression(&expression) {
        println!("valid");
      } else {
        println!("invalid");
        std::process::exit(1);
      }
    }
    Commands::Examples { json } => {
      let factorizer = Factorizer::new(NativeOracle);
      let results: Vec<FactoringResult> = EXAMPLE_EXPRESSIONS
        .iter()
        .map(|example| {
          info!("example: {}", example.description);
          factorizer.factor_with_steps(example.expression)
        })
        .collect();
      if json {
        println!("{}", serde_json::to_string_pretty(&results)?);
      } else {
        for (example, result) in EXAMPLE_EXPRESSIONS.iter().zip(&results) {
          println!("# {}\n{result}\n", example.description);
        }
      }
    }
  }
  Ok(())
}
