//! Runs the detectors in their fixed precedence and collects the
//! narration into a [`FactoringResult`].

use crate::config::FactorConfig;
use crate::detect::{
  difference_of_squares, extract_gcf, fallback, find_substitution,
  leading_factor, narrate_gcf, perfect_power, quadratic, substitute,
  sum_difference_of_cubes, Claim, Detection,
};
use crate::oracle::{same_expansion, Oracle};
use crate::steps::{
  FactoringResult, FactoringStep, GcfExtraction, StepLog, Technique,
  Verification,
};
use crate::syntax::same_form;
use crate::FactorError;
use log::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stage {
  Init,
  GcfCheck,
  PerfectPowerCheck,
  SubstitutionCheck,
  ShapeAnalysis,
  Verification,
  Done,
}

pub(crate) struct StepBuilder<'a> {
  oracle: &'a dyn Oracle,
  config: &'a FactorConfig,
  input: &'a str,
  stage: Stage,
  /// `run(input)`, the expression every step refers back to.
  normalized: String,
  /// What is left to factor after earlier stages.
  working: String,
  final_factored: String,
  /// Back-substituted result, which replaces `final_factored`.
  substituted: Option<String>,
  gcf: Option<GcfExtraction>,
  factorable: bool,
  log: StepLog,
}

impl<'a> StepBuilder<'a> {
  pub fn new(
    oracle: &'a dyn Oracle,
    config: &'a FactorConfig,
    input: &'a str,
  ) -> Self {
    StepBuilder {
      oracle,
      config,
      input,
      stage: Stage::Init,
      normalized: String::new(),
      working: String::new(),
      final_factored: String::new(),
      substituted: None,
      gcf: None,
      factorable: false,
      log: StepLog::default(),
    }
  }

  pub fn run(mut self) -> Result<FactoringResult, FactorError> {
    loop {
      debug!("stage {:?} on {:?}", self.stage, self.working);
      self.stage = match self.stage {
        Stage::Init => self.init()?,
        Stage::GcfCheck => self.gcf_check(),
        Stage::PerfectPowerCheck => self.perfect_power_check(),
        Stage::SubstitutionCheck => self.substitution_check(),
        Stage::ShapeAnalysis => self.shape_analysis(),
        Stage::Verification => self.verification(),
        Stage::Done => return Ok(self.finish()),
      };
    }
  }

  // ─── stages ───────────────────────────────────────────────────────

  fn init(&mut self) -> Result<Stage, FactorError> {
    let trimmed = self.input.trim();
    if trimmed.is_empty() {
      return Err(FactorError::EmptyInput);
    }
    self.final_factored = self.oracle.factor(trimmed)?;
    self.normalized = self.oracle.run(trimmed)?;
    if same_form(&self.final_factored, trimmed)
      || self.final_factored == self.normalized
    {
      debug!("{trimmed} is already fully factored");
      return Ok(Stage::Done);
    }
    self.factorable = true;
    self.working = self.normalized.clone();
    Ok(Stage::GcfCheck)
  }

  fn gcf_check(&mut self) -> Stage {
    let extraction = extract_gcf(self.oracle, &self.working);
    if !extraction.has_gcf {
      return Stage::PerfectPowerCheck;
    }
    let narrated = narrate_gcf(&self.working, &extraction);
    self.push(narrated.step, narrated.claim);
    self.working = extraction.remaining.clone();
    self.gcf = Some(extraction);

    let irreducible = self
      .oracle
      .factor(&self.working)
      .map_or(true, |f| f == self.working);
    if irreducible {
      debug!("{} does not factor further", self.working);
      Stage::Verification
    } else {
      Stage::PerfectPowerCheck
    }
  }

  fn perfect_power_check(&mut self) -> Stage {
    match perfect_power(self.oracle, &self.working, self.config.tolerance) {
      Some(detection) => {
        self.record(detection);
        Stage::Verification
      }
      None => Stage::SubstitutionCheck,
    }
  }

  fn substitution_check(&mut self) -> Stage {
    let detection = find_substitution(self.oracle, &self.working, self.config)
      .and_then(|sub| substitute(self.oracle, &sub));
    let Some(detection) = detection else {
      return Stage::ShapeAnalysis;
    };
    let answer = match &self.gcf {
      Some(g) => format!("{}*{}", leading_factor(&g.gcf), detection.factored),
      None => detection.factored.clone(),
    };
    self.record(detection);
    self.substituted = Some(answer);
    Stage::Verification
  }

  fn shape_analysis(&mut self) -> Stage {
    let (oracle, working) = (self.oracle, self.working.as_str());
    let detection = quadratic(oracle, working)
      .or_else(|| {
        difference_of_squares(oracle, working, self.config.nesting)
      })
      .or_else(|| sum_difference_of_cubes(oracle, working))
      .or_else(|| fallback(oracle, working));
    match detection {
      Some(detection) => self.record(detection),
      None => debug!("no shape matched {working}"),
    }
    Stage::Verification
  }

  fn verification(&mut self) -> Stage {
    let Some(gcf) = &self.gcf else {
      return Stage::Done;
    };
    let others = self.log.len() - self.log.count(Technique::Gcf);
    if others <= 1 {
      return Stage::Done;
    }
    let answer = self.answer().to_string();
    let step = FactoringStep::new(
      Technique::Gcf,
      "Combine all factors",
      format!("{} = {answer}", self.normalized),
      format!(
        "Put the common factor {} back in front of the factored form of \
         {} to get the complete factorization.",
        gcf.gcf, gcf.remaining
      ),
    );
    let claim = Claim {
      factored: answer,
      of: self.normalized.clone(),
    };
    self.push(step, Some(claim));
    Stage::Done
  }

  // ─── helpers ──────────────────────────────────────────────────────

  fn answer(&self) -> &str {
    self.substituted.as_deref().unwrap_or(&self.final_factored)
  }

  fn record(&mut self, detection: Detection) {
    for narrated in detection.steps {
      self.push(narrated.step, narrated.claim);
    }
  }

  fn push(&mut self, mut step: FactoringStep, claim: Option<Claim>) {
    if !self.config.include_tips {
      step.tip = None;
    }
    step.verification = claim.and_then(|c| self.verify(c));
    self.log.push(step);
  }

  /// A verification only when the oracle agrees with the claim.
  fn verify(&self, claim: Claim) -> Option<Verification> {
    if !same_expansion(self.oracle, &claim.factored, &claim.of) {
      debug!("{} does not expand to {}", claim.factored, claim.of);
      return None;
    }
    let expanded = self.oracle.expand(&claim.of).ok()?;
    Some(Verification {
      factored: claim.factored,
      expanded,
    })
  }

  fn finish(self) -> FactoringResult {
    if !self.factorable {
      return FactoringResult::not_factorable(self.input, self.final_factored);
    }
    let factored = self.answer().to_string();
    info!(
      "factored {} as {factored} in {} steps",
      self.input.trim(),
      self.log.len()
    );
    FactoringResult {
      original: self.input.to_string(),
      factored,
      is_factorable: true,
      error: None,
      steps: self.log.into_steps(),
    }
  }
}
