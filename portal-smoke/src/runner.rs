use anyhow::Result;
use reqwest::Client;

use crate::config::SmokeConfig;
use crate::error::CheckError;
use crate::probe::{TargetClass, ALB_PROBES, PRIMARY_PROBES};

/// Result of one probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// All assertions held. Carries the probe's success annotation.
    Pass(String),
    /// The target was reachable but violated the probe's contract, or a
    /// configured load balancer could not be reached.
    Fail(String),
    /// The portal could not be reached, so the probe could not be evaluated.
    Skip(String),
}

impl Outcome {
    pub fn is_fail(&self) -> bool {
        matches!(self, Outcome::Fail(_))
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Outcome::Skip(_))
    }
}

/// Map a check result onto an outcome.
///
/// An unreachable portal is an environment gap, so primary transport errors
/// downgrade to skip. A configured load balancer is expected to be up, so its
/// transport errors stay failures.
pub fn classify(class: TargetClass, result: Result<String, CheckError>) -> Outcome {
    match result {
        Ok(note) => Outcome::Pass(note),
        Err(e) if e.is_transport() && class == TargetClass::Primary => Outcome::Skip(e.to_string()),
        Err(e) => Outcome::Fail(e.to_string()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeReport {
    pub name: &'static str,
    pub outcome: Outcome,
}

/// Aggregated outcomes of one full run. Load-balancer probes are absent when
/// no `ALB_URL` was configured.
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub probes: Vec<ProbeReport>,
}

impl SuiteReport {
    /// True iff at least one probe failed. Skips never fail the suite.
    pub fn failed(&self) -> bool {
        self.probes.iter().any(|p| p.outcome.is_fail())
    }

    /// (passed, failed, skipped) counts for the run summary.
    pub fn counts(&self) -> (usize, usize, usize) {
        let failed = self.probes.iter().filter(|p| p.outcome.is_fail()).count();
        let skipped = self.probes.iter().filter(|p| p.outcome.is_skip()).count();
        (self.probes.len() - failed - skipped, failed, skipped)
    }
}

/// Run every applicable probe against the configured targets.
///
/// Probes are independent; one probe's failure never aborts the rest. The
/// returned report carries every outcome in probe order.
pub async fn run(config: &SmokeConfig) -> Result<SuiteReport> {
    let client = Client::builder().timeout(config.timeout).build()?;
    let mut report = SuiteReport::default();

    for probe in PRIMARY_PROBES {
        let outcome = classify(probe.class, probe.run(&client, &config.portal_url).await);
        log_outcome(probe.name, &outcome);
        report.probes.push(ProbeReport {
            name: probe.name,
            outcome,
        });
    }

    match &config.alb_url {
        Some(alb_url) => {
            for probe in ALB_PROBES {
                let outcome = classify(probe.class, probe.run(&client, alb_url).await);
                log_outcome(probe.name, &outcome);
                report.probes.push(ProbeReport {
                    name: probe.name,
                    outcome,
                });
            }
        }
        None => tracing::info!("ALB_URL not configured, load-balancer probes not applicable"),
    }

    let (passed, failed, skipped) = report.counts();
    if report.failed() {
        tracing::error!(passed, failed, skipped, "smoke tests failed");
    } else {
        tracing::info!(passed, failed, skipped, "smoke tests passed");
    }

    Ok(report)
}

fn log_outcome(name: &str, outcome: &Outcome) {
    match outcome {
        Outcome::Pass(note) => tracing::info!(probe = name, "passed: {}", note),
        Outcome::Fail(reason) => tracing::error!(probe = name, "failed: {}", reason),
        Outcome::Skip(reason) => tracing::warn!(probe = name, "skipped: {}", reason),
    }
}
