//! HTTP smoke tests for a deployed Document Portal instance.
//!
//! Probes a running portal (and optionally the load balancer in front of it)
//! over plain HTTP and classifies every probe as pass, fail, or skip. An
//! unreachable portal is treated as an environment gap rather than a defect,
//! so its probes are skipped; a configured load-balancer endpoint advertises
//! an availability commitment, so unreachability there is a hard failure.
//!
//! ## Usage
//!
//! ```bash
//! # Against a local portal
//! cargo run -p portal-smoke
//!
//! # Against a deployed environment
//! DOCUMENT_PORTAL_URL=https://portal.example.com \
//! ALB_URL=https://portal-alb.example.com \
//! cargo run -p portal-smoke
//! ```

pub mod config;
pub mod error;
pub mod observability;
pub mod probe;
pub mod runner;

pub use config::SmokeConfig;
pub use error::CheckError;
pub use probe::{Probe, TargetClass};
pub use runner::{Outcome, ProbeReport, SuiteReport};
