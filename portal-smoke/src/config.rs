use std::env;
use std::time::Duration;

/// Base URL used for the portal when `DOCUMENT_PORTAL_URL` is not set.
pub const DEFAULT_PORTAL_URL: &str = "http://localhost:8000";

/// Hard per-request timeout applied to every probe.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Target configuration for one smoke-test run.
///
/// Read once at startup and passed explicitly to the runner; nothing is
/// re-read from the environment after construction.
#[derive(Debug, Clone)]
pub struct SmokeConfig {
    /// Base URL of the Document Portal under test.
    pub portal_url: String,
    /// Base URL of the load balancer in front of the portal. `None` disables
    /// the load-balancer probes entirely.
    pub alb_url: Option<String>,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl SmokeConfig {
    pub fn new(portal_url: impl Into<String>, alb_url: Option<String>) -> Self {
        Self {
            portal_url: trim_base(portal_url.into()),
            alb_url: alb_url.map(trim_base),
            timeout: REQUEST_TIMEOUT,
        }
    }

    /// Load targets from `DOCUMENT_PORTAL_URL` and `ALB_URL`.
    ///
    /// An unset or empty `ALB_URL` disables the load-balancer probes; an
    /// unset `DOCUMENT_PORTAL_URL` falls back to [`DEFAULT_PORTAL_URL`].
    pub fn from_env() -> Self {
        let portal = env::var("DOCUMENT_PORTAL_URL")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_PORTAL_URL.to_string());
        let alb = env::var("ALB_URL").ok().filter(|v| !v.trim().is_empty());
        Self::new(portal, alb)
    }
}

// Probe paths all start with '/', so a trailing slash on the base would
// produce double-slash URLs.
fn trim_base(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
