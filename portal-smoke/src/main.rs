use anyhow::bail;
use portal_smoke::{observability, runner, SmokeConfig};

const USAGE: &str = "usage: portal-smoke [-v | --verbose]

Runs HTTP smoke tests against a Document Portal deployment.

Environment:
  DOCUMENT_PORTAL_URL  portal base URL (default http://localhost:8000)
  ALB_URL              load-balancer base URL (unset disables ALB probes)
  RUST_LOG             tracing filter override";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let mut verbose = false;
    for arg in std::env::args().skip(1) {
        match arg.as_str() {
            "-v" | "--verbose" => verbose = true,
            "-h" | "--help" => {
                println!("{}", USAGE);
                return Ok(());
            }
            other => bail!("unrecognized argument: {}\n{}", other, USAGE),
        }
    }

    observability::init_tracing(verbose);

    let config = SmokeConfig::from_env();
    tracing::info!(
        portal = %config.portal_url,
        alb = config.alb_url.as_deref(),
        "starting document-portal smoke tests"
    );

    let report = runner::run(&config).await?;
    if report.failed() {
        std::process::exit(1);
    }
    Ok(())
}
