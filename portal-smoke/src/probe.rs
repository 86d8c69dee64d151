use reqwest::{header, Client, StatusCode};
use serde::Deserialize;
use serde_json::Value;

use crate::error::CheckError;

/// Which target a probe runs against. Drives the skip-vs-fail classification
/// in the runner: primary transport failures are skipped, load-balancer
/// transport failures are not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetClass {
    Primary,
    LoadBalancer,
}

/// What a probe asserts about the response beyond reachability.
#[derive(Debug, Clone, Copy)]
enum Expectation {
    /// 200 plus a JSON body with `status == "ok"` and a present `service`
    /// field.
    HealthJson,
    /// 200 plus a content-type containing `text/html`.
    Html,
    /// 200 plus a JSON body carrying both `openapi` and `info` fields.
    OpenApiJson,
    /// 200, body ignored.
    StatusOnly,
}

/// One HTTP GET plus its response assertions.
#[derive(Debug, Clone, Copy)]
pub struct Probe {
    pub name: &'static str,
    pub class: TargetClass,
    pub path: &'static str,
    expect: Expectation,
}

/// Probes run against `DOCUMENT_PORTAL_URL`.
pub const PRIMARY_PROBES: &[Probe] = &[
    Probe {
        name: "health",
        class: TargetClass::Primary,
        path: "/health",
        expect: Expectation::HealthJson,
    },
    Probe {
        name: "main page",
        class: TargetClass::Primary,
        path: "/",
        expect: Expectation::Html,
    },
    Probe {
        name: "api docs",
        class: TargetClass::Primary,
        path: "/docs",
        expect: Expectation::Html,
    },
    Probe {
        name: "redoc",
        class: TargetClass::Primary,
        path: "/redoc",
        expect: Expectation::Html,
    },
    Probe {
        name: "openapi schema",
        class: TargetClass::Primary,
        path: "/openapi.json",
        expect: Expectation::OpenApiJson,
    },
];

/// Probes run against `ALB_URL` when it is configured.
pub const ALB_PROBES: &[Probe] = &[
    Probe {
        name: "alb health",
        class: TargetClass::LoadBalancer,
        path: "/health",
        expect: Expectation::StatusOnly,
    },
    Probe {
        name: "alb main page",
        class: TargetClass::LoadBalancer,
        path: "/",
        expect: Expectation::StatusOnly,
    },
];

#[derive(Debug, Deserialize)]
struct HealthBody {
    status: String,
    // The contract is field presence, so a null service still counts. Only a
    // missing key leaves the default None.
    #[serde(default, deserialize_with = "present")]
    service: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Probe {
    /// Execute the probe against `base`.
    ///
    /// `Ok` carries a short human-readable annotation for the run log; it has
    /// no contract beyond observability.
    pub async fn run(&self, client: &Client, base: &str) -> Result<String, CheckError> {
        let url = format!("{}{}", base, self.path);
        let response = client.get(&url).send().await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(CheckError::Status {
                expected: StatusCode::OK.as_u16(),
                actual: status.as_u16(),
            });
        }

        match self.expect {
            Expectation::StatusOnly => Ok(format!("{} responded with {}", url, status)),
            Expectation::Html => {
                let content_type = response
                    .headers()
                    .get(header::CONTENT_TYPE)
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default();
                if !content_type.contains("text/html") {
                    return Err(CheckError::Assertion(format!(
                        "content-type {:?} does not contain text/html",
                        content_type
                    )));
                }
                Ok(format!("{} served html with {}", url, status))
            }
            Expectation::HealthJson => {
                let body: HealthBody = parse_json(&response.text().await?)?;
                if body.status != "ok" {
                    return Err(CheckError::Assertion(format!(
                        "health status is {:?}, expected \"ok\"",
                        body.status
                    )));
                }
                if body.service.is_none() {
                    return Err(CheckError::Assertion(
                        "health body is missing the service field".to_string(),
                    ));
                }
                Ok(format!("{} reported status ok", url))
            }
            Expectation::OpenApiJson => {
                let doc: Value = parse_json(&response.text().await?)?;
                for field in ["openapi", "info"] {
                    if doc.get(field).is_none() {
                        return Err(CheckError::Assertion(format!(
                            "schema is missing the {} field",
                            field
                        )));
                    }
                }
                Ok(format!("{} served an OpenAPI document", url))
            }
        }
    }
}

// Decoded by hand so that a non-JSON body counts as a contract violation
// rather than a transport error.
fn parse_json<T: serde::de::DeserializeOwned>(text: &str) -> Result<T, CheckError> {
    serde_json::from_str(text)
        .map_err(|e| CheckError::Assertion(format!("body is not the expected JSON shape: {}", e)))
}
