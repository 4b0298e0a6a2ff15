use anyhow::{anyhow, Result};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use crate::models::{Ecosystem, Module};

#[derive(Debug, Deserialize)]
struct VersionResponse {
    #[serde(default)]
    licenses: Vec<String>,
}

/// Fetch the SPDX license expression for `module` from a deps.dev-style API.
pub async fn fetch_license(
    client: &Client,
    registry: &str,
    ecosystem: Ecosystem,
    module: &Module,
) -> Result<Option<String>> {
    let url = version_url(registry, ecosystem, module);

    let response = client
        .get(&url)
        .header("User-Agent", concat!("license-csv/", env!("CARGO_PKG_VERSION")))
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        log::debug!("{} returned {}", url, status);
        return Ok(None);
    }
    if !status.is_success() {
        return Err(anyhow!("{} returned {}", url, status));
    }

    let body = response.text().await?;
    parse_licenses(&body)
}

fn version_url(registry: &str, ecosystem: Ecosystem, module: &Module) -> String {
    format!(
        "{}/v3/systems/{}/packages/{}/versions/{}",
        registry.trim_end_matches('/'),
        ecosystem.system(),
        escape(&module.path),
        escape(&module.version),
    )
}

/// Percent-encode the characters that would otherwise split a path segment.
fn escape(segment: &str) -> String {
    segment
        .replace('%', "%25")
        .replace('/', "%2F")
        .replace('@', "%40")
        .replace('+', "%2B")
}

/// Several licenses on one version all apply, so they are joined with `AND`.
fn parse_licenses(body: &str) -> Result<Option<String>> {
    let data: VersionResponse = serde_json::from_str(body)?;
    let licenses: Vec<&str> = data
        .licenses
        .iter()
        .map(|l| l.trim())
        .filter(|l| !l.is_empty() && *l != "non-standard")
        .collect();

    if licenses.is_empty() {
        return Ok(None);
    }
    Ok(Some(licenses.join(" AND ")))
}
