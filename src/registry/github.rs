use std::time::Duration;

use anyhow::Result;
use base64::{engine::general_purpose::STANDARD as BASE64_STANDARD, Engine as _};
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use reqwest::Client;
use serde::Deserialize;

use crate::models::RepositoryReference;

const USER_AGENT: &str = "repo-licensr/0.1.0 (license inventory tool)";
const ACCEPT: &str = "application/vnd.github+json";

/// License metadata as returned by `GET /repos/{owner}/{name}/license`.
#[derive(Debug, Deserialize)]
pub struct RepositoryLicense {
    /// Browser URL of the license file in the repository.
    pub html_url: Option<String>,
    /// Base64-encoded license file contents.
    pub content: Option<String>,
    /// The matched license template; `None` when the service returns no match.
    pub license: Option<LicenseInfo>,
}

#[derive(Debug, Deserialize)]
pub struct LicenseInfo {
    /// Lowercase identifier; the sentinel `other` marks an unclassified text.
    pub key: String,
    pub name: String,
}

/// The subset of repository metadata used by the existence check.
#[derive(Debug, Deserialize)]
pub struct Repository {
    pub full_name: String,
}

/// Build the HTTP client shared by all lookups.
///
/// An access token, when provided, is installed as a default bearer
/// `Authorization` header so every request is authenticated.
pub fn build_client(token: Option<&str>) -> Result<Client> {
    let mut headers = HeaderMap::new();
    if let Some(token) = token {
        let mut value = HeaderValue::try_from(format!("Bearer {token}"))?;
        value.set_sensitive(true);
        headers.insert(AUTHORIZATION, value);
    }

    let client = Client::builder()
        .timeout(Duration::from_secs(10))
        .default_headers(headers)
        .build()?;

    Ok(client)
}

/// Fetch a repository's license metadata.
pub async fn fetch_license(
    client: &Client,
    api_root: &str,
    reference: &RepositoryReference,
) -> Result<Option<RepositoryLicense>> {
    let url = format!(
        "{}/repos/{}/{}/license",
        api_root, reference.owner, reference.name
    );

    let response = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    Ok(Some(response.json().await?))
}

/// Fetch a repository's basic metadata, to tell "not found" apart from
/// "exists but has no detected license".
pub async fn fetch_repository(
    client: &Client,
    api_root: &str,
    reference: &RepositoryReference,
) -> Result<Option<Repository>> {
    let url = format!("{}/repos/{}/{}", api_root, reference.owner, reference.name);

    let response = client
        .get(&url)
        .header("User-Agent", USER_AGENT)
        .header("Accept", ACCEPT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Ok(None);
    }

    Ok(Some(response.json().await?))
}

/// Decode the base64 license contents embedded in a license response.
///
/// The API wraps the payload across lines, so whitespace is stripped before
/// decoding. Invalid UTF-8 bytes are replaced rather than rejected.
pub fn decode_content(content: &str) -> Result<String> {
    let compact: String = content.split_whitespace().collect();
    let bytes = BASE64_STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
