//! Registry download over HTTP(S).

use crate::config;
use colored::Colorize;
use std::error::Error;
use std::net::IpAddr;
use std::path::Path;
use std::time::Duration;

/// Build the HTTP client; loopback mirrors bypass any configured proxy.
fn client_for(url: &reqwest::Url) -> Result<reqwest::Client, reqwest::Error> {
    let builder =
        reqwest::Client::builder().timeout(Duration::from_secs(config::FETCH_TIMEOUT_SECS));
    let loopback = match url.host_str() {
        Some("localhost") => true,
        Some(host) => host
            .trim_matches(&['[', ']'][..])
            .parse::<IpAddr>()
            .map(|ip| ip.is_loopback())
            .unwrap_or(false),
        None => false,
    };
    if loopback {
        builder.no_proxy().build()
    } else {
        builder.build()
    }
}

/// Download the registry text from `url` and write it to `dest`.
///
/// Nothing is written unless the server answers with a success status.
///
/// # Returns
/// * `Ok(usize)` - Number of bytes written
/// * `Err` - If the request fails, the server answers with an error status or
///   the file cannot be written
pub async fn fetch_registry(url: &str, dest: &Path) -> Result<usize, Box<dyn Error>> {
    log::info!("Downloading registry {url} -> {}", dest.display());

    let parsed =
        reqwest::Url::parse(url).map_err(|e| format!("Invalid registry url {url}: {e}"))?;
    let client = client_for(&parsed)?;

    let response = client.get(parsed).send().await.map_err(|e| {
        log::warn!("{failed} to fetch {url}", failed = "failed".on_red());
        format!("Error downloading registry from {url}: {e}")
    })?;
    let response = response
        .error_for_status()
        .map_err(|e| format!("Registry download refused by server: {e}"))?;
    let body = response
        .text()
        .await
        .map_err(|e| format!("Error reading registry response body: {e}"))?;

    std::fs::write(dest, &body)
        .map_err(|e| format!("Error writing registry file {}: {e}", dest.display()))?;
    log::debug!("wrote {} bytes to {}", body.len(), dest.display());

    Ok(body.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::test_server::serve_once;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("subnet_matcher_{}_{name}", std::process::id()))
    }

    #[tokio::test]
    async fn test_fetch_registry_writes_body() {
        let body = "lab\t10.9.0.0/24\tLab network\n";
        let url = serve_once("200 OK", body.to_string()).await;
        let dest = temp_path("fetch_ok.local");

        let written = fetch_registry(&url, &dest).await.expect("Error fetching registry");
        assert_eq!(written, body.len());
        assert_eq!(std::fs::read_to_string(&dest).unwrap(), body);
        std::fs::remove_file(&dest).ok();
    }

    #[tokio::test]
    async fn test_fetch_registry_error_status_writes_nothing() {
        let url = serve_once("404 Not Found", "gone".to_string()).await;
        let dest = temp_path("fetch_404.local");

        let err = fetch_registry(&url, &dest).await.unwrap_err();
        assert!(err.to_string().contains("refused"), "got: {err}");
        assert!(!dest.exists(), "no registry file on error status");
    }

    #[tokio::test]
    async fn test_fetch_registry_invalid_url() {
        let err = fetch_registry("not a url", &temp_path("bad_url.local"))
            .await
            .unwrap_err();
        assert!(err.to_string().starts_with("Invalid registry url"), "got: {err}");
    }
}
