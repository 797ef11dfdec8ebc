//! Registry file handling.
//!
//! Finds (or downloads) the registry file, parses it and removes it afterwards.

use super::fetch::fetch_registry;
use crate::models::NetworkRegistry;
use colored::Colorize;
use std::error::Error;
use std::path::Path;

/// Load the network registry from `path`.
///
/// When `path` does not exist and `url` is given, the registry is downloaded to
/// `path` first. After a successful parse the file is deleted unless `keep` is
/// set; a file that fails to parse is left on disk.
///
/// # Returns
/// * `Ok(NetworkRegistry)` - The parsed registry
/// * `Err` - If the file is missing without a URL, the download fails or a line
///   is malformed
pub async fn load_registry(
    path: &Path,
    url: Option<&str>,
    keep: bool,
) -> Result<NetworkRegistry, Box<dyn Error>> {
    if !path.exists() {
        match url {
            Some(url) => {
                log::warn!("Registry file not found: {}", path.display());
                fetch_registry(url, path).await?;
            }
            None => {
                return Err(format!(
                    "Registry file does not exist: {} (no download url configured)",
                    path.display()
                )
                .into())
            }
        }
    }

    log::info!("Reading registry file: {}", path.display());
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Error reading registry file {}: {e}", path.display()))?;
    let registry = NetworkRegistry::parse_str(&text).map_err(|e| {
        log::error!(
            "{} parsing {}: {e}",
            "ERROR".on_red(),
            path.display().to_string().on_blue()
        );
        e
    })?;
    log::info!("Registry has {} networks", registry.len());

    if keep {
        log::debug!("keeping registry file {}", path.display());
    } else {
        std::fs::remove_file(path)
            .map_err(|e| format!("Error removing registry file {}: {e}", path.display()))?;
        log::debug!("removed registry file {}", path.display());
    }

    Ok(registry)
}
