use crate::api::{catalog_url, ApiError};
use crate::models::activity::Catalog;
use log::{debug, error, info};
use reqwest::Client;

/// Fetches the full, authoritative activity catalog. No retries; the caller
/// decides how a failure is surfaced.
pub async fn fetch_catalog(client: &Client, base_url: &str) -> Result<Catalog, ApiError> {
    let url = catalog_url(base_url);
    debug!("Fetching catalog from {}", url);
    let resp = client.get(&url).send().await?;

    if resp.status().is_success() {
        let catalog = resp.json::<Catalog>().await?;
        info!("Catalog received: {} activities", catalog.len());
        Ok(catalog)
    } else {
        let status = resp.status();
        error!("Catalog request rejected: {}", status);
        Err(ApiError::Rejected {
            status,
            detail: None,
        })
    }
}
