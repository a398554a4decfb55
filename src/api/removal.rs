use crate::api::{read_outcome, removal_url, ApiError};
use log::{debug, info};
use reqwest::Client;

/// Removes `email` from `activity`'s participant list. Returns the server's
/// confirmation message on success.
pub async fn remove_participant(
    client: &Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> Result<String, ApiError> {
    let url = removal_url(base_url, activity, email);
    debug!("Removing {} from {:?}", email, activity);
    let resp = client.delete(&url).send().await?;
    let message = read_outcome(resp).await?;
    info!("Removal accepted for {:?}", activity);
    Ok(message)
}
