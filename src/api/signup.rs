use crate::api::{read_outcome, signup_url, ApiError};
use log::{debug, info};
use reqwest::Client;

/// Signs `email` up for `activity`. Returns the server's confirmation
/// message on success.
pub async fn sign_up(
    client: &Client,
    base_url: &str,
    activity: &str,
    email: &str,
) -> Result<String, ApiError> {
    let url = signup_url(base_url, activity, email);
    debug!("Signing up {} for {:?}", email, activity);
    let resp = client.post(&url).send().await?;
    let message = read_outcome(resp).await?;
    info!("Signup accepted for {:?}", activity);
    Ok(message)
}
