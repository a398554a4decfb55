use crate::models::mutation::{MutationAccepted, MutationRejected};
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::{Response, StatusCode};
use thiserror::Error;

pub mod catalog;
pub mod removal;
pub mod signup;

#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or an undecodable success body. No structured detail
    /// is available, so callers surface a generic fallback.
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
    /// The server answered with a non-success status.
    #[error("server rejected the request ({status})")]
    Rejected {
        status: StatusCode,
        detail: Option<String>,
    },
}

/// Everything outside the RFC 3986 unreserved set is escaped. Activity names
/// and emails are free-form strings that end up in path and query positions,
/// and both positions must encode them identically.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

fn encode_component(raw: &str) -> String {
    utf8_percent_encode(raw, COMPONENT).to_string()
}

pub fn catalog_url(base_url: &str) -> String {
    format!("{}/activities", base_url)
}

pub fn signup_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/signup?email={}",
        base_url,
        encode_component(activity),
        encode_component(email)
    )
}

pub fn removal_url(base_url: &str, activity: &str, email: &str) -> String {
    format!(
        "{}/activities/{}/participants/{}",
        base_url,
        encode_component(activity),
        encode_component(email)
    )
}

/// Interprets a signup/removal response. Success is decided by the status
/// class alone; a success body that does not decode is a transport failure,
/// while an unparseable failure body just loses its detail text.
pub(crate) async fn read_outcome(resp: Response) -> Result<String, ApiError> {
    let status = resp.status();
    if status.is_success() {
        let body = resp.json::<MutationAccepted>().await?;
        Ok(body.message)
    } else {
        let detail = resp
            .text()
            .await
            .ok()
            .and_then(|text| serde_json::from_str::<MutationRejected>(&text).ok())
            .map(|body| body.detail);
        Err(ApiError::Rejected { status, detail })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_url_targets_the_listing() {
        assert_eq!(
            catalog_url("http://localhost:8000"),
            "http://localhost:8000/activities"
        );
    }

    #[test]
    fn signup_url_escapes_both_components() {
        assert_eq!(
            signup_url("http://localhost:8000", "Chess Club", "a+b@x.com"),
            "http://localhost:8000/activities/Chess%20Club/signup?email=a%2Bb%40x.com"
        );
    }

    #[test]
    fn removal_url_escapes_both_components() {
        assert_eq!(
            removal_url("http://localhost:8000", "Chess Club", "a+b@x.com"),
            "http://localhost:8000/activities/Chess%20Club/participants/a%2Bb%40x.com"
        );
    }

    #[test]
    fn reserved_characters_encode_identically_in_both_targets() {
        let activity = "Arts & Crafts";
        let email = "odd name@x.com";
        let encoded = encode_component(activity);
        assert_eq!(encoded, "Arts%20%26%20Crafts");
        assert!(signup_url("http://h", activity, email).contains(&encoded));
        assert!(removal_url("http://h", activity, email).contains(&encoded));
        assert!(signup_url("http://h", activity, email).contains("odd%20name%40x.com"));
        assert!(removal_url("http://h", activity, email).contains("odd%20name%40x.com"));
    }

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(encode_component("a-b.c_d~e"), "a-b.c_d~e");
    }
}
