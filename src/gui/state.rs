use crate::api::catalog::fetch_catalog;
use crate::api::removal::remove_participant;
use crate::api::signup::sign_up;
use crate::api::ApiError;
use crate::models::activity::Catalog;
use crate::models::feedback::{Feedback, Severity};
use crate::APP_STATE;
use log::error;
use std::time::Duration;

/// Auto-dismiss delays differ on purpose: signup keeps its message up for
/// 5 s, removal for 3 s.
pub const SIGNUP_DISMISS: Duration = Duration::from_secs(5);
pub const REMOVAL_DISMISS: Duration = Duration::from_secs(3);

pub const SIGNUP_FALLBACK: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const REMOVAL_FALLBACK: &str = "Failed to remove participant";

/// A removal waiting for the user's yes/no in the confirmation dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRemoval {
    pub activity: String,
    pub email: String,
}

impl PendingRemoval {
    pub fn prompt(&self) -> String {
        format!("Remove {} from {}?", self.email, self.activity)
    }
}

#[derive(Default)]
pub struct AppState {
    pub base_url: String,
    pub catalog: Catalog,
    pub catalog_loaded: bool,
    pub catalog_failed: bool,
    pub email_input: String,
    pub selected_activity: Option<String>,
    pub pending_removal: Option<PendingRemoval>,
    pub feedback: Feedback,
}

impl AppState {
    /// Replaces the catalog snapshot wholesale, or marks the listing surface
    /// as failed while leaving the previous snapshot (and with it the
    /// selection control's options) in place.
    fn apply_fetch(&mut self, result: Result<Catalog, ApiError>) {
        match result {
            Ok(catalog) => {
                self.catalog = catalog;
                self.catalog_loaded = true;
                self.catalog_failed = false;
            }
            Err(e) => {
                error!("Failed to fetch catalog: {}", e);
                self.catalog_failed = true;
            }
        }
    }

    /// Fetches a fresh catalog in the background. Runs once at startup and
    /// after every successful mutation.
    pub fn refresh_catalog(&self) {
        let client = reqwest::Client::new();
        let base_url = self.base_url.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(fetch_catalog(&client, &base_url));
            APP_STATE.lock().unwrap().apply_fetch(result);
        });
    }

    /// Submits the signup form. On success the form is cleared, the server's
    /// message is shown, and the catalog is refetched so the rendered state
    /// stays authoritative.
    pub fn submit_signup(&self) {
        let Some(activity) = self.selected_activity.clone() else {
            return;
        };
        let email = self.email_input.trim().to_owned();
        if email.is_empty() {
            return;
        }

        let client = reqwest::Client::new();
        let base_url = self.base_url.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(sign_up(&client, &base_url, &activity, &email));

            match result {
                Ok(message) => {
                    {
                        let mut state = APP_STATE.lock().unwrap();
                        state.email_input.clear();
                        state.selected_activity = None;
                        state.feedback.show(message, Severity::Success);
                    }
                    let refreshed = rt.block_on(fetch_catalog(&client, &base_url));
                    let mut state = APP_STATE.lock().unwrap();
                    state.apply_fetch(refreshed);
                    state.feedback.schedule_dismiss(SIGNUP_DISMISS);
                }
                Err(ApiError::Rejected { detail, .. }) => {
                    let text = detail.unwrap_or_else(|| SIGNUP_REJECTED_FALLBACK.to_owned());
                    let mut state = APP_STATE.lock().unwrap();
                    state.feedback.show(text, Severity::Error);
                    state.feedback.schedule_dismiss(SIGNUP_DISMISS);
                }
                Err(e) => {
                    error!("Signup request failed: {}", e);
                    let mut state = APP_STATE.lock().unwrap();
                    state.feedback.show(SIGNUP_FALLBACK.to_owned(), Severity::Error);
                    state.feedback.schedule_dismiss(SIGNUP_DISMISS);
                }
            }
        });
    }

    /// Stages a removal; nothing is sent until the user confirms.
    pub fn request_removal(&mut self, activity: String, email: String) {
        self.pending_removal = Some(PendingRemoval { activity, email });
    }

    /// The user declined: drop the staged removal with no network call and
    /// no other state change.
    pub fn cancel_removal(&mut self) {
        self.pending_removal = None;
    }

    /// The user confirmed: send the removal. On success the catalog is
    /// refetched before the message is shown.
    pub fn confirm_removal(&mut self) {
        let Some(pending) = self.pending_removal.take() else {
            return;
        };

        let client = reqwest::Client::new();
        let base_url = self.base_url.clone();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            let result = rt.block_on(remove_participant(
                &client,
                &base_url,
                &pending.activity,
                &pending.email,
            ));

            match result {
                Ok(message) => {
                    let refreshed = rt.block_on(fetch_catalog(&client, &base_url));
                    let mut state = APP_STATE.lock().unwrap();
                    state.apply_fetch(refreshed);
                    state.feedback.show(message, Severity::Success);
                    state.feedback.schedule_dismiss(REMOVAL_DISMISS);
                }
                Err(ApiError::Rejected { detail, .. }) => {
                    let text = detail.unwrap_or_else(|| REMOVAL_FALLBACK.to_owned());
                    let mut state = APP_STATE.lock().unwrap();
                    state.feedback.show(text, Severity::Error);
                    state.feedback.schedule_dismiss(REMOVAL_DISMISS);
                }
                Err(e) => {
                    error!("Removal request failed: {}", e);
                    let mut state = APP_STATE.lock().unwrap();
                    state
                        .feedback
                        .show(REMOVAL_FALLBACK.to_owned(), Severity::Error);
                    state.feedback.schedule_dismiss(REMOVAL_DISMISS);
                }
            }
        });
    }
}
