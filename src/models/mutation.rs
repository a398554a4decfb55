use serde::Deserialize;

/// Body of a successful signup or removal response.
#[derive(Deserialize, Debug)]
pub struct MutationAccepted {
    pub message: String,
}

/// Body of a rejected signup or removal response.
#[derive(Deserialize, Debug)]
pub struct MutationRejected {
    pub detail: String,
}
