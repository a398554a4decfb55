use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Full activity catalog as served by `GET /activities`. The server's
/// mapping order is the only defined ordering, so the map must preserve it.
pub type Catalog = IndexMap<String, Activity>;

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    /// Remaining capacity, for display only. Not clamped: the server owns
    /// the invariant, and an overbooked activity should show as negative.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }
}
