use serde::{Deserialize, Serialize};

/// Sales lead. `client_id` links closed revenue to a client record; older
/// rows may only carry the free-text `client_name`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Lead {
    #[serde(rename = "id")]
    pub lead_id: String,
    pub client_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    pub status: String, // "New" | "Contacted" | "Proposal" | "Negotiation" | "Closed"
    pub value: f64,
    pub created_at: String,
}
