use serde::{Deserialize, Serialize};

use crate::clients::model::Client;

/// Client project. `client` is filled in by the dashboard layer when joining
/// with the clients table; the store row only carries `client_id`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Project {
    #[serde(rename = "id")]
    pub project_id: String,
    pub name: String,
    pub status: String, // "In Progress" | "On Track" | "At Risk" | ...
    pub progress: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_id: Option<String>,
    #[serde(rename = "clients", default)]
    pub client: Option<Client>,
    pub created_at: String,
}
