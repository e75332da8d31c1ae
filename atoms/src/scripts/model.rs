use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Script {
    #[serde(rename = "id")]
    pub script_id: String,
    pub title: String,
    pub version: String,
    pub status: String,
    pub project_id: String,
}
