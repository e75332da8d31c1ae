use serde::{Deserialize, Serialize};

/// Employee record. Looked up by email at login; the demo store seeds one
/// user per dashboard role.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct User {
    #[serde(rename = "id")]
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub role: String, // "Content Strategist" | "Project Manager" | "Executive" | ...
    pub joined_date: String,
    pub avatar_url: String,
}
