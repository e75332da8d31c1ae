use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Shoot {
    #[serde(rename = "id")]
    pub shoot_id: String,
    pub title: String,
    pub shoot_date: String,
    pub project_id: String,
}
