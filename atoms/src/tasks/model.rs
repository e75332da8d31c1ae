use serde::{Deserialize, Serialize};

/// Production task. Status is an open string compared by exact equality;
/// the dashboards recognize "To Do" | "In Progress" | "In Review" | "Done"
/// and anything else simply falls outside every bucket.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Task {
    #[serde(rename = "id")]
    pub task_id: String,
    pub title: String,
    pub status: String,
    pub due_date: String,
    pub assignee_id: String,
    pub project_id: String,
    pub created_at: String,
}
