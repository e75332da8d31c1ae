use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Task;
use crate::error::StoreError;
use crate::store::{self, Item};

fn task_from_item(task_id: String, item: &Item) -> Task {
    Task {
        task_id,
        title: store::str_attr(item, "title"),
        status: store::str_attr(item, "status"),
        due_date: store::str_attr(item, "due_date"),
        assignee_id: store::str_attr(item, "assignee_id"),
        project_id: store::str_attr(item, "project_id"),
        created_at: store::str_attr(item, "created_at"),
    }
}

fn tasks_from_items(items: &[Item]) -> Vec<Task> {
    items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "TASK#").map(|id| task_from_item(id, item))
        })
        .collect()
}

/// Tasks assigned to one user, created on or after `since` (RFC3339).
/// The employee dashboard reads a trailing 28-day window.
pub async fn load_tasks_for_assignee(
    client: &DynamoClient,
    table_name: &str,
    assignee_id: &str,
    since: &str,
) -> Result<Vec<Task>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "TASK",
        Some("assignee_id = :uid AND created_at >= :since"),
        vec![],
        vec![
            (":uid", AttributeValue::S(assignee_id.to_string())),
            (":since", AttributeValue::S(since.to_string())),
        ],
    )
    .await?;

    Ok(tasks_from_items(&items))
}

/// All tasks not yet done, soonest deadline first.
pub async fn load_open_tasks(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Task>, StoreError> {
    let items = store::query_collection(
        client,
        table_name,
        "TASK",
        Some("#status <> :done"),
        vec![("#status", "status".to_string())],
        vec![(":done", AttributeValue::S("Done".to_string()))],
    )
    .await?;

    let mut tasks = tasks_from_items(&items);
    tasks.sort_by(|a, b| a.due_date.cmp(&b.due_date));
    Ok(tasks)
}
