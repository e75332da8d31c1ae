use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Project;
use crate::error::StoreError;
use crate::store;

/// All projects, newest first. The `client` back-reference is left empty
/// here and joined in by the dashboard layer.
pub async fn load_projects(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Project>, StoreError> {
    let items = store::query_collection(client, table_name, "PROJECT", None, vec![], vec![]).await?;

    let mut projects: Vec<Project> = items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "PROJECT#").map(|id| Project {
                project_id: id,
                name: store::str_attr(item, "name"),
                status: store::str_attr(item, "status"),
                progress: store::num_attr(item, "progress"),
                client_id: store::opt_str_attr(item, "client_id"),
                client: None,
                created_at: store::str_attr(item, "created_at"),
            })
        })
        .collect();

    projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    Ok(projects)
}
