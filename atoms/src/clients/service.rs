use aws_sdk_dynamodb::Client as DynamoClient;

use super::model::Client;
use crate::error::StoreError;
use crate::store;

pub async fn load_clients(
    client: &DynamoClient,
    table_name: &str,
) -> Result<Vec<Client>, StoreError> {
    let items = store::query_collection(client, table_name, "CLIENT", None, vec![], vec![]).await?;

    Ok(items
        .iter()
        .filter_map(|item| {
            store::id_from_sk(item, "CLIENT#").map(|id| Client {
                client_id: id,
                name: store::str_attr(item, "name"),
            })
        })
        .collect())
}
