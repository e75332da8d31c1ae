use std::collections::HashMap;

use aws_sdk_dynamodb::Client as DynamoClient;
use chrono::{Duration, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use goat_atoms::{clients, leads, projects, tasks, users};
use goat_shared::auth::SessionClaims;
use goat_shared::{respond, ApiError};

use crate::aggregate;
use crate::types::ExecutiveDashboardData;

/// Trailing creation window for the lead queries, roughly six months.
const LEAD_WINDOW_DAYS: i64 = 183;
/// Demo pipeline owner shown against each open lead.
const PIPELINE_ASSIGNEE: &str = "Alex";

/// GET /executive-dashboard
///
/// Company-wide rollups; only users with the Executive role may read it.
pub async fn executive_dashboard(
    client: &DynamoClient,
    table_name: &str,
    claims: &SessionClaims,
) -> Result<Response<Body>, Error> {
    if claims.role != "Executive" {
        return respond::error(&ApiError::Forbidden(
            "Executive role required".to_string(),
        ));
    }

    let user = match users::get_user(client, table_name, &claims.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return respond::error(&ApiError::NotFound("User not found".to_string())),
        Err(e) => return respond::error(&e.into()),
    };

    let since = (Utc::now() - Duration::days(LEAD_WINDOW_DAYS)).to_rfc3339();

    let (leads, projects, clients, open_tasks) = tokio::join!(
        leads::load_recent_leads(client, table_name, &since),
        projects::load_projects(client, table_name),
        clients::load_clients(client, table_name),
        tasks::load_open_tasks(client, table_name),
    );

    let (leads, mut projects, clients, open_tasks) = match (leads, projects, clients, open_tasks) {
        (Ok(leads), Ok(projects), Ok(clients), Ok(open_tasks)) => {
            (leads, projects, clients, open_tasks)
        }
        (leads, projects, clients, open_tasks) => {
            tracing::error!(
                "executive dashboard fan-out failed: leads={:?} projects={:?} clients={:?} tasks={:?}",
                leads.err(),
                projects.err(),
                clients.err(),
                open_tasks.err(),
            );
            return respond::error(&ApiError::UpstreamQuery(
                "Failed to fetch executive data".to_string(),
            ));
        }
    };

    // Join client records onto projects for display.
    let clients_by_id: HashMap<&str, &clients::Client> = clients
        .iter()
        .map(|c| (c.client_id.as_str(), c))
        .collect();
    for project in &mut projects {
        project.client = project
            .client_id
            .as_deref()
            .and_then(|id| clients_by_id.get(id).map(|c| (*c).clone()));
    }

    let months = aggregate::monthly_revenue(&leads);
    let data = ExecutiveDashboardData {
        summary_cards: aggregate::summary_cards(&leads, &projects, &open_tasks),
        revenue_by_client_data: aggregate::revenue_by_client(&leads, &projects, &clients),
        revenue_trend_data: aggregate::revenue_trend(&months),
        expenses_profit_data: aggregate::expenses_profit(&months),
        pipeline_leads: aggregate::pipeline_leads(&leads, PIPELINE_ASSIGNEE),
        user,
        projects,
    };

    respond::json(StatusCode::OK, &data)
}
