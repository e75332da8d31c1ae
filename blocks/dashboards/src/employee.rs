use aws_sdk_dynamodb::Client as DynamoClient;
use chrono::{Duration, Utc};
use lambda_http::{http::StatusCode, Body, Error, Response};

use goat_atoms::{notifications, scripts, shoots, tasks, users};
use goat_shared::auth::SessionClaims;
use goat_shared::{respond, ApiError};

use crate::aggregate;
use crate::types::EmployeeDashboardData;

/// Trailing creation window for the per-assignee task queries.
const TASK_WINDOW_DAYS: i64 = 28;
/// How many upcoming shoots the view shows.
const SHOOT_LIMIT: usize = 5;

/// GET /employee-dashboard
///
/// Serves the role-specific employee view for whichever user the session
/// token names. The four per-role pages share this one view model.
pub async fn employee_dashboard(
    client: &DynamoClient,
    table_name: &str,
    claims: &SessionClaims,
) -> Result<Response<Body>, Error> {
    let user = match users::get_user(client, table_name, &claims.user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => return respond::error(&ApiError::NotFound("User not found".to_string())),
        Err(e) => return respond::error(&e.into()),
    };

    let now = Utc::now();
    let since = (now - Duration::days(TASK_WINDOW_DAYS)).to_rfc3339();
    let now_str = now.to_rfc3339();

    // Fan out the fixed query set; the view is all-or-nothing.
    let (tasks, notifications, scripts, shoots) = tokio::join!(
        tasks::load_tasks_for_assignee(client, table_name, &user.user_id, &since),
        notifications::load_notifications_for_user(client, table_name, &user.user_id),
        scripts::load_scripts_in_review(client, table_name),
        shoots::load_upcoming_shoots(client, table_name, &now_str, SHOOT_LIMIT),
    );

    let (tasks, notifications, scripts, shoots) = match (tasks, notifications, scripts, shoots) {
        (Ok(tasks), Ok(notifications), Ok(scripts), Ok(shoots)) => {
            (tasks, notifications, scripts, shoots)
        }
        (tasks, notifications, scripts, shoots) => {
            tracing::error!(
                "employee dashboard fan-out failed: tasks={:?} notifications={:?} scripts={:?} shoots={:?}",
                tasks.err(),
                notifications.err(),
                scripts.err(),
                shoots.err(),
            );
            return respond::error(&ApiError::UpstreamQuery(
                "Failed to fetch dashboard data".to_string(),
            ));
        }
    };

    let today = now.date_naive();
    let data = EmployeeDashboardData {
        quick_stats: aggregate::quick_stats(&tasks, shoots.len(), today),
        task_completion_data: aggregate::completion_by_week(&tasks),
        workload_data: aggregate::workload_by_day(&tasks, today),
        user,
        notifications,
        scripts_in_review: scripts,
        shoots_today: shoots,
    };

    respond::json(StatusCode::OK, &data)
}
