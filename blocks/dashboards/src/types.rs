use serde::Serialize;

use goat_atoms::leads::Lead;
use goat_atoms::notifications::Notification;
use goat_atoms::projects::Project;
use goat_atoms::scripts::Script;
use goat_atoms::shoots::Shoot;
use goat_atoms::users::User;

// ========== EMPLOYEE VIEW ==========

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuickStats {
    pub tasks_due: usize,
    pub pending_approvals: usize,
    pub shoots_this_week: usize,
}

/// One ISO week of task throughput, e.g. `{"week": "W12", "completed": 7, "total": 10}`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WeekCompletionPoint {
    pub week: String,
    pub completed: usize,
    pub total: usize,
}

/// Deadline count for one of the next seven calendar days.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct WorkloadPoint {
    pub day: String,
    pub deadlines: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDashboardData {
    pub user: User,
    pub quick_stats: QuickStats,
    pub task_completion_data: Vec<WeekCompletionPoint>,
    pub workload_data: Vec<WorkloadPoint>,
    pub notifications: Vec<Notification>,
    pub scripts_in_review: Vec<Script>,
    pub shoots_today: Vec<Shoot>,
}

// ========== EXECUTIVE VIEW ==========

/// KPI card value. `change` is the delta vs. the previous period; we have no
/// historical snapshots to compute it from, so it is always null rather than
/// a fabricated number.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct SummaryCard {
    pub value: f64,
    pub change: Option<f64>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SummaryCards {
    pub leads: SummaryCard,
    pub revenue: SummaryCard,
    pub active_campaigns: SummaryCard,
    pub pending_approvals: SummaryCard,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ClientRevenuePoint {
    pub client: String,
    pub revenue: f64,
    pub fill: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct MonthRevenuePoint {
    pub month: String,
    pub revenue: f64,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ExpensesProfitPoint {
    pub month: String,
    pub expenses: f64,
    pub profit: f64,
}

#[derive(Debug, Serialize, Clone)]
pub struct PipelineLead {
    #[serde(flatten)]
    pub lead: Lead,
    pub assigned: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutiveDashboardData {
    pub user: User,
    pub summary_cards: SummaryCards,
    pub revenue_by_client_data: Vec<ClientRevenuePoint>,
    pub revenue_trend_data: Vec<MonthRevenuePoint>,
    pub expenses_profit_data: Vec<ExpensesProfitPoint>,
    pub pipeline_leads: Vec<PipelineLead>,
    pub projects: Vec<Project>,
}
