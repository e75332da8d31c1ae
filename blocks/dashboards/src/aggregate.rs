//! Pure aggregations turning raw rows into dashboard view-model fields.
//! Everything here is a function of its inputs; the fetch layer decides
//! which rows are in scope.

use std::collections::HashMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate};

use goat_atoms::clients::Client;
use goat_atoms::leads::Lead;
use goat_atoms::projects::Project;
use goat_atoms::tasks::Task;

use crate::types::{
    ClientRevenuePoint, ExpensesProfitPoint, MonthRevenuePoint, PipelineLead, QuickStats,
    SummaryCard, SummaryCards, WeekCompletionPoint, WorkloadPoint,
};

pub const STATUS_DONE: &str = "Done";
pub const STATUS_IN_REVIEW: &str = "In Review";
pub const STATUS_CLOSED: &str = "Closed";

const MONTH_ABBR: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Parse a stored timestamp down to its calendar date. Accepts RFC3339 or a
/// bare date; anything else is None and the row falls out of every bucket.
pub fn parse_day(value: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.date_naive())
        .ok()
        .or_else(|| NaiveDate::parse_from_str(value, "%Y-%m-%d").ok())
}

/// Closed-lead revenue grouped by calendar month of creation, chronological.
/// Buckets are keyed on (year, month) so a January two years apart never
/// collides; only the label is the bare month abbreviation.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthlyRevenue {
    pub year: i32,
    pub month: u32,
    pub revenue: f64,
}

impl MonthlyRevenue {
    pub fn label(&self) -> &'static str {
        MONTH_ABBR[(self.month as usize - 1) % 12]
    }
}

// ========== EMPLOYEE ==========

/// Headline counters for the employee view.
///
/// `tasksDue` is a date-only comparison: anything due today or later that is
/// not yet done.
pub fn quick_stats(tasks: &[Task], upcoming_shoots: usize, today: NaiveDate) -> QuickStats {
    let tasks_due = tasks
        .iter()
        .filter(|t| t.status != STATUS_DONE)
        .filter(|t| parse_day(&t.due_date).is_some_and(|d| d >= today))
        .count();

    let pending_approvals = tasks.iter().filter(|t| t.status == STATUS_IN_REVIEW).count();

    QuickStats {
        tasks_due,
        pending_approvals,
        shoots_this_week: upcoming_shoots,
    }
}

/// Deadline histogram for the next seven calendar days, today first.
///
/// Bucket assignment is an exact date difference, so a deadline six days out
/// lands in the last bucket no matter where the week boundary falls. Always
/// exactly seven entries.
pub fn workload_by_day(tasks: &[Task], today: NaiveDate) -> Vec<WorkloadPoint> {
    let mut counts = [0usize; 7];
    for task in tasks {
        if let Some(due) = parse_day(&task.due_date) {
            let offset = (due - today).num_days();
            if (0..7).contains(&offset) {
                counts[offset as usize] += 1;
            }
        }
    }

    (0..7)
        .map(|offset| WorkloadPoint {
            day: (today + Duration::days(offset)).format("%a").to_string(),
            deadlines: counts[offset as usize],
        })
        .collect()
}

/// Tasks bucketed by the ISO-8601 week of their creation date, in first-seen
/// order, truncated to the last four buckets.
pub fn completion_by_week(tasks: &[Task]) -> Vec<WeekCompletionPoint> {
    let mut keys: Vec<(i32, u32)> = Vec::new();
    let mut buckets: Vec<WeekCompletionPoint> = Vec::new();

    for task in tasks {
        let Some(created) = parse_day(&task.created_at) else {
            continue;
        };
        let week = created.iso_week();
        let key = (week.year(), week.week());

        let idx = match keys.iter().position(|k| *k == key) {
            Some(idx) => idx,
            None => {
                keys.push(key);
                buckets.push(WeekCompletionPoint {
                    week: format!("W{}", week.week()),
                    completed: 0,
                    total: 0,
                });
                buckets.len() - 1
            }
        };

        buckets[idx].total += 1;
        if task.status == STATUS_DONE {
            buckets[idx].completed += 1;
        }
    }

    if buckets.len() > 4 {
        buckets.split_off(buckets.len() - 4)
    } else {
        buckets
    }
}

// ========== EXECUTIVE ==========

pub fn closed_revenue(leads: &[Lead]) -> f64 {
    leads
        .iter()
        .filter(|l| l.status == STATUS_CLOSED)
        .map(|l| l.value)
        .sum()
}

/// KPI cards. Period-over-period change needs historical snapshots we do not
/// keep, so every `change` is unavailable.
pub fn summary_cards(leads: &[Lead], projects: &[Project], open_tasks: &[Task]) -> SummaryCards {
    let active_campaigns = projects
        .iter()
        .filter(|p| p.status == "In Progress" || p.status == "On Track")
        .count();
    let pending_approvals = open_tasks
        .iter()
        .filter(|t| t.status == STATUS_IN_REVIEW)
        .count();

    SummaryCards {
        leads: SummaryCard {
            value: leads.len() as f64,
            change: None,
        },
        revenue: SummaryCard {
            value: closed_revenue(leads),
            change: None,
        },
        active_campaigns: SummaryCard {
            value: active_campaigns as f64,
            change: None,
        },
        pending_approvals: SummaryCard {
            value: pending_approvals as f64,
            change: None,
        },
    }
}

/// Closed-lead revenue attributed per client through the client_id foreign
/// key. Buckets for clients referenced by the project list come first, in
/// first-seen order; leads whose client has no project are appended under
/// the resolved client name (or their own free-text name as a last resort),
/// so the points always sum to the total closed revenue. Chart color slots
/// follow bucket position.
pub fn revenue_by_client(
    leads: &[Lead],
    projects: &[Project],
    clients: &[Client],
) -> Vec<ClientRevenuePoint> {
    let name_by_id: HashMap<&str, &str> = clients
        .iter()
        .map(|c| (c.client_id.as_str(), c.name.as_str()))
        .collect();

    fn bucket(order: &mut Vec<String>, totals: &mut HashMap<String, f64>, name: String) -> String {
        if !totals.contains_key(&name) {
            order.push(name.clone());
            totals.insert(name.clone(), 0.0);
        }
        name
    }

    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, f64> = HashMap::new();

    for project in projects {
        let name = project
            .client
            .as_ref()
            .map(|c| c.name.clone())
            .or_else(|| {
                project
                    .client_id
                    .as_deref()
                    .and_then(|id| name_by_id.get(id).map(|n| n.to_string()))
            })
            .unwrap_or_else(|| "Unknown Client".to_string());
        bucket(&mut order, &mut totals, name);
    }

    for lead in leads.iter().filter(|l| l.status == STATUS_CLOSED) {
        let name = lead
            .client_id
            .as_deref()
            .and_then(|id| name_by_id.get(id).map(|n| n.to_string()))
            .unwrap_or_else(|| lead.client_name.clone());
        let name = bucket(&mut order, &mut totals, name);
        if let Some(total) = totals.get_mut(&name) {
            *total += lead.value;
        }
    }

    order
        .iter()
        .enumerate()
        .map(|(i, name)| ClientRevenuePoint {
            client: name.clone(),
            revenue: totals.get(name).copied().unwrap_or(0.0),
            fill: format!("hsl(var(--chart-{}))", i + 1),
        })
        .collect()
}

/// Group closed-lead values by creation month.
pub fn monthly_revenue(leads: &[Lead]) -> Vec<MonthlyRevenue> {
    let mut months: Vec<MonthlyRevenue> = Vec::new();

    for lead in leads.iter().filter(|l| l.status == STATUS_CLOSED) {
        let Some(created) = parse_day(&lead.created_at) else {
            continue;
        };
        let (year, month) = (created.year(), created.month());
        match months.iter_mut().find(|m| m.year == year && m.month == month) {
            Some(entry) => entry.revenue += lead.value,
            None => months.push(MonthlyRevenue {
                year,
                month,
                revenue: lead.value,
            }),
        }
    }

    months.sort_by_key(|m| (m.year, m.month));
    months
}

pub fn revenue_trend(months: &[MonthlyRevenue]) -> Vec<MonthRevenuePoint> {
    months
        .iter()
        .map(|m| MonthRevenuePoint {
            month: m.label().to_string(),
            revenue: m.revenue,
        })
        .collect()
}

/// Expenses are a flat 70% of revenue; there is no real cost model.
pub fn expenses_profit(months: &[MonthlyRevenue]) -> Vec<ExpensesProfitPoint> {
    months
        .iter()
        .map(|m| {
            let expenses = m.revenue * 0.7;
            ExpensesProfitPoint {
                month: m.label().to_string(),
                expenses,
                profit: m.revenue - expenses,
            }
        })
        .collect()
}

/// The first four leads still in play, tagged with the demo pipeline owner.
pub fn pipeline_leads(leads: &[Lead], assigned: &str) -> Vec<PipelineLead> {
    leads
        .iter()
        .filter(|l| l.status != STATUS_CLOSED)
        .take(4)
        .map(|l| PipelineLead {
            lead: l.clone(),
            assigned: assigned.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(due_date: &str, status: &str, created_at: &str) -> Task {
        Task {
            task_id: "t".to_string(),
            title: "Task".to_string(),
            status: status.to_string(),
            due_date: due_date.to_string(),
            assignee_id: "u-1".to_string(),
            project_id: "p-1".to_string(),
            created_at: created_at.to_string(),
        }
    }

    fn lead(client_name: &str, client_id: Option<&str>, status: &str, value: f64) -> Lead {
        Lead {
            lead_id: "l".to_string(),
            client_name: client_name.to_string(),
            client_id: client_id.map(|s| s.to_string()),
            status: status.to_string(),
            value,
            created_at: "2025-03-01T00:00:00Z".to_string(),
        }
    }

    fn client(id: &str, name: &str) -> Client {
        Client {
            client_id: id.to_string(),
            name: name.to_string(),
        }
    }

    fn project(name: &str, status: &str, client_id: Option<&str>) -> Project {
        Project {
            project_id: "p".to_string(),
            name: name.to_string(),
            status: status.to_string(),
            progress: 50,
            client_id: client_id.map(|s| s.to_string()),
            client: None,
            created_at: "2025-01-01T00:00:00Z".to_string(),
        }
    }

    // Monday 2025-03-10
    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
    }

    #[test]
    fn tasks_due_counts_future_unfinished_only() {
        let tasks = vec![
            task("2025-03-10", "To Do", "2025-03-01"),
            task("2025-03-11", "Done", "2025-03-01"),
        ];
        let stats = quick_stats(&tasks, 0, today());
        assert_eq!(stats.tasks_due, 1);
    }

    #[test]
    fn finishing_a_task_removes_it_from_tasks_due() {
        let mut tasks = vec![task("2025-03-12", "In Progress", "2025-03-01")];
        assert_eq!(quick_stats(&tasks, 0, today()).tasks_due, 1);
        tasks[0].status = "Done".to_string();
        assert_eq!(quick_stats(&tasks, 0, today()).tasks_due, 0);
    }

    #[test]
    fn overdue_and_malformed_due_dates_do_not_count() {
        let tasks = vec![
            task("2025-03-09", "To Do", "2025-03-01"), // yesterday
            task("not-a-date", "To Do", "2025-03-01"),
            task("2025-03-10T15:30:00Z", "To Do", "2025-03-01"), // time-of-day ignored
        ];
        assert_eq!(quick_stats(&tasks, 0, today()).tasks_due, 1);
    }

    #[test]
    fn pending_approvals_counts_in_review() {
        let tasks = vec![
            task("2025-03-10", "In Review", "2025-03-01"),
            task("2025-03-10", "In Progress", "2025-03-01"),
        ];
        assert_eq!(quick_stats(&tasks, 0, today()).pending_approvals, 1);
    }

    #[test]
    fn workload_always_has_seven_entries() {
        let points = workload_by_day(&[], today());
        assert_eq!(points.len(), 7);
        assert!(points.iter().all(|p| p.deadlines == 0));
        assert_eq!(points[0].day, "Mon");
        assert_eq!(points[6].day, "Sun");
    }

    #[test]
    fn workload_buckets_by_exact_day_offset() {
        let tasks = vec![
            task("2025-03-10", "To Do", "2025-03-01"), // today
            task("2025-03-16", "To Do", "2025-03-01"), // +6, next ISO week
            task("2025-03-17", "To Do", "2025-03-01"), // +7, out of range
            task("2025-03-09", "To Do", "2025-03-01"), // past, out of range
        ];
        let points = workload_by_day(&tasks, today());
        assert_eq!(points[0].deadlines, 1);
        assert_eq!(points[6].deadlines, 1);
        assert_eq!(points.iter().map(|p| p.deadlines).sum::<usize>(), 2);
    }

    #[test]
    fn completion_buckets_by_iso_week() {
        let tasks = vec![
            task("2025-03-20", "Done", "2025-03-10"),
            task("2025-03-20", "To Do", "2025-03-12"), // same ISO week as above
            task("2025-03-20", "Done", "2025-03-17"),  // next week
        ];
        let buckets = completion_by_week(&tasks);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0], WeekCompletionPoint {
            week: "W11".to_string(),
            completed: 1,
            total: 2,
        });
        assert_eq!(buckets[1].week, "W12");
        assert_eq!(buckets[1].completed, 1);
    }

    #[test]
    fn completion_never_exceeds_four_buckets() {
        let monday_w2 = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        let tasks: Vec<Task> = (0..6)
            .map(|week| {
                let day = (monday_w2 + Duration::weeks(week)).format("%Y-%m-%d").to_string();
                task("2025-03-20", "Done", &day) // Mondays W2..W7
            })
            .collect();
        let buckets = completion_by_week(&tasks);
        assert_eq!(buckets.len(), 4);
        // last four discovered weeks survive
        assert_eq!(buckets[0].week, "W4");
        assert_eq!(buckets[3].week, "W7");
    }

    #[test]
    fn completion_skips_unparseable_created_at() {
        let tasks = vec![task("2025-03-20", "Done", "garbage")];
        assert!(completion_by_week(&tasks).is_empty());
    }

    #[test]
    fn closed_revenue_ignores_open_leads() {
        let leads = vec![
            lead("Lead Alpha", None, "Closed", 100.0),
            lead("Lead Beta", None, "Open", 50.0),
        ];
        assert_eq!(closed_revenue(&leads), 100.0);
    }

    #[test]
    fn summary_cards_have_no_fabricated_change() {
        let leads = vec![lead("Lead Alpha", None, "Closed", 100.0)];
        let projects = vec![
            project("Q3 Campaign", "In Progress", None),
            project("Launch", "On Track", None),
            project("Refresh", "At Risk", None),
        ];
        let tasks = vec![task("2025-03-10", "In Review", "2025-03-01")];
        let cards = summary_cards(&leads, &projects, &tasks);
        assert_eq!(cards.leads.value, 1.0);
        assert_eq!(cards.revenue.value, 100.0);
        assert_eq!(cards.active_campaigns.value, 2.0);
        assert_eq!(cards.pending_approvals.value, 1.0);
        assert!(cards.leads.change.is_none());
        assert!(cards.revenue.change.is_none());
    }

    #[test]
    fn revenue_by_client_joins_on_client_id() {
        // "Client A" is a prefix of "Client A+" - substring matching would
        // conflate these; the foreign key keeps them apart.
        let clients = vec![client("c1", "Client A"), client("c2", "Client A+")];
        let projects = vec![
            project("P1", "In Progress", Some("c1")),
            project("P2", "On Track", Some("c2")),
        ];
        let leads = vec![
            lead("Client A retainer", Some("c1"), "Closed", 100.0),
            lead("Client A+ launch", Some("c2"), "Closed", 40.0),
            lead("Client A+ extras", Some("c2"), "Closed", 10.0),
        ];

        let points = revenue_by_client(&leads, &projects, &clients);
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].client, "Client A");
        assert_eq!(points[0].revenue, 100.0);
        assert_eq!(points[1].client, "Client A+");
        assert_eq!(points[1].revenue, 50.0);
    }

    #[test]
    fn revenue_by_client_sums_to_total_closed_revenue() {
        let clients = vec![client("c1", "Client A")];
        let projects = vec![project("P1", "In Progress", Some("c1"))];
        let leads = vec![
            lead("Client A", Some("c1"), "Closed", 100.0),
            lead("Walk-in", None, "Closed", 25.0), // no client record at all
            lead("Client A", Some("c1"), "Negotiation", 999.0),
        ];

        let points = revenue_by_client(&leads, &projects, &clients);
        let total: f64 = points.iter().map(|p| p.revenue).sum();
        assert_eq!(total, closed_revenue(&leads));
        assert_eq!(points.last().unwrap().client, "Walk-in");
    }

    #[test]
    fn revenue_by_client_assigns_color_slots_in_order() {
        let clients = vec![client("c1", "Client A"), client("c2", "Client B")];
        let projects = vec![
            project("P1", "In Progress", Some("c1")),
            project("P2", "On Track", Some("c2")),
        ];
        let points = revenue_by_client(&[], &projects, &clients);
        assert_eq!(points[0].fill, "hsl(var(--chart-1))");
        assert_eq!(points[1].fill, "hsl(var(--chart-2))");
    }

    #[test]
    fn monthly_revenue_does_not_collide_across_years() {
        let mut jan_2024 = lead("A", None, "Closed", 10.0);
        jan_2024.created_at = "2024-01-15T00:00:00Z".to_string();
        let mut jan_2025 = lead("B", None, "Closed", 20.0);
        jan_2025.created_at = "2025-01-10T00:00:00Z".to_string();

        let months = monthly_revenue(&[jan_2025.clone(), jan_2024.clone()]);
        assert_eq!(months.len(), 2);
        assert_eq!((months[0].year, months[0].revenue), (2024, 10.0));
        assert_eq!((months[1].year, months[1].revenue), (2025, 20.0));
        assert_eq!(months[0].label(), "Jan");
        assert_eq!(months[1].label(), "Jan");
    }

    #[test]
    fn expenses_are_seventy_percent_of_revenue() {
        let months = vec![MonthlyRevenue {
            year: 2025,
            month: 3,
            revenue: 1000.0,
        }];
        let points = expenses_profit(&months);
        assert_eq!(points[0].month, "Mar");
        assert_eq!(points[0].expenses, 700.0);
        assert_eq!(points[0].profit, 300.0);
    }

    #[test]
    fn pipeline_takes_first_four_open_leads() {
        let leads: Vec<Lead> = (0..6)
            .map(|i| {
                let status = if i == 2 { "Closed" } else { "New" };
                lead(&format!("Lead {}", i), None, status, 10.0)
            })
            .collect();
        let pipeline = pipeline_leads(&leads, "Alex");
        assert_eq!(pipeline.len(), 4);
        assert!(pipeline.iter().all(|p| p.assigned == "Alex"));
        assert!(pipeline.iter().all(|p| p.lead.status != "Closed"));
        assert_eq!(pipeline[2].lead.client_name, "Lead 3"); // closed lead skipped
    }
}
