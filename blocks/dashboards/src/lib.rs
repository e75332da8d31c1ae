// Dashboard feature layer: fans out the per-view query set against the
// atoms, runs the pure aggregations, and shapes the view-model JSON.

pub mod aggregate;
pub mod employee;
pub mod executive;
pub mod notifications;
pub mod types;
