pub mod model;
pub mod service;

pub use model::Task;
pub use service::*;
