pub mod model;
pub mod service;

pub use model::Project;
pub use service::*;
