pub mod model;
pub mod service;

pub use model::Lead;
pub use service::*;
