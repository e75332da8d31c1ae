pub mod model;
pub mod service;

pub use model::Script;
pub use service::*;
