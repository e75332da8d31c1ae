pub mod model;
pub mod service;

pub use model::Client;
pub use service::*;
