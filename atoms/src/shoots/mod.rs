pub mod model;
pub mod service;

pub use model::Shoot;
pub use service::*;
