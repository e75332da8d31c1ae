pub mod model;
pub mod service;

pub use model::{DismissNotificationPayload, Notification};
pub use service::*;
