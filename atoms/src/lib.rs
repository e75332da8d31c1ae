// Entity layer: one module per table in the goatmedia store.
// Services take clients as arguments, never global state.

pub mod clients;
pub mod error;
pub mod leads;
pub mod notifications;
pub mod projects;
pub mod scripts;
pub mod shoots;
pub mod store;
pub mod tasks;
pub mod users;

pub use error::StoreError;
