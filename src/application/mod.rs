//! Application domain: record model, in-memory store, query processor, and
//! the service layer that classifies outcomes.

pub mod model;
pub mod query;
pub mod service;
pub mod store;

pub use model::{Application, ApplicationPatch, NewApplication, Status};
pub use query::{paginate, Page, QueryParams, SortBy, SortOrder};
pub use service::{ApplicationService, ServiceResponse};
pub use store::{ApplicationStore, StoreError, StoreResult};
