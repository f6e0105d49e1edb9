pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::{BillingStore, STORAGE_KEY};
pub use domain::billing::{BillingList, LineItem, LineItemInput, SortOrder};
pub use domain::errors::{DomainError, ValidationError};
