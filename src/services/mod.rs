//! Services Layer
//!
//! Business logic for the user actions that write to the catalog.
//! Handlers call these with the repositories held in `AppState`.

pub mod operation_service;
pub mod review_service;

pub use operation_service::{submit_operation, OperationForm};
pub use review_service::{submit_review, ReviewForm, FILL_IN_ALL_FIELDS};
