//! Form submission: validation schemas and the submission pipeline

mod pipeline;
mod schema;
pub mod schemas;

pub use pipeline::{
    submit, FieldErrorSink, Navigator, Notification, NotificationKind, NotificationSink,
    SubmissionOutcome, SubmitPlan,
};
pub use schema::{FieldError, FormInput, Rule, Schema, ValidationFailure};
