//! Orchestration of one form submission: validate, call the API, report

use super::schema::{FieldError, FormInput, Schema, ValidationFailure};
use crate::state::Screen;
use std::future::Future;

/// Visual flavor of a notification
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
    #[allow(dead_code)]
    Info,
}

/// A transient message for the notification sink, fire-and-forget
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
}

impl Notification {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Success,
            title: title.to_string(),
            description: description.to_string(),
        }
    }

    pub fn error(title: &str, description: &str) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.to_string(),
            description: description.to_string(),
        }
    }
}

/// Where a submission ended up
#[derive(Debug)]
pub enum SubmissionOutcome {
    /// Remote call succeeded; `redirect` names the screen navigated to
    Success { redirect: Option<Screen> },
    /// Input failed validation; no remote call was made
    ValidationRejected(ValidationFailure),
    /// Remote call (or a precondition for it) failed
    RemoteFailure(String),
}

/// Receives field-scoped validation messages, e.g. the form widget
pub trait FieldErrorSink {
    fn set_errors(&mut self, errors: Vec<FieldError>);
    fn clear_errors(&mut self);
}

/// Receives transient notifications, e.g. the toast queue
pub trait NotificationSink {
    fn notify(&mut self, notification: Notification);
}

/// Switches the current screen, e.g. the app router
pub trait Navigator {
    fn go_to(&mut self, screen: Screen);
}

/// Screen-specific submission wiring: what to say and where to go
#[derive(Debug, Clone)]
pub struct SubmitPlan {
    /// Notification shown when the remote call succeeds
    pub on_success: Notification,
    /// Notification shown when the remote call fails
    pub on_failure: Notification,
    /// Screen navigated to after success, if any
    pub redirect: Option<Screen>,
}

/// Run one submission through validation, the remote call, and reporting.
///
/// Every rule violation is collected before anything is reported, and the
/// remote call only happens on clean input with exactly the schema's fields.
/// Per attempt either the field-error sink or the notification sink is
/// updated, never both; navigation happens at most once. Errors never escape:
/// every path resolves to a `SubmissionOutcome`.
pub async fn submit<F, Fut>(
    input: &FormInput,
    schema: &Schema,
    plan: SubmitPlan,
    remote: F,
    errors: &mut dyn FieldErrorSink,
    notifier: &mut dyn NotificationSink,
    nav: &mut dyn Navigator,
) -> SubmissionOutcome
where
    F: FnOnce(FormInput) -> Fut,
    Fut: Future<Output = anyhow::Result<()>>,
{
    // Stale messages from a previous attempt must not survive this one
    errors.clear_errors();

    if let Err(failure) = schema.validate(input) {
        errors.set_errors(failure.first_per_field());
        return SubmissionOutcome::ValidationRejected(failure);
    }

    match remote(schema.project(input)).await {
        Ok(()) => {
            notifier.notify(plan.on_success);
            if let Some(screen) = plan.redirect {
                nav.go_to(screen);
            }
            SubmissionOutcome::Success {
                redirect: plan.redirect,
            }
        }
        Err(err) => {
            tracing::warn!("submission failed: {err:#}");
            notifier.notify(plan.on_failure);
            SubmissionOutcome::RemoteFailure(err.to_string())
        }
    }
}
