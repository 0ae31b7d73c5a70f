//! Application state definitions

use super::forms::{Form, ForgotPasswordForm, ResetPasswordForm, SignInForm, SignUpForm};
use super::nav::{Nav, Screen};
use super::toast::ToastQueue;
use crate::api::SessionUser;

/// Main application state
#[derive(Default)]
pub struct AppState {
    /// Current location and navigation history
    pub nav: Nav,
    /// Live toast notifications
    pub toasts: ToastQueue,
    /// Advisory in-flight flag; the submit affordance is disabled while set
    pub submitting: bool,
    /// Account data of the signed-in user, if any
    pub session_user: Option<SessionUser>,

    // One form per screen, each holding its values and field errors
    pub sign_in: SignInForm,
    pub sign_up: SignUpForm,
    pub forgot_password: ForgotPasswordForm,
    pub reset_password: ResetPasswordForm,
}

impl AppState {
    pub fn current_screen(&self) -> Screen {
        self.nav.location().screen
    }

    /// The form belonging to the current screen, if it has one
    pub fn active_form_mut(&mut self) -> Option<&mut dyn Form> {
        match self.current_screen() {
            Screen::SignIn => Some(&mut self.sign_in),
            Screen::SignUp => Some(&mut self.sign_up),
            Screen::ForgotPassword => Some(&mut self.forgot_password),
            Screen::ResetPassword => Some(&mut self.reset_password),
            Screen::Dashboard => None,
        }
    }
}
