//! Application state and core logic

use crate::api::{ApiClient, ApiError, SessionUser};
use crate::config::TuiConfig;
use crate::state::{AppState, Form, Location, Nav, Screen};
use crate::submit::{self, Navigator, Notification, SubmissionOutcome, SubmitPlan};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// API client for HTTP communication
    pub api: ApiClient,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance, starting at the given location
    pub fn new(initial: Location) -> Result<Self> {
        let config = TuiConfig::load()?;
        let api = match config.api_address {
            Some(address) if std::env::var("BARBER_API_URL").is_err() => {
                ApiClient::with_address(address)
            }
            _ => ApiClient::new(),
        };

        let state = AppState {
            nav: Nav::with_location(initial),
            ..AppState::default()
        };

        Ok(Self {
            state,
            api,
            quit: false,
        })
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Drop expired toasts; called every event-loop tick
    pub fn tick(&mut self) {
        self.state.toasts.prune_expired();
    }

    /// Handle a key event for the current screen
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Dismiss the oldest toast from any screen
        if key.code == KeyCode::Delete {
            let oldest_id = self.state.toasts.iter().next().map(|t| t.id);
            if let Some(id) = oldest_id {
                self.state.toasts.dismiss(id);
            }
            return Ok(());
        }

        match self.state.current_screen() {
            Screen::SignIn => self.handle_sign_in_key(key).await,
            Screen::SignUp => self.handle_sign_up_key(key).await,
            Screen::ForgotPassword => self.handle_forgot_password_key(key).await,
            Screen::ResetPassword => self.handle_reset_password_key(key).await,
            Screen::Dashboard => self.handle_dashboard_key(key),
        }
        Ok(())
    }

    /// Shared field-editing keys for the active form
    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.active_form_mut() else {
            return;
        };
        match key.code {
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            KeyCode::Backspace => form.get_active_field_mut().pop_char(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.get_active_field_mut().push_char(c);
            }
            _ => {}
        }
    }

    /// Leave the current screen, falling back to sign-in for deep links
    fn go_back(&mut self) {
        if !self.state.nav.go_back() {
            self.state.nav.go_to(Screen::SignIn);
        }
    }

    async fn handle_sign_in_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_sign_in().await,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.nav.go_to(Screen::SignUp);
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.nav.go_to(Screen::ForgotPassword);
            }
            _ => self.handle_form_key(key),
        }
    }

    async fn handle_sign_up_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_sign_up().await,
            KeyCode::Esc => self.go_back(),
            _ => self.handle_form_key(key),
        }
    }

    async fn handle_forgot_password_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_forgot_password().await,
            KeyCode::Esc => self.go_back(),
            _ => self.handle_form_key(key),
        }
    }

    async fn handle_reset_password_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_reset_password().await,
            KeyCode::Esc => self.go_back(),
            _ => self.handle_form_key(key),
        }
    }

    fn handle_dashboard_key(&mut self, key: KeyEvent) {
        match key.code {
            // Sign out
            KeyCode::Esc => {
                self.state.session_user = None;
                self.state.nav.go_to(Screen::SignIn);
            }
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Submit the sign-in form
    async fn submit_sign_in(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;

        let AppState {
            nav,
            toasts,
            sign_in,
            ..
        } = &mut self.state;
        let api = &mut self.api;
        let input = sign_in.input();
        let schema = submit::schemas::sign_in();
        let plan = SubmitPlan {
            on_success: Notification::success("Welcome back!", "You have successfully signed in."),
            on_failure: Notification::error(
                "Authentication Error",
                "Error while signing in, check your credentials.",
            ),
            redirect: Some(Screen::Dashboard),
        };

        let mut session: Option<SessionUser> = None;
        let session_slot = &mut session;
        let outcome = submit::submit(
            &input,
            &schema,
            plan,
            |data| async move {
                let user = api
                    .create_session(data.get("email"), data.get("password"))
                    .await?;
                *session_slot = Some(user);
                Ok(())
            },
            sign_in,
            toasts,
            nav,
        )
        .await;

        if matches!(outcome, SubmissionOutcome::Success { .. }) {
            self.state.session_user = session;
            self.state.sign_in.reset();
        }
        self.state.submitting = false;
    }

    /// Submit the sign-up form
    async fn submit_sign_up(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;

        let AppState {
            nav,
            toasts,
            sign_up,
            ..
        } = &mut self.state;
        let api = &mut self.api;
        let input = sign_up.input();
        let schema = submit::schemas::sign_up();
        let plan = SubmitPlan {
            on_success: Notification::success("Sign up succeeded", "You can now sign in!"),
            on_failure: Notification::error(
                "Sign Up Error",
                "Error while signing up, please try again.",
            ),
            redirect: Some(Screen::SignIn),
        };

        let outcome = submit::submit(
            &input,
            &schema,
            plan,
            |data| async move {
                api.create_user(data.get("name"), data.get("email"), data.get("password"))
                    .await?;
                Ok(())
            },
            sign_up,
            toasts,
            nav,
        )
        .await;

        if matches!(outcome, SubmissionOutcome::Success { .. }) {
            self.state.sign_up.reset();
        }
        self.state.submitting = false;
    }

    /// Submit the forgot-password form; this screen never navigates
    async fn submit_forgot_password(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;

        let AppState {
            nav,
            toasts,
            forgot_password,
            ..
        } = &mut self.state;
        let api = &mut self.api;
        let input = forgot_password.input();
        let schema = submit::schemas::forgot_password();
        let plan = SubmitPlan {
            on_success: Notification::success(
                "Password recovery",
                "An e-mail has been sent to confirm the password recovery.",
            ),
            on_failure: Notification::error(
                "Password Recovery Error",
                "Error while recovering password, try again.",
            ),
            redirect: None,
        };

        submit::submit(
            &input,
            &schema,
            plan,
            |data| async move {
                api.forgot_password(data.get("email")).await?;
                Ok(())
            },
            forgot_password,
            toasts,
            nav,
        )
        .await;

        self.state.submitting = false;
    }

    /// Submit the reset-password form.
    ///
    /// The token comes from the recovery-link query; a missing token takes
    /// the same user-visible path as a failed request, without one being
    /// issued.
    async fn submit_reset_password(&mut self) {
        if self.state.submitting {
            return;
        }
        self.state.submitting = true;

        let token = self.state.nav.location().token().map(str::to_string);
        let AppState {
            nav,
            toasts,
            reset_password,
            ..
        } = &mut self.state;
        let api = &mut self.api;
        let input = reset_password.input();
        let schema = submit::schemas::reset_password();
        let plan = SubmitPlan {
            on_success: Notification::success("Password Reset", "Your password has been reset."),
            on_failure: Notification::error(
                "Password Reset Error",
                "Error while resetting the password, please try again.",
            ),
            redirect: Some(Screen::SignIn),
        };

        let outcome = submit::submit(
            &input,
            &schema,
            plan,
            |data| async move {
                let token = token.ok_or(ApiError::MissingResetToken)?;
                api.reset_password(
                    data.get("password"),
                    data.get("password_confirmation"),
                    &token,
                )
                .await?;
                Ok(())
            },
            reset_password,
            toasts,
            nav,
        )
        .await;

        if matches!(outcome, SubmissionOutcome::Success { .. }) {
            self.state.reset_password.reset();
        }
        self.state.submitting = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn app_at(location: Location) -> App {
        App {
            state: AppState {
                nav: Nav::with_location(location),
                ..AppState::default()
            },
            api: ApiClient::with_address("http://127.0.0.1:0"),
            quit: false,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    async fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).await.unwrap();
        }
    }

    mod editing {
        use super::*;

        #[tokio::test]
        async fn test_chars_go_to_active_field() {
            let mut app = app_at(Location::new(Screen::SignIn));
            type_text(&mut app, "a@b.com").await;
            assert_eq!(app.state.sign_in.email.as_text(), "a@b.com");

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "secret").await;
            assert_eq!(app.state.sign_in.password.as_text(), "secret");
        }

        #[tokio::test]
        async fn test_backspace_removes_from_active_field() {
            let mut app = app_at(Location::new(Screen::ForgotPassword));
            type_text(&mut app, "ab").await;
            app.handle_key(key(KeyCode::Backspace)).await.unwrap();
            assert_eq!(app.state.forgot_password.email.as_text(), "a");
        }
    }

    mod navigation {
        use super::*;

        #[tokio::test]
        async fn test_ctrl_shortcuts_from_sign_in() {
            let mut app = app_at(Location::new(Screen::SignIn));
            app.handle_key(ctrl('u')).await.unwrap();
            assert_eq!(app.state.current_screen(), Screen::SignUp);

            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_screen(), Screen::SignIn);

            app.handle_key(ctrl('r')).await.unwrap();
            assert_eq!(app.state.current_screen(), Screen::ForgotPassword);
        }

        #[tokio::test]
        async fn test_esc_on_deep_link_goes_to_sign_in() {
            let mut app = app_at(Location::parse("/reset-password?token=abc"));
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_screen(), Screen::SignIn);
        }

        #[tokio::test]
        async fn test_dashboard_esc_signs_out() {
            let mut app = app_at(Location::new(Screen::Dashboard));
            app.state.session_user = Some(SessionUser {
                name: "Ada".to_string(),
                email: "ada@example.com".to_string(),
            });
            app.handle_key(key(KeyCode::Esc)).await.unwrap();
            assert!(app.state.session_user.is_none());
            assert_eq!(app.state.current_screen(), Screen::SignIn);
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_invalid_email_reports_field_error_without_toast() {
            let mut app = app_at(Location::new(Screen::ForgotPassword));
            type_text(&mut app, "not-an-email").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(
                app.state.forgot_password.email.error.as_deref(),
                Some("Type a valid e-mail!")
            );
            assert!(app.state.toasts.is_empty());
            assert!(!app.state.submitting);
        }

        #[tokio::test]
        async fn test_empty_sign_up_reports_all_fields() {
            let mut app = app_at(Location::new(Screen::SignUp));
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.sign_up.name.error.is_some());
            assert!(app.state.sign_up.email.error.is_some());
            assert!(app.state.sign_up.password.error.is_some());
            assert!(app.state.toasts.is_empty());
        }

        #[tokio::test]
        async fn test_reset_without_token_shows_error_toast_and_stays() {
            let mut app = app_at(Location::parse("/reset-password"));
            type_text(&mut app, "123456").await;
            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "123456").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert_eq!(app.state.toasts.len(), 1);
            let toast = app.state.toasts.iter().next().unwrap();
            assert!(toast.is_error());
            assert_eq!(toast.title, "Password Reset Error");
            assert_eq!(app.state.current_screen(), Screen::ResetPassword);
            assert!(!app.state.submitting);
        }

        #[tokio::test]
        async fn test_enter_is_ignored_while_submitting() {
            let mut app = app_at(Location::new(Screen::ForgotPassword));
            type_text(&mut app, "a@b.com").await;
            app.state.submitting = true;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();

            assert!(app.state.toasts.is_empty());
            assert!(app.state.submitting);
        }

        #[tokio::test]
        async fn test_field_error_clears_on_next_valid_attempt() {
            // Missing-token failure keeps the screen; the second attempt
            // must not keep the first attempt's validation message.
            let mut app = app_at(Location::parse("/reset-password"));
            type_text(&mut app, "123456").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app
                .state
                .reset_password
                .password_confirmation
                .error
                .is_some());

            app.handle_key(key(KeyCode::Tab)).await.unwrap();
            type_text(&mut app, "123456").await;
            app.handle_key(key(KeyCode::Enter)).await.unwrap();
            assert!(app
                .state
                .reset_password
                .password_confirmation
                .error
                .is_none());
        }
    }
}
