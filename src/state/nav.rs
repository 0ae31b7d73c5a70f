//! Screen routing and location state

use crate::submit::Navigator;

/// Screens of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    SignIn,
    SignUp,
    ForgotPassword,
    ResetPassword,
    Dashboard,
}

impl Screen {
    pub fn path(&self) -> &'static str {
        match self {
            Self::SignIn => "/",
            Self::SignUp => "/signup",
            Self::ForgotPassword => "/forgot-password",
            Self::ResetPassword => "/reset-password",
            Self::Dashboard => "/dashboard",
        }
    }

}

/// A screen plus the query string it was reached with.
///
/// The query carries the reset token from the recovery-link deep link
/// (`/reset-password?token=...`).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Location {
    pub screen: Screen,
    pub search: Option<String>,
}

impl Location {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen,
            search: None,
        }
    }

    /// Parse a route string like `/reset-password?token=abc`.
    ///
    /// Unknown paths fall back to the sign-in screen.
    pub fn parse(raw: &str) -> Self {
        let (path, search) = match raw.split_once('?') {
            Some((path, search)) => (path, Some(format!("?{search}"))),
            None => (raw, None),
        };
        let screen = match path {
            "/signup" => Screen::SignUp,
            "/forgot-password" => Screen::ForgotPassword,
            "/reset-password" => Screen::ResetPassword,
            "/dashboard" => Screen::Dashboard,
            _ => Screen::SignIn,
        };
        Self { screen, search }
    }

    /// Extract the reset token from the query string, if present
    pub fn token(&self) -> Option<&str> {
        self.search
            .as_deref()
            .and_then(|s| s.strip_prefix("?token="))
            .filter(|t| !t.is_empty())
    }
}

/// Navigation state: current location plus history for going back
#[derive(Debug, Clone, Default)]
pub struct Nav {
    location: Location,
    history: Vec<Location>,
}

impl Nav {
    pub fn with_location(location: Location) -> Self {
        Self {
            location,
            history: Vec::new(),
        }
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Return to the previous location; false when there is none
    pub fn go_back(&mut self) -> bool {
        match self.history.pop() {
            Some(previous) => {
                self.location = previous;
                true
            }
            None => false,
        }
    }
}

impl Navigator for Nav {
    /// Switch screens, dropping any query from the previous location
    fn go_to(&mut self, screen: Screen) {
        let previous = std::mem::replace(&mut self.location, Location::new(screen));
        self.history.push(previous);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod location {
        use super::*;

        #[test]
        fn test_parse_plain_path() {
            let location = Location::parse("/signup");
            assert_eq!(location.screen, Screen::SignUp);
            assert!(location.search.is_none());
        }

        #[test]
        fn test_parse_keeps_query() {
            let location = Location::parse("/reset-password?token=abc123");
            assert_eq!(location.screen, Screen::ResetPassword);
            assert_eq!(location.search.as_deref(), Some("?token=abc123"));
            assert_eq!(location.token(), Some("abc123"));
        }

        #[test]
        fn test_unknown_path_falls_back_to_sign_in() {
            let location = Location::parse("/nope");
            assert_eq!(location.screen, Screen::SignIn);
        }

        #[test]
        fn test_token_absent_without_query() {
            let location = Location::parse("/reset-password");
            assert_eq!(location.token(), None);
        }

        #[test]
        fn test_empty_token_reads_as_absent() {
            let location = Location::parse("/reset-password?token=");
            assert_eq!(location.token(), None);
        }
    }

    mod nav {
        use super::*;

        #[test]
        fn test_default_starts_at_sign_in() {
            let nav = Nav::default();
            assert_eq!(nav.location().screen, Screen::SignIn);
        }

        #[test]
        fn test_go_to_pushes_history() {
            let mut nav = Nav::default();
            nav.go_to(Screen::SignUp);
            assert_eq!(nav.location().screen, Screen::SignUp);
            nav.go_back();
            assert_eq!(nav.location().screen, Screen::SignIn);
        }

        #[test]
        fn test_go_back_on_empty_history_stays() {
            let mut nav = Nav::default();
            nav.go_back();
            assert_eq!(nav.location().screen, Screen::SignIn);
        }

        #[test]
        fn test_go_to_drops_query() {
            let mut nav =
                Nav::with_location(Location::parse("/reset-password?token=abc"));
            nav.go_to(Screen::SignIn);
            assert!(nav.location().search.is_none());
        }
    }
}
