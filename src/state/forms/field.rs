//! Form field value objects

/// Represents a single form field with its configuration, value, and error
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub value: String,
    /// Render the value masked (passwords)
    pub secret: bool,
    /// Field-scoped validation message from the last submission attempt
    pub error: Option<String>,
}

impl FormField {
    /// Create a new text field
    pub fn text(name: &str, label: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            value: String::new(),
            secret: false,
            error: None,
        }
    }

    /// Create a new masked field
    pub fn secret(name: &str, label: &str) -> Self {
        Self {
            secret: true,
            ..Self::text(name, label)
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value and its error
    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Get the display value for rendering, masking secrets
    pub fn display_value(&self) -> String {
        if self.secret {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_starts_empty() {
        let field = FormField::text("email", "E-mail");
        assert_eq!(field.as_text(), "");
        assert!(!field.secret);
        assert!(field.error.is_none());
    }

    #[test]
    fn test_push_and_pop_chars() {
        let mut field = FormField::text("email", "E-mail");
        field.push_char('a');
        field.push_char('b');
        assert_eq!(field.as_text(), "ab");
        field.pop_char();
        assert_eq!(field.as_text(), "a");
    }

    #[test]
    fn test_secret_field_masks_display() {
        let mut field = FormField::secret("password", "Password");
        field.push_char('a');
        field.push_char('b');
        field.push_char('c');
        assert_eq!(field.display_value(), "•••");
        assert_eq!(field.as_text(), "abc");
    }

    #[test]
    fn test_clear_resets_value_and_error() {
        let mut field = FormField::text("email", "E-mail");
        field.push_char('x');
        field.error = Some("E-mail is mandatory!".to_string());
        field.clear();
        assert_eq!(field.as_text(), "");
        assert!(field.error.is_none());
    }
}
