//! Form state management and per-screen form structs

use super::field::FormField;
use crate::submit::{FieldError, FieldErrorSink, FormInput};

/// Trait for common form operations
pub trait Form {
    fn fields(&self) -> Vec<&FormField>;
    fn fields_mut(&mut self) -> Vec<&mut FormField>;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);

    fn field_count(&self) -> usize {
        self.fields().len()
    }

    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    fn get_active_field_mut(&mut self) -> &mut FormField {
        let index = self.active_field().min(self.field_count() - 1);
        self.fields_mut().remove(index)
    }

    /// Collect the raw field values for a submission attempt
    fn input(&self) -> FormInput {
        let mut input = FormInput::new();
        for field in self.fields() {
            input.set(&field.name, field.as_text().to_string());
        }
        input
    }

    /// Reset all values and errors, focus back on the first field
    fn reset(&mut self) {
        for field in self.fields_mut() {
            field.clear();
        }
        self.set_active_field(0);
    }
}

/// Every form doubles as the field-error reporter for its screen
impl<F: Form> FieldErrorSink for F {
    fn set_errors(&mut self, errors: Vec<FieldError>) {
        for field in self.fields_mut() {
            field.error = errors
                .iter()
                .find(|e| e.field == field.name)
                .map(|e| e.message.clone());
        }
    }

    fn clear_errors(&mut self) {
        for field in self.fields_mut() {
            field.error = None;
        }
    }
}

// Sign In Form
#[derive(Debug, Clone)]
pub struct SignInForm {
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignInForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "E-mail"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
        }
    }
}

impl Default for SignInForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignInForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email, &mut self.password]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
}

// Sign Up Form
#[derive(Debug, Clone)]
pub struct SignUpForm {
    pub name: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
}

impl SignUpForm {
    pub fn new() -> Self {
        Self {
            name: FormField::text("name", "Name"),
            email: FormField::text("email", "E-mail"),
            password: FormField::secret("password", "Password"),
            active_field_index: 0,
        }
    }
}

impl Default for SignUpForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SignUpForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.name, &self.email, &self.password]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.name, &mut self.email, &mut self.password]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(2);
    }
}

// Forgot Password Form
#[derive(Debug, Clone)]
pub struct ForgotPasswordForm {
    pub email: FormField,
    pub active_field_index: usize,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self {
            email: FormField::text("email", "E-mail"),
            active_field_index: 0,
        }
    }
}

impl Default for ForgotPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ForgotPasswordForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.email]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.email]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, _index: usize) {
        self.active_field_index = 0;
    }
}

// Reset Password Form
#[derive(Debug, Clone)]
pub struct ResetPasswordForm {
    pub password: FormField,
    pub password_confirmation: FormField,
    pub active_field_index: usize,
}

impl ResetPasswordForm {
    pub fn new() -> Self {
        Self {
            password: FormField::secret("password", "New password"),
            password_confirmation: FormField::secret(
                "password_confirmation",
                "Password confirmation",
            ),
            active_field_index: 0,
        }
    }
}

impl Default for ResetPasswordForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for ResetPasswordForm {
    fn fields(&self) -> Vec<&FormField> {
        vec![&self.password, &self.password_confirmation]
    }
    fn fields_mut(&mut self) -> Vec<&mut FormField> {
        vec![&mut self.password, &mut self.password_confirmation]
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(1);
    }
}
