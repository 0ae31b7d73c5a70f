//! Declarative per-field validation rules and the engine that evaluates them

use std::collections::HashMap;

/// Raw field values collected from a form at submission time
#[derive(Debug, Clone, Default)]
pub struct FormInput {
    values: HashMap<String, String>,
}

impl FormInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value (builder style)
    pub fn with(mut self, field: &str, value: impl Into<String>) -> Self {
        self.values.insert(field.to_string(), value.into());
        self
    }

    pub fn set(&mut self, field: &str, value: impl Into<String>) {
        self.values.insert(field.to_string(), value.into());
    }

    /// Get a field value, empty string if the field was never set
    pub fn get(&self, field: &str) -> &str {
        self.values.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, field: &str) -> bool {
        self.values.contains_key(field)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A single validation rule with its user-facing message
#[derive(Debug, Clone)]
pub enum Rule {
    /// Value must be non-empty (after trimming)
    Required(String),
    /// Value must look like an e-mail address
    Email(String),
    /// Value must be at least `min` characters long
    MinLength(usize, String),
    /// Value must equal the value of another field
    MatchesField(String, String),
}

/// Rules attached to one named field
#[derive(Debug, Clone)]
struct FieldRules {
    field: String,
    rules: Vec<Rule>,
}

/// A declarative validation schema, one rule set per field.
///
/// Evaluation never short-circuits: every rule of every field is checked so
/// the caller can surface all problems at once.
#[derive(Debug, Clone, Default)]
pub struct Schema {
    fields: Vec<FieldRules>,
}

/// One rule violation, attributed to a named field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

/// All rule violations of one validation pass, in schema order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Collapse to one message per field, keeping the first violation.
    ///
    /// This is what the field-error reporter receives: a field that failed
    /// both `Required` and `Email` shows only the `Required` message.
    pub fn first_per_field(&self) -> Vec<FieldError> {
        let mut seen: Vec<&str> = Vec::new();
        let mut result = Vec::new();
        for error in &self.errors {
            if seen.contains(&error.field.as_str()) {
                continue;
            }
            seen.push(&error.field);
            result.push(error.clone());
        }
        result
    }

    /// Whether a given field has at least one violation
    #[allow(dead_code)]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach rules to a field (builder style)
    pub fn field(mut self, name: &str, rules: Vec<Rule>) -> Self {
        self.fields.push(FieldRules {
            field: name.to_string(),
            rules,
        });
        self
    }

    /// Validate `input` against every rule of every field.
    ///
    /// Returns `Err` with all violations in schema order; rules within a
    /// field are checked in the order they were declared.
    pub fn validate(&self, input: &FormInput) -> Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::default();

        for field_rules in &self.fields {
            let value = input.get(&field_rules.field);
            for rule in &field_rules.rules {
                if let Some(message) = check_rule(rule, value, input) {
                    failure.errors.push(FieldError {
                        field: field_rules.field.clone(),
                        message,
                    });
                }
            }
        }

        if failure.is_empty() {
            Ok(())
        } else {
            Err(failure)
        }
    }

    /// Project `input` onto the fields this schema declares.
    ///
    /// The remote call receives exactly the validated fields, nothing more.
    pub fn project(&self, input: &FormInput) -> FormInput {
        let mut projected = FormInput::new();
        for field_rules in &self.fields {
            projected.set(&field_rules.field, input.get(&field_rules.field));
        }
        projected
    }
}

/// Evaluate one rule, returning the message on violation
fn check_rule(rule: &Rule, value: &str, input: &FormInput) -> Option<String> {
    match rule {
        Rule::Required(message) => {
            if value.trim().is_empty() {
                Some(message.clone())
            } else {
                None
            }
        }
        Rule::Email(message) => {
            if value.is_empty() || is_valid_email(value) {
                None
            } else {
                Some(message.clone())
            }
        }
        Rule::MinLength(min, message) => {
            if value.chars().count() < *min {
                Some(message.clone())
            } else {
                None
            }
        }
        Rule::MatchesField(other, message) => {
            if value == input.get(other) {
                None
            } else {
                Some(message.clone())
            }
        }
    }
}

/// Minimal e-mail shape check: non-empty local part and a dotted domain
fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty() && !domain.contains(' ')
}
