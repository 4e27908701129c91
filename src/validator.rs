//! Stateless required-field validation for a single plain form.
//!
//! Unlike the wizard this has no step concept: each field's validity is
//! recomputed from its current value on every input, blur, and submit
//! attempt, and the error-display state is toggled through the injected
//! form surface.

use crate::wizard::validate::is_valid_email;

/// Built-in stand-ins for native constraint validation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Constraint {
    #[default]
    None,
    Email,
    /// Digits, spaces, and a leading `+` only.
    Phone,
}

impl Constraint {
    fn accepts(self, value: &str) -> bool {
        match self {
            Constraint::None => true,
            Constraint::Email => is_valid_email(value),
            Constraint::Phone => value
                .trim()
                .strip_prefix('+')
                .unwrap_or(value.trim())
                .chars()
                .all(|ch| ch.is_ascii_digit() || ch == ' '),
        }
    }
}

/// One form field in document order.
#[derive(Debug, Clone)]
pub struct FormField {
    pub id: String,
    pub required: bool,
    pub constraint: Constraint,
    value: String,
}

impl FormField {
    pub fn new(id: impl Into<String>, required: bool, constraint: Constraint) -> Self {
        Self {
            id: id.into(),
            required,
            constraint,
            value: String::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Valid iff non-empty after trimming and the constraint passes.
    /// Optional fields are allowed to stay empty.
    fn is_valid(&self) -> bool {
        let trimmed = self.value.trim();
        if trimmed.is_empty() {
            return !self.required;
        }
        self.constraint.accepts(&self.value)
    }
}

/// Receives error-display toggles and focus requests.
pub trait FormSurface {
    fn set_field_invalid(&mut self, field_id: &str, invalid: bool);
    fn focus_field(&mut self, field_id: &str);
}

/// Outcome of a submit attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields valid; the submit event proceeds unmodified.
    Accepted,
    /// Submission cancelled; focus moved to the first invalid field.
    Rejected { first_invalid: String },
}

/// Field-level required/validity checker bound to one form's events.
pub struct SimpleFormValidator {
    fields: Vec<FormField>,
}

impl SimpleFormValidator {
    pub fn new(fields: Vec<FormField>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// A field was edited: store the value and recompute its validity.
    pub fn on_input<S: FormSurface>(&mut self, field_id: &str, value: &str, surface: &mut S) {
        if let Some(field) = self.fields.iter_mut().find(|field| field.id == field_id) {
            field.value = value.to_string();
            let valid = field.is_valid();
            surface.set_field_invalid(field_id, !valid);
        }
    }

    /// A field lost focus: recompute its validity from the current value.
    pub fn on_blur<S: FormSurface>(&mut self, field_id: &str, surface: &mut S) {
        if let Some(field) = self.fields.iter().find(|field| field.id == field_id) {
            surface.set_field_invalid(field_id, !field.is_valid());
        }
    }

    /// A submit was attempted: recompute every field in form order. Any
    /// invalid field cancels the submission and receives focus (first one
    /// found wins).
    pub fn on_submit<S: FormSurface>(&mut self, surface: &mut S) -> SubmitOutcome {
        let mut first_invalid: Option<String> = None;
        for field in &self.fields {
            let valid = field.is_valid();
            surface.set_field_invalid(&field.id, !valid);
            if !valid && first_invalid.is_none() {
                first_invalid = Some(field.id.clone());
            }
        }
        match first_invalid {
            Some(id) => {
                surface.focus_field(&id);
                SubmitOutcome::Rejected { first_invalid: id }
            }
            None => SubmitOutcome::Accepted,
        }
    }
}
