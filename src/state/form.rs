//! Registration form state and submit lifecycle

use super::field::FormField;

/// Fixed message when either field is blank after trimming
pub const MSG_VALIDATION: &str = "Please fill out both fields.";
/// Fixed message after a completed registration
pub const MSG_SUCCESS: &str = "Client registered successfully (demo).";
/// Fixed message when the registration operation fails
pub const MSG_FAILURE: &str = "Something went wrong. Please try again.";

const FULL_NAME_HINT: &str = "Enter the client's legal full name as on record.";
const ACCESS_CODE_HINT: &str = "This code is provided by the system or admin for client linking.";

/// Kind of status line, drives its color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
}

/// Outcome message shown below the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

/// Focusable elements of the registration form, in tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormElement {
    #[default]
    FullName,
    AccessCode,
    SubmitButton,
}

impl FormElement {
    const ORDER: [FormElement; 3] = [
        FormElement::FullName,
        FormElement::AccessCode,
        FormElement::SubmitButton,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|e| *e == self).unwrap_or(0)
    }
}

/// The registration page's form model
#[derive(Debug, Clone)]
pub struct RegisterForm {
    pub full_name: FormField,
    pub access_code: FormField,
    pub active_element: FormElement,
    pub submitting: bool,
    pub status: Option<StatusLine>,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self {
            full_name: FormField::text("full_name", "Client Full Name", FULL_NAME_HINT),
            access_code: FormField::text("access_code", "Client Access Code", ACCESS_CODE_HINT),
            active_element: FormElement::FullName,
            submitting: false,
            status: None,
        }
    }

    /// Move focus to the next element (wraps around)
    pub fn next_element(&mut self) {
        let count = FormElement::ORDER.len();
        self.active_element = FormElement::ORDER[(self.active_element.index() + 1) % count];
    }

    /// Move focus to the previous element (wraps around)
    pub fn prev_element(&mut self) {
        let count = FormElement::ORDER.len();
        let current = self.active_element.index();
        self.active_element = FormElement::ORDER[(current + count - 1) % count];
    }

    /// The field under focus, if focus is on a field rather than the button
    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        match self.active_element {
            FormElement::FullName => Some(&mut self.full_name),
            FormElement::AccessCode => Some(&mut self.access_code),
            FormElement::SubmitButton => None,
        }
    }

    /// Tooltip hint of the focused field
    pub fn active_hint(&self) -> Option<&str> {
        match self.active_element {
            FormElement::FullName => Some(&self.full_name.hint),
            FormElement::AccessCode => Some(&self.access_code.hint),
            FormElement::SubmitButton => None,
        }
    }

    /// True when both fields are non-blank after trimming
    pub fn validate(&self) -> bool {
        !self.full_name.is_blank() && !self.access_code.is_blank()
    }

    pub fn set_status(&mut self, kind: StatusKind, text: &str) {
        self.status = Some(StatusLine {
            kind,
            text: text.to_string(),
        });
    }

    pub fn clear_status(&mut self) {
        self.status = None;
    }

    /// Enter the submitting state. Status must already be cleared.
    pub fn begin_submit(&mut self) {
        self.submitting = true;
    }

    /// Leave the submitting state with the attempt's outcome.
    /// A successful attempt resets both fields.
    pub fn finish_submit(&mut self, success: bool) {
        if success {
            self.full_name.clear();
            self.access_code.clear();
            self.set_status(StatusKind::Success, MSG_SUCCESS);
        } else {
            self.set_status(StatusKind::Error, MSG_FAILURE);
        }
        self.submitting = false;
    }
}

impl Default for RegisterForm {
    fn default() -> Self {
        Self::new()
    }
}
