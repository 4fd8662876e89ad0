//! Form field value objects

/// A single-line text field with its label and tooltip hint
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    /// Tooltip text shown while the field is focused
    pub hint: String,
    value: String,
}

impl FormField {
    /// Create a new empty text field
    pub fn text(name: &str, label: &str, hint: &str) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            hint: hint.to_string(),
            value: String::new(),
        }
    }

    /// Get the text value
    pub fn as_text(&self) -> &str {
        &self.value
    }

    /// Set the text value
    #[allow(dead_code)]
    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) {
        self.value.pop();
    }

    /// Clear the field value
    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// True when the value is empty after trimming whitespace
    pub fn is_blank(&self) -> bool {
        self.value.trim().is_empty()
    }

    /// Get the display value for rendering
    pub fn display_value(&self) -> String {
        self.value.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_starts_empty() {
        let field = FormField::text("full_name", "Client Full Name", "hint");
        assert_eq!(field.as_text(), "");
        assert!(field.is_blank());
    }

    #[test]
    fn test_push_and_pop_char() {
        let mut field = FormField::text("access_code", "Client Access Code", "hint");
        field.push_char('A');
        field.push_char('B');
        assert_eq!(field.as_text(), "AB");
        field.pop_char();
        assert_eq!(field.as_text(), "A");
    }

    #[test]
    fn test_pop_char_on_empty_is_noop() {
        let mut field = FormField::text("full_name", "Client Full Name", "hint");
        field.pop_char();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_clear() {
        let mut field = FormField::text("full_name", "Client Full Name", "hint");
        field.set_text("Jane Doe".to_string());
        field.clear();
        assert!(field.is_blank());
    }

    #[test]
    fn test_whitespace_only_is_blank() {
        let mut field = FormField::text("full_name", "Client Full Name", "hint");
        field.set_text("   ".to_string());
        assert!(field.is_blank());
        assert_eq!(field.as_text(), "   ");
    }

    #[test]
    fn test_display_value_matches_text() {
        let mut field = FormField::text("full_name", "Client Full Name", "hint");
        field.set_text("Jane Doe".to_string());
        assert_eq!(field.display_value(), "Jane Doe");
    }
}
