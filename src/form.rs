//! Per-field error state and decoration strategy for the form pages.
//!
//! Each field declares its own [`FieldStyle`] instead of the page branching
//! on element identity; components derive classes and error-slot content
//! from a [`FormErrors`] map.

use std::collections::HashMap;

/// How a field is visually marked invalid.
#[derive(Clone, Copy, PartialEq)]
pub enum FieldStyle {
    /// Red border applied to the input itself.
    Plain,
    /// Red border applied to the bordered group wrapping the input.
    Grouped,
}

impl FieldStyle {
    /// Extra classes for the element that carries the border.
    pub fn border_class(&self, has_error: bool) -> &'static str {
        match (self, has_error) {
            (FieldStyle::Plain, true) => "border-red-500",
            (FieldStyle::Plain, false) => "",
            (FieldStyle::Grouped, true) => "border-red-500",
            (FieldStyle::Grouped, false) => "border-[#E7E7E8]",
        }
    }
}

/// Validation messages keyed by field id. At most one message per field;
/// setting a second message replaces the first.
#[derive(Clone, PartialEq, Default)]
pub struct FormErrors {
    map: HashMap<&'static str, String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, field: &'static str, message: impl Into<String>) {
        self.map.insert(field, message.into());
    }

    /// Idempotent; clearing a field with no error is a no-op.
    pub fn clear(&mut self, field: &'static str) {
        self.map.remove(field);
    }

    pub fn get(&self, field: &'static str) -> Option<&str> {
        self.map.get(field).map(String::as_str)
    }

    pub fn has(&self, field: &'static str) -> bool {
        self.map.contains_key(field)
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

/// Generic required-field pass: every empty value gets the fixed message.
/// Used by forms without page-specific rules; these errors stay until the
/// next submit attempt.
pub fn check_required(fields: &[(&'static str, &str)]) -> FormErrors {
    let mut errors = FormErrors::new();
    for (id, value) in fields {
        if value.trim().is_empty() {
            errors.set(id, "این فیلد الزامی است");
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_set_replaces_first() {
        let mut errors = FormErrors::new();
        errors.set("phone", "first");
        errors.set("phone", "second");
        assert_eq!(errors.get("phone"), Some("second"));
    }

    #[test]
    fn clear_is_idempotent() {
        let mut errors = FormErrors::new();
        errors.clear("phone");
        assert!(errors.is_empty());
        errors.set("phone", "msg");
        errors.clear("phone");
        errors.clear("phone");
        assert!(!errors.has("phone"));
    }

    #[test]
    fn required_pass_flags_only_empty_fields() {
        let errors = check_required(&[("name", "  "), ("message", "hi")]);
        assert!(errors.has("name"));
        assert!(!errors.has("message"));
        assert_eq!(errors.get("name"), Some("این فیلد الزامی است"));
    }

    #[test]
    fn grouped_style_restores_neutral_border() {
        assert_eq!(FieldStyle::Grouped.border_class(true), "border-red-500");
        assert_eq!(FieldStyle::Grouped.border_class(false), "border-[#E7E7E8]");
        assert_eq!(FieldStyle::Plain.border_class(false), "");
    }
}
