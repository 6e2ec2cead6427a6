// Request validation rules.
//
// Purpose
// - Let request types describe their own field rules; the transport runs them before dispatch.

use crate::shared::core::outcome::FieldErrors;

pub trait Validate {
    /// Empty when the value is valid.
    fn validate(&self) -> FieldErrors;
}

/// Collects field errors rule by rule.
#[derive(Debug, Default)]
pub struct Rules {
    errors: FieldErrors,
}

impl Rules {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check(mut self, field: &str, valid: bool, message: &str) -> Self {
        if !valid {
            self.errors
                .entry(field.to_string())
                .or_default()
                .push(message.to_string());
        }
        self
    }

    pub fn required(self, field: &str, value: &str, message: &str) -> Self {
        self.check(field, !value.trim().is_empty(), message)
    }

    pub fn max_length(self, field: &str, value: &str, max: usize, message: &str) -> Self {
        self.check(field, value.chars().count() <= max, message)
    }

    /// Only checked when the value is present, so pair it with `required` if needed.
    pub fn email(self, field: &str, value: &str, message: &str) -> Self {
        self.check(field, value.is_empty() || is_email(value), message)
    }

    pub fn finish(self) -> FieldErrors {
        self.errors
    }
}

fn is_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !value.chars().any(char::is_whitespace)
        && domain
            .split_once('.')
            .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
}
