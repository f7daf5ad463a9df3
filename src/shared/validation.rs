// src/shared/validation.rs
//
// Field-level validation support. Create/update commands collect every
// violation before failing so the client sees the full list in one
// VALIDATION_ERROR response instead of the first offender only.
use std::sync::OnceLock;

use email_address::EmailAddress;
use regex::Regex;
use serde_json::Value;

fn slug_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").unwrap())
}

/// Accumulates (field, message) pairs during command validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    fields: Vec<(String, String)>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: &str) {
        self.fields.push((field.to_string(), message.to_string()));
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> Vec<&str> {
        self.fields.iter().map(|(f, _)| f.as_str()).collect()
    }

    /// Serialize into the `details` object of the error envelope.
    pub fn to_details(&self) -> Value {
        let mut map = serde_json::Map::new();
        for (field, message) in &self.fields {
            map.insert(field.clone(), Value::String(message.clone()));
        }
        Value::Object(map)
    }
}

impl std::fmt::Display for Violations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let fields: Vec<&str> = self.fields();
        write!(f, "invalid fields: {}", fields.join(", "))
    }
}

/// Required, non-empty after trimming. Records a violation and returns an
/// empty string on failure; the caller bails out before using it.
pub fn required_text(
    v: &mut Violations,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> String {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                v.add(field, &format!("{field} is required"));
                String::new()
            } else if trimmed.len() > max_len {
                v.add(field, &format!("{field} must be at most {max_len} characters"));
                String::new()
            } else {
                trimmed.to_string()
            }
        }
        None => {
            v.add(field, &format!("{field} is required"));
            String::new()
        }
    }
}

/// Optional field: present-but-overlong is a violation, absent is fine.
pub fn optional_text(
    v: &mut Violations,
    field: &str,
    value: Option<String>,
    max_len: usize,
) -> Option<String> {
    let raw = value?;
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    if trimmed.len() > max_len {
        v.add(field, &format!("{field} must be at most {max_len} characters"));
        return None;
    }
    Some(trimmed.to_string())
}

/// Required URL-safe slug, normalized to lowercase.
pub fn required_slug(v: &mut Violations, field: &str, value: Option<String>) -> String {
    let slug = required_text(v, field, value, 150).to_lowercase();
    if !slug.is_empty() && !slug_regex().is_match(&slug) {
        v.add(
            field,
            &format!("{field} may only contain lowercase letters, digits and hyphens"),
        );
    }
    slug
}

pub fn required_email(v: &mut Violations, field: &str, value: Option<String>) -> String {
    let email = required_text(v, field, value, 255).to_lowercase();
    if !email.is_empty() && !EmailAddress::is_valid(&email) {
        v.add(field, &format!("{field} must be a valid email address"));
    }
    email
}

pub fn is_valid_slug(slug: &str) -> bool {
    slug_regex().is_match(slug)
}
