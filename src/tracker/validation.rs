use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

/// `YYYY-MM-DD` by shape only; `2024-99-99` passes
pub static APPLICATION_DATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern compiles"));

/// Rejects empty and whitespace-only text
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

/// Human label for a validated field
fn field_label(field: &str) -> &str {
    match field {
        "company" => "Company",
        "position" => "Position",
        "application_date" => "Date",
        "status" => "Status",
        "notes" => "Notes",
        other => other,
    }
}

/// Flattens validator errors into user-facing messages.
///
/// Messages come out in form order (company, position, date) so the same
/// input always produces the same text.
pub fn error_messages(errors: &ValidationErrors) -> Vec<String> {
    let field_errors = errors.field_errors();
    let mut fields: Vec<_> = field_errors.iter().collect();
    fields.sort_by_key(|(field, _)| field_order(field));

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |e| match &e.message {
                Some(message) => message.to_string(),
                None if e.code == "required" => format!("{} is required.", field_label(field)),
                None => format!("Validation error in field: {}", field_label(field)),
            })
        })
        .collect()
}

fn field_order(field: &str) -> usize {
    ["company", "position", "application_date", "status", "notes"]
        .iter()
        .position(|f| *f == field)
        .unwrap_or(usize::MAX)
}
