//! Schema validation for stored and imported expense lists
//!
//! Checks a parsed JSON value against the expense list shape and collects
//! every violation instead of stopping at the first one.

use std::collections::HashSet;
use std::fmt;

use serde_json::{Map, Value};

use crate::models::{ExpenseId, ExpenseRecord, Period};

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Position of the offending element, `None` for the payload as a whole
    pub index: Option<usize>,
    /// Offending field, if the problem is with one field
    pub field: Option<&'static str>,
    pub message: String,
}

impl Violation {
    /// A problem with the payload as a whole
    pub fn payload(message: impl Into<String>) -> Self {
        Self {
            index: None,
            field: None,
            message: message.into(),
        }
    }

    /// A problem with one field of one element
    pub fn item(index: usize, field: &'static str, message: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            field: Some(field),
            message: message.into(),
        }
    }

    fn element(index: usize, message: impl Into<String>) -> Self {
        Self {
            index: Some(index),
            field: None,
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.index {
            write!(f, "item {}: ", index)?;
        }
        if let Some(field) = self.field {
            write!(f, "{}: ", field)?;
        }
        f.write_str(&self.message)
    }
}

/// Every violation found in a payload
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new(violations: Vec<Violation>) -> Self {
        Self { violations }
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationReport {}

/// Parse raw text and validate it as an expense list
pub fn parse_payload(raw: &str) -> Result<Vec<ExpenseRecord>, ValidationReport> {
    let value: Value = serde_json::from_str(raw).map_err(|e| {
        ValidationReport::new(vec![Violation::payload(format!("not valid JSON: {}", e))])
    })?;
    validate(&value)
}

/// Validate a JSON value as a list of expense records
///
/// The value must be an array whose elements each carry a non-empty string
/// `id` (unique across the list), a non-blank `title`, a finite positive
/// numeric `amount` and a recognized `period`.
pub fn validate(candidate: &Value) -> Result<Vec<ExpenseRecord>, ValidationReport> {
    let items = match candidate.as_array() {
        Some(items) => items,
        None => {
            return Err(ValidationReport::new(vec![Violation::payload(format!(
                "expected a list of expenses, found {}",
                kind(candidate)
            ))]))
        }
    };

    let mut records = Vec::with_capacity(items.len());
    let mut violations = Vec::new();
    let mut seen = HashSet::new();

    for (index, item) in items.iter().enumerate() {
        match check_item(index, item) {
            Ok(record) => {
                if !seen.insert(record.id.clone()) {
                    violations.push(Violation::item(
                        index,
                        "id",
                        format!("duplicate id '{}'", record.id),
                    ));
                }
                records.push(record);
            }
            Err(mut found) => violations.append(&mut found),
        }
    }

    if violations.is_empty() {
        Ok(records)
    } else {
        Err(ValidationReport::new(violations))
    }
}

fn check_item(index: usize, item: &Value) -> Result<ExpenseRecord, Vec<Violation>> {
    let obj = match item.as_object() {
        Some(obj) => obj,
        None => {
            return Err(vec![Violation::element(
                index,
                format!("expected an object, found {}", kind(item)),
            )])
        }
    };

    let mut violations = Vec::new();

    let id = string_field(obj, index, "id", &mut violations).and_then(|id| {
        if id.is_empty() {
            violations.push(Violation::item(index, "id", "must not be empty"));
            None
        } else {
            Some(ExpenseId::from(id))
        }
    });

    let title = string_field(obj, index, "title", &mut violations).and_then(|title| {
        if title.trim().is_empty() {
            violations.push(Violation::item(index, "title", "must not be blank"));
            None
        } else {
            Some(title.to_string())
        }
    });

    let amount = match obj.get("amount") {
        None => {
            violations.push(Violation::item(index, "amount", "missing"));
            None
        }
        Some(Value::Number(n)) => match n.as_f64() {
            Some(amount) if !amount.is_finite() => {
                violations.push(Violation::item(index, "amount", "must be a finite number"));
                None
            }
            Some(amount) if amount <= 0.0 => {
                violations.push(Violation::item(
                    index,
                    "amount",
                    format!("must be greater than zero (got {})", amount),
                ));
                None
            }
            Some(amount) => Some(amount),
            None => {
                violations.push(Violation::item(index, "amount", "must be a finite number"));
                None
            }
        },
        Some(other) => {
            violations.push(Violation::item(
                index,
                "amount",
                format!("expected a number, found {}", kind(other)),
            ));
            None
        }
    };

    let period = string_field(obj, index, "period", &mut violations).and_then(|name| {
        match name.parse::<Period>() {
            Ok(period) => Some(period),
            Err(e) => {
                violations.push(Violation::item(index, "period", e.to_string()));
                None
            }
        }
    });

    match (id, title, amount, period) {
        (Some(id), Some(title), Some(amount), Some(period)) if violations.is_empty() => {
            Ok(ExpenseRecord {
                id,
                title,
                amount,
                period,
            })
        }
        _ => Err(violations),
    }
}

fn string_field<'a>(
    obj: &'a Map<String, Value>,
    index: usize,
    field: &'static str,
    violations: &mut Vec<Violation>,
) -> Option<&'a str> {
    match obj.get(field) {
        Some(Value::String(s)) => Some(s.as_str()),
        Some(other) => {
            violations.push(Violation::item(
                index,
                field,
                format!("expected a string, found {}", kind(other)),
            ));
            None
        }
        None => {
            violations.push(Violation::item(index, field, "missing"));
            None
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_payload() {
        let payload = json!([
            {"id": "a", "title": "Rent", "amount": 30000, "period": "monthly"},
            {"id": "b", "title": "Coffee", "amount": 150.5, "period": "daily"}
        ]);

        let records = validate(&payload).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id, ExpenseId::from("a"));
        assert_eq!(records[0].amount, 30000.0);
        assert_eq!(records[1].period, Period::Daily);
    }

    #[test]
    fn test_empty_list_is_valid() {
        assert!(validate(&json!([])).unwrap().is_empty());
    }

    #[test]
    fn test_top_level_must_be_list() {
        let report = validate(&json!({"id": "a"})).unwrap_err();
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].index, None);
        assert!(report.to_string().contains("expected a list"));
    }

    #[test]
    fn test_collects_all_violations() {
        let payload = json!([
            {"id": "a", "title": "Rent", "amount": 30000, "period": "monthly"},
            {"id": "", "title": "  ", "amount": "12", "period": "hourly"},
            42
        ]);

        let report = validate(&payload).unwrap_err();
        let fields: Vec<_> = report
            .violations()
            .iter()
            .map(|v| (v.index, v.field))
            .collect();

        assert_eq!(
            fields,
            vec![
                (Some(1), Some("id")),
                (Some(1), Some("title")),
                (Some(1), Some("amount")),
                (Some(1), Some("period")),
                (Some(2), None),
            ]
        );
    }

    #[test]
    fn test_missing_fields() {
        let report = validate(&json!([{"title": "Rent"}])).unwrap_err();
        let messages: Vec<_> = report.violations().iter().map(|v| v.to_string()).collect();
        assert_eq!(
            messages,
            vec![
                "item 0: id: missing",
                "item 0: amount: missing",
                "item 0: period: missing",
            ]
        );
    }

    #[test]
    fn test_non_positive_amount() {
        let report =
            validate(&json!([{"id": "a", "title": "Rent", "amount": 0, "period": "monthly"}]))
                .unwrap_err();
        assert_eq!(report.violations()[0].field, Some("amount"));
    }

    #[test]
    fn test_duplicate_ids() {
        let payload = json!([
            {"id": "a", "title": "Rent", "amount": 1, "period": "monthly"},
            {"id": "a", "title": "Gym", "amount": 2, "period": "monthly"}
        ]);
        let report = validate(&payload).unwrap_err();
        assert_eq!(report.violations(), &[Violation::item(1, "id", "duplicate id 'a'")]);
    }

    #[test]
    fn test_nan_is_not_json() {
        let raw = r#"[{"id": "a", "title": "Rent", "amount": NaN, "period": "monthly"}]"#;
        let report = parse_payload(raw).unwrap_err();
        assert_eq!(report.len(), 1);
        assert!(report.to_string().starts_with("not valid JSON"));
    }

    #[test]
    fn test_parse_payload_valid() {
        let raw = r#"[{"id": "a", "title": "Rent", "amount": 1200, "period": "yearly"}]"#;
        let records = parse_payload(raw).unwrap();
        assert_eq!(records[0].period, Period::Yearly);
    }

    #[test]
    fn test_extra_fields_ignored() {
        let payload = json!([
            {"id": "a", "title": "Rent", "amount": 1, "period": "monthly", "note": "x"}
        ]);
        assert_eq!(validate(&payload).unwrap().len(), 1);
    }
}
