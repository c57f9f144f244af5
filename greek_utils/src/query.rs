//! Operator based filtering of records.
//!
//! Records are anything that serializes to a JSON object. Each [`Criterion`]
//! names a field, an [`Operator`] and the value to compare against; a record
//! matches when every criterion holds.
//!
//! ```
//! use greek_utils::query::{find, Criterion, Operator};
//! use serde_json::json;
//!
//! let employees = vec![
//!     json!({"name": "Νίκος", "hours": 38}),
//!     json!({"name": "Μαρία", "hours": 42}),
//! ];
//! let criteria = [Criterion::new("hours", Operator::Gt, json!(40))];
//! let overtime = find(&criteria, &employees).unwrap();
//! assert_eq!(overtime.len(), 1);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use serde_json::Value;

use crate::error::{Error, Result};

/// Comparison operators, written as in the query strings they parse from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    In,
    AnyInList,
    AllInList,
    NotAnyInList,
    NotAllInList,
    NotIn,
    Contains,
    NotContains,
    StartsWith,
    EndsWith,
}

impl Operator {
    pub const ALL: [Operator; 16] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::In,
        Operator::AnyInList,
        Operator::AllInList,
        Operator::NotAnyInList,
        Operator::NotAllInList,
        Operator::NotIn,
        Operator::Contains,
        Operator::NotContains,
        Operator::StartsWith,
        Operator::EndsWith,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Ne => "!=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::In => "in",
            Operator::AnyInList => "anyInList",
            Operator::AllInList => "allInList",
            Operator::NotAnyInList => "not_anyInList",
            Operator::NotAllInList => "not_allInList",
            Operator::NotIn => "not_in",
            Operator::Contains => "contains",
            Operator::NotContains => "not_contains",
            Operator::StartsWith => "startsWith",
            Operator::EndsWith => "endsWith",
        }
    }

    /// Apply the operator with `value` on the left and `criterion` on the right.
    pub fn apply(&self, value: &Value, criterion: &Value) -> Result<bool> {
        let result = match self {
            Operator::Eq => loosely_equal(value, criterion),
            Operator::Ne => !loosely_equal(value, criterion),
            Operator::Lt => order(value, criterion)? == Ordering::Less,
            Operator::Le => order(value, criterion)? != Ordering::Greater,
            Operator::Gt => order(value, criterion)? == Ordering::Greater,
            Operator::Ge => order(value, criterion)? != Ordering::Less,
            Operator::In => is_member(value, criterion)?,
            Operator::NotIn => !is_member(value, criterion)?,
            Operator::Contains => is_member(criterion, value)?,
            Operator::NotContains => !is_member(criterion, value)?,
            Operator::AnyInList => any_member(value, criterion)?,
            Operator::AllInList => all_members(value, criterion)?,
            Operator::NotAnyInList => !any_member(value, criterion)?,
            Operator::NotAllInList => !all_members(value, criterion)?,
            Operator::StartsWith => {
                let (s, prefix) = both_strings(*self, value, criterion)?;
                s.starts_with(prefix)
            }
            Operator::EndsWith => {
                let (s, suffix) = both_strings(*self, value, criterion)?;
                s.ends_with(suffix)
            }
        };
        Ok(result)
    }
}

impl FromStr for Operator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Operator::ALL
            .iter()
            .find(|op| op.as_str() == s)
            .copied()
            .ok_or_else(|| Error::UnsupportedOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

fn incomparable(op: &str, a: &Value, b: &Value) -> Error {
    Error::IncomparableValues(format!("{} {} {}", a, op, b))
}

/// Equality that treats `5` and `5.0` as the same number
fn loosely_equal(a: &Value, b: &Value) -> bool {
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) if a.is_number() && b.is_number() => x == y,
        _ => a == b,
    }
}

fn order(a: &Value, b: &Value) -> Result<Ordering> {
    let ordering = match (a, b) {
        (Value::Number(x), Value::Number(y)) => x
            .as_f64()
            .zip(y.as_f64())
            .and_then(|(x, y)| x.partial_cmp(&y)),
        (Value::String(x), Value::String(y)) => Some(x.cmp(y)),
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        _ => None,
    };
    ordering.ok_or_else(|| incomparable("<>", a, b))
}

/// `item in container`: substring, array element or object key
fn is_member(item: &Value, container: &Value) -> Result<bool> {
    match (item, container) {
        (Value::String(needle), Value::String(haystack)) => Ok(haystack.contains(needle.as_str())),
        (_, Value::Array(items)) => Ok(items.iter().any(|v| loosely_equal(v, item))),
        (Value::String(key), Value::Object(map)) => Ok(map.contains_key(key)),
        _ => Err(incomparable("in", item, container)),
    }
}

fn as_list<'a>(items: &'a Value, container: &Value) -> Result<&'a Vec<Value>> {
    items
        .as_array()
        .ok_or_else(|| incomparable("in list", items, container))
}

fn any_member(items: &Value, container: &Value) -> Result<bool> {
    for item in as_list(items, container)? {
        if is_member(item, container)? {
            return Ok(true);
        }
    }
    Ok(false)
}

fn all_members(items: &Value, container: &Value) -> Result<bool> {
    for item in as_list(items, container)? {
        if !is_member(item, container)? {
            return Ok(false);
        }
    }
    Ok(true)
}

fn both_strings<'a>(op: Operator, a: &'a Value, b: &'a Value) -> Result<(&'a str, &'a str)> {
    a.as_str()
        .zip(b.as_str())
        .ok_or_else(|| incomparable(op.as_str(), a, b))
}

/// Compare two values with the operator named by `operator`.
///
/// # Errors
/// [`Error::UnsupportedOperator`] for an unknown operator string,
/// [`Error::IncomparableValues`] when the operator does not apply to the
/// value types.
pub fn compare_values(operator: &str, value: &Value, criterion: &Value) -> Result<bool> {
    operator.parse::<Operator>()?.apply(value, criterion)
}

/// One `field operator value` condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Criterion {
    pub field: String,
    pub operator: Operator,
    pub value: Value,
}

impl Criterion {
    pub fn new(field: impl Into<String>, operator: Operator, value: Value) -> Self {
        Self {
            field: field.into(),
            operator,
            value,
        }
    }

    /// Build a criterion from an operator string.
    pub fn parse(field: impl Into<String>, operator: &str, value: Value) -> Result<Self> {
        Ok(Self::new(field, operator.parse()?, value))
    }
}

/// Check that `record` has every field in `fields`, warning about each one it lacks.
pub fn has_attributes(fields: &[&str], record: &Value) -> bool {
    let Some(map) = record.as_object() else {
        log::warn!("Record is not an object: {}", record);
        return false;
    };
    let mut state = true;
    for field in fields {
        if !map.contains_key(*field) {
            log::warn!("Attribute '{}' does not exist in record", field);
            state = false;
        }
    }
    state
}

/// Check if the record matches all the given conditions.
///
/// A record lacking one of the fields does not match.
pub fn is_match(criteria: &[Criterion], record: &Value) -> Result<bool> {
    for criterion in criteria {
        let Some(attribute) = record.get(&criterion.field) else {
            return Ok(false);
        };
        if !criterion.operator.apply(attribute, &criterion.value)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Find all records that match the given conditions.
///
/// Returns an empty list when a criterion names a field the records do not
/// have.
pub fn find<T: Serialize + Clone>(criteria: &[Criterion], records: &[T]) -> Result<Vec<T>> {
    let values = records
        .iter()
        .map(serde_json::to_value)
        .collect::<std::result::Result<Vec<Value>, _>>()?;

    let Some(first) = values.first() else {
        return Ok(Vec::new());
    };
    let fields: Vec<&str> = criteria.iter().map(|c| c.field.as_str()).collect();
    if !has_attributes(&fields, first) {
        return Ok(Vec::new());
    }

    let mut matched = Vec::new();
    for (record, value) in records.iter().zip(&values) {
        if is_match(criteria, value)? {
            matched.push(record.clone());
        }
    }
    log::debug!("{} of {} records matched", matched.len(), records.len());
    Ok(matched)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Serialize;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Serialize)]
    struct Employee {
        name: String,
        department: String,
        hours: f64,
        skills: Vec<String>,
    }

    fn employee(name: &str, department: &str, hours: f64, skills: &[&str]) -> Employee {
        Employee {
            name: name.to_string(),
            department: department.to_string(),
            hours,
            skills: skills.iter().map(|s| s.to_string()).collect(),
        }
    }

    fn sample_employees() -> Vec<Employee> {
        vec![
            employee("Νίκος", "Λογιστήριο", 38.0, &["excel"]),
            employee("Μαρία", "Πωλήσεις", 42.5, &["crm", "excel"]),
            employee("Γιώργος", "Πωλήσεις", 40.0, &["crm"]),
        ]
    }

    #[test]
    fn test_compare_values() {
        let cases = [
            ("=", json!(5), json!(5), true),
            ("!=", json!(5), json!(3), true),
            ("<", json!(3), json!(5), true),
            ("<=", json!(3), json!(5), true),
            (">", json!(5), json!(3), true),
            (">=", json!(5), json!(3), true),
            ("in", json!("a"), json!("abc"), true),
            ("anyInList", json!(["a", "x"]), json!("abc"), true),
            ("allInList", json!(["a", "b"]), json!("abc"), true),
            ("not_anyInList", json!(["x", "y"]), json!("abc"), true),
            ("not_allInList", json!(["a", "x"]), json!("abc"), true),
            ("not_in", json!("x"), json!("abc"), true),
            ("contains", json!("abc"), json!("a"), true),
            ("not_contains", json!("abc"), json!("x"), true),
            ("startsWith", json!("abc"), json!("a"), true),
            ("endsWith", json!("abc"), json!("c"), true),
        ];
        for (op, a, b, expected) in cases {
            assert_eq!(compare_values(op, &a, &b).unwrap(), expected, "{a} {op} {b}");
        }
    }

    #[test]
    fn test_numbers_compare_across_representations() {
        assert!(compare_values("=", &json!(5), &json!(5.0)).unwrap());
        assert!(compare_values("<", &json!(4), &json!(4.5)).unwrap());
        assert!(compare_values("in", &json!(2), &json!([1.0, 2.0])).unwrap());
    }

    #[test]
    fn test_unsupported_operator() {
        let err = compare_values("~=", &json!(1), &json!(1)).unwrap_err();
        assert!(matches!(err, Error::UnsupportedOperator(op) if op == "~="));
    }

    #[test]
    fn test_incomparable_values() {
        assert!(matches!(
            compare_values("<", &json!("a"), &json!(1)),
            Err(Error::IncomparableValues(_))
        ));
        assert!(matches!(
            compare_values("startsWith", &json!(10), &json!("1")),
            Err(Error::IncomparableValues(_))
        ));
    }

    #[test]
    fn test_operator_round_trip_through_str() {
        for op in Operator::ALL {
            assert_eq!(op.as_str().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn test_find_structs() {
        let employees = sample_employees();
        let criteria = [
            Criterion::new("department", Operator::Eq, json!("Πωλήσεις")),
            Criterion::new("hours", Operator::Gt, json!(40)),
        ];
        let found = find(&criteria, &employees).unwrap();
        assert_eq!(found, vec![employees[1].clone()]);
    }

    #[test]
    fn test_find_list_membership() {
        let employees = sample_employees();
        let criteria = [Criterion::parse("skills", "in", json!("crm")).unwrap()];
        // skills is a list, so "in" against a string cannot be evaluated
        assert!(find(&criteria, &employees).is_err());

        let criteria = [Criterion::parse("skills", "contains", json!("crm")).unwrap()];
        let names: Vec<String> = find(&criteria, &employees)
            .unwrap()
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Μαρία", "Γιώργος"]);
    }

    #[test]
    fn test_find_unknown_attribute_returns_empty() {
        let employees = sample_employees();
        let criteria = [Criterion::new("salary", Operator::Gt, json!(1000))];
        assert!(find(&criteria, &employees).unwrap().is_empty());
    }

    #[test]
    fn test_find_without_criteria_returns_everything() {
        let employees = sample_employees();
        assert_eq!(find(&[], &employees).unwrap().len(), 3);
    }

    #[test]
    fn test_has_attributes() {
        let record = json!({"name": "Νίκος", "hours": 38});
        assert!(has_attributes(&["name", "hours"], &record));
        assert!(!has_attributes(&["name", "age"], &record));
        assert!(!has_attributes(&["name"], &json!([1, 2])));
    }
}
