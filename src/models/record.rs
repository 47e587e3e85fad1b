use serde_json::Value;

/// Walk a chain of keys through nested mappings.
///
/// Returns the nested value only if every intermediate value along the way
/// is a mapping; any absent key or non-mapping intermediate yields `None`.
pub fn nested_field<'a>(record: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    let mut current = record;
    for key in keys {
        current = current.as_object()?.get(*key)?;
    }
    Some(current)
}

/// Like [`nested_field`] but rendered as display text, with the empty string
/// as the default for any missing link or an explicit null.
pub fn nested_text(record: &Value, keys: &[&str]) -> String {
    nested_field(record, keys).map(value_to_text).unwrap_or_default()
}

/// Render a JSON value as display text: strings pass through unquoted, null
/// becomes empty, everything else is compact JSON.
pub fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Decide whether a decoded object is a genuine record worth rendering, as
/// opposed to structural noise like `{}` or a sub-fragment of a larger
/// object that happened to close on its own.
///
/// A record is genuine iff it is a non-empty mapping and either has a
/// non-empty `name`, or has a `company` field (of any value) together with
/// a non-empty `questions` sequence.
pub fn is_genuine_record(value: &Value) -> bool {
    let Some(map) = value.as_object() else {
        return false;
    };
    if map.is_empty() {
        return false;
    }

    let has_name = map.get("name").is_some_and(is_truthy);
    let has_company = map.contains_key("company");
    let has_questions =
        map.get("questions").and_then(Value::as_array).is_some_and(|q| !q.is_empty());

    has_name || (has_company && has_questions)
}

// Emptiness rules for presence checks: null, false, zero, and empty
// strings/sequences/mappings all count as absent.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}
