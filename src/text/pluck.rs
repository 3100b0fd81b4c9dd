//! JSON field extraction by dotted key path.

use std::path::Path;

use serde_json::Value;

use crate::error::RecopsError;

/// Follow a chain of key lookups from `value`. A missing key anywhere in
/// the chain is an error naming the key — extraction is all or nothing.
fn lookup<'a>(value: &'a Value, keys: &[&str]) -> Result<&'a Value, RecopsError> {
    let mut current = value;
    for key in keys {
        current = current
            .get(key)
            .ok_or_else(|| RecopsError::KeyNotFound((*key).to_string()))?;
    }
    Ok(current)
}

fn render(value: &Value) -> String {
    match value {
        // Bare strings print without JSON quotes.
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Apply the dotted `key_path` to a document.
///
/// A top-level array yields one rendered value per element; any element
/// missing a key fails the whole extraction. A top-level object yields a
/// single value.
pub fn pluck_document(document: &Value, key_path: &str) -> Result<Vec<String>, RecopsError> {
    let keys: Vec<&str> = key_path.split('.').collect();
    match document {
        Value::Array(elements) => elements
            .iter()
            .map(|element| lookup(element, &keys).map(render))
            .collect(),
        other => Ok(vec![render(lookup(other, &keys)?)]),
    }
}

/// Parse `file` as JSON and print each plucked value on its own line.
pub fn run(file: &Path, key_path: &str) -> Result<(), RecopsError> {
    let contents = std::fs::read_to_string(file)?;
    let document: Value = serde_json::from_str(&contents)?;
    for value in pluck_document(&document, key_path)? {
        println!("{value}");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn plucks_nested_path_from_every_element() {
        let document = json!([{"a": {"b": 1}}, {"a": {"b": 2}}]);
        assert_eq!(pluck_document(&document, "a.b").unwrap(), vec!["1", "2"]);
    }

    #[test]
    fn plucks_single_object_once() {
        let document = json!({"fields": {"external_link": "http://old/x.pdf"}});
        assert_eq!(
            pluck_document(&document, "fields.external_link").unwrap(),
            vec!["http://old/x.pdf"]
        );
    }

    #[test]
    fn strings_print_without_quotes_and_composites_as_json() {
        let document = json!([{"a": {"b": "plain"}}, {"a": {"b": {"c": 1}}}]);
        assert_eq!(
            pluck_document(&document, "a.b").unwrap(),
            vec!["plain", "{\"c\":1}"]
        );
    }

    #[test]
    fn missing_key_on_any_element_fails_the_run() {
        let document = json!([{"a": {"b": 1}}, {"a": {}}]);
        let err = pluck_document(&document, "a.b").unwrap_err();
        assert!(matches!(err, RecopsError::KeyNotFound(ref key) if key == "b"));
    }

    #[test]
    fn run_reads_and_plucks_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("doc.json");
        std::fs::write(&path, r#"[{"a":{"b":1}},{"a":{"b":2}}]"#).unwrap();
        run(&path, "a.b").unwrap();
    }

    #[test]
    fn run_fails_on_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "{not json").unwrap();
        assert!(matches!(run(&path, "a"), Err(RecopsError::Json(_))));
    }
}
