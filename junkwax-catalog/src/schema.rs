//! Structural checks for untyped release documents.
//!
//! Editing operations run these checks against the raw JSON before (and
//! after) any structural rewrite; a file that fails is reported and left
//! untouched. The checks cover the shape the typed model relies on —
//! required keys, value kinds, and the two-level variation nesting limit.
//! The `$schema` URI in a release file is carried as data only; there is no
//! remote schema fetch.

use serde_json::Value;

/// A single structural problem, located by a dotted/indexed path into the
/// document (e.g., `sets[2].cards[14].attributes`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    pub path: String,
    pub message: String,
}

impl SchemaViolation {
    fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        SchemaViolation {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.path, self.message)
    }
}

/// Check a release document, collecting every violation rather than
/// stopping at the first.
pub fn check_release(doc: &Value) -> Vec<SchemaViolation> {
    let mut out = Vec::new();

    let Some(root) = doc.as_object() else {
        out.push(SchemaViolation::new("$", "release document must be an object"));
        return out;
    };

    require_string(root, "name", "$", &mut out);
    optional_string(root, "$schema", "$", &mut out);
    optional_string(root, "version", "$", &mut out);
    optional_string(root, "uniqueId", "$", &mut out);
    optional_string_array(root, "notes", "$", &mut out);

    if let Some(attrs) = root.get("attributes") {
        match attrs.as_array() {
            Some(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    let path = format!("attributes[{i}]");
                    match entry.as_object() {
                        Some(pair) => {
                            require_string(pair, "attribute", &path, &mut out);
                            require_string(pair, "note", &path, &mut out);
                        }
                        None => out.push(SchemaViolation::new(path, "must be an object")),
                    }
                }
            }
            None => out.push(SchemaViolation::new("attributes", "must be an array")),
        }
    }

    match root.get("sets") {
        Some(sets) => match sets.as_array() {
            Some(entries) => {
                for (i, set) in entries.iter().enumerate() {
                    check_set(set, &format!("sets[{i}]"), &mut out);
                }
            }
            None => out.push(SchemaViolation::new("sets", "must be an array")),
        },
        None => out.push(SchemaViolation::new("$", "missing 'sets' property")),
    }

    out
}

fn check_set(set: &Value, path: &str, out: &mut Vec<SchemaViolation>) {
    let Some(obj) = set.as_object() else {
        out.push(SchemaViolation::new(path, "must be an object"));
        return;
    };

    require_string(obj, "name", path, out);
    optional_string(obj, "uniqueId", path, out);
    optional_string(obj, "insertOdds", path, out);
    optional_integer(obj, "numberedTo", path, out);
    optional_string_array(obj, "notes", path, out);
    optional_string_array(obj, "attributes", path, out);

    check_parallel_list(obj.get("parallels"), &format!("{path}.parallels"), out);
    check_variation_list(obj.get("variations"), &format!("{path}.variations"), out);

    if let Some(cards) = obj.get("cards") {
        match cards.as_array() {
            Some(entries) => {
                for (i, card) in entries.iter().enumerate() {
                    check_card(card, &format!("{path}.cards[{i}]"), out);
                }
            }
            None => out.push(SchemaViolation::new(format!("{path}.cards"), "must be an array")),
        }
    }
}

fn check_card(card: &Value, path: &str, out: &mut Vec<SchemaViolation>) {
    let Some(obj) = card.as_object() else {
        out.push(SchemaViolation::new(path, "must be an object"));
        return;
    };

    require_string(obj, "name", path, out);
    optional_string(obj, "uniqueId", path, out);
    optional_string(obj, "number", path, out);
    optional_string(obj, "note", path, out);
    optional_string(obj, "insertOdds", path, out);
    optional_integer(obj, "numberedTo", path, out);
    optional_string_array(obj, "attributes", path, out);

    check_parallel_list(obj.get("parallels"), &format!("{path}.parallels"), out);
    check_variation_list(obj.get("variations"), &format!("{path}.variations"), out);
}

fn check_variation_list(list: Option<&Value>, path: &str, out: &mut Vec<SchemaViolation>) {
    let Some(list) = list else { return };
    let Some(entries) = list.as_array() else {
        out.push(SchemaViolation::new(path, "must be an array"));
        return;
    };
    for (i, variation) in entries.iter().enumerate() {
        let vpath = format!("{path}[{i}]");
        let Some(obj) = variation.as_object() else {
            out.push(SchemaViolation::new(vpath, "must be an object"));
            continue;
        };
        require_string(obj, "variation", &vpath, out);
        optional_string(obj, "note", &vpath, out);
        optional_string(obj, "insertOdds", &vpath, out);
        optional_integer(obj, "numberedTo", &vpath, out);
        optional_string_array(obj, "attributes", &vpath, out);
        check_parallel_list(obj.get("parallels"), &format!("{vpath}.parallels"), out);
        // Lineage is two levels deep at most: a variation never holds
        // further variations.
        if obj.contains_key("variations") {
            out.push(SchemaViolation::new(
                vpath,
                "variations cannot be nested inside a variation",
            ));
        }
    }
}

fn check_parallel_list(list: Option<&Value>, path: &str, out: &mut Vec<SchemaViolation>) {
    let Some(list) = list else { return };
    let Some(entries) = list.as_array() else {
        out.push(SchemaViolation::new(path, "must be an array"));
        return;
    };
    for (i, parallel) in entries.iter().enumerate() {
        let ppath = format!("{path}[{i}]");
        let Some(obj) = parallel.as_object() else {
            out.push(SchemaViolation::new(ppath, "must be an object"));
            continue;
        };
        require_string(obj, "name", &ppath, out);
        optional_string(obj, "insertOdds", &ppath, out);
        optional_integer(obj, "numberedTo", &ppath, out);
        optional_string_array(obj, "notes", &ppath, out);
    }
}

// ── Field-kind helpers ──────────────────────────────────────────────────────

fn require_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    path: &str,
    out: &mut Vec<SchemaViolation>,
) {
    match obj.get(key) {
        Some(Value::String(_)) => {}
        Some(_) => out.push(SchemaViolation::new(
            format!("{path}.{key}"),
            "must be a string",
        )),
        None => out.push(SchemaViolation::new(
            path,
            format!("missing required '{key}'"),
        )),
    }
}

fn optional_string(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    path: &str,
    out: &mut Vec<SchemaViolation>,
) {
    if let Some(v) = obj.get(key) {
        if !v.is_string() {
            out.push(SchemaViolation::new(
                format!("{path}.{key}"),
                "must be a string",
            ));
        }
    }
}

fn optional_integer(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    path: &str,
    out: &mut Vec<SchemaViolation>,
) {
    if let Some(v) = obj.get(key) {
        if !v.is_u64() {
            out.push(SchemaViolation::new(
                format!("{path}.{key}"),
                "must be a non-negative integer",
            ));
        }
    }
}

fn optional_string_array(
    obj: &serde_json::Map<String, Value>,
    key: &str,
    path: &str,
    out: &mut Vec<SchemaViolation>,
) {
    if let Some(v) = obj.get(key) {
        match v.as_array() {
            Some(entries) => {
                for (i, entry) in entries.iter().enumerate() {
                    if !entry.is_string() {
                        out.push(SchemaViolation::new(
                            format!("{path}.{key}[{i}]"),
                            "must be a string",
                        ));
                    }
                }
            }
            None => out.push(SchemaViolation::new(
                format!("{path}.{key}"),
                "must be an array of strings",
            )),
        }
    }
}
