//! Attribute inference from set label text.
//!
//! Attribute codes like `AU` and `RELIC` are inferred from the set's label
//! alone — a best-effort pattern match over free text, not a fact read from
//! any column. Naming conventions vary by checklist source, so the match
//! rules are data, not hard-coded string checks: callers can extend or
//! replace [`default_rules`] wholesale.

use junkwax_catalog::AttributeDefinition;

/// How a rule matches against a (lowercased) set label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LabelPattern {
    /// The label contains the needle anywhere.
    Contains(String),
    /// The label ends with the needle.
    EndsWith(String),
}

/// One inference rule: a label pattern and the attribute it implies.
///
/// The rule carries the code's descriptive note so that ingest can emit the
/// matching root dictionary entry alongside the card-level codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeRule {
    pub code: String,
    pub note: String,
    pub pattern: LabelPattern,
}

impl AttributeRule {
    pub fn contains(code: &str, note: &str, needle: &str) -> Self {
        AttributeRule {
            code: code.to_string(),
            note: note.to_string(),
            pattern: LabelPattern::Contains(needle.to_lowercase()),
        }
    }

    pub fn ends_with(code: &str, note: &str, needle: &str) -> Self {
        AttributeRule {
            code: code.to_string(),
            note: note.to_string(),
            pattern: LabelPattern::EndsWith(needle.to_lowercase()),
        }
    }

    /// Case-insensitive match against a set label.
    pub fn matches(&self, label: &str) -> bool {
        let lower = label.to_lowercase();
        match &self.pattern {
            LabelPattern::Contains(needle) => lower.contains(needle.as_str()),
            LabelPattern::EndsWith(needle) => lower.ends_with(needle.as_str()),
        }
    }
}

/// The stock rule set: autograph and relic detection.
pub fn default_rules() -> Vec<AttributeRule> {
    vec![
        AttributeRule::contains("AU", "Autograph", "autograph"),
        AttributeRule::ends_with("AU", "Autograph", "autos"),
        AttributeRule::contains("RELIC", "Relic", "relic"),
    ]
}

/// Attribute codes implied by a set label, in rule order, deduplicated.
pub fn infer_attributes(label: &str, rules: &[AttributeRule]) -> Vec<String> {
    let mut codes: Vec<String> = Vec::new();
    for rule in rules {
        if rule.matches(label) && !codes.contains(&rule.code) {
            codes.push(rule.code.clone());
        }
    }
    codes
}

/// Dictionary entries for a list of inferred codes, resolved through the
/// rule set that produced them.
pub fn definitions_for(codes: &[String], rules: &[AttributeRule]) -> Vec<AttributeDefinition> {
    codes
        .iter()
        .filter_map(|code| {
            rules.iter().find(|r| &r.code == code).map(|r| AttributeDefinition {
                attribute: r.code.clone(),
                note: r.note.clone(),
            })
        })
        .collect()
}
