//! Link-list parsing for the navigation widgets.
//!
//! The `links` attribute is a JSON array of `{ "name": .., "href": .. }`
//! objects. Entries are taken as they come: order and duplicates are kept,
//! and a missing field simply renders as an empty string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::error::ConfigurationError;

/// A navigable destination rendered as an anchor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Link {
    pub name: String,
    pub href: String,
}

impl Link {
    pub fn new(name: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            href: href.into(),
        }
    }

    fn from_entry(entry: &Value) -> Self {
        Self {
            name: field_text(entry, "name"),
            href: field_text(entry, "href"),
        }
    }
}

/// How strictly an empty link list is treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkPolicy {
    /// Anything that parses goes through; an empty list renders nothing.
    Lenient,
    /// An absent, empty or falsy list is a configuration error.
    Strict,
}

/// Parse the `links` attribute into an ordered list of links.
///
/// Invalid JSON is an error under both policies.
pub fn parse_links(source: &str, policy: LinkPolicy) -> Result<Vec<Link>, ConfigurationError> {
    if source.trim().is_empty() {
        return match policy {
            LinkPolicy::Lenient => Ok(Vec::new()),
            LinkPolicy::Strict => Err(ConfigurationError::MissingLinks),
        };
    }

    let value: Value = serde_json::from_str(source)?;

    if policy == LinkPolicy::Strict && is_falsy(&value) {
        return Err(ConfigurationError::MissingLinks);
    }

    match value {
        Value::Array(entries) if entries.is_empty() && policy == LinkPolicy::Strict => {
            Err(ConfigurationError::MissingLinks)
        }
        Value::Array(entries) => Ok(entries.iter().map(Link::from_entry).collect()),
        other => Err(ConfigurationError::NotAList {
            found: kind_of(&other),
        }),
    }
}

fn field_text(entry: &Value, key: &str) -> String {
    match entry.get(key) {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_LINKS: &str = r#"[{"name":"A","href":"/a"},{"name":"B","href":"/b"}]"#;

    #[test]
    fn keeps_input_order() {
        let links = parse_links(TWO_LINKS, LinkPolicy::Strict).unwrap();
        assert_eq!(links, vec![Link::new("A", "/a"), Link::new("B", "/b")]);
    }

    #[test]
    fn duplicates_are_kept() {
        let src = r#"[{"name":"Home","href":"/"},{"name":"Home","href":"/"}]"#;
        let links = parse_links(src, LinkPolicy::Lenient).unwrap();
        assert_eq!(links.len(), 2);
        assert_eq!(links[0], links[1]);
    }

    #[test]
    fn missing_fields_fall_back_to_empty_strings() {
        let src = r#"[{"name":"Docs"},{"href":"/x"},{},"stray",{"name":null,"href":7}]"#;
        let links = parse_links(src, LinkPolicy::Lenient).unwrap();
        assert_eq!(
            links,
            vec![
                Link::new("Docs", ""),
                Link::new("", "/x"),
                Link::default(),
                Link::default(),
                Link::new("", "7"),
            ]
        );
    }

    #[test]
    fn empty_list_depends_on_policy() {
        assert_eq!(parse_links("[]", LinkPolicy::Lenient), Ok(Vec::new()));
        assert_eq!(
            parse_links("[]", LinkPolicy::Strict),
            Err(ConfigurationError::MissingLinks)
        );
    }

    #[test]
    fn absent_source_depends_on_policy() {
        assert_eq!(parse_links("", LinkPolicy::Lenient), Ok(Vec::new()));
        assert_eq!(parse_links("  ", LinkPolicy::Lenient), Ok(Vec::new()));
        assert_eq!(
            parse_links("", LinkPolicy::Strict),
            Err(ConfigurationError::MissingLinks)
        );
    }

    #[test]
    fn falsy_values_are_missing_under_strict() {
        for src in ["null", "false", "0", "\"\""] {
            assert_eq!(
                parse_links(src, LinkPolicy::Strict),
                Err(ConfigurationError::MissingLinks),
                "{src}"
            );
        }
    }

    #[test]
    fn null_is_not_a_list_under_lenient() {
        assert_eq!(
            parse_links("null", LinkPolicy::Lenient),
            Err(ConfigurationError::NotAList { found: "null" })
        );
    }

    #[test]
    fn malformed_json_is_never_swallowed() {
        for policy in [LinkPolicy::Lenient, LinkPolicy::Strict] {
            let err = parse_links("{not json", policy).unwrap_err();
            assert!(matches!(err, ConfigurationError::Malformed { .. }), "{err}");
        }
    }

    #[test]
    fn non_array_values_are_rejected() {
        assert_eq!(
            parse_links(r#"{"name":"A","href":"/a"}"#, LinkPolicy::Lenient),
            Err(ConfigurationError::NotAList { found: "an object" })
        );
        assert_eq!(
            parse_links("42", LinkPolicy::Strict),
            Err(ConfigurationError::NotAList { found: "a number" })
        );
    }
}
