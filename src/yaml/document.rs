//! Parsed YAML document model

use std::fmt;

/// A parsed YAML node
///
/// Mapping entries keep the order they have in the source text. Keys are
/// rendered to text since only their display matters here.
#[derive(Debug, Clone, PartialEq)]
pub enum Document {
    Null,
    Bool(bool),
    Integer(i128),
    Float(f64),
    String(String),
    Sequence(Vec<Document>),
    Mapping(Vec<(String, Document)>),
    Tagged { tag: String, value: Box<Document> },
}

impl Document {
    /// An empty mapping
    pub fn empty_mapping() -> Self {
        Document::Mapping(Vec::new())
    }

    /// YAML-native type name of this node
    pub fn type_name(&self) -> &'static str {
        match self {
            Document::Null => "null",
            Document::Bool(_) => "boolean",
            Document::Integer(_) => "integer",
            Document::Float(_) => "float",
            Document::String(_) => "string",
            Document::Sequence(_) => "sequence",
            Document::Mapping(_) => "mapping",
            Document::Tagged { .. } => "tagged",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Document::Null)
    }

    /// Keys in source order, if this is a mapping
    pub fn mapping_keys(&self) -> Option<Vec<&str>> {
        match self {
            Document::Mapping(entries) => Some(entries.iter().map(|(k, _)| k.as_str()).collect()),
            _ => None,
        }
    }

    fn fmt_nested(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::String(s) => write!(f, "{:?}", s),
            other => write!(f, "{}", other),
        }
    }
}

/// Compact single-line rendering; nested strings are quoted
impl fmt::Display for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Document::Null => write!(f, "null"),
            Document::Bool(b) => write!(f, "{}", b),
            Document::Integer(i) => write!(f, "{}", i),
            Document::Float(x) => write!(f, "{:?}", x),
            Document::String(s) => write!(f, "{}", s),
            Document::Sequence(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    item.fmt_nested(f)?;
                }
                write!(f, "]")
            }
            Document::Mapping(entries) => {
                write!(f, "{{")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}: ", key)?;
                    value.fmt_nested(f)?;
                }
                write!(f, "}}")
            }
            Document::Tagged { tag, value } => {
                write!(f, "{} ", tag)?;
                value.fmt_nested(f)
            }
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Value> for Document {
    fn from(value: serde_yaml::Value) -> Self {
        use serde_yaml::Value;

        match value {
            Value::Null => Document::Null,
            Value::Bool(b) => Document::Bool(b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Document::Integer(i128::from(i))
                } else if let Some(u) = n.as_u64() {
                    Document::Integer(i128::from(u))
                } else {
                    Document::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => Document::String(s),
            Value::Sequence(items) => {
                Document::Sequence(items.into_iter().map(Document::from).collect())
            }
            Value::Mapping(map) => Document::Mapping(
                map.into_iter()
                    .map(|(k, v)| (Document::from(k).to_string(), Document::from(v)))
                    .collect(),
            ),
            Value::Tagged(tagged) => {
                let serde_yaml::value::TaggedValue { tag, value } = *tagged;
                Document::Tagged {
                    tag: tag.to_string(),
                    value: Box::new(Document::from(value)),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_names() {
        assert_eq!(Document::Null.type_name(), "null");
        assert_eq!(Document::Bool(true).type_name(), "boolean");
        assert_eq!(Document::Integer(3).type_name(), "integer");
        assert_eq!(Document::Float(1.5).type_name(), "float");
        assert_eq!(Document::String("x".into()).type_name(), "string");
        assert_eq!(Document::Sequence(vec![]).type_name(), "sequence");
        assert_eq!(Document::empty_mapping().type_name(), "mapping");
    }

    #[test]
    fn test_display_sequence() {
        let doc = Document::Sequence(vec![
            Document::String("alpha".into()),
            Document::Integer(2),
            Document::Float(1.0),
            Document::Null,
        ]);
        assert_eq!(doc.to_string(), r#"["alpha", 2, 1.0, null]"#);
    }

    #[test]
    fn test_display_mapping() {
        let doc = Document::Mapping(vec![
            ("role".into(), Document::String("researcher".into())),
            ("tools".into(), Document::Sequence(vec![Document::Bool(false)])),
        ]);
        assert_eq!(doc.to_string(), r#"{"role": "researcher", "tools": [false]}"#);
    }

    #[test]
    fn test_top_level_string_unquoted() {
        assert_eq!(Document::String("plain text".into()).to_string(), "plain text");
    }

    #[test]
    fn test_mapping_keys() {
        let doc = Document::Mapping(vec![
            ("a".into(), Document::Null),
            ("b".into(), Document::Null),
        ]);
        assert_eq!(doc.mapping_keys().unwrap(), vec!["a", "b"]);
        assert!(Document::Integer(1).mapping_keys().is_none());
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_serde_value() {
        let value: serde_yaml::Value =
            serde_yaml::from_str("name: x\ncount: 3\nratio: 0.5\nflags: [true]\n1: one\n").unwrap();
        let doc = Document::from(value);
        assert_eq!(doc.mapping_keys().unwrap(), vec!["name", "count", "ratio", "flags", "1"]);
        match doc {
            Document::Mapping(entries) => {
                assert_eq!(entries[1].1, Document::Integer(3));
                assert_eq!(entries[2].1, Document::Float(0.5));
                assert_eq!(entries[3].1.type_name(), "sequence");
            }
            other => panic!("expected mapping, got {:?}", other),
        }
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_from_tagged_value() {
        let value: serde_yaml::Value = serde_yaml::from_str("!custom 5").unwrap();
        let doc = Document::from(value);
        assert_eq!(doc.type_name(), "tagged");
        let rendered = doc.to_string();
        assert!(rendered.contains("custom"));
        assert!(rendered.ends_with(" 5"));
    }
}
