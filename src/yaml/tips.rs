//! Remediation tips for YAML parse errors
//!
//! Matching is by substring on the backend's error message, so it only
//! fires on wording we recognise. No match means no tip.

/// A hint printed under a parse error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tip {
    Encoding,
    Indentation,
    Reference,
}

impl Tip {
    pub fn message(&self) -> &'static str {
        match self {
            Tip::Encoding => "Check for special characters or encoding issues",
            Tip::Indentation => "Check indentation and structure",
            Tip::Reference => "Check for duplicate keys or reference errors",
        }
    }
}

/// Pick the tip for an error message; first match wins
pub fn tip_for(message: &str) -> Option<Tip> {
    if message.contains("found character") {
        Some(Tip::Encoding)
    } else if message.contains("mapping") {
        Some(Tip::Indentation)
    } else if message.contains("found undefined alias") {
        Some(Tip::Reference)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;

    #[test]
    fn test_tip_encoding() {
        assert_eq!(
            tip_for("found character that cannot start any token at line 1 column 1"),
            Some(Tip::Encoding)
        );
    }

    #[test]
    fn test_tip_indentation() {
        assert_eq!(
            tip_for("mapping values are not allowed in this context at line 2 column 6"),
            Some(Tip::Indentation)
        );
    }

    #[test]
    fn test_tip_reference() {
        assert_eq!(tip_for("found undefined alias 'base'"), Some(Tip::Reference));
    }

    #[test]
    fn test_tip_precedence() {
        // encoding wins over indentation when both substrings appear
        assert_eq!(
            tip_for("while scanning a mapping: found character '\\t'"),
            Some(Tip::Encoding)
        );
    }

    #[test]
    fn test_no_tip() {
        assert_eq!(tip_for("invalid type: string, expected u32"), None);
    }

    #[quickcheck]
    fn prop_tip_requires_known_wording(message: String) -> bool {
        let known = message.contains("found character")
            || message.contains("mapping")
            || message.contains("found undefined alias");
        tip_for(&message).is_some() == known
    }
}
