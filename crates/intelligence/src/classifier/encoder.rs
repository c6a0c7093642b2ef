//! Per-feature category encoding.

use serde::{Deserialize, Serialize};

/// Bijective mapping from observed category strings to small integer codes.
///
/// Codes follow ascending byte order of the observed values, so identical
/// training data always yields identical codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelEncoder {
    classes: Vec<String>,
}

impl LabelEncoder {
    /// Learn the encoding from observed values.
    pub fn fit<'a, I>(values: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut classes: Vec<String> = values.into_iter().map(str::to_string).collect();
        classes.sort_unstable();
        classes.dedup();
        Self { classes }
    }

    /// Code of a value, or `None` if it was never observed.
    pub fn encode(&self, value: &str) -> Option<usize> {
        self.classes
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }

    /// Value for a code.
    pub fn decode(&self, code: usize) -> Option<&str> {
        self.classes.get(code).map(String::as_str)
    }

    /// Observed values in code order.
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    pub fn len(&self) -> usize {
        self.classes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// True when the classes are strictly ascending (required for `encode`).
    pub(crate) fn is_sorted(&self) -> bool {
        self.classes.windows(2).all(|w| w[0] < w[1])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_follow_sorted_order() {
        let enc = LabelEncoder::fit(["Medium", "High", "Low", "High"]);
        assert_eq!(enc.classes(), &["High", "Low", "Medium"]);
        assert_eq!(enc.encode("High"), Some(0));
        assert_eq!(enc.encode("Low"), Some(1));
        assert_eq!(enc.encode("Medium"), Some(2));
    }

    #[test]
    fn test_unseen_value_has_no_code() {
        let enc = LabelEncoder::fit(["Easy", "Hard"]);
        assert_eq!(enc.encode("Medium"), None);
        assert_eq!(enc.encode("easy"), None);
    }

    #[test]
    fn test_decode_inverts_encode() {
        let enc = LabelEncoder::fit(["Startup", "Magang", "Freelance"]);
        for value in ["Startup", "Magang", "Freelance"] {
            let code = enc.encode(value).unwrap();
            assert_eq!(enc.decode(code), Some(value));
        }
        assert_eq!(enc.decode(3), None);
    }

    #[test]
    fn test_is_sorted_detects_tampering() {
        let enc: LabelEncoder =
            serde_json::from_str(r#"{"classes":["b","a"]}"#).unwrap();
        assert!(!enc.is_sorted());
        assert!(LabelEncoder::fit(["a", "b"]).is_sorted());
    }
}
