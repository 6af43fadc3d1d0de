//! Query-string construction for list endpoints.

use std::fmt::Write;

/// An ordered set of query parameters.
///
/// Parameters appear in the query string in the order they were pushed, so a
/// given set of filters always produces the same URL. Absent filters are
/// simply never pushed — an explicitly supplied value (including `0` or an
/// empty string) is always emitted.
#[derive(Debug, Default)]
pub(crate) struct QueryString {
    encoded: String,
}

impl QueryString {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append one parameter, percent-encoding the value.
    pub(crate) fn push(&mut self, key: &str, value: &str) {
        self.encoded
            .push(if self.encoded.is_empty() { '?' } else { '&' });
        self.encoded.push_str(key);
        self.encoded.push('=');
        self.encoded.push_str(&urlencoded(value));
    }

    /// Append one parameter if the value is present.
    pub(crate) fn push_opt(&mut self, key: &str, value: Option<impl ToString>) {
        if let Some(value) = value {
            self.push(key, &value.to_string());
        }
    }

    /// The assembled query string: empty when no parameters were pushed,
    /// otherwise `?a=1&b=2`.
    pub(crate) fn as_str(&self) -> &str {
        &self.encoded
    }
}

/// Percent-encode a query parameter value (spaces → %20, etc.).
///
/// Only encodes characters that must be encoded in a query parameter value.
fn urlencoded(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            'A'..='Z' | 'a'..='z' | '0'..='9' | '-' | '_' | '.' | '~' => out.push(ch),
            _ => {
                let mut buf = [0u8; 4];
                for byte in ch.encode_utf8(&mut buf).as_bytes() {
                    let _ = write!(out, "%{:02X}", byte);
                }
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_query_has_no_question_mark() {
        let query = QueryString::new();
        assert_eq!(query.as_str(), "");
    }

    #[test]
    fn single_parameter() {
        let mut query = QueryString::new();
        query.push("status", "completed");
        assert_eq!(query.as_str(), "?status=completed");
    }

    #[test]
    fn parameters_keep_push_order() {
        let mut query = QueryString::new();
        query.push("scenario_id", "5");
        query.push("status", "failed");
        assert_eq!(query.as_str(), "?scenario_id=5&status=failed");
    }

    #[test]
    fn absent_optional_parameter_is_skipped() {
        let mut query = QueryString::new();
        query.push_opt("scenario_id", None::<i64>);
        query.push_opt("status", Some("running"));
        assert_eq!(query.as_str(), "?status=running");
    }

    #[test]
    fn zero_valued_id_is_emitted() {
        let mut query = QueryString::new();
        query.push_opt("automation_id", Some(0i64));
        assert_eq!(query.as_str(), "?automation_id=0");
    }

    #[test]
    fn values_are_percent_encoded() {
        let mut query = QueryString::new();
        query.push("q", "two words & more");
        assert_eq!(query.as_str(), "?q=two%20words%20%26%20more");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let mut query = QueryString::new();
        query.push("q", "a-b_c.d~e");
        assert_eq!(query.as_str(), "?q=a-b_c.d~e");
    }
}
