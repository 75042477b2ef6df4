//! Loose key/value launch arguments
//!
//! Accepts any mix of these notations:
//!
//! ```text
//! key1 value1 key2 value2
//! key1=value1 key2=value2
//! key1 value1 key2=value2 -flag key3=
//! ```
//!
//! A key without a value maps to the empty string. There is no quoting or
//! escaping.

use std::collections::HashMap;

/// Key/value pairs parsed from the launch arguments
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Properties {
    values: HashMap<String, String>,
}

impl Properties {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Parser state between two tokens
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseState {
    /// No key is waiting for a value
    Idle,
    /// A bare key was read and the next token may be its value
    AwaitingValue(String),
}

/// Feed one token to the parser
///
/// Returns the next state and the pairs emitted by this token, in order.
/// A pending key followed by a `-` token is flushed with an empty value
/// before the token itself is handled.
pub fn transition(state: ParseState, token: &str) -> (ParseState, Vec<(String, String)>) {
    match state {
        ParseState::AwaitingValue(key) if !token.starts_with('-') => {
            (ParseState::Idle, vec![(key, token.to_string())])
        }
        ParseState::AwaitingValue(key) => {
            let (next, mut emitted) = transition(ParseState::Idle, token);
            emitted.insert(0, (key, String::new()));
            (next, emitted)
        }
        ParseState::Idle => {
            if let Some((key, value)) = token.split_once('=') {
                (
                    ParseState::Idle,
                    vec![(key.to_string(), value.to_string())],
                )
            } else if token.starts_with('-') {
                (ParseState::Idle, vec![(token.to_string(), String::new())])
            } else {
                (ParseState::AwaitingValue(token.to_string()), Vec::new())
            }
        }
    }
}

/// Parse launch arguments into properties
///
/// Later occurrences of a key replace earlier ones.
pub fn parse_properties<I, S>(args: I) -> Properties
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut values = HashMap::new();
    let mut state = ParseState::Idle;

    for arg in args {
        let (next, emitted) = transition(state, arg.as_ref());
        values.extend(emitted);
        state = next;
    }

    if let ParseState::AwaitingValue(key) = state {
        values.insert(key, String::new());
    }

    Properties { values }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props(pairs: &[(&str, &str)]) -> Properties {
        pairs.iter().copied().collect()
    }

    fn pair(k: &str, v: &str) -> (String, String) {
        (k.to_string(), v.to_string())
    }

    #[test]
    fn test_empty() {
        let parsed = parse_properties(Vec::<String>::new());
        assert_eq!(parsed, Properties::default());
    }

    #[test]
    fn test_key_equals_value() {
        let parsed = parse_properties(["a=1", "b=2"]);
        assert_eq!(parsed, props(&[("a", "1"), ("b", "2")]));
    }

    #[test]
    fn test_alternating_key_value() {
        let parsed = parse_properties(["key1", "val1", "key2", "val2"]);
        assert_eq!(parsed, props(&[("key1", "val1"), ("key2", "val2")]));
    }

    #[test]
    fn test_mixed_notations() {
        let parsed = parse_properties(["key1", "prop1", "key2=prop2"]);
        assert_eq!(parsed, props(&[("key1", "prop1"), ("key2", "prop2")]));
    }

    #[test]
    fn test_trailing_flag_flushes_pending_key() {
        let parsed = parse_properties(["key1", "-x"]);
        assert_eq!(parsed, props(&[("key1", ""), ("-x", "")]));
    }

    #[test]
    fn test_flags_and_empty_values() {
        let parsed = parse_properties(["key2=", "-key3", "-key4=value4"]);
        assert_eq!(
            parsed,
            props(&[("key2", ""), ("-key3", ""), ("-key4", "value4")])
        );
    }

    #[test]
    fn test_trailing_bare_key() {
        let parsed = parse_properties(["a=1", "lonely"]);
        assert_eq!(parsed, props(&[("a", "1"), ("lonely", "")]));
    }

    #[test]
    fn test_split_at_first_equals() {
        let parsed = parse_properties(["url=http://h/?q=1"]);
        assert_eq!(parsed.get("url"), Some("http://h/?q=1"));
    }

    #[test]
    fn test_leading_equals_gives_empty_key() {
        assert_eq!(parse_properties(["="]), props(&[("", "")]));
        assert_eq!(parse_properties(["=v"]), props(&[("", "v")]));
    }

    #[test]
    fn test_pending_key_takes_token_with_equals() {
        let parsed = parse_properties(["key", "a=b"]);
        assert_eq!(parsed, props(&[("key", "a=b")]));
    }

    #[test]
    fn test_later_key_wins() {
        let parsed = parse_properties(["jdk=/a", "jdk", "/b"]);
        assert_eq!(parsed, props(&[("jdk", "/b")]));
    }

    #[test]
    fn test_transition_table() {
        use ParseState::*;

        let pending = || AwaitingValue("k".to_string());
        let cases: Vec<(ParseState, &str, ParseState, Vec<(String, String)>)> = vec![
            (Idle, "a=1", Idle, vec![pair("a", "1")]),
            (Idle, "-f", Idle, vec![pair("-f", "")]),
            (Idle, "k", pending(), vec![]),
            (pending(), "v", Idle, vec![pair("k", "v")]),
            (pending(), "-f", Idle, vec![pair("k", ""), pair("-f", "")]),
            (pending(), "-f=1", Idle, vec![pair("k", ""), pair("-f", "1")]),
        ];

        for (state, token, expected_state, expected_emitted) in cases {
            let (next, emitted) = transition(state.clone(), token);
            assert_eq!(next, expected_state, "state after {:?} + {:?}", state, token);
            assert_eq!(emitted, expected_emitted, "emitted by {:?} + {:?}", state, token);
        }
    }
}
