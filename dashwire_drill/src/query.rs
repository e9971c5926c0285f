// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered query parameters and their serialization.
//!
//! ## Overview
//!
//! [`QueryParams`] is the slug→value map appended to drill-through URLs.
//! It preserves insertion order, and a colliding slug keeps its first
//! position while the last written value wins — mapping ids are expected
//! to produce unique slugs, so collisions are tolerated, not encouraged.
//!
//! Serialization follows conventional query-string encoding: RFC 3986
//! percent-encoding with unreserved bytes passed through, and multi-values
//! encoded as repeated keys.

use dashwire_click_behavior::ParamValue;
use hashbrown::HashMap;

/// An ordered slug→value map for a URL query string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
    index: HashMap<String, usize>,
}

impl QueryParams {
    /// An empty map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value for a slug. A slug already present keeps its
    /// position; its value is replaced.
    pub fn insert(&mut self, slug: impl Into<String>, value: ParamValue) {
        let slug = slug.into();
        match self.index.get(&slug) {
            Some(&at) => self.entries[at].1 = value,
            None => {
                self.index.insert(slug.clone(), self.entries.len());
                self.entries.push((slug, value));
            }
        }
    }

    /// The value for a slug, if present.
    pub fn get(&self, slug: &str) -> Option<&ParamValue> {
        self.index.get(slug).map(|&at| &self.entries[at].1)
    }

    /// Number of distinct slugs.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate slugs and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(slug, value)| (slug.as_str(), value))
    }

    /// Serialize to a query string, without the leading `?`.
    ///
    /// Multi-values become repeated keys: `k=a&k=b`. The empty map
    /// serializes to the empty string.
    pub fn to_query_string(&self) -> String {
        let mut out = String::new();
        for (slug, value) in self.iter() {
            match value {
                ParamValue::Single(value) => push_pair(&mut out, slug, value),
                ParamValue::Many(values) => {
                    for value in values {
                        push_pair(&mut out, slug, value);
                    }
                }
            }
        }
        out
    }
}

fn push_pair(out: &mut String, key: &str, value: &str) {
    if !out.is_empty() {
        out.push('&');
    }
    percent_encode(out, key);
    out.push('=');
    percent_encode(out, value);
}

/// Append `raw` percent-encoded. RFC 3986 unreserved bytes pass through;
/// everything else, including UTF-8 continuation bytes, is `%XX`-escaped.
fn percent_encode(out: &mut String, raw: &str) {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => {
                out.push('%');
                out.push(HEX[usize::from(byte >> 4)] as char);
                out.push(HEX[usize::from(byte & 0x0F)] as char);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_map_serializes_to_empty_string() {
        assert_eq!(QueryParams::new().to_query_string(), "");
        assert!(QueryParams::new().is_empty());
    }

    #[test]
    fn preserves_insertion_order() {
        let mut params = QueryParams::new();
        params.insert("b", ParamValue::single("2"));
        params.insert("a", ParamValue::single("1"));
        assert_eq!(params.to_query_string(), "b=2&a=1");
    }

    #[test]
    fn collision_keeps_position_and_takes_last_value() {
        let mut params = QueryParams::new();
        params.insert("a", ParamValue::single("1"));
        params.insert("b", ParamValue::single("2"));
        params.insert("a", ParamValue::single("3"));
        assert_eq!(params.len(), 2);
        assert_eq!(params.to_query_string(), "a=3&b=2");
    }

    #[test]
    fn multi_values_encode_as_repeated_keys() {
        let mut params = QueryParams::new();
        params.insert("state", ParamValue::many(["CA", "OR"]));
        params.insert("total", ParamValue::single("10"));
        assert_eq!(params.to_query_string(), "state=CA&state=OR&total=10");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        let mut params = QueryParams::new();
        params.insert("q", ParamValue::single("a b&c=d/e?f"));
        assert_eq!(params.to_query_string(), "q=a%20b%26c%3Dd%2Fe%3Ff");
    }

    #[test]
    fn unreserved_characters_pass_through() {
        let mut params = QueryParams::new();
        params.insert("k", ParamValue::single("Az09-_.~"));
        assert_eq!(params.to_query_string(), "k=Az09-_.~");
    }

    #[test]
    fn non_ascii_is_utf8_percent_encoded() {
        let mut params = QueryParams::new();
        params.insert("city", ParamValue::single("Zürich"));
        assert_eq!(params.to_query_string(), "city=Z%C3%BCrich");
    }

    #[test]
    fn keys_are_escaped_too() {
        let mut params = QueryParams::new();
        params.insert("a key", ParamValue::single("v"));
        assert_eq!(params.to_query_string(), "a%20key=v");
    }

    #[test]
    fn get_sees_the_latest_value() {
        let mut params = QueryParams::new();
        params.insert("a", ParamValue::single("1"));
        params.insert("a", ParamValue::single("2"));
        assert_eq!(params.get("a"), Some(&ParamValue::single("2")));
        assert_eq!(params.get("b"), None);
    }
}
