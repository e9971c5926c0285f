// Copyright 2025 the Dashwire Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Formatted parameter values.

/// A formatted value produced for one parameter-mapping entry.
///
/// Formatting itself happens outside this crate (the formatter bridge owns
/// how a raw cell value becomes a display string); this is the shape the
/// engine carries around. A multi-valued parameter serializes as repeated
/// query keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParamValue {
    /// A single value.
    Single(String),
    /// Multiple values for one parameter.
    Many(Vec<String>),
}

impl ParamValue {
    /// A single value.
    pub fn single(value: impl Into<String>) -> Self {
        Self::Single(value.into())
    }

    /// A multi-value.
    pub fn many<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Many(values.into_iter().map(Into::into).collect())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_match_variants() {
        assert_eq!(ParamValue::single("a"), ParamValue::Single("a".into()));
        assert_eq!(
            ParamValue::many(["a", "b"]),
            ParamValue::Many(vec!["a".into(), "b".into()])
        );
        assert_eq!(ParamValue::from("x".to_owned()), ParamValue::single("x"));
    }
}
