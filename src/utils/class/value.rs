//! Conditional class values.
//!
//! `ClassValue` models everything a template may hand to [`cn`](super::cn):
//! plain strings, booleans from conditional expressions, missing
//! values, `(class, enabled)` toggles and nested lists. Flattening drops all
//! falsy entries and joins the rest with single spaces.

use std::borrow::Cow;

/// One input to the class merger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassValue {
    /// Zero or more whitespace-separated class names.
    Str(Cow<'static, str>),
    /// Booleans never contribute a class.
    Bool(bool),
    /// Absent value.
    None,
    /// Class names enabled by a condition.
    Toggle(Vec<(Cow<'static, str>, bool)>),
    /// Nested values, flattened in order.
    List(Vec<ClassValue>),
}

impl ClassValue {
    /// Append the truthy class names of this value to `out`.
    pub fn flatten_into(&self, out: &mut String) {
        match self {
            Self::Str(s) => push_class(out, s),
            Self::Bool(_) | Self::None => {}
            Self::Toggle(entries) => {
                for (name, enabled) in entries {
                    if *enabled {
                        push_class(out, name);
                    }
                }
            }
            Self::List(items) => {
                for item in items {
                    item.flatten_into(out);
                }
            }
        }
    }

}

#[inline]
fn push_class(out: &mut String, s: &str) {
    let s = s.trim();
    if s.is_empty() {
        return;
    }
    if !out.is_empty() {
        out.push(' ');
    }
    out.push_str(s);
}

/// Join class values into one space-separated string, skipping falsy ones.
pub fn clsx<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    let mut out = String::new();
    for input in inputs {
        input.into().flatten_into(&mut out);
    }
    out
}

impl From<&'static str> for ClassValue {
    fn from(s: &'static str) -> Self {
        Self::Str(Cow::Borrowed(s))
    }
}

impl From<String> for ClassValue {
    fn from(s: String) -> Self {
        Self::Str(Cow::Owned(s))
    }
}

impl From<Cow<'static, str>> for ClassValue {
    fn from(s: Cow<'static, str>) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for ClassValue {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl<T: Into<ClassValue>> From<Option<T>> for ClassValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::None, Into::into)
    }
}

impl<T: Into<ClassValue>> From<Vec<T>> for ClassValue {
    fn from(values: Vec<T>) -> Self {
        Self::List(values.into_iter().map(Into::into).collect())
    }
}

impl From<(&'static str, bool)> for ClassValue {
    fn from((name, enabled): (&'static str, bool)) -> Self {
        Self::Toggle(vec![(Cow::Borrowed(name), enabled)])
    }
}

impl<const N: usize> From<[(&'static str, bool); N]> for ClassValue {
    fn from(entries: [(&'static str, bool); N]) -> Self {
        Self::Toggle(
            entries
                .into_iter()
                .map(|(name, enabled)| (Cow::Borrowed(name), enabled))
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clsx_skips_falsy() {
        let out = clsx([
            ClassValue::from("a"),
            ClassValue::from(false),
            ClassValue::from(""),
            ClassValue::from(None::<&'static str>),
            ClassValue::from("b"),
        ]);
        assert_eq!(out, "a b");
    }

    #[test]
    fn test_clsx_toggles_and_nesting() {
        let active = true;
        let out = clsx([
            ClassValue::from("link"),
            ClassValue::from([("active", active), ("disabled", false)]),
            ClassValue::from(vec![
                ClassValue::from("x"),
                ClassValue::from(vec!["y", "z"]),
            ]),
        ]);
        assert_eq!(out, "link active x y z");
    }

    #[test]
    fn test_clsx_trims_strings() {
        assert_eq!(clsx(["  a b ", "c"]), "a b c");
    }
}
