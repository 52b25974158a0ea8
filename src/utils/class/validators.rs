//! Value validators for prefixed utility classes.
//!
//! A prefix such as `text` is shared by several class groups (`text-lg` is a
//! font size, `text-center` an alignment, `text-red-500` a color). Each group
//! lists the value kinds it accepts; the first group whose validator accepts
//! the value wins.

use regex::Regex;
use std::sync::LazyLock;

/// Kind of value a prefixed utility accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    /// Anything (colors, font families, cursors).
    Any,
    /// `1`, `2.5`
    Number,
    /// `1`, `10`
    Integer,
    /// Numbers, fractions, `px`, `full`, `screen`.
    Length,
    /// `xs`, `sm`, `md`, `lg`, `xl`, `2xl`, ...
    Tshirt,
    /// One of a fixed set of words.
    Keyword(&'static [&'static str]),
    /// Any `[...]` value.
    Arbitrary,
    /// `[12px]`, `[calc(100%-1rem)]`, `[length:var(--x)]`
    ArbitraryLength,
    /// `[700]`, `[number:var(--x)]`
    ArbitraryNumber,
    /// `[url(...)]`, `[linear-gradient(...)]`, `[image:var(--x)]`
    ArbitraryImage,
}

static FRACTION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+/\d+$").unwrap());

static TSHIRT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+(\.\d+)?)?(xs|sm|md|lg|xl)$").unwrap());

static ARBITRARY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\[(?:([a-z-]+):)?(.+)\]$").unwrap());

static LENGTH_UNIT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\d+(%|px|r?em|[sdl]?v([hwib]|min|max)|pt|pc|in|cm|mm|cap|ch|ex|r?lh|cq(w|h|i|b|min|max))|\b(calc|min|max|clamp)\(.+\)|^0$",
    )
    .unwrap()
});

static IMAGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(url|image|image-set|cross-fade|element|(repeating-)?(linear|radial|conic)-gradient)\(.+\)$",
    )
    .unwrap()
});

const LENGTH_WORDS: &[&str] = &["px", "full", "screen"];

impl Value {
    /// Whether `value` (the part after the prefix) is accepted.
    pub fn accepts(self, value: &str) -> bool {
        match self {
            Self::Any => !value.is_empty(),
            Self::Number => is_number(value),
            Self::Integer => is_integer(value),
            Self::Length => {
                is_number(value) || LENGTH_WORDS.contains(&value) || FRACTION_RE.is_match(value)
            }
            Self::Tshirt => TSHIRT_RE.is_match(value),
            Self::Keyword(words) => words.contains(&value),
            Self::Arbitrary => ARBITRARY_RE.is_match(value),
            Self::ArbitraryLength => {
                arbitrary(value, &["length", "size", "percentage"], |v| {
                    LENGTH_UNIT_RE.is_match(v)
                })
            }
            Self::ArbitraryNumber => arbitrary(value, &["number"], is_number),
            Self::ArbitraryImage => arbitrary(value, &["image", "url"], |v| IMAGE_RE.is_match(v)),
        }
    }
}

/// Any validator in `values` accepts `value`.
pub fn accepts_any(values: &[Value], value: &str) -> bool {
    values.iter().any(|v| v.accepts(value))
}

/// Match an arbitrary value, either by its explicit label (`[length:...]`)
/// or by testing the unlabelled content.
fn arbitrary(value: &str, labels: &[&str], test: impl Fn(&str) -> bool) -> bool {
    let Some(caps) = ARBITRARY_RE.captures(value) else {
        return false;
    };
    match caps.get(1) {
        Some(label) => labels.contains(&label.as_str()),
        None => caps.get(2).is_some_and(|content| test(content.as_str())),
    }
}

#[inline]
fn is_number(value: &str) -> bool {
    !value.is_empty() && value.parse::<f64>().is_ok_and(f64::is_finite)
}

#[inline]
fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.parse::<i64>().is_ok()
}
