//! HTML utility functions.
//!
//! Provides the HTML text helpers used by templates and tooling:
//! - `unescape()` - decode common named and numeric entities
//! - `strip_tags()` - drop tag markup, keep text
//! - `reading_time()` - "N min read" estimate for rendered post bodies

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Reading speed used by [`reading_time`].
pub const WORDS_PER_MINUTE: usize = 200;

/// Matches any tag (`<p>`, `</p>`, `<img src="..."/>`, comments).
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());

// =============================================================================
// Entities
// =============================================================================

/// Unescape HTML entities back to characters.
///
/// Handles common named entities and numeric character references.
pub fn unescape(s: &str) -> Cow<'_, str> {
    if !s.contains('&') {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '&' {
            result.push(c);
            continue;
        }

        let mut entity = String::new();
        let mut terminated = false;
        for c in chars.by_ref() {
            if c == ';' {
                terminated = true;
                break;
            }
            entity.push(c);
            if entity.len() > 10 {
                break;
            }
        }

        if !terminated {
            result.push('&');
            result.push_str(&entity);
            continue;
        }

        match entity.as_str() {
            "lt" => result.push('<'),
            "gt" => result.push('>'),
            "amp" => result.push('&'),
            "quot" => result.push('"'),
            "apos" => result.push('\''),
            "nbsp" => result.push('\u{00A0}'),
            s if s.starts_with('#') => {
                let code = if s.starts_with("#x") || s.starts_with("#X") {
                    u32::from_str_radix(&s[2..], 16).ok()
                } else {
                    s[1..].parse().ok()
                };
                match code.and_then(char::from_u32) {
                    Some(c) => result.push(c),
                    None => {
                        result.push('&');
                        result.push_str(&entity);
                        result.push(';');
                    }
                }
            }
            _ => {
                result.push('&');
                result.push_str(&entity);
                result.push(';');
            }
        }
    }

    Cow::Owned(result)
}

// =============================================================================
// Text Extraction
// =============================================================================

/// Remove every tag, keeping the text between them verbatim.
///
/// No whitespace is inserted where a tag was removed, so `a<br>b` becomes `ab`.
pub fn strip_tags(html: &str) -> Cow<'_, str> {
    TAG_RE.replace_all(html, "")
}

/// Approximate word count of rendered markup: whitespace-separated runs of
/// text after tags are stripped and entities decoded.
///
/// `&nbsp;` decodes to a Unicode space, so `a&nbsp;b` is two words.
pub fn word_count(html: &str) -> usize {
    unescape(&strip_tags(html)).split_whitespace().count()
}

/// Estimated minutes to read `html`: `round(words / 200 + 1)`.
///
/// Never returns less than 1.
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn reading_minutes(html: &str) -> usize {
    let words = word_count(html) as f64;
    (words / WORDS_PER_MINUTE as f64 + 1.0).round() as usize
}

/// Human-readable reading time for a rendered post body.
///
/// # Example
/// ```ignore
/// assert_eq!(reading_time(""), "1 min read");
/// assert_eq!(reading_time(&format!("<p>{}</p>", "word ".repeat(400))), "3 min read");
/// ```
pub fn reading_time(html: &str) -> String {
    format!("{} min read", reading_minutes(html))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_time_empty() {
        assert_eq!(reading_time(""), "1 min read");
        assert_eq!(reading_time("<p></p>"), "1 min read");
    }

    #[test]
    fn test_reading_time_400_words() {
        let html = format!("<p>{}</p>", "word ".repeat(400));
        assert_eq!(word_count(&html), 400);
        assert_eq!(reading_time(&html), "3 min read");
    }

    #[test]
    fn test_reading_time_rounds_half_up() {
        // 100 / 200 + 1 = 1.5
        assert_eq!(reading_minutes(&"w ".repeat(100)), 2);
        // 99 / 200 + 1 = 1.495
        assert_eq!(reading_minutes(&"w ".repeat(99)), 1);
    }

    #[test]
    fn test_word_count_ignores_markup() {
        let html = r#"<h1 class="title">Hello   world</h1>
            <p>Some <em>emphasised</em> text.</p><img src="a.png" alt="ignored words">"#;
        assert_eq!(word_count(html), 5);
    }

    #[test]
    fn test_strip_tags_joins_adjacent_text() {
        assert_eq!(strip_tags("a<br>b"), "ab");
        assert_eq!(strip_tags("<!-- note --><p>x</p>"), "x");
    }

    #[test]
    fn test_word_count_decodes_entities() {
        assert_eq!(word_count("<p>a&nbsp;b</p>"), 2);
        assert_eq!(word_count("<p>fish &amp; chips</p>"), 3);
        assert_eq!(word_count("&#32;&#32;"), 0);
    }

    #[test]
    fn test_unescape() {
        assert_eq!(unescape("plain"), "plain");
        assert_eq!(unescape("a &amp; b"), "a & b");
        assert_eq!(unescape("&lt;tag&gt;"), "<tag>");
        assert_eq!(unescape("&#65;&#x42;"), "AB");
        assert_eq!(unescape("&unknown;"), "&unknown;");
        assert_eq!(unescape("fish & chips"), "fish & chips");
    }
}
