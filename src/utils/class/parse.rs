//! Utility class name parsing.
//!
//! A class like `md:hover:!bg-red-500/50` is split into:
//!
//! | Part              | Value          |
//! |-------------------|----------------|
//! | modifiers         | `md`, `hover`  |
//! | important         | `true`         |
//! | base              | `bg-red-500/50`|
//! | postfix position  | before `/50`   |
//!
//! Separators inside `[...]` or `(...)` are ignored, so arbitrary values and
//! arbitrary variants such as `[&>*]:p-2` parse correctly.

const IMPORTANT: char = '!';
const MODIFIER_SEPARATOR: char = ':';
const POSTFIX_SEPARATOR: char = '/';

/// A class name split into its variant modifiers and base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClass<'a> {
    pub modifiers: Vec<&'a str>,
    pub important: bool,
    /// Utility without modifiers or important marker.
    pub base: &'a str,
    /// Byte offset in `base` of the last top-level `/`, if any.
    pub postfix: Option<usize>,
}

impl<'a> ParsedClass<'a> {
    /// `base` without its postfix modifier (`bg-red-500/50` -> `bg-red-500`).
    pub fn base_without_postfix(&self) -> &'a str {
        match self.postfix {
            Some(pos) => &self.base[..pos],
            None => self.base,
        }
    }
}

/// Split a class name into modifiers, important marker and base utility.
pub fn parse_class_name(class: &str) -> ParsedClass<'_> {
    let mut modifiers = Vec::new();
    let mut bracket_depth = 0usize;
    let mut paren_depth = 0usize;
    let mut modifier_start = 0usize;
    let mut postfix = None;

    for (i, c) in class.char_indices() {
        if bracket_depth == 0 && paren_depth == 0 {
            if c == MODIFIER_SEPARATOR {
                modifiers.push(&class[modifier_start..i]);
                modifier_start = i + c.len_utf8();
                continue;
            }
            if c == POSTFIX_SEPARATOR {
                postfix = Some(i);
                continue;
            }
        }
        match c {
            '[' => bracket_depth += 1,
            ']' => bracket_depth = bracket_depth.saturating_sub(1),
            '(' => paren_depth += 1,
            ')' => paren_depth = paren_depth.saturating_sub(1),
            _ => {}
        }
    }

    let rest = &class[modifier_start..];
    // Postfix positions before the last modifier belong to a modifier.
    let mut postfix = postfix
        .filter(|&pos| pos > modifier_start)
        .map(|pos| pos - modifier_start);

    let (base, important) = if let Some(stripped) = rest.strip_prefix(IMPORTANT) {
        postfix = postfix.map(|pos| pos - IMPORTANT.len_utf8());
        (stripped, true)
    } else if let Some(stripped) = rest.strip_suffix(IMPORTANT) {
        (stripped, true)
    } else {
        (rest, false)
    };

    ParsedClass {
        modifiers,
        important,
        base,
        postfix: postfix.filter(|&pos| pos > 0 && pos < base.len()),
    }
}

/// Sort modifiers so that `hover:focus:` and `focus:hover:` compare equal.
///
/// Arbitrary variants (`[&>*]`) are order-sensitive: they stay in place and
/// only the runs of regular modifiers between them are sorted.
pub fn sort_modifiers<'a>(modifiers: &[&'a str]) -> Vec<&'a str> {
    if modifiers.len() <= 1 {
        return modifiers.to_vec();
    }

    let mut sorted = Vec::with_capacity(modifiers.len());
    let mut run: Vec<&'a str> = Vec::new();

    for &modifier in modifiers {
        if modifier.starts_with('[') {
            run.sort_unstable();
            sorted.append(&mut run);
            sorted.push(modifier);
        } else {
            run.push(modifier);
        }
    }

    run.sort_unstable();
    sorted.append(&mut run);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain() {
        let parsed = parse_class_name("p-4");
        assert!(parsed.modifiers.is_empty());
        assert!(!parsed.important);
        assert_eq!(parsed.base, "p-4");
        assert_eq!(parsed.postfix, None);
    }

    #[test]
    fn test_parse_modifiers_and_important() {
        let parsed = parse_class_name("md:hover:!bg-red-500");
        assert_eq!(parsed.modifiers, vec!["md", "hover"]);
        assert!(parsed.important);
        assert_eq!(parsed.base, "bg-red-500");

        let parsed = parse_class_name("hover:bg-red-500!");
        assert!(parsed.important);
        assert_eq!(parsed.base, "bg-red-500");
    }

    #[test]
    fn test_parse_postfix() {
        let parsed = parse_class_name("hover:bg-red-500/50");
        assert_eq!(parsed.base, "bg-red-500/50");
        assert_eq!(parsed.base_without_postfix(), "bg-red-500");

        let parsed = parse_class_name("!text-lg/7");
        assert_eq!(parsed.base_without_postfix(), "text-lg");
    }

    #[test]
    fn test_parse_ignores_separators_in_brackets() {
        let parsed = parse_class_name("[&>*]:bg-[url(/img/a:b.png)]");
        assert_eq!(parsed.modifiers, vec!["[&>*]"]);
        assert_eq!(parsed.base, "bg-[url(/img/a:b.png)]");
        assert_eq!(parsed.postfix, None);

        let parsed = parse_class_name("[mask-type:luminance]");
        assert!(parsed.modifiers.is_empty());
        assert_eq!(parsed.base, "[mask-type:luminance]");
    }

    #[test]
    fn test_sort_modifiers() {
        assert_eq!(sort_modifiers(&["hover", "focus"]), vec!["focus", "hover"]);
        assert_eq!(
            sort_modifiers(&["hover", "[&>*]", "md", "dark"]),
            vec!["hover", "[&>*]", "dark", "md"]
        );
    }
}
