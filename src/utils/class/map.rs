//! Class name → class group lookup.

use super::groups::{CLASS_GROUPS, CONFLICTS, ClassGroup, POSTFIX_CONFLICTS, Pattern};
use super::validators::{Value, accepts_any};
use rustc_hash::FxHashMap;
use std::borrow::Cow;
use std::sync::LazyLock;

/// Prefix used for arbitrary-property groups (`[mask-type:luminance]`).
const ARBITRARY_PROPERTY: &str = "arbitrary..";

/// Lookup tables compiled from a ruleset.
///
/// Build a custom one with [`ClassMap::new`] to extend or replace the
/// default groups, then merge with
/// [`merge_classes_with`](super::merge_classes_with).
#[derive(Debug, Clone)]
pub struct ClassMap {
    exact: FxHashMap<&'static str, &'static str>,
    prefixed: FxHashMap<&'static str, Vec<(&'static [Value], &'static str)>>,
    conflicts: FxHashMap<&'static str, &'static [&'static str]>,
    postfix_conflicts: FxHashMap<&'static str, &'static [&'static str]>,
}

/// Map compiled from the built-in tables.
pub static DEFAULT_CLASS_MAP: LazyLock<ClassMap> =
    LazyLock::new(|| ClassMap::new(CLASS_GROUPS, CONFLICTS, POSTFIX_CONFLICTS));

impl ClassMap {
    pub fn new(
        groups: &[ClassGroup],
        conflicts: &[(&'static str, &'static [&'static str])],
        postfix_conflicts: &[(&'static str, &'static [&'static str])],
    ) -> Self {
        let mut exact = FxHashMap::default();
        let mut prefixed: FxHashMap<_, Vec<_>> = FxHashMap::default();

        for group in groups {
            for pattern in group.patterns {
                match *pattern {
                    Pattern::Exact(name) => {
                        // First group to claim a name keeps it.
                        exact.entry(name).or_insert(group.id);
                    }
                    Pattern::Prefix(prefix, values) => {
                        prefixed.entry(prefix).or_default().push((values, group.id));
                    }
                }
            }
        }

        Self {
            exact,
            prefixed,
            conflicts: conflicts.iter().copied().collect(),
            postfix_conflicts: postfix_conflicts.iter().copied().collect(),
        }
    }

    /// Find the group of a base class (no modifiers, no important marker).
    ///
    /// Returns `None` for classes outside the ruleset.
    pub fn group_of<'a>(&self, class: &'a str) -> Option<Cow<'a, str>> {
        if class.is_empty() {
            return None;
        }

        if let Some(property) = arbitrary_property(class) {
            return Some(Cow::Owned(format!("{ARBITRARY_PROPERTY}{property}")));
        }

        // Negative values share the group of their positive form.
        let class = match class.strip_prefix('-') {
            Some(rest) if !rest.is_empty() => rest,
            _ => class,
        };

        if let Some(&id) = self.exact.get(class) {
            return Some(Cow::Borrowed(id));
        }

        // Try the longest prefix first: `border-t-2` before `border-2`.
        let dashes: Vec<usize> = class.match_indices('-').map(|(i, _)| i).collect();
        for &pos in dashes.iter().rev() {
            let (prefix, value) = (&class[..pos], &class[pos + 1..]);
            let Some(candidates) = self.prefixed.get(prefix) else {
                continue;
            };
            if let Some(&(_, id)) = candidates
                .iter()
                .find(|(values, _)| accepts_any(values, value))
            {
                return Some(Cow::Borrowed(id));
            }
        }

        None
    }

    /// Groups overridden by a class of `group`, besides `group` itself.
    pub fn conflicts_of(&self, group: &str, has_postfix: bool) -> Vec<&'static str> {
        let mut out = self
            .conflicts
            .get(group)
            .copied()
            .unwrap_or_default()
            .to_vec();
        if has_postfix && let Some(extra) = self.postfix_conflicts.get(group) {
            out.extend_from_slice(extra);
        }
        out
    }
}

impl Default for ClassMap {
    fn default() -> Self {
        DEFAULT_CLASS_MAP.clone()
    }
}

/// Property name of an arbitrary property class like `[mask-type:luminance]`.
fn arbitrary_property(class: &str) -> Option<&str> {
    let inner = class.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    let valid = !property.is_empty()
        && !value.is_empty()
        && property
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
    valid.then_some(property)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(class: &str) -> Option<String> {
        DEFAULT_CLASS_MAP.group_of(class).map(Cow::into_owned)
    }

    #[test]
    fn test_exact_groups() {
        assert_eq!(group("block").as_deref(), Some("display"));
        assert_eq!(group("hidden").as_deref(), Some("display"));
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(group("rounded").as_deref(), Some("rounded"));
    }

    #[test]
    fn test_prefixed_groups() {
        assert_eq!(group("p-4").as_deref(), Some("p"));
        assert_eq!(group("px-2.5").as_deref(), Some("px"));
        assert_eq!(group("w-[calc(100%-2rem)]").as_deref(), Some("w"));
        assert_eq!(group("flex-1").as_deref(), Some("flex"));
        assert_eq!(group("max-w-screen-md").as_deref(), Some("max-w"));
        assert_eq!(group("bg-gradient-to-r").as_deref(), Some("bg-image"));
    }

    #[test]
    fn test_shared_prefix_resolution() {
        assert_eq!(group("text-lg").as_deref(), Some("font-size"));
        assert_eq!(group("text-[14px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-center").as_deref(), Some("text-alignment"));
        assert_eq!(group("text-red-500").as_deref(), Some("text-color"));
        assert_eq!(group("text-[#fff]").as_deref(), Some("text-color"));
        assert_eq!(group("font-bold").as_deref(), Some("font-weight"));
        assert_eq!(group("font-mono").as_deref(), Some("font-family"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(group("border-t-2").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-t-red-500").as_deref(), Some("border-color-t"));
        assert_eq!(group("bg-[url(/a.png)]").as_deref(), Some("bg-image"));
        assert_eq!(group("bg-[#B91C1C]").as_deref(), Some("bg-color"));
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(group("-mt-2").as_deref(), Some("mt"));
        assert_eq!(group("-inset-x-4").as_deref(), Some("inset-x"));
    }

    #[test]
    fn test_arbitrary_property() {
        assert_eq!(
            group("[mask-type:luminance]").as_deref(),
            Some("arbitrary..mask-type")
        );
        assert_eq!(group("[not-a-property]"), None);
    }

    #[test]
    fn test_unknown_classes() {
        assert_eq!(group("prose"), None);
        assert_eq!(group("my-component"), None);
        assert_eq!(group(""), None);
        assert_eq!(group("-"), None);
    }

    #[test]
    fn test_conflicts() {
        assert!(DEFAULT_CLASS_MAP.conflicts_of("p", false).contains(&"px"));
        assert!(DEFAULT_CLASS_MAP.conflicts_of("display", false).is_empty());
        assert!(DEFAULT_CLASS_MAP.conflicts_of("font-size", true).contains(&"leading"));
        assert!(!DEFAULT_CLASS_MAP.conflicts_of("font-size", false).contains(&"leading"));
    }
}
