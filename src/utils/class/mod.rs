//! Utility-class merging for templates.
//!
//! [`cn`] flattens conditional class values and then resolves conflicting
//! utility classes so that the last one wins:
//!
//! ```ignore
//! assert_eq!(cn!("a", false, "b"), "a b");
//! assert_eq!(cn!("p-2", compact.then_some("p-1"), "p-4"), "p-4");
//! assert_eq!(cn!("px-2 py-1", "p-3"), "p-3");
//! ```
//!
//! | Module       | Purpose                                       |
//! |--------------|-----------------------------------------------|
//! | `value`      | `ClassValue` inputs and falsy filtering       |
//! | `parse`      | modifiers / important / postfix parsing       |
//! | `validators` | value kinds accepted by prefixed utilities    |
//! | `groups`     | default class-group and conflict tables       |
//! | `map`        | `ClassMap` lookup compiled from the tables    |
//! | `merge`      | conflict resolution                           |

mod groups;
mod map;
mod merge;
mod parse;
mod validators;
mod value;

pub use groups::{CLASS_GROUPS, CONFLICTS, ClassGroup, POSTFIX_CONFLICTS, Pattern};
pub use map::{ClassMap, DEFAULT_CLASS_MAP};
pub use parse::{ParsedClass, parse_class_name};
pub use validators::Value;
pub use value::{ClassValue, clsx};

/// Merge a whitespace-separated class list with the default ruleset.
pub fn merge_classes(classes: &str) -> String {
    merge::merge_class_list(&DEFAULT_CLASS_MAP, classes)
}

/// Merge a whitespace-separated class list with a custom ruleset.
pub fn merge_classes_with(map: &ClassMap, classes: &str) -> String {
    merge::merge_class_list(map, classes)
}

/// Combine class values, dropping falsy ones, then resolve conflicts.
pub fn cn<I>(inputs: I) -> String
where
    I: IntoIterator,
    I::Item: Into<ClassValue>,
{
    merge_classes(&clsx(inputs))
}

/// Variadic form of [`cn`] accepting mixed value types.
///
/// ```ignore
/// let active = true;
/// let class = cn!("btn", active.then_some("btn-active"), [("ring", active)]);
/// ```
#[macro_export]
macro_rules! cn {
    () => { ::std::string::String::new() };
    ($($value:expr),+ $(,)?) => {{
        $crate::utils::class::cn([$($crate::utils::class::ClassValue::from($value)),+])
    }};
}
