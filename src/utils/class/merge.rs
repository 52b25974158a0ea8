//! Conflict resolution over a flat class list.

use super::map::ClassMap;
use super::parse::{parse_class_name, sort_modifiers};
use rustc_hash::FxHashSet;

const IMPORTANT_KEY: &str = "!";

/// Merge a whitespace-separated class list, later classes winning.
///
/// Walks the list from the end. Each class claims a key made of its sorted
/// variant modifiers, important marker and group; a class whose key is
/// already claimed is dropped. Classes outside the ruleset are always kept.
pub fn merge_class_list(map: &ClassMap, classes: &str) -> String {
    let names: Vec<&str> = classes.split_whitespace().collect();
    let mut claimed: FxHashSet<String> = FxHashSet::default();
    let mut kept: Vec<&str> = Vec::with_capacity(names.len());

    for &original in names.iter().rev() {
        let parsed = parse_class_name(original);

        let mut has_postfix = parsed.postfix.is_some();
        let group = match map.group_of(parsed.base_without_postfix()) {
            Some(group) => group,
            None if has_postfix => match map.group_of(parsed.base) {
                Some(group) => {
                    has_postfix = false;
                    group
                }
                None => {
                    kept.push(original);
                    continue;
                }
            },
            None => {
                kept.push(original);
                continue;
            }
        };

        let mut modifier_key = sort_modifiers(&parsed.modifiers).join(":");
        if parsed.important {
            modifier_key.push_str(IMPORTANT_KEY);
        }

        let key = class_key(&modifier_key, &group);
        if claimed.contains(&key) {
            continue;
        }
        claimed.insert(key);
        for conflict in map.conflicts_of(&group, has_postfix) {
            claimed.insert(class_key(&modifier_key, conflict));
        }
        kept.push(original);
    }

    kept.reverse();
    kept.join(" ")
}

#[inline]
fn class_key(modifier_key: &str, group: &str) -> String {
    format!("{modifier_key}|{group}")
}
