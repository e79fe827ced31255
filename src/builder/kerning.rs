//! Expansion of two-level class kerning into a flat UFO pair table.

use std::collections::HashMap;

use crate::diagnostics::Diagnostics;
use crate::glyphs::KerningTable;
use crate::ufo::Ufo;

/// Prefix of a group used as the first (left) element of a kerning pair.
pub(crate) static KERN1_PREFIX: &str = "public.kern1.";
/// Prefix of a group used as the second (right) element of a kerning pair.
pub(crate) static KERN2_PREFIX: &str = "public.kern2.";

// the class prefixes Glyphs kerning data uses, kept for compatibility
static LEGACY_KERN1_PREFIX: &str = "@MMK_L_";
static LEGACY_KERN2_PREFIX: &str = "@MMK_R_";

/// Resolves one master's kerning table into the UFO's flat pair map.
///
/// Entries are processed in authoring order. Non-conflicting class rules are
/// kept as group-referenced pairs; a class rule that conflicts with a later,
/// more specific rule for one of its member pairs is decomposed into the
/// member pairs it still validly covers, and the conflicting member is
/// dropped in favor of the later rule.
pub(crate) fn load_kerning(ufo: &mut Ufo, kerning: &KerningTable, diagnostics: &mut Diagnostics) {
    // mixed class-glyph rules, in authoring order, for conflict resolution
    let mut class_glyph_pairs = Vec::new();

    for (left, pairs) in kerning {
        let left_class = normalize_group(left, true);
        let left = match &left_class {
            Some(class) => {
                if !ufo.groups.contains_key(class) {
                    diagnostics
                        .warn(format!("Non-existent glyph class {class} found in kerning rules."));
                    continue;
                }
                class.as_str()
            }
            None => left.as_str(),
        };
        for (right, value) in pairs {
            let right_class = normalize_group(right, false);
            let right = match &right_class {
                Some(class) => {
                    if !ufo.groups.contains_key(class) {
                        diagnostics.warn(format!(
                            "Non-existent glyph class {class} found in kerning rules."
                        ));
                        continue;
                    }
                    class.as_str()
                }
                None => right.as_str(),
            };
            match (left_class.is_some(), right_class.is_some()) {
                (true, false) => class_glyph_pairs.push((left.to_string(), right.to_string(), true)),
                (false, true) => class_glyph_pairs.push((right.to_string(), left.to_string(), false)),
                _ => (),
            }
            ufo.kerning.entry(left.to_string()).or_default().insert(right.to_string(), *value);
        }
    }

    let mut seen = HashMap::new();
    for (class, glyph, is_left_class) in class_glyph_pairs.iter().rev() {
        remove_rule_if_conflict(ufo, &mut seen, class, glyph, *is_left_class, diagnostics);
    }
}

type Rule = (String, String, f64);

/// Checks one class-glyph rule against all more specific rules recorded in
/// `seen`, splitting the class into explicit per-glyph pairs when it covers
/// a conflicting pair.
fn remove_rule_if_conflict(
    ufo: &mut Ufo,
    seen: &mut HashMap<(String, String), Rule>,
    class: &str,
    glyph: &str,
    is_left_class: bool,
    diagnostics: &mut Diagnostics,
) {
    let original_pair = pair_for(class, glyph, is_left_class);
    let value = match kerning_value(ufo, &original_pair) {
        Some(value) => value,
        None => return,
    };
    let rule = (original_pair.0.clone(), original_pair.1.clone(), value);

    let members = ufo.groups.get(class).cloned().unwrap_or_default();
    let mut kept = Vec::new();
    for member in &members {
        let member_pair = pair_for(member, glyph, is_left_class);
        match seen.get(&member_pair) {
            Some(existing)
                if existing.2 != value && kerning_value(ufo, &member_pair).is_none() =>
            {
                let style = ufo.font_info.style_name.clone().unwrap_or_default();
                diagnostics.warn(format!(
                    "Conflicting kerning rules found in {style} master for glyph pair \
                     ({}, {}) ({existing:?} and {rule:?}), removing pair from latter rule",
                    member_pair.0, member_pair.1,
                ));
            }
            _ => {
                kept.push(member.clone());
                seen.insert(member_pair, rule.clone());
            }
        }
    }

    if kept.len() != members.len() {
        remove_kerning(ufo, &original_pair);
        for member in kept {
            let member_pair = pair_for(&member, glyph, is_left_class);
            ufo.kerning.entry(member_pair.0).or_default().insert(member_pair.1, value);
        }
    }
}

fn pair_for(class_or_member: &str, glyph: &str, is_left_class: bool) -> (String, String) {
    if is_left_class {
        (class_or_member.to_string(), glyph.to_string())
    } else {
        (glyph.to_string(), class_or_member.to_string())
    }
}

fn kerning_value(ufo: &Ufo, pair: &(String, String)) -> Option<f64> {
    ufo.kerning.get(&pair.0).and_then(|seconds| seconds.get(&pair.1)).copied()
}

fn remove_kerning(ufo: &mut Ufo, pair: &(String, String)) {
    if let Some(seconds) = ufo.kerning.get_mut(&pair.0) {
        seconds.remove(&pair.1);
        if seconds.is_empty() {
            ufo.kerning.remove(&pair.0);
        }
    }
}

/// Returns the canonical group name when `key` is a group reference, for
/// either the canonical or the legacy class naming convention.
fn normalize_group(key: &str, first: bool) -> Option<String> {
    let (legacy, canonical) = if first {
        (LEGACY_KERN1_PREFIX, KERN1_PREFIX)
    } else {
        (LEGACY_KERN2_PREFIX, KERN2_PREFIX)
    };
    if let Some(name) = key.strip_prefix(legacy) {
        return Some(format!("{canonical}{name}"));
    }
    key.starts_with(canonical).then(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use indexmap::IndexMap;
    use maplit::btreemap;
    use pretty_assertions::assert_eq;

    use crate::Name;

    fn kerning_table(rules: &[(&str, &str, f64)]) -> KerningTable {
        let mut table: KerningTable = IndexMap::new();
        for (left, right, value) in rules {
            table.entry(left.to_string()).or_default().insert(right.to_string(), *value);
        }
        table
    }

    fn test_ufo() -> Ufo {
        let mut ufo = Ufo::new();
        ufo.groups = btreemap! {
            "public.kern1.A".into() => vec![Name::new_raw("A"), Name::new_raw("a")],
            "public.kern2.V".into() => vec![Name::new_raw("V"), Name::new_raw("v")],
        };
        ufo
    }

    #[test]
    fn legacy_and_canonical_group_names() {
        assert_eq!(normalize_group("@MMK_L_A", true).as_deref(), Some("public.kern1.A"));
        assert_eq!(normalize_group("public.kern1.A", true).as_deref(), Some("public.kern1.A"));
        assert_eq!(normalize_group("@MMK_R_V", false).as_deref(), Some("public.kern2.V"));
        assert_eq!(normalize_group("a", true), None);
        // the side matters: a left-side prefix is not a right-side group
        assert_eq!(normalize_group("@MMK_L_A", false), None);
    }

    #[test]
    fn later_specific_rule_splits_earlier_class_rule() {
        let mut ufo = test_ufo();
        let table = kerning_table(&[
            ("@MMK_L_A", "@MMK_R_V", -250.),
            ("@MMK_L_A", "v", -100.),
            ("a", "@MMK_R_V", 100.),
        ]);
        let mut diagnostics = Diagnostics::new();

        load_kerning(&mut ufo, &table, &mut diagnostics);

        assert_eq!(
            ufo.kerning,
            btreemap! {
                "A".into() => btreemap!{"v".into() => -100.},
                "a".into() => btreemap!{"public.kern2.V".into() => 100.},
                "public.kern1.A".into() => btreemap!{"public.kern2.V".into() => -250.},
            }
        );
        assert_eq!(diagnostics.warnings().len(), 1);
    }

    #[test]
    fn missing_class_is_skipped_with_warning() {
        let mut ufo = test_ufo();
        let table = kerning_table(&[("@MMK_L_X", "v", -10.), ("A", "@MMK_R_Y", -20.)]);
        let mut diagnostics = Diagnostics::new();

        load_kerning(&mut ufo, &table, &mut diagnostics);

        assert!(ufo.kerning.is_empty());
        assert_eq!(diagnostics.warnings().len(), 2);
    }

    #[test]
    fn plain_glyph_pairs_pass_through() {
        let mut ufo = test_ufo();
        let table = kerning_table(&[("T", "o", -40.), ("T", "e", -35.)]);
        let mut diagnostics = Diagnostics::new();

        load_kerning(&mut ufo, &table, &mut diagnostics);

        assert_eq!(
            ufo.kerning,
            btreemap! {
                "T".into() => btreemap!{"o".into() => -40., "e".into() => -35.},
            }
        );
        assert!(diagnostics.is_empty());
    }
}
