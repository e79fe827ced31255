//! Anchor propagation through nested components.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use crate::error::BuildError;
use crate::ufo::glyph::{Anchor, Glyph};
use crate::ufo::Ufo;
use crate::Name;

enum Visit {
    InProgress,
    Done(Vec<Anchor>),
}

/// Copies anchors from referenced component glyphs into the referencing
/// glyphs, transitively.
///
/// A glyph's effective anchors are its own, plus those inherited from each
/// base component's effective anchors with the component transform applied.
/// Directly authored anchors always win over inherited ones. When two
/// components contribute the same anchor name, the inherited anchors are
/// suffixed `_1`, `_2`, … in component order. Mark components (components
/// whose glyph declares a `_`-prefixed attachment point) do not contribute
/// new anchors but re-position the matching inherited one.
///
/// Running this twice is a no-op: inherited names block re-inheritance.
pub fn propagate_anchors(ufo: &mut Ufo) -> Result<(), BuildError> {
    let mut visits = HashMap::new();
    let order: Vec<Name> = ufo.iter().map(|glyph| glyph.name().clone()).collect();
    let mut resolved = Vec::with_capacity(order.len());
    for name in &order {
        let anchors = match ufo.glyph(name) {
            Some(glyph) => resolve(ufo, glyph, &mut visits)?,
            None => continue,
        };
        resolved.push((name, anchors));
    }
    for (name, anchors) in resolved {
        if let Some(glyph) = ufo.glyph_mut(name) {
            glyph.anchors = anchors;
        }
    }
    Ok(())
}

/// Computes the effective anchor set of one glyph, recursing into its
/// components first.
fn resolve(
    ufo: &Ufo,
    glyph: &Glyph,
    visits: &mut HashMap<Name, Visit>,
) -> Result<Vec<Anchor>, BuildError> {
    match visits.get(glyph.name()) {
        Some(Visit::Done(anchors)) => return Ok(anchors.clone()),
        Some(Visit::InProgress) => {
            return Err(BuildError::ComponentCycle { glyph: glyph.name().to_string() })
        }
        None => (),
    }
    visits.insert(glyph.name().clone(), Visit::InProgress);

    // base components contribute anchors; mark components adjust them
    let mut base_components = Vec::new();
    let mut mark_components = Vec::new();
    let mut anchor_names = BTreeSet::new();
    for component in &glyph.components {
        let base = ufo.glyph(&component.base).ok_or_else(|| BuildError::MissingComponent {
            glyph: glyph.name().to_string(),
            base: component.base.to_string(),
        })?;
        let base_anchors = resolve(ufo, base, visits)?;
        if base_anchors.iter().any(|anchor| anchor.is_mark_attachment()) {
            mark_components.push((component, base_anchors));
        } else {
            anchor_names.extend(base_anchors.iter().map(|anchor| anchor.name.clone()));
            base_components.push((component, base_anchors));
        }
    }

    let mut to_add: BTreeMap<Name, (f64, f64)> = BTreeMap::new();
    for anchor_name in &anchor_names {
        // skip names the glyph already carries, including ligature variants
        // ("bottom" is blocked by an existing "bottom_1")
        if glyph.anchors.iter().any(|anchor| anchor.name.starts_with(anchor_name.as_str())) {
            continue;
        }
        let contributions: Vec<_> = base_components
            .iter()
            .filter_map(|(component, anchors)| {
                anchors
                    .iter()
                    .find(|anchor| anchor.name == *anchor_name)
                    .map(|anchor| (component, anchor))
            })
            .collect();
        if let [(component, anchor)] = contributions[..] {
            to_add.insert(anchor_name.clone(), component.transform.apply(anchor.x, anchor.y));
        } else {
            for (index, (component, anchor)) in contributions.iter().enumerate() {
                let name = Name::new_raw(&format!("{}_{}", anchor_name, index + 1));
                to_add.insert(name, component.transform.apply(anchor.x, anchor.y));
            }
        }
    }

    for (component, base_anchors) in &mark_components {
        for anchor in base_anchors {
            // only adjust anchors we are inheriting anyway, and only when the
            // mark glyph pairs them with the matching "_"-attachment point
            let attachment = format!("_{}", anchor.name);
            if to_add.contains_key(&anchor.name)
                && base_anchors.iter().any(|candidate| candidate.name == attachment.as_str())
            {
                to_add.insert(anchor.name.clone(), component.transform.apply(anchor.x, anchor.y));
            }
        }
    }

    let mut effective = glyph.anchors.clone();
    for (name, (x, y)) in to_add {
        effective.push(Anchor::new(name, x, y));
    }
    visits.insert(glyph.name().clone(), Visit::Done(effective.clone()));
    Ok(effective)
}
