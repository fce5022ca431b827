use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::ir::{SpecializationKind, Tree, numeric_id_order};

use super::error::LayoutError;
use super::types::{Bounds, Point};

type SpecializationKey = (SpecializationKind, String);

/// Where one specialization subtree ended up.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnchorPlacement {
    pub kind: SpecializationKind,
    pub name: String,
    pub anchor_group: String,
    pub origin: Point,
    pub target: Point,
    pub groups: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct Translation {
    from: Point,
    to: Point,
}

impl Translation {
    fn is_identity(&self) -> bool {
        self.from == self.to
    }

    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (self.to.x + (x - self.from.x), self.to.y + (y - self.from.y))
    }
}

/// Group moves computed against the original positions, applied in one go.
#[derive(Debug, Clone, Default)]
pub struct RelocationPlan {
    translations: BTreeMap<String, Translation>,
    pub placements: Vec<AnchorPlacement>,
    pub skipped: Vec<LayoutError>,
}

/// Anchor target for a namespace. Ascendancies go to the top right of the
/// canvas, bloodlines to the top left.
pub fn target_point(kind: SpecializationKind, bounds: &Bounds, distance: f64) -> Point {
    let y = -(bounds.max_y as f64) + distance;
    match kind {
        SpecializationKind::Ascendancy => Point::new(bounds.max_x as f64 - distance, y),
        SpecializationKind::Bloodline => Point::new(bounds.min_x as f64 + distance, y),
    }
}

pub fn plan_relocation(tree: &Tree, bounds: &Bounds, distance: f64) -> RelocationPlan {
    let mut members: BTreeMap<SpecializationKey, BTreeSet<&str>> = BTreeMap::new();
    let mut starts: BTreeMap<SpecializationKind, BTreeSet<&str>> = BTreeMap::new();
    for (id, node) in &tree.nodes {
        if let Some((kind, name)) = node.specialization() {
            members
                .entry((kind, name.to_string()))
                .or_default()
                .insert(id.as_str());
        }
        if node.is_ascendancy_start {
            starts
                .entry(node.specialization_kind())
                .or_default()
                .insert(id.as_str());
        }
    }

    let mut group_ids: Vec<&str> = tree.groups.keys().map(String::as_str).collect();
    group_ids.sort_by(|a, b| numeric_id_order(a, b));

    let mut member_groups: BTreeMap<&SpecializationKey, Vec<&str>> = BTreeMap::new();
    let mut anchor_candidates: BTreeMap<SpecializationKind, BTreeSet<&str>> = BTreeMap::new();
    for &group_id in &group_ids {
        let owned: BTreeSet<&str> = tree.groups[group_id]
            .nodes
            .iter()
            .map(String::as_str)
            .collect();
        for (key, node_ids) in &members {
            if owned.is_disjoint(node_ids) {
                continue;
            }
            member_groups.entry(key).or_default().push(group_id);
            if starts
                .get(&key.0)
                .is_some_and(|start_ids| !owned.is_disjoint(start_ids))
            {
                anchor_candidates.entry(key.0).or_default().insert(group_id);
            }
        }
    }

    let mut plan = RelocationPlan::default();
    for (key, groups) in member_groups {
        let (kind, name) = key;
        let anchor = anchor_candidates
            .get(kind)
            .and_then(|candidates| groups.iter().find(|id| candidates.contains(*id)));
        let Some(anchor_id) = anchor else {
            log::warn!(
                "{} {} has no anchor group, leaving it in place",
                kind.class_name(),
                name
            );
            plan.skipped.push(LayoutError::AnchorNotFound {
                kind: *kind,
                name: name.clone(),
            });
            continue;
        };
        let anchor_group = &tree.groups[*anchor_id];
        let translation = Translation {
            from: Point::new(anchor_group.x, anchor_group.y),
            to: target_point(*kind, bounds, distance),
        };
        let mut moved = Vec::with_capacity(groups.len());
        for group_id in &groups {
            if plan.translations.contains_key(*group_id) {
                log::warn!(
                    "group {} is shared with another subtree, not moving it with {}",
                    group_id,
                    name
                );
                continue;
            }
            plan.translations.insert(group_id.to_string(), translation);
            moved.push(group_id.to_string());
        }
        log::debug!(
            "moving {} {} ({} groups) to {:.0},{:.0}",
            kind.class_name(),
            name,
            moved.len(),
            translation.to.x,
            translation.to.y
        );
        plan.placements.push(AnchorPlacement {
            kind: *kind,
            name: name.clone(),
            anchor_group: anchor_id.to_string(),
            origin: translation.from,
            target: translation.to,
            groups: moved,
        });
    }
    plan
}

impl RelocationPlan {
    /// A copy of `tree` with every planned group moved.
    pub fn apply(&self, tree: &Tree) -> Tree {
        let mut relocated = tree.clone();
        for (group_id, translation) in &self.translations {
            if translation.is_identity() {
                continue;
            }
            if let Some(group) = relocated.groups.get_mut(group_id) {
                (group.x, group.y) = translation.apply(group.x, group.y);
            }
        }
        relocated
    }
}
