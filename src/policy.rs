//! What gets drawn and how: node visibility, edge eligibility, node classes
//! and edge geometry.

use std::f64::consts::{PI, TAU};

use serde::Serialize;

use crate::config::LayoutConfig;
use crate::ir::{Node, Tree};
use crate::layout::{LayoutError, orbit_slot, project};

/// Identifier, class list and free-form metadata attached to one shape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ShapeAttrs {
    pub id: String,
    pub classes: Vec<String>,
    pub extras: Vec<String>,
}

impl ShapeAttrs {
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NodeSize {
    Small,
    Notable,
    Keystone,
    Mastery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStyle {
    pub size: NodeSize,
    pub radius: i64,
    pub attrs: ShapeAttrs,
}

/// Circular arc between two points on the same orbit, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ArcSegment {
    pub from: (i64, i64),
    pub to: (i64, i64),
    pub radius: i64,
    pub x_axis_rotation: i64,
    pub large_arc: bool,
    pub sweep: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum EdgeGeometry {
    Line { from: (i64, i64), to: (i64, i64) },
    Arc(ArcSegment),
}

pub fn should_draw(node: &Node, config: &LayoutConfig) -> bool {
    let small_jewel = node
        .expansion_jewel
        .as_ref()
        .is_some_and(|jewel| jewel.size < config.min_expansion_jewel_size);
    !node.is_class_start() && !node.is_proxy && !small_jewel
}

/// Masteries and class starts never take edges; wormholes only link to
/// ordinary nodes.
pub fn should_connect(a: &Node, b: &Node) -> bool {
    !a.is_mastery
        && !a.is_class_start()
        && !b.is_mastery
        && !b.is_class_start()
        && !(a.is_wormhole && b.is_wormhole)
}

/// Multiple-choice containers point at their options through synthetic
/// edges.
pub fn skips_outgoing_edges(node: &Node) -> bool {
    node.granted_passive_points == 2
}

pub fn node_style(node: &Node, config: &LayoutConfig) -> NodeStyle {
    let mut attrs = ShapeAttrs {
        id: format!("n-{}", node.skill),
        ..ShapeAttrs::default()
    };
    if !node.has_connections() {
        attrs.classes.push("isolated".to_string());
    }
    if let Some((kind, name)) = node.specialization() {
        attrs.classes.push("ascendancy".to_string());
        if node.is_bloodline {
            attrs.classes.push(kind.class_name().to_string());
        }
        attrs.extras.push(name.to_string());
    }

    let radii = &config.node_radius;
    let (size, radius) = if node.is_notable {
        (NodeSize::Notable, radii.notable)
    } else if node.is_keystone || node.is_wormhole {
        attrs.classes.push("keystone".to_string());
        (NodeSize::Keystone, radii.keystone)
    } else if node.is_mastery {
        attrs.classes.push("mastery".to_string());
        if let Some(name) = &node.name {
            attrs.extras.push(name.clone());
        }
        (NodeSize::Mastery, radii.mastery)
    } else {
        (NodeSize::Small, radii.small)
    };
    NodeStyle {
        size,
        radius,
        attrs,
    }
}

pub fn edge_attrs(from: &Node, to: &Node) -> ShapeAttrs {
    let mut attrs = ShapeAttrs {
        id: format!("c-{}-{}", from.skill, to.skill),
        ..ShapeAttrs::default()
    };
    if let Some(name) = &from.ascendancy_name {
        attrs.classes.push("ascendancy".to_string());
        attrs.classes.push(name.clone());
    }
    attrs
}

/// Flags for the shorter arc going from angle `from` to angle `to`.
/// Returns `(large_arc, sweep)`.
pub fn arc_flags(from: f64, to: f64) -> (bool, bool) {
    let mut delta = to - from;
    if delta > PI {
        delta -= TAU;
    } else if delta <= -PI {
        delta += TAU;
    }
    (delta.abs() > PI, delta > 0.0)
}

/// Nodes sharing a group and an orbit are joined along the orbit; anything
/// else gets a straight line.
pub fn edge_geometry(a: &Node, b: &Node, tree: &Tree) -> Result<EdgeGeometry, LayoutError> {
    let from = project(a, tree)?.truncated();
    let to = project(b, tree)?.truncated();
    if a.group != b.group || a.orbit != b.orbit {
        return Ok(EdgeGeometry::Line { from, to });
    }
    let slot_a = orbit_slot(a, tree)?;
    let slot_b = orbit_slot(b, tree)?;
    let (large_arc, sweep) = arc_flags(slot_a.angle, slot_b.angle);
    Ok(EdgeGeometry::Arc(ArcSegment {
        from,
        to,
        radius: slot_a.radius as i64,
        x_axis_rotation: 0,
        large_arc,
        sweep,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Constants, ExpansionJewel, Group};

    fn tree() -> Tree {
        let mut tree = Tree {
            constants: Constants {
                orbit_radii: vec![0.0, 82.0, 162.0],
                skills_per_orbit: vec![1, 6, 16],
            },
            ..Tree::default()
        };
        tree.groups.insert("5".to_string(), Group::default());
        tree.groups.insert(
            "6".to_string(),
            Group {
                x: 500.0,
                ..Group::default()
            },
        );
        tree
    }

    fn node(skill: u64, group: u64, orbit: usize, orbit_index: u32) -> Node {
        Node {
            skill,
            group,
            orbit,
            orbit_index,
            out: vec!["0".to_string()],
            ..Node::default()
        }
    }

    #[test]
    fn hidden_nodes() {
        let config = LayoutConfig::default();
        assert!(should_draw(&node(1, 5, 0, 0), &config));
        let mut start = node(1, 5, 0, 0);
        start.class_start_index = Some(2);
        assert!(!should_draw(&start, &config));
        let mut proxy = node(1, 5, 0, 0);
        proxy.is_proxy = true;
        assert!(!should_draw(&proxy, &config));
        let mut jewel = node(1, 5, 0, 0);
        jewel.expansion_jewel = Some(ExpansionJewel {
            size: 1,
            ..ExpansionJewel::default()
        });
        assert!(!should_draw(&jewel, &config));
        jewel.expansion_jewel = Some(ExpansionJewel {
            size: 2,
            ..ExpansionJewel::default()
        });
        assert!(should_draw(&jewel, &config));
    }

    #[test]
    fn connection_rules() {
        let plain = node(1, 5, 0, 0);
        let mut mastery = node(2, 5, 0, 0);
        mastery.is_mastery = true;
        let mut start = node(3, 5, 0, 0);
        start.class_start_index = Some(0);
        let mut wormhole = node(4, 5, 0, 0);
        wormhole.is_wormhole = true;

        assert!(should_connect(&plain, &plain));
        assert!(!should_connect(&plain, &mastery));
        assert!(!should_connect(&mastery, &plain));
        assert!(!should_connect(&start, &plain));
        assert!(should_connect(&wormhole, &plain));
        assert!(!should_connect(&wormhole, &wormhole));
    }

    #[test]
    fn node_classes_by_priority() {
        let config = LayoutConfig::default();
        let mut notable = node(10, 5, 0, 0);
        notable.is_notable = true;
        notable.is_keystone = true;
        let style = node_style(&notable, &config);
        assert_eq!(style.size, NodeSize::Notable);
        assert_eq!(style.radius, 50);
        assert!(style.attrs.classes.is_empty());
        assert_eq!(style.attrs.id, "n-10");

        let mut wormhole = node(11, 5, 0, 0);
        wormhole.is_wormhole = true;
        let style = node_style(&wormhole, &config);
        assert_eq!(style.radius, 80);
        assert!(style.attrs.has_class("keystone"));

        let mut mastery = node(12, 5, 0, 0);
        mastery.is_mastery = true;
        mastery.name = Some("Life Mastery".to_string());
        mastery.out.clear();
        let style = node_style(&mastery, &config);
        assert_eq!(style.size, NodeSize::Mastery);
        assert_eq!(style.attrs.classes, vec!["isolated", "mastery"]);
        assert_eq!(style.attrs.extras, vec!["Life Mastery"]);

        let style = node_style(&node(13, 5, 0, 0), &config);
        assert_eq!(style.size, NodeSize::Small);
        assert_eq!(style.radius, 30);
    }

    #[test]
    fn specialization_tags_are_additive() {
        let config = LayoutConfig::default();
        let mut ascendant = node(20, 5, 0, 0);
        ascendant.ascendancy_name = Some("Slayer".to_string());
        ascendant.is_notable = true;
        let style = node_style(&ascendant, &config);
        assert_eq!(style.size, NodeSize::Notable);
        assert_eq!(style.attrs.classes, vec!["ascendancy"]);
        assert_eq!(style.attrs.extras, vec!["Slayer"]);

        ascendant.is_bloodline = true;
        let style = node_style(&ascendant, &config);
        assert_eq!(style.attrs.classes, vec!["ascendancy", "bloodline"]);

        let attrs = edge_attrs(&ascendant, &node(21, 5, 0, 0));
        assert_eq!(attrs.id, "c-20-21");
        assert_eq!(attrs.classes, vec!["ascendancy", "Slayer"]);
    }

    #[test]
    fn shorter_arc_is_chosen() {
        assert_eq!(arc_flags(0.0, 1.0), (false, true));
        assert_eq!(arc_flags(1.0, 0.0), (false, false));
        // wraps around through 0
        assert_eq!(arc_flags(0.2, TAU - 0.2), (false, false));
        assert_eq!(arc_flags(TAU - 0.2, 0.2), (false, true));
        assert_eq!(arc_flags(0.0, PI), (false, true));
    }

    #[test]
    fn half_turn_always_sweeps_positive() {
        // -π folds onto +π, so a half turn draws the same way in both directions
        assert_eq!(arc_flags(PI, 0.0), (false, true));
        assert_eq!(arc_flags(0.0, PI), arc_flags(PI, 0.0));
    }

    #[test]
    fn same_group_and_orbit_makes_an_arc() {
        let tree = tree();
        let a = node(1, 5, 2, 0);
        let b = node(2, 5, 2, 4);
        match edge_geometry(&a, &b, &tree).unwrap() {
            EdgeGeometry::Arc(arc) => {
                assert_eq!(arc.from, (0, -162));
                assert_eq!(arc.to, (162, 0));
                assert_eq!(arc.radius, 162);
                assert!(arc.sweep);
                assert!(!arc.large_arc);
            }
            other => panic!("expected arc, got {other:?}"),
        }
    }

    #[test]
    fn different_groups_make_a_line() {
        let tree = tree();
        let geometry = edge_geometry(&node(1, 5, 2, 0), &node(2, 6, 2, 0), &tree).unwrap();
        assert_eq!(
            geometry,
            EdgeGeometry::Line {
                from: (0, -162),
                to: (500, -162),
            }
        );
        let geometry = edge_geometry(&node(1, 5, 1, 0), &node(2, 5, 2, 0), &tree).unwrap();
        assert!(matches!(geometry, EdgeGeometry::Line { .. }));
    }

    #[test]
    fn unplaceable_endpoint_fails() {
        let tree = tree();
        let err = edge_geometry(&node(1, 5, 2, 0), &node(2, 0, 2, 0), &tree).unwrap_err();
        assert_eq!(err, LayoutError::NoGroup { node: 2 });
    }
}
