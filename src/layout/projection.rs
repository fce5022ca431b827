use crate::ir::{Node, Tree};

use super::error::LayoutError;
use super::orbit::orbit_angle;
use super::types::Point;

/// Radius and angle of a node's slot on its orbit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitSlot {
    pub radius: f64,
    pub angle: f64,
}

pub fn orbit_slot(node: &Node, tree: &Tree) -> Result<OrbitSlot, LayoutError> {
    let constants = &tree.constants;
    let (Some(radius), Some(skills)) = (
        constants.orbit_radii.get(node.orbit),
        constants.skills_per_orbit.get(node.orbit),
    ) else {
        return Err(LayoutError::OrbitOutOfRange {
            node: node.skill,
            orbit: node.orbit,
        });
    };
    Ok(OrbitSlot {
        radius: *radius,
        angle: orbit_angle(node.orbit_index, *skills),
    })
}

/// Places a node around its group. The angle runs clockwise from straight up
/// and y grows downward.
pub fn project(node: &Node, tree: &Tree) -> Result<Point, LayoutError> {
    if node.group == 0 {
        return Err(LayoutError::NoGroup { node: node.skill });
    }
    let Some(group) = tree.group_for(node) else {
        return Err(LayoutError::GroupNotFound {
            node: node.skill,
            name: node.display_name().to_string(),
            group: node.group,
        });
    };
    let slot = orbit_slot(node, tree)?;
    Ok(Point::new(
        group.x + slot.radius * slot.angle.sin(),
        group.y - slot.radius * slot.angle.cos(),
    ))
}
