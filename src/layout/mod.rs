mod bounds;
mod error;
mod orbit;
mod projection;
mod relocation;
pub(crate) mod types;
pub use bounds::compute_bounds;
pub use error::LayoutError;
pub use orbit::orbit_angle;
pub use projection::{OrbitSlot, orbit_slot, project};
pub use relocation::{AnchorPlacement, RelocationPlan, plan_relocation, target_point};
pub use types::*;

use crate::config::LayoutConfig;
use crate::ir::Tree;

/// Computes canvas bounds from the main tree, then moves every
/// specialization subtree into its corner. The input is left untouched.
pub fn compute_layout(tree: &Tree, config: &LayoutConfig) -> Layout {
    let bounds = compute_bounds(tree, config);
    let plan = plan_relocation(tree, &bounds, config.relocation_distance);
    let mut relocated = plan.apply(tree);
    relocated.min_x = bounds.min_x;
    relocated.min_y = bounds.min_y;
    relocated.max_x = bounds.max_x;
    relocated.max_y = bounds.max_y;

    let mut skipped = plan.skipped;
    skipped.extend(data_errors(&relocated));
    Layout {
        tree: relocated,
        bounds,
        anchors: plan.placements,
        skipped,
    }
}

fn data_errors(tree: &Tree) -> Vec<LayoutError> {
    let mut errors = Vec::new();
    for id in tree.sorted_node_ids() {
        match project(&tree.nodes[id], tree) {
            Err(err) if err.is_data_error() => {
                log::warn!("{err}");
                errors.push(err);
            }
            _ => {}
        }
    }
    errors
}
