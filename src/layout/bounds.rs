use crate::config::LayoutConfig;
use crate::ir::Tree;
use crate::policy::should_draw;

use super::projection::project;
use super::types::Bounds;

/// Padded extents of the main tree. Specialization subtrees are left out
/// since they get moved to the canvas corners afterwards. The box always
/// contains the origin.
pub fn compute_bounds(tree: &Tree, config: &LayoutConfig) -> Bounds {
    let (mut min_x, mut min_y, mut max_x, mut max_y) = (0i64, 0i64, 0i64, 0i64);
    for node in tree.nodes.values() {
        if node.ascendancy_name.is_some() || !should_draw(node, config) {
            continue;
        }
        let Ok(point) = project(node, tree) else {
            continue;
        };
        let (x, y) = point.truncated();
        min_x = min_x.min(x);
        min_y = min_y.min(y);
        max_x = max_x.max(x);
        max_y = max_y.max(y);
    }
    let padding = config.padding;
    Bounds {
        min_x: min_x - padding,
        min_y: min_y - padding,
        max_x: max_x + padding,
        max_y: max_y + padding,
    }
}
