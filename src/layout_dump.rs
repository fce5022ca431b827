use crate::config::LayoutConfig;
use crate::ir::numeric_id_order;
use crate::layout::{AnchorPlacement, Bounds, Layout, LayoutError, project};
use crate::policy::{NodeSize, node_style, should_draw};
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

#[derive(Debug, Serialize)]
pub struct LayoutDump {
    pub bounds: Bounds,
    pub groups: Vec<GroupDump>,
    pub nodes: Vec<NodeDump>,
    pub anchors: Vec<AnchorPlacement>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct GroupDump {
    pub id: String,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Serialize)]
pub struct NodeDump {
    pub id: String,
    pub x: f64,
    pub y: f64,
    pub size: NodeSize,
    pub classes: Vec<String>,
    pub drawn: bool,
}

impl LayoutDump {
    pub fn from_layout(layout: &Layout, config: &LayoutConfig) -> Self {
        let tree = &layout.tree;
        let mut group_ids: Vec<&String> = tree.groups.keys().collect();
        group_ids.sort_by(|a, b| numeric_id_order(a, b));
        let groups = group_ids
            .into_iter()
            .map(|id| GroupDump {
                id: id.clone(),
                x: tree.groups[id].x,
                y: tree.groups[id].y,
            })
            .collect();

        let nodes = tree
            .sorted_node_ids()
            .into_iter()
            .filter_map(|id| {
                let node = &tree.nodes[id];
                let point = project(node, tree).ok()?;
                let style = node_style(node, config);
                Some(NodeDump {
                    id: id.to_string(),
                    x: point.x,
                    y: point.y,
                    size: style.size,
                    classes: style.attrs.classes,
                    drawn: should_draw(node, config),
                })
            })
            .collect();

        LayoutDump {
            bounds: layout.bounds,
            groups,
            nodes,
            anchors: layout.anchors.clone(),
            skipped: layout.skipped.iter().map(LayoutError::to_string).collect(),
        }
    }
}

pub fn write_layout_dump(
    path: &Path,
    layout: &Layout,
    config: &LayoutConfig,
) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    let dump = LayoutDump::from_layout(layout, config);
    serde_json::to_writer_pretty(writer, &dump)?;
    Ok(())
}
