use crate::ir::Tree;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Trimmed copy of a tree carrying only what a tooltip front end needs.
#[derive(Debug, Serialize)]
pub struct CompactTree {
    pub groups: BTreeMap<String, CompactGroup>,
    pub nodes: BTreeMap<String, CompactNode>,
}

#[derive(Debug, Serialize)]
pub struct CompactGroup {
    pub nodes: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompactNode {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub stats: Vec<String>,
    #[serde(skip_serializing_if = "is_false")]
    pub is_mastery: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_notable: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_keystone: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub is_bloodline: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl CompactTree {
    pub fn from_tree(tree: &Tree) -> Self {
        let groups = tree
            .groups
            .iter()
            .map(|(id, group)| {
                (
                    id.clone(),
                    CompactGroup {
                        nodes: group.nodes.clone(),
                    },
                )
            })
            .collect();
        let nodes = tree
            .nodes
            .iter()
            .map(|(id, node)| {
                (
                    id.clone(),
                    CompactNode {
                        name: node.name.clone(),
                        stats: node.stats.clone(),
                        is_mastery: node.is_mastery,
                        is_notable: node.is_notable,
                        is_keystone: node.is_keystone,
                        is_bloodline: node.is_bloodline,
                    },
                )
            })
            .collect();
        Self { groups, nodes }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

pub fn write_compact_json(tree: &Tree, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, &CompactTree::from_tree(tree))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_tooltip_fields() {
        let tree = Tree::from_json(
            r#"{
                "groups": {"3": {"x": 10, "y": 20, "nodes": ["7", "8"]}},
                "nodes": {
                    "7": {"name": "Iron Will", "stats": ["Strength applies to spell damage"], "isKeystone": true, "group": 3},
                    "8": {"group": 3, "orbit": 1}
                }
            }"#,
        )
        .unwrap();
        let json = CompactTree::from_tree(&tree).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"groups":{"3":{"nodes":["7","8"]}},"nodes":{"7":{"name":"Iron Will","stats":["Strength applies to spell damage"],"isKeystone":true},"8":{}}}"#
        );
    }
}
