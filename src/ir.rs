use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::io::Read;

/// A decoded passive tree: groups, nodes, orbit constants and the canvas
/// bounds computed by the layout pass.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Tree {
    #[serde(default)]
    pub groups: BTreeMap<String, Group>,
    #[serde(default)]
    pub nodes: BTreeMap<String, Node>,
    #[serde(default)]
    pub constants: Constants,
    #[serde(default)]
    pub min_x: i64,
    #[serde(default)]
    pub min_y: i64,
    #[serde(default)]
    pub max_x: i64,
    #[serde(default)]
    pub max_y: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
    #[serde(default)]
    pub orbits: Vec<usize>,
    #[serde(default)]
    pub nodes: Vec<String>,
    #[serde(default)]
    pub is_proxy: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Node {
    #[serde(default)]
    pub skill: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub group: u64,
    #[serde(default)]
    pub orbit: usize,
    #[serde(default)]
    pub orbit_index: u32,
    #[serde(default)]
    pub out: Vec<String>,
    #[serde(default, rename = "in")]
    pub in_: Vec<String>,
    #[serde(default)]
    pub ascendancy_name: Option<String>,
    #[serde(default)]
    pub stats: Vec<String>,
    #[serde(default)]
    pub expansion_jewel: Option<ExpansionJewel>,
    #[serde(default)]
    pub granted_passive_points: i32,
    #[serde(default)]
    pub class_start_index: Option<i32>,
    #[serde(default)]
    pub is_notable: bool,
    #[serde(default)]
    pub is_keystone: bool,
    #[serde(default)]
    pub is_wormhole: bool,
    #[serde(default)]
    pub is_mastery: bool,
    #[serde(default)]
    pub is_bloodline: bool,
    #[serde(default)]
    pub is_ascendancy_start: bool,
    #[serde(default)]
    pub is_proxy: bool,
    #[serde(default)]
    pub is_jewel_socket: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ExpansionJewel {
    #[serde(default)]
    pub size: u32,
    #[serde(default)]
    pub index: u32,
    #[serde(default)]
    pub proxy: String,
    #[serde(default)]
    pub parent: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Constants {
    #[serde(default)]
    pub orbit_radii: Vec<f64>,
    #[serde(default)]
    pub skills_per_orbit: Vec<u32>,
}

/// Which relocation region a specialization subtree belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum SpecializationKind {
    Ascendancy,
    Bloodline,
}

impl SpecializationKind {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Ascendancy => "ascendancy",
            Self::Bloodline => "bloodline",
        }
    }
}

impl Node {
    pub fn has_connections(&self) -> bool {
        !self.out.is_empty() || !self.in_.is_empty()
    }

    pub fn is_class_start(&self) -> bool {
        self.class_start_index.is_some()
    }

    pub fn specialization_kind(&self) -> SpecializationKind {
        if self.is_bloodline {
            SpecializationKind::Bloodline
        } else {
            SpecializationKind::Ascendancy
        }
    }

    /// The named subtree this node belongs to, if any.
    pub fn specialization(&self) -> Option<(SpecializationKind, &str)> {
        self.ascendancy_name
            .as_deref()
            .map(|name| (self.specialization_kind(), name))
    }

    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("")
    }
}

impl Tree {
    pub fn from_json(input: &str) -> serde_json::Result<Self> {
        serde_json::from_str(input)
    }

    pub fn from_reader<R: Read>(reader: R) -> serde_json::Result<Self> {
        serde_json::from_reader(reader)
    }

    pub fn group_for(&self, node: &Node) -> Option<&Group> {
        self.groups.get(&node.group.to_string())
    }

    /// Node ids in ascending numeric order; ids that are not numbers sort
    /// after every numeric id, lexically.
    pub fn sorted_node_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.nodes.keys().map(String::as_str).collect();
        ids.sort_by(|a, b| numeric_id_order(a, b));
        ids
    }
}

/// Orders string keys that carry numeric semantics.
pub fn numeric_id_order(a: &str, b: &str) -> Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x.cmp(&y).then_with(|| a.cmp(b)),
        (Ok(_), Err(_)) => Ordering::Less,
        (Err(_), Ok(_)) => Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}
