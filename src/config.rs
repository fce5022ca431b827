use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeRadii {
    pub small: i64,
    pub notable: i64,
    pub keystone: i64,
    pub mastery: i64,
}

impl Default for NodeRadii {
    fn default() -> Self {
        Self {
            small: 30,
            notable: 50,
            keystone: 80,
            mastery: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Margin added around the main tree on every side.
    pub padding: i64,
    /// How far specialization anchors sit inside the canvas corners.
    pub relocation_distance: f64,
    /// Expansion jewel sockets smaller than this are not drawn.
    pub min_expansion_jewel_size: u32,
    pub node_radius: NodeRadii,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            padding: 200,
            relocation_distance: 1000.0,
            min_expansion_jewel_size: 2,
            node_radius: NodeRadii::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderConfig {
    pub width: f32,
    pub height: f32,
    pub embed_style: bool,
    pub show_orbits: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 1200.0,
            embed_style: false,
            show_orbits: false,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Source directory name to output category.
    pub categories: BTreeMap<String, String>,
}

impl Default for BatchConfig {
    fn default() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert("atlastree".to_string(), "atlas".to_string());
        categories.insert("skilltree".to_string(), "passives".to_string());
        Self { categories }
    }
}

impl BatchConfig {
    pub fn category_for(&self, dir_name: &str) -> String {
        self.categories
            .get(dir_name)
            .cloned()
            .unwrap_or_else(|| dir_name.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub theme: Theme,
    pub layout: LayoutConfig,
    pub render: RenderConfig,
    pub batch: BatchConfig,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct NodeRadiiFile {
    small: Option<i64>,
    notable: Option<i64>,
    keystone: Option<i64>,
    mastery: Option<i64>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct LayoutConfigFile {
    padding: Option<i64>,
    relocation_distance: Option<f64>,
    min_expansion_jewel_size: Option<u32>,
    node_radius: Option<NodeRadiiFile>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct RenderConfigFile {
    width: Option<f32>,
    height: Option<f32>,
    embed_style: Option<bool>,
    show_orbits: Option<bool>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ThemeVariables {
    background: Option<String>,
    node_fill: Option<String>,
    node_stroke: Option<String>,
    keystone_fill: Option<String>,
    keystone_stroke: Option<String>,
    mastery_fill: Option<String>,
    mastery_stroke: Option<String>,
    isolated_fill: Option<String>,
    isolated_stroke: Option<String>,
    ascendancy_fill: Option<String>,
    ascendancy_stroke: Option<String>,
    bloodline_fill: Option<String>,
    bloodline_stroke: Option<String>,
    line_color: Option<String>,
    orbit_color: Option<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
struct ConfigFile {
    theme: Option<String>,
    theme_variables: Option<ThemeVariables>,
    layout: Option<LayoutConfigFile>,
    render: Option<RenderConfigFile>,
    batch: Option<BTreeMap<String, String>>,
}

pub fn load_config(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };
    let contents = std::fs::read_to_string(path)?;
    parse_config(&contents)
}

pub fn parse_config(contents: &str) -> anyhow::Result<Config> {
    let mut config = Config::default();
    let parsed: ConfigFile = serde_json::from_str(contents)?;

    if let Some(theme_name) = parsed.theme.as_deref() {
        config.theme = Theme::named(theme_name)
            .ok_or_else(|| anyhow::anyhow!("Unknown theme: {theme_name}"))?;
    }

    if let Some(vars) = parsed.theme_variables {
        apply_theme_variables(&mut config.theme, vars);
    }

    if let Some(layout) = parsed.layout {
        if let Some(v) = layout.padding {
            config.layout.padding = v;
        }
        if let Some(v) = layout.relocation_distance {
            config.layout.relocation_distance = v;
        }
        if let Some(v) = layout.min_expansion_jewel_size {
            config.layout.min_expansion_jewel_size = v;
        }
        if let Some(radii) = layout.node_radius {
            let target = &mut config.layout.node_radius;
            if let Some(v) = radii.small {
                target.small = v;
            }
            if let Some(v) = radii.notable {
                target.notable = v;
            }
            if let Some(v) = radii.keystone {
                target.keystone = v;
            }
            if let Some(v) = radii.mastery {
                target.mastery = v;
            }
        }
    }

    if let Some(render) = parsed.render {
        if let Some(v) = render.width {
            config.render.width = v;
        }
        if let Some(v) = render.height {
            config.render.height = v;
        }
        if let Some(v) = render.embed_style {
            config.render.embed_style = v;
        }
        if let Some(v) = render.show_orbits {
            config.render.show_orbits = v;
        }
    }

    if let Some(categories) = parsed.batch {
        config.batch.categories.extend(categories);
    }

    Ok(config)
}

fn apply_theme_variables(theme: &mut Theme, vars: ThemeVariables) {
    let overrides = [
        (vars.background, &mut theme.background),
        (vars.node_fill, &mut theme.node_fill),
        (vars.node_stroke, &mut theme.node_stroke),
        (vars.keystone_fill, &mut theme.keystone_fill),
        (vars.keystone_stroke, &mut theme.keystone_stroke),
        (vars.mastery_fill, &mut theme.mastery_fill),
        (vars.mastery_stroke, &mut theme.mastery_stroke),
        (vars.isolated_fill, &mut theme.isolated_fill),
        (vars.isolated_stroke, &mut theme.isolated_stroke),
        (vars.ascendancy_fill, &mut theme.ascendancy_fill),
        (vars.ascendancy_stroke, &mut theme.ascendancy_stroke),
        (vars.bloodline_fill, &mut theme.bloodline_fill),
        (vars.bloodline_stroke, &mut theme.bloodline_stroke),
        (vars.line_color, &mut theme.line_color),
        (vars.orbit_color, &mut theme.orbit_color),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_drawing() {
        let config = Config::default();
        assert_eq!(config.layout.padding, 200);
        assert_eq!(config.layout.relocation_distance, 1000.0);
        assert_eq!(config.layout.node_radius.keystone, 80);
        assert_eq!(config.batch.category_for("skilltree"), "passives");
        assert_eq!(config.batch.category_for("ruthless"), "ruthless");
        assert!(!config.render.embed_style);
    }

    #[test]
    fn file_overrides_merge_into_defaults() {
        let config = parse_config(
            r##"{
                "theme": "light",
                "themeVariables": {"lineColor": "#123456"},
                "layout": {"padding": 64, "nodeRadius": {"notable": 44}},
                "render": {"showOrbits": true},
                "batch": {"ruthlesstree": "ruthless"}
            }"##,
        )
        .unwrap();
        assert_eq!(config.theme.line_color, "#123456");
        assert_eq!(config.theme.background, Theme::light().background);
        assert_eq!(config.layout.padding, 64);
        assert_eq!(config.layout.node_radius.notable, 44);
        assert_eq!(config.layout.node_radius.small, 30);
        assert!(config.render.show_orbits);
        assert_eq!(config.batch.category_for("ruthlesstree"), "ruthless");
        assert_eq!(config.batch.category_for("atlastree"), "atlas");
    }

    #[test]
    fn unknown_theme_is_an_error() {
        assert!(parse_config(r#"{"theme": "neon"}"#).is_err());
    }
}
