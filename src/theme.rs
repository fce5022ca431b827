use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Theme {
    pub background: String,
    pub node_fill: String,
    pub node_stroke: String,
    pub keystone_fill: String,
    pub keystone_stroke: String,
    pub mastery_fill: String,
    pub mastery_stroke: String,
    pub isolated_fill: String,
    pub isolated_stroke: String,
    pub ascendancy_fill: String,
    pub ascendancy_stroke: String,
    pub bloodline_fill: String,
    pub bloodline_stroke: String,
    pub line_color: String,
    pub orbit_color: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            background: "#1a1a1a".to_string(),
            node_fill: "#3e3e3e".to_string(),
            node_stroke: "#8b8b8b".to_string(),
            keystone_fill: "#b8860b".to_string(),
            keystone_stroke: "#ffd700".to_string(),
            mastery_fill: "#4169e1".to_string(),
            mastery_stroke: "#87ceeb".to_string(),
            isolated_fill: "#ff6b6b".to_string(),
            isolated_stroke: "#ff4757".to_string(),
            ascendancy_fill: "#9932cc".to_string(),
            ascendancy_stroke: "#ba55d3".to_string(),
            bloodline_fill: "#8b0000".to_string(),
            bloodline_stroke: "#dc143c".to_string(),
            line_color: "#666666".to_string(),
            orbit_color: "#228b22".to_string(),
        }
    }

    pub fn light() -> Self {
        Self {
            background: "#ffffff".to_string(),
            node_fill: "#e6e6e6".to_string(),
            node_stroke: "#5a5a5a".to_string(),
            keystone_fill: "#f3d27a".to_string(),
            keystone_stroke: "#a67c00".to_string(),
            mastery_fill: "#c9d6ff".to_string(),
            mastery_stroke: "#4169e1".to_string(),
            isolated_fill: "#ffd0d0".to_string(),
            isolated_stroke: "#d63031".to_string(),
            ascendancy_fill: "#e4c8f5".to_string(),
            ascendancy_stroke: "#7b2cbf".to_string(),
            bloodline_fill: "#f5c6cb".to_string(),
            bloodline_stroke: "#a4161a".to_string(),
            line_color: "#9a9a9a".to_string(),
            orbit_color: "#6aa84f".to_string(),
        }
    }

    pub fn named(name: &str) -> Option<Self> {
        match name {
            "dark" | "default" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Stylesheet keyed on the classes the renderer attaches to shapes.
    pub fn stylesheet(&self) -> String {
        format!(
            "svg {{ background: {background}; }}\n\
             circle {{ fill: {node_fill}; stroke: {node_stroke}; stroke-width: 2; }}\n\
             circle.keystone {{ fill: {keystone_fill}; stroke: {keystone_stroke}; stroke-width: 3; }}\n\
             circle.mastery {{ fill: {mastery_fill}; stroke: {mastery_stroke}; }}\n\
             circle.isolated {{ fill: {isolated_fill}; stroke: {isolated_stroke}; }}\n\
             circle.ascendancy {{ fill: {ascendancy_fill}; stroke: {ascendancy_stroke}; }}\n\
             circle.bloodline {{ fill: {bloodline_fill}; stroke: {bloodline_stroke}; }}\n\
             line, path {{ stroke: {line_color}; stroke-width: 2; fill: none; }}\n\
             line.ascendancy, path.ascendancy {{ stroke: {ascendancy_fill}; stroke-width: 3; }}\n\
             circle:hover, line:hover, path:hover {{ stroke-width: 4; filter: brightness(1.2); }}\n\
             circle.orbit {{ fill: none; stroke: {orbit_color}; stroke-width: 1; stroke-dasharray: 5,5; }}\n",
            background = self.background,
            node_fill = self.node_fill,
            node_stroke = self.node_stroke,
            keystone_fill = self.keystone_fill,
            keystone_stroke = self.keystone_stroke,
            mastery_fill = self.mastery_fill,
            mastery_stroke = self.mastery_stroke,
            isolated_fill = self.isolated_fill,
            isolated_stroke = self.isolated_stroke,
            ascendancy_fill = self.ascendancy_fill,
            ascendancy_stroke = self.ascendancy_stroke,
            bloodline_fill = self.bloodline_fill,
            bloodline_stroke = self.bloodline_stroke,
            line_color = self.line_color,
            orbit_color = self.orbit_color,
        )
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
