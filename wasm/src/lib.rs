use passive_tree_svg::{CompactTree, RenderOptions, Theme, Tree, render_with_options};
use serde::Deserialize;
use wasm_bindgen::prelude::*;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TreeRenderOptions {
    theme: Option<String>,
    style: Option<bool>,
    orbits: Option<bool>,
    padding: Option<i64>,
}

fn build_render_options(options: TreeRenderOptions) -> Result<RenderOptions, String> {
    let theme = match options.theme.as_deref() {
        Some(name) => Theme::named(name).ok_or_else(|| format!("unknown theme: {name}"))?,
        None => Theme::default(),
    };
    let mut render_options = RenderOptions::styled(theme);
    if let Some(style) = options.style {
        render_options.config.render.embed_style = style;
    }
    if let Some(orbits) = options.orbits {
        render_options.config.render.show_orbits = orbits;
    }
    if let Some(padding) = options.padding {
        render_options.config.layout.padding = padding;
    }
    Ok(render_options)
}

#[wasm_bindgen]
pub fn render_tree_svg(tree_json: &str, options_json: Option<String>) -> Result<String, JsValue> {
    let options = if let Some(raw_options) = options_json {
        serde_json::from_str::<TreeRenderOptions>(&raw_options)
            .map_err(|error| JsValue::from_str(&error.to_string()))?
    } else {
        TreeRenderOptions::default()
    };

    let render_options = build_render_options(options).map_err(|error| JsValue::from_str(&error))?;
    render_with_options(tree_json, render_options)
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[wasm_bindgen]
pub fn compact_tree_json(tree_json: &str) -> Result<String, JsValue> {
    let tree = Tree::from_json(tree_json).map_err(|error| JsValue::from_str(&error.to_string()))?;
    CompactTree::from_tree(&tree)
        .to_json()
        .map_err(|error| JsValue::from_str(&error.to_string()))
}

#[cfg(test)]
mod tests {
    use passive_tree_svg::render_with_options;

    use crate::{TreeRenderOptions, build_render_options};

    const TREE: &str = r#"{
        "groups": {
            "1": {"x": 0, "y": 0, "orbits": [0, 1], "nodes": ["10", "11"]},
            "2": {"x": 400, "y": 0, "orbits": [0], "nodes": ["12"]}
        },
        "nodes": {
            "10": {"skill": 10, "group": 1, "orbit": 1, "orbitIndex": 0, "out": ["11"]},
            "11": {"skill": 11, "group": 1, "orbit": 1, "orbitIndex": 2, "in": ["10"], "out": ["12"]},
            "12": {"skill": 12, "group": 2, "orbit": 0, "orbitIndex": 0, "in": ["11"], "isKeystone": true}
        },
        "constants": {"orbitRadii": [0, 82], "skillsPerOrbit": [1, 6]}
    }"#;

    #[test]
    fn renders_tree_with_embedded_style() {
        let options = build_render_options(TreeRenderOptions::default()).unwrap();
        let svg = render_with_options(TREE, options).expect("tree should render");

        assert!(svg.contains("<svg"));
        assert!(svg.contains("<style"));
        assert!(svg.contains("id=\"c-10-11\""));
        assert!(svg.contains("class=\"keystone\""));
    }

    #[test]
    fn rejects_unknown_theme() {
        let options = TreeRenderOptions {
            theme: Some("neon".to_string()),
            ..TreeRenderOptions::default()
        };
        assert!(build_render_options(options).is_err());
    }
}
