pub mod batch;
#[cfg(feature = "cli")]
pub mod cli;
pub mod compact;
pub mod config;
pub mod ir;
pub mod layout;
pub mod layout_dump;
pub mod policy;
pub mod render;
pub mod svg;
pub mod theme;

#[cfg(feature = "cli")]
pub use cli::run;
pub use compact::CompactTree;
pub use config::{Config, LayoutConfig, RenderConfig};
pub use ir::Tree;
pub use layout::{Bounds, Layout, LayoutError, compute_layout};
pub use render::{DrawingSink, render_svg, render_tree};
pub use theme::Theme;

/// Options for one-shot rendering from library callers.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub config: Config,
}

impl RenderOptions {
    pub fn styled(theme: Theme) -> Self {
        let mut config = Config {
            theme,
            ..Config::default()
        };
        config.render.embed_style = true;
        Self { config }
    }
}

/// Decodes a tree, lays it out and renders it to SVG markup.
pub fn render_with_options(input: &str, options: RenderOptions) -> anyhow::Result<String> {
    let tree = Tree::from_json(input)?;
    let layout = compute_layout(&tree, &options.config.layout);
    Ok(render_svg(&layout, &options.config))
}
