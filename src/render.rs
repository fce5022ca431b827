use crate::config::{Config, RenderConfig};
use crate::ir::{Tree, numeric_id_order};
use crate::layout::{Layout, LayoutError, project};
use crate::policy::{
    ArcSegment, EdgeGeometry, ShapeAttrs, edge_attrs, edge_geometry, node_style, should_connect,
    should_draw, skips_outgoing_edges,
};
use crate::svg::SvgDocument;
use anyhow::Result;
use std::path::Path;

/// Drawing surface the renderer emits into. Coordinates are already in
/// integer pixels.
pub trait DrawingSink {
    fn begin_group(&mut self, id: &str);
    fn end_group(&mut self);
    fn circle(&mut self, center: (i64, i64), radius: i64, attrs: &ShapeAttrs);
    fn line(&mut self, from: (i64, i64), to: (i64, i64), attrs: &ShapeAttrs);
    fn arc(&mut self, arc: &ArcSegment, attrs: &ShapeAttrs);
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderSummary {
    pub orbits: usize,
    pub connections: usize,
    pub nodes: usize,
    pub skipped: usize,
}

/// Walks the laid out tree in ascending node id order, connections first,
/// then node shapes.
pub fn render_tree<S: DrawingSink>(
    layout: &Layout,
    config: &Config,
    sink: &mut S,
) -> RenderSummary {
    let tree = &layout.tree;
    let mut summary = RenderSummary::default();
    let node_ids = tree.sorted_node_ids();

    if config.render.show_orbits {
        sink.begin_group("orbits");
        summary.orbits = draw_orbits(tree, sink);
        sink.end_group();
    }

    sink.begin_group("connections");
    for id in &node_ids {
        let node = &tree.nodes[*id];
        if skips_outgoing_edges(node) {
            continue;
        }
        for neighbour_id in &node.out {
            let Some(neighbour) = tree.nodes.get(neighbour_id) else {
                log::debug!("node {id} points at unknown node {neighbour_id}");
                continue;
            };
            if !should_draw(node, &config.layout)
                || !should_draw(neighbour, &config.layout)
                || !should_connect(node, neighbour)
            {
                continue;
            }
            let attrs = edge_attrs(node, neighbour);
            match edge_geometry(node, neighbour, tree) {
                Ok(EdgeGeometry::Line { from, to }) => sink.line(from, to, &attrs),
                Ok(EdgeGeometry::Arc(arc)) => sink.arc(&arc, &attrs),
                Err(err) => {
                    note_skipped(&err);
                    summary.skipped += 1;
                    continue;
                }
            }
            summary.connections += 1;
        }
    }
    sink.end_group();

    sink.begin_group("nodes");
    for id in &node_ids {
        let node = &tree.nodes[*id];
        if !should_draw(node, &config.layout) {
            continue;
        }
        let style = node_style(node, &config.layout);
        match project(node, tree) {
            Ok(point) => {
                sink.circle(point.truncated(), style.radius, &style.attrs);
                summary.nodes += 1;
            }
            Err(err) => {
                note_skipped(&err);
                summary.skipped += 1;
            }
        }
    }
    sink.end_group();

    summary
}

fn draw_orbits<S: DrawingSink>(tree: &Tree, sink: &mut S) -> usize {
    let mut group_ids: Vec<&String> = tree.groups.keys().collect();
    group_ids.sort_by(|a, b| numeric_id_order(a, b));
    let mut drawn = 0;
    for group_id in group_ids {
        let group = &tree.groups[group_id];
        let center = (group.x as i64, group.y as i64);
        for orbit in &group.orbits {
            let Some(radius) = tree.constants.orbit_radii.get(*orbit) else {
                continue;
            };
            if *radius <= 0.0 {
                continue;
            }
            let attrs = ShapeAttrs {
                id: format!("g-{group_id}-{orbit}"),
                classes: vec!["orbit".to_string()],
                extras: Vec::new(),
            };
            sink.circle(center, *radius as i64, &attrs);
            drawn += 1;
        }
    }
    drawn
}

fn note_skipped(err: &LayoutError) {
    // data errors were already reported by the layout pass
    log::debug!("skipping shape: {err}");
}

pub fn render_svg(layout: &Layout, config: &Config) -> String {
    let stylesheet = config
        .render
        .embed_style
        .then(|| config.theme.stylesheet());
    let mut document = SvgDocument::new(&layout.bounds, stylesheet.as_deref());
    let summary = render_tree(layout, config, &mut document);
    log::debug!(
        "rendered {} nodes, {} connections, {} orbit rings ({} skipped)",
        summary.nodes,
        summary.connections,
        summary.orbits,
        summary.skipped
    );
    document.finish()
}

/// Writes rendered text to `output`, or to stdout when no path is given.
pub fn write_output(contents: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, contents)?;
        }
        None => {
            print!("{}", contents);
        }
    }
    Ok(())
}

#[cfg(feature = "png")]
pub fn write_output_png(svg: &str, output: &Path, render_cfg: &RenderConfig) -> Result<()> {
    let mut opt = usvg::Options::default();
    opt.default_size = usvg::Size::from_wh(render_cfg.width, render_cfg.height)
        .ok_or_else(|| anyhow::anyhow!("Invalid render size"))?;

    let tree = usvg::Tree::from_str(svg, &opt)?;
    let source = tree.size();
    let scale = (render_cfg.width / source.width()).min(render_cfg.height / source.height());
    let width = (source.width() * scale).ceil().max(1.0) as u32;
    let height = (source.height() * scale).ceil().max(1.0) as u32;
    let mut pixmap = resvg::tiny_skia::Pixmap::new(width, height)
        .ok_or_else(|| anyhow::anyhow!("Failed to allocate pixmap"))?;

    let mut pixmap_mut = pixmap.as_mut();
    resvg::render(
        &tree,
        resvg::tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap_mut,
    );
    pixmap.save_png(output)?;
    Ok(())
}

#[cfg(not(feature = "png"))]
pub fn write_output_png(_svg: &str, _output: &Path, _render_cfg: &RenderConfig) -> Result<()> {
    Err(anyhow::anyhow!("PNG output requires the `png` feature"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Constants, Group, Node};
    use crate::layout::compute_layout;

    #[derive(Debug, PartialEq)]
    enum Shape {
        Circle(String, i64),
        Line(String),
        Arc(String),
        Group(String),
        End,
    }

    #[derive(Default)]
    struct Recorder {
        shapes: Vec<Shape>,
    }

    impl DrawingSink for Recorder {
        fn begin_group(&mut self, id: &str) {
            self.shapes.push(Shape::Group(id.to_string()));
        }
        fn end_group(&mut self) {
            self.shapes.push(Shape::End);
        }
        fn circle(&mut self, _center: (i64, i64), radius: i64, attrs: &ShapeAttrs) {
            self.shapes.push(Shape::Circle(attrs.id.clone(), radius));
        }
        fn line(&mut self, _from: (i64, i64), _to: (i64, i64), attrs: &ShapeAttrs) {
            self.shapes.push(Shape::Line(attrs.id.clone()));
        }
        fn arc(&mut self, _arc: &ArcSegment, attrs: &ShapeAttrs) {
            self.shapes.push(Shape::Arc(attrs.id.clone()));
        }
    }

    fn add<'a>(
        tree: &'a mut Tree,
        skill: u64,
        group: u64,
        orbit: usize,
        index: u32,
        out: &[u64],
    ) -> &'a mut Node {
        tree.nodes.entry(skill.to_string()).or_insert(Node {
            skill,
            group,
            orbit,
            orbit_index: index,
            out: out.iter().map(|id| id.to_string()).collect(),
            ..Node::default()
        })
    }

    fn sample() -> Tree {
        let mut tree = Tree {
            constants: Constants {
                orbit_radii: vec![0.0, 82.0],
                skills_per_orbit: vec![1, 6],
            },
            ..Tree::default()
        };
        tree.groups.insert(
            "1".to_string(),
            Group {
                orbits: vec![0, 1],
                ..Group::default()
            },
        );
        tree.groups.insert(
            "2".to_string(),
            Group {
                x: 500.0,
                ..Group::default()
            },
        );
        add(&mut tree, 100, 1, 0, 0, &[20]).is_keystone = true;
        add(&mut tree, 20, 2, 0, 0, &[]).is_notable = true;
        add(&mut tree, 3, 1, 1, 0, &[4]);
        add(&mut tree, 4, 1, 1, 1, &[]);
        let chooser = add(&mut tree, 5, 1, 1, 2, &[3]);
        chooser.granted_passive_points = 2;
        add(&mut tree, 6, 0, 0, 0, &[3]).class_start_index = Some(1);
        add(&mut tree, 7, 1, 1, 3, &[999]);
        tree
    }

    #[test]
    fn walks_connections_then_nodes_in_id_order() {
        let tree = sample();
        let config = Config::default();
        let layout = compute_layout(&tree, &config.layout);
        let mut recorder = Recorder::default();
        let summary = render_tree(&layout, &config, &mut recorder);
        assert_eq!(
            recorder.shapes,
            vec![
                Shape::Group("connections".to_string()),
                Shape::Arc("c-3-4".to_string()),
                Shape::Line("c-100-20".to_string()),
                Shape::End,
                Shape::Group("nodes".to_string()),
                Shape::Circle("n-3".to_string(), 30),
                Shape::Circle("n-4".to_string(), 30),
                Shape::Circle("n-5".to_string(), 30),
                Shape::Circle("n-7".to_string(), 30),
                Shape::Circle("n-20".to_string(), 50),
                Shape::Circle("n-100".to_string(), 80),
                Shape::End,
            ]
        );
        assert_eq!(summary.connections, 2);
        assert_eq!(summary.nodes, 6);
        assert_eq!(summary.skipped, 0);
    }

    #[test]
    fn orbit_rings_are_optional() {
        let tree = sample();
        let mut config = Config::default();
        config.render.show_orbits = true;
        let layout = compute_layout(&tree, &config.layout);
        let mut recorder = Recorder::default();
        let summary = render_tree(&layout, &config, &mut recorder);
        assert_eq!(summary.orbits, 1);
        assert_eq!(recorder.shapes[0], Shape::Group("orbits".to_string()));
        assert_eq!(recorder.shapes[1], Shape::Circle("g-1-1".to_string(), 82));
    }

    #[test]
    fn keystone_and_notable_scenario() {
        let tree = sample();
        let config = Config::default();
        let svg = render_svg(&compute_layout(&tree, &config.layout), &config);
        assert!(svg.contains("<line x1=\"0\" y1=\"0\" x2=\"500\" y2=\"0\" id=\"c-100-20\"/>"));
        assert!(svg.contains("<circle cx=\"0\" cy=\"0\" r=\"80\" id=\"n-100\" class=\"keystone\"/>"));
        assert!(svg.contains("<circle cx=\"500\" cy=\"0\" r=\"50\" id=\"n-20\" class=\"isolated\"/>"));
        assert!(svg.contains("viewBox=\"-200 -282 900 564\""));
    }
}
