use crate::layout::Bounds;
use crate::policy::{ArcSegment, ShapeAttrs};
use crate::render::DrawingSink;

/// SVG markup writer. Shapes are written as they arrive, one per line.
pub struct SvgDocument {
    out: String,
    open_groups: usize,
}

impl SvgDocument {
    pub fn new(bounds: &Bounds, stylesheet: Option<&str>) -> Self {
        let mut out = String::new();
        out.push_str("<?xml version=\"1.0\"?>\n");
        out.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" viewBox=\"{}\">\n",
            bounds.view_box()
        ));
        if let Some(css) = stylesheet {
            out.push_str("<defs>\n<style type=\"text/css\"><![CDATA[\n");
            out.push_str(css);
            out.push_str("]]></style>\n</defs>\n");
        }
        Self {
            out,
            open_groups: 0,
        }
    }

    /// Closes any group left open and the root element.
    pub fn finish(mut self) -> String {
        while self.open_groups > 0 {
            self.end_group();
        }
        self.out.push_str("</svg>\n");
        self.out
    }
}

impl DrawingSink for SvgDocument {
    fn begin_group(&mut self, id: &str) {
        self.out.push_str(&format!("<g id=\"{}\">\n", escape_xml(id)));
        self.open_groups += 1;
    }

    fn end_group(&mut self) {
        if self.open_groups == 0 {
            return;
        }
        self.out.push_str("</g>\n");
        self.open_groups -= 1;
    }

    fn circle(&mut self, center: (i64, i64), radius: i64, attrs: &ShapeAttrs) {
        self.out.push_str(&format!(
            "<circle cx=\"{}\" cy=\"{}\" r=\"{}\"{}/>\n",
            center.0,
            center.1,
            radius,
            attr_string(attrs)
        ));
    }

    fn line(&mut self, from: (i64, i64), to: (i64, i64), attrs: &ShapeAttrs) {
        self.out.push_str(&format!(
            "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\"{}/>\n",
            from.0,
            from.1,
            to.0,
            to.1,
            attr_string(attrs)
        ));
    }

    fn arc(&mut self, arc: &ArcSegment, attrs: &ShapeAttrs) {
        self.out.push_str(&format!(
            "<path d=\"M{},{} A{},{} {} {} {} {},{}\"{}/>\n",
            arc.from.0,
            arc.from.1,
            arc.radius,
            arc.radius,
            arc.x_axis_rotation,
            u8::from(arc.large_arc),
            u8::from(arc.sweep),
            arc.to.0,
            arc.to.1,
            attr_string(attrs)
        ));
    }
}

fn attr_string(attrs: &ShapeAttrs) -> String {
    let mut out = String::new();
    if !attrs.id.is_empty() {
        out.push_str(&format!(" id=\"{}\"", escape_xml(&attrs.id)));
    }
    if !attrs.classes.is_empty() {
        out.push_str(&format!(
            " class=\"{}\"",
            escape_xml(&attrs.classes.join(" "))
        ));
    }
    if !attrs.extras.is_empty() {
        out.push_str(&format!(
            " data-extras=\"{}\"",
            escape_xml(&attrs.extras.join(","))
        ));
    }
    out
}

fn escape_xml(input: &str) -> String {
    input
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
