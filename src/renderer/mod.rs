//! Renderer — the deterministic SVG serializer.
//!
//! Takes an `SvgDocument` (in-memory, from the engine) and produces SVG
//! text. The renderer is pure and stateless: the same document always
//! produces the same bytes. It knows nothing about grids or agents.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use quick_xml::events::{BytesCData, BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

use crate::types::{CircleShape, Length, RectShape, Shape, SvgDocument};

const SVG_NS: &str = "http://www.w3.org/2000/svg";
const XLINK_NS: &str = "http://www.w3.org/1999/xlink";
const EVENTS_NS: &str = "http://www.w3.org/2001/xml-events";

pub struct Renderer;

impl Renderer {
    /// Serialize a document. `pretty` indents nested elements by two spaces;
    /// otherwise elements are emitted without separating whitespace.
    pub fn render(doc: &SvgDocument, pretty: bool) -> Result<String> {
        let mut writer = if pretty {
            Writer::new_with_indent(Vec::new(), b' ', 2)
        } else {
            Writer::new(Vec::new())
        };

        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("utf-8"), None)))?;

        let height = doc.height.to_string();
        let width = doc.width.to_string();
        let svg = BytesStart::new("svg").with_attributes([
            ("baseProfile", "full"),
            ("height", height.as_str()),
            ("version", "1.1"),
            ("width", width.as_str()),
            ("xmlns", SVG_NS),
            ("xmlns:ev", EVENTS_NS),
            ("xmlns:xlink", XLINK_NS),
        ]);
        writer.write_event(Event::Start(svg))?;

        writer.write_event(Event::Start(BytesStart::new("defs")))?;
        writer.write_event(Event::Start(
            BytesStart::new("style").with_attributes([("type", "text/css")]),
        ))?;
        for section in cdata_sections(&doc.css()) {
            writer.write_event(Event::CData(BytesCData::new(section)))?;
        }
        writer.write_event(Event::End(BytesEnd::new("style")))?;
        writer.write_event(Event::End(BytesEnd::new("defs")))?;

        for shape in &doc.shapes {
            let (name, attrs) = match shape {
                Shape::Rect(r) => ("rect", rect_attrs(r)),
                Shape::Circle(c) => ("circle", circle_attrs(c)),
            };
            writer
                .create_element(name)
                .with_attributes(attrs.iter().map(|(k, v)| (*k, v.as_str())))
                .write_empty()?;
        }

        writer.write_event(Event::End(BytesEnd::new("svg")))?;

        let mut text = String::from_utf8(writer.into_inner()).context("SVG output is not UTF-8")?;
        text.push('\n');
        Ok(text)
    }

    /// Render and write to `path`.
    pub fn save(doc: &SvgDocument, path: &Path, pretty: bool) -> Result<()> {
        let text = Self::render(doc, pretty)?;
        fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
    }
}

/// Split CSS so no section contains the CDATA terminator `]]>`; each split
/// point leaves `]]` closing one section and `>` opening the next.
fn cdata_sections(text: &str) -> Vec<&str> {
    let mut sections = Vec::new();
    let mut rest = text;
    while let Some(i) = rest.find("]]>") {
        sections.push(&rest[..i + 2]);
        rest = &rest[i + 2..];
    }
    sections.push(rest);
    sections
}

// ---------------------------------------------------------------------------
// Attributes
// ---------------------------------------------------------------------------

type Attrs = Vec<(&'static str, String)>;

fn push_class(attrs: &mut Attrs, class: &Option<String>) {
    if let Some(class) = class {
        attrs.push(("class", class.clone()));
    }
}

fn push_len(attrs: &mut Attrs, name: &'static str, len: Option<Length>) {
    if let Some(len) = len {
        attrs.push((name, len.to_string()));
    }
}

/// Attributes are emitted alphabetically, matching common SVG writers.
fn rect_attrs(r: &RectShape) -> Attrs {
    let mut attrs = Vec::new();
    push_class(&mut attrs, &r.class);
    push_len(&mut attrs, "height", Some(r.height));
    push_len(&mut attrs, "width", Some(r.width));
    push_len(&mut attrs, "x", r.x);
    push_len(&mut attrs, "y", r.y);
    attrs
}

fn circle_attrs(c: &CircleShape) -> Attrs {
    let mut attrs = Vec::new();
    push_class(&mut attrs, &c.class);
    push_len(&mut attrs, "cx", Some(c.cx));
    push_len(&mut attrs, "cy", Some(c.cy));
    push_len(&mut attrs, "r", Some(c.r));
    attrs
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Engine;

    #[test]
    fn test_compact_single_cell() {
        let doc = Engine::compose(1, None, None, "").unwrap();
        let svg = Renderer::render(&doc, false).unwrap();
        assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"utf-8\"?>"));
        assert!(svg.contains("<svg baseProfile=\"full\" height=\"1.05cm\""));
        assert!(svg.contains("width=\"1.05cm\""));
        assert!(svg.contains("<rect class=\"background\" height=\"100%\" width=\"100%\"/>"));
        assert!(svg.contains("<rect height=\"0.9cm\" width=\"0.9cm\" x=\"0.1cm\" y=\"0.1cm\"/>"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_style_lives_in_defs() {
        let doc = Engine::compose(2, None, None, ".extra { fill: red; }").unwrap();
        let svg = Renderer::render(&doc, false).unwrap();
        let defs = svg.find("<defs><style type=\"text/css\"><![CDATA[").unwrap();
        let extra = svg.find(".extra { fill: red; }").unwrap();
        let first_rect = svg.find("<rect").unwrap();
        assert!(defs < extra && extra < first_rect);
    }

    #[test]
    fn test_pretty_indents() {
        let doc = Engine::compose(1, None, None, "").unwrap();
        let svg = Renderer::render(&doc, true).unwrap();
        assert!(svg.lines().any(|l| l == "  <defs>"));
        assert!(svg.lines().any(|l| l.starts_with("  <rect class=\"background\"")));
    }

    #[test]
    fn test_class_attribute_escaped() {
        let classify = |_: usize, _: usize| Some("a\"b<c");
        let doc = Engine::compose(1, Some(&classify), None, "").unwrap();
        let svg = Renderer::render(&doc, false).unwrap();
        assert!(svg.contains("class=\"a&quot;b&lt;c\""));
    }

    #[test]
    fn test_cdata_terminator_split() {
        assert_eq!(cdata_sections("a ]]> b"), vec!["a ]]", "> b"]);
        assert_eq!(cdata_sections("plain"), vec!["plain"]);

        let doc = Engine::compose(1, None, None, "/* ]]> */").unwrap();
        let svg = Renderer::render(&doc, false).unwrap();
        assert!(svg.contains("/* ]]]]><![CDATA[> */"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let doc = Engine::compose(3, None, None, "").unwrap();
        assert_eq!(
            Renderer::render(&doc, true).unwrap(),
            Renderer::render(&doc, true).unwrap()
        );
    }
}
