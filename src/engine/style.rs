//! Typed style records and the fixed terrain vocabulary.
//!
//! Style rules are built as records and serialized to CSS in one pass, so
//! rule ordering and keyframe contents can be inspected before any text is
//! produced.

use std::fmt::Write;

// ---------------------------------------------------------------------------
// Terrain vocabulary
// ---------------------------------------------------------------------------

/// The known cell classes. Labels outside this set are still emitted as
/// class names but have no matching rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TerrainClass {
    Lava,
    Dry,
    Water,
    Recharge,
    Normal,
}

impl TerrainClass {
    pub const ALL: [TerrainClass; 5] = [
        TerrainClass::Lava,
        TerrainClass::Dry,
        TerrainClass::Water,
        TerrainClass::Recharge,
        TerrainClass::Normal,
    ];

    pub const fn css_name(self) -> &'static str {
        match self {
            TerrainClass::Lava => "lava",
            TerrainClass::Dry => "dry",
            TerrainClass::Water => "water",
            TerrainClass::Recharge => "recharge",
            TerrainClass::Normal => "normal",
        }
    }

    pub const fn fill(self) -> &'static str {
        match self {
            TerrainClass::Lava => "#ff8b8b",
            TerrainClass::Dry => "#f4a460",
            TerrainClass::Water => "#afafff",
            TerrainClass::Recharge => "#ffff00",
            TerrainClass::Normal => "white",
        }
    }

    /// Fill as RGB, for outputs that cannot take CSS color names.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            TerrainClass::Lava => (0xff, 0x8b, 0x8b),
            TerrainClass::Dry => (0xf4, 0xa4, 0x60),
            TerrainClass::Water => (0xaf, 0xaf, 0xff),
            TerrainClass::Recharge => (0xff, 0xff, 0x00),
            TerrainClass::Normal => (0xff, 0xff, 0xff),
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.css_name() == label)
    }
}

// ---------------------------------------------------------------------------
// Rule records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

impl Declaration {
    pub fn new(property: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property: property.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StyleRule {
    pub selector: String,
    pub declarations: Vec<Declaration>,
}

impl StyleRule {
    pub fn new(selector: impl Into<String>, declarations: Vec<Declaration>) -> Self {
        Self {
            selector: selector.into(),
            declarations,
        }
    }
}

/// One stop inside an `@keyframes` block, positioned in percent of the
/// animation duration.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyframeStop {
    pub percent: f64,
    pub declarations: Vec<Declaration>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct KeyframesRule {
    pub name: String,
    pub stops: Vec<KeyframeStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum StyleItem {
    Rule(StyleRule),
    Keyframes(KeyframesRule),
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleSheet {
    pub items: Vec<StyleItem>,
}

impl StyleSheet {
    pub fn push_rule(&mut self, rule: StyleRule) {
        self.items.push(StyleItem::Rule(rule));
    }

    pub fn push_keyframes(&mut self, keyframes: KeyframesRule) {
        self.items.push(StyleItem::Keyframes(keyframes));
    }

    pub fn rule(&self, selector: &str) -> Option<&StyleRule> {
        self.items.iter().find_map(|item| match item {
            StyleItem::Rule(r) if r.selector == selector => Some(r),
            _ => None,
        })
    }

    pub fn keyframes(&self, name: &str) -> Option<&KeyframesRule> {
        self.items.iter().find_map(|item| match item {
            StyleItem::Keyframes(k) if k.name == name => Some(k),
            _ => None,
        })
    }

    /// Serialize every item, in order, to CSS text.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for item in &self.items {
            match item {
                StyleItem::Rule(rule) => {
                    write_block(&mut out, &rule.selector, &rule.declarations, "")
                }
                StyleItem::Keyframes(kf) => {
                    let _ = writeln!(out, "@keyframes {} {{", kf.name);
                    for stop in &kf.stops {
                        // Shortest round-trip form: distinct stops stay distinct.
                        let selector = format!("{}%", stop.percent);
                        write_block(&mut out, &selector, &stop.declarations, "    ");
                    }
                    out.push_str("}\n");
                }
            }
        }
        out
    }
}

fn write_block(out: &mut String, selector: &str, declarations: &[Declaration], indent: &str) {
    let _ = writeln!(out, "{indent}{selector} {{");
    for d in declarations {
        let _ = writeln!(out, "{indent}    {}: {};", d.property, d.value);
    }
    let _ = writeln!(out, "{indent}}}");
}

// ---------------------------------------------------------------------------
// Base sheet
// ---------------------------------------------------------------------------

pub const BACKGROUND_CLASS: &str = "background";
pub const AGENT_CLASS: &str = "agent";
pub const MOVE_ANIMATION: &str = "move";
pub const BLINK_ANIMATION: &str = "blinker";

/// Structural rules, one rule per terrain class, the agent marker and its
/// pulsing animation. The agent binds `blinker` first and `move` second, so
/// the `move` binding wins unless extra CSS overrides it.
pub fn base_sheet() -> StyleSheet {
    fn d(property: &str, value: &str) -> Declaration {
        Declaration::new(property, value)
    }
    let mut sheet = StyleSheet::default();

    sheet.push_rule(StyleRule::new(
        format!(".{BACKGROUND_CLASS}"),
        vec![d("fill", "white")],
    ));
    sheet.push_rule(StyleRule::new(
        ".line",
        vec![d("stroke", "firebrick"), d("stroke-width", ".1mm")],
    ));
    for class in TerrainClass::ALL {
        sheet.push_rule(StyleRule::new(
            format!(".{}", class.css_name()),
            vec![d("fill", class.fill())],
        ));
    }
    sheet.push_rule(StyleRule::new(
        "rect",
        vec![d("stroke", "black"), d("stroke-width", "1")],
    ));
    sheet.push_rule(StyleRule::new(
        format!(".{AGENT_CLASS}"),
        vec![
            d("r", "10%"),
            d("fill", "black"),
            d("stroke-width", "2"),
            d("stroke", "grey"),
            d("animation", &format!("{BLINK_ANIMATION} 4s linear infinite")),
            d("animation", &format!("{MOVE_ANIMATION} 3s ease forwards")),
        ],
    ));
    sheet.push_keyframes(KeyframesRule {
        name: BLINK_ANIMATION.to_string(),
        stops: vec![KeyframeStop {
            percent: 50.0,
            declarations: vec![d("opacity", "0.5")],
        }],
    });

    sheet
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_class_has_a_rule() {
        let sheet = base_sheet();
        for class in TerrainClass::ALL {
            let rule = sheet
                .rule(&format!(".{}", class.css_name()))
                .expect("missing class rule");
            assert_eq!(rule.declarations, vec![Declaration::new("fill", class.fill())]);
        }
        assert!(sheet.rule(".background").is_some());
        assert!(sheet.rule(".agent").is_some());
    }

    #[test]
    fn test_agent_move_binding_is_last() {
        let sheet = base_sheet();
        let agent = sheet.rule(".agent").unwrap();
        let last_animation = agent
            .declarations
            .iter()
            .rev()
            .find(|d| d.property == "animation")
            .unwrap();
        assert!(last_animation.value.starts_with("move "));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(TerrainClass::from_label("water"), Some(TerrainClass::Water));
        assert_eq!(TerrainClass::from_label("swamp"), None);
        assert_eq!(TerrainClass::from_label(""), None);
    }

    #[test]
    fn test_to_css_layout() {
        let mut sheet = StyleSheet::default();
        sheet.push_rule(StyleRule::new(".lava", vec![Declaration::new("fill", "red")]));
        sheet.push_keyframes(KeyframesRule {
            name: "move".into(),
            stops: vec![KeyframeStop {
                percent: 12.5,
                declarations: vec![Declaration::new("transform", "translate(1cm, 0cm)")],
            }],
        });
        let css = sheet.to_css();
        assert_eq!(
            css,
            ".lava {\n    fill: red;\n}\n@keyframes move {\n    12.5% {\n        transform: translate(1cm, 0cm);\n    }\n}\n"
        );
    }

    #[test]
    fn test_stop_selector_keeps_full_precision() {
        let stops = (1..=3)
            .map(|i| KeyframeStop {
                percent: i as f64 * 100.0 / 3.0,
                declarations: Vec::new(),
            })
            .collect();
        let mut sheet = StyleSheet::default();
        sheet.push_keyframes(KeyframesRule { name: "move".into(), stops });
        let css = sheet.to_css();
        assert!(css.contains("    33.333333333333336% {\n"));
        assert!(css.contains("    66.66666666666667% {\n"));
        assert!(css.contains("    100% {\n"));
    }

    #[test]
    fn test_blinker_pulses_opacity() {
        let sheet = base_sheet();
        let blinker = sheet.keyframes("blinker").unwrap();
        assert_eq!(blinker.stops.len(), 1);
        assert_eq!(blinker.stops[0].percent, 50.0);
    }
}
