//! Source scene types — the human-authored JSON format.
//!
//! A source names the board size, an optional declarative terrain map, an
//! optional agent route and any extra CSS. The engine composes it into an
//! `SvgDocument`.

use serde::{Deserialize, Serialize};

use super::board::Classifier;
use super::coords::Move;
use super::path::DEFAULT_START;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridworldSource {
    #[serde(default = "default_size")]
    pub size: usize,
    #[serde(default = "default_start")]
    pub init_pos: (i32, i32),
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub moves: Option<Vec<Move>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terrain: Option<TerrainMap>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_css: String,
}

fn default_size() -> usize {
    10
}

fn default_start() -> (i32, i32) {
    DEFAULT_START
}

impl Default for GridworldSource {
    fn default() -> Self {
        Self {
            size: default_size(),
            init_pos: default_start(),
            moves: None,
            terrain: None,
            extra_css: String::new(),
        }
    }
}

impl GridworldSource {
    /// The 8×8 sample world: a water pond in the middle, recharge stations
    /// in the corners, dry strips along the top and bottom edges and lava
    /// scattered near the sides. The agent walks E N N N N W W W from (2, 3).
    pub fn demo() -> Self {
        use AxisMatch::{List, Range};
        use Move::*;

        let region = |class: &str, x: AxisMatch, y: AxisMatch| Region {
            class: class.to_string(),
            x: Some(x),
            y: Some(y),
        };

        Self {
            size: 8,
            init_pos: DEFAULT_START,
            moves: Some(vec![E, N, N, N, N, W, W, W]),
            terrain: Some(TerrainMap {
                regions: vec![
                    region("water", Range { from: 3, to: 4 }, Range { from: 2, to: 5 }),
                    region("recharge", List(vec![0, 7]), List(vec![0, 7])),
                    region("dry", Range { from: 2, to: 5 }, List(vec![0, 7])),
                    region("lava", List(vec![1, 6]), List(vec![0, 1, 4, 5])),
                    region("lava", List(vec![0, 7]), List(vec![1, 4, 5])),
                ],
                default: Some("normal".to_string()),
            }),
            extra_css: String::new(),
        }
    }
}

// ---------------------------------------------------------------------------
// Declarative terrain
// ---------------------------------------------------------------------------

/// Ordered terrain regions; the first region containing a cell wins.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TerrainMap {
    #[serde(default)]
    pub regions: Vec<Region>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub class: String,
    /// Absent means every column.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<AxisMatch>,
    /// Absent means every row.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<AxisMatch>,
}

impl Region {
    pub fn contains(&self, x: usize, y: usize) -> bool {
        let hit = |axis: &Option<AxisMatch>, v| axis.as_ref().is_none_or(|m| m.matches(v));
        hit(&self.x, x) && hit(&self.y, y)
    }
}

/// Accepts either `[0, 7]` (explicit coordinates) or `{"from": 2, "to": 5}`
/// (inclusive range).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AxisMatch {
    List(Vec<usize>),
    Range { from: usize, to: usize },
}

impl AxisMatch {
    pub fn matches(&self, v: usize) -> bool {
        match self {
            AxisMatch::List(values) => values.contains(&v),
            AxisMatch::Range { from, to } => (*from..=*to).contains(&v),
        }
    }
}

impl Classifier for TerrainMap {
    fn classify(&self, x: usize, y: usize) -> Option<String> {
        self.regions
            .iter()
            .find(|r| r.contains(x, y))
            .map(|r| r.class.clone())
            .or_else(|| self.default.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-written reference for the demo terrain.
    fn demo_reference(x: usize, y: usize) -> &'static str {
        if (3..=4).contains(&x) && (2..=5).contains(&y) {
            "water"
        } else if [0, 7].contains(&x) && [0, 7].contains(&y) {
            "recharge"
        } else if (2..=5).contains(&x) && [0, 7].contains(&y) {
            "dry"
        } else if [1, 6].contains(&x) && ([4, 5].contains(&y) || y <= 1) {
            "lava"
        } else if [0, 7].contains(&x) && [1, 4, 5].contains(&y) {
            "lava"
        } else {
            "normal"
        }
    }

    #[test]
    fn test_demo_terrain_matches_reference() {
        let source = GridworldSource::demo();
        let terrain = source.terrain.as_ref().unwrap();
        for x in 0..8 {
            for y in 0..8 {
                assert_eq!(
                    terrain.classify(x, y).as_deref(),
                    Some(demo_reference(x, y)),
                    "cell ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_source_defaults() {
        let source: GridworldSource = serde_json::from_str("{}").unwrap();
        assert_eq!(source, GridworldSource::default());
        assert_eq!(source.size, 10);
        assert_eq!(source.init_pos, (2, 3));
    }

    #[test]
    fn test_source_parse() {
        let json = r#"{
            "size": 3,
            "init_pos": [0, 0],
            "moves": ["E", "N"],
            "terrain": {
                "regions": [
                    { "class": "lava", "x": [0], "y": { "from": 1, "to": 2 } },
                    { "class": "water", "y": [0] }
                ]
            },
            "extra_css": ".lava { fill: red; }"
        }"#;
        let source: GridworldSource = serde_json::from_str(json).unwrap();
        assert_eq!(source.moves, Some(vec![Move::E, Move::N]));
        let terrain = source.terrain.unwrap();
        assert_eq!(terrain.classify(0, 2).as_deref(), Some("lava"));
        assert_eq!(terrain.classify(2, 0).as_deref(), Some("water"));
        assert_eq!(terrain.classify(2, 2), None);
    }

    #[test]
    fn test_unknown_move_rejected() {
        let result = serde_json::from_str::<GridworldSource>(r#"{"moves": ["NE"]}"#);
        assert!(result.is_err());
    }
}
