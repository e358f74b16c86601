//! Typed command list for ASS drawing streams

use serde::{Deserialize, Serialize};

/// Integer control point in the drawing coordinate space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A single drawing command.
///
/// The serde representation uses the wire discriminants of the textual
/// format's ecosystem (`move`, `cubic-bspline`, ...), so externally supplied
/// data with an unknown or missing `type` field is rejected at
/// deserialization time. Internally constructed values always carry a valid
/// discriminant by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum DrawCommand {
    /// `m x y` - close the current contour and move the cursor
    Move { x: i32, y: i32 },
    /// `n x y` - move the cursor without closing the contour
    MoveNoClose { x: i32, y: i32 },
    /// `l x1 y1 ...` - straight segments through one or more points
    Line { points: Vec<Point> },
    /// `b x1 y1 x2 y2 x3 y3` - cubic Bezier with exactly three control points
    Bezier { points: Vec<Point> },
    /// `s x1 y1 x2 y2 x3 y3 ...` - uniform cubic b-spline, three or more points
    #[serde(rename = "cubic-bspline")]
    CubicBSpline { points: Vec<Point> },
    /// `p x1 y1 ...` - extend the previous b-spline point by point
    #[serde(rename = "extend-bspline")]
    ExtendBSpline { points: Vec<Point> },
    /// `c` - close the b-spline
    #[serde(rename = "close-bspline")]
    CloseBSpline,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_discriminants() {
        let json = serde_json::to_string(&DrawCommand::Move { x: 1, y: 2 }).unwrap();
        assert_eq!(json, r#"{"type":"move","x":1,"y":2}"#);

        let json = serde_json::to_string(&DrawCommand::MoveNoClose { x: 0, y: 0 }).unwrap();
        assert!(json.contains(r#""type":"move-no-close""#));

        let json = serde_json::to_string(&DrawCommand::CubicBSpline {
            points: vec![Point::new(0, 0), Point::new(1, 1), Point::new(2, 2)],
        })
        .unwrap();
        assert!(json.contains(r#""type":"cubic-bspline""#));

        let json = serde_json::to_string(&DrawCommand::CloseBSpline).unwrap();
        assert_eq!(json, r#"{"type":"close-bspline"}"#);
    }

    #[test]
    fn test_serde_round_trip() {
        let commands = vec![
            DrawCommand::Move { x: 0, y: 0 },
            DrawCommand::Line {
                points: vec![Point::new(10, 0), Point::new(10, 10)],
            },
            DrawCommand::ExtendBSpline {
                points: vec![Point::new(5, 5)],
            },
        ];
        let json = serde_json::to_string(&commands).unwrap();
        let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, commands);
    }
}
