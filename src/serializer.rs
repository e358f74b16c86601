//! Serializer producing canonical drawing command text
//!
//! The inverse of the parser: walks a command list and emits the opcode plus
//! flattened coordinates for each command, all joined by single spaces.

use crate::error::ParsingError;
use crate::parser::ast::{DrawCommand, Point};

/// Serialize a command list to canonical text.
///
/// The input need not come from the parser; lists built or edited elsewhere
/// are re-validated against the per-variant arity invariants here. An empty
/// list yields an empty string.
pub fn serialize_draw_commands(commands: &[DrawCommand]) -> Result<String, ParsingError> {
    let mut chunks = Vec::with_capacity(commands.len());
    for command in commands {
        chunks.push(serialize_command(command)?);
    }
    Ok(chunks.join(" "))
}

fn serialize_command(command: &DrawCommand) -> Result<String, ParsingError> {
    match command {
        DrawCommand::Move { x, y } => Ok(format!("m {} {}", x, y)),
        DrawCommand::MoveNoClose { x, y } => Ok(format!("n {} {}", x, y)),
        DrawCommand::Line { points } => {
            if points.is_empty() {
                return Err(ParsingError::TooFewPoints {
                    shape: "line",
                    count: 0,
                });
            }
            Ok(join_points("l", points))
        }
        DrawCommand::Bezier { points } => {
            if points.len() < 3 {
                return Err(ParsingError::TooFewPoints {
                    shape: "Bezier path",
                    count: points.len(),
                });
            }
            if points.len() > 3 {
                return Err(ParsingError::TooManyPoints {
                    shape: "Bezier path",
                    count: points.len(),
                });
            }
            Ok(join_points("b", points))
        }
        DrawCommand::CubicBSpline { points } => {
            // A parse can hand over two points; the spline minimum lives here
            if points.len() < 3 {
                return Err(ParsingError::TooFewPoints {
                    shape: "cubic b-spline",
                    count: points.len(),
                });
            }
            Ok(join_points("s", points))
        }
        DrawCommand::ExtendBSpline { points } => {
            if points.is_empty() {
                return Err(ParsingError::TooFewPoints {
                    shape: "extended b-spline",
                    count: 0,
                });
            }
            Ok(join_points("p", points))
        }
        DrawCommand::CloseBSpline => Ok("c".to_string()),
    }
}

fn join_points(opcode: &str, points: &[Point]) -> String {
    let mut out = String::from(opcode);
    for point in points {
        out.push_str(&format!(" {} {}", point.x, point.y));
    }
    out
}
