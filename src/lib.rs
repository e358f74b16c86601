//! ass-draw - parser and serializer for ASS drawing commands
//!
//! This library handles the vector-drawing mini-language embedded in ASS
//! subtitle `\p` override tags: `m`/`n` moves, `l` lines, `b` cubic Beziers
//! and `s`/`p`/`c` uniform cubic b-splines with integer coordinates. It
//! converts between the textual form and a typed command list, in both
//! directions. Tag extraction and general override-tag parsing are up to the
//! caller; this crate only sees the body of a drawing tag.
//!
//! # Example
//!
//! ```rust
//! use ass_draw::{parse_draw_commands, serialize_draw_commands, DrawCommand};
//!
//! let commands = parse_draw_commands("m 0 0 l 10 0 10 10 0 10 c").unwrap();
//! assert_eq!(commands[0], DrawCommand::Move { x: 0, y: 0 });
//!
//! let text = serialize_draw_commands(&commands).unwrap();
//! assert_eq!(text, "m 0 0 l 10 0 10 10 0 10 c");
//! ```
//!
//! Command lists may also be built by hand; the serializer re-validates the
//! per-variant point arities:
//!
//! ```rust
//! use ass_draw::{serialize_draw_commands, DrawCommand, Point};
//!
//! let bad = vec![DrawCommand::Bezier {
//!     points: vec![Point::new(0, 0), Point::new(1, 1)],
//! }];
//! assert!(serialize_draw_commands(&bad).is_err());
//! ```

pub mod error;
pub mod parser;
pub mod serializer;

pub use error::ParsingError;
pub use parser::{parse_draw_commands, DrawCommand, Point};
pub use serializer::serialize_draw_commands;
