//! Parser for ASS drawing command streams

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse_draw_commands;
