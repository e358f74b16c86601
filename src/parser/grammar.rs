//! Parser implementation using chumsky
//!
//! The grammar is a fixed set of combinators over the lexed token stream:
//!
//! ```text
//! draw_commands := draw_command*
//! draw_command  := move | move_no_close | line | bezier
//!                | cubic_spline | extend_spline | close_spline
//! move          := 'm' pos pos
//! move_no_close := 'n' pos pos
//! line          := 'l' (pos pos)+
//! bezier        := 'b' pos pos pos pos pos pos
//! cubic_spline  := 's' pos pos pos pos (pos pos)*
//! extend_spline := 'p' (pos pos)+
//! close_spline  := 'c'
//! pos           := integer
//! ```

use chumsky::input::{Stream, ValueInput};
use chumsky::prelude::*;

use crate::error::ParsingError;
use crate::parser::ast::{DrawCommand, Point};
use crate::parser::lexer::Token;

/// Parse a drawing command stream into a typed command list.
///
/// The whole input must match; any leftover text, unknown opcode, odd
/// coordinate count, or non-integer coordinate is a syntax error. No partial
/// result is returned.
pub fn parse_draw_commands(input: &str) -> Result<Vec<DrawCommand>, ParsingError> {
    let len = input.len();

    // Create a logos lexer and convert to token stream
    let token_iter = crate::parser::lexer::lex(input).map(|(tok, span)| (tok, span.into()));

    // Turn the token iterator into a stream that chumsky can use
    let token_stream = Stream::from_iter(token_iter)
        // Split (Token, SimpleSpan) into token and span parts
        .map((len..len).into(), |(t, s): (_, _)| (t, s));

    draw_commands_parser()
        .parse(token_stream)
        .into_result()
        .map_err(|errs| {
            // One error per call; chumsky reports the first failure position
            errs.into_iter()
                .next()
                .map(ParsingError::from)
                .unwrap_or_else(|| ParsingError::Syntax {
                    span: 0..0,
                    message: "Unknown parse failure".to_string(),
                    expected: Vec::new(),
                })
        })
}

fn draw_commands_parser<'a, I>(
) -> impl Parser<'a, I, Vec<DrawCommand>, extra::Err<Rich<'a, Token>>> + Clone
where
    I: ValueInput<'a, Token = Token, Span = SimpleSpan>,
{
    let pos = select! {
        Token::Integer(n) => n,
    };

    let point = pos.clone().then(pos.clone()).map(|(x, y)| Point::new(x, y));

    let move_command = just(Token::Move)
        .ignore_then(point.clone())
        .map(|p| DrawCommand::Move { x: p.x, y: p.y });

    let move_no_close = just(Token::MoveNoClose)
        .ignore_then(point.clone())
        .map(|p| DrawCommand::MoveNoClose { x: p.x, y: p.y });

    let line = just(Token::Line)
        .ignore_then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|points| DrawCommand::Line { points });

    // Fixed three-pair arity baked into the grammar
    let bezier = just(Token::Bezier)
        .ignore_then(point.clone().repeated().exactly(3).collect::<Vec<_>>())
        .map(|points| DrawCommand::Bezier { points });

    // The grammar admits two points here; the >= 3 minimum for a usable
    // spline is enforced by the serializer, not at parse time.
    let cubic_spline = just(Token::CubicBSpline)
        .ignore_then(point.clone().repeated().at_least(2).collect::<Vec<_>>())
        .map(|points| DrawCommand::CubicBSpline { points });

    let extend_spline = just(Token::ExtendBSpline)
        .ignore_then(point.clone().repeated().at_least(1).collect::<Vec<_>>())
        .map(|points| DrawCommand::ExtendBSpline { points });

    let close_spline = just(Token::CloseBSpline).to(DrawCommand::CloseBSpline);

    let command = choice((
        move_command,
        move_no_close,
        line,
        bezier,
        cubic_spline,
        extend_spline,
        close_spline,
    ));

    command
        .repeated()
        .collect::<Vec<_>>()
        .then_ignore(end())
}
