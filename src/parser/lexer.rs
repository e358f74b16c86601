//! Lexer for ASS drawing command streams using logos

use logos::Logos;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Logos, Debug, Clone, PartialEq, Eq)]
#[logos(skip r"[ \t\n\r]+")]
pub enum Token {
    // Drawing opcodes
    #[token("m")]
    Move,
    #[token("n")]
    MoveNoClose,
    #[token("l")]
    Line,
    #[token("b")]
    Bezier,
    #[token("s")]
    CubicBSpline,
    #[token("p")]
    ExtendBSpline,
    #[token("c")]
    CloseBSpline,

    // Signed or unsigned decimal integer. Fractional text never forms a
    // single token: the dot lexes as Unknown and the parser rejects it.
    #[regex(r"[+-]?[0-9]+", |lex| lex.slice().parse::<i32>().ok())]
    Integer(i32),

    // Catch-all so stray characters (unknown opcodes, dots, ...) reach the
    // parser as tokens and get reported as syntax errors with a span.
    #[regex(r"[^ \t\n\r]", |lex| lex.slice().to_string(), priority = 0)]
    Unknown(String),
}

/// Lex input string into tokens with spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input).spanned().map(move |(tok, span)| {
        // Lexing can only fail on integer overflow; surface the slice as an
        // Unknown token so the parser reports it instead of dropping it.
        let tok = tok.unwrap_or_else(|()| Token::Unknown(input[span.clone()].to_string()));
        (tok, span)
    })
}
