//! Error type for parsing and serialization

use ariadne::{Color, Label, Report, ReportKind, Source};
use thiserror::Error;

use crate::parser::lexer::Token;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Parse error at {span:?}: {message}")]
    Syntax {
        span: Span,
        message: String,
        expected: Vec<String>,
    },

    #[error("Too few points in {shape} (got {count})")]
    TooFewPoints { shape: &'static str, count: usize },

    #[error("Too many points in {shape} (got {count})")]
    TooManyPoints { shape: &'static str, count: usize },
}

impl ParsingError {
    /// Format the error with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        match self {
            ParsingError::Syntax {
                span,
                message,
                expected,
            } => {
                let expected_str = if expected.is_empty() {
                    String::new()
                } else {
                    format!("\nExpected: {}", expected.join(", "))
                };

                let mut buf = Vec::new();
                Report::build(ReportKind::Error, filename, span.start)
                    .with_message(message)
                    .with_label(
                        Label::new((filename, span.clone()))
                            .with_message(format!("{}{}", message, expected_str))
                            .with_color(Color::Red),
                    )
                    .finish()
                    .write((filename, Source::from(source)), &mut buf)
                    .unwrap();
                String::from_utf8(buf).unwrap()
            }
            // Arity errors have no source location to point at
            other => other.to_string(),
        }
    }
}

impl<'a> From<chumsky::error::Rich<'a, Token>> for ParsingError {
    fn from(err: chumsky::error::Rich<'a, Token>) -> Self {
        use chumsky::error::RichReason;

        let message = match err.reason() {
            RichReason::ExpectedFound { found, .. } => match found {
                Some(tok) => format!("Unexpected {}", format_token(tok)),
                None => "Unexpected end of input".to_string(),
            },
            RichReason::Custom(msg) => msg.to_string(),
        };

        let expected: Vec<String> = err
            .expected()
            .filter_map(|e| match e {
                chumsky::error::RichPattern::Token(tok) => Some(format_token(tok)),
                chumsky::error::RichPattern::Label(label) => Some(label.to_string()),
                chumsky::error::RichPattern::EndOfInput => Some("end of input".to_string()),
                chumsky::error::RichPattern::Identifier(s) => Some(format!("'{}'", s)),
                chumsky::error::RichPattern::Any => Some("any token".to_string()),
                chumsky::error::RichPattern::SomethingElse => None,
            })
            .collect();

        ParsingError::Syntax {
            span: err.span().into_range(),
            message,
            expected,
        }
    }
}

/// Format a token for human-readable error messages
fn format_token(tok: &Token) -> String {
    match tok {
        Token::Move => "opcode 'm'".to_string(),
        Token::MoveNoClose => "opcode 'n'".to_string(),
        Token::Line => "opcode 'l'".to_string(),
        Token::Bezier => "opcode 'b'".to_string(),
        Token::CubicBSpline => "opcode 's'".to_string(),
        Token::ExtendBSpline => "opcode 'p'".to_string(),
        Token::CloseBSpline => "opcode 'c'".to_string(),
        Token::Integer(n) => format!("number {}", n),
        Token::Unknown(s) => format!("'{}'", s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_syntax_error_display() {
        let err = ParsingError::Syntax {
            span: 0..1,
            message: "Unexpected 'q'".to_string(),
            expected: vec!["opcode 'm'".to_string()],
        };
        let msg = err.to_string();
        assert!(msg.contains("Parse error"));
        assert!(msg.contains("Unexpected 'q'"));
    }

    #[test]
    fn test_arity_error_display() {
        let err = ParsingError::TooFewPoints {
            shape: "Bezier path",
            count: 2,
        };
        assert_eq!(err.to_string(), "Too few points in Bezier path (got 2)");

        let err = ParsingError::TooManyPoints {
            shape: "Bezier path",
            count: 4,
        };
        assert_eq!(err.to_string(), "Too many points in Bezier path (got 4)");
    }

    #[test]
    fn test_format_with_source_context() {
        let source = "q 1 2";
        let err = crate::parse_draw_commands(source).unwrap_err();
        let report = err.format(source, "<draw>");
        assert!(report.contains("<draw>"));
    }
}
