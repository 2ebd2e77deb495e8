// crates/csv2tsv-core/src/quoting.rs
//
// Strict quote check over LF-normalized CSV bytes.
//
// The csv reader accepts broken quoting silently (an unterminated quote just
// runs to end of input). This pass rejects it up front so malformed input is
// a parse error instead of a silently merged field.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxKind {
    /// `"` inside a field that did not start with a quote.
    #[error("bare \" in non-quoted field")]
    BareQuote,
    /// Closing quote followed by something other than `,` or newline.
    #[error("extraneous or missing \" in quoted field")]
    ExtraneousQuote,
    /// Quoted field still open at end of input.
    #[error("quoted field is never terminated")]
    UnterminatedQuote,
    /// Record the csv reader itself rejected.
    #[error("malformed record")]
    Record,
}

/// Position is 1-based; column counts bytes within the line, 0 when unknown.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}{}: {kind}{}", column_suffix(.column), detail_suffix(.detail))]
pub struct SyntaxError {
    pub line: u64,
    pub column: u64,
    pub kind: SyntaxKind,
    pub detail: Option<String>,
}

fn column_suffix(column: &u64) -> String {
    match column {
        0 => String::new(),
        c => format!(", column {c}"),
    }
}

fn detail_suffix(detail: &Option<String>) -> String {
    detail.as_deref().map(|d| format!(" ({d})")).unwrap_or_default()
}

impl SyntaxError {
    fn at(line: u64, column: u64, kind: SyntaxKind) -> Self {
        SyntaxError {
            line,
            column,
            kind,
            detail: None,
        }
    }

    pub(crate) fn record(line: u64, detail: String) -> Self {
        SyntaxError {
            line,
            column: 0,
            kind: SyntaxKind::Record,
            detail: Some(detail),
        }
    }
}

#[derive(Clone, Copy)]
enum State {
    FieldStart,
    Unquoted,
    Quoted,
    QuoteInQuoted,
}

pub fn check_quoting(input: &[u8]) -> Result<(), SyntaxError> {
    let mut state = State::FieldStart;
    let (mut line, mut column) = (1u64, 0u64);
    let mut opened_at = (1u64, 1u64);

    for &b in input {
        column += 1;
        state = match (state, b) {
            (State::FieldStart, b'"') => {
                opened_at = (line, column);
                State::Quoted
            }
            (State::FieldStart, b',') => State::FieldStart,
            (State::FieldStart, b'\n') => State::FieldStart,
            (State::FieldStart, _) => State::Unquoted,

            (State::Unquoted, b'"') => {
                return Err(SyntaxError::at(line, column, SyntaxKind::BareQuote));
            }
            (State::Unquoted, b',') | (State::Unquoted, b'\n') => State::FieldStart,
            (State::Unquoted, _) => State::Unquoted,

            (State::Quoted, b'"') => State::QuoteInQuoted,
            (State::Quoted, _) => State::Quoted,

            // "" inside a quoted field is an escaped quote
            (State::QuoteInQuoted, b'"') => State::Quoted,
            (State::QuoteInQuoted, b',') | (State::QuoteInQuoted, b'\n') => State::FieldStart,
            (State::QuoteInQuoted, _) => {
                return Err(SyntaxError::at(line, column, SyntaxKind::ExtraneousQuote));
            }
        };
        if b == b'\n' {
            line += 1;
            column = 0;
        }
    }

    if let State::Quoted = state {
        return Err(SyntaxError::at(
            opened_at.0,
            opened_at.1,
            SyntaxKind::UnterminatedQuote,
        ));
    }
    Ok(())
}
