//! Whitespace tokenization into a borrowed argument vector.
//!
//! Tokens are views into the line they were split from, so the argument
//! vector can never outlive its buffer; both are dropped together at the end
//! of each loop iteration.

use crate::error::ShellError;

/// Initial capacity of the token list, in slots.
pub const ARGV_MIN: usize = 64;
/// Hard cap on the number of tokens in one command.
pub const ARGV_MAX: usize = 1024;

/// The exact delimiter set. A maximal run of anything else is one token.
const DELIMITERS: [char; 4] = [' ', '\t', '\n', '\r'];

/// An ordered list of token views over one input line, shaped for a spawn
/// call: index 0 names the program, the rest are its arguments. The trailing
/// NUL sentinel required by the OS spawn contract is appended by
/// `std::process::Command` at the boundary and is not modeled here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgVec<'a> {
    tokens: Vec<&'a str>,
}

impl<'a> ArgVec<'a> {
    /// The program name, or `None` when the line held no token at all.
    pub fn program(&self) -> Option<&'a str> {
        self.tokens.first().copied()
    }

    /// Everything after the program name.
    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// All tokens, program name included.
    pub fn tokens(&self) -> &[&'a str] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }
}

/// Split `line` on the delimiter set into an [`ArgVec`].
///
/// Adjacent delimiters collapse into one boundary; empty tokens are never
/// produced, so a delimiter-only line yields an empty vector. The token list
/// starts at [`ARGV_MIN`] slots and doubles up to [`ARGV_MAX`]; one token
/// past the cap yields [`ShellError::TooManyArguments`].
pub fn tokenize(line: &str) -> Result<ArgVec<'_>, ShellError> {
    let mut tokens: Vec<&str> = Vec::with_capacity(ARGV_MIN);
    for token in line.split(DELIMITERS).filter(|t| !t.is_empty()) {
        if tokens.len() == ARGV_MAX {
            return Err(ShellError::TooManyArguments { limit: ARGV_MAX });
        }
        ensure_room(&mut tokens);
        tokens.push(token);
    }
    Ok(ArgVec { tokens })
}

/// Double the token list capacity when the next push would exceed it.
fn ensure_room(tokens: &mut Vec<&str>) {
    if tokens.len() == tokens.capacity() {
        tokens.reserve_exact(tokens.capacity());
    }
}
