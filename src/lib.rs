//! A tiny interactive command interpreter.
//!
//! This crate provides the building blocks of a read-tokenize-execute loop:
//! a growth-capped line reader, a whitespace tokenizer producing a borrowed
//! argument vector, and a launcher that spawns the named program and blocks
//! until it reaches a terminal state. It is intentionally small and easy to
//! read, suitable for coursework and experiments with process management.
//!
//! The main entry point is [`Interpreter`], which drives the prompt loop over
//! standard input and output. The public modules [`reader`], [`lexer`] and
//! [`executor`] expose the individual pipeline stages for reuse and testing.
//!
//! Pipelines, redirection, quoting, variable expansion, builtins and job
//! control are deliberately out of scope.

pub mod config;
pub mod error;
pub mod executor;
mod interpreter;
pub mod lexer;
pub mod reader;

pub use config::ShellConfig;
pub use error::ShellError;
/// Just a convenient re-export of the interactive session loop.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;
