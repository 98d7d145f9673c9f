//! Interactive entry point: parse options, set up tracing, run the loop.

use anyhow::Context;
use argh::FromArgs;
use tracing_subscriber::EnvFilter;

use minish::{Interpreter, ShellConfig};

/// A minimal interactive command interpreter.
#[derive(FromArgs, Debug)]
struct Options {
    /// prompt literal written before each command
    #[argh(option, default = "minish::config::DEFAULT_PROMPT.to_string()")]
    prompt: String,

    /// end the session when a line or argument limit is exceeded
    #[argh(switch)]
    strict_limits: bool,

    /// log filter directive, e.g. "debug" (RUST_LOG overrides)
    #[argh(option, default = "String::from(\"warn\")")]
    log: String,
}

fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    // Logs go to stderr so the prompt stream stays clean.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let options: Options = argh::from_env();
    init_tracing(&options.log);

    let config = ShellConfig {
        prompt: options.prompt,
        strict_limits: options.strict_limits,
    };
    Interpreter::new(config)
        .run()
        .context("session ended on a fatal error")?;
    Ok(())
}
