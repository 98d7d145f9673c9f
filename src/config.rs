//! Runtime configuration for a session.

/// Default prompt literal written before every read.
pub const DEFAULT_PROMPT: &str = "minish> ";

/// Knobs for one interactive session.
///
/// Note: fields are public for simplicity to keep the crate small.
#[derive(Debug, Clone)]
pub struct ShellConfig {
    /// Literal written to the output stream before each line is read.
    pub prompt: String,
    /// Restore the legacy policy of ending the whole session when a line or
    /// argument limit is exceeded, instead of discarding the offending line
    /// and re-prompting.
    pub strict_limits: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: DEFAULT_PROMPT.to_string(),
            strict_limits: false,
        }
    }
}
