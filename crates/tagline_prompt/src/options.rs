//! Per-command prompt configuration.

use std::time::Duration;

/// Knobs governing one command's prompt sessions.
///
/// The defaults are deliberately finite: thirty seconds of total prompting
/// time and zero reprompts, so an unconfigured command fails fast instead
/// of holding a conversation nobody asked for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PromptOptions {
    /// Overall deadline for the whole session, measured from its start.
    /// Every reprompt wait is bounded by whatever remains of this.
    pub time: Duration,
    /// Maximum number of reprompts. Zero means a required-tag failure
    /// aborts immediately, without sending anything.
    pub limit: u32,
    /// Whether `"quoted spans"` tokenize as single tokens.
    pub quoted_string_support: bool,
    /// Whether `--name[=value]` flags are extracted from the initial
    /// message. Replies are never scanned for flags.
    pub flag_support: bool,
}

impl Default for PromptOptions {
    fn default() -> Self {
        Self {
            time: Duration::from_secs(30),
            limit: 0,
            quoted_string_support: false,
            flag_support: true,
        }
    }
}

impl PromptOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the overall session deadline.
    #[must_use]
    pub const fn time(mut self, time: Duration) -> Self {
        self.time = time;
        self
    }

    /// Sets the reprompt budget.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Enables or disables quoted-string tokenization.
    #[must_use]
    pub const fn quoted_strings(mut self, enabled: bool) -> Self {
        self.quoted_string_support = enabled;
        self
    }

    /// Enables or disables flag extraction.
    #[must_use]
    pub const fn flags(mut self, enabled: bool) -> Self {
        self.flag_support = enabled;
        self
    }
}
