//! Prefix resolution and message dispatch.
//!
//! The prefix chain decides whether a message is addressed to us and
//! strips the addressing; the dispatcher extracts the command word, finds
//! the command, and runs a prompt session over the remaining text. Each
//! compiled prefix pattern is owned by its chain, so two dispatchers never
//! share mutable state.

use regex::Regex;
use tagline_foundation::{Error, ErrorKind, Message, Result, UserId};
use tagline_prompt::{Messenger, PromptSession, SessionOutcome};
use tagline_resolver::ResolverRegistry;

use crate::command::CommandRegistry;

/// Which link of the prefix chain matched.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PrefixKind {
    /// The configured string prefix, e.g. `!`.
    Custom,
    /// A mention of the bot at the start of the message.
    Mention,
    /// The natural-language regex.
    Natural,
    /// No prefix at all, permitted in direct messages.
    Prefixless,
}

/// Prioritized prefix resolution.
///
/// Links are consulted in a fixed order: custom string, then bot mention,
/// then natural-language pattern, then (in direct messages only) no prefix
/// at all. The first link that matches wins.
#[derive(Debug, Default)]
pub struct PrefixChain {
    custom: Option<String>,
    mention: Option<Regex>,
    natural: Option<Regex>,
    prefixless_dm: bool,
}

impl PrefixChain {
    /// Creates an empty chain that matches nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the custom string prefix.
    #[must_use]
    pub fn custom(mut self, prefix: impl Into<String>) -> Self {
        self.custom = Some(prefix.into());
        self
    }

    /// Accepts a leading mention of the given bot user as a prefix.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the pattern is built from a numeric id.
    pub fn mention(mut self, bot: UserId) -> Result<Self> {
        let pattern = format!(r"^<@!?{}>\s*", bot.get());
        self.mention =
            Some(Regex::new(&pattern).map_err(|e| {
                Error::new(ErrorKind::Internal(e.to_string()))
            })?);
        Ok(self)
    }

    /// Accepts a natural-language opener, e.g. `(?i)^hey bot,?\s*`.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern does not compile.
    pub fn natural(mut self, pattern: &str) -> Result<Self> {
        let anchored = if pattern.starts_with('^') {
            pattern.to_string()
        } else {
            format!("^{pattern}")
        };
        self.natural = Some(Regex::new(&anchored).map_err(|e| {
            Error::new(ErrorKind::InvalidLiteral {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        })?);
        Ok(self)
    }

    /// Allows prefixless commands in direct messages.
    #[must_use]
    pub const fn prefixless_dm(mut self, enabled: bool) -> Self {
        self.prefixless_dm = enabled;
        self
    }

    /// Strips the first matching prefix, returning which link matched and
    /// the rest of the content.
    #[must_use]
    pub fn strip<'m>(&self, message: &'m Message) -> Option<(PrefixKind, &'m str)> {
        let content = message.content.as_str();

        if let Some(prefix) = &self.custom {
            if let Some(rest) = content.strip_prefix(prefix.as_str()) {
                return Some((PrefixKind::Custom, rest));
            }
        }
        if let Some(found) = self.mention.as_ref().and_then(|re| re.find(content)) {
            return Some((PrefixKind::Mention, &content[found.end()..]));
        }
        if let Some(found) = self.natural.as_ref().and_then(|re| re.find(content)) {
            return Some((PrefixKind::Natural, &content[found.end()..]));
        }
        if self.prefixless_dm && message.is_direct() {
            return Some((PrefixKind::Prefixless, content));
        }
        None
    }
}

/// What the dispatcher did with one message.
#[derive(Debug)]
pub enum DispatchOutcome {
    /// No prefix matched; the message is not addressed to us.
    Ignored,
    /// A prefix matched but the word after it names no command.
    Unknown {
        /// The unrecognized command word (may be empty).
        word: String,
    },
    /// A command was found and its session ran to a terminal state.
    Ran {
        /// The command's primary name.
        command: String,
        /// Which prefix link matched.
        prefix: PrefixKind,
        /// How the session ended.
        outcome: SessionOutcome,
    },
}

/// Routes messages to commands.
#[derive(Debug)]
pub struct Dispatcher {
    commands: CommandRegistry,
    prefixes: PrefixChain,
}

impl Dispatcher {
    /// Creates a dispatcher over a command registry and a prefix chain.
    #[must_use]
    pub const fn new(commands: CommandRegistry, prefixes: PrefixChain) -> Self {
        Self { commands, prefixes }
    }

    /// The registered commands.
    #[must_use]
    pub const fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// Dispatches one message: strip the prefix, find the command, run a
    /// prompt session over the remaining text.
    #[must_use]
    pub fn dispatch(
        &self,
        message: &Message,
        resolvers: &ResolverRegistry,
        messenger: &dyn Messenger,
    ) -> DispatchOutcome {
        let Some((prefix, rest)) = self.prefixes.strip(message) else {
            return DispatchOutcome::Ignored;
        };

        let rest = rest.trim_start();
        let (word, args) = match rest.split_once(char::is_whitespace) {
            Some((word, args)) => (word, args),
            None => (rest, ""),
        };
        let Some(command) = self.commands.get(word) else {
            return DispatchOutcome::Unknown {
                word: word.to_lowercase(),
            };
        };

        let outcome = PromptSession::new(
            command.usage(),
            resolvers,
            messenger,
            message,
            command.prompt_options(),
        )
        .command(command.name())
        .run(args);

        DispatchOutcome::Ran {
            command: command.name().to_string(),
            prefix,
            outcome,
        }
    }
}
