//! The prompt session state machine.
//!
//! One session resolves one message against one compiled usage. Tags are
//! consumed strictly in order, alternatives within a tag first-match-wins.
//! A required tag that cannot be satisfied triggers a reprompt; the reply's
//! tokens are spliced in at the cursor and resolution of the same tag is
//! retried. Terminal outcomes are ordinary values, never errors.

use std::collections::BTreeMap;
use std::time::Instant;

use tagline_foundation::{Error, Message, Value};
use tagline_grammar::{FlagValue, Tag, Tokenizer, Usage};
use tagline_resolver::{Invocation, ResolverRegistry};

use crate::messenger::{AwaitOutcome, Messenger};
use crate::options::PromptOptions;

/// Replies that cancel an open prompt regardless of the expected tag.
const ABORT_WORDS: &[&str] = &["abort", "cancel", "stop"];

/// Everything a completed session hands back to the command.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedArgs {
    /// Resolved values in tag order. Skipped optional tags push nothing;
    /// a repeating tag contributes one value per consumed token.
    pub params: Vec<Value>,
    /// Flags extracted from the initial message, by name.
    pub flags: BTreeMap<String, FlagValue>,
    /// Whether at least one reprompt was sent.
    pub reprompted: bool,
}

/// How a session ended.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionOutcome {
    /// Every tag was satisfied.
    Completed(ResolvedArgs),
    /// A budget ran out: the reprompt limit was exhausted or the overall
    /// deadline passed.
    AbortedLimit {
        /// What ran out, for reporting.
        reason: String,
    },
    /// The author or the surrounding context ended the session: an abort
    /// word, a cancelled wait, or an unreachable channel.
    AbortedExternal {
        /// What happened, for reporting.
        reason: String,
    },
}

/// The session's current phase.
enum Step {
    /// Try to satisfy the tag at the cursor.
    Resolve,
    /// Ask the author for a usable token, then retry the same tag.
    Reprompt(String),
    /// All tags satisfied; package the results.
    Finalize,
}

/// Where the state machine goes after one step.
enum Flow {
    Next(Step),
    Done(SessionOutcome),
}

/// One in-flight argument-resolution session.
///
/// Borrows the shared, read-only usage and registry; owns all mutable
/// state itself. Construct one per invocation and consume it with
/// [`PromptSession::run`].
pub struct PromptSession<'a> {
    usage: &'a Usage,
    registry: &'a ResolverRegistry,
    messenger: &'a dyn Messenger,
    message: &'a Message,
    options: PromptOptions,
    command: Option<&'a str>,

    tokens: Vec<String>,
    flags: BTreeMap<String, FlagValue>,
    cursor: usize,
    tag_index: usize,
    params: Vec<Value>,
    reprompts_used: u32,
    reprompted: bool,
    deadline: Instant,
}

impl<'a> PromptSession<'a> {
    /// Creates a session for one invocation.
    #[must_use]
    pub fn new(
        usage: &'a Usage,
        registry: &'a ResolverRegistry,
        messenger: &'a dyn Messenger,
        message: &'a Message,
        options: PromptOptions,
    ) -> Self {
        Self {
            usage,
            registry,
            messenger,
            message,
            options,
            command: None,
            tokens: Vec::new(),
            flags: BTreeMap::new(),
            cursor: 0,
            tag_index: 0,
            params: Vec::new(),
            reprompts_used: 0,
            reprompted: false,
            deadline: Instant::now(),
        }
    }

    /// Names the command being invoked, for resolvers that care.
    #[must_use]
    pub fn command(mut self, name: &'a str) -> Self {
        self.command = Some(name);
        self
    }

    /// Runs the session over `content`, the message text after the prefix
    /// and command word have been stripped.
    #[must_use]
    pub fn run(mut self, content: &str) -> SessionOutcome {
        self.deadline = Instant::now() + self.options.time;

        let stream = Tokenizer::tokenize(
            content,
            self.usage.delimiter(),
            self.options.quoted_string_support,
            self.options.flag_support,
        );
        self.tokens = stream.tokens;
        self.flags = stream.flags;

        let mut step = Step::Resolve;
        loop {
            let flow = match step {
                Step::Resolve => self.resolve_step(),
                Step::Reprompt(reason) => self.reprompt_step(&reason),
                Step::Finalize => Flow::Done(SessionOutcome::Completed(ResolvedArgs {
                    params: std::mem::take(&mut self.params),
                    flags: std::mem::take(&mut self.flags),
                    reprompted: self.reprompted,
                })),
            };
            match flow {
                Flow::Next(next) => step = next,
                Flow::Done(outcome) => return outcome,
            }
        }
    }

    /// Attempts to satisfy the tag at the cursor.
    fn resolve_step(&mut self) -> Flow {
        let tags = self.usage.tags();
        let Some(tag) = tags.get(self.tag_index) else {
            return Flow::Next(Step::Finalize);
        };

        if self.tag_index == tags.len() - 1 && !tag.repeating {
            self.rejoin_tail(tag);
        }

        if tag.repeating {
            return self.resolve_repeating(tag);
        }

        match self.tokens.get(self.cursor) {
            Some(token) => match self.resolve_token(tag, token) {
                Ok(value) => {
                    self.params.push(value);
                    self.cursor += 1;
                    self.tag_index += 1;
                    Flow::Next(Step::Resolve)
                }
                Err(err) => {
                    if tag.is_required() {
                        // A token that failed every alternative can never
                        // succeed; drop it before asking for a replacement.
                        self.tokens.remove(self.cursor);
                        Flow::Next(Step::Reprompt(err.to_string()))
                    } else {
                        self.tag_index += 1;
                        Flow::Next(Step::Resolve)
                    }
                }
            },
            None => {
                if tag.is_required() {
                    Flow::Next(Step::Reprompt(format!(
                        "missing required argument: {}",
                        tag.describe()
                    )))
                } else {
                    self.tag_index += 1;
                    Flow::Next(Step::Resolve)
                }
            }
        }
    }

    /// Greedily consumes tokens for a repeating tag, stopping at the first
    /// failure. A required repeating tag must consume at least one token.
    fn resolve_repeating(&mut self, tag: &Tag) -> Flow {
        let mut consumed = 0;
        let mut first_err: Option<Error> = None;
        while let Some(token) = self.tokens.get(self.cursor) {
            match self.resolve_token(tag, token) {
                Ok(value) => {
                    self.params.push(value);
                    self.cursor += 1;
                    consumed += 1;
                }
                Err(err) => {
                    if consumed == 0 {
                        first_err = Some(err);
                    }
                    break;
                }
            }
        }

        if consumed > 0 || !tag.is_required() {
            self.tag_index += 1;
            return Flow::Next(Step::Resolve);
        }
        match first_err {
            Some(err) => {
                self.tokens.remove(self.cursor);
                Flow::Next(Step::Reprompt(err.to_string()))
            }
            None => Flow::Next(Step::Reprompt(format!(
                "missing required argument: {}",
                tag.describe()
            ))),
        }
    }

    /// Tries each alternative of `tag` against one token, in order.
    fn resolve_token(&self, tag: &Tag, token: &str) -> Result<Value, Error> {
        let invocation = Invocation {
            message: self.message,
            command: self.command,
        };
        let mut last_typed_err: Option<Error> = None;
        for possible in &tag.possibles {
            match possible.type_name() {
                Some(type_name) => {
                    match self
                        .registry
                        .resolve(type_name, token, possible, &invocation)
                    {
                        Ok(value) => return Ok(value),
                        Err(err) => last_typed_err = Some(err),
                    }
                }
                None => {
                    if possible.matches_literal(token) {
                        return Ok(Value::Str(token.to_string()));
                    }
                }
            }
        }
        Err(last_typed_err.unwrap_or_else(|| {
            Error::invalid_argument(&tag.possibles[0].name, tag.describe())
        }))
    }

    /// Rejoins the remaining tokens into one when the final tag can take
    /// free text, so `kick @user being rude in chat` keeps its whole
    /// reason. Only string-typed tags qualify.
    fn rejoin_tail(&mut self, tag: &Tag) {
        let remaining = self.tokens.len().saturating_sub(self.cursor);
        if remaining < 2 {
            return;
        }
        let takes_text = tag
            .possibles
            .iter()
            .any(|p| matches!(p.type_name(), Some("string" | "str")));
        if !takes_text {
            return;
        }
        let joined = self.tokens[self.cursor..].join(self.usage.delimiter());
        self.tokens.truncate(self.cursor);
        self.tokens.push(joined);
    }

    /// Sends a reprompt and splices the reply in at the cursor.
    ///
    /// Budgets are checked before anything is sent, so a zero limit (the
    /// default) aborts silently.
    fn reprompt_step(&mut self, reason: &str) -> Flow {
        if self.reprompts_used >= self.options.limit {
            return Flow::Done(SessionOutcome::AbortedLimit {
                reason: format!("reprompt limit reached: {reason}"),
            });
        }
        let remaining = self.deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Flow::Done(SessionOutcome::AbortedLimit {
                reason: "prompt timed out".to_string(),
            });
        }

        let tag = &self.usage.tags()[self.tag_index];
        let text = tag.response_for(self.message).unwrap_or_else(|| {
            format!(
                "{reason} | You have {} seconds to reply with a valid argument, or reply `abort` to cancel.",
                remaining.as_secs()
            )
        });
        if let Err(err) = self.messenger.send(self.message.channel, &text) {
            return Flow::Done(SessionOutcome::AbortedExternal {
                reason: err.to_string(),
            });
        }
        self.reprompts_used += 1;
        self.reprompted = true;

        match self
            .messenger
            .await_reply(self.message.channel, self.message.author, remaining)
        {
            AwaitOutcome::Reply(reply) => {
                if ABORT_WORDS.contains(&reply.content.trim().to_lowercase().as_str()) {
                    return Flow::Done(SessionOutcome::AbortedExternal {
                        reason: "aborted by user".to_string(),
                    });
                }
                // Replies are never scanned for flags; only the initial
                // message carries them.
                let stream = Tokenizer::tokenize(
                    &reply.content,
                    self.usage.delimiter(),
                    self.options.quoted_string_support,
                    false,
                );
                for (offset, token) in stream.tokens.into_iter().enumerate() {
                    self.tokens.insert(self.cursor + offset, token);
                }
                Flow::Next(Step::Resolve)
            }
            AwaitOutcome::TimedOut => Flow::Done(SessionOutcome::AbortedLimit {
                reason: "prompt timed out".to_string(),
            }),
            AwaitOutcome::Cancelled => Flow::Done(SessionOutcome::AbortedExternal {
                reason: "prompt context cancelled".to_string(),
            }),
        }
    }
}
