//! Commands and their registry.
//!
//! A command pairs a name with a compiled usage and the prompt options its
//! sessions run under. Registration is where grammar errors surface: a
//! usage that fails to compile, or names a type the resolver registry does
//! not know, aborts that command's registration and leaves every other
//! command untouched.

use std::collections::HashMap;

use tagline_foundation::Result;
use tagline_grammar::{TagResponse, Usage};
use tagline_prompt::PromptOptions;
use tagline_resolver::ResolverRegistry;

/// One registered chat command.
#[derive(Debug)]
pub struct Command {
    name: String,
    aliases: Vec<String>,
    usage: Usage,
    options: PromptOptions,
}

impl Command {
    /// Creates a command, compiling its usage string.
    ///
    /// # Errors
    ///
    /// Returns the grammar error if the usage string does not compile.
    pub fn new(name: impl Into<String>, usage_string: &str, delimiter: Option<&str>) -> Result<Self> {
        Ok(Self {
            name: name.into().to_lowercase(),
            aliases: Vec::new(),
            usage: Usage::compile(usage_string, delimiter)?,
            options: PromptOptions::default(),
        })
    }

    /// Adds an alias the command also answers to.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into().to_lowercase());
        self
    }

    /// Sets the prompt options for this command's sessions.
    #[must_use]
    pub const fn options(mut self, options: PromptOptions) -> Self {
        self.options = options;
        self
    }

    /// Attaches a custom reprompt to the tag holding the named possible.
    ///
    /// # Errors
    ///
    /// Fails if no tag names such a possible.
    pub fn respond(mut self, name: &str, response: impl Into<TagResponse>) -> Result<Self> {
        self.usage = self.usage.customize_response(name, response)?;
        Ok(self)
    }

    /// The command's primary name, lowercased.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The compiled usage.
    #[must_use]
    pub const fn usage(&self) -> &Usage {
        &self.usage
    }

    /// The prompt options sessions for this command run under.
    #[must_use]
    pub const fn prompt_options(&self) -> PromptOptions {
        self.options
    }
}

/// All registered commands, looked up by name or alias.
#[derive(Debug, Default)]
pub struct CommandRegistry {
    commands: Vec<Command>,
    index: HashMap<String, usize>,
}

impl CommandRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a command, validating its usage against the resolvers.
    ///
    /// # Errors
    ///
    /// Returns an unknown-type error if the usage names a type no resolver
    /// covers. The command is not added; previously registered commands
    /// are unaffected.
    pub fn register(&mut self, command: Command, resolvers: &ResolverRegistry) -> Result<()> {
        command.usage.validate_types(|name| resolvers.known(name))?;

        let slot = self.commands.len();
        self.index.insert(command.name.clone(), slot);
        for alias in &command.aliases {
            self.index.insert(alias.clone(), slot);
        }
        self.commands.push(command);
        Ok(())
    }

    /// Looks a command up by name or alias, case-insensitively.
    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Command> {
        let slot = *self.index.get(&word.to_lowercase())?;
        self.commands.get(slot)
    }

    /// Number of registered commands.
    #[must_use]
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns true if no commands are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
