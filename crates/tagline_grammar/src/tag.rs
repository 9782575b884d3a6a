//! One compiled position in a usage string.

use std::fmt;
use std::sync::Arc;

use tagline_foundation::{Error, Message, Result};

use crate::possible::Possible;

/// Whether a tag must be satisfied before the command may run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagRequirement {
    /// Declared with `<...>`; unsatisfiable input triggers a reprompt.
    Required,
    /// Declared with `[...]`; unsatisfiable input skips the tag.
    Optional,
}

/// A custom reprompt message for one tag.
///
/// Attached after compilation via [`crate::Usage::customize_response`];
/// absent means a generic message is generated from the tag's possibles.
#[derive(Clone)]
pub enum TagResponse {
    /// A fixed message.
    Text(String),
    /// A message computed from the originating message.
    Dynamic(Arc<dyn Fn(&Message) -> String + Send + Sync>),
}

impl TagResponse {
    /// Renders the response for the given originating message.
    #[must_use]
    pub fn render(&self, message: &Message) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Dynamic(f) => f(message),
        }
    }
}

impl fmt::Debug for TagResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Dynamic(_) => f.debug_tuple("Dynamic").field(&"<function>").finish(),
        }
    }
}

impl From<String> for TagResponse {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for TagResponse {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// One position in the usage sequence: an ordered set of alternatives, a
/// requirement, and an optional custom reprompt.
///
/// Created once when a usage string is compiled and immutable afterwards;
/// shared by every invocation of the owning command.
#[derive(Clone, Debug)]
pub struct Tag {
    /// Alternatives, tried strictly in declaration order.
    pub possibles: Vec<Possible>,
    /// Required or optional.
    pub requirement: TagRequirement,
    /// Whether a trailing `[...]` marked this tag variadic.
    pub repeating: bool,
    pub(crate) response: Option<TagResponse>,
}

impl Tag {
    /// Parses the contents of one bracket pair into a tag.
    ///
    /// Members are separated by top-level `|`; a `|` inside a `/.../`
    /// pattern literal does not split.
    ///
    /// # Errors
    ///
    /// Returns a grammar error for an empty component, an unparseable
    /// member, or duplicate member names.
    pub(crate) fn parse(members: &str, requirement: TagRequirement, position: usize) -> Result<Self> {
        let mut possibles = Vec::new();
        for member in split_members(members) {
            let trimmed = member.trim();
            if trimmed.is_empty() {
                return Err(Error::new(tagline_foundation::ErrorKind::EmptyTag {
                    position,
                }));
            }
            possibles.push(Possible::parse(trimmed)?);
        }
        if possibles.is_empty() {
            return Err(Error::new(tagline_foundation::ErrorKind::EmptyTag {
                position,
            }));
        }

        for (i, possible) in possibles.iter().enumerate() {
            if possibles[..i].iter().any(|p| p.name == possible.name) {
                return Err(Error::duplicate_name(&possible.name));
            }
        }

        Ok(Self {
            possibles,
            requirement,
            repeating: false,
            response: None,
        })
    }

    /// Returns true if this tag must be satisfied.
    #[must_use]
    pub fn is_required(&self) -> bool {
        self.requirement == TagRequirement::Required
    }

    /// Renders the custom reprompt, if one was attached.
    #[must_use]
    pub fn response_for(&self, message: &Message) -> Option<String> {
        self.response.as_ref().map(|r| r.render(message))
    }

    /// Returns true if any possible carries the given name.
    #[must_use]
    pub fn names_possible(&self, name: &str) -> bool {
        self.possibles.iter().any(|p| p.name == name)
    }

    /// Describes the expected alternatives, for generated reprompts:
    /// `member:member`, `reason:string{,200} or off`.
    #[must_use]
    pub fn describe(&self) -> String {
        self.possibles
            .iter()
            .map(Possible::describe)
            .collect::<Vec<_>>()
            .join(" or ")
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.requirement {
            TagRequirement::Required => ('<', '>'),
            TagRequirement::Optional => ('[', ']'),
        };
        write!(f, "{open}")?;
        for (i, possible) in self.possibles.iter().enumerate() {
            if i > 0 {
                write!(f, "|")?;
            }
            write!(f, "{possible}")?;
        }
        write!(f, "{close}")?;
        if self.repeating {
            write!(f, " [...]")?;
        }
        Ok(())
    }
}

impl PartialEq for Tag {
    /// Structural equality over possibles, requirement, and repetition; the
    /// response closure is not comparable and is ignored.
    fn eq(&self, other: &Self) -> bool {
        self.possibles == other.possibles
            && self.requirement == other.requirement
            && self.repeating == other.repeating
    }
}

/// Splits tag members on `|`, ignoring `|` inside `/.../` literals.
fn split_members(members: &str) -> Vec<String> {
    let mut parts = Vec::new();
    let mut current = String::new();
    let mut in_pattern = false;
    let mut escaped = false;

    for ch in members.chars() {
        if escaped {
            current.push(ch);
            escaped = false;
            continue;
        }
        match ch {
            '\\' => {
                current.push(ch);
                escaped = true;
            }
            '/' => {
                current.push(ch);
                in_pattern = !in_pattern;
            }
            '|' if !in_pattern => {
                parts.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    parts.push(current);
    parts
}
