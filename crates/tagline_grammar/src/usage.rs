//! Usage-string compilation.
//!
//! The compiler walks the usage string character by character: `<` and `[`
//! open a required or optional component, `>` and `]` close the matching
//! one, whitespace outside brackets is insignificant, and anything else
//! outside brackets is an error. A component whose entire content is `...`
//! marks the preceding tag as repeating.

use std::fmt;

use tagline_foundation::{Error, ErrorKind, Result};

use crate::tag::{Tag, TagRequirement, TagResponse};

/// The compiled form of a usage-definition string.
///
/// Created once at command registration; read-only and shared by every
/// invocation afterwards.
#[derive(Clone, Debug)]
pub struct Usage {
    usage_string: String,
    delimiter: String,
    tags: Vec<Tag>,
}

impl Usage {
    /// Compiles a usage string.
    ///
    /// `delimiter` separates free-text tokens at resolution time; `None`
    /// means a single space.
    ///
    /// # Errors
    ///
    /// Fails fast with a grammar error on unbalanced or nested brackets,
    /// stray characters outside brackets, empty components, duplicate
    /// member names within a component, malformed bounds or pattern
    /// literals, or a dangling `...` marker. This is a configuration-time
    /// failure: it aborts registration of the owning command only.
    pub fn compile(usage_string: &str, delimiter: Option<&str>) -> Result<Self> {
        let mut tags: Vec<Tag> = Vec::new();
        let mut open: Option<(char, usize)> = None;
        let mut component = String::new();

        for (position, ch) in usage_string.char_indices() {
            match ch {
                '<' | '[' => {
                    if open.is_some() {
                        return Err(Error::nested_tag(position));
                    }
                    open = Some((ch, position));
                    component.clear();
                }
                '>' | ']' => {
                    let Some((opener, _)) = open.take() else {
                        return Err(Error::unbalanced_brackets(usage_string));
                    };
                    let requirement = match (opener, ch) {
                        ('<', '>') => TagRequirement::Required,
                        ('[', ']') => TagRequirement::Optional,
                        _ => return Err(Error::unbalanced_brackets(usage_string)),
                    };
                    if component.trim() == "..." {
                        let Some(last) = tags.last_mut() else {
                            return Err(Error::new(ErrorKind::DanglingRepeat { position }));
                        };
                        last.repeating = true;
                    } else {
                        tags.push(Tag::parse(&component, requirement, position)?);
                    }
                }
                _ if open.is_some() => component.push(ch),
                _ if ch.is_whitespace() => {}
                _ => return Err(Error::unexpected_character(ch, position)),
            }
        }

        if open.is_some() {
            return Err(Error::unbalanced_brackets(usage_string));
        }

        Ok(Self {
            usage_string: usage_string.to_string(),
            delimiter: delimiter.unwrap_or(" ").to_string(),
            tags,
        })
    }

    /// The original usage string, as written.
    #[must_use]
    pub fn usage_string(&self) -> &str {
        &self.usage_string
    }

    /// The token delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// The compiled tag sequence, in consumption order.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// Validates every statically named type against `known`.
    ///
    /// Called at command registration so an unknown type name fails fast
    /// instead of surfacing per invocation. Resolvers registered after
    /// validation still work; a name that is *never* registered surfaces as
    /// a runtime resolver-lookup failure instead.
    ///
    /// # Errors
    ///
    /// Returns [`ErrorKind::UnknownType`] for the first unrecognized name.
    pub fn validate_types(&self, known: impl Fn(&str) -> bool) -> Result<()> {
        for tag in &self.tags {
            for possible in &tag.possibles {
                if let Some(type_name) = possible.type_name() {
                    if !known(type_name) {
                        return Err(Error::unknown_type(type_name));
                    }
                }
            }
        }
        Ok(())
    }

    /// Attaches a custom reprompt to the tag holding the named possible.
    ///
    /// # Errors
    ///
    /// Fails if no tag names such a possible.
    pub fn customize_response(
        mut self,
        name: &str,
        response: impl Into<TagResponse>,
    ) -> Result<Self> {
        let Some(tag) = self.tags.iter_mut().find(|t| t.names_possible(name)) else {
            return Err(Error::new(ErrorKind::Internal(format!(
                "no argument named {name} to customize"
            ))));
        };
        tag.response = Some(response.into());
        Ok(self)
    }
}

impl fmt::Display for Usage {
    /// Re-serializes the canonical form; compiling the output yields an
    /// equivalent `Usage`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, tag) in self.tags.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{tag}")?;
        }
        Ok(())
    }
}

impl PartialEq for Usage {
    /// Structural equality: same delimiter and same compiled tags. The
    /// original text is irrelevant (`< a:string >` equals `<a:string>`).
    fn eq(&self, other: &Self) -> bool {
        self.delimiter == other.delimiter && self.tags == other.tags
    }
}
