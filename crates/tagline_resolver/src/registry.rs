//! The resolver registry.
//!
//! Maps type names to resolvers. Built-in types dispatch through a closed
//! match so they cannot be shadowed or unregistered; custom types live in a
//! hash map keyed by name and can be added at runtime.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tagline_foundation::{Error, Message, Result, Value};
use tagline_grammar::Possible;

use crate::builtin;
use crate::directory::Directory;

/// Type names served by the closed builtin dispatch, aliases included.
const BUILTIN_TYPES: &[&str] = &[
    "string", "str", "integer", "int", "float", "num", "number", "boolean", "bool", "url",
    "member", "role",
];

/// Read-only context handed to every resolver call.
pub struct Invocation<'a> {
    /// The message whose arguments are being resolved.
    pub message: &'a Message,
    /// Name of the command being invoked, when one is known.
    pub command: Option<&'a str>,
}

/// A custom argument resolver.
///
/// Implemented for free by any matching closure, so registration reads
/// naturally:
///
/// ```
/// # use std::sync::Arc;
/// # use tagline_foundation::Value;
/// # use tagline_grammar::Possible;
/// # use tagline_resolver::{Invocation, MemoryDirectory, ResolverRegistry};
/// let mut registry = ResolverRegistry::new(Arc::new(MemoryDirectory::new()));
/// registry.register("shout", |token: &str, _: &Possible, _: &Invocation<'_>| {
///     Ok(Value::Str(token.to_uppercase()))
/// });
/// ```
pub trait Resolve: Send + Sync {
    /// Converts one raw token into a typed value.
    ///
    /// # Errors
    ///
    /// Returns a resolution error when the token cannot be coerced; the
    /// prompt session treats any error as "this token did not satisfy this
    /// possible" and moves on.
    fn resolve(
        &self,
        token: &str,
        possible: &Possible,
        invocation: &Invocation<'_>,
    ) -> Result<Value>;
}

impl<F> Resolve for F
where
    F: Fn(&str, &Possible, &Invocation<'_>) -> Result<Value> + Send + Sync,
{
    fn resolve(
        &self,
        token: &str,
        possible: &Possible,
        invocation: &Invocation<'_>,
    ) -> Result<Value> {
        self(token, possible, invocation)
    }
}

/// Registry of all argument resolvers, built-in and custom.
pub struct ResolverRegistry {
    directory: Arc<dyn Directory>,
    custom: HashMap<String, Arc<dyn Resolve>>,
}

impl ResolverRegistry {
    /// Creates a registry with only the built-in resolvers.
    #[must_use]
    pub fn new(directory: Arc<dyn Directory>) -> Self {
        Self {
            directory,
            custom: HashMap::new(),
        }
    }

    /// Registers a custom resolver under `type_name`.
    ///
    /// Re-registering a name replaces the previous resolver. Builtin names
    /// are not shadowed; the builtin dispatch is consulted first.
    pub fn register(
        &mut self,
        type_name: impl Into<String>,
        resolver: impl Resolve + 'static,
    ) -> &mut Self {
        self.custom.insert(type_name.into(), Arc::new(resolver));
        self
    }

    /// Returns true if a resolver exists for `type_name`.
    #[must_use]
    pub fn known(&self, type_name: &str) -> bool {
        BUILTIN_TYPES.contains(&type_name) || self.custom.contains_key(type_name)
    }

    /// All known type names, builtins first, customs in arbitrary order.
    #[must_use]
    pub fn known_types(&self) -> Vec<&str> {
        BUILTIN_TYPES
            .iter()
            .copied()
            .chain(self.custom.keys().map(String::as_str))
            .collect()
    }

    /// Resolves one token under the given type name.
    ///
    /// # Errors
    ///
    /// Returns the underlying resolver's failure, or an unknown-resolver
    /// error if no resolver is registered for `type_name`.
    pub fn resolve(
        &self,
        type_name: &str,
        token: &str,
        possible: &Possible,
        invocation: &Invocation<'_>,
    ) -> Result<Value> {
        match type_name {
            "string" | "str" => builtin::resolve_string(token, possible),
            "integer" | "int" => builtin::resolve_integer(token, possible),
            "float" | "num" | "number" => builtin::resolve_float(token, possible),
            "boolean" | "bool" => builtin::resolve_boolean(token, possible),
            "url" => builtin::resolve_url(token, possible),
            "member" => builtin::resolve_member(token, possible, invocation, &*self.directory),
            "role" => builtin::resolve_role(token, possible, invocation, &*self.directory),
            other => match self.custom.get(other) {
                Some(resolver) => resolver.resolve(token, possible, invocation),
                None => Err(Error::unknown_resolver(other)),
            },
        }
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut custom: Vec<&str> = self.custom.keys().map(String::as_str).collect();
        custom.sort_unstable();
        f.debug_struct("ResolverRegistry")
            .field("custom", &custom)
            .finish_non_exhaustive()
    }
}
