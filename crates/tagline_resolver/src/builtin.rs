//! Built-in resolvers.
//!
//! Primitive coercions plus the two platform-entity lookups (`member`,
//! `role`). Bound checking is applied uniformly after a successful
//! coercion: numeric types check the value, string types check the length
//! in characters, and a violation is an out-of-range failure distinct from
//! a type failure.

use tagline_foundation::{Error, RangeCheck, RangeUnit, Result, RoleId, UserId, Value, regex};
use tagline_grammar::Possible;

use crate::directory::Directory;
use crate::registry::Invocation;

/// Accepted boolean spellings (from the original framework's constants).
const TRUTHY: &[&str] = &["1", "true", "+", "t", "yes", "y"];
const FALSY: &[&str] = &["0", "false", "-", "f", "no", "n"];

pub(crate) fn resolve_string(token: &str, possible: &Possible) -> Result<Value> {
    #[allow(clippy::cast_precision_loss)]
    check_bounds(
        possible,
        token.chars().count() as f64,
        RangeUnit::Characters,
    )?;
    Ok(Value::Str(token.to_string()))
}

pub(crate) fn resolve_integer(token: &str, possible: &Possible) -> Result<Value> {
    let value: i64 = token
        .parse()
        .map_err(|_| Error::invalid_argument(&possible.name, "integer"))?;
    #[allow(clippy::cast_precision_loss)]
    check_bounds(possible, value as f64, RangeUnit::Value)?;
    Ok(Value::Int(value))
}

pub(crate) fn resolve_float(token: &str, possible: &Possible) -> Result<Value> {
    let value: f64 = token
        .parse()
        .map_err(|_| Error::invalid_argument(&possible.name, "number"))?;
    if !value.is_finite() {
        return Err(Error::invalid_argument(&possible.name, "number"));
    }
    check_bounds(possible, value, RangeUnit::Value)?;
    Ok(Value::Float(value))
}

pub(crate) fn resolve_boolean(token: &str, possible: &Possible) -> Result<Value> {
    let lower = token.to_lowercase();
    if TRUTHY.contains(&lower.as_str()) {
        Ok(Value::Bool(true))
    } else if FALSY.contains(&lower.as_str()) {
        Ok(Value::Bool(false))
    } else {
        Err(Error::invalid_argument(&possible.name, "boolean"))
    }
}

pub(crate) fn resolve_url(token: &str, possible: &Possible) -> Result<Value> {
    let pattern = regex!(r"^(?i)https?://[-\w.]+(?::\d{1,5})?(?:/\S*)?$");
    if pattern.is_match(token) {
        Ok(Value::Url(token.to_string()))
    } else {
        Err(Error::invalid_argument(&possible.name, "url"))
    }
}

/// Resolves a user mention or raw id to a guild member.
///
/// Accepted surface forms: `123456789012345678`, `<@id>`, `<@!id>`. The
/// member's persisted settings are synchronized before it is returned.
pub(crate) fn resolve_member(
    token: &str,
    possible: &Possible,
    invocation: &Invocation<'_>,
    directory: &dyn Directory,
) -> Result<Value> {
    let pattern = regex!(r"^(?:<@!?)?(\d{17,19})>?$");
    let member = mention_id(pattern, token)
        .and_then(|id| {
            let guild = invocation.message.guild?;
            directory.fetch_member(guild, UserId(id))
        })
        .ok_or_else(|| Error::invalid_member(&possible.name))?;
    directory.sync_member_settings(&member);
    Ok(Value::Member(member))
}

/// Resolves a role mention or raw id to a guild role.
///
/// Accepted surface forms: `123456789012345678`, `<@&id>`.
pub(crate) fn resolve_role(
    token: &str,
    possible: &Possible,
    invocation: &Invocation<'_>,
    directory: &dyn Directory,
) -> Result<Value> {
    let pattern = regex!(r"^(?:<@&)?(\d{17,19})>?$");
    let role = mention_id(pattern, token)
        .and_then(|id| {
            let guild = invocation.message.guild?;
            directory.fetch_role(guild, RoleId(id))
        })
        .ok_or_else(|| Error::invalid_role(&possible.name))?;
    Ok(Value::Role(role))
}

fn mention_id(pattern: &regex::Regex, token: &str) -> Option<u64> {
    pattern
        .captures(token)
        .and_then(|caps| caps[1].parse().ok())
}

/// Applies the possible's `{min,max}` bounds to a measured quantity.
fn check_bounds(possible: &Possible, measured: f64, unit: RangeUnit) -> Result<()> {
    let (min, max) = possible.bounds();
    let below = min.is_some_and(|lo| measured < lo);
    let above = max.is_some_and(|hi| measured > hi);
    if below || above {
        return Err(Error::out_of_range(RangeCheck {
            name: possible.name.clone(),
            min,
            max,
            unit,
        }));
    }
    Ok(())
}
