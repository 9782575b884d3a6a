/// Compiles a regular expression once and returns a `&'static Regex`.
///
/// The pattern is a string literal known to be valid, so the one-time
/// compilation unwraps.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}
