//! `{key}` placeholder substitution for context-carrying log calls.

use std::borrow::Cow;
use std::fmt::{Display, Write};

/// Key/value pairs substituted into a message.
pub type Context<'a> = [(&'a str, &'a dyn Display)];

/// Replace `{key}` placeholders in `message` with values from `context`.
///
/// Placeholders whose key is not in `context` are kept as written, and an
/// unterminated `{` is copied literally. The message is borrowed unchanged
/// when it has no `{` at all.
///
/// # Example
///
/// ```
/// use catlog::log::interpolate;
///
/// let user = "alice";
/// let attempts = 3;
/// let message = interpolate(
///     "login failed for {user} after {attempts} attempts",
///     &[("user", &user), ("attempts", &attempts)],
/// );
/// assert_eq!(message, "login failed for alice after 3 attempts");
/// ```
pub fn interpolate<'m>(message: &'m str, context: &Context<'_>) -> Cow<'m, str> {
    if context.is_empty() || !message.contains('{') {
        return Cow::Borrowed(message);
    }

    let mut output = String::with_capacity(message.len());
    let mut rest = message;

    while let Some(open) = rest.find('{') {
        output.push_str(&rest[..open]);
        let after_open = &rest[open + 1..];

        let Some(close) = after_open.find('}') else {
            output.push_str(&rest[open..]);
            return Cow::Owned(output);
        };

        let key = &after_open[..close];
        match context.iter().find(|(name, _)| *name == key) {
            Some((_, value)) => {
                let _ = write!(output, "{}", value);
            }
            None => {
                output.push('{');
                output.push_str(key);
                output.push('}');
            }
        }
        rest = &after_open[close + 1..];
    }

    output.push_str(rest);
    Cow::Owned(output)
}
