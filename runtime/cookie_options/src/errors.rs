//! Errors that can occur when working with cookie options.
use crate::value::ValueKind;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[error("The `{key}` cookie option must be {expected}, but it was set to {found}")]
/// The error returned by [`CookieOptions::set`](crate::CookieOptions::set) when a
/// recognized option is given a value of the wrong type.
pub struct InvalidOptionType {
    /// The name of the option.
    pub key: &'static str,
    /// The type the option requires.
    pub expected: ValueKind,
    /// The type of the value that was provided.
    pub found: ValueKind,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[error("`{value}` is not a valid `SameSite` policy. Expected one of `lax`, `strict` or `none`")]
/// The error returned by [`CookieOptions::to_response_cookie`](crate::CookieOptions::to_response_cookie)
/// when `sameSite` is set to an unknown token.
pub struct InvalidSameSite {
    /// The rejected value.
    pub value: String,
}

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
#[error("The cookie value is {length} bytes long, but `maxCookieLength` is set to {max_length}")]
/// The error returned by [`CookieOptions::ensure_fits`](crate::CookieOptions::ensure_fits).
pub struct CookieTooLong {
    /// The length of the rejected value, in bytes.
    pub length: usize,
    /// The configured `maxCookieLength`.
    pub max_length: usize,
}

#[derive(Debug, thiserror::Error)]
#[error("Failed to load cookie option overrides")]
/// The error returned by [`OverridesLoader::load`](crate::config::OverridesLoader::load).
pub struct OverridesLoadError(#[source] pub(crate) anyhow::Error);
