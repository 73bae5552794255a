use std::sync::LazyLock;

use crate::CookieOptions;

/// Twenty-nine days, in seconds.
///
/// The default value of the `Max-Age` attribute.
pub const TWENTY_NINE_DAYS: i64 = 29 * 24 * 60 * 60;

/// The default value of `maxCookieLength`, in bytes.
///
/// It matches the chunk size used by the session storage that writes
/// these cookies.
pub const MAX_COOKIE_LENGTH: i64 = 3000;

static DEFAULT_COOKIE_OPTIONS: LazyLock<CookieOptions> = LazyLock::new(|| {
    CookieOptions::new()
        .with_max_age(TWENTY_NINE_DAYS)
        .with_max_cookie_length(MAX_COOKIE_LENGTH)
        .with_same_site("lax")
        .with_http_only(true)
        .with_path("/")
});

impl CookieOptions {
    /// The options applied to every cookie unless overridden.
    ///
    /// | option | value |
    /// |---|---|
    /// | `maxAge` | [`TWENTY_NINE_DAYS`] |
    /// | `maxCookieLength` | [`MAX_COOKIE_LENGTH`] |
    /// | `sameSite` | `lax` |
    /// | `httpOnly` | `true` |
    /// | `path` | `/` |
    ///
    /// # Security
    ///
    /// `secure` is deliberately left unset, so that the same defaults work
    /// for local development over plain HTTP.
    /// Deployments served over HTTPS should override it to `true`.
    pub fn defaults() -> &'static CookieOptions {
        &DEFAULT_COOKIE_OPTIONS
    }
}
