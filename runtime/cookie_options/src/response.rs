//! Turn [`CookieOptions`] into an outgoing cookie.
use biscotti::{ResponseCookie, SameSite};

use crate::CookieOptions;
use crate::errors::InvalidSameSite;

impl CookieOptions {
    /// Build a response cookie, ready to be sent via `Set-Cookie`, using
    /// these options as its attributes.
    ///
    /// Options map to attributes as follows:
    ///
    /// | option | attribute |
    /// |---|---|
    /// | `maxAge` | `Max-Age` |
    /// | `domain` | `Domain` |
    /// | `sameSite` | `SameSite` |
    /// | `httpOnly` | `HttpOnly` |
    /// | `secure` | `Secure` |
    /// | `path` | `Path` |
    ///
    /// Options that are not set produce no attribute, and so do `httpOnly`
    /// and `secure` when set to `false`.
    /// `maxCookieLength` and unrecognized options are not HTTP attributes
    /// and are ignored.
    ///
    /// # Errors
    ///
    /// Fails if `sameSite` is set to something other than `lax`, `strict`
    /// or `none` (case-insensitive).
    pub fn to_response_cookie<N, V>(
        &self,
        name: N,
        value: V,
    ) -> Result<ResponseCookie<'static>, InvalidSameSite>
    where
        N: Into<String>,
        V: Into<String>,
    {
        let same_site = self.same_site.as_deref().map(parse_same_site).transpose()?;

        let name: String = name.into();
        let value: String = value.into();
        let mut cookie = ResponseCookie::new(name.clone(), value);
        if let Some(domain) = self.domain.as_deref() {
            cookie = cookie.set_domain(domain.to_owned());
        }
        if let Some(path) = self.path.as_deref() {
            cookie = cookie.set_path(path.to_owned());
        }
        if let Some(same_site) = same_site {
            cookie = cookie.set_same_site(same_site);
        }
        match self.secure {
            Some(true) => cookie = cookie.set_secure(true),
            Some(false) => {}
            None => tracing::debug!(
                cookie.name = %name,
                "The `secure` cookie option is not set, the cookie may be sent over plain HTTP"
            ),
        }
        if self.http_only == Some(true) {
            cookie = cookie.set_http_only(true);
        }
        if let Some(max_age) = self.max_age {
            cookie = cookie.set_max_age(time::Duration::seconds(max_age));
        }
        Ok(cookie)
    }
}

/// Parse a `SameSite` policy, ignoring ASCII case.
pub fn parse_same_site(value: &str) -> Result<SameSite, InvalidSameSite> {
    if value.eq_ignore_ascii_case("lax") {
        Ok(SameSite::Lax)
    } else if value.eq_ignore_ascii_case("strict") {
        Ok(SameSite::Strict)
    } else if value.eq_ignore_ascii_case("none") {
        Ok(SameSite::None)
    } else {
        Err(InvalidSameSite {
            value: value.to_owned(),
        })
    }
}
