/*!
Default attributes for the cookies set by an authentication flow, and the
logic to layer caller-supplied overrides on top of them.

# Defaults

Unless told otherwise, cookies are:

- kept for 29 days (`Max-Age`, see [`TWENTY_NINE_DAYS`]);
- scoped to the whole site (`Path=/`);
- only sent on same-site requests and top-level navigations (`SameSite=Lax`);
- hidden from scripts running in the browser (`HttpOnly`).

Serialized cookie values are also expected to stay below
[`MAX_COOKIE_LENGTH`] bytes: see [`CookieOptions::split_value`].

`Secure` is **not** set by default, so that the same defaults work over plain
HTTP during local development. Set it explicitly when serving over HTTPS.

# Overrides

```rust
use cookie_options::{CookieOptions, cookie_options};

// Production, behind HTTPS.
let options = cookie_options(Some(
    CookieOptions::new()
        .with_secure(true)
        .with_domain("example.com"),
));
assert_eq!(options.secure, Some(true));
assert_eq!(options.same_site.as_deref(), Some("lax"));

let cookie = options.to_response_cookie("session", "value").unwrap();
assert_eq!(cookie.domain(), Some("example.com"));
```

Overrides can also be loaded from configuration, see [`config::OverridesLoader`].
*/
pub mod config;
mod defaults;
pub mod errors;
mod length;
mod options;
mod response;
mod value;

pub use defaults::{MAX_COOKIE_LENGTH, TWENTY_NINE_DAYS};
pub use options::CookieOptions;
pub use response::parse_same_site;
pub use value::{CookieOptionValue, ValueKind};

/// Merge `overrides` with [the defaults](CookieOptions::defaults).
///
/// `None` is the same as an empty set of overrides: the result is a copy
/// of the defaults.
/// Every call returns a fresh set, the defaults are never modified.
///
/// See [`CookieOptions::merge`] for the precedence rules.
///
/// # Example
///
/// ```rust
/// use cookie_options::{CookieOptions, cookie_options};
///
/// let options = cookie_options(CookieOptions::new().with_unset("maxAge"));
/// assert_eq!(options.max_age, None);
/// assert_eq!(options.path.as_deref(), Some("/"));
/// ```
pub fn cookie_options(overrides: impl Into<Option<CookieOptions>>) -> CookieOptions {
    CookieOptions::defaults().merge(overrides.into().unwrap_or_default())
}
