use indexmap::{IndexMap, IndexSet};
use serde::ser::SerializeMap;

use crate::errors::InvalidOptionType;
use crate::value::{CookieOptionValue, ValueKind};

#[derive(Debug, Clone, Default, PartialEq, serde::Deserialize)]
#[serde(try_from = "RawCookieOptions")]
#[non_exhaustive]
/// A set of cookie attributes.
///
/// The same type is used for the process-wide defaults
/// (see [`CookieOptions::defaults`]), for the partial overrides supplied by
/// a caller and for the result of merging the two.
/// Every attribute is optional: `None` means "not specified", which is
/// distinct from an explicit `false` or `0`.
///
/// An option can also be explicitly *unset* (see [`CookieOptions::unset`]),
/// e.g. by setting it to `null` in JSON or YAML. An unset option in a set of
/// overrides removes the corresponding default when merging, while an
/// option that is simply missing keeps it.
///
/// The set is open: options outside of the recognized ones are kept,
/// verbatim, in a side map. See [`CookieOptions::set`] and
/// [`CookieOptions::extra`].
///
/// `CookieOptions::default()` is the **empty** set, i.e. "no overrides".
pub struct CookieOptions {
    /// The `Max-Age` attribute, in seconds.
    pub max_age: Option<i64>,
    /// The `Domain` attribute.
    pub domain: Option<String>,
    /// The maximum length, in bytes, of a serialized cookie value.
    ///
    /// It isn't an HTTP attribute: it's meant for callers deciding whether
    /// to split or reject an oversized value. See [`CookieOptions::split_value`].
    pub max_cookie_length: Option<i64>,
    /// The `SameSite` attribute.
    ///
    /// It isn't validated here: any string is accepted.
    /// It must be one of `lax`, `strict` or `none` (case-insensitive) to
    /// be converted into a response cookie.
    pub same_site: Option<String>,
    /// The `HttpOnly` attribute.
    pub http_only: Option<bool>,
    /// The `Secure` attribute.
    ///
    /// It is never set by [`CookieOptions::defaults`]: whether cookies must
    /// only travel over HTTPS is up to the caller.
    pub secure: Option<bool>,
    /// The `Path` attribute.
    pub path: Option<String>,
    extra: IndexMap<String, CookieOptionValue>,
    /// Options explicitly set to "undefined", by canonical name.
    unset: IndexSet<String>,
}

/// The wire representation of [`CookieOptions`]: a flat map where `null`
/// marks an option as unset.
#[derive(serde::Deserialize)]
#[serde(transparent)]
struct RawCookieOptions(IndexMap<String, Option<CookieOptionValue>>);

impl TryFrom<RawCookieOptions> for CookieOptions {
    type Error = InvalidOptionType;

    fn try_from(raw: RawCookieOptions) -> Result<Self, Self::Error> {
        let mut options = CookieOptions::new();
        for (key, value) in raw.0 {
            match value {
                Some(value) => {
                    options.set(key, value)?;
                }
                None => {
                    options.unset(key);
                }
            }
        }
        Ok(options)
    }
}

impl serde::Serialize for CookieOptions {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(None)?;
        for (key, value) in self.iter() {
            map.serialize_entry(key, &value)?;
        }
        // A field assigned after `unset` takes precedence over the marker.
        for key in self.unset.iter().filter(|key| !self.contains_key(key)) {
            map.serialize_entry(key, &None::<CookieOptionValue>)?;
        }
        map.end()
    }
}

/// The options with a dedicated field on [`CookieOptions`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum KnownOption {
    MaxAge,
    Domain,
    MaxCookieLength,
    SameSite,
    HttpOnly,
    Secure,
    Path,
}

impl KnownOption {
    const ALL: [KnownOption; 7] = [
        KnownOption::MaxAge,
        KnownOption::Domain,
        KnownOption::MaxCookieLength,
        KnownOption::SameSite,
        KnownOption::HttpOnly,
        KnownOption::Secure,
        KnownOption::Path,
    ];

    /// Match both the canonical name and its snake_case alias, the same
    /// ones accepted during deserialization.
    pub(crate) fn from_key(key: &str) -> Option<Self> {
        let known = match key {
            "maxAge" | "max_age" => KnownOption::MaxAge,
            "domain" => KnownOption::Domain,
            "maxCookieLength" | "max_cookie_length" => KnownOption::MaxCookieLength,
            "sameSite" | "same_site" => KnownOption::SameSite,
            "httpOnly" | "http_only" => KnownOption::HttpOnly,
            "secure" => KnownOption::Secure,
            "path" => KnownOption::Path,
            _ => return None,
        };
        Some(known)
    }

    pub(crate) fn name(self) -> &'static str {
        match self {
            KnownOption::MaxAge => "maxAge",
            KnownOption::Domain => "domain",
            KnownOption::MaxCookieLength => "maxCookieLength",
            KnownOption::SameSite => "sameSite",
            KnownOption::HttpOnly => "httpOnly",
            KnownOption::Secure => "secure",
            KnownOption::Path => "path",
        }
    }

    fn kind(self) -> ValueKind {
        match self {
            KnownOption::MaxAge | KnownOption::MaxCookieLength => ValueKind::Integer,
            KnownOption::Domain | KnownOption::SameSite | KnownOption::Path => ValueKind::String,
            KnownOption::HttpOnly | KnownOption::Secure => ValueKind::Boolean,
        }
    }
}

/// The name an option is tracked under: recognized options are stored
/// under their camelCase name, whatever alias was used.
fn canonical_name(key: &str) -> &str {
    match KnownOption::from_key(key) {
        Some(known) => known.name(),
        None => key,
    }
}

impl CookieOptions {
    /// An empty set of options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Layer `overrides` on top of `self`.
    ///
    /// For every option, the value in `overrides` wins if it is present,
    /// no matter what it is (`false` and `0` included).
    /// Options that are explicitly unset in `overrides` are removed.
    /// Options missing from `overrides` keep the value they have in `self`.
    /// Options that only appear in `overrides` are carried over as they are.
    ///
    /// `self` is left untouched: the result is a new, independent set.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cookie_options::CookieOptions;
    ///
    /// let merged = CookieOptions::defaults()
    ///     .merge(CookieOptions::new().with_http_only(false));
    /// assert_eq!(merged.http_only, Some(false));
    /// assert_eq!(merged.path.as_deref(), Some("/"));
    /// ```
    pub fn merge(&self, overrides: CookieOptions) -> CookieOptions {
        let CookieOptions {
            max_age,
            domain,
            max_cookie_length,
            same_site,
            http_only,
            secure,
            path,
            extra,
            unset,
        } = overrides;
        tracing::trace!(
            n_extra_overrides = extra.len(),
            n_unset = unset.len(),
            "Layering cookie option overrides"
        );
        // A value wins over an unset marker, an unset marker wins over the base value.
        let layer = |known: KnownOption| !unset.contains(known.name());

        let mut merged_extra = self.extra.clone();
        merged_extra.retain(|key, _| !unset.contains(key));
        // Existing keys keep their position, new ones are appended.
        merged_extra.extend(extra);
        let mut merged = CookieOptions {
            max_age: max_age.or(self.max_age.filter(|_| layer(KnownOption::MaxAge))),
            domain: domain.or_else(|| self.domain.clone().filter(|_| layer(KnownOption::Domain))),
            max_cookie_length: max_cookie_length.or(self
                .max_cookie_length
                .filter(|_| layer(KnownOption::MaxCookieLength))),
            same_site: same_site
                .or_else(|| self.same_site.clone().filter(|_| layer(KnownOption::SameSite))),
            http_only: http_only.or(self.http_only.filter(|_| layer(KnownOption::HttpOnly))),
            secure: secure.or(self.secure.filter(|_| layer(KnownOption::Secure))),
            path: path.or_else(|| self.path.clone().filter(|_| layer(KnownOption::Path))),
            extra: merged_extra,
            unset: IndexSet::new(),
        };
        let unset: IndexSet<String> = self
            .unset
            .iter()
            .chain(unset.iter())
            .filter(|key| !merged.contains_key(key))
            .cloned()
            .collect();
        merged.unset = unset;
        merged
    }

    /// Get the value of an option, recognized or not.
    ///
    /// Returns `None` if the option is not set.
    pub fn get(&self, key: &str) -> Option<CookieOptionValue> {
        match KnownOption::from_key(key) {
            Some(known) => self.get_known(known),
            None => self.extra.get(key).cloned(),
        }
    }

    /// Set the value of an option, returning its previous value.
    ///
    /// Any value is accepted for options that aren't recognized.
    /// Recognized options must be given a value of the matching type
    /// (e.g. a boolean for `httpOnly`), otherwise an error is returned and
    /// the set is left unchanged.
    pub fn set<K, V>(
        &mut self,
        key: K,
        value: V,
    ) -> Result<Option<CookieOptionValue>, InvalidOptionType>
    where
        K: Into<String>,
        V: Into<CookieOptionValue>,
    {
        let key = key.into();
        let value = value.into();
        let Some(known) = KnownOption::from_key(&key) else {
            self.unset.shift_remove(&key);
            return Ok(self.extra.insert(key, value));
        };
        let mismatch = |value: &CookieOptionValue| InvalidOptionType {
            key: known.name(),
            expected: known.kind(),
            found: value.kind(),
        };
        let previous = self.get_known(known);
        match (known, value) {
            (KnownOption::MaxAge, CookieOptionValue::Integer(i)) => self.max_age = Some(i),
            (KnownOption::MaxCookieLength, CookieOptionValue::Integer(i)) => {
                self.max_cookie_length = Some(i)
            }
            (KnownOption::Domain, CookieOptionValue::String(s)) => self.domain = Some(s),
            (KnownOption::SameSite, CookieOptionValue::String(s)) => self.same_site = Some(s),
            (KnownOption::Path, CookieOptionValue::String(s)) => self.path = Some(s),
            (KnownOption::HttpOnly, CookieOptionValue::Boolean(b)) => self.http_only = Some(b),
            (KnownOption::Secure, CookieOptionValue::Boolean(b)) => self.secure = Some(b),
            (_, value) => return Err(mismatch(&value)),
        }
        self.unset.shift_remove(known.name());
        Ok(previous)
    }

    /// Forget about an option, returning its previous value.
    ///
    /// The option goes back to "not specified": when used as overrides,
    /// the set will leave the corresponding default untouched.
    /// Use [`CookieOptions::unset`] to remove the default instead.
    pub fn remove(&mut self, key: &str) -> Option<CookieOptionValue> {
        let previous = self.clear(key);
        self.unset.shift_remove(canonical_name(key));
        previous
    }

    /// Mark an option as explicitly unset, returning its previous value.
    ///
    /// When used as overrides, the set will remove the corresponding
    /// default from the merged result.
    pub fn unset(&mut self, key: impl Into<String>) -> Option<CookieOptionValue> {
        let key = key.into();
        let previous = self.clear(&key);
        let key = match KnownOption::from_key(&key) {
            Some(known) => known.name().to_owned(),
            None => key,
        };
        self.unset.insert(key);
        previous
    }

    /// Returns `true` if the option was explicitly unset and hasn't been
    /// given a value since.
    pub fn is_unset(&self, key: &str) -> bool {
        self.unset.contains(canonical_name(key)) && !self.contains_key(key)
    }

    /// Builder-style version of [`CookieOptions::unset`].
    pub fn with_unset(mut self, key: impl Into<String>) -> Self {
        self.unset(key);
        self
    }

    fn clear(&mut self, key: &str) -> Option<CookieOptionValue> {
        let Some(known) = KnownOption::from_key(key) else {
            return self.extra.shift_remove(key);
        };
        let previous = self.get_known(known);
        match known {
            KnownOption::MaxAge => self.max_age = None,
            KnownOption::Domain => self.domain = None,
            KnownOption::MaxCookieLength => self.max_cookie_length = None,
            KnownOption::SameSite => self.same_site = None,
            KnownOption::HttpOnly => self.http_only = None,
            KnownOption::Secure => self.secure = None,
            KnownOption::Path => self.path = None,
        }
        previous
    }

    /// Returns `true` if the option is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// The number of options that are set.
    ///
    /// Unset options are not counted.
    pub fn len(&self) -> usize {
        KnownOption::ALL
            .iter()
            .filter(|known| self.get_known(**known).is_some())
            .count()
            + self.extra.len()
    }

    /// Returns `true` if no option is set.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over the options that are set.
    ///
    /// Recognized options come first, in a fixed order, followed by all
    /// other options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, CookieOptionValue)> + '_ {
        KnownOption::ALL
            .into_iter()
            .filter_map(move |known| self.get_known(known).map(|v| (known.name(), v)))
            .chain(self.extra.iter().map(|(k, v)| (k.as_str(), v.clone())))
    }

    /// The options that don't have a dedicated field, in insertion order.
    pub fn extra(&self) -> &IndexMap<String, CookieOptionValue> {
        &self.extra
    }

    /// Set the `Max-Age` attribute, in seconds.
    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = Some(seconds);
        self
    }

    /// Set the `Domain` attribute.
    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    /// Set the maximum length of a serialized cookie value, in bytes.
    pub fn with_max_cookie_length(mut self, max_length: i64) -> Self {
        self.max_cookie_length = Some(max_length);
        self
    }

    /// Set the `SameSite` attribute.
    pub fn with_same_site(mut self, same_site: impl Into<String>) -> Self {
        self.same_site = Some(same_site.into());
        self
    }

    /// Set the `HttpOnly` attribute.
    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = Some(http_only);
        self
    }

    /// Set the `Secure` attribute.
    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    /// Set the `Path` attribute.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Builder-style version of [`CookieOptions::set`].
    pub fn try_with<K, V>(mut self, key: K, value: V) -> Result<Self, InvalidOptionType>
    where
        K: Into<String>,
        V: Into<CookieOptionValue>,
    {
        self.set(key, value)?;
        Ok(self)
    }

    fn get_known(&self, known: KnownOption) -> Option<CookieOptionValue> {
        match known {
            KnownOption::MaxAge => self.max_age.map(CookieOptionValue::Integer),
            KnownOption::Domain => self.domain.clone().map(CookieOptionValue::String),
            KnownOption::MaxCookieLength => {
                self.max_cookie_length.map(CookieOptionValue::Integer)
            }
            KnownOption::SameSite => self.same_site.clone().map(CookieOptionValue::String),
            KnownOption::HttpOnly => self.http_only.map(CookieOptionValue::Boolean),
            KnownOption::Secure => self.secure.map(CookieOptionValue::Boolean),
            KnownOption::Path => self.path.clone().map(CookieOptionValue::String),
        }
    }
}
