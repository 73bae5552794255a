use crate::CookieOptions;
use crate::errors::CookieTooLong;

impl CookieOptions {
    /// The effective length limit, in bytes.
    ///
    /// A missing or non-positive `maxCookieLength` means there is no limit.
    pub fn length_limit(&self) -> Option<usize> {
        self.max_cookie_length
            .filter(|max| *max > 0)
            .map(|max| usize::try_from(max).unwrap_or(usize::MAX))
    }

    /// Reject a serialized cookie value longer than `maxCookieLength` bytes.
    pub fn ensure_fits(&self, value: &str) -> Result<(), CookieTooLong> {
        match self.length_limit() {
            Some(max_length) if value.len() > max_length => Err(CookieTooLong {
                length: value.len(),
                max_length,
            }),
            _ => Ok(()),
        }
    }

    /// Split a serialized cookie value into chunks of at most
    /// `maxCookieLength` bytes, to be stored in as many cookies.
    ///
    /// Chunks never end in the middle of a character, so a chunk may be
    /// shorter than the limit. If the limit is smaller than a single
    /// character, that character gets a chunk of its own.
    /// An empty value produces no chunks.
    pub fn split_value<'a>(&self, value: &'a str) -> Vec<&'a str> {
        let Some(max_length) = self.length_limit() else {
            return if value.is_empty() {
                vec![]
            } else {
                vec![value]
            };
        };
        let mut chunks = Vec::with_capacity(value.len().div_ceil(max_length));
        let mut rest = value;
        while !rest.is_empty() {
            let mut end = max_length.min(rest.len());
            while !rest.is_char_boundary(end) {
                end -= 1;
            }
            if end == 0 {
                // The first character doesn't fit on its own.
                end = rest.chars().next().map_or(rest.len(), char::len_utf8);
            }
            let (chunk, tail) = rest.split_at(end);
            chunks.push(chunk);
            rest = tail;
        }
        tracing::trace!(
            n_chunks = chunks.len(),
            max_length,
            "Split cookie value into chunks"
        );
        chunks
    }
}
