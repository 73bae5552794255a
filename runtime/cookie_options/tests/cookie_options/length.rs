use cookie_options::{CookieOptions, MAX_COOKIE_LENGTH, cookie_options};

#[test]
fn values_up_to_the_default_limit_fit() {
    let options = cookie_options(None);
    let limit = usize::try_from(MAX_COOKIE_LENGTH).unwrap();

    assert_eq!(options.length_limit(), Some(limit));
    assert!(options.ensure_fits(&"a".repeat(limit)).is_ok());
    assert!(options.ensure_fits("").is_ok());

    let err = options.ensure_fits(&"a".repeat(limit + 1)).unwrap_err();
    assert_eq!(err.length, limit + 1);
    assert_eq!(err.max_length, limit);
    insta::assert_snapshot!(err, @"The cookie value is 3001 bytes long, but `maxCookieLength` is set to 3000");
}

#[test]
fn values_are_split_into_chunks_of_the_configured_size() {
    let options = cookie_options(None);
    let value = "x".repeat(7000);

    let chunks = options.split_value(&value);

    let lengths: Vec<_> = chunks.iter().map(|c| c.len()).collect();
    assert_eq!(lengths, vec![3000, 3000, 1000]);
    assert_eq!(chunks.concat(), value);
}

#[test]
fn short_values_are_a_single_chunk() {
    let options = cookie_options(None);
    assert_eq!(options.split_value("short"), vec!["short"]);
}

#[test]
fn empty_values_produce_no_chunks() {
    assert!(cookie_options(None).split_value("").is_empty());
    assert!(CookieOptions::new().split_value("").is_empty());
}

#[test]
fn there_is_no_limit_without_max_cookie_length() {
    let options = CookieOptions::new();
    let value = "x".repeat(10_000);

    assert_eq!(options.length_limit(), None);
    assert!(options.ensure_fits(&value).is_ok());
    assert_eq!(options.split_value(&value), vec![value.as_str()]);
}

#[test]
fn overridden_limit_is_honoured() {
    let options = cookie_options(Some(CookieOptions::new().with_max_cookie_length(4)));
    assert_eq!(options.split_value("abcdefghij"), vec!["abcd", "efgh", "ij"]);
    assert!(options.ensure_fits("abcde").is_err());
}
