//! Verify that cookie options end up as the expected cookie attributes.
use biscotti::SameSite;
use cookie_options::{CookieOptions, TWENTY_NINE_DAYS, cookie_options};
use googletest::{
    expect_that,
    prelude::{eq, none, some},
};

#[googletest::test]
fn default_cookie_attributes() {
    let cookie = cookie_options(None)
        .to_response_cookie("id", "value")
        .unwrap();

    expect_that!(cookie.name(), eq("id"));
    expect_that!(cookie.value(), eq("value"));
    expect_that!(cookie.path(), some(eq("/")));
    expect_that!(cookie.domain(), none());
    expect_that!(cookie.http_only(), some(eq(true)));
    expect_that!(cookie.secure(), none());
    expect_that!(cookie.same_site(), some(eq(SameSite::Lax)));
    expect_that!(
        cookie.max_age(),
        some(eq(time::Duration::seconds(TWENTY_NINE_DAYS)))
    );
}

#[googletest::test]
fn cookie_attributes_can_be_changed() {
    let options = cookie_options(Some(
        CookieOptions::new()
            .with_domain("my-domain.com")
            .with_path("/custom-path")
            .with_secure(true)
            .with_http_only(false)
            .with_same_site("Strict")
            .with_max_age(60),
    ));

    let cookie = options.to_response_cookie("my-cookie", "value").unwrap();
    expect_that!(cookie.domain(), eq(options.domain.as_deref()));
    expect_that!(cookie.path(), eq(options.path.as_deref()));
    expect_that!(cookie.secure(), some(eq(true)));
    expect_that!(cookie.http_only(), none());
    expect_that!(cookie.same_site(), some(eq(SameSite::Strict)));
    expect_that!(cookie.max_age(), some(eq(time::Duration::seconds(60))));
}

#[googletest::test]
fn missing_options_produce_no_attributes() {
    let cookie = CookieOptions::new()
        .to_response_cookie("id", "value")
        .unwrap();

    expect_that!(cookie.path(), none());
    expect_that!(cookie.domain(), none());
    expect_that!(cookie.http_only(), none());
    expect_that!(cookie.secure(), none());
    expect_that!(cookie.same_site(), none());
    expect_that!(cookie.max_age(), none());
}

#[test]
fn unknown_same_site_policies_are_rejected() {
    let options = cookie_options(Some(CookieOptions::new().with_same_site("sometimes")));

    let err = options.to_response_cookie("id", "value").unwrap_err();
    insta::assert_snapshot!(err, @"`sometimes` is not a valid `SameSite` policy. Expected one of `lax`, `strict` or `none`");
}

#[test]
fn non_attribute_options_are_ignored() {
    let options = cookie_options(Some(
        CookieOptions::new()
            .try_with("priority", "high")
            .unwrap()
            .with_max_cookie_length(1),
    ));

    // A value longer than `maxCookieLength` is still accepted here:
    // enforcing the limit is up to the caller.
    let cookie = options.to_response_cookie("id", "a long value").unwrap();
    assert_eq!(cookie.value(), "a long value");
}
