//! Integration tests for records composed with the combinators.
//!
//! Mirrors the article exercises: author names are extracted with nothing but
//! `get`, `map` and `compose!`, and authorship is checked by composing
//! `contains` onto that.

#![cfg(all(feature = "record", feature = "derive"))]

use pointfree::list::{contains, map};
use pointfree::record::{Collection, Record, get, take_field};
use pointfree::{compose, curry};
use rstest::{fixture, rstest};
use serde_json::json;

#[fixture]
fn articles() -> Collection {
    vec![
        json!({
            "title": "Everything sucks",
            "url": "everythingsucks.com",
            "author": { "name": "Foo Bar", "email": "foo@bar.com" }
        }),
        json!({
            "title": "Hello world",
            "url": "helloworld.com",
            "author": { "name": "Baz Baz", "email": "baz@baz.com" }
        }),
    ]
}

// Same definitions as the `articles` sample exercises, built from library primitives only.
fn names() -> impl Fn(Collection) -> Vec<Record> {
    compose!(map(compose!(get("name"), get("author"))))
}

fn is_author(name: &str, articles: Collection) -> bool {
    compose!(contains(name), names())(articles)
}

#[rstest]
fn test_curried_get_reads_a_key() {
    let get = curry!(|key: &str, record: Record| take_field(record, key));

    assert_eq!(get("name")(json!({ "name": "Baz" })), "Baz");
}

#[rstest]
fn test_names_lists_authors_in_order(articles: Collection) {
    assert_eq!(names()(articles), vec!["Foo Bar", "Baz Baz"]);
}

#[rstest]
#[case("random guy", false)]
#[case("Baz Baz", true)]
#[case("Foo Bar", true)]
#[case("foo bar", false)]
fn test_is_author(articles: Collection, #[case] name: &str, #[case] expected: bool) {
    assert_eq!(is_author(name, articles), expected);
}

#[rstest]
fn test_names_of_record_without_author_is_null() {
    let orphan = vec![json!({ "title": "Untitled" })];

    assert_eq!(names()(orphan), vec![Record::Null]);
}

#[rstest]
fn test_names_of_empty_collection() {
    assert!(names()(Vec::new()).is_empty());
    assert!(!is_author("anyone", Vec::new()));
}

#[rstest]
fn test_get_chain_reads_nested_fields(articles: Collection) {
    let emails = map(compose!(get("email"), get("author")));

    assert_eq!(emails(articles), vec!["foo@bar.com", "baz@baz.com"]);
}
