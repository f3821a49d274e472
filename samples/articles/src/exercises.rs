//! The exercises, each written in point-free style.
//!
//! Functions that would be pure glue in a dynamic language are returned as
//! closures here (`names()`, `length()`, `average()`), so they can be stored,
//! composed further, and applied later.

use pointfree::compose;
use pointfree::compose::fork;
use pointfree::list::{Numeric, contains, divide, map, size, split, sum};
use pointfree::record::{Collection, Record, get};
use serde_json::json;

/// The two sample articles.
pub fn sample_articles() -> Collection {
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

/// Sizes of the words in a sentence split on single spaces.
///
/// ```
/// assert_eq!(articles::exercises::length()("once uppon the time"), vec![4, 5, 3, 4]);
/// ```
pub fn length() -> impl Fn(&str) -> Vec<usize> {
    compose!(map(size), split(" "))
}

/// Author names of every article, in order.
///
/// Built from `get`, `map` and `compose!` only.
pub fn names() -> impl Fn(Collection) -> Vec<Record> {
    compose!(map(compose!(get("name"), get("author"))))
}

/// Whether `name` wrote any of `articles`.
pub fn is_author(name: &str, articles: Collection) -> bool {
    compose!(contains(name), names())(articles)
}

/// Mean of a list, from `fork`, `divide`, `sum` and `size` only.
///
/// An empty list yields `NaN` for floats and panics for integers.
pub fn average<N: Numeric>() -> impl Fn(Vec<N>) -> N {
    compose!(fork(divide, sum, size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_articles_have_authors() {
        assert!(
            sample_articles()
                .iter()
                .all(|article| article["author"]["name"].is_string())
        );
    }
}
