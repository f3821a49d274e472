//! Records: string-keyed mappings to arbitrary values.
//!
//! A [`Record`] is a `serde_json` object; nested records (an article's
//! `author`, say) are nested objects. Lookups never fail: an absent key, or a
//! lookup on something that is not an object, yields `Value::Null`.

pub use serde_json::Value;

/// A mapping from string keys to arbitrary values.
pub type Record = Value;

/// An ordered sequence of records.
pub type Collection = Vec<Record>;

/// Returns an accessor for the value stored under `key`.
///
/// The accessor takes the record by value and moves the field out of it, so
/// chained accessors never clone intermediate records.
///
/// # Examples
///
/// ```
/// use pointfree::compose;
/// use pointfree::record::get;
/// use serde_json::json;
///
/// let author_name = compose!(get("name"), get("author"));
/// let article = json!({ "title": "Hello world", "author": { "name": "Baz Baz" } });
///
/// assert_eq!(author_name(article), "Baz Baz");
/// assert!(get("missing")(json!({})).is_null());
/// ```
pub fn get<K>(key: K) -> impl Fn(Record) -> Record + Clone
where
    K: Into<String>,
{
    let key = key.into();
    move |record| take_field(record, &key)
}

/// Moves the value stored under `key` out of `record`.
pub fn take_field(record: Record, key: &str) -> Record {
    match record {
        Value::Object(mut fields) => fields.remove(key).unwrap_or(Value::Null),
        _ => Value::Null,
    }
}
