//! Query-string handling

use url::form_urlencoded;

/// Value of `key` in a query string (leading `?` optional); first wins
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    let query = query.strip_prefix('?').unwrap_or(query);
    form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
}

/// Replacement URL: `base` alone, or `base?key=value`
#[must_use]
pub fn location(base: &str, key: &str, value: Option<&str>) -> String {
    match value {
        None => base.to_string(),
        Some(value) => {
            let query = form_urlencoded::Serializer::new(String::new())
                .append_pair(key, value)
                .finish();
            format!("{base}?{query}")
        }
    }
}
