//! Per-call request options and query string encoding

use std::fmt;

use url::form_urlencoded;

/// A primitive query value. `Null` entries are dropped when encoding.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(s) => f.write_str(s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Float(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::Null => Ok(()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

macro_rules! int_param {
    ($($ty:ty),*) => {
        $(impl From<$ty> for ParamValue {
            fn from(value: $ty) -> Self {
                ParamValue::Int(value as i64)
            }
        })*
    };
}

int_param!(i8, i16, i32, i64, u8, u16, u32, usize);

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(ParamValue::Null, Into::into)
    }
}

/// Ordered query parameters; insertion order is preserved in the encoded string.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a parameter
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`QueryParams::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// True when no parameter would survive encoding
    pub fn is_empty(&self) -> bool {
        self.entries.iter().all(|(_, v)| *v == ParamValue::Null)
    }

    /// URL-encode the non-null entries, e.g. `a=1&c=x`
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.entries {
            if *value != ParamValue::Null {
                serializer.append_pair(key, &value.to_string());
            }
        }
        serializer.finish()
    }

    /// Append the encoded query to an endpoint path
    pub fn apply(&self, endpoint: &str) -> String {
        if self.is_empty() {
            return endpoint.to_string();
        }
        let separator = if endpoint.contains('?') { '&' } else { '?' };
        format!("{}{}{}", endpoint, separator, self.encode())
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}

/// Per-call options: extra headers and query parameters
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub headers: Vec<(String, String)>,
    pub params: QueryParams,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.params.insert(key, value);
        self
    }

    pub fn params(mut self, params: QueryParams) -> Self {
        self.params = params;
        self
    }
}

impl From<QueryParams> for RequestOptions {
    fn from(params: QueryParams) -> Self {
        RequestOptions::new().params(params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_entries_are_omitted() {
        let params = QueryParams::new()
            .with("a", 1)
            .with("b", None::<i32>)
            .with("c", "x");

        assert_eq!(params.encode(), "a=1&c=x");
    }

    #[test]
    fn test_values_are_url_encoded() {
        let params = QueryParams::new().with("q", "red shoes & bags");
        assert_eq!(params.encode(), "q=red+shoes+%26+bags");
    }

    #[test]
    fn test_bool_and_float_stringified() {
        let params = QueryParams::new().with("visible", true).with("min", 2.5);
        assert_eq!(params.encode(), "visible=true&min=2.5");
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let params = QueryParams::new()
            .with("page", 0)
            .with("size", 10)
            .with("page", 3);
        assert_eq!(params.encode(), "page=3&size=10");
    }

    #[test]
    fn test_apply() {
        let empty = QueryParams::new().with("b", None::<String>);
        assert_eq!(empty.apply("/v1/products"), "/v1/products");

        let params = QueryParams::new().with("page", 1);
        assert_eq!(params.apply("/v1/products"), "/v1/products?page=1");
        assert_eq!(params.apply("/v1/products?x=y"), "/v1/products?x=y&page=1");
    }

    #[test]
    fn test_from_iterator() {
        let params: QueryParams = vec![("include", "children")].into_iter().collect();
        assert_eq!(params.get("include"), Some(&ParamValue::Str("children".into())));
    }
}
