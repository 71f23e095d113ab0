use crate::compat::{String, ToString, Vec};

/// Ordered query-string parameters.
///
/// Each key appears at most once and maps to an optional value: `None` is a
/// bare flag (`?debug`), `Some("")` an explicit empty value (`?debug=`).
/// Keys keep the position of their first occurrence; new keys are appended.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryMap {
    params: Vec<(String, Option<String>)>,
}

impl QueryMap {
    pub fn new() -> Self {
        Self { params: Vec::new() }
    }

    /// Parse from a raw query string (without the leading `?`).
    ///
    /// Parts are split on `&`, then on the first `=`. A later duplicate
    /// overwrites the earlier value in place. Empty parts such as the middle
    /// of `a=1&&b=2` become an empty-string key with no value.
    pub fn parse(query: &str) -> Self {
        let mut map = Self::new();
        if query.is_empty() {
            return map;
        }

        for part in query.split('&') {
            match part.split_once('=') {
                Some((key, value)) => map.insert(key, Some(value)),
                None => map.insert(part, None),
            }
        }
        map
    }

    /// Look up a key.
    /// Returns `None` if absent, `Some(None)` for a bare flag.
    pub fn get(&self, key: &str) -> Option<Option<&str>> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_deref())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.params.iter().any(|(k, _)| k == key)
    }

    /// Set a key, overwriting in place if it exists, appending otherwise.
    pub fn insert(&mut self, key: &str, value: Option<&str>) {
        let value = value.map(ToString::to_string);
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some((_, slot)) => *slot = value,
            None => self.params.push((key.to_string(), value)),
        }
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Option<String>> {
        let pos = self.params.iter().position(|(k, _)| k == key)?;
        Some(self.params.remove(pos).1)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&str>)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(k, _)| k.as_str())
    }

    /// Convert to a query string without leading `?`, or empty string if no parameters.
    /// Bare flags serialize as `key`, empty values as `key=`.
    pub fn serialize(&self) -> String {
        let mut result = String::new();
        for (i, (key, value)) in self.params.iter().enumerate() {
            if i > 0 {
                result.push('&');
            }
            result.push_str(key);
            if let Some(value) = value {
                result.push('=');
                result.push_str(value);
            }
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(params = self.params.len(), query = %result, "serialized query");

        result
    }
}

impl core::fmt::Display for QueryMap {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl From<&str> for QueryMap {
    fn from(s: &str) -> Self {
        Self::parse(s)
    }
}

impl From<String> for QueryMap {
    fn from(s: String) -> Self {
        Self::parse(&s)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> FromIterator<(K, Option<V>)> for QueryMap {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value.as_ref().map(AsRef::as_ref));
        }
        map
    }
}
