/*!
 * Header Maps
 *
 * Case-insensitive, insertion-ordered, multi-value header map plus a test
 * adapter that accepts plain strings.
 *
 * # Design: Wrap and Delegate
 *
 * `TestHeaderMap` owns a `HeaderMapImpl` and forwards the `HeaderMap`
 * capability to it. Its own methods only normalize string keys into
 * `LowerCaseString` before delegating.
 */

use std::fmt;

/// Header name normalized to ASCII lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LowerCaseString(String);

impl LowerCaseString {
    pub fn new(key: impl Into<String>) -> Self {
        let mut key = key.into();
        key.make_ascii_lowercase();
        Self(key)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LowerCaseString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LowerCaseString {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for LowerCaseString {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}

impl From<&LowerCaseString> for LowerCaseString {
    fn from(key: &LowerCaseString) -> Self {
        key.clone()
    }
}

/// Header map capability
///
/// Keys are already normalized; `get` returns the first value for a key.
pub trait HeaderMap {
    /// Append a copy of `value` under `key`, keeping earlier values
    fn add_copy(&mut self, key: &LowerCaseString, value: &str);

    /// First value stored under `key`
    fn get(&self, key: &LowerCaseString) -> Option<&str>;

    /// Remove every value under `key`, returning how many were removed
    fn remove(&mut self, key: &LowerCaseString) -> usize;

    /// Number of stored (key, value) entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Entries in insertion order
    fn iter(&self) -> Box<dyn Iterator<Item = (&LowerCaseString, &str)> + '_>;
}

/// Insertion-ordered header storage
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderMapImpl {
    entries: Vec<(LowerCaseString, String)>,
}

impl HeaderMapImpl {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HeaderMap for HeaderMapImpl {
    fn add_copy(&mut self, key: &LowerCaseString, value: &str) {
        self.entries.push((key.clone(), value.to_string()));
    }

    fn get(&self, key: &LowerCaseString) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    fn remove(&mut self, key: &LowerCaseString) -> usize {
        let before = self.entries.len();
        self.entries.retain(|(k, _)| k != key);
        before - self.entries.len()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&LowerCaseString, &str)> + '_> {
        Box::new(self.entries.iter().map(|(k, v)| (k, v.as_str())))
    }
}

/// Header map for tests that takes plain `&str` keys
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TestHeaderMap {
    inner: HeaderMapImpl,
}

impl TestHeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from (key, value) pairs, in order
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<LowerCaseString>,
        V: AsRef<str>,
    {
        let mut map = Self::new();
        for (key, value) in pairs {
            map.add_copy(key, value.as_ref());
        }
        map
    }

    /// Copy every entry of another map
    pub fn from_map(other: &dyn HeaderMap) -> Self {
        let mut inner = HeaderMapImpl::new();
        for (key, value) in other.iter() {
            inner.add_copy(key, value);
        }
        Self { inner }
    }

    pub fn add_copy(&mut self, key: impl Into<LowerCaseString>, value: &str) {
        self.inner.add_copy(&key.into(), value);
    }

    /// First value for `key`, or an empty string when absent
    pub fn get_(&self, key: impl Into<LowerCaseString>) -> String {
        self.inner
            .get(&key.into())
            .map(str::to_string)
            .unwrap_or_default()
    }

    pub fn has(&self, key: impl Into<LowerCaseString>) -> bool {
        self.inner.get(&key.into()).is_some()
    }

    pub fn inner(&self) -> &HeaderMapImpl {
        &self.inner
    }

    pub fn into_inner(self) -> HeaderMapImpl {
        self.inner
    }
}

impl HeaderMap for TestHeaderMap {
    fn add_copy(&mut self, key: &LowerCaseString, value: &str) {
        self.inner.add_copy(key, value);
    }

    fn get(&self, key: &LowerCaseString) -> Option<&str> {
        self.inner.get(key)
    }

    fn remove(&mut self, key: &LowerCaseString) -> usize {
        self.inner.remove(key)
    }

    fn len(&self) -> usize {
        self.inner.len()
    }

    fn iter(&self) -> Box<dyn Iterator<Item = (&LowerCaseString, &str)> + '_> {
        self.inner.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for TestHeaderMap
where
    K: Into<LowerCaseString>,
    V: AsRef<str>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::from_pairs(iter)
    }
}
