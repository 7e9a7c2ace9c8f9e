//! Shared newtypes used across the transport and feature layers.

// ─── KeyPrefix ───────────────────────────────────────────────────────────────

const SEPARATOR: char = '/';

/// A normalized KV folder path (e.g. `"conf/flags/"`).
///
/// Leading and trailing separators are trimmed and exactly one trailing
/// separator is appended. Internal separators are kept verbatim since Consul
/// matches key prefixes by exact string. An empty prefix (or `"/"`) becomes
/// the root path `"/"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyPrefix(String);

impl KeyPrefix {
    pub fn new(raw: &str) -> Self {
        let trimmed = raw.trim_matches(SEPARATOR);
        let mut path = String::with_capacity(trimmed.len() + 1);
        path.push_str(trimmed);
        path.push(SEPARATOR);
        Self(path)
    }

    /// The normalized path, always ending with exactly one `/`.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this prefix lists the whole store.
    pub fn is_root(&self) -> bool {
        self.0.len() == 1
    }

    /// Percent-encoded path segment for the KV endpoint URL.
    ///
    /// The root prefix encodes to an empty string so the request lands on
    /// `/v1/kv/`.
    pub fn url_path(&self) -> String {
        if self.is_root() {
            return String::new();
        }
        self.0
            .split(SEPARATOR)
            .map(|segment| urlencoding::encode(segment).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether `key` is the folder marker entry for this prefix.
    pub fn is_folder_marker(&self, key: &str) -> bool {
        key == self.0
    }

    /// Strip this prefix from the front of `key`.
    ///
    /// Keys outside the prefix are returned unchanged.
    pub fn strip<'a>(&self, key: &'a str) -> &'a str {
        key.strip_prefix(self.0.as_str()).unwrap_or(key)
    }
}

impl Default for KeyPrefix {
    fn default() -> Self {
        Self::new("")
    }
}

impl std::fmt::Display for KeyPrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for KeyPrefix {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for KeyPrefix {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}
