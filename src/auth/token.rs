// ABOUTME: Token type - an opaque '|'-separated key=value BV-BRC auth token.
// ABOUTME: Exposes the username segment and never prints the secret in Debug.

use std::fmt;

/// A BV-BRC authentication token.
///
/// The token is sent verbatim as the `Authorization` header value. An empty
/// token means the client is unauthenticated.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Token(String);

impl Token {
    /// Wrap a raw token string. Surrounding whitespace is trimmed.
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// An empty, unauthenticated token.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_authenticated(&self) -> bool {
        !self.0.is_empty()
    }

    /// The value of the `un` segment, or an empty string if there is none.
    pub fn username(&self) -> &str {
        self.0
            .split('|')
            .find_map(|segment| segment.strip_prefix("un="))
            .unwrap_or("")
    }

    /// Header value for outgoing requests, if authenticated.
    pub fn header_value(&self) -> Option<&str> {
        self.is_authenticated().then_some(self.0.as_str())
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_authenticated() {
            write!(f, "Token(un={})", self.username())
        } else {
            f.write_str("Token(<none>)")
        }
    }
}
