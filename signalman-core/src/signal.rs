//! Signal name patterns.

/// The wildcard spelling accepted wherever a signal or sender kind name is
/// expected.
pub const WILDCARD: &str = "*";

/// The signal filter a handler declares.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignalPattern {
    /// Match any signal name.
    Any,
    /// Match exactly this signal name.
    Name(String),
}

impl SignalPattern {
    /// Whether this pattern accepts the given signal name.
    pub fn matches(&self, signal: &str) -> bool {
        match self {
            SignalPattern::Any => true,
            SignalPattern::Name(name) => name == signal,
        }
    }
}

impl From<&str> for SignalPattern {
    fn from(signal: &str) -> Self {
        if signal == WILDCARD {
            SignalPattern::Any
        } else {
            SignalPattern::Name(signal.to_string())
        }
    }
}

impl From<String> for SignalPattern {
    fn from(signal: String) -> Self {
        SignalPattern::from(signal.as_str())
    }
}
