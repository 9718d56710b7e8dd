use std::fmt;

use optdom::NodeId;

/// Placeholder shown in the filter input when none is configured.
pub const DEFAULT_PLACEHOLDER: &str = "Search options...";

/// The control to enhance: a node handle or a selector to look up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Node(NodeId),
    Selector(String),
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Node(id) => write!(f, "{id}"),
            Self::Selector(selector) => write!(f, "selector {selector:?}"),
        }
    }
}

impl From<NodeId> for Target {
    fn from(id: NodeId) -> Self {
        Self::Node(id)
    }
}

impl From<&str> for Target {
    fn from(selector: &str) -> Self {
        Self::Selector(selector.to_string())
    }
}

impl From<String> for Target {
    fn from(selector: String) -> Self {
        Self::Selector(selector)
    }
}

/// Construction parameters for [`OptionFilter`](crate::OptionFilter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterParams {
    pub target: Target,
    /// Placeholder for the filter input. `None` or an empty string means
    /// [`DEFAULT_PLACEHOLDER`].
    pub placeholder: Option<String>,
}

impl FilterParams {
    pub fn new(target: impl Into<Target>) -> Self {
        Self {
            target: target.into(),
            placeholder: None,
        }
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub(crate) fn resolved_placeholder(&self) -> String {
        self.placeholder
            .as_deref()
            .filter(|p| !p.is_empty())
            .unwrap_or(DEFAULT_PLACEHOLDER)
            .to_string()
    }
}
