use serde::{Deserialize, Serialize};

/// Outcome of the last load of a view backed by remote data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum ViewState<T> {
    /// Nothing requested yet.
    Idle,
    Ready(T),
    /// Inline error message.
    Failed(String),
}

// Not derived: the derive would require `T: Default`.
impl<T> Default for ViewState<T> {
    fn default() -> Self {
        ViewState::Idle
    }
}

impl<T> ViewState<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            ViewState::Ready(data) => Some(data),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ViewState::Failed(message) => Some(message.as_str()),
            _ => None,
        }
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, ViewState::Idle)
    }
}
