//! View-facing load state.
//!
//! Loading, empty, and error states are distinct on screen: a view renders
//! an explicit "Loading…" for [`Loadable::Loading`], its own empty message
//! for `Ready` with no content, and the error message for `Failed` — never
//! a spinner stuck forever and never an empty grid standing in for an error.

use karai_api::ApiError;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Loadable<T> {
    #[default]
    NotAsked,
    Loading,
    Ready(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn ready(&self) -> Option<&T> {
        match self {
            Self::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn from_result(result: Result<T, ApiError>) -> Self {
        match result {
            Ok(value) => Self::Ready(value),
            Err(e) => Self::Failed(e.to_string()),
        }
    }
}
