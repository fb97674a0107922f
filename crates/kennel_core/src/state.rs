use std::sync::Arc;

use crate::{Breeds, Probe};

/// Lifecycle of a value fetched from an asynchronous collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Remote<T> {
    NotAsked,
    Loading,
    Failed(String),
    Ready(T),
}

impl<T> Default for Remote<T> {
    fn default() -> Self {
        Remote::NotAsked
    }
}

impl<T> Remote<T> {
    pub fn ready(&self) -> Option<&T> {
        match self {
            Remote::Ready(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Remote::Ready(_))
    }

    pub fn failure(&self) -> Option<&str> {
        match self {
            Remote::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// An already-decoded picture, as handed over by the drop surface.
///
/// The bytes are shared so cloning state snapshots stays cheap; equality
/// compares contents, which keeps state value-comparable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Picture(Arc<Vec<u8>>);

impl Picture {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(Arc::new(bytes))
    }

    pub fn bytes(&self) -> &[u8] {
        &self.0
    }
}

/// Result of a finished classify-then-search chain.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub probe: Probe,
    pub pack: Vec<String>,
}

/// Full application state: one immutable snapshot per dispatch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppState {
    pub(crate) picture: Option<Picture>,
    pub(crate) model: Remote<()>,
    pub(crate) breeds: Remote<Breeds>,
    pub(crate) search: Remote<SearchOutcome>,
}

impl AppState {
    pub fn picture(&self) -> Option<&Picture> {
        self.picture.as_ref()
    }

    pub fn model(&self) -> &Remote<()> {
        &self.model
    }

    pub fn breeds(&self) -> &Remote<Breeds> {
        &self.breeds
    }

    pub fn search(&self) -> &Remote<SearchOutcome> {
        &self.search
    }
}
