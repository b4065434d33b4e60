#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

pub use toml_config::PageContextConfig;

use std::collections::HashSet;
use std::sync::Arc;

/// Module that ships its own mobile layout handling.
pub const DEFAULT_CONFLICTING_MODULE: &str = "ContaoMobilePageLayoutBundle";

/// Cookie carrying the visitor's view preference.
pub const DEFAULT_VIEW_COOKIE: &str = "TL_VIEW";

/// Optional modules installed in this deployment.
///
/// Loaded once at startup and never mutated afterwards; clones share the same set.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActiveModules {
    names: Arc<HashSet<String>>,
}

impl ActiveModules {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn contains(&self, module: &str) -> bool {
        self.names.contains(module)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ActiveModules {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: Arc::new(iter.into_iter().map(Into::into).collect()),
        }
    }
}
