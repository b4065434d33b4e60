use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Identifier of a layout record. Zero is the host's "not configured" value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LayoutId(pub u32);

impl LayoutId {
    pub fn is_unset(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for LayoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for LayoutId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub id: LayoutId,
    #[serde(default)]
    pub name: String,
}

impl Layout {
    pub fn new(id: impl Into<LayoutId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub alias: String,
    /// Default layout chosen by the host.
    #[serde(default)]
    pub layout: Option<LayoutId>,
    #[serde(default)]
    pub mobile_layout: Option<LayoutId>,
    /// Written by the resolver on every call.
    #[serde(default)]
    pub is_mobile: bool,
}

impl Page {
    pub fn with_mobile_layout(mobile_layout: impl Into<LayoutId>) -> Self {
        Self {
            mobile_layout: Some(mobile_layout.into()),
            ..Self::default()
        }
    }

    /// The mobile layout id, treating `0` like an absent value.
    pub fn configured_mobile_layout(&self) -> Option<LayoutId> {
        self.mobile_layout.filter(|id| !id.is_unset())
    }
}

/// The in-flight request as far as layout selection cares about it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    cookies: HashMap<String, String>,
    headers: HashMap<String, String>,
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Header names are stored lowercased.
    pub fn with_header(mut self, name: impl AsRef<str>, value: impl Into<String>) -> Self {
        self.headers
            .insert(name.as_ref().to_ascii_lowercase(), value.into());
        self
    }

    pub fn cookie(&self, name: &str) -> Option<&str> {
        self.cookies.get(name).map(String::as_str)
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }
}
