//! CSS custom-property helpers for color theming.

use indexmap::IndexMap;

/// Capability to resolve a computed style property.
///
/// Detached from any ambient document handle so hosts wire in their real
/// computed-style lookup and tests inject a static one.
pub trait StyleSource {
    /// Resolved value of a custom property; empty when the property is unset.
    fn resolved_property(&self, name: &str) -> String;
}

/// Reformats a space-separated channel triplet (or quad) custom property into
/// an `rgb(...)` color function string.
///
/// No validation happens: an unset or malformed property flows straight
/// through and may yield a meaningless color string.
#[must_use]
pub fn css_rgb_var<S: StyleSource + ?Sized>(source: &S, name: &str) -> String {
    let value = source.resolved_property(name);
    let channels: Vec<&str> = value.trim().split(' ').collect();
    format!("rgb({})", channels.join(","))
}

/// Insertion-ordered in-memory style source for tests and headless hosts.
#[derive(Debug, Clone, Default)]
pub struct StaticStyleSource {
    properties: IndexMap<String, String>,
}

impl StaticStyleSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(name.into(), value.into());
        self
    }

    pub fn set_property(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(name.into(), value.into());
    }
}

impl StyleSource for StaticStyleSource {
    fn resolved_property(&self, name: &str) -> String {
        self.properties.get(name).cloned().unwrap_or_default()
    }
}
