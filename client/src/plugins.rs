//! Cross-cutting UI capabilities registered once at startup.
//!
//! SYSTEM CONTEXT
//! ==============
//! The shell installs routing, theme, and icon support before any route
//! renders. Plugins are collected into a value and handed to
//! [`crate::app::bootstrap`] instead of being registered on global state.

#[cfg(test)]
#[path = "plugins_test.rs"]
mod plugins_test;

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Capability {
    Router,
    Theme,
    Icons,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Capability::Router => "router",
            Capability::Theme => "theme",
            Capability::Icons => "icons",
        })
    }
}

/// A named capability, optionally backed by a stylesheet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Plugin {
    pub name: &'static str,
    pub capability: Capability,
    pub stylesheet: Option<&'static str>,
}

impl Plugin {
    pub const ROUTER: Plugin = Plugin { name: "leptos-router", capability: Capability::Router, stylesheet: None };

    pub const BOOTSTRAP: Plugin = Plugin {
        name: "bootstrap",
        capability: Capability::Theme,
        stylesheet: Some("https://cdn.jsdelivr.net/npm/bootstrap@4.5.3/dist/css/bootstrap.min.css"),
    };

    pub const BOOTSTRAP_ICONS: Plugin = Plugin {
        name: "bootstrap-icons",
        capability: Capability::Icons,
        stylesheet: Some("https://cdn.jsdelivr.net/npm/bootstrap-icons@1.3.0/font/bootstrap-icons.css"),
    };
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PluginError {
    #[error("{capability} capability already provided by {existing}")]
    Duplicate { capability: Capability, existing: &'static str },

    #[error("required {0} capability is not installed")]
    Missing(Capability),
}

/// Installed plugins, at most one per capability, in install order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Plugins {
    installed: Vec<Plugin>,
}

impl Plugins {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Router, Bootstrap theme, and Bootstrap icons.
    ///
    /// # Errors
    ///
    /// Never fails in practice; the result mirrors [`Plugins::install`].
    pub fn standard() -> Result<Self, PluginError> {
        Self::new()
            .install(Plugin::ROUTER)?
            .install(Plugin::BOOTSTRAP)?
            .install(Plugin::BOOTSTRAP_ICONS)
    }

    /// Add `plugin`.
    ///
    /// # Errors
    ///
    /// Returns [`PluginError::Duplicate`] if its capability is already provided.
    pub fn install(mut self, plugin: Plugin) -> Result<Self, PluginError> {
        if let Some(existing) = self.get(plugin.capability) {
            return Err(PluginError::Duplicate { capability: plugin.capability, existing: existing.name });
        }
        log::debug!("installing plugin {} ({})", plugin.name, plugin.capability);
        self.installed.push(plugin);
        Ok(self)
    }

    #[must_use]
    pub fn get(&self, capability: Capability) -> Option<&Plugin> {
        self.installed.iter().find(|p| p.capability == capability)
    }

    #[must_use]
    pub fn has(&self, capability: Capability) -> bool {
        self.get(capability).is_some()
    }

    /// # Errors
    ///
    /// Returns [`PluginError::Missing`] if no plugin provides `capability`.
    pub fn require(&self, capability: Capability) -> Result<&Plugin, PluginError> {
        self.get(capability).ok_or(PluginError::Missing(capability))
    }

    /// Stylesheet hrefs in install order.
    pub fn stylesheets(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.installed.iter().filter_map(|p| p.stylesheet)
    }
}
