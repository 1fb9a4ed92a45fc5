use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::path::PathBuf;
use std::sync::Arc;

/// Factory identifier of the embedded local registry.
pub const DEFAULT_FACTORY: &str = "jview.naming.LocalContextFactory";
/// Loader mode of the embedded local registry.
pub const DEFAULT_LOADER: &str = "embed";

/// Top-level viewer configuration.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ViewerConfigInner {
    pub naming: NamingConfig,
    pub registry: RegistryConfig,
    pub logging: LoggingConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into subsystems.
#[derive(Default, Debug, Clone, Deserialize)]
pub struct ViewerConfig {
    #[serde(flatten, default)]
    inner: Arc<ViewerConfigInner>,
}

impl Deref for ViewerConfig {
    type Target = ViewerConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for ViewerConfig {
    fn deref_mut(&mut self) -> &mut ViewerConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Environment used to open the naming handle.
///
/// `loader` stays a string here; an unknown value disables the view instead of
/// failing config loading.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub factory: String,
    pub loader: String,
    /// Path listed when the caller does not name one.
    pub root: String,
}

/// Where the embedded registry gets its initial bindings from.
#[derive(Default, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub seed: Option<PathBuf>,
}

/// Logger settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`, `off`.
    pub level: String,
    /// Directory for rolling log files; console only when absent.
    pub path: Option<PathBuf>,
    pub json: bool,
}

// --- Default ---

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            factory: DEFAULT_FACTORY.to_owned(),
            loader: DEFAULT_LOADER.to_owned(),
            root: String::new(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), path: None, json: false }
    }
}
