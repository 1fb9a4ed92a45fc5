use crate::error::NamingError;
use crate::value::{Binding, Resolved};
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Factory identifier of the in-process [`EmbeddedRegistry`](crate::EmbeddedRegistry).
pub const LOCAL_CONTEXT_FACTORY: &str = "jview.naming.LocalContextFactory";

/// Read access to a hierarchical naming directory.
///
/// Implementations report a missing or non-listable path as
/// [`NamingError::NotFound`]; callers are expected to treat that as recoverable.
pub trait NamingDirectory {
    /// Enumerates the direct children of `path`, in the directory's own order.
    ///
    /// # Errors
    /// [`NamingError::NotFound`] if `path` does not exist or is not a context.
    fn list(&self, path: &str) -> Result<Vec<Binding>, NamingError>;

    /// Resolves a full path to its bound object or sub-context.
    ///
    /// # Errors
    /// [`NamingError::NotFound`] if `path` does not exist.
    fn lookup(&self, path: &str) -> Result<Resolved, NamingError>;

    /// Releases any resources held by this directory.
    ///
    /// # Errors
    /// Implementation specific; [`NamingHandle`](crate::NamingHandle) swallows them.
    fn close(&mut self) -> Result<(), NamingError> {
        Ok(())
    }
}

impl<D: NamingDirectory + ?Sized> NamingDirectory for Box<D> {
    fn list(&self, path: &str) -> Result<Vec<Binding>, NamingError> {
        (**self).list(path)
    }

    fn lookup(&self, path: &str) -> Result<Resolved, NamingError> {
        (**self).lookup(path)
    }

    fn close(&mut self) -> Result<(), NamingError> {
        (**self).close()
    }
}

/// Opens a [`NamingDirectory`] for a given environment.
pub trait ContextFactory: Send + Sync {
    /// # Errors
    /// [`NamingError::InitializationFailure`] if the environment is rejected or the
    /// registry is unavailable.
    fn open(
        &self,
        environment: &NamingEnvironment,
    ) -> Result<Box<dyn NamingDirectory + Send>, NamingError>;
}

/// How the naming service is expected to be bootstrapped by the host.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum LoaderMode {
    /// Registry lives inside the current process.
    #[default]
    Embed,
    /// Registry is provided by the host's system loader.
    System,
    /// Registry is bound to the calling thread's context loader.
    Context,
    /// Registry is provided by an enclosing servlet container.
    TomcatSystem,
}

impl LoaderMode {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Embed => "embed",
            Self::System => "system",
            Self::Context => "context",
            Self::TomcatSystem => "tomcat-system",
        }
    }
}

impl fmt::Display for LoaderMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoaderMode {
    type Err = NamingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "embed" => Ok(Self::Embed),
            "system" => Ok(Self::System),
            "context" => Ok(Self::Context),
            "tomcat-system" => Ok(Self::TomcatSystem),
            other => Err(NamingError::InitializationFailure {
                message: other.to_owned().into(),
                context: Some("Unknown loader mode".into()),
            }),
        }
    }
}

/// Configuration a handle is opened with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamingEnvironment {
    pub factory: Cow<'static, str>,
    pub loader: LoaderMode,
}

impl Default for NamingEnvironment {
    fn default() -> Self {
        Self { factory: Cow::Borrowed(LOCAL_CONTEXT_FACTORY), loader: LoaderMode::Embed }
    }
}
