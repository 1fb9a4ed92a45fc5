use crate::builder::NamingHandleBuilder;
use crate::directory::{NamingDirectory, NamingEnvironment};
use crate::error::NamingError;
use crate::value::{Binding, Resolved};
use std::fmt;
use tracing::debug;

/// An open connection to a naming directory.
///
/// The handle owns its directory exclusively and releases it exactly once: either
/// through an explicit [`NamingHandle::close`] or when dropped. After release every
/// `list`/`lookup` reports [`NamingError::NotFound`].
///
/// # Example
///
/// ```rust
/// use jview_naming::{EmbeddedRegistry, NamingDirectory, NamingHandle};
///
/// let registry = EmbeddedRegistry::new();
/// registry.bind("/env/mode", "dev").unwrap();
///
/// let mut handle = NamingHandle::builder().provider(&registry).open().unwrap();
/// assert_eq!(handle.list("/env").unwrap().len(), 1);
///
/// handle.close();
/// handle.close(); // no-op
/// assert!(handle.list("/env").unwrap_err().is_not_found());
/// ```
pub struct NamingHandle {
    directory: Option<Box<dyn NamingDirectory + Send>>,
    environment: NamingEnvironment,
}

impl fmt::Debug for NamingHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NamingHandle")
            .field("open", &self.is_open())
            .field("environment", &self.environment)
            .finish()
    }
}

impl NamingHandle {
    #[must_use = "The handle is not opened until you call .open()"]
    pub fn builder() -> NamingHandleBuilder {
        NamingHandleBuilder::new()
    }

    pub(crate) fn new(
        directory: Box<dyn NamingDirectory + Send>,
        environment: NamingEnvironment,
    ) -> Self {
        Self { directory: Some(directory), environment }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.directory.is_some()
    }

    /// The environment this handle was opened with.
    #[must_use]
    pub const fn environment(&self) -> &NamingEnvironment {
        &self.environment
    }

    /// Releases the underlying directory. Calling it again is a no-op.
    pub fn close(&mut self) {
        let Some(mut directory) = self.directory.take() else {
            return;
        };
        match directory.close() {
            Ok(()) => debug!(factory = %self.environment.factory, "Closed naming handle"),
            Err(err) => debug!(error = %err, "Naming directory close failed; ignoring"),
        }
    }

    fn open_directory(&self, path: &str) -> Result<&(dyn NamingDirectory + Send), NamingError> {
        self.directory.as_deref().ok_or_else(|| NamingError::NotFound {
            message: path.to_owned().into(),
            context: Some("Naming handle is closed".into()),
        })
    }
}

impl NamingDirectory for NamingHandle {
    fn list(&self, path: &str) -> Result<Vec<Binding>, NamingError> {
        self.open_directory(path)?.list(path)
    }

    fn lookup(&self, path: &str) -> Result<Resolved, NamingError> {
        self.open_directory(path)?.lookup(path)
    }

    fn close(&mut self) -> Result<(), NamingError> {
        Self::close(self);
        Ok(())
    }
}

impl Drop for NamingHandle {
    fn drop(&mut self) {
        Self::close(self);
    }
}
