use crate::directory::{ContextFactory, LoaderMode, NamingEnvironment};
use crate::error::NamingError;
use crate::handle::NamingHandle;
use private::Sealed;
use std::borrow::Cow;
use std::fmt;
use tracing::debug;

#[derive(Debug, Default)]
pub struct NoProvider;

pub struct WithProvider<'p>(&'p dyn ContextFactory);

impl fmt::Debug for WithProvider<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WithProvider(..)")
    }
}

mod private {
    pub(super) trait Sealed {}
}
impl Sealed for NoProvider {}
impl Sealed for WithProvider<'_> {}

/// Type-state builder for [`NamingHandle`].
///
/// A handle cannot be opened until a [`ContextFactory`] is supplied.
#[allow(private_bounds)]
#[derive(Debug, Default)]
pub struct NamingHandleBuilder<S: Sealed = NoProvider> {
    state: S,
    environment: NamingEnvironment,
}

#[allow(private_bounds)]
impl<S: Sealed> NamingHandleBuilder<S> {
    #[must_use = "Replaces the whole naming environment"]
    pub fn environment(mut self, environment: NamingEnvironment) -> Self {
        self.environment = environment;
        self
    }

    #[must_use = "Sets the initial context factory identifier"]
    pub fn factory(mut self, factory: impl Into<Cow<'static, str>>) -> Self {
        self.environment.factory = factory.into();
        self
    }

    #[must_use = "Sets the loader mode"]
    pub const fn loader(mut self, loader: LoaderMode) -> Self {
        self.environment.loader = loader;
        self
    }

    fn transition<N: Sealed>(self, state: N) -> NamingHandleBuilder<N> {
        NamingHandleBuilder { state, environment: self.environment }
    }
}

impl NamingHandleBuilder<NoProvider> {
    #[must_use = "Creates a new handle builder with the embedded environment"]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "Sets the factory used to open the naming directory"]
    pub fn provider(self, provider: &dyn ContextFactory) -> NamingHandleBuilder<WithProvider<'_>> {
        self.transition(WithProvider(provider))
    }
}

impl NamingHandleBuilder<WithProvider<'_>> {
    /// Opens the naming directory described by the environment.
    ///
    /// # Errors
    ///
    /// Returns [`NamingError::InitializationFailure`] if the provider rejects the
    /// environment (unknown factory, unsupported loader) or cannot reach the registry.
    pub fn open(self) -> Result<NamingHandle, NamingError> {
        let directory = self.state.0.open(&self.environment).inspect_err(|err| {
            debug!(
                factory = %self.environment.factory,
                loader = %self.environment.loader,
                error = %err,
                "Naming directory refused to open"
            );
        })?;

        debug!(
            factory = %self.environment.factory,
            loader = %self.environment.loader,
            "Opened naming handle"
        );
        Ok(NamingHandle::new(directory, self.environment))
    }
}
