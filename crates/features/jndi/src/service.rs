use crate::flatten::{Listing, flatten};
use jview_domain::config::NamingConfig;
use jview_domain::record::FlatRecord;
use jview_naming::{ContextFactory, LoaderMode, NamingEnvironment, NamingHandle};
use tracing::{debug, warn};

/// A listing session over one naming handle.
///
/// A service whose handle failed to open is *disabled*: every listing is empty and
/// nothing is ever raised to the caller. Dropping the service releases the handle.
#[derive(Debug)]
pub struct JndiService {
    handle: Option<NamingHandle>,
}

impl JndiService {
    /// Opens a session against `provider`.
    ///
    /// An initialization failure is logged and leaves the service disabled.
    pub fn open(provider: &dyn ContextFactory, environment: NamingEnvironment) -> Self {
        let factory = environment.factory.clone();
        let loader = environment.loader;

        match NamingHandle::builder().environment(environment).provider(provider).open() {
            Ok(handle) => Self { handle: Some(handle) },
            Err(err) => {
                warn!(%factory, %loader, error = %err, "Naming directory unavailable; listings disabled");
                Self::disabled()
            },
        }
    }

    /// Opens a session using the `[naming]` configuration section.
    pub fn from_config(provider: &dyn ContextFactory, config: &NamingConfig) -> Self {
        let loader = match config.loader.parse::<LoaderMode>() {
            Ok(loader) => loader,
            Err(err) => {
                warn!(loader = %config.loader, error = %err, "Invalid loader mode; listings disabled");
                return Self::disabled();
            },
        };

        Self::open(provider, NamingEnvironment { factory: config.factory.clone().into(), loader })
    }

    /// A session without a handle.
    #[must_use]
    pub const fn disabled() -> Self {
        Self { handle: None }
    }

    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.handle.is_some()
    }

    /// The environment of the open handle, if any.
    #[must_use]
    pub fn environment(&self) -> Option<&NamingEnvironment> {
        self.handle.as_ref().map(NamingHandle::environment)
    }

    /// Every leaf reachable from `path`, depth-first. Empty when disabled.
    #[must_use]
    pub fn listing(&self, path: &str) -> Vec<FlatRecord> {
        self.listing_with_stats(path).records
    }

    /// Like [`JndiService::listing`], with traversal counters.
    #[must_use]
    pub fn listing_with_stats(&self, path: &str) -> Listing {
        let Some(handle) = self.handle.as_ref() else {
            debug!(path, "Listing requested on disabled naming session");
            return Listing::default();
        };

        let listing = flatten(handle, path);
        debug!(
            path,
            leaves = listing.stats.leaves,
            contexts = listing.stats.contexts,
            skipped_lists = listing.stats.skipped_lists,
            skipped_lookups = listing.stats.skipped_lookups,
            "Naming tree flattened"
        );
        listing
    }

    /// Releases the handle. Later listings are empty; calling it again is a no-op.
    pub fn close(&mut self) {
        if let Some(mut handle) = self.handle.take() {
            handle.close();
        }
    }
}
