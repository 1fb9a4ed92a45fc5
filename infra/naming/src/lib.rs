//! Naming directory client.
//!
//! Read access to a hierarchical naming registry (a tree of named bindings, each either a
//! sub-context or a leaf value) behind the [`NamingDirectory`] trait, plus the pieces
//! needed to obtain one:
//!
//! 1.  **[`EmbeddedRegistry`]**: an in-process, thread-safe naming tree. It is the
//!     "local" registry addressed by [`LOCAL_CONTEXT_FACTORY`].
//! 2.  **[`NamingHandle`]**: an exclusively owned, scoped connection opened through a
//!     [`ContextFactory`]. Released exactly once (explicit `close()` or `Drop`).
//! 3.  **[`NamingHandleBuilder`]**: a type-state builder for the handle's environment.
//!
//! Lookups return a tagged [`Resolved`] (`Leaf` or `Context`) instead of a dynamic
//! object, so "is this a sub-context" is a plain match.
//!
//! # Example
//!
//! ```rust
//! use jview_naming::{EmbeddedRegistry, LoaderMode, NamingDirectory, NamingHandle, Resolved};
//!
//! let registry = EmbeddedRegistry::new();
//! registry.bind("/app/datasource", "jdbc:h2:mem").unwrap();
//! registry.bind_null("/app/optional").unwrap();
//!
//! let handle = NamingHandle::builder()
//!     .loader(LoaderMode::Embed)
//!     .provider(&registry)
//!     .open()
//!     .unwrap();
//!
//! assert!(handle.lookup("/app").unwrap().is_sub_context());
//! assert_eq!(handle.lookup("/app/optional").unwrap(), Resolved::Leaf(None));
//! ```

mod builder;
mod directory;
mod error;
mod handle;
mod path;
mod registry;
mod value;

pub use builder::{NamingHandleBuilder, NoProvider, WithProvider};
pub use directory::{ContextFactory, LOCAL_CONTEXT_FACTORY, LoaderMode, NamingDirectory, NamingEnvironment};
pub use error::{NamingError, NamingErrorExt};
pub use handle::NamingHandle;
pub use path::child_path;
pub use registry::EmbeddedRegistry;
pub use value::{Binding, BoundValue, CONTEXT_CLASS_HINT, ContextRef, NULL_CLASS_HINT, Resolved};
