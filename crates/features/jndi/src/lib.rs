//! Naming tree slice: a read-only, best-effort listing of everything bound under a path.
//!
//! [`flatten`] walks a [`NamingDirectory`](jview_naming::NamingDirectory) depth-first and
//! emits one [`FlatRecord`] per leaf. Missing branches are skipped, never reported as
//! errors. [`JndiService`] owns the naming session around it.
//!
//! ```rust
//! use jview_jndi::JndiService;
//! use jview_naming::{EmbeddedRegistry, NamingEnvironment};
//!
//! let registry = EmbeddedRegistry::new();
//! registry.bind("/a/x", "1").unwrap();
//! registry.bind("/a/y/z", "2").unwrap();
//!
//! let service = JndiService::open(&registry, NamingEnvironment::default());
//! let paths: Vec<_> = service.listing("/a").into_iter().map(|r| r.path).collect();
//! assert_eq!(paths, ["/a/x", "/a/y/z"]);
//! ```

mod flatten;
mod service;

pub use flatten::{Listing, TraversalStats, flatten, flatten_into};
pub use jview_domain::record::FlatRecord;
pub use service::JndiService;
