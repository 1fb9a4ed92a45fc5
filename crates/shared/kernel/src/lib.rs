//! Kernel utilities shared across slices.
//! Keep this crate lightweight; it re-exports the domain models and owns configuration loading.
//!
//! ## Config loading
//! ```rust,no_run
//! use jview_kernel::config::load_config;
//! use jview_kernel::domain::config::ViewerConfig;
//!
//! let cfg: ViewerConfig = load_config(Some("jview")).unwrap_or_default();
//! println!("listing root: {:?}", cfg.naming.root);
//! ```
pub mod config;

pub use jview_domain as domain;
