//! In-process naming registry.
//!
//! The tree is shared behind an `Arc<RwLock<_>>`; every read or write holds the lock
//! only for the duration of a single call, so concurrent population and traversal never
//! deadlock but may observe each other's intermediate states.

use crate::directory::{ContextFactory, LOCAL_CONTEXT_FACTORY, LoaderMode, NamingDirectory, NamingEnvironment};
use crate::error::{NamingError, NamingErrorExt};
use crate::path;
use crate::value::{Binding, BoundValue, CONTEXT_CLASS_HINT, ContextRef, NULL_CLASS_HINT, Resolved};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
enum Node {
    Leaf(Option<BoundValue>),
    Context(ContextNode),
}

impl Node {
    fn class_hint(&self) -> &'static str {
        match self {
            Self::Context(_) => CONTEXT_CLASS_HINT,
            Self::Leaf(None) => NULL_CLASS_HINT,
            Self::Leaf(Some(value)) => value.kind(),
        }
    }
}

/// Children kept in insertion order, which is also the enumeration order.
#[derive(Debug, Clone, Default)]
struct ContextNode {
    entries: Vec<(String, Node)>,
}

impl ContextNode {
    fn get(&self, name: &str) -> Option<&Node> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut Node> {
        self.entries.iter_mut().find(|(n, _)| n == name).map(|(_, node)| node)
    }

    fn remove(&mut self, name: &str) -> Option<Node> {
        let idx = self.entries.iter().position(|(n, _)| n == name)?;
        Some(self.entries.remove(idx).1)
    }

    /// Returns the child context `name`, creating it if missing.
    fn child_context(&mut self, name: &str) -> Option<&mut Self> {
        if self.get(name).is_none() {
            self.entries.push((name.to_owned(), Node::Context(Self::default())));
        }
        match self.get_mut(name) {
            Some(Node::Context(ctx)) => Some(ctx),
            _ => None,
        }
    }
}

/// A thread-safe, in-memory naming tree.
///
/// Cloning is inexpensive and yields another handle to the same tree. The registry is
/// itself a [`NamingDirectory`] and a [`ContextFactory`] accepting
/// [`LOCAL_CONTEXT_FACTORY`] with [`LoaderMode::Embed`].
///
/// # Example
///
/// ```rust
/// use jview_naming::{EmbeddedRegistry, NamingDirectory};
///
/// let registry = EmbeddedRegistry::new();
/// registry.bind("/a/x", "1").unwrap();
/// registry.create_subcontext("/a/y").unwrap();
///
/// let names: Vec<_> = registry.list("/a").unwrap().into_iter().map(|b| b.name).collect();
/// assert_eq!(names, ["x", "y"]);
/// assert!(registry.lookup("/a/y").unwrap().is_sub_context());
/// ```
#[derive(Debug, Clone, Default)]
pub struct EmbeddedRegistry {
    root: Arc<RwLock<ContextNode>>,
}

impl EmbeddedRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a sub-context at `path`, including any missing intermediate contexts.
    ///
    /// Creating a context that already exists is a no-op.
    ///
    /// # Errors
    /// [`NamingError::AlreadyBound`] if a leaf is bound at `path` or at one of its parents.
    pub fn create_subcontext(&self, path: &str) -> Result<(), NamingError> {
        let parts = path::components(path)?;
        let mut root = self.root.write();
        let mut ctx = &mut *root;
        for part in parts {
            ctx = ctx.child_context(part).ok_or_else(|| NamingError::already_bound(path))?;
        }
        debug!(path, "Created naming sub-context");
        Ok(())
    }

    /// Binds `value` at `path`. Missing parent contexts are created.
    ///
    /// # Errors
    /// [`NamingError::AlreadyBound`] if `path` is already bound.
    pub fn bind(&self, path: &str, value: impl Into<BoundValue>) -> Result<(), NamingError> {
        self.insert(path, Some(value.into()), false)
    }

    /// Binds a null object at `path`.
    ///
    /// # Errors
    /// [`NamingError::AlreadyBound`] if `path` is already bound.
    pub fn bind_null(&self, path: &str) -> Result<(), NamingError> {
        self.insert(path, None, false)
    }

    /// Binds `value` at `path`, replacing an existing leaf.
    ///
    /// # Errors
    /// [`NamingError::AlreadyBound`] if a sub-context is bound at `path`.
    pub fn rebind(&self, path: &str, value: impl Into<BoundValue>) -> Result<(), NamingError> {
        self.insert(path, Some(value.into()), true)
    }

    /// Removes the binding at `path` together with its subtree.
    ///
    /// # Errors
    /// [`NamingError::NotFound`] if nothing is bound at `path`.
    pub fn unbind(&self, path: &str) -> Result<(), NamingError> {
        let parts = path::components(path)?;
        let Some((last, parents)) = parts.split_last() else {
            return Err(NamingError::not_found(path)).context("The registry root cannot be unbound");
        };

        let mut root = self.root.write();
        let mut ctx = &mut *root;
        for part in parents {
            match ctx.get_mut(part) {
                Some(Node::Context(child)) => ctx = child,
                _ => return Err(NamingError::not_found(path)),
            }
        }
        ctx.remove(last).ok_or_else(|| NamingError::not_found(path))?;
        debug!(path, "Unbound naming entry");
        Ok(())
    }

    fn insert(&self, path: &str, value: Option<BoundValue>, replace: bool) -> Result<(), NamingError> {
        let parts = path::components(path)?;
        let Some((last, parents)) = parts.split_last() else {
            return Err(NamingError::already_bound(path)).context("The registry root is a context");
        };

        let mut root = self.root.write();
        let mut ctx = &mut *root;
        for part in parents {
            ctx = ctx.child_context(part).ok_or_else(|| NamingError::already_bound(path))?;
        }

        match ctx.get_mut(last) {
            None => ctx.entries.push(((*last).to_owned(), Node::Leaf(value))),
            Some(Node::Leaf(slot)) if replace => *slot = value,
            Some(_) => return Err(NamingError::already_bound(path)),
        }
        debug!(path, replace, "Bound naming entry");
        Ok(())
    }
}

impl NamingDirectory for EmbeddedRegistry {
    fn list(&self, path: &str) -> Result<Vec<Binding>, NamingError> {
        let parts = path::components(path)?;
        let root = self.root.read();
        if parts.is_empty() {
            return Ok(bindings(&root));
        }
        match find(&root, &parts) {
            Some(Node::Context(ctx)) => Ok(bindings(ctx)),
            Some(Node::Leaf(_)) => {
                Err(NamingError::not_found(path)).context("Name is bound to a leaf, not a context")
            },
            None => Err(NamingError::not_found(path)),
        }
    }

    fn lookup(&self, path: &str) -> Result<Resolved, NamingError> {
        let parts = path::components(path)?;
        let root = self.root.read();
        if parts.is_empty() {
            return Ok(Resolved::Context(ContextRef {
                name_in_namespace: String::new(),
                size: root.entries.len(),
            }));
        }
        match find(&root, &parts) {
            Some(Node::Leaf(value)) => Ok(Resolved::Leaf(value.clone())),
            Some(Node::Context(ctx)) => Ok(Resolved::Context(ContextRef {
                name_in_namespace: parts.join("/"),
                size: ctx.entries.len(),
            })),
            None => Err(NamingError::not_found(path)),
        }
    }
}

impl ContextFactory for EmbeddedRegistry {
    fn open(
        &self,
        environment: &NamingEnvironment,
    ) -> Result<Box<dyn NamingDirectory + Send>, NamingError> {
        if environment.factory != LOCAL_CONTEXT_FACTORY {
            return Err(NamingError::InitializationFailure {
                message: environment.factory.to_string().into(),
                context: Some("Unsupported initial context factory".into()),
            });
        }
        if environment.loader != LoaderMode::Embed {
            return Err(NamingError::InitializationFailure {
                message: environment.loader.as_str().into(),
                context: Some("The local registry only supports the embedded loader".into()),
            });
        }
        Ok(Box::new(self.clone()))
    }
}

/// Walks `parts` from `root`; `None` if a component is missing or crosses a leaf.
fn find<'a>(root: &'a ContextNode, parts: &[&str]) -> Option<&'a Node> {
    let (last, parents) = parts.split_last()?;
    let mut ctx = root;
    for part in parents {
        match ctx.get(part)? {
            Node::Context(child) => ctx = child,
            Node::Leaf(_) => return None,
        }
    }
    ctx.get(last)
}

fn bindings(ctx: &ContextNode) -> Vec<Binding> {
    ctx.entries.iter().map(|(name, node)| Binding::new(name.clone(), node.class_hint())).collect()
}
