use std::fmt;

/// Class hint reported by [`Binding::class_hint`] for navigable sub-contexts.
pub const CONTEXT_CLASS_HINT: &str = "context";
/// Class hint reported for leaves bound to a null value.
pub const NULL_CLASS_HINT: &str = "null";

/// A terminal value bound in the registry.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    /// An indirect object description (factory-resolved in a full naming service).
    /// Only its textual form is ever exposed.
    Reference { class_name: String, target: Option<String> },
}

impl BoundValue {
    /// Short type name used as the binding's class hint.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Text(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::Boolean(_) => "boolean",
            Self::Reference { .. } => "reference",
        }
    }

    pub fn reference(class_name: impl Into<String>, target: Option<String>) -> Self {
        Self::Reference { class_name: class_name.into(), target }
    }
}

impl fmt::Display for BoundValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::Reference { class_name, target: Some(target) } => {
                write!(f, "Reference[class={class_name}, target={target}]")
            },
            Self::Reference { class_name, target: None } => write!(f, "Reference[class={class_name}]"),
        }
    }
}

impl From<&str> for BoundValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for BoundValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<i64> for BoundValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for BoundValue {
    fn from(value: i32) -> Self {
        Self::Integer(value.into())
    }
}

impl From<f64> for BoundValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for BoundValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

/// One direct child entry observed while listing a context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    /// The child name, without any path prefix.
    pub name: String,
    /// Apparent type of the bound object.
    pub class_hint: String,
}

impl Binding {
    pub fn new(name: impl Into<String>, class_hint: impl Into<String>) -> Self {
        Self { name: name.into(), class_hint: class_hint.into() }
    }
}

/// A navigable sub-context returned by a lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextRef {
    /// Normalized name of the context inside the registry (`""` for the root).
    pub name_in_namespace: String,
    /// Number of direct children at lookup time.
    pub size: usize,
}

/// The outcome of resolving a full path.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolved {
    /// A terminal binding. `None` when the leaf is bound to a null object.
    Leaf(Option<BoundValue>),
    /// A sub-context that can be listed further.
    Context(ContextRef),
}

impl Resolved {
    #[must_use]
    pub const fn is_sub_context(&self) -> bool {
        matches!(self, Self::Context(_))
    }

    /// String form of a leaf value; `None` for null leaves and for contexts.
    #[must_use]
    pub fn display_value(&self) -> Option<String> {
        match self {
            Self::Leaf(value) => value.as_ref().map(ToString::to_string),
            Self::Context(_) => None,
        }
    }
}
