use std::borrow::Cow;

/// A specialized [`NamingError`] enum of this crate.
#[jview_derive::jview_error]
pub enum NamingError {
    /// The path does not exist or cannot be listed. Always recoverable.
    #[error("Name not found{}: {message}", format_context(.context))]
    NotFound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The directory could not be opened with the supplied environment.
    #[error("Naming initialization failure{}: {message}", format_context(.context))]
    InitializationFailure { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The name is already bound (registry population only).
    #[error("Name already bound{}: {message}", format_context(.context))]
    AlreadyBound { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl NamingError {
    pub(crate) fn not_found(path: &str) -> Self {
        Self::NotFound { message: path.to_owned().into(), context: None }
    }

    pub(crate) fn already_bound(path: &str) -> Self {
        Self::AlreadyBound { message: path.to_owned().into(), context: None }
    }
}
