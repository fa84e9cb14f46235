use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The document store could not be reached or failed mid-fetch.
    StoreUnavailable,
    /// A document could not be indexed. Recoverable: the caller skips the
    /// document and continues.
    IndexBuild,
    /// Catch-all for failures during the query phase.
    Search,
    NotFound,
    InvalidInput,
    Internal,
}

#[derive(Debug)]
pub struct Error {
    pub kind: ErrorKind,
    pub context: String,
}

impl Error {
    pub fn new(kind: ErrorKind, context: impl Into<String>) -> Self {
        Error {
            kind,
            context: context.into(),
        }
    }

    pub fn store_unavailable(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::StoreUnavailable, context)
    }

    pub fn index_build(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::IndexBuild, context)
    }

    pub fn search(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::Search, context)
    }

    pub fn not_found(context: impl Into<String>) -> Self {
        Error::new(ErrorKind::NotFound, context)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?}: {}", self.kind, self.context)
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_context() {
        let err = Error::store_unavailable("backend timed out");
        assert_eq!(err.to_string(), "StoreUnavailable: backend timed out");
    }

    #[test]
    fn kind_is_preserved() {
        assert_eq!(Error::search("boom").kind, ErrorKind::Search);
        assert_eq!(Error::index_build("bad doc").kind, ErrorKind::IndexBuild);
    }
}
