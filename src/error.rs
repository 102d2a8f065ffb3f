use std::sync::Arc;

/// The single error type for all emissary operations.
///
/// Every fallible emissary API returns `emissary::Result<T>` (alias for
/// `Result<T, emissary::Error>`). Errors raised inside user-supplied hooks
/// are wrapped into [`Error::External`] so callers only need to handle one
/// error type; the harness never swallows them.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The captured emission sequence did not match the expectation.
    ///
    /// `detail` carries the plain assertion message followed by a delimited
    /// character-level diff of the expected and actual renderings.
    #[error("emission mismatch in '{test}': {detail}")]
    Mismatch { test: String, detail: String },

    #[error("external error: {0}")]
    External(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wrap an error raised inside a user-supplied hook.
    ///
    /// ```rust,ignore
    /// .act(|store| async move {
    ///     store.refresh().await.map_err(Error::external)?;
    ///     Ok(())
    /// })
    /// ```
    pub fn external(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::External(Arc::new(e))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (
                Self::Mismatch { test, detail },
                Self::Mismatch { test: t, detail: d },
            ) => test == t && detail == d,
            (Self::External(a), Self::External(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn external_compares_by_pointer() {
        let a = Error::external(std::io::Error::other("boom"));
        let b = a.clone();
        let c = Error::external(std::io::Error::other("boom"));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn mismatch_compares_by_content() {
        let a = Error::Mismatch {
            test: "t".into(),
            detail: "expected [1], got [2]".into(),
        };
        let b = Error::Mismatch {
            test: "t".into(),
            detail: "expected [1], got [2]".into(),
        };
        assert_eq!(a, b);
    }

    #[test]
    fn mismatch_display_includes_test_name() {
        let err = Error::Mismatch {
            test: "counter increments".into(),
            detail: "expected [1], got [2]".into(),
        };
        let rendered = err.to_string();
        assert!(rendered.contains("counter increments"));
        assert!(rendered.contains("expected [1], got [2]"));
    }
}
