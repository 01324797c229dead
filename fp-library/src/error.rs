//! The structural error type shared by the concurrency, retry, and `TryPath` machinery.
//!
//! ### Examples
//!
//! ```
//! use fp_library::error::CoreError;
//!
//! let e = CoreError::NoMatch;
//! assert_eq!(e.to_string(), "no branch matched");
//! ```

use std::fmt::{self, Debug};

/// A boxed, thread-safe error, used to carry an arbitrary thrown error into [`CoreError::Thrown`].
pub type BoxedError = Box<dyn std::error::Error + Send + Sync>;

/// The structural errors raised by this crate's own machinery, as opposed to errors a caller's
/// own code raises (which are carried, opaque, in [`CoreError::Thrown`]).
#[derive(thiserror::Error, Debug)]
pub enum CoreError {
	/// A retry loop ran out of attempts without a successful result.
	#[error("retry exhausted after {attempts} attempts")]
	RetryExhausted {
		/// The number of attempts made before giving up.
		attempts: usize,
	},

	/// An operation did not complete within its allotted duration.
	#[error("operation timed out after {0:?}")]
	Timeout(std::time::Duration),

	/// A running task was cancelled before it completed.
	#[error("task was cancelled")]
	Cancelled,

	/// No branch matched a selection (e.g. an exhausted `ForPath::match_` or `branch`).
	#[error("no branch matched")]
	NoMatch,

	/// An arbitrary caller-raised error, carried opaquely. This is the variant
	/// [`TryPath`][crate::types::path::try_path::TryPath]'s `Failure` case wraps any panicking or
	/// `Result`-returning closure's error into.
	#[error("{0}")]
	Thrown(#[source] BoxedError),
}

impl CoreError {
	/// Wraps an arbitrary error as a [`CoreError::Thrown`].
	///
	/// ### Examples
	///
	/// ```
	/// use fp_library::error::CoreError;
	///
	/// let e = CoreError::thrown("boom");
	/// assert!(matches!(e, CoreError::Thrown(_)));
	/// ```
	pub fn thrown<E>(e: E) -> Self
	where
		E: Into<BoxedError>,
	{
		CoreError::Thrown(e.into())
	}
}

/// An error carried as a plain string, for callers who don't need a typed error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StringError(pub String);

impl fmt::Display for StringError {
	fn fmt(
		&self,
		f: &mut fmt::Formatter<'_>,
	) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl std::error::Error for StringError {}

impl From<&str> for StringError {
	fn from(s: &str) -> Self {
		StringError(s.to_string())
	}
}
