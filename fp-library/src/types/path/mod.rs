//! Effect Paths: fluent, capability-specific wrappers over the L1/L2 data types.
//!
//! Where [`classes`](crate::classes) lets generic code abstract over any `Functor`/`Monad`
//! brand, a Path is the opposite move: a concrete type naming one exact effect shape
//! (optionality, two-sided errors, catchable failure, accumulating validation) and exposing
//! only the fluent methods that shape supports, under shared names (`map`, `via`, `zip_with`,
//! `peek`, `then`, `to_*`) so switching which Path a pipeline uses is a rename, not a rewrite.
//!
//! Each Path is a thin newtype over the matching L1 type (`MaybePath` over `Option`,
//! `EitherPath` over `Result`, `ValidationPath` over `Validated`) and its methods delegate
//! straight to that type's own combinators, the same way [`Thunk`](crate::types::Thunk) and
//! [`Lazy`](crate::types::Lazy) expose inherent methods alongside their type class instances.

pub mod affine_path;
pub mod either_path;
pub mod focus_path;
pub mod for_path;
pub mod maybe_path;
pub mod try_path;
pub mod validation_path;

pub use affine_path::AffinePath;
pub use either_path::EitherPath;
pub use focus_path::FocusPath;
pub use for_path::{ForPath, ForPathBuilder};
pub use maybe_path::MaybePath;
pub use try_path::TryPath;
pub use validation_path::ValidationPath;
