//! Concrete data types, their corresponding implementations and type aliases.
//!
//! This module provides implementations of various functional programming
//! data structures and wrappers, including `Identity`, `Lazy`, and extensions
//! for standard library types like `Option` and `Result`.

pub mod arc_fn;
pub mod cat_list;
pub mod cat_queue;
pub mod choice;
pub mod endofunction;
pub mod endomorphism;
pub mod for_comprehension;
pub mod free;
pub mod free_ap;
pub mod identity;
pub mod lazy;
pub mod monoids;
pub mod option;
pub mod optional;
pub mod pair;
pub mod par;
pub mod path;
pub mod rc;
pub mod rc_fn;
pub mod resource;
pub mod result;
pub mod retry;
pub mod scope;
pub mod solo;
pub mod state_tuple;
pub mod step;
pub mod string;
pub mod thunk;
pub mod trampoline;
pub mod tuple;
pub mod unit;
pub mod validated;
pub mod vec;

pub use cat_list::CatList;
pub use choice::Choice;
pub use endofunction::Endofunction;
pub use endomorphism::Endomorphism;
pub use for_comprehension::{For, ForBuilder};
pub use free::Free;
pub use free_ap::FreeAp;
pub use identity::Identity;
pub use lazy::{ArcLazyConfig, Lazy, LazyConfig, RcLazyConfig};
pub use optional::Optional;
pub use pair::Pair;
pub use resource::Resource;
pub use retry::RetryPolicy;
pub use scope::Scope;
pub use solo::Solo;
pub use state_tuple::StateTuple;
pub use step::Step;
pub use thunk::Thunk;
pub use trampoline::Trampoline;
pub use tuple::{Tuple3, Tuple4, Tuple5, Tuple6};
pub use unit::Unit;
pub use validated::Validated;
