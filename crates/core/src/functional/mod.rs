//! Functional programming utilities: composition, currying, multicast handler
//! lists and lazy evaluation.

pub mod composition;
pub mod lazy;
pub mod multicast;

pub use composition::operators::{curry, flip, forward_compose, uncurry};
pub use composition::Pipe;
pub use lazy::{defer_choice, numbers, window};
pub use multicast::Multicast;
