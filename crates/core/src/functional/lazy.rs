//! Lazy evaluation helpers: deferred thunks and on-demand iterators.
//!
//! Nothing here does any work until the returned closure is called or the
//! returned iterator is pulled.

use tracing::trace;

pub use once_cell::unsync::Lazy;

/// Build a thunk that flips `coin` and evaluates only the chosen branch
pub fn defer_choice<T, C, L, R>(mut coin: C, left: L, right: R) -> impl FnMut() -> T
where
    C: FnMut() -> bool,
    L: Fn() -> T,
    R: Fn() -> T,
{
    move || if coin() { left() } else { right() }
}

/// The numbers 1 through 10, produced one at a time as they are pulled
pub fn numbers() -> impl Iterator<Item = i32> {
    (1..=10).inspect(|n| trace!(n, "produced number"))
}

/// Skip `skip` items and keep the next `take`, without consuming anything yet
pub fn window<I>(iter: I, skip: usize, take: usize) -> impl Iterator<Item = I::Item>
where
    I: Iterator,
{
    iter.skip(skip).take(take)
}
