//! Ordered handler lists invoked as one callable.
//!
//! A [`Multicast`] runs every handler with the same argument in insertion
//! order. The composite result is the last handler's result; earlier results
//! are discarded unless [`Multicast::invoke_all`] is used.

use std::fmt;
use std::ops::Add;
use std::rc::Rc;

pub struct Multicast<'a, A: ?Sized, R> {
    handlers: Vec<Rc<dyn Fn(&A) -> R + 'a>>,
}

impl<'a, A: ?Sized, R> Multicast<'a, A, R> {
    /// Create an empty handler list
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Create a handler list holding one handler
    pub fn single<F>(handler: F) -> Self
    where
        F: Fn(&A) -> R + 'a,
    {
        Self::new().then(handler)
    }

    /// Append a handler
    pub fn then<F>(mut self, handler: F) -> Self
    where
        F: Fn(&A) -> R + 'a,
    {
        self.handlers.push(Rc::new(handler));
        self
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Run every handler in order and return the last result, `None` when empty
    pub fn invoke(&self, arg: &A) -> Option<R> {
        self.handlers.iter().map(|handler| handler(arg)).last()
    }

    /// Run every handler in order and keep all results
    pub fn invoke_all(&self, arg: &A) -> Vec<R> {
        self.handlers.iter().map(|handler| handler(arg)).collect()
    }
}

impl<'a, A: ?Sized, T, E> Multicast<'a, A, Result<T, E>> {
    /// Run fallible handlers in order, stopping at the first error.
    ///
    /// Returns the last handler's value, `None` when the list is empty.
    pub fn try_invoke(&self, arg: &A) -> Result<Option<T>, E> {
        let mut last = None;
        for handler in &self.handlers {
            last = Some(handler(arg)?);
        }
        Ok(last)
    }
}

impl<A: ?Sized, R> Default for Multicast<'_, A, R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: ?Sized, R> Clone for Multicast<'_, A, R> {
    fn clone(&self) -> Self {
        Self {
            handlers: self.handlers.clone(),
        }
    }
}

impl<'a, A: ?Sized, R> Add for Multicast<'a, A, R> {
    type Output = Multicast<'a, A, R>;

    fn add(mut self, rhs: Self) -> Self::Output {
        self.handlers.extend(rhs.handlers);
        self
    }
}

impl<A: ?Sized, R> fmt::Debug for Multicast<'_, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Multicast")
            .field("handlers", &self.handlers.len())
            .finish()
    }
}
