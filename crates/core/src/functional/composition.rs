//! Currying, argument flipping and left-to-right pipelines

/// A value threaded through a chain of single-argument functions
pub struct Pipe<T>(pub T);

impl<T> Pipe<T> {
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Feed the value to `next`
    pub fn pipe<U, F>(self, next: F) -> Pipe<U>
    where
        F: FnOnce(T) -> U,
    {
        Pipe(next(self.0))
    }

    pub fn into_inner(self) -> T {
        self.0
    }
}

pub mod operators {
    /// `first` then `second`, as one function
    pub fn forward_compose<A, B, C, F, G>(first: F, second: G) -> impl Fn(A) -> C
    where
        F: Fn(A) -> B,
        G: Fn(B) -> C,
    {
        move |a| second(first(a))
    }

    /// Swap the two arguments of `f`
    pub fn flip<A, B, C, F>(f: F) -> impl Fn(B, A) -> C
    where
        F: Fn(A, B) -> C,
    {
        move |b, a| f(a, b)
    }

    /// Turn `f(a, b)` into `curry(f)(a)(b)`.
    ///
    /// `a` is cloned on every call of the returned function, so the partial
    /// application can be invoked any number of times.
    pub fn curry<A, B, C, F>(f: F) -> impl Fn(A) -> Box<dyn Fn(B) -> C>
    where
        F: Fn(A, B) -> C + Clone + 'static,
        A: Clone + 'static,
        B: 'static,
        C: 'static,
    {
        move |a: A| -> Box<dyn Fn(B) -> C> {
            let f = f.clone();
            Box::new(move |b| f(a.clone(), b))
        }
    }

    /// Inverse of [`curry`]
    pub fn uncurry<A, B, C, F>(curried: F) -> impl Fn(A, B) -> C
    where
        F: Fn(A) -> Box<dyn Fn(B) -> C>,
    {
        move |a, b| curried(a)(b)
    }
}

/// Thread a value through functions left to right, yielding a [`Pipe`]
#[macro_export]
macro_rules! pipeline {
    ($value:expr) => {
        $crate::functional::Pipe::new($value)
    };
    ($value:expr, $($step:expr),+ $(,)?) => {{
        let piped = $crate::functional::Pipe::new($value);
        $(
            let piped = piped.pipe($step);
        )+
        piped
    }};
}
