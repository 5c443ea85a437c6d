//! The demonstrations printed by `fnlab`, and the registry listing them in
//! report order.

pub mod curried;
pub mod delegates;
pub mod extension_methods;
pub mod generics;
pub mod lazy;
pub mod math;
pub mod primitive_obsession;
pub mod smart_constructors;

use crate::registry::Registry;

pub const CURRIED_FUNCTIONS: &str = "Curried functions";
pub const DELEGATES: &str = "Delegates";
pub const LAZY_EXECUTION: &str = "Lazy execution";
pub const SMART_CONSTRUCTORS: &str = "Smart constructors";
pub const PRIMITIVE_OBSESSION: &str = "Primitive obsession";
pub const GENERICS: &str = "Generics";
pub const EXTENSION_METHODS: &str = "Extension methods";

/// Every demonstration, in report order
pub fn registry() -> Registry {
    let mut registry = Registry::new();
    math::register(&mut registry);
    registry
        .procedure(CURRIED_FUNCTIONS, curried::run)
        .procedure(DELEGATES, delegates::run)
        .procedure(LAZY_EXECUTION, lazy::run)
        .procedure(SMART_CONSTRUCTORS, smart_constructors::run)
        .procedure(PRIMITIVE_OBSESSION, primitive_obsession::run)
        .procedure(GENERICS, generics::run)
        .procedure(EXTENSION_METHODS, extension_methods::run);
    registry
}

#[cfg(test)]
pub(crate) fn render(demo: fn(&mut dyn std::io::Write) -> fnlab_core::Result<()>) -> String {
    let mut out = Vec::new();
    demo(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
