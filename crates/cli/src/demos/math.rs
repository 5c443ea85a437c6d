//! The three convenience wrappers of every arithmetic operation, applied to five

use crate::registry::Registry;
use fnlab_core::constants::numbers::FIVE;
use fnlab_core::Operation;

pub fn register(registry: &mut Registry) {
    for operation in Operation::ALL {
        registry.values(operation.label(), operation.samples(FIVE));
    }
}
