//! Domain and distance modifiers for SDFs

mod onion;
mod repeat;

pub use onion::modifier_onion;
pub use repeat::{modifier_repeat, modifier_repeat_finite};
