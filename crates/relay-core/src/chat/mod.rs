//! Chat-turn pipeline: validation, history normalization and the relay.

pub mod normalize;
pub mod relay;
pub mod validate;
