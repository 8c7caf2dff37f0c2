//! Controller layer: UI events, notification queueing, and command orchestration.

pub mod events;
pub mod orchestration;
