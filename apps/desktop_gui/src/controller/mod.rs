//! Controller layer: view actions, reducer-like state transitions, and intent orchestration.

pub mod events;
pub mod orchestration;
pub mod reducer;
