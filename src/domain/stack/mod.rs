//! Stack module - multi-day outfit schedules.

mod errors;
mod entity;

pub use errors::StackError;
pub use entity::{NewStack, Stack, StackRequest, MAX_STACK_DAYS, MIN_STACK_DAYS};
