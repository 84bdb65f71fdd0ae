// Data models for workouts and client cache sync

pub mod sync;
pub mod workout;

pub use sync::*;
pub use workout::*;
