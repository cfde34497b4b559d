//! Board animations: kinds, the per-entity scheduler and local transforms

pub mod kind;
pub mod scheduler;
pub mod transform;

pub use kind::*;
pub use scheduler::*;
pub use transform::*;
