//! ECS Components
//!
//! Agent variants and the shared economy resources they read and write.

pub mod agent;
pub mod corporation;
pub mod economy;
pub mod government;
pub mod worker;

pub use agent::*;
pub use corporation::*;
pub use economy::*;
pub use government::*;
pub use worker::*;
