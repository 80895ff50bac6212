//! Output Generation
//!
//! Run analysis and JSON reports.

pub mod analysis;
pub mod report;

pub use analysis::*;
pub use report::*;
