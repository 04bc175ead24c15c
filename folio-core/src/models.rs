mod constraint;
mod result;

pub use constraint::*;
pub use result::AllocationResult;
