pub mod engine;
pub mod format;
pub mod input;
pub mod report;
pub mod session;

pub use engine::{Count, CountError, Outcome};
pub use input::InputPair;
pub use report::{Quantity, Report};
