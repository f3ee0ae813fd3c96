pub mod blend;
pub use blend::*;

pub mod decision;
pub use decision::*;

pub mod heuristic;
pub use heuristic::*;

pub mod runtime;
pub use runtime::*;
