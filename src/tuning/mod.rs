pub mod scorecard;
pub use scorecard::*;

pub mod sweep;
pub use sweep::*;
