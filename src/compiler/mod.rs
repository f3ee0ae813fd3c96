pub mod compile;
pub use compile::*;

pub mod library;
pub use library::*;

pub mod rule;
pub use rule::*;

pub mod ruleset;
pub use ruleset::*;

pub mod template;
pub use template::*;
