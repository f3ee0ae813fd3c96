pub mod action;
pub use action::*;

pub mod edge;
pub use edge::*;

pub mod outcome;
pub use outcome::*;

pub mod ply;
pub use ply::*;

pub mod position;
pub use position::*;

pub mod record;
pub use record::*;

pub mod state;
pub use state::*;
