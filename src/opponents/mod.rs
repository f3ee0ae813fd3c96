pub mod profile;
pub use profile::*;

pub mod tendencies;
pub use tendencies::*;
