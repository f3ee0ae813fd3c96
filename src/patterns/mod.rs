pub mod attribution;
pub use attribution::*;

pub mod depth;
pub use depth::*;

pub mod extractor;
pub use extractor::*;

pub mod fingerprint;
pub use fingerprint::*;

pub mod key;
pub use key::*;

pub mod pattern;
pub use pattern::*;

pub mod report;
pub use report::*;

pub mod signature;
pub use signature::*;

pub mod tally;
pub use tally::*;
