//! Utility functions for ytdata

pub mod duration;
pub mod url;

pub use self::duration::*;
pub use self::url::*;
