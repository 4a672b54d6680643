//! Entities and the `YouTube` facade

pub mod channel;
pub mod playlist;
pub mod search;
pub mod video;
pub mod youtube;

pub use channel::*;
pub use playlist::*;
pub use search::*;
pub use video::*;
pub use youtube::*;
