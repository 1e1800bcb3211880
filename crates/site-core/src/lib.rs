pub mod carousel;
pub mod constants;
pub mod contact;
pub mod scroll;
pub mod starfield;
pub mod swipe;

pub use carousel::*;
pub use constants::*;
pub use contact::*;
pub use scroll::*;
pub use starfield::*;
pub use swipe::*;
