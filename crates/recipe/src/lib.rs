mod catalog;
mod sides;
mod surface;
mod types;

pub use catalog::*;
pub use sides::*;
pub use surface::*;
pub use types::*;
