mod assign;
mod calendar;
mod command;
pub mod palette;
mod surface;

pub use assign::*;
pub use calendar::*;
pub use command::*;
pub use surface::*;
