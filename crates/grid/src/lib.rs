pub mod layout;
mod range;
mod store;
mod workbook;

pub use range::*;
pub use store::*;
pub use workbook::*;
