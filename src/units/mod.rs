pub mod category;
pub mod factors;

pub use category::*;
pub use factors::*;
