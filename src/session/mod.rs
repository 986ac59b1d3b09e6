pub mod command;
pub mod error;
pub mod state;


pub use command::*;
pub use error::*;
pub use state::*;
