mod balls;
mod emulator;
mod error;
mod inventory;
mod pack;
mod recognize;
mod scan;
mod screenshot;

pub use balls::*;
pub use emulator::*;
pub use error::*;
pub use inventory::*;
pub use pack::*;
pub use recognize::*;
pub use scan::*;
pub use screenshot::*;
