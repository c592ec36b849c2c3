pub mod cancel;
pub mod deposit;
pub mod initialize;
pub mod settle;

pub use cancel::*;
pub use deposit::*;
pub use initialize::*;
pub use settle::*;
