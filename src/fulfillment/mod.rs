pub mod controller;
pub mod dispatcher;

pub use controller::*;
pub use dispatcher::*;
