pub mod builders;
pub mod types;
pub mod validator;

pub use builders::*;
pub use types::*;
pub use validator::*;
