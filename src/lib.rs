pub mod catalog;
pub mod config;
pub mod dialog;
pub mod error;
pub mod fulfillment;

pub use config::CatalogConfig;
pub use error::HandlerError;
pub use fulfillment::dispatcher::{FulfillmentHandler, InvocationContext};
