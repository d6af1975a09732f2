//! Shared primitives for the Conduit inference router

mod error;

pub use error::HttpError;
