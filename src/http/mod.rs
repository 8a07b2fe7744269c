//! HTTP protocol layer module
//!
//! Protocol-level building blocks, decoupled from request handling:
//! content-type selection, percent-decoding, and response assembly.

pub mod mime;
pub mod percent;
pub mod response;

pub use mime::MimeTable;
