//! HTTP services.
//!
//! # Services
//!
//! - [`feed`] - Project feed download from the published sheet
//! - [`contact`] - Contact form dispatch to EmailJS

pub mod feed;
pub mod contact;

pub use feed::*;
pub use contact::*;
