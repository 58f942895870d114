//! HTTP request handlers

pub mod quote;
pub mod service;

pub use quote::*;
pub use service::*;
