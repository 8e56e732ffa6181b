//! Routes Module
//!
//! HTTP route configuration and router assembly.

/// API route configuration
pub mod api_routes;

/// Router assembly
pub mod router;

pub use router::create_router;
