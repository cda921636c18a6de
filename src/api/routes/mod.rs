//! API Routes
//!
//! Route handlers organized by functionality.

pub mod dashboard;
pub mod feedback;
pub mod health;
