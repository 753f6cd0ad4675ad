//! API Routes
//!
//! Route handlers organized by functionality.

pub mod artists;
pub mod documents;
pub mod health;
pub mod labels;
