//! Application pages module
//!
//! This module contains all the page components for the application:
//! - Landing page (home)
//! - Not found page (404 fallback)

mod landing;
mod not_found;

pub use landing::LandingPage;
pub use not_found::NotFoundPage;
