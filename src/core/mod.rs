//! Core domain logic for the rating control and the review list
//!
//! Everything here is DOM-free and exercised by unit tests; the Leptos
//! components in [`crate::ui`] only translate these values into markup.

#[cfg(feature = "ssr")]
pub mod config;
mod rating;
mod review;
mod storage;
#[cfg(test)]
mod tests;

pub use rating::*;
pub use review::*;
pub use storage::*;
