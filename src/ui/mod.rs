pub mod common;
pub mod icon;
pub mod pages;
pub mod quote;
pub mod rating;
pub mod reveal;
pub mod reviews;
pub mod theme;

pub use icon::{Icon, icons};
pub use quote::QuoteSection;
pub use rating::{StarIcon, StarRatingInput};
pub use reviews::ReviewsSection;
