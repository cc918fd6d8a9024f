//! Review records and the store merging seed and user-submitted reviews

use serde::{Deserialize, Serialize};

use super::storage::ReviewStorage;

/// How many reviews the collapsed list shows
pub const VISIBLE_PREVIEW_COUNT: usize = 3;

/// A customer testimonial. Immutable once created; no identifier, no
/// edit/delete.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Review {
    pub name: String,
    pub company: String,
    pub rating: f32,
    pub text: String,
}

impl Review {
    pub fn new(
        name: impl Into<String>,
        company: impl Into<String>,
        rating: f32,
        text: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            company: company.into(),
            rating,
            text: text.into(),
        }
    }
}

/// Built-in reviews, always present regardless of persisted data
pub fn seed_reviews() -> Vec<Review> {
    vec![
        Review::new(
            "Rajesh Mehta",
            "Tata Motors Vendor",
            5.0,
            "Reliable partner for over 5 years. Their commitment is unparalleled in the logistics sector.",
        ),
        Review::new(
            "Suresh Iyer",
            "Adani Logistics Partner",
            4.5,
            "Professional team that understands complexity. Their 24/7 support is a real game changer.",
        ),
        Review::new(
            "Anjali Sharma",
            "Reliance Industries",
            5.0,
            "Zero damage and very professional handling of heavy equipment. Highly recommended!",
        ),
        Review::new(
            "Vikram Singh",
            "Industrial Logistics Co.",
            4.0,
            "Great experience with Part Truck Load. Very affordable rates for cross-state transport.",
        ),
        Review::new(
            "Mehul Patel",
            "SME Owner",
            3.5,
            "Good service overall. The local transport team is very professional, although tracking updates could be faster.",
        ),
    ]
}

/// Review list backed by a [`ReviewStorage`] slot.
///
/// User reviews are kept newest-first and the whole sequence is rewritten on
/// every mutation; seed reviews are never touched.
#[derive(Clone, Copy, Debug)]
pub struct ReviewStore<S> {
    storage: S,
}

impl<S: ReviewStorage> ReviewStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Deserialize the persisted user reviews.
    ///
    /// An absent or malformed slot yields an empty list; this never fails to
    /// the caller.
    pub fn load_user_reviews(&self) -> Vec<Review> {
        let Some(raw) = self.storage.load() else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(reviews) => reviews,
            Err(err) => {
                leptos::logging::warn!("discarding malformed stored reviews: {err}");
                Vec::new()
            }
        }
    }

    /// Serialize `reviews` and overwrite the persisted slot.
    pub fn save_user_reviews(&self, reviews: &[Review]) {
        if let Ok(raw) = serde_json::to_string(reviews) {
            let _ = self.storage.save(&raw);
        }
    }

    /// Prepend `review` to the persisted user reviews and return the updated
    /// list.
    pub fn add_review(&self, review: Review) -> Vec<Review> {
        let mut user = self.load_user_reviews();
        user.insert(0, review);
        self.save_user_reviews(&user);
        user
    }

    /// Seed reviews followed by the persisted user reviews.
    pub fn merged(&self) -> Vec<Review> {
        let mut all = seed_reviews();
        all.extend(self.load_user_reviews());
        all
    }
}

/// How many of `total` reviews are rendered.
pub fn visible_count(total: usize, show_all: bool) -> usize {
    if show_all {
        total
    } else {
        total.min(VISIBLE_PREVIEW_COUNT)
    }
}

/// The slice of `all` that the list renders.
pub fn visible_reviews(all: &[Review], show_all: bool) -> &[Review] {
    &all[..visible_count(all.len(), show_all)]
}

/// The view-more control only appears once the merged list overflows the
/// collapsed window.
pub fn view_more_visible(total: usize) -> bool {
    total > VISIBLE_PREVIEW_COUNT
}
