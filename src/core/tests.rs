#[cfg(test)]
mod tests {
    use crate::core::{
        DEFAULT_RATING, MAX_RATING, MIN_RATING, MemoryStorage, RATING_STEP, Review, ReviewStore,
        STAR_COUNT, StarFill, VISIBLE_PREVIEW_COUNT, clamp_rating, seed_reviews, star_fill,
        value_from_pointer, view_more_visible, visible_count, visible_reviews,
    };

    /// All representable ratings: 0.5, 1.0, ..., 5.0
    fn all_ratings() -> Vec<f32> {
        (1..=10).map(|halves| halves as f32 * RATING_STEP).collect()
    }

    fn review(name: &str, rating: f32) -> Review {
        Review::new(name, "Acme Transport", rating, "Solid service.")
    }

    #[test]
    fn test_star_fill_truth_table() {
        for rating in all_ratings() {
            for index in 1..=STAR_COUNT {
                let expected = if rating >= index as f32 {
                    StarFill::Full
                } else if rating >= index as f32 - 0.5 {
                    StarFill::Half
                } else {
                    StarFill::Empty
                };
                assert_eq!(
                    star_fill(index, rating),
                    expected,
                    "star {index} at rating {rating}"
                );
            }
        }
    }

    #[test]
    fn test_star_fill_examples() {
        // 3.5 renders as three full stars, one half star, one empty star
        assert_eq!(star_fill(1, 3.5), StarFill::Full);
        assert_eq!(star_fill(3, 3.5), StarFill::Full);
        assert_eq!(star_fill(4, 3.5), StarFill::Half);
        assert_eq!(star_fill(5, 3.5), StarFill::Empty);

        assert_eq!(star_fill(1, 5.0), StarFill::Full);
        assert_eq!(star_fill(5, 5.0), StarFill::Full);
        assert_eq!(star_fill(1, 0.5), StarFill::Half);
        assert_eq!(star_fill(2, 0.5), StarFill::Empty);
    }

    #[test]
    fn test_star_fill_total_over_out_of_range_input() {
        // Malformed persisted ratings still map to a fill state
        assert_eq!(star_fill(1, 0.0), StarFill::Empty);
        assert_eq!(star_fill(1, -2.0), StarFill::Empty);
        assert_eq!(star_fill(5, 99.0), StarFill::Full);
    }

    #[test]
    fn test_star_fill_class_names() {
        assert_eq!(StarFill::Full.class(), "full");
        assert_eq!(StarFill::Half.class(), "half");
        assert_eq!(StarFill::Empty.class(), "");
    }

    #[test]
    fn test_value_from_pointer_halves() {
        for index in 1..=STAR_COUNT {
            assert_eq!(value_from_pointer(index, 0.0), index as f32 - 0.5);
            assert_eq!(value_from_pointer(index, 0.49), index as f32 - 0.5);
            assert_eq!(value_from_pointer(index, 0.51), index as f32);
            assert_eq!(value_from_pointer(index, 1.0), index as f32);
        }
    }

    #[test]
    fn test_value_from_pointer_midline_is_right_half() {
        // The exact midline commits the full-star value
        assert_eq!(value_from_pointer(3, 0.5), 3.0);
    }

    #[test]
    fn test_value_from_pointer_monotonic_in_x() {
        for index in 1..=STAR_COUNT {
            let samples: Vec<f32> = (0..=10)
                .map(|i| value_from_pointer(index, i as f64 / 10.0))
                .collect();
            for pair in samples.windows(2) {
                assert!(pair[0] <= pair[1], "not monotonic at star {index}");
            }
        }
    }

    #[test]
    fn test_value_from_pointer_only_two_outcomes() {
        for index in 1..=STAR_COUNT {
            for i in 0..=20 {
                let value = value_from_pointer(index, i as f64 / 20.0);
                assert!(
                    value == index as f32 || value == index as f32 - 0.5,
                    "unexpected value {value} for star {index}"
                );
            }
        }
    }

    #[test]
    fn test_clamp_rating_range() {
        assert_eq!(clamp_rating(0.0), MIN_RATING);
        assert_eq!(clamp_rating(-3.0), MIN_RATING);
        assert_eq!(clamp_rating(6.0), MAX_RATING);
        assert_eq!(clamp_rating(5.0), 5.0);
        assert_eq!(clamp_rating(0.5), 0.5);
    }

    #[test]
    fn test_clamp_rating_snaps_to_half_steps() {
        assert_eq!(clamp_rating(3.2), 3.0);
        assert_eq!(clamp_rating(3.3), 3.5);
        assert_eq!(clamp_rating(4.74), 4.5);
        assert_eq!(clamp_rating(4.76), 5.0);
    }

    #[test]
    fn test_clamp_rating_idempotent_on_grid_values() {
        for rating in all_ratings() {
            assert_eq!(clamp_rating(rating), rating);
        }
    }

    #[test]
    fn test_clamp_rating_non_finite_falls_back_to_default() {
        assert_eq!(clamp_rating(f32::NAN), DEFAULT_RATING);
        assert_eq!(clamp_rating(f32::INFINITY), DEFAULT_RATING);
        assert_eq!(clamp_rating(f32::NEG_INFINITY), DEFAULT_RATING);
    }

    #[test]
    fn test_load_user_reviews_empty_when_absent() {
        let store = ReviewStore::new(MemoryStorage::new());
        assert!(store.load_user_reviews().is_empty());
    }

    #[test]
    fn test_load_user_reviews_empty_on_garbage() {
        let store = ReviewStore::new(MemoryStorage::with_raw("not json at all {"));
        assert!(store.load_user_reviews().is_empty());
    }

    #[test]
    fn test_load_user_reviews_empty_on_wrong_shape() {
        let store = ReviewStore::new(MemoryStorage::with_raw(r#"{"name":"not a list"}"#));
        assert!(store.load_user_reviews().is_empty());
    }

    #[test]
    fn test_add_review_prepends() {
        let store = ReviewStore::new(MemoryStorage::new());

        store.add_review(review("First", 4.0));
        store.add_review(review("Second", 3.0));
        let user = store.add_review(review("Third", 5.0));

        assert_eq!(user.len(), 3);
        assert_eq!(user[0].name, "Third");
        assert_eq!(user[1].name, "Second");
        assert_eq!(user[2].name, "First");

        // And the persisted copy agrees
        let reloaded = store.load_user_reviews();
        assert_eq!(reloaded, user);
    }

    #[test]
    fn test_add_review_head_is_latest_for_any_history_length() {
        let store = ReviewStore::new(MemoryStorage::new());
        for i in 0..10 {
            let name = format!("Reviewer {i}");
            let user = store.add_review(review(&name, 4.5));
            assert_eq!(user[0].name, name);
            assert_eq!(user.len(), i + 1);
        }
    }

    #[test]
    fn test_save_load_round_trip_is_identity() {
        let store = ReviewStore::new(MemoryStorage::new());
        store.add_review(review("Asha", 3.5));
        store.add_review(review("Binod", 5.0));

        let first = store.load_user_reviews();
        store.save_user_reviews(&first);
        let second = store.load_user_reviews();

        assert_eq!(first, second);
    }

    #[test]
    fn test_merged_is_seed_then_user() {
        let store = ReviewStore::new(MemoryStorage::new());
        store.add_review(review("Newest", 3.5));

        let merged = store.merged();
        let seed = seed_reviews();

        assert_eq!(merged.len(), seed.len() + 1);
        assert_eq!(&merged[..seed.len()], &seed[..]);
        assert_eq!(merged[seed.len()].name, "Newest");
        assert_eq!(merged[seed.len()].rating, 3.5);
    }

    #[test]
    fn test_merged_never_mutates_seed_entries() {
        let store = ReviewStore::new(MemoryStorage::new());
        store.add_review(review("User", 1.0));
        store.add_review(review("Another", 2.0));

        assert_eq!(&store.merged()[..5], &seed_reviews()[..]);
    }

    #[test]
    fn test_visible_count_collapsed_and_expanded() {
        assert_eq!(visible_count(0, false), 0);
        assert_eq!(visible_count(2, false), 2);
        assert_eq!(visible_count(3, false), 3);
        assert_eq!(visible_count(8, false), VISIBLE_PREVIEW_COUNT);

        assert_eq!(visible_count(0, true), 0);
        assert_eq!(visible_count(8, true), 8);
    }

    #[test]
    fn test_visible_reviews_windows_the_list() {
        let all: Vec<Review> = (0..5).map(|i| review(&format!("R{i}"), 4.0)).collect();

        let collapsed = visible_reviews(&all, false);
        assert_eq!(collapsed.len(), 3);
        assert_eq!(collapsed[0].name, "R0");

        let expanded = visible_reviews(&all, true);
        assert_eq!(expanded.len(), 5);
    }

    #[test]
    fn test_view_more_hidden_at_three_or_fewer() {
        assert!(!view_more_visible(0));
        assert!(!view_more_visible(3));
        assert!(view_more_visible(4));
    }

    #[test]
    fn test_scenario_seed_list_collapse_and_expand() {
        // Seed list has 5 reviews: collapsed shows 3, expanded shows 5
        let store = ReviewStore::new(MemoryStorage::new());
        let merged = store.merged();

        assert_eq!(merged.len(), 5);
        assert_eq!(visible_reviews(&merged, false).len(), 3);
        assert_eq!(visible_reviews(&merged, true).len(), 5);
        assert!(view_more_visible(merged.len()));
    }

    #[test]
    fn test_scenario_first_submission_with_rating_3_5() {
        // Submitting with no prior user reviews yields a single-element
        // persisted list whose head carries the submitted rating
        let store = ReviewStore::new(MemoryStorage::new());
        store.add_review(review("Kavita", 3.5));

        let user = store.load_user_reviews();
        assert_eq!(user.len(), 1);
        assert_eq!(user[0].rating, 3.5);

        // In the merged render the user block follows the seed block
        let merged = store.merged();
        assert_eq!(merged.last().unwrap().name, "Kavita");
    }

    #[test]
    fn test_toggle_show_all_is_idempotent() {
        let all: Vec<Review> = (0..6).map(|i| review(&format!("R{i}"), 4.0)).collect();

        assert_eq!(
            visible_reviews(&all, true),
            visible_reviews(&all, true),
            "expanded render is deterministic"
        );
        assert_eq!(visible_reviews(&all, false), visible_reviews(&all, false));
    }

    #[test]
    fn test_seed_reviews_are_well_formed() {
        let seed = seed_reviews();
        assert_eq!(seed.len(), 5);
        for review in &seed {
            assert!(!review.name.is_empty());
            assert!(!review.company.is_empty());
            assert!((0.0..=5.0).contains(&review.rating));
            assert_eq!(review.rating % 0.5, 0.0, "{} off grid", review.name);
            assert!(!review.text.is_empty());
        }
    }

    #[test]
    fn test_review_serialization_shape() {
        let json = serde_json::to_string(&review("Asha", 4.5)).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["name"], "Asha");
        assert_eq!(parsed["company"], "Acme Transport");
        assert_eq!(parsed["rating"], 4.5);
        assert_eq!(parsed["text"], "Solid service.");
    }
}
