//! Customer reviews: card list, view-more toggle and the submission form
//!
//! The rendered list is always `seed ++ persisted user reviews`; submitting
//! prepends to the persisted user block and the list re-renders reactively.

use leptos::prelude::*;

use crate::core::{
    BrowserStorage, DEFAULT_RATING, Review, ReviewStore, clamp_rating, seed_reviews,
    view_more_visible, visible_count,
};
use crate::ui::common::{FormField, TextAreaField};
use crate::ui::icon::{Icon, icons};
use crate::ui::rating::{StarRatingInput, StarRow};
use crate::ui::reveal::observe_reveals;

/// How long the submit button reads "Submitted!" before reverting
const SUBMITTED_RESET_MS: u32 = 3_000;

/// Reviews section: heading, card grid, view-more control and the form
#[component]
pub fn ReviewsSection() -> impl IntoView {
    let store = ReviewStore::new(BrowserStorage);

    let user_reviews = RwSignal::new(Vec::<Review>::new());
    let show_all = RwSignal::new(false);

    // Persisted reviews only exist in the browser; pick them up after
    // hydration so server and client render the same initial markup
    Effect::new(move |_| {
        user_reviews.set(store.load_user_reviews());
    });

    let merged = Memo::new(move |_| {
        let mut all = seed_reviews();
        all.extend(user_reviews.get());
        all
    });

    let visible = Memo::new(move |_| {
        let all = merged.get();
        let count = visible_count(all.len(), show_all.get());
        all[..count].to_vec()
    });

    // Newly created cards need to be picked up by the reveal observer
    Effect::new(move |_| {
        let _ = visible.get();
        observe_reveals();
    });

    view! {
        <section id="reviews" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="text-center mb-16 scroll-reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "What Our Clients Say"
                    </h2>
                    <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                        "Trusted by manufacturers, distributors and SMEs across India."
                    </p>
                </div>

                <div class="grid md:grid-cols-3 gap-8">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|review| view! { <ReviewCard review=review/> })
                            .collect_view()
                    }}
                </div>

                <Show when=move || view_more_visible(merged.get().len())>
                    <div class="text-center mt-10">
                        <button
                            class="btn-ghost inline-flex items-center gap-2"
                            on:click=move |_| show_all.update(|v| *v = !*v)
                        >
                            {move || if show_all.get() { "Show Less" } else { "View More Reviews" }}
                            {move || {
                                if show_all.get() {
                                    view! { <Icon name=icons::CHEVRON_UP class="w-4 h-4"/> }
                                        .into_any()
                                } else {
                                    view! { <Icon name=icons::CHEVRON_DOWN class="w-4 h-4"/> }
                                        .into_any()
                                }
                            }}
                        </button>
                    </div>
                </Show>

                <ReviewForm store=store user_reviews=user_reviews/>
            </div>
        </section>
    }
}

/// Single testimonial card
#[component]
fn ReviewCard(review: Review) -> impl IntoView {
    let initial = review
        .name
        .chars()
        .next()
        .unwrap_or('?')
        .to_uppercase()
        .to_string();

    view! {
        <div class="testimonial-card scroll-reveal bg-theme-primary rounded-xl border border-theme p-6 shadow-sm">
            <StarRow rating=review.rating/>
            <p class="text-theme-secondary leading-relaxed mt-4">
                {format!("\"{}\"", review.text)}
            </p>
            <div class="flex items-center gap-3 mt-6">
                <div class="w-10 h-10 rounded-full bg-accent-primary text-white font-medium flex items-center justify-center">
                    {initial}
                </div>
                <div class="min-w-0">
                    <p class="text-sm font-semibold text-theme-primary truncate">{review.name}</p>
                    <p class="text-xs text-theme-tertiary truncate">{review.company}</p>
                </div>
            </div>
        </div>
    }
}

/// Review submission form with the star-rating control
#[component]
fn ReviewForm(
    store: ReviewStore<BrowserStorage>,
    /// Persisted user reviews, shared with the card list
    user_reviews: RwSignal<Vec<Review>>,
) -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let company = RwSignal::new(String::new());
    let text = RwSignal::new(String::new());
    let rating = RwSignal::new(DEFAULT_RATING);
    let submitted = RwSignal::new(false);

    // Form validation
    let name_error = RwSignal::new(None::<String>);
    let text_error = RwSignal::new(None::<String>);

    let validate = move || {
        let mut valid = true;
        if name.get_untracked().trim().is_empty() {
            name_error.set(Some("Name is required".to_string()));
            valid = false;
        }
        if text.get_untracked().trim().is_empty() {
            text_error.set(Some("Please write a few words".to_string()));
            valid = false;
        }
        valid
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if !validate() {
            return;
        }

        let review = Review::new(
            name.get_untracked().trim(),
            company.get_untracked().trim(),
            clamp_rating(rating.get_untracked()),
            text.get_untracked().trim(),
        );
        user_reviews.set(store.add_review(review));

        // Reset to defaults; the list re-renders reactively
        name.set(String::new());
        company.set(String::new());
        text.set(String::new());
        rating.set(DEFAULT_RATING);
        submitted.set(true);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SUBMITTED_RESET_MS).await;
                submitted.set(false);
            });
        }
    };

    view! {
        <div class="max-w-xl mx-auto mt-16 scroll-reveal">
            <div class="bg-theme-primary rounded-xl border border-theme p-6 shadow-sm">
                <h3 class="text-xl font-semibold text-theme-primary mb-6">
                    "Share Your Experience"
                </h3>
                <form on:submit=on_submit class="space-y-4">
                    <FormField
                        label="Your Name".to_string()
                        required=true
                        placeholder="Full name".to_string()
                        value=name
                        on_input=Callback::new(move |v: String| {
                            name.set(v);
                            name_error.set(None);
                        })
                        error=name_error.into()
                    />
                    <FormField
                        label="Company".to_string()
                        placeholder="Company or role".to_string()
                        value=company
                        on_input=Callback::new(move |v: String| company.set(v))
                    />
                    <div class="space-y-1.5">
                        <label class="label">"Your Rating"</label>
                        <StarRatingInput value=rating/>
                    </div>
                    <TextAreaField
                        label="Your Review".to_string()
                        required=true
                        placeholder="How was your experience with us?".to_string()
                        value=text
                        rows=4
                        on_input=Callback::new(move |v: String| {
                            text.set(v);
                            text_error.set(None);
                        })
                        error=text_error.into()
                    />
                    <button
                        type="submit"
                        class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                               text-white font-medium rounded-lg transition-colors"
                    >
                        {move || if submitted.get() { "Submitted!" } else { "Submit Review" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
