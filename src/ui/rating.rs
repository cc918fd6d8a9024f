//! Interactive star-rating control and the shared star icon
//!
//! Pointer position over a star maps to a half-step value via
//! [`crate::core::value_from_pointer`]; hovering previews that value and only
//! a click commits it. Both this control and the read-only rows on review
//! cards render through [`StarIcon`], so fill states always match.

use leptos::prelude::*;

use crate::core::{STAR_COUNT, StarFill, clamp_rating, star_fill, value_from_pointer};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Horizontal pointer position within the hovered element, as a 0..=1
/// fraction of its width
fn pointer_fraction(ev: &leptos::ev::MouseEvent) -> Option<f64> {
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;

        let element = ev
            .current_target()?
            .dyn_into::<web_sys::Element>()
            .ok()?;
        let rect = element.get_bounding_client_rect();
        if rect.width() <= 0.0 {
            return None;
        }
        Some((ev.client_x() as f64 - rect.left()) / rect.width())
    }
    #[cfg(feature = "ssr")]
    {
        let _ = ev;
        None
    }
}

/// A single star, filled according to `fill`.
///
/// The half state paints the left side with the `star-half-gradient`
/// definition injected by [`StarGradientDefs`].
#[component]
pub fn StarIcon(
    /// Fill state to render
    #[prop(into)]
    fill: Signal<StarFill>,
    /// CSS classes for sizing
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=move || format!("star-fill {} {}", fill.get().class(), class)
            viewBox="0 0 24 24"
            fill=move || match fill.get() {
                StarFill::Full => "currentColor",
                StarFill::Half => "url(#star-half-gradient)",
                StarFill::Empty => "none",
            }
            stroke="currentColor"
            stroke-width="1.5"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            <path d="M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z"/>
        </svg>
    }
}

/// Zero-size SVG carrying the gradient used for half-filled stars.
///
/// The stop colors read theme CSS variables, so half stars recolor with the
/// theme without being re-rendered.
#[component]
pub fn StarGradientDefs() -> impl IntoView {
    view! {
        <svg width="0" height="0" style="position: absolute;" aria-hidden="true">
            <defs>
                <linearGradient id="star-half-gradient">
                    <stop offset="50%" stop-color="var(--star-active, #f97316)"/>
                    <stop offset="50%" stop-color="var(--star-inactive, #d1d5db)"/>
                </linearGradient>
            </defs>
        </svg>
    }
}

/// Five-star input committing 0.5-stepped values into `value`.
///
/// Moving the pointer previews the value under it; leaving the control
/// reverts the preview to the committed value; clicking commits.
#[component]
pub fn StarRatingInput(
    /// Committed rating, owned by the surrounding form
    value: RwSignal<f32>,
) -> impl IntoView {
    let preview = RwSignal::new(None::<f32>);
    let shown = move || preview.get().unwrap_or_else(|| value.get());

    view! {
        <div
            class="star-input flex items-center gap-1"
            on:mouseleave=move |_| preview.set(None)
        >
            {(1..=STAR_COUNT)
                .map(|index| {
                    view! {
                        <button
                            type="button"
                            class="star-item p-0.5 cursor-pointer"
                            aria-label=format!("Rate {index} out of 5 stars")
                            on:mousemove=move |ev| {
                                if let Some(fraction) = pointer_fraction(&ev) {
                                    preview.set(Some(value_from_pointer(index, fraction)));
                                }
                            }
                            on:click=move |ev| {
                                if let Some(fraction) = pointer_fraction(&ev) {
                                    value.set(clamp_rating(value_from_pointer(index, fraction)));
                                    preview.set(None);
                                }
                            }
                        >
                            <StarIcon
                                fill=Signal::derive(move || star_fill(index, shown()))
                                class="w-7 h-7"
                            />
                        </button>
                    }
                })
                .collect_view()}
            <span class="ml-2 text-sm font-semibold text-theme-secondary w-8">
                {move || format!("{:.1}", shown())}
            </span>
        </div>
    }
}

/// Read-only star row for a review card
#[component]
pub fn StarRow(
    /// Rating to display
    rating: f32,
) -> impl IntoView {
    view! {
        <div class="flex items-center gap-0.5">
            {(1..=STAR_COUNT)
                .map(|index| {
                    view! { <StarIcon fill=star_fill(index, rating) class="w-4 h-4"/> }
                })
                .collect_view()}
        </div>
    }
}
