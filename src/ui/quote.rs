//! Quote request form
//!
//! Submission is simulated: no request leaves the page. The button shows a
//! sending state for a fixed delay, then the form resets and a success
//! message replaces the button for a few seconds.

use leptos::prelude::*;

use crate::ui::common::{FormField, SelectField, TextAreaField};
use crate::ui::icon::{Icon, icons};

/// Simulated transmission delay before the form "completes"
const SEND_DELAY_MS: u32 = 1_500;

/// How long the success message stays before the button returns
const SUCCESS_VISIBLE_MS: u32 = 5_000;

#[derive(Clone, Copy, PartialEq, Eq)]
enum QuotePhase {
    Idle,
    Sending,
    Sent,
}

/// Quote request section with the simulated submission flow
#[component]
pub fn QuoteSection() -> impl IntoView {
    // Form state
    let name = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let pickup = RwSignal::new(String::new());
    let destination = RwSignal::new(String::new());
    let service = RwSignal::new("ftl".to_string());
    let details = RwSignal::new(String::new());
    let phase = RwSignal::new(QuotePhase::Idle);

    let service_options = vec![
        ("ftl".to_string(), "Full Truck Load".to_string()),
        ("ptl".to_string(), "Part Truck Load".to_string()),
        ("local".to_string(), "Local Transport".to_string()),
        ("heavy".to_string(), "Heavy Equipment".to_string()),
    ];

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        if phase.get_untracked() != QuotePhase::Idle {
            return;
        }
        phase.set(QuotePhase::Sending);

        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::future::TimeoutFuture;
            use wasm_bindgen_futures::spawn_local;

            spawn_local(async move {
                TimeoutFuture::new(SEND_DELAY_MS).await;

                name.set(String::new());
                phone.set(String::new());
                pickup.set(String::new());
                destination.set(String::new());
                service.set("ftl".to_string());
                details.set(String::new());
                phase.set(QuotePhase::Sent);

                TimeoutFuture::new(SUCCESS_VISIBLE_MS).await;
                phase.set(QuotePhase::Idle);
            });
        }
    };

    let sending = move || phase.get() == QuotePhase::Sending;

    view! {
        <section id="quote" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <div class="text-center mb-12 scroll-reveal">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Get a Free Quote"
                    </h2>
                    <p class="text-lg text-theme-secondary">
                        "Tell us about your shipment and we'll get back to you within one business day."
                    </p>
                </div>

                <div class="bg-theme-primary rounded-xl border border-theme p-6 shadow-sm scroll-reveal">
                    <form on:submit=on_submit class="space-y-4">
                        <div class="grid sm:grid-cols-2 gap-4">
                            <FormField
                                label="Your Name".to_string()
                                required=true
                                placeholder="Full name".to_string()
                                value=name
                                on_input=Callback::new(move |v: String| name.set(v))
                            />
                            <FormField
                                label="Phone".to_string()
                                required=true
                                input_type="tel"
                                placeholder="+91".to_string()
                                value=phone
                                on_input=Callback::new(move |v: String| phone.set(v))
                            />
                        </div>
                        <div class="grid sm:grid-cols-2 gap-4">
                            <FormField
                                label="Pickup City".to_string()
                                required=true
                                placeholder="e.g. Mumbai".to_string()
                                value=pickup
                                on_input=Callback::new(move |v: String| pickup.set(v))
                            />
                            <FormField
                                label="Destination City".to_string()
                                required=true
                                placeholder="e.g. Chennai".to_string()
                                value=destination
                                on_input=Callback::new(move |v: String| destination.set(v))
                            />
                        </div>
                        <SelectField
                            label="Service Type".to_string()
                            value=service
                            on_change=Callback::new(move |v: String| service.set(v))
                            options=service_options
                        />
                        <TextAreaField
                            label="Load Details".to_string()
                            placeholder="Weight, dimensions, special handling...".to_string()
                            value=details
                            on_input=Callback::new(move |v: String| details.set(v))
                        />

                        <Show
                            when=move || phase.get() != QuotePhase::Sent
                            fallback=|| {
                                view! {
                                    <div class="flex items-center justify-center gap-2 p-3
                                                bg-green-100 dark:bg-green-900/30
                                                border border-green-300 dark:border-green-700 rounded-lg">
                                        <Icon name=icons::CHECK class="w-5 h-5"/>
                                        <p class="text-sm text-green-700 dark:text-green-300">
                                            "Request received! We will contact you shortly."
                                        </p>
                                    </div>
                                }
                            }
                        >
                            <button
                                type="submit"
                                class="w-full py-2.5 px-4 bg-accent-primary hover:bg-accent-primary-hover
                                       text-white font-medium rounded-lg
                                       disabled:opacity-50 disabled:cursor-not-allowed
                                       transition-colors"
                                disabled=sending
                            >
                                {move || {
                                    if sending() {
                                        view! {
                                            <span class="flex items-center justify-center">
                                                <Icon
                                                    name=icons::LOADER
                                                    class="animate-spin -ml-1 mr-2 h-4 w-4"
                                                />
                                                "Sending..."
                                            </span>
                                        }
                                            .into_any()
                                    } else {
                                        view! { <span class="block">"Request Quote"</span> }
                                            .into_any()
                                    }
                                }}
                            </button>
                        </Show>
                    </form>
                </div>
            </div>
        </section>
    }
}
