//! Home page component
//!
//! The full marketing page for Freightline featuring:
//! - SEO meta tags for search engine optimization
//! - Fixed header with mobile menu and theme toggle
//! - Hero section with quote call-to-action
//! - Services section with scroll-revealed cards
//! - Customer reviews with the star-rating form
//! - Quote request section and footer

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::icon::{Icon, icons};
use crate::ui::quote::QuoteSection;
use crate::ui::rating::StarGradientDefs;
use crate::ui::reveal::observe_reveals;
use crate::ui::reviews::ReviewsSection;
use crate::ui::theme::{ThemeContext, use_theme_context};

#[cfg(not(feature = "ssr"))]
use leptos::web_sys;

/// Scroll offset after which the navbar gets its solid background
const NAVBAR_SCROLL_THRESHOLD: f64 = 50.0;

/// Home page component with scroll-based animations
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = use_theme_context();

    // Wire up the reveal observer for the static sections once mounted
    Effect::new(move |_| {
        observe_reveals();
    });

    view! {
        <SeoMeta/>
        <StarGradientDefs/>

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme/>

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <h1 class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight
                               home-fade-in-up">
                        "Freightline Logistics"
                    </h1>
                    <p class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed
                              home-fade-in-up home-delay-200">
                        "Pan-India freight, door to door. Full truck, part load or heavy equipment - moved safely, on time, every time."
                    </p>

                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4 home-fade-in-up home-delay-400">
                        <a
                            href="#quote"
                            class="home-btn-primary"
                            aria-label="Request a free quote"
                        >
                            "Get a Free Quote"
                        </a>
                        <a
                            href="#services"
                            class="home-btn-secondary"
                            aria-label="See our services"
                        >
                            "Our Services"
                        </a>
                    </div>

                    // Scroll indicator
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                        <Icon name=icons::CHEVRON_DOWN class="w-6 h-6 text-theme-tertiary" />
                    </div>
                </div>

                // Background decoration
                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-orange-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // Services Section
            <section id="services" class="py-20 px-4 bg-theme-secondary/10">
                <div class="max-w-6xl mx-auto">
                    <div class="text-center mb-16 scroll-reveal">
                        <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                            "Why Freightline?"
                        </h2>
                        <p class="text-lg text-theme-secondary max-w-2xl mx-auto">
                            "One partner for everything that needs to move - across the street or across the country."
                        </p>
                    </div>

                    <div class="grid md:grid-cols-3 gap-8">
                        <ServiceCard
                            icon=icons::TRUCK
                            title="Full Truck Load"
                            description="Dedicated vehicles for time-critical, high-volume shipments on every national corridor."
                        />
                        <ServiceCard
                            icon=icons::PACKAGE
                            title="Part Truck Load"
                            description="Pay only for the space you use. Affordable consolidated freight for SMEs."
                        />
                        <ServiceCard
                            icon=icons::MAP_PIN
                            title="Local Transport"
                            description="Same-day pickup and delivery within the city, with live coordination."
                        />
                        <ServiceCard
                            icon=icons::CLOCK
                            title="24/7 Support"
                            description="A human on the phone at any hour, for every shipment in transit."
                        />
                        <ServiceCard
                            icon=icons::PHONE
                            title="Dedicated Manager"
                            description="A single point of contact who knows your lanes, loads and deadlines."
                        />
                        <ServiceCard
                            icon=icons::MAIL
                            title="Instant Quotes"
                            description="Send us your load details and get a transparent quote within one business day."
                        />
                    </div>
                </div>
            </section>

            // Reviews Section
            <ReviewsSection/>

            // Quote Section
            <QuoteSection/>

            // Footer
            <Footer/>

            // CSS Animations
            <HomeStyles/>
        </div>
    }
}

/// SEO meta tags for the home page
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text="Freightline Logistics - Pan-India Freight & Transport"/>
        <Meta
            name="description"
            content="Full truck load, part truck load, local transport and heavy equipment logistics across India. Get a free quote today."
        />
        <Meta property="og:title" content="Freightline Logistics"/>
        <Meta
            property="og:description"
            content="Pan-India freight, door to door. Moved safely, on time, every time."
        />
        <Meta property="og:type" content="website"/>
    }
}

/// Header component with mobile menu support
#[component]
fn Header(theme: ThemeContext) -> impl IntoView {
    let (mobile_menu_open, set_mobile_menu_open) = signal(false);
    let scrolled = RwSignal::new(false);

    // Solid navbar background once the page is scrolled
    #[cfg(not(feature = "ssr"))]
    {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            if let Some(window) = web_sys::window() {
                let handler = Closure::<dyn Fn(web_sys::Event)>::new(move |_: web_sys::Event| {
                    if let Some(window) = web_sys::window() {
                        let offset = window.scroll_y().unwrap_or(0.0);
                        scrolled.set(offset > NAVBAR_SCROLL_THRESHOLD);
                    }
                });

                let _ = window
                    .add_event_listener_with_callback("scroll", handler.as_ref().unchecked_ref());

                // Keep the closure alive
                handler.forget();
            }
        });
    }

    view! {
        <header
            class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50 transition-shadow"
            class:scrolled=move || scrolled.get()
        >
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <a href="/" class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Icon name=icons::TRUCK class="w-7 h-7 text-accent-primary"/>
                        <span class="text-xl font-bold text-theme-primary">"Freightline"</span>
                    </a>

                    // Desktop Navigation
                    <div class="hidden md:flex items-center gap-6">
                        <nav class="flex items-center gap-4">
                            <a href="#services" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Services"
                            </a>
                            <a href="#reviews" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Reviews"
                            </a>
                            <a href="#quote" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Get a Quote"
                            </a>
                        </nav>
                        <ThemeToggle theme=theme/>
                    </div>

                    // Mobile menu button
                    <button
                        class="md:hidden p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors"
                        on:click=move |_| set_mobile_menu_open.update(|v| *v = !*v)
                        aria-label="Toggle mobile menu"
                        aria-expanded=move || mobile_menu_open.get()
                    >
                        {move || {
                            if mobile_menu_open.get() {
                                view! {
                                    <Icon name=icons::X class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            } else {
                                view! {
                                    <Icon name=icons::MENU class="w-6 h-6 text-theme-primary" />
                                }.into_any()
                            }
                        }}
                    </button>
                </div>

                // Mobile menu
                <div
                    class="md:hidden overflow-hidden transition-all duration-300"
                    class:max-h-0=move || !mobile_menu_open.get()
                    class:max-h-96=move || mobile_menu_open.get()
                >
                    <div class="py-4 space-y-4 border-t border-theme/50">
                        <nav class="flex flex-col gap-2">
                            <a
                                href="#services"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Services"
                            </a>
                            <a
                                href="#reviews"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Reviews"
                            </a>
                            <a
                                href="#quote"
                                class="block px-4 py-2 text-sm font-medium text-theme-secondary hover:text-theme-primary hover:bg-theme-secondary/30 rounded-lg transition-colors"
                                on:click=move |_| set_mobile_menu_open.set(false)
                            >
                                "Get a Quote"
                            </a>
                            <ThemeToggle theme=theme/>
                        </nav>
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.toggle()
            aria-label="Toggle theme"
        >
            {move || {
                if theme.is_dark.get() {
                    view! {
                        <Icon name=icons::SUN class="w-5 h-5" />
                    }
                } else {
                    view! {
                        <Icon name=icons::MOON class="w-5 h-5" />
                    }
                }
            }}
        </button>
    }
}

/// Single service benefit card
#[component]
fn ServiceCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
) -> impl IntoView {
    view! {
        <div class="scroll-reveal bg-theme-primary rounded-xl border border-theme p-6 shadow-sm hover:shadow-md transition-shadow">
            <div class="w-12 h-12 rounded-lg bg-accent-primary/10 flex items-center justify-center mb-4">
                <Icon name=icon class="w-6 h-6 text-accent-primary"/>
            </div>
            <h3 class="text-lg font-semibold text-theme-primary mb-2">{title}</h3>
            <p class="text-sm text-theme-secondary leading-relaxed">{description}</p>
        </div>
    }
}

/// Footer section
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 px-4 border-t border-theme bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <div class="grid sm:grid-cols-3 gap-8 mb-8">
                    <div>
                        <div class="flex items-center gap-2 mb-3">
                            <Icon name=icons::TRUCK class="w-6 h-6 text-accent-primary"/>
                            <span class="text-lg font-bold text-theme-primary">"Freightline"</span>
                        </div>
                        <p class="text-sm text-theme-secondary leading-relaxed">
                            "Freight and transport across India since 2009."
                        </p>
                    </div>
                    <div>
                        <h4 class="text-sm font-semibold text-theme-primary mb-3">"Services"</h4>
                        <ul class="space-y-2 text-sm text-theme-secondary">
                            <li>"Full Truck Load"</li>
                            <li>"Part Truck Load"</li>
                            <li>"Local Transport"</li>
                            <li>"Heavy Equipment"</li>
                        </ul>
                    </div>
                    <div>
                        <h4 class="text-sm font-semibold text-theme-primary mb-3">"Contact"</h4>
                        <ul class="space-y-2 text-sm text-theme-secondary">
                            <li class="flex items-center gap-2">
                                <Icon name=icons::PHONE class="w-4 h-4"/>
                                "+91 98200 00000"
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::MAIL class="w-4 h-4"/>
                                "quotes@freightline.in"
                            </li>
                            <li class="flex items-center gap-2">
                                <Icon name=icons::MAP_PIN class="w-4 h-4"/>
                                "Bhiwandi, Maharashtra"
                            </li>
                        </ul>
                    </div>
                </div>
                <div class="pt-8 border-t border-theme/50 text-center">
                    <p class="text-sm text-theme-tertiary">
                        "© 2026 Freightline Logistics. All rights reserved."
                    </p>
                </div>
            </div>
        </footer>
    }
}

/// Page-scoped animation styles
#[component]
fn HomeStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            html {
                scroll-behavior: smooth;
                scroll-padding-top: 80px;
            }

            header.scrolled {
                box-shadow: 0 1px 10px rgb(0 0 0 / 0.08);
            }

            .home-fade-in-up {
                opacity: 0;
                animation: home-fade-in-up 0.8s ease-out forwards;
            }

            .home-delay-200 { animation-delay: 0.2s; }
            .home-delay-400 { animation-delay: 0.4s; }

            @keyframes home-fade-in-up {
                from {
                    opacity: 0;
                    transform: translateY(1.5rem);
                }
                to {
                    opacity: 1;
                    transform: translateY(0);
                }
            }

            .scroll-reveal {
                opacity: 0;
                transform: translateY(2rem);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }

            .scroll-reveal.visible {
                opacity: 1;
                transform: translateY(0);
            }

            .home-btn-primary {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                padding: 0.75rem 2rem;
                border-radius: 0.5rem;
                font-weight: 600;
                color: white;
                background: var(--accent-primary);
                transition: background-color 0.2s ease;
            }

            .home-btn-primary:hover {
                background: var(--accent-primary-hover);
            }

            .home-btn-secondary {
                display: inline-flex;
                align-items: center;
                justify-content: center;
                padding: 0.75rem 2rem;
                border-radius: 0.5rem;
                font-weight: 600;
                color: var(--text-primary);
                border: 1px solid var(--border-color);
                transition: background-color 0.2s ease;
            }

            .home-btn-secondary:hover {
                background: var(--bg-secondary);
            }
            "#
        </style>
    }
}
