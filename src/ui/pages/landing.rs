//! Landing page component
//!
//! An immersive, scroll-animated landing page for Stratus featuring:
//! - SEO meta tags for search engine optimization
//! - Hero section with staggered entrance animations
//! - Feature showcase with a selector list and a detail panel
//! - Testimonial carousel with wraparound navigation
//! - Pricing section with a monthly/yearly billing toggle
//! - FAQ section with accordion
//! - Call-to-action and footer sections

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};
use leptos_router::components::A;

use crate::core::{
    Billing, BillingCycle, Carousel, Entrance, FaqEntry, Glyph, PricingPlan, Showcase, Stagger,
    Testimonial, faqs, features, plans, testimonials,
};
use crate::ui::icon::Icon;
use crate::ui::theme::use_theme_context;

/// Landing page component with scroll-based animations
#[component]
pub fn LandingPage() -> impl IntoView {
    let theme = use_theme_context();
    let cascade = Stagger::cascade();

    view! {
        // SEO Meta Tags
        <SeoMeta />

        <div class="min-h-screen bg-theme-primary overflow-x-hidden">
            <Header theme=theme />

            // Hero Section
            <section class="min-h-screen flex items-center justify-center relative pt-16">
                <div class="text-center px-4 max-w-4xl mx-auto">
                    <span
                        class="inline-block px-4 py-1.5 mb-6 text-sm font-medium text-accent-primary bg-accent-primary/10 rounded-full"
                        style=cascade.entrance_for(0).style()
                    >
                        "Now generally available"
                    </span>
                    <h1
                        class="text-5xl sm:text-6xl lg:text-7xl font-bold text-theme-primary mb-6 tracking-tight"
                        style=cascade.entrance_for(1).style()
                    >
                        "Build Amazing Web Applications"
                    </h1>
                    <p
                        class="text-xl sm:text-2xl text-theme-secondary max-w-2xl mx-auto mb-10 leading-relaxed"
                        style=cascade.entrance_for(2).style()
                    >
                        "Stratus is the modern platform for building exceptional web applications. Deploy in seconds, scale worldwide, and ship every day."
                    </p>

                    <div
                        class="flex flex-col sm:flex-row items-center justify-center gap-4"
                        style=cascade.entrance_for(3).style()
                    >
                        <a
                            href="#pricing"
                            class="landing-btn-primary inline-flex items-center gap-2"
                            aria-label="Get started with Stratus"
                        >
                            "Get Started"
                            <Icon glyph=Glyph::ArrowRight class="w-5 h-5" />
                        </a>
                        <a
                            href="#features"
                            class="landing-btn-secondary"
                            aria-label="Learn more about the platform"
                        >
                            "Learn More"
                        </a>
                    </div>

                    // Scroll indicator
                    <div class="absolute bottom-8 left-1/2 -translate-x-1/2 animate-bounce">
                        <Icon glyph=Glyph::ChevronDown class="w-6 h-6 text-theme-tertiary" />
                    </div>
                </div>

                // Background decoration
                <div class="absolute inset-0 -z-10 overflow-hidden" aria-hidden="true">
                    <div class="absolute top-1/4 left-1/4 w-96 h-96 bg-accent-primary/5 rounded-full blur-3xl"></div>
                    <div class="absolute bottom-1/4 right-1/4 w-96 h-96 bg-blue-500/5 rounded-full blur-3xl"></div>
                </div>
            </section>

            // Feature Showcase Section
            <ShowcaseSection />

            // Testimonial Section
            <TestimonialSection />

            // Pricing Section
            <PricingSection />

            // FAQ Section
            <FaqSection />

            // CTA Section
            <section class="py-24 px-4 bg-gradient-to-b from-transparent to-theme-secondary/30">
                <div class="max-w-4xl mx-auto text-center landing-scroll-animate">
                    <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">
                        "Ready to Accelerate Your Development?"
                    </h2>
                    <p class="text-lg text-theme-secondary mb-8 max-w-xl mx-auto">
                        "Join thousands of developers building and shipping on Stratus."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="https://app.stratus.dev/signup"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="landing-btn-primary inline-flex items-center gap-2"
                        >
                            "Start Your Project"
                            <Icon glyph=Glyph::Check class="w-5 h-5" />
                        </a>
                        <a
                            href="https://docs.stratus.dev"
                            target="_blank"
                            rel="noopener noreferrer"
                            class="landing-btn-secondary"
                        >
                            "View Documentation"
                        </a>
                    </div>
                </div>
            </section>

            // Footer
            <Footer />

            // CSS Animations
            <MotionStyles />

            // Intersection Observer for scroll animations
            <ScrollAnimationScript />
        </div>
    }
}

/// Header component with anchor navigation and theme toggle
#[component]
fn Header(theme: crate::ui::theme::ThemeContext) -> impl IntoView {
    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-theme-primary/80 backdrop-blur-md border-b border-theme/50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    // Logo
                    <A href="/" attr:class="flex items-center gap-3 hover:opacity-80 transition-opacity">
                        <Logo />
                        <span class="text-xl font-bold text-theme-primary">"Stratus"</span>
                    </A>

                    // Navigation collapses to logo + toggle on small screens
                    <div class="flex items-center gap-6">
                        <nav class="hidden md:flex items-center gap-4">
                            <a href="#features" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Features"
                            </a>
                            <a href="#testimonials" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Testimonials"
                            </a>
                            <a href="#pricing" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "Pricing"
                            </a>
                            <a href="#faq" class="text-sm font-medium text-theme-secondary hover:text-theme-primary transition-colors">
                                "FAQ"
                            </a>
                        </nav>
                        <ThemeToggle theme=theme />
                    </div>
                </div>
            </div>
        </header>
    }
}

/// Theme toggle button component
#[component]
fn ThemeToggle(theme: crate::ui::theme::ThemeContext) -> impl IntoView {
    view! {
        <button
            class="p-2 rounded-lg hover:bg-gray-200 dark:hover:bg-gray-700 transition-colors text-gray-600 dark:text-gray-300
                   border border-gray-300 dark:border-gray-600"
            on:click=move |_| theme.cycle_mode()
            title=move || theme.mode.get().display_name()
            aria-label="Switch theme"
        >
            {move || {
                let mode = theme.mode.get();
                view! { <Icon glyph=mode.glyph() class="w-5 h-5" /> }
            }}
        </button>
    }
}

/// Centered heading shared by the page sections
#[component]
fn SectionHeading(title: &'static str, subtitle: &'static str) -> impl IntoView {
    view! {
        <div class="text-center mb-16 landing-scroll-animate">
            <h2 class="text-3xl sm:text-4xl font-bold text-theme-primary mb-4">{title}</h2>
            <p class="text-lg text-theme-secondary max-w-2xl mx-auto">{subtitle}</p>
        </div>
    }
}

/// Feature showcase: a selector list on the left, the selected feature's
/// detail panel on the right. Exactly one feature is expanded at a time.
#[component]
fn ShowcaseSection() -> impl IntoView {
    let showcase = RwSignal::new(Showcase::new(features().len()));

    view! {
        <section id="features" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Why Stratus?"
                    subtitle="Everything you need to build, deploy, and run modern applications."
                />

                <div class="grid lg:grid-cols-2 gap-12 items-start">
                    // Selector list
                    <div class="space-y-3 landing-scroll-animate" role="tablist" aria-label="Platform features">
                        {features()
                            .iter()
                            .enumerate()
                            .map(|(index, feature)| {
                                let row_class = move || {
                                    if showcase.get().is_selected(index) {
                                        "w-full text-left p-4 rounded-xl border-2 border-accent-primary bg-accent-primary/5 flex items-start gap-4 transition-all duration-300"
                                    } else {
                                        "w-full text-left p-4 rounded-xl border-2 border-transparent hover:border-theme hover:bg-theme-secondary/30 flex items-start gap-4 transition-all duration-300"
                                    }
                                };

                                view! {
                                    <button
                                        class=row_class
                                        role="tab"
                                        aria-selected=move || showcase.get().is_selected(index)
                                        on:click=move |_| showcase.update(|s| s.select(index))
                                    >
                                        <div class="w-10 h-10 rounded-lg bg-accent-primary/10 flex items-center justify-center flex-shrink-0">
                                            <Icon glyph=feature.glyph class="w-5 h-5 text-accent-primary" />
                                        </div>
                                        <div>
                                            <h3 class="font-semibold text-theme-primary">{feature.title.as_str()}</h3>
                                            <p class="text-sm text-theme-secondary mt-1">{feature.summary.as_str()}</p>
                                        </div>
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>

                    // Detail panel, rebuilt whenever the selection changes
                    <div class="landing-scroll-animate bg-theme-primary rounded-2xl border border-theme p-8 lg:sticky lg:top-24 min-h-[320px]">
                        {move || {
                            features().get(showcase.get().selected()).map(|feature| {
                                view! {
                                    <div style=Entrance::rise().style()>
                                        <div class="w-14 h-14 rounded-xl bg-accent-primary/10 flex items-center justify-center mb-6">
                                            <Icon glyph=feature.glyph class="w-7 h-7 text-accent-primary" />
                                        </div>
                                        <h3 class="text-2xl font-bold text-theme-primary mb-3">{feature.title.as_str()}</h3>
                                        <p class="text-theme-secondary leading-relaxed mb-6">{feature.summary.as_str()}</p>
                                        <ul class="space-y-3">
                                            {feature
                                                .detail_lines
                                                .iter()
                                                .map(|line| {
                                                    view! {
                                                        <li class="flex items-center gap-3">
                                                            <Icon glyph=Glyph::Check class="w-5 h-5 text-green-500 flex-shrink-0" />
                                                            <span class="text-theme-primary">{line.as_str()}</span>
                                                        </li>
                                                    }
                                                })
                                                .collect_view()}
                                        </ul>
                                    </div>
                                }
                            })
                        }}
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Testimonial carousel showing one entry at a time, wrapping at both ends
#[component]
fn TestimonialSection() -> impl IntoView {
    let carousel = RwSignal::new(Carousel::new(testimonials().len()));

    view! {
        <section id="testimonials" class="py-20 px-4">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Loved by Teams Everywhere"
                    subtitle="What builders say after moving their apps to Stratus."
                />

                <div class="max-w-3xl mx-auto landing-scroll-animate">
                    {move || {
                        testimonials()
                            .get(carousel.get().position())
                            .map(|entry| view! { <TestimonialCard entry=entry /> })
                    }}

                    // Step buttons and position dots
                    <div class="flex items-center justify-center gap-6 mt-8">
                        <button
                            class="p-2 rounded-full border border-theme text-theme-secondary hover:text-theme-primary hover:border-accent-primary transition-colors"
                            on:click=move |_| carousel.update(|c| c.previous())
                            aria-label="Previous testimonial"
                        >
                            <Icon glyph=Glyph::ChevronLeft class="w-5 h-5" />
                        </button>

                        <div class="flex items-center gap-2">
                            {testimonials()
                                .iter()
                                .enumerate()
                                .map(|(index, entry)| {
                                    let dot_class = move || {
                                        if carousel.get().is_current(index) {
                                            "w-2.5 h-2.5 rounded-full bg-accent-primary transition-colors"
                                        } else {
                                            "w-2.5 h-2.5 rounded-full bg-theme-tertiary/40 hover:bg-theme-tertiary transition-colors"
                                        }
                                    };

                                    view! {
                                        <button
                                            class=dot_class
                                            on:click=move |_| carousel.update(|c| c.go_to(index))
                                            aria-label=format!("Show testimonial from {}", entry.author)
                                        ></button>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <button
                            class="p-2 rounded-full border border-theme text-theme-secondary hover:text-theme-primary hover:border-accent-primary transition-colors"
                            on:click=move |_| carousel.update(|c| c.next())
                            aria-label="Next testimonial"
                        >
                            <Icon glyph=Glyph::ChevronRight class="w-5 h-5" />
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// One testimonial with its star rating, quote, and attribution
#[component]
fn TestimonialCard(entry: &'static Testimonial) -> impl IntoView {
    view! {
        <figure
            class="bg-theme-primary border border-theme rounded-2xl p-8 sm:p-10 text-center shadow-lg"
            style=Entrance::rise().style()
        >
            <div
                class="flex items-center justify-center gap-1 mb-6"
                aria-label=format!("Rated {} out of 5 stars", entry.rating)
            >
                {(0u8..5)
                    .map(|slot| {
                        let star_class = if slot < entry.rating {
                            "w-5 h-5 text-amber-400"
                        } else {
                            "w-5 h-5 text-theme-tertiary/40"
                        };
                        view! { <Icon glyph=Glyph::Star class=star_class /> }
                    })
                    .collect_view()}
            </div>
            <blockquote class="text-xl text-theme-primary leading-relaxed mb-6">
                {format!("\u{201c}{}\u{201d}", entry.quote)}
            </blockquote>
            <figcaption>
                <p class="font-semibold text-theme-primary">{entry.author.as_str()}</p>
                <p class="text-sm text-theme-tertiary mt-1">{entry.role.as_str()}</p>
            </figcaption>
        </figure>
    }
}

/// Pricing section with the monthly/yearly billing toggle
#[component]
fn PricingSection() -> impl IntoView {
    let billing = RwSignal::new(Billing::new());

    view! {
        <section id="pricing" class="py-20 px-4 bg-theme-secondary/10">
            <div class="max-w-6xl mx-auto">
                <SectionHeading
                    title="Simple, Transparent Pricing"
                    subtitle="Start for free. Upgrade when your team grows."
                />

                // Billing cycle toggle
                <div
                    class="flex items-center justify-center gap-1 p-1 rounded-xl bg-theme-secondary/50 border border-theme w-fit mx-auto mb-12 landing-scroll-animate"
                    role="group"
                    aria-label="Billing cycle"
                >
                    <button
                        class=move || cycle_tab_class(billing.get().is_active(BillingCycle::Monthly))
                        aria-pressed=move || billing.get().is_active(BillingCycle::Monthly)
                        on:click=move |_| billing.update(|b| b.set(BillingCycle::Monthly))
                    >
                        "Monthly"
                    </button>
                    <button
                        class=move || cycle_tab_class(billing.get().is_active(BillingCycle::Yearly))
                        aria-pressed=move || billing.get().is_active(BillingCycle::Yearly)
                        on:click=move |_| billing.update(|b| b.set(BillingCycle::Yearly))
                    >
                        "Yearly"
                        <span class="ml-2 px-2 py-0.5 text-xs font-medium text-green-600 dark:text-green-400 bg-green-500/10 rounded-full">
                            "Save 15%"
                        </span>
                    </button>
                </div>

                <div class="grid md:grid-cols-3 gap-8 max-w-5xl mx-auto">
                    {plans()
                        .iter()
                        .map(|plan| view! { <PricingCard plan=plan billing=billing /> })
                        .collect_view()}
                </div>

                <p class="text-center text-theme-tertiary text-sm mt-8 landing-scroll-animate">
                    "Prices in USD per workspace. Switch or cancel at any time."
                </p>
            </div>
        </section>
    }
}

fn cycle_tab_class(active: bool) -> &'static str {
    if active {
        "px-5 py-2 text-sm font-semibold rounded-lg bg-theme-primary text-theme-primary shadow-sm transition-colors"
    } else {
        "px-5 py-2 text-sm font-semibold rounded-lg text-theme-secondary hover:text-theme-primary transition-colors"
    }
}

/// Pricing card component
///
/// The rendered price and its unit label are always read from the billing
/// cycle in one place, so they can never disagree mid-toggle.
#[component]
fn PricingCard(plan: &'static PricingPlan, billing: RwSignal<Billing>) -> impl IntoView {
    let card_class = if plan.flagship {
        "landing-scroll-animate relative bg-theme-primary p-8 rounded-2xl border-2 border-accent-primary shadow-xl md:scale-105"
    } else {
        "landing-scroll-animate bg-theme-primary p-8 rounded-2xl border border-theme hover:border-theme-secondary transition-colors"
    };

    view! {
        <div class=card_class>
            {plan.flagship.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 px-4 py-1 bg-accent-primary text-white text-sm font-medium rounded-full">
                    "Most Popular"
                </div>
            })}

            <div class="text-center mb-6">
                <h3 class="text-xl font-bold text-theme-primary mb-2">{plan.name.as_str()}</h3>
                <div class="flex items-baseline justify-center gap-1">
                    {move || {
                        let (price, unit) = billing.get().cycle().price_line(plan);
                        view! {
                            <span class="text-4xl font-bold text-theme-primary">{price}</span>
                            <span class="text-theme-secondary">{unit}</span>
                        }
                    }}
                </div>
                <p class="text-sm text-theme-secondary mt-2">{plan.blurb.as_str()}</p>
            </div>

            <ul class="space-y-3 mb-8">
                {plan.features
                    .iter()
                    .map(|line| {
                        view! {
                            <li class="flex items-center gap-3">
                                <Icon glyph=Glyph::Check class="w-5 h-5 text-green-500 flex-shrink-0" />
                                <span class="text-theme-primary">{line.as_str()}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>

            <a
                href=move || {
                    format!(
                        "https://app.stratus.dev/signup?plan={}&cycle={}",
                        plan.id,
                        billing.get().cycle().as_str(),
                    )
                }
                target="_blank"
                rel="noopener noreferrer"
                class=if plan.flagship {
                    "block w-full text-center py-3 px-6 bg-accent-primary hover:bg-accent-primary-hover text-white font-semibold rounded-xl transition-colors"
                } else {
                    "block w-full text-center py-3 px-6 border-2 border-theme hover:border-accent-primary text-theme-primary font-semibold rounded-xl transition-colors"
                }
            >
                {if plan.monthly_price == 0 { "Start for Free" } else { "Get Started" }}
            </a>
        </div>
    }
}

/// FAQ section component
#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="py-20 px-4">
            <div class="max-w-3xl mx-auto">
                <SectionHeading
                    title="Frequently Asked Questions"
                    subtitle="Got questions? We've got answers."
                />

                <div class="space-y-4">
                    {faqs()
                        .iter()
                        .map(|entry| view! { <FaqItem entry=entry /> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// FAQ accordion item component
#[component]
fn FaqItem(entry: &'static FaqEntry) -> impl IntoView {
    let (is_open, set_is_open) = signal(false);

    view! {
        <div class="landing-scroll-animate border border-theme rounded-xl overflow-hidden">
            <button
                class="w-full px-6 py-4 flex items-center justify-between gap-4 text-left hover:bg-theme-secondary/30 transition-colors"
                on:click=move |_| set_is_open.update(|v| *v = !*v)
                aria-expanded=move || is_open.get()
            >
                <span class="font-semibold text-theme-primary">{entry.question.as_str()}</span>
                <div
                    class="flex items-center justify-center w-5 h-5 text-theme-tertiary flex-shrink-0 transition-transform duration-300"
                    class=("rotate-180", move || is_open.get())
                >
                    <Icon glyph=Glyph::ChevronDown class="w-5 h-5" />
                </div>
            </button>
            <div
                class="overflow-hidden transition-all duration-300 max-h-0"
                class:max-h-0=move || !is_open.get()
                class:max-h-96=move || is_open.get()
            >
                <div class="px-6 pb-4 text-theme-secondary leading-relaxed">
                    {entry.answer.as_str()}
                </div>
            </div>
        </div>
    }
}

/// SEO Meta tags component using leptos_meta
#[component]
fn SeoMeta() -> impl IntoView {
    let rating = format!(
        "{:.1}",
        testimonials().iter().map(|t| t.rating as f64).sum::<f64>() / testimonials().len() as f64
    );
    let structured_data = serde_json::json!({
        "@context": "https://schema.org",
        "@type": "SoftwareApplication",
        "name": "Stratus",
        "applicationCategory": "DeveloperApplication",
        "operatingSystem": "Web",
        "description": "Modern platform for building, deploying, and scaling web applications worldwide",
        "url": "https://stratus.dev",
        "author": {"@type": "Organization", "name": "Stratus Labs"},
        "offers": plans().iter().map(|plan| serde_json::json!({
            "@type": "Offer",
            "name": plan.name,
            "price": plan.monthly_price.to_string(),
            "priceCurrency": "USD",
        })).collect::<Vec<_>>(),
        "featureList": features().iter().map(|f| f.title.clone()).collect::<Vec<_>>(),
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": rating,
            "reviewCount": testimonials().len(),
        },
    })
    .to_string();

    view! {
        // Page title
        <Title text="Stratus - Ship Exceptional Web Apps" />

        // Basic meta tags
        <Meta name="description" content="Stratus is the modern platform for building exceptional web applications. Deploy in seconds, scale worldwide, and know how every release performs." />
        <Meta name="keywords" content="web platform, deploy, edge network, preview environments, web applications, hosting, analytics, team workflows" />

        // Open Graph / Facebook
        <Meta property="og:type" content="website" />
        <Meta property="og:url" content="https://stratus.dev/" />
        <Meta property="og:title" content="Stratus - Ship Exceptional Web Apps" />
        <Meta property="og:description" content="Deploy in seconds, scale worldwide, and ship every day with the modern platform for web applications." />
        <Meta property="og:image" content="https://stratus.dev/og-image.png" />

        // Twitter
        <Meta property="twitter:card" content="summary_large_image" />
        <Meta property="twitter:url" content="https://stratus.dev/" />
        <Meta property="twitter:title" content="Stratus - Ship Exceptional Web Apps" />
        <Meta property="twitter:description" content="Deploy in seconds, scale worldwide, and ship every day with the modern platform for web applications." />
        <Meta property="twitter:image" content="https://stratus.dev/og-image.png" />

        // Canonical URL and favicon
        <Link rel="canonical" href="https://stratus.dev/" />
        <Link rel="icon" type_="image/svg+xml" href="/favicon.svg" />

        // JSON-LD Structured Data built from the content catalogs
        <script type="application/ld+json" inner_html=structured_data></script>
    }
}

/// Logo component
#[component]
fn Logo() -> impl IntoView {
    view! {
        <div class="w-10 h-10 bg-gradient-to-br from-accent-primary to-blue-600 rounded-xl
                    flex items-center justify-center shadow-lg">
            <svg class="w-6 h-6 text-white" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true">
                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                      d="M3 15a4 4 0 004 4h9a5 5 0 10-.1-9.999 5.002 5.002 0 10-9.78 2.096A4.001 4.001 0 003 15z" />
            </svg>
        </div>
    }
}

/// Footer component
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="py-12 border-t border-theme bg-theme-primary">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-8 mb-8">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-4">
                            <Logo />
                            <span class="text-xl font-bold text-theme-primary">"Stratus"</span>
                        </div>
                        <p class="text-sm text-theme-secondary max-w-md">
                            "The modern platform for building exceptional web applications. Built with Rust & Leptos for maximum performance."
                        </p>
                    </div>

                    // Product links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Product"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#features" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Features"
                                </a>
                            </li>
                            <li>
                                <a href="#pricing" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Pricing"
                                </a>
                            </li>
                        </ul>
                    </div>

                    // Support links
                    <div>
                        <h4 class="font-semibold text-theme-primary mb-4">"Support"</h4>
                        <ul class="space-y-2">
                            <li>
                                <a href="#faq" class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "FAQ"
                                </a>
                            </li>
                            <li>
                                <a href="https://status.stratus.dev" target="_blank" rel="noopener noreferrer"
                                   class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Status"
                                </a>
                            </li>
                            <li>
                                <a href="mailto:hello@stratus.dev"
                                   class="text-sm text-theme-secondary hover:text-accent-primary transition-colors">
                                    "Contact"
                                </a>
                            </li>
                        </ul>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-theme/50 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-sm text-theme-tertiary">
                        "© 2026 Stratus Labs. Built with ❤️ using Rust & Leptos."
                    </span>
                    <a href="mailto:hello@stratus.dev"
                       class="text-sm text-theme-tertiary hover:text-theme-primary transition-colors">
                        "hello@stratus.dev"
                    </a>
                </div>
            </div>
        </footer>
    }
}

/// CSS for landing page animations, generated from the motion descriptors
#[component]
fn MotionStyles() -> impl IntoView {
    let reveal = Entrance::reveal();
    let css = format!(
        r#"
        /* Button styles */
        .landing-btn-primary {{
            padding: 1rem 2rem;
            font-weight: 600;
            font-size: 1.125rem;
            color: white;
            background-color: #2563eb;
            border-radius: 0.75rem;
            transition: all 0.3s;
            transform: scale(1);
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
            cursor: pointer;
        }}
        .landing-btn-primary:hover {{
            transform: scale(1.05);
            background-color: #1d4ed8;
        }}

        .landing-btn-secondary {{
            padding: 1rem 2rem;
            font-weight: 600;
            font-size: 1.125rem;
            border: 2px solid #9ca3af;
            border-radius: 0.75rem;
            transition: all 0.3s;
            box-shadow: 0 4px 6px -1px rgba(0, 0, 0, 0.1);
            background-color: #f9fafb;
            color: #374151;
        }}
        .dark .landing-btn-secondary {{
            background-color: #1f2937;
            border-color: #6b7280;
            color: #e5e7eb;
        }}
        .landing-btn-secondary:hover {{
            transform: scale(1.05);
            box-shadow: 0 10px 15px -3px rgba(0, 0, 0, 0.1);
        }}

        /* Rise entrance, starting offset supplied per element via --rise-from */
        @keyframes rise-in {{
            from {{
                opacity: 0;
                transform: translateY(var(--rise-from, 20px));
            }}
            to {{
                opacity: 1;
                transform: translateY(0);
            }}
        }}

        /* Scroll-triggered reveals */
        .landing-scroll-animate {{
            opacity: 0;
            transform: translateY({offset}px);
            transition: opacity {duration}ms {curve}, transform {duration}ms {curve};
        }}

        .landing-scroll-animate.visible {{
            opacity: 1;
            transform: translateY(0);
        }}
        "#,
        offset = reveal.offset_y,
        duration = reveal.duration_ms,
        curve = reveal.spring.timing_function(),
    );

    view! { <style inner_html=css></style> }
}

/// Script for scroll-triggered animations using IntersectionObserver
#[component]
fn ScrollAnimationScript() -> impl IntoView {
    view! {
        <script>
            r#"
            (function() {
                function initScrollAnimations() {
                    const observer = new IntersectionObserver((entries) => {
                        entries.forEach(entry => {
                            if (entry.isIntersecting) {
                                entry.target.classList.add('visible');
                            }
                        });
                    }, {
                        threshold: 0.1,
                        rootMargin: '0px 0px -50px 0px'
                    });

                    document.querySelectorAll('.landing-scroll-animate').forEach(el => {
                        observer.observe(el);
                    });
                }

                if (document.readyState === 'loading') {
                    document.addEventListener('DOMContentLoaded', initScrollAnimations);
                } else {
                    initScrollAnimations();
                }
            })();
            "#
        </script>
    }
}
