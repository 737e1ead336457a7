//! Static content catalogs driving the landing page sections.
//!
//! Every record here is immutable, built once at first access, and shared
//! read-only for the life of the process. The page never mutates a catalog;
//! all interaction state lives in `core::state`.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Icon vocabulary for catalog entries and page chrome.
///
/// Each variant is resolved to inline SVG path data by the ui layer, so the
/// icon choice is fixed at catalog-definition time and never dispatched by
/// name at runtime.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum Glyph {
    Bolt,
    Globe,
    Rocket,
    Users,
    Chart,
    Check,
    ChevronDown,
    ChevronLeft,
    ChevronRight,
    Star,
    Sun,
    Moon,
    Monitor,
    ArrowRight,
}

/// One entry in the feature showcase.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Feature {
    pub id: String,
    pub title: String,
    /// Short pitch shown on the selector row.
    pub summary: String,
    pub glyph: Glyph,
    /// Expanded copy shown in the detail panel, in display order.
    pub detail_lines: Vec<String>,
}

impl Feature {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        summary: impl Into<String>,
        glyph: Glyph,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            summary: summary.into(),
            glyph,
            detail_lines: Vec::new(),
        }
    }

    pub fn detail(mut self, line: impl Into<String>) -> Self {
        self.detail_lines.push(line.into());
        self
    }
}

/// One testimonial card in the carousel.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub author: String,
    pub role: String,
    pub quote: String,
    /// Filled stars, 0 through 5.
    pub rating: u8,
}

impl Testimonial {
    pub fn new(
        id: impl Into<String>,
        author: impl Into<String>,
        role: impl Into<String>,
        quote: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            role: role.into(),
            quote: quote.into(),
            rating: 5,
        }
    }

    pub fn stars(mut self, rating: u8) -> Self {
        self.rating = rating.min(5);
        self
    }
}

/// One pricing tier.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct PricingPlan {
    pub id: String,
    pub name: String,
    pub blurb: String,
    /// Whole-dollar price per month on the monthly cycle.
    pub monthly_price: u32,
    /// Whole-dollar price per year on the yearly cycle.
    pub yearly_price: u32,
    pub features: Vec<String>,
    /// Marks the visually highlighted card.
    pub flagship: bool,
}

impl PricingPlan {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        blurb: impl Into<String>,
        monthly_price: u32,
        yearly_price: u32,
    ) -> Self {
        // Yearly must never cost more than twelve months billed monthly.
        debug_assert!(yearly_price <= 12 * monthly_price);
        Self {
            id: id.into(),
            name: name.into(),
            blurb: blurb.into(),
            monthly_price,
            yearly_price,
            features: Vec::new(),
            flagship: false,
        }
    }

    pub fn feature(mut self, line: impl Into<String>) -> Self {
        self.features.push(line.into());
        self
    }

    pub fn flagship(mut self) -> Self {
        self.flagship = true;
        self
    }
}

/// One question/answer pair in the FAQ accordion.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct FaqEntry {
    pub id: String,
    pub question: String,
    pub answer: String,
}

impl FaqEntry {
    pub fn new(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            question: question.into(),
            answer: answer.into(),
        }
    }
}

static FEATURES: LazyLock<Vec<Feature>> = LazyLock::new(|| {
    vec![
        Feature::new(
            "lightning-fast",
            "Lightning Fast",
            "Blazing fast performance with a modern tech stack.",
            Glyph::Bolt,
        )
        .detail("Edge-rendered pages served from 30+ regions")
        .detail("Cold starts under 50 ms on every deploy")
        .detail("Automatic asset compression and caching"),
        Feature::new(
            "global-reach",
            "Global Reach",
            "Scalable architecture for worldwide deployment.",
            Glyph::Globe,
        )
        .detail("Deploy to every region with a single command")
        .detail("Traffic steering routes users to the nearest replica")
        .detail("Zero-downtime rollouts and instant rollbacks"),
        Feature::new(
            "instant-setup",
            "Instant Setup",
            "Zero configuration, ready to use out of the box.",
            Glyph::Rocket,
        )
        .detail("One-line install with sensible defaults")
        .detail("Preview environments for every branch")
        .detail("Framework auto-detection, no build scripts to write"),
        Feature::new(
            "team-workflows",
            "Team Workflows",
            "Review, approve, and ship together.",
            Glyph::Users,
        )
        .detail("Shared preview links with inline comments")
        .detail("Role-based access for projects and environments")
        .detail("An audit trail for every deploy"),
        Feature::new(
            "built-in-analytics",
            "Built-in Analytics",
            "Know how every release performs.",
            Glyph::Chart,
        )
        .detail("Real-user performance metrics out of the box")
        .detail("Privacy-friendly and cookie-free by default")
        .detail("Alerts when a release regresses"),
    ]
});

static TESTIMONIALS: LazyLock<Vec<Testimonial>> = LazyLock::new(|| {
    vec![
        Testimonial::new(
            "maya-lindqvist",
            "Maya Lindqvist",
            "CTO, Fathom Labs",
            "We moved three products to Stratus in a week. Deploys went from twenty minutes to under one.",
        ),
        Testimonial::new(
            "devon-park",
            "Devon Park",
            "Staff Engineer, Relay",
            "The preview environments alone were worth it. Our review cycle is half what it used to be.",
        ),
        Testimonial::new(
            "ines-carvalho",
            "Inés Carvalho",
            "Founder, Hektar",
            "I stopped thinking about infrastructure entirely. It just ships.",
        )
        .stars(4),
        Testimonial::new(
            "tomas-herrera",
            "Tomás Herrera",
            "Platform Lead, Brightline",
            "A global rollout used to be a quarter-long project. Now it is the default.",
        ),
    ]
});

static PLANS: LazyLock<Vec<PricingPlan>> = LazyLock::new(|| {
    vec![
        PricingPlan::new("hobby", "Hobby", "For side projects and experiments", 0, 0)
            .feature("3 projects")
            .feature("Global edge network")
            .feature("Preview deployments")
            .feature("Community support"),
        PricingPlan::new("pro", "Pro", "For professionals and small teams", 29, 299)
            .feature("Unlimited projects")
            .feature("Team workflows")
            .feature("Built-in analytics")
            .feature("Email support")
            .flagship(),
        PricingPlan::new("scale", "Scale", "For organizations that need more", 79, 799)
            .feature("Everything in Pro")
            .feature("SSO & SAML")
            .feature("Audit logs")
            .feature("Priority support"),
    ]
});

static FAQS: LazyLock<Vec<FaqEntry>> = LazyLock::new(|| {
    vec![
        FaqEntry::new(
            "what-is-stratus",
            "What is Stratus?",
            "Stratus is a platform for building and shipping web applications. You connect a \
             repository, and we handle builds, deploys, and global delivery.",
        ),
        FaqEntry::new(
            "free-tier",
            "Is there a free tier?",
            "Yes. The Hobby plan is free forever and includes three projects on the full edge \
             network. Paid plans add team features and higher limits.",
        ),
        FaqEntry::new(
            "frameworks",
            "Which frameworks are supported?",
            "Anything that builds to static assets or a server bundle works out of the box. \
             Popular frameworks are auto-detected; everything else can declare a build command.",
        ),
        FaqEntry::new(
            "billing",
            "How does billing work?",
            "Plans are billed per workspace, monthly or yearly. Yearly billing is discounted, \
             and you can switch cycles at any time from the next invoice forward.",
        ),
        FaqEntry::new(
            "migrate",
            "Can I migrate an existing app?",
            "Usually in an afternoon. Point Stratus at your repository, keep your domain, and \
             cut traffic over when you are ready.",
        ),
        FaqEntry::new(
            "cancel",
            "Can I cancel anytime?",
            "Yes. Downgrades take effect at the end of the current billing period, and your \
             projects keep running on the Hobby plan.",
        ),
    ]
});

/// Feature showcase entries, in display order.
pub fn features() -> &'static [Feature] {
    FEATURES.as_slice()
}

/// Testimonial carousel entries, in display order.
pub fn testimonials() -> &'static [Testimonial] {
    TESTIMONIALS.as_slice()
}

/// Pricing tiers, cheapest first.
pub fn plans() -> &'static [PricingPlan] {
    PLANS.as_slice()
}

/// FAQ accordion entries, in display order.
pub fn faqs() -> &'static [FaqEntry] {
    FAQS.as_slice()
}
