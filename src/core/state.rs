//! Interaction state for the landing page.
//!
//! Each struct here owns exactly one piece of mutable page state and is the
//! only place that state changes. The types are plain values with no reactive
//! machinery, so the ui layer wraps each one in a signal and mutates it
//! through these methods.

use super::catalog::PricingPlan;

/// Selection state for the feature showcase.
///
/// Exactly one feature is selected at all times. The first entry is selected
/// on load, and an out-of-range request keeps the current selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Showcase {
    count: usize,
    selected: usize,
}

impl Showcase {
    pub fn new(count: usize) -> Self {
        Self { count, selected: 0 }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.count {
            self.selected = index;
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == index
    }
}

/// The two billing cycles a plan can be priced under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BillingCycle {
    #[default]
    Monthly,
    Yearly,
}

impl BillingCycle {
    pub fn as_str(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Yearly => "yearly",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            BillingCycle::Monthly => BillingCycle::Yearly,
            BillingCycle::Yearly => BillingCycle::Monthly,
        }
    }

    /// Unit suffix rendered next to a price under this cycle.
    pub fn unit_label(self) -> &'static str {
        match self {
            BillingCycle::Monthly => "/month",
            BillingCycle::Yearly => "/year",
        }
    }

    pub fn price_of(self, plan: &PricingPlan) -> u32 {
        match self {
            BillingCycle::Monthly => plan.monthly_price,
            BillingCycle::Yearly => plan.yearly_price,
        }
    }

    /// Formatted price and unit label for one plan under this cycle.
    ///
    /// Both strings come from the same cycle value, so a card can never show
    /// a monthly price next to a yearly label.
    pub fn price_line(self, plan: &PricingPlan) -> (String, &'static str) {
        (format!("${}", self.price_of(plan)), self.unit_label())
    }
}

/// Billing-cycle selection for the pricing section.
///
/// Starts on the monthly cycle. Re-selecting the active cycle is a no-op.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct Billing {
    cycle: BillingCycle,
}

impl Billing {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cycle(&self) -> BillingCycle {
        self.cycle
    }

    pub fn set(&mut self, cycle: BillingCycle) {
        self.cycle = cycle;
    }

    pub fn toggle(&mut self) {
        self.cycle = self.cycle.toggled();
    }

    pub fn is_active(&self, cycle: BillingCycle) -> bool {
        self.cycle == cycle
    }
}

/// Position state for the testimonial carousel.
///
/// Stepping wraps around at both ends; every move is a no-op when the
/// carousel is empty.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Carousel {
    count: usize,
    position: usize,
}

impl Carousel {
    pub fn new(count: usize) -> Self {
        Self { count, position: 0 }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_current(&self, index: usize) -> bool {
        self.position == index
    }

    pub fn next(&mut self) {
        if self.count > 0 {
            self.position = (self.position + 1) % self.count;
        }
    }

    pub fn previous(&mut self) {
        if self.count > 0 {
            self.position = (self.position + self.count - 1) % self.count;
        }
    }

    pub fn go_to(&mut self, index: usize) {
        if index < self.count {
            self.position = index;
        }
    }
}
