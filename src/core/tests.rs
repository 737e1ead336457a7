#[cfg(test)]
mod tests {
    use crate::core::{
        Billing, BillingCycle, Carousel, Entrance, Feature, Glyph, PricingPlan, Showcase, Spring,
        Stagger, Testimonial, faqs, features, plans, testimonials,
    };
    use std::collections::HashSet;

    #[test]
    fn test_showcase_starts_on_first_feature() {
        let showcase = Showcase::new(5);

        assert_eq!(showcase.selected(), 0);
        assert!(showcase.is_selected(0));
        assert!(!showcase.is_selected(1));
    }

    #[test]
    fn test_showcase_select() {
        let mut showcase = Showcase::new(5);

        showcase.select(2);
        assert_eq!(showcase.selected(), 2);

        showcase.select(4);
        assert_eq!(showcase.selected(), 4);
    }

    #[test]
    fn test_showcase_reselect_is_noop() {
        let mut showcase = Showcase::new(5);
        showcase.select(2);

        let before = showcase;
        showcase.select(2);

        assert_eq!(showcase, before);
    }

    #[test]
    fn test_showcase_select_out_of_range_keeps_selection() {
        let mut showcase = Showcase::new(3);
        showcase.select(1);

        // One past the end and far past the end
        showcase.select(3);
        assert_eq!(showcase.selected(), 1);

        showcase.select(99);
        assert_eq!(showcase.selected(), 1);
    }

    #[test]
    fn test_showcase_invalid_selection_keeps_detail_panel() {
        // Three features, user picks the last, then a stale index arrives
        let mut showcase = Showcase::new(3);

        showcase.select(2);
        assert_eq!(showcase.selected(), 2);

        showcase.select(5);
        assert_eq!(showcase.selected(), 2);
    }

    #[test]
    fn test_showcase_with_no_features() {
        let mut showcase = Showcase::new(0);

        showcase.select(0);
        assert_eq!(showcase.selected(), 0);
    }

    #[test]
    fn test_billing_starts_monthly() {
        let billing = Billing::new();

        assert_eq!(billing.cycle(), BillingCycle::Monthly);
        assert!(billing.is_active(BillingCycle::Monthly));
        assert!(!billing.is_active(BillingCycle::Yearly));
    }

    #[test]
    fn test_billing_set_and_toggle() {
        let mut billing = Billing::new();

        billing.set(BillingCycle::Yearly);
        assert_eq!(billing.cycle(), BillingCycle::Yearly);

        billing.toggle();
        assert_eq!(billing.cycle(), BillingCycle::Monthly);

        billing.toggle();
        assert_eq!(billing.cycle(), BillingCycle::Yearly);
    }

    #[test]
    fn test_billing_reselect_active_cycle_is_noop() {
        let mut billing = Billing::new();

        billing.set(BillingCycle::Monthly);
        assert_eq!(billing, Billing::new());
    }

    #[test]
    fn test_billing_cycle_toggled_alternates() {
        assert_eq!(BillingCycle::Monthly.toggled(), BillingCycle::Yearly);
        assert_eq!(BillingCycle::Yearly.toggled(), BillingCycle::Monthly);
    }

    #[test]
    fn test_billing_cycle_labels() {
        assert_eq!(BillingCycle::Monthly.as_str(), "monthly");
        assert_eq!(BillingCycle::Yearly.as_str(), "yearly");
        assert_eq!(BillingCycle::Monthly.unit_label(), "/month");
        assert_eq!(BillingCycle::Yearly.unit_label(), "/year");
    }

    #[test]
    fn test_price_follows_billing_cycle() {
        let plan = PricingPlan::new("pro", "Pro", "For teams", 29, 299);

        assert_eq!(BillingCycle::Monthly.price_of(&plan), 29);
        assert_eq!(BillingCycle::Yearly.price_of(&plan), 299);

        // Price and unit label always come from the same cycle
        assert_eq!(
            BillingCycle::Monthly.price_line(&plan),
            ("$29".to_string(), "/month")
        );
        assert_eq!(
            BillingCycle::Yearly.price_line(&plan),
            ("$299".to_string(), "/year")
        );
    }

    #[test]
    fn test_price_line_for_free_plan() {
        let plan = PricingPlan::new("hobby", "Hobby", "For side projects", 0, 0);

        assert_eq!(
            BillingCycle::Monthly.price_line(&plan),
            ("$0".to_string(), "/month")
        );
        assert_eq!(
            BillingCycle::Yearly.price_line(&plan),
            ("$0".to_string(), "/year")
        );
    }

    #[test]
    fn test_carousel_starts_at_zero() {
        let carousel = Carousel::new(4);

        assert_eq!(carousel.position(), 0);
        assert!(carousel.is_current(0));
    }

    #[test]
    fn test_carousel_next_wraps_to_start() {
        let mut carousel = Carousel::new(3);

        carousel.next();
        carousel.next();
        assert_eq!(carousel.position(), 2);

        carousel.next();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn test_carousel_previous_wraps_to_end() {
        let mut carousel = Carousel::new(3);

        carousel.previous();
        assert_eq!(carousel.position(), 2);

        carousel.previous();
        assert_eq!(carousel.position(), 1);
    }

    #[test]
    fn test_carousel_previous_inverts_next_from_every_position() {
        for start in 0..4 {
            let mut carousel = Carousel::new(4);
            carousel.go_to(start);

            carousel.next();
            carousel.previous();
            assert_eq!(carousel.position(), start);
        }
    }

    #[test]
    fn test_carousel_go_to() {
        let mut carousel = Carousel::new(4);

        carousel.go_to(2);
        assert_eq!(carousel.position(), 2);

        // Out of range keeps the current position
        carousel.go_to(4);
        assert_eq!(carousel.position(), 2);

        carousel.go_to(99);
        assert_eq!(carousel.position(), 2);
    }

    #[test]
    fn test_carousel_with_single_entry() {
        let mut carousel = Carousel::new(1);

        carousel.next();
        assert_eq!(carousel.position(), 0);

        carousel.previous();
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn test_carousel_with_no_entries() {
        let mut carousel = Carousel::new(0);

        carousel.next();
        carousel.previous();
        carousel.go_to(0);
        assert_eq!(carousel.position(), 0);
    }

    #[test]
    fn test_feature_builder() {
        let feature = Feature::new("speed", "Speed", "Fast by default.", Glyph::Bolt)
            .detail("First line")
            .detail("Second line");

        assert_eq!(feature.id, "speed");
        assert_eq!(feature.title, "Speed");
        assert_eq!(feature.glyph, Glyph::Bolt);
        assert_eq!(feature.detail_lines, vec!["First line", "Second line"]);
    }

    #[test]
    fn test_testimonial_rating_clamped() {
        let default_rating = Testimonial::new("a", "A", "Role", "Quote");
        assert_eq!(default_rating.rating, 5);

        let clamped = Testimonial::new("b", "B", "Role", "Quote").stars(9);
        assert_eq!(clamped.rating, 5);

        let zero = Testimonial::new("c", "C", "Role", "Quote").stars(0);
        assert_eq!(zero.rating, 0);
    }

    #[test]
    fn test_pricing_plan_builder() {
        let plan = PricingPlan::new("scale", "Scale", "For orgs", 79, 799)
            .feature("Audit logs")
            .feature("Priority support")
            .flagship();

        assert_eq!(plan.features, vec!["Audit logs", "Priority support"]);
        assert!(plan.flagship);
        assert_eq!(plan.monthly_price, 79);
        assert_eq!(plan.yearly_price, 799);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let feature_ids: HashSet<_> = features().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(feature_ids.len(), features().len());

        let testimonial_ids: HashSet<_> = testimonials().iter().map(|t| t.id.as_str()).collect();
        assert_eq!(testimonial_ids.len(), testimonials().len());

        let plan_ids: HashSet<_> = plans().iter().map(|p| p.id.as_str()).collect();
        assert_eq!(plan_ids.len(), plans().len());

        let faq_ids: HashSet<_> = faqs().iter().map(|f| f.id.as_str()).collect();
        assert_eq!(faq_ids.len(), faqs().len());
    }

    #[test]
    fn test_catalog_sections_are_populated() {
        assert!(features().len() >= 3);
        assert!(testimonials().len() >= 2);
        assert_eq!(plans().len(), 3);
        assert!(faqs().len() >= 4);

        for feature in features() {
            assert!(
                !feature.detail_lines.is_empty(),
                "{} has no details",
                feature.id
            );
        }
        for faq in faqs() {
            assert!(!faq.answer.is_empty(), "{} has no answer", faq.id);
        }
    }

    #[test]
    fn test_catalog_yearly_price_never_exceeds_twelve_monthly() {
        for plan in plans() {
            assert!(
                plan.yearly_price <= 12 * plan.monthly_price,
                "{} yearly cycle saves nothing",
                plan.id
            );
        }
    }

    #[test]
    fn test_catalog_has_exactly_one_flagship_plan() {
        let flagships = plans().iter().filter(|p| p.flagship).count();
        assert_eq!(flagships, 1);
    }

    #[test]
    fn test_catalog_ratings_in_range() {
        for testimonial in testimonials() {
            assert!(testimonial.rating <= 5, "{} over-rated", testimonial.id);
        }
    }

    #[test]
    fn test_entrance_rise_defaults() {
        let entrance = Entrance::rise();

        assert_eq!(entrance.offset_y, 20.0);
        assert_eq!(entrance.duration_ms, 600);
        assert_eq!(entrance.delay_ms, 0);
    }

    #[test]
    fn test_entrance_after_only_changes_delay() {
        let delayed = Entrance::rise().after(200);

        assert_eq!(delayed.delay_ms, 200);
        assert_eq!(delayed.offset_y, Entrance::rise().offset_y);
        assert_eq!(delayed.duration_ms, Entrance::rise().duration_ms);
    }

    #[test]
    fn test_entrance_style_renders_descriptor() {
        let style = Entrance::rise().after(300).style();

        assert!(style.contains("--rise-from: 20px"));
        assert!(style.contains("opacity: 0"));
        assert!(style.contains("rise-in 600ms"));
        assert!(style.contains("300ms forwards"));
    }

    #[test]
    fn test_entrance_builders_are_deterministic() {
        assert_eq!(Entrance::rise(), Entrance::rise());
        assert_eq!(Entrance::reveal(), Entrance::reveal());
        assert_eq!(Entrance::rise().style(), Entrance::rise().style());
    }

    #[test]
    fn test_stagger_delays_step_evenly() {
        let stagger = Stagger::cascade();

        assert_eq!(stagger.delay_for(0), 0);
        assert_eq!(stagger.delay_for(1), 100);
        assert_eq!(stagger.delay_for(3), 300);
        assert_eq!(stagger.entrance_for(2).delay_ms, 200);
    }

    #[test]
    fn test_spring_maps_to_timing_curve() {
        // The snappy spring is underdamped and gets the overshooting curve
        let snappy = Spring::snappy();
        assert!(snappy.damping_ratio() < 1.0);
        assert_eq!(snappy.timing_function(), "cubic-bezier(0.34, 1.56, 0.64, 1)");

        // The smooth spring settles without overshoot
        let smooth = Spring::smooth();
        assert!(smooth.damping_ratio() >= 1.0);
        assert_eq!(smooth.timing_function(), "cubic-bezier(0.22, 0.61, 0.36, 1)");
    }
}
