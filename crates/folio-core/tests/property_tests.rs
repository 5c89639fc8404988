//! Property-based tests for validation, scroll throttling and section
//! navigation
//!
//! Uses proptest to check the rules hold for arbitrary inputs, not just the
//! hand-picked examples in the unit tests.

use folio_core::form::is_valid_email;
use folio_core::navigation::{current_section, step_section};
use folio_core::{
    validate_form, Event, Field, FormInput, Layout, MemoryThemeStore, Portfolio, PortfolioConfig,
    SectionId, Viewport,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Short strings mixing letters, spaces and the characters the email rule
/// cares about
fn fragment_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 @.\t]{0,24}").expect("valid regex")
}

fn email_part_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9_+-]{1,12}").expect("valid regex")
}

/// Characters a browser treats as `\s`
fn whitespace_strategy() -> impl Strategy<Value = char> {
    prop_oneof![
        Just(' '),
        Just('\t'),
        Just('\n'),
        Just('\u{A0}'),
        Just('\u{1680}'),
        prop::char::range('\u{2000}', '\u{200A}'),
        Just('\u{2028}'),
        Just('\u{202F}'),
        Just('\u{3000}'),
        Just('\u{FEFF}'),
    ]
}

fn page(scroll_y: f64) -> Layout {
    let offsets: Vec<_> = SectionId::ALL
        .iter()
        .enumerate()
        .map(|(i, &id)| (id, i as f64 * 750.0))
        .collect();
    Layout::stacked(Viewport::default(), scroll_y, &offsets)
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// No errors exactly when all three field rules hold
    #[test]
    fn validation_matches_field_rules(
        name in fragment_strategy(),
        email in fragment_strategy(),
        message in fragment_strategy(),
    ) {
        let errors = validate_form(&FormInput::new(name.clone(), email.clone(), message.clone()));
        prop_assert_eq!(errors.contains_key(&Field::Name), name.trim().chars().count() < 2);
        prop_assert_eq!(errors.contains_key(&Field::Email), !is_valid_email(&email));
        prop_assert_eq!(errors.contains_key(&Field::Message), message.trim().chars().count() < 10);
    }

    /// local@domain.tld shapes are always accepted
    #[test]
    fn well_formed_emails_pass(
        local in email_part_strategy(),
        domain in email_part_strategy(),
        tld in email_part_strategy(),
    ) {
        let email = format!("{local}@{domain}.{tld}");
        prop_assert!(is_valid_email(&email));
    }

    /// Whitespace anywhere in an address is rejected, Unicode spaces and
    /// the byte order mark included
    #[test]
    fn whitespace_breaks_emails(
        local in email_part_strategy(),
        domain in email_part_strategy(),
        split in 0usize..12,
        space in whitespace_strategy(),
    ) {
        let mut email = format!("{local}@{domain}.com");
        let at = split.min(email.len());
        email.insert(at, space);
        prop_assert!(!is_valid_email(&email));
    }

    /// Any burst of scroll events inside one window runs the handler once
    #[test]
    fn scroll_burst_yields_single_tick(offsets in prop::collection::vec(0u64..16, 1..40)) {
        let mut portfolio =
            Portfolio::new(PortfolioConfig::default(), MemoryThemeStore::new(), 1).unwrap();
        let layout = page(400.0);
        let start = 10_000;
        let mut sorted = offsets.clone();
        sorted.sort_unstable();
        portfolio.handle(start, &layout, Event::Scroll);
        for offset in sorted {
            portfolio.handle(start + offset, &layout, Event::Scroll);
        }
        portfolio.advance(start + 15, &layout);
        prop_assert_eq!(portfolio.scroll_ticks(), 0);
        portfolio.advance(start + 16, &layout);
        prop_assert_eq!(portfolio.scroll_ticks(), 1);
    }

    /// Stepping never leaves the list and never returns the current index
    #[test]
    fn stepping_stays_in_bounds(index in 0usize..8, direction in prop_oneof![Just(1), Just(-1)]) {
        let order = SectionId::ALL;
        match step_section(&order, order[index], direction) {
            Some(next) => {
                prop_assert!(next < order.len());
                prop_assert_ne!(next, index);
                prop_assert_eq!(next as i64, index as i64 + direction as i64);
            }
            None => prop_assert!(
                (index == 0 && direction == -1) || (index == order.len() - 1 && direction == 1)
            ),
        }
    }

    /// The current section is the last one whose lead line was crossed
    #[test]
    fn current_section_is_monotonic_in_scroll(a in 0.0f64..6000.0, b in 0.0f64..6000.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        let lower = current_section(&page(low), 200.0);
        let higher = current_section(&page(high), 200.0);
        prop_assert!(lower <= higher);
    }
}
