//! Property-based tests for the filter engine.
//!
//! The visible list is always an order-preserving subsequence of the input, and
//! every entry in it satisfies both predicates.

use chrono::Utc;
use proptest::prelude::*;
use vidmark::services::filter_engine::visible;
use vidmark::types::bookmark::VideoBookmark;

const CATEGORIES: &[&str] = &["Music", "Tech", "Gaming", "Entertainment"];

fn arb_bookmark() -> impl Strategy<Value = VideoBookmark> {
    (
        "[a-zA-Z ]{1,20}",
        proptest::option::of("[a-zA-Z ]{1,20}"),
        proptest::option::of("[a-zA-Z ]{1,30}"),
        0..CATEGORIES.len(),
    )
        .prop_map(|(title, channel, description, cat)| VideoBookmark {
            id: String::new(),
            title,
            url: "https://www.youtube.com/watch?v=dQw4w9WgXcQ".to_string(),
            channel,
            description,
            category: CATEGORIES[cat].to_string(),
            thumbnail: None,
            duration: None,
            date_added: Utc::now(),
            rating: 0,
        })
}

fn arb_catalog() -> impl Strategy<Value = Vec<VideoBookmark>> {
    proptest::collection::vec(arb_bookmark(), 0..20).prop_map(|mut items| {
        for (i, b) in items.iter_mut().enumerate() {
            b.id = i.to_string();
        }
        items
    })
}

fn arb_selection() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("All".to_string()),
        (0..CATEGORIES.len()).prop_map(|i| CATEGORIES[i].to_string()),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn visible_is_ordered_subsequence(
        items in arb_catalog(),
        category in arb_selection(),
        term in "[a-zA-Z]{0,3}",
    ) {
        let result = visible(&items, &category, &term);
        let positions: Vec<usize> = result
            .iter()
            .map(|b| b.id.parse::<usize>().unwrap())
            .collect();
        prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(result.len() <= items.len());
    }

    #[test]
    fn every_visible_entry_satisfies_both_predicates(
        items in arb_catalog(),
        category in arb_selection(),
        term in "[a-zA-Z]{0,3}",
    ) {
        let needle = term.to_lowercase();
        for b in visible(&items, &category, &term) {
            prop_assert!(category == "All" || b.category == category);
            let hit = b.title.to_lowercase().contains(&needle)
                || b.channel.as_deref().is_some_and(|c| c.to_lowercase().contains(&needle))
                || b.description.as_deref().is_some_and(|d| d.to_lowercase().contains(&needle));
            prop_assert!(hit);
        }
    }

    #[test]
    fn all_with_empty_term_is_identity(items in arb_catalog()) {
        let result = visible(&items, "All", "");
        prop_assert_eq!(result.len(), items.len());
    }

    #[test]
    fn search_is_case_insensitive(items in arb_catalog(), term in "[a-zA-Z]{1,3}") {
        let lower = visible(&items, "All", &term.to_lowercase()).len();
        let upper = visible(&items, "All", &term.to_uppercase()).len();
        prop_assert_eq!(lower, upper);
    }
}
