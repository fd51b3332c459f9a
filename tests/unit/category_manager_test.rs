//! Unit tests for the CategoryManager.

use rstest::rstest;
use vidmark::managers::category_manager::{CategoryManager, CategoryManagerTrait};
use vidmark::types::category::CategoryDeletion;
use vidmark::types::settings::CatalogDefaults;

fn defaults() -> CategoryManager {
    CategoryManager::new(CatalogDefaults::builtin_categories(), "Entertainment")
}

#[test]
fn test_builtin_list_is_kept_in_order() {
    let mgr = defaults();
    assert_eq!(
        mgr.categories(),
        ["All", "Music", "Tech", "Gaming", "Education", "Entertainment"]
    );
    assert_eq!(mgr.fallback(), "Entertainment");
}

#[test]
fn test_sentinel_is_inserted_when_missing() {
    let mgr = CategoryManager::new(vec!["Music".to_string()], "Music");
    assert_eq!(mgr.categories(), ["All", "Music"]);
}

#[test]
fn test_add_is_exact_match_and_trimmed() {
    let mut mgr = defaults();
    assert!(mgr.add_category("music"));
    assert!(!mgr.add_category("Music"));
    assert!(!mgr.add_category("  Music  "));
    assert!(!mgr.add_category("All"));
    assert!(!mgr.add_category("   "));
    assert_eq!(mgr.categories().last().map(String::as_str), Some("music"));
}

#[test]
fn test_remove_keeps_order_of_the_rest() {
    let mut mgr = defaults();
    assert_eq!(
        mgr.remove_category("Tech"),
        CategoryDeletion::Removed { reassigned: 0 }
    );
    assert_eq!(
        mgr.categories(),
        ["All", "Music", "Gaming", "Education", "Entertainment"]
    );
    assert_eq!(mgr.remove_category("Tech"), CategoryDeletion::NotFound);
}

#[rstest]
#[case("All")]
#[case("Entertainment")]
fn test_protected_names_cannot_be_removed(#[case] name: &str) {
    let mut mgr = defaults();
    assert!(mgr.is_protected(name));
    assert_eq!(mgr.remove_category(name), CategoryDeletion::Protected);
    assert!(mgr.contains(name));
}

#[rstest]
#[case(Some("Tech"), "Tech")]
#[case(Some(" Gaming "), "Gaming")]
#[case(Some("All"), "Entertainment")]
#[case(Some("Podcasts"), "Entertainment")]
#[case(Some(""), "Entertainment")]
#[case(None, "Entertainment")]
fn test_resolve(#[case] requested: Option<&str>, #[case] expected: &str) {
    assert_eq!(defaults().resolve(requested), expected);
}

#[test]
fn test_custom_fallback_is_created_and_protected() {
    let mut mgr = CategoryManager::new(CatalogDefaults::builtin_categories(), "Misc");
    assert!(mgr.contains("Misc"));
    assert_eq!(mgr.resolve(Some("Nope")), "Misc");
    assert_eq!(mgr.remove_category("Misc"), CategoryDeletion::Protected);
    // The old default fallback is an ordinary category now.
    assert_eq!(
        mgr.remove_category("Entertainment"),
        CategoryDeletion::Removed { reassigned: 0 }
    );
}

#[test]
fn test_deletion_outcome_serializes_with_status_tag() {
    let json = serde_json::to_value(CategoryDeletion::Removed { reassigned: 2 }).unwrap();
    assert_eq!(json, serde_json::json!({"status": "removed", "reassigned": 2}));
    let json = serde_json::to_value(CategoryDeletion::Protected).unwrap();
    assert_eq!(json, serde_json::json!({"status": "protected"}));
}
