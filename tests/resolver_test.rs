// tests/resolver_test.rs
//
// Resolver properties over remote tag listings: total filtering before
// comparison, numeric-priority ordering, and failure on empty candidates.

use tagsync::domain::{tag_name, ReleaseTag};
use tagsync::resolver::resolve_latest;
use tagsync::TagSyncError;

fn refs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_maximum_is_greater_or_equal_to_every_candidate() {
    let listings: Vec<Vec<String>> = vec![
        refs(&["v0.1.0", "v0.1.1", "v0.2.0"]),
        refs(&["v3.0.0", "v2.9.9", "v3.0.1", "v1.0.0"]),
        refs(&["refs/tags/v0.39.0", "refs/tags/v0.40.3", "refs/tags/v0.40.2"]),
        refs(&["1.0.0", "10.0.0", "2.0.0"]),
    ];

    for tags in listings {
        let resolved = resolve_latest(&tags).unwrap();
        for raw in &tags {
            if let Some(candidate) = ReleaseTag::parse(tag_name(raw)) {
                assert!(
                    resolved.version >= candidate.version,
                    "{} resolved but {} is greater",
                    resolved.name,
                    candidate.name
                );
            }
        }
    }
}

#[test]
fn test_malformed_entries_never_affect_the_result() {
    let clean = refs(&["v1.0.0", "v1.4.2", "v1.2.0"]);
    let noisy = refs(&[
        "v1.0.0",
        "nightly",
        "v1.4.2",
        "v99.0.0-beta.1",
        "v1.2.0",
        "v1.2",
        "v1.2.3.4",
        "refs/tags/v1.4.2^{}",
    ]);

    assert_eq!(
        resolve_latest(&clean).unwrap().name,
        resolve_latest(&noisy).unwrap().name
    );
}

#[test]
fn test_empty_listing_signals_no_matching_version() {
    assert!(matches!(
        resolve_latest(&[]),
        Err(TagSyncError::NoMatchingVersion)
    ));
}

#[test]
fn test_all_malformed_listing_signals_no_matching_version() {
    let tags = refs(&["v1.2.3-rc1", "nightly"]);
    assert!(matches!(
        resolve_latest(&tags),
        Err(TagSyncError::NoMatchingVersion)
    ));
}

#[test]
fn test_ordering_is_numeric_not_lexicographic() {
    let tags = refs(&["v2.0.0", "v10.0.0", "v9.9.9"]);
    assert_eq!(resolve_latest(&tags).unwrap().name, "v10.0.0");

    let tags = refs(&["v0.9.0", "v0.10.0"]);
    assert_eq!(resolve_latest(&tags).unwrap().name, "v0.10.0");

    let tags = refs(&["v1.1.9", "v1.1.10"]);
    assert_eq!(resolve_latest(&tags).unwrap().name, "v1.1.10");
}

#[test]
fn test_leading_zero_and_overflow_components_are_filtered() {
    // "v9.02.0" has a leading zero, "v18446744073709551616.0.0" overflows
    // u64; both must lose to the plain v1.0.0.
    let tags = refs(&["v9.02.0", "v18446744073709551616.0.0", "v1.0.0"]);
    assert_eq!(resolve_latest(&tags).unwrap().name, "v1.0.0");
}

#[test]
fn test_result_is_the_original_tag_text() {
    let tags = refs(&["refs/tags/v0.40.3"]);
    let resolved = resolve_latest(&tags).unwrap();
    // The tag name, not the full ref path, and unmodified
    assert_eq!(resolved.name, "v0.40.3");
}
