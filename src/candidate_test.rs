use super::*;

fn roster() -> Vec<Candidate> {
    vec![
        Candidate::directory("u1", "Jane Doe", Some("jane@co.com".to_owned())),
        Candidate::directory("u2", "Bob Stone", Some("bob@co.com".to_owned())),
        Candidate::directory("u3", "Sam Janeway", None),
    ]
}

// =============================================================
// Construction
// =============================================================

#[test]
fn directory_candidate_has_directory_origin() {
    let c = Candidate::directory("u1", "Jane", None);
    assert_eq!(c.origin, CandidateOrigin::Directory);
    assert!(!c.is_local());
}

#[test]
fn local_candidate_from_name_has_no_email() {
    let c = Candidate::local("  Pat Quinn ");
    assert_eq!(c.display_name, "Pat Quinn");
    assert_eq!(c.email, None);
    assert!(c.is_local());
    assert!(c.id.starts_with(LOCAL_ID_PREFIX));
}

#[test]
fn local_candidate_from_email_keeps_email() {
    let c = Candidate::local("pat@co.com");
    assert_eq!(c.display_name, "pat@co.com");
    assert_eq!(c.email.as_deref(), Some("pat@co.com"));
}

#[test]
fn local_candidates_get_distinct_ids() {
    assert_ne!(Candidate::local("A").id, Candidate::local("A").id);
}

#[test]
fn candidate_deserializes_without_origin_as_directory() {
    let c: Candidate =
        serde_json::from_value(serde_json::json!({ "id": "u9", "display_name": "Kim", "email": null })).unwrap();
    assert_eq!(c.origin, CandidateOrigin::Directory);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_by_name_is_case_insensitive_substring() {
    let list = roster();
    let ids: Vec<_> = filter_by_name(&list, "JANE").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u3"]);
}

#[test]
fn filter_by_name_empty_query_returns_all() {
    let list = roster();
    assert_eq!(filter_by_name(&list, "  ").len(), 3);
}

#[test]
fn filter_by_email_skips_candidates_without_email() {
    let list = roster();
    let ids: Vec<_> = filter_by_email(&list, "").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["u1", "u2"]);
}

#[test]
fn filter_by_email_matches_substring() {
    let list = roster();
    let ids: Vec<_> = filter_by_email(&list, "BOB@").iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["u2"]);
}

#[test]
fn find_by_name_ignores_case_and_whitespace() {
    let list = roster();
    assert_eq!(find_by_name(&list, " jane doe ").map(|c| c.id.as_str()), Some("u1"));
    assert!(find_by_name(&list, "Jane").is_none());
}

// =============================================================
// Merge
// =============================================================

#[test]
fn merge_appends_new_candidate() {
    let mut list = roster();
    assert!(merge(&mut list, Candidate::directory("u4", "Lee", Some("lee@co.com".to_owned()))));
    assert_eq!(list.len(), 4);
    assert_eq!(list[3].id, "u4");
}

#[test]
fn merge_rejects_same_id() {
    let mut list = roster();
    assert!(!merge(&mut list, Candidate::directory("u1", "Someone Else", None)));
    assert_eq!(list.len(), 3);
}

#[test]
fn merge_rejects_same_email_ignoring_case() {
    let mut list = roster();
    assert!(!merge(&mut list, Candidate::local("BOB@co.com")));
    assert_eq!(list.len(), 3);
}

#[test]
fn merge_allows_multiple_candidates_without_email() {
    let mut list = roster();
    assert!(merge(&mut list, Candidate::local("No Email")));
    assert_eq!(list.len(), 4);
}

#[test]
fn exact_lookup_folds_case_like_the_filters() {
    let list = vec![Candidate::directory("u9", "Émile Zola", Some("ÉMILE@co.com".to_owned()))];
    assert_eq!(filter_by_name(&list, "émile zola").len(), 1);
    assert_eq!(find_by_name(&list, "émile zola").map(|c| c.id.as_str()), Some("u9"));
    assert_eq!(filter_by_email(&list, "émile@co.com").len(), 1);
    assert_eq!(find_by_email(&list, "émile@co.com").map(|c| c.id.as_str()), Some("u9"));
}

#[test]
fn find_by_email_ignores_case() {
    let list = roster();
    assert_eq!(find_by_email(&list, "BOB@co.com").map(|c| c.id.as_str()), Some("u2"));
    assert!(find_by_email(&list, "nobody@co.com").is_none());
}
