use kindred::core::errors::AppError;
use kindred::core::kv::MemoryStore;
use kindred::matching::{self, match_score};
use kindred::models::models::Profile;
use kindred::{session, users};

const PASSWORD: &str = "123";

fn to_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn profile(username: &str, age: u32, hobbies: &[&str], interests: &[&str]) -> Profile {
    Profile::new(username, PASSWORD, age, "female", to_vec(hobbies), to_vec(interests)).unwrap()
}

#[test]
fn scoring_yourself_is_pinned_to_minus_one() {
    let me = profile("alice", 24, &["hiking"], &["art"]);
    assert_eq!(match_score(&me, &me), -1);

    // Same username wins over everything else, even a perfect overlap.
    let differently_aged = profile("alice", 90, &[], &[]);
    assert_eq!(match_score(&me, &differently_aged), -1);
}

#[test]
fn same_age_and_no_overlap_scores_ten() {
    let me = profile("alice", 24, &["hiking"], &["art"]);
    let other = profile("bob", 24, &["chess"], &["movies"]);
    assert_eq!(match_score(&me, &other), 10);
}

#[test]
fn alice_and_bob_score_seven() {
    let alice = profile("alice", 24, &["hiking", "yoga"], &["art", "coffee"]);
    let bob = profile("bob", 27, &["games", "basketball"], &["tech", "movies"]);
    assert_eq!(match_score(&alice, &bob), 7);
    assert_eq!(match_score(&bob, &alice), 7);
}

#[test]
fn a_renamed_clone_scores_twenty_six() {
    let alice = profile("alice", 24, &["hiking", "yoga"], &["art", "coffee"]);
    let clone = profile("alice2", 24, &["hiking", "yoga"], &["art", "coffee"]);
    // 10 for the age + 2 hobbies * 5 + 2 interests * 3.
    assert_eq!(match_score(&alice, &clone), 26);
}

#[test]
fn age_gap_contribution_never_goes_negative() {
    let me = profile("alice", 20, &[], &["art"]);
    let far = profile("zoe", 45, &[], &["art"]);
    assert_eq!(match_score(&me, &far), 3);
}

#[test]
fn top_matches_filters_caps_and_keeps_tie_order() {
    let store = MemoryStore::new();
    let register = |p: &Profile| {
        users::register(
            &store,
            &p.username,
            &p.password,
            p.age,
            &p.gender,
            p.hobbies.clone(),
            p.interests.clone(),
        )
        .unwrap()
    };

    register(&profile("me", 30, &["a", "b"], &["x"]));
    register(&profile("p1", 30, &[], &[])); // 10
    register(&profile("p2", 30, &["a"], &[])); // 15
    register(&profile("p3", 30, &["b"], &[])); // 15, ties with p2
    register(&profile("p4", 45, &[], &[])); // 0, filtered out
    register(&profile("p5", 30, &["a", "b"], &["x"])); // 23
    register(&profile("p6", 29, &[], &[])); // 9, cut by the limit
    register(&profile("p7", 30, &[], &["x"])); // 13

    session::login(&store, "me", PASSWORD).unwrap();
    let candidates = matching::top_matches(&store).unwrap();

    let names: Vec<&str> = candidates.iter().map(|c| c.profile.username.as_str()).collect();
    let scores: Vec<i64> = candidates.iter().map(|c| c.score).collect();
    assert_eq!(names, vec!["p5", "p2", "p3", "p7", "p1"]);
    assert_eq!(scores, vec![23, 15, 15, 13, 10]);
}

#[test]
fn top_matches_requires_login() {
    let store = MemoryStore::new();
    assert!(matches!(
        matching::top_matches(&store),
        Err(AppError::NotLoggedIn)
    ));
}
