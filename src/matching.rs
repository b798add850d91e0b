use std::collections::BTreeMap;

use crate::config::{MATCHES_KEY, TOP_MATCH_LIMIT};
use crate::core::errors::AppError;
use crate::core::kv::{KeyValue, KeyValueExt};
use crate::models::models::Profile;
use crate::{session, users};

/// Compatibility score, higher is better, unbounded above. Age closeness
/// is worth up to 10, each shared hobby 5, each shared interest 3.
/// Scoring yourself is forbidden and pinned to -1.
pub fn match_score(me: &Profile, other: &Profile) -> i64 {
    if me.username == other.username {
        return -1;
    }
    let age_gap = i64::from(me.age.abs_diff(other.age));
    let mut score = (10 - age_gap).max(0);

    let shared_hobbies = me
        .hobbies
        .iter()
        .filter(|h| other.hobbies.contains(h))
        .count() as i64;
    let shared_interests = me
        .interests
        .iter()
        .filter(|i| other.interests.contains(i))
        .count() as i64;

    score += shared_hobbies * 5 + shared_interests * 3;
    score
}

#[derive(Clone, Debug)]
pub struct MatchCandidate {
    pub profile: Profile,
    pub score: i64,
}

/// Scan the directory for the logged-in user, keep candidates scoring
/// above zero, and return the best `TOP_MATCH_LIMIT` in descending score
/// order. The sort is stable, so equal scores keep directory order.
pub fn top_matches(store: &dyn KeyValue) -> Result<Vec<MatchCandidate>, AppError> {
    let me_name = session::require_login(store)?;
    let profiles = users::all_profiles(store);
    let me = profiles
        .iter()
        .find(|u| u.username == me_name)
        .cloned()
        .ok_or(AppError::UnknownUser(me_name))?;

    let mut candidates: Vec<MatchCandidate> = profiles
        .into_iter()
        .map(|profile| MatchCandidate {
            score: match_score(&me, &profile),
            profile,
        })
        .filter(|c| c.score > 0)
        .collect();
    candidates.sort_by(|a, b| b.score.cmp(&a.score));
    candidates.truncate(TOP_MATCH_LIMIT);
    Ok(candidates)
}

type MatchLists = BTreeMap<String, Vec<String>>;

/// Bookmark `target` on the logged-in user's match list. Idempotent;
/// nothing is written when the target is already present.
pub fn add_match(store: &dyn KeyValue, target: &str) -> Result<(), AppError> {
    let owner = session::require_login(store)?;

    let mut lists: MatchLists = store.load_or(MATCHES_KEY, MatchLists::new());
    let list = lists.entry(owner).or_default();
    if !list.iter().any(|m| m == target) {
        list.push(target.to_string());
        store.set_json(MATCHES_KEY, &lists)?;
    }
    Ok(())
}

pub fn matches_for(store: &dyn KeyValue, owner: &str) -> Vec<String> {
    store
        .load_or(MATCHES_KEY, MatchLists::new())
        .remove(owner)
        .unwrap_or_default()
}
