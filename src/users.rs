use crate::config::USERS_KEY;
use crate::core::errors::AppError;
use crate::core::helpers::split_list;
use crate::core::kv::{KeyValue, KeyValueExt};
use crate::models::models::Profile;

pub fn all_profiles(store: &dyn KeyValue) -> Vec<Profile> {
    store.load_or(USERS_KEY, Vec::new())
}

pub fn find_profile(store: &dyn KeyValue, username: &str) -> Option<Profile> {
    all_profiles(store)
        .into_iter()
        .find(|u| u.username == username)
}

/// Exact match on both fields; the directory stores passwords verbatim.
pub fn find_by_credentials(
    store: &dyn KeyValue,
    username: &str,
    password: &str,
) -> Option<Profile> {
    all_profiles(store)
        .into_iter()
        .find(|u| u.username == username && u.password == password)
}

pub fn register(
    store: &dyn KeyValue,
    username: &str,
    password: &str,
    age: u32,
    gender: &str,
    hobbies: Vec<String>,
    interests: Vec<String>,
) -> Result<Profile, AppError> {
    let profile = Profile::new(username, password, age, gender, hobbies, interests)?;

    let mut users = all_profiles(store);
    if users.iter().any(|u| u.username == profile.username) {
        return Err(AppError::UsernameTaken(profile.username));
    }
    users.push(profile.clone());
    store.set_json(USERS_KEY, &users)?;
    Ok(profile)
}

/// Catalogue filter. Absent (or blank) criteria match everything;
/// hobby/interest are case-insensitive substring matches against any
/// list entry, gender is an exact match.
#[derive(Clone, Debug, Default)]
pub struct ProfileFilter {
    pub min_age: Option<u32>,
    pub max_age: Option<u32>,
    pub gender: Option<String>,
    pub hobby: Option<String>,
    pub interest: Option<String>,
}

impl ProfileFilter {
    pub fn matches(&self, profile: &Profile) -> bool {
        if self.min_age.is_some_and(|min| profile.age < min) {
            return false;
        }
        if self.max_age.is_some_and(|max| profile.age > max) {
            return false;
        }
        if let Some(gender) = active(&self.gender) {
            if profile.gender != gender {
                return false;
            }
        }
        if let Some(hobby) = active(&self.hobby) {
            if !contains_ci(&profile.hobbies, hobby) {
                return false;
            }
        }
        if let Some(interest) = active(&self.interest) {
            if !contains_ci(&profile.interests, interest) {
                return false;
            }
        }
        true
    }
}

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

fn contains_ci(entries: &[String], needle: &str) -> bool {
    let needle = needle.to_lowercase();
    entries.iter().any(|e| e.to_lowercase().contains(&needle))
}

pub fn filter_profiles(store: &dyn KeyValue, filter: &ProfileFilter) -> Vec<Profile> {
    all_profiles(store)
        .into_iter()
        .filter(|u| filter.matches(u))
        .collect()
}

/// Insert the canonical demo profiles, skipping any username already
/// taken. Returns how many were added.
pub fn seed_sample_profiles(store: &dyn KeyValue) -> Result<usize, AppError> {
    let samples = [
        ("alice", 24, "female", "hiking,yoga", "art,coffee"),
        ("bob", 27, "male", "games,basketball", "tech,movies"),
        ("coco", 22, "female", "cooking,reading", "travel,music"),
        ("dylan", 30, "male", "running,chess", "books,startups"),
        ("emma", 26, "non-binary", "photography,gaming", "design,anime"),
    ];

    let mut users = all_profiles(store);
    let mut added = 0;
    for (username, age, gender, hobbies, interests) in samples {
        if users.iter().any(|u| u.username == username) {
            continue;
        }
        users.push(Profile::new(
            username,
            "123",
            age,
            gender,
            split_list(hobbies),
            split_list(interests),
        )?);
        added += 1;
    }
    if added > 0 {
        store.set_json(USERS_KEY, &users)?;
    }
    Ok(added)
}
