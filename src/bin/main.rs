//! Demo driver standing in for the UI event layer: seed the directory,
//! log in, look for matches, exchange a couple of messages and leave a
//! review, all against the file-backed store.

use tracing::info;

use kindred::config;
use kindred::core::kv::FileStore;
use kindred::{chat, matching, reviews, session, users};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let store = FileStore::open(config::store_dir())?;

    let added = users::seed_sample_profiles(&store)?;
    info!(added, "seeded sample profiles");

    session::login(&store, "alice", "123")?;
    info!(user = "alice", "logged in");

    for candidate in matching::top_matches(&store)? {
        info!(
            username = %candidate.profile.username,
            score = candidate.score,
            "match candidate"
        );
    }

    matching::add_match(&store, "coco")?;
    info!(matches = ?matching::matches_for(&store, "alice"), "alice's match list");

    chat::send_message(&store, "coco", "hi! up for coffee this week?")?;
    session::login(&store, "coco", "123")?;
    chat::send_message(&store, "alice", "sure, thursday works")?;

    for message in chat::conversation(&store, "alice", "coco") {
        info!(from = %message.from, text = %message.text, "message");
    }

    reviews::submit_review(&store, 5, "found a coffee buddy in a day")?;
    for review in reviews::list_reviews(&store) {
        info!(rating = review.rating, comment = %review.comment, "review");
    }

    session::logout(&store)?;
    Ok(())
}
