//! Title Search
//!
//! Client-side filtering over an already fetched collection.

use crate::model::Post;

/// Keep posts whose title contains `query`, ignoring case. Input order is kept.
pub fn filter_by_title(posts: &[Post], query: &str) -> Vec<Post> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|post| post.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
