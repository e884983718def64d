//! Read-side aggregation: author joins and external enrichment.

use crate::error::ApiError;
use crate::external::TaskSource;
use crate::model::{Author, EnrichedPost, Post, PostWithAuthor, User};

/// Name embedded when a post's author id no longer resolves to a user.
const UNKNOWN_AUTHOR: &str = "Unknown";

/// Joins each post to its author's name, in post insertion order.
///
/// A dangling author reference degrades to [`UNKNOWN_AUTHOR`] instead of
/// failing — this view never errors.
pub fn posts_with_authors(posts: &[Post], users: &[User]) -> Vec<PostWithAuthor> {
    posts
        .iter()
        .map(|post| {
            let name = users
                .iter()
                .find(|u| u.id == post.author_id)
                .map_or(UNKNOWN_AUTHOR, |u| u.name.as_str());
            PostWithAuthor { post: post.clone(), author: Author { name: name.to_owned() } }
        })
        .collect()
}

/// Joins authors, then attaches one externally fetched fact to every post.
///
/// Exactly one outbound call per invocation; the same fact lands on every
/// post. All-or-nothing: if the fetch fails the whole call fails, even
/// though the local join already succeeded. No retries, no caching.
pub async fn posts_with_external(
    posts: &[Post],
    users: &[User],
    source: &dyn TaskSource,
) -> Result<Vec<EnrichedPost>, ApiError> {
    let joined = posts_with_authors(posts, users);
    let task = source.fetch_task().await?;
    let info = format!("External task: \"{}\"", task.title);

    Ok(joined
        .into_iter()
        .map(|post| EnrichedPost { post, external_info: info.clone() })
        .collect())
}
