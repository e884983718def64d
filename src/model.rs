//! Core records and their read views.
//!
//! Wire names (`authorId`, `externalInfo`) follow what the dashboard and its
//! clients already expect; serde renames keep the Rust side snake_case.

use serde::Serialize;

/// A registered user.
#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A post as stored: the author is referenced by id, never embedded.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: u64,
    pub title: String,
    pub content: String,
    pub author_id: u64,
}

/// The author view embedded in joined posts.
#[derive(Debug, Clone, Serialize)]
pub struct Author {
    pub name: String,
}

/// A post joined to its author's name.
#[derive(Debug, Clone, Serialize)]
pub struct PostWithAuthor {
    #[serde(flatten)]
    pub post: Post,
    pub author: Author,
}

/// A joined post carrying the external enrichment fact.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedPost {
    #[serde(flatten)]
    pub post: PostWithAuthor,
    pub external_info: String,
}
