//! In-memory entity store.
//!
//! The authoritative holder of users, posts, and their id counters. The
//! store itself is plain single-threaded data; shared state wraps it in a
//! mutex so each create runs atomically — email uniqueness and id
//! monotonicity both depend on that.

use crate::error::ApiError;
use crate::model::{Post, User};

/// Users and posts, insertion-ordered, with monotonically increasing ids
/// starting at 1. Ids are never reused.
#[derive(Debug)]
pub struct EntityStore {
    users: Vec<User>,
    posts: Vec<Post>,
    next_user_id: u64,
    next_post_id: u64,
}

impl EntityStore {
    pub fn new() -> Self {
        Self { users: Vec::new(), posts: Vec::new(), next_user_id: 1, next_post_id: 1 }
    }

    /// Creates a user. Validation runs before any mutation: a rejected call
    /// leaves the collection and the id counter untouched.
    pub fn create_user(&mut self, name: &str, email: &str) -> Result<User, ApiError> {
        if name.is_empty() || email.is_empty() {
            return Err(ApiError::MissingField("Missing name or email"));
        }
        // Case-sensitive exact match.
        if self.users.iter().any(|u| u.email == email) {
            return Err(ApiError::DuplicateEmail);
        }

        let user = User { id: self.next_user_id, name: name.to_owned(), email: email.to_owned() };
        self.next_user_id += 1;
        self.users.push(user.clone());
        Ok(user)
    }

    /// All users in insertion order.
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Creates a post. The author must exist now; nothing re-checks the
    /// reference afterwards.
    pub fn create_post(
        &mut self,
        title: &str,
        content: &str,
        author_id: u64,
    ) -> Result<Post, ApiError> {
        if title.is_empty() || content.is_empty() {
            return Err(ApiError::MissingField("Missing required fields"));
        }
        if !self.users.iter().any(|u| u.id == author_id) {
            return Err(ApiError::AuthorNotFound);
        }

        let post = Post {
            id: self.next_post_id,
            title: title.to_owned(),
            content: content.to_owned(),
            author_id,
        };
        self.next_post_id += 1;
        self.posts.push(post.clone());
        Ok(post)
    }

    /// All posts in insertion order, authors unresolved.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Drops everything and restarts both id counters at 1.
    ///
    /// Exists for test isolation; nothing routes to it.
    pub fn reset(&mut self) {
        self.users.clear();
        self.posts.clear();
        self.next_user_id = 1;
        self.next_post_id = 1;
    }
}

impl Default for EntityStore {
    fn default() -> Self {
        Self::new()
    }
}
