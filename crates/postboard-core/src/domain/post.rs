use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of posts kept in the log. Older posts are evicted first.
pub const POST_LOG_CAPACITY: usize = 200;

pub const ID_KEY: &str = "id";
pub const TITLE_KEY: &str = "title";
pub const CONTENT_KEY: &str = "content";

/// Flat key/value mapping submitted for a post.
pub type PostFields = BTreeMap<String, String>;

/// Post entity - a user-submitted record with an id, title, and content.
///
/// Fields other than `id`, `title`, and `content` are kept in memory but are
/// never written to a snapshot or returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Post {
    fields: PostFields,
}

impl Post {
    /// Create a new post with a freshly generated id.
    ///
    /// Any `id` present in `fields` is replaced.
    pub fn new(mut fields: PostFields) -> Self {
        fields.insert(ID_KEY.to_string(), Uuid::new_v4().to_string());
        Self { fields }
    }

    /// Rebuild a post from persisted fields. Returns `None` without a usable id.
    pub fn from_fields(fields: PostFields) -> Option<Self> {
        match fields.get(ID_KEY) {
            Some(id) if !id.is_empty() => Some(Self { fields }),
            _ => None,
        }
    }

    pub fn id(&self) -> &str {
        self.get(ID_KEY)
    }

    pub fn title(&self) -> &str {
        self.get(TITLE_KEY)
    }

    pub fn content(&self) -> &str {
        self.get(CONTENT_KEY)
    }

    /// Look up a field, reading absent keys as empty.
    pub fn get(&self, key: &str) -> &str {
        self.fields.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn fields(&self) -> &PostFields {
        &self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> PostFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_new_assigns_fresh_id() {
        let a = Post::new(fields(&[("title", "A")]));
        let b = Post::new(fields(&[("title", "A")]));

        assert!(!a.id().is_empty());
        assert_ne!(a.id(), b.id());
        assert!(Uuid::parse_str(a.id()).is_ok());
    }

    #[test]
    fn test_new_overrides_client_id() {
        let post = Post::new(fields(&[("id", "forged"), ("title", "t")]));
        assert_ne!(post.id(), "forged");
    }

    #[test]
    fn test_missing_fields_read_as_empty() {
        let post = Post::new(PostFields::new());
        assert_eq!(post.title(), "");
        assert_eq!(post.content(), "");
    }

    #[test]
    fn test_extra_fields_are_preserved() {
        let post = Post::new(fields(&[("title", "t"), ("mood", "happy")]));
        assert_eq!(post.get("mood"), "happy");
        assert_eq!(post.fields().len(), 3);
    }

    #[test]
    fn test_from_fields_requires_id() {
        assert!(Post::from_fields(fields(&[("title", "t")])).is_none());
        assert!(Post::from_fields(fields(&[("id", ""), ("title", "t")])).is_none());

        let post = Post::from_fields(fields(&[("id", "abc"), ("title", "t")])).unwrap();
        assert_eq!(post.id(), "abc");
    }

    #[test]
    fn test_serializes_as_flat_map() {
        let post = Post::from_fields(fields(&[("id", "abc"), ("title", "t")])).unwrap();
        let json = serde_json::to_string(&post).unwrap();
        assert_eq!(json, r#"{"id":"abc","title":"t"}"#);
    }
}
