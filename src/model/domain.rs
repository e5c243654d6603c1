//! Domain state - the catalog and the comment store, separate from UI concerns

use super::catalog::{Catalog, SampleData};
use super::comment::{Comment, CommentStore};
use crate::error::CoreError;

/// Domain state owned by the application root
pub struct DomainState {
    /// Read-only videos and the demo user
    pub catalog: Catalog,

    /// Comments shown under the video player, newest first
    pub comments: CommentStore,
}

impl DomainState {
    pub fn new(data: SampleData) -> Self {
        Self {
            catalog: data.catalog,
            comments: CommentStore::with_comments(data.comments),
        }
    }

    /// Add a comment authored by the catalog's user
    pub fn add_comment(&mut self, content: &str) -> Result<&Comment, CoreError> {
        self.comments.add_comment(content, self.catalog.user())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_comment_uses_catalog_user() {
        let mut domain = DomainState::new(SampleData::builtin().unwrap());
        let seeded = domain.comments.len();

        let comment = domain.add_comment("Nice one").unwrap().clone();

        assert_eq!(comment.user_id, domain.catalog.user().id);
        assert_eq!(comment.user_name, domain.catalog.user().name);
        assert_eq!(domain.comments.len(), seeded + 1);
        assert_eq!(domain.comments.comments()[0].id, comment.id);
    }
}
