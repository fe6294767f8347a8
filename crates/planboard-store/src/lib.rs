//! Persistence for planboard posts and learnings.
//!
//! The analytics layer is a pure function of its inputs; loading and saving
//! happen here, behind [`PostRepository`] and [`LearningRepository`].

pub mod json;
pub mod memory;

use planboard_core::{Post, PostLearning};
use thiserror::Error;

pub use json::JsonStore;
pub use memory::MemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Serialize(#[from] serde_json::Error),
}

/// Source of the post collection.
///
/// Read-only: posts are authored by the planning board, planboard only
/// analyzes them.
pub trait PostRepository {
    /// All posts, in stored order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn list_posts(&self) -> Result<Vec<Post>, StoreError>;

    /// Look up one post by id.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn get_post(&self, id: &str) -> Result<Option<Post>, StoreError> {
        Ok(self.list_posts()?.into_iter().find(|p| p.id == id))
    }
}

/// Source and sink of the learning collection.
pub trait LearningRepository {
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be read.
    fn load_learnings(&self) -> Result<Vec<PostLearning>, StoreError>;

    /// Replace the stored learning collection.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing store cannot be written.
    fn save_learnings(&mut self, learnings: &[PostLearning]) -> Result<(), StoreError>;
}
