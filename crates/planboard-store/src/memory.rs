//! In-memory store for tests and embedding callers.

use planboard_core::{Post, PostLearning};

use crate::{LearningRepository, PostRepository, StoreError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    posts: Vec<Post>,
    learnings: Vec<PostLearning>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            learnings: Vec::new(),
        }
    }
}

impl PostRepository for MemoryStore {
    fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        Ok(self.posts.clone())
    }
}

impl LearningRepository for MemoryStore {
    fn load_learnings(&self) -> Result<Vec<PostLearning>, StoreError> {
        Ok(self.learnings.clone())
    }

    fn save_learnings(&mut self, learnings: &[PostLearning]) -> Result<(), StoreError> {
        self.learnings = learnings.to_vec();
        Ok(())
    }
}
