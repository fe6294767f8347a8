//! File-backed store: one pretty-printed JSON array per collection.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use planboard_core::{Post, PostLearning};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::{LearningRepository, PostRepository, StoreError};

const POSTS_FILE: &str = "posts.json";
const LEARNINGS_FILE: &str = "learnings.json";

/// Reads and writes `posts.json` and `learnings.json` under `data_dir`.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn posts_path(&self) -> PathBuf {
        self.data_dir.join(POSTS_FILE)
    }

    #[must_use]
    pub fn learnings_path(&self) -> PathBuf {
        self.data_dir.join(LEARNINGS_FILE)
    }
}

impl PostRepository for JsonStore {
    fn list_posts(&self) -> Result<Vec<Post>, StoreError> {
        read_collection(&self.posts_path())
    }
}

impl LearningRepository for JsonStore {
    fn load_learnings(&self) -> Result<Vec<PostLearning>, StoreError> {
        read_collection(&self.learnings_path())
    }

    fn save_learnings(&mut self, learnings: &[PostLearning]) -> Result<(), StoreError> {
        write_collection(&self.learnings_path(), learnings)
    }
}

fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::debug!(path = %path.display(), "collection file missing; treating as empty");
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(StoreError::Io {
                path: path.display().to_string(),
                source,
            })
        }
    };

    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let items: Vec<T> = serde_json::from_str(&raw).map_err(|source| StoreError::Parse {
        path: path.display().to_string(),
        source,
    })?;
    tracing::debug!(path = %path.display(), count = items.len(), "loaded collection");
    Ok(items)
}

/// Write through a sibling temp file so readers never see a partial array.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<(), StoreError> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).map_err(io_err(dir))?;
    }

    let mut body = serde_json::to_string_pretty(items)?;
    body.push('\n');

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, body).map_err(io_err(&tmp))?;
    fs::rename(&tmp, path).map_err(io_err(path))?;

    tracing::info!(path = %path.display(), count = items.len(), "saved collection");
    Ok(())
}

fn io_err(path: &Path) -> impl FnOnce(std::io::Error) -> StoreError {
    let path = path.display().to_string();
    move |source| StoreError::Io { path, source }
}
