//! Registry of parsed documents keyed by canonical file path.
//!
//! A [`DocumentCache`] parses each file at most once. Entries are created on
//! first request and live as long as the cache; there is no eviction and no
//! invalidation when a file changes on disk. The cache is an ordinary value
//! owned by the caller and is safe to share between threads.
//!
//! ```no_run
//! use armaconfig::DocumentCache;
//! use std::sync::Arc;
//!
//! let cache = DocumentCache::new();
//! let first = cache.get_or_parse("mission/description.ext")?;
//! let again = cache.get_or_parse("./mission/description.ext")?;
//! assert!(Arc::ptr_eq(&first, &again));
//! # Ok::<(), armaconfig::Error>(())
//! ```

use crate::{Document, ParseOptions, Result};
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::debug;

/// Hit and miss counters of a [`DocumentCache`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CacheStatistics {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

#[derive(Default)]
struct CacheState {
    documents: HashMap<PathBuf, Arc<Document>>,
    hits: u64,
    misses: u64,
}

/// Lazily populated map from canonical path to parsed document.
#[derive(Default)]
pub struct DocumentCache {
    state: Mutex<CacheState>,
    options: ParseOptions,
}

impl DocumentCache {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty cache that parses every file with `options`.
    #[must_use]
    pub fn with_options(options: ParseOptions) -> Self {
        DocumentCache {
            state: Mutex::default(),
            options,
        }
    }

    /// Returns the document for `path`, parsing the file on first request.
    ///
    /// Paths are canonicalized first, so different spellings of the same file
    /// share one entry. Parse failures are returned and nothing is cached.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Io`] if the path cannot be canonicalized or
    /// read, and any parse error of the file's contents.
    pub fn get_or_parse(&self, path: impl AsRef<Path>) -> Result<Arc<Document>> {
        let canonical = fs::canonicalize(path.as_ref())?;

        {
            let mut state = self.state.lock();
            if let Some(document) = state.documents.get(&canonical).cloned() {
                state.hits += 1;
                debug!(path = %canonical.display(), "document cache hit");
                return Ok(document);
            }
            state.misses += 1;
        }

        debug!(path = %canonical.display(), "document cache miss, parsing");
        let document = Arc::new(crate::from_path_with_options(
            &canonical,
            self.options.clone(),
        )?);

        let mut state = self.state.lock();
        let entry = state.documents.entry(canonical).or_insert(document);
        Ok(Arc::clone(entry))
    }

    /// Returns the cached document for `path` without parsing.
    #[must_use]
    pub fn get(&self, path: impl AsRef<Path>) -> Option<Arc<Document>> {
        let canonical = fs::canonicalize(path.as_ref()).ok()?;
        self.state.lock().documents.get(&canonical).cloned()
    }

    #[must_use]
    pub fn contains(&self, path: impl AsRef<Path>) -> bool {
        self.get(path).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state.lock().documents.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn statistics(&self) -> CacheStatistics {
        let state = self.state.lock();
        CacheStatistics {
            hits: state.hits,
            misses: state.misses,
            entries: state.documents.len(),
        }
    }
}
