use super::Property;
use sift_core::Result;

use std::{
    fmt,
    sync::{Arc, Mutex, OnceLock},
};

type Loader = dyn Fn() -> Result<Vec<Property>> + Send + Sync;

/// A to-many association that is loaded on first access.
///
/// The loader runs at most once per collection, even when clones of the
/// collection are accessed from several threads. A failed load is not
/// cached; the next access retries.
#[derive(Clone)]
pub struct LazyCollection {
    inner: Arc<Inner>,
}

struct Inner {
    loader: Option<Box<Loader>>,
    items: OnceLock<Vec<Property>>,
    loading: Mutex<()>,
}

impl LazyCollection {
    pub fn new<F>(loader: F) -> Self
    where
        F: Fn() -> Result<Vec<Property>> + Send + Sync + 'static,
    {
        Self {
            inner: Arc::new(Inner {
                loader: Some(Box::new(loader)),
                items: OnceLock::new(),
                loading: Mutex::new(()),
            }),
        }
    }

    /// A collection whose items are already in memory.
    pub fn loaded<I>(items: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Property>,
    {
        let cell = OnceLock::new();
        let _ = cell.set(items.into_iter().map(Into::into).collect());

        Self {
            inner: Arc::new(Inner {
                loader: None,
                items: cell,
                loading: Mutex::new(()),
            }),
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.inner.items.get().is_some()
    }

    /// Returns the items, running the loader if they are not in memory yet.
    pub fn items(&self) -> Result<&[Property]> {
        if let Some(items) = self.inner.items.get() {
            return Ok(items);
        }

        // A poisoned lock only means another loader panicked; the cell is
        // still consistent.
        let _guard = self
            .inner
            .loading
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(items) = self.inner.items.get() {
            return Ok(items);
        }

        let items = match &self.inner.loader {
            Some(loader) => loader()?,
            None => vec![],
        };

        Ok(self.inner.items.get_or_init(|| items))
    }
}

impl fmt::Debug for LazyCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.items.get() {
            Some(items) => f.debug_tuple("LazyCollection").field(items).finish(),
            None => f.write_str("LazyCollection(<not loaded>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn loader_runs_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let collection = LazyCollection::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![1_i64.into(), 2_i64.into()])
        });

        assert!(!collection.is_loaded());
        assert_eq!(collection.items().unwrap().len(), 2);
        assert_eq!(collection.clone().items().unwrap().len(), 2);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(collection.is_loaded());
    }

    #[test]
    fn failed_load_is_retried() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();

        let collection = LazyCollection::new(move || {
            if counter.fetch_add(1, Ordering::SeqCst) == 0 {
                sift_core::bail!("connection reset");
            }
            Ok(vec![])
        });

        assert_eq!(
            collection.items().unwrap_err().to_string(),
            "connection reset"
        );
        assert!(collection.items().unwrap().is_empty());
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn preloaded_collection_needs_no_loader() {
        let collection = LazyCollection::loaded(["a", "b"]);
        assert!(collection.is_loaded());
        assert_eq!(collection.items().unwrap().len(), 2);
    }
}
