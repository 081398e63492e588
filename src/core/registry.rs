//! Logger registry: name resolution and the logger cache

use super::logger::Logger;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, OnceLock};

/// Name of the root logger.
pub const ROOT_LOGGER_NAME: &str = "root";

/// Separator between hierarchy segments in logger names.
pub const NAME_SEPARATOR: char = '.';

struct Inner {
    cache: HashMap<String, Arc<Logger>>,
    root: Arc<Logger>,
}

/// Process-wide cache mapping logger names to their singleton instances.
///
/// The registry is the sole owner of all logger lifetimes; loggers hold only
/// weak parent references. Resolving a dotted name creates and caches every
/// missing ancestor before the child, so the hierarchy is a tree by
/// construction.
///
/// The registry has an injectable lifetime: tests construct isolated
/// instances, applications typically use [`global`].
pub struct Registry {
    inner: Mutex<Inner>,
}

impl Registry {
    /// Create a registry with a fresh root logger at the default `Info`
    /// threshold and no handlers.
    #[must_use]
    pub fn new() -> Self {
        Registry {
            inner: Mutex::new(Inner {
                cache: HashMap::new(),
                root: Logger::create(ROOT_LOGGER_NAME, None),
            }),
        }
    }

    /// The singleton root logger.
    #[must_use]
    pub fn root(&self) -> Arc<Logger> {
        Arc::clone(&self.inner.lock().root)
    }

    /// Find or create the logger for a named subsystem.
    ///
    /// Returns the cached instance when one exists; otherwise resolves the
    /// parent chain (creating and caching ancestors first) and creates the
    /// logger with threshold and level set copied from its parent. The whole
    /// check-then-create sequence runs under the registry lock, so
    /// concurrent first resolution of one name yields exactly one instance.
    ///
    /// The empty string and `"root"` resolve to the root logger itself.
    pub fn get(&self, name: &str) -> Arc<Logger> {
        let mut inner = self.inner.lock();
        inner.resolve(name)
    }
}

impl Inner {
    fn resolve(&mut self, name: &str) -> Arc<Logger> {
        if name.is_empty() || name == ROOT_LOGGER_NAME {
            return Arc::clone(&self.root);
        }
        if let Some(logger) = self.cache.get(name) {
            return Arc::clone(logger);
        }
        let parent = match name.rsplit_once(NAME_SEPARATOR) {
            Some((parent_name, _)) => self.resolve(parent_name),
            None => Arc::clone(&self.root),
        };
        let logger = Logger::create(name, Some(&parent));
        self.cache.insert(name.to_string(), Arc::clone(&logger));
        logger
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

static GLOBAL_REGISTRY: OnceLock<Registry> = OnceLock::new();

/// The process-wide registry, initialized lazily on first use and torn down
/// only at process exit.
pub fn global() -> &'static Registry {
    GLOBAL_REGISTRY.get_or_init(Registry::new)
}
