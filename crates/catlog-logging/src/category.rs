//! Named log categories with runtime-adjustable thresholds

use crate::registry::Registry;
use catlog_core::LogLevel;
use once_cell::sync::Lazy;
use std::sync::Arc;
use std::sync::atomic::{AtomicU8, AtomicU64, Ordering};

/// Source of category ids, shared by every registry
static NEXT_CATEGORY_ID: AtomicU64 = AtomicU64::new(1);

/// The `default` category on the global registry
static DEFAULT_CATEGORY: Lazy<Category> = Lazy::new(|| Category::new("default", LogLevel::Info));

/// Get the `default` category, created on first use at `Info`
pub fn default_category() -> &'static Category {
    &DEFAULT_CATEGORY
}

/// Identity of a category within a registry
///
/// Names may repeat; ids never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CategoryId(u64);

impl CategoryId {
    fn next() -> Self {
        Self(NEXT_CATEGORY_ID.fetch_add(1, Ordering::Relaxed))
    }

    pub fn as_u64(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Threshold state shared between a category and its registry
pub(crate) struct CategoryState {
    id: CategoryId,
    name: String,
    level: AtomicU8,
    default_level: LogLevel,
}

impl CategoryState {
    pub(crate) fn id(&self) -> CategoryId {
        self.id
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn default_level(&self) -> LogLevel {
        self.default_level
    }

    pub(crate) fn load(&self) -> LogLevel {
        LogLevel::from_u8(self.level.load(Ordering::SeqCst))
    }

    pub(crate) fn store(&self, level: LogLevel) {
        self.level.store(level as u8, Ordering::SeqCst);
    }
}

/// A named log category owned by the subsystem that declares it
///
/// Creating a category registers it with a [`Registry`] and applies any rule
/// already in force; dropping it unregisters it. Threshold reads are a single
/// atomic load and never take the registry lock.
///
/// ```ignore
/// static NETWORK: Lazy<Category> = Lazy::new(|| Category::new("network", LogLevel::Info));
///
/// catlog_debug!(NETWORK, "connected to {}", peer);
/// ```
pub struct Category {
    state: Arc<CategoryState>,
    registry: Registry,
}

impl Category {
    /// Create a category on the global registry
    pub fn new(name: impl Into<String>, level: LogLevel) -> Self {
        Self::with_registry(Registry::global(), name, level)
    }

    /// Create a category on a specific registry
    ///
    /// `level` becomes both the current and the default threshold; a matching
    /// rule in the registry may override the current one before this returns.
    pub fn with_registry(registry: &Registry, name: impl Into<String>, level: LogLevel) -> Self {
        let state = Arc::new(CategoryState {
            id: CategoryId::next(),
            name: name.into(),
            level: AtomicU8::new(level as u8),
            default_level: level,
        });
        registry.register(&state);

        Self {
            state,
            registry: registry.clone(),
        }
    }

    pub fn id(&self) -> CategoryId {
        self.state.id()
    }

    pub fn name(&self) -> &str {
        self.state.name()
    }

    /// Current effective threshold
    pub fn log_level(&self) -> LogLevel {
        self.state.load()
    }

    /// Threshold given at construction
    pub fn default_level(&self) -> LogLevel {
        self.state.default_level()
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &Arc<CategoryState> {
        &self.state
    }

    /// Registry this category is registered with
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Check if a message at `level` passes the current threshold
    pub fn check_log_level(&self, level: LogLevel) -> bool {
        level.is_permitted_by(self.log_level())
    }

    /// Gate a call site, aborting on suppressed fatal messages
    ///
    /// Returns the same answer as [`check_log_level`](Self::check_log_level),
    /// except that when `level` is [`LogLevel::Fatal`] and the threshold would
    /// suppress it, **the process is aborted immediately**. Fatal messages are
    /// never dropped silently.
    pub fn enabled_or_abort(&self, level: LogLevel) -> bool {
        let enabled = self.check_log_level(level);
        if level == LogLevel::Fatal && !enabled {
            std::process::abort();
        }
        enabled
    }

    /// Abort the process if `level` is fatal, otherwise return `false`
    ///
    /// Called once a forced-fatal message has been written. **This never
    /// returns for [`LogLevel::Fatal`].**
    pub fn abort_if_fatal(&self, level: LogLevel) -> bool {
        if level == LogLevel::Fatal {
            std::process::abort();
        }
        false
    }

    /// Set the threshold
    pub fn set_log_level(&self, level: LogLevel) {
        self.registry.store_level(&self.state, level);
    }

    /// Set the threshold from a raw integer, ignoring out-of-range values
    pub fn set_raw_log_level(&self, raw: i64) {
        if let Some(level) = LogLevel::from_raw(raw) {
            self.set_log_level(level);
        }
    }

    /// Restore the threshold given at construction
    pub fn reset_log_level(&self) {
        self.set_log_level(self.default_level());
    }
}

impl Drop for Category {
    fn drop(&mut self) {
        self.registry.unregister(self.state.id());
    }
}

impl std::fmt::Debug for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Category")
            .field("id", &self.id())
            .field("name", &self.name())
            .field("level", &self.log_level())
            .field("default_level", &self.default_level())
            .finish()
    }
}
