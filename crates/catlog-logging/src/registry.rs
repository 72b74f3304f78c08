//! Registry of live categories and the active rule set

use crate::category::{CategoryId, CategoryState};
use catlog_core::{LogLevel, RuleSet};
use once_cell::sync::OnceCell;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::{Arc, Weak};

/// Global registry used by [`Category::new`](crate::Category::new)
static GLOBAL_REGISTRY: OnceCell<Registry> = OnceCell::new();

/// Tracks every registered category and re-derives thresholds from the rules
///
/// The registry never owns a category: it keeps weak handles keyed by
/// category id, and a category removes itself when dropped. Cloning a
/// `Registry` yields another handle to the same state.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<Mutex<RegistryState>>,
}

#[derive(Default)]
struct RegistryState {
    categories: HashMap<CategoryId, Weak<CategoryState>>,
    rules: RuleSet,
}

/// Point-in-time view of a registered category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySnapshot {
    pub id: CategoryId,
    pub name: String,
    pub level: LogLevel,
    pub default_level: LogLevel,
}

impl Registry {
    /// Create an empty registry with no rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the process-wide registry
    pub fn global() -> &'static Registry {
        GLOBAL_REGISTRY.get_or_init(Registry::new)
    }

    /// Start tracking a category and apply the current rules to it
    ///
    /// Registering the same category twice is a no-op.
    pub(crate) fn register(&self, category: &Arc<CategoryState>) {
        let mut state = self.inner.lock();
        if state.categories.contains_key(&category.id()) {
            return;
        }
        state
            .categories
            .insert(category.id(), Arc::downgrade(category));
        apply_rules(&state.rules, category);
    }

    /// Stop tracking a category; unknown ids are ignored
    pub(crate) fn unregister(&self, id: CategoryId) {
        self.inner.lock().categories.remove(&id);
    }

    /// Store a threshold under the registry lock
    pub(crate) fn store_level(&self, category: &CategoryState, level: LogLevel) {
        let _state = self.inner.lock();
        category.store(level);
    }

    /// Replace the active rules and re-apply them to every category
    ///
    /// Invalid tokens in `rule_string` are dropped. Each category is reset to
    /// its default before the new rules apply, so categories no longer
    /// matched by any rule revert.
    pub fn set_rules(&self, rule_string: &str) {
        let (rules, rejected) = RuleSet::parse_with_report(rule_string);
        self.replace_rules(rules, rejected.len());
    }

    /// Replace the active rules with an already parsed set
    pub fn set_rule_set(&self, rules: RuleSet) {
        self.replace_rules(rules, 0);
    }

    /// Drop every rule, returning all categories to their defaults
    pub fn clear_rules(&self) {
        self.set_rule_set(RuleSet::new());
    }

    fn replace_rules(&self, rules: RuleSet, dropped: usize) {
        let (applied, categories) = {
            let mut guard = self.inner.lock();
            guard.rules = rules;

            let state = &mut *guard;
            state.categories.retain(|_, weak| match weak.upgrade() {
                Some(category) => {
                    apply_rules(&state.rules, &category);
                    true
                }
                None => false,
            });
            (state.rules.to_string(), state.categories.len())
        };

        tracing::debug!(rules = %applied, dropped, categories, "applied log rules");
    }

    /// Snapshot of the active rules
    pub fn rules(&self) -> RuleSet {
        self.inner.lock().rules.clone()
    }

    /// Canonical string form of the active rules
    pub fn rule_string(&self) -> String {
        self.inner.lock().rules.to_string()
    }

    /// Number of live registered categories
    pub fn category_count(&self) -> usize {
        self.inner
            .lock()
            .categories
            .values()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }

    /// Snapshot of every live category, ordered by name then id
    pub fn categories(&self) -> Vec<CategorySnapshot> {
        let mut snapshots: Vec<CategorySnapshot> = {
            let state = self.inner.lock();
            state
                .categories
                .values()
                .filter_map(Weak::upgrade)
                .map(|category| CategorySnapshot {
                    id: category.id(),
                    name: category.name().to_string(),
                    level: category.load(),
                    default_level: category.default_level(),
                })
                .collect()
        };
        snapshots.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        snapshots
    }

    /// Check whether a category id is currently tracked
    pub fn contains(&self, id: CategoryId) -> bool {
        self.inner.lock().categories.contains_key(&id)
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.lock();
        f.debug_struct("Registry")
            .field("categories", &state.categories.len())
            .field("rules", &state.rules.to_string())
            .finish()
    }
}

/// Reset a category to its default, then apply every matching rule
///
/// The resolved level is written with a single store so readers never see
/// the intermediate default.
fn apply_rules(rules: &RuleSet, category: &CategoryState) {
    let level = rules.level_for(category.name(), category.default_level());
    category.store(level);
}
