//! Category-to-adapter registry.
//!
//! The registry maps categories to adapters. A record for `app.db.pool` is
//! delivered to the adapter bound to `app.db.pool` if there is one, else to
//! `app.db`, else to `app`, else to the default adapter. The default starts
//! out as [`NullAdapter`], so nothing is written until the application
//! binds something.
//!
//! Resolutions that hit a binding are cached per category; categories that
//! fall through to the default are not, so unbounded category names
//! (per-request or per-worker labels) do not grow the cache. Every mutation
//! clears the cache and bumps a generation counter while holding the write lock;
//! [`Logger`]s compare generations to notice rebinding without touching the
//! registry lock on the hot path.
//!
//! A process-wide registry is available through [`global()`].

mod global;

pub use global::{global, install, logger};

use dashmap::DashMap;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::debug;

use crate::log::{Adapter, Category, NullAdapter};
use crate::proxy::Logger;

/// Outcome of a resolution, as reported by [`Registry::explain`].
#[derive(Clone)]
pub struct Resolution {
    /// The category that was looked up.
    pub category: Category,
    /// The bound category that matched, or `None` when the default was used.
    pub matched: Option<Category>,
    /// The adapter records are delivered to.
    pub adapter: Arc<dyn Adapter>,
}

impl Resolution {
    /// Returns true when no binding matched and the default adapter was used.
    pub fn is_default(&self) -> bool {
        self.matched.is_none()
    }
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolution")
            .field("category", &self.category)
            .field("matched", &self.matched)
            .field("adapter", &self.adapter.name())
            .finish()
    }
}

struct Bindings {
    map: HashMap<Category, Arc<dyn Adapter>>,
    default: Arc<dyn Adapter>,
}

impl Bindings {
    fn lookup(&self, category: &Category) -> (Option<Category>, Arc<dyn Adapter>) {
        for ancestor in category.ancestors() {
            let key = Category::new(ancestor);
            if let Some(adapter) = self.map.get(&key) {
                return (Some(key), Arc::clone(adapter));
            }
        }
        (None, Arc::clone(&self.default))
    }
}

/// Maps categories to adapters, with fallback to parent categories and a
/// default adapter.
pub struct Registry {
    state: RwLock<Bindings>,
    resolved: DashMap<Category, Arc<dyn Adapter>>,
    generation: AtomicU64,
}

impl Registry {
    /// Create a registry whose default adapter is [`NullAdapter`].
    pub fn new() -> Self {
        Self::with_default(Arc::new(NullAdapter))
    }

    /// Create a registry with the given default adapter.
    pub fn with_default(default: Arc<dyn Adapter>) -> Self {
        Self {
            state: RwLock::new(Bindings {
                map: HashMap::new(),
                default,
            }),
            resolved: DashMap::new(),
            generation: AtomicU64::new(0),
        }
    }

    /// Create a logger for `category` backed by this registry.
    pub fn logger(self: &Arc<Self>, category: impl Into<Category>) -> Logger {
        Logger::new(Arc::clone(self), category.into())
    }

    /// Bind `adapter` to `category` and its descendants.
    ///
    /// Returns the adapter previously bound to exactly this category. Binding
    /// the root category replaces the default adapter.
    pub fn bind(
        &self,
        category: impl Into<Category>,
        adapter: Arc<dyn Adapter>,
    ) -> Option<Arc<dyn Adapter>> {
        let category = category.into();
        let mut state = self.state.write();

        let previous = if category.is_root() {
            Some(std::mem::replace(&mut state.default, adapter))
        } else {
            debug!(category = %category, adapter = adapter.name(), "Binding category");
            state.map.insert(category, adapter)
        };

        self.invalidate();
        previous
    }

    /// Remove the binding for exactly `category`.
    ///
    /// Descendants fall back to the next bound ancestor or the default.
    /// Unbinding the root category does nothing.
    pub fn unbind(&self, category: impl Into<Category>) -> Option<Arc<dyn Adapter>> {
        let category = category.into();
        if category.is_root() {
            return None;
        }

        let mut state = self.state.write();
        let previous = state.map.remove(&category);
        if previous.is_some() {
            debug!(category = %category, "Unbinding category");
            self.invalidate();
        }
        previous
    }

    /// Replace the default adapter, returning the previous one.
    pub fn set_default(&self, adapter: Arc<dyn Adapter>) -> Arc<dyn Adapter> {
        let mut state = self.state.write();
        debug!(adapter = adapter.name(), "Setting default adapter");
        let previous = std::mem::replace(&mut state.default, adapter);
        self.invalidate();
        previous
    }

    /// The adapter used when no binding matches.
    pub fn default_adapter(&self) -> Arc<dyn Adapter> {
        Arc::clone(&self.state.read().default)
    }

    /// Replace the default and every binding in one step.
    pub fn replace(
        &self,
        default: Arc<dyn Adapter>,
        bindings: impl IntoIterator<Item = (Category, Arc<dyn Adapter>)>,
    ) {
        let mut state = self.state.write();
        state.default = default;
        state.map = bindings
            .into_iter()
            .filter(|(category, _)| !category.is_root())
            .collect();
        debug!(
            bindings = state.map.len(),
            default = state.default.name(),
            "Replaced registry bindings"
        );
        self.invalidate();
    }

    /// Drop every binding and restore [`NullAdapter`] as the default.
    pub fn reset(&self) {
        self.replace(Arc::new(NullAdapter), Vec::new());
    }

    /// Returns true when `category` itself has a binding.
    pub fn is_bound(&self, category: impl Into<Category>) -> bool {
        self.state.read().map.contains_key(&category.into())
    }

    /// Bound categories and their adapter names, sorted by category.
    pub fn bindings(&self) -> Vec<(Category, &'static str)> {
        let state = self.state.read();
        let mut bindings: Vec<_> = state
            .map
            .iter()
            .map(|(category, adapter)| (category.clone(), adapter.name()))
            .collect();
        bindings.sort_by(|a, b| a.0.cmp(&b.0));
        bindings
    }

    /// The adapter records for `category` are delivered to.
    pub fn resolve(&self, category: &Category) -> Arc<dyn Adapter> {
        if let Some(hit) = self.resolved.get(category) {
            return Arc::clone(hit.value());
        }

        // Insert while holding the read lock so a concurrent mutation cannot
        // clear the cache between lookup and insert.
        let state = self.state.read();
        let (matched, adapter) = state.lookup(category);
        if matched.is_some() {
            self.resolved.insert(category.clone(), Arc::clone(&adapter));
        }
        adapter
    }

    /// Resolve `category` together with the generation it is valid for.
    pub(crate) fn resolve_tracked(&self, category: &Category) -> (u64, Arc<dyn Adapter>) {
        // Generation must be read before resolving; a stale pair is then
        // refreshed on the next call instead of being kept forever.
        let generation = self.generation();
        (generation, self.resolve(category))
    }

    /// Resolve `category` and report which binding matched.
    pub fn explain(&self, category: &Category) -> Resolution {
        let state = self.state.read();
        let (matched, adapter) = state.lookup(category);
        Resolution {
            category: category.clone(),
            matched,
            adapter,
        }
    }

    /// Mutation counter; changes whenever a binding or the default changes.
    pub fn generation(&self) -> u64 {
        self.generation.load(Ordering::Acquire)
    }

    /// Flush the default adapter and every bound adapter.
    pub fn flush(&self) {
        let state = self.state.read();
        state.default.flush();
        for adapter in state.map.values() {
            adapter.flush();
        }
    }

    /// Must be called with the write lock held.
    fn invalidate(&self) {
        self.resolved.clear();
        self.generation.fetch_add(1, Ordering::Release);
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("Registry")
            .field("default", &state.default.name())
            .field("bindings", &state.map.len())
            .field("generation", &self.generation())
            .finish()
    }
}
