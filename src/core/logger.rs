//! Named logger nodes: admission control and dispatch

use super::{
    error::Result,
    filter::Filter,
    handler::Handler,
    level::Level,
    record::{Payload, Record},
};
use parking_lot::RwLock;
use std::fmt;
use std::sync::{Arc, Weak};

/// Mutable per-logger state.
///
/// Threshold, recognized level set, filter, handler list and propagate flag
/// form a single unit guarded by one lock, so configuration never races with
/// a concurrent dispatch reading them.
struct LoggerState {
    level: Level,
    levels: Vec<Level>,
    filter: Option<Arc<dyn Filter>>,
    handlers: Vec<Arc<dyn Handler>>,
    propagate: bool,
}

/// A named node in the logger hierarchy.
///
/// Each logger owns a severity threshold, an optional record filter, an
/// ordered handler list and a propagate flag. Accepted records fan out to the
/// logger's own handlers in registration order and then, if propagation is
/// enabled, to the parent's `dispatch`, recursing to the root.
///
/// Loggers are created through a [`Registry`](crate::core::Registry), which
/// guarantees one instance per name and owns all instances; the parent link
/// is a non-owning weak reference.
pub struct Logger {
    name: String,
    parent: Option<Weak<Logger>>,
    state: RwLock<LoggerState>,
}

impl Logger {
    /// Create a logger, copying threshold and recognized level set from the
    /// parent at creation time. The handler list starts empty: parent
    /// handlers are reached through propagation, not cloned into children.
    pub(crate) fn create(name: impl Into<String>, parent: Option<&Arc<Logger>>) -> Arc<Logger> {
        let (level, levels) = match parent {
            Some(parent) => {
                let state = parent.state.read();
                (state.level, state.levels.clone())
            }
            None => (Level::default(), super::level::ALL_LEVELS.to_vec()),
        };
        Arc::new(Logger {
            name: name.into(),
            parent: parent.map(Arc::downgrade),
            state: RwLock::new(LoggerState {
                level,
                levels,
                filter: None,
                handlers: Vec::new(),
                propagate: true,
            }),
        })
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent logger, `None` only for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Arc<Logger>> {
        self.parent.as_ref().and_then(Weak::upgrade)
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.state.read().level
    }

    /// Replace the threshold. A level outside this logger's recognized level
    /// set is rejected as a silent no-op: misconfiguration must never crash
    /// a caller that is merely trying to log.
    pub fn set_level(&self, level: Level) {
        let mut state = self.state.write();
        if state.levels.contains(&level) {
            state.level = level;
        }
    }

    /// The set of levels this logger recognizes as valid thresholds.
    #[must_use]
    pub fn levels(&self) -> Vec<Level> {
        self.state.read().levels.clone()
    }

    /// Replace the recognized level set. An empty set is a no-op. Children
    /// copy the set once at creation; replacing it here does not affect
    /// already-created children.
    pub fn set_levels(&self, levels: Vec<Level>) {
        if levels.is_empty() {
            return;
        }
        self.state.write().levels = levels;
    }

    /// Set the secondary admission predicate; `None` clears it.
    pub fn set_filter(&self, filter: Option<Box<dyn Filter>>) {
        self.state.write().filter = filter.map(Arc::from);
    }

    /// Append a handler to the fan-out list. Handlers are invoked in
    /// registration order.
    pub fn add_handler(&self, handler: Arc<dyn Handler>) {
        self.state.write().handlers.push(handler);
    }

    /// Remove a handler by identity. Returns whether a handler was removed.
    pub fn remove_handler(&self, handler: &Arc<dyn Handler>) -> bool {
        let mut state = self.state.write();
        let before = state.handlers.len();
        state.handlers.retain(|h| !Arc::ptr_eq(h, handler));
        state.handlers.len() < before
    }

    #[must_use]
    pub fn handlers(&self) -> Vec<Arc<dyn Handler>> {
        self.state.read().handlers.clone()
    }

    #[must_use]
    pub fn propagate(&self) -> bool {
        self.state.read().propagate
    }

    /// Control whether accepted records are also forwarded to the parent's
    /// handlers.
    pub fn set_propagate(&self, propagate: bool) {
        self.state.write().propagate = propagate;
    }

    /// Whether this logger would process a record at all, judged only by its
    /// own threshold.
    #[must_use]
    pub fn is_loggable(&self, record: &Record) -> bool {
        record.level().rank() >= self.level().rank()
    }

    /// Build a record and dispatch it.
    pub fn log(&self, level: Level, payload: impl Into<Payload>) -> Result<()> {
        self.log_with(level, payload, &[])
    }

    /// Build a record with positional arguments and dispatch it. Arguments
    /// are rendered to strings up front; placeholder interpolation is left
    /// to the formatters.
    pub fn log_with(
        &self,
        level: Level,
        payload: impl Into<Payload>,
        args: &[&dyn fmt::Display],
    ) -> Result<()> {
        // Below-threshold calls skip record construction entirely.
        if level.rank() < self.level().rank() {
            return Ok(());
        }
        let args = args.iter().map(ToString::to_string).collect();
        let record = Record::new(self.name.clone(), level, payload, args);
        self.dispatch(&record)
    }

    /// The core dispatch algorithm.
    ///
    /// 1. Drop the record if this logger's threshold rejects it.
    /// 2. Drop it if a filter is set and rejects it.
    /// 3. Fan out to this logger's handlers in registration order; each
    ///    handler applies its own threshold.
    /// 4. If propagation is enabled and a parent exists, hand the same
    ///    record to the parent's `dispatch`. Ancestors re-run their own
    ///    threshold and filter checks against their own state.
    ///
    /// Recursion terminates at the root or at the first ancestor with
    /// propagation disabled. Admission-control rejections are silent;
    /// handler publish failures propagate to the caller.
    pub fn dispatch(&self, record: &Record) -> Result<()> {
        // Snapshot under the lock, run the filter and handlers outside it:
        // a filter or handler that logs to this node or reconfigures it
        // must not deadlock.
        let (filter, handlers, propagate) = {
            let state = self.state.read();
            if record.level().rank() < state.level.rank() {
                return Ok(());
            }
            (state.filter.clone(), state.handlers.clone(), state.propagate)
        };
        if let Some(filter) = filter {
            if !filter.is_loggable(record) {
                return Ok(());
            }
        }
        for handler in &handlers {
            if handler.is_loggable(record) {
                handler.publish(record)?;
            }
        }
        if propagate {
            if let Some(parent) = self.parent() {
                parent.dispatch(record)?;
            }
        }
        Ok(())
    }

    /// Log a `Trace` message.
    #[inline]
    pub fn trace(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Trace, payload)
    }

    /// Log a `Debug` message.
    #[inline]
    pub fn debug(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Debug, payload)
    }

    /// Log a `Config` message.
    #[inline]
    pub fn config(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Config, payload)
    }

    /// Log an `Info` message.
    #[inline]
    pub fn info(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Info, payload)
    }

    /// Log a `Warning` message.
    #[inline]
    pub fn warning(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Warning, payload)
    }

    /// Log a `Severe` message.
    #[inline]
    pub fn severe(&self, payload: impl Into<Payload>) -> Result<()> {
        self.log(Level::Severe, payload)
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.read();
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("level", &state.level)
            .field("handlers", &state.handlers.len())
            .field("propagate", &state.propagate)
            .finish()
    }
}
