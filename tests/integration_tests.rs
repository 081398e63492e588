//! Integration tests for the logger hierarchy
//!
//! These tests verify:
//! - Threshold inheritance and admission control across the tree
//! - Dispatch order and parent propagation
//! - Registry identity guarantees
//! - End-to-end file handler output

use logtree::config::{basic_config, LoggerConfig};
use logtree::core::{Handler, Level, Record, Registry, Result};
use logtree::formatters::SimpleFormatter;
use logtree::handlers::FileHandler;
use logtree::Payload;
use parking_lot::Mutex;
use std::fs;
use std::sync::Arc;
use tempfile::TempDir;

/// Test sink that records published messages in arrival order.
struct CollectingHandler {
    name: String,
    level: Level,
    seen: Arc<Mutex<Vec<String>>>,
}

impl CollectingHandler {
    fn shared(name: &str, level: Level, seen: &Arc<Mutex<Vec<String>>>) -> Arc<dyn Handler> {
        Arc::new(CollectingHandler {
            name: name.to_string(),
            level,
            seen: Arc::clone(seen),
        })
    }
}

impl Handler for CollectingHandler {
    fn level(&self) -> Level {
        self.level
    }

    fn publish(&self, record: &Record) -> Result<()> {
        self.seen.lock().push(format!(
            "{}:{}:{}",
            self.name,
            record.level(),
            record.message().unwrap_or("<thrown>")
        ));
        Ok(())
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[test]
fn test_default_scenario_root_info_threshold() {
    // Root at the default INFO threshold with one handler; "app" inherits
    // INFO at creation and reaches the root handler via propagation.
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    registry
        .root()
        .add_handler(CollectingHandler::shared("root", Level::All, &seen));

    let app = registry.get("app");
    assert_eq!(app.level(), Level::Info);

    app.debug("x").unwrap();
    assert!(seen.lock().is_empty(), "DEBUG < INFO produces no invocation");

    app.info("x").unwrap();
    assert_eq!(*seen.lock(), ["root:INFO:x"]);
}

#[test]
fn test_dispatch_order_child_handlers_before_parent() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    registry
        .root()
        .add_handler(CollectingHandler::shared("c", Level::All, &seen));

    let child = registry.get("app");
    child.add_handler(CollectingHandler::shared("a", Level::All, &seen));
    child.add_handler(CollectingHandler::shared("b", Level::All, &seen));

    child.info("x").unwrap();

    assert_eq!(*seen.lock(), ["a:INFO:x", "b:INFO:x", "c:INFO:x"]);
}

#[test]
fn test_propagation_disabled_never_reaches_root() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    registry
        .root()
        .add_handler(CollectingHandler::shared("c", Level::All, &seen));
    registry.root().set_level(Level::All);

    let child = registry.get("app");
    child.add_handler(CollectingHandler::shared("a", Level::All, &seen));
    child.set_propagate(false);

    child.severe("x").unwrap();

    assert_eq!(*seen.lock(), ["a:SEVERE:x"]);
}

#[test]
fn test_propagation_spans_multiple_generations() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let mid = registry.get("svc.worker");
    mid.add_handler(CollectingHandler::shared("mid", Level::All, &seen));
    let top = registry.get("svc");
    top.add_handler(CollectingHandler::shared("top", Level::All, &seen));
    registry
        .root()
        .add_handler(CollectingHandler::shared("root", Level::All, &seen));

    let leaf = registry.get("svc.worker.pool");
    leaf.info("x").unwrap();

    assert_eq!(
        *seen.lock(),
        ["mid:INFO:x", "top:INFO:x", "root:INFO:x"]
    );
}

#[test]
fn test_registry_identity_and_shared_mutation() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let first = registry.get("svc.db");
    let second = registry.get("svc.db");
    assert!(Arc::ptr_eq(&first, &second));

    first.add_handler(CollectingHandler::shared("h", Level::All, &seen));
    second.info("visible through both references").unwrap();

    assert_eq!(seen.lock().len(), 1);
}

#[test]
fn test_threshold_change_does_not_reach_existing_children() {
    let registry = Registry::new();
    registry.root().set_level(Level::Warning);
    let child = registry.get("app");
    assert_eq!(child.level(), Level::Warning);

    registry.root().set_level(Level::Severe);
    assert_eq!(child.level(), Level::Warning);
}

#[test]
fn test_set_level_outside_recognized_set_is_noop() {
    let registry = Registry::new();
    let logger = registry.get("app");
    logger.configure(LoggerConfig::new().levels(vec![Level::Info, Level::Severe]));

    logger.set_level(Level::Trace);
    assert_eq!(logger.level(), Level::Info);
}

#[test]
fn test_unknown_rank_cannot_become_a_threshold() {
    // The untyped rendition of `setLevel(5)` being a no-op: an arbitrary
    // integer only becomes a Level through TryFrom, and unknown ranks fail,
    // so the threshold is never touched.
    let registry = Registry::new();
    let logger = registry.get("app");
    let before = logger.level();

    if let Ok(level) = Level::try_from(7) {
        logger.set_level(level);
    }

    assert_eq!(logger.level(), before);
}

#[test]
fn test_thrown_record_reaches_handlers() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let logger = registry.get("app");
    logger.add_handler(CollectingHandler::shared("h", Level::All, &seen));

    let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    logger.severe(Payload::thrown(err)).unwrap();

    assert_eq!(*seen.lock(), ["h:SEVERE:<thrown>"]);
}

#[test]
fn test_file_handler_end_to_end() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("svc.log");

    let registry = Registry::new();
    let handler = Arc::new(FileHandler::new(&path).expect("create file handler"));
    registry.root().add_handler(Arc::clone(&handler) as Arc<dyn Handler>);

    let logger = registry.get("svc.file");
    logger
        .log_with(Level::Warning, "disk {0}% full", &[&93])
        .unwrap();
    logger.debug("below threshold, never written").unwrap();
    handler.flush().unwrap();

    let content = fs::read_to_string(&path).expect("read log file");
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("[WARNING]"));
    assert!(lines[0].contains("svc.file - disk 93% full"));
}

#[test]
fn test_file_handler_own_threshold() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("severe-only.log");

    let registry = Registry::new();
    let handler = Arc::new(
        FileHandler::new(&path)
            .expect("create file handler")
            .with_level(Level::Severe)
            .with_formatter(SimpleFormatter::new()),
    );
    let logger = registry.get("svc");
    logger.add_handler(Arc::clone(&handler) as Arc<dyn Handler>);

    logger.info("dropped by the handler").unwrap();
    logger.severe("kept").unwrap();
    handler.flush().unwrap();

    let content = fs::read_to_string(&path).expect("read log file");
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains("kept"));
}

#[test]
fn test_basic_config_scenario() {
    let registry = Registry::new();
    basic_config(&registry);

    let root = registry.root();
    assert_eq!(root.level(), Level::Info);
    assert_eq!(root.handlers().len(), 1);

    // Children created afterwards inherit INFO and write through the
    // root's console handler without attaching anything themselves.
    let app = registry.get("app");
    assert_eq!(app.level(), Level::Info);
    assert!(app.handlers().is_empty());
    app.info("basic config smoke test").unwrap();
}

#[test]
fn test_filter_applies_per_logger() {
    let registry = Registry::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    registry
        .root()
        .add_handler(CollectingHandler::shared("root", Level::All, &seen));

    let child = registry.get("app");
    child.set_filter(Some(Box::new(|record: &Record| {
        record.message().is_some_and(|m| !m.contains("secret"))
    })));

    child.info("public").unwrap();
    child.info("a secret thing").unwrap();

    // The filtered record was dropped before fan-out and propagation.
    assert_eq!(*seen.lock(), ["root:INFO:public"]);
}
