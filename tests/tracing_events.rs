//! Tracing output for failed checks
#![cfg(feature = "tracing")]

use std::io::Write;
use std::sync::{Arc, Mutex};

use fieldcheck::{attrs, RuleSet, Value};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

fn with_captured_logs<F: FnOnce()>(f: F) -> String {
    let captured = Captured::default();
    let writer = captured.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    captured.text()
}

#[test]
fn test_failed_rules_emit_debug_events() {
    let rules = RuleSet::new()
        .not_blank("name")
        .is_in(vec![Value::from("a")], "choice");
    let form = attrs! { "choice" => "z" };

    let logs = with_captured_logs(|| {
        assert!(rules.validate(&form).is_failure());
    });

    assert!(logs.contains("field validation failed"));
    assert!(logs.contains("not_in"));
    assert!(logs.contains("rule set applied"));
}

#[test]
fn test_passing_rules_emit_no_failures() {
    let form = attrs! { "name" => "Ada" };
    let logs = with_captured_logs(|| {
        assert!(RuleSet::new().not_blank("name").validate(&form).is_success());
    });
    assert!(!logs.contains("field validation failed"));
}
