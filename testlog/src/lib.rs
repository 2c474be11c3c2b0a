//! Log collection support for tests.
//!
//! [`LogAgg`] is an append-only, mutex-guarded collector implementing
//! [`std::io::Write`], so it can stand in for any writer-based log sink.
//! Entries are kept in append order; beyond mutual exclusion no ordering or
//! delivery guarantees are made, which is all a test needs.

use std::io::{self, Write};
use std::sync::Mutex;

use regex::Regex;
use serde_json::Value;

/// A very basic log aggregation writer which can be used to find entries.
/// Really only useful in tests, and not actually specific to logging.
#[derive(Debug, Default)]
pub struct LogAgg {
    entries: Mutex<Vec<String>>,
}

impl LogAgg {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all entries.
    pub fn reset(&self) {
        self.lock().clear();
    }

    /// Returns the first entry matching `pattern`, if any.
    ///
    /// # Panics
    ///
    /// Panics when `pattern` is not a valid regular expression.
    pub fn find(&self, pattern: &str) -> Option<String> {
        let re = Regex::new(pattern).expect("valid search pattern");
        self.lock().iter().find(|entry| re.is_match(entry)).cloned()
    }

    /// Returns the first entry matching `pattern`, decoded as a JSON value.
    /// `None` when no entry matches or the matching line is not JSON.
    pub fn find_json(&self, pattern: &str) -> Option<Value> {
        let line = self.find(pattern)?;
        serde_json::from_str(&line).ok()
    }

    /// Returns a copy of all entries, in append order.
    pub fn entries(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<String>> {
        self.entries.lock().expect("log aggregation lock poisoned")
    }

    fn push_entry(&self, entry: &[u8]) -> io::Result<usize> {
        self.lock().push(String::from_utf8_lossy(entry).into_owned());
        Ok(entry.len())
    }
}

impl Write for LogAgg {
    fn write(&mut self, entry: &[u8]) -> io::Result<usize> {
        self.push_entry(entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Shared references write too, so one collector can serve several writers
/// at once.
impl Write for &LogAgg {
    fn write(&mut self, entry: &[u8]) -> io::Result<usize> {
        self.push_entry(entry)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collects_entries_in_append_order() {
        let mut agg = LogAgg::new();
        agg.write_all(b"first entry").unwrap();

        let mut writer = &agg;
        writer.write_all(b"second entry").unwrap();

        assert_eq!(agg.entries(), ["first entry", "second entry"]);
        assert_eq!(agg.len(), 2);
    }

    #[test]
    fn find_matches_a_pattern() {
        let agg = LogAgg::new();
        let mut writer = &agg;
        writeln!(writer, "connection from 10.0.0.7").unwrap();
        writeln!(writer, "listener stopped").unwrap();

        let entry = agg.find(r"connection from \d+").unwrap();
        assert!(entry.contains("10.0.0.7"));
        assert!(agg.find("no such entry").is_none());
    }

    #[test]
    fn find_json_decodes_the_matching_line() {
        let agg = LogAgg::new();
        let mut writer = &agg;
        writeln!(writer, r#"{{"level":"info","msg":"started","port":3306}}"#).unwrap();

        let decoded = agg.find_json("started").unwrap();
        assert_eq!(decoded["level"], "info");
        assert_eq!(decoded["port"], 3306);
    }

    #[test]
    fn reset_clears_everything() {
        let agg = LogAgg::new();
        let mut writer = &agg;
        writer.write_all(b"entry").unwrap();

        agg.reset();
        assert!(agg.is_empty());
    }

    #[test]
    fn concurrent_writers_do_not_lose_entries() {
        let agg = LogAgg::new();

        std::thread::scope(|scope| {
            for worker in 0..8 {
                let mut writer = &agg;
                scope.spawn(move || {
                    for i in 0..100 {
                        writeln!(writer, "worker {worker} entry {i}").unwrap();
                    }
                });
            }
        });

        assert_eq!(agg.len(), 800);
        assert!(agg.find("worker 7 entry 99").is_some());
    }
}
