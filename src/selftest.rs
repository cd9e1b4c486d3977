// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Built-in self test run by the `test` command.
//!
//! Each check builds a fresh index, exercises one behavior and prints a
//! `[PASS]` or `[FAIL]` line. Nothing touches the session's own index. The
//! load check writes a scratch word list to the temp directory and removes it.

use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::data_structures::prefix_index::{PrefixIndex, Prediction};
use crate::loader::BulkLoader;

/// Outcome counts of a self test run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelfTestReport {
    /// Checks that held
    pub passed: usize,
    /// Checks that did not
    pub failed: usize,
}

impl SelfTestReport {
    /// Returns `true` if no check failed.
    pub fn all_passed(&self) -> bool {
        self.failed == 0
    }
}

struct Checker<'a, W: Write> {
    out: &'a mut W,
    report: SelfTestReport,
}

impl<W: Write> Checker<'_, W> {
    fn check(&mut self, name: &str, passed: bool) -> std::io::Result<()> {
        if passed {
            self.report.passed += 1;
            writeln!(self.out, "[PASS] {name}")
        } else {
            self.report.failed += 1;
            writeln!(self.out, "[FAIL] {name}")
        }
    }
}

/// Distinguishes word list files of self tests running at the same time.
static RUN_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn scratch_path() -> PathBuf {
    let run = RUN_COUNTER.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir().join(format!(
        "prefix_dict_selftest_{}_{run}.txt",
        std::process::id()
    ))
}

fn has(predictions: &[Prediction], word: &str, frequency: i64) -> bool {
    predictions
        .iter()
        .any(|p| p.word == word && p.frequency == frequency)
}

/// Runs every built-in check, writing one line per check to `out`.
pub fn run<W: Write>(out: &mut W) -> std::io::Result<SelfTestReport> {
    let mut checker = Checker {
        out,
        report: SelfTestReport::default(),
    };

    // Insertion and exact lookup
    let mut index = PrefixIndex::new();
    index.insert("apple", 5);
    index.insert("app", 2);
    index.insert("application", 3);
    checker.check("Contains apple", index.contains("apple"))?;
    checker.check("Contains app", index.contains("app"))?;
    checker.check("Contains application", index.contains("application"))?;
    checker.check("Prefix-only path is not a word", !index.contains("appl"))?;
    checker.check("Missing word", !index.contains("apples"))?;

    // Frequency accumulation
    let mut index = PrefixIndex::new();
    index.insert("banana", 2);
    index.insert("banana", 3);
    let results = index.predict("ban", 5);
    checker.check(
        "Frequency accumulation",
        results == vec![Prediction::new("banana", 5)],
    )?;

    // Ranked prediction
    let mut index = PrefixIndex::new();
    index.insert("car", 2);
    index.insert("cat", 5);
    index.insert("carbon", 4);
    index.insert("castle", 1);
    let results = index.predict("ca", 10);
    checker.check(
        "Predict order by frequency",
        results.first() == Some(&Prediction::new("cat", 5)),
    )?;
    checker.check("Predict returns all matches", results.len() == 4)?;
    checker.check("Predict honors limit", index.predict("ca", 2).len() == 2)?;

    // Bulk load from a word list on disk
    let mut index = PrefixIndex::new();
    let path = scratch_path();
    let loaded = std::fs::write(&path, "alpha 10\nbeta 5\nalphabet 2\n").is_ok()
        && BulkLoader::default().load_path(&mut index, &path).is_ok();
    if let Err(err) = std::fs::remove_file(&path) {
        tracing::debug!(path = %path.display(), error = %err, "self test word list not removed");
    }
    checker.check("Load file success", loaded)?;
    checker.check("Contains alpha from file", index.contains("alpha"))?;
    checker.check("Contains alphabet from file", index.contains("alphabet"))?;
    let results = index.predict("a", 10);
    checker.check("Frequency from file correct", has(&results, "alpha", 10))?;

    // Empty and missing cases
    let mut index = PrefixIndex::new();
    index.insert("dog", 3);
    checker.check("Predict with missing prefix", index.predict("cat", 5).is_empty())?;
    checker.check(
        "Predict with empty prefix includes existing words",
        has(&index.predict("", 5), "dog", 3),
    )?;

    Ok(checker.report)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_test_passes() {
        let mut out = Vec::new();
        let report = run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(report.all_passed(), "self test output:\n{text}");
        assert_eq!(report.passed, 15);
        assert_eq!(text.lines().count(), 15);
        assert!(text.lines().all(|line| line.starts_with("[PASS] ")));
        assert!(text.contains("[PASS] Load file success"));
    }
}
