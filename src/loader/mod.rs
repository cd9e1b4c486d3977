// Copyright (c) 2025 Prefix Dict Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Bulk loading of word lists.
//!
//! A word list holds one record per line, either `word` or `word frequency`.
//! Lines are trimmed and blank lines are skipped. Only the first two
//! whitespace-delimited fields are consulted. A frequency is read from the
//! leading integer of its field (`12abc` counts as 12); a field with no
//! leading integer, or no field at all, falls back to the configured default.
//!
//! Input is read as bytes. Lines that are not valid UTF-8 are decoded lossily
//! rather than aborting the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::config::loader::LoaderConfig;
use crate::data_structures::prefix_index::{PrefixIndex, SharedPrefixIndex};
use crate::error::{DictError, DictResult};

/// A parsed word list record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    /// The word to insert
    pub word: String,

    /// Increment to apply to the word's frequency
    pub frequency: i64,
}

/// Parses the integer at the start of `field`, ignoring anything after it.
///
/// An optional sign followed by ASCII digits is consumed. Returns `None` when
/// no digits lead the field or the value does not fit in `T`.
pub fn leading_integer<T: FromStr>(field: &str) -> Option<T> {
    let bytes = field.as_bytes();
    let sign = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    field[..sign + digits].parse().ok()
}

/// Iterator over the lines of a reader, decoding each line lossily.
///
/// Created by [`lossy_lines`].
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

/// Returns the lines of `reader` without their line terminators.
///
/// Unlike [`BufRead::lines`], a line that is not valid UTF-8 is not an error;
/// invalid sequences become U+FFFD.
pub fn lossy_lines<R: BufRead>(reader: R) -> LossyLines<R> {
    LossyLines {
        reader,
        buf: Vec::new(),
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = std::io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}

/// Parses one line of a word list.
///
/// Returns `None` for blank lines.
pub fn parse_record(line: &str, default_frequency: i64) -> Option<Record> {
    let mut fields = line.split_whitespace();
    let word = fields.next()?;
    let frequency = fields
        .next()
        .and_then(leading_integer::<i64>)
        .unwrap_or(default_frequency);

    Some(Record {
        word: word.to_string(),
        frequency,
    })
}

/// Summary of a completed bulk load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LoadReport {
    /// Number of records inserted
    pub records: usize,

    /// Number of blank lines skipped
    pub skipped: usize,
}

/// Reads word lists and inserts their records into a [`PrefixIndex`].
#[derive(Debug, Clone, Default)]
pub struct BulkLoader {
    config: LoaderConfig,
}

impl BulkLoader {
    /// Creates a loader with the given configuration.
    pub fn new(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Returns the loader configuration.
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Parses one line with this loader's normalization rules.
    pub fn parse_line(&self, line: &str) -> Option<Record> {
        let mut record = parse_record(line, self.config.default_frequency)?;
        if self.config.lowercase_words {
            record.word.make_ascii_lowercase();
        }
        Some(record)
    }

    /// Inserts every record from `reader` into `index`.
    ///
    /// Records read before an IO error stay inserted.
    pub fn load_reader<R: BufRead>(
        &self,
        index: &mut PrefixIndex,
        reader: R,
    ) -> std::io::Result<LoadReport> {
        let mut report = LoadReport::default();

        for line in lossy_lines(reader) {
            match self.parse_line(&line?) {
                Some(record) => {
                    index.insert(&record.word, record.frequency);
                    report.records += 1;
                }
                None => report.skipped += 1,
            }
        }

        Ok(report)
    }

    /// Opens the word list at `path` and inserts every record into `index`.
    ///
    /// # Returns
    ///
    /// * `Ok(LoadReport)` - If the whole file was read.
    /// * `Err(DictError::Load)` - If the file could not be opened or read.
    pub fn load_path<P: AsRef<Path>>(
        &self,
        index: &mut PrefixIndex,
        path: P,
    ) -> DictResult<LoadReport> {
        let path = path.as_ref();
        let load_error = |source: std::io::Error| DictError::Load {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(load_error)?;
        let report = self
            .load_reader(index, BufReader::new(file))
            .map_err(load_error)?;

        tracing::debug!(
            path = %path.display(),
            records = report.records,
            skipped = report.skipped,
            "word list loaded"
        );
        Ok(report)
    }

    /// Reads and parses the word list at `path` without touching any index.
    pub fn read_path<P: AsRef<Path>>(&self, path: P) -> DictResult<(Vec<Record>, LoadReport)> {
        let path = path.as_ref();
        let load_error = |source: std::io::Error| DictError::Load {
            path: path.to_path_buf(),
            source,
        };

        let reader = BufReader::new(File::open(path).map_err(load_error)?);
        let mut records = Vec::new();
        let mut report = LoadReport::default();
        for line in lossy_lines(reader) {
            match self.parse_line(&line.map_err(load_error)?) {
                Some(record) => records.push(record),
                None => report.skipped += 1,
            }
        }
        report.records = records.len();

        Ok((records, report))
    }

    /// Loads the word list at `path` into a shared index.
    ///
    /// The file is read and parsed before the lock is taken; all of its
    /// records are then inserted under a single lock.
    pub fn load_path_shared<P: AsRef<Path>>(
        &self,
        index: &SharedPrefixIndex,
        path: P,
    ) -> DictResult<LoadReport> {
        let (records, report) = self.read_path(path)?;
        index.with_index(|inner| {
            for record in &records {
                inner.insert(&record.word, record.frequency);
            }
        });
        Ok(report)
    }

    /// Loads several word lists in parallel into one fresh index.
    ///
    /// Frequencies of words that appear in more than one list accumulate.
    /// The first failing list aborts the whole load.
    pub fn load_all<P>(&self, paths: &[P]) -> DictResult<(PrefixIndex, LoadReport)>
    where
        P: AsRef<Path> + Sync,
    {
        let shared = SharedPrefixIndex::new();
        let target = &shared;

        let reports: Vec<DictResult<LoadReport>> = std::thread::scope(|scope| {
            let handles: Vec<_> = paths
                .iter()
                .map(|path| scope.spawn(move || self.load_path_shared(target, path)))
                .collect();
            handles
                .into_iter()
                .map(|handle| {
                    handle.join().unwrap_or_else(|_| {
                        Err(DictError::Custom("word list loader panicked".to_string()))
                    })
                })
                .collect()
        });

        let mut total = LoadReport::default();
        for report in reports {
            let report = report?;
            total.records += report.records;
            total.skipped += report.skipped;
        }

        let index = shared.try_into_inner().map_err(|_| {
            DictError::Custom("shared index still borrowed after load".to_string())
        })?;
        Ok((index, total))
    }
}
