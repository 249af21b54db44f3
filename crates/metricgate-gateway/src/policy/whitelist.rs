//! Metric name whitelist.
//!
//! File format: one metric name per line. Surrounding whitespace is trimmed,
//! blank lines and lines starting with `#` are skipped. Every remaining line
//! must be a valid metric name or the whole file is rejected.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use metricgate_core::error::{MetricGateError, Result};
use metricgate_core::validate::NameValidator;

#[derive(Debug, Clone, Default)]
pub struct Whitelist {
    names: HashSet<String>,
}

impl Whitelist {
    pub fn load_from_file(path: &Path, names: &NameValidator) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            MetricGateError::Config(format!("whitelist file error ({}): {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(file), names)
    }

    pub fn from_reader<R: BufRead>(reader: R, names: &NameValidator) -> Result<Self> {
        let mut out = HashSet::new();
        for line in reader.lines() {
            let line =
                line.map_err(|e| MetricGateError::Config(format!("whitelist read error: {e}")))?;
            let name = line.trim();
            if name.is_empty() || name.starts_with('#') {
                continue;
            }
            if !names.is_valid(name) {
                return Err(MetricGateError::Config(format!(
                    "invalid metric name in whitelist: {name}"
                )));
            }
            out.insert(name.to_string());
        }
        Ok(Self { names: out })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in sorted order (startup logging).
    pub fn sorted(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.names.iter().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

impl<S: Into<String>> FromIterator<S> for Whitelist {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Gate check. Runs after name validation; no whitelist means allow all.
pub fn is_allowed(name: &str, whitelist: Option<&Whitelist>) -> bool {
    match whitelist {
        None => true,
        Some(w) => w.contains(name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use metricgate_core::validate::METRIC_NAME_TRAILING;

    fn names() -> NameValidator {
        NameValidator::new(METRIC_NAME_TRAILING).unwrap()
    }

    #[test]
    fn skips_comments_and_blanks() {
        let src = "# allowed metrics\n\n  cpu.load  \n#mem.used\nrequests.total\n";
        let w = Whitelist::from_reader(src.as_bytes(), &names()).unwrap();
        assert_eq!(w.sorted(), vec!["cpu.load", "requests.total"]);
        assert!(!w.contains("mem.used"));
    }

    #[test]
    fn invalid_entry_rejects_file() {
        let src = "cpu.load\nCPU.Load\n";
        let err = Whitelist::from_reader(src.as_bytes(), &names()).unwrap_err();
        assert!(matches!(err, MetricGateError::Config(_)));
    }

    #[test]
    fn gate_disabled_allows_everything() {
        assert!(is_allowed("anything.at.all", None));
    }

    #[test]
    fn gate_enabled_requires_membership() {
        let w: Whitelist = ["cpu.load"].into_iter().collect();
        assert!(is_allowed("cpu.load", Some(&w)));
        assert!(!is_allowed("mem.used", Some(&w)));
    }

    #[test]
    fn empty_file_allows_nothing() {
        let w = Whitelist::from_reader("# nothing\n".as_bytes(), &names()).unwrap();
        assert!(w.is_empty());
        assert!(!is_allowed("cpu.load", Some(&w)));
    }
}
