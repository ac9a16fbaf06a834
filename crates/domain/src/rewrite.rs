use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// One domain-to-answer mapping instruction understood by the DNS
/// management server. Wire shape: `{"domain": ..., "answer": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteEntry {
    pub domain: String,
    pub answer: String,
}

impl RewriteEntry {
    pub fn new(domain: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            answer: answer.into(),
        }
    }
}

/// The complete domain → answer mapping a run intends the server to reflect.
///
/// Insertion is last-write-wins: a domain appearing in several lists keeps
/// the answer folded in last. Iteration is sorted by domain, which gives the
/// reconciler a stable order and reproducible progress logs.
#[derive(Debug, Clone, Default)]
pub struct DesiredState {
    entries: BTreeMap<String, String>,
}

impl DesiredState {
    pub fn insert(&mut self, domain: impl Into<String>, answer: impl Into<String>) {
        self.entries.insert(domain.into(), answer.into());
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn answer_for(&self, domain: &str) -> Option<&str> {
        self.entries.get(domain).map(String::as_str)
    }

    /// Entries in domain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(d, a)| (d.as_str(), a.as_str()))
    }

    /// Materialize as a list of entries, in domain order.
    pub fn to_entries(&self) -> Vec<RewriteEntry> {
        self.entries
            .iter()
            .map(|(d, a)| RewriteEntry::new(d.clone(), a.clone()))
            .collect()
    }
}

impl FromIterator<(String, String)> for DesiredState {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut state = Self::default();
        for (domain, answer) in iter {
            state.insert(domain, answer);
        }
        state
    }
}

/// The server's rewrite table as observed at the start of the apply phase.
/// Snapshotted once per run and treated as read-only ground truth.
#[derive(Debug, Clone, Default)]
pub struct RewriteTable {
    entries: HashMap<String, String>,
}

impl RewriteTable {
    /// Fold a list response into a table. The last occurrence of a domain
    /// wins, matching how the server itself resolves duplicates.
    pub fn from_entries(entries: Vec<RewriteEntry>) -> Self {
        let mut table = HashMap::with_capacity(entries.len());
        for entry in entries {
            table.insert(entry.domain, entry.answer);
        }
        Self { entries: table }
    }

    pub fn answer_for(&self, domain: &str) -> Option<&str> {
        self.entries.get(domain).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Counters for one reconciliation run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub processed: usize,
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
}
