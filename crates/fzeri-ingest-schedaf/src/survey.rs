//! Field survey over raw records: which codes each group label carries in
//! practice, with a sample value. Used to track catalogue schema drift.

use crate::xml::RawRecord;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SchemaSurvey {
    /// Group label (as written in the source) to field code to last seen value.
    groups: BTreeMap<String, BTreeMap<String, String>>,
    records: usize,
}

impl SchemaSurvey {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn observe(&mut self, record: &RawRecord) {
        self.records += 1;
        for paragraph in &record.paragraphs {
            let fields = self.groups.entry(paragraph.label.clone()).or_default();
            let all = paragraph
                .fields
                .iter()
                .chain(paragraph.repetitions.iter().flat_map(|r| r.fields.iter()));
            for field in all {
                let sample = fields.entry(field.code.clone()).or_default();
                let text = field.text.trim();
                if !text.is_empty() {
                    *sample = text.to_string();
                }
            }
        }
    }

    pub fn records(&self) -> usize {
        self.records
    }

    pub fn codes(&self, label: &str) -> impl Iterator<Item = (&str, &str)> {
        self.groups
            .get(label)
            .into_iter()
            .flat_map(|fields| fields.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// One label per line, each followed by tab-indented `CODE: sample` lines.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (label, fields) in &self.groups {
            let _ = writeln!(out, "{label}");
            for (code, sample) in fields {
                let _ = writeln!(out, "\t{code}: {sample}");
            }
        }
        out
    }
}

impl<'a> Extend<&'a RawRecord> for SchemaSurvey {
    fn extend<T: IntoIterator<Item = &'a RawRecord>>(&mut self, iter: T) {
        for record in iter {
            self.observe(record);
        }
    }
}
