use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::hand::Category;

/// Complete record of one draw evaluation.
/// Serialized to JSONL format for evaluation history storage and replay.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct EvalRecord {
    /// Unique identifier for this evaluation (format: YYYYMMDD-NNNNNN)
    pub deal_id: String,
    /// RNG seed when the deal came from a seeded deck
    pub seed: Option<u64>,
    /// The five dealt cards
    pub hand: Vec<Card>,
    /// The five replacement candidates
    pub pool: Vec<Card>,
    /// Best category found across all replacement patterns
    pub best: Category,
    /// Timestamp when the evaluation ran (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

pub fn format_deal_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct EvalLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl EvalLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                let _ = create_dir_all(parent);
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: "19700101".to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_deal_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &EvalRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
