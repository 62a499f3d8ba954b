use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use tracing::debug;

use crate::utils::datetime::next_occurrence;
use crate::utils::validation::parse_birthday;

/// A stored (name, day-month) pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BirthdayRecord {
    pub name: String,
    pub day: u32,
    pub month: u32,
}

impl BirthdayRecord {
    /// The canonical `DD-MM` form used in the record file and in replies.
    pub fn date_key(&self) -> String {
        format!("{:02}-{:02}", self.day, self.month)
    }

    fn matches(&self, name: &str, day: u32, month: u32) -> bool {
        self.day == day && self.month == month && self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Raw CSV row before validation. Field names match the file header.
#[derive(Debug, Deserialize)]
struct RawRecord {
    name: String,
    birthday: String,
}

/// A record resolved to its next calendar occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpcomingBirthday {
    pub record: BirthdayRecord,
    pub date: NaiveDate,
}

/// Outcome of an add request that did not fail on I/O.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    Duplicate,
}

/// CSV-backed list of birthday records.
///
/// Every mutation takes the single record lock and holds it across the file
/// I/O it implies, so a reload cannot interleave with an add.
pub struct BirthdayStore {
    path: PathBuf,
    records: Mutex<Vec<BirthdayRecord>>,
}

impl BirthdayStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            records: Mutex::new(Vec::new()),
        }
    }

    /// Replaces the in-memory list with the contents of the record file.
    ///
    /// Rows without a valid `DD-MM` birthday or a name are skipped. On a read
    /// error the previous in-memory contents are kept.
    pub async fn load(&self) -> Result<usize> {
        let mut records = self.records.lock().await;
        let contents = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        let fresh = parse_records(&contents);
        let count = fresh.len();
        *records = fresh;
        Ok(count)
    }

    /// Appends a record to the file and, only once that write succeeded, to
    /// the in-memory list.
    pub async fn add(&self, name: &str, day: u32, month: u32) -> Result<AddOutcome> {
        let mut records = self.records.lock().await;

        if records.iter().any(|r| r.matches(name, day, month)) {
            return Ok(AddOutcome::Duplicate);
        }

        let record = BirthdayRecord {
            name: name.to_string(),
            day,
            month,
        };
        self.append_to_file(&record).await?;
        records.push(record);
        Ok(AddOutcome::Added)
    }

    /// Records whose next occurrence falls within `window_days` of the
    /// reference date (inclusive), ascending by date.
    pub async fn upcoming(&self, reference: NaiveDate, window_days: i64) -> Vec<UpcomingBirthday> {
        let records = self.records.lock().await;
        let mut upcoming: Vec<UpcomingBirthday> = records
            .iter()
            .filter_map(|record| {
                let date = next_occurrence(record.day, record.month, reference)?;
                ((date - reference).num_days() <= window_days).then(|| UpcomingBirthday {
                    record: record.clone(),
                    date,
                })
            })
            .collect();
        upcoming.sort_by(|a, b| {
            a.date
                .cmp(&b.date)
                .then_with(|| a.record.name.cmp(&b.record.name))
        });
        upcoming
    }

    /// A point-in-time copy of the record list for the reminder sweep.
    pub async fn snapshot(&self) -> Vec<BirthdayRecord> {
        self.records.lock().await.clone()
    }

    /// Number of records currently in memory.
    pub async fn record_count(&self) -> usize {
        self.records.lock().await.len()
    }

    async fn append_to_file(&self, record: &BirthdayRecord) -> Result<()> {
        // A missing or empty file gets the header row first, so the next
        // reload sees named columns.
        let needs_header = match tokio::fs::metadata(&self.path).await {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };

        let mut buf = Vec::new();
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(&mut buf);
            if needs_header {
                writer
                    .write_record(["name", "birthday"])
                    .context("failed to encode header row")?;
            }
            writer
                .write_record([record.name.as_str(), record.date_key().as_str()])
                .context("failed to encode record row")?;
            writer.flush().context("failed to encode record row")?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .append(true)
            .create(true)
            .open(&self.path)
            .await
            .with_context(|| format!("failed to open {} for append", self.path.display()))?;
        file.write_all(&buf)
            .await
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        file.flush()
            .await
            .with_context(|| format!("failed to append to {}", self.path.display()))?;
        Ok(())
    }
}

fn parse_records(contents: &str) -> Vec<BirthdayRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(contents.as_bytes());

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRecord>() {
        let raw = match row {
            Ok(raw) => raw,
            Err(e) => {
                debug!("Skipping unparsable row: {}", e);
                continue;
            }
        };
        let name = raw.name.trim();
        if name.is_empty() {
            debug!("Skipping row with empty name");
            continue;
        }
        match parse_birthday(&raw.birthday) {
            Ok((day, month)) => records.push(BirthdayRecord {
                name: name.to_string(),
                day,
                month,
            }),
            Err(e) => debug!("Skipping row for '{}': {}", name, e),
        }
    }
    records
}
