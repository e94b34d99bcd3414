// WHY: CSV lexicon loading lives at the edge; the index itself never touches the filesystem
// Expected layout: header row, then `id,word,pos` records

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use std::path::Path;
use tracing::{debug, info, warn};

use super::DictionaryIndex;

/// Column holding the word
const WORD_COLUMN: usize = 1;
/// Column holding the POS tag
const TAG_COLUMN: usize = 2;

/// Parse `id,word,pos` CSV text into `(word, tag)` pairs
///
/// The first row is treated as a header. Rows with fewer than three fields are
/// skipped, as are rows the CSV reader cannot decode.
pub fn parse_dictionary_csv(text: &str) -> Result<Vec<(String, String)>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut pairs = Vec::new();
    let mut skipped = 0usize;

    for (row, record) in reader.records().enumerate() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                // WHY: one bad row must not discard an otherwise usable lexicon
                warn!("Skipping undecodable dictionary row {}: {}", row + 2, e);
                skipped += 1;
                continue;
            }
        };

        match (record.get(WORD_COLUMN), record.get(TAG_COLUMN)) {
            (Some(word), Some(tag)) => pairs.push((word.to_string(), tag.to_string())),
            _ => skipped += 1,
        }
    }

    debug!("Parsed {} dictionary pairs, skipped {} rows", pairs.len(), skipped);
    Ok(pairs)
}

/// Read a CSV lexicon from disk and build the index
pub async fn load_dictionary<P: AsRef<Path>>(path: P) -> Result<DictionaryIndex> {
    let path = path.as_ref();
    info!("Loading dictionary from {}", path.display());

    let text = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;

    let pairs = parse_dictionary_csv(&text)
        .with_context(|| format!("Failed to parse dictionary file {}", path.display()))?;

    Ok(DictionaryIndex::from_pairs(pairs))
}
