/*
 * Responsibility
 * - /process-data の本体: batch の検証と変換
 * - handler から独立した pure function として保つ (request 非依存)
 */
use serde_json::{Map, Value};
use thiserror::Error;

/// Open-ended caller payload: string keys, arbitrary JSON values.
pub type Record = Map<String, Value>;

/// Keys reserved for processing metadata. Caller-supplied values under
/// these names are overwritten.
const PROCESSED_KEY: &str = "processed";
const TIMESTAMP_KEY: &str = "timestamp";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProcessingError {
    // The message text is the literal HTTP error body, do not reword.
    #[error("Data is required")]
    MissingData,
}

#[derive(Debug)]
pub struct ProcessingOutcome {
    pub original: Vec<Record>,
    pub processed: Vec<Record>,
    pub count: usize,
}

/// Stamps every record in the batch with `processed: true` and a
/// millisecond epoch `timestamp`, preserving order and all other fields.
///
/// `None` means the caller never supplied the batch field (absent or
/// JSON null) and is the only rejected input; an empty batch is valid.
pub fn process(batch: Option<Vec<Record>>) -> Result<ProcessingOutcome, ProcessingError> {
    let original = batch.ok_or(ProcessingError::MissingData)?;

    let processed: Vec<Record> = original.iter().map(|item| stamp(item)).collect();
    let count = processed.len();

    Ok(ProcessingOutcome {
        original,
        processed,
        count,
    })
}

// Copy all source keys first, then overwrite the reserved ones, so the
// metadata wins regardless of map key ordering. The clock is read per
// element; stamps are monotonically non-decreasing across the batch.
fn stamp(item: &Record) -> Record {
    let mut out = item.clone();
    out.insert(PROCESSED_KEY.to_string(), Value::Bool(true));
    out.insert(
        TIMESTAMP_KEY.to_string(),
        Value::from(chrono::Utc::now().timestamp_millis()),
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record(v: Value) -> Record {
        v.as_object().expect("test record must be an object").clone()
    }

    #[test]
    fn missing_batch_is_rejected() {
        let err = process(None).unwrap_err();
        assert_eq!(err, ProcessingError::MissingData);
        assert_eq!(err.to_string(), "Data is required");
    }

    #[test]
    fn empty_batch_yields_empty_outcome() {
        let outcome = process(Some(vec![])).unwrap();
        assert!(outcome.original.is_empty());
        assert!(outcome.processed.is_empty());
        assert_eq!(outcome.count, 0);
    }

    #[test]
    fn count_matches_input_and_original_is_unchanged() {
        let batch = vec![
            record(json!({"id": 1})),
            record(json!({"id": 2, "name": "x"})),
            record(json!({})),
        ];
        let outcome = process(Some(batch.clone())).unwrap();

        assert_eq!(outcome.count, 3);
        assert_eq!(outcome.original, batch);
    }

    #[test]
    fn every_record_keeps_its_fields_and_gains_metadata() {
        let batch = vec![record(json!({"id": 1, "nested": {"a": [1, 2]}}))];
        let outcome = process(Some(batch)).unwrap();

        let item = &outcome.processed[0];
        assert_eq!(item["id"], json!(1));
        assert_eq!(item["nested"], json!({"a": [1, 2]}));
        assert_eq!(item["processed"], json!(true));
        assert!(item["timestamp"].is_i64());
    }

    #[test]
    fn reserved_keys_are_overwritten() {
        let batch = vec![
            record(json!({"id": 1})),
            record(json!({"id": 2, "processed": false, "timestamp": "yesterday"})),
        ];
        let outcome = process(Some(batch)).unwrap();

        assert_eq!(outcome.processed[1]["processed"], json!(true));
        assert!(outcome.processed[1]["timestamp"].is_i64());
        // original keeps the caller's values
        assert_eq!(outcome.original[1]["processed"], json!(false));
    }

    #[test]
    fn order_is_preserved() {
        let batch: Vec<Record> = (0..16).map(|i| record(json!({"id": i}))).collect();
        let outcome = process(Some(batch)).unwrap();

        for (i, item) in outcome.processed.iter().enumerate() {
            assert_eq!(item["id"], json!(i));
        }
    }

    #[test]
    fn timestamps_are_monotonically_non_decreasing() {
        let batch: Vec<Record> = (0..8).map(|i| record(json!({"id": i}))).collect();
        let outcome = process(Some(batch)).unwrap();

        let stamps: Vec<i64> = outcome
            .processed
            .iter()
            .map(|item| item["timestamp"].as_i64().unwrap())
            .collect();
        assert!(stamps.windows(2).all(|w| w[0] <= w[1]));
    }
}
