//! Frequency and ordering aggregates over extracted feed values.

use std::collections::HashMap;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{PhotostatError, Result};
use crate::gallery::Gallery;

/// A tag word with its occurrence count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedWord {
    /// The lower-cased word.
    pub word: String,
    /// How many times it occurred across the feed.
    pub count: u64,
}

/// A title paired with its raw capture date, used for the oldest-photo
/// lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleDatePair {
    /// The record title.
    pub title: String,
    /// The capture date as it appears in the feed.
    pub date: String,
}

/// Tallies lower-cased word occurrences.
///
/// The tally lists distinct words in first-seen order, which is what makes
/// the descending rank's tie-break deterministic.
pub fn count_by_lowercase(words: &[String]) -> Vec<RankedWord> {
    let mut slots: HashMap<String, usize> = HashMap::new();
    let mut tally: Vec<RankedWord> = Vec::new();
    for word in words {
        let lowered = word.to_lowercase();
        match slots.get(&lowered) {
            Some(&slot) => tally[slot].count += 1,
            None => {
                slots.insert(lowered.clone(), tally.len());
                tally.push(RankedWord {
                    word: lowered,
                    count: 1,
                });
            }
        }
    }
    tally
}

/// Sorts a tally by count descending.
///
/// The sort is stable, so words with equal counts keep their first-seen
/// order from [`count_by_lowercase`].
pub fn rank_descending_by_count(mut tally: Vec<RankedWord>) -> Vec<RankedWord> {
    tally.sort_by(|a, b| b.count.cmp(&a.count));
    tally
}

/// Associates each title with its capture date, in feed order.
///
/// The pairing is keyed by title: a later record sharing a title overwrites
/// the earlier record's date while keeping the first record's position.
pub fn title_date_pairs(gallery: &Gallery) -> Vec<TitleDatePair> {
    let mut slots: HashMap<&str, usize> = HashMap::new();
    let mut pairs: Vec<TitleDatePair> = Vec::new();
    for item in &gallery.items {
        match slots.get(item.title.as_str()) {
            Some(&slot) => pairs[slot].date = item.date_taken.clone(),
            None => {
                slots.insert(item.title.as_str(), pairs.len());
                pairs.push(TitleDatePair {
                    title: item.title.clone(),
                    date: item.date_taken.clone(),
                });
            }
        }
    }
    pairs
}

/// Parses a feed capture date into an instant.
///
/// Accepts RFC 3339 (offset as given), `YYYY-MM-DD HH:MM:SS` (treated as
/// UTC), and bare `YYYY-MM-DD` (midnight UTC).
pub fn parse_capture_date(value: &str) -> Result<DateTime<Utc>> {
    if let Ok(stamped) = DateTime::parse_from_rfc3339(value) {
        return Ok(stamped.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(PhotostatError::malformed_date(
        value,
        "expected RFC 3339, `YYYY-MM-DD HH:MM:SS`, or `YYYY-MM-DD`",
    ))
}

/// Parses every capture date and sorts the pairs ascending.
///
/// The sort is stable: identical instants keep their relative input order.
/// A single malformed date aborts the whole sort.
pub fn sort_by_date_ascending(pairs: Vec<TitleDatePair>) -> Result<Vec<TitleDatePair>> {
    let mut keyed: Vec<(DateTime<Utc>, TitleDatePair)> = pairs
        .into_iter()
        .map(|pair| Ok((parse_capture_date(&pair.date)?, pair)))
        .collect::<Result<_>>()?;
    keyed.sort_by_key(|(instant, _)| *instant);
    Ok(keyed.into_iter().map(|(_, pair)| pair).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gallery::PhotoRecord;

    fn words(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|w| (*w).to_owned()).collect()
    }

    #[test]
    fn test_count_by_lowercase_merges_case_variants() {
        let tally = count_by_lowercase(&words(&["Dog", "dog", "puppy", "DOG"]));
        assert_eq!(
            tally,
            vec![
                RankedWord {
                    word: "dog".into(),
                    count: 3
                },
                RankedWord {
                    word: "puppy".into(),
                    count: 1
                },
            ]
        );
    }

    #[test]
    fn test_rank_ties_keep_first_seen_order() {
        let tally = count_by_lowercase(&words(&["summer", "beach", "dog", "beach", "summer"]));
        let ranked = rank_descending_by_count(tally);
        let order: Vec<&str> = ranked.iter().map(|r| r.word.as_str()).collect();
        // summer and beach tie at 2; summer was seen first.
        assert_eq!(order, vec!["summer", "beach", "dog"]);
    }

    #[test]
    fn test_duplicate_title_keeps_position_overwrites_date() {
        let gallery = Gallery {
            items: vec![
                PhotoRecord {
                    title: "Same".into(),
                    tags: String::new(),
                    date_taken: "2016-01-01 00:00:00".into(),
                },
                PhotoRecord {
                    title: "Other".into(),
                    tags: String::new(),
                    date_taken: "2016-02-01 00:00:00".into(),
                },
                PhotoRecord {
                    title: "Same".into(),
                    tags: String::new(),
                    date_taken: "2016-03-01 00:00:00".into(),
                },
            ],
        };

        let pairs = title_date_pairs(&gallery);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].title, "Same");
        assert_eq!(pairs[0].date, "2016-03-01 00:00:00");
        assert_eq!(pairs[1].title, "Other");
    }

    #[test]
    fn test_parse_capture_date_formats() {
        let rfc = parse_capture_date("2016-06-26T14:12:07-08:00").unwrap();
        let space = parse_capture_date("2016-06-26 22:12:07").unwrap();
        assert_eq!(rfc, space);

        let midnight = parse_capture_date("2016-06-26").unwrap();
        assert!(midnight < space);
    }

    #[test]
    fn test_parse_capture_date_rejects_garbage() {
        let err = parse_capture_date("yesterday").unwrap_err();
        assert!(matches!(err, PhotostatError::MalformedDate { value, .. } if value == "yesterday"));
    }

    #[test]
    fn test_sort_ascending_is_stable_on_equal_instants() {
        let pairs = vec![
            TitleDatePair {
                title: "A".into(),
                date: "2016-06-26 14:12:07".into(),
            },
            TitleDatePair {
                title: "B".into(),
                // The same instant written with an offset.
                date: "2016-06-26T14:12:07+00:00".into(),
            },
            TitleDatePair {
                title: "C".into(),
                date: "2015-01-01 00:00:00".into(),
            },
        ];

        let sorted = sort_by_date_ascending(pairs).unwrap();
        let order: Vec<&str> = sorted.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(order, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_sort_aborts_on_malformed_date() {
        let pairs = vec![TitleDatePair {
            title: "A".into(),
            date: "not-a-date".into(),
        }];
        assert!(sort_by_date_ascending(pairs).is_err());
    }
}
