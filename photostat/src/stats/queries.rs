//! The public query layer: the six statistics the feed analysis exposes.

use serde::{Deserialize, Serialize};

use crate::error::{PhotostatError, Result};
use crate::gallery::Gallery;
use crate::stats::value::StatValue;
use crate::stats::{aggregate, extract, words};

/// The number of photos in the feed.
pub fn image_count(gallery: &Gallery) -> usize {
    extract::titles(gallery).len()
}

/// All unique alphanumeric tag words, lower-cased and sorted ascending.
pub fn alphanumeric_tags_uniq(gallery: &Gallery) -> Vec<String> {
    let combined = words::combine_to_words(&extract::tag_strings(gallery));
    let alphanumeric: Vec<String> = combined
        .into_iter()
        .filter(|word| words::is_alphanumeric(word))
        .collect();
    words::lower_unique_sorted(&alphanumeric)
}

/// All tag words that fail the alphanumeric classification, in feed order.
///
/// Unlike the alphanumeric path these keep their original case and are
/// neither de-duplicated nor sorted.
pub fn non_alphanumeric_tags(gallery: &Gallery) -> Vec<String> {
    words::combine_to_words(&extract::tag_strings(gallery))
        .into_iter()
        .filter(|word| !words::is_alphanumeric(word))
        .collect()
}

/// The arithmetic mean of title lengths, counted in Unicode code points.
pub fn avg_title_length(gallery: &Gallery) -> Result<f64> {
    let titles = extract::titles(gallery);
    if titles.is_empty() {
        return Err(PhotostatError::EmptyGallery);
    }
    let total: usize = titles.iter().map(|title| title.chars().count()).sum();
    Ok(total as f64 / titles.len() as f64)
}

/// The tag word at the given zero-based rank in the descending frequency
/// ranking of ALL tag words (rank 0 is the most common).
///
/// The ranking is built over every word, not just the alphanumeric ones,
/// and ties break by first-seen order.
pub fn common_tag_by_rank(rank: usize, gallery: &Gallery) -> Result<String> {
    let combined = words::combine_to_words(&extract::tag_strings(gallery));
    let ranking = aggregate::rank_descending_by_count(aggregate::count_by_lowercase(&combined));
    let distinct = ranking.len();
    ranking
        .into_iter()
        .nth(rank)
        .map(|ranked| ranked.word)
        .ok_or_else(|| PhotostatError::rank_out_of_range(rank, distinct))
}

/// The title of the photo with the earliest capture date.
pub fn oldest_photo_title(gallery: &Gallery) -> Result<String> {
    let sorted = aggregate::sort_by_date_ascending(aggregate::title_date_pairs(gallery))?;
    sorted
        .into_iter()
        .next()
        .map(|pair| pair.title)
        .ok_or(PhotostatError::EmptyGallery)
}

/// Names one of the six statistics so the verification layer can evaluate
/// it against a feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "query", rename_all = "snake_case")]
pub enum StatQuery {
    /// [`image_count`].
    ImageCount,
    /// [`alphanumeric_tags_uniq`].
    AlphanumericTagsUniq,
    /// [`non_alphanumeric_tags`].
    NonAlphanumericTags,
    /// [`avg_title_length`].
    AvgTitleLength,
    /// [`common_tag_by_rank`] at the given zero-based rank.
    CommonTagByRank {
        /// Zero-based position in the descending frequency ranking.
        rank: usize,
    },
    /// [`oldest_photo_title`].
    OldestPhotoTitle,
}

impl StatQuery {
    /// Evaluates the named statistic over a feed.
    pub fn evaluate(&self, gallery: &Gallery) -> Result<StatValue> {
        match self {
            StatQuery::ImageCount => Ok(image_count(gallery).into()),
            StatQuery::AlphanumericTagsUniq => Ok(alphanumeric_tags_uniq(gallery).into()),
            StatQuery::NonAlphanumericTags => Ok(non_alphanumeric_tags(gallery).into()),
            StatQuery::AvgTitleLength => avg_title_length(gallery).map(StatValue::from),
            StatQuery::CommonTagByRank { rank } => {
                common_tag_by_rank(*rank, gallery).map(StatValue::from)
            }
            StatQuery::OldestPhotoTitle => oldest_photo_title(gallery).map(StatValue::from),
        }
    }

    /// A short identifier used in logs and reports.
    pub fn name(&self) -> &'static str {
        match self {
            StatQuery::ImageCount => "image_count",
            StatQuery::AlphanumericTagsUniq => "alphanumeric_tags_uniq",
            StatQuery::NonAlphanumericTags => "non_alphanumeric_tags",
            StatQuery::AvgTitleLength => "avg_title_length",
            StatQuery::CommonTagByRank { .. } => "common_tag_by_rank",
            StatQuery::OldestPhotoTitle => "oldest_photo_title",
        }
    }
}
