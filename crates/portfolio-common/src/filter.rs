/// Project filtering and ordering.
///
/// A view over the fixed project collection is a pure function of
/// `(records, FilterState)`:
/// 1. keep records whose `title + summary + tags.join(" ")` contains the query,
///    compared case-insensitively;
/// 2. if a tag filter is set, keep records carrying exactly that tag;
/// 3. order by descending rating (stable) or by title under a
///    diacritic-aware collation.
use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::PortfolioError;
use crate::model::ProjectRecord;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortMode {
    /// Descending rating, source order among equal ratings.
    #[default]
    Relevance,
    /// Ascending title.
    Alphabetical,
}

impl SortMode {
    /// The value used by the sort selector.
    pub fn key(self) -> &'static str {
        match self {
            SortMode::Relevance => "relevance",
            SortMode::Alphabetical => "alpha",
        }
    }
}

impl fmt::Display for SortMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for SortMode {
    type Err = PortfolioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "relevance" | "etoiles" => Ok(SortMode::Relevance),
            "alpha" | "alphabetical" => Ok(SortMode::Alphabetical),
            other => Err(PortfolioError::UnknownSortMode(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct FilterState {
    pub query: String,
    /// `None` means no tag filter.
    pub tag_filter: Option<String>,
    pub sort_mode: SortMode,
}

/// The state a freshly mounted view starts with, and what the reset action restores.
pub fn reset_filter_state() -> FilterState {
    FilterState::default()
}

/// Normalize a tag selector value: an empty selection clears the filter.
pub fn tag_selection(value: Option<&str>) -> Option<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .map(str::to_string)
}

/// Visible subset of `records` for `state`, in display order.
pub fn compute_visible_projects<'a>(
    records: &'a [ProjectRecord],
    state: &FilterState,
) -> Vec<&'a ProjectRecord> {
    visible_indices(records, state)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}

/// Distinct tags across all records, in first-appearance order.
pub fn list_available_tags(records: &[ProjectRecord]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    records
        .iter()
        .flat_map(|r| r.tags.iter())
        .filter(|t| seen.insert(t.as_str()))
        .cloned()
        .collect()
}

fn visible_indices(records: &[ProjectRecord], state: &FilterState) -> Vec<usize> {
    let needle = state.query.to_lowercase();

    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, r)| needle.is_empty() || haystack(r).contains(&needle))
        .filter(|(_, r)| match &state.tag_filter {
            Some(tag) => r.tags.iter().any(|t| t == tag),
            None => true,
        })
        .map(|(i, _)| i)
        .collect();

    // `sort_by` is stable, which is what keeps equal ratings in source order.
    match state.sort_mode {
        SortMode::Relevance => {
            indices.sort_by(|&a, &b| records[b].rating.cmp(&records[a].rating));
        }
        SortMode::Alphabetical => {
            indices.sort_by(|&a, &b| collate(&records[a].title, &records[b].title));
        }
    }

    indices
}

fn haystack(record: &ProjectRecord) -> String {
    let mut text = String::with_capacity(record.title.len() + record.summary.len() + 32);
    text.push_str(&record.title);
    text.push_str(&record.summary);
    text.push_str(&record.tags.join(" "));
    text.to_lowercase()
}

/// Locale-aware title comparison.
///
/// Primary level ignores case and Latin diacritics ("Détection" sorts with
/// "detection") and ranks whitespace, then punctuation and symbols, then
/// digits, then letters. Secondary level separates accented from plain
/// letters, tertiary level puts lowercase before uppercase.
pub fn collate(a: &str, b: &str) -> Ordering {
    let primary = fold(a)
        .chars()
        .map(primary_weight)
        .cmp(fold(b).chars().map(primary_weight));
    if primary != Ordering::Equal {
        return primary;
    }
    let secondary = a.to_lowercase().cmp(&b.to_lowercase());
    if secondary != Ordering::Equal {
        return secondary;
    }
    a.chars()
        .zip(b.chars())
        .map(|(x, y)| match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        })
        .find(|o| *o != Ordering::Equal)
        .unwrap_or_else(|| a.cmp(b))
}

fn primary_weight(c: char) -> (u8, char) {
    let class = if c.is_whitespace() {
        0
    } else if !c.is_alphanumeric() {
        1
    } else if c.is_numeric() {
        2
    } else {
        3
    };
    (class, c)
}

fn fold(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().flat_map(char::to_lowercase) {
        match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' | 'ā' | 'ă' | 'ą' => out.push('a'),
            'æ' => out.push_str("ae"),
            'ç' | 'ć' | 'č' => out.push('c'),
            'ď' | 'đ' => out.push('d'),
            'è' | 'é' | 'ê' | 'ë' | 'ē' | 'ė' | 'ę' | 'ě' => out.push('e'),
            'ì' | 'í' | 'î' | 'ï' | 'ī' | 'į' => out.push('i'),
            'ł' => out.push('l'),
            'ñ' | 'ń' | 'ň' => out.push('n'),
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' | 'ø' | 'ō' | 'ő' => out.push('o'),
            'œ' => out.push_str("oe"),
            'ř' => out.push('r'),
            'ś' | 'š' | 'ş' => out.push('s'),
            'ß' => out.push_str("ss"),
            'ť' | 'ţ' => out.push('t'),
            'ù' | 'ú' | 'û' | 'ü' | 'ū' | 'ů' | 'ű' | 'ų' => out.push('u'),
            'ý' | 'ÿ' => out.push('y'),
            'ź' | 'ż' | 'ž' => out.push('z'),
            other => out.push(other),
        }
    }
    out
}

struct Memo {
    state: FilterState,
    indices: Vec<usize>,
}

/// A project collection plus the last computed view.
///
/// Repeating a lookup with an unchanged state reuses the previous ordering;
/// any other state is computed from scratch. Output always equals
/// [`compute_visible_projects`].
pub struct ProjectFilterView {
    records: Arc<[ProjectRecord]>,
    last: Option<Memo>,
}

impl ProjectFilterView {
    pub fn new(records: Arc<[ProjectRecord]>) -> Self {
        Self {
            records,
            last: None,
        }
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn visible(&mut self, state: &FilterState) -> Vec<&ProjectRecord> {
        if self.last.as_ref().is_some_and(|memo| memo.state == *state) {
            trace!(query = %state.query, "filter view cache hit");
        } else {
            let indices = visible_indices(&self.records, state);
            self.last = Some(Memo {
                state: state.clone(),
                indices,
            });
        }

        let indices = self
            .last
            .as_ref()
            .map(|memo| memo.indices.as_slice())
            .unwrap_or_default();
        indices.iter().map(|&i| &self.records[i]).collect()
    }

    pub fn available_tags(&self) -> Vec<String> {
        list_available_tags(&self.records)
    }
}
