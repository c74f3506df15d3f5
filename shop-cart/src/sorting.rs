//! Cart ordering by product attributes.
//!
//! Two stable algorithms are provided side by side: a partition-exchange
//! sort with a middle pivot and a top-down merge sort. For the same input,
//! key and direction they always produce the same permutation.

use serde::{Deserialize, Serialize};
use shop_catalog::Product;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::models::CartItem;

/// Product attribute to order by
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    Price,
    Weight,
    Category,
    Name,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Price,
        SortKey::Weight,
        SortKey::Category,
        SortKey::Name,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Price => "price",
            SortKey::Weight => "weight",
            SortKey::Category => "category",
            SortKey::Name => "name",
        }
    }
}

impl FromStr for SortKey {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| SortError::InvalidKey(s.to_string()))
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn is_descending(&self) -> bool {
        matches!(self, SortDirection::Descending)
    }
}

impl FromStr for SortDirection {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" | "ascending" => Ok(SortDirection::Ascending),
            "desc" | "descending" => Ok(SortDirection::Descending),
            other => Err(SortError::InvalidDirection(other.to_string())),
        }
    }
}

impl fmt::Display for SortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Sorting algorithm selector
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Quick,
    Merge,
}

impl SortAlgorithm {
    pub const ALL: [SortAlgorithm; 2] = [SortAlgorithm::Quick, SortAlgorithm::Merge];

    pub fn sort<T: Keyed + Clone>(
        &self,
        items: &[T],
        key: SortKey,
        direction: SortDirection,
    ) -> Vec<T> {
        match self {
            SortAlgorithm::Quick => quick_sort(items, key, direction),
            SortAlgorithm::Merge => merge_sort(items, key, direction),
        }
    }
}

impl FromStr for SortAlgorithm {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick" => Ok(SortAlgorithm::Quick),
            "merge" => Ok(SortAlgorithm::Merge),
            other => Err(SortError::InvalidAlgorithm(other.to_string())),
        }
    }
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortAlgorithm::Quick => f.write_str("quick"),
            SortAlgorithm::Merge => f.write_str("merge"),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SortError {
    #[error("Invalid sort key: {0:?} (expected price, weight, category or name)")]
    InvalidKey(String),

    #[error("Invalid sort direction: {0:?}")]
    InvalidDirection(String),

    #[error("Invalid sort algorithm: {0:?}")]
    InvalidAlgorithm(String),
}

/// Value of a sort key for one item.
///
/// Numbers compare by value, so `0.0` and `-0.0` are equal; NaN falls back
/// to `f64::total_cmp`. Text compares byte-wise. A key always yields the
/// same variant, so mixed comparisons only order the variants against each
/// other.
#[derive(Debug, Clone, Copy)]
pub enum KeyValue<'a> {
    Number(f64),
    Text(&'a str),
}

impl Ord for KeyValue<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (KeyValue::Number(a), KeyValue::Number(b)) => {
                a.partial_cmp(b).unwrap_or_else(|| a.total_cmp(b))
            }
            (KeyValue::Text(a), KeyValue::Text(b)) => a.cmp(b),
            (KeyValue::Number(_), KeyValue::Text(_)) => Ordering::Less,
            (KeyValue::Text(_), KeyValue::Number(_)) => Ordering::Greater,
        }
    }
}

impl PartialOrd for KeyValue<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for KeyValue<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for KeyValue<'_> {}

/// Anything that can be ordered by a `SortKey`
pub trait Keyed {
    fn key_value(&self, key: SortKey) -> KeyValue<'_>;
}

impl Keyed for Product {
    fn key_value(&self, key: SortKey) -> KeyValue<'_> {
        match key {
            SortKey::Price => KeyValue::Number(self.price),
            SortKey::Weight => KeyValue::Number(self.weight),
            SortKey::Category => KeyValue::Text(&self.category),
            SortKey::Name => KeyValue::Text(&self.name),
        }
    }
}

impl Keyed for CartItem {
    fn key_value(&self, key: SortKey) -> KeyValue<'_> {
        self.product.key_value(key)
    }
}

/// Partition-exchange sort around the middle element.
///
/// Items equal to the pivot keep their input order, which makes the sort
/// stable. Worst case is quadratic.
pub fn quick_sort<T: Keyed + Clone>(
    items: &[T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<T> {
    let refs: Vec<&T> = items.iter().collect();
    quick_sort_refs(refs, key, direction)
        .into_iter()
        .cloned()
        .collect()
}

fn quick_sort_refs<T: Keyed>(items: Vec<&T>, key: SortKey, direction: SortDirection) -> Vec<&T> {
    if items.len() <= 1 {
        return items;
    }

    let pivot = items[items.len() / 2].key_value(key);

    let mut less = Vec::new();
    let mut equal = Vec::new();
    let mut greater = Vec::new();

    for &item in &items {
        match item.key_value(key).cmp(&pivot) {
            Ordering::Less => less.push(item),
            Ordering::Equal => equal.push(item),
            Ordering::Greater => greater.push(item),
        }
    }

    let (head, tail) = if direction.is_descending() {
        (greater, less)
    } else {
        (less, greater)
    };

    let mut sorted = quick_sort_refs(head, key, direction);
    sorted.extend(equal);
    sorted.extend(quick_sort_refs(tail, key, direction));
    sorted
}

/// Top-down merge sort. Ties are taken from the left half first.
pub fn merge_sort<T: Keyed + Clone>(
    items: &[T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<T> {
    let refs: Vec<&T> = items.iter().collect();
    merge_sort_refs(&refs, key, direction)
        .into_iter()
        .cloned()
        .collect()
}

fn merge_sort_refs<'a, T: Keyed>(
    items: &[&'a T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a T> {
    if items.len() <= 1 {
        return items.to_vec();
    }

    let mid = items.len() / 2;
    let left = merge_sort_refs(&items[..mid], key, direction);
    let right = merge_sort_refs(&items[mid..], key, direction);

    merge(&left, &right, key, direction)
}

fn merge<'a, T: Keyed>(
    left: &[&'a T],
    right: &[&'a T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a T> {
    let mut result = Vec::with_capacity(left.len() + right.len());
    let (mut i, mut j) = (0, 0);

    while i < left.len() && j < right.len() {
        let ordering = left[i].key_value(key).cmp(&right[j].key_value(key));
        let take_left = match direction {
            SortDirection::Ascending => ordering != Ordering::Greater,
            SortDirection::Descending => ordering != Ordering::Less,
        };

        if take_left {
            result.push(left[i]);
            i += 1;
        } else {
            result.push(right[j]);
            j += 1;
        }
    }

    result.extend_from_slice(&left[i..]);
    result.extend_from_slice(&right[j..]);
    result
}
