use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Aggregated meal counts for one date.
///
/// `caffeine` and `caffeine_students` always carry all five caffeine buckets, keyed by their
/// display label (`Tea`, `Coffee`, `Black Coffee`, `Black Tea`, `None`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct MealCountDto {
    /// Date the counts apply to, formatted `YYYY-MM-DD`
    pub date: String,
    pub veg: usize,
    pub non_veg: usize,
    pub veg_students: Vec<String>,
    pub non_veg_students: Vec<String>,
    pub caffeine: BTreeMap<String, usize>,
    pub caffeine_students: BTreeMap<String, Vec<String>>,
}
