//! Distribution Planner — splits a total question count into per-category quotas.
//!
//! Pure and deterministic: same input always yields the same quotas, and the
//! quotas always sum exactly to the requested total with every category ≥ 1.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::category::{Category, CATEGORY_COUNT};

/// Percentage share of the total allotted to each category, canonical order:
/// Technical 40%, Behavioral 20%, Situational 15%, Cultural/Personality 10%,
/// Problem-Solving 15%.
const SHARES: [f64; CATEGORY_COUNT] = [0.40, 0.20, 0.15, 0.10, 0.15];

/// Per-category question quotas summing exactly to the requested total.
///
/// Serializes as a JSON map keyed by display name, in canonical order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Distribution {
    quotas: [u32; CATEGORY_COUNT],
}

impl Distribution {
    /// Plans quotas for `num_questions`. Callers clamp to [5, 20] first.
    ///
    /// Each category starts at `max(1, floor(n * share))`. A shortfall is
    /// added entirely to Technical. An excess is removed one unit at a time
    /// from the currently largest quota, ties broken by canonical category
    /// order, never taking a quota below 1.
    pub fn plan(num_questions: u32) -> Distribution {
        let mut quotas = [0u32; CATEGORY_COUNT];
        for (quota, share) in quotas.iter_mut().zip(SHARES) {
            *quota = ((num_questions as f64 * share).floor() as u32).max(1);
        }

        let total: u32 = quotas.iter().sum();
        if total < num_questions {
            quotas[Category::Technical.index()] += num_questions - total;
        } else if total > num_questions {
            let mut excess = total - num_questions;
            while excess > 0 {
                // First category holding the current maximum wins the tie.
                let mut largest = 0;
                for i in 1..CATEGORY_COUNT {
                    if quotas[i] > quotas[largest] {
                        largest = i;
                    }
                }
                if quotas[largest] <= 1 {
                    // All quotas at the floor; cannot happen for n ≥ 5.
                    break;
                }
                quotas[largest] -= 1;
                excess -= 1;
            }
        }

        Distribution { quotas }
    }

    pub fn quota(&self, category: Category) -> u32 {
        self.quotas[category.index()]
    }

    pub fn total(&self) -> u32 {
        self.quotas.iter().sum()
    }

    /// Iterates (category, quota) pairs in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, u32)> {
        Category::ALL.into_iter().zip(self.quotas)
    }
}

impl Serialize for Distribution {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(CATEGORY_COUNT))?;
        for (category, quota) in self.iter() {
            map.serialize_entry(category.display_name(), &quota)?;
        }
        map.end()
    }
}
