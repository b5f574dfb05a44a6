use serde::{Deserialize, Serialize};

use super::star_rating::StarRating;

/// Bucketed star counts for one movie, with derived count and average
///
/// `count` always equals the bucket sum and `average` is the weighted mean
/// rounded half-up to one decimal place (0 when there are no ratings). Both
/// derived fields are recomputed on every change and on deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "DistributionSnapshot", into = "DistributionSnapshot")]
pub struct RatingDistribution {
    buckets: [u32; 5],
    count: u32,
    average: f64,
}

/// One rating transition applied to a distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RatingChange {
    pub old: Option<StarRating>,
    pub new: Option<StarRating>,
}

impl RatingChange {
    pub fn add(rating: StarRating) -> Self {
        Self {
            old: None,
            new: Some(rating),
        }
    }

    pub fn replace(old: StarRating, new: StarRating) -> Self {
        Self {
            old: Some(old),
            new: Some(new),
        }
    }

    pub fn remove(rating: StarRating) -> Self {
        Self {
            old: Some(rating),
            new: None,
        }
    }

    /// True when applying the change would leave every bucket untouched
    pub fn is_noop(&self) -> bool {
        self.old == self.new
    }
}

impl Default for RatingDistribution {
    fn default() -> Self {
        Self::empty()
    }
}

impl RatingDistribution {
    pub fn empty() -> Self {
        Self {
            buckets: [0; 5],
            count: 0,
            average: 0.0,
        }
    }

    /// Build from raw bucket counts, one-star first
    pub fn from_buckets(buckets: [u32; 5]) -> Self {
        let mut distribution = Self {
            buckets,
            count: 0,
            average: 0.0,
        };
        distribution.recompute();
        distribution
    }

    /// Remove `old` (if any) and add `new` (if any), returning the new distribution
    ///
    /// Removing from an empty bucket is floored at zero. `None`/`None` returns
    /// an identical copy.
    pub fn apply_delta(&self, old: Option<StarRating>, new: Option<StarRating>) -> Self {
        let mut next = *self;
        if let Some(rating) = old {
            let bucket = &mut next.buckets[rating.bucket()];
            *bucket = bucket.saturating_sub(1);
        }
        if let Some(rating) = new {
            let bucket = &mut next.buckets[rating.bucket()];
            *bucket = bucket.saturating_add(1);
        }
        next.recompute();
        next
    }

    pub fn apply(&self, change: RatingChange) -> Self {
        self.apply_delta(change.old, change.new)
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn average(&self) -> f64 {
        self.average
    }

    /// Number of ratings with exactly `rating` stars
    pub fn bucket(&self, rating: StarRating) -> u32 {
        self.buckets[rating.bucket()]
    }

    pub fn buckets(&self) -> [u32; 5] {
        self.buckets
    }

    fn recompute(&mut self) {
        let count: u64 = self.buckets.iter().map(|&b| b as u64).sum();
        let total: u64 = self
            .buckets
            .iter()
            .enumerate()
            .map(|(i, &b)| b as u64 * (i as u64 + 1))
            .sum();

        self.count = count as u32;
        self.average = if count == 0 {
            0.0
        } else {
            // Integer half-up rounding of total * 10 / count
            let tenths = (total * 20 + count) / (count * 2);
            tenths as f64 / 10.0
        };
    }
}

#[derive(Serialize, Deserialize)]
struct DistributionSnapshot {
    #[serde(default)]
    one: u32,
    #[serde(default)]
    two: u32,
    #[serde(default)]
    three: u32,
    #[serde(default)]
    four: u32,
    #[serde(default)]
    five: u32,
    #[serde(default)]
    count: u32,
    #[serde(default)]
    average: f64,
}

impl From<DistributionSnapshot> for RatingDistribution {
    fn from(s: DistributionSnapshot) -> Self {
        RatingDistribution::from_buckets([s.one, s.two, s.three, s.four, s.five])
    }
}

impl From<RatingDistribution> for DistributionSnapshot {
    fn from(d: RatingDistribution) -> Self {
        let [one, two, three, four, five] = d.buckets;
        Self {
            one,
            two,
            three,
            four,
            five,
            count: d.count,
            average: d.average,
        }
    }
}
