//! Emotion statistics of locations.
//!
//! Only public emotion points are taken into account. Comments
//! count if they are attached to the location directly or via a
//! public emotion point.

use std::{collections::HashSet, ops::AddAssign};

use crate::entities::*;

#[derive(Debug, Default, Clone, Copy)]
pub struct AvgEmotionBuilder {
    acc: u64,
    cnt: u64,
}

impl AvgEmotionBuilder {
    pub fn add(&mut self, value: EmotionValue) {
        self.acc += u64::from(value.to_u8());
        self.cnt += 1;
    }

    pub fn build(self) -> EmotionSummary {
        let avg = if self.cnt > 0 {
            Some(self.acc as f64 / self.cnt as f64)
        } else {
            None
        };
        EmotionSummary {
            avg,
            count: self.cnt,
        }
    }
}

impl AddAssign<EmotionValue> for AvgEmotionBuilder {
    fn add_assign(&mut self, value: EmotionValue) {
        self.add(value);
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct EmotionSummary {
    /// `None` if there are no public emotion points
    pub avg: Option<f64>,
    pub count: u64,
}

/// Number of public emotion points per value.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Distribution([u64; 5]);

impl Distribution {
    pub fn count(&self, value: EmotionValue) -> u64 {
        self.0[usize::from(value.to_u8() - EmotionValue::min().to_u8())]
    }

    pub fn iter(&self) -> impl Iterator<Item = (EmotionValue, u64)> + '_ {
        EmotionValue::all().map(|v| (v, self.count(v)))
    }
}

pub trait Rated {
    fn emotion_summary(&self, points: &[EmotionPoint]) -> EmotionSummary;
}

impl Rated for Location {
    fn emotion_summary(&self, points: &[EmotionPoint]) -> EmotionSummary {
        summarize(points.iter().filter(|p| p.location_id == self.id))
    }
}

pub fn summarize<'a>(points: impl IntoIterator<Item = &'a EmotionPoint>) -> EmotionSummary {
    points
        .into_iter()
        .filter(|p| p.privacy.is_public())
        .fold(AvgEmotionBuilder::default(), |mut acc, p| {
            acc += p.value;
            acc
        })
        .build()
}

pub fn distribution<'a>(points: impl IntoIterator<Item = &'a EmotionPoint>) -> Distribution {
    let mut dist = Distribution::default();
    for p in points.into_iter().filter(|p| p.privacy.is_public()) {
        dist.0[usize::from(p.value.to_u8() - EmotionValue::min().to_u8())] += 1;
    }
    dist
}

/// Comments that contribute to the statistics of a location.
///
/// `points` must contain all emotion points the comments refer to.
pub fn countable_comments<'a>(
    points: &[EmotionPoint],
    comments: &'a [Comment],
) -> impl Iterator<Item = &'a Comment> {
    let public_points: HashSet<_> = points
        .iter()
        .filter(|p| p.privacy.is_public())
        .map(|p| p.id)
        .collect();
    comments.iter().filter(move |c| match c.emotion_point_id {
        None => true,
        Some(id) => public_points.contains(&id),
    })
}

#[derive(Debug, Clone, PartialEq)]
pub struct CommentStats<'a> {
    pub count: u64,
    pub latest: Option<&'a Comment>,
}

pub fn comment_stats<'a>(
    location_id: Id,
    points: &[EmotionPoint],
    comments: &'a [Comment],
) -> CommentStats<'a> {
    countable_comments(points, comments)
        .filter(|c| c.location_id == location_id)
        .fold(
            CommentStats {
                count: 0,
                latest: None,
            },
            |mut stats, c| {
                stats.count += 1;
                let newer = stats
                    .latest
                    .map(|l| (c.created_at, c.id) > (l.created_at, l.id))
                    .unwrap_or(true);
                if newer {
                    stats.latest = Some(c);
                }
                stats
            },
        )
}
