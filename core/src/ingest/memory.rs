use crate::prelude::{GeoPoint, PointSource, SourceResult};
use std::collections::VecDeque;

/// Source that replays points held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    points: VecDeque<GeoPoint>,
}

impl MemorySource {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self {
            points: points.into(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.points.len()
    }
}

impl From<Vec<GeoPoint>> for MemorySource {
    fn from(points: Vec<GeoPoint>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<GeoPoint> for MemorySource {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Self {
            points: iter.into_iter().collect(),
        }
    }
}

impl PointSource for MemorySource {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        Ok(self.points.pop_front())
    }
}
