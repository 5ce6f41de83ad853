use crate::math::GeoProjection;
use crate::prelude::{FilterConfig, GeoPoint, PointSource, SourceResult};
use crate::telemetry::{FilterStats, StageLogger};
use std::collections::VecDeque;

const WINDOW: usize = 3;

/// Removes back-and-forth spikes by looking at the heading change across the
/// last three buffered points.
///
/// When the path reverses sharply (cosine between the two headings at or
/// below the threshold), the apex and the point after it are discarded.
/// Detection only sees the tail of the window, so a spike is caught only
/// when its apex and both neighbours are buffered together.
pub struct NoiseFilter<S> {
    upstream: S,
    spike_cosine: f64,
    window: VecDeque<GeoPoint>,
    upstream_done: bool,
    halted: bool,
    stats: FilterStats,
    logger: StageLogger,
}

impl<S: PointSource> NoiseFilter<S> {
    pub fn new(upstream: S) -> Self {
        Self::with_config(upstream, &FilterConfig::default())
    }

    pub fn with_config(upstream: S, config: &FilterConfig) -> Self {
        Self {
            upstream,
            spike_cosine: config.spike_cosine,
            window: VecDeque::with_capacity(WINDOW),
            upstream_done: false,
            halted: false,
            stats: FilterStats::default(),
            logger: StageLogger::new("NoiseFilter"),
        }
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Points buffered but not yet emitted.
    pub fn pending(&self) -> impl Iterator<Item = &GeoPoint> {
        self.window.iter()
    }

    pub fn get_ref(&self) -> &S {
        &self.upstream
    }

    pub fn into_inner(self) -> S {
        self.upstream
    }

    fn fill(&mut self) -> SourceResult<()> {
        while self.window.len() < WINDOW && !self.upstream_done {
            match self.upstream.read()? {
                Some(point) => {
                    self.stats.pulled += 1;
                    self.window.push_back(point);
                }
                None => self.upstream_done = true,
            }
        }
        Ok(())
    }

    fn reversal_cosine(&self) -> Option<f64> {
        let n = self.window.len();
        if n < WINDOW {
            return None;
        }
        let p1 = GeoProjection::project(&self.window[n - 3]);
        let p2 = GeoProjection::project(&self.window[n - 2]);
        let p3 = GeoProjection::project(&self.window[n - 1]);

        let dir1 = p2.sub(p1).normalize();
        let dir2 = p3.sub(p2).normalize();
        Some(dir2.dot(dir1))
    }
}

impl<S: PointSource> PointSource for NoiseFilter<S> {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        if self.halted {
            return Ok(None);
        }
        if let Err(err) = self.fill() {
            self.halted = true;
            return Err(err);
        }

        if let Some(cosine) = self.reversal_cosine() {
            if cosine <= self.spike_cosine {
                let n = self.window.len();
                self.logger.trace_point(format_args!(
                    "spike at t={} (cosine {:.4}), dropping 2 points",
                    self.window[n - 2].timestamp,
                    cosine
                ));
                self.window.truncate(n - 2);
                self.stats.spikes += 1;
                self.stats.dropped += 2;
            }
        }

        match self.window.pop_front() {
            Some(point) => {
                self.stats.accepted += 1;
                Ok(Some(point))
            }
            None => {
                self.halted = true;
                self.logger
                    .record(format_args!("end of stream; {}", self.stats));
                Ok(None)
            }
        }
    }
}
