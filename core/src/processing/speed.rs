use crate::math::GeoProjection;
use crate::prelude::{FilterConfig, GeoPoint, PointSource, SourceResult};
use crate::telemetry::{FilterStats, StageLogger};

/// Drops points whose implied speed from the last accepted point is either
/// negligible or physically implausible.
pub struct SpeedFilter<S> {
    upstream: S,
    limit_mph: f64,
    stationary_mph: f64,
    previous: Option<GeoPoint>,
    finished: bool,
    stats: FilterStats,
    logger: StageLogger,
}

enum Verdict {
    Accept,
    Stationary(f64),
    TooFast(f64),
}

impl<S: PointSource> SpeedFilter<S> {
    pub fn new(upstream: S, limit_mph: f64) -> Self {
        Self::with_config(
            upstream,
            &FilterConfig {
                speed_limit_mph: limit_mph,
                ..Default::default()
            },
        )
    }

    pub fn with_config(upstream: S, config: &FilterConfig) -> Self {
        Self {
            upstream,
            limit_mph: config.speed_limit_mph,
            stationary_mph: config.stationary_speed_mph,
            previous: None,
            finished: false,
            stats: FilterStats::default(),
            logger: StageLogger::new("SpeedFilter"),
        }
    }

    pub fn stats(&self) -> FilterStats {
        self.stats
    }

    /// Last point handed downstream, if any.
    pub fn previous(&self) -> Option<&GeoPoint> {
        self.previous.as_ref()
    }

    pub fn get_ref(&self) -> &S {
        &self.upstream
    }

    pub fn into_inner(self) -> S {
        self.upstream
    }

    fn judge(&self, current: &GeoPoint) -> Verdict {
        let Some(previous) = self.previous.as_ref() else {
            return Verdict::Accept;
        };

        let speed = GeoProjection::velocity(previous, current).magnitude();
        if speed <= self.stationary_mph {
            Verdict::Stationary(speed)
        } else if speed > self.limit_mph {
            Verdict::TooFast(speed)
        } else {
            Verdict::Accept
        }
    }
}

impl<S: PointSource> PointSource for SpeedFilter<S> {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        if self.finished {
            return Ok(None);
        }
        loop {
            let current = match self.upstream.read() {
                Ok(Some(point)) => point,
                other => {
                    self.finished = true;
                    if let Ok(None) = other {
                        self.logger
                            .record(format_args!("end of stream; {}", self.stats));
                    }
                    return other;
                }
            };
            self.stats.pulled += 1;

            match self.judge(&current) {
                Verdict::Accept => {
                    self.previous = Some(current);
                    self.stats.accepted += 1;
                    return Ok(Some(current));
                }
                Verdict::Stationary(speed) => {
                    self.stats.rejected_stationary += 1;
                    self.logger.trace_point(format_args!(
                        "dropping stationary point at t={} ({:.6} mph)",
                        current.timestamp, speed
                    ));
                }
                Verdict::TooFast(speed) => {
                    self.stats.rejected_too_fast += 1;
                    self.logger.trace_point(format_args!(
                        "dropping point at t={} moving {:.1} mph over limit {:.1}",
                        current.timestamp, speed, self.limit_mph
                    ));
                }
            }
        }
    }
}
