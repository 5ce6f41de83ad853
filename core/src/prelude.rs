use serde::{Deserialize, Serialize};

/// A single timestamped GPS sample.
///
/// `timestamp` is whole seconds since the Unix epoch.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
    pub timestamp: i64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64, timestamp: i64) -> Self {
        Self {
            latitude,
            longitude,
            timestamp,
        }
    }
}

/// Thresholds shared by the filtering stages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Fastest plausible speed, in projected miles per hour.
    pub speed_limit_mph: f64,
    /// Speeds at or below this are treated as standing still.
    pub stationary_speed_mph: f64,
    /// Cosine between consecutive headings at or below which a spike is assumed.
    pub spike_cosine: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            speed_limit_mph: 80.0,
            stationary_speed_mph: 0.001,
            spike_cosine: -0.97,
        }
    }
}

/// Errors surfaced by a point source.
#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("unexpected format at record {record}: {message}")]
    Format { record: usize, message: String },
    #[error("i/o failure: {0}")]
    Io(#[from] std::io::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Pull-based, ordered stream of points.
///
/// `Ok(None)` marks the end of the stream. Once a source has returned the end
/// or an error it must never yield another point.
pub trait PointSource {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>>;

    /// Adapts the source into an iterator that stops after the first error.
    fn points(self) -> Points<Self>
    where
        Self: Sized,
    {
        Points {
            source: self,
            done: false,
        }
    }
}

impl<S: PointSource + ?Sized> PointSource for &mut S {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        (**self).read()
    }
}

impl<S: PointSource + ?Sized> PointSource for Box<S> {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        (**self).read()
    }
}

/// Iterator returned by [`PointSource::points`].
pub struct Points<S> {
    source: S,
    done: bool,
}

impl<S: PointSource> Iterator for Points<S> {
    type Item = SourceResult<GeoPoint>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.source.read() {
            Ok(Some(point)) => Some(Ok(point)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<S: PointSource> std::iter::FusedIterator for Points<S> {}
