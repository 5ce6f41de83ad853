pub mod noise;
pub mod speed;

pub use noise::NoiseFilter;
pub use speed::SpeedFilter;

use crate::prelude::{FilterConfig, PointSource};

/// The canonical cleaning chain: speed rejection followed by spike removal.
pub fn clean_track<S: PointSource>(
    source: S,
    config: &FilterConfig,
) -> NoiseFilter<SpeedFilter<S>> {
    NoiseFilter::with_config(SpeedFilter::with_config(source, config), config)
}
