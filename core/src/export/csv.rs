use crate::prelude::{PointSource, SourceResult};
use std::io::{BufWriter, Write};

/// Drains `source` into `writer` as `latitude,longitude,timestamp` records.
///
/// Floats use the shortest text that parses back to the same value, so the
/// output re-ingests losslessly. Returns the number of records written.
pub fn export_csv<S, W>(mut source: S, writer: W) -> SourceResult<usize>
where
    S: PointSource,
    W: Write,
{
    let mut out = BufWriter::new(writer);
    let mut written = 0;
    while let Some(point) = source.read()? {
        writeln!(
            out,
            "{},{},{}",
            point.latitude, point.longitude, point.timestamp
        )?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::{CsvPointReader, MemorySource};
    use crate::prelude::{GeoPoint, SourceError};
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::io::Cursor;

    #[test]
    fn writes_one_record_per_point() {
        let points = vec![GeoPoint::new(1.5, -2.25, 10), GeoPoint::new(0.0, 3.0, 11)];
        let mut buffer = Vec::new();
        let written = export_csv(MemorySource::from(points), &mut buffer).unwrap();
        assert_eq!(written, 2);
        assert_eq!(String::from_utf8(buffer).unwrap(), "1.5,-2.25,10\n0,3,11\n");
    }

    #[test]
    fn small_magnitudes_are_written_positionally() {
        let point = GeoPoint::new(0.00005, 0.0000001, 1);
        let mut buffer = Vec::new();
        export_csv(MemorySource::from(vec![point]), &mut buffer).unwrap();
        assert_eq!(buffer, b"0.00005,0.0000001,1\n");

        let mut reread = CsvPointReader::new(Cursor::new(buffer));
        assert_eq!(reread.read().unwrap(), Some(point));
    }

    #[test]
    fn random_points_survive_a_round_trip() {
        let mut rng = StdRng::seed_from_u64(2024);
        let count = rng.gen_range(1..2000);
        let points: Vec<GeoPoint> = (0..count)
            .map(|_| GeoPoint::new(rng.gen(), rng.gen(), rng.gen_range(0..i64::MAX)))
            .collect();

        let mut buffer = Vec::new();
        export_csv(MemorySource::from(points.clone()), &mut buffer).unwrap();

        let reread = CsvPointReader::new(Cursor::new(buffer))
            .points()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();
        assert_eq!(reread, points);
    }

    #[test]
    fn source_errors_abort_the_export() {
        let source = CsvPointReader::new(Cursor::new(b"1,2,3\nx,y\n".to_vec()));
        let mut buffer = Vec::new();
        let result = export_csv(source, &mut buffer);
        assert!(matches!(result, Err(SourceError::Format { record: 2, .. })));
    }
}
