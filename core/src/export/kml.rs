use crate::prelude::{PointSource, SourceResult};
use std::io::{BufWriter, Write};

const HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<kml xmlns="http://www.opengis.net/kml/2.2">
  <Document>
    <Placemark>
      <LineString>
        <tessellate>1</tessellate>
		<coordinates>"#;

const FOOTER: &str = r#"
	</coordinates>
      </LineString>
    </Placemark>
  </Document>
</kml>"#;

/// Drains `source` into a single KML line string, one
/// `longitude,latitude,0` tuple per line. Returns the number of points.
pub fn export_kml<S, W>(mut source: S, writer: W) -> SourceResult<usize>
where
    S: PointSource,
    W: Write,
{
    let mut out = BufWriter::new(writer);
    out.write_all(HEADER.as_bytes())?;

    let mut written = 0;
    while let Some(point) = source.read()? {
        write!(out, "\n{},{},0", point.longitude, point.latitude)?;
        written += 1;
    }

    out.write_all(FOOTER.as_bytes())?;
    out.flush()?;
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest::MemorySource;
    use crate::prelude::GeoPoint;

    #[test]
    fn coordinates_are_longitude_first() {
        let points = vec![GeoPoint::new(45.5, 9.25, 0), GeoPoint::new(-1.0, 2.0, 5)];
        let mut buffer = Vec::new();
        let written = export_kml(MemorySource::from(points), &mut buffer).unwrap();
        assert_eq!(written, 2);

        let text = String::from_utf8(buffer).unwrap();
        assert!(text.starts_with("<?xml"));
        assert!(text.contains("\t\t<coordinates>\n9.25,45.5,0\n2,-1,0\n\t</coordinates>"));
        assert!(text.ends_with("</Document>\n</kml>"));
    }

    #[test]
    fn empty_track_still_writes_document() {
        let mut buffer = Vec::new();
        assert_eq!(export_kml(MemorySource::default(), &mut buffer).unwrap(), 0);
        let text = String::from_utf8(buffer).unwrap();
        assert_eq!(text, format!("{}{}", HEADER, FOOTER));
    }
}
