use crate::prelude::{GeoPoint, PointSource, SourceError, SourceResult};
use std::io::BufRead;

const FIELDS_PER_RECORD: usize = 3;

/// Reads `latitude,longitude,timestamp` records, one per line.
///
/// Blank lines are skipped. After the end of input or the first error every
/// further read returns `Ok(None)`.
pub struct CsvPointReader<R> {
    reader: R,
    line: String,
    line_number: usize,
    finished: bool,
}

impl<R: BufRead> CsvPointReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            line_number: 0,
            finished: false,
        }
    }

    /// 1-based number of the last line consumed.
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    fn next_record(&mut self) -> SourceResult<Option<GeoPoint>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;

            let record = self.line.trim_end_matches(['\n', '\r']);
            if record.is_empty() {
                continue;
            }
            return parse_record(record, self.line_number).map(Some);
        }
    }
}

impl<R: BufRead> PointSource for CsvPointReader<R> {
    fn read(&mut self) -> SourceResult<Option<GeoPoint>> {
        if self.finished {
            return Ok(None);
        }
        let result = self.next_record();
        if !matches!(result, Ok(Some(_))) {
            self.finished = true;
        }
        result
    }
}

fn parse_record(record: &str, line_number: usize) -> SourceResult<GeoPoint> {
    let fields: Vec<&str> = record.split(',').map(unquote).collect();
    if fields.len() != FIELDS_PER_RECORD {
        return Err(SourceError::Format {
            record: line_number,
            message: format!(
                "expected {} fields, found {}",
                FIELDS_PER_RECORD,
                fields.len()
            ),
        });
    }

    let invalid = |name: &str, value: &str| SourceError::Format {
        record: line_number,
        message: format!("invalid {} {:?}", name, value),
    };

    let latitude = fields[0]
        .parse::<f64>()
        .map_err(|_| invalid("latitude", fields[0]))?;
    let longitude = fields[1]
        .parse::<f64>()
        .map_err(|_| invalid("longitude", fields[1]))?;
    let timestamp = fields[2]
        .parse::<i64>()
        .map_err(|_| invalid("timestamp", fields[2]))?;

    Ok(GeoPoint::new(latitude, longitude, timestamp))
}

fn unquote(field: &str) -> &str {
    field
        .strip_prefix('"')
        .and_then(|inner| inner.strip_suffix('"'))
        .unwrap_or(field)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    fn reader(text: &str) -> CsvPointReader<Cursor<Vec<u8>>> {
        CsvPointReader::new(Cursor::new(text.as_bytes().to_vec()))
    }

    #[test]
    fn reads_records_and_skips_blank_lines() {
        let mut source = reader("0,1,2\n0.1,0.2,3\n\n-0.1,-0.2,4\r\n");
        assert_eq!(source.read().unwrap(), Some(GeoPoint::new(0.0, 1.0, 2)));
        assert_eq!(source.read().unwrap(), Some(GeoPoint::new(0.1, 0.2, 3)));
        assert_eq!(source.read().unwrap(), Some(GeoPoint::new(-0.1, -0.2, 4)));
        assert_eq!(source.line_number(), 4);
        assert!(source.read().unwrap().is_none());
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn empty_input_ends_immediately() {
        let mut source = reader("");
        assert!(source.read().unwrap().is_none());
        assert!(source.read().unwrap().is_none());
        assert_eq!(source.line_number(), 0);
    }

    #[test]
    fn last_record_without_newline_is_read() {
        let mut source = reader("\"1.5\",2,3");
        assert_eq!(source.read().unwrap(), Some(GeoPoint::new(1.5, 2.0, 3)));
        assert!(source.read().unwrap().is_none());
    }

    #[test]
    fn malformed_records_are_format_errors() {
        for text in ["0,0,0,", "0", "1,1,a", "1,a,1", "a,1,1", "0,1,1.1"] {
            let mut source = reader(text);
            match source.read() {
                Err(SourceError::Format { record, .. }) => assert_eq!(record, 1),
                other => panic!("expected format error for {:?}, got {:?}", text, other),
            }
        }
    }

    #[test]
    fn no_points_after_an_error() {
        let mut source = reader("1,2,3\nbad\n4,5,6\n");
        assert!(source.read().unwrap().is_some());
        assert!(source.read().is_err());
        assert!(source.read().unwrap().is_none());
    }

    struct BrokenPipe;

    impl Read for BrokenPipe {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "gone"))
        }
    }

    #[test]
    fn io_failures_propagate() {
        let mut source = CsvPointReader::new(io::BufReader::new(BrokenPipe));
        assert!(matches!(source.read(), Err(SourceError::Io(_))));
        assert!(source.read().unwrap().is_none());
    }
}
