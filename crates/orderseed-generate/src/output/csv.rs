use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use orderseed_core::{FIELD_DELIMITER, Record, TableSpec};

/// Write a header row and every record to `path`, truncating any earlier file.
///
/// Returns the number of bytes written.
pub fn write_table<R: Record>(path: &Path, table: &TableSpec, rows: &[R]) -> Result<u64, csv::Error> {
    let writer = BufWriter::new(File::create(path).map_err(csv::Error::from)?);
    let counting = CountingWriter::new(writer);
    let mut writer = csv::WriterBuilder::new()
        .delimiter(FIELD_DELIMITER)
        .has_headers(false)
        .from_writer(counting);

    writer.write_record(table.columns)?;
    for row in rows {
        writer.write_record(row.fields())?;
    }

    writer.flush()?;
    let mut counting = writer.into_inner().map_err(|err| err.into_error())?;
    counting.flush()?;
    Ok(counting.bytes_written())
}

struct CountingWriter<W: Write> {
    inner: W,
    bytes: u64,
}

impl<W: Write> CountingWriter<W> {
    fn new(inner: W) -> Self {
        Self { inner, bytes: 0 }
    }

    fn bytes_written(&self) -> u64 {
        self.bytes
    }
}

impl<W: Write> Write for CountingWriter<W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let size = self.inner.write(buf)?;
        self.bytes = self.bytes.saturating_add(size as u64);
        Ok(size)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.inner.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orderseed_core::{ORDER_CONTAINS_TABLE, OrderItem};
    use uuid::Uuid;

    #[test]
    fn writes_header_then_rows_and_counts_bytes() {
        let mut path = std::env::temp_dir();
        path.push(format!("orderseed_write_{}.csv", Uuid::new_v4()));
        std::fs::write(&path, "stale contents that must disappear\n").expect("seed file");

        let rows = vec![OrderItem {
            id: Uuid::nil(),
            order_id: "o;1".to_string(),
            task_id: "t-1".to_string(),
            quantity: 2,
        }];
        let bytes = write_table(&path, &ORDER_CONTAINS_TABLE, &rows).expect("write table");

        let contents = std::fs::read_to_string(&path).expect("read back");
        assert_eq!(bytes, contents.len() as u64);
        let lines: Vec<&str> = contents.lines().collect();
        assert_eq!(
            lines,
            vec![
                "id;order_id;task_id;quantity",
                "00000000-0000-0000-0000-000000000000;\"o;1\";t-1;2",
            ]
        );
    }
}
