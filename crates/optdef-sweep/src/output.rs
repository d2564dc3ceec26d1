//! CSV sinks for sweep and boundary results

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use optdef_common::{OptdefError, Result};
use optdef_darwinian::{BoundaryPoint, CellOutcome};

/// Monte Carlo sweep header
pub const SWEEP_HEADER: &str = "a,b,c,l,accu_a,slope_a,accu_b,slope_b,accu_c,slope_c";

/// Boundary scan header
pub const BOUNDARY_HEADER: &str = "h,p,a,b,c,l";

/// Printed in place of an undefined accuracy or slope
pub const UNDEFINED: &str = "NA";

fn cell(value: Option<f32>) -> String {
    match value {
        Some(v) => format!("{:.2}", v),
        None => UNDEFINED.to_string(),
    }
}

/// Line-oriented CSV writer; I/O errors carry the destination name
pub struct CsvSink<W: Write> {
    writer: W,
    path: String,
}

impl CsvSink<BufWriter<File>> {
    /// Create (or truncate) the file at `path`
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| OptdefError::output(path.display().to_string(), e))?;
        Ok(Self::new(BufWriter::new(file), path.display()))
    }
}

impl<W: Write> CsvSink<W> {
    pub fn new(writer: W, path: impl ToString) -> Self {
        Self {
            writer,
            path: path.to_string(),
        }
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.writer, "{}", line).map_err(|e| OptdefError::output(&self.path, e))
    }

    pub fn write_header(&mut self, header: &str) -> Result<()> {
        self.line(header)
    }

    /// `a,b,c,l` followed by the six result fields
    pub fn write_outcome(&mut self, outcome: &CellOutcome) -> Result<()> {
        let p = &outcome.params;
        let mut fields = vec![
            format!("{:.2}", p.a),
            format!("{:.2}", p.b),
            format!("{:.2}", p.c),
            format!("{:.2}", p.l),
        ];
        fields.extend(outcome.record.fields().into_iter().map(cell));
        self.line(&fields.join(","))
    }

    pub fn write_boundary(&mut self, point: &BoundaryPoint) -> Result<()> {
        self.line(&format!(
            "{:.2},{:.2},{:.2},{:.2},{:.2},{:.2}",
            point.h, point.p, point.a, point.b, point.c, point.l
        ))
    }

    /// Flush buffered rows and hand back the writer
    pub fn finish(mut self) -> Result<W> {
        self.writer
            .flush()
            .map_err(|e| OptdefError::output(&self.path, e))?;
        Ok(self.writer)
    }
}
