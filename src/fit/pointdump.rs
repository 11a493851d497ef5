use std::fs::File;
use std::io::{
    BufWriter,
    Write
};
use std::path::Path;

use crate::fit::fiterror::FitError;
use crate::geometry::point::Point2D;

/// 第一行為方程式，之後每個取樣點一行 "(x, y)"，兩位小數
pub fn write_point_dump<W: Write>(
    writer: &mut W,
    equation: &str,
    points: &[Point2D],
) -> Result<(), FitError> {
    writeln!(writer, "{}", equation)?;
    for point in points {
        writeln!(writer, "{}", point)?;
    }
    writer.flush()?;
    Ok(())
}

pub fn save_point_dump<P: AsRef<Path>>(
    path: P,
    equation: &str,
    points: &[Point2D],
) -> Result<(), FitError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_point_dump(&mut writer, equation, points)
}
