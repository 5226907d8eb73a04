//! Iridas / Adobe / Resolve `.cube` LUT format support.
//!
//! # Format
//!
//! ```text
//! TITLE "LUT Name"
//! # Comment
//! LUT_3D_SIZE 33
//! DOMAIN_MIN 0.0 0.0 0.0
//! DOMAIN_MAX 1.0 1.0 1.0
//! 0.0 0.0 0.0
//! ...
//! 1.0 1.0 1.0
//! ```
//!
//! `LUT_1D_SIZE` files load as [`Lut3x1D`], `LUT_3D_SIZE` files as
//! [`Lut3D`]. A file without a size keyword is read as a 3D cube of edge 2.
//! Cube rows are listed with the red index varying fastest, which is also
//! the in-memory order of [`Lut3D`].
//!
//! The reader builds tables through the same constructors as the rest of the
//! crate, so it is stricter than some other `.cube` readers: tables need at
//! least 2 entries, cube edges must lie in `[2, 256]` and every
//! `DOMAIN_MIN` channel must be below its `DOMAIN_MAX`. Such files are
//! rejected with [`LutError::InvalidSize`] or [`LutError::InvalidDomain`]
//! rather than producing a table that cannot be evaluated.
//!
//! # Example
//!
//! ```rust,ignore
//! use colour_lut::cube;
//!
//! let lut = cube::read_cube("grade.cube")?;
//! cube::write_cube("grade_copy.cube", &lut, cube::DEFAULT_DECIMALS)?;
//! ```

use crate::lut1d::{DEFAULT_DOMAIN, MIN_SIZE};
use crate::lut3d::MAX_SIZE as MAX_3D_SIZE;
use crate::{Lut, Lut3D, Lut3x1D, LutError, LutResult, LutSequence};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, warn};

/// Decimals written per value by default.
pub const DEFAULT_DECIMALS: usize = 7;

/// Largest `LUT_1D_SIZE` accepted by the writer.
pub const MAX_1D_SIZE: usize = 65536;

/// Reads a `.cube` file.
///
/// Without a `TITLE` line the LUT is named after the file stem, with `_`,
/// `-` and `.` replaced by spaces.
pub fn read_cube<P: AsRef<Path>>(path: P) -> LutResult<Lut> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let lut = parse_cube(BufReader::new(file), &title_from_path(path))?;
    debug!(path = %path.display(), kind = lut.kind(), size = lut.size(), "read cube");
    Ok(lut)
}

/// Parses a `.cube` LUT from a reader.
///
/// `default_title` names the LUT when the data has no `TITLE` line.
pub fn parse_cube<R: BufRead>(reader: R, default_title: &str) -> LutResult<Lut> {
    let mut title = default_title.to_string();
    let mut comments = Vec::new();
    let mut domain = DEFAULT_DOMAIN;
    let mut is_3d = true;
    let mut size = MIN_SIZE;
    let mut rows: Vec<[f64; 3]> = Vec::new();

    for (number, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        let number = number + 1;

        if line.is_empty() {
            continue;
        }
        if let Some(comment) = line.strip_prefix('#') {
            comments.push(comment.trim().to_string());
            continue;
        }

        let (keyword, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();
        match keyword {
            "TITLE" => title = unquote(rest).to_string(),
            "DOMAIN_MIN" => domain[0] = parse_triplet(rest, number)?,
            "DOMAIN_MAX" => domain[1] = parse_triplet(rest, number)?,
            "LUT_1D_SIZE" => {
                is_3d = false;
                size = parse_size(rest, number)?;
            }
            "LUT_3D_SIZE" => {
                is_3d = true;
                size = parse_size(rest, number)?;
            }
            _ => rows.push(parse_triplet(line, number)?),
        }
    }

    let expected = if is_3d {
        size.checked_pow(3)
            .ok_or_else(|| LutError::InvalidSize(format!("3D LUT size {} is too large", size)))?
    } else {
        size
    };
    if rows.len() != expected {
        return Err(LutError::ParseError(format!(
            "expected {} rows, found {}",
            expected,
            rows.len()
        )));
    }

    let lut: Lut = if is_3d {
        Lut3D::new(rows, size, title)?
            .with_domain(domain)?
            .with_comments(comments)
            .into()
    } else {
        Lut3x1D::new(rows, title)?
            .with_domain(domain)?
            .with_comments(comments)
            .into()
    };
    Ok(lut)
}

/// Writes a LUT to a `.cube` file.
///
/// A [`Lut::Lut1D`] is written as a three-channel table.
///
/// # Errors
///
/// [`LutError::InvalidSize`] for 1D tables outside `[2, 65536]` or cubes
/// outside `[2, 256]`.
pub fn write_cube<P: AsRef<Path>>(path: P, lut: &Lut, decimals: usize) -> LutResult<()> {
    let path = path.as_ref();
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    format_cube(&mut writer, lut, decimals)?;
    writer.flush()?;
    debug!(path = %path.display(), kind = lut.kind(), size = lut.size(), "wrote cube");
    Ok(())
}

/// Writes the first LUT of a sequence to a `.cube` file.
///
/// The format holds a single LUT; the rest of the sequence is dropped.
pub fn write_cube_sequence<P: AsRef<Path>>(
    path: P,
    sequence: &LutSequence,
    decimals: usize,
) -> LutResult<()> {
    let first = sequence.first().ok_or(LutError::EmptySequence)?;
    if sequence.len() > 1 {
        warn!(
            luts = sequence.len(),
            name = first.name(),
            "LUT sequence passed to cube writer, using its first LUT"
        );
    }
    write_cube(path, first, decimals)
}

/// Serialises a LUT in `.cube` format.
pub fn format_cube<W: Write>(mut writer: W, lut: &Lut, decimals: usize) -> LutResult<()> {
    let widened;
    let (rows, name, domain, comments, size_line) = match lut {
        Lut::Lut1D(lut) => {
            widened = lut.to_lut3x1d();
            check_writable(widened.size(), MAX_1D_SIZE)?;
            (&widened.table, &widened.name, widened.domain, &widened.comments, "LUT_1D_SIZE")
        }
        Lut::Lut3x1D(lut) => {
            check_writable(lut.size(), MAX_1D_SIZE)?;
            (&lut.table, &lut.name, lut.domain, &lut.comments, "LUT_1D_SIZE")
        }
        Lut::Lut3D(lut) => {
            check_writable(lut.size, MAX_3D_SIZE)?;
            (&lut.table, &lut.name, lut.domain, &lut.comments, "LUT_3D_SIZE")
        }
    };

    writeln!(writer, "TITLE \"{}\"", name)?;
    for comment in comments {
        writeln!(writer, "# {}", comment)?;
    }
    writeln!(writer, "{} {}", size_line, lut.size())?;

    if domain != DEFAULT_DOMAIN {
        writeln!(writer, "DOMAIN_MIN {}", format_row(domain[0], decimals))?;
        writeln!(writer, "DOMAIN_MAX {}", format_row(domain[1], decimals))?;
    }

    for row in rows {
        writeln!(writer, "{}", format_row(*row, decimals))?;
    }

    Ok(())
}

// Helper functions

fn title_from_path(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['_', '-', '.'], " "))
        .unwrap_or_default()
}

fn unquote(text: &str) -> &str {
    text.strip_prefix('"')
        .and_then(|t| t.strip_suffix('"'))
        .unwrap_or(text)
}

fn check_writable(size: usize, max: usize) -> LutResult<()> {
    if !(MIN_SIZE..=max).contains(&size) {
        return Err(LutError::InvalidSize(format!(
            "LUT size must be in [{}, {}], got {}",
            MIN_SIZE, max, size
        )));
    }
    Ok(())
}

fn format_row(row: [f64; 3], decimals: usize) -> String {
    format!(
        "{:.prec$} {:.prec$} {:.prec$}",
        row[0],
        row[1],
        row[2],
        prec = decimals
    )
}

fn parse_size(text: &str, line: usize) -> LutResult<usize> {
    text.split_whitespace()
        .next()
        .and_then(|t| t.parse().ok())
        .ok_or_else(|| LutError::ParseError(format!("line {}: invalid size '{}'", line, text)))
}

fn parse_triplet(text: &str, line: usize) -> LutResult<[f64; 3]> {
    let values: Vec<f64> = text
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<_, _>>()
        .map_err(|_| LutError::ParseError(format!("line {}: invalid values '{}'", line, text)))?;
    match values.as_slice() {
        &[r, g, b] => Ok([r, g, b]),
        _ => Err(LutError::ParseError(format!(
            "line {}: expected 3 values, found {}",
            line,
            values.len()
        ))),
    }
}
