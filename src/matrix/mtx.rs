//! Matrix Market coordinate file reader and writer
//!
//! Accepts `%%MatrixMarket matrix coordinate <field> <symmetry>` with field
//! `pattern`, `real`, `integer` or `double` (values are ignored) and symmetry
//! `general`, `symmetric` or `skew-symmetric`. Indices are 1-based on disk and
//! 0-based in the returned [`CooMatrix`].

use super::coo::CooMatrix;
use crate::error::{TricountError, TricountResult};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;
use tracing::{debug, info};
use tricount_algorithms::VertexId;

const BANNER: &str = "%%matrixmarket";

/// Upper bound on entries reserved from the declared nonzero count
const MAX_PREALLOC: usize = 1 << 20;

/// Header fields of a Matrix Market file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MtxHeader {
    pub field: String,
    pub symmetry: String,
}

/// Read a Matrix Market file from disk.
pub fn read_matrix_market(path: impl AsRef<Path>) -> TricountResult<CooMatrix> {
    let path = path.as_ref();
    info!("Reading Matrix Market file {:?}", path);
    let file = File::open(path)?;
    let (_, coo) = parse_matrix_market(BufReader::new(file))?;
    info!(
        "Loaded {} x {} matrix with {} entries",
        coo.nrows,
        coo.ncols,
        coo.len()
    );
    Ok(coo)
}

/// Parse Matrix Market content from any buffered reader.
pub fn parse_matrix_market<R: BufRead>(reader: R) -> TricountResult<(MtxHeader, CooMatrix)> {
    let mut lines = reader.lines().enumerate().map(|(i, l)| (i + 1, l));

    let (_, banner) = lines
        .next()
        .ok_or_else(|| TricountError::parse(1, "empty file"))?;
    let header = parse_banner(&banner?)?;
    debug!("Matrix Market header: {:?}", header);

    // Size line: first non-comment, non-blank line
    let mut size = None;
    for (line_no, line) in lines.by_ref() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        size = Some((line_no, parse_size(line_no, trimmed)?));
        break;
    }
    let (size_line, (nrows, ncols, nnz)) =
        size.ok_or_else(|| TricountError::parse(1, "missing size line"))?;

    if nrows > VertexId::MAX as usize || ncols > VertexId::MAX as usize {
        return Err(TricountError::Unsupported(format!(
            "{} x {} exceeds 32-bit vertex ids",
            nrows, ncols
        )));
    }

    let mut coo = CooMatrix::with_capacity(nrows, ncols, nnz.min(MAX_PREALLOC));
    let mut last_line = size_line;
    for (line_no, line) in lines {
        let line = line?;
        last_line = line_no;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('%') {
            continue;
        }
        if coo.len() == nnz {
            return Err(TricountError::parse(
                line_no,
                format!("more than the declared {} entries", nnz),
            ));
        }
        let (row, col) = parse_entry(line_no, trimmed, nrows, ncols)?;
        coo.push(row, col);
    }

    if coo.len() != nnz {
        return Err(TricountError::parse(
            last_line,
            format!("expected {} entries, found {}", nnz, coo.len()),
        ));
    }

    Ok((header, coo))
}

fn parse_banner(line: &str) -> TricountResult<MtxHeader> {
    let tokens: Vec<String> = line.split_whitespace().map(str::to_lowercase).collect();
    if tokens.first().map(String::as_str) != Some(BANNER) {
        return Err(TricountError::parse(1, "missing %%MatrixMarket banner"));
    }
    if tokens.len() != 5 {
        return Err(TricountError::parse(1, "banner must have 5 fields"));
    }
    if tokens[1] != "matrix" {
        return Err(TricountError::Unsupported(format!("object '{}'", tokens[1])));
    }
    if tokens[2] != "coordinate" {
        return Err(TricountError::Unsupported(format!("format '{}'", tokens[2])));
    }
    match tokens[3].as_str() {
        "pattern" | "real" | "integer" | "double" => {}
        other => return Err(TricountError::Unsupported(format!("field '{}'", other))),
    }
    match tokens[4].as_str() {
        "general" | "symmetric" | "skew-symmetric" => {}
        other => return Err(TricountError::Unsupported(format!("symmetry '{}'", other))),
    }

    Ok(MtxHeader {
        field: tokens[3].clone(),
        symmetry: tokens[4].clone(),
    })
}

fn parse_size(line_no: usize, line: &str) -> TricountResult<(usize, usize, usize)> {
    let values: Vec<usize> = line
        .split_whitespace()
        .map(|t| t.parse::<usize>())
        .collect::<Result<_, _>>()
        .map_err(|e| TricountError::parse(line_no, format!("invalid size line: {}", e)))?;

    match values.as_slice() {
        &[nrows, ncols, nnz] => Ok((nrows, ncols, nnz)),
        _ => Err(TricountError::parse(
            line_no,
            "size line must be 'rows cols nonzeros'",
        )),
    }
}

fn parse_entry(
    line_no: usize,
    line: &str,
    nrows: usize,
    ncols: usize,
) -> TricountResult<(VertexId, VertexId)> {
    let mut tokens = line.split_whitespace();
    let mut index = |what: &str, bound: usize| -> TricountResult<VertexId> {
        let token = tokens
            .next()
            .ok_or_else(|| TricountError::parse(line_no, format!("missing {} index", what)))?;
        let value: usize = token
            .parse()
            .map_err(|_| TricountError::parse(line_no, format!("invalid {} index '{}'", what, token)))?;
        if value == 0 || value > bound {
            return Err(TricountError::parse(
                line_no,
                format!("{} index {} outside 1..={}", what, value, bound),
            ));
        }
        Ok((value - 1) as VertexId)
    };

    let row = index("row", nrows)?;
    let col = index("column", ncols)?;
    Ok((row, col))
}

/// Write `coo` as a `pattern general` Matrix Market file.
pub fn write_matrix_market<W: Write>(coo: &CooMatrix, writer: W) -> TricountResult<()> {
    let mut w = BufWriter::new(writer);
    writeln!(w, "%%MatrixMarket matrix coordinate pattern general")?;
    writeln!(w, "{} {} {}", coo.nrows, coo.ncols, coo.len())?;
    for (row, col) in coo.entries() {
        writeln!(w, "{} {}", row + 1, col + 1)?;
    }
    w.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn parse(text: &str) -> TricountResult<(MtxHeader, CooMatrix)> {
        parse_matrix_market(Cursor::new(text))
    }

    #[test]
    fn test_parse_symmetric_pattern() {
        let text = "%%MatrixMarket matrix coordinate pattern symmetric\n\
                    % a comment\n\
                    3 3 3\n\
                    2 1\n\
                    3 2\n\
                    3 1\n";
        let (header, coo) = parse(text).unwrap();
        assert_eq!(header.symmetry, "symmetric");
        assert_eq!(coo.rows, vec![1, 2, 2]);
        assert_eq!(coo.cols, vec![0, 1, 0]);
        assert_eq!(coo.to_csc().unwrap().nnz(), 6);
    }

    #[test]
    fn test_parse_real_values_ignored() {
        let text = "%%MatrixMarket matrix coordinate real general\n2 2 2\n1 2 0.5\n2 1 -3e2\n";
        let (_, coo) = parse(text).unwrap();
        assert_eq!(coo.len(), 2);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(matches!(parse(""), Err(TricountError::Parse { .. })));
        assert!(matches!(
            parse("%%MatrixMarket matrix array real general\n2 2\n"),
            Err(TricountError::Unsupported(_))
        ));
        assert!(matches!(
            parse("%%MatrixMarket matrix coordinate complex general\n1 1 0\n"),
            Err(TricountError::Unsupported(_))
        ));
        assert!(matches!(
            parse("%%MatrixMarket matrix coordinate pattern general\n2 2\n"),
            Err(TricountError::Parse { line: 2, .. })
        ));
        assert!(matches!(
            parse("%%MatrixMarket matrix coordinate pattern general\n2 2 1\n3 1\n"),
            Err(TricountError::Parse { line: 3, .. })
        ));
        assert!(matches!(
            parse("%%MatrixMarket matrix coordinate pattern general\n2 2 2\n2 1\n"),
            Err(TricountError::Parse { .. })
        ));
        assert!(matches!(
            parse("%%MatrixMarket matrix coordinate pattern general\n2 2 1\n2 1\n1 2\n"),
            Err(TricountError::Parse { line: 4, .. })
        ));
    }

    #[test]
    fn test_huge_declared_count_is_parse_error() {
        let text = "%%MatrixMarket matrix coordinate pattern general\n3 3 18446744073709551615\n1 2\n";
        assert!(matches!(parse(text), Err(TricountError::Parse { line: 3, .. })));

        let text = "%%MatrixMarket matrix coordinate pattern general\n3 3 4000000000\n";
        assert!(matches!(parse(text), Err(TricountError::Parse { .. })));
    }

    #[test]
    fn test_write_then_read() {
        let mut coo = CooMatrix::new(4, 4);
        coo.push(1, 0);
        coo.push(3, 2);
        let mut buf = Vec::new();
        write_matrix_market(&coo, &mut buf).unwrap();
        let (header, parsed) = parse_matrix_market(Cursor::new(buf)).unwrap();
        assert_eq!(header.field, "pattern");
        assert_eq!(parsed, coo);
    }
}
