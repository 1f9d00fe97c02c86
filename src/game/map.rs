// Map records
//
// A map is a sequence of typed rectangular records. The simulation only
// consumes "Block" records (they seed static bodies); every other type is
// someone else's concern and gets skipped. The line format here is the
// simplest thing that carries the record shape: `kind x y width height`.

use thiserror::Error;

/// Side length of one background tile, in world units
#[allow(dead_code)]
pub const TILE_SIZE: i32 = 16;

/// One typed rectangle from a map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapRecord {
    /// Record type, e.g. "Block". Open set; unknown kinds are skipped by
    /// the consumer, not rejected by the parser.
    pub kind: String,
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

/// Parse failure for the line-oriented map format
#[derive(Debug, Error)]
pub enum MapError {
    #[error("line {line}: expected `kind x y width height`, got {got:?}")]
    Malformed { line: usize, got: String },

    #[error("line {line}: invalid number in record")]
    BadNumber {
        line: usize,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("line {line}: width and height must be positive")]
    Degenerate { line: usize },
}

/// Parse a text map: one record per line, `#` starts a comment, blank lines
/// are ignored.
pub fn parse_map(text: &str) -> Result<Vec<MapRecord>, MapError> {
    let mut records = Vec::new();

    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split_whitespace().collect();
        let &[kind, x, y, width, height] = fields.as_slice() else {
            return Err(MapError::Malformed {
                line,
                got: trimmed.to_string(),
            });
        };

        let parse = |s: &str| {
            s.parse::<i32>()
                .map_err(|source| MapError::BadNumber { line, source })
        };
        let record = MapRecord {
            kind: kind.to_string(),
            x: parse(x)?,
            y: parse(y)?,
            width: parse(width)?,
            height: parse(height)?,
        };

        if record.width <= 0 || record.height <= 0 {
            return Err(MapError::Degenerate { line });
        }
        records.push(record);
    }

    Ok(records)
}
