
use serde::{Serialize, Deserialize};
use crate::error::{DecodeError, ParseError};
use crate::matrix::PixelMatrix;

type Result<T> = std::result::Result<T, DecodeError>;

/// One leaf rectangle of an encoded tree: an inclusive box plus the value
/// that fills it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RectRecord {
  /// Least row of the rectangle.
  pub x1: usize,
  /// Least column of the rectangle.
  pub y1: usize,
  /// Greatest row of the rectangle.
  pub x2: usize,
  /// Greatest column of the rectangle.
  pub y2: usize,
  /// Pixel value filling every cell of the rectangle.
  pub value: u32,
}
impl RectRecord {
  /// Creates a record from inclusive corners and a fill value.
  pub fn new(x1: usize, y1: usize, x2: usize, y2: usize, value: u32) -> Self {
    RectRecord { x1, y1, x2, y2, value }
  }
}

/// The encoded form of a tree: the grid dimensions plus one rectangle record
/// per valued leaf.
///
/// Each record is self-describing, so decoding does not depend on record
/// order. The rectangles of a correct encoding are pairwise disjoint and
/// together tile the grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
  /// Number of rows in the grid the encoding describes.
  pub height: usize,
  /// Number of columns in the grid the encoding describes.
  pub width: usize,
  records: Vec<RectRecord>,
}
impl Encoding {
  pub(crate) fn from_parts(height: usize, width: usize, records: Vec<RectRecord>) -> Self {
    Encoding {
      height,
      width,
      records,
    }
  }
  /// The leaf rectangles, in the encoder's traversal order.
  pub fn records(&self) -> &[RectRecord] {
    &self.records
  }
  /// Rasterises the rectangle list back into the full pixel matrix.
  ///
  /// Records may be applied in any order. A record reaching outside the
  /// declared grid, or two records covering the same cell, mean the encoding
  /// is corrupted and produce an error rather than a partial matrix.
  /// ```
  /// use region_quadtree::{QuadTree, matrix::PixelMatrix};
  /// let m = PixelMatrix::from_values(2, 2, vec![5, 5, 5, 9]);
  /// let restored = QuadTree::from_matrix(&m).encode().decode().unwrap();
  /// assert_eq!(m, restored);
  /// ```
  pub fn decode(&self) -> Result<PixelMatrix> {
    let mut matrix = PixelMatrix::with_dimensions(self.width, self.height);
    let mut written = vec![false; self.width * self.height];
    for record in &self.records {
      if record.x2 >= self.height || record.y2 >= self.width {
        return Err(DecodeError::RecordOutOfBounds {
          record: [record.x1, record.y1, record.x2, record.y2],
          max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
        })
      }
      for x in record.x1..=record.x2 {
        for y in record.y1..=record.y2 {
          if written[x*self.width + y] {
            return Err(DecodeError::OverlappingRecords { x, y })
          }
          written[x*self.width + y] = true;
          /* In bounds by the check above */
          let _ = matrix.set(x, y, record.value);
        }
      }
    }
    Ok(matrix)
  }
  /// Writes the encoding in its plaintext wire format: a `height width`
  /// header line, then one `x1 y1 x2 y2 value` line per record.
  pub fn to_plaintext(&self) -> String {
    let mut out = format!("{} {}\n", self.height, self.width);
    for record in &self.records {
      out.push_str(&format!(
        "{} {} {} {} {}\n",
        record.x1, record.y1, record.x2, record.y2, record.value,
      ));
    }
    out
  }
  /// Reads an encoding back from its plaintext wire format.
  ///
  /// Record lines may appear in any order; blank lines are ignored.
  pub fn from_plaintext(input: &str) -> std::result::Result<Self, ParseError> {
    let mut lines = input.lines().enumerate().filter(|(_, l)| !l.trim().is_empty());
    let header = match lines.next() {
      Some((_, line)) => line,
      None => return Err(ParseError::MissingToken { expected: "height width header" }),
    };
    let mut tokens = header.split_whitespace();
    let height = parse_number(tokens.next(), "height")?;
    let width = parse_number(tokens.next(), "width")?;
    let mut records = Vec::new();
    for (index, line) in lines {
      let fields: Vec<&str> = line.split_whitespace().collect();
      if fields.len() != 5 {
        return Err(ParseError::TruncatedRecord { line: index + 1 })
      }
      records.push(RectRecord::new(
        parse_field(fields[0])?,
        parse_field(fields[1])?,
        parse_field(fields[2])?,
        parse_field(fields[3])?,
        parse_value(fields[4])?,
      ));
    }
    Ok(Encoding {
      height,
      width,
      records,
    })
  }
}

fn parse_number(token: Option<&str>, expected: &'static str) -> std::result::Result<usize, ParseError> {
  match token {
    None => Err(ParseError::MissingToken { expected }),
    Some(token) => parse_field(token),
  }
}
fn parse_field(token: &str) -> std::result::Result<usize, ParseError> {
  token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
    token: token.to_string()
  })
}
fn parse_value(token: &str) -> std::result::Result<u32, ParseError> {
  token.parse::<u32>().map_err(|_| ParseError::InvalidToken {
    token: token.to_string()
  })
}
