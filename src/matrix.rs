
use serde::{Serialize, Deserialize};
use crate::error::{PixelMatrixError, ParseError};
use crate::geom::Point;

type Result<T> = std::result::Result<T, PixelMatrixError>;

/// A 2-d grayscale pixel-matrix.
///
/// Pixels are addressed as (x, y) where x is the row and y the column,
/// matching the points the quadtree consumes. Storage is row-major.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PixelMatrix {
  /// Width of the matrix: the number of columns.
  pub width: usize,
  /// Height of the matrix: the number of rows.
  pub height: usize,
  values: Vec<u32>,
}
impl PixelMatrix {
  /// Creates an empty PixelMatrix with zero width or height.
  pub fn new() -> Self {
    PixelMatrix {
      width: 0,
      height: 0,
      values: Vec::new(),
    }
  }
  /// Creates an all-zero PixelMatrix with predefined dimensions.
  pub fn with_dimensions(width: usize, height: usize) -> Self {
    PixelMatrix {
      width,
      height,
      values: vec![0; width*height],
    }
  }
  /// Builds a PixelMatrix instance from another collection of pixel values,
  /// row by row.
  ///
  /// If the data passed in contains more values than will fit a matrix of the
  /// specified height and width, excess data is discarded. If not enough
  /// values are passed in, 0s will be appended until the right size is reached.
  pub fn from_values(width: usize, height: usize, data: impl IntoIterator<Item=u32>) -> Self {
    let mut values: Vec<u32> = data.into_iter().take(width*height).collect();
    values.resize(width*height, 0);
    PixelMatrix {
      width,
      height,
      values,
    }
  }
  /// Reads a PixelMatrix from the textual grid-image format: the magic token
  /// `P2`, then `width height`, then `width*height` whitespace-separated
  /// non-negative integers in row-major order.
  ///
  /// The adapter is strict in both directions: truncated input, surplus
  /// values and non-numeric tokens are all parse failures, and no partial
  /// matrix is ever produced.
  /// ```
  /// use region_quadtree::matrix::PixelMatrix;
  /// let m = PixelMatrix::from_ascii("P2\n2 2\n5 5\n5 9\n").unwrap();
  /// assert_eq!(2, m.width);
  /// assert_eq!(9, m.get(1, 1).unwrap());
  /// assert!(PixelMatrix::from_ascii("P2\n2 2\n5 5 5").is_err());
  /// ```
  pub fn from_ascii(input: &str) -> std::result::Result<Self, ParseError> {
    let mut tokens = input.split_whitespace();
    match tokens.next() {
      Some("P2") => {},
      Some(other) => return Err(ParseError::BadMagic {
        found: Some(other.to_string())
      }),
      None => return Err(ParseError::BadMagic { found: None }),
    }
    let width = parse_value(tokens.next(), "width")?;
    let height = parse_value(tokens.next(), "height")?;
    let expected = match width.checked_mul(height) {
      Some(expected) => expected,
      None => return Err(ParseError::DimensionOverflow { width, height }),
    };
    /* The input cannot hold more tokens than bytes, so a hostile header
    never drives the reservation */
    let mut values = Vec::with_capacity(expected.min(input.len()));
    for token in tokens.by_ref().take(expected) {
      match token.parse::<u32>() {
        Ok(value) => values.push(value),
        Err(_) => return Err(ParseError::InvalidToken {
          token: token.to_string()
        }),
      }
    }
    if values.len() < expected {
      return Err(ParseError::TruncatedValues {
        expected,
        found: values.len(),
      })
    }
    if tokens.next().is_some() {
      return Err(ParseError::ExcessValues { expected })
    }
    Ok(PixelMatrix {
      width,
      height,
      values,
    })
  }
  /// Writes the matrix back out in the textual grid-image format, one row
  /// per line.
  pub fn to_ascii(&self) -> String {
    let mut out = format!("P2\n{} {}\n", self.width, self.height);
    for row in 0..self.height {
      let line: Vec<String> = self.values[row*self.width..(row+1)*self.width]
        .iter()
        .map(u32::to_string)
        .collect();
      out.push_str(&line.join(" "));
      out.push('\n');
    }
    out
  }
  /// Returns the value of the pixel at a specific coordinate.
  pub fn get(&self, x: usize, y: usize) -> Result<u32> {
    if x >= self.height || y >= self.width {
      return Err(PixelMatrixError::OutOfBounds {
        x_y: [x, y],
        max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
      })
    }
    Ok(self.values[x*self.width + y])
  }
  /// Changes the value of the pixel at a specific coordinate.
  pub fn set(&mut self, x: usize, y: usize, value: u32) -> Result<()> {
    if x >= self.height || y >= self.width {
      return Err(PixelMatrixError::OutOfBounds {
        x_y: [x, y],
        max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
      })
    }
    self.values[x*self.width + y] = value;
    Ok(())
  }
  /// Returns all the pixel values in a specific row, in column order.
  pub fn get_row(&self, x: usize) -> Result<Vec<u32>> {
    if x >= self.height {
      return Err(PixelMatrixError::OutOfBounds {
        x_y: [x, 0],
        max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
      })
    }
    Ok(self.values[x*self.width..(x+1)*self.width].to_vec())
  }
  /// Returns all the pixel values in a specific column, in row order.
  pub fn get_column(&self, y: usize) -> Result<Vec<u32>> {
    if y >= self.width {
      return Err(PixelMatrixError::OutOfBounds {
        x_y: [0, y],
        max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
      })
    }
    let mut column = Vec::with_capacity(self.height);
    for row in 0..self.height {
      column.push(self.values[row*self.width + y]);
    }
    Ok(column)
  }
  /// Produces the contents of the matrix as a vec of its rows.
  pub fn to_rows(&self) -> Vec<Vec<u32>> {
    let mut vecs = vec![Vec::with_capacity(self.width); self.height];
    for row in 0..self.height {
      vecs[row].extend(&self.values[row*self.width..(row+1)*self.width]);
    }
    vecs
  }
  /// Produces the contents of the matrix as a flat vec of values.
  ///
  /// Vec contains each row one after another.
  pub fn to_values(&self) -> Vec<u32> {
    self.values.clone()
  }
  /// The matrix as a row-major sequence of valued points: the point set the
  /// quadtree is built from.
  pub fn points(&self) -> impl Iterator<Item=Point> + '_ {
    (0..self.height).flat_map(move |x|
      (0..self.width).map(move |y|
        Point::with_data(x, y, self.values[x*self.width + y])
      )
    )
  }
}
impl Default for PixelMatrix {
  fn default() -> Self {
    PixelMatrix::new()
  }
}

fn parse_value(token: Option<&str>, expected: &'static str) -> std::result::Result<usize, ParseError> {
  match token {
    None => Err(ParseError::MissingToken { expected }),
    Some(token) => token.parse::<usize>().map_err(|_| ParseError::InvalidToken {
      token: token.to_string()
    }),
  }
}
