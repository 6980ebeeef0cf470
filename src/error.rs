/*!
These are all the custom errors that this library could return.

This library uses a nesting system to convey the most useful information
while minimising the number of unique enumerations required:
- Parse:
  - The error occured while reading one of the textual formats, meaning that
    no tree or matrix was produced by the operation that resulted in this error.
- Decode:
  - The error occured while rasterising an encoded rectangle list, meaning
    that the encoding itself violated a structural invariant.
*/

/// Errors produced as a result of interactions with the QuadTree object.
#[derive(Clone, Debug)]
pub enum QuadTreeError {
  /// Produced when a user attempts to insert a point outside the bounds of
  /// the root bounding box.
  ///
  /// The root box must be computed to exactly bound all input points before
  /// any insertion, so this always signals a caller contract violation.
  OutOfBounds {
    ///
    x_y: [usize; 2],
    ///
    min_x_y: [usize; 2],
    ///
    max_x_y: [usize; 2],
  },
  /// Propogation of a PixelMatrixError.
  PixelMatrix {
    ///
    source: Box<PixelMatrixError>,
  },
  /// Propogation of a ParseError.
  Parse {
    ///
    source: Box<ParseError>,
  },
  /// Propogation of a DecodeError.
  Decode {
    ///
    source: Box<DecodeError>,
  },
}
impl std::error::Error for QuadTreeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    use QuadTreeError::*;
    match self {
      PixelMatrix{source} => Some(source),
      Parse{source} => Some(source),
      Decode{source} => Some(source),
      _ => None,
    }
  }
}
impl std::fmt::Display for QuadTreeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use QuadTreeError::*;
    match self {
      OutOfBounds {
        x_y: [x, y],
        min_x_y: [min_x, min_y],
        max_x_y: [max_x, max_y]
      } => write!(f, "Attempt to insert a point at coordinates ({}, {}) which are not in the range of the tree's root bounding box: ({}, {}) -> ({}, {})", x, y, min_x, min_y, max_x, max_y),
      PixelMatrix{source} => write!(f, "{}", source),
      Parse{source} => write!(f, "Error during parse: {}", source),
      Decode{source} => write!(f, "Error during decode: {}", source),
    }
  }
}
impl From<PixelMatrixError> for QuadTreeError {
  fn from(error: PixelMatrixError) -> Self {
    QuadTreeError::PixelMatrix {
      source: Box::new(error)
    }
  }
}
impl From<ParseError> for QuadTreeError {
  fn from(error: ParseError) -> Self {
    QuadTreeError::Parse {
      source: Box::new(error)
    }
  }
}
impl From<DecodeError> for QuadTreeError {
  fn from(error: DecodeError) -> Self {
    QuadTreeError::Decode {
      source: Box::new(error)
    }
  }
}

/// Errors produced as a result of interactions with the PixelMatrix object.
#[derive(Clone, Debug)]
pub enum PixelMatrixError {
  /// Produced when a user attempts to read or write a pixel outside of the
  /// valid range.
  OutOfBounds {
    ///
    x_y: [usize; 2],
    ///
    max_x_y: [usize; 2],
  }
}
impl std::error::Error for PixelMatrixError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for PixelMatrixError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use PixelMatrixError::*;
    match self {
      OutOfBounds {
        x_y: [x, y],
        max_x_y: [max_x, max_y],
      } => write!(f, "Attempt to access a pixel at coordinates ({}, {}) which are not in the range of the matrix: (0, 0) -> ({}, {})", x, y, max_x, max_y),
    }
  }
}

/// Errors produced while reading the textual grid-image or encoding formats.
#[derive(Clone, Debug)]
pub enum ParseError {
  /// Produced when the grid-image magic token is missing or unrecognised.
  BadMagic {
    /// The token found where the magic was expected, if any.
    found: Option<String>,
  },
  /// Produced when the input ends before a required token.
  MissingToken {
    /// Name of the token that was expected.
    expected: &'static str,
  },
  /// Produced when a token could not be read as a non-negative integer.
  InvalidToken {
    ///
    token: String,
  },
  /// Produced when the declared dimensions multiply out beyond the maximum
  /// representable grid size.
  DimensionOverflow {
    ///
    width: usize,
    ///
    height: usize,
  },
  /// Produced when fewer pixel values are present than the declared
  /// dimensions require.
  TruncatedValues {
    /// Number of values the header declared.
    expected: usize,
    /// Number of values actually present.
    found: usize,
  },
  /// Produced when more pixel values are present than the declared
  /// dimensions allow.
  ExcessValues {
    /// Number of values the header declared.
    expected: usize,
  },
  /// Produced when an encoding line does not hold a full rectangle record.
  TruncatedRecord {
    /// 1-based line number of the offending record.
    line: usize,
  },
}
impl std::error::Error for ParseError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for ParseError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use ParseError::*;
    match self {
      BadMagic{found: Some(token)} => write!(f, "Expected the magic token 'P2' at the start of the grid image, found '{}'", token),
      BadMagic{found: None} => write!(f, "Expected the magic token 'P2' at the start of the grid image, found nothing"),
      MissingToken{expected} => write!(f, "Input ended before the expected {} token", expected),
      InvalidToken{token} => write!(f, "Could not read the token '{}' as a non-negative integer", token),
      DimensionOverflow{width, height} => write!(f, "The declared dimensions {}x{} multiply out beyond the maximum representable grid size", width, height),
      TruncatedValues{expected, found} => write!(f, "The header declared {} pixel values but only {} are present", expected, found),
      ExcessValues{expected} => write!(f, "More pixel values are present than the {} the header declared", expected),
      TruncatedRecord{line} => write!(f, "Line {} does not hold a full 'x1 y1 x2 y2 value' record", line),
    }
  }
}

/// Errors produced while rasterising an encoded rectangle list back into a
/// pixel matrix.
#[derive(Clone, Debug)]
pub enum DecodeError {
  /// Produced when a rectangle record reaches outside the grid declared by
  /// the encoding's header.
  RecordOutOfBounds {
    /// The offending record's corners as [x1, y1, x2, y2].
    record: [usize; 4],
    /// The maximum coordinates the header allows.
    max_x_y: [usize; 2],
  },
  /// Produced when two rectangle records cover the same cell.
  ///
  /// Leaf rectangles of a correct encoding are pairwise disjoint, so this
  /// indicates a corrupted or hand-altered encoding.
  OverlappingRecords {
    ///
    x: usize,
    ///
    y: usize,
  },
}
impl std::error::Error for DecodeError {
  fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
    None
  }
}
impl std::fmt::Display for DecodeError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    use DecodeError::*;
    match self {
      RecordOutOfBounds {
        record: [x1, y1, x2, y2],
        max_x_y: [max_x, max_y],
      } => write!(f, "The rectangle ({}, {}) -> ({}, {}) reaches outside the declared grid: (0, 0) -> ({}, {})", x1, y1, x2, y2, max_x, max_y),
      OverlappingRecords{x, y} => write!(f, "Two rectangle records cover the cell ({}, {})", x, y),
    }
  }
}
