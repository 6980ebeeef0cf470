
use serde::{Serialize, Deserialize};

/// Integer midpoint of two coordinates, truncating toward the lesser.
///
/// The truncation matters: splitting a box of odd extent with this midpoint
/// still partitions it into sub-boxes with no off-by-one gaps.
pub fn mid(a: usize, b: usize) -> usize {
  let (mn, mx) = if a < b { (a, b) } else { (b, a) };
  mn + (mx - mn) / 2
}

/// A grid cell with an optional pixel value.
///
/// `x` is the row index and `y` the column index. A point without a value is
/// represented by `data == None`, never by a sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
  /// Row index.
  pub x: usize,
  /// Column index.
  pub y: usize,
  /// Pixel value carried by this point, if any.
  pub data: Option<u32>,
}
impl Point {
  /// Creates a valueless point.
  pub fn new(x: usize, y: usize) -> Self {
    Point { x, y, data: None }
  }
  /// Creates a point carrying a pixel value.
  pub fn with_data(x: usize, y: usize, data: u32) -> Self {
    Point { x, y, data: Some(data) }
  }
}

/// A closed axis-aligned rectangle on the integer grid.
///
/// Both corners are inclusive. A box whose corners are ordered the wrong way
/// round is empty: it contains no point and has zero extent. Empty boxes
/// arise as quadrants of degenerate (1-row or 1-column) parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoundingBox {
  /// Corner with the least row and column indices.
  pub bottom_left: Point,
  /// Corner with the greatest row and column indices.
  pub top_right: Point,
}
impl BoundingBox {
  /// Creates a bounding box from its inclusive corners.
  pub fn new(bottom_left: Point, top_right: Point) -> Self {
    BoundingBox { bottom_left, top_right }
  }
  /// Returns true iff the point lies inside the box, borders included.
  /// ```
  /// use region_quadtree::geom::{BoundingBox, Point};
  /// let bbox = BoundingBox::new(Point::new(0, 0), Point::new(3, 3));
  /// assert!(bbox.contains(&Point::new(0, 0)));
  /// assert!(bbox.contains(&Point::new(3, 3)));
  /// assert!(!bbox.contains(&Point::new(4, 0)));
  /// ```
  pub fn contains(&self, point: &Point) -> bool {
    self.bottom_left.x <= point.x && point.x <= self.top_right.x
    && self.bottom_left.y <= point.y && point.y <= self.top_right.y
  }
  /// Returns true iff the point sits on the box's right-border corner, i.e.
  /// its row equals the greatest row and its column the least column.
  pub fn contains_on_right_border(&self, point: &Point) -> bool {
    self.top_right.x == point.x && self.bottom_left.y == point.y
  }
  /// The componentwise midpoint of the corners, truncating toward
  /// `bottom_left`.
  pub fn center(&self) -> Point {
    Point::new(
      mid(self.top_right.x, self.bottom_left.x),
      mid(self.top_right.y, self.bottom_left.y),
    )
  }
  /// Number of rows the box spans. Zero for an empty box.
  pub fn rows(&self) -> usize {
    if self.top_right.x < self.bottom_left.x { 0 }
    else { self.top_right.x - self.bottom_left.x + 1 }
  }
  /// Number of columns the box spans. Zero for an empty box.
  pub fn cols(&self) -> usize {
    if self.top_right.y < self.bottom_left.y { 0 }
    else { self.top_right.y - self.bottom_left.y + 1 }
  }
  /// Returns true iff the box contains no cell at all.
  pub fn is_empty(&self) -> bool {
    self.rows() == 0 || self.cols() == 0
  }
  /// Returns true iff the box is a single grid cell.
  ///
  /// A single cell cannot be divided: its SW quadrant would equal the box
  /// itself and insertion would never terminate.
  pub fn is_cell(&self) -> bool {
    self.bottom_left.x == self.top_right.x && self.bottom_left.y == self.top_right.y
  }
  /// The four quadrant boxes in construction order: NW, NE, SW, SE.
  ///
  /// For any non-empty box the non-empty quadrants are pairwise disjoint and
  /// together tile it exactly. Parents a single row or column wide yield two
  /// empty quadrants; those contain nothing and are skipped everywhere.
  pub fn quadrants(&self) -> [BoundingBox; 4] {
    let bottom_left = self.bottom_left;
    let top_right = self.top_right;
    let center = self.center();
    [
      BoundingBox::new(
        Point::new(bottom_left.x, center.y + 1),
        Point::new(center.x, top_right.y),
      ),
      BoundingBox::new(
        Point::new(center.x + 1, center.y + 1),
        Point::new(top_right.x, top_right.y),
      ),
      BoundingBox::new(
        Point::new(bottom_left.x, bottom_left.y),
        Point::new(center.x, center.y),
      ),
      BoundingBox::new(
        Point::new(center.x + 1, bottom_left.y),
        Point::new(top_right.x, center.y),
      ),
    ]
  }
}
