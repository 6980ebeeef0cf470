
mod node;
mod codec;

pub use codec::{Encoding, RectRecord};

use node::Node;
use crate::error::QuadTreeError as Error;
use crate::geom::{BoundingBox, Point};
use crate::matrix::PixelMatrix;

type Result<T> = std::result::Result<T, Error>;

/// A region quadtree over a rectangular grid of grayscale pixel values.
///
/// The tree is a lossless run-length-like compression scheme: a box stays a
/// single leaf for as long as every point inserted into it carries the same
/// value, so uniform regions collapse into one rectangle instead of
/// per-pixel storage. Conflicting values split the box into four quadrant
/// children and the conflict is resolved one level down.
///
/// ```
/// fn main() -> Result<(), region_quadtree::error::QuadTreeError> {
///   use region_quadtree::{QuadTree, matrix::PixelMatrix};
///   let matrix = PixelMatrix::from_values(4, 4, vec![7; 16]);
///   let tree = QuadTree::from_matrix(&matrix);
///   // A fully uniform grid compresses to a single rectangle.
///   assert_eq!(1, tree.encode().records().len());
///   assert_eq!(matrix, tree.to_matrix()?);
///   Ok(())
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuadTree {
  height: usize,
  width: usize,
  /// None only for a zero-sized grid, which has no bounding box at all.
  root: Option<Node>,
}

/* Public */
impl QuadTree {
  /// Returns an empty `QuadTree` over the grid `[0, height-1] x [0, width-1]`.
  ///
  /// The root box must bound every point that will ever be inserted;
  /// inserting outside it is a contract violation reported as
  /// [`OutOfBounds`](crate::error::QuadTreeError::OutOfBounds).
  /// ```
  /// use region_quadtree::QuadTree;
  /// let tree = QuadTree::new(4, 3);
  /// assert_eq!(3, tree.height());
  /// assert_eq!(4, tree.width());
  /// assert!(tree.encode().records().is_empty());
  /// ```
  pub fn new(width: usize, height: usize) -> Self {
    let root = if width == 0 || height == 0 {
      None
    }
    else {
      Some(Node::new(BoundingBox::new(
        Point::new(0, 0),
        Point::new(height-1, width-1),
      )))
    };
    QuadTree {
      height,
      width,
      root,
    }
  }
  /// Builds a `QuadTree` from a pixel matrix by inserting its points one at
  /// a time in row-major order.
  pub fn from_matrix(matrix: &PixelMatrix) -> Self {
    let mut tree = QuadTree::new(matrix.width, matrix.height);
    if let Some(root) = &mut tree.root {
      for point in matrix.points() {
        root.insert(point);
      }
    }
    tree
  }
  /// Number of rows of the underlying grid.
  pub fn height(&self) -> usize {
    self.height
  }
  /// Number of columns of the underlying grid.
  pub fn width(&self) -> usize {
    self.width
  }
  /// Inserts one `(row, column, value)` point.
  ///
  /// Re-inserting a point whose value the containing leaf already holds is a
  /// no-op, a conflicting value splits the leaf, and a conflicting value on
  /// a single-cell leaf replaces the stored one.
  /// ```
  /// fn main() -> Result<(), region_quadtree::error::QuadTreeError> {
  ///   use region_quadtree::QuadTree;
  ///   use region_quadtree::geom::Point;
  ///   let mut tree = QuadTree::new(2, 2);
  ///   tree.insert(Point::with_data(0, 0, 5))?;
  ///   tree.insert(Point::with_data(1, 1, 5))?;
  ///   assert_eq!(1, tree.encode().records().len());
  ///   assert!(tree.insert(Point::with_data(2, 0, 5)).is_err());
  ///   Ok(())
  /// }
  /// ```
  pub fn insert(&mut self, point: Point) -> Result<()> {
    let root = match &mut self.root {
      Some(root) if root.contains(&point) => root,
      _ => return Err(Error::OutOfBounds {
        x_y: [point.x, point.y],
        min_x_y: [0, 0],
        max_x_y: [self.height.saturating_sub(1), self.width.saturating_sub(1)],
      }),
    };
    root.insert(point);
    Ok(())
  }
  /// Encodes the tree as its list of leaf rectangles.
  ///
  /// The traversal is depth-first in construction order (NW, NE, SW, SE),
  /// so the record order is deterministic; decoding does not depend on it.
  pub fn encode(&self) -> Encoding {
    let mut records = Vec::new();
    if let Some(root) = &self.root {
      root.collect_records(&mut records);
    }
    Encoding::from_parts(self.height, self.width, records)
  }
  /// Reconstructs the full pixel matrix the tree was built from.
  ///
  /// # Errors
  /// Returns an error only if the tree's own encoding fails to decode, which
  /// would indicate a structural bug rather than bad input.
  pub fn to_matrix(&self) -> Result<PixelMatrix> {
    Ok(self.encode().decode()?)
  }
  /// Number of leaves with a non-empty box in the tree.
  pub fn leaf_count(&self) -> usize {
    match &self.root {
      Some(root) => root.leaf_count(),
      None => 0,
    }
  }
  /// Returns true iff nothing has been inserted yet.
  pub fn is_empty(&self) -> bool {
    self.encode().records().is_empty()
  }
  /// The root bounding box, or `None` for a zero-sized grid.
  pub fn bounds(&self) -> Option<&BoundingBox> {
    self.root.as_ref().map(Node::bbox)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  #[test]
  fn new_tree_is_an_empty_leaf() {
    let tree = QuadTree::new(4, 4);
    assert!(tree.is_empty());
    assert_eq!(1, tree.leaf_count());
    assert_eq!(
      Some(&BoundingBox::new(Point::new(0, 0), Point::new(3, 3))),
      tree.bounds(),
    );
  }
  #[test]
  fn zero_sized_grid_has_no_bounds() {
    let tree = QuadTree::new(0, 3);
    assert_eq!(None, tree.bounds());
    assert_eq!(0, tree.leaf_count());
    assert!(tree.encode().records().is_empty());
  }
  #[test]
  fn insert_outside_root_box_is_rejected() {
    let mut tree = QuadTree::new(2, 2);
    assert!(matches!(
      tree.insert(Point::with_data(0, 2, 1)),
      Err(Error::OutOfBounds { .. })
    ));
    assert!(matches!(
      QuadTree::new(0, 0).insert(Point::with_data(0, 0, 1)),
      Err(Error::OutOfBounds { .. })
    ));
  }
  #[test]
  fn uniform_region_stays_one_leaf() {
    let mut tree = QuadTree::new(8, 8);
    for x in 0..8 {
      for y in 0..8 {
        tree.insert(Point::with_data(x, y, 7)).unwrap();
      }
    }
    assert_eq!(1, tree.leaf_count());
    let records = tree.encode();
    assert_eq!(
      &[RectRecord::new(0, 0, 7, 7, 7)],
      records.records(),
    );
  }
}
