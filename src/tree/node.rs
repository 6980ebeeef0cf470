
use crate::geom::{BoundingBox, Point};
use crate::tree::codec::RectRecord;

/// A single node of the region quadtree.
///
/// A node is in exactly one of two states: a leaf holding zero or one stored
/// point, or an internal node owning exactly four children. The bounding box
/// never changes after construction, and each child is exclusively owned by
/// its parent, so dropping a node releases its whole subtree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
  bbox: BoundingBox,
  point: Option<Point>,
  children: Option<Box<[Node; 4]>>,
}
impl Node {
  /// Creates an empty leaf over the given box.
  pub(crate) fn new(bbox: BoundingBox) -> Self {
    Node {
      bbox,
      point: None,
      children: None,
    }
  }
  /// Creates a leaf pre-loaded with a carried point.
  ///
  /// The carried point's coordinates may lie outside this node's box: after a
  /// divide the parent's point labels all four quadrants, and only its value
  /// matters until a conflicting insertion arrives.
  fn carrying(bbox: BoundingBox, point: Option<Point>) -> Self {
    Node {
      bbox,
      point,
      children: None,
    }
  }
  pub(crate) fn bbox(&self) -> &BoundingBox {
    &self.bbox
  }
  pub(crate) fn is_leaf(&self) -> bool {
    self.children.is_none()
  }
  pub(crate) fn contains(&self, point: &Point) -> bool {
    self.bbox.contains(point)
  }
  /// Inserts a point known to be inside this node's box.
  ///
  /// A leaf absorbs the point if it has capacity, merges it silently if the
  /// value matches the stored one, replaces the stored point on a
  /// single-cell box, and divides otherwise. An internal node hands the
  /// point to the unique child whose box contains it.
  ///
  /// # Panics
  /// Panics if no child of an internal node contains the point. The four
  /// quadrants tile their parent exactly, so this can only mean the tree's
  /// structure is corrupted; it is never a recoverable condition.
  pub(crate) fn insert(&mut self, point: Point) {
    if let Some(children) = &mut self.children {
      match children.iter_mut().find(|child| child.contains(&point)) {
        Some(child) => child.insert(point),
        None => panic!(
          "no quadrant of [({}, {}) -> ({}, {})] contains ({}, {}): tiling invariant violated",
          self.bbox.bottom_left.x, self.bbox.bottom_left.y,
          self.bbox.top_right.x, self.bbox.top_right.y,
          point.x, point.y,
        ),
      }
      return
    }
    match self.point {
      None => self.point = Some(point),
      Some(stored) => {
        if stored.data == point.data {
          /* Union: the region already carries this value */
        }
        else if self.bbox.is_cell() {
          /* Intersection: a single cell cannot divide, so the newer
          value replaces the older one exactly */
          self.point = Some(point);
        }
        else {
          self.divide();
          self.insert(point);
        }
      },
    }
  }
  /// Splits this leaf into four quadrant leaves.
  ///
  /// The stored point, if any, is copied into every child: its value labels
  /// the whole parent region, so each quadrant inherits it until a
  /// conflicting value forces a further split there. Degenerate parents
  /// produce two empty-box children, which never receive an insertion and
  /// are never encoded.
  fn divide(&mut self) {
    let [nw, ne, sw, se] = self.bbox.quadrants();
    let carried = self.point.take();
    self.children = Some(Box::new([
      Node::carrying(nw, carried),
      Node::carrying(ne, carried),
      Node::carrying(sw, carried),
      Node::carrying(se, carried),
    ]));
  }
  /// Depth-first traversal in construction order (NW, NE, SW, SE), emitting
  /// one rectangle record per valued leaf with a non-empty box.
  pub(crate) fn collect_records(&self, records: &mut Vec<RectRecord>) {
    match &self.children {
      Some(children) => {
        for child in children.iter() {
          child.collect_records(records);
        }
      },
      None => {
        if self.bbox.is_empty() {
          return
        }
        if let Some(value) = self.point.as_ref().and_then(|p| p.data) {
          records.push(RectRecord::new(
            self.bbox.bottom_left.x,
            self.bbox.bottom_left.y,
            self.bbox.top_right.x,
            self.bbox.top_right.y,
            value,
          ));
        }
      },
    }
  }
  /// Total number of leaves with a non-empty box in this subtree.
  pub(crate) fn leaf_count(&self) -> usize {
    match &self.children {
      Some(children) => children.iter().map(Node::leaf_count).sum(),
      None => if self.bbox.is_empty() { 0 } else { 1 },
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  fn bbox(x1: usize, y1: usize, x2: usize, y2: usize) -> BoundingBox {
    BoundingBox::new(Point::new(x1, y1), Point::new(x2, y2))
  }
  #[test]
  fn first_insert_fills_the_leaf() {
    let mut node = Node::new(bbox(0, 0, 3, 3));
    node.insert(Point::with_data(1, 1, 7));
    assert!(node.is_leaf());
    assert_eq!(Some(Point::with_data(1, 1, 7)), node.point);
  }
  #[test]
  fn same_value_insert_is_a_union() {
    let mut node = Node::new(bbox(0, 0, 3, 3));
    node.insert(Point::with_data(0, 0, 7));
    let before = node.clone();
    node.insert(Point::with_data(2, 3, 7));
    assert_eq!(before, node);
  }
  #[test]
  fn conflicting_value_divides() {
    let mut node = Node::new(bbox(0, 0, 3, 3));
    node.insert(Point::with_data(0, 0, 7));
    node.insert(Point::with_data(3, 3, 9));
    assert!(!node.is_leaf());
    assert_eq!(None, node.point);
    /* The carried value labels every quadrant; the 9 lands in the 2x2 NE
    quadrant, which divides once more before the single-cell replace fires:
    three 2x2 leaves of 7 plus four unit leaves, one of them the 9 */
    let mut records = Vec::new();
    node.collect_records(&mut records);
    assert_eq!(7, records.len());
    assert_eq!(6, records.iter().filter(|r| r.value == 7).count());
    assert!(records.contains(&RectRecord::new(3, 3, 3, 3, 9)));
  }
  #[test]
  fn conflicting_value_divides_once_on_a_2x2_box() {
    let mut node = Node::new(bbox(0, 0, 1, 1));
    node.insert(Point::with_data(0, 0, 7));
    node.insert(Point::with_data(1, 1, 9));
    /* All four quadrants are single cells, so one divide suffices */
    let mut records = Vec::new();
    node.collect_records(&mut records);
    assert_eq!(4, records.len());
    assert_eq!(3, records.iter().filter(|r| r.value == 7).count());
    assert!(records.contains(&RectRecord::new(1, 1, 1, 1, 9)));
  }
  #[test]
  fn single_cell_conflict_replaces() {
    let mut node = Node::new(bbox(2, 2, 2, 2));
    node.insert(Point::with_data(2, 2, 7));
    node.insert(Point::with_data(2, 2, 9));
    assert!(node.is_leaf());
    assert_eq!(Some(Point::with_data(2, 2, 9)), node.point);
  }
  #[test]
  fn one_column_box_divides_instead_of_replacing() {
    let mut node = Node::new(bbox(0, 0, 2, 0));
    node.insert(Point::with_data(0, 0, 5));
    node.insert(Point::with_data(2, 0, 9));
    assert!(!node.is_leaf());
    let mut records = Vec::new();
    node.collect_records(&mut records);
    /* Cells (0,0) and (1,0) keep the carried 5, cell (2,0) holds the 9 */
    let covered: usize = records.iter()
      .map(|r| (r.x2 - r.x1 + 1) * (r.y2 - r.y1 + 1))
      .sum();
    assert_eq!(3, covered);
    assert!(records.iter().any(|r| r.value == 9 && r.x1 == 2 && r.x2 == 2));
  }
  #[test]
  #[should_panic(expected = "tiling invariant violated")]
  fn internal_node_panics_when_no_child_matches() {
    let mut node = Node::new(bbox(0, 0, 3, 3));
    node.insert(Point::with_data(0, 0, 1));
    node.insert(Point::with_data(3, 3, 2));
    /* Bypass the QuadTree bounds check to hit the structural assertion */
    node.insert(Point::with_data(9, 9, 3));
  }
}
