
/* Public Interface Tests */

use crate::{
  QuadTree,
  geom::Point,
  matrix::PixelMatrix,
  tree::{Encoding, RectRecord},
};

type Result<T> = std::result::Result<T, crate::error::QuadTreeError>;

/* Private funcs used in testing */
fn assert_round_trip(matrix: &PixelMatrix) {
  let tree = QuadTree::from_matrix(matrix);
  let encoding = tree.encode();
  assert_eq!(matrix, &encoding.decode().unwrap());
  /* The plaintext path must survive the same trip */
  let reread = Encoding::from_plaintext(&encoding.to_plaintext()).unwrap();
  assert_eq!(matrix, &reread.decode().unwrap());
}

#[test]
fn round_trip_2x2_mixed() -> Result<()> {
  let matrix = PixelMatrix::from_values(2, 2, vec![
    5, 5,
    5, 9,
  ]);
  let tree = QuadTree::from_matrix(&matrix);
  /* The conflicting 9 splits the root into four unit leaves; the carried
  5 labels three of them and the 9 replaces it in its own cell */
  let encoding = tree.encode();
  assert_eq!(4, encoding.records().len());
  assert_eq!(3, encoding.records().iter().filter(|r| r.value == 5).count());
  assert!(encoding.records().contains(&RectRecord::new(1, 1, 1, 1, 9)));
  assert_eq!(matrix, tree.to_matrix()?);
  Ok(())
}
#[test]
fn round_trip_uniform_4x4() -> Result<()> {
  let matrix = PixelMatrix::from_values(4, 4, vec![7; 16]);
  let tree = QuadTree::from_matrix(&matrix);
  assert_eq!(1, tree.leaf_count());
  assert_eq!(
    &[RectRecord::new(0, 0, 3, 3, 7)],
    tree.encode().records(),
  );
  assert_eq!(matrix, tree.to_matrix()?);
  Ok(())
}
#[test]
fn round_trip_single_cell() {
  assert_round_trip(&PixelMatrix::from_values(1, 1, vec![3]));
}
#[test]
fn round_trip_single_row_and_column() {
  assert_round_trip(&PixelMatrix::from_values(5, 1, vec![5, 5, 9, 5, 2]));
  assert_round_trip(&PixelMatrix::from_values(1, 5, vec![5, 5, 9, 5, 2]));
  /* All conflicts at the very corner the original border override keyed on */
  assert_round_trip(&PixelMatrix::from_values(1, 3, vec![5, 5, 9]));
  assert_round_trip(&PixelMatrix::from_values(3, 1, vec![5, 5, 9]));
}
#[test]
fn round_trip_odd_extents() {
  assert_round_trip(&PixelMatrix::from_values(3, 3, vec![
    1, 1, 2,
    1, 1, 2,
    3, 3, 3,
  ]));
  assert_round_trip(&PixelMatrix::from_values(7, 5, (0..35u32).map(|n| n % 4).collect::<Vec<u32>>()));
}
#[test]
fn round_trip_empty_matrix() {
  let matrix = PixelMatrix::new();
  let tree = QuadTree::from_matrix(&matrix);
  let encoding = tree.encode();
  /* A zero-point grid must not produce spurious records */
  assert_eq!("0 0\n", encoding.to_plaintext());
  assert_eq!(matrix, encoding.decode().unwrap());
}
#[test]
fn round_trip_random_matrices() {
  use rand::Rng;
  let mut rng = rand::thread_rng();
  for &(width, height) in &[(1, 8), (8, 1), (4, 4), (6, 9), (16, 16), (13, 7)] {
    /* A small alphabet forces plenty of unions and splits alike */
    let values: Vec<u32> = (0..width*height).map(|_| rng.gen_range(0, 3)).collect();
    assert_round_trip(&PixelMatrix::from_values(width, height, values));
  }
}
#[test]
fn reinsertion_is_idempotent() -> Result<()> {
  let matrix = PixelMatrix::from_values(4, 4, vec![
    5, 5, 9, 9,
    5, 5, 9, 9,
    5, 5, 5, 5,
    5, 5, 5, 2,
  ]);
  let mut tree = QuadTree::from_matrix(&matrix);
  let before = tree.clone();
  tree.insert(Point::with_data(0, 2, 9))?;
  tree.insert(Point::with_data(3, 3, 2))?;
  tree.insert(Point::with_data(0, 0, 5))?;
  assert_eq!(before, tree);
  Ok(())
}
#[test]
fn single_cell_conflict_updates_the_value() -> Result<()> {
  let matrix = PixelMatrix::from_values(2, 2, vec![
    5, 5,
    5, 9,
  ]);
  let mut tree = QuadTree::from_matrix(&matrix);
  /* All four leaves are single cells now, so a differing value replaces
  the stored one instead of splitting further */
  let leaves = tree.leaf_count();
  tree.insert(Point::with_data(1, 1, 4))?;
  assert_eq!(leaves, tree.leaf_count());
  assert_eq!(4, tree.to_matrix()?.get(1, 1).unwrap());
  Ok(())
}
#[test]
fn grid_image_pipeline() -> Result<()> {
  let input = "P2\n4 4\n\
    5 5 5 5\n\
    5 5 5 5\n\
    5 5 9 9\n\
    5 5 9 9\n";
  let matrix = PixelMatrix::from_ascii(input)?;
  let tree = QuadTree::from_matrix(&matrix);
  let restored = tree.encode().decode()?;
  assert_eq!(input, restored.to_ascii());
  Ok(())
}
#[test]
fn encoding_survives_serde() {
  let matrix = PixelMatrix::from_values(4, 4, vec![
    7, 7, 7, 7,
    7, 7, 7, 7,
    1, 1, 7, 7,
    1, 1, 7, 7,
  ]);
  let encoding = QuadTree::from_matrix(&matrix).encode();
  let json = serde_json::to_string(&encoding).unwrap();
  let reread: Encoding = serde_json::from_str(&json).unwrap();
  assert_eq!(encoding, reread);
  assert_eq!(matrix, reread.decode().unwrap());
}
#[test]
fn encoded_rectangles_are_disjoint_and_exhaustive() {
  let matrix = PixelMatrix::from_values(8, 8, (0..64).map(|n| (n / 13) as u32).collect::<Vec<u32>>());
  let encoding = QuadTree::from_matrix(&matrix).encode();
  let mut covered = vec![0usize; 64];
  for record in encoding.records() {
    for x in record.x1..=record.x2 {
      for y in record.y1..=record.y2 {
        covered[x*8 + y] += 1;
      }
    }
  }
  assert!(covered.iter().all(|&count| count == 1));
}
