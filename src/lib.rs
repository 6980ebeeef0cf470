#![warn(missing_debug_implementations, rust_2018_idioms, missing_docs)]

/*!
A region quadtree used as a lossless compressor for grayscale raster grids.

A grid is fed into the tree one `(row, column, value)` point at a time. A
box stays a single leaf for as long as every point inserted into it carries
the same value, so flat regions collapse to one node; a conflicting value
splits the box into four quadrants and pushes the conflict one level down.
The finished tree encodes to a short list of `rectangle -> value` records,
and decoding those records reproduces the original grid exactly.
*/

/*!
# When a region quadtree is useful:

Grids with large same-valued areas compress extremely well: a fully uniform
grid of any size becomes a single record, and images with a few flat
regions need only a handful. Noisy grids degrade gracefully to one record
per cell, so the scheme is never lossy.
*/

/*!
# How it works:

## Original grid:

```ignore
5 5 5 5
5 5 5 5
5 5 9 9
5 5 9 9
```

The whole grid starts as one leaf. Points are inserted row by row; every 5
merges into the existing leaf. The first 9 conflicts, so the box divides
into four quadrant leaves, each inheriting the 5, and the conflict repeats
inside the lower-right quadrant until the 9s own their own cells.

## Encoded records:

```ignore
4 4
0 2 1 3 5     <- the three all-5 quadrants stay single records
2 3 2 3 9
3 3 3 3 9
2 2 2 2 9
3 2 3 2 9
0 0 1 1 5
2 0 3 1 5
```

Each line is `x1 y1 x2 y2 value` with inclusive corners. The rectangles are
pairwise disjoint and tile the grid, so they can be replayed in any order
to rebuild it.
*/

pub use tree::QuadTree;

/// `QuadTree` structure and its encoded form.
pub mod tree;

/// Library error types.
pub mod error;

/// `Point` and `BoundingBox` geometry primitives.
pub mod geom;

/// `PixelMatrix` struct and the textual grid-image format.
pub mod matrix;

#[cfg(test)]
mod unit_tests;
