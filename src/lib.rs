/*!
tridist3d
=========

**tridist3d** is a small 3-dimensional proximity-query library written with
the rust programming language. It computes minimum distances and closest
points between the convex leaf primitives of a collision-detection pipeline:
line segments and triangles.

The triangle-triangle query is the leaf-level kernel of a bounding-volume
hierarchy traversal: the traversal (not part of this crate) supplies candidate
triangle pairs and consumes the returned distance to prune its search.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod math;
pub mod query;
pub mod shape;
