//! Everything related to triangulation using ear clipping.
//!
//! The entry point is [`triangulate`], which consumes a simple polygon
//! given as an ordered vertex list and returns one triangle per clipped
//! ear. All predicates assume clockwise winding; the driver reverses
//! counter-clockwise input once before clipping begins.

use crate::math::Vec2;
use crate::triangulate::Triangulation;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors related to triangulation using ear clipping.
#[derive(Error, Debug)]
pub enum Error {
    /// The input had fewer than the 3 vertices needed to form a triangle.
    #[error("polygon must have at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// A full scan of the remaining vertices found no clippable ear.
    /// This happens for self-intersecting or degenerate input; the
    /// triangles produced so far (including a best-effort final
    /// triangle from the first three remaining vertices) are carried
    /// along with the count of vertices left unconsumed.
    #[error("no ear found with {remaining} vertices remaining; polygon is not simple")]
    Incomplete {
        triangles: Triangulation,
        remaining: usize,
    },
}

/// Determines whether the polygon's vertices are listed in clockwise
/// order, using the shoelace formula.
///
/// A degenerate or self-intersecting polygon may sum to exactly zero;
/// such input is reported as counter-clockwise rather than special-cased.
fn is_clockwise(vertices: &[Vec2]) -> bool {
    let mut sum = 0.0;
    for (i, current) in vertices.iter().enumerate() {
        let next = vertices[(i + 1) % vertices.len()];
        sum += (next.x - current.x) * (next.y + current.y);
    }
    sum > 0.0
}

/// Determines whether the interior angle at `current` is less than 180°.
///
/// Only valid for clockwise winding; under that convention the cross
/// product of the two edges leaving `current` is positive at a convex
/// corner.
#[inline(always)]
fn is_convex(prev: Vec2, current: Vec2, next: Vec2) -> bool {
    let prev_edge = prev - current;
    let next_edge = next - current;
    prev_edge.cross(next_edge) > 0.0
}

/// Determines whether `point` lies inside the clockwise triangle
/// `(prev, current, next)`.
///
/// Each directed edge contributes one signed cross product; a strictly
/// positive value places the point outside that edge. Points exactly on
/// an edge produce a zero and count as inside.
fn point_in_triangle(point: Vec2, prev: Vec2, current: Vec2, next: Vec2) -> bool {
    let alpha = (current - prev).cross(point - prev);
    let beta = (next - current).cross(point - current);
    let gamma = (prev - next).cross(point - next);

    alpha <= 0.0 && beta <= 0.0 && gamma <= 0.0
}

/// Determines whether the vertex at `current_index` is an ear, i.e.
/// whether the triangle it forms with its neighbours contains no other
/// remaining polygon vertex.
///
/// The caller is responsible for checking convexity first. O(k) in the
/// current vertex count, which makes this the dominant cost of the
/// whole algorithm.
fn is_ear(
    vertices: &[Vec2],
    prev_index: usize,
    current_index: usize,
    next_index: usize,
) -> bool {
    let prev = vertices[prev_index];
    let current = vertices[current_index];
    let next = vertices[next_index];

    vertices
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != prev_index && j != current_index && j != next_index)
        .all(|(_, &point)| !point_in_triangle(point, prev, current, next))
}

/// Triangulates the given polygon.
///
/// The polygon is an ordered vertex list interpreted cyclically, in
/// either winding order, and is consumed by the call. Each returned
/// triangle copies its three vertex values from the input, so the
/// result outlives any internal bookkeeping.
///
/// A simple polygon with `n` vertices yields exactly `n - 2` triangles.
/// Fewer than 3 vertices fail with [`Error::TooFewVertices`]. If the
/// polygon is not simple the clipping loop can run out of ears early;
/// that case fails with [`Error::Incomplete`], which still carries the
/// best-effort partial triangulation.
///
/// The scan always clips the first convex ear found from index 0 and
/// restarts from index 0 after every clip, so output order is
/// deterministic for a given input.
pub fn triangulate(mut vertices: Vec<Vec2>) -> Result<Triangulation> {
    if vertices.len() < 3 {
        return Err(Error::TooFewVertices(vertices.len()));
    }

    if !is_clockwise(&vertices) {
        vertices.reverse();
    }

    let mut triangles = Triangulation::with_capacity(vertices.len() - 2);
    let mut ran_out_of_ears = false;

    while vertices.len() > 3 {
        let mut ear_found = false;

        for i in 0..vertices.len() {
            let prev_index = (i + vertices.len() - 1) % vertices.len();
            let next_index = (i + 1) % vertices.len();

            let prev = vertices[prev_index];
            let current = vertices[i];
            let next = vertices[next_index];

            if is_convex(prev, current, next) && is_ear(&vertices, prev_index, i, next_index) {
                triangles.push([prev, current, next]);
                vertices.remove(i);
                ear_found = true;
                break;
            }
        }

        if !ear_found {
            ran_out_of_ears = true;
            break;
        }
    }

    triangles.push([vertices[0], vertices[1], vertices[2]]);

    if ran_out_of_ears {
        return Err(Error::Incomplete {
            remaining: vertices.len(),
            triangles,
        });
    }

    Ok(triangles)
}
