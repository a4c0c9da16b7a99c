use std::collections::HashMap;

use geo::{LineString, Polygon};

use crate::math::intersect_2d::segment_segment_intersect_2d;
use crate::math::polygon_2d::signed_area_2d;
use crate::math::{Coord, TOLERANCE};

/// A self-intersection between two segments of a closed ring.
#[derive(Debug, Clone)]
pub struct Intersection {
    /// Index of the first segment.
    pub seg_i: usize,
    /// Index of the second segment (always > `seg_i`).
    pub seg_j: usize,
    /// Parameter on segment i (0..1).
    pub t_i: f64,
    /// Parameter on segment j (0..1).
    pub t_j: f64,
    /// Intersection point.
    pub point: Coord,
}

/// Finds all proper crossings between non-adjacent segments of a closed ring.
///
/// `ring` repeats its first point at the end. Touches where either parameter
/// sits at a segment endpoint are not crossings.
#[must_use]
pub fn find_all(ring: &[Coord]) -> Vec<Intersection> {
    let seg_count = ring.len().saturating_sub(1);
    if seg_count < 3 {
        return Vec::new();
    }

    let eps = TOLERANCE * 100.0;
    let mut results = Vec::new();

    for i in 0..seg_count {
        for j in (i + 2)..seg_count {
            // First and last segments share the closing vertex.
            if i == 0 && j == seg_count - 1 {
                continue;
            }

            let Some((point, t, u)) =
                segment_segment_intersect_2d(ring[i], ring[i + 1], ring[j], ring[j + 1])
            else {
                continue;
            };

            let t_at_end = t < eps || t > 1.0 - eps;
            let u_at_end = u < eps || u > 1.0 - eps;
            if t_at_end || u_at_end {
                continue;
            }

            results.push(Intersection {
                seg_i: i,
                seg_j: j,
                t_i: t,
                t_j: u,
                point,
            });
        }
    }

    // Sort by segment index, then by parameter.
    results.sort_by(|a, b| a.seg_i.cmp(&b.seg_i).then(a.t_i.total_cmp(&b.t_i)));

    results
}

/// A point visited while walking the ring with crossings inserted.
#[derive(Clone, Copy)]
struct Node {
    coord: Coord,
    crossing: Option<usize>,
}

/// Bound on re-splitting loops that still cross themselves.
const MAX_SPLIT_DEPTH: usize = 16;

/// Splits a possibly self-intersecting polygon exterior into simple loops.
///
/// The ring is walked with every crossing inserted as a vertex; each time
/// the walk returns to a crossing already on the path, the loop between the
/// two visits is cut off. Loops that still cross themselves are split again.
/// Loops without area are dropped. A ring with no crossings returns the
/// polygon itself, holes included.
#[must_use]
pub fn decompose_self_intersections(polygon: &Polygon<f64>) -> Vec<Polygon<f64>> {
    let ring = &polygon.exterior().0;
    if find_all(ring).is_empty() {
        return vec![polygon.clone()];
    }

    split_loops(ring, 0)
        .into_iter()
        .filter(|coords| coords.len() >= 4 && signed_area_2d(coords).abs() > TOLERANCE)
        .map(|coords| Polygon::new(LineString::new(coords), Vec::new()))
        .collect()
}

/// Cuts a closed ring into loops at its crossings.
fn split_loops(ring: &[Coord], depth: usize) -> Vec<Vec<Coord>> {
    let crossings = find_all(ring);
    if crossings.is_empty() || depth >= MAX_SPLIT_DEPTH {
        return vec![ring.to_vec()];
    }

    let seg_count = ring.len() - 1;
    let mut per_segment: Vec<Vec<(f64, Node)>> = vec![Vec::new(); seg_count];
    for (id, x) in crossings.iter().enumerate() {
        let node = Node {
            coord: x.point,
            crossing: Some(id),
        };
        per_segment[x.seg_i].push((x.t_i, node));
        per_segment[x.seg_j].push((x.t_j, node));
    }

    let mut stack: Vec<Node> = Vec::with_capacity(seg_count + 2 * crossings.len());
    let mut on_path: HashMap<usize, usize> = HashMap::new();
    let mut loops: Vec<Vec<Coord>> = Vec::new();

    for (k, mut hits) in per_segment.into_iter().enumerate() {
        hits.sort_by(|a, b| a.0.total_cmp(&b.0));
        let vertex = Node {
            coord: ring[k],
            crossing: None,
        };
        for node in std::iter::once(vertex).chain(hits.into_iter().map(|(_, n)| n)) {
            if let Some(id) = node.crossing {
                if let Some(&start) = on_path.get(&id) {
                    let tail = stack.split_off(start + 1);
                    for popped in &tail {
                        if let Some(pid) = popped.crossing {
                            on_path.remove(&pid);
                        }
                    }
                    let anchor = stack[start].coord;
                    let mut coords = Vec::with_capacity(tail.len() + 2);
                    coords.push(anchor);
                    coords.extend(tail.iter().map(|n| n.coord));
                    coords.push(anchor);
                    loops.push(coords);
                    continue;
                }
                on_path.insert(id, stack.len());
            }
            stack.push(node);
        }
    }

    let mut last: Vec<Coord> = stack.iter().map(|n| n.coord).collect();
    if let Some(&first) = last.first() {
        last.push(first);
        loops.push(last);
    }

    loops
        .into_iter()
        .flat_map(|coords| split_loops(&coords, depth + 1))
        .collect()
}

/// Returns `true` if the polygon exterior decomposes into exactly one piece.
#[must_use]
pub fn is_simple(polygon: &Polygon<f64>) -> bool {
    decompose_self_intersections(polygon).len() == 1
}
