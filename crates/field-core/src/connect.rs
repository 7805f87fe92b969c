//! Connection pass: which particle pairs are close enough to be joined by a
//! line.
//!
//! [`connections_brute`] scans every unordered pair. [`SpatialIndex`] buckets
//! particles into square cells of side `sqrt(threshold)` so each particle only
//! tests its own and the eight neighbouring cells. Both emit links in the same
//! order (`a` ascending, then `b` ascending) with identical squared distances.

use crate::field::Particle;
use fnv::FnvHashMap;
use smallvec::SmallVec;

/// A pair of particle indices with `a < b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Link {
    pub a: u32,
    pub b: u32,
    pub dist_sq: f32,
}

/// Line opacity for a link: 1 at zero length, 0 at the threshold, times
/// `max_alpha`.
#[inline]
pub fn link_alpha(dist_sq: f32, threshold_sq: f32, max_alpha: f32) -> f32 {
    (1.0 - dist_sq / threshold_sq) * max_alpha
}

pub fn connections_brute(particles: &[Particle], threshold_sq: f32, out: &mut Vec<Link>) {
    out.clear();
    for (a, pa) in particles.iter().enumerate() {
        for (b, pb) in particles.iter().enumerate().skip(a + 1) {
            let dist_sq = pa.pos.distance_squared(pb.pos);
            if dist_sq < threshold_sq {
                out.push(Link {
                    a: a as u32,
                    b: b as u32,
                    dist_sq,
                });
            }
        }
    }
}

type Cell = (i32, i32);

#[derive(Default)]
pub struct SpatialIndex {
    cells: FnvHashMap<Cell, SmallVec<[u32; 4]>>,
    candidates: Vec<u32>,
}

impl SpatialIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connections(&mut self, particles: &[Particle], threshold_sq: f32, out: &mut Vec<Link>) {
        out.clear();
        let cell_size = threshold_sq.sqrt().max(f32::MIN_POSITIVE);
        let cell_of = |p: &Particle| -> Cell {
            (
                (p.pos.x / cell_size).floor() as i32,
                (p.pos.y / cell_size).floor() as i32,
            )
        };

        self.cells.clear();
        for (i, p) in particles.iter().enumerate() {
            self.cells.entry(cell_of(p)).or_default().push(i as u32);
        }

        for (a, pa) in particles.iter().enumerate() {
            let (cx, cy) = cell_of(pa);
            self.candidates.clear();
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let key = (cx.saturating_add(dx), cy.saturating_add(dy));
                    if let Some(bucket) = self.cells.get(&key) {
                        self.candidates
                            .extend(bucket.iter().copied().filter(|&b| b as usize > a));
                    }
                }
            }
            self.candidates.sort_unstable();
            self.candidates.dedup();
            for &b in &self.candidates {
                let dist_sq = pa.pos.distance_squared(particles[b as usize].pos);
                if dist_sq < threshold_sq {
                    out.push(Link {
                        a: a as u32,
                        b,
                        dist_sq,
                    });
                }
            }
        }
    }
}
