//! Quad-strip loop walking.

use std::collections::HashSet;

use tracing::debug;

use super::MeshTopology;
use crate::types::FaceId;

impl MeshTopology {
    /// Walk the quad loop that starts by stepping from `f1` into `f2`
    ///
    /// `f2` must be adjacent to `f1` and belong to a quad that does not
    /// contain `f1`. From each quad the walk leaves through the edge
    /// opposite the one it entered by. It stops at a mesh border, at a face
    /// with no quad partner, when it closes on itself, or after
    /// `max_steps` quads. `f1` itself is only included if the walk comes
    /// back around to it.
    ///
    /// Returns faces in traversal order, each at most once; empty if the
    /// start is not a valid loop start.
    pub fn find_loop(
        &self,
        f1: FaceId,
        f2: FaceId,
        tolerance: f32,
        max_steps: usize,
    ) -> Vec<FaceId> {
        let Some(start_link) = self.graph.find_link(f1, f2) else {
            return Vec::new();
        };
        let Some(mut partner) = self.find_quad(f2, tolerance) else {
            return Vec::new();
        };
        if partner == f1 {
            // f1 and f2 already form the quad
            return Vec::new();
        }

        let mut visited = HashSet::new();
        let mut result = Vec::new();
        visited.insert(f2);
        result.push(f2);

        let mut entry_edge = start_link.edge;
        let mut steps = 0;

        loop {
            let current = partner;
            if !visited.insert(current) {
                break;
            }
            result.push(current);

            let Some(exit) = self
                .graph
                .links(current)
                .iter()
                .find(|link| !link.edge.shares_vertex(&entry_edge))
            else {
                break;
            };
            let next = exit.with;
            if !visited.insert(next) {
                break;
            }
            result.push(next);

            steps += 1;
            if steps >= max_steps {
                debug!("Loop walk hit the {} step cap", max_steps);
                break;
            }

            entry_edge = exit.edge;
            match self.find_quad(next, tolerance) {
                Some(p) if p != current => partner = p,
                _ => break,
            }
        }

        result
    }

    /// Union of the loops walked from `f1` into `f2` and from `f2` into `f1`
    pub fn find_loop_bidirectional(
        &self,
        f1: FaceId,
        f2: FaceId,
        tolerance: f32,
        max_steps: usize,
    ) -> Vec<FaceId> {
        let mut result = self.find_loop(f1, f2, tolerance, max_steps);
        let mut seen: HashSet<FaceId> = result.iter().copied().collect();
        for face in self.find_loop(f2, f1, tolerance, max_steps) {
            if seen.insert(face) {
                result.push(face);
            }
        }
        result
    }
}
