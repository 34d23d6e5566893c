//! Construction of the face adjacency graph.

use tracing::debug;

use super::indexing::IndexedGeometry;
use super::types::{Edge, FaceLink, TopologyReport, triangle_side};
use super::FaceGraph;
use crate::constants::MAX_FACE_LINKS;
use crate::types::FaceId;

/// How two faces touch
enum Coincidence {
    /// Fewer than 2 shared vertices
    Apart,
    /// One shared edge: corner positions on each face
    Edge { mine: [usize; 2], theirs: [usize; 2] },
    /// All three vertices shared
    Overlap,
}

fn coincidence(geometry: &IndexedGeometry, face: FaceId, other: FaceId) -> Coincidence {
    let mine = geometry.face_verts(face);
    let theirs = geometry.face_verts(other);

    let mut pos = [0usize; 3];
    let mut pos_other = [0usize; 3];
    let mut count = 0;
    for (p1, v) in mine.iter().enumerate() {
        if let Some(p2) = theirs.iter().position(|t| t == v) {
            pos[count] = p1;
            pos_other[count] = p2;
            count += 1;
        }
    }

    match count {
        2 => Coincidence::Edge {
            mine: [pos[0], pos[1]],
            theirs: [pos_other[0], pos_other[1]],
        },
        3 => Coincidence::Overlap,
        _ => Coincidence::Apart,
    }
}

fn is_degenerate(verts: [u32; 3]) -> bool {
    verts[0] == verts[1] || verts[1] == verts[2] || verts[0] == verts[2]
}

impl FaceGraph {
    /// Link every face to the neighbors it shares an edge with
    ///
    /// Candidates come from the faces using each of the face's vertices, so
    /// there is no all-pairs scan. A side of a triangle accepts only one
    /// neighbor; on non-manifold edges the first consistent pairing wins and
    /// the rest are counted in the report. Links whose neighbor does not link
    /// back are pruned. Never fails.
    pub fn build(geometry: &IndexedGeometry) -> (Self, TopologyReport) {
        let face_count = geometry.face_count();
        let mut report = TopologyReport::default();
        let mut links: Vec<Vec<FaceLink>> = vec![Vec::new(); face_count];
        // Which neighbor each side has been given so far
        let mut claimed: Vec<[Option<FaceId>; MAX_FACE_LINKS]> = vec![[None; MAX_FACE_LINKS]; face_count];

        let degenerate: Vec<bool> = (0..face_count)
            .map(|f| is_degenerate(geometry.face_verts(FaceId::from(f))))
            .collect();
        report.degenerate_faces = degenerate.iter().filter(|&&d| d).count();

        for f in 0..face_count {
            if degenerate[f] {
                continue;
            }
            let face = FaceId::from(f);

            for other in geometry.faces_around(face) {
                if other == face || degenerate[other.index()] {
                    continue;
                }

                match coincidence(geometry, face, other) {
                    Coincidence::Apart => {}
                    Coincidence::Overlap => {
                        if face < other {
                            report.overlapping_faces += 1;
                        }
                    }
                    Coincidence::Edge { mine, theirs } => {
                        let side = triangle_side(mine[0], mine[1]);
                        let other_side = triangle_side(theirs[0], theirs[1]);
                        let other_ok = match claimed[other.index()][other_side] {
                            None => true,
                            Some(with) => with == face,
                        };

                        if claimed[f][side].is_none() && other_ok {
                            claimed[f][side] = Some(other);
                            links[f].push(FaceLink {
                                with: other,
                                corners: mine,
                                edge: Edge::new(
                                    geometry.corner(face, mine[0]),
                                    geometry.corner(face, mine[1]),
                                ),
                                side,
                                opposite: 3 - (mine[0] + mine[1]),
                                back_link: 0,
                            });
                        } else {
                            report.non_manifold_links += 1;
                        }
                    }
                }
            }
        }

        // Prune links that are not returned by the neighbor
        for f in 0..face_count {
            let face = FaceId::from(f);
            let kept: Vec<FaceLink> = links[f]
                .iter()
                .filter(|link| {
                    let returned = links[link.with.index()].iter().any(|b| b.with == face);
                    if !returned {
                        debug!(
                            "Backlink not found, removing link {:?} -> {:?} (verts {:?} / {:?})",
                            face,
                            link.with,
                            geometry.face_verts(face),
                            geometry.face_verts(link.with)
                        );
                    }
                    returned
                })
                .copied()
                .collect();
            report.orphaned_links += links[f].len() - kept.len();
            links[f] = kept;
        }

        let mut sides = vec![[None; MAX_FACE_LINKS]; face_count];
        for f in 0..face_count {
            let face = FaceId::from(f);
            for j in 0..links[f].len() {
                let with = links[f][j].with;
                if let Some(back) = links[with.index()].iter().position(|b| b.with == face) {
                    links[f][j].back_link = back;
                }
                sides[f][links[f][j].side] = Some(j);
            }
        }

        let graph = FaceGraph { links, sides };
        report.link_count = graph.link_count();
        debug_assert!(graph.validate().is_ok(), "{:?}", graph.validate());

        (graph, report)
    }
}
