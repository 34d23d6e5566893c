//! Consistency checks for FaceGraph.
//!
//! Verifies the invariants the quad and loop tools rely on:
//! - no face has more than 3 links, or two links on one side
//! - every link points at an existing, different face
//! - every link's `back_link` lands on a link pointing straight back

use super::types::TopologyError;
use super::FaceGraph;
use crate::constants::MAX_FACE_LINKS;
use crate::types::FaceId;

impl FaceGraph {
    /// Validate link symmetry and cardinality
    pub fn validate(&self) -> Result<(), TopologyError> {
        for (f, links) in self.links.iter().enumerate() {
            let face = FaceId::from(f);

            if links.len() > MAX_FACE_LINKS {
                return Err(TopologyError::TooManyLinks {
                    face,
                    count: links.len(),
                });
            }

            let mut sides_seen = [false; MAX_FACE_LINKS];
            for link in links {
                if link.with == face {
                    return Err(TopologyError::SelfLink(face));
                }
                if link.side >= MAX_FACE_LINKS || sides_seen[link.side] {
                    return Err(TopologyError::SideTaken {
                        face,
                        side: link.side,
                    });
                }
                sides_seen[link.side] = true;

                let Some(other_links) = self.links.get(link.with.index()) else {
                    return Err(TopologyError::MissingFace {
                        face,
                        with: link.with,
                    });
                };

                if !other_links.iter().any(|b| b.with == face) {
                    return Err(TopologyError::Asymmetric {
                        face,
                        with: link.with,
                    });
                }

                match other_links.get(link.back_link) {
                    Some(back) if back.with == face => {}
                    _ => {
                        return Err(TopologyError::BadBackLink {
                            face,
                            with: link.with,
                            back_link: link.back_link,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}
