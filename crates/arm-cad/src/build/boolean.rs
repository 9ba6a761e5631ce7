//! Cut and fuse

use uuid::Uuid;

use super::BuildResult;
use crate::document::{Document, ObjectKind};
use crate::math::Placement;

/// Remove `tool` from `base`, returning the new cut object
pub fn cut(doc: &mut Document, base: Uuid, tool: Uuid) -> BuildResult<Uuid> {
    let id = doc.add_object("Cut", ObjectKind::Cut { base, tool }, Placement::IDENTITY)?;
    doc.recompute()?;
    Ok(id)
}

/// Fuse `tool` onto `base`, returning the new fused object
pub fn join_parts(doc: &mut Document, base: Uuid, tool: Uuid) -> BuildResult<Uuid> {
    let id = doc.add_object(
        "FusedPart",
        ObjectKind::Fuse { base, tool },
        Placement::IDENTITY,
    )?;
    doc.recompute()?;
    Ok(id)
}
