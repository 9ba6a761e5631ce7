//! Document objects

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::kernel::ShapeDef;
use crate::math::Placement;

/// What a document object computes its shape from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ObjectKind {
    /// Cylinder along +Z with its base disc centered on the local origin
    Cylinder { radius: f64, height: f64 },
    /// Box spanning the positive octant from the local origin
    Box { length: f64, width: f64, height: f64 },
    /// `base` with `tool` removed
    Cut { base: Uuid, tool: Uuid },
    /// Union of `base` and `tool`
    Fuse { base: Uuid, tool: Uuid },
    /// Group of linked objects
    Compound { links: Vec<Uuid> },
    /// Derived profile solid
    Feature { shape: ShapeDef },
}

impl ObjectKind {
    /// Human readable type name
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Cylinder { .. } => "Cylinder",
            Self::Box { .. } => "Box",
            Self::Cut { .. } => "Cut",
            Self::Fuse { .. } => "Fuse",
            Self::Compound { .. } => "Compound",
            Self::Feature { shape } => shape.type_name(),
        }
    }

    /// Objects whose shapes this one is built from
    pub fn dependencies(&self) -> Vec<Uuid> {
        match self {
            Self::Cut { base, tool } | Self::Fuse { base, tool } => vec![*base, *tool],
            Self::Compound { links } => links.clone(),
            Self::Cylinder { .. } | Self::Box { .. } | Self::Feature { .. } => Vec::new(),
        }
    }

    /// Rewrite dependency IDs through `map`, leaving unmapped IDs alone
    pub(crate) fn remap_dependencies(&mut self, map: &HashMap<Uuid, Uuid>) {
        let remap = |id: &mut Uuid| {
            if let Some(new_id) = map.get(id) {
                *id = *new_id;
            }
        };
        match self {
            Self::Cut { base, tool } | Self::Fuse { base, tool } => {
                remap(base);
                remap(tool);
            }
            Self::Compound { links } => links.iter_mut().for_each(remap),
            Self::Cylinder { .. } | Self::Box { .. } | Self::Feature { .. } => {}
        }
    }
}

/// A named object in a document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentObject {
    /// Unique identifier
    pub id: Uuid,
    /// Internal name, unique within the document
    pub name: String,
    /// Display label
    pub label: String,
    /// Shape definition
    pub kind: ObjectKind,
    /// World placement of the object's shape
    pub placement: Placement,
    /// Needs recompute
    #[serde(skip)]
    pub(crate) touched: bool,
}

impl DocumentObject {
    pub(crate) fn new(name: String, kind: ObjectKind, placement: Placement) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: name.clone(),
            name,
            kind,
            placement,
            touched: true,
        }
    }

    /// Whether the object changed since the last recompute
    pub fn is_touched(&self) -> bool {
        self.touched
    }
}
