//! CAD Document
//!
//! Holds the ordered, named object graph of a part. Objects reference their
//! inputs by ID; every input precedes its users. Recompute walks the objects
//! in order and rebuilds those that were touched or whose inputs changed.

mod object;

pub use object::{DocumentObject, ObjectKind};

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use glam::DVec3;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::kernel::{BooleanType, CadError, CadKernel, CadResult, Solid, default_kernel};
use crate::math::{Aabb, Placement};

/// Current document file format version
pub const DOCUMENT_FORMAT_VERSION: u32 = 1;

/// Errors from document operations
#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("No object named '{0}'")]
    ObjectNotFound(String),

    #[error("Unknown object id: {0}")]
    UnknownObject(Uuid),

    #[error("Object '{object}' depends on unknown object {dependency}")]
    MissingDependency { object: String, dependency: Uuid },

    #[error("Object '{0}' has not been recomputed")]
    NotRecomputed(String),

    #[error("Recompute of '{object}' failed: {source}")]
    Recompute {
        object: String,
        #[source]
        source: CadError,
    },

    #[error("Kernel error: {0}")]
    Kernel(#[from] CadError),

    #[error("IO error: {0}")]
    Io(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Deserialization error: {0}")]
    Deserialize(String),
}

/// Result type for document operations
pub type DocumentResult<T> = Result<T, DocumentError>;

/// Kernel solids computed for one object
#[derive(Debug, Clone, Copy)]
struct ObjectShape {
    /// Shape in the object's own coordinates
    local: Solid,
    /// Local shape moved by the object's placement
    world: Solid,
}

/// Serialized form of a document
#[derive(Serialize, Deserialize)]
struct DocumentFile {
    version: u32,
    name: String,
    objects: Vec<DocumentObject>,
}

/// A CAD document
pub struct Document {
    name: String,
    objects: Vec<DocumentObject>,
    index: HashMap<Uuid, usize>,
    shapes: HashMap<Uuid, ObjectShape>,
    kernel: Box<dyn CadKernel>,
}

impl fmt::Debug for Document {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("name", &self.name)
            .field("objects", &self.objects.len())
            .field("kernel", &self.kernel.name())
            .finish()
    }
}

impl Document {
    /// Create an empty document backed by the default kernel
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_kernel(name, default_kernel())
    }

    /// Create an empty document backed by `kernel`
    pub fn with_kernel(name: impl Into<String>, kernel: Box<dyn CadKernel>) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            index: HashMap::new(),
            shapes: HashMap::new(),
            kernel,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kernel(&self) -> &dyn CadKernel {
        self.kernel.as_ref()
    }

    /// Get the number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Check if the document is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterate objects in creation order
    pub fn objects(&self) -> impl Iterator<Item = &DocumentObject> {
        self.objects.iter()
    }

    /// Get an object by ID
    pub fn object(&self, id: Uuid) -> DocumentResult<&DocumentObject> {
        self.index
            .get(&id)
            .map(|&i| &self.objects[i])
            .ok_or(DocumentError::UnknownObject(id))
    }

    fn object_mut(&mut self, id: Uuid) -> DocumentResult<&mut DocumentObject> {
        let i = *self.index.get(&id).ok_or(DocumentError::UnknownObject(id))?;
        Ok(&mut self.objects[i])
    }

    /// Find an object by its internal name
    pub fn find_by_name(&self, name: &str) -> Option<&DocumentObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Find the first object carrying `label`
    pub fn find_by_label(&self, label: &str) -> Option<&DocumentObject> {
        self.objects.iter().find(|o| o.label == label)
    }

    /// Look up an object by name, failing when it does not exist
    pub fn get_object(&self, name: &str) -> DocumentResult<&DocumentObject> {
        self.find_by_name(name)
            .ok_or_else(|| DocumentError::ObjectNotFound(name.to_string()))
    }

    // ============== Editing ==============

    /// Name derived from `requested` that no object uses yet
    ///
    /// Characters outside `[A-Za-z0-9_]` become underscores. On collision the
    /// trailing digits are dropped and a three digit counter is appended.
    pub fn unique_name(&self, requested: &str) -> String {
        let mut name: String = requested
            .chars()
            .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
            .collect();
        if name.is_empty() || name.starts_with(|c: char| c.is_ascii_digit()) {
            name.insert(0, '_');
        }
        if self.find_by_name(&name).is_none() {
            return name;
        }

        let stem = name.trim_end_matches(|c: char| c.is_ascii_digit());
        let free = (1u32..)
            .map(|n| format!("{stem}{n:03}"))
            .find(|candidate| self.find_by_name(candidate).is_none());
        free.unwrap_or(name)
    }

    /// Add an object and return its ID
    ///
    /// The stored name is made unique from `name`; the label starts equal to it.
    pub fn add_object(
        &mut self,
        name: &str,
        kind: ObjectKind,
        placement: Placement,
    ) -> DocumentResult<Uuid> {
        let name = self.unique_name(name);
        if let Some(dependency) = kind
            .dependencies()
            .into_iter()
            .find(|dep| !self.index.contains_key(dep))
        {
            return Err(DocumentError::MissingDependency {
                object: name,
                dependency,
            });
        }

        let object = DocumentObject::new(name, kind, placement);
        let id = object.id;
        tracing::debug!("Added {} '{}'", object.kind.type_name(), object.name);
        self.index.insert(id, self.objects.len());
        self.objects.push(object);
        Ok(id)
    }

    /// Current placement of an object
    pub fn placement(&self, id: Uuid) -> DocumentResult<Placement> {
        Ok(self.object(id)?.placement)
    }

    /// Replace an object's placement
    pub fn set_placement(&mut self, id: Uuid, placement: Placement) -> DocumentResult<()> {
        let object = self.object_mut(id)?;
        object.placement = placement;
        object.touched = true;
        Ok(())
    }

    /// Shift an object's placement by `offset`
    pub fn translate(&mut self, id: Uuid, offset: DVec3) -> DocumentResult<()> {
        let placement = self.placement(id)?.translated(offset);
        self.set_placement(id, placement)
    }

    pub fn set_label(&mut self, id: Uuid, label: impl Into<String>) -> DocumentResult<()> {
        self.object_mut(id)?.label = label.into();
        Ok(())
    }

    /// Copy an object
    ///
    /// With `with_dependencies`, every object it is built from is copied as
    /// well, so the copy shares nothing with the original.
    pub fn copy_object(&mut self, id: Uuid, with_dependencies: bool) -> DocumentResult<Uuid> {
        let mut copied = HashMap::new();
        self.copy_into(id, with_dependencies, &mut copied)
    }

    fn copy_into(
        &mut self,
        id: Uuid,
        with_dependencies: bool,
        copied: &mut HashMap<Uuid, Uuid>,
    ) -> DocumentResult<Uuid> {
        if let Some(&new_id) = copied.get(&id) {
            return Ok(new_id);
        }
        let original = self.object(id)?.clone();
        let mut kind = original.kind.clone();
        if with_dependencies {
            for dependency in original.kind.dependencies() {
                self.copy_into(dependency, true, copied)?;
            }
            kind.remap_dependencies(copied);
        }

        let new_id = self.add_object(&original.name, kind, original.placement)?;
        copied.insert(id, new_id);
        Ok(new_id)
    }

    // ============== Recompute ==============

    fn world_solid(&self, id: Uuid) -> CadResult<Solid> {
        self.shapes
            .get(&id)
            .map(|s| s.world)
            .ok_or_else(|| CadError::OperationFailed(format!("input {id} has no shape")))
    }

    fn compute_local(&self, kind: &ObjectKind) -> CadResult<Solid> {
        let kernel = self.kernel.as_ref();
        match kind {
            ObjectKind::Cylinder { radius, height } => kernel.create_cylinder(*radius, *height),
            ObjectKind::Box {
                length,
                width,
                height,
            } => kernel.create_box(*length, *width, *height),
            ObjectKind::Feature { shape } => kernel.create_shape(shape),
            ObjectKind::Cut { base, tool } => kernel.boolean(
                &self.world_solid(*base)?,
                &self.world_solid(*tool)?,
                BooleanType::Subtract,
            ),
            ObjectKind::Fuse { base, tool } => kernel.boolean(
                &self.world_solid(*base)?,
                &self.world_solid(*tool)?,
                BooleanType::Union,
            ),
            ObjectKind::Compound { links } => {
                let solids = links
                    .iter()
                    .map(|id| self.world_solid(*id))
                    .collect::<CadResult<Vec<_>>>()?;
                kernel.compound(&solids)
            }
        }
    }

    fn compute_shape(&self, object: &DocumentObject) -> CadResult<ObjectShape> {
        let local = self.compute_local(&object.kind)?;
        match self.kernel.transform(&local, &object.placement) {
            Ok(world) => Ok(ObjectShape { local, world }),
            Err(e) => {
                self.kernel.release(&local);
                Err(e)
            }
        }
    }

    /// Rebuild touched objects and everything built from them
    ///
    /// Returns how many objects were rebuilt. On failure the failing object
    /// and those after it keep their previous shapes and stay touched.
    pub fn recompute(&mut self) -> DocumentResult<usize> {
        let mut rebuilt: HashSet<Uuid> = HashSet::new();

        for i in 0..self.objects.len() {
            let object = &self.objects[i];
            let stale = object.touched
                || !self.shapes.contains_key(&object.id)
                || object
                    .kind
                    .dependencies()
                    .iter()
                    .any(|dep| rebuilt.contains(dep));
            if !stale {
                continue;
            }

            let shape = match self.compute_shape(object) {
                Ok(shape) => shape,
                Err(source) => {
                    tracing::warn!("Object {} failed: {}", object.name, source);
                    return Err(DocumentError::Recompute {
                        object: object.name.clone(),
                        source,
                    });
                }
            };

            let id = object.id;
            if let Some(old) = self.shapes.insert(id, shape) {
                self.kernel.release(&old.local);
                self.kernel.release(&old.world);
            }
            self.objects[i].touched = false;
            rebuilt.insert(id);
        }

        if !rebuilt.is_empty() {
            tracing::debug!("Recomputed {} object(s) in '{}'", rebuilt.len(), self.name);
        }
        Ok(rebuilt.len())
    }

    /// World bounds of an object's last computed shape at its current placement
    pub fn bounds(&self, id: Uuid) -> DocumentResult<Aabb> {
        let object = self.object(id)?;
        let shape = self
            .shapes
            .get(&id)
            .ok_or_else(|| DocumentError::NotRecomputed(object.name.clone()))?;
        let placed = self.kernel.transform(&shape.local, &object.placement)?;
        let bounds = self.kernel.bounds(&placed);
        self.kernel.release(&placed);
        Ok(bounds?)
    }

    // ============== Persistence ==============

    fn to_file(&self) -> DocumentFile {
        DocumentFile {
            version: DOCUMENT_FORMAT_VERSION,
            name: self.name.clone(),
            objects: self.objects.clone(),
        }
    }

    fn from_file(file: DocumentFile, kernel: Box<dyn CadKernel>) -> DocumentResult<Self> {
        if file.version > DOCUMENT_FORMAT_VERSION {
            return Err(DocumentError::Deserialize(format!(
                "unsupported document version {}",
                file.version
            )));
        }

        let mut doc = Self::with_kernel(file.name, kernel);
        for mut object in file.objects {
            if doc.index.contains_key(&object.id) {
                return Err(DocumentError::Deserialize(format!(
                    "duplicate object id {}",
                    object.id
                )));
            }
            if doc.find_by_name(&object.name).is_some() {
                return Err(DocumentError::Deserialize(format!(
                    "duplicate object name '{}'",
                    object.name
                )));
            }
            if let Some(dependency) = object
                .kind
                .dependencies()
                .into_iter()
                .find(|dep| !doc.index.contains_key(dep))
            {
                return Err(DocumentError::MissingDependency {
                    object: object.name,
                    dependency,
                });
            }
            object.touched = true;
            doc.index.insert(object.id, doc.objects.len());
            doc.objects.push(object);
        }
        Ok(doc)
    }

    /// Save the document to a RON file
    pub fn save(&self, path: impl AsRef<Path>) -> DocumentResult<()> {
        let content = self.to_bytes()?;
        std::fs::write(path.as_ref(), content).map_err(|e| DocumentError::Io(e.to_string()))?;
        Ok(())
    }

    /// Serialize the document to RON bytes
    pub fn to_bytes(&self) -> DocumentResult<Vec<u8>> {
        let content = ron::ser::to_string_pretty(&self.to_file(), ron::ser::PrettyConfig::default())
            .map_err(|e| DocumentError::Serialize(e.to_string()))?;
        Ok(content.into_bytes())
    }

    /// Load a document from a RON file, backed by the default kernel
    ///
    /// Loaded objects have no shapes until the next recompute.
    pub fn load(path: impl AsRef<Path>) -> DocumentResult<Self> {
        Self::load_with_kernel(path, default_kernel())
    }

    /// Load a document from a RON file, backed by `kernel`
    pub fn load_with_kernel(
        path: impl AsRef<Path>,
        kernel: Box<dyn CadKernel>,
    ) -> DocumentResult<Self> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|e| DocumentError::Io(e.to_string()))?;
        Self::load_from_bytes_with_kernel(content.as_bytes(), kernel)
    }

    /// Load a document from RON bytes
    pub fn load_from_bytes(data: &[u8]) -> DocumentResult<Self> {
        Self::load_from_bytes_with_kernel(data, default_kernel())
    }

    pub fn load_from_bytes_with_kernel(
        data: &[u8],
        kernel: Box<dyn CadKernel>,
    ) -> DocumentResult<Self> {
        let content =
            std::str::from_utf8(data).map_err(|e| DocumentError::Deserialize(e.to_string()))?;
        let file: DocumentFile =
            ron::from_str(content).map_err(|e| DocumentError::Deserialize(e.to_string()))?;
        Self::from_file(file, kernel)
    }

    /// Serialize the document to pretty JSON
    pub fn to_json(&self) -> DocumentResult<String> {
        serde_json::to_string_pretty(&self.to_file())
            .map_err(|e| DocumentError::Serialize(e.to_string()))
    }
}
