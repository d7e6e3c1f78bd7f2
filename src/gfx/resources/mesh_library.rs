//! Mesh storage shared by every body that draws the same shape.
//!
//! Meshes are generated once at startup and never modified afterwards, so the
//! library hands out `Arc`s and plain [`MeshHandle`]s; bodies only ever carry
//! the handle.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, warn};
use wgpu::Device;

use crate::gfx::geometry::MeshData;
use crate::gfx::rendering::{GpuMesh, MeshHandle};

/// Named, append-only collection of generated meshes
#[derive(Debug, Default, Clone)]
pub struct MeshLibrary {
    meshes: Vec<Arc<MeshData>>,
    names: HashMap<String, MeshHandle>,
}

impl MeshLibrary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a mesh under `name` and returns its handle
    ///
    /// Adding a second mesh with an existing name rebinds the name; the
    /// previous handle keeps pointing at the previous mesh.
    pub fn add(&mut self, name: &str, mesh: MeshData) -> MeshHandle {
        let handle = MeshHandle(self.meshes.len() as u32);
        debug!(
            "Registered mesh '{}' as {:?}: {} vertices, {} triangles",
            name,
            handle,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        self.meshes.push(Arc::new(mesh));
        if self.names.insert(name.to_string(), handle).is_some() {
            warn!("Mesh name '{}' rebound to {:?}", name, handle);
        }
        handle
    }

    pub fn get(&self, handle: MeshHandle) -> Option<&Arc<MeshData>> {
        self.meshes.get(handle.0 as usize)
    }

    pub fn handle(&self, name: &str) -> Option<MeshHandle> {
        self.names.get(name).copied()
    }

    pub fn get_by_name(&self, name: &str) -> Option<&Arc<MeshData>> {
        self.handle(name).and_then(|handle| self.get(handle))
    }

    pub fn len(&self) -> usize {
        self.meshes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.meshes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MeshHandle, &Arc<MeshData>)> {
        self.meshes
            .iter()
            .enumerate()
            .map(|(index, mesh)| (MeshHandle(index as u32), mesh))
    }

    /// Upload every mesh to the GPU, keyed by handle
    pub fn upload_all(&self, device: &Device) -> HashMap<MeshHandle, GpuMesh> {
        self.iter()
            .map(|(handle, mesh)| {
                let label = format!("Mesh {}", handle.0);
                (handle, GpuMesh::upload(device, &label, mesh))
            })
            .collect()
    }
}
