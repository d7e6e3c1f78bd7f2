use log::debug;
use wgpu::util::DeviceExt;
use wgpu::Device;

use crate::gfx::geometry::MeshData;

/// A [`MeshData`] uploaded into wgpu vertex and index buffers
///
/// Meshes are generated once and never change afterwards, so the buffers are
/// created without `COPY_DST`.
pub struct GpuMesh {
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    vertex_count: u32,
    index_count: u32,
}

impl GpuMesh {
    /// Interleave the mesh into [`Vertex3D`](crate::gfx::scene::Vertex3D)s and upload it
    pub fn upload(device: &Device, label: &str, mesh: &MeshData) -> Self {
        let vertices = mesh.to_vertices();

        let vertex_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Vertex Buffer")),
            contents: bytemuck::cast_slice(&vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let index_buffer = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(&format!("{label} Index Buffer")),
            contents: bytemuck::cast_slice(&mesh.indices),
            usage: wgpu::BufferUsages::INDEX,
        });

        debug!(
            "Uploaded mesh '{}': {} vertices, {} indices",
            label,
            vertices.len(),
            mesh.index_count()
        );

        Self {
            vertex_buffer,
            index_buffer,
            vertex_count: vertices.len() as u32,
            index_count: mesh.index_count() as u32,
        }
    }

    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    pub fn index_count(&self) -> u32 {
        self.index_count
    }
}

pub trait DrawGpuMesh<'a> {
    fn draw_gpu_mesh(&mut self, mesh: &'a GpuMesh);
}

impl<'a, 'b> DrawGpuMesh<'b> for wgpu::RenderPass<'a>
where
    'b: 'a,
{
    fn draw_gpu_mesh(&mut self, mesh: &'b GpuMesh) {
        self.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        self.set_index_buffer(mesh.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
        self.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
