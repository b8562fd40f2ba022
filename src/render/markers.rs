use super::helpers::{self, MeshBuffers};
use crate::constants::MARKER_RADIUS;
use crate::geometry;
use crate::visuals::MarkerVisual;
use glam::Vec3;

pub static MARKERS_WGSL: &str = include_str!("../../shaders/markers.wgsl");

#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct MarkerInstance {
    center_radius: [f32; 4],
    color: [f32; 4],
    params: [f32; 4],
}

const INSTANCE_ATTRIBUTES: [wgpu::VertexAttribute; 3] =
    wgpu::vertex_attr_array![3 => Float32x4, 4 => Float32x4, 5 => Float32x4];

fn instance_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: std::mem::size_of::<MarkerInstance>() as wgpu::BufferAddress,
        step_mode: wgpu::VertexStepMode::Instance,
        attributes: &INSTANCE_ATTRIBUTES,
    }
}

/// Hotspot markers: for each hotspot a translucent glow shell drawn first,
/// then the solid core on top of it.
pub(crate) struct MarkerPass {
    pipeline: wgpu::RenderPipeline,
    mesh: MeshBuffers,
    instances: wgpu::Buffer,
    centers: Vec<Vec3>,
    staged: Vec<MarkerInstance>,
}

impl MarkerPass {
    pub(crate) fn new(
        device: &wgpu::Device,
        camera_layout: &wgpu::BindGroupLayout,
        color_format: wgpu::TextureFormat,
        centers: Vec<Vec3>,
    ) -> Self {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("markers_shader"),
            source: wgpu::ShaderSource::Wgsl(MARKERS_WGSL.into()),
        });
        let layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("markers_pl"),
            bind_group_layouts: &[camera_layout],
            push_constant_ranges: &[],
        });
        let pipeline = helpers::make_mesh_pipeline(
            device,
            "markers_pipeline",
            &layout,
            &shader,
            &[helpers::mesh_vertex_layout(), instance_layout()],
            color_format,
            Some(wgpu::BlendState::ALPHA_BLENDING),
            Some(wgpu::Face::Back),
        );
        let mesh = helpers::upload_mesh(device, "marker", &geometry::marker_sphere());
        // two instances per hotspot; keep at least one slot so the buffer is never empty
        let slots = (centers.len() * 2).max(1);
        let instances = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("marker_instances"),
            size: (slots * std::mem::size_of::<MarkerInstance>()) as wgpu::BufferAddress,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        Self {
            pipeline,
            mesh,
            instances,
            staged: Vec::with_capacity(centers.len() * 2),
            centers,
        }
    }

    /// Stage this frame's instances; `visuals` is parallel to the centers
    /// given at construction.
    pub(crate) fn update(&mut self, queue: &wgpu::Queue, visuals: &[MarkerVisual]) {
        self.staged.clear();
        let pairs = self.centers.iter().zip(visuals);
        for (c, v) in pairs.clone() {
            self.staged.push(MarkerInstance {
                center_radius: [c.x, c.y, c.z, MARKER_RADIUS * v.glow_scale],
                color: v.glow_color,
                params: [v.spin, 0.0, 0.0, 0.0],
            });
        }
        for (c, v) in pairs {
            self.staged.push(MarkerInstance {
                center_radius: [c.x, c.y, c.z, MARKER_RADIUS * v.core_scale],
                color: v.core_color,
                params: [v.spin, 0.0, 0.0, 0.0],
            });
        }
        if !self.staged.is_empty() {
            queue.write_buffer(&self.instances, 0, bytemuck::cast_slice(&self.staged));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>, camera: &wgpu::BindGroup) {
        if self.staged.is_empty() {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, camera, &[]);
        rpass.set_vertex_buffer(0, self.mesh.vertices.slice(..));
        rpass.set_vertex_buffer(1, self.instances.slice(..));
        rpass.set_index_buffer(self.mesh.indices.slice(..), wgpu::IndexFormat::Uint32);
        rpass.draw_indexed(0..self.mesh.index_count, 0, 0..self.staged.len() as u32);
    }
}
