use wgpu::util::DeviceExt;
use wgpu::{BindGroup, Buffer, Device, Queue, RenderPipeline, TextureView};

use crate::context::Uniforms;
use crate::shader::{self, ShaderError, SHADER_WGSL};

/// The full-screen quad: four corners drawn as a triangle strip
/// (two triangles), uploaded once and never touched again.
#[rustfmt::skip]
pub const QUAD: [[f32; 2]; 4] = [
    [ 1.0,  1.0],
    [-1.0,  1.0],
    [ 1.0, -1.0],
    [-1.0, -1.0],
];

/// Opaque green, visible wherever the shader declares a silhouette miss.
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 1.0,
    b: 0.0,
    a: 1.0,
};

const VERTEX_ATTRS: [wgpu::VertexAttribute; 1] = wgpu::vertex_attr_array![0 => Float32x2];

/// Holds the one render pipeline plus the GPU resources it draws with: the
/// static quad vertex buffer, the per-frame uniform buffer, and its bind
/// group. Everything here is created once and reused for the session.
pub struct QuadPass {
    pipeline: RenderPipeline,
    vertex_buf: Buffer,
    uniform_buf: Buffer,
    bind_group: BindGroup,
}

impl QuadPass {
    /// Build the pipeline for a given surface format. The WGSL is validated
    /// up front; a compile error aborts with the full diagnostic and no GPU
    /// resources are created.
    pub fn new(device: &Device, surface_format: wgpu::TextureFormat) -> Result<Self, ShaderError> {
        shader::validate(SHADER_WGSL)?;

        let module = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("orb"),
            source: wgpu::ShaderSource::Wgsl(SHADER_WGSL.into()),
        });

        // --- bind group layout -----------------------------------------------
        // binding 0 : Uniforms uniform buffer (fragment stage only)
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("orb_bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("orb_pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        // --- buffers ---------------------------------------------------------
        let vertex_buf = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("orb_quad"),
            contents: bytemuck::cast_slice(&QUAD),
            usage: wgpu::BufferUsages::VERTEX,
        });

        let uniform_buf = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("orb_uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        // The uniform binding never changes, so one bind group serves the
        // whole session.
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("orb_bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buf.as_entire_binding(),
            }],
        });

        // --- pipeline --------------------------------------------------------
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("orb_pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &module,
                entry_point: "vs_main",
                buffers: &[wgpu::VertexBufferLayout {
                    array_stride: std::mem::size_of::<[f32; 2]>() as u64,
                    step_mode: wgpu::VertexStepMode::Vertex,
                    attributes: &VERTEX_ATTRS,
                }],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &module,
                entry_point: "fs_main",
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleStrip,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        });

        log::debug!("quad pass ready ({} vertices, format {surface_format:?})", QUAD.len());

        Ok(Self {
            pipeline,
            vertex_buf,
            uniform_buf,
            bind_group,
        })
    }

    /// Upload this frame's uniforms and record the one draw: clear to green,
    /// then the four-vertex strip covering the surface.
    pub fn draw(
        &self,
        queue: &Queue,
        encoder: &mut wgpu::CommandEncoder,
        view: &TextureView,
        uniforms: &Uniforms,
    ) {
        queue.write_buffer(&self.uniform_buf, 0, bytemuck::bytes_of(uniforms));

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("orb_pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(CLEAR_COLOR),
                    store: wgpu::StoreOp::Store,
                },
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
        });
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, self.vertex_buf.slice(..));
        rpass.draw(0..QUAD.len() as u32, 0..1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quad_covers_clip_space_corners() {
        assert_eq!(QUAD.len(), 4);
        for [x, y] in QUAD {
            assert_eq!(x.abs(), 1.0);
            assert_eq!(y.abs(), 1.0);
        }
        // All four corners are distinct.
        for i in 0..4 {
            for j in (i + 1)..4 {
                assert_ne!(QUAD[i], QUAD[j]);
            }
        }
    }

    #[test]
    fn clear_color_matches_miss_color() {
        let bg = orb_core::shade::BACKGROUND;
        assert_eq!(CLEAR_COLOR.r as f32, bg.x);
        assert_eq!(CLEAR_COLOR.g as f32, bg.y);
        assert_eq!(CLEAR_COLOR.b as f32, bg.z);
        assert_eq!(CLEAR_COLOR.a as f32, bg.w);
    }
}
