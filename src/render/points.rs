use super::helpers;
use crate::core::{ParticleCloud, PointsUniforms, POINTS_WGSL};
use wgpu;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub(crate) struct ParticleInstance {
    position: [f32; 3],
    color: [f32; 3],
}

const INSTANCE_ATTRS: [wgpu::VertexAttribute; 2] =
    wgpu::vertex_attr_array![0 => Float32x3, 1 => Float32x3];

pub(crate) struct PointsResources {
    pub(crate) pipeline: wgpu::RenderPipeline,
    pub(crate) uniform_buffer: wgpu::Buffer,
    pub(crate) bind_group: wgpu::BindGroup,
    instance_buffer: Option<wgpu::Buffer>,
    capacity: usize,
    count: u32,
    // scratch reused across frames
    staging: Vec<ParticleInstance>,
}

impl PointsResources {
    /// Copy the cloud into the instance buffer, growing it when needed.
    pub(crate) fn upload(&mut self, device: &wgpu::Device, queue: &wgpu::Queue, cloud: &ParticleCloud) {
        self.staging.clear();
        self.staging.extend(
            cloud
                .positions
                .iter()
                .zip(cloud.colors.iter())
                .map(|(p, c)| ParticleInstance {
                    position: p.to_array(),
                    color: *c,
                }),
        );
        self.count = self.staging.len() as u32;
        if self.staging.is_empty() {
            return;
        }
        if self.instance_buffer.is_none() || self.capacity < self.staging.len() {
            self.instance_buffer = Some(device.create_buffer(&wgpu::BufferDescriptor {
                label: Some("particle_instances"),
                size: (self.staging.len() * std::mem::size_of::<ParticleInstance>()) as u64,
                usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
                mapped_at_creation: false,
            }));
            self.capacity = self.staging.len();
            log::info!("[avatar] instance buffer sized for {} particles", self.capacity);
        }
        if let Some(buf) = &self.instance_buffer {
            queue.write_buffer(buf, 0, bytemuck::cast_slice(&self.staging));
        }
    }

    pub(crate) fn draw(&self, rpass: &mut wgpu::RenderPass<'_>) {
        let Some(buf) = &self.instance_buffer else {
            return;
        };
        if self.count == 0 {
            return;
        }
        rpass.set_pipeline(&self.pipeline);
        rpass.set_bind_group(0, &self.bind_group, &[]);
        rpass.set_vertex_buffer(0, buf.slice(..));
        rpass.draw(0..6, 0..self.count);
    }
}

pub(crate) fn create_points_resources(
    device: &wgpu::Device,
    color_format: wgpu::TextureFormat,
) -> PointsResources {
    let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
        label: Some("points_shader"),
        source: wgpu::ShaderSource::Wgsl(POINTS_WGSL.into()),
    });
    let (uniform_buffer, bgl, bind_group) =
        helpers::create_uniform_binding::<PointsUniforms>(device, "points_uniforms");
    let pl = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
        label: Some("points_pl"),
        bind_group_layouts: &[&bgl],
        push_constant_ranges: &[],
    });
    let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
        label: Some("points_pipeline"),
        layout: Some(&pl),
        vertex: wgpu::VertexState {
            module: &shader,
            entry_point: Some("vs_points"),
            buffers: &[wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<ParticleInstance>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &INSTANCE_ATTRS,
            }],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        },
        primitive: wgpu::PrimitiveState {
            cull_mode: None,
            ..Default::default()
        },
        // Translucent: test against the plane but don't occlude other points
        depth_stencil: Some(helpers::depth_state(false)),
        multisample: wgpu::MultisampleState::default(),
        fragment: Some(wgpu::FragmentState {
            module: &shader,
            entry_point: Some("fs_points"),
            targets: &[Some(wgpu::ColorTargetState {
                format: color_format,
                blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                write_mask: wgpu::ColorWrites::ALL,
            })],
            compilation_options: wgpu::PipelineCompilationOptions::default(),
        }),
        cache: None,
        multiview: None,
    });

    PointsResources {
        pipeline,
        uniform_buffer,
        bind_group,
        instance_buffer: None,
        capacity: 0,
        count: 0,
        staging: Vec::new(),
    }
}
