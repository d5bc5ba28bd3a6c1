use crate::core::{
    Camera, FrameState, ParticleCloud, PlaneUniforms, PointsUniforms, SceneLight, AVATAR_OFFSET,
    AVATAR_OPACITY, AVATAR_POINT_SIZE,
};
use glam::{Mat4, Vec3};
use web_sys as web;

mod helpers;
mod plane;
mod points;
mod targets;
use targets::RenderTargets;

use plane::{create_plane_resources, PlaneResources};
use points::{create_points_resources, PointsResources};

/// Everything the renderer reads for one frame.
pub struct SceneFrame<'f> {
    pub camera: &'f Camera,
    pub light: &'f SceneLight,
    pub state: &'f FrameState,
    pub plane_z: f32,
    pub particles: Option<&'f ParticleCloud>,
}

pub struct GpuState<'a> {
    surface: wgpu::Surface<'a>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    targets: RenderTargets,
    plane: PlaneResources,
    points: PointsResources,
    width: u32,
    height: u32,
    clear_color: wgpu::Color,
}

impl<'a> GpuState<'a> {
    pub async fn new(canvas: &'a web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let width = canvas.width().max(1);
        let height = canvas.height().max(1);

        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(wgpu::SurfaceTarget::Canvas(canvas.clone()))?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No WebGPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    // Use default limits on web to avoid passing unknown fields to older WebGPU impls
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await
            .map_err(|e| anyhow::anyhow!(format!("request_device error: {:?}", e)))?;
        let caps = surface.get_capabilities(&adapter);
        // Shader colours are authored for a non-sRGB target
        let format = caps
            .formats
            .iter()
            .copied()
            .find(|f| {
                matches!(
                    f,
                    wgpu::TextureFormat::Bgra8Unorm | wgpu::TextureFormat::Rgba8Unorm
                )
            })
            .or_else(|| caps.formats.first().copied())
            .ok_or_else(|| anyhow::anyhow!("surface reports no formats"))?;
        // Transparent canvas over the page background
        let alpha_mode = caps
            .alpha_modes
            .iter()
            .copied()
            .find(|m| *m == wgpu::CompositeAlphaMode::PreMultiplied)
            .or_else(|| caps.alpha_modes.first().copied())
            .unwrap_or(wgpu::CompositeAlphaMode::Auto);
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode,
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };
        surface.configure(&device, &config);
        log::info!("[gpu] surface {}x{} {:?} {:?}", width, height, format, alpha_mode);

        let targets = RenderTargets::new(&device, width, height);
        let plane = create_plane_resources(&device, format);
        let points = create_points_resources(&device, format);

        Ok(Self {
            surface,
            device,
            queue,
            config,
            targets,
            plane,
            points,
            width,
            height,
            clear_color: wgpu::Color::TRANSPARENT,
        })
    }

    pub fn resize_if_needed(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }
        if width != self.width || height != self.height {
            self.width = width;
            self.height = height;
            self.config.width = width;
            self.config.height = height;
            self.surface.configure(&self.device, &self.config);
            self.targets.recreate(&self.device, width, height);
        }
    }

    /// Reconfigure after the surface reported itself lost or outdated.
    pub fn reconfigure(&mut self) {
        self.surface.configure(&self.device, &self.config);
    }

    pub fn render(&mut self, scene: &SceneFrame<'_>) -> Result<(), wgpu::SurfaceError> {
        let view_m = scene.camera.view_matrix();
        let proj_m = scene.camera.projection_matrix();

        let pu = PlaneUniforms {
            view_proj: (proj_m * view_m).to_cols_array_2d(),
            model: scene.state.plane_model(scene.plane_z).to_cols_array_2d(),
            time: scene.state.time as f32,
            depth: scene.state.scroll_depth,
            mouse: scene.state.pointer.current.to_array(),
            light_dir: scene.light.direction().to_array(),
            light_intensity: scene.light.intensity,
        };
        self.queue
            .write_buffer(&self.plane.uniform_buffer, 0, bytemuck::bytes_of(&pu));

        if let Some(cloud) = scene.particles {
            self.points.upload(&self.device, &self.queue, cloud);
            let ptu = PointsUniforms {
                view: view_m.to_cols_array_2d(),
                proj: proj_m.to_cols_array_2d(),
                model: Mat4::from_translation(Vec3::from_array(AVATAR_OFFSET)).to_cols_array_2d(),
                size: AVATAR_POINT_SIZE,
                opacity: AVATAR_OPACITY,
                _pad: [0.0; 2],
            };
            self.queue
                .write_buffer(&self.points.uniform_buffer, 0, bytemuck::bytes_of(&ptu));
        }

        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());
        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("hero_pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(self.clear_color),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: Some(wgpu::RenderPassDepthStencilAttachment {
                    view: &self.targets.depth_view,
                    depth_ops: Some(wgpu::Operations {
                        load: wgpu::LoadOp::Clear(1.0),
                        store: wgpu::StoreOp::Store,
                    }),
                    stencil_ops: None,
                }),
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.plane.pipeline);
            rpass.set_bind_group(0, &self.plane.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.plane.vertex_buffer.slice(..));
            rpass.set_index_buffer(self.plane.index_buffer.slice(..), wgpu::IndexFormat::Uint32);
            rpass.draw_indexed(0..self.plane.index_count, 0, 0..1);

            if scene.particles.is_some() {
                self.points.draw(&mut rpass);
            }
        }

        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}
