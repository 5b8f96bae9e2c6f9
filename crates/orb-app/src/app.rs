use std::sync::Arc;
use std::time::Instant;

use orb_core::FrameState;
use orb_gpu::{context::Uniforms, pipeline::QuadPass, shader::ShaderError};
use thiserror::Error;
use winit::window::Window;

// ---------------------------------------------------------------------------
// Initialization errors — logged by main.rs, after which the loop never starts
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum InitError {
    #[error("failed to create rendering surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no suitable GPU adapter found")]
    NoAdapter,
    #[error("failed to create GPU device: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error(transparent)]
    Shader(#[from] ShaderError),
}

// ---------------------------------------------------------------------------
// FrameLog — per-second frame-rate reporting
// ---------------------------------------------------------------------------

struct FrameLog {
    frames: u32,
    window_start: Instant,
}

impl FrameLog {
    fn new() -> Self {
        Self {
            frames: 0,
            window_start: Instant::now(),
        }
    }

    /// Count one frame and, once a full second of wall time has passed, emit
    /// a debug-level rate report and start a new window.
    fn frame(&mut self, elapsed: f32, frame: u64) {
        self.frames += 1;
        let window = self.window_start.elapsed().as_secs_f32();
        if window >= 1.0 {
            log::debug!(
                "FPS: {:.1}  t={elapsed:.2}s  frame {frame}",
                self.frames as f32 / window
            );
            self.frames = 0;
            self.window_start = Instant::now();
        }
    }
}

// ---------------------------------------------------------------------------
// App — owns the surface, the quad pass, and the session clock
// ---------------------------------------------------------------------------

pub struct App {
    surface: wgpu::Surface<'static>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    surface_config: wgpu::SurfaceConfiguration,

    quad: QuadPass,

    /// Session start. Elapsed time is recomputed from this every frame, so
    /// the shader input is monotonically non-decreasing for the whole run.
    started: Instant,
    state: FrameState,
    frame_log: FrameLog,
}

impl App {
    /// Initialise wgpu for a given window.  The window is wrapped in `Arc` so
    /// that the surface can safely hold a `'static` reference to it.
    pub fn new(window: Arc<Window>) -> Result<Self, InitError> {
        let size = window.inner_size();
        let width = size.width.max(1);
        let height = size.height.max(1);

        // ---- Instance -------------------------------------------------------
        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::all(),
            ..Default::default()
        });

        // ---- Surface --------------------------------------------------------
        let surface = instance.create_surface(Arc::clone(&window))?;

        // ---- Adapter --------------------------------------------------------
        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .ok_or(InitError::NoAdapter)?;

        log::info!("GPU adapter: {}", adapter.get_info().name);

        // ---- Device & Queue -------------------------------------------------
        let (device, queue) = pollster::block_on(adapter.request_device(
            &wgpu::DeviceDescriptor {
                label: Some("orb device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
            },
            None,
        ))?;

        // ---- Surface configuration ------------------------------------------
        let surface_caps = surface.get_capabilities(&adapter);

        let format = surface_caps
            .formats
            .iter()
            .copied()
            .find(|f| f.is_srgb())
            .unwrap_or(surface_caps.formats[0]);

        let surface_config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width,
            height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            view_formats: vec![],
            desired_maximum_frame_latency: 2,
        };

        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {}×{} {:?} Fifo",
            surface_config.width,
            surface_config.height,
            format
        );

        // ---- Quad pass (shader validated here; errors halt init) ------------
        let quad = QuadPass::new(&device, format)?;

        Ok(Self {
            surface,
            device,
            queue,
            surface_config,
            quad,
            started: Instant::now(),
            state: FrameState::new(width, height),
            frame_log: FrameLog::new(),
        })
    }

    // -------------------------------------------------------------------------
    // Resize
    // -------------------------------------------------------------------------

    /// Reconfigure the surface. The pipeline itself is resolution-agnostic;
    /// the shader reads the new size from the uniforms next frame.
    pub fn resize(&mut self, new_width: u32, new_height: u32) {
        if new_width == 0 || new_height == 0 {
            return;
        }
        self.surface_config.width = new_width;
        self.surface_config.height = new_height;
        self.surface.configure(&self.device, &self.surface_config);

        log::debug!("Surface resized to {}×{}", new_width, new_height);
    }

    // -------------------------------------------------------------------------
    // Render
    // -------------------------------------------------------------------------

    /// Run one frame: recompute elapsed time, upload uniforms, draw the quad.
    pub fn render(&mut self) -> Result<(), wgpu::SurfaceError> {
        let elapsed = self.started.elapsed().as_secs_f32();
        self.state
            .tick(elapsed, self.surface_config.width, self.surface_config.height);

        self.frame_log.frame(elapsed, self.state.frame);

        let uniforms = Uniforms::from(&self.state);

        let output = self.surface.get_current_texture()?;
        let surface_view = output
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("frame-encoder"),
            });

        self.quad
            .draw(&self.queue, &mut encoder, &surface_view, &uniforms);

        self.queue.submit(std::iter::once(encoder.finish()));
        output.present();
        Ok(())
    }
}
