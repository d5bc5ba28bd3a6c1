use crate::animate::Animator;
use crate::avatar::AvatarSlot;
use crate::core::{
    Camera, Ease, FrameState, SceneLight, Tween, PLANE_ENTRANCE_FROM_Z, PLANE_ENTRANCE_SEC,
};
use crate::render;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext<'a> {
    pub state: Rc<RefCell<FrameState>>,
    pub animator: Rc<RefCell<Animator>>,
    pub avatar: AvatarSlot,

    pub canvas: Option<web::HtmlCanvasElement>,
    pub gpu: Option<render::GpuState<'a>>,

    pub camera: Camera,
    pub light: SceneLight,
    pub plane_entrance: Tween<f32>,
}

impl<'a> FrameContext<'a> {
    pub fn new(
        canvas: Option<web::HtmlCanvasElement>,
        gpu: Option<render::GpuState<'a>>,
        state: Rc<RefCell<FrameState>>,
        animator: Rc<RefCell<Animator>>,
        avatar: AvatarSlot,
    ) -> Self {
        Self {
            state,
            animator,
            avatar,
            canvas,
            gpu,
            camera: Camera::default(),
            light: SceneLight::default(),
            plane_entrance: Tween::new(
                PLANE_ENTRANCE_FROM_Z,
                0.0,
                PLANE_ENTRANCE_SEC,
                Ease::Power4Out,
            ),
        }
    }

    /// False once the hero canvas has been removed from the page. Without a
    /// hero the loop keeps running for the DOM animations.
    #[inline]
    pub fn is_live(&self) -> bool {
        self.canvas.as_ref().map_or(true, |c| c.is_connected())
    }

    pub fn frame(&mut self) {
        self.state.borrow_mut().advance();

        let now = {
            let mut animator = self.animator.borrow_mut();
            animator.tick();
            animator.now()
        };
        let plane_z = self.plane_entrance.sample(now);

        let state = self.state.borrow();
        let mut avatar = self.avatar.borrow_mut();
        if let Some(cloud) = avatar.as_mut() {
            cloud.drift(state.time);
        }

        let (Some(g), Some(canvas)) = (&mut self.gpu, &self.canvas) else {
            return;
        };
        let w = canvas.width();
        let h = canvas.height();
        g.resize_if_needed(w, h);
        self.camera.set_viewport(w, h);

        let scene = render::SceneFrame {
            camera: &self.camera,
            light: &self.light,
            state: &*state,
            plane_z,
            particles: avatar.as_ref(),
        };
        match g.render(&scene) {
            Ok(()) => {}
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => g.reconfigure(),
            Err(e) => log::error!("render error: {:?}", e),
        }
    }
}

pub async fn init_gpu(canvas: &web::HtmlCanvasElement) -> Option<render::GpuState<'static>> {
    // leak a canvas clone to satisfy 'static lifetime for surface
    let leaked_canvas = Box::leak(Box::new(canvas.clone()));
    match render::GpuState::new(leaked_canvas).await {
        Ok(g) => Some(g),
        Err(e) => {
            log::error!("WebGPU init error: {:?}", e);
            None
        }
    }
}

/// Run `frame` on every animation frame until the hero canvas is detached.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext<'static>>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let frame_ctx_tick = frame_ctx.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !frame_ctx_tick.borrow().is_live() {
            log::info!("hero canvas detached; frame loop stopped");
            return;
        }
        frame_ctx_tick.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}
