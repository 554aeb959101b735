// Browser side of the particle field: mounts a full-window canvas into the host
// container, keeps it sized to the window, and drives ParticleField::frame from
// requestAnimationFrame until the handle is stopped or freed.

use crate::config::FieldConfig;
use crate::field::ParticleField;
use crate::renderer::CanvasRenderer;
use crate::Timer;
use js_sys::Function;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, HtmlCanvasElement, Window};

struct Animator {
    window: Window,
    canvas: HtmlCanvasElement,
    renderer: RefCell<CanvasRenderer>,
    field: RefCell<ParticleField>,
    running: Cell<bool>,
    frame_id: Cell<Option<i32>>,
    // Both closures only hold a Weak back to the animator, so dropping the handle ends the loop
    frame_closure: RefCell<Option<Closure<dyn FnMut()>>>,
    resize_closure: RefCell<Option<Closure<dyn FnMut()>>>,
}

impl Animator {
    fn tick(&self) {
        self.frame_id.set(None);
        if !self.running.get() {
            return;
        }

        let profile = self.field.borrow().config().profile_frames;
        let drawn = {
            let _timer = if profile { Some(Timer::new("ParticleField::frame")) } else { None };
            let mut rng = rand::thread_rng();
            let mut renderer = self.renderer.borrow_mut();
            self.field.borrow_mut().frame(&mut *renderer, &mut rng)
        };

        if let Err(err) = drawn.and_then(|_| self.schedule()) {
            console::error_2(&"particle field stopped after a failed frame:".into(), &err);
            self.stop();
        }
    }

    fn schedule(&self) -> Result<(), JsValue> {
        if let Some(closure) = self.frame_closure.borrow().as_ref() {
            let callback: &Function = closure.as_ref().unchecked_ref();
            let id = self.window.request_animation_frame(callback)?;
            self.frame_id.set(Some(id));
        }
        Ok(())
    }

    fn fit_to_window(&self) -> Result<(), JsValue> {
        if !self.running.get() {
            return Ok(());
        }
        let (width, height) = viewport_size(&self.window)?;
        self.canvas.set_width(width as u32);
        self.canvas.set_height(height as u32);
        self.field.borrow_mut().resize(width, height);
        Ok(())
    }

    fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.frame_id.take() {
            let _ = self.window.cancel_animation_frame(id);
        }
        if let Some(closure) = self.resize_closure.borrow().as_ref() {
            let _ = self
                .window
                .remove_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        }
        self.canvas.remove();
        console::log_1(&"particle field stopped".into());
    }
}

impl Drop for Animator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn viewport_size(window: &Window) -> Result<(f64, f64), JsValue> {
    let width = window
        .inner_width()?
        .as_f64()
        .ok_or("window.innerWidth is not a number")?;
    let height = window
        .inner_height()?
        .as_f64()
        .ok_or("window.innerHeight is not a number")?;
    Ok((width, height))
}

/// Keeps a running particle field alive. Freeing it from JS stops the animation too.
#[wasm_bindgen]
pub struct AnimationHandle {
    animator: Rc<Animator>,
}

#[wasm_bindgen]
impl AnimationHandle {
    /// Cancels the pending frame, detaches the resize listener and removes the canvas.
    pub fn stop(&self) {
        self.animator.stop();
    }

    pub fn is_running(&self) -> bool {
        self.animator.running.get()
    }

    pub fn is_profiling(&self) -> bool {
        self.animator.field.borrow().config().profile_frames
    }

    pub fn particle_count(&self) -> u32 {
        self.animator.field.borrow().len() as u32
    }

    pub fn width(&self) -> f64 {
        self.animator.field.borrow().width()
    }

    pub fn height(&self) -> f64 {
        self.animator.field.borrow().height()
    }
}

/// Returns `Ok(None)` when the page has no element matching the container selector.
pub fn mount(config: FieldConfig) -> Result<Option<AnimationHandle>, JsValue> {
    let window = web_sys::window().ok_or("no global `window` exists")?;
    let document = window.document().ok_or("window has no document")?;

    let container = match document.query_selector(&config.container_selector)? {
        Some(container) => container,
        None => {
            console::log_1(
                &format!("no '{}' container, particle field disabled", config.container_selector).into(),
            );
            return Ok(None);
        }
    };

    let canvas = document
        .create_element("canvas")?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_id(&config.canvas_id);
    canvas.class_list().add_1(&config.canvas_class)?;
    let renderer = CanvasRenderer::new(&canvas)?;

    let (width, height) = viewport_size(&window)?;
    canvas.set_width(width as u32);
    canvas.set_height(height as u32);
    container.append_child(&canvas)?;

    let field = ParticleField::new(width, height, config, &mut rand::thread_rng());
    console::log_1(&format!("particle field: {} particles on {}x{}", field.len(), width, height).into());

    let animator = Rc::new(Animator {
        window,
        canvas,
        renderer: RefCell::new(renderer),
        field: RefCell::new(field),
        running: Cell::new(true),
        frame_id: Cell::new(None),
        frame_closure: RefCell::new(None),
        resize_closure: RefCell::new(None),
    });

    let resize_closure = {
        let animator = Rc::downgrade(&animator);
        Closure::wrap(Box::new(move || {
            if let Some(animator) = animator.upgrade() {
                if let Err(err) = animator.fit_to_window() {
                    console::error_1(&err);
                }
            }
        }) as Box<dyn FnMut()>)
    };
    animator
        .window
        .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref())?;
    *animator.resize_closure.borrow_mut() = Some(resize_closure);

    let frame_closure = {
        let animator = Rc::downgrade(&animator);
        Closure::wrap(Box::new(move || {
            if let Some(animator) = animator.upgrade() {
                animator.tick();
            }
        }) as Box<dyn FnMut()>)
    };
    *animator.frame_closure.borrow_mut() = Some(frame_closure);
    animator.schedule()?;

    Ok(Some(AnimationHandle { animator }))
}
