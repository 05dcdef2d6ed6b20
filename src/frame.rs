use crate::constants::{MAX_STEPS_PER_FRAME, STEP_SEC};
use crate::render::CanvasSurface;
use crate::App;
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub app: Rc<RefCell<App>>,
    pub surface: Rc<CanvasSurface>,
    pub last_instant: Instant,
    pub accumulator: f32,
}

impl FrameContext {
    pub fn new(app: Rc<RefCell<App>>, surface: Rc<CanvasSurface>) -> Self {
        Self {
            app,
            surface,
            last_instant: Instant::now(),
            accumulator: 0.0,
        }
    }

    pub fn frame(&mut self) {
        let now = Instant::now();
        let dt_sec = (now - self.last_instant).as_secs_f32();
        self.last_instant = now;

        self.accumulator += dt_sec;
        let mut steps = 0;
        {
            let mut app = self.app.borrow_mut();
            while self.accumulator >= STEP_SEC && steps < MAX_STEPS_PER_FRAME {
                app.tick();
                self.accumulator -= STEP_SEC;
                steps += 1;
            }
        }
        if steps == MAX_STEPS_PER_FRAME {
            self.accumulator = 0.0;
        }

        self.surface.draw(&*self.app.borrow());
    }
}

type TickClosure = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// Handle to a running requestAnimationFrame loop.
pub struct LoopHandle {
    running: Rc<Cell<bool>>,
    raf_id: Rc<Cell<Option<i32>>>,
    tick: TickClosure,
}

impl LoopHandle {
    /// Cancel the pending frame and drop the loop closure.
    pub fn stop(&self) {
        self.running.set(false);
        if let (Some(id), Some(w)) = (self.raf_id.take(), web::window()) {
            _ = w.cancel_animation_frame(id);
        }
        self.tick.borrow_mut().take();
    }
}

fn request_frame(tick: &TickClosure, raf_id: &Cell<Option<i32>>) {
    if let (Some(cb), Some(w)) = (tick.borrow().as_ref(), web::window()) {
        match w.request_animation_frame(cb.as_ref().unchecked_ref()) {
            Ok(id) => raf_id.set(Some(id)),
            Err(e) => log::error!("requestAnimationFrame failed: {:?}", e),
        }
    }
}

pub fn start_loop(frame_ctx: FrameContext) -> LoopHandle {
    let running = Rc::new(Cell::new(true));
    let raf_id: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
    let tick: TickClosure = Rc::new(RefCell::new(None));

    let tick_clone = tick.clone();
    let running_tick = running.clone();
    let raf_tick = raf_id.clone();
    let mut frame_ctx = frame_ctx;
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        raf_tick.set(None);
        if !running_tick.get() {
            return;
        }
        frame_ctx.frame();
        request_frame(&tick_clone, &raf_tick);
    }) as Box<dyn FnMut()>));

    request_frame(&tick, &raf_id);
    LoopHandle {
        running,
        raf_id,
        tick,
    }
}
