//! Frame loop and DOM event wiring

use crate::app::App;
use crate::input::{handle_blur, handle_key_down, handle_key_up, key_from_event};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, Window};

type FrameCallback = Closure<dyn FnMut(f64)>;

struct Listener {
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// Running game: drives `App::frame` once per display refresh
pub struct GameLoop {
    pub app: Rc<RefCell<App>>,
    window: Window,
    frame: Rc<RefCell<Option<FrameCallback>>>,
    frame_id: Rc<Cell<Option<i32>>>,
    listeners: Vec<Listener>,
}

impl GameLoop {
    pub fn start(app: App) -> Result<Self, String> {
        let window = web_sys::window().ok_or_else(|| "No window".to_string())?;
        let mut game = Self {
            app: Rc::new(RefCell::new(app)),
            window,
            frame: Rc::new(RefCell::new(None)),
            frame_id: Rc::new(Cell::new(None)),
            listeners: Vec::new(),
        };

        game.listen("keydown", |app, event| {
            if let Some(key) = key_from_event(&event) {
                handle_key_down(app, &key);
            }
        })?;
        game.listen("keyup", |app, event| {
            if let Some(key) = key_from_event(&event) {
                handle_key_up(app, &key);
            }
        })?;
        game.listen("blur", |app, _event| handle_blur(app))?;

        let window = game.window.clone();
        game.listen("resize", move |app, _event| {
            app.fit_to_container(now_ms(&window));
        })?;

        game.schedule_frames()?;
        log::info!("Game loop started");
        Ok(game)
    }

    fn listen(
        &mut self,
        event: &'static str,
        mut handler: impl FnMut(&mut App, Event) + 'static,
    ) -> Result<(), String> {
        let app = self.app.clone();
        let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            let mut app = app.borrow_mut();
            if app.alive {
                handler(&mut app, event);
            }
        });
        self.window
            .add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())
            .map_err(|e| format!("Failed to listen for {}: {:?}", event, e))?;
        self.listeners.push(Listener { event, callback });
        Ok(())
    }

    /// Self-rescheduling requestAnimationFrame chain
    ///
    /// The next frame is requested only after the current one has run.
    fn schedule_frames(&mut self) -> Result<(), String> {
        let app = self.app.clone();
        let window = self.window.clone();
        let frame = self.frame.clone();
        let frame_id = self.frame_id.clone();

        let callback = Closure::<dyn FnMut(f64)>::new(move |now: f64| {
            frame_id.set(None);
            {
                let mut app = app.borrow_mut();
                if !app.alive {
                    return;
                }
                app.frame(now);
            }
            if let Some(cb) = frame.borrow().as_ref() {
                match request_frame(&window, cb) {
                    Ok(id) => frame_id.set(Some(id)),
                    Err(e) => log::error!("{}", e),
                }
            }
        });

        let id = request_frame(&self.window, &callback)?;
        self.frame_id.set(Some(id));
        *self.frame.borrow_mut() = Some(callback);
        Ok(())
    }

    /// Tear down: cancel the pending frame, detach listeners, mark the app dead
    pub fn stop(&mut self) {
        {
            let mut app = self.app.borrow_mut();
            app.alive = false;
            app.pending_theme = None;
        }

        if let Some(id) = self.frame_id.take() {
            if let Err(e) = self.window.cancel_animation_frame(id) {
                log::warn!("cancelAnimationFrame failed: {:?}", e);
            }
        }
        // Dropping the closure breaks its reference cycle with `frame`
        self.frame.borrow_mut().take();

        for listener in self.listeners.drain(..) {
            if let Err(e) = self.window.remove_event_listener_with_callback(
                listener.event,
                listener.callback.as_ref().unchecked_ref(),
            ) {
                log::warn!("Failed to remove {} listener: {:?}", listener.event, e);
            }
        }
    }
}

impl Drop for GameLoop {
    fn drop(&mut self) {
        self.stop();
    }
}

fn request_frame(window: &Window, callback: &FrameCallback) -> Result<i32, String> {
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(|e| format!("requestAnimationFrame failed: {:?}", e))
}

pub fn now_ms(window: &Window) -> f64 {
    window.performance().map(|p| p.now()).unwrap_or(0.0)
}
