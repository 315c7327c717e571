//! Background image loading
//!
//! The image is only installed once the browser has decoded it, so the
//! renderer never sees a half-loaded theme.

use crate::app::App;
use std::cell::RefCell;
use std::rc::{Rc, Weak};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlImageElement;

type LoadCallback = Closure<dyn FnMut()>;

/// An image request in flight, owning both of its handlers
///
/// Dropping it detaches the handlers from the element, so the browser can
/// never call into a freed closure.
pub struct PendingImage {
    image: HtmlImageElement,
    generation: u32,
    settled: bool,
    _onload: LoadCallback,
    _onerror: LoadCallback,
}

impl Drop for PendingImage {
    fn drop(&mut self) {
        self.image.set_onload(None);
        self.image.set_onerror(None);
    }
}

/// Start loading `url` as the background
///
/// A newer call or a clear supersedes a load still in flight.
pub fn load_background(app: &Rc<RefCell<App>>, url: &str) -> Result<(), String> {
    let image =
        HtmlImageElement::new().map_err(|e| format!("Failed to create image: {:?}", e))?;

    let generation = {
        let mut app = app.borrow_mut();
        app.theme_generation = app.theme_generation.wrapping_add(1);
        app.theme_generation
    };

    let weak = Rc::downgrade(app);
    let onload = Closure::<dyn FnMut()>::new(move || {
        settle(&weak, generation, |app, image| {
            app.theme.set_background(image);
            log::info!("Background image applied");
        });
    });

    let weak = Rc::downgrade(app);
    let source = url.chars().take(64).collect::<String>();
    let onerror = Closure::<dyn FnMut()>::new(move || {
        settle(&weak, generation, |_app, _image| {
            log::error!("Failed to load background image {}", source);
        });
    });

    image.set_onload(Some(onload.as_ref().unchecked_ref()));
    image.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    image.set_src(url);

    // Replacing the previous request detaches its handlers
    app.borrow_mut().pending_theme = Some(PendingImage {
        image,
        generation,
        settled: false,
        _onload: onload,
        _onerror: onerror,
    });
    Ok(())
}

/// Drop the background and cancel any pending load
pub fn clear_background(app: &mut App) {
    app.theme_generation = app.theme_generation.wrapping_add(1);
    app.pending_theme = None;
    app.theme.clear_background();
}

/// Free the handlers of a request that has finished
///
/// Runs from the frame loop, never from inside the handlers themselves.
pub fn release_settled(app: &mut App) {
    if app.pending_theme.as_ref().is_some_and(|p| p.settled) {
        app.pending_theme = None;
    }
}

fn settle(
    weak: &Weak<RefCell<App>>,
    generation: u32,
    f: impl FnOnce(&mut App, HtmlImageElement),
) {
    let Some(app) = weak.upgrade() else {
        return;
    };
    let mut app = app.borrow_mut();
    if !app.alive || app.theme_generation != generation {
        return;
    }
    let image = match app.pending_theme.as_mut() {
        Some(pending) if pending.generation == generation && !pending.settled => {
            pending.settled = true;
            pending.image.clone()
        }
        _ => return,
    };
    f(&mut app, image);
}
