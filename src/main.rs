//! Orbit Field entry point
//!
//! On web: attaches a background canvas and drives the field from
//! `requestAnimationFrame`. Natively: renders a fixed number of frames
//! headless and optionally writes the last one as a PPM image.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_field {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use orbit_field::renderer::canvas::{page, viewport_size};
    use orbit_field::renderer::{CanvasSurface, DrawSurface};
    use orbit_field::{FieldSettings, OrbitFieldAnimator};

    /// Animator plus the surface it paints
    struct Background {
        animator: OrbitFieldAnimator,
        surface: CanvasSurface,
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Orbit Field starting...");

        // Nothing to draw on is fatal
        let (window, mut surface) = match page()
            .and_then(|(window, document)| Ok((window, CanvasSurface::attach_background(&document)?)))
        {
            Ok(found) => found,
            Err(e) => {
                log::error!("Cannot create background canvas: {}", e);
                panic!("background canvas unavailable: {}", e);
            }
        };

        let (width, height) = viewport_size(&window);
        surface.resize(width, height);

        let settings = FieldSettings::load();
        let seed = js_sys::Date::now() as u64;
        let animator = OrbitFieldAnimator::new(&settings, width as f32, height as f32, seed);

        let background = Rc::new(RefCell::new(Background { animator, surface }));

        setup_resize_handler(background.clone());
        request_animation_frame(background);

        log::info!("Orbit Field running!");
    }

    fn setup_resize_handler(background: Rc<RefCell<Background>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::Event| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let (width, height) = viewport_size(&window);
            let mut bg = background.borrow_mut();
            let Background { animator, surface } = &mut *bg;
            animator.resize_surface(surface, width, height);
        });
        let _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(background: Rc<RefCell<Background>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |_time: f64| {
            frame_loop(background);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn frame_loop(background: Rc<RefCell<Background>>) {
        {
            let mut bg = background.borrow_mut();
            let Background { animator, surface } = &mut *bg;
            animator.frame(surface);
        }

        request_animation_frame(background);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_field::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::io::Result<()> {
    use orbit_field::renderer::Raster;
    use orbit_field::{FieldSettings, OrbitFieldAnimator};
    use std::time::{SystemTime, UNIX_EPOCH};

    env_logger::init();
    log::info!("Orbit Field (native) starting...");

    let mut args = std::env::args().skip(1);
    let frames: u64 = match args.next() {
        Some(arg) => arg.parse().unwrap_or_else(|_| {
            log::warn!("Invalid frame count {:?}, using 600", arg);
            600
        }),
        None => 600,
    };
    let output = args.next();

    let (width, height) = (1280u32, 720u32);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0);

    let settings = FieldSettings::load();
    let mut animator = OrbitFieldAnimator::new(&settings, width as f32, height as f32, seed);
    let mut raster = Raster::new(width, height);

    for i in 0..frames {
        animator.frame(&mut raster);
        if i % 120 == 0 {
            log::debug!("frame {}: {} pixels painted", i, raster.painted_pixels());
        }
    }
    log::info!(
        "Rendered {} frames at {}x{}, {} pixels painted in last frame",
        frames,
        width,
        height,
        raster.painted_pixels()
    );

    if let Some(path) = output {
        let file = std::fs::File::create(&path)?;
        raster.write_ppm(std::io::BufWriter::new(file))?;
        log::info!("Wrote {}", path);
    }

    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}
