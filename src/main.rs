use std::f64::consts::TAU;

use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use planeview::prelude::*;
use planeview::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

/// Half-width of the visible picture plane, in projected units.
const VIEW_HALF_WIDTH: f64 = 10.0;

fn build_scene(obj_path: Option<&str>) -> Result<Wireframe, String> {
    let mut scene = Wireframe::grid(10.0, 1.0, colors::GRID);
    scene.extend(Wireframe::axes(12.0));
    scene.extend(Wireframe::tick_labels(10.0, 2.0));
    scene.extend(Wireframe::parametric(
        |t| Vec3::new(3.0 * t.cos(), 3.0 * t.sin(), t / 2.0),
        0.0,
        3.0 * TAU,
        300,
        colors::CURVE,
    ));

    if let Some(path) = obj_path {
        let model = Wireframe::from_obj(path, colors::WIREFRAME).map_err(|e| e.to_string())?;
        info!(path, lines = model.len(), "added model");
        scene.extend(model);
    }

    Ok(scene)
}

fn main() -> Result<(), String> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("planeview=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let obj_path = std::env::args().nth(1);
    let scene = build_scene(obj_path.as_deref())?;
    info!(lines = scene.len(), "scene ready");

    let mut window = Window::new("planeview", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut renderer = Renderer::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let mut viewport =
        Viewport::centered(VIEW_HALF_WIDTH, WINDOW_WIDTH, WINDOW_HEIGHT).map_err(|e| e.to_string())?;
    let mut frame_limiter = FrameLimiter::new(&window);

    let controller = CameraController::default();
    let clipper = SegmentClipper::default();
    let mut view = ViewState::default();
    let mut camera = view.camera().map_err(|e| e.to_string())?;
    let mut input = InputState::default();
    let mut screenshot_count = 0;

    loop {
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                renderer.resize(w, h);
                viewport = Viewport::centered(VIEW_HALF_WIDTH, w, h).map_err(|e| e.to_string())?;
            }
            WindowEvent::None => {}
        }

        let next = controller.update(&view, &input);
        if next != view {
            match next.camera() {
                Ok(rebuilt) => {
                    camera = rebuilt;
                    view = next;
                }
                Err(error) => warn!(%error, "ignoring camera update"),
            }
        }

        renderer.draw_wireframe(&scene, &camera, &clipper, &viewport);
        window.present(renderer.as_bytes())?;

        if input.screenshot {
            screenshot_count += 1;
            let path = format!("planeview-{screenshot_count}.png");
            match renderer.save_png(&path) {
                Ok(()) => info!(path = %path, "saved screenshot"),
                Err(error) => warn!(%error, "screenshot failed"),
            }
        }

        frame_limiter.wait_and_get_delta(&window);
    }

    Ok(())
}
