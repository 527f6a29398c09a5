use wyre::prelude::*;
use wyre::window::{WINDOW_HEIGHT, WINDOW_WIDTH};

fn main() -> Result<(), String> {
    let mut window = Window::new("Wyre", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut rng = rand::thread_rng();
    let mut engine = Engine::new(WINDOW_WIDTH, WINDOW_HEIGHT, &mut rng);
    let mut limiter = FrameLimiter::new(&window);
    let mut input = InputState::default();
    let mut screenshot_count = 0u32;

    loop {
        match window.poll_events(&mut input) {
            WindowEvent::Quit => break,
            WindowEvent::Resize(w, h) => {
                window.resize(w, h)?;
                engine.resize(w, h, &mut rng);
            }
            WindowEvent::SelectDemo(1) => engine.set_demo(Demo::OrbitCube),
            WindowEvent::SelectDemo(_) => engine.set_demo(Demo::Pong),
            WindowEvent::Screenshot => {
                screenshot_count += 1;
                let path = format!("frame_{screenshot_count:03}.png");
                engine
                    .save_screenshot(&path)
                    .map_err(|e| e.to_string())?;
                println!("saved {path}");
            }
            WindowEvent::None => {}
        }

        let delta_ms = limiter.wait_and_get_delta(&window);
        let dt = delta_ms as f32 / 1000.0;

        engine.update(&input.paddles, dt, &mut rng);
        engine.render();
        window.present(engine.frame_buffer())?;
    }

    Ok(())
}
