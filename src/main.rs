use log::info;
use swingline::prelude::*;

fn hud_title(sim: &Simulation, scaling: bool) -> String {
    let [a, b] = sim.hud();
    let flash = if sim.near_collision() {
        "  ! COLLISION"
    } else {
        ""
    };
    if scaling {
        format!(
            "Pendulum Collision — A {:6.1}° ω {:+.3} s {:.2}  |  B {:6.1}° ω {:+.3} s {:.2}{}",
            a.angle_deg, a.angular_vel, a.scale_factor, b.angle_deg, b.angular_vel, b.scale_factor, flash
        )
    } else {
        format!(
            "Pendulum Collision — A {:6.1}° ω {:+.3}  |  B {:6.1}° ω {:+.3}{}",
            a.angle_deg, a.angular_vel, b.angle_deg, b.angular_vel, flash
        )
    }
}

fn main() -> Result<(), String> {
    env_logger::init();

    // `--scale` selects the scaling variant: clicks randomize the ball radii
    // instead of resetting the simulation.
    let scaling = std::env::args().any(|arg| arg == "--scale");
    let pointer_action = if scaling {
        PointerAction::RandomizeScale
    } else {
        PointerAction::Reset
    };

    let mut window = Window::new("Pendulum Collision", WINDOW_WIDTH, WINDOW_HEIGHT)?;
    let mut sim = Simulation::new(WINDOW_WIDTH, WINDOW_HEIGHT, pointer_action);
    let mut limiter = FrameLimiter::new(&window);

    info!("entering frame loop ({:?} on click)", pointer_action);

    let mut frame: u64 = 0;
    'running: loop {
        match window.poll_events() {
            WindowEvent::Quit => break 'running,
            WindowEvent::PointerPressed => sim.pointer_pressed(),
            WindowEvent::None => {}
        }

        let dt = limiter.wait_and_get_delta(&window) as f32 / 1000.0;
        sim.frame(dt);
        window.present(sim.frame_buffer())?;

        // Title-bar HUD; updating every frame makes some window managers flicker.
        if frame % 10 == 0 {
            window.set_title(&hud_title(&sim, scaling))?;
        }
        frame += 1;
    }

    Ok(())
}
