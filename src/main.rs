use anyhow::Result;
use log::info;

mod core;
mod engine;
mod game;

use engine::game_loop::FrameClock;
use engine::input::{Button, InputSnapshot};
use engine::render::NullSink;
use game::map;
use game::room::Room;

/// Demo level: a floor, a step and a taller ledge. The `Spawn` record is
/// ignored by the room and documents the format's open kind set.
const DEMO_MAP: &str = "\
# demo room
Block 10 150 200 20
Block 20 130 20 20
Block 150 100 40 20
Spawn 150 10 16 32
";

/// How many fixed steps the headless demo simulates
const DEMO_STEPS: u64 = 300;

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting rusted-platformer...");

    let records = map::parse_map(DEMO_MAP)?;
    let mut room = Room::new();
    room.load_map(&records);
    let player = room.spawn_player(150, 10);
    room.spawn_crate(60, 40, 20, 20);

    info!("Room seeded with {} bodies", room.bodies().len());

    // Headless run: a null sink instead of a window, scripted input instead
    // of a keyboard. Swapping either for the real thing is the platform
    // glue's job, not the simulation's.
    let mut input = InputSnapshot::new();
    let mut clock = FrameClock::new();
    let mut sink = NullSink;

    let mut step: u64 = 0;
    while step < DEMO_STEPS {
        for _ in 0..clock.begin_frame() {
            script_input(&mut input, step);
            room.update(&input);
            room.draw(&mut sink);
            input.update();
            step += 1;

            if step % 60 == 0 {
                if let (Some(body), Some(state)) = (room.body(player), room.player_state(player)) {
                    info!(
                        "step {step:3}: player at ({}, {}) velocity ({:.2}, {:.2}) grounded={} grabbing={}",
                        body.rect().left(),
                        body.rect().top(),
                        body.velocity().x,
                        body.velocity().y,
                        state.is_grounded(),
                        state.is_grabbing(),
                    );
                }
            }
        }
    }

    if let Some(body) = room.body(player) {
        info!(
            "Demo finished: {} frames, {} steps; player resting at ({}, {})",
            clock.frame_count(),
            clock.step_count(),
            body.rect().left(),
            body.rect().top(),
        );
    }

    Ok(())
}

/// Canned inputs for the demo: walk right, hop once, walk back left.
fn script_input(input: &mut InputSnapshot, step: u64) {
    match step {
        10 => input.press(Button::Right),
        60 => input.press(Button::ButtonA),
        66 => input.release(Button::ButtonA),
        160 => {
            input.release(Button::Right);
            input.press(Button::Left);
        }
        240 => input.release(Button::Left),
        _ => {}
    }
}
