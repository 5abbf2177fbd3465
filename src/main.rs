use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop},
    window::WindowBuilder,
};

mod core;
mod engine;
mod game;

use engine::game_loop::{GameLoop, TICK_DURATION};
use engine::input::{Action, InputManager};
use game::session::{Session, SessionRules, SessionStatus};
use game::world::{EnemyContactPolicy, WorldConfig};

/// Rusted Platformer
#[derive(Parser)]
#[command(version, about = "A tick-driven 2D platformer")]
struct Cli {
    /// Level to start on, counting from 1
    #[arg(
        long,
        value_name = "N",
        default_value_t = 1,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    level: u64,

    /// Simulation tick length in milliseconds
    #[arg(long, value_name = "MS", default_value_t = TICK_DURATION.as_millis() as u64)]
    tick_ms: u64,

    /// Resolve every enemy touching the character each tick, not just the first
    #[arg(long)]
    all_contacts: bool,
}

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Starting Rusted Platformer...");

    let cli = Cli::parse();
    let config = WorldConfig {
        enemy_policy: if cli.all_contacts {
            EnemyContactPolicy::AllContacts
        } else {
            EnemyContactPolicy::FirstContact
        },
        ..WorldConfig::default()
    };

    let mut session = Session::from_campaign(config, SessionRules::default())?;
    session.load_level(usize::try_from(cli.level - 1)?)?;

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(session.hud_line())
        .with_inner_size(winit::dpi::LogicalSize::new(800, 400))
        .with_resizable(false)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut input = InputManager::default();
    let mut game_loop = GameLoop::with_tick_duration(Duration::from_millis(cli.tick_ms.max(1)));
    info!(
        "Level {}/{}, {} lives, {:?} per tick",
        session.level_index() + 1,
        session.level_count(),
        session.lives(),
        game_loop.tick_duration()
    );
    let mut title = session.hud_line();

    event_loop.set_control_flow(ControlFlow::Poll);
    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::AboutToWait => {
                for command in input.drain_commands() {
                    match command {
                        Action::Restart if session.status() == SessionStatus::Playing => {
                            session.restart_level()
                        }
                        Action::Restart => session.restart_game(),
                        Action::Pause => {
                            game_loop.toggle_pause();
                            // Keys pressed around a pause must not act after it
                            input.reset();
                        }
                        Action::Quit => elwt.exit(),
                        _ => {}
                    }
                }

                for _ in 0..game_loop.begin_frame() {
                    let intent = input.take_intent();
                    if session.tick(&intent).is_none() {
                        break;
                    }
                }

                let mut hud = session.hud_line();
                if game_loop.is_paused() {
                    hud.push_str(" | PAUSED");
                }
                if hud != title {
                    window.set_title(&hud);
                    title = hud;
                }
            }
            Event::LoopExiting => {
                let snapshot = session.world().snapshot();
                info!(
                    "Ran {} ticks over {} frames in {:.1?} with final score {}",
                    game_loop.tick_count(),
                    game_loop.frame_count(),
                    game_loop.elapsed(),
                    session.score()
                );
                info!(
                    "Stopped on level {}/{} at tick {} with {} lives, {} enemies and {} collectibles left",
                    session.level_index() + 1,
                    session.level_count(),
                    snapshot.tick,
                    session.lives(),
                    snapshot.alive_enemies(),
                    snapshot.remaining_collectibles()
                );
            }
            _ => {}
        })
        .map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}
