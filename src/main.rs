//! Brick Bounce headless runner
//!
//! Drives a session with the fixed-step loop and reports the events it
//! produces. Rendering is left to whatever host embeds the library.
//!
//! Example:
//!   cargo run -- --autopilot --frames 7200
//!   RUST_LOG=debug cargo run -- --config my_layout.json --json

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glam::Vec2;

use brick_bounce::Settings;
use brick_bounce::consts::{MAX_SUBSTEPS, SIM_DT};
use brick_bounce::renderer::{Vertex, draw_list, vertex};
use brick_bounce::sim::{GameEvent, GameState, TickInput, tick};

#[derive(Parser, Debug)]
#[command(author, version, about = "Run a breakout session headlessly", long_about = None)]
struct Args {
    /// JSON settings file; anything it leaves out keeps its default
    #[arg(long)]
    config: Option<PathBuf>,
    /// Host frames to run before stopping
    #[arg(long, default_value_t = 3600)]
    frames: u32,
    /// Host frame rate; each frame is split into fixed simulation steps
    #[arg(long, default_value_t = 60.0)]
    fps: f32,
    /// Move the pointer under the ball every frame
    #[arg(long)]
    autopilot: bool,
    /// Print events and the summary as JSON lines
    #[arg(long)]
    json: bool,
    /// Print the effective settings as JSON and exit
    #[arg(long)]
    print_config: bool,
}

/// Game instance holding the session and loop bookkeeping
struct Game {
    state: GameState,
    accumulator: f32,
    input: TickInput,
}

impl Game {
    fn new(settings: &Settings) -> Result<Self> {
        Ok(Self {
            state: GameState::try_new(settings).context("invalid settings")?,
            accumulator: 0.0,
            input: TickInput::default(),
        })
    }

    /// Run simulation ticks for one host frame
    fn update(&mut self, dt: f32) -> Result<Vec<GameEvent>> {
        let dt = dt.min(0.1);
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(&mut self.state, &self.input, SIM_DT)?;
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Pointer moves are delivered once
            self.input.pointer = None;
        }

        Ok(self.state.drain_events())
    }

    /// Autopilot: put the pointer where the ball is
    fn follow_ball(&mut self) {
        let ball = self.state.ball.pos;
        self.input.pointer = Some(Vec2::new(ball.x, self.state.paddle.pos.y));
    }
}

fn report(event: &GameEvent, at: u64, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(event).context("serialize event")?);
        return Ok(());
    }

    match event {
        GameEvent::SessionLost => println!("[{at:>6}] You lose!"),
        GameEvent::BrickDestroyed { id, remaining } => {
            println!("[{at:>6}] brick {id} destroyed, {remaining} left")
        }
        GameEvent::Bounce { other, kind, axis } => {
            println!("[{at:>6}] bounce off {kind:?} {other} on {axis:?}")
        }
        GameEvent::WallBounce { wall } => println!("[{at:>6}] wall bounce {wall:?}"),
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.fps <= 0.0 {
        anyhow::bail!("--fps must be positive, got {}", args.fps);
    }

    let settings = match &args.config {
        Some(path) => {
            Settings::load(path).with_context(|| format!("load settings {}", path.display()))?
        }
        None => Settings::default(),
    };

    if args.print_config {
        println!("{}", settings.to_json_pretty()?);
        return Ok(());
    }

    log::info!("Brick Bounce (headless) starting...");
    let mut game = Game::new(&settings)?;
    let frame_dt = 1.0 / args.fps;

    for _ in 0..args.frames {
        if args.autopilot {
            game.follow_ball();
        }
        for event in game.update(frame_dt)? {
            report(&event, game.state.time_ticks, args.json)?;
        }
        if game.state.is_over() {
            break;
        }
    }

    let vertices = draw_list(&game.state);
    if args.json {
        let summary = serde_json::json!({
            "summary": {
                "ticks": game.state.time_ticks,
                "phase": game.state.phase,
                "bricks_remaining": game.state.brick_count(),
                "vertices": vertices.len(),
                "vertex_bytes": vertices.len() * Vertex::STRIDE,
            }
        });
        println!("{summary}");
    } else {
        println!(
            "Finished after {} ticks: {:?}, {} bricks remaining, final frame {} vertices ({} bytes)",
            game.state.time_ticks,
            game.state.phase,
            game.state.brick_count(),
            vertices.len(),
            vertex::as_bytes(&vertices).len()
        );
    }

    Ok(())
}
