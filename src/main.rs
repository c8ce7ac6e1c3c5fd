//! Terminal Game of Life runner (default binary).
//!
//! Drives a `LifeSession` at a fixed step cadence and renders the grid with
//! the framebuffer-based terminal renderer.
//!
//! Usage: `tui-life [--size WxH] [--seed patterns.json] [--interval ms]`

use std::time::{Duration, Instant};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};

use tui_life::clock::StepClock;
use tui_life::core::SeedConfig;
use tui_life::session::LifeSession;
use tui_life::term::{GridView, TerminalRenderer, Viewport};
use tui_life::types::{GRID_HEIGHT, GRID_WIDTH, STEP_INTERVAL_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
struct RunConfig {
    width: u32,
    height: u32,
    interval_ms: u64,
    seed_path: Option<String>,
}

fn parse_args(args: &[String]) -> Result<RunConfig> {
    let mut config = RunConfig {
        width: GRID_WIDTH,
        height: GRID_HEIGHT,
        interval_ms: STEP_INTERVAL_MS,
        seed_path: None,
    };

    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--size" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --size"))?;
                let (w, h) = v
                    .split_once('x')
                    .ok_or_else(|| anyhow!("--size expects WxH, got: {}", v))?;
                config.width = w
                    .parse()
                    .map_err(|_| anyhow!("invalid --size width: {}", w))?;
                config.height = h
                    .parse()
                    .map_err(|_| anyhow!("invalid --size height: {}", h))?;
            }
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --seed"))?;
                config.seed_path = Some(v.clone());
            }
            "--interval" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("missing value for --interval"))?;
                config.interval_ms = v
                    .parse()
                    .map_err(|_| anyhow!("invalid --interval value: {}", v))?;
            }
            other => {
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
        i += 1;
    }

    Ok(config)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = parse_args(&args)?;

    let seed = match &config.seed_path {
        Some(path) => SeedConfig::load(path)?,
        None => SeedConfig::reference(),
    };

    let mut session = LifeSession::new(config.width, config.height)?;
    session.initialize(&seed)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &seed, config.interval_ms);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut LifeSession,
    seed: &SeedConfig,
    interval_ms: u64,
) -> Result<()> {
    let view = GridView::default();
    let mut clock = StepClock::new(interval_ms);
    let mut paused = false;
    let start = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(
            session.engine().grid(),
            session.engine().generation(),
            paused,
            Viewport::new(w, h),
        );
        term.draw(&fb)?;

        // Input with a short poll so steps stay on cadence.
        let timeout = Duration::from_millis(interval_ms.min(25));
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char(' ') => {
                        paused = !paused;
                        if !paused {
                            clock.resync();
                        }
                    }
                    KeyCode::Char('r') => {
                        session.initialize(seed)?;
                        clock.resync();
                    }
                    KeyCode::Char('c') => {
                        session.reset();
                    }
                    _ => {}
                },
                Event::Resize(_, _) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Step on cadence.
        if !paused {
            let now_ms = start.elapsed().as_millis() as u64;
            for _ in 0..clock.due(now_ms) {
                session.step();
            }
        }
    }
}
