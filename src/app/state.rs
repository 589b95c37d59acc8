use std::{
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::event::{Event, KeyEventKind};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::{
    app::{
        events::{AppEvent, start_frame_task},
        settings::{MotionSetting, RuntimeSettings, load_runtime_settings, save_runtime_settings},
    },
    cli::Cli,
    domain::weather::{DayPhase, WeatherCondition},
    fx::{Bounds, EffectSurface, RandomSource, StdRandom},
    ui::layout,
};

mod input;

use input::{Command, key_command};

/// Longest wall-clock step fed to the effect clock; a stalled terminal must not fast-forward.
pub const MAX_FRAME_STEP: f32 = 0.25;
/// How far a freshly presented recipe is played before a frozen clock shows it: past the
/// longest precipitation delay and into the wind stagger.
pub const STILL_FRAME_WARMUP: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Running,
    Quit,
}

#[derive(Debug)]
pub struct AppState {
    pub mode: AppMode,
    pub running: bool,
    pub condition: WeatherCondition,
    pub phase: DayPhase,
    pub surface: EffectSurface,
    pub settings: RuntimeSettings,
    pub settings_path: Option<PathBuf>,
    pub paused: bool,
    pub notice: Option<String>,
    pub last_frame_at: Instant,
    pub frame_tick: u64,
    fps: u8,
}

impl AppState {
    pub fn new(cli: &Cli) -> Self {
        let (settings, settings_path) = load_runtime_settings(cli, true);
        Self::with_settings(cli, settings, settings_path)
    }

    /// Builds the state without touching the disk. The surface starts empty until the first
    /// resize gives it real bounds.
    pub fn with_settings(
        cli: &Cli,
        settings: RuntimeSettings,
        settings_path: Option<PathBuf>,
    ) -> Self {
        let (random, mut picker) = match cli.seed {
            Some(seed) => (
                StdRandom::seeded(seed),
                StdRandom::seeded(seed.rotate_left(32)),
            ),
            None => (StdRandom::entropy(), StdRandom::entropy()),
        };
        let condition = cli
            .condition
            .unwrap_or_else(|| random_condition(&mut picker));
        let phase = cli.phase();

        let mut surface = EffectSurface::with_random(Bounds::default(), Box::new(random));
        surface.present(condition, phase);
        info!(%condition, %phase, "opening condition");

        Self {
            mode: AppMode::Running,
            running: true,
            condition,
            phase,
            surface,
            settings,
            settings_path,
            paused: false,
            notice: None,
            last_frame_at: Instant::now(),
            frame_tick: 0,
            fps: cli.fps,
        }
    }

    pub async fn handle_event(&mut self, event: AppEvent, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            AppEvent::Bootstrap => {
                start_frame_task(tx.clone(), self.frame_rate());
                match crossterm::terminal::size() {
                    Ok((width, height)) => self.resize_viewport(width, height),
                    Err(err) => warn!(%err, "terminal size unavailable"),
                }
                self.last_frame_at = Instant::now();
            }
            AppEvent::TickFrame => {
                let now = Instant::now();
                let delta = now.duration_since(self.last_frame_at);
                self.last_frame_at = now;
                self.frame_tick = self.frame_tick.saturating_add(1);
                self.advance(delta);
            }
            AppEvent::Input(event) => self.handle_input(event, tx).await?,
            AppEvent::Quit => {
                self.mode = AppMode::Quit;
            }
        }

        Ok(())
    }

    async fn handle_input(&mut self, event: Event, tx: &mpsc::Sender<AppEvent>) -> Result<()> {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                let Some(command) = key_command(key) else {
                    return Ok(());
                };
                if command == Command::Quit {
                    tx.send(AppEvent::Quit).await?;
                } else {
                    self.apply(command);
                }
            }
            Event::Resize(width, height) => self.resize_viewport(width, height),
            _ => {}
        }
        Ok(())
    }

    fn apply(&mut self, command: Command) {
        match command {
            Command::Previous => self.select(self.condition.cycle(-1)),
            Command::Next => self.select(self.condition.cycle(1)),
            Command::TogglePhase => self.set_phase(self.phase.toggle()),
            Command::Reroll => {
                debug!(condition = %self.condition, "re-rolling recipe");
                self.show_current();
            }
            Command::Pause => {
                self.paused = !self.paused;
                debug!(paused = self.paused, "pause toggled");
            }
            Command::CycleMarker => self.cycle_marker(),
            Command::Quit => self.mode = AppMode::Quit,
        }
    }

    /// Reduced motion also caps the ticker.
    #[must_use]
    pub fn frame_rate(&self) -> u8 {
        if self.settings.motion == MotionSetting::Reduced {
            self.fps.min(20)
        } else {
            self.fps
        }
    }

    pub fn select(&mut self, condition: WeatherCondition) {
        self.condition = condition;
        self.show_current();
    }

    pub fn set_phase(&mut self, phase: DayPhase) {
        self.phase = phase;
        self.show_current();
    }

    /// True while nothing feeds the effect clock.
    #[must_use]
    pub fn clock_frozen(&self) -> bool {
        self.paused || self.settings.motion == MotionSetting::Off
    }

    /// A frozen flash frame would be arbitrary, so bolts hold the dim level then too.
    #[must_use]
    pub fn steady_bolts(&self) -> bool {
        self.settings.no_flash || self.clock_frozen()
    }

    pub fn cycle_marker(&mut self) {
        self.settings.marker = self.settings.marker.next();
        self.persist_settings();
    }

    pub fn resize_viewport(&mut self, width: u16, height: u16) {
        let bounds = layout::surface_bounds(width, height);
        debug!(width, height, ?bounds, "viewport resized");
        if self.surface.resize(bounds) {
            self.settle_if_frozen();
        }
    }

    /// Feeds one frame of wall-clock time to the surface, honouring pause and motion settings.
    pub fn advance(&mut self, delta: Duration) {
        if self.clock_frozen() {
            return;
        }
        let step = delta.as_secs_f32().clamp(0.0, MAX_FRAME_STEP) * self.settings.motion.time_scale();
        self.surface.tick(Duration::from_secs_f32(step));
    }

    fn show_current(&mut self) {
        self.surface.present(self.condition, self.phase);
        self.settle_if_frozen();
    }

    /// With the clock stopped, the fresh recipe is played forward once so the still frame shows
    /// falling particles and launched leaves instead of an empty sky.
    fn settle_if_frozen(&mut self) {
        if self.clock_frozen() {
            self.surface.settle(
                STILL_FRAME_WARMUP,
                Duration::from_secs_f32(MAX_FRAME_STEP),
            );
        }
    }

    fn persist_settings(&mut self) {
        let Some(path) = self.settings_path.as_deref() else {
            return;
        };
        match save_runtime_settings(path, self.settings) {
            Ok(()) => self.notice = None,
            Err(err) => {
                warn!(error = %format!("{err:#}"), "saving settings failed");
                self.notice = Some(format!("settings not saved: {err}"));
            }
        }
    }
}

fn random_condition(picker: &mut StdRandom) -> WeatherCondition {
    let random: &mut dyn RandomSource = picker;
    random
        .pick(&WeatherCondition::ALL)
        .copied()
        .unwrap_or(WeatherCondition::Clear)
}
