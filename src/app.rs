//! Session controller
//!
//! Owns the current [`GameSession`] together with everything that outlives
//! it: the best score of this run, the tick scheduler and the score/overlay
//! collaborators. The frame loop feeds it input and the clock; it never reads
//! either itself.

use anyhow::{Context, Result};
use log::{debug, info};
use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};

use crate::config::GameConfig;
use crate::game::{GameSession, SpeedCurve, TickOutcome};
use crate::input::{self, InputEvent};
use crate::render::{Hud, Overlay, Renderer, Surface};
use crate::scheduler::Scheduler;

/// Best score seen since the process started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighScore(u32);

impl HighScore {
    pub fn get(self) -> u32 {
        self.0
    }

    /// Raises the record if `score` beats it
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.0 {
            self.0 = score;
            true
        } else {
            false
        }
    }
}

pub struct GameController {
    config: GameConfig,
    speed: SpeedCurve,
    /// `None` until the first start
    session: Option<GameSession>,
    high_score: HighScore,
    scheduler: Scheduler,
    /// Seeds one RNG per session
    seeds: SmallRng,
    hud: Hud,
    overlay: Option<Overlay>,
}

impl GameController {
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        config.validate().context("refusing to start with this config")?;
        Ok(Self {
            speed: SpeedCurve::from_config(&config),
            config,
            session: None,
            high_score: HighScore::default(),
            scheduler: Scheduler::new(),
            seeds: SmallRng::seed_from_u64(seed),
            hud: Hud::new(),
            overlay: Some(Overlay::Title),
        })
    }

    /// Controller already running `session`, first tick due at `now_ms + interval`
    #[cfg(test)]
    fn with_session(config: GameConfig, session: GameSession, now_ms: f64) -> Self {
        let mut controller = Self::new(config, 0).unwrap();
        controller.session = Some(session);
        controller.overlay = None;
        let interval = controller.current_interval_ms();
        controller.scheduler.schedule(now_ms, interval);
        controller
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn high_score(&self) -> HighScore {
        self.high_score
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    pub fn hud(&self) -> &Hud {
        &self.hud
    }

    pub fn overlay(&self) -> Option<Overlay> {
        self.overlay
    }

    /// Tick interval for the current score
    pub fn current_interval_ms(&self) -> u32 {
        self.speed.interval_ms(self.session.as_ref().map_or(0, GameSession::score))
    }

    /// Replaces the session wholesale. Any tick still pending from the old one
    /// is cancelled first, so only one tick stream ever exists.
    pub fn start(&mut self, now_ms: f64) {
        if let Some(stale) = self.scheduler.cancel() {
            debug!("cancelled pending tick {:?}", stale);
        }

        let rng = SmallRng::seed_from_u64(self.seeds.next_u64());
        let session = GameSession::new(&self.config, rng);
        info!(
            "new game: {}x{} board, food at {:?}",
            session.width(),
            session.height(),
            session.food()
        );
        self.session = Some(session);
        self.hud.set_score(0);
        self.overlay = None;

        let interval = self.current_interval_ms();
        self.scheduler.schedule(now_ms, interval);
    }

    pub fn handle(&mut self, event: InputEvent, now_ms: f64) {
        match event {
            InputEvent::Start => {
                if self.overlay.is_some() {
                    self.start(now_ms);
                }
            }
            InputEvent::TogglePause => self.toggle_pause(now_ms),
            InputEvent::Steer(direction) => {
                if let Some(session) = self.session.as_mut() {
                    input::steer(session, direction);
                }
            }
            // Quitting is the frame loop's business
            InputEvent::Quit => {}
        }
    }

    fn toggle_pause(&mut self, now_ms: f64) {
        if self.overlay.is_some() {
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if !session.toggle_pause() {
            return;
        }
        if session.is_paused() {
            debug!("paused at score {}", session.score());
        } else {
            // Resume a full interval from now rather than mid-way
            let interval = self.current_interval_ms();
            self.scheduler.schedule(now_ms, interval);
        }
    }

    /// Runs the pending tick if it is due and returns what it did
    pub fn update(&mut self, now_ms: f64) -> Option<TickOutcome> {
        let fired = self.scheduler.poll(now_ms)?;
        let session = self.session.as_mut()?;
        let outcome = session.tick();
        let score = session.score();

        self.hud.set_score(score);
        if self.high_score.record(score) {
            self.hud.set_best(score);
        }

        match outcome {
            TickOutcome::Over(ending) => {
                self.scheduler.cancel();
                self.overlay = Some(Overlay::GameOver { score, ending });
                info!("game over ({:?}) with score {}, best {}", ending, score, self.high_score.get());
            }
            TickOutcome::Ate { score } => {
                let interval = self.current_interval_ms();
                debug!("score {} -> next tick in {}ms", score, interval);
                self.scheduler.schedule_after(fired, now_ms, interval);
            }
            TickOutcome::Moved | TickOutcome::Paused => {
                let interval = self.current_interval_ms();
                self.scheduler.schedule_after(fired, now_ms, interval);
            }
        }

        Some(outcome)
    }

    /// Score strip on `hud_surface`; board and any overlay on `board_surface`
    pub fn draw<S: Surface + ?Sized>(&self, renderer: &Renderer, hud_surface: &mut S, board_surface: &mut S) {
        let (w, h) = self.config.board_size();
        self.hud.draw(hud_surface, w);

        match &self.session {
            Some(session) => renderer.draw(session, board_surface),
            None => renderer.draw_board(self.config.grid_width, self.config.grid_height, board_surface),
        }

        if let Some(overlay) = self.overlay {
            overlay.draw(board_surface, w, h);
        }
    }
}
