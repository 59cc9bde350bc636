//! The fixed-rate game loop
//!
//! Owns the world and drives one tick at a time:
//! input/quit -> spawn -> move -> collide -> audio cues -> render -> pace.
//! Single-threaded; the only blocking points are the end-of-frame wait and,
//! once, the game-over grace delay.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::audio::AudioSink;
use crate::error::GameError;
use crate::platform::{FramePacer, InputSource};
use crate::renderer::{RenderFrame, Renderer};
use crate::settings::Settings;
use crate::sim::{Spawner, World, tick};

/// Result of a single `step`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Continue,
    /// Quit was requested; the tick was not simulated
    Quit,
    /// Health ran out (this tick or earlier)
    GameOver,
}

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    Quit,
    GameOver,
}

/// Final numbers for a finished run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Ticks simulated
    pub frames: u64,
    pub score: u64,
    pub health: u32,
    pub outcome: RunOutcome,
}

/// Game loop holding the world and its collaborators
pub struct SimulationLoop<I, R, A, P> {
    world: World,
    spawner: Spawner,
    input: I,
    renderer: R,
    audio: A,
    pacer: P,
}

impl<I, R, A, P> SimulationLoop<I, R, A, P>
where
    I: InputSource,
    R: Renderer,
    A: AudioSink,
    P: FramePacer,
{
    pub fn new(
        settings: Settings,
        seed: u64,
        input: I,
        renderer: R,
        audio: A,
        pacer: P,
    ) -> Result<Self, GameError> {
        let world = World::new(settings, seed)?;
        let spawner = Spawner::new(&world.settings);
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            world,
            spawner,
            input,
            renderer,
            audio,
            pacer,
        })
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    pub fn pacer(&self) -> &P {
        &self.pacer
    }

    /// Run exactly one tick
    pub fn step(&mut self) -> StepOutcome {
        if self.world.state.is_over() {
            return StepOutcome::GameOver;
        }

        let input = self.input.poll(&self.world);
        if input.quit {
            log::info!("Quit requested at frame {}", self.world.state.frame);
            return StepOutcome::Quit;
        }

        let report = tick(&mut self.world, &self.spawner, &input);
        for event in report.events {
            self.audio.play(event.into());
        }

        if self.world.state.is_over() {
            // Let the death cue play out before stopping
            let grace = Duration::from_millis(self.world.settings.game_over_grace_ms);
            self.pacer.sleep(grace);
            return StepOutcome::GameOver;
        }

        self.renderer.present(&RenderFrame::capture(&self.world));
        self.pacer.wait_for_next_frame();
        StepOutcome::Continue
    }

    /// Tick until quit or game over
    pub fn run(&mut self) -> RunSummary {
        let outcome = loop {
            match self.step() {
                StepOutcome::Continue => {}
                StepOutcome::Quit => break RunOutcome::Quit,
                StepOutcome::GameOver => break RunOutcome::GameOver,
            }
        };

        let summary = self.summary(outcome);
        log::info!(
            "Run finished ({:?}) after {} frames: score {}, health {}",
            summary.outcome,
            summary.frames,
            summary.score,
            summary.health
        );
        summary
    }

    fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            frames: self.world.state.frame,
            score: self.world.state.score(),
            health: self.world.state.health(),
            outcome,
        }
    }
}
