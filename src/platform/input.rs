//! Pre-recorded input

use std::collections::VecDeque;

use super::InputSource;
use crate::sim::{TickInput, World};

/// Plays back a fixed list of inputs, one per tick. Once the script runs out it
/// either repeats the idle input or asks to quit.
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    script: VecDeque<TickInput>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(script: impl IntoIterator<Item = TickInput>) -> Self {
        Self {
            script: script.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// Request quit after the last scripted tick
    pub fn then_quit(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    /// Hold the same input for `ticks` ticks
    pub fn repeat(input: TickInput, ticks: usize) -> Self {
        Self::new(std::iter::repeat_n(input, ticks))
    }

    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self, _world: &World) -> TickInput {
        self.script.pop_front().unwrap_or(TickInput {
            quit: self.quit_when_done,
            ..Default::default()
        })
    }
}
