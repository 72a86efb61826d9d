use std::rc::Rc;

use crate::api::game::EngineContext;
use crate::api::types::{GameEvent, RoundId};
use crate::catalog::island::{Island, IslandRule};
use crate::catalog::word_bank::WordBank;
use crate::core::clock::Clock;
use crate::core::rng::Rng;
use crate::progress::store::CompletionRecorder;
use crate::round::matching::is_match;
use crate::round::scramble::{sample_without_replacement, scramble};

/// Round lifecycle. `Won` and `Lost` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundPhase {
    Initializing,
    Active,
    Won,
    Lost,
}

/// One word of the round and its fixed display form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundWord {
    pub target: String,
    pub scrambled: String,
    pub solved: bool,
}

/// Result of a single submitted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessResult {
    /// Round not active, index out of range, or word already solved.
    Ignored,
    Wrong,
    Correct,
    /// The guess solved the last word.
    Won,
    /// Time ran out before the guess was looked at.
    Expired,
}

/// One play-through of an island: word selection, countdown, matching and
/// the win/lose decision.
pub struct RoundController {
    id: RoundId,
    island: Island,
    rule: IslandRule,
    phase: RoundPhase,
    words: Vec<RoundWord>,
    /// Latest text pushed for each word's input box.
    inputs: Vec<String>,
    current: usize,
    start_ms: u64,
    clock: Rc<dyn Clock>,
}

impl RoundController {
    /// Draw `rule.count` words from the island's pool, scramble each once and
    /// start the countdown. An undersized pool yields a shorter round.
    pub fn start(
        id: RoundId,
        island: Island,
        rule: IslandRule,
        bank: &WordBank,
        clock: Rc<dyn Clock>,
        rng: &mut Rng,
    ) -> Self {
        let mut round = Self {
            id,
            island,
            rule,
            phase: RoundPhase::Initializing,
            words: Vec::new(),
            inputs: Vec::new(),
            current: 0,
            start_ms: 0,
            clock,
        };

        let pool = bank.pool(island, &rule);
        if pool.len() < rule.count {
            log::warn!(
                "round: {} wants {} words of length {} but only {} exist",
                island.id(),
                rule.count,
                rule.length,
                pool.len()
            );
        }
        round.words = sample_without_replacement(&pool, rule.count, rng)
            .into_iter()
            .map(|target| RoundWord {
                scrambled: scramble(&target, rng),
                target,
                solved: false,
            })
            .collect();
        round.inputs = vec![String::new(); round.words.len()];

        round.start_ms = round.clock.now_ms();
        round.phase = RoundPhase::Active;
        log::info!(
            "round {}: started {} with {} words, {}s",
            id.0,
            island.id(),
            round.words.len(),
            rule.time_limit_secs
        );
        round
    }

    pub fn id(&self) -> RoundId {
        self.id
    }

    pub fn island(&self) -> Island {
        self.island
    }

    pub fn rule(&self) -> IslandRule {
        self.rule
    }

    pub fn phase(&self) -> RoundPhase {
        self.phase
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.phase, RoundPhase::Won | RoundPhase::Lost)
    }

    pub fn words(&self) -> &[RoundWord] {
        &self.words
    }

    pub fn scrambled(&self) -> Vec<String> {
        self.words.iter().map(|w| w.scrambled.clone()).collect()
    }

    /// First unsolved word, for one-word-at-a-time play.
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// `time_limit − whole seconds elapsed`. Goes negative once overdue.
    pub fn remaining_secs(&self) -> i64 {
        let elapsed_ms = self.clock.now_ms().saturating_sub(self.start_ms);
        self.rule.time_limit_secs as i64 - (elapsed_ms / 1_000) as i64
    }

    /// Record the current text of word `index`'s input. Checked on the next
    /// tick or explicit check.
    pub fn set_input(&mut self, index: usize, text: &str) {
        if self.phase != RoundPhase::Active {
            return;
        }
        if let Some(slot) = self.inputs.get_mut(index) {
            slot.clear();
            slot.push_str(text);
        }
    }

    /// Once-per-second step: expiry, then matches, then completion.
    pub fn tick(&mut self, ctx: &mut EngineContext, progress: &mut dyn CompletionRecorder) -> RoundPhase {
        if self.phase != RoundPhase::Active {
            return self.phase;
        }
        let remaining = self.remaining_secs();
        if remaining > 0 {
            ctx.emit_event(GameEvent::Timer { remaining_secs: remaining as u32 });
        }
        self.evaluate(ctx, progress)
    }

    /// Same evaluation as a tick without the timer display (Enter key).
    pub fn check_answers(&mut self, ctx: &mut EngineContext, progress: &mut dyn CompletionRecorder) -> RoundPhase {
        if self.phase != RoundPhase::Active {
            return self.phase;
        }
        self.evaluate(ctx, progress)
    }

    /// Judge one guess for word `index`. On success moves on to the next
    /// unsolved word.
    pub fn submit_guess(
        &mut self,
        index: usize,
        text: &str,
        ctx: &mut EngineContext,
        progress: &mut dyn CompletionRecorder,
    ) -> GuessResult {
        if self.phase != RoundPhase::Active {
            return GuessResult::Ignored;
        }
        if self.remaining_secs() <= 0 {
            self.end_round(false, ctx, progress);
            return GuessResult::Expired;
        }
        let Some(word) = self.words.get(index) else {
            return GuessResult::Ignored;
        };
        if word.solved {
            return GuessResult::Ignored;
        }
        if !is_match(text, &word.target) {
            ctx.emit_event(GameEvent::Feedback { text: "Not quite, try again".to_string() });
            return GuessResult::Wrong;
        }

        self.solve(index, ctx);
        if self.all_solved() {
            self.end_round(true, ctx, progress);
            GuessResult::Won
        } else {
            GuessResult::Correct
        }
    }

    fn evaluate(&mut self, ctx: &mut EngineContext, progress: &mut dyn CompletionRecorder) -> RoundPhase {
        // Expiry wins over a matching input on the same step
        if self.remaining_secs() <= 0 {
            self.end_round(false, ctx, progress);
            return self.phase;
        }

        for index in 0..self.words.len() {
            let word = &self.words[index];
            if !word.solved && is_match(&self.inputs[index], &word.target) {
                self.solve(index, ctx);
            }
        }

        if self.all_solved() {
            self.end_round(true, ctx, progress);
        }
        self.phase
    }

    fn solve(&mut self, index: usize, ctx: &mut EngineContext) {
        self.words[index].solved = true;
        ctx.emit_event(GameEvent::WordSolved { index });
        ctx.emit_event(GameEvent::Feedback { text: "Correct!".to_string() });
        if let Some(next) = self.words.iter().position(|w| !w.solved) {
            self.current = next;
        } else {
            self.current = self.words.len();
        }
    }

    /// A round without words can only run out of time.
    fn all_solved(&self) -> bool {
        !self.words.is_empty() && self.words.iter().all(|w| w.solved)
    }

    fn end_round(&mut self, success: bool, ctx: &mut EngineContext, progress: &mut dyn CompletionRecorder) {
        self.phase = if success { RoundPhase::Won } else { RoundPhase::Lost };
        if success {
            let record = progress.record_completion(self.island);
            ctx.emit_event(GameEvent::ProgressChanged {
                unlocked_count: record.unlocked_count,
                completed: record.completed.iter().copied().collect(),
            });
        }
        let text = if success {
            format!("{} island cleared!", self.island.name())
        } else {
            "Time's up!".to_string()
        };
        ctx.emit_event(GameEvent::Feedback { text });
        ctx.emit_event(GameEvent::RoundEnded { island: self.island, success });
        log::info!(
            "round {}: {} {}",
            self.id.0,
            self.island.id(),
            if success { "won" } else { "lost" }
        );
    }
}
