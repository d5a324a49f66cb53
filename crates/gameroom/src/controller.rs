use crate::*;
use rps_core::Clock;
use rps_gameplay::*;
use rps_gesture::*;

/// Drives one game, one captured frame at a time.
///
/// Exclusively owns the round [`Timer`] and the computer's [`Chance`].
/// Outcome text and the landmark overlay window are tracked here, apart
/// from the phase, because both outlive the round that produced them:
/// a new start does not clear the last outcome, and landmarks keep
/// showing for the overlay window even if a new countdown has begun.
pub struct Controller<C> {
    timer: Timer,
    chance: C,
    last: Option<Showdown>,
    revealed: Option<Clock>,
    tally: Tally,
}

impl<C> Controller<C>
where
    C: Chance,
{
    pub fn new(config: TimerConfig, chance: C) -> Self {
        Self {
            timer: Timer::new(config),
            chance,
            last: None,
            revealed: None,
            tally: Tally::default(),
        }
    }

    /// Applies one frame's worth of input.
    ///
    /// Order within a tick: start request, countdown, classification,
    /// resolution. A gesture seen on the very tick the countdown expires
    /// resolves the round on that tick.
    pub fn tick(&mut self, now: Clock, hands: &[Snapshot], start: bool) -> Render {
        if start {
            self.timer.start(now);
        }
        self.timer.advance(now);
        let gesture = Self::observe(hands);
        if self.timer.phase().is_holding() && gesture.is_known() {
            self.play(gesture, now);
        }
        self.render(now)
    }

    /// [`Self::tick`] over a recorded [`Frame`]. `quit` is left to the caller.
    pub fn apply(&mut self, now: Clock, frame: &Frame) -> Render {
        self.tick(now, &frame.hands, frame.start)
    }

    pub fn phase(&self) -> &Phase {
        self.timer.phase()
    }
    pub fn tally(&self) -> &Tally {
        &self.tally
    }
    /// The most recent resolved round, even after a new round has started.
    pub fn last(&self) -> Option<&Showdown> {
        self.last.as_ref()
    }
}

impl<C> Controller<C>
where
    C: Chance,
{
    /// Classifies every hand; the last one reported wins.
    fn observe(hands: &[Snapshot]) -> Move {
        hands
            .iter()
            .map(|hand| match classify(hand) {
                Ok(gesture) => gesture,
                Err(e) => {
                    log::warn!("{}", e);
                    Move::Unknown
                }
            })
            .fold(Move::Unknown, |_, gesture| gesture)
    }

    fn play(&mut self, gesture: Move, now: Clock) {
        match resolve(gesture, &mut self.chance) {
            Ok(showdown) => {
                self.timer.settle(showdown, now);
                self.last = Some(showdown);
                self.revealed = Some(now);
                self.tally.record(showdown.outcome());
                log::info!("{} {}", showdown.outcome().headline(), showdown);
            }
            Err(e @ ResolveError::InvalidArgument(_)) => {
                log::error!("controller resolved an unclassified move: {}", e);
            }
            Err(e @ ResolveError::Unavailable(_)) => {
                log::error!("{}; round stays open", e);
            }
        }
    }

    fn render(&self, now: Clock) -> Render {
        Render {
            label: self.label(),
            outcome: self
                .last
                .map(|s| format!("{} {}", s.outcome().headline(), s))
                .unwrap_or_default(),
            color: Color::from(self.last.map(|s| s.outcome())),
            overlay: self.overlay(now),
        }
    }

    fn label(&self) -> String {
        match self.timer.phase() {
            Phase::Idle | Phase::Resolved { .. } => format!("PRESS SPACE TO START!"),
            Phase::Counting { remaining, .. } => format!("PLAY STARTS IN {}", remaining),
            Phase::Holding => format!("PLAY NOW!"),
        }
    }

    fn overlay(&self, now: Clock) -> bool {
        self.timer.phase().is_holding()
            || self
                .revealed
                .is_some_and(|at| now.saturating_sub(at) <= self.timer.config().overlay)
    }
}
