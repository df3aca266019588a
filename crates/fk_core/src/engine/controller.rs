//! Player controllers
//!
//! A controller turns the frozen tick snapshot into one `PlayerAction` per
//! tick. Each `Player` owns an AI controller and may additionally be driven by
//! an external one (a human, a script, a network client).

use super::actions::PlayerAction;
use super::match_state::MatchHalf;
use super::team::PlayerId;
use super::tick_snapshot::TickSnapshot;
use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

pub trait PlayerController: Send {
    /// Produce this tick's action for `me`.
    fn act(&mut self, dt: f32, me: PlayerId, ctx: &TickSnapshot) -> PlayerAction;

    /// Called on every phase change, whether or not this controller is active.
    fn match_half_changed(&mut self, _half: MatchHalf) {}
}

/// Controller fed from outside the engine through an `ExternalControlHandle`.
///
/// The newest queued command wins. `Move` is sticky until replaced; every
/// other action fires once and the controller falls back to `Idle`.
pub struct ExternalController {
    commands: Receiver<PlayerAction>,
    sticky: PlayerAction,
    last_half: Option<MatchHalf>,
}

/// Sending side of an `ExternalController`.
#[derive(Clone)]
pub struct ExternalControlHandle {
    commands: Sender<PlayerAction>,
}

impl ExternalControlHandle {
    /// Queue a command; `false` once the controlled player is gone.
    pub fn send(&self, action: PlayerAction) -> bool {
        self.commands.send(action).is_ok()
    }
}

impl ExternalController {
    pub fn channel() -> (ExternalController, ExternalControlHandle) {
        let (tx, rx) = mpsc::channel();
        (
            ExternalController { commands: rx, sticky: PlayerAction::Idle, last_half: None },
            ExternalControlHandle { commands: tx },
        )
    }

    /// Last phase this controller was told about.
    pub fn last_half(&self) -> Option<MatchHalf> {
        self.last_half
    }
}

impl PlayerController for ExternalController {
    fn act(&mut self, _dt: f32, _me: PlayerId, _ctx: &TickSnapshot) -> PlayerAction {
        let mut latest = None;
        loop {
            match self.commands.try_recv() {
                Ok(action) => latest = Some(action),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }

        match latest {
            Some(action @ PlayerAction::Move { .. }) => {
                self.sticky = action;
                action
            }
            Some(action) => {
                self.sticky = PlayerAction::Idle;
                action
            }
            None => self.sticky,
        }
    }

    fn match_half_changed(&mut self, half: MatchHalf) {
        self.last_half = Some(half);
        // a new phase never inherits a held direction
        self.sticky = PlayerAction::Idle;
    }
}
