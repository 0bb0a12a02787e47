//! Game session driver
//!
//! Owns the level, the tuning and exactly one `Simulation`. When a run ends
//! (death or win) the simulation is thrown away and a fresh one is built
//! from the level; nothing is reset in place.

use crate::level::Level;
use crate::platform::input::{Action, InputSource};
use crate::sim::{DeathCause, FrameView, SimStatus, Simulation};
use crate::tuning::Tuning;

/// Result of one session step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The run continues
    Running,
    /// The run ended this frame and a new one has been started
    Restarted(SimStatus),
}

pub struct Session {
    level: Level,
    tuning: Tuning,
    sim: Simulation,
    show_hitboxes: bool,
    /// Completed runs
    pub runs: u32,
    pub wins: u32,
    pub deaths: u32,
}

impl Session {
    pub fn new(level: Level, tuning: Tuning) -> Self {
        let sim = Simulation::new(&level, &tuning);
        log::info!("Session started ({} spawns)", level.spawns().len());
        Self {
            level,
            tuning,
            sim,
            show_hitboxes: false,
            runs: 0,
            wins: 0,
            deaths: 0,
        }
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    pub fn show_hitboxes(&self) -> bool {
        self.show_hitboxes
    }

    /// Run one frame, restarting the level if the run ended
    pub fn step<I: InputSource + ?Sized>(&mut self, input: &mut I, dt: f32) -> StepOutcome {
        if input.is_released(Action::ToggleHitboxes) {
            self.show_hitboxes = !self.show_hitboxes;
            log::debug!("Hitbox display {}", if self.show_hitboxes { "on" } else { "off" });
        }

        self.sim.update(input, dt);

        let status = self.sim.status();
        if !status.is_terminal() {
            return StepOutcome::Running;
        }

        self.runs += 1;
        match status {
            SimStatus::Won => {
                self.wins += 1;
                log::info!("Level complete! Score {:.2}", self.sim.score());
            }
            SimStatus::Dead(DeathCause::Fell) => {
                self.deaths += 1;
                log::info!("Fell out of the world. Score {:.2}", self.sim.score());
            }
            SimStatus::Dead(DeathCause::Hazard) => {
                self.deaths += 1;
                log::info!("Died horribly. Score {:.2}", self.sim.score());
            }
            SimStatus::Running => {}
        }

        self.restart();
        StepOutcome::Restarted(status)
    }

    /// Replace the current simulation with a fresh one
    pub fn restart(&mut self) {
        self.sim = Simulation::new(&self.level, &self.tuning);
        log::debug!("Simulation rebuilt (run {})", self.runs + 1);
    }

    pub fn view(&self) -> FrameView {
        self.sim.view(self.show_hitboxes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::{SpawnRequest, TileKind};
    use crate::platform::input::KeyboardInput;

    const DT: f32 = 1.0 / 60.0;

    #[test]
    fn test_win_restarts_with_fresh_simulation() {
        let level = Level::from_spawns(vec![
            SpawnRequest::new(TileKind::Player, 20.0, 20.0),
            SpawnRequest::new(TileKind::Coin, 20.0, 20.0),
            SpawnRequest::new(TileKind::Exit, 20.0, 20.0),
        ])
        .unwrap();
        let mut session = Session::new(level, Tuning::default());
        let mut input = KeyboardInput::default();

        let outcome = session.step(&mut input, DT);
        assert_eq!(outcome, StepOutcome::Restarted(SimStatus::Won));
        assert_eq!(session.runs, 1);
        assert_eq!(session.wins, 1);

        // The coin picked up during the winning frame is back
        let sim = session.simulation();
        assert!(sim.alive());
        assert_eq!(sim.entity_count(), 3);
        assert_eq!(sim.score(), 0.0);
        assert_eq!(sim.frame, 0);
    }

    #[test]
    fn test_death_counts_and_restarts() {
        let level = Level::parse("p").unwrap();
        let mut session = Session::new(level, Tuning::default());
        let mut input = KeyboardInput::default();

        let mut outcome = StepOutcome::Running;
        for _ in 0..600 {
            outcome = session.step(&mut input, DT);
            if outcome != StepOutcome::Running {
                break;
            }
        }
        assert_eq!(outcome, StepOutcome::Restarted(SimStatus::Dead(DeathCause::Fell)));
        assert_eq!(session.deaths, 1);
        assert_eq!(session.simulation().player_object().map(|p| p.pos.y), Some(0.0));
    }

    #[test]
    fn test_release_on_winning_frame_toggles_once() {
        let level = Level::from_spawns(vec![
            SpawnRequest::new(TileKind::Player, 20.0, 20.0),
            SpawnRequest::new(TileKind::Exit, 20.0, 20.0),
        ])
        .unwrap();
        let mut session = Session::new(level, Tuning::default());
        let mut input = KeyboardInput::default();
        input.press_key("h");
        input.advance();
        input.release_key("h");

        let outcome = session.step(&mut input, DT);
        assert_eq!(outcome, StepOutcome::Restarted(SimStatus::Won));
        assert!(session.show_hitboxes());
        assert!(!input.is_released(Action::ToggleHitboxes));

        // The fresh run does not see the old edge again
        session.step(&mut input, DT);
        assert!(session.show_hitboxes());
        assert_eq!(session.wins, 2);
    }

    #[test]
    fn test_hitbox_toggle_on_release() {
        let mut session = Session::new(Level::parse("p\ng").unwrap(), Tuning::default());
        let mut input = KeyboardInput::default();

        input.press_key("h");
        session.step(&mut input, DT);
        assert!(!session.show_hitboxes());

        input.release_key("h");
        session.step(&mut input, DT);
        assert!(session.show_hitboxes());
        assert!(session.view().drawables[0].hitbox.is_some());

        // Release edge has aged out
        session.step(&mut input, DT);
        assert!(session.show_hitboxes());
    }
}
