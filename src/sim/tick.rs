//! Per-frame simulation step
//!
//! Runs one frame to completion:
//! 1. Input → player intent signals
//! 2. Ground scan → landing signal
//! 3. Contact scan → pickups, stomps, death, win
//! 4. Entity updates in spawn order
//! 5. Fall death
//! 6. World scroll, judged on where the player stood before step 4
//! 7. Input edge aging (also on the winning frame)

use super::collision::{ground_snap, player_contacts};
use super::entity::{Contact, EntityId};
use super::signal::Signal;
use super::state::{DeathCause, SimStatus, Simulation};
use crate::platform::input::{Action, InputSource};

/// What the player wants to do this frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameIntent {
    /// Exactly one of `MoveLeft`, `MoveRight`, `MoveNeutral`
    pub horizontal: Signal,
    /// Jump was pressed since the previous frame
    pub jump: bool,
}

impl FrameIntent {
    /// Left wins over right when both are held
    pub fn sample<I: InputSource + ?Sized>(input: &I) -> Self {
        let horizontal = if input.is_held(Action::MoveLeft) {
            Signal::MoveLeft
        } else if input.is_held(Action::MoveRight) {
            Signal::MoveRight
        } else {
            Signal::MoveNeutral
        };
        Self {
            horizontal,
            jump: input.is_pressed(Action::Jump),
        }
    }
}

impl Simulation {
    /// Advance the simulation by `dt` seconds
    pub fn update<I: InputSource + ?Sized>(&mut self, input: &mut I, dt: f32) {
        tick(self, input, dt);
    }
}

/// Advance the simulation by one frame of `dt` seconds.
///
/// Negative or non-finite deltas count as zero. A finished simulation is
/// left untouched; the driver is expected to replace it.
pub fn tick<I: InputSource + ?Sized>(sim: &mut Simulation, input: &mut I, dt: f32) {
    if sim.status().is_terminal() {
        log::warn!("update() on a finished simulation ({:?})", sim.status());
        return;
    }

    let dt = if dt.is_finite() && dt >= 0.0 {
        dt
    } else {
        log::debug!("Ignoring invalid frame delta {}", dt);
        0.0
    };

    let Some(player_idx) = sim.index_of(sim.player_id()) else {
        return;
    };

    // Player intent
    let intent = FrameIntent::sample(&*input);
    let start_x = sim.entities()[player_idx].object.pos.x;
    {
        let player = &mut sim.entities_mut()[player_idx].object;
        player.push_signal(intent.horizontal);
        if intent.jump {
            player.push_signal(Signal::Jump);
        }
    }

    // Ground contact, first hit in spawn order
    let snap_offset = sim.world().ground_snap_offset;
    let snap = {
        let player = &sim.entities()[player_idx].object;
        let ground = sim.ground_ids().iter().filter_map(|&id| sim.entity(id));
        ground_snap(player, ground, snap_offset)
    };
    let on_ground = snap.is_some();
    if let Some(y) = snap {
        sim.entities_mut()[player_idx].object.push_signal(Signal::HitGround(y));
    }

    // Pickups, hazards and the exit
    let contacts = player_contacts(&sim.entities()[player_idx].object, sim.entities());
    let mut removed: Vec<EntityId> = Vec::new();
    let mut finished = false;
    for (id, contact) in contacts {
        match contact {
            Contact::Collect => {
                removed.push(id);
                sim.add_score(sim.world().coin_value);
                log::debug!("Coin {} collected, score {:.2}", id, sim.score());
            }
            Contact::Hazard => {
                if on_ground {
                    log::debug!("Player ran into hazard {}", id);
                    sim.finish(SimStatus::Dead(DeathCause::Hazard));
                } else {
                    log::debug!("Player stomped hazard {}", id);
                    removed.push(id);
                }
            }
            Contact::Finish => {
                sim.finish(SimStatus::Won);
                finished = true;
                break;
            }
            Contact::Pass => {}
        }
    }
    sim.remove_entities(&removed);
    if finished {
        input.advance();
        return;
    }

    // Everyone moves, in spawn order
    for entity in sim.entities_mut() {
        entity.update(dt);
    }

    if sim.player_state().is_some_and(|p| p.dead) {
        sim.finish(SimStatus::Dead(DeathCause::Fell));
    }

    // Keep the player pinned near the threshold by moving the world under it
    let world = *sim.world();
    if start_x > world.scroll_threshold_x {
        let dx = -world.scroll_speed * dt;
        for entity in sim.entities_mut() {
            entity.object.move_relative(dx, 0.0);
        }
    }

    input.advance();
    sim.frame += 1;
}
