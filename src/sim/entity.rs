//! Entity variants
//!
//! Every entity is a `GameObject` plus a closed `EntityKind` that decides its
//! per-frame behavior and what happens when the player touches it.

use serde::{Deserialize, Serialize};

use super::object::{GameObject, Sprite};
use super::player::PlayerState;
use crate::consts::*;
use crate::level::{SpawnRequest, TileKind};
use crate::tuning::PlayerTuning;

/// Stable entity handle, allocated in spawn order
pub type EntityId = u32;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Vertical {
    Up,
    Down,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Horizontal {
    Left,
    Right,
}

/// Vertical bobbing animation bounded by travel since spawn
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bob {
    pub direction: Vertical,
    /// Net vertical displacement since spawn
    pub travel: f32,
    pub speed: f32,
    /// Turn downward once travel drops below this
    pub upper: f32,
    /// Turn upward once travel rises above this
    pub lower: f32,
}

impl Bob {
    pub fn coin() -> Self {
        Self {
            direction: Vertical::Up,
            travel: 0.0,
            speed: COIN_BOB_SPEED,
            upper: COIN_BOB_UPPER,
            lower: COIN_BOB_LOWER,
        }
    }

    pub fn exit() -> Self {
        Self {
            direction: Vertical::Down,
            travel: 0.0,
            speed: EXIT_BOB_SPEED,
            upper: EXIT_BOB_UPPER,
            lower: EXIT_BOB_LOWER,
        }
    }

    /// Advance the animation, returning the y displacement to apply
    pub fn step(&mut self, dt: f32) -> f32 {
        let dy = match self.direction {
            Vertical::Down => self.speed * dt,
            Vertical::Up => -self.speed * dt,
        };
        self.travel += dy;

        if self.travel < self.upper {
            self.direction = Vertical::Down;
        } else if self.travel > self.lower {
            self.direction = Vertical::Up;
        }
        dy
    }
}

/// Horizontal patrol within `reach` of the spawn point
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patrol {
    pub direction: Horizontal,
    /// Net horizontal displacement since spawn
    pub travel: f32,
    pub speed: f32,
    pub reach: f32,
}

impl Patrol {
    pub fn jerk() -> Self {
        Self {
            direction: Horizontal::Left,
            travel: 0.0,
            speed: JERK_SPEED,
            reach: JERK_REACH,
        }
    }

    /// Advance the patrol, returning the x displacement to apply.
    ///
    /// Turning around at the left bound lets the walk right start in the
    /// same frame; turning at the right bound costs a frame.
    pub fn step(&mut self, dt: f32) -> f32 {
        let mut dx = 0.0;

        if self.direction == Horizontal::Left {
            if self.travel > -self.reach {
                dx -= self.speed * dt;
            } else {
                self.direction = Horizontal::Right;
            }
        }
        if self.direction == Horizontal::Right {
            if self.travel < self.reach {
                dx += self.speed * dt;
            } else {
                self.direction = Horizontal::Left;
            }
        }

        self.travel += dx;
        dx
    }
}

/// What touching an entity does to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing happens
    Pass,
    /// Picked up for score
    Collect,
    /// Deadly unless landed on from above
    Hazard,
    /// Level complete
    Finish,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum EntityKind {
    Ground,
    Grass,
    Cloud,
    Palm,
    Coin(Bob),
    Exit(Bob),
    Jerk(Patrol),
    Player(PlayerState),
}

impl EntityKind {
    pub fn contact(&self) -> Contact {
        match self {
            EntityKind::Coin(_) => Contact::Collect,
            EntityKind::Jerk(_) => Contact::Hazard,
            EntityKind::Exit(_) => Contact::Finish,
            EntityKind::Ground
            | EntityKind::Grass
            | EntityKind::Cloud
            | EntityKind::Palm
            | EntityKind::Player(_) => Contact::Pass,
        }
    }

    pub fn is_ground(&self) -> bool {
        matches!(self, EntityKind::Ground)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entity {
    pub id: EntityId,
    pub object: GameObject,
    pub kind: EntityKind,
}

impl Entity {
    /// Build the entity a spawn request describes
    pub fn spawn(id: EntityId, request: &SpawnRequest, physics: PlayerTuning) -> Self {
        let (x, y) = (request.pos.x, request.pos.y);
        let tile = |sprite| GameObject::new(x, y, TILE_SIZE, TILE_SIZE, sprite);

        let (object, kind) = match request.kind {
            TileKind::Ground => (
                tile(Sprite::Ground).with_hitbox(TILE_SIZE, GROUND_HITBOX_HEIGHT),
                EntityKind::Ground,
            ),
            TileKind::Grass => (tile(Sprite::Grass), EntityKind::Grass),
            TileKind::Coin => (
                tile(Sprite::Coin).with_hitbox(TILE_SIZE, TILE_SIZE),
                EntityKind::Coin(Bob::coin()),
            ),
            TileKind::Cloud => (
                GameObject::new(x, y, CLOUD_SIZE, CLOUD_SIZE, Sprite::Cloud),
                EntityKind::Cloud,
            ),
            TileKind::Palm => (
                GameObject::new(x, y, PALM_WIDTH, PALM_HEIGHT, Sprite::Palm),
                EntityKind::Palm,
            ),
            TileKind::Exit => (
                tile(Sprite::Exit).with_hitbox(TILE_SIZE, TILE_SIZE),
                EntityKind::Exit(Bob::exit()),
            ),
            TileKind::Jerk => (
                tile(Sprite::Jerk).with_hitbox(TILE_SIZE, TILE_SIZE),
                EntityKind::Jerk(Patrol::jerk()),
            ),
            TileKind::Player => (
                GameObject::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT, Sprite::Dude)
                    .with_hitbox(PLAYER_WIDTH, PLAYER_HEIGHT),
                EntityKind::Player(PlayerState::new(physics)),
            ),
        };

        Self { id, object, kind }
    }

    pub fn player(&self) -> Option<&PlayerState> {
        match &self.kind {
            EntityKind::Player(state) => Some(state),
            _ => None,
        }
    }

    /// Per-frame behavior for this entity's variant
    pub fn update(&mut self, dt: f32) {
        match &mut self.kind {
            EntityKind::Ground | EntityKind::Grass | EntityKind::Cloud | EntityKind::Palm => {}
            EntityKind::Coin(bob) | EntityKind::Exit(bob) => {
                let dy = bob.step(dt);
                self.object.move_relative(0.0, dy);
            }
            EntityKind::Jerk(patrol) => {
                let dx = patrol.step(dt);
                self.object.move_relative(dx, 0.0);
            }
            EntityKind::Player(state) => state.update(&mut self.object, dt),
        }
        self.object.update(dt);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spawn(kind: TileKind) -> Entity {
        Entity::spawn(1, &SpawnRequest::new(kind, 100.0, 100.0), PlayerTuning::default())
    }

    #[test]
    fn test_spawn_sizes_and_hitboxes() {
        let ground = spawn(TileKind::Ground);
        assert_eq!(ground.object.bounds(), (100.0, 100.0, 40.0, 40.0));
        assert_eq!(ground.object.hitbox().map(|hb| hb.size.y), Some(38.0));

        for kind in [TileKind::Grass, TileKind::Cloud, TileKind::Palm] {
            assert!(spawn(kind).object.hitbox().is_none());
        }
        assert_eq!(spawn(TileKind::Cloud).object.size.x, 80.0);
        assert_eq!(spawn(TileKind::Palm).object.size.y, 120.0);

        let player = spawn(TileKind::Player);
        assert_eq!(player.object.hitbox().map(|hb| hb.bounds()), Some((100.0, 100.0, 40.0, 80.0)));
        assert!(player.player().is_some());
        assert!(ground.player().is_none());
    }

    #[test]
    fn test_contacts() {
        assert_eq!(spawn(TileKind::Coin).kind.contact(), Contact::Collect);
        assert_eq!(spawn(TileKind::Jerk).kind.contact(), Contact::Hazard);
        assert_eq!(spawn(TileKind::Exit).kind.contact(), Contact::Finish);
        assert_eq!(spawn(TileKind::Ground).kind.contact(), Contact::Pass);
        assert_eq!(spawn(TileKind::Player).kind.contact(), Contact::Pass);
        assert!(spawn(TileKind::Ground).kind.is_ground());
    }

    #[test]
    fn test_static_tiles_stay_put() {
        let mut palm = spawn(TileKind::Palm);
        palm.update(1.0);
        assert_eq!(palm.object.bounds(), (100.0, 100.0, 80.0, 120.0));
    }

    #[test]
    fn test_coin_bob_stays_in_range() {
        let mut coin = spawn(TileKind::Coin);
        let dt = 1.0 / 60.0;
        let mut saw_down = false;
        for _ in 0..600 {
            coin.update(dt);
            let EntityKind::Coin(bob) = &coin.kind else {
                panic!("expected coin");
            };
            // One step of overshoot past each bound at most
            assert!(bob.travel >= COIN_BOB_UPPER - COIN_BOB_SPEED * dt - 1e-2);
            assert!(bob.travel <= COIN_BOB_LOWER + COIN_BOB_SPEED * dt + 1e-2);
            assert!((coin.object.pos.y - 100.0 - bob.travel).abs() < 0.05);
            saw_down |= bob.direction == Vertical::Down;
        }
        assert!(saw_down);
    }

    #[test]
    fn test_coin_starts_up_exit_starts_down() {
        let mut coin = spawn(TileKind::Coin);
        let mut exit = spawn(TileKind::Exit);
        coin.update(0.1);
        exit.update(0.1);
        assert!(coin.object.pos.y < 100.0);
        assert!(exit.object.pos.y > 100.0);
    }

    #[test]
    fn test_bob_ignores_world_scroll() {
        let mut exit = spawn(TileKind::Exit);
        exit.object.move_relative(-300.0, 0.0);
        exit.update(0.1);
        if let EntityKind::Exit(bob) = &exit.kind {
            assert!((bob.travel - 4.0).abs() < 1e-4);
        } else {
            panic!("expected exit");
        }
    }

    #[test]
    fn test_jerk_patrol_reverses() {
        let mut patrol = Patrol::jerk();
        let dt = 0.1;
        let mut min_travel: f32 = 0.0;
        let mut max_travel: f32 = 0.0;
        for _ in 0..200 {
            patrol.step(dt);
            min_travel = min_travel.min(patrol.travel);
            max_travel = max_travel.max(patrol.travel);
        }
        let slack = JERK_SPEED * dt + 1e-3;
        assert!(min_travel <= -JERK_REACH && min_travel >= -JERK_REACH - slack);
        assert!(max_travel >= JERK_REACH && max_travel <= JERK_REACH + slack);
    }

    #[test]
    fn test_jerk_turns_at_left_bound_in_same_frame() {
        let mut patrol = Patrol::jerk();
        patrol.travel = -JERK_REACH;
        let dx = patrol.step(1.0);
        assert_eq!(patrol.direction, Horizontal::Right);
        assert_eq!(dx, JERK_SPEED);
    }

    #[test]
    fn test_jerk_moves_with_patrol() {
        let mut jerk = spawn(TileKind::Jerk);
        jerk.update(0.5);
        assert_eq!(jerk.object.pos.x, 100.0 - JERK_SPEED * 0.5);
        assert_eq!(jerk.object.hitbox().map(|hb| hb.center.x), Some(jerk.object.pos.x));
    }
}
