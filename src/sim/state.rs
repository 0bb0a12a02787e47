//! Simulation state
//!
//! Owns every live entity. Entities are stored in spawn order and never
//! reordered, so ids are sorted and iteration order is stable.

use serde::{Deserialize, Serialize};

use super::entity::{Entity, EntityId};
use super::object::GameObject;
use super::player::PlayerState;
use crate::level::{Level, LevelError, TileKind};
use crate::tuning::{Tuning, WorldTuning};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeathCause {
    /// Dropped below the bottom of the world
    Fell,
    /// Walked into a hazard while standing on ground
    Hazard,
}

/// Whether the simulation is still running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimStatus {
    Running,
    Dead(DeathCause),
    Won,
}

impl SimStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, SimStatus::Running)
    }
}

/// One run through a level. Discard and rebuild it after death or win.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Simulation {
    /// Frames advanced so far
    pub frame: u64,
    score: f32,
    status: SimStatus,
    entities: Vec<Entity>,
    player: EntityId,
    /// Ground tiles in spawn order
    ground: Vec<EntityId>,
    world: WorldTuning,
    next_id: EntityId,
}

impl Simulation {
    /// Spawn every entity the level describes
    pub fn new(level: &Level, tuning: &Tuning) -> Self {
        let mut sim = Self {
            frame: 0,
            score: 0.0,
            status: SimStatus::Running,
            entities: Vec::with_capacity(level.spawns().len()),
            player: 0,
            ground: Vec::new(),
            world: tuning.world,
            next_id: 1,
        };

        for request in level.spawns() {
            let id = sim.next_entity_id();
            let entity = Entity::spawn(id, request, tuning.player);
            match request.kind {
                TileKind::Player => sim.player = id,
                TileKind::Ground => sim.ground.push(id),
                _ => {}
            }
            sim.entities.push(entity);
        }

        log::debug!(
            "Simulation spawned {} entities ({} ground)",
            sim.entities.len(),
            sim.ground.len()
        );
        sim
    }

    /// Parse a tile grid and spawn it
    pub fn from_source(source: &str, tuning: &Tuning) -> Result<Self, LevelError> {
        let level = Level::parse(source)?;
        Ok(Self::new(&level, tuning))
    }

    fn next_entity_id(&mut self) -> EntityId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn status(&self) -> SimStatus {
        self.status
    }

    pub fn alive(&self) -> bool {
        self.status == SimStatus::Running
    }

    pub fn score(&self) -> f32 {
        self.score
    }

    pub fn world(&self) -> &WorldTuning {
        &self.world
    }

    /// Live entities in spawn order
    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub(crate) fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn ground_ids(&self) -> &[EntityId] {
        &self.ground
    }

    pub fn player_id(&self) -> EntityId {
        self.player
    }

    pub(crate) fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.binary_search_by_key(&id, |e| e.id).ok()
    }

    pub fn entity(&self, id: EntityId) -> Option<&Entity> {
        self.index_of(id).map(|i| &self.entities[i])
    }

    pub fn player_object(&self) -> Option<&GameObject> {
        self.entity(self.player).map(|e| &e.object)
    }

    pub fn player_state(&self) -> Option<&PlayerState> {
        self.entity(self.player).and_then(Entity::player)
    }

    /// Award points
    pub(crate) fn add_score(&mut self, points: f32) {
        self.score += points;
    }

    /// Enter a terminal status. The first terminal status sticks.
    pub(crate) fn finish(&mut self, status: SimStatus) {
        if self.status == SimStatus::Running {
            self.status = status;
        }
    }

    /// Drop the given entities, keeping spawn order for the rest
    pub(crate) fn remove_entities(&mut self, ids: &[EntityId]) {
        if ids.is_empty() {
            return;
        }
        self.entities.retain(|e| !ids.contains(&e.id));
        self.ground.retain(|id| !ids.contains(id));
    }
}
