//! Player/world collision scans
//!
//! Both scans only read the world. The tick applies their results
//! afterwards, so removing entities never disturbs an iteration in progress.

use super::entity::{Contact, Entity, EntityId};
use super::object::GameObject;

/// Scan ground tiles in the given order and return the y position to snap
/// the player to for the first one it overlaps. First hit wins, not the
/// closest.
pub fn ground_snap<'a>(
    player: &GameObject,
    ground: impl IntoIterator<Item = &'a Entity>,
    snap_offset: f32,
) -> Option<f32> {
    ground
        .into_iter()
        .find(|tile| player.hit_test(&tile.object))
        .map(|tile| tile.object.pos.y - snap_offset)
}

/// Every entity the player touches that reacts to contact, in spawn order
pub fn player_contacts(player: &GameObject, entities: &[Entity]) -> Vec<(EntityId, Contact)> {
    entities
        .iter()
        .filter_map(|entity| match entity.kind.contact() {
            Contact::Pass => None,
            contact if player.hit_test(&entity.object) => Some((entity.id, contact)),
            _ => None,
        })
        .collect()
}
