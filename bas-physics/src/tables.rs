//! Query tables over a collection of entities.
//!
//! A query table asks the same question of every entity and answers with one `bool` per entity, in collection order. Gameplay code composes these instead of reaching into the physics state directly.

use crate::entity::{EntityId, PhysicsEntity};

/// Builds a query table over each "unit" of a collection.
pub trait QueryTable<QueryOver> {
    fn check_predicate(&self, predicate: impl Fn(&QueryOver) -> bool) -> Vec<bool>;
}

impl QueryTable<PhysicsEntity> for [PhysicsEntity] {
    fn check_predicate(&self, predicate: impl Fn(&PhysicsEntity) -> bool) -> Vec<bool> {
        self.iter().map(predicate).collect()
    }
}

/// Ids of entities that ended the last pass standing on something.
pub fn grounded(entities: &[PhysicsEntity]) -> Vec<EntityId> {
    entities
        .check_predicate(PhysicsEntity::is_colliding_bottom)
        .into_iter()
        .zip(entities.iter())
        .filter_map(|(hit, ent)| hit.then(|| ent.id()))
        .collect()
}
