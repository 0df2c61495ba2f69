/// Trait for entities identified by a store-assigned integer id
pub trait Identifiable {
    /// Returns the unique identifier of the entity
    fn get_id(&self) -> i64;
}
