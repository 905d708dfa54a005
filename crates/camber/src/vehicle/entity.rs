use crate::memory::EntityBase;

/// Inbound collaborator interface: the scripting host's entity model.
///
/// Implementations hand out the entity's native record address for the
/// current call only. Callers must re-derive it on every call; the game may
/// destroy or reallocate the entity the moment control returns to the host,
/// so a cached address is stale by definition.
pub trait VehicleEntity {
    /// Base address of the entity's native record, `None` once destroyed.
    fn memory_address(&self) -> Option<EntityBase>;

    /// Whether the entity still exists in the game world.
    fn exists(&self) -> bool;
}
