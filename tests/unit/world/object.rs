//! Tests for object classification, defaults and footprints

#[cfg(test)]
mod tests {
    use towergrid::spatial::{GridPoint, GridSize};
    use towergrid::world::object::{RoomCategory, TransportKind};
    use towergrid::world::{GridObject, GridObjectId, ObjectKind, PlacementState};

    // Tests new objects start unplaced with their kind's noise
    #[test]
    fn test_new_object_defaults() {
        let kind = ObjectKind::Room(RoomCategory::Commercial);
        let object = GridObject::new(kind, GridPoint::new(1, 2), GridSize::new(3, 1));

        assert_eq!(object.placement_state(), PlacementState::Unplaced);
        assert!(!object.is_placed());
        assert!(!object.is_connected_to_transport());
        assert!((object.noise_level() - kind.default_noise_level()).abs() < f32::EPSILON);
        assert_eq!(object.grid_points_touched().count(), 3);
        assert!(object.footprint().contains(GridPoint::new(3, 2)));
    }

    // Tests noise overrides are clamped to the unit range
    // Verified by storing the raw value
    #[test]
    fn test_with_noise_level_clamps() {
        let object = GridObject::new(ObjectKind::Other, GridPoint::ORIGIN, GridSize::SINGLE_CELL);
        assert!((object.clone().with_noise_level(3.0).noise_level() - 1.0).abs() < f32::EPSILON);
        assert!(object.with_noise_level(-1.0).noise_level().abs() < f32::EPSILON);
    }

    // Tests kind predicates
    #[test]
    fn test_kind_predicates() {
        assert!(ObjectKind::Room(RoomCategory::Lobby).is_room());
        assert!(!ObjectKind::Room(RoomCategory::Office).is_transport());
        assert!(ObjectKind::Transport(TransportKind::Stair).is_transport());
        assert!(!ObjectKind::Other.is_room());
        assert!(RoomCategory::Lobby.is_lobby());
        assert!(!RoomCategory::Residential.is_lobby());
    }

    // Tests louder kinds emit more noise
    #[test]
    fn test_default_noise_ordering() {
        let elevator = ObjectKind::Transport(TransportKind::Elevator).default_noise_level();
        let stair = ObjectKind::Transport(TransportKind::Stair).default_noise_level();
        let commercial = ObjectKind::Room(RoomCategory::Commercial).default_noise_level();
        let residential = ObjectKind::Room(RoomCategory::Residential).default_noise_level();

        assert!(elevator > stair);
        assert!(commercial > residential);
        assert!(ObjectKind::Other.default_noise_level().abs() < f32::EPSILON);
    }

    // Tests handle formatting and indexing
    #[test]
    fn test_handle() {
        let id = GridObjectId::new(12);
        assert_eq!(id.to_string(), "#12");
        assert_eq!(id.index(), 12);
    }
}
