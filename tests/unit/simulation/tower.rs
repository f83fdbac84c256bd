//! Tests for tower ownership, configuration validation and tick scheduling

#[cfg(test)]
mod tests {
    use std::time::Duration;
    use towergrid::spatial::{GridPoint, GridSize};
    use towergrid::world::object::{RoomCategory, TransportKind};
    use towergrid::world::{GridObject, GridObjectId, ObjectKind, PlacementState};
    use towergrid::{SimulationConfig, Tower};

    const TICK: Duration = Duration::from_millis(100);

    fn tower() -> Tower {
        Tower::new(&SimulationConfig {
            grid_size: GridSize::new(10, 10),
            ..SimulationConfig::default()
        })
        .expect("Failed to create tower")
    }

    fn place(tower: &mut Tower, kind: ObjectKind, x: i32, y: i32) -> GridObjectId {
        tower.grid_mut().add_object(
            GridObject::new(kind, GridPoint::new(x, y), GridSize::SINGLE_CELL)
                .with_placement_state(PlacementState::Placed),
        )
    }

    // Tests configuration validation
    // Verified by skipping the pass frequency checks
    #[test]
    fn test_config_validation() {
        assert!(SimulationConfig::default().validate().is_ok());

        let narrow = SimulationConfig {
            grid_size: GridSize::new(0, 10),
            ..SimulationConfig::default()
        };
        assert!(narrow.validate().is_err());
        assert!(Tower::new(&narrow).is_err());

        let silent = SimulationConfig {
            noise_frequency: Duration::ZERO,
            ..SimulationConfig::default()
        };
        assert!(silent.validate().is_err());

        let restless = SimulationConfig {
            transport_frequency: Duration::ZERO,
            ..SimulationConfig::default()
        };
        assert!(restless.validate().is_err());
        assert!(Tower::new(&restless).is_err());
    }

    // Tests a mutation makes the next tick recompute connectivity
    #[test]
    fn test_tick_after_mutation() {
        let mut tower = tower();
        place(&mut tower, ObjectKind::Transport(TransportKind::Elevator), 5, 5);
        let room = place(&mut tower, ObjectKind::Room(RoomCategory::Office), 6, 5);

        let summary = tower.tick(TICK);

        assert_eq!(summary.transport.map(|r| r.connected_rooms), Some(1));
        assert!(
            tower
                .grid()
                .object(room)
                .is_some_and(GridObject::is_connected_to_transport)
        );
        assert_eq!(tower.ticks(), 1);
        assert_eq!(tower.transport().last_report(), summary.transport);

        assert!(tower.tick(TICK).transport.is_none());
    }

    // Tests noise is recomputed on its own interval
    #[test]
    fn test_noise_interval() {
        let mut tower = tower();
        place(&mut tower, ObjectKind::Room(RoomCategory::Commercial), 2, 2);

        let frequency = SimulationConfig::default().noise_frequency;
        assert!(!tower.tick(frequency / 2).noise_updated);
        assert!(tower.tick(frequency / 2).noise_updated);
        assert!(
            tower
                .grid()
                .position_cache()
                .position_at(2, 2)
                .is_some_and(|p| p.noise_level() > 0.0)
        );
    }

    // Tests a paused tower ignores mutations until unpaused
    #[test]
    fn test_pause_transport() {
        let mut tower = tower();
        tower.pause_transport();
        place(&mut tower, ObjectKind::Transport(TransportKind::Stair), 5, 5);
        assert!(tower.tick(TICK).transport.is_none());

        tower.unpause_transport();
        place(&mut tower, ObjectKind::Room(RoomCategory::Office), 4, 5);
        assert!(tower.tick(TICK).transport.is_some());
    }

    // Tests recompute runs every pass immediately
    #[test]
    fn test_recompute() {
        let mut tower = tower();
        place(&mut tower, ObjectKind::Room(RoomCategory::Lobby), 0, 0);
        let report = tower.recompute();
        assert_eq!(report.connected_rooms, 1);
        assert!(
            tower
                .grid()
                .position_cache()
                .position_at(0, 0)
                .is_some_and(|p| p.noise_level() > 0.0)
        );
    }
}
