//! Tests for cursor-based event delivery

#[cfg(test)]
mod tests {
    use towergrid::spatial::{GridPoint, GridSize};
    use towergrid::world::GridObjectId;
    use towergrid::world::events::{EventCursor, GridEvent, GridEventLog};

    fn placed(raw: u32) -> GridEvent {
        GridEvent::ObjectPlaced {
            id: GridObjectId::new(raw),
        }
    }

    // Tests reading from a cursor returns later events in order
    #[test]
    fn test_read_from_cursor() {
        let mut log = GridEventLog::new(8);
        log.push(placed(0));
        let cursor = log.current_cursor();
        log.push(placed(1));
        log.push(placed(2));

        let (events, next) = log.read_from(cursor);
        let sequences: Vec<u64> = events.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![1, 2]);
        assert_eq!(next, EventCursor(3));
        assert_eq!(log.total_events(), 3);
    }

    // Tests subscribers only see events pushed after subscribing
    // Verified by starting new subscribers at cursor zero
    #[test]
    fn test_subscribe_starts_at_end() {
        let mut log = GridEventLog::new(8);
        log.push(placed(0));
        let subscription = log.subscribe();
        log.push(placed(1));

        let events = log.drain(subscription).unwrap_or_default();
        assert_eq!(events.len(), 1);
        assert_eq!(events.first().map(|e| e.event), Some(placed(1)));

        // Drained events are not delivered twice
        assert_eq!(log.drain(subscription).map(|e| e.len()), Some(0));
    }

    // Tests unsubscribed handles stop receiving
    #[test]
    fn test_unsubscribe() {
        let mut log = GridEventLog::new(8);
        let subscription = log.subscribe();
        assert!(log.is_subscribed(subscription));

        assert!(log.unsubscribe(subscription));
        assert!(!log.unsubscribe(subscription));
        assert!(!log.is_subscribed(subscription));

        log.push(placed(0));
        assert!(log.drain(subscription).is_none());
    }

    // Tests lagging readers lose the oldest events but still see the newest
    // Verified by reading stale slots after wrap-around
    #[test]
    fn test_overflow_drops_oldest() {
        let mut log = GridEventLog::new(2);
        let subscription = log.subscribe();
        for raw in 0..5 {
            log.push(placed(raw));
        }

        let events = log.drain(subscription).unwrap_or_default();
        let sequences: Vec<u64> = events.iter().map(|e| e.sequence).collect();
        assert_eq!(sequences, vec![3, 4]);
    }

    // Tests object_id for each variant
    #[test]
    fn test_event_object_id() {
        let id = GridObjectId::new(9);
        let resized = GridEvent::Resized {
            size: GridSize::new(4, 4),
            copy_existing: true,
        };
        let moved = GridEvent::ObjectBoundsChanged {
            id,
            previous_position: GridPoint::ORIGIN,
            previous_size: GridSize::SINGLE_CELL,
        };
        let removed = GridEvent::ObjectRemoved {
            id,
            position: GridPoint::ORIGIN,
            size: GridSize::SINGLE_CELL,
        };

        assert_eq!(resized.object_id(), None);
        assert_eq!(moved.object_id(), Some(id));
        assert_eq!(removed.object_id(), Some(id));
        assert_eq!(placed(9).object_id(), Some(id));
    }
}
