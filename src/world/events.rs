//! Grid mutation events and cursor-based delivery
//!
//! The [`GameGrid`](crate::world::GameGrid) applies every mutation to its
//! position cache before appending the event here, so a subscriber draining
//! the log always observes a cache that already reflects the events it reads.

use crate::spatial::point::{GridPoint, GridSize};
use crate::world::object::GridObjectId;
use std::collections::BTreeMap;

/// A mutation of the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridEvent {
    /// Grid bounds changed
    Resized {
        /// New bounds
        size: GridSize,
        /// Whether existing cells were preserved
        copy_existing: bool,
    },
    /// An object was added or committed to the grid
    ObjectPlaced {
        /// Handle of the object
        id: GridObjectId,
    },
    /// An object moved or changed size
    ObjectBoundsChanged {
        /// Handle of the object
        id: GridObjectId,
        /// Position before the change
        previous_position: GridPoint,
        /// Size before the change
        previous_size: GridSize,
    },
    /// An object left the grid
    ObjectRemoved {
        /// Handle the object had
        id: GridObjectId,
        /// Position at removal
        position: GridPoint,
        /// Size at removal
        size: GridSize,
    },
}

impl GridEvent {
    /// Handle of the object involved, if any
    pub const fn object_id(&self) -> Option<GridObjectId> {
        match self {
            Self::Resized { .. } => None,
            Self::ObjectPlaced { id }
            | Self::ObjectBoundsChanged { id, .. }
            | Self::ObjectRemoved { id, .. } => Some(*id),
        }
    }
}

/// An event stamped with its position in the log
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SequencedEvent {
    /// Monotonic sequence number
    pub sequence: u64,
    /// The event itself
    pub event: GridEvent,
}

/// Position of a subscriber in the log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct EventCursor(pub u64);

/// Registration handle returned by [`GridEventLog::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u32);

/// Ring buffer of grid events with per-subscriber cursors
///
/// Subscribers that fall more than `capacity` events behind lose the oldest
/// ones; they still learn that something changed because their drain is
/// non-empty.
#[derive(Debug, Clone)]
pub struct GridEventLog {
    buffer: Vec<Option<SequencedEvent>>,
    capacity: usize,
    next_sequence: u64,
    subscribers: BTreeMap<SubscriptionId, EventCursor>,
    next_subscription: u32,
}

impl GridEventLog {
    /// Create an empty log holding at most `capacity` events
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: vec![None; capacity],
            capacity,
            next_sequence: 0,
            subscribers: BTreeMap::new(),
            next_subscription: 0,
        }
    }

    /// Append an event
    pub fn push(&mut self, event: GridEvent) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        let index = (sequence % self.capacity as u64) as usize;
        if let Some(slot) = self.buffer.get_mut(index) {
            *slot = Some(SequencedEvent { sequence, event });
        }
    }

    /// Cursor pointing past the newest event
    pub const fn current_cursor(&self) -> EventCursor {
        EventCursor(self.next_sequence)
    }

    /// Events from `cursor` onwards and the cursor past the last one returned
    pub fn read_from(&self, cursor: EventCursor) -> (Vec<SequencedEvent>, EventCursor) {
        let oldest_available = self.next_sequence.saturating_sub(self.capacity as u64);
        let start = cursor.0.max(oldest_available);

        let events = (start..self.next_sequence)
            .filter_map(|sequence| {
                let index = (sequence % self.capacity as u64) as usize;
                self.buffer
                    .get(index)
                    .copied()
                    .flatten()
                    .filter(|event| event.sequence == sequence)
            })
            .collect();

        (events, self.current_cursor())
    }

    /// Register a subscriber positioned at the end of the log
    ///
    /// Events pushed before subscribing are never delivered to it.
    pub fn subscribe(&mut self) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.subscribers.insert(id, self.current_cursor());
        id
    }

    /// Remove a subscriber, returning whether it was registered
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.remove(&id).is_some()
    }

    /// Check if a subscription is active
    pub fn is_subscribed(&self, id: SubscriptionId) -> bool {
        self.subscribers.contains_key(&id)
    }

    /// Take every event the subscriber has not seen yet
    ///
    /// Returns `None` for unknown or cancelled subscriptions.
    pub fn drain(&mut self, id: SubscriptionId) -> Option<Vec<SequencedEvent>> {
        let cursor = *self.subscribers.get(&id)?;
        let (events, next) = self.read_from(cursor);
        self.subscribers.insert(id, next);
        Some(events)
    }

    /// Number of events pushed since creation
    pub const fn total_events(&self) -> u64 {
        self.next_sequence
    }
}
