//! Transit connectivity solver
//!
//! Every pass is a full recompute. Cells touched by an elevator or stair are
//! connected, and connectivity spreads left and right along the floor through
//! contiguous occupied cells until an empty cell stops it. Rooms found on
//! those runs are connected; lobbies always are.

use std::time::Duration;
use tracing::{debug, trace};

use crate::algorithm::action::ActionTimer;
use crate::algorithm::bitset::ObjectBitset;
use crate::algorithm::transit_distance::update_transit_distances;
use crate::spatial::cache::GridPositionCache;
use crate::spatial::point::GridPoint;
use crate::world::events::SubscriptionId;
use crate::world::game_grid::GameGrid;
use crate::world::object::{GridObjectId, ObjectKind, PlacementState};

/// Outcome of one connectivity pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportReport {
    /// Transport objects that contributed touch points
    pub transports_scanned: usize,
    /// Cells flagged as connected
    pub connected_cells: usize,
    /// Rooms flagged as connected, lobbies included
    pub connected_rooms: usize,
    /// Rooms left disconnected
    pub disconnected_rooms: usize,
}

/// Recomputes which cells and rooms are reachable from vertical transport
///
/// The calculator subscribes to the grid's event log. Any event seen while
/// running makes the next [`update`](Self::update) recompute; a burst of
/// events within one tick still yields a single pass.
#[derive(Debug, Clone)]
pub struct TransportCalculator {
    timer: ActionTimer,
    subscription: Option<SubscriptionId>,
    reached: ObjectBitset,
    last_report: Option<TransportReport>,
}

impl TransportCalculator {
    /// Create a calculator running every `frequency` and subscribe it to `grid`
    pub fn new(grid: &mut GameGrid, frequency: Duration) -> Self {
        Self {
            timer: ActionTimer::new(frequency),
            subscription: Some(grid.events_mut().subscribe()),
            reached: ObjectBitset::with_capacity(grid.object_count()),
            last_report: None,
        }
    }

    /// Check if scheduled recomputation is halted
    pub const fn is_paused(&self) -> bool {
        self.timer.is_paused()
    }

    /// Check if the calculator currently listens to grid events
    pub const fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Result of the most recent pass
    pub const fn last_report(&self) -> Option<TransportReport> {
        self.last_report
    }

    /// Stop reacting to grid events and halt scheduled passes
    pub fn pause(&mut self, grid: &mut GameGrid) {
        self.timer.pause();
        if let Some(subscription) = self.subscription.take() {
            grid.events_mut().unsubscribe(subscription);
        }
        debug!("transport calculator paused");
    }

    /// Resume scheduled passes and listen to events from now on
    ///
    /// Events emitted while paused are not replayed.
    pub fn unpause(&mut self, grid: &mut GameGrid) {
        self.timer.unpause();
        if self.subscription.is_none() {
            self.subscription = Some(grid.events_mut().subscribe());
        }
        debug!("transport calculator unpaused");
    }

    /// Advance simulated time and run a pass when one is due
    ///
    /// Returns the report of the pass run during this call, if any.
    pub fn update(&mut self, grid: &mut GameGrid, delta: Duration) -> Option<TransportReport> {
        if self.is_paused() {
            return None;
        }

        let pending = self
            .subscription
            .and_then(|subscription| grid.events_mut().drain(subscription))
            .map_or(0, |events| events.len());
        if pending > 0 {
            trace!(pending, "grid changed, connectivity pass due");
            self.timer.reset_interval();
        }

        self.timer.advance(delta).then(|| self.run(grid))
    }

    /// Recompute connectivity for the whole grid
    pub fn run(&mut self, grid: &mut GameGrid) -> TransportReport {
        grid.position_cache_mut().clear_transit_connections();

        let rooms: Vec<(GridObjectId, bool)> = grid
            .rooms()
            .map(|(id, room)| {
                let lobby = matches!(room.kind(), ObjectKind::Room(category) if category.is_lobby());
                (id, lobby)
            })
            .collect();

        let (columns, rows) = grid.position_cache().dimensions();
        let touch_points: Vec<Vec<GridPoint>> = grid
            .transports()
            .filter(|(_, transport)| transport.placement_state() != PlacementState::Invalid)
            .map(|(_, transport)| {
                transport
                    .footprint()
                    .clipped_points(columns, rows)
                    .collect()
            })
            .collect();

        self.reached.clear();
        let cache = grid.position_cache_mut();
        for point in touch_points.iter().flatten() {
            cache.connect_to_transit(*point);
            scan_for_rooms(cache, *point, -1, &mut self.reached);
            scan_for_rooms(cache, *point, 1, &mut self.reached);
        }

        update_transit_distances(cache);
        cache.normalize_transit_distances();
        let connected_cells = cache.connected_cell_count();

        let mut connected_rooms = 0;
        for &(id, lobby) in &rooms {
            let connected = lobby || self.reached.contains(id);
            connected_rooms += usize::from(connected);
            grid.set_room_connected(id, connected);
        }

        let report = TransportReport {
            transports_scanned: touch_points.len(),
            connected_cells,
            connected_rooms,
            disconnected_rooms: rooms.len() - connected_rooms,
        };
        debug!(?report, "connectivity pass complete");
        self.last_report = Some(report);
        report
    }
}

/// Walk one direction along the floor of `start`, connecting occupied cells
///
/// Starts at `start` itself and stops at the first empty or out-of-grid
/// cell. Every occupant met is recorded in `reached`.
pub fn scan_for_rooms(
    cache: &mut GridPositionCache,
    start: GridPoint,
    step_x: i32,
    reached: &mut ObjectBitset,
) {
    let mut point = start;
    while cache.position(point).is_some_and(|position| !position.is_empty()) {
        if let Some(position) = cache.connect_to_transit(point) {
            for &id in position.objects() {
                reached.insert(id);
            }
        }
        point = point.step_x(step_x);
    }
}
