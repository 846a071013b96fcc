// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use seatmap_event_state::drag::DragState;
use seatmap_event_state::hover::{Hover, HoverEvent, HoverState};
use seatmap_selection::Selection;
use seatmap_venue::{Layout, SeatId, SeatPlacement, SeatStatus, Venue, VenueError};
use seatmap_view::Viewport;
use tracing::{debug, info, trace, warn};

use crate::config::SeatMapConfig;
use crate::event::{Changes, SeatMapEvent};
use crate::submission::{Submission, SubmissionRequest, SubmissionStatus, SubmitError, SubmitSeats};

/// Result of [`SeatMap::select`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The seat was added to the selection.
    Selected,
    /// The seat was already selected; nothing changed.
    AlreadySelected,
    /// The seat is reserved and cannot be selected.
    Unavailable,
    /// No seat with that id exists in the venue.
    UnknownSeat,
    /// Venue data has not been loaded yet.
    NotLoaded,
}

impl SelectOutcome {
    /// Returns `true` if the selection changed.
    #[must_use]
    pub fn is_selected(self) -> bool {
        self == Self::Selected
    }
}

/// How a seat should be drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeatState {
    /// Free to pick.
    Available,
    /// In the current selection.
    Selected,
    /// Taken; not pickable.
    Reserved,
}

#[derive(Debug)]
enum VenueState {
    Loading,
    Ready { venue: Venue, layout: Layout },
}

/// Interactive seat map state.
///
/// `SeatMap` owns everything between the venue data and the renderer:
/// the layout (computed once per venue), the [`Viewport`], the selected
/// seats, the hovered seat, and the current pan gesture. Hosts feed it
/// [`SeatMapEvent`]s one at a time and redraw according to the returned
/// [`Changes`].
///
/// Until a venue is loaded the map is in its loading state: nothing is laid
/// out, selection requests are refused with [`SelectOutcome::NotLoaded`],
/// and the viewport keeps waiting for content.
#[derive(Debug)]
pub struct SeatMap {
    config: SeatMapConfig,
    venue: VenueState,
    viewport: Viewport,
    selection: Selection<SeatId>,
    hover: HoverState<SeatId>,
    drag: DragState,
    suppress_click: bool,
}

impl Default for SeatMap {
    fn default() -> Self {
        Self::new(SeatMapConfig::default())
    }
}

impl SeatMap {
    /// Creates an empty, loading seat map.
    #[must_use]
    pub fn new(config: SeatMapConfig) -> Self {
        Self {
            viewport: Viewport::new().with_zoom_toggle(config.zoom_toggle),
            drag: DragState::with_slop(config.drag_slop),
            config,
            venue: VenueState::Loading,
            selection: Selection::new(),
            hover: HoverState::new(),
            suppress_click: false,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &SeatMapConfig {
        &self.config
    }

    /// Returns `true` until venue data has been loaded.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self.venue, VenueState::Loading)
    }

    /// Returns the loaded venue.
    #[must_use]
    pub fn venue(&self) -> Option<&Venue> {
        match &self.venue {
            VenueState::Ready { venue, .. } => Some(venue),
            VenueState::Loading => None,
        }
    }

    /// Returns the layout of the loaded venue.
    #[must_use]
    pub fn layout(&self) -> Option<&Layout> {
        match &self.venue {
            VenueState::Ready { layout, .. } => Some(layout),
            VenueState::Loading => None,
        }
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Installs venue data and lays it out.
    ///
    /// The layout is computed here and nowhere else. Seats the document marks
    /// as `selected` join the selection; previously selected ids that no
    /// longer name a selectable seat are dropped. The hover is cleared.
    pub fn load_venue(&mut self, venue: Venue) -> Changes {
        let layout = Layout::compute(&venue, &self.config.metrics);
        info!(
            sections = venue.sections().len(),
            seats = venue.seat_count(),
            content_width = layout.content_width(),
            "venue loaded"
        );

        let mut changes = Changes::LAYOUT;
        let before = self.selection.revision();
        self.selection
            .retain(|id| venue.status(id).is_some_and(SeatStatus::is_selectable));
        self.selection.extend_with(
            layout
                .seats()
                .iter()
                .filter(|s| s.status == SeatStatus::Selected)
                .map(|s| s.id.clone()),
        );
        if self.selection.revision() != before {
            changes |= Changes::SELECTION;
        }
        if self.hover.clear().is_some() {
            changes |= Changes::HOVER;
        }

        let content_width = layout.content_width();
        self.venue = VenueState::Ready { venue, layout };
        if self.viewport.set_content_width(content_width) {
            changes |= Changes::VIEWPORT;
        }
        changes
    }

    /// Decodes a venue document and loads it.
    ///
    /// On error the map keeps whatever it had before.
    pub fn load_json(&mut self, json: &str) -> Result<Changes, VenueError> {
        let venue = Venue::from_json(json).inspect_err(|err| {
            warn!(%err, "rejected venue document");
        })?;
        Ok(self.load_venue(venue))
    }

    /// Records a new container size.
    pub fn resize(&mut self, size: Size) -> Changes {
        if !self.viewport.set_container_size(size) {
            return Changes::empty();
        }
        trace!(
            width = size.width,
            height = size.height,
            scale = self.viewport.scale(),
            "container resized"
        );
        Changes::VIEWPORT
    }

    /// Handles a double click or double tap.
    pub fn toggle_zoom(&mut self) -> Changes {
        if self.viewport.toggle_zoom() {
            trace!(level = ?self.viewport.level(), scale = self.viewport.scale(), "zoom toggled");
            Changes::VIEWPORT
        } else {
            debug!("zoom toggle ignored at full zoom");
            Changes::empty()
        }
    }

    /// Adds a seat to the selection.
    ///
    /// Reserved, unknown and already-selected seats are refused without
    /// error; the outcome says why.
    pub fn select(&mut self, id: impl Into<SeatId>) -> SelectOutcome {
        let id = id.into();
        let Some(venue) = self.venue() else {
            debug!(seat = %id, "select before venue load");
            return SelectOutcome::NotLoaded;
        };
        let outcome = match venue.status(&id) {
            None => SelectOutcome::UnknownSeat,
            Some(status) if !status.is_selectable() => SelectOutcome::Unavailable,
            Some(_) if self.selection.contains(&id) => SelectOutcome::AlreadySelected,
            Some(_) => {
                self.selection.insert(id.clone());
                SelectOutcome::Selected
            }
        };
        if outcome.is_selected() {
            debug!(seat = %id, selected = self.selection.len(), "seat selected");
        } else {
            debug!(seat = %id, ?outcome, "select refused");
        }
        outcome
    }

    /// Removes a seat from the selection.
    ///
    /// Returns `false` if it was not selected.
    pub fn deselect(&mut self, id: &SeatId) -> bool {
        let removed = self.selection.remove(id);
        if removed {
            debug!(seat = %id, selected = self.selection.len(), "seat deselected");
        }
        removed
    }

    /// Selects an unselected seat or deselects a selected one.
    pub fn toggle_seat(&mut self, id: impl Into<SeatId>) -> Changes {
        let id = id.into();
        if self.deselect(&id) || self.select(id).is_selected() {
            Changes::SELECTION
        } else {
            Changes::empty()
        }
    }

    /// Clears the selection.
    pub fn reset_selection(&mut self) -> Changes {
        if self.selection.is_empty() {
            return Changes::empty();
        }
        self.selection.clear();
        Changes::SELECTION
    }

    /// Returns the selection.
    #[must_use]
    pub fn selection(&self) -> &Selection<SeatId> {
        &self.selection
    }

    /// Returns the selected seat ids in the order they were picked.
    #[must_use]
    pub fn selected_ids(&self) -> &[SeatId] {
        self.selection.items()
    }

    /// Returns how the seat with `id` should be drawn.
    #[must_use]
    pub fn seat_state(&self, id: &SeatId) -> Option<SeatState> {
        let status = self.venue()?.status(id)?;
        Some(if status == SeatStatus::Reserved {
            SeatState::Reserved
        } else if self.selection.contains(id) {
            SeatState::Selected
        } else {
            SeatState::Available
        })
    }

    /// Returns the hovered seat and its popup anchor.
    #[must_use]
    pub fn hover(&self) -> Option<&Hover<SeatId>> {
        self.hover.current()
    }

    /// Hovers a seat, replacing any previous hover.
    ///
    /// Ignored while loading, for unknown seats, and while panning.
    pub fn set_hover(&mut self, id: impl Into<SeatId>, position: Point) -> Changes {
        let id = id.into();
        if self.drag.has_moved() {
            return Changes::empty();
        }
        if self.layout().and_then(|l| l.seat(&id)).is_none() {
            return Changes::empty();
        }
        if self.hover.is_hovered(&id) && self.hover.position() == Some(position) {
            return Changes::empty();
        }
        for event in self.hover.set(id, position) {
            match event {
                HoverEvent::Enter(seat) => trace!(%seat, "hover enter"),
                HoverEvent::Leave(seat) => trace!(%seat, "hover leave"),
            }
        }
        Changes::HOVER
    }

    /// Clears the hover if `id` is the hovered seat.
    pub fn leave_seat(&mut self, id: &SeatId) -> Changes {
        if self.hover.leave(id).is_some() {
            Changes::HOVER
        } else {
            Changes::empty()
        }
    }

    /// Clears the hover.
    pub fn clear_hover(&mut self) -> Changes {
        if self.hover.clear().is_some() {
            Changes::HOVER
        } else {
            Changes::empty()
        }
    }

    /// Returns the seat under a view-space point.
    #[must_use]
    pub fn seat_at(&self, position: Point) -> Option<&SeatPlacement> {
        let world = self.viewport.view_to_world(position);
        self.layout()?.seat_at(world)
    }

    /// Begins a pan gesture.
    pub fn drag_start(&mut self, position: Point) -> Changes {
        self.drag.start(position, self.viewport.offset());
        Changes::empty()
    }

    /// Continues a pan gesture, clamping the content offset.
    pub fn drag_move(&mut self, position: Point) -> Changes {
        let was_moving = self.drag.has_moved();
        let Some(proposed) = self.drag.update(position) else {
            return Changes::empty();
        };
        let mut changes = Changes::empty();
        if !was_moving && self.drag.has_moved() && self.hover.clear().is_some() {
            changes |= Changes::HOVER;
        }
        let before = self.viewport.offset();
        let applied = self.viewport.drag_to(proposed);
        if applied != before {
            changes |= Changes::VIEWPORT;
        }
        changes
    }

    /// Ends a pan gesture.
    ///
    /// If the pointer really moved, the click that follows the release is
    /// swallowed.
    pub fn drag_end(&mut self) -> Changes {
        if self.drag.is_dragging() {
            self.suppress_click = self.drag.end();
        }
        Changes::empty()
    }

    /// Applies one input event.
    pub fn handle_event(&mut self, event: SeatMapEvent) -> Changes {
        let suppress_click = std::mem::take(&mut self.suppress_click);
        match event {
            SeatMapEvent::HoverEnter { seat, position } => self.set_hover(seat, position),
            SeatMapEvent::HoverLeave { seat } => self.leave_seat(&seat),
            SeatMapEvent::PointerMove { position } => match self.seat_at(position) {
                Some(seat) => {
                    let id = seat.id.clone();
                    self.set_hover(id, position)
                }
                None => {
                    if self.drag.has_moved() {
                        Changes::empty()
                    } else {
                        self.clear_hover()
                    }
                }
            },
            SeatMapEvent::Click { seat } => {
                if suppress_click || self.drag.has_moved() {
                    debug!(%seat, "click after drag ignored");
                    Changes::empty()
                } else {
                    self.toggle_seat(seat)
                }
            }
            SeatMapEvent::Tap { position } => {
                if suppress_click || self.drag.has_moved() {
                    return Changes::empty();
                }
                match self.seat_at(position) {
                    Some(seat) => {
                        let id = seat.id.clone();
                        self.toggle_seat(id)
                    }
                    None => Changes::empty(),
                }
            }
            SeatMapEvent::DoubleClick => self.toggle_zoom(),
            SeatMapEvent::DragStart { position } => self.drag_start(position),
            SeatMapEvent::DragMove { position } => self.drag_move(position),
            SeatMapEvent::DragEnd => self.drag_end(),
            SeatMapEvent::Resize { size } => self.resize(size),
            SeatMapEvent::PopupClose => self.clear_hover(),
        }
    }

    /// Returns the current submission payload.
    #[must_use]
    pub fn submission(&self) -> Submission {
        if self.selection.is_empty() {
            Submission::Empty
        } else {
            Submission::Ready(SubmissionRequest {
                seats: self.selection.items().to_vec(),
            })
        }
    }

    /// Sends the selected seats through `transport`.
    ///
    /// The selection is left untouched either way; hosts decide whether to
    /// reset it after a successful booking.
    pub fn submit<S: SubmitSeats>(
        &self,
        transport: &mut S,
    ) -> Result<SubmissionStatus<S::Response>, SubmitError> {
        let Submission::Ready(request) = self.submission() else {
            debug!("submission skipped, nothing selected");
            return Ok(SubmissionStatus::NothingSelected);
        };
        let seats = request.seats.len();
        info!(seats, query = %request.query_value(), "submitting seats");
        match transport.submit(&request) {
            Ok(response) => Ok(SubmissionStatus::Submitted { seats, response }),
            Err(err) => {
                warn!(%err, seats, "seat submission failed");
                Err(SubmitError::new(seats, err))
            }
        }
    }
}
