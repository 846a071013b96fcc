// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Size};
use seatmap_venue::SeatId;

/// Input the engine reacts to.
///
/// Positions are in view (container) coordinates.
#[derive(Clone, Debug, PartialEq)]
pub enum SeatMapEvent {
    /// The pointer entered a seat, or a seat was tapped.
    HoverEnter {
        /// The seat.
        seat: SeatId,
        /// Popup anchor.
        position: Point,
    },
    /// The pointer left a seat.
    HoverLeave {
        /// The seat.
        seat: SeatId,
    },
    /// The pointer moved; the seat under it is found by hit testing.
    PointerMove {
        /// Pointer position.
        position: Point,
    },
    /// A seat was clicked or tapped.
    Click {
        /// The seat.
        seat: SeatId,
    },
    /// A click or tap at a position; the seat under it is found by hit testing.
    Tap {
        /// Pointer position.
        position: Point,
    },
    /// Double click or double tap anywhere on the map.
    DoubleClick,
    /// A pointer went down on the map background and may start a pan.
    DragStart {
        /// Pointer position.
        position: Point,
    },
    /// The panning pointer moved.
    DragMove {
        /// Pointer position.
        position: Point,
    },
    /// The panning pointer was released.
    DragEnd,
    /// The container was measured at a new size.
    Resize {
        /// New container size.
        size: Size,
    },
    /// The seat popup was dismissed.
    PopupClose,
}

bitflags::bitflags! {
    /// What an operation changed, so hosts redraw only what they must.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Changes: u8 {
        /// Layout was recomputed.
        const LAYOUT    = 0b0000_0001;
        /// Scale or offset changed.
        const VIEWPORT  = 0b0000_0010;
        /// Selected seats changed.
        const SELECTION = 0b0000_0100;
        /// Hovered seat or popup anchor changed.
        const HOVER     = 0b0000_1000;
    }
}
