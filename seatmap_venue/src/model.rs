// Copyright 2025 the Seatmap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Venue data: sections, rows and seats as decoded from the venue document.

use std::collections::HashMap;
use std::fmt;
use std::io::Read;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

/// Errors produced while decoding or validating a venue.
#[derive(Debug, Error)]
pub enum VenueError {
    /// The document is not valid JSON or does not have the expected shape.
    #[error("malformed venue document: {0}")]
    Json(#[from] serde_json::Error),
    /// Two seats share an identifier.
    #[error("seat id `{id}` is used in section {first} and again in section {second}")]
    DuplicateSeat {
        /// The repeated identifier.
        id: SeatId,
        /// Index of the section holding the first occurrence.
        first: usize,
        /// Index of the section holding the repeat.
        second: usize,
    },
}

/// Venue-wide unique seat identifier.
///
/// Documents may spell ids as strings or integers; integers are kept in
/// their decimal form so `17` and `"17"` name the same seat.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct SeatId(String);

impl SeatId {
    /// Creates an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SeatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SeatId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SeatId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<u64> for SeatId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for SeatId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Signed(i64),
            Unsigned(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => Self(s),
            Raw::Signed(n) => Self(n.to_string()),
            Raw::Unsigned(n) => Self(n.to_string()),
        })
    }
}

/// Booking status of a seat as delivered by the venue document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeatStatus {
    /// Free to pick.
    #[default]
    Available,
    /// Already marked as chosen by the data source. Still pickable.
    Selected,
    /// Taken by someone else; never pickable.
    #[serde(alias = "booked", alias = "unavailable")]
    Reserved,
}

impl SeatStatus {
    /// Returns `true` if a seat with this status may enter a selection.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        matches!(self, Self::Available | Self::Selected)
    }
}

/// A single seat.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    /// Venue-wide unique id.
    #[serde(alias = "name")]
    pub id: SeatId,
    /// Booking status; missing means available.
    #[serde(default)]
    pub status: SeatStatus,
}

impl Seat {
    /// Creates a seat.
    pub fn new(id: impl Into<SeatId>, status: SeatStatus) -> Self {
        Self {
            id: id.into(),
            status,
        }
    }
}

/// One row of seat slots.
///
/// `offset` leading slots are empty. After that, each entry of `seats`
/// occupies one slot; `None` is an aisle gap.
///
/// In JSON a row is either a bare array (`[seat, null, seat]`) or an object
/// (`{"offset": 2, "seats": [...]}`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawRow")]
pub struct Row {
    /// Number of empty slots before the first entry.
    pub offset: u32,
    /// Seats and gaps, left to right.
    pub seats: Vec<Option<Seat>>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawRow {
    Bare(Vec<Option<Seat>>),
    Full {
        #[serde(default)]
        offset: u32,
        #[serde(default)]
        seats: Vec<Option<Seat>>,
    },
}

impl From<RawRow> for Row {
    fn from(raw: RawRow) -> Self {
        match raw {
            RawRow::Bare(seats) => Self { offset: 0, seats },
            RawRow::Full { offset, seats } => Self { offset, seats },
        }
    }
}

impl Row {
    /// Creates a row with no leading offset.
    #[must_use]
    pub fn new(seats: Vec<Option<Seat>>) -> Self {
        Self { offset: 0, seats }
    }

    /// Returns the number of slots this row occupies, gaps included.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.offset as usize + self.seats.len()
    }

    /// Iterates `(column, seat)` for every real seat in the row.
    pub fn placed_seats(&self) -> impl Iterator<Item = (usize, &Seat)> + '_ {
        let offset = self.offset as usize;
        self.seats
            .iter()
            .enumerate()
            .filter_map(move |(i, seat)| seat.as_ref().map(|s| (offset + i, s)))
    }
}

/// A named block of seat rows.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Display name.
    #[serde(alias = "id")]
    pub name: String,
    /// Rows from front to back.
    #[serde(default)]
    pub rows: Vec<Row>,
}

impl Section {
    /// Creates a section.
    pub fn new(name: impl Into<String>, rows: Vec<Row>) -> Self {
        Self {
            name: name.into(),
            rows,
        }
    }

    /// Returns the widest row's slot count; `0` for a section without rows.
    #[must_use]
    pub fn max_slots(&self) -> usize {
        self.rows.iter().map(Row::slot_count).max().unwrap_or(0)
    }

    /// Iterates every seat in the section.
    pub fn seats(&self) -> impl Iterator<Item = &Seat> + '_ {
        self.rows.iter().flat_map(|row| row.seats.iter().flatten())
    }
}

/// Where a seat lives inside a [`Venue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SeatRef {
    /// Section index in declared order.
    pub section: usize,
    /// Row index within the section.
    pub row: usize,
    /// Slot column within the row, offset and gaps included.
    pub column: usize,
}

/// An immutable venue snapshot.
///
/// Section order is significant: it is the top-to-bottom drawing order.
/// Seat ids are validated to be unique across all sections.
#[derive(Clone, Debug, Default)]
pub struct Venue {
    sections: Vec<Section>,
    index: HashMap<SeatId, SeatRef>,
}

#[derive(Deserialize)]
struct VenueDocument {
    seats: VenueData,
}

#[derive(Deserialize)]
struct VenueData {
    #[serde(default)]
    sections: Vec<Section>,
}

impl Venue {
    /// Builds a venue from sections, checking seat id uniqueness.
    pub fn new(sections: Vec<Section>) -> Result<Self, VenueError> {
        let mut index: HashMap<SeatId, SeatRef> = HashMap::new();
        for (section_idx, section) in sections.iter().enumerate() {
            for (row_idx, row) in section.rows.iter().enumerate() {
                for (column, seat) in row.placed_seats() {
                    let seat_ref = SeatRef {
                        section: section_idx,
                        row: row_idx,
                        column,
                    };
                    if let Some(prev) = index.insert(seat.id.clone(), seat_ref) {
                        return Err(VenueError::DuplicateSeat {
                            id: seat.id.clone(),
                            first: prev.section,
                            second: section_idx,
                        });
                    }
                }
            }
        }
        Ok(Self { sections, index })
    }

    /// Decodes a `{"seats": {"sections": [...]}}` document.
    pub fn from_json(json: &str) -> Result<Self, VenueError> {
        let doc: VenueDocument = serde_json::from_str(json)?;
        Self::new(doc.seats.sections)
    }

    /// Decodes a venue document from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, VenueError> {
        let doc: VenueDocument = serde_json::from_reader(reader)?;
        Self::new(doc.seats.sections)
    }

    /// Returns the sections in declared order.
    #[must_use]
    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    /// Returns the total number of seats.
    #[must_use]
    pub fn seat_count(&self) -> usize {
        self.index.len()
    }

    /// Returns where the seat with `id` lives.
    #[must_use]
    pub fn locate(&self, id: &SeatId) -> Option<SeatRef> {
        self.index.get(id).copied()
    }

    /// Returns the seat with `id`.
    #[must_use]
    pub fn seat(&self, id: &SeatId) -> Option<&Seat> {
        let at = self.locate(id)?;
        let row = self.sections.get(at.section)?.rows.get(at.row)?;
        let idx = at.column.checked_sub(row.offset as usize)?;
        row.seats.get(idx)?.as_ref()
    }

    /// Returns the status of the seat with `id`.
    #[must_use]
    pub fn status(&self, id: &SeatId) -> Option<SeatStatus> {
        self.seat(id).map(|s| s.status)
    }
}

impl FromStr for Venue {
    type Err = VenueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_json(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_accept_strings_and_integers() {
        let seats: Vec<Seat> =
            serde_json::from_str(r#"[{"id": "A1"}, {"id": 17, "status": "booked"}]"#).unwrap();
        assert_eq!(seats[0].id, SeatId::new("A1"));
        assert_eq!(seats[0].status, SeatStatus::Available);
        assert_eq!(seats[1].id, SeatId::from(17_u64));
        assert_eq!(seats[1].status, SeatStatus::Reserved);
    }

    #[test]
    fn rows_accept_bare_and_object_forms() {
        let rows: Vec<Row> = serde_json::from_str(
            r#"[[{"id": "a"}, null, {"id": "b"}], {"offset": 2, "seats": [{"id": "c"}]}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].offset, 0);
        assert_eq!(rows[0].slot_count(), 3);
        assert_eq!(rows[1].offset, 2);
        assert_eq!(rows[1].slot_count(), 3);

        let columns: Vec<usize> = rows[0].placed_seats().map(|(c, _)| c).collect();
        assert_eq!(columns, [0, 2]);
        let columns: Vec<usize> = rows[1].placed_seats().map(|(c, _)| c).collect();
        assert_eq!(columns, [2]);
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = Venue::new(vec![
            Section::new("left", vec![Row::new(vec![Some(Seat::new("X", SeatStatus::Available))])]),
            Section::new("right", vec![Row::new(vec![Some(Seat::new("X", SeatStatus::Reserved))])]),
        ])
        .unwrap_err();
        assert!(matches!(
            err,
            VenueError::DuplicateSeat { first: 0, second: 1, .. }
        ));
    }

    #[test]
    fn seat_lookup_honours_offsets_and_gaps() {
        let venue = Venue::from_json(
            r#"{"seats": {"sections": [{"name": "floor", "rows": [
                {"offset": 1, "seats": [null, {"id": "F3", "status": "reserved"}]}
            ]}]}}"#,
        )
        .unwrap();
        let id = SeatId::new("F3");
        assert_eq!(
            venue.locate(&id),
            Some(SeatRef {
                section: 0,
                row: 0,
                column: 2
            })
        );
        assert_eq!(venue.status(&id), Some(SeatStatus::Reserved));
        assert_eq!(venue.seat(&SeatId::new("nope")), None);
    }

    #[test]
    fn malformed_documents_are_json_errors() {
        assert!(matches!(
            Venue::from_json(r#"{"sections": []}"#),
            Err(VenueError::Json(_))
        ));
        assert!(matches!("not json".parse::<Venue>(), Err(VenueError::Json(_))));
    }

    #[test]
    fn selectable_statuses() {
        assert!(SeatStatus::Available.is_selectable());
        assert!(SeatStatus::Selected.is_selectable());
        assert!(!SeatStatus::Reserved.is_selectable());
    }
}
