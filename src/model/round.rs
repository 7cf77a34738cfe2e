use serde::{Deserialize, Serialize};

use crate::model::hole::{Hole, HoleEdit};

pub const DEFAULT_HOLE_COUNT: u32 = 18;
pub const DEFAULT_PAR: u32 = 4;

/// The full ordered set of holes plus free-text course notes.
///
/// Hole numbers are contiguous from 1 and never change after creation.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Round {
    pub holes: Vec<Hole>,
    pub course_notes: String,
}

impl Round {
    #[must_use]
    pub fn new(hole_count: u32, default_par: u32) -> Self {
        Self {
            holes: (1..=hole_count).map(|n| Hole::new(n, default_par)).collect(),
            course_notes: String::new(),
        }
    }

    #[must_use]
    pub fn hole(&self, number: u32) -> Option<&Hole> {
        self.holes.iter().find(|h| h.number == number)
    }

    /// Replaces one field of the hole numbered `number`, leaving every other
    /// hole untouched. An unknown hole number leaves the round unchanged.
    ///
    /// Returns whether a hole was found.
    pub fn update_hole(&mut self, number: u32, edit: HoleEdit) -> bool {
        match self.holes.iter_mut().find(|h| h.number == number) {
            Some(hole) => {
                hole.apply(edit);
                true
            }
            None => false,
        }
    }

    pub fn set_course_notes(&mut self, notes: impl Into<String>) {
        self.course_notes = notes.into();
    }

    pub fn played_holes(&self) -> impl Iterator<Item = &Hole> {
        self.holes.iter().filter(|h| h.is_played())
    }
}

impl Default for Round {
    fn default() -> Self {
        Self::new(DEFAULT_HOLE_COUNT, DEFAULT_PAR)
    }
}
