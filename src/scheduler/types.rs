use crate::model::{Day, Schedule, Shift};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Plafond de la passe « préférences » pour une case.
pub const MAX_PREFERRED_PER_SHIFT: usize = 4;
/// Effectif minimal visé par la passe de complément.
pub const MIN_STAFF_PER_SHIFT: usize = 2;
/// Nombre maximal de jours travaillés par semaine.
pub const MAX_DAYS_PER_WEEK: usize = 5;

/// Case (jour, créneau) restée sous l'effectif minimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StaffingWarning {
    pub day: Day,
    pub shift: Shift,
}

impl fmt::Display for StaffingWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Cannot meet minimum staffing for {} {} shift",
            self.day.label(),
            self.shift.display_name()
        )
    }
}

/// Résultat d'une génération : grille + avertissements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generation {
    pub schedule: Schedule,
    pub warnings: Vec<StaffingWarning>,
}

#[derive(Error, Debug)]
pub enum SchedError {
    #[error("duplicate worker name: {0}")]
    DuplicateName(String),
    #[error("unknown worker: #{0}")]
    UnknownWorker(usize),
}
