//! Diagnostics du planning généré, sans rendu texte.
//!
//! Le rapport agrège la grille et le roster en structures simples que les
//! couches de présentation (table texte, CSV, JSON) consomment telles quelles.

use crate::model::{Day, Roster, Schedule, Shift};
use crate::scheduler::{StaffingWarning, MAX_DAYS_PER_WEEK, MIN_STAFF_PER_SHIFT};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// En dessous de ce nombre de jours, un employé est signalé sous-utilisé.
pub const UNDERUTILIZED_BELOW_DAYS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Utilization {
    Nominal,
    Underutilized,
    /// Au-delà du plafond hebdomadaire : ne devrait jamais arriver.
    Overworked,
}

impl Utilization {
    pub fn classify(days_worked: usize) -> Self {
        if days_worked > MAX_DAYS_PER_WEEK {
            Utilization::Overworked
        } else if days_worked < UNDERUTILIZED_BELOW_DAYS {
            Utilization::Underutilized
        } else {
            Utilization::Nominal
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerSummary {
    pub name: String,
    pub days_worked: usize,
    pub utilization: Utilization,
    pub shifts: BTreeMap<Day, Shift>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CellSummary {
    pub day: Day,
    pub shift: Shift,
    /// Noms dans l'ordre d'affectation.
    pub workers: Vec<String>,
    pub understaffed: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Report {
    pub workers: Vec<WorkerSummary>,
    pub cells: Vec<CellSummary>,
    pub warnings: Vec<StaffingWarning>,
}

impl Report {
    pub fn cell(&self, day: Day, shift: Shift) -> Option<&CellSummary> {
        self.cells.iter().find(|c| c.day == day && c.shift == shift)
    }

    pub fn worker(&self, name: &str) -> Option<&WorkerSummary> {
        let wanted = name.to_lowercase();
        self.workers.iter().find(|w| w.name.to_lowercase() == wanted)
    }

    pub fn is_fully_staffed(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// Construit le rapport (par employé, par case) à partir du planning terminé.
pub fn build_report(schedule: &Schedule, roster: &Roster, warnings: &[StaffingWarning]) -> Report {
    let workers = roster
        .iter()
        .map(|(_, w)| WorkerSummary {
            name: w.name().to_string(),
            days_worked: w.days_worked(),
            utilization: Utilization::classify(w.days_worked()),
            shifts: w.assigned_shifts().clone(),
        })
        .collect();

    let cells = schedule
        .iter()
        .map(|(day, shift, ids)| CellSummary {
            day,
            shift,
            workers: schedule
                .names(roster, day, shift)
                .into_iter()
                .map(str::to_string)
                .collect(),
            understaffed: ids.len() < MIN_STAFF_PER_SHIFT,
        })
        .collect();

    Report {
        workers,
        cells,
        warnings: warnings.to_vec(),
    }
}
