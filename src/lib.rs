#![forbid(unsafe_code)]
//! Roulement — génération d'un planning hebdomadaire (7 jours × 3 créneaux).
//!
//! - Passe 1 : préférences des employés (au plus 4 par case).
//! - Passe 2 : complément aléatoire jusqu'à 2 personnes par case.
//! - Plafond de 5 jours travaillés, jamais deux créneaux le même jour.
//! - Le moteur ne fait aucune E/S ; saisie, export et rendu sont à part.

pub mod intake;
#[cfg(feature = "serde")]
pub mod io;
pub mod model;
pub mod render;
pub mod report;
pub mod scheduler;

pub use model::{Day, ParseEnumError, Roster, Schedule, Shift, Worker, WorkerId, WorkerRecord};
pub use render::{ScheduleRenderer, TextTable};
pub use report::{build_report, CellSummary, Report, Utilization, WorkerSummary};
pub use scheduler::{
    generate, Generation, SchedError, Scheduler, StaffingWarning, MAX_DAYS_PER_WEEK,
    MAX_PREFERRED_PER_SHIFT, MIN_STAFF_PER_SHIFT,
};
