mod assignment;
mod backfill;
mod types;
mod util;

pub use types::{
    Generation, SchedError, StaffingWarning, MAX_DAYS_PER_WEEK, MAX_PREFERRED_PER_SHIFT,
    MIN_STAFF_PER_SHIFT,
};

use crate::model::{Day, Roster, Schedule, Shift, WorkerId, WorkerRecord};
use crate::report::{build_report, Report};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Génère le planning de la semaine : préférences d'abord sur toute la
/// grille, puis complément aléatoire jusqu'à l'effectif minimal.
///
/// Les affectations précédentes du roster sont effacées avant de commencer ;
/// le tirage du complément est la seule source de non-déterminisme.
pub fn generate<R: Rng + ?Sized>(roster: &mut Roster, rng: &mut R) -> Generation {
    roster.clear_assignments();
    let mut schedule = Schedule::new();

    assignment::assign_preferences(roster, &mut schedule);
    #[cfg(feature = "logging")]
    tracing::debug!(
        assigned = schedule.total_assignments(),
        "preference pass done"
    );

    let warnings = backfill::ensure_minimum_staffing(roster, &mut schedule, rng);
    #[cfg(feature = "logging")]
    tracing::debug!(
        assigned = schedule.total_assignments(),
        warnings = warnings.len(),
        "schedule generated"
    );

    Generation { schedule, warnings }
}

/// Scheduler : session de planification (un roster, un planning courant).
#[derive(Debug)]
pub struct Scheduler {
    roster: Roster,
    rng: StdRng,
    schedule: Schedule,
    warnings: Vec<StaffingWarning>,
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl Scheduler {
    pub fn new() -> Self {
        Self::with_rng(StdRng::from_os_rng())
    }

    /// Deux sessions de même graine et même roster produisent la même suite de
    /// plannings. Chaque `generate` avance le générateur de la session : pour
    /// rejouer un planning à l'identique, passer par `generate_with`.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    fn with_rng(rng: StdRng) -> Self {
        Self {
            roster: Roster::default(),
            rng,
            schedule: Schedule::default(),
            warnings: Vec::new(),
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn add_worker<N, P>(&mut self, name: N, preferences: P) -> Result<WorkerId, SchedError>
    where
        N: Into<String>,
        P: IntoIterator<Item = (Day, Shift)>,
    {
        self.roster.add_worker(name, preferences)
    }

    /// Ajoute des enregistrements de saisie ; s'arrête au premier doublon.
    pub fn add_records<I>(&mut self, records: I) -> Result<Vec<WorkerId>, SchedError>
    where
        I: IntoIterator<Item = WorkerRecord>,
    {
        records
            .into_iter()
            .map(|r| self.roster.add_worker(r.name, r.preferences))
            .collect()
    }

    pub fn add_preference(&mut self, id: WorkerId, day: Day, shift: Shift) -> Result<(), SchedError> {
        self.roster.add_preference(id, day, shift)
    }

    /// Régénère le planning (remplace le précédent) avec le générateur de la session.
    pub fn generate(&mut self) -> &[StaffingWarning] {
        let Generation { schedule, warnings } = generate(&mut self.roster, &mut self.rng);
        self.schedule = schedule;
        self.warnings = warnings;
        &self.warnings
    }

    /// Comme `generate`, avec une source aléatoire fournie par l'appelant.
    pub fn generate_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &[StaffingWarning] {
        let Generation { schedule, warnings } = generate(&mut self.roster, rng);
        self.schedule = schedule;
        self.warnings = warnings;
        &self.warnings
    }

    pub fn current_schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn current_warnings(&self) -> &[StaffingWarning] {
        &self.warnings
    }

    pub fn report(&self) -> Report {
        build_report(&self.schedule, &self.roster, &self.warnings)
    }

    /// Vide la grille, les avertissements et les affectations ; garde le roster.
    pub fn clear(&mut self) {
        self.roster.clear_assignments();
        self.schedule = Schedule::default();
        self.warnings.clear();
    }
}
