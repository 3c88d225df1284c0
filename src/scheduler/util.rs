use super::MAX_DAYS_PER_WEEK;
use crate::model::{Day, Roster, Schedule, Shift, WorkerId};

/// Affecte l'employé à la case s'il est encore disponible ce jour-là.
pub(super) fn assign_to_cell(
    roster: &mut Roster,
    schedule: &mut Schedule,
    id: WorkerId,
    day: Day,
    shift: Shift,
) -> bool {
    let Some(worker) = roster.worker_mut(id) else {
        return false;
    };
    if !worker.assign(day, shift, MAX_DAYS_PER_WEEK) {
        return false;
    }
    schedule.push(day, shift, id);
    true
}

/// Employés disponibles pour `day`, dans l'ordre du roster.
pub(super) fn available_for(roster: &Roster, day: Day) -> Vec<WorkerId> {
    roster
        .iter()
        .filter(|(_, w)| w.is_available(day, MAX_DAYS_PER_WEEK))
        .map(|(id, _)| id)
        .collect()
}
