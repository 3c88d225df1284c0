use super::{util, MAX_DAYS_PER_WEEK, MAX_PREFERRED_PER_SHIFT};
use crate::model::{Day, Roster, Schedule, Shift, WorkerId};

/// Première passe : honore les préférences, case par case, dans l'ordre du roster.
pub(super) fn assign_preferences(roster: &mut Roster, schedule: &mut Schedule) {
    for day in Day::ALL {
        for shift in Shift::ALL {
            let eligible: Vec<WorkerId> = roster
                .iter()
                .filter(|(_, w)| w.is_available(day, MAX_DAYS_PER_WEEK) && w.prefers(day, shift))
                .map(|(id, _)| id)
                .take(MAX_PREFERRED_PER_SHIFT)
                .collect();

            for id in eligible {
                util::assign_to_cell(roster, schedule, id, day, shift);
            }
        }
    }
}
