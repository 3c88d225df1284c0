use super::{util, StaffingWarning, MIN_STAFF_PER_SHIFT};
use crate::model::{Day, Roster, Schedule, Shift};
use rand::seq::IndexedRandom;
use rand::Rng;

/// Seconde passe : complète chaque case sous l'effectif minimal par tirage
/// uniforme parmi les employés encore disponibles ce jour-là.
pub(super) fn ensure_minimum_staffing<R: Rng + ?Sized>(
    roster: &mut Roster,
    schedule: &mut Schedule,
    rng: &mut R,
) -> Vec<StaffingWarning> {
    let mut warnings = Vec::new();

    for day in Day::ALL {
        for shift in Shift::ALL {
            while schedule.cell(day, shift).len() < MIN_STAFF_PER_SHIFT {
                let available = util::available_for(roster, day);
                let Some(&id) = available.choose(rng) else {
                    #[cfg(feature = "logging")]
                    tracing::warn!(%day, %shift, "cannot meet minimum staffing");
                    warnings.push(StaffingWarning { day, shift });
                    break;
                };

                #[cfg(feature = "logging")]
                tracing::debug!(%day, %shift, worker = id.index(), pool = available.len(), "backfill pick");
                util::assign_to_cell(roster, schedule, id, day, shift);
            }
        }
    }

    warnings
}
