use crate::scheduler::SchedError;
use chrono::Weekday;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Jeton jour/créneau invalide, rejeté à la frontière d'entrée.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid {kind}: {value}")]
pub struct ParseEnumError {
    pub kind: &'static str,
    pub value: String,
}

/// Jour de la semaine (lundi en premier).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Libellé en majuscules (`MONDAY`), utilisé par les rendus texte.
    pub fn label(self) -> &'static str {
        match self {
            Day::Monday => "MONDAY",
            Day::Tuesday => "TUESDAY",
            Day::Wednesday => "WEDNESDAY",
            Day::Thursday => "THURSDAY",
            Day::Friday => "FRIDAY",
            Day::Saturday => "SATURDAY",
            Day::Sunday => "SUNDAY",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Day {
    type Err = ParseEnumError;

    /// Jetons de `chrono::Weekday` : nom complet ou abréviation, casse ignorée.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<Weekday>()
            .map(Day::from)
            .map_err(|_| ParseEnumError {
                kind: "day",
                value: s.to_string(),
            })
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::ALL[weekday.num_days_from_monday() as usize]
    }
}

/// Créneau de la journée.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Shift {
    Morning,
    Afternoon,
    Evening,
}

impl Shift {
    pub const ALL: [Shift; 3] = [Shift::Morning, Shift::Afternoon, Shift::Evening];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Evening => "Evening",
        }
    }
}

impl fmt::Display for Shift {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Shift {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        Shift::ALL
            .into_iter()
            .find(|sh| sh.display_name().eq_ignore_ascii_case(token))
            .ok_or_else(|| ParseEnumError {
                kind: "shift",
                value: s.to_string(),
            })
    }
}

/// Identifiant d'un employé : sa position dans le roster.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WorkerId(usize);

impl WorkerId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Employé et son état d'affectation pour la semaine courante.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Worker {
    name: String,
    preferences: BTreeMap<Day, Shift>,
    assigned_shifts: BTreeMap<Day, Shift>,
}

impl Worker {
    fn new(name: String, preferences: BTreeMap<Day, Shift>) -> Self {
        Self {
            name,
            preferences,
            assigned_shifts: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn preferences(&self) -> &BTreeMap<Day, Shift> {
        &self.preferences
    }
    pub fn preference(&self, day: Day) -> Option<Shift> {
        self.preferences.get(&day).copied()
    }
    pub fn assigned_shifts(&self) -> &BTreeMap<Day, Shift> {
        &self.assigned_shifts
    }
    pub fn assigned(&self, day: Day) -> Option<Shift> {
        self.assigned_shifts.get(&day).copied()
    }

    pub fn days_worked(&self) -> usize {
        self.assigned_shifts.len()
    }

    pub fn prefers(&self, day: Day, shift: Shift) -> bool {
        self.preference(day) == Some(shift)
    }

    /// Libre ce jour-là et sous le plafond hebdomadaire.
    pub fn is_available(&self, day: Day, max_days: usize) -> bool {
        !self.assigned_shifts.contains_key(&day) && self.days_worked() < max_days
    }

    pub(crate) fn assign(&mut self, day: Day, shift: Shift, max_days: usize) -> bool {
        if !self.is_available(day, max_days) {
            return false;
        }
        self.assigned_shifts.insert(day, shift);
        true
    }

    pub(crate) fn clear_assignments(&mut self) {
        self.assigned_shifts.clear();
    }
}

/// Enregistrement produit par la saisie (nom + préférences validées).
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WorkerRecord {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub preferences: BTreeMap<Day, Shift>,
}

impl WorkerRecord {
    pub fn new<N: Into<String>>(name: N) -> Self {
        Self {
            name: name.into(),
            preferences: BTreeMap::new(),
        }
    }

    pub fn prefer(mut self, day: Day, shift: Shift) -> Self {
        self.preferences.insert(day, shift);
        self
    }
}

/// Roster : employés dans l'ordre d'enregistrement (ordre de départage).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    workers: Vec<Worker>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ajoute un employé ; refuse un nom déjà présent (casse ignorée).
    pub fn add_worker<N, P>(&mut self, name: N, preferences: P) -> Result<WorkerId, SchedError>
    where
        N: Into<String>,
        P: IntoIterator<Item = (Day, Shift)>,
    {
        let name = name.into();
        if self.find_by_name(&name).is_some() {
            return Err(SchedError::DuplicateName(name));
        }
        let id = WorkerId(self.workers.len());
        self.workers
            .push(Worker::new(name, preferences.into_iter().collect()));
        Ok(id)
    }

    /// Dernière écriture gagnante pour un même jour.
    pub fn add_preference(&mut self, id: WorkerId, day: Day, shift: Shift) -> Result<(), SchedError> {
        let worker = self
            .workers
            .get_mut(id.0)
            .ok_or(SchedError::UnknownWorker(id.0))?;
        worker.preferences.insert(day, shift);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.workers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.workers.is_empty()
    }

    pub fn get(&self, id: WorkerId) -> Option<&Worker> {
        self.workers.get(id.0)
    }

    pub fn find_by_name(&self, name: &str) -> Option<WorkerId> {
        let wanted = name.to_lowercase();
        self.workers
            .iter()
            .position(|w| w.name.to_lowercase() == wanted)
            .map(WorkerId)
    }

    pub fn iter(&self) -> impl Iterator<Item = (WorkerId, &Worker)> + '_ {
        self.workers
            .iter()
            .enumerate()
            .map(|(idx, w)| (WorkerId(idx), w))
    }

    pub fn workers(&self) -> &[Worker] {
        &self.workers
    }

    pub(crate) fn worker_mut(&mut self, id: WorkerId) -> Option<&mut Worker> {
        self.workers.get_mut(id.0)
    }

    pub(crate) fn clear_assignments(&mut self) {
        for worker in &mut self.workers {
            worker.clear_assignments();
        }
    }
}

/// Grille hebdomadaire : jour → créneau → employés dans l'ordre d'affectation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schedule {
    cells: [[Vec<WorkerId>; 3]; 7],
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cell(&self, day: Day, shift: Shift) -> &[WorkerId] {
        &self.cells[day.index()][shift.index()]
    }

    /// Parcourt les 21 cases dans l'ordre lundi matin → dimanche soir.
    pub fn iter(&self) -> impl Iterator<Item = (Day, Shift, &[WorkerId])> + '_ {
        Day::ALL.into_iter().flat_map(move |day| {
            Shift::ALL
                .into_iter()
                .map(move |shift| (day, shift, self.cell(day, shift)))
        })
    }

    pub fn names<'a>(&self, roster: &'a Roster, day: Day, shift: Shift) -> Vec<&'a str> {
        self.cell(day, shift)
            .iter()
            .filter_map(|id| roster.get(*id))
            .map(Worker::name)
            .collect()
    }

    pub fn total_assignments(&self) -> usize {
        self.iter().map(|(_, _, ids)| ids.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total_assignments() == 0
    }

    pub(crate) fn push(&mut self, day: Day, shift: Shift, id: WorkerId) {
        self.cells[day.index()][shift.index()].push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tokens_case_insensitively() {
        assert_eq!("morning".parse::<Shift>().unwrap(), Shift::Morning);
        assert_eq!(" EVENING ".parse::<Shift>().unwrap(), Shift::Evening);
        assert_eq!("Wed".parse::<Day>().unwrap(), Day::Wednesday);
        assert_eq!("SUNDAY".parse::<Day>().unwrap(), Day::Sunday);

        let err = "night".parse::<Shift>().unwrap_err();
        assert_eq!(err.to_string(), "invalid shift: night");
        assert!("funday".parse::<Day>().is_err());
    }

    #[test]
    fn day_from_weekday_keeps_monday_first() {
        assert_eq!(Day::from(Weekday::Mon), Day::Monday);
        assert_eq!(Day::from(Weekday::Sun), Day::Sunday);
        assert_eq!("tue".parse::<Day>().unwrap(), Day::Tuesday);
        assert_eq!("Saturday".parse::<Day>().unwrap(), Day::Saturday);
    }

    #[test]
    fn duplicate_names_ignore_case() {
        let mut roster = Roster::new();
        roster.add_worker("Alice", []).unwrap();
        let err = roster.add_worker("aLiCe", []).unwrap_err();
        assert!(matches!(err, SchedError::DuplicateName(ref n) if n == "aLiCe"));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn last_preference_wins() {
        let mut roster = Roster::new();
        let id = roster
            .add_worker("bob", [(Day::Monday, Shift::Morning)])
            .unwrap();
        roster.add_preference(id, Day::Monday, Shift::Evening).unwrap();
        let bob = roster.get(id).unwrap();
        assert_eq!(bob.preference(Day::Monday), Some(Shift::Evening));
        assert_eq!(bob.preferences().len(), 1);

        let missing = WorkerId(7);
        assert!(matches!(
            roster.add_preference(missing, Day::Monday, Shift::Morning),
            Err(SchedError::UnknownWorker(7))
        ));
    }

    #[test]
    fn worker_refuses_second_shift_same_day_and_sixth_day() {
        let mut roster = Roster::new();
        let id = roster.add_worker("carol", []).unwrap();
        let worker = roster.worker_mut(id).unwrap();
        assert!(worker.assign(Day::Monday, Shift::Morning, 5));
        assert!(!worker.assign(Day::Monday, Shift::Evening, 5));
        for day in &Day::ALL[1..5] {
            assert!(worker.assign(*day, Shift::Afternoon, 5));
        }
        assert_eq!(worker.days_worked(), 5);
        assert!(!worker.assign(Day::Saturday, Shift::Morning, 5));
        assert_eq!(worker.assigned(Day::Monday), Some(Shift::Morning));
    }

    #[test]
    fn iteration_keeps_registration_order() {
        let mut roster = Roster::new();
        for name in ["zoe", "adam", "mia"] {
            roster.add_worker(name, []).unwrap();
        }
        let names: Vec<&str> = roster.iter().map(|(_, w)| w.name()).collect();
        assert_eq!(names, ["zoe", "adam", "mia"]);
        assert_eq!(roster.find_by_name("ADAM"), Some(WorkerId(1)));
    }
}
