use crate::model::{Day, Shift, WorkerRecord};
use crate::report::Report;
use anyhow::{bail, Context};
use csv::{ReaderBuilder, WriterBuilder};
use std::fs;
use std::path::Path;

/// Import des employés depuis CSV : header
/// `name,monday,tuesday,wednesday,thursday,friday,saturday,sunday`.
///
/// Les colonnes jour peuvent être dans n'importe quel ordre et abrégées (`mon`).
/// Une cellule vide ou `skip` signifie « pas de préférence ce jour-là ».
pub fn import_workers_csv<P: AsRef<Path>>(path: P) -> anyhow::Result<Vec<WorkerRecord>> {
    let path = path.as_ref();
    let file = fs::File::open(path).with_context(|| format!("reading {}", path.display()))?;
    read_workers_csv(file)
}

pub fn read_workers_csv<R: std::io::Read>(reader: R) -> anyhow::Result<Vec<WorkerRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);
    let days = rdr
        .headers()?
        .iter()
        .skip(1)
        .map(|h| h.parse::<Day>().with_context(|| format!("invalid day column {h:?}")))
        .collect::<anyhow::Result<Vec<Day>>>()?;
    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let name = rec.get(0).context("missing name")?.trim();
        if name.is_empty() {
            bail!("invalid worker row (empty name)");
        }
        let mut record = WorkerRecord::new(name);
        for (day, cell) in days.iter().copied().zip(rec.iter().skip(1)) {
            let cell = cell.trim();
            if cell.is_empty() || cell.eq_ignore_ascii_case("skip") {
                continue;
            }
            let shift: Shift = cell
                .parse()
                .with_context(|| format!("invalid preference for {name} on {day}"))?;
            record.preferences.insert(day, shift);
        }
        out.push(record);
    }
    Ok(out)
}

/// Export JSON du rapport (jolie mise en forme)
pub fn export_report_json<P: AsRef<Path>>(path: P, report: &Report) -> anyhow::Result<()> {
    let s = serde_json::to_string_pretty(report)?;
    fs::write(path, s)?;
    Ok(())
}

/// Export CSV de la grille : header `day,shift,workers,understaffed`
/// (noms séparés par `;`).
pub fn export_schedule_csv<P: AsRef<Path>>(path: P, report: &Report) -> anyhow::Result<()> {
    let mut w = WriterBuilder::new().has_headers(true).from_path(path)?;
    w.write_record(["day", "shift", "workers", "understaffed"])?;
    for cell in &report.cells {
        let workers = cell.workers.join(";");
        w.write_record([
            cell.day.display_name(),
            cell.shift.display_name(),
            workers.as_str(),
            if cell.understaffed { "true" } else { "false" },
        ])?;
    }
    w.flush()?;
    Ok(())
}
