use crate::model::{Day, Shift, WorkerRecord};
use anyhow::Result;
use std::io::{BufRead, Write};

/// Saisie interactive des employés et de leurs préférences.
///
/// Un nom vide ou `done` termine la saisie ; un doublon (casse ignorée) est
/// refusé et redemandé. Pour chaque jour : `MORNING`, `AFTERNOON`, `EVENING`,
/// `skip` (pas de préférence) ou `cancel` (abandonne cet employé). La fin de
/// l'entrée termine la saisie en gardant les employés complets.
pub fn read_workers<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<Vec<WorkerRecord>> {
    writeln!(
        output,
        "Enter employee information. Type 'done' as employee name to finish early."
    )?;
    let mut records: Vec<WorkerRecord> = Vec::new();
    let mut count = 1usize;

    loop {
        write!(output, "Enter name for employee {count}: ")?;
        output.flush()?;
        let Some(name) = read_line(&mut input)? else {
            break;
        };
        if name.is_empty() || name.eq_ignore_ascii_case("done") {
            break;
        }
        let lowered = name.to_lowercase();
        if records.iter().any(|r| r.name.to_lowercase() == lowered) {
            writeln!(
                output,
                "Employee with this name already exists. Please enter a different name."
            )?;
            continue;
        }

        writeln!(output, "Enter shift preferences for {name}.")?;
        writeln!(
            output,
            "Valid shifts: MORNING, AFTERNOON, EVENING. Enter 'skip' to skip a day, or 'cancel' to skip this employee."
        )?;
        writeln!(output, "Note: Only one shift preference is allowed per day.")?;

        let mut record = WorkerRecord::new(name.clone());
        let mut cancelled = false;
        for day in Day::ALL {
            writeln!(output, "\nPreference for {}:", day.label())?;
            write!(
                output,
                "Enter shift (MORNING, AFTERNOON, EVENING), 'skip', or 'cancel': "
            )?;
            output.flush()?;
            let Some(token) = read_line(&mut input)? else {
                writeln!(output, "\nTotal employees added: {}", records.len())?;
                return Ok(records);
            };
            let token = token.to_ascii_uppercase();
            match token.as_str() {
                "CANCEL" => {
                    cancelled = true;
                    break;
                }
                "SKIP" => continue,
                other => match other.parse::<Shift>() {
                    Ok(shift) => {
                        record.preferences.insert(day, shift);
                    }
                    Err(_) => writeln!(output, "Invalid shift: {other}. Skipping this day.")?,
                },
            }
        }

        if !cancelled {
            records.push(record);
            writeln!(output, "Employee {name} added successfully!")?;
            count += 1;
        }

        write!(output, "\nAdd another employee? (y/n/done): ")?;
        output.flush()?;
        match read_line(&mut input)? {
            None => break,
            Some(answer) if matches!(answer.to_lowercase().as_str(), "n" | "no" | "done") => break,
            Some(_) => {}
        }
    }

    writeln!(output, "\nTotal employees added: {}", records.len())?;
    Ok(records)
}

fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
