use crate::model::{Day, Shift};
use crate::report::{Report, Utilization};

/// Permet de customiser le rendu du planning (table texte, HTML, etc.).
pub trait ScheduleRenderer {
    fn render(&self, report: &Report) -> String;
}

/// Table texte à largeur fixe (80 colonnes).
#[derive(Debug, Clone, Copy)]
pub struct TextTable {
    pub width: usize,
    pub day_column: usize,
    pub shift_column: usize,
    /// Au-delà, la liste de noms d'une case est tronquée et suffixée de `...`.
    pub max_cell_chars: usize,
}

impl Default for TextTable {
    fn default() -> Self {
        Self {
            width: 80,
            day_column: 12,
            shift_column: 25,
            max_cell_chars: 22,
        }
    }
}

impl TextTable {
    pub fn render_warnings(&self, report: &Report) -> String {
        let mut out = String::new();
        for warning in &report.warnings {
            push_line(&mut out, &format!("Warning: {warning}"));
        }
        out
    }

    pub fn render_grid(&self, report: &Report) -> String {
        let mut out = String::new();
        let rule = "=".repeat(self.width);
        push_line(&mut out, &rule);
        push_line(&mut out, "                    WEEKLY EMPLOYEE SCHEDULE");
        push_line(&mut out, &rule);

        if report.workers.is_empty() {
            push_line(&mut out, "No schedule available. No employees were added.");
            return out;
        }

        let mut header = format!("{:<w$}", "Day", w = self.day_column);
        for shift in Shift::ALL {
            header.push_str(&format!("{:<w$}", shift.display_name(), w = self.shift_column));
        }
        push_line(&mut out, &header);
        push_line(&mut out, &"-".repeat(self.width));

        for day in Day::ALL {
            let mut row = format!("{:<w$}", day.label(), w = self.day_column);
            for shift in Shift::ALL {
                let names = report
                    .cell(day, shift)
                    .map(|c| c.workers.join(", "))
                    .unwrap_or_default();
                let text = if names.is_empty() {
                    "No staff".to_string()
                } else {
                    truncate(&names, self.max_cell_chars)
                };
                row.push_str(&format!("{:<w$}", text, w = self.shift_column));
            }
            push_line(&mut out, &row);
        }
        push_line(&mut out, &"-".repeat(self.width));
        out
    }

    pub fn render_summary(&self, report: &Report) -> String {
        let mut out = String::from("EMPLOYEE SUMMARY:\n");
        for worker in &report.workers {
            let marker = match worker.utilization {
                Utilization::Overworked => " (OVERWORKED!)",
                Utilization::Underutilized => " (Underutilized)",
                Utilization::Nominal => "",
            };
            push_line(
                &mut out,
                &format!("{:<15}: {} days worked{marker}", worker.name, worker.days_worked),
            );
        }
        out
    }
}

impl ScheduleRenderer for TextTable {
    fn render(&self, report: &Report) -> String {
        let mut out = self.render_warnings(report);
        out.push('\n');
        out.push_str(&self.render_grid(report));
        if !report.workers.is_empty() {
            out.push('\n');
            out.push_str(&self.render_summary(report));
        }
        out
    }
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line.trim_end());
    out.push('\n');
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.push_str("...");
    cut
}
