#![forbid(unsafe_code)]
use anyhow::Result;
use clap::{Parser, Subcommand};
use roulement::{
    intake, io,
    model::WorkerRecord,
    render::{ScheduleRenderer, TextTable},
    scheduler::Scheduler,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI de planning hebdomadaire (7 jours × 3 créneaux)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Graine du tirage aléatoire, pour un planning reproductible
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Générer et afficher le planning
    Generate {
        /// CSV `name,monday,...,sunday` ; saisie interactive si absent
        #[arg(long)]
        csv: Option<String>,
        #[arg(long)]
        out_json: Option<String>,
        #[arg(long)]
        out_csv: Option<String>,
    },

    /// Vérifier que chaque créneau atteint l'effectif minimal
    Check {
        #[arg(long)]
        csv: String,
    },
}

fn load_records(csv: Option<&str>) -> Result<Vec<WorkerRecord>> {
    match csv {
        Some(path) => io::import_workers_csv(path),
        None => intake::read_workers(std::io::stdin().lock(), std::io::stdout()),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let mut scheduler = match cli.seed {
        Some(seed) => Scheduler::with_seed(seed),
        None => Scheduler::new(),
    };

    let code = match cli.cmd {
        Commands::Generate {
            csv,
            out_json,
            out_csv,
        } => {
            let records = load_records(csv.as_deref())?;
            if records.is_empty() {
                println!("No employees entered. Exiting...");
                std::process::exit(0);
            }
            scheduler.add_records(records)?;

            println!("\n--- Generating Schedule ---");
            let understaffed = scheduler.generate().len();
            println!("Schedule generated successfully!");

            let report = scheduler.report();
            if let Some(path) = out_json {
                io::export_report_json(path, &report)?;
            }
            if let Some(path) = out_csv {
                io::export_schedule_csv(path, &report)?;
            }
            print!("{}", TextTable::default().render(&report));

            // Code 2 = WARNING/INCOMPLETE
            if understaffed == 0 {
                0
            } else {
                2
            }
        }
        Commands::Check { csv } => {
            let records = io::import_workers_csv(&csv)?;
            scheduler.add_records(records)?;
            let warnings = scheduler.generate();
            if warnings.is_empty() {
                println!("OK: every shift is staffed");
                0
            } else {
                eprintln!("Found {} understaffed shift(s)", warnings.len());
                for warning in warnings {
                    println!("Warning: {warning}");
                }
                2
            }
        }
    };

    std::process::exit(code);
}
