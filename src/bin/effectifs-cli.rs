#![forbid(unsafe_code)]
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use effectifs::{
    assignment::assign_tasks,
    io,
    sample::sample_roster,
    table::{project, Columns, PageState, Projection, SortDirection, SortState},
    time::TimeOfDay,
    model::WorkerId,
    views::{employee_columns, task_columns, tasks_for_worker},
    ShiftCoverageEngine,
};
use std::fs::File;
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// CLI minimaliste de consultation d'effectif (sans base de données)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long, global = true)]
    log: bool,

    /// Fichier JSON d'effectif (par défaut : effectif d'exemple intégré)
    #[arg(long, global = true)]
    roster: Option<String>,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compter les employés en poste à une heure donnée
    Working {
        /// HH:MM:SS
        #[arg(long)]
        at: String,
        /// Afficher aussi les noms
        #[arg(long)]
        list: bool,
    },

    /// Table des employés (triée, paginée)
    Employees {
        #[arg(long, default_value = "name")]
        sort: String,
        #[arg(long)]
        desc: bool,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = 5)]
        page_size: usize,
        /// Export CSV de la page affichée
        #[arg(long)]
        csv: Option<String>,
    },

    /// Table des tâches (non paginée)
    Tasks {
        /// Graine d'attribution aléatoire des tâches
        #[arg(long)]
        seed: Option<u64>,
        /// Ne garder que les tâches de cet employé (id)
        #[arg(long)]
        worker: Option<u32>,
        #[arg(long, default_value = "title")]
        sort: String,
        #[arg(long)]
        desc: bool,
        #[arg(long)]
        csv: Option<String>,
    },

    /// Noms d'employés de tous les sites, triés
    Names,

    /// Exporter l'effectif chargé en JSON
    Export {
        #[arg(long)]
        out_json: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(std::io::stderr)
            .try_init();
    }

    let roster = match &cli.roster {
        Some(path) => io::load_roster_json(path)?,
        None => sample_roster(),
    };

    let code = match cli.cmd {
        Commands::Working { at, list } => {
            let instant: TimeOfDay = at.parse()?;
            let engine = ShiftCoverageEngine::from_roster(&roster)?;
            let report = engine.list_covered(&roster.workers, instant);
            println!(
                "Number of employees working at {} is {}",
                instant,
                report.count()
            );
            if list {
                for worker in &report.covered {
                    println!("{}", worker.name);
                }
            }
            for id in &report.skipped {
                eprintln!("Warning: worker {id} skipped (unknown shift type)");
            }
            // Code 2 = WARNING/INCOMPLETE
            if report.is_partial() {
                2
            } else {
                0
            }
        }
        Commands::Employees {
            sort,
            desc,
            page,
            page_size,
            csv,
        } => {
            let columns = employee_columns(&roster)?;
            let page = PageState::new(page, page_size)?.clamped(roster.workers.len());
            let view = project(
                &roster.workers,
                &columns,
                &sort_state(sort, desc),
                Some(page),
            );
            print_table(&columns, &view);
            println!(
                "page {}/{} ({} rows)",
                page.page_index() + 1,
                page.page_count(view.total_count).max(1),
                view.total_count
            );
            if let Some(path) = csv {
                export_csv(&path, &columns, &view)?;
            }
            0
        }
        Commands::Tasks {
            seed,
            worker,
            sort,
            desc,
            csv,
        } => {
            let tasks = match seed {
                Some(seed) => assign_tasks(&roster.tasks, &roster.workers, seed),
                None => roster.tasks.clone(),
            };
            let tasks: Vec<_> = match worker {
                Some(id) => tasks_for_worker(&tasks, WorkerId::new(id))
                    .into_iter()
                    .cloned()
                    .collect(),
                None => tasks,
            };
            let columns = task_columns(&roster)?;
            let view = project(&tasks, &columns, &sort_state(sort, desc), None);
            print_table(&columns, &view);
            if let Some(path) = csv {
                export_csv(&path, &columns, &view)?;
            }
            0
        }
        Commands::Names => {
            println!(
                "Ordered Employees: {}",
                roster.ordered_employee_names().join(", ")
            );
            0
        }
        Commands::Export { out_json } => {
            io::export_roster_json(&out_json, &roster)?;
            println!("Roster written to {out_json}");
            0
        }
    };

    std::process::exit(code);
}

fn sort_state(column: String, desc: bool) -> SortState {
    SortState {
        column_id: Some(column),
        direction: if desc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        },
    }
}

// impression compacte
fn print_table<T>(columns: &Columns<'_, T>, view: &Projection<'_, T>) {
    println!("{}", columns.labels().join(" | "));
    for row in &view.rows {
        let cells: Vec<String> = columns
            .row_values(row)
            .iter()
            .map(ToString::to_string)
            .collect();
        println!("{}", cells.join(" | "));
    }
}

fn export_csv<T>(path: &str, columns: &Columns<'_, T>, view: &Projection<'_, T>) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {path}"))?;
    io::write_projection_csv(file, columns, &view.rows)
}
