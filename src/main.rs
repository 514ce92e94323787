use anyhow::Context;
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use roster_query::query::{self, CohortFilter};
use roster_query::render::{self, Format, QueryOutput};

pub type Result<T> = anyhow::Result<T>;

#[derive(Parser)]
#[command(name = "roster")]
#[command(version, about = "Query a pipe-delimited student roster", long_about = None)]
struct Cli {
    /// Roster file (first|last|house|advisor|cohort per line).
    #[arg(long, global = true, env = "ROSTER_FILE", default_value = "cohort_data.txt")]
    file: PathBuf,

    #[arg(long, global = true, env = "ROSTER_FORMAT", value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Increase log verbosity (ignored when RUST_LOG is set).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Houses that have at least one student.
    Houses,

    /// Student names, sorted, optionally limited to one cohort.
    Students {
        #[arg(long, default_value = "All")]
        cohort: CohortFilter,
    },

    /// Names grouped by house, then ghosts and instructors.
    Rosters,

    /// Every record: full name, house, advisor, cohort.
    Data,

    /// Cohort of a person, by full name.
    Cohort { name: String },

    /// Last names shared by more than one person.
    Dupes,

    /// People sharing house and cohort with the given person.
    Housemates { name: String },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let file = &cli.file;
    let output = match cli.cmd {
        Commands::Houses => QueryOutput::NameSet(
            query::all_houses(file).with_context(|| format!("list houses in {}", file.display()))?,
        ),
        Commands::Students { cohort } => QueryOutput::Names(
            query::students_by_cohort(file, &cohort).with_context(|| {
                format!("list students in cohort {} from {}", cohort, file.display())
            })?,
        ),
        Commands::Rosters => QueryOutput::Rosters(
            query::all_names_by_house(file)
                .with_context(|| format!("group names by house in {}", file.display()))?,
        ),
        Commands::Data => QueryOutput::Data(
            query::all_data(file).with_context(|| format!("read records from {}", file.display()))?,
        ),
        Commands::Cohort { name } => QueryOutput::Cohort(
            query::get_cohort_for(file, &name)
                .with_context(|| format!("look up cohort for {:?} in {}", name, file.display()))?,
        ),
        Commands::Dupes => QueryOutput::NameSet(
            query::find_duped_last_names(file)
                .with_context(|| format!("find duplicated last names in {}", file.display()))?,
        ),
        Commands::Housemates { name } => QueryOutput::NameSet(
            query::get_housemates_for(file, &name)
                .with_context(|| format!("find housemates for {:?} in {}", name, file.display()))?,
        ),
    };

    log::debug!("rendering {:?} output", cli.format);
    print!("{}", render::render(&output, cli.format)?);

    Ok(())
}
