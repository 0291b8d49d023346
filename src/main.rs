//! Driver binary: parse a grid, find sets, print each one highlighted.
//!
//! With no arguments a built-in demo grid is solved. Rows can also be
//! passed on the command line, one argument per row:
//!
//! ```text
//! set-solver "gde1,gde2,gde3" "pwf1,pof2,poe1"
//! ```

use clap::Parser;
use log::info;

use set_solver::render::render_with_set;
use set_solver::Table;

/// Demo grid used when no rows are given.
const DEMO_GRID: [&[&str]; 3] = [
    &["gde3", "goe3", "pwe1", "roe1", "pof2"],
    &["pde3", "rdf1", "roe3", "gdf1", "poe1"],
    &["pod2", "gwd3", "gwf2", "rwf3", "rwe2"],
];

#[derive(Debug, Parser)]
#[command(
    name = "set-solver",
    version,
    about = "Find all Set triples in a card grid"
)]
struct Cli {
    /// Grid rows, one argument per row; cards are 4-character codes
    /// (color, shape, fill, count) separated by spaces or commas,
    /// e.g. "gde1,gde2,gde3". Defaults to a demo grid.
    rows: Vec<String>,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn build_table(cli: &Cli) -> Result<Table, set_solver::ParseError> {
    if cli.rows.is_empty() {
        let rows: Vec<Vec<&str>> = DEMO_GRID.iter().map(|row| row.to_vec()).collect();
        return Table::from_codes(&rows);
    }

    let rows: Vec<Vec<&str>> = cli
        .rows
        .iter()
        .map(|row| {
            row.split([' ', ','])
                .filter(|code| !code.is_empty())
                .collect()
        })
        .collect();
    Table::from_codes(&rows)
}

fn main() {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let table = match build_table(&cli) {
        Ok(table) => table,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };

    info!("scanning {} cards", table.len());

    let sets = table.find_sets();
    println!("Number of sets: {}", sets.len());

    for (i, set) in sets.iter().enumerate() {
        println!("Set {}:", i + 1);
        println!("{}", render_with_set(&table, set));
    }
}
