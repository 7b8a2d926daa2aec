use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use tracing::debug;

use nhlscrape_infrastructure::{services::ServiceRegistry, settings::Settings};
use nhlscrape_interface::boxscore::model::{BoxScore, BoxScoreFormat};
use nhlscrape_interface::errors::{AppError, Result};

mod logger;
mod output;

/// Scrape NHL statistics and projected starting goalies.
#[derive(Debug, Parser)]
#[command(name = "nhlscrape", version)]
struct Cli {
    /// Print JSON instead of tab-separated rows.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every team of the league.
    Teams,
    /// List every rostered player.
    Players,
    /// Number of dates each team plays on within a date range.
    GameCounts(DateRange),
    /// Box score of one game.
    BoxScore {
        game_id: u64,
        /// `table` or `json`.
        #[arg(long, default_value = "table")]
        format: String,
    },
    /// Ids of the games scheduled within a date range.
    Games(DateRange),
    /// Game summaries with line scores within a date range.
    Linescores(DateRange),
    /// Box score rows of every game within a date range.
    RangeBoxScores(DateRange),
    /// Projected starting goalies.
    Goalies {
        /// First day of the projection grid; today when omitted.
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

#[derive(Debug, Args)]
struct DateRange {
    /// First date, YYYY-MM-DD.
    #[arg(long)]
    start: NaiveDate,
    /// Last date (inclusive), YYYY-MM-DD.
    #[arg(long)]
    end: NaiveDate,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::new().map_err(|e| AppError::ConfigError { msg: e.to_string() })?;
    logger::setup(&settings.logger.level);
    debug!(environment = %settings.environment, http = ?settings.http, "settings loaded");

    let mut services = ServiceRegistry::new(&settings)?;
    let nhl = &mut services.nhl_scraper;

    match cli.command {
        Command::Teams => output::print_rows(nhl.teams()?, cli.json),
        Command::Players => output::print_rows(&nhl.players()?, cli.json),
        Command::GameCounts(range) => {
            let counts = nhl.games_count(range.start, range.end)?;
            if cli.json {
                return output::print_json(&counts);
            }

            let lines: Vec<String> = std::iter::once("team_id\tgames".to_string())
                .chain(counts.iter().map(|(team_id, games)| format!("{team_id}\t{games}")))
                .collect();
            output::write_lines(&lines)
        }
        Command::BoxScore { game_id, format } => {
            let format: BoxScoreFormat = format.parse()?;
            match nhl.box_score(game_id, format)? {
                BoxScore::Json(document) => output::print_json(&document),
                BoxScore::Table(rows) => output::print_rows(&rows, cli.json),
            }
        }
        Command::Games(range) => {
            let games = nhl.games(range.start, range.end)?;
            if cli.json {
                return output::print_json(&games);
            }

            let lines: Vec<String> = games.iter().map(ToString::to_string).collect();
            output::write_lines(&lines)
        }
        Command::Linescores(range) => {
            output::print_json(&nhl.linescores(range.start, range.end)?)
        }
        Command::RangeBoxScores(range) => {
            let rows = nhl.box_scores_for_range(range.start, range.end)?;
            output::print_rows(&rows, cli.json)
        }
        Command::Goalies { date } => {
            let goalies = &mut services.goalie_scraper;
            let projections = match date {
                Some(date) => goalies.starting_goalies_on(date)?,
                None => goalies.starting_goalies()?,
            };
            output::print_rows(&projections, cli.json)
        }
    }
}
