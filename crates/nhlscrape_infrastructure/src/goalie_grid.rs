//! Starting goalie grid of the RotoWire projections page.
//!
//! The grid is a `div.starters-matrix` holding one `div.flex-row` per team
//! (the first one is the header). Each team row has one or more
//! `div.goalies-row` sub-rows of `div.goalie-item` cells, one cell per day.
//! A cell holds zero or more game elements, each with a goalie link and two
//! `div.sm-text` lines: opponent, then starting status.

use chrono::{Days, NaiveDate};
use scraper::{ElementRef, Html, Selector};
use tracing::debug;

use nhlscrape_interface::errors::{AppError, Result};
use nhlscrape_interface::goalies::model::GoalieProjection;

const MATRIX: &str = "div.starters-matrix";
const TEAM_ROW: &str = "div.flex-row";
const TEAM_NAME: &str = "div.proj-team";
const DAYS_ROW: &str = "div.goalies-row";
const GAME_CELL: &str = "div.goalie-item";
const GOALIE_LINK: &str = "a";
const SMALL_TEXT: &str = "div.sm-text";

/// Date of the cell at `cell_index` within its sub-row. The index restarts at
/// zero on every sub-row.
pub fn projection_date(reference_date: NaiveDate, cell_index: usize) -> Result<NaiveDate> {
    reference_date
        .checked_add_days(Days::new(cell_index as u64))
        .ok_or_else(|| {
            AppError::parse_error(
                GAME_CELL,
                format!("cell {cell_index} past {reference_date} is out of the calendar"),
            )
        })
}

struct Selectors {
    matrix: Selector,
    team_row: Selector,
    team_name: Selector,
    days_row: Selector,
    game_cell: Selector,
    goalie_link: Selector,
    small_text: Selector,
}

impl Selectors {
    fn new() -> Result<Self> {
        Ok(Self {
            matrix: selector(MATRIX)?,
            team_row: selector(TEAM_ROW)?,
            team_name: selector(TEAM_NAME)?,
            days_row: selector(DAYS_ROW)?,
            game_cell: selector(GAME_CELL)?,
            goalie_link: selector(GOALIE_LINK)?,
            small_text: selector(SMALL_TEXT)?,
        })
    }
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| AppError::parse_error(css, format!("invalid selector: {e:?}")))
}

pub fn extract_goalie_grid(
    html: &str,
    reference_date: NaiveDate,
) -> Result<Vec<GoalieProjection>> {
    let selectors = Selectors::new()?;
    let document = Html::parse_document(html);

    let matrix = document
        .select(&selectors.matrix)
        .next()
        .ok_or_else(|| AppError::parse_error(MATRIX, "projection grid not found"))?;

    let mut projections = Vec::new();
    for row in matrix.select(&selectors.team_row).skip(1) {
        let team = row
            .select(&selectors.team_name)
            .next()
            .map(|element| text(&element))
            .ok_or_else(|| AppError::parse_error(TEAM_NAME, "team row without a team"))?;

        for days_row in row.select(&selectors.days_row) {
            for (cell_index, cell) in days_row.select(&selectors.game_cell).enumerate() {
                let date = projection_date(reference_date, cell_index)?;

                for game in cell.children().filter_map(ElementRef::wrap) {
                    projections.push(read_game(&game, &selectors, &team, date)?);
                }
            }
        }
    }

    debug!(rows = projections.len(), "extracted goalie projections");
    Ok(projections)
}

fn read_game(
    game: &ElementRef,
    selectors: &Selectors,
    team: &str,
    date: NaiveDate,
) -> Result<GoalieProjection> {
    let goalie_name = game
        .select(&selectors.goalie_link)
        .next()
        .map(|element| text(&element))
        .ok_or_else(|| {
            AppError::parse_error(GOALIE_LINK, format!("{team} game without a goalie"))
        })?;

    let small_texts = game
        .select(&selectors.small_text)
        .take(2)
        .map(|element| text(&element))
        .collect::<Vec<_>>();
    let [opponent, starting_status] = <[String; 2]>::try_from(small_texts).map_err(|found| {
        AppError::parse_error(
            SMALL_TEXT,
            format!(
                "{team} game for {goalie_name}: expected 2 elements, found {}",
                found.len()
            ),
        )
    })?;

    Ok(GoalieProjection {
        team: team.to_string(),
        goalie_name,
        date,
        opponent_team: last_chars(&opponent, 3),
        starting_status,
    })
}

fn text(element: &ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}

fn last_chars(s: &str, count: usize) -> String {
    let chars = s.chars().collect::<Vec<_>>();
    chars[chars.len().saturating_sub(count)..].iter().collect()
}
