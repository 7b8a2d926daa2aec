//! Path expressions over JSON documents.
//!
//! Supported syntax, from the root `$`:
//!
//! * `..name` every value stored under `name`, at any depth (self included),
//! * `.name` child access (mapped over the elements of an array),
//! * `[n]` / `[*]` array index / every element,
//! * `.(a,b)` / `..(a,b)` projection of named fields into a record, on the
//!   current nodes / on every object below them.
//!
//! Nodes missing a key are skipped. A projected record only carries the
//! fields present, and nodes with none of them yield nothing. Arrays left in
//! the final result are flattened one level.

mod path;

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use serde_json::{Map, Value};

use nhlscrape_interface::errors::{AppError, Result};

use path::Step;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonPath {
    expression: String,
    steps: Vec<Step>,
}

impl JsonPath {
    pub fn parse(expression: &str) -> Result<Self> {
        Ok(Self {
            expression: expression.to_string(),
            steps: path::parse(expression)?,
        })
    }

    pub fn evaluate(&self, document: &Value) -> Vec<Value> {
        let mut nodes = vec![Cow::Borrowed(document)];

        for step in &self.steps {
            nodes = nodes
                .into_iter()
                .flat_map(|node| apply(step, node))
                .collect();
        }

        nodes
            .into_iter()
            .flat_map(|node| match node {
                Cow::Borrowed(Value::Array(items)) => items.clone(),
                Cow::Owned(Value::Array(items)) => items,
                other => vec![other.into_owned()],
            })
            .collect()
    }
}

impl FromStr for JsonPath {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}

/// Parse and evaluate in one go.
pub fn query(document: &Value, expression: &str) -> Result<Vec<Value>> {
    Ok(JsonPath::parse(expression)?.evaluate(document))
}

fn apply<'a>(step: &Step, node: Cow<'a, Value>) -> Vec<Cow<'a, Value>> {
    match step {
        Step::Child(key) => select(node, |value| child(value, key)),
        Step::Descendant(key) => select(node, |value| {
            descendants(value)
                .into_iter()
                .filter_map(|d| d.as_object().and_then(|map| map.get(key)))
                .collect()
        }),
        Step::Index(index) => select(node, |value| match value {
            Value::Array(items) => items.get(*index).into_iter().collect(),
            _ => Vec::new(),
        }),
        Step::Wildcard => select(node, |value| match value {
            Value::Array(items) => items.iter().collect(),
            Value::Object(map) => map.values().collect(),
            _ => Vec::new(),
        }),
        Step::Project(fields) => {
            let targets: Vec<&Value> = match node.as_ref() {
                Value::Array(items) => items.iter().collect(),
                value => vec![value],
            };
            targets
                .into_iter()
                .filter_map(|target| project(target, fields))
                .map(Cow::Owned)
                .collect()
        }
        Step::DescendantProject(fields) => descendants(node.as_ref())
            .into_iter()
            .filter_map(|target| project(target, fields))
            .map(Cow::Owned)
            .collect(),
    }
}

// Runs a borrowing selection on either kind of node; owned nodes (records made
// by an earlier projection) hand out owned copies.
fn select<'a, F>(node: Cow<'a, Value>, selection: F) -> Vec<Cow<'a, Value>>
where
    F: for<'b> Fn(&'b Value) -> Vec<&'b Value>,
{
    match node {
        Cow::Borrowed(value) => selection(value).into_iter().map(Cow::Borrowed).collect(),
        Cow::Owned(value) => selection(&value)
            .into_iter()
            .map(|selected| Cow::Owned(selected.clone()))
            .collect(),
    }
}

fn child<'b>(value: &'b Value, key: &str) -> Vec<&'b Value> {
    match value {
        Value::Object(map) => map.get(key).into_iter().collect(),
        Value::Array(items) => items
            .iter()
            .filter_map(|item| item.as_object().and_then(|map| map.get(key)))
            .collect(),
        _ => Vec::new(),
    }
}

// Pre-order, document order, the value itself first.
fn descendants(value: &Value) -> Vec<&Value> {
    fn walk<'b>(value: &'b Value, out: &mut Vec<&'b Value>) {
        out.push(value);
        match value {
            Value::Object(map) => map.values().for_each(|child| walk(child, out)),
            Value::Array(items) => items.iter().for_each(|child| walk(child, out)),
            _ => {}
        }
    }

    let mut out = Vec::new();
    walk(value, &mut out);
    out
}

fn project(value: &Value, fields: &[String]) -> Option<Value> {
    let map = value.as_object()?;
    let record = fields
        .iter()
        .filter_map(|field| map.get(field).map(|v| (field.clone(), v.clone())))
        .collect::<Map<String, Value>>();

    if record.is_empty() {
        None
    } else {
        Some(Value::Object(record))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn schedule() -> Value {
        json!({
            "totalGames": 2,
            "dates": [
                {
                    "date": "2018-01-14",
                    "games": [
                        {
                            "gamePk": 2017020656,
                            "teams": {
                                "away": {"leagueRecord": {"wins": 20}, "team": {"id": 3, "name": "New York Rangers"}},
                                "home": {"leagueRecord": {"wins": 17}, "team": {"id": 17, "name": "Detroit Red Wings"}}
                            },
                            "venue": {"id": 5145, "name": "Little Caesars Arena"}
                        }
                    ]
                },
                {
                    "date": "2018-01-15",
                    "games": [
                        {
                            "gamePk": 2017020660,
                            "teams": {
                                "away": {"team": {"id": 6}},
                                "home": {"team": {"id": 10}}
                            }
                        }
                    ]
                }
            ]
        })
    }

    #[test]
    fn first_date_bucket_team_ids() {
        let ids = query(&schedule(), "$..dates[0]..games.teams..(id)").unwrap();
        assert_eq!(ids, vec![json!({"id": 3}), json!({"id": 17})]);
    }

    #[test]
    fn game_ids_across_dates() {
        let ids = query(&schedule(), "$..dates..games.gamePk").unwrap();
        assert_eq!(ids, vec![json!(2017020656), json!(2017020660)]);
    }

    #[test]
    fn trailing_arrays_are_flattened() {
        let games = query(&schedule(), "$..dates..games").unwrap();
        assert_eq!(games.len(), 2);
        assert_eq!(games[1]["gamePk"], 2017020660);
    }

    #[test]
    fn projection_keeps_requested_order_and_skips_missing_fields() {
        let document = json!({
            "teams": [
                {"abbreviation": "NJD", "id": 1, "teamName": "Devils", "venue": {"id": 5064}},
                {"id": 2, "teamName": "Islanders"},
                {"link": "/api/v1/teams/99"}
            ]
        });

        let records = query(&document, "$..teams.(id,teamName,abbreviation)").unwrap();

        assert_eq!(records.len(), 2);
        let keys = records[0]
            .as_object()
            .unwrap()
            .keys()
            .cloned()
            .collect::<Vec<_>>();
        assert_eq!(keys, vec!["id", "teamName", "abbreviation"]);
        assert_eq!(records[1], json!({"id": 2, "teamName": "Islanders"}));
    }

    #[test]
    fn descendant_lookup_includes_the_node_itself() {
        let document = json!({"id": 1, "team": {"id": 2, "roster": [{"id": 3}]}});
        assert_eq!(
            query(&document, "$..id").unwrap(),
            vec![json!(1), json!(2), json!(3)]
        );
    }

    #[test]
    fn no_match_is_empty_not_an_error() {
        assert!(query(&schedule(), "$..rosters.(id)").unwrap().is_empty());
        assert!(query(&json!({"dates": []}), "$..dates[0]..games").unwrap().is_empty());
        assert!(query(&schedule(), "$..dates[5]").unwrap().is_empty());
    }

    #[test]
    fn steps_after_a_projection_read_the_record() {
        let ids = query(&schedule(), "$..dates[0]..games.teams..(id,name).name").unwrap();
        assert_eq!(
            ids,
            vec![json!("New York Rangers"), json!("Detroit Red Wings")]
        );
    }

    #[test]
    fn invalid_expression_is_a_query_error() {
        assert!(matches!(
            query(&schedule(), "dates"),
            Err(AppError::QueryError { .. })
        ));
    }

    #[test]
    fn display_round_trips_expression() {
        let path: JsonPath = "$..dates[0]..games".parse().unwrap();
        assert_eq!(path.to_string(), "$..dates[0]..games");
    }
}
