use crate::request::{MatchCardRequest, RosterEntry};
use serde_json::Value;
use thiserror::Error;

/// Why a payload was rejected. The handler never echoes this to the
/// client; it exists so the log line tells an operator whether the
/// field was absent or merely the wrong shape.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("payload must be a JSON object")]
    NotAnObject,
    #[error("missing required field `{0}`")]
    MissingField(&'static str),
    #[error("field `{field}` must be {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },
    #[error("teamPlayers[{index}]: {source}")]
    BadRosterEntry {
        index: usize,
        source: Box<ValidationError>,
    },
}

/// Checks the raw payload against the expected shape and builds the
/// typed request. Purely structural: no environment access, no
/// normalization of the values themselves.
pub fn validate(raw: Value) -> Result<MatchCardRequest, ValidationError> {
    let body = raw.as_object().ok_or(ValidationError::NotAnObject)?;

    let division_name = required_string(body, "divisionName")?;
    let formatted_date = optional_string(body, "formattedDate")?;
    let match_number = optional_string(body, "matchNumber")?;
    let field_name = optional_string(body, "fieldName")?;
    let current_team_name = required_string(body, "currentTeamName")?;
    let home_team_name = optional_string(body, "homeTeamName")?;
    let away_team_name = optional_string(body, "awayTeamName")?;

    let players_value = body
        .get("teamPlayers")
        .ok_or(ValidationError::MissingField("teamPlayers"))?;
    let players_array = players_value.as_array().ok_or(ValidationError::WrongType {
        field: "teamPlayers",
        expected: "an array",
    })?;

    let mut team_players = Vec::with_capacity(players_array.len());
    for (index, entry) in players_array.iter().enumerate() {
        let entry = validate_entry(entry).map_err(|source| ValidationError::BadRosterEntry {
            index,
            source: Box::new(source),
        })?;
        team_players.push(entry);
    }

    Ok(MatchCardRequest {
        division_name,
        formatted_date,
        match_number,
        field_name,
        current_team_name,
        home_team_name,
        away_team_name,
        team_players,
    })
}

fn validate_entry(value: &Value) -> Result<RosterEntry, ValidationError> {
    let entry = value.as_object().ok_or(ValidationError::NotAnObject)?;

    // `number: null` and an absent `number` both mean "no jersey";
    // anything else non-integer is a type error.
    let number = match entry.get("number") {
        None | Some(Value::Null) => None,
        Some(value) => Some(value.as_i64().ok_or(ValidationError::WrongType {
            field: "number",
            expected: "an integer or null",
        })?),
    };

    let first_name = required_string(entry, "first_name")?;
    let last_name = required_string(entry, "last_name")?;
    let reserve = required_bool(entry, "reserve")?;
    let suspended = match entry.get("suspended") {
        None | Some(Value::Null) => false,
        Some(value) => value.as_bool().ok_or(ValidationError::WrongType {
            field: "suspended",
            expected: "a boolean",
        })?,
    };

    Ok(RosterEntry {
        number,
        first_name,
        last_name,
        reserve,
        suspended,
    })
}

fn required_string(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<String, ValidationError> {
    let value = object.get(field).ok_or(ValidationError::MissingField(field))?;
    value
        .as_str()
        .map(str::to_string)
        .ok_or(ValidationError::WrongType {
            field,
            expected: "a string",
        })
}

fn optional_string(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<Option<String>, ValidationError> {
    match object.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => value
            .as_str()
            .map(|s| Some(s.to_string()))
            .ok_or(ValidationError::WrongType {
                field,
                expected: "a string",
            }),
    }
}

fn required_bool(
    object: &serde_json::Map<String, Value>,
    field: &'static str,
) -> Result<bool, ValidationError> {
    let value = object.get(field).ok_or(ValidationError::MissingField(field))?;
    value.as_bool().ok_or(ValidationError::WrongType {
        field,
        expected: "a boolean",
    })
}
