use crate::request::MatchCardRequest;
use crate::roster::{NormalizedRoster, RosterRow};
use askama::Template;

/// One of the two team lines at the top of the card. `current` marks
/// the side the roster below belongs to; the template emphasizes that
/// line and points an indicator at it.
struct TeamLine<'a> {
    name: &'a str,
    current: bool,
}

impl<'a> TeamLine<'a> {
    fn new(name: Option<&'a str>, current_team_name: &str) -> Self {
        let name = name.unwrap_or_default();
        TeamLine {
            name,
            current: !name.is_empty() && name == current_team_name,
        }
    }
}

#[derive(Template)]
#[template(path = "match_card.html")]
struct MatchCardTemplate<'a> {
    current_team_name: &'a str,
    division_name: &'a str,
    formatted_date: &'a str,
    match_number: &'a str,
    field_name: &'a str,
    away: TeamLine<'a>,
    home: TeamLine<'a>,
    rows: &'a [RosterRow],
}

/// Renders the card to a self-contained HTML document (inline CSS and
/// SVG only, nothing the rendering engine would have to fetch).
/// Deterministic: identical inputs produce byte-identical markup.
pub fn render_document(
    request: &MatchCardRequest,
    roster: &NormalizedRoster,
) -> askama::Result<String> {
    MatchCardTemplate {
        current_team_name: &request.current_team_name,
        division_name: &request.division_name,
        formatted_date: request.formatted_date.as_deref().unwrap_or_default(),
        match_number: request.match_number.as_deref().unwrap_or_default(),
        field_name: request.field_name.as_deref().unwrap_or_default(),
        away: TeamLine::new(request.away_team_name.as_deref(), &request.current_team_name),
        home: TeamLine::new(request.home_team_name.as_deref(), &request.current_team_name),
        rows: roster.rows(),
    }
    .render()
}
