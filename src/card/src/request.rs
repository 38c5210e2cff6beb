/// One player as submitted by the client. Wire names for the roster
/// are snake_case (`first_name`, `last_name`), unlike the camelCase
/// envelope fields, and clients depend on that split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterEntry {
    /// Jersey number. `None` means no jersey assigned, which is valid.
    pub number: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub reserve: bool,
    pub suspended: bool,
}

/// A validated "generate match card" request. Constructed only by
/// [`crate::validate::validate`]; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchCardRequest {
    pub division_name: String,
    pub formatted_date: Option<String>,
    pub match_number: Option<String>,
    pub field_name: Option<String>,
    /// The team this card is printed for. Decides which of the two
    /// team rows gets emphasized on the card.
    pub current_team_name: String,
    pub home_team_name: Option<String>,
    pub away_team_name: Option<String>,
    /// Players in listing order, not jersey-number order.
    pub team_players: Vec<RosterEntry>,
}
