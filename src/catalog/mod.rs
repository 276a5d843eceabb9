use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Bundled recommendations used when no file is configured
const SAMPLE_RECOMMENDATIONS: &str = include_str!("../../data/sample_recommendations.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read recommendations from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid recommendations data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate game id '{0}' in recommendations")]
    DuplicateId(GameId),
}

/// Unique key of a game record
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(String);

impl GameId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GameId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// One recommended board game. Everything except `id` and `name` is display payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameRecord {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub year_published: Option<u16>,
    #[serde(default)]
    pub min_players: Option<u8>,
    #[serde(default)]
    pub max_players: Option<u8>,
    #[serde(default)]
    pub min_playtime: Option<u16>,
    #[serde(default)]
    pub max_playtime: Option<u16>,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub thumb_url: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
impl GameRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: GameId::new(id),
            name: name.into(),
            year_published: None,
            min_players: None,
            max_players: None,
            min_playtime: None,
            max_playtime: None,
            rank: None,
            thumb_url: None,
            image_url: None,
            description: String::new(),
        }
    }
}

impl GameRecord {
    /// "2-4 players", "1 player", or None when unknown
    pub fn players_label(&self) -> Option<String> {
        let label = match (self.min_players, self.max_players) {
            (Some(1), Some(1)) => "1 player".to_string(),
            (Some(min), Some(max)) if min == max => format!("{} players", min),
            (Some(min), Some(max)) => format!("{}-{} players", min, max),
            (Some(min), None) => format!("{}+ players", min),
            (None, Some(max)) => format!("up to {} players", max),
            (None, None) => return None,
        };
        Some(label)
    }

    /// "30-60 min", "45 min", or None when unknown
    pub fn playtime_label(&self) -> Option<String> {
        match (self.min_playtime, self.max_playtime) {
            (Some(min), Some(max)) if min == max => Some(format!("{} min", min)),
            (Some(min), Some(max)) => Some(format!("{}-{} min", min, max)),
            (Some(time), None) | (None, Some(time)) => Some(format!("{} min", time)),
            (None, None) => None,
        }
    }
}

/// Recommendations in ranking order. Replaced wholesale, never edited in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecommendationList {
    games: Vec<GameRecord>,
}

impl RecommendationList {
    pub fn new(games: Vec<GameRecord>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(games.len());
        for game in &games {
            if !seen.insert(&game.id) {
                return Err(CatalogError::DuplicateId(game.id.clone()));
            }
        }
        Ok(Self { games })
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn as_slice(&self) -> &[GameRecord] {
        &self.games
    }

    pub fn find(&self, id: &GameId) -> Option<&GameRecord> {
        self.games.iter().find(|game| &game.id == id)
    }
}

/// Accepts both a bare array and the `{ "games": [...] }` envelope
pub fn parse_recommendations(json: &str) -> Result<RecommendationList, CatalogError> {
    let games = match serde_json::from_str::<Value>(json)? {
        Value::Object(mut envelope) => envelope.remove("games").unwrap_or(Value::Null),
        other => other,
    };
    RecommendationList::new(serde_json::from_value(games)?)
}

/// Whatever produces the ranked list. How it was computed is not our concern.
pub trait RecommendationSource {
    fn load(&self) -> Result<RecommendationList, CatalogError>;

    /// Human readable origin, shown in logs and the CLI
    fn describe(&self) -> String;
}

pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RecommendationSource for JsonFileSource {
    fn load(&self) -> Result<RecommendationList, CatalogError> {
        let content = fs::read_to_string(&self.path).map_err(|source| CatalogError::Read {
            path: self.path.clone(),
            source,
        })?;
        let list = parse_recommendations(&content)?;
        log::info!("loaded {} recommendations from {}", list.len(), self.path.display());
        Ok(list)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

pub struct SampleSource;

impl RecommendationSource for SampleSource {
    fn load(&self) -> Result<RecommendationList, CatalogError> {
        parse_recommendations(SAMPLE_RECOMMENDATIONS)
    }

    fn describe(&self) -> String {
        "bundled sample".to_string()
    }
}

/// Pick the file source when a path is configured, the bundled sample otherwise
pub fn source_for(path: Option<&Path>) -> Box<dyn RecommendationSource> {
    match path {
        Some(path) => Box::new(JsonFileSource::new(path)),
        None => Box::new(SampleSource),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_envelope_and_ignores_unknown_fields() {
        let json = r#"{"count": 2, "games": [
            {"id": "a", "name": "Alpha", "rank": 1, "categories": [{"id": "x"}]},
            {"id": "b", "name": "Beta", "min_players": 2, "max_players": 4}
        ]}"#;

        let list = parse_recommendations(json).unwrap();
        let names: Vec<&str> = list.as_slice().iter().map(|g| g.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "Beta"]);
        assert_eq!(list.as_slice()[0].rank, Some(1));
        assert_eq!(list.as_slice()[1].description, "");
    }

    #[test]
    fn parses_bare_array() {
        let list = parse_recommendations(r#"[{"id": "a", "name": "Alpha"}]"#).unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.find(&GameId::from("a")).unwrap().name, "Alpha");
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[{"id": "a", "name": "Alpha"}, {"id": "a", "name": "Again"}]"#;
        match parse_recommendations(json) {
            Err(CatalogError::DuplicateId(id)) => assert_eq!(id.as_str(), "a"),
            other => panic!("expected duplicate id error, got {:?}", other),
        }
    }

    #[test]
    fn rejects_records_without_name() {
        assert!(matches!(
            parse_recommendations(r#"[{"id": "a"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }

    #[test]
    fn null_description_reads_as_empty() {
        let json = r#"{"games": [{"id": "a", "name": "Alpha", "description": null}]}"#;
        let list = parse_recommendations(json).unwrap();
        assert_eq!(list.as_slice()[0].description, "");
    }

    #[rstest]
    #[case(r#"{"games": [{"id": "a", "name": "Alpha", "rank": -1}]}"#, "invalid value")]
    #[case(r#"[{"id": "a", "name": 7}]"#, "invalid type")]
    #[case(r#"{"count": 0}"#, "invalid type: null")]
    fn parse_errors_name_the_problem(#[case] json: &str, #[case] expected: &str) {
        match parse_recommendations(json) {
            Err(CatalogError::Parse(e)) => {
                let message = e.to_string();
                assert!(message.contains(expected), "unexpected message: {}", message);
                assert!(!message.contains("untagged"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn bundled_sample_loads() {
        let list = SampleSource.load().unwrap();
        assert!(list.len() > 20);
        assert_eq!(list.as_slice()[0].name, "Catan");
    }

    #[test]
    fn file_source_reads_and_reports_missing_files() {
        let path = std::env::temp_dir().join(format!("bgrecs-catalog-{}.json", std::process::id()));
        fs::write(&path, r#"[{"id": "z", "name": "Zeta"}]"#).unwrap();

        let list = JsonFileSource::new(&path).load().unwrap();
        assert_eq!(list.as_slice()[0].id, GameId::from("z"));

        fs::remove_file(&path).unwrap();
        assert!(matches!(
            JsonFileSource::new(&path).load(),
            Err(CatalogError::Read { .. })
        ));
    }

    #[rstest]
    #[case(Some(2), Some(4), Some("2-4 players"))]
    #[case(Some(1), Some(1), Some("1 player"))]
    #[case(Some(2), Some(2), Some("2 players"))]
    #[case(Some(3), None, Some("3+ players"))]
    #[case(None, None, None)]
    fn players_label(#[case] min: Option<u8>, #[case] max: Option<u8>, #[case] expected: Option<&str>) {
        let mut game = GameRecord::new("g", "Game");
        game.min_players = min;
        game.max_players = max;
        assert_eq!(game.players_label().as_deref(), expected);
    }

    #[rstest]
    #[case(Some(30), Some(60), Some("30-60 min"))]
    #[case(Some(45), Some(45), Some("45 min"))]
    #[case(None, Some(20), Some("20 min"))]
    #[case(None, None, None)]
    fn playtime_label(#[case] min: Option<u16>, #[case] max: Option<u16>, #[case] expected: Option<&str>) {
        let mut game = GameRecord::new("g", "Game");
        game.min_playtime = min;
        game.max_playtime = max;
        assert_eq!(game.playtime_label().as_deref(), expected);
    }
}
