use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Database model for players table
#[derive(Debug, Clone, PartialEq, FromRow, Serialize, Deserialize)]
pub struct Player {
    pub id: i64,
    pub name: String,
    pub team: String,
    pub strength: f64,
    #[serde(default)]
    pub team_color: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

/// Fields accepted when registering a player; the store assigns the id
#[derive(Debug, Clone, Deserialize)]
pub struct NewPlayer {
    pub name: String,
    pub team: String,
    #[serde(default)]
    pub strength: f64,
    #[serde(default)]
    pub team_color: Option<String>,
    #[serde(default)]
    pub photo_url: Option<String>,
}

impl NewPlayer {
    pub fn into_player(self, id: i64) -> Player {
        Player {
            id,
            name: self.name,
            team: self.team,
            strength: self.strength,
            team_color: self.team_color,
            photo_url: self.photo_url,
        }
    }
}

/// Partial update from an admin edit; absent fields are left untouched
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlayerUpdate {
    pub name: Option<String>,
    pub team: Option<String>,
    pub strength: Option<f64>,
    pub team_color: Option<String>,
    pub photo_url: Option<String>,
}

impl PlayerUpdate {
    pub fn apply_to(self, player: &mut Player) {
        if let Some(name) = self.name {
            player.name = name;
        }
        if let Some(team) = self.team {
            player.team = team;
        }
        if let Some(strength) = self.strength {
            player.strength = strength;
        }
        if self.team_color.is_some() {
            player.team_color = self.team_color;
        }
        if self.photo_url.is_some() {
            player.photo_url = self.photo_url;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_player_defaults_optional_fields() {
        let new_player: NewPlayer =
            serde_json::from_str(r#"{"name": "Drexas", "team": "Everton"}"#).unwrap();

        let player = new_player.into_player(5);
        assert_eq!(player.id, 5);
        assert_eq!(player.strength, 0.0);
        assert!(player.team_color.is_none());
    }

    #[test]
    fn test_update_only_touches_present_fields() {
        let mut player = NewPlayer {
            name: "captainkenn".to_string(),
            team: "West Ham".to_string(),
            strength: 3110.0,
            team_color: Some("#7c2c3b".to_string()),
            photo_url: None,
        }
        .into_player(7);

        PlayerUpdate {
            team: Some("Arsenal".to_string()),
            ..PlayerUpdate::default()
        }
        .apply_to(&mut player);

        assert_eq!(player.name, "captainkenn");
        assert_eq!(player.team, "Arsenal");
        assert_eq!(player.strength, 3110.0);
        assert_eq!(player.team_color.as_deref(), Some("#7c2c3b"));
    }
}
