use super::models::Player;

/// Players the league starts with when no database is configured
pub fn default_roster() -> Vec<Player> {
    [
        (1, "alwaysresistance", "Kenya", 3138.0, "#000000"),
        (2, "lildrip035", "Chelsea", 3100.0, "#034694"),
        (3, "Sergent white", "Chelsea", 3042.0, "#034694"),
        (4, "skangaKe254", "Liverpool", 2700.0, "#c8102e"),
        (5, "Drexas", "Everton", 2792.0, "#003399"),
        (6, "Collo leevan", "Manchester United", 2448.0, "#da291c"),
        (7, "captainkenn", "West Ham", 3110.0, "#7c2c3b"),
        (8, "Bora kesho", "Man U", 3177.0, "#DA291C"),
    ]
    .into_iter()
    .map(|(id, name, team, strength, color)| Player {
        id,
        name: name.to_string(),
        team: team.to_string(),
        strength,
        team_color: Some(color.to_string()),
        photo_url: None,
    })
    .collect()
}
