use crate::catalog::{GameId, RecommendationSource};
use anyhow::{Context, Result};
use colored::Colorize;

pub struct ShowCommand;

impl ShowCommand {
    pub fn execute(source: &dyn RecommendationSource, id: &str) -> Result<()> {
        let list = source
            .load()
            .with_context(|| format!("Failed to load recommendations from {}", source.describe()))?;

        let game = list
            .find(&GameId::from(id))
            .ok_or_else(|| anyhow::anyhow!("Game not found: {}", id))?;

        println!("\n{}\n", game.name.cyan().bold());

        let fields = [
            ("Rank", game.rank.map(|rank| format!("#{}", rank))),
            ("Published", game.year_published.map(|year| year.to_string())),
            ("Players", game.players_label()),
            ("Playtime", game.playtime_label()),
            ("Image", game.image_url.clone()),
            ("Thumbnail", game.thumb_url.clone()),
        ];
        for (name, value) in fields {
            if let Some(value) = value {
                println!("  {}{}", format!("{:<12}", name).yellow(), value);
            }
        }

        if !game.description.is_empty() {
            println!("\n  {}", game.description.dimmed());
        }

        Ok(())
    }
}
