use crate::catalog::RecommendationSource;
use crate::pagination::{page_count, page_numbers, PageSize};
use anyhow::{Context, Result};
use colored::Colorize;

pub struct PagesCommand;

impl PagesCommand {
    pub fn execute(source: &dyn RecommendationSource, page_size: PageSize) -> Result<()> {
        let list = source
            .load()
            .with_context(|| format!("Failed to load recommendations from {}", source.describe()))?;

        let count = page_count(list.len(), page_size);
        println!(
            "{} recommendations, {} per page: {} page(s)",
            list.len().to_string().green().bold(),
            page_size.get(),
            count.to_string().green().bold()
        );

        if count > 0 {
            let ids: Vec<String> = page_numbers(list.len(), page_size)
                .map(|page| page.to_string())
                .collect();
            println!("{} {}", "Pages:".cyan(), ids.join(" "));
        }

        Ok(())
    }
}
