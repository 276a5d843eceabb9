use crate::catalog::RecommendationSource;
use crate::pagination::{PageNavigator, PageSize};
use crate::ui::grid_nodes;
use anyhow::{Context, Result};
use colored::Colorize;
use std::ops::RangeInclusive;

pub struct ListCommand;

impl ListCommand {
    pub fn execute(source: &dyn RecommendationSource, page_size: PageSize, page: usize) -> Result<()> {
        let list = source
            .load()
            .with_context(|| format!("Failed to load recommendations from {}", source.describe()))?;

        let mut navigator = PageNavigator::new(list, page_size);
        navigator.go_to_page(page)?;

        if navigator.total_posts() == 0 {
            println!("{}", "No recommendations yet.".yellow());
            return Ok(());
        }

        let range = navigator.visible_range();
        println!(
            "\n{} {}-{} of {}\n",
            "Recommendations".cyan().bold(),
            range.start + 1,
            range.end,
            navigator.total_posts()
        );

        for (position, node) in range.clone().zip(grid_nodes(navigator.visible_slice())) {
            println!(
                "{:>4}. {} {}",
                position + 1,
                node.title.bold(),
                format!("[{}]", node.key).dimmed()
            );
            if !node.subtitle.is_empty() {
                println!("      {}", node.subtitle.dimmed());
            }
        }

        println!(
            "\n{} {}",
            "Pages:".cyan(),
            page_selector_line(navigator.page_numbers(), navigator.current_page())
        );

        Ok(())
    }
}

/// `1 [2] 3` with the current page bracketed
fn page_selector_line(pages: RangeInclusive<usize>, current: usize) -> String {
    pages
        .map(|page| {
            if page == current {
                format!("[{}]", page)
            } else {
                page.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{parse_recommendations, CatalogError, RecommendationList};
    use crate::pagination::PaginationError;

    struct FixedSource(&'static str);

    impl RecommendationSource for FixedSource {
        fn load(&self) -> Result<RecommendationList, CatalogError> {
            parse_recommendations(self.0)
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn per_page(n: usize) -> PageSize {
        PageSize::new(n).unwrap()
    }

    #[test]
    fn out_of_range_page_fails_on_empty_list() {
        let err = ListCommand::execute(&FixedSource("[]"), per_page(10), 7).unwrap_err();
        assert_eq!(
            err.downcast_ref::<PaginationError>(),
            Some(&PaginationError::OutOfRangePage {
                requested: 7,
                page_count: 0
            })
        );
        assert!(ListCommand::execute(&FixedSource("[]"), per_page(10), 1).is_ok());
    }

    #[test]
    fn out_of_range_page_fails_on_populated_list() {
        let source = FixedSource(r#"[{"id": "a", "name": "Alpha"}, {"id": "b", "name": "Beta"}]"#);
        assert!(ListCommand::execute(&source, per_page(1), 2).is_ok());
        assert!(ListCommand::execute(&source, per_page(1), 3).is_err());
    }

    #[test]
    fn current_page_is_bracketed() {
        assert_eq!(page_selector_line(1..=3, 2), "1 [2] 3");
        assert_eq!(page_selector_line(1..=1, 1), "[1]");
    }

    #[test]
    fn no_pages_gives_empty_line() {
        assert_eq!(page_selector_line(1..=0, 1), "");
    }
}
