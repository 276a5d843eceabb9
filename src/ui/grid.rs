use super::theme::ThemePalette;
use crate::catalog::{GameId, GameRecord};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

/// Display node for one game on the current page
#[derive(Debug, Clone, PartialEq)]
pub struct GridNode {
    pub key: GameId,
    pub title: String,
    pub subtitle: String,
}

impl GridNode {
    fn from_record(game: &GameRecord) -> Self {
        let title = match game.year_published {
            Some(year) => format!("{} ({})", game.name, year),
            None => game.name.clone(),
        };

        let subtitle = [game.players_label(), game.playtime_label()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" · ");

        Self {
            key: game.id.clone(),
            title,
            subtitle,
        }
    }
}

/// One node per record, in the order given
pub fn grid_nodes(games: &[GameRecord]) -> Vec<GridNode> {
    games.iter().map(GridNode::from_record).collect()
}

/// Highlighted row, remembered by key so a redraw of the same page keeps it
#[derive(Debug, Clone, Default)]
pub struct GridSelection {
    key: Option<GameId>,
}

impl GridSelection {
    pub fn key(&self) -> Option<&GameId> {
        self.key.as_ref()
    }

    /// Row index of the highlighted key in `nodes`, falling back to the first row
    pub fn index_in(&self, nodes: &[GridNode]) -> Option<usize> {
        if nodes.is_empty() {
            return None;
        }
        self.key
            .as_ref()
            .and_then(|key| nodes.iter().position(|node| &node.key == key))
            .or(Some(0))
    }

    /// Re-anchor on the current nodes; keeps the key when it is still shown
    pub fn sync(&mut self, nodes: &[GridNode]) {
        self.key = self.index_in(nodes).map(|i| nodes[i].key.clone());
    }

    pub fn reset(&mut self, nodes: &[GridNode]) {
        self.key = nodes.first().map(|node| node.key.clone());
    }

    pub fn next(&mut self, nodes: &[GridNode]) {
        if let Some(i) = self.index_in(nodes) {
            let next = if i + 1 >= nodes.len() { 0 } else { i + 1 };
            self.key = Some(nodes[next].key.clone());
        }
    }

    pub fn previous(&mut self, nodes: &[GridNode]) {
        if let Some(i) = self.index_in(nodes) {
            let prev = if i == 0 { nodes.len() - 1 } else { i - 1 };
            self.key = Some(nodes[prev].key.clone());
        }
    }
}

pub fn render_grid(
    f: &mut Frame,
    area: Rect,
    nodes: &[GridNode],
    selection: &GridSelection,
    title: &str,
    focused: bool,
    palette: &ThemePalette,
) {
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(title.to_string())
        .style(Style::default().fg(border));

    if nodes.is_empty() {
        let empty = Paragraph::new("No recommendations yet.")
            .block(block)
            .style(Style::default().fg(palette.text_dim));
        f.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = nodes
        .iter()
        .map(|node| {
            let mut spans = vec![Span::styled(
                node.title.clone(),
                Style::default().fg(palette.text_primary),
            )];
            if !node.subtitle.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", node.subtitle),
                    Style::default().fg(palette.text_secondary),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.highlight_bg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");

    let mut state = ListState::default();
    state.select(selection.index_in(nodes));
    f.render_stateful_widget(list, area, &mut state);
}
