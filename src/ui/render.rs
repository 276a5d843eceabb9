use super::app::App;
use super::grid::render_grid;
use super::help_window;
use super::theme::ThemePalette;
use super::types::{AlertType, Focus, Hit};
use crate::catalog::GameRecord;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

pub const HOME_LABEL: &str = "[⌂ Home]";
pub const TITLE: &str = "Board Game Recommendations... for YOU!";

/// Screen regions, shared by drawing and mouse hit testing
#[derive(Debug, Clone, Copy)]
pub struct ShellLayout {
    pub header: Rect,
    pub body: Rect,
    pub page_bar: Rect,
    pub footer: Rect,
}

pub fn shell_layout(area: Rect, listing: bool) -> ShellLayout {
    let page_bar_height = if listing { 3 } else { 0 };
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),               // Header
            Constraint::Min(0),                  // Grid or detail
            Constraint::Length(page_bar_height), // Page selector
            Constraint::Length(1),               // Footer
        ])
        .split(area);

    ShellLayout {
        header: chunks[0],
        body: chunks[1],
        page_bar: chunks[2],
        footer: chunks[3],
    }
}

fn home_button_area(header: Rect) -> Rect {
    Rect {
        x: header.x + 1,
        y: header.y + 1,
        width: (HOME_LABEL.chars().count() as u16).min(header.width.saturating_sub(2)),
        height: header.height.saturating_sub(2).min(1),
    }
}

/// Button positions for the page ids that fit in the bar, scrolled so `cursor` is visible
pub fn page_button_areas(bar: Rect, page_count: usize, cursor: usize) -> Vec<(usize, Rect)> {
    if page_count == 0 || bar.height < 3 || bar.width < 3 {
        return Vec::new();
    }

    let button_width = page_count.to_string().len() + 2;
    let inner_width = bar.width.saturating_sub(2) as usize;
    let fit = ((inner_width + 1) / (button_width + 1)).max(1);

    let first = if cursor > fit { cursor - fit + 1 } else { 1 };
    let last = (first + fit - 1).min(page_count);

    (first..=last)
        .enumerate()
        .map(|(slot, page)| {
            let area = Rect {
                x: bar.x + 1 + (slot * (button_width + 1)) as u16,
                y: bar.y + 1,
                width: button_width as u16,
                height: 1,
            };
            (page, area)
        })
        .filter(|(_, area)| area.right() <= bar.right().saturating_sub(1))
        .collect()
}

/// Map a mouse position to the control under it
pub fn hit_test(area: Rect, app: &App, column: u16, row: u16) -> Option<Hit> {
    let layout = shell_layout(area, app.router.is_listing());
    let inside = |r: Rect| column >= r.x && column < r.right() && row >= r.y && row < r.bottom();

    if inside(home_button_area(layout.header)) {
        return Some(Hit::Home);
    }
    if app.router.is_listing() {
        return page_button_areas(layout.page_bar, app.navigator.page_count(), app.page_cursor)
            .into_iter()
            .find(|(_, r)| inside(*r))
            .map(|(page, _)| Hit::Page(page));
    }
    None
}

pub fn ui(f: &mut Frame, app: &App) {
    let palette = app.theme.palette();
    let layout = shell_layout(f.area(), app.router.is_listing());

    render_header(f, layout.header, app.router.path(), &palette);

    if app.router.is_listing() {
        let nodes = app.nodes();
        let range = app.navigator.visible_range();
        let title = if nodes.is_empty() {
            " Recommendations ".to_string()
        } else {
            format!(
                " Recommendations {}-{} of {} ",
                range.start + 1,
                range.end,
                app.navigator.total_posts()
            )
        };
        render_grid(
            f,
            layout.body,
            &nodes,
            &app.selection,
            &title,
            app.focus == Focus::Grid,
            &palette,
        );
        render_page_bar(f, layout.page_bar, app, &palette);
    } else {
        render_detail(f, layout.body, app.detail_game(), &palette);
    }

    render_footer(f, layout.footer, app, &palette);

    if app.help_visible {
        render_help_window(f, app.help_scroll, &palette);
    }
}

fn render_header(f: &mut Frame, area: Rect, path: &str, palette: &ThemePalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(palette.border));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let title = Line::from(vec![
        Span::styled(
            HOME_LABEL,
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            TITLE,
            Style::default()
                .fg(palette.text_primary)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(title), inner);

    // Current path, right-aligned in its own cell range so it keeps its own color
    let width = (path.chars().count() as u16).min(inner.width);
    let path_area = Rect {
        x: inner.right() - width,
        width,
        ..inner
    };
    let path = Paragraph::new(path.to_string()).style(Style::default().fg(palette.text_dim));
    f.render_widget(path, path_area);
}

fn render_page_bar(f: &mut Frame, area: Rect, app: &App, palette: &ThemePalette) {
    let focused = app.focus == Focus::PageBar;
    let border = if focused {
        palette.border_focused
    } else {
        palette.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(
            " Page {} of {} ",
            app.navigator.current_page(),
            app.navigator.page_count().max(1)
        ))
        .style(Style::default().fg(border));
    f.render_widget(block, area);

    let current = app.navigator.current_page();
    for (page, button) in page_button_areas(area, app.navigator.page_count(), app.page_cursor) {
        let mut style = if page == current {
            Style::default()
                .fg(palette.page_active)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(palette.page_inactive)
        };
        if focused && page == app.page_cursor {
            style = style.fg(palette.page_cursor).add_modifier(Modifier::UNDERLINED);
        }

        let label = Paragraph::new(format!("[{}]", page))
            .alignment(Alignment::Center)
            .style(style);
        f.render_widget(label, button);
    }
}

fn detail_lines<'a>(game: &'a GameRecord, palette: &ThemePalette) -> Vec<Line<'a>> {
    let field = |name: &'static str, value: String| {
        Line::from(vec![
            Span::styled(
                format!("{:<12}", name),
                Style::default().fg(palette.accent),
            ),
            Span::styled(value, Style::default().fg(palette.text_primary)),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            game.name.as_str(),
            Style::default()
                .fg(palette.primary)
                .add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];

    if let Some(rank) = game.rank {
        lines.push(field("Rank", format!("#{}", rank)));
    }
    if let Some(year) = game.year_published {
        lines.push(field("Published", year.to_string()));
    }
    if let Some(players) = game.players_label() {
        lines.push(field("Players", players));
    }
    if let Some(playtime) = game.playtime_label() {
        lines.push(field("Playtime", playtime));
    }
    if let Some(image) = &game.image_url {
        lines.push(field("Image", image.clone()));
    }
    if let Some(thumb) = &game.thumb_url {
        lines.push(field("Thumbnail", thumb.clone()));
    }
    if !game.description.is_empty() {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            game.description.as_str(),
            Style::default().fg(palette.text_secondary),
        )));
    }

    lines
}

fn render_detail(f: &mut Frame, area: Rect, game: Option<&GameRecord>, palette: &ThemePalette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Game ")
        .style(Style::default().fg(palette.border_focused));

    let content = match game {
        Some(game) => Paragraph::new(detail_lines(game, palette)),
        None => Paragraph::new("Game not found.").style(Style::default().fg(palette.error)),
    };

    f.render_widget(content.block(block).wrap(Wrap { trim: false }), area);
}

fn render_footer(f: &mut Frame, area: Rect, app: &App, palette: &ThemePalette) {
    let footer = if app.alert.active {
        let color = match app.alert.alert_type {
            AlertType::Error => palette.error,
            AlertType::Info => palette.accent,
        };
        Paragraph::new(app.alert.message.clone()).style(Style::default().fg(color))
    } else {
        let hint = if app.router.is_listing() {
            format!("{} · Press '?' for help", app.source_label)
        } else {
            "ESC/H: back to listing · Press '?' for help".to_string()
        };
        Paragraph::new(hint).style(Style::default().fg(palette.text_dim))
    };

    f.render_widget(footer, area);
}

fn render_help_window(f: &mut Frame, scroll: u16, palette: &ThemePalette) {
    // Centered overlay, 90% of the screen
    let area = f.area();
    let overlay_width = (area.width as f32 * 0.9) as u16;
    let overlay_height = (area.height as f32 * 0.9) as u16;
    let overlay_area = Rect {
        x: (area.width - overlay_width) / 2,
        y: (area.height - overlay_height) / 2,
        width: overlay_width,
        height: overlay_height,
    };

    f.render_widget(Clear, overlay_area);

    let help_block = Block::default()
        .borders(Borders::ALL)
        .title(" Help - Press '?' or ESC to close ")
        .style(Style::default().fg(palette.primary));

    let help_content = Paragraph::new(help_window::get_help_text())
        .block(help_block)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .style(Style::default().fg(palette.text_primary));

    f.render_widget(help_content, overlay_area);
}

/// Buffer contents as text, one line per row
#[cfg(test)]
pub(crate) fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
    let area = buffer.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
