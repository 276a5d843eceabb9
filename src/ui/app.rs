use super::grid::{grid_nodes, GridNode, GridSelection};
use super::router::{Route, ViewRouter};
use super::theme::Theme;
use super::types::{Action, Alert, AlertType, Focus, Hit};
use crate::catalog::{GameRecord, RecommendationList};
use crate::pagination::{PageNavigator, PageSize};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct App {
    pub navigator: PageNavigator,
    pub router: ViewRouter,
    pub selection: GridSelection,
    pub focus: Focus,
    pub page_cursor: usize, // Page id under the page bar cursor
    pub help_visible: bool,
    pub help_scroll: u16,
    pub alert: Alert,
    pub theme: Theme,
    pub source_label: String,
}

impl App {
    pub fn new(list: RecommendationList, page_size: PageSize, theme: Theme, source_label: String) -> Self {
        let navigator = PageNavigator::new(list, page_size);
        let mut selection = GridSelection::default();
        selection.reset(&grid_nodes(navigator.visible_slice()));

        Self {
            navigator,
            router: ViewRouter::new(),
            selection,
            focus: Focus::Grid,
            page_cursor: 1,
            help_visible: false,
            help_scroll: 0,
            alert: Alert::new(),
            theme,
            source_label,
        }
    }

    /// Display nodes for the current page
    pub fn nodes(&self) -> Vec<GridNode> {
        grid_nodes(self.navigator.visible_slice())
    }

    /// Record shown by the detail route, if it still exists
    pub fn detail_game(&self) -> Option<&GameRecord> {
        match self.router.route() {
            Route::SingleGameDetail(id) => self.navigator.list().find(id),
            Route::Listing => None,
        }
    }

    pub fn go_to_page(&mut self, page: usize) {
        let previous = self.navigator.current_page();
        match self.navigator.go_to_page(page) {
            Ok(()) => {
                self.page_cursor = page;
                let nodes = self.nodes();
                if page != previous {
                    self.selection.reset(&nodes);
                } else {
                    self.selection.sync(&nodes);
                }
                self.alert.close();
            }
            Err(e) => self.alert.show(AlertType::Error, e.to_string()),
        }
    }

    pub fn open_highlighted(&mut self) {
        if let Some(key) = self.selection.key().cloned() {
            self.router.select_game(key);
            self.alert.close();
        }
    }

    pub fn home(&mut self) {
        self.router.home();
        let nodes = self.nodes();
        self.selection.sync(&nodes);
    }

    /// Take a new list from the source, keeping page and highlight where possible
    pub fn replace_list(&mut self, list: RecommendationList) {
        self.navigator.replace_list(list);
        self.page_cursor = self.navigator.current_page();
        let nodes = self.nodes();
        self.selection.sync(&nodes);
        if self.detail_game().is_none() {
            self.router.home();
        }
        self.alert.show(
            AlertType::Info,
            format!("Loaded {} recommendations", self.navigator.total_posts()),
        );
    }

    fn move_page_cursor(&mut self, delta: isize) {
        let last = self.navigator.page_count().max(1);
        self.page_cursor = self.page_cursor.saturating_add_signed(delta).clamp(1, last);
    }

    pub fn handle_click(&mut self, hit: Hit) {
        match hit {
            Hit::Home => self.home(),
            Hit::Page(page) => {
                if self.router.is_listing() {
                    self.go_to_page(page);
                }
            }
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        if self.help_visible {
            match (key.code, key.modifiers) {
                (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) | (KeyCode::Esc, _) => {
                    self.help_visible = false;
                    self.help_scroll = 0;
                }
                (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
                    self.help_scroll = self.help_scroll.saturating_add(1);
                }
                (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
                    self.help_scroll = self.help_scroll.saturating_sub(1);
                }
                _ => {}
            }
            return Action::None;
        }

        // Keys that work on every screen
        match (key.code, key.modifiers) {
            (KeyCode::Char('?'), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.help_visible = true;
                self.help_scroll = 0;
                return Action::None;
            }
            (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                return Action::Exit;
            }
            (KeyCode::Char('H'), KeyModifiers::NONE | KeyModifiers::SHIFT) | (KeyCode::Home, _) => {
                self.home();
                return Action::None;
            }
            (KeyCode::Char('t'), KeyModifiers::NONE) => {
                self.theme = self.theme.next();
                return Action::ThemeChanged;
            }
            (KeyCode::Char('r'), KeyModifiers::CONTROL) => return Action::Reload,
            _ => {}
        }

        if !self.router.is_listing() {
            if key.code == KeyCode::Esc {
                self.home();
            }
            return Action::None;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => return Action::Exit,
            (KeyCode::Tab, _) | (KeyCode::BackTab, _) => self.focus.toggle(),
            (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
                if let Some(page) = c.to_digit(10) {
                    self.go_to_page(page as usize);
                }
            }
            _ => match self.focus {
                Focus::Grid => self.handle_grid_key(key),
                Focus::PageBar => self.handle_page_bar_key(key),
            },
        }

        Action::None
    }

    fn handle_grid_key(&mut self, key: KeyEvent) {
        let nodes = self.nodes();
        match (key.code, key.modifiers) {
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => self.selection.next(&nodes),
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => self.selection.previous(&nodes),
            (KeyCode::Enter, _) => self.open_highlighted(),
            _ => {}
        }
    }

    fn handle_page_bar_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Left, _) | (KeyCode::Char('h'), KeyModifiers::NONE) => self.move_page_cursor(-1),
            (KeyCode::Right, _) | (KeyCode::Char('l'), KeyModifiers::NONE) => self.move_page_cursor(1),
            (KeyCode::Enter, _) => self.go_to_page(self.page_cursor),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::GameId;

    fn app_with(count: usize, per_page: usize) -> App {
        let games = (0..count)
            .map(|i| GameRecord::new(format!("G{}", i), format!("Game {}", i)))
            .collect();
        App::new(
            RecommendationList::new(games).unwrap(),
            PageSize::new(per_page).unwrap(),
            Theme::Default,
            "test".to_string(),
        )
    }

    fn press(app: &mut App, code: KeyCode) -> Action {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn digit_jumps_to_page_and_highlights_first_row() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Char('3'));

        assert_eq!(app.navigator.current_page(), 3);
        assert_eq!(app.page_cursor, 3);
        assert_eq!(app.selection.key(), Some(&GameId::from("G20")));
    }

    #[test]
    fn out_of_range_digit_shows_error_and_keeps_page() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Char('9'));

        assert_eq!(app.navigator.current_page(), 2);
        assert!(app.alert.active);
        assert_eq!(app.alert.alert_type, AlertType::Error);
        assert!(app.alert.message.contains("out of range"));
    }

    #[test]
    fn same_page_keeps_highlight() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.selection.key(), Some(&GameId::from("G1")));
    }

    #[test]
    fn page_bar_cursor_moves_and_confirms() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::PageBar);

        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.page_cursor, 3);
        // The cursor alone does not change the page
        assert_eq!(app.navigator.current_page(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.navigator.current_page(), 3);

        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.page_cursor, 1);
    }

    #[test]
    fn select_game_then_home_round_trips() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.router.route(), &Route::SingleGameDetail(GameId::from("G1")));
        assert_eq!(app.detail_game().map(|g| g.name.as_str()), Some("Game 1"));

        press(&mut app, KeyCode::Home);
        assert_eq!(app.router.route(), &Route::Listing);
        assert_eq!(app.selection.key(), Some(&GameId::from("G1")));
    }

    #[test]
    fn escape_goes_home_from_detail_and_exits_from_listing() {
        let mut app = app_with(5, 10);
        press(&mut app, KeyCode::Enter);
        assert!(!app.router.is_listing());

        assert_eq!(press(&mut app, KeyCode::Esc), Action::None);
        assert!(app.router.is_listing());
        assert_eq!(press(&mut app, KeyCode::Esc), Action::Exit);
    }

    #[test]
    fn page_keys_are_ignored_on_detail() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.current_page(), 1);
    }

    #[test]
    fn help_overlay_swallows_keys() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Char('?'));
        assert!(app.help_visible);

        assert_eq!(press(&mut app, KeyCode::Char('q')), Action::None);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.navigator.current_page(), 1);

        press(&mut app, KeyCode::Esc);
        assert!(!app.help_visible);
    }

    #[test]
    fn theme_key_cycles_theme() {
        let mut app = app_with(1, 10);
        assert_eq!(press(&mut app, KeyCode::Char('t')), Action::ThemeChanged);
        assert_eq!(app.theme, Theme::Nord);
    }

    #[test]
    fn ctrl_r_requests_reload() {
        let mut app = app_with(1, 10);
        let action = app.handle_key(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(action, Action::Reload);
    }

    #[test]
    fn clicks_change_page_and_go_home() {
        let mut app = app_with(25, 10);
        app.handle_click(Hit::Page(2));
        assert_eq!(app.navigator.current_page(), 2);

        press(&mut app, KeyCode::Enter);
        app.handle_click(Hit::Page(3));
        assert_eq!(app.navigator.current_page(), 2);

        app.handle_click(Hit::Home);
        assert!(app.router.is_listing());
    }

    #[test]
    fn replacing_list_drops_detail_of_missing_game() {
        let mut app = app_with(25, 10);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Enter);

        let games = (0..5).map(|i| GameRecord::new(format!("G{}", i), "Other")).collect();
        app.replace_list(RecommendationList::new(games).unwrap());

        assert!(app.router.is_listing());
        assert_eq!(app.navigator.current_page(), 1);
        assert_eq!(app.page_cursor, 1);
        assert_eq!(app.selection.key(), Some(&GameId::from("G0")));
    }
}
