use crate::catalog::GameId;

pub const LISTING_PATH: &str = "/";
pub const SINGLE_GAME_PATH: &str = "/single-game";

/// Screen currently shown by the shell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Listing,
    SingleGameDetail(GameId),
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Listing => LISTING_PATH,
            Route::SingleGameDetail(_) => SINGLE_GAME_PATH,
        }
    }
}

/// Listing / detail state machine. Home is reachable from everywhere.
#[derive(Debug, Clone)]
pub struct ViewRouter {
    route: Route,
}

impl ViewRouter {
    pub fn new() -> Self {
        Self {
            route: Route::Listing,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn path(&self) -> &'static str {
        self.route.path()
    }

    pub fn is_listing(&self) -> bool {
        self.route == Route::Listing
    }

    /// Only valid from the listing; ignored on the detail screen
    pub fn select_game(&mut self, id: GameId) {
        if !self.is_listing() {
            log::debug!("ignoring selection of {} on {}", id, self.path());
            return;
        }
        log::info!("navigate {} -> {} ({})", self.path(), SINGLE_GAME_PATH, id);
        self.route = Route::SingleGameDetail(id);
    }

    pub fn home(&mut self) {
        if !self.is_listing() {
            log::info!("navigate {} -> {}", self.path(), LISTING_PATH);
        }
        self.route = Route::Listing;
    }
}

impl Default for ViewRouter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_listing() {
        let router = ViewRouter::new();
        assert_eq!(router.route(), &Route::Listing);
        assert_eq!(router.path(), "/");
    }

    #[test]
    fn select_then_home_round_trips() {
        let mut router = ViewRouter::new();

        router.select_game(GameId::from("G42"));
        assert_eq!(router.route(), &Route::SingleGameDetail(GameId::from("G42")));
        assert_eq!(router.path(), "/single-game");

        router.home();
        assert_eq!(router.route(), &Route::Listing);
    }

    #[test]
    fn selecting_from_detail_keeps_current_game() {
        let mut router = ViewRouter::new();
        router.select_game(GameId::from("A"));
        router.select_game(GameId::from("B"));

        assert_eq!(router.route(), &Route::SingleGameDetail(GameId::from("A")));
        assert_eq!(router.path(), "/single-game");
    }

    #[test]
    fn home_from_listing_stays_on_listing() {
        let mut router = ViewRouter::new();
        router.home();
        router.home();
        assert!(router.is_listing());
    }
}
