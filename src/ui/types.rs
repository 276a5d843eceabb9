/// Which part of the listing receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Grid,
    PageBar,
}

impl Focus {
    pub fn toggle(&mut self) {
        *self = match self {
            Focus::Grid => Focus::PageBar,
            Focus::PageBar => Focus::Grid,
        };
    }
}

/// What the event loop must do after the app handled an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    Exit,
    ThemeChanged,
    Reload,
}

/// Clickable regions of the shell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    Home,
    Page(usize),
}

#[derive(Debug, Clone, PartialEq)]
pub enum AlertType {
    Error,
    Info,
}

/// One-line message shown in the footer until the next successful action
#[derive(Debug, Clone)]
pub struct Alert {
    pub active: bool,
    pub alert_type: AlertType,
    pub message: String,
}

impl Alert {
    pub fn new() -> Self {
        Self {
            active: false,
            alert_type: AlertType::Info,
            message: String::new(),
        }
    }

    pub fn show(&mut self, alert_type: AlertType, message: String) {
        self.active = true;
        self.alert_type = alert_type;
        self.message = message;
    }

    pub fn close(&mut self) {
        self.active = false;
        self.message.clear();
    }
}

impl Default for Alert {
    fn default() -> Self {
        Self::new()
    }
}
