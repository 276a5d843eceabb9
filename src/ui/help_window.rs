pub fn get_help_text() -> &'static str {
    r#"
╔════════════════════════════════════════════════════════════════╗
║              BGRECS - Board Game Recommendations               ║
║                       Keyboard Shortcuts                       ║
╚════════════════════════════════════════════════════════════════╝

LISTING
  ↑ / k              Move up in the list
  ↓ / j              Move down in the list
  ENTER              Open the highlighted game
  TAB                Switch focus between list and page bar

PAGES
  1 - 9              Jump to that page
  ← / h  → / l       Move the page bar cursor (page bar focused)
  ENTER              Go to the page under the cursor
  Mouse click        Go to the clicked page

NAVIGATION
  H / Home           Back to the listing
  ESC                Back to the listing, or quit from the listing
  q                  Quit

DATA
  Ctrl+R             Reload recommendations from the source

APPEARANCE
  t                  Cycle theme (saved to settings)

HELP
  ?                  Show/hide this help screen
"#
}
