//! TUI application state and logic.

use eventdeck_events::{CategorySelection, EventCatalog, EventFilter};
use eventdeck_models::Event;
use eventdeck_toast::ToastController;
use tracing::{debug, info};

use super::Options;
use crate::DEMO_MESSAGE;

/// Which widget receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Moving between cards
    #[default]
    Cards,
    /// Typing into the search box
    Search,
}

/// Actions offered by the navigation bar.
///
/// None of them is implemented; each raises the demo notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    SignIn,
    CreateEvent,
    Subscribe,
}

impl NavAction {
    /// Every action, in navbar order.
    pub const ALL: [NavAction; 3] = [NavAction::SignIn, NavAction::CreateEvent, NavAction::Subscribe];

    /// Navbar label.
    pub fn label(&self) -> &'static str {
        match self {
            NavAction::SignIn => "Sign in",
            NavAction::CreateEvent => "Create event",
            NavAction::Subscribe => "Subscribe",
        }
    }

    /// Key that triggers the action from the card grid.
    pub fn key(&self) -> char {
        match self {
            NavAction::SignIn => 'i',
            NavAction::CreateEvent => 'n',
            NavAction::Subscribe => 'u',
        }
    }

    /// Action bound to `c`, if any.
    pub fn from_key(c: char) -> Option<Self> {
        Self::ALL.into_iter().find(|a| a.key() == c)
    }
}

/// TUI application state.
pub struct App {
    // Data
    /// The fixed event collection
    pub catalog: EventCatalog,
    /// Entries of the filter row ("All" first)
    pub filter_options: Vec<CategorySelection>,

    // UI State
    /// Index into `filter_options`
    pub category_index: usize,
    /// Current search text
    pub search: String,
    /// Cursor position in the search text, in characters
    pub cursor_pos: usize,
    /// Widget receiving input
    pub focus: Focus,
    /// Index of the selected card among the visible events
    pub selected: usize,
    /// Notification overlay
    pub toast: ToastController,

    // Runtime
    /// Whether the app should quit
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance.
    pub fn new(catalog: EventCatalog, toast: ToastController, options: &Options) -> Self {
        let mut filter_options = catalog.filter_options();
        let wanted = CategorySelection::parse(&options.category);

        // A category the dataset does not have is still selectable; it
        // just lists nothing.
        let category_index = match filter_options.iter().position(|o| *o == wanted) {
            Some(index) => index,
            None => {
                filter_options.push(wanted);
                filter_options.len() - 1
            }
        };

        Self {
            catalog,
            filter_options,
            category_index,
            search: options.search.clone(),
            cursor_pos: options.search.chars().count(),
            focus: Focus::Cards,
            selected: 0,
            toast,
            should_quit: false,
        }
    }

    /// The selected filter-row entry.
    pub fn selected_category(&self) -> &CategorySelection {
        &self.filter_options[self.category_index]
    }

    /// The filter built from the current UI state.
    pub fn filter(&self) -> EventFilter {
        EventFilter::new()
            .with_category(self.selected_category().clone())
            .with_search(self.search.clone())
    }

    /// Events to render, recomputed from the current state on every call.
    pub fn visible_events(&self) -> Vec<&Event> {
        self.catalog.list(&self.filter())
    }

    /// The event under the card cursor.
    pub fn selected_event(&self) -> Option<&Event> {
        self.visible_events().get(self.selected).copied()
    }

    /// Select a filter-row entry by index.
    pub fn select_category(&mut self, index: usize) {
        if index < self.filter_options.len() && index != self.category_index {
            self.category_index = index;
            debug!(category = %self.selected_category(), "category selected");
            self.clamp_selection();
        }
    }

    /// Move to the next filter-row entry, wrapping around.
    pub fn next_category(&mut self) {
        let next = (self.category_index + 1) % self.filter_options.len();
        self.select_category(next);
    }

    /// Move to the previous filter-row entry, wrapping around.
    pub fn prev_category(&mut self) {
        let len = self.filter_options.len();
        let prev = (self.category_index + len - 1) % len;
        self.select_category(prev);
    }

    /// Move the card cursor down one card.
    pub fn select_next(&mut self) {
        let count = self.visible_events().len();
        if self.selected + 1 < count {
            self.selected += 1;
        }
    }

    /// Move the card cursor up one card.
    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Move the card cursor by `delta` cards, staying in bounds.
    pub fn select_by(&mut self, delta: isize) {
        let count = self.visible_events().len();
        if count == 0 {
            self.selected = 0;
            return;
        }
        let target = self.selected as isize + delta;
        self.selected = target.clamp(0, count as isize - 1) as usize;
    }

    /// Keep the card cursor inside the visible list after a filter change.
    pub(super) fn clamp_selection(&mut self) {
        let count = self.visible_events().len();
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// The "on interaction" hook shared by the navbar and RSVP buttons.
    pub fn handle_interaction(&mut self) {
        self.toast.show(DEMO_MESSAGE);
    }

    /// Run a navigation bar action.
    pub fn nav(&mut self, action: NavAction) {
        info!(action = action.label(), "navbar action");
        self.handle_interaction();
    }

    /// RSVP to the selected event.
    pub fn rsvp_selected(&mut self) {
        if let Some(event) = self.selected_event() {
            info!(event_id = %event.id, title = %event.title, "rsvp");
            self.handle_interaction();
        }
    }

    /// Close the notification.
    pub fn dismiss_toast(&mut self) {
        self.toast.dismiss();
    }

    /// Periodic work between input events.
    pub fn tick(&mut self) {
        self.toast.poll();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::test_support::{settle, test_app};
    use std::time::Duration;
    use tokio::time::sleep;

    fn ids(app: &App) -> Vec<String> {
        app.visible_events().iter().map(|e| e.id.to_string()).collect()
    }

    #[tokio::test(start_paused = true)]
    async fn test_defaults_show_everything() {
        let app = test_app(Options::default());
        assert_eq!(app.selected_category(), &CategorySelection::All);
        assert_eq!(app.visible_events().len(), 8);
        assert!(!app.toast.is_visible());
        assert_eq!(app.focus, Focus::Cards);
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_filter_from_options() {
        let app = test_app(Options {
            category: "networking".into(),
            search: "dinner".into(),
            ..Options::default()
        });
        assert_eq!(app.selected_category().label(), "Networking");
        assert_eq!(app.cursor_pos, 6);
        assert_eq!(ids(&app), vec!["8"]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_initial_category_lists_nothing() {
        let app = test_app(Options {
            category: "Hackathon".into(),
            ..Options::default()
        });
        assert_eq!(app.selected_category().label(), "Hackathon");
        assert!(app.visible_events().is_empty());
        assert!(app.selected_event().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_category_cycling_wraps() {
        let mut app = test_app(Options::default());

        app.next_category();
        assert_eq!(app.selected_category().label(), "Conference");
        assert_eq!(ids(&app), vec!["1", "5"]);

        app.next_category();
        app.next_category();
        app.next_category();
        assert_eq!(app.selected_category(), &CategorySelection::All);

        app.prev_category();
        assert_eq!(app.selected_category().label(), "Networking");
    }

    #[tokio::test(start_paused = true)]
    async fn test_selection_clamped_after_filter_change() {
        let mut app = test_app(Options::default());
        app.select_by(7);
        assert_eq!(app.selected, 7);

        // Workshop has three events
        app.select_category(2);
        assert_eq!(app.selected, 2);
        assert_eq!(app.selected_event().unwrap().id.as_str(), "7");
    }

    #[tokio::test(start_paused = true)]
    async fn test_card_navigation_bounds() {
        let mut app = test_app(Options::default());
        app.select_prev();
        assert_eq!(app.selected, 0);

        app.select_by(100);
        assert_eq!(app.selected, 7);
        app.select_next();
        assert_eq!(app.selected, 7);

        app.select_by(-3);
        assert_eq!(app.selected, 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_rsvp_shows_demo_toast() {
        let mut app = test_app(Options::default());
        app.rsvp_selected();
        assert!(app.toast.is_visible());
        assert_eq!(app.toast.message(), Some(DEMO_MESSAGE));
    }

    #[tokio::test(start_paused = true)]
    async fn test_rsvp_without_cards_does_nothing() {
        let mut app = test_app(Options {
            search: "zzz".into(),
            ..Options::default()
        });
        app.rsvp_selected();
        assert!(!app.toast.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_hides_on_tick_after_delay() {
        let mut app = test_app(Options::default());
        app.nav(NavAction::Subscribe);

        sleep(Duration::from_millis(4999)).await;
        settle().await;
        app.tick();
        assert!(app.toast.is_visible());

        sleep(Duration::from_millis(1)).await;
        settle().await;
        app.tick();
        assert!(!app.toast.is_visible());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismissed_toast_stays_hidden() {
        let mut app = test_app(Options::default());
        app.nav(NavAction::SignIn);

        sleep(Duration::from_millis(1000)).await;
        app.dismiss_toast();
        assert!(!app.toast.is_visible());

        sleep(Duration::from_millis(4500)).await;
        settle().await;
        app.tick();
        assert!(!app.toast.is_visible());
    }

    #[test]
    fn test_nav_action_keys() {
        assert_eq!(NavAction::from_key('i'), Some(NavAction::SignIn));
        assert_eq!(NavAction::from_key('n'), Some(NavAction::CreateEvent));
        assert_eq!(NavAction::from_key('u'), Some(NavAction::Subscribe));
        assert_eq!(NavAction::from_key('z'), None);
    }
}
