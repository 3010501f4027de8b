use crate::config::{API, DF};
use crate::utils::AppInstant;

/// Debounced symbol lookup. Keystrokes update `query` immediately; the
/// actual search dispatch waits for the input to go quiet. All timing is
/// injected through `now` arguments so the controller never reads the clock
/// itself.
pub struct SymbolLookup {
    /// The raw query as typed, uppercased (ticker symbols are upper-case).
    pub query: String,
    /// Suggestions in backend relevance order.
    pub suggestions: Vec<String>,
    /// Whether the suggestion panel is open.
    pub show_suggestions: bool,

    // Trailing-edge debounce: instant of the last qualifying keystroke.
    dispatch_armed_at: Option<AppInstant>,
    // Pending panel close after input blur.
    close_armed_at: Option<AppInstant>,
}

impl SymbolLookup {
    pub fn new() -> Self {
        Self {
            query: String::new(),
            suggestions: Vec::new(),
            show_suggestions: false,
            dispatch_armed_at: None,
            close_armed_at: None,
        }
    }

    /// Stores the query and re-arms the debounce timer. A sub-minimum-length
    /// query clears suggestions and hides the panel synchronously, with no
    /// network round trip.
    pub fn on_query_change(&mut self, text: &str, now: AppInstant) {
        self.query = text.to_uppercase();

        if self.query.chars().count() < API.lookup.min_query_len {
            self.suggestions.clear();
            self.show_suggestions = false;
            self.dispatch_armed_at = None;
            return;
        }

        if DF.log_lookup {
            log::info!("lookup armed for '{}'", self.query);
        }
        self.dispatch_armed_at = Some(now);
    }

    /// Fires at most once per armed timer: returns the query to search for
    /// when the quiet period has elapsed uninterrupted.
    pub fn take_due_query(&mut self, now: AppInstant) -> Option<String> {
        let armed_at = self.dispatch_armed_at?;
        if now.duration_since(armed_at) < API.debounce() {
            return None;
        }

        self.dispatch_armed_at = None;
        if DF.log_lookup {
            log::info!("lookup fired for '{}'", self.query);
        }
        Some(self.query.clone())
    }

    /// Advances the blur-grace timer; closes the panel once it elapses.
    pub fn tick(&mut self, now: AppInstant) {
        if let Some(armed_at) = self.close_armed_at {
            if now.duration_since(armed_at) >= API.blur_grace() {
                self.close_armed_at = None;
                self.show_suggestions = false;
            }
        }
    }

    /// A settled search populates the list and opens the panel.
    pub fn apply_matches(&mut self, matches: Vec<String>) {
        if DF.log_lookup {
            log::info!("lookup got {} matches", matches.len());
        }
        self.suggestions = matches;
        self.show_suggestions = true;
    }

    /// Lookup is best-effort: a failed search reads as "no matches" rather
    /// than surfacing an error banner.
    pub fn apply_search_failure(&mut self) {
        self.suggestions.clear();
    }

    /// Closes the panel and hands the chosen symbol upward.
    pub fn select_suggestion(&mut self, symbol: &str) -> String {
        self.query = symbol.to_string();
        self.close_panel();
        self.dispatch_armed_at = None;
        symbol.to_string()
    }

    /// Submitting the raw query (Enter) behaves like selecting it.
    pub fn submit(&mut self) -> Option<String> {
        let symbol = self.query.trim().to_string();
        if symbol.is_empty() {
            return None;
        }
        self.close_panel();
        self.dispatch_armed_at = None;
        Some(symbol)
    }

    pub fn on_focus(&mut self) {
        self.close_armed_at = None;
        if self.query.chars().count() >= API.lookup.min_query_len {
            self.show_suggestions = true;
        }
    }

    /// Delays the close so a suggestion click registered just before the
    /// blur event is not lost.
    pub fn on_blur(&mut self, now: AppInstant) {
        self.close_armed_at = Some(now);
    }

    pub fn close_panel(&mut self) {
        self.show_suggestions = false;
        self.close_armed_at = None;
    }

    /// True while a debounce or blur-grace timer is armed, so the frame loop
    /// keeps repainting until they fire.
    pub fn has_pending_timers(&self) -> bool {
        self.dispatch_armed_at.is_some() || self.close_armed_at.is_some()
    }
}

impl Default for SymbolLookup {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn burst_of_keystrokes_dispatches_once_with_the_last_text() {
        let mut lookup = SymbolLookup::new();
        let t0 = AppInstant::now();

        lookup.on_query_change("A", t0);
        lookup.on_query_change("AA", t0 + ms(100));
        lookup.on_query_change("AAP", t0 + ms(200));

        // Quiet period restarts at every keystroke: 200ms after the last one
        // nothing is due yet.
        assert_eq!(lookup.take_due_query(t0 + ms(400)), None);

        // ...but 300ms after it, exactly one dispatch fires, with the final text.
        assert_eq!(lookup.take_due_query(t0 + ms(520)), Some("AAP".to_string()));
        assert_eq!(lookup.take_due_query(t0 + ms(900)), None);
    }

    #[test]
    fn queries_are_uppercased_immediately() {
        let mut lookup = SymbolLookup::new();
        lookup.on_query_change("aapl", AppInstant::now());
        assert_eq!(lookup.query, "AAPL");
    }

    #[test]
    fn clearing_the_field_hides_the_panel_and_disarms_the_timer() {
        let mut lookup = SymbolLookup::new();
        let t0 = AppInstant::now();

        lookup.on_query_change("TSLA", t0);
        lookup.apply_matches(vec!["TSLA".into()]);
        assert!(lookup.show_suggestions);

        lookup.on_query_change("", t0 + ms(50));
        assert!(lookup.suggestions.is_empty());
        assert!(!lookup.show_suggestions);
        // The armed dispatch died with the query.
        assert_eq!(lookup.take_due_query(t0 + ms(1_000)), None);
    }

    #[test]
    fn selecting_a_suggestion_closes_the_panel_and_emits_the_symbol() {
        let mut lookup = SymbolLookup::new();
        let t0 = AppInstant::now();

        lookup.on_query_change("AAP", t0);
        lookup.apply_matches(vec!["AAPL".into(), "AAPC".into()]);
        // Backend relevance order is preserved as-is.
        assert_eq!(lookup.suggestions, vec!["AAPL", "AAPC"]);

        let chosen = lookup.select_suggestion("AAPL");
        assert_eq!(chosen, "AAPL");
        assert_eq!(lookup.query, "AAPL");
        assert!(!lookup.show_suggestions);
        // Selection also swallows any pending dispatch.
        assert_eq!(lookup.take_due_query(t0 + ms(1_000)), None);
    }

    #[test]
    fn submit_trims_and_closes() {
        let mut lookup = SymbolLookup::new();
        lookup.on_query_change(" msft ", AppInstant::now());
        lookup.show_suggestions = true;

        assert_eq!(lookup.submit(), Some("MSFT".to_string()));
        assert!(!lookup.show_suggestions);

        lookup.on_query_change("", AppInstant::now());
        assert_eq!(lookup.submit(), None);
    }

    #[test]
    fn blur_closes_only_after_the_grace_period() {
        let mut lookup = SymbolLookup::new();
        let t0 = AppInstant::now();

        lookup.on_query_change("NVDA", t0);
        lookup.apply_matches(vec!["NVDA".into()]);
        lookup.on_blur(t0 + ms(10));

        lookup.tick(t0 + ms(110));
        assert!(lookup.show_suggestions, "still open inside the grace window");

        lookup.tick(t0 + ms(260));
        assert!(!lookup.show_suggestions, "closed once the grace elapsed");
    }

    #[test]
    fn refocus_cancels_a_pending_close() {
        let mut lookup = SymbolLookup::new();
        let t0 = AppInstant::now();

        lookup.on_query_change("AMD", t0);
        lookup.apply_matches(vec!["AMD".into()]);
        lookup.on_blur(t0);
        lookup.on_focus();

        lookup.tick(t0 + ms(500));
        assert!(lookup.show_suggestions);
    }

    #[test]
    fn search_failure_reads_as_no_matches() {
        let mut lookup = SymbolLookup::new();
        lookup.apply_matches(vec!["AAPL".into()]);
        lookup.apply_search_failure();
        assert!(lookup.suggestions.is_empty());
    }
}
