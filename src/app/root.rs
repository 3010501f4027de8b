use eframe::egui::{CentralPanel, Context, ScrollArea};
use eframe::{Frame, Storage};
use serde::{Deserialize, Serialize};

use crate::Cli;
use crate::app::SymbolLookup;
use crate::config::{API, DF};
use crate::data::{AsyncState, Dispatcher, HttpBackend, RequestTracker, SharedBackend};
use crate::models::{
    ChartSeries, PredictRequest, PredictionResult, SearchMatches, StockData, Timeframe,
    TopStocksReport,
};
use crate::ui::{UI_TEXT, utils::setup_custom_visuals};
use crate::utils::AppInstant;

fn http_backend(base_url: &str) -> SharedBackend {
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::sync::Arc::new(HttpBackend::new(base_url))
    }
    #[cfg(target_arch = "wasm32")]
    {
        std::rc::Rc::new(HttpBackend::new(base_url))
    }
}

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardApp {
    /// Thin persisted user intent: the symbol to restore next session.
    persisted_symbol: String,

    #[serde(skip)]
    pub(crate) selected_symbol: String,
    #[serde(skip)]
    pub(crate) lookup: SymbolLookup,
    #[serde(skip)]
    pub(crate) dispatcher: Dispatcher,
    #[serde(skip)]
    pub(crate) backend: SharedBackend,

    /// Stock payloads keyed by symbol. Doubles as the session cache.
    #[serde(skip)]
    pub(crate) stocks: RequestTracker<String, StockData>,
    /// Search results keyed by query text.
    #[serde(skip)]
    pub(crate) searches: RequestTracker<String, SearchMatches>,
    /// Predictions keyed by horizon; the three cards are fully independent.
    #[serde(skip)]
    pub(crate) predictions: RequestTracker<Timeframe, PredictionResult>,
    /// The single precomputed top-picks slot.
    #[serde(skip)]
    pub(crate) top_picks: RequestTracker<(), TopStocksReport>,

    /// Last-settled stock payload, kept on screen while a refresh is in flight.
    #[serde(skip)]
    pub(crate) shown_stock: Option<StockData>,
    /// Chart-ready view of `shown_stock`, rebuilt on every raw arrival.
    #[serde(skip)]
    pub(crate) chart: ChartSeries,
    /// Last successful top-picks report; survives a failed refresh.
    #[serde(skip)]
    pub(crate) top_report: Option<TopStocksReport>,
}

impl Default for DashboardApp {
    fn default() -> Self {
        Self {
            persisted_symbol: API.default_symbol.to_string(),
            selected_symbol: API.default_symbol.to_string(),
            lookup: SymbolLookup::new(),
            dispatcher: Dispatcher::new(),
            backend: http_backend(API.default_base_url),
            stocks: RequestTracker::new(),
            searches: RequestTracker::new(),
            predictions: RequestTracker::new(),
            top_picks: RequestTracker::new(),
            shown_stock: None,
            chart: ChartSeries::Empty,
            top_report: None,
        }
    }
}

impl DashboardApp {
    pub fn new(cc: &eframe::CreationContext<'_>, args: Cli) -> Self {
        let mut app: DashboardApp = if let Some(storage) = cc.storage {
            eframe::get_value(storage, eframe::APP_KEY).unwrap_or_default()
        } else {
            Self::default()
        };

        setup_custom_visuals(&cc.egui_ctx);

        app.backend = http_backend(&args.api_base);
        app.selected_symbol = app.persisted_symbol.clone();

        // Startup fetches: the restored symbol plus the precomputed top picks.
        app.fetch_stock(app.selected_symbol.clone());
        app.refresh_top_picks();

        app
    }

    // --- Imperative entry points ---

    /// A suggestion click or a raw submit lands here with the chosen symbol.
    pub fn select_symbol(&mut self, symbol: String) {
        if DF.log_selection {
            log::info!("symbol selected: {}", symbol);
        }
        self.selected_symbol = symbol.clone();
        self.fetch_stock(symbol);
    }

    pub fn run_prediction(&mut self, timeframe: Timeframe) {
        let backend = self.backend.clone();
        let request = PredictRequest {
            symbol: self.selected_symbol.clone(),
            timeframe,
            current_price: self.shown_stock.as_ref().map(|s| s.info.current_price),
        };
        self.predictions.run(
            &self.dispatcher,
            timeframe,
            UI_TEXT.predict_failed,
            async move { backend.predict(request).await },
        );
    }

    pub fn refresh_top_picks(&mut self) {
        let backend = self.backend.clone();
        self.top_picks.run(
            &self.dispatcher,
            (),
            UI_TEXT.top_picks_failed,
            async move { backend.top_stocks().await },
        );
    }

    fn fetch_stock(&mut self, symbol: String) {
        let backend = self.backend.clone();
        let key = symbol.clone();
        self.stocks
            .run(&self.dispatcher, key, UI_TEXT.fetch_failed, async move {
                backend.stock_data(&symbol).await
            });
    }

    fn run_search(&mut self, query: String) {
        let backend = self.backend.clone();
        let key = query.clone();
        self.searches
            .run(&self.dispatcher, key, UI_TEXT.search_failed, async move {
                backend.search_stocks(&query).await
            });
    }

    // --- Frame-loop plumbing ---

    /// Fires due timers and applies every settled request. All tracker
    /// mutation happens here, between frames.
    pub(crate) fn pump(&mut self, now: AppInstant) {
        if let Some(query) = self.lookup.take_due_query(now) {
            self.run_search(query);
        }
        self.lookup.tick(now);

        // Settle order decides what the panel shows: the last response to
        // arrive wins, exactly like the source behavior.
        for key in self.searches.poll() {
            match self.searches.state(&key) {
                AsyncState::Ready(found) => self.lookup.apply_matches(found.matches.clone()),
                AsyncState::Failed(_) => self.lookup.apply_search_failure(),
                _ => {}
            }
        }

        for key in self.stocks.poll() {
            // Results for a symbol the user has already navigated away from
            // stay cached in the tracker but never touch the display.
            if key != self.selected_symbol {
                continue;
            }
            match self.stocks.state(&key) {
                AsyncState::Ready(stock) => {
                    self.chart = ChartSeries::build(&stock.data, stock.support_resistance);
                    self.shown_stock = Some(stock.clone());
                }
                AsyncState::Failed(_) => {
                    self.shown_stock = None;
                    self.chart = ChartSeries::Empty;
                }
                _ => {}
            }
        }

        self.predictions.poll();

        for _ in self.top_picks.poll() {
            if let AsyncState::Ready(report) = self.top_picks.state(&()) {
                self.top_report = Some(report.clone());
            }
        }
    }

    fn any_busy(&self) -> bool {
        self.lookup.has_pending_timers()
            || self.stocks.any_loading()
            || self.searches.any_loading()
            || self.predictions.any_loading()
            || self.top_picks.any_loading()
    }
}

impl eframe::App for DashboardApp {
    fn save(&mut self, storage: &mut dyn Storage) {
        // Persist user intent, not runtime state.
        self.persisted_symbol = self.selected_symbol.clone();
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    fn update(&mut self, ctx: &Context, _frame: &mut Frame) {
        let now = AppInstant::now();
        self.pump(now);

        self.render_header(ctx);

        CentralPanel::default().show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                self.render_search_card(ui, now);
                ui.add_space(12.0);
                self.render_stock_section(ui);
                ui.add_space(12.0);
                self.render_predict_panel(ui);
                ui.add_space(12.0);
                self.render_top_list(ui);
                ui.add_space(12.0);
                self.render_footer(ui);
            });
        });

        // Keep frames coming while timers or requests are pending, so
        // debounce deadlines fire without waiting for the next input event.
        if self.any_busy() {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::ApiError;
    use std::time::Duration;

    fn pump_until(app: &mut DashboardApp, mut done: impl FnMut(&DashboardApp) -> bool) {
        for _ in 0..500 {
            app.pump(AppInstant::now());
            if done(app) {
                return;
            }
            std::thread::sleep(Duration::from_millis(10));
        }
        panic!("timed out waiting for condition");
    }

    #[test]
    fn search_then_select_closes_the_panel_and_fetches_the_symbol() {
        let mut app = DashboardApp::default();
        let t0 = AppInstant::now();

        app.lookup.on_query_change("aap", t0);
        assert_eq!(app.lookup.query, "AAP");

        // The quiet period elapses; exactly one query is due.
        let due = app
            .lookup
            .take_due_query(t0 + Duration::from_millis(350))
            .expect("debounce should have fired");
        assert_eq!(due, "AAP");

        // Stub the backend response at the tracker boundary.
        app.searches
            .run(&app.dispatcher, due, UI_TEXT.search_failed, async {
                Ok(SearchMatches {
                    query: "AAP".into(),
                    matches: vec!["AAPL".into(), "AAPC".into()],
                })
            });

        pump_until(&mut app, |app| !app.lookup.suggestions.is_empty());
        assert_eq!(app.lookup.suggestions, vec!["AAPL", "AAPC"]);
        assert!(app.lookup.show_suggestions);

        let symbol = app.lookup.select_suggestion("AAPL");
        app.select_symbol(symbol);

        assert!(!app.lookup.show_suggestions);
        assert_eq!(app.selected_symbol, "AAPL");
        // The data fetch for the chosen symbol is in flight immediately.
        assert!(app.stocks.state(&"AAPL".to_string()).is_loading());
    }

    #[test]
    fn failed_search_softens_to_no_matches() {
        let mut app = DashboardApp::default();
        app.lookup.apply_matches(vec!["STALE".into()]);

        app.searches.run(
            &app.dispatcher,
            "Q".to_string(),
            UI_TEXT.search_failed,
            async {
                Err(ApiError::Backend {
                    status: 500,
                    detail: "".into(),
                })
            },
        );

        pump_until(&mut app, |app| {
            !app.searches.state(&"Q".to_string()).is_loading()
        });
        // Suggestions cleared, no banner anywhere; the Failed state is still
        // observable in the tracker with the generic fallback.
        assert!(app.lookup.suggestions.is_empty());
        assert_eq!(
            app.searches.state(&"Q".to_string()).error(),
            Some(UI_TEXT.search_failed)
        );
    }

    #[test]
    fn concurrent_predictions_fail_independently_with_the_fallback() {
        // No backend is listening, so both requests settle as transport
        // failures, which must surface as the generic message, never a panic.
        let mut app = DashboardApp::default();

        app.run_prediction(Timeframe::H1);
        app.run_prediction(Timeframe::D1);
        assert!(app.predictions.state(&Timeframe::H1).is_loading());
        assert!(app.predictions.state(&Timeframe::D1).is_loading());
        assert!(matches!(
            app.predictions.state(&Timeframe::W1),
            AsyncState::Idle
        ));

        pump_until(&mut app, |app| {
            !app.predictions.state(&Timeframe::H1).is_loading()
                && !app.predictions.state(&Timeframe::D1).is_loading()
        });
        assert_eq!(
            app.predictions.state(&Timeframe::H1).error(),
            Some(UI_TEXT.predict_failed)
        );
        assert_eq!(
            app.predictions.state(&Timeframe::D1).error(),
            Some(UI_TEXT.predict_failed)
        );
    }

    #[test]
    fn stale_stock_results_never_touch_the_display() {
        let mut app = DashboardApp::default();
        app.selected_symbol = "MSFT".to_string();

        // A late result for a symbol the user already left behind.
        app.stocks.run(
            &app.dispatcher,
            "AAPL".to_string(),
            UI_TEXT.fetch_failed,
            async {
                Err(ApiError::Backend {
                    status: 500,
                    detail: "old failure".into(),
                })
            },
        );

        pump_until(&mut app, |app| {
            !app.stocks.state(&"AAPL".to_string()).is_loading()
        });
        // The failure is recorded under its own key but the shown state for
        // MSFT is untouched.
        assert_eq!(
            app.stocks.state(&"AAPL".to_string()).error(),
            Some("old failure")
        );
        assert_eq!(app.chart, ChartSeries::Empty);
        assert!(app.shown_stock.is_none());
    }
}
