//! Main application entry point

use std::sync::Arc;

use anyhow::Result;
use eframe::egui::{self, Context};
use tracing::info;

use pager_core::{PagerContext, PagerEngine, PagerSubscriber};
use pager_ui::{apply_theme, PagerPanel, Theme};

/// Logs every page transition
struct TransitionLogger;

impl PagerSubscriber for TransitionLogger {
    fn on_page_change(&self, context: &PagerContext) {
        info!(
            "moved to page {} of {}",
            context.current_page, context.total_pages
        );
    }
}

/// Main application state
struct PagerDemoApp {
    /// Pager engine shared with the strip widget
    engine: Arc<PagerEngine>,

    /// The pager strip
    pager_panel: PagerPanel,

    /// Keeps the logging subscriber alive (the engine holds it weakly)
    _logger: Arc<TransitionLogger>,

    /// Page count edited through the demo control
    total_pages: usize,
}

impl PagerDemoApp {
    /// Page count the demo starts with
    const DEFAULT_TOTAL_PAGES: usize = 20;

    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Setup custom theme
        apply_theme(&cc.egui_ctx, &Theme::default());

        let engine =
            Arc::new(PagerEngine::new(Self::DEFAULT_TOTAL_PAGES).expect("non-zero page count"));

        let logger = Arc::new(TransitionLogger);
        engine.add_subscriber(logger.clone());

        let pager_panel = PagerPanel::new(engine.clone());

        Self {
            engine,
            pager_panel,
            _logger: logger,
            total_pages: Self::DEFAULT_TOTAL_PAGES,
        }
    }
}

impl eframe::App for PagerDemoApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::bottom("pager_strip_panel").show(ctx, |ui| {
            ui.add_space(8.0);
            ui.vertical_centered(|ui| {
                self.pager_panel.ui(ui);
            });
            ui.add_space(8.0);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            let context = self.engine.context();

            ui.heading("Pager demo");
            ui.add_space(8.0);
            ui.label(format!(
                "Viewing page {} of {}",
                context.current_page, context.total_pages
            ));

            ui.add_space(16.0);
            ui.horizontal(|ui| {
                ui.label("Total pages:");
                let response = ui.add(
                    egui::DragValue::new(&mut self.total_pages).clamp_range(1..=500),
                );
                if response.changed() {
                    // Resets the pager back to page 1.
                    let _ = self.engine.set_total(self.total_pages);
                }
            });
        });
    }
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting pager demo");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([640.0, 360.0])
            .with_min_inner_size([480.0, 240.0]),
        default_theme: eframe::Theme::Dark,
        persist_window: false,
        ..Default::default()
    };

    eframe::run_native(
        "Pager Demo",
        options,
        Box::new(|cc| Box::new(PagerDemoApp::new(cc))),
    )
    .map_err(|e| anyhow::anyhow!("Failed to run app: {}", e))?;

    Ok(())
}
