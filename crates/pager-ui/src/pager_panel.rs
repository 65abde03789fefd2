//! Pager strip widget
//!
//! Renders the token strip produced by the window calculator as a row of
//! fixed-width page buttons, with previous/next chevrons on either end.
//! Ellipsis tokens render as inert labels; the current page is highlighted
//! and clicking it does nothing.

use egui::{Color32, Label, RichText, Ui, Vec2};
use pager_core::{PageToken, PagerEngine};
use std::sync::Arc;
use tracing::warn;

use crate::icons;
use crate::theme::accent_color;
use crate::widget_utils::token_id;

/// Pager strip widget
pub struct PagerPanel {
    /// Pager engine driven by this strip
    engine: Arc<PagerEngine>,

    /// Panel configuration
    config: PagerPanelConfig,
}

/// Pager strip configuration
#[derive(Debug, Clone)]
pub struct PagerPanelConfig {
    /// Height of every token button
    pub token_height: f32,

    /// Width added around the widest page number
    pub token_padding: f32,

    /// Width of one digit at the strip's font size
    pub digit_width: f32,

    /// Fill for plain page buttons and the chevrons
    pub token_color: Color32,

    /// Fill for the current page
    pub current_color: Color32,

    /// Show hover labels on the buttons
    pub show_hover_labels: bool,
}

impl Default for PagerPanelConfig {
    fn default() -> Self {
        Self {
            token_height: 24.0,
            token_padding: 10.0,
            digit_width: 8.0,
            token_color: Color32::from_gray(40),
            current_color: accent_color(),
            show_hover_labels: true,
        }
    }
}

impl PagerPanel {
    /// Create a new pager strip for an engine
    pub fn new(engine: Arc<PagerEngine>) -> Self {
        Self {
            engine,
            config: PagerPanelConfig::default(),
        }
    }

    /// Set configuration
    pub fn with_config(mut self, config: PagerPanelConfig) -> Self {
        self.config = config;
        self
    }

    /// Show the pager strip UI
    pub fn ui(&mut self, ui: &mut Ui) {
        let context = self.engine.context();
        let token_size = Vec2::new(
            self.token_width(context.total_pages),
            self.config.token_height,
        );

        ui.horizontal(|ui| {
            ui.style_mut().spacing.item_spacing = Vec2::new(4.0, 0.0);
            ui.style_mut().spacing.button_padding = Vec2::new(0.0, 0.0);

            self.chevron_button(ui, token_size, false, context.current_page > 1);

            for token in self.engine.window() {
                match token {
                    PageToken::Page(page) => {
                        self.page_button(ui, token_size, page, context.current_page);
                    }
                    PageToken::EllipsisBefore | PageToken::EllipsisAfter => {
                        ui.push_id(token_id(&token), |ui| {
                            ui.add_sized(token_size, Label::new(RichText::new(icons::ELLIPSIS)));
                        });
                    }
                }
            }

            self.chevron_button(ui, token_size, true, context.current_page < context.total_pages);
        });
    }

    /// Fixed width shared by every token, from the digit count of the
    /// page total. Sizing off the total rather than each number keeps the
    /// strip from jittering as the cluster shifts.
    fn token_width(&self, total_pages: usize) -> f32 {
        self.config.token_padding + digit_count(total_pages) as f32 * self.config.digit_width
    }

    fn page_button(&self, ui: &mut Ui, size: Vec2, page: usize, current_page: usize) {
        let is_current = page == current_page;
        let fill = if is_current {
            self.config.current_color
        } else {
            self.config.token_color
        };

        let text = RichText::new(page.to_string()).size(13.0);
        let button = egui::Button::new(if is_current { text.strong() } else { text }).fill(fill);

        let mut response = ui
            .push_id(token_id(&PageToken::Page(page)), |ui| {
                ui.add_sized(size, button)
            })
            .inner;

        if self.config.show_hover_labels {
            let label = if is_current {
                format!("Page {} (current)", page)
            } else {
                format!("Page {}", page)
            };
            response = response.on_hover_text(label);
        }

        // The current page renders as a button for visual consistency but a
        // click on it dispatches nothing.
        if response.clicked() && !is_current {
            if let Err(e) = self.engine.select(page) {
                warn!("selection of page {} rejected: {}", page, e);
            }
        }
    }

    fn chevron_button(&self, ui: &mut Ui, size: Vec2, forward: bool, enabled: bool) {
        let (icon, hover_text) = if forward {
            (icons::CHEVRON_RIGHT, "Next page")
        } else {
            (icons::CHEVRON_LEFT, "Previous page")
        };

        let button = egui::Button::new(RichText::new(icon).size(14.0)).fill(self.config.token_color);
        let response = ui
            .add_enabled_ui(enabled, |ui| ui.add_sized(size, button))
            .inner
            .on_hover_text(hover_text);

        if response.clicked() {
            let result = if forward {
                self.engine.next()
            } else {
                self.engine.previous()
            };
            if let Err(e) = result {
                warn!("{} step rejected: {}", hover_text, e);
            }
        }
    }
}

/// Number of decimal digits in a page number
fn digit_count(n: usize) -> usize {
    n.to_string().len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_count() {
        assert_eq!(digit_count(1), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(99), 2);
        assert_eq!(digit_count(100), 3);
    }

    #[test]
    fn test_token_width_grows_with_the_page_total() {
        let engine = Arc::new(PagerEngine::new(20).unwrap());
        let panel = PagerPanel::new(engine);

        let narrow = panel.token_width(9);
        let medium = panel.token_width(20);
        let wide = panel.token_width(100);

        assert!(narrow < medium);
        assert!(medium < wide);
        // Same digit count, same width: the strip cannot jitter.
        assert_eq!(panel.token_width(10), panel.token_width(99));
    }
}
