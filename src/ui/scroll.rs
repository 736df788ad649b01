// Section scrolling
// egui implementation of the controller's ScrollTarget capability

use crate::controller::ScrollTarget;
use eframe::egui;

/// A scroll the view has asked for but not yet performed
#[derive(Debug, Clone, PartialEq)]
struct ScrollRequest {
    section_id: String,
    offset: f32,
}

/// Scrolls the central scroll area to a category section
///
/// Requests are recorded when a category is selected and performed while
/// the matching section header is laid out later in the same frame.
/// Requests for sections that never show up are dropped at frame end.
#[derive(Debug, Default)]
pub struct SectionScroller {
    pending: Option<ScrollRequest>,
}

impl ScrollTarget for SectionScroller {
    fn scroll_into_view(&mut self, section_id: &str, offset: f32) {
        self.pending = Some(ScrollRequest {
            section_id: section_id.to_string(),
            offset,
        });
    }
}

impl SectionScroller {
    /// Whether a scroll is waiting for its section
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Scroll to `header_rect` if the pending request targets `section_id`
    pub fn resolve(&mut self, ui: &mut egui::Ui, section_id: &str, header_rect: egui::Rect) {
        let matches = self
            .pending
            .as_ref()
            .is_some_and(|request| request.section_id == section_id);
        if !matches {
            return;
        }
        if let Some(request) = self.pending.take() {
            // Grow the target upwards so the header lands `offset` below the top
            let target = egui::Rect::from_min_max(
                header_rect.min - egui::vec2(0.0, request.offset),
                header_rect.max,
            );
            ui.scroll_to_rect(target, Some(egui::Align::TOP));
        }
    }

    /// Drop any request whose section was not rendered this frame
    pub fn end_frame(&mut self) {
        if let Some(request) = self.pending.take() {
            tracing::debug!(section = %request.section_id, "No section to scroll to");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(scroller: &mut SectionScroller, sections: &[&str]) {
        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                for section in sections {
                    let header = ui.heading(*section);
                    scroller.resolve(ui, section, header.rect);
                }
            });
        });
        scroller.end_frame();
    }

    #[test]
    fn test_request_is_recorded() {
        let mut scroller = SectionScroller::default();
        assert!(!scroller.has_pending());

        scroller.scroll_into_view("Drinks", 45.0);
        assert!(scroller.has_pending());
    }

    #[test]
    fn test_matching_section_consumes_request() {
        let mut scroller = SectionScroller::default();
        scroller.scroll_into_view("Drinks", 45.0);

        let ctx = egui::Context::default();
        let _ = ctx.run(egui::RawInput::default(), |ctx| {
            egui::CentralPanel::default().show(ctx, |ui| {
                let food = ui.heading("Food");
                scroller.resolve(ui, "Food", food.rect);
                assert!(scroller.has_pending());

                let drinks = ui.heading("Drinks");
                scroller.resolve(ui, "Drinks", drinks.rect);
                assert!(!scroller.has_pending());
            });
        });
    }

    #[test]
    fn test_missing_section_is_ignored() {
        let mut scroller = SectionScroller::default();
        scroller.scroll_into_view("Desserts", 45.0);

        run_frame(&mut scroller, &["Food", "Drinks"]);
        assert!(!scroller.has_pending());
    }

    /// Distance from the scroll viewport's top to the target header once
    /// a request with `offset` has been resolved and applied
    fn header_gap_after_scroll(offset: f32) -> f32 {
        let ctx = egui::Context::default();
        let mut scroller = SectionScroller::default();
        let mut gap = 0.0;

        for frame in 0..6 {
            if frame == 1 {
                scroller.scroll_into_view("Target", offset);
            }
            let input = egui::RawInput {
                screen_rect: Some(egui::Rect::from_min_size(egui::Pos2::ZERO, egui::vec2(400.0, 300.0))),
                time: Some(frame as f64),
                ..Default::default()
            };
            let _ = ctx.run(input, |ctx| {
                egui::CentralPanel::default().show(ctx, |ui| {
                    let viewport_top = ui.cursor().top();
                    egui::ScrollArea::vertical().show(ui, |ui| {
                        for i in 0..40 {
                            ui.label(format!("Filler {}", i));
                        }
                        let header = ui.heading("Target");
                        gap = header.rect.top() - viewport_top;
                        scroller.resolve(ui, "Target", header.rect);
                        for i in 0..40 {
                            ui.label(format!("Tail {}", i));
                        }
                    });
                });
            });
            scroller.end_frame();
        }
        gap
    }

    #[test]
    fn test_header_lands_offset_below_viewport_top() {
        let flush = header_gap_after_scroll(0.0);
        let offset = header_gap_after_scroll(45.0);

        // Alignment adds at most one item spacing either way
        assert!(flush.abs() < 10.0, "flush gap was {}", flush);
        assert!((offset - flush - 45.0).abs() < 1.0, "gap {} vs flush {}", offset, flush);
    }
}
