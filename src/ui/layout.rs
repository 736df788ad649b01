// Main application layout
// Handles the category navigator, sections and the modal

use crate::catalog::ServiceRecord;
use crate::controller::ViewController;
use crate::state::ViewPhase;
use crate::ui::components::*;
use crate::ui::scroll::SectionScroller;
use eframe::egui;

/// Render the service menu for the current frame
///
/// Failure replaces the whole view with the error message, and loading
/// shows only a spinner. Otherwise the navigator, the category sections
/// and the detail modal are drawn.
pub fn render_app_layout(ctx: &egui::Context, controller: &mut ViewController<SectionScroller>) {
    let failure = match controller.state().phase() {
        ViewPhase::Failed(message) => Some(message.to_string()),
        ViewPhase::Loading => {
            egui::CentralPanel::default().show(ctx, loading_indicator);
            return;
        }
        ViewPhase::Ready => None,
    };
    if let Some(message) = failure {
        egui::CentralPanel::default().show(ctx, |ui| error_message(ui, &message));
        return;
    }

    render_navigator(ctx, controller);
    render_sections(ctx, controller);

    let state = controller.state();
    let close_requested = service_detail_modal(
        ctx,
        state.modal_open(),
        state.active_service(),
        state.active_category(),
    );
    if close_requested {
        controller.close_modal();
    }
}

/// Render the sticky category strip
fn render_navigator(ctx: &egui::Context, controller: &mut ViewController<SectionScroller>) {
    let mut selected = None;
    egui::TopBottomPanel::top("category_navigator")
        .exact_height(40.0)
        .show(ctx, |ui| {
            ui.add_space(6.0);
            let state = controller.state();
            selected = category_navigator(ui, state.categories(), state.active_category());
        });

    // Must run before the sections are laid out so the scroll resolves this frame
    if let Some(category) = selected {
        controller.scroll_to_category(&category);
    }
}

/// Render one section per category with its service cards
fn render_sections(ctx: &egui::Context, controller: &mut ViewController<SectionScroller>) {
    let mut clicked: Option<ServiceRecord> = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        let (state, scroller) = controller.parts_mut();
        let groups = state.groups();

        egui::ScrollArea::vertical()
            .id_source("service_sections_scroll")
            .auto_shrink([false; 2])
            .show(ui, |ui| {
                if groups.is_empty() {
                    ui.vertical_centered(|ui| {
                        ui.add_space(40.0);
                        ui.label(egui::RichText::new("No services available").italics().weak());
                    });
                }

                for group in groups.iter() {
                    ui.add_space(20.0);
                    let header = ui.vertical_centered(|ui| {
                        ui.heading(egui::RichText::new(group.category).strong())
                    });
                    scroller.resolve(ui, group.category, header.inner.rect);
                    ui.add_space(12.0);

                    for service in &group.services {
                        if service_card(ui, service).clicked() {
                            clicked = Some((*service).clone());
                        }
                        ui.add_space(8.0);
                    }
                }
                ui.add_space(40.0);
            });

        scroller.end_frame();
    });

    if let Some(service) = clicked {
        controller.handle_card_click(service);
    }
}
