// Reusable UI components
// Category navigator, service cards, detail modal and status views

use crate::catalog::ServiceRecord;
use eframe::egui;

/// Color used for the fetch failure message
const ERROR_COLOR: egui::Color32 = egui::Color32::from_rgb(220, 0, 0);

/// Color used for prices
const PRICE_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);

/// Render a horizontal strip of category chips
///
/// Returns the category the user picked this frame, if any.
pub fn category_navigator(ui: &mut egui::Ui, categories: &[String], active: &str) -> Option<String> {
    let mut selected = None;
    egui::ScrollArea::horizontal()
        .id_source("category_navigator_scroll")
        .show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.add_space(8.0);
                for category in categories {
                    let is_active = category == active;
                    let text = if is_active {
                        egui::RichText::new(category).strong()
                    } else {
                        egui::RichText::new(category)
                    };
                    if ui.selectable_label(is_active, text).clicked() {
                        selected = Some(category.clone());
                    }
                }
                ui.add_space(8.0);
            });
        });
    selected
}

/// Render a price in the accent color
pub fn price_tag(ui: &mut egui::Ui, price: &str) {
    ui.colored_label(PRICE_COLOR, egui::RichText::new(price).strong());
}

/// Render a clickable card for one service
///
/// The returned response covers the whole card.
pub fn service_card(ui: &mut egui::Ui, service: &ServiceRecord) -> egui::Response {
    let card_id = ui.id().with(("service_card", &service.id));

    let frame = egui::Frame::group(ui.style()).rounding(egui::Rounding::same(8.0));
    let card = frame.show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal(|ui| {
            ui.label(egui::RichText::new(service.display_name()).strong().size(15.0));
            if let Some(price) = service.price_label() {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    price_tag(ui, &price);
                });
            }
        });
        if let Some(description) = service.description_text() {
            ui.label(egui::RichText::new(description).weak().size(12.0));
        }
    });

    let rect = card.response.rect;
    let response = ui.interact(rect, card_id, egui::Sense::click());

    // Hover outline, drawn over the frame without covering the text
    if response.hovered() {
        let stroke_color = ui.visuals().widgets.hovered.bg_fill;
        ui.painter().rect_stroke(
            rect,
            egui::Rounding::same(8.0),
            egui::Stroke::new(2.0, stroke_color),
        );
    }

    response.on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Render the detail modal for the active service
///
/// Nothing is shown unless `open` is set and a service is given.
/// Returns true when the user asked to close it.
pub fn service_detail_modal(
    ctx: &egui::Context,
    open: bool,
    service: Option<&ServiceRecord>,
    selected_category: &str,
) -> bool {
    let Some(service) = service.filter(|_| open) else {
        return false;
    };

    let mut window_open = true;
    let mut close_clicked = false;

    egui::Window::new(service.display_name())
        .id(egui::Id::new("service_detail_modal"))
        .open(&mut window_open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
        .show(ctx, |ui| {
            ui.label(
                egui::RichText::new(format!("{} › {}", selected_category, service.category_key()))
                    .weak()
                    .small(),
            );
            ui.add_space(8.0);

            if let Some(description) = service.description_text() {
                ui.label(description);
                ui.add_space(8.0);
            }
            if let Some(price) = service.price_label() {
                ui.horizontal(|ui| {
                    ui.label(egui::RichText::new("Price:").strong());
                    price_tag(ui, &price);
                });
            }
            if let Some(image) = service.image_url() {
                ui.hyperlink_to("View image", image);
            }

            ui.add_space(12.0);
            ui.separator();
            ui.vertical_centered(|ui| {
                if ui.button("Close").clicked() {
                    close_clicked = true;
                }
            });
        });

    let escape = ctx.input(|i| i.key_pressed(egui::Key::Escape));
    !window_open || close_clicked || escape
}

/// Render a centered spinner
pub fn loading_indicator(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(ui.available_height() / 2.0 - 16.0);
        ui.add(egui::Spinner::new().size(32.0));
    });
}

/// Render a centered error message
pub fn error_message(ui: &mut egui::Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(40.0);
        ui.colored_label(ERROR_COLOR, message);
    });
}
