//! Chat panel — conversation bubbles, typing indicator, suggestion chips,
//! error banner, and the input row.

use egui::{self, Align, Layout, RichText, ScrollArea, Vec2};

use crate::state::UiState;
use crate::theme::{palette, BUBBLE_ROUNDING, PANEL_PADDING, PANEL_ROUNDING};

/// What the caller should do after rendering the chat panel
pub enum ChatAction {
    /// The user submitted this text (typed or via a suggestion chip)
    Submit(String),
    /// Re-issue the last user message
    Retry,
    /// Dismiss the error banner
    DismissError,
}

/// Render the chat panel. Returns an action when the user did something.
pub fn chat_panel(
    ui: &mut egui::Ui,
    state: &mut UiState,
    suggestions: &[&str],
) -> Option<ChatAction> {
    let mut action = None;
    let p = palette(state.theme);

    egui::Frame::default()
        .fill(p.bg_primary)
        .inner_margin(PANEL_PADDING)
        .show(ui, |ui| {
            ui.vertical(|ui| {
                // Error banner
                if let Some(error) = state.error.clone() {
                    egui::Frame::default()
                        .fill(p.error_bg)
                        .corner_radius(PANEL_ROUNDING)
                        .inner_margin(8.0)
                        .show(ui, |ui| {
                            ui.horizontal(|ui| {
                                ui.label(RichText::new(&error).color(p.error));
                                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                    if ui.small_button("Dismiss").clicked() {
                                        action = Some(ChatAction::DismissError);
                                    }
                                    if ui.small_button("Retry").clicked() {
                                        action = Some(ChatAction::Retry);
                                    }
                                });
                            });
                        });
                    ui.add_space(4.0);
                }

                // Messages area
                let available_height = ui.available_height() - 90.0;
                ScrollArea::vertical()
                    .max_height(available_height)
                    .auto_shrink([false, false])
                    .stick_to_bottom(true)
                    .show(ui, |ui| {
                        if state.messages.is_empty() && !state.typing {
                            render_welcome(ui, state);
                        }
                        for msg in &state.messages {
                            render_bubble(ui, state.theme, msg);
                            ui.add_space(4.0);
                        }
                        if state.typing {
                            render_typing_indicator(ui, state);
                        }
                    });

                ui.add_space(6.0);

                // Suggestion chips
                if !state.is_busy() && !suggestions.is_empty() {
                    ui.horizontal_wrapped(|ui| {
                        for suggestion in suggestions {
                            let chip = egui::Button::new(
                                RichText::new(*suggestion).color(p.text_secondary).small(),
                            )
                            .fill(p.bg_surface)
                            .corner_radius(BUBBLE_ROUNDING);
                            if ui.add(chip).clicked() {
                                action = Some(ChatAction::Submit(suggestion.to_string()));
                            }
                        }
                    });
                    ui.add_space(4.0);
                }

                // Input row
                ui.horizontal(|ui| {
                    let input = egui::TextEdit::singleline(&mut state.input_text)
                        .hint_text("Type a message...")
                        .desired_width(ui.available_width() - 70.0)
                        .font(egui::FontId::proportional(14.0));

                    let response = ui.add(input);

                    let send_enabled = !state.input_text.trim().is_empty() && !state.is_busy();
                    let send_btn = ui.add_enabled(
                        send_enabled,
                        egui::Button::new(RichText::new("Send").color(p.text_primary))
                            .fill(if send_enabled { p.accent } else { p.bg_surface })
                            .corner_radius(PANEL_ROUNDING)
                            .min_size(Vec2::new(60.0, 0.0)),
                    );

                    // Submit on Enter or button click
                    if (response.lost_focus()
                        && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        && send_enabled)
                        || send_btn.clicked()
                    {
                        let text = state.input_text.trim().to_string();
                        state.input_text.clear();
                        action = Some(ChatAction::Submit(text));
                        response.request_focus();
                    }
                });
            });
        });

    action
}

fn render_welcome(ui: &mut egui::Ui, state: &UiState) {
    let p = palette(state.theme);
    ui.add_space(24.0);
    ui.vertical_centered(|ui| {
        ui.heading(
            RichText::new("Welcome to Banter!")
                .color(p.text_primary)
                .strong(),
        );
        ui.label(
            RichText::new("Start a conversation below or try a suggested prompt.")
                .color(p.text_secondary),
        );
        if state.user.is_none() {
            ui.label(
                RichText::new("Login or sign up to keep your own history.")
                    .color(p.text_secondary)
                    .small(),
            );
        }
    });
    ui.add_space(24.0);
}

fn render_bubble(ui: &mut egui::Ui, theme: banter_types::theme::Theme, msg: &banter_types::message::Message) {
    use banter_types::message::Sender;
    let p = palette(theme);

    let (label, fill, layout) = match msg.sender {
        Sender::User => ("You", p.user_bubble, Layout::right_to_left(Align::TOP)),
        Sender::Bot => ("Assistant", p.bot_bubble, Layout::left_to_right(Align::TOP)),
    };

    ui.with_layout(layout, |ui| {
        ui.set_max_width(ui.available_width() * 0.85);
        egui::Frame::default()
            .fill(fill)
            .corner_radius(BUBBLE_ROUNDING)
            .inner_margin(8.0)
            .show(ui, |ui| {
                ui.vertical(|ui| {
                    ui.label(RichText::new(label).color(p.accent).strong().small());
                    ui.horizontal_wrapped(|ui| {
                        ui.label(RichText::new(&msg.text).color(p.text_primary));
                        if msg.is_streaming {
                            ui.label(RichText::new("▌").color(p.accent).strong());
                        }
                    });
                });
            });
    });
}

fn render_typing_indicator(ui: &mut egui::Ui, state: &UiState) {
    let p = palette(state.theme);
    // Three dots pulsing on a half-second cycle
    let t = ui.input(|i| i.time);
    let phase = ((t * 2.0) as usize) % 3;
    let dots = match phase {
        0 => "·  ",
        1 => "·· ",
        _ => "···",
    };
    egui::Frame::default()
        .fill(p.bot_bubble)
        .corner_radius(BUBBLE_ROUNDING)
        .inner_margin(8.0)
        .show(ui, |ui| {
            ui.label(
                RichText::new(format!("Assistant is typing {}", dots))
                    .color(p.text_secondary)
                    .italics(),
            );
        });
    ui.ctx().request_repaint();
}
