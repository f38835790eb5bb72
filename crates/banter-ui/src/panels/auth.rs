//! Auth modal — simulated login/signup form.

use egui::{self, RichText, Vec2};

use crate::state::UiState;
use crate::theme::{palette, PANEL_ROUNDING};

/// What the caller should do after rendering the auth modal
pub enum AuthAction {
    Login { email: String, password: String },
    Signup { name: String, email: String, password: String },
    Close,
}

/// Render the auth modal window. Returns an action on submit or close.
pub fn auth_modal(ctx: &egui::Context, state: &mut UiState) -> Option<AuthAction> {
    let mut action = None;
    let p = palette(state.theme);
    let mut open = state.show_auth;

    egui::Window::new(if state.auth_form.signup_mode { "Sign up" } else { "Login" })
        .id(egui::Id::new("auth_modal"))
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
        .show(ctx, |ui| {
            let form = &mut state.auth_form;

            // Mode tabs
            ui.horizontal(|ui| {
                if ui
                    .selectable_label(!form.signup_mode, "Login")
                    .clicked()
                {
                    form.signup_mode = false;
                    form.error = None;
                }
                if ui.selectable_label(form.signup_mode, "Sign up").clicked() {
                    form.signup_mode = true;
                    form.error = None;
                }
            });
            ui.separator();

            if let Some(error) = &form.error {
                ui.label(RichText::new(error).color(p.error).small());
                ui.add_space(4.0);
            }

            if form.signup_mode {
                ui.label(RichText::new("Name").color(p.text_secondary).small());
                ui.text_edit_singleline(&mut form.name);
            }

            ui.label(RichText::new("Email").color(p.text_secondary).small());
            ui.text_edit_singleline(&mut form.email);

            ui.label(RichText::new("Password").color(p.text_secondary).small());
            ui.add(egui::TextEdit::singleline(&mut form.password).password(true));

            ui.add_space(8.0);

            let label = if form.pending {
                "Please wait..."
            } else if form.signup_mode {
                "Create account"
            } else {
                "Login"
            };
            let submit = ui.add_enabled(
                !form.pending,
                egui::Button::new(RichText::new(label).color(p.text_primary))
                    .fill(p.accent)
                    .corner_radius(PANEL_ROUNDING)
                    .min_size(Vec2::new(ui.available_width(), 28.0)),
            );

            if submit.clicked() {
                action = Some(if form.signup_mode {
                    AuthAction::Signup {
                        name: form.name.trim().to_string(),
                        email: form.email.trim().to_string(),
                        password: form.password.clone(),
                    }
                } else {
                    AuthAction::Login {
                        email: form.email.trim().to_string(),
                        password: form.password.clone(),
                    }
                });
            }
        });

    if !open {
        action = Some(AuthAction::Close);
    }
    action
}
