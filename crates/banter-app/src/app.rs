//! Main egui application — composes the panels and drives the chat engine.

use std::cell::RefCell;
use std::rc::Rc;

use egui::{self, CentralPanel, RichText, TopBottomPanel, Vec2};
use wasm_bindgen_futures::spawn_local;

use banter_core::auth::AuthService;
use banter_core::engine::ChatEngine;
use banter_core::event_bus::EventBus;
use banter_core::ports::{DelayPort, StoragePort};
use banter_core::prefs;
use banter_platform::delay::BrowserDelay;
use banter_platform::storage::auto_detect_storage;
use banter_platform::transfer;
use banter_types::config::ChatConfig;
use banter_types::theme::Theme;
use banter_types::user::UserProfile;
use banter_types::{ChatError, Result};
use banter_ui::panels::auth::{auth_modal, AuthAction};
use banter_ui::panels::chat::{chat_panel, ChatAction};
use banter_ui::state::UiState;
use banter_ui::theme;

/// Result slot filled by a spawned async task, polled each frame
type Slot<T> = Rc<RefCell<Option<T>>>;

/// The main application state
pub struct BanterApp {
    ui_state: UiState,
    engine: Rc<ChatEngine>,
    auth: Rc<AuthService>,
    storage: Rc<dyn StoragePort>,
    bus: EventBus,
    startup: Slot<(Theme, Option<UserProfile>)>,
    auth_result: Slot<Result<UserProfile>>,
    import_result: Slot<Result<usize>>,
    first_frame: bool,
}

impl BanterApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let storage = auto_detect_storage();
        log::info!("Using storage backend: {}", storage.backend_name());

        let delay: Rc<dyn DelayPort> = Rc::new(BrowserDelay);
        let bus = EventBus::new();
        let engine = Rc::new(ChatEngine::new(
            storage.clone(),
            delay.clone(),
            bus.clone(),
            ChatConfig::default(),
        ));
        let auth = Rc::new(AuthService::new(storage.clone(), delay));

        let app = Self {
            ui_state: UiState::new(),
            engine: engine.clone(),
            auth: auth.clone(),
            storage: storage.clone(),
            bus,
            startup: Rc::new(RefCell::new(None)),
            auth_result: Rc::new(RefCell::new(None)),
            import_result: Rc::new(RefCell::new(None)),
            first_frame: true,
        };

        // Restore theme + session, then load the matching history
        let startup = app.startup.clone();
        let ctx = cc.egui_ctx.clone();
        spawn_local(async move {
            let theme = prefs::load_theme(&storage).await;
            let user = auth.restore().await;
            let identity = user.as_ref().map(|u| u.email.clone());
            engine.activate(identity.as_deref()).await;
            *startup.borrow_mut() = Some((theme, user));
            ctx.request_repaint();
        });

        app
    }

    fn poll_async_results(&mut self, ctx: &egui::Context) {
        if let Some((theme, user)) = self.startup.borrow_mut().take() {
            self.ui_state.theme = theme;
            self.ui_state.user = user;
            theme::apply_theme(ctx, theme);
        }

        if let Some(result) = self.auth_result.borrow_mut().take() {
            self.ui_state.auth_form.pending = false;
            match result {
                Ok(user) => {
                    log::info!("Signed in as {}", user.email);
                    self.ui_state.user = Some(user.clone());
                    self.ui_state.show_auth = false;
                    self.ui_state.auth_form.reset();
                    self.activate_identity(Some(user.email), ctx);
                }
                Err(e) => {
                    self.ui_state.auth_form.error = Some(e.to_string());
                }
            }
        }

        if let Some(result) = self.import_result.borrow_mut().take() {
            match result {
                Ok(count) => log::info!("Import finished: {} messages", count),
                Err(e) => self.ui_state.error = Some(e.to_string()),
            }
        }
    }

    fn activate_identity(&self, identity: Option<String>, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            engine.activate(identity.as_deref()).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_send(&self, text: String, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            engine.send(text).await;
            ctx.request_repaint();
        });
    }

    fn dispatch_retry(&self, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            engine.retry_last().await;
            ctx.request_repaint();
        });
    }

    fn dispatch_clear(&self, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let ctx = ctx.clone();
        spawn_local(async move {
            engine.clear().await;
            ctx.request_repaint();
        });
    }

    fn dispatch_auth(&mut self, action: AuthAction, ctx: &egui::Context) {
        match action {
            AuthAction::Close => {
                self.ui_state.show_auth = false;
                self.ui_state.auth_form.reset();
            }
            AuthAction::Login { email, password } => {
                self.ui_state.auth_form.pending = true;
                self.ui_state.auth_form.error = None;
                let auth = self.auth.clone();
                let slot = self.auth_result.clone();
                let ctx = ctx.clone();
                spawn_local(async move {
                    *slot.borrow_mut() = Some(auth.login(&email, &password).await);
                    ctx.request_repaint();
                });
            }
            AuthAction::Signup { name, email, password } => {
                self.ui_state.auth_form.pending = true;
                self.ui_state.auth_form.error = None;
                let auth = self.auth.clone();
                let slot = self.auth_result.clone();
                let ctx = ctx.clone();
                spawn_local(async move {
                    *slot.borrow_mut() = Some(auth.signup(&name, &email, &password).await);
                    ctx.request_repaint();
                });
            }
        }
    }

    fn do_export(&mut self) {
        match self
            .engine
            .export()
            .and_then(|(filename, bytes)| transfer::download_json(&filename, &bytes))
        {
            Ok(()) => log::info!("History exported"),
            Err(e) => {
                log::error!("Export failed: {}", e);
                self.ui_state.error = Some("Error exporting chat history.".to_string());
            }
        }
    }

    fn do_import(&mut self, ctx: &egui::Context) {
        let engine = self.engine.clone();
        let slot = self.import_result.clone();
        let ctx = ctx.clone();
        let picked = transfer::pick_json_file(move |bytes| {
            spawn_local(async move {
                *slot.borrow_mut() = Some(engine.import(&bytes).await);
                ctx.request_repaint();
            });
        });
        if let Err(e) = picked {
            log::error!("Import picker failed: {}", e);
            self.ui_state.error =
                Some(ChatError::ImportInvalid("could not open file picker".to_string()).to_string());
        }
    }

    fn cycle_theme(&mut self, ctx: &egui::Context) {
        let next = self.ui_state.theme.next();
        self.ui_state.theme = next;
        theme::apply_theme(ctx, next);
        let storage = self.storage.clone();
        spawn_local(async move {
            prefs::save_theme(&storage, next).await;
        });
    }

    fn logout(&mut self, ctx: &egui::Context) {
        let auth = self.auth.clone();
        spawn_local(async move {
            auth.logout().await;
        });
        self.ui_state.user = None;
        self.activate_identity(None, ctx);
    }

    fn top_bar(&mut self, ctx: &egui::Context) {
        let p = theme::palette(self.ui_state.theme);
        let mut export_clicked = false;
        let mut import_clicked = false;
        let mut clear_clicked = false;
        let mut logout_clicked = false;
        let mut theme_clicked = false;
        let mut signin_clicked = false;

        TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("Banter").strong().color(p.accent).size(16.0));
                ui.separator();
                let (dot, dot_color) = if transfer::is_online() {
                    ("● Online", p.success)
                } else {
                    ("● Offline", p.warning)
                };
                ui.label(RichText::new(dot).color(dot_color).small());

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if let Some(user) = self.ui_state.user.clone() {
                        ui.menu_button(RichText::new(&user.avatar).strong(), |ui| {
                            ui.label(RichText::new(&user.name).strong());
                            ui.label(RichText::new(&user.email).color(p.text_secondary).small());
                            ui.separator();
                            if ui.button("Export chat").clicked() {
                                export_clicked = true;
                            }
                            if ui.button("Import chat").clicked() {
                                import_clicked = true;
                            }
                            if ui.button("Clear chat").clicked() {
                                clear_clicked = true;
                            }
                            if ui.button("Logout").clicked() {
                                logout_clicked = true;
                            }
                        });
                    } else if ui.button("Sign in").clicked() {
                        signin_clicked = true;
                    }

                    if ui
                        .button(self.ui_state.theme.label())
                        .on_hover_text("Switch theme")
                        .clicked()
                    {
                        theme_clicked = true;
                    }
                });
            });
        });

        if export_clicked {
            self.do_export();
        }
        if import_clicked {
            self.do_import(ctx);
        }
        if clear_clicked {
            self.ui_state.confirm_clear = true;
        }
        if logout_clicked {
            self.logout(ctx);
        }
        if theme_clicked {
            self.cycle_theme(ctx);
        }
        if signin_clicked {
            self.ui_state.show_auth = true;
        }
    }

    fn confirm_clear_window(&mut self, ctx: &egui::Context) {
        if !self.ui_state.confirm_clear {
            return;
        }
        let mut do_clear = false;
        let mut cancel = false;
        egui::Window::new("Clear chat?")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.label("Are you sure you want to clear all messages? This cannot be undone.");
                ui.horizontal(|ui| {
                    if ui.button("Clear").clicked() {
                        do_clear = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancel = true;
                    }
                });
            });
        if do_clear {
            self.ui_state.confirm_clear = false;
            self.dispatch_clear(ctx);
        }
        if cancel {
            self.ui_state.confirm_clear = false;
        }
    }
}

impl eframe::App for BanterApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.first_frame {
            theme::apply_theme(ctx, self.ui_state.theme);
            self.first_frame = false;
        }

        self.poll_async_results(ctx);

        // Drain events from the chat engine
        let events = self.bus.drain();
        if !events.is_empty() {
            self.ui_state.process_events(events);
            ctx.request_repaint();
        }
        // The engine stays busy while queued sends are pending, before any
        // event for them has reached the UI projection
        if self.ui_state.is_busy() || self.engine.is_busy() {
            ctx.request_repaint();
        }

        self.top_bar(ctx);
        self.confirm_clear_window(ctx);

        CentralPanel::default().show(ctx, |ui| {
            let suggestions = self.engine.suggestions();
            if let Some(action) = chat_panel(ui, &mut self.ui_state, suggestions) {
                match action {
                    ChatAction::Submit(text) => self.dispatch_send(text, ctx),
                    ChatAction::Retry => {
                        self.ui_state.error = None;
                        self.dispatch_retry(ctx);
                    }
                    ChatAction::DismissError => self.ui_state.error = None,
                }
            }
        });

        if self.ui_state.show_auth {
            if let Some(action) = auth_modal(ctx, &mut self.ui_state) {
                self.dispatch_auth(action, ctx);
            }
        }
    }
}
