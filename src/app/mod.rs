//! App module - contains the main application state and logic

mod modals;
mod requests;
mod storefront;
mod views;

use storefront::Storefront;

use crate::api::PosClient;
use crate::settings::Settings;
use crate::theme;
use crate::types::*;
use crate::utils::load_cjk_font;
use eframe::egui;
use std::collections::VecDeque;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::{info, warn};

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) storefront: Storefront,
    pub(crate) client: PosClient,
    pub(crate) operator: Operator,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Finished requests, drained once per frame
    pub(crate) outcome_tx: mpsc::UnboundedSender<Outcome>,
    pub(crate) outcome_rx: mpsc::UnboundedReceiver<Outcome>,
    // Blocking alerts, front is shown
    pub(crate) alerts: VecDeque<Alert>,
    // First frame renders nothing
    pub(crate) ready: bool,
    pub(crate) focus_barcode: bool,
    // Settings as read from disk, without environment overrides
    pub(crate) settings: Settings,
    pub(crate) data_dir: PathBuf,
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        runtime: tokio::runtime::Runtime,
        data_dir: PathBuf,
    ) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Light);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

        // Japanese fallback so labels don't render as tofu
        match load_cjk_font(settings.font_path.as_deref()) {
            Some((path, bytes)) => {
                info!(path = %path, "Loaded CJK font");
                fonts
                    .font_data
                    .insert("cjk".to_owned(), std::sync::Arc::new(egui::FontData::from_owned(bytes)));
                for family in [egui::FontFamily::Proportional, egui::FontFamily::Monospace] {
                    fonts.families.entry(family).or_default().push("cjk".to_owned());
                }
            }
            None => warn!("No CJK font found, Japanese text may not render"),
        }

        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_runtime(settings, runtime, data_dir)
    }

    /// Everything except the egui setup.
    pub(crate) fn with_runtime(settings: Settings, runtime: tokio::runtime::Runtime, data_dir: PathBuf) -> Self {
        let effective = settings.clone().with_env_overrides();
        let client = PosClient::new(&effective.backend_url);
        info!(
            backend = client.base_url(),
            store_cd = %effective.store_cd,
            pos_no = %effective.pos_no,
            "Storefront configured"
        );
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();

        Self {
            storefront: Storefront::default(),
            client,
            operator: effective.operator(),
            runtime,
            outcome_tx,
            outcome_rx,
            alerts: VecDeque::new(),
            ready: false,
            focus_barcode: true,
            needs_center: settings.window_x.is_none() || settings.window_y.is_none(),
            settings,
            data_dir,
            window_pos: None,
            window_size: None,
        }
    }

    /// Start of a frame. Returns `false` for the first frame, which only
    /// flips `ready` and draws nothing.
    pub(crate) fn begin_frame(&mut self) -> bool {
        if self.ready {
            return true;
        }
        self.ready = true;
        info!("Storefront ready");
        false
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x).or(self.settings.window_x),
            window_y: self.window_pos.map(|p| p.y).or(self.settings.window_y),
            window_w: self.window_size.map(|s| s.x).or(self.settings.window_w),
            window_h: self.window_size.map(|s| s.y).or(self.settings.window_h),
            ..self.settings.clone()
        };
        settings.save(&self.data_dir);
    }
}
