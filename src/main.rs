use eframe::egui;
use gui::state::AppState;
use once_cell::sync::Lazy;
use std::sync::Mutex;

mod api;
mod gui;
mod models;

const DEFAULT_API_URL: &str = "http://localhost:8000";

pub static APP_STATE: Lazy<Mutex<AppState>> = Lazy::new(|| Mutex::new(AppState::default()));

fn main() -> eframe::Result {
    env_logger::init();

    {
        let mut state = APP_STATE.lock().unwrap();
        state.base_url =
            std::env::var("ACTIVITIES_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_owned());
        state.refresh_catalog();
    }

    let builder = egui::ViewportBuilder::default()
        .with_title("Extracurricular Activities")
        .with_inner_size(egui::vec2(480.0, 640.0));

    let options = eframe::NativeOptions {
        viewport: builder,
        ..Default::default()
    };

    eframe::run_simple_native("Extracurricular Activities", options, move |ctx, _frame| {
        gui::ui_main(ctx);
    })
}
