// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use league_browser::{config::state::GuiState, gui, log};
use eframe::egui::{ IconData, ViewportBuilder };

/// 32x32 trophy-gold disc on a transparent background.
fn app_icon() -> IconData {
    const N: u32 = 32;
    let c = (N as f32 - 1.0) / 2.0;
    let rgba = image::RgbaImage::from_fn(N, N, |x, y| {
        let d = ((x as f32 - c).powi(2) + (y as f32 - c).powi(2)).sqrt();
        if d <= c - 2.0 {
            image::Rgba([0xF0, 0xD2, 0x3C, 0xFF])
        } else if d <= c {
            image::Rgba([0x8A, 0x6D, 0x10, 0xFF])
        } else {
            image::Rgba([0, 0, 0, 0])
        }
    });
    let (w, h) = rgba.dimensions();
    IconData { rgba: rgba.into_raw(), width: w, height: h }
}

fn main() {
    log::enable();
    let gs = GuiState::default();
    let options = eframe::NativeOptions {
        // eframe 0.32: icon set via viewport builder
        viewport: ViewportBuilder::default()
            .with_icon(app_icon())
            .with_inner_size([gs.window_w as f32, gs.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(options) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
