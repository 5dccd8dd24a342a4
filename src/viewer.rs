/*!
 * Desktop viewer for a finished [`Figure`].
 *
 * Opens a maximized window, renders the figure at the window's pixel size and
 * re-renders whenever that size changes. [`run`] blocks until the window is closed.
 */

use crate::surface::Figure;
use anyhow::{Result, anyhow};
use eframe::egui;

/// Window title used when the figure has none.
pub const DEFAULT_TITLE: &str = "piplot";

/// Show `figure` and block until the user closes the window.
pub fn run(figure: Figure) -> Result<()> {
    let title = if figure.title().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        figure.title().to_string()
    };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([400.0, 300.0])
            .with_maximized(true)
            .with_title(title.clone()),
        ..Default::default()
    };

    log::info!("opening plot window {title:?}");
    eframe::run_native(
        &title,
        options,
        Box::new(|_cc| Ok(Box::new(PlotViewer::new(figure)))),
    )
    .map_err(|e| anyhow!("plot window failed: {e}"))
}

/// Viewer state
struct PlotViewer {
    figure: Figure,
    texture: Option<egui::TextureHandle>,
    rendered_px: [usize; 2],
    error: Option<String>,
}

impl PlotViewer {
    fn new(figure: Figure) -> Self {
        Self {
            figure,
            texture: None,
            rendered_px: [0, 0],
            error: None,
        }
    }

    /// Re-render if the target size changed since the last frame.
    fn refresh(&mut self, ctx: &egui::Context, size_px: [usize; 2]) {
        if size_px == self.rendered_px {
            return;
        }
        self.rendered_px = size_px;

        match self.figure.render_rgb(size_px[0] as u32, size_px[1] as u32) {
            Ok(rgb) => {
                let image = egui::ColorImage::from_rgb(size_px, &rgb);
                self.texture = Some(ctx.load_texture("plot", image, egui::TextureOptions::LINEAR));
                self.error = None;
            }
            Err(err) => {
                log::error!("rendering plot failed: {err:#}");
                self.texture = None;
                self.error = Some(format!("Failed to render plot: {err:#}"));
            }
        }
    }
}

impl eframe::App for PlotViewer {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::WHITE))
            .show(ctx, |ui| {
                let size = ui.available_size();
                let ppp = ctx.pixels_per_point();
                let size_px = [
                    (size.x * ppp).round().max(1.0) as usize,
                    (size.y * ppp).round().max(1.0) as usize,
                ];
                self.refresh(ctx, size_px);

                if let Some(error) = &self.error {
                    ui.colored_label(egui::Color32::RED, error);
                } else if let Some(texture) = &self.texture {
                    ui.image((texture.id(), size));
                }
            });
    }
}
