//! The prediction window.

use eframe::egui;
use webcrippling::{
    range_help_text, Form, IllustrationSlot, Predictor, FIELDS, PLACEHOLDER_TEXT, UNITS_NOTE,
};

/// Width of each numeric entry in points.
const ENTRY_WIDTH: f32 = 80.0;

/// Illustration slot once its pixels live on the GPU.
enum IllustrationView {
    /// Uploaded picture.
    Texture(egui::TextureHandle),
    /// Missing file notice.
    Placeholder,
    /// Nothing to draw.
    Empty,
}

/// Window state: the loaded models, the form and the static widgets.
pub struct PredictionApp {
    /// Estimators shared by every submission.
    predictor: Predictor,
    /// Entry text and last result.
    form: Form,
    /// Picture under the form.
    illustration: IllustrationView,
    /// Range listing shown at the bottom.
    help_text: String,
}

impl PredictionApp {
    /// Upload the illustration and build an empty form.
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        predictor: Predictor,
        illustration: IllustrationSlot,
    ) -> Self {
        let illustration = match illustration {
            IllustrationSlot::Picture(picture) => {
                let image = egui::ColorImage::from_rgba_unmultiplied(
                    [picture.width as usize, picture.height as usize],
                    &picture.rgba,
                );
                IllustrationView::Texture(cc.egui_ctx.load_texture(
                    "illustration",
                    image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            IllustrationSlot::Placeholder => IllustrationView::Placeholder,
            IllustrationSlot::Empty => IllustrationView::Empty,
        };

        Self {
            predictor,
            form: Form::new(),
            illustration,
            help_text: range_help_text(),
        }
    }
}

impl eframe::App for PredictionApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                egui::Grid::new("parameters")
                    .num_columns(2)
                    .striped(false)
                    .show(ui, |ui| {
                        for (idx, field) in FIELDS.iter().enumerate() {
                            ui.label(field.label);
                            ui.add(
                                egui::TextEdit::singleline(self.form.entry_mut(idx))
                                    .desired_width(ENTRY_WIDTH),
                            );
                            ui.end_row();
                        }
                    });

                let predict = egui::RichText::new("Predict IOF and EOF").size(16.0);
                if ui.button(predict).clicked() {
                    self.form.submit(&self.predictor);
                }
                ui.label(self.form.result());

                match &self.illustration {
                    IllustrationView::Texture(texture) => {
                        ui.add(
                            egui::Image::new(egui::load::SizedTexture::from_handle(texture))
                                .fit_to_original_size(1.0),
                        );
                    }
                    IllustrationView::Placeholder => {
                        ui.label(egui::RichText::new(PLACEHOLDER_TEXT).size(16.0));
                    }
                    IllustrationView::Empty => {}
                }

                ui.label(egui::RichText::new(&self.help_text).small());
                ui.label(egui::RichText::new(UNITS_NOTE).small());
            });
        });
    }
}
