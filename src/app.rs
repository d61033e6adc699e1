//! Desktop browser for the show catalog.
//!
//! A single window with the show table and an "Add Show" button on the
//! left, and the selected show's details plus image preview on the right.
//! All catalog traffic happens synchronously on the GUI thread; the window
//! simply blocks for the duration of a request.

use eframe::egui;
use std::path::PathBuf;

use crate::catalog::{next_show_id, HttpCatalog, Show, ShowCatalog};
use crate::image_store::ImageStore;
use crate::preview::{self, PreviewImage};
use crate::validation::{validate_new_show, validate_show_code, validate_show_name};
use crate::ShowShelfError;

/// What the preview area currently displays.
enum PreviewState {
    /// Nothing selected yet
    Empty,
    /// The selected show has no image URL
    NoImage,
    /// The image could not be fetched or decoded
    Unavailable,
    /// A scaled preview ready for rendering
    Ready(egui::TextureHandle),
}

/// State of the modal "Add New Show" dialog.
#[derive(Default)]
struct AddShowDialog {
    open: bool,
    name_input: String,
    code_input: String,
    /// Message under the name field, updated whenever the field changes
    name_error: Option<String>,
    /// Message under the code field, updated whenever the field changes
    code_error: Option<String>,
    image_path: Option<PathBuf>,
}

impl AddShowDialog {
    fn open_fresh(&mut self) {
        *self = Self::default();
        self.open = true;
    }

    fn close(&mut self) {
        *self = Self::default();
    }

    /// Whether the current field values would pass submission validation.
    fn is_valid(&self) -> bool {
        validate_show_name(&self.name_input).is_ok() && validate_show_code(&self.code_input).is_ok()
    }
}

/// The application window.
pub struct ShowShelfApp {
    catalog: HttpCatalog,
    images: ImageStore,
    shows: Vec<Show>,
    selected: Option<usize>,
    details: String,
    preview: PreviewState,
    dialog: AddShowDialog,
    error_message: Option<String>,
    status_message: Option<String>,
}

impl ShowShelfApp {
    /// Creates the application and performs the initial catalog load.
    pub fn new(catalog: HttpCatalog, images: ImageStore) -> Self {
        let mut app = Self {
            catalog,
            images,
            shows: Vec::new(),
            selected: None,
            details: String::new(),
            preview: PreviewState::Empty,
            dialog: AddShowDialog::default(),
            error_message: None,
            status_message: None,
        };
        app.load_shows();
        app
    }

    /// Reloads the show table from the catalog.
    fn load_shows(&mut self) {
        match self.catalog.fetch_shows() {
            Ok(shows) => {
                self.shows = shows;
                if self
                    .selected
                    .is_some_and(|row| row >= self.shows.len())
                {
                    self.selected = None;
                }
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to load data: {e}"));
            }
        }
    }

    /// Handles a row selection: re-reads the catalog and renders the
    /// selected show's details and preview image.
    fn select_row(&mut self, row: usize, ctx: &egui::Context) {
        self.selected = Some(row);

        let shows = match self.catalog.fetch_shows() {
            Ok(shows) => shows,
            Err(e) => {
                self.error_message = Some(format!("Failed to load show details: {e}"));
                return;
            }
        };

        let Some(show) = shows.get(row) else {
            self.error_message =
                Some("Failed to load show details: show no longer exists".to_string());
            return;
        };

        self.details = format!(
            "Name: {}\nCode: {}\nImage URL: {}",
            show.name,
            show.code,
            show.image_url.as_deref().unwrap_or("")
        );

        self.preview = match &show.image_url {
            Some(url) => {
                log::debug!("Loading image for show: {}", show.name);
                self.load_preview(url, ctx)
            }
            None => PreviewState::NoImage,
        };
    }

    /// Fetches and uploads the preview texture for an image URL.
    fn load_preview(&self, url: &str, ctx: &egui::Context) -> PreviewState {
        log::debug!("Attempting to load image from: {url}");

        match preview::fetch_preview(url) {
            Ok(PreviewImage {
                width,
                height,
                pixels,
            }) => {
                log::debug!("Successfully loaded image, size: {width}x{height}");
                let color_image = egui::ColorImage::from_rgba_unmultiplied(
                    [width as usize, height as usize],
                    &pixels,
                );
                PreviewState::Ready(ctx.load_texture(
                    "show_preview",
                    color_image,
                    egui::TextureOptions::LINEAR,
                ))
            }
            Err(e) => {
                log::debug!("Error loading image: {e}");
                PreviewState::Unavailable
            }
        }
    }

    /// Submits the add-show dialog: re-validate, compute the next id,
    /// import the picked image, POST the record and reload the table.
    fn submit_new_show(&mut self) {
        // Validate again before submitting
        if validate_new_show(&self.dialog.name_input, &self.dialog.code_input).is_err() {
            self.error_message = Some("Invalid input detected".to_string());
            self.dialog.close();
            return;
        }

        match self.create_show_from_dialog() {
            Ok(()) => {
                self.load_shows();
                self.status_message = Some("Show added successfully!".to_string());
                self.error_message = None;
            }
            Err(ShowShelfError::ImageStore(e)) => {
                self.error_message = Some(format!("Failed to copy image: {e}"));
            }
            Err(e) => {
                self.error_message = Some(format!("Failed to add show: {e}"));
            }
        }

        self.dialog.close();
    }

    fn create_show_from_dialog(&self) -> Result<(), ShowShelfError> {
        let shows = self.catalog.fetch_shows()?;
        let id = next_show_id(&shows);

        let image_url = match &self.dialog.image_path {
            Some(path) => {
                let filename = self.images.import(path)?;
                Some(format!("{}/images/{}", self.catalog.base_url(), filename))
            }
            None => None,
        };

        let show = Show {
            id,
            name: self.dialog.name_input.clone(),
            code: self.dialog.code_input.clone(),
            image_url,
        };

        self.catalog.create_show(&show)?;
        Ok(())
    }

    fn render_show_table(&mut self, ui: &mut egui::Ui) {
        let mut clicked_row = None;

        egui::ScrollArea::vertical()
            .id_salt("show_table")
            .auto_shrink([false, true])
            .max_height((ui.available_height() - 48.0).max(0.0))
            .show(ui, |ui| {
                egui::Grid::new("show_grid")
                    .num_columns(2)
                    .spacing([24.0, 4.0])
                    .striped(true)
                    .show(ui, |ui| {
                        ui.strong("Show Name");
                        ui.strong("Show Code");
                        ui.end_row();

                        for (row, show) in self.shows.iter().enumerate() {
                            let is_selected = self.selected == Some(row);
                            if ui.selectable_label(is_selected, &show.name).clicked() {
                                clicked_row = Some(row);
                            }
                            if ui.selectable_label(is_selected, &show.code).clicked() {
                                clicked_row = Some(row);
                            }
                            ui.end_row();
                        }
                    });
            });

        if let Some(row) = clicked_row {
            let ctx = ui.ctx().clone();
            self.select_row(row, &ctx);
        }

        ui.add_space(6.0);
        let add_button = egui::Button::new(egui::RichText::new("Add Show").strong())
            .min_size(egui::vec2(0.0, 32.0));
        if ui.add(add_button).clicked() {
            self.dialog.open_fresh();
        }
    }

    fn render_details(&mut self, ui: &mut egui::Ui) {
        ui.label(egui::RichText::new("Show Details").strong());
        ui.add(
            egui::TextEdit::multiline(&mut self.details.as_str())
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(6.0);

        egui::ScrollArea::both()
            .id_salt("preview_area")
            .auto_shrink([false, false])
            .show(ui, |ui| match &self.preview {
                PreviewState::Empty => {}
                PreviewState::NoImage => {
                    ui.centered_and_justified(|ui| {
                        ui.label("No image available");
                    });
                }
                PreviewState::Unavailable => {
                    ui.centered_and_justified(|ui| {
                        ui.label("Image not available");
                    });
                }
                PreviewState::Ready(texture) => {
                    ui.add(egui::Image::new(texture));
                }
            });
    }

    fn render_add_dialog(&mut self, ctx: &egui::Context) {
        if !self.dialog.open {
            return;
        }

        let mut submitted = false;
        let mut cancelled = false;

        egui::Window::new("Add New Show")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                egui::Grid::new("add_show_form")
                    .num_columns(2)
                    .spacing([8.0, 6.0])
                    .show(ui, |ui| {
                        ui.label("Show Name:");
                        if ui.text_edit_singleline(&mut self.dialog.name_input).changed() {
                            self.dialog.name_error = validate_show_name(&self.dialog.name_input)
                                .err()
                                .map(|e| e.to_string());
                        }
                        ui.end_row();

                        ui.label("");
                        match &self.dialog.name_error {
                            Some(error) => {
                                ui.colored_label(egui::Color32::RED, error);
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.end_row();

                        ui.label("Show Code:");
                        if ui.text_edit_singleline(&mut self.dialog.code_input).changed() {
                            self.dialog.code_error = validate_show_code(&self.dialog.code_input)
                                .err()
                                .map(|e| e.to_string());
                        }
                        ui.end_row();

                        ui.label("");
                        match &self.dialog.code_error {
                            Some(error) => {
                                ui.colored_label(egui::Color32::RED, error);
                            }
                            None => {
                                ui.label("");
                            }
                        }
                        ui.end_row();

                        ui.label("Image:");
                        ui.horizontal(|ui| {
                            let display = self
                                .dialog
                                .image_path
                                .as_ref()
                                .map(|path| path.display().to_string())
                                .unwrap_or_default();
                            ui.add(
                                egui::TextEdit::singleline(&mut display.as_str())
                                    .desired_width(200.0),
                            );
                            if ui.button("Browse").clicked() {
                                if let Some(path) = rfd::FileDialog::new()
                                    .add_filter("Image Files", &["png", "jpg", "jpeg"])
                                    .pick_file()
                                {
                                    self.dialog.image_path = Some(path);
                                }
                            }
                        });
                        ui.end_row();
                    });

                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui
                        .add_enabled(self.dialog.is_valid(), egui::Button::new("Add"))
                        .clicked()
                    {
                        submitted = true;
                    }
                    if ui.button("Cancel").clicked() {
                        cancelled = true;
                    }
                });
            });

        if submitted {
            self.submit_new_show();
        } else if cancelled {
            self.dialog.close();
        }
    }
}

impl eframe::App for ShowShelfApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(error) = &self.error_message {
                ui.colored_label(egui::Color32::RED, error);
                ui.add_space(4.0);
            }
            if let Some(status) = &self.status_message {
                ui.colored_label(egui::Color32::GREEN, status);
                ui.add_space(4.0);
            }

            ui.columns(2, |columns| {
                self.render_show_table(&mut columns[0]);
                self.render_details(&mut columns[1]);
            });
        });

        self.render_add_dialog(ctx);
    }
}
