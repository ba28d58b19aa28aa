use std::time::Duration;

use eframe::{egui, Frame};
use egui::Context;

use reqwest::blocking::{Client, Response};
use serde::Deserialize;

/// Characters of a variant shown on its button.
const LABEL_CHARS: usize = 30;

/// Button label of a variant: its first `LABEL_CHARS` characters.
fn button_label(item: &str) -> String {
    item.chars().take(LABEL_CHARS).collect()
}

/// Page as returned by the server.
#[derive(Debug, Deserialize)]
struct PageDto {
    items: Vec<String>,
}

/// Body of every session endpoint.
#[derive(Debug, Deserialize)]
struct SessionDto {
    session_id: String,
    label: String,
    page: PageDto,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

#[derive(Debug, Deserialize)]
struct ErrorDto {
    error: ErrorDetail,
}

/// REST context holding a reusable blocking HTTP client.
struct RESTContext {
    client: Client,
    base_url: String,
}

impl RESTContext {
    /// Creates a new REST context with a timeout.
    ///
    /// The server address comes from `FONT_GEN_URL`.
    fn new() -> reqwest::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::new(10, 0))
            .build()?;
        let base_url = std::env::var("FONT_GEN_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".to_owned());
        Ok(Self { client, base_url })
    }

    /// Sends a POST request to `/v1/sessions`.
    fn post_session(&self, viewer: i64, text: &str) -> Result<SessionDto, String> {
        let response = self.client
            .post(format!("{}/v1/sessions", self.base_url))
            .query(&[("viewer", viewer.to_string().as_str()), ("text", text)])
            .send()
            .map_err(|e| e.to_string())?;
        Self::read_session(response)
    }

    /// Sends a PUT request to `/v1/sessions/{id}/{direction}`.
    fn put_navigation(&self, id: &str, viewer: i64, direction: &str) -> Result<SessionDto, String> {
        let response = self.client
            .put(format!("{}/v1/sessions/{id}/{direction}", self.base_url))
            .query(&[("viewer", viewer)])
            .send()
            .map_err(|e| e.to_string())?;
        Self::read_session(response)
    }

    /// Decodes a session body, or the server's error message.
    fn read_session(response: Response) -> Result<SessionDto, String> {
        let status = response.status();
        if status.is_success() {
            return response.json::<SessionDto>().map_err(|e| e.to_string());
        }
        match response.json::<ErrorDto>() {
            Ok(body) => Err(body.error.message),
            Err(_) => Err(format!("Server answered {status}")),
        }
    }
}

/// Global UI state (MUST persist between frames in egui).
struct StylizerUI {
    rest: RESTContext,
    viewer: i64,
    text: String,
    session: Option<SessionDto>,
    status: Option<String>,
}

impl StylizerUI {
    /// Initializes the UI with an empty session.
    fn new() -> reqwest::Result<Self> {
        Ok(Self {
            rest: RESTContext::new()?,
            viewer: 1,
            text: String::new(),
            session: None,
            status: None,
        })
    }

    /// Starts a new session for the current text.
    fn stylize(&mut self) {
        match self.rest.post_session(self.viewer, &self.text) {
            Ok(session) => {
                self.session = Some(session);
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }

    /// Moves the current session one page.
    fn navigate(&mut self, direction: &str) {
        let Some(id) = self.session.as_ref().map(|s| s.session_id.clone()) else {
            return;
        };
        match self.rest.put_navigation(&id, self.viewer, direction) {
            Ok(session) => {
                self.session = Some(session);
                self.status = None;
            }
            Err(e) => self.status = Some(format!("Error: {e}")),
        }
    }
}

impl eframe::App for StylizerUI {
    /// UI update loop (called every frame).
    fn update(&mut self, ctx: &Context, _: &mut Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Grid::new("stylizer_grid")
                .num_columns(2)
                .spacing([20.0, 6.0])
                .show(ui, |ui| {
                    ui.label("Viewer");
                    ui.add(egui::DragValue::new(&mut self.viewer).speed(1));
                    ui.end_row();

                    ui.label("Text");
                    ui.text_edit_singleline(&mut self.text);
                    ui.end_row();
                });

            if ui
                .add_sized([200.0, 40.0], egui::Button::new("Stylize"))
                .clicked()
            {
                self.stylize();
            }

            ui.separator();

            let mut direction = None;
            match &self.session {
                Some(session) => {
                    for item in &session.page.items {
                        // Clicking a variant copies it in full
                        if ui.button(button_label(item)).clicked() {
                            ctx.copy_text(item.clone());
                            self.status = Some("Copied".to_owned());
                        }
                    }

                    ui.horizontal(|ui| {
                        if ui.button("◀").clicked() {
                            direction = Some("prev");
                        }
                        ui.label(&session.label);
                        if ui.button("▶").clicked() {
                            direction = Some("next");
                        }
                    });
                }
                None => {
                    ui.label("Type some text and click Stylize");
                }
            }

            if let Some(direction) = direction {
                self.navigate(direction);
            }

            if let Some(status) = &self.status {
                ui.label(status);
            }
        });
    }
}

/// Application entry point.
fn main() -> eframe::Result {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([440.0, 380.0])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "font-gen",
        options,
        Box::new(|_| Ok(Box::new(StylizerUI::new()?))),
    )
}
