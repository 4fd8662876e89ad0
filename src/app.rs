//! Application state and core logic

use crate::config::TuiConfig;
use crate::registry::{RegistrationRequest, RegistryClient, RegistryError, SimulatedRegistry};
use crate::state::{FormElement, RegisterForm, StatusKind, MSG_VALIDATION};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Events delivered back to the UI loop from background tasks
#[derive(Debug)]
pub enum AppEvent {
    RegistrationDone(Result<(), RegistryError>),
}

/// Main application struct
pub struct App {
    /// Loaded configuration (palette, wordmark, simulated latency)
    pub config: TuiConfig,
    /// Registration form state
    pub form: RegisterForm,
    /// Registry client the submit operation goes through
    registry: Arc<dyn RegistryClient>,
    /// Sender handed to spawned submission tasks
    events_tx: mpsc::UnboundedSender<AppEvent>,
    /// Receiver drained by the UI loop each iteration
    events_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance backed by the simulated registry
    pub fn new(config: TuiConfig) -> Self {
        let delay = Duration::from_millis(config.registry_delay_ms);
        let registry = Arc::new(SimulatedRegistry::with_delay(delay));
        Self::with_registry(config, registry)
    }

    /// Create an App with a specific registry client (used by tests)
    pub fn with_registry(config: TuiConfig, registry: Arc<dyn RegistryClient>) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        Self {
            config,
            form: RegisterForm::new(),
            registry,
            events_tx,
            events_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event on the registration page
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Submit shortcut works from any element
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit();
            }
            KeyCode::Tab | KeyCode::Down => self.form.next_element(),
            KeyCode::BackTab | KeyCode::Up => self.form.prev_element(),
            KeyCode::Enter => {
                if self.form.active_element == FormElement::SubmitButton {
                    self.submit();
                }
            }
            KeyCode::Esc => self.form.clear_status(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.form.active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.form.active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }
        Ok(())
    }

    /// Start a submission attempt
    ///
    /// Ignored while one is already in flight (the button is disabled then;
    /// this mirrors that guard, it is not a lock). Validation failures set
    /// the status line without entering the submitting state.
    fn submit(&mut self) {
        if self.form.submitting {
            return;
        }
        self.form.clear_status();

        if !self.form.validate() {
            self.form.set_status(StatusKind::Error, MSG_VALIDATION);
            return;
        }

        self.form.begin_submit();
        let request = RegistrationRequest {
            full_name: self.form.full_name.as_text().to_string(),
            access_code: self.form.access_code.as_text().to_string(),
        };
        tracing::info!(full_name = %request.full_name, "starting registration");

        let registry = Arc::clone(&self.registry);
        let tx = self.events_tx.clone();
        tokio::spawn(async move {
            let result = registry.register(&request).await;
            // Receiver only drops when the app is shutting down
            let _ = tx.send(AppEvent::RegistrationDone(result));
        });
    }

    /// Drain completed background work and apply it to the form
    ///
    /// The submitting flag is reset here on both outcomes, so a started
    /// attempt always ends with exactly one result message.
    pub fn poll_events(&mut self) {
        while let Ok(event) = self.events_rx.try_recv() {
            match event {
                AppEvent::RegistrationDone(Ok(())) => {
                    tracing::info!("registration completed");
                    self.form.finish_submit(true);
                }
                AppEvent::RegistrationDone(Err(err)) => {
                    tracing::warn!(error = %err, "registration failed");
                    self.form.finish_submit(false);
                }
            }
        }
    }
}
