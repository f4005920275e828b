use crux_core::{render::render, Command};
use log::{info, warn};

use crate::events::{Event, SettingsEvent};
use crate::handle_response;
use crate::model::Model;
use crate::update_field;
use crate::{Effect, SettingsCmd};

/// Handle settings screen events (form edits, load and save)
pub fn handle(event: SettingsEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        SettingsEvent::Load => SettingsCmd::load().then_send(|result| {
            Event::Settings(SettingsEvent::LoadResponse(
                result.map_err(|e| e.to_string()),
            ))
        }),

        SettingsEvent::LoadResponse(result) => {
            match result {
                Ok(record) => {
                    model.settings_form.apply(record);
                    model.error_message = None;
                }
                Err(e) => {
                    warn!("settings could not be loaded: {e}");
                    model.error_message = Some(format!("Failed to load settings: {e}"));
                }
            }
            render()
        }

        SettingsEvent::UpdateDeviceAddress(value) => {
            update_field!(model.settings_form.device_address, value)
        }
        SettingsEvent::UpdateStreamUrl(value) => {
            update_field!(model.settings_form.stream_url, value)
        }
        SettingsEvent::UpdateTimeout(value) => update_field!(model.settings_form.timeout_ms, value),

        SettingsEvent::Save => {
            model.start_saving();
            let record = model.settings_form.to_record();

            Command::all([
                render(),
                SettingsCmd::save(record).then_send(|result| {
                    Event::Settings(SettingsEvent::SaveResponse(
                        result.map_err(|e| format!("Failed to save settings: {e}")),
                    ))
                }),
            ])
        }

        SettingsEvent::SaveResponse(result) => {
            if result.is_ok() {
                info!("Settings saved.");
            }
            handle_response!(model, result, {
                success_message: "Settings saved.",
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_STREAM_URL;

    #[test]
    fn form_update_renders_only_on_change() {
        let mut model = Model::default();

        let mut cmd = handle(
            SettingsEvent::UpdateStreamUrl(DEFAULT_STREAM_URL.to_string()),
            &mut model,
        );
        assert!(cmd.effects().next().is_none());

        let mut cmd = handle(
            SettingsEvent::UpdateStreamUrl("http://10.0.0.7/stream.mjpg".to_string()),
            &mut model,
        );
        assert!(matches!(cmd.effects().next(), Some(Effect::Render(_))));
        assert_eq!(model.settings_form.stream_url, "http://10.0.0.7/stream.mjpg");
    }

    #[test]
    fn save_marks_form_as_saving() {
        let mut model = Model {
            success_message: Some("Settings saved.".to_string()),
            ..Default::default()
        };

        let _ = handle(SettingsEvent::Save, &mut model);

        assert!(model.settings_form.is_saving);
        assert_eq!(model.success_message, None);
    }

    #[test]
    fn save_failure_sets_error() {
        let mut model = Model::default();
        model.start_saving();

        let _ = handle(
            SettingsEvent::SaveResponse(Err("Failed to save settings: quota exceeded".to_string())),
            &mut model,
        );

        assert!(!model.settings_form.is_saving);
        assert_eq!(
            model.error_message.as_deref(),
            Some("Failed to save settings: quota exceeded")
        );
        assert_eq!(model.success_message, None);
    }

    #[test]
    fn successful_load_clears_previous_load_error() {
        let mut model = Model {
            error_message: Some("Failed to load settings: locked".to_string()),
            ..Default::default()
        };

        let _ = handle(
            SettingsEvent::LoadResponse(Ok(crate::types::SettingsRecord {
                device_address: "192.168.1.5".to_string(),
                stream_url: "http://192.168.1.5:10001/stream.mjpg".to_string(),
                timeout_ms: String::new(),
            })),
            &mut model,
        );

        assert_eq!(model.error_message, None);
        assert_eq!(model.settings_form.device_address, "192.168.1.5");
    }

    #[test]
    fn load_failure_keeps_form_defaults() {
        let mut model = Model::default();

        let _ = handle(
            SettingsEvent::LoadResponse(Err("failed to read 'doorbellIp': locked".to_string())),
            &mut model,
        );

        assert_eq!(model.settings_form.stream_url, DEFAULT_STREAM_URL);
        assert!(model.error_message.is_some());
    }
}
