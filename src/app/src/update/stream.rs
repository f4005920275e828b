use crux_core::{render::render, Command};
use log::{debug, info, warn};

use crate::events::{Event, StreamEvent};
use crate::model::Model;
use crate::{Effect, SettingsCmd};

/// Handle stream viewer events (reload, settings lookup, browser surface callbacks)
pub fn handle(event: StreamEvent, model: &mut Model) -> Command<Effect, Event> {
    match event {
        StreamEvent::Reload => {
            let session = model.viewer.begin_reload();
            debug!("stream session {session}: resolving stream URL");

            Command::all([
                render(),
                SettingsCmd::load().then_send(move |result| {
                    Event::Stream(StreamEvent::SettingsResolved {
                        session,
                        result: result.map_err(|e| e.to_string()),
                    })
                }),
            ])
        }

        StreamEvent::SettingsResolved { session, result } => {
            if !model.viewer.resolve(session, result) {
                debug!("stream session {session}: settings lookup no longer applies");
                return Command::done();
            }
            match (model.viewer.url(), model.viewer.error_message()) {
                (Some(url), _) => info!("stream session {session}: loading {url}"),
                (None, Some(message)) => warn!("stream session {session}: {message}"),
                (None, None) => {}
            }
            render()
        }

        StreamEvent::ContentLoaded { session } => {
            if model.viewer.content_loaded(session) {
                debug!("stream session {session}: content loaded");
                render()
            } else {
                Command::done()
            }
        }

        StreamEvent::ContentFailed {
            session,
            description,
        } => {
            if model.viewer.content_failed(session) {
                warn!("stream session {session}: browser surface failed: {description}");
                render()
            } else {
                Command::done()
            }
        }

        StreamEvent::LoadTimedOut { session } => {
            if model.viewer.load_timed_out(session) {
                warn!("stream session {session}: load timed out");
                render()
            } else {
                Command::done()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ViewerState, STREAM_ERROR_MESSAGE};

    const URL: &str = "http://192.168.1.5:10001/stream.mjpg";

    fn ready_model(session: u64) -> Model {
        Model {
            viewer: crate::types::StreamViewer {
                state: ViewerState::Ready {
                    url: URL.to_string(),
                },
                session,
                is_loading: true,
                load_timeout_ms: None,
            },
            ..Default::default()
        }
    }

    #[test]
    fn reload_enters_loading_and_requests_settings() {
        let mut model = ready_model(1);

        let mut cmd = handle(StreamEvent::Reload, &mut model);

        assert_eq!(model.viewer.state, ViewerState::Loading);
        assert_eq!(model.viewer.session, 2);
        let effects: Vec<Effect> = cmd.effects().collect();
        assert!(effects.iter().any(|effect| matches!(effect, Effect::Render(_))));
        assert!(effects
            .iter()
            .any(|effect| matches!(effect, Effect::KeyValue(_))));
    }

    #[test]
    fn content_failure_renders_error() {
        let mut model = ready_model(3);

        let mut cmd = handle(
            StreamEvent::ContentFailed {
                session: 3,
                description: "connection refused".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.viewer.error_message(), Some(STREAM_ERROR_MESSAGE));
        assert!(!model.viewer.is_loading);
        assert!(matches!(cmd.effects().next(), Some(Effect::Render(_))));
    }

    #[test]
    fn stale_content_failure_does_not_render() {
        let mut model = ready_model(3);

        let mut cmd = handle(
            StreamEvent::ContentFailed {
                session: 2,
                description: "connection refused".to_string(),
            },
            &mut model,
        );

        assert_eq!(model.viewer.url(), Some(URL));
        assert!(cmd.effects().next().is_none());
    }

    #[test]
    fn stale_settings_lookup_is_dropped() {
        let mut model = ready_model(5);

        let mut cmd = handle(
            StreamEvent::SettingsResolved {
                session: 4,
                result: Err("storage offline".to_string()),
            },
            &mut model,
        );

        assert_eq!(model.viewer.url(), Some(URL));
        assert!(cmd.effects().next().is_none());
    }
}
