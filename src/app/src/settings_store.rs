//! Settings persistence on top of the shell's key-value store.
//!
//! Both the settings screen and the stream viewer go through `SettingsStore`;
//! nothing else in the core knows the storage keys.

use std::fmt;
use std::future::Future;
use std::marker::PhantomData;

use crux_core::command::{self, CommandContext};
use log::{debug, error};

use crate::commands::key_value::{KeyValue, KeyValueOperation, KeyValueOutput};
use crate::types::{SettingsRecord, DEVICE_ADDRESS_KEY, STREAM_URL_KEY, TIMEOUT_KEY};

/// Failure reported by the shell's key-value store
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    Read { key: String, message: String },
    Write { key: String, message: String },
    /// The shell answered with an output that does not belong to the request
    UnexpectedOutput { key: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { key, message } => write!(f, "failed to read '{key}': {message}"),
            Self::Write { key, message } => write!(f, "failed to write '{key}': {message}"),
            Self::UnexpectedOutput { key } => {
                write!(f, "unexpected storage response for '{key}'")
            }
        }
    }
}

impl std::error::Error for StorageError {}

/// Command-based access to the persisted settings record
pub struct SettingsStore<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> SettingsStore<Effect, Event>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read all three settings keys.
    ///
    /// Keys that were never written load as empty strings. The first failed
    /// read aborts the load.
    pub fn load() -> command::RequestBuilder<
        Effect,
        Event,
        impl Future<Output = Result<SettingsRecord, StorageError>>,
    > {
        command::RequestBuilder::new(|ctx| async move {
            let device_address = read(ctx.clone(), DEVICE_ADDRESS_KEY).await?;
            let stream_url = read(ctx.clone(), STREAM_URL_KEY).await?;
            let timeout_ms = read(ctx.clone(), TIMEOUT_KEY).await?;

            Ok(SettingsRecord {
                device_address: device_address.unwrap_or_default(),
                stream_url: stream_url.unwrap_or_default(),
                timeout_ms: timeout_ms.unwrap_or_default(),
            })
        })
    }

    /// Write all three settings keys, overwriting previous values.
    ///
    /// Writes happen one key at a time and are not rolled back: if a write
    /// fails, earlier keys keep their new values and later keys their old ones.
    pub fn save(
        record: SettingsRecord,
    ) -> command::RequestBuilder<Effect, Event, impl Future<Output = Result<(), StorageError>>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            for (key, value) in record.into_entries() {
                write(ctx.clone(), key, value).await?;
            }
            Ok(())
        })
    }
}

async fn read<Effect, Event>(
    ctx: CommandContext<Effect, Event>,
    key: &str,
) -> Result<Option<String>, StorageError>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    let output = KeyValue::<Effect, Event>::get(key)
        .build()
        .into_future(ctx)
        .await;

    match output {
        KeyValueOutput::Value(value) => {
            debug!("storage read '{key}': {}", if value.is_some() { "set" } else { "absent" });
            Ok(value)
        }
        KeyValueOutput::Error { message } => {
            error!("storage read '{key}' failed: {message}");
            Err(StorageError::Read {
                key: key.to_string(),
                message,
            })
        }
        KeyValueOutput::Written => Err(StorageError::UnexpectedOutput {
            key: key.to_string(),
        }),
    }
}

async fn write<Effect, Event>(
    ctx: CommandContext<Effect, Event>,
    key: &str,
    value: String,
) -> Result<(), StorageError>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    let output = KeyValue::<Effect, Event>::set(key, value)
        .build()
        .into_future(ctx)
        .await;

    match output {
        KeyValueOutput::Written => Ok(()),
        KeyValueOutput::Error { message } => {
            error!("storage write '{key}' failed: {message}");
            Err(StorageError::Write {
                key: key.to_string(),
                message,
            })
        }
        KeyValueOutput::Value(_) => Err(StorageError::UnexpectedOutput {
            key: key.to_string(),
        }),
    }
}
