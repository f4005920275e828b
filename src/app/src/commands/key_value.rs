//! Key-value storage command definitions.
//!
//! These types define the interface between the Core and the Shell for the
//! platform key-value store (AsyncStorage, localStorage, ...).

use crux_core::{capability::Operation, command, Command};
use serde::{Deserialize, Serialize};
use std::marker::PhantomData;

// Operations that the Shell needs to perform on its key-value store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyValueOperation {
    Get { key: String },
    Set { key: String, value: String },
}

// The output from key-value operations (shell tells us what happened)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum KeyValueOutput {
    /// Result of a `Get`; `None` when the key was never written
    Value(Option<String>),
    /// Acknowledges a `Set`
    Written,
    Error { message: String },
}

impl Operation for KeyValueOperation {
    type Output = KeyValueOutput;
}

/// Builders for storage requests sent to the shell
pub struct KeyValue<Effect, Event> {
    _effect: PhantomData<Effect>,
    _event: PhantomData<Event>,
}

impl<Effect, Event> KeyValue<Effect, Event>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    /// Read the value stored under `key`
    pub fn get(key: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(KeyValueOperation::Get { key: key.into() })
    }

    /// Store `value` under `key`, overwriting any previous value
    pub fn set(key: impl Into<String>, value: impl Into<String>) -> RequestBuilder<Effect, Event> {
        RequestBuilder::new(KeyValueOperation::Set {
            key: key.into(),
            value: value.into(),
        })
    }
}

/// A pending storage request, not yet sent to the shell
#[must_use]
pub struct RequestBuilder<Effect, Event> {
    operation: KeyValueOperation,
    _effect: PhantomData<Effect>,
    _event: PhantomData<fn() -> Event>,
}

impl<Effect, Event> RequestBuilder<Effect, Event>
where
    Effect: Send + From<crux_core::Request<KeyValueOperation>> + 'static,
    Event: Send + 'static,
{
    fn new(operation: KeyValueOperation) -> Self {
        Self {
            operation,
            _effect: PhantomData,
            _event: PhantomData,
        }
    }

    /// Turn the storage request into a command step yielding the shell's output
    pub fn build(
        self,
    ) -> command::RequestBuilder<Effect, Event, impl std::future::Future<Output = KeyValueOutput>>
    {
        command::RequestBuilder::new(move |ctx| async move {
            Command::request_from_shell(self.operation)
                .into_future(ctx)
                .await
        })
    }
}
