use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use virtualchime_core::{
    events::{SettingsEvent, StreamEvent, UiEvent},
    types::{SettingsRecord, ViewerState},
    App, KeyValueOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<SettingsEvent>()?;
    gen.register_type::<StreamEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Shell-facing enums and the storage response the shell has to produce
    gen.register_type::<ViewerState>()?;
    gen.register_type::<KeyValueOutput>()?;
    gen.register_type::<SettingsRecord>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
