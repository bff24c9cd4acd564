// Copyright 2025 the Easel Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Replays a scripted pointer session against a demo scene and prints the
//! resulting frame as JSON.
//!
//! Pass a JSON `DemoConfig` path as the first argument to override the
//! defaults. Set `RUST_LOG=easel_scene=trace` to see every routed gesture.

use std::error::Error;

use easel_demos::{DemoConfig, Replayer, sample_session};
use serde_json::json;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with_target(true)
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)?;
            info!(%path, "loaded config");
            serde_json::from_str::<DemoConfig>(&text)?
        }
        None => DemoConfig::default(),
    };

    let mut replayer = Replayer::new(&config);
    for event in sample_session() {
        for reaction in replayer.apply(event) {
            info!(?event, ?reaction, "reaction");
        }
    }

    let frame = replayer.surface().frame();
    let items: Vec<_> = frame
        .items
        .iter()
        .map(|item| {
            json!({
                "id": item.id,
                "rect": item.rect,
                "transform": item.transform.as_coeffs(),
                "selected": item.outline.is_some(),
            })
        })
        .collect();
    let summary = json!({
        "revision": frame.state.revision(),
        "selected": frame.state.selected(),
        "viewport": {
            "scale": frame.viewport.scale(),
            "offset": frame.viewport.offset(),
        },
        "items": items,
    });
    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
