#![forbid(unsafe_code)]

//! Captures of the rendered window.
//!
//! Two snapshots compare equal iff the same surfaces are bound to the same
//! items at the same geometry with the same content. The checksum is a
//! blake3 hash of the JSON form, stable across runs.

use infinilist::InfiniteList;
use infinilist_core::LayerHeight;
use serde_json::json;

use crate::headless::HeadlessHost;

const CHECKSUM_PREFIX: &str = "blake3:";

/// One bound layer.
#[derive(Debug, Clone, PartialEq)]
pub struct LayerSnapshot {
    pub index: usize,
    pub type_id: String,
    pub offset: f64,
    /// `None` for auto-height layers.
    pub height: Option<f64>,
    pub surface_id: u64,
    pub text: String,
}

/// The rendered window plus scroll state.
#[derive(Debug, Clone, PartialEq)]
pub struct WindowSnapshot {
    pub scroll_offset: f64,
    pub layers: Vec<LayerSnapshot>,
    pub scrollbar_height: f64,
    pub scrollbar_offset: f64,
}

impl WindowSnapshot {
    pub fn capture(list: &InfiniteList<HeadlessHost>) -> Self {
        let layers = list
            .rendered_layers()
            .filter_map(|layer| {
                Some(LayerSnapshot {
                    index: layer.index()?,
                    type_id: layer.type_id().unwrap_or_default().to_owned(),
                    offset: layer.offset(),
                    height: match layer.height() {
                        LayerHeight::Px(px) => Some(px),
                        LayerHeight::Auto => None,
                    },
                    surface_id: layer.surface().id(),
                    text: layer.surface().text().to_owned(),
                })
            })
            .collect();
        let scrollbar = list.scrollbar();
        Self {
            scroll_offset: list.scroll_offset(),
            layers,
            scrollbar_height: scrollbar.height,
            scrollbar_offset: scrollbar.offset,
        }
    }

    pub fn indices(&self) -> Vec<usize> {
        self.layers.iter().map(|l| l.index).collect()
    }

    pub fn to_json(&self) -> serde_json::Value {
        json!({
            "scroll_offset": self.scroll_offset,
            "scrollbar": { "height": self.scrollbar_height, "offset": self.scrollbar_offset },
            "layers": self.layers.iter().map(|l| json!({
                "index": l.index,
                "type": l.type_id,
                "offset": l.offset,
                "height": l.height,
                "surface": l.surface_id,
                "text": l.text,
            })).collect::<Vec<_>>(),
        })
    }

    /// Stable content hash, prefixed with `blake3:`.
    pub fn checksum(&self) -> String {
        let bytes = self.to_json().to_string();
        format!("{CHECKSUM_PREFIX}{}", blake3::hash(bytes.as_bytes()).to_hex())
    }
}
