//! Bridge to the host page's `Bokeh.embed.embed_item` call.
//!
//! The validated [`TrendPlot`] envelope is serialized back to a JS value
//! and forwarded verbatim; its `doc` interior is never interpreted here.
//! Requires a browser environment with BokehJS loaded.

use crate::net::types::TrendPlot;

#[cfg(feature = "hydrate")]
mod js {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        #[wasm_bindgen(js_namespace = ["Bokeh", "embed"], js_name = embed_item, catch)]
        pub fn embed_item(item: &JsValue, target_id: &str) -> Result<(), JsValue>;
    }
}

/// Embed the plot into the container with the given element id.
pub fn embed_item(plot: &TrendPlot, target_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        let serialized = match serde_json::to_string(plot) {
            Ok(s) => s,
            Err(e) => {
                log::warn!("trend plot serialization failed: {e}");
                return;
            }
        };
        let item = match js_sys::JSON::parse(&serialized) {
            Ok(v) => v,
            Err(_) => {
                log::warn!("trend plot payload is not valid JSON");
                return;
            }
        };
        if js::embed_item(&item, target_id).is_err() {
            log::warn!("Bokeh.embed.embed_item failed for #{target_id}");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (plot, target_id);
    }
}

/// Clear the container with the given element id, dropping any embedded
/// chart along with its DOM subtree.
pub fn clear_container(target_id: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(target_id))
        {
            el.set_inner_html("");
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = target_id;
    }
}
