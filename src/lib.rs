//! Immersive 360° panorama viewer with clickable hotspots.
//!
//! The tour model, camera, picking and interaction state are plain Rust and
//! build on any target. The browser front-end (WebGPU rendering, DOM chrome,
//! listeners) only exists on `wasm32`.

pub mod assets;
pub mod camera;
pub mod catalog;
pub mod config;
pub mod constants;
pub mod content;
pub mod controls;
pub mod error;
pub mod events;
pub mod geometry;
pub mod input;
pub mod interaction;
pub mod picking;
pub mod session;
pub mod tour;
pub mod visuals;

#[cfg(target_arch = "wasm32")]
mod audio;
#[cfg(target_arch = "wasm32")]
mod dom;
#[cfg(target_arch = "wasm32")]
mod frame;
#[cfg(target_arch = "wasm32")]
mod fullscreen;
#[cfg(target_arch = "wasm32")]
mod mount;
#[cfg(target_arch = "wasm32")]
mod overlay;
#[cfg(target_arch = "wasm32")]
mod render;

#[cfg(target_arch = "wasm32")]
pub use web_api::{destination_to_tour, mount_viewer, sample_tours, start, PanoramaViewer};

#[cfg(target_arch = "wasm32")]
mod web_api {
    use crate::catalog;
    use crate::config::ViewerConfig;
    use crate::mount::{self, Mounted};
    use crate::tour::{Destination, Tour};
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    fn js_error(e: impl std::fmt::Display) -> JsValue {
        JsValue::from_str(&e.to_string())
    }

    #[wasm_bindgen(start)]
    pub fn start() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();
        log::info!("panorama-viewer loaded");
        Ok(())
    }

    /// Handle to a mounted viewer. Dropping or freeing it unmounts too.
    #[wasm_bindgen]
    pub struct PanoramaViewer {
        inner: Option<Rc<Mounted>>,
    }

    #[wasm_bindgen]
    impl PanoramaViewer {
        /// Detach listeners, stop rendering and media, and remove the viewer's
        /// DOM. Safe to call more than once.
        pub fn unmount(&mut self) {
            if let Some(viewer) = self.inner.take() {
                viewer.unmount();
            }
        }
    }

    impl Drop for PanoramaViewer {
        fn drop(&mut self) {
            self.unmount();
        }
    }

    /// Mount a viewer into the element with id `root_id`. Without `tour_json`
    /// the first sample tour is shown.
    #[wasm_bindgen]
    pub async fn mount_viewer(
        root_id: String,
        tour_json: Option<String>,
        config_json: Option<String>,
        on_close: Option<js_sys::Function>,
    ) -> Result<PanoramaViewer, JsValue> {
        let tour = match tour_json.as_deref() {
            Some(json) => Tour::from_json(json).map_err(js_error)?,
            None => catalog::default_tour(),
        };
        let config = ViewerConfig::from_json(config_json.as_deref()).map_err(js_error)?;
        let viewer = mount::mount(&root_id, tour, config, on_close)
            .await
            .map_err(|e| {
                log::error!("mount error: {:?}", e);
                JsValue::from_str(&format!("{e:#}"))
            })?;
        Ok(PanoramaViewer {
            inner: Some(viewer),
        })
    }

    /// Convert a destination catalog row into tour JSON.
    #[wasm_bindgen]
    pub fn destination_to_tour(json: &str) -> Result<String, JsValue> {
        let destination = Destination::from_json(json).map_err(js_error)?;
        Tour::from(destination).to_json().map_err(js_error)
    }

    /// The built-in sample tours as a JSON array.
    #[wasm_bindgen]
    pub fn sample_tours() -> Result<String, JsValue> {
        serde_json::to_string(&catalog::sample_tours()).map_err(js_error)
    }
}
