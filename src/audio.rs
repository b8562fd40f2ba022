use crate::content::MediaKind;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// The one media element a hotspot panel may be playing.
#[derive(Default)]
pub struct MediaPlayer {
    current: Option<web::HtmlMediaElement>,
}

fn create_element(kind: MediaKind, url: &str, slot: &web::HtmlElement) -> Result<web::HtmlMediaElement, JsValue> {
    match kind {
        MediaKind::Audio => {
            let audio = web::HtmlAudioElement::new_with_src(url)?;
            Ok(audio.unchecked_into())
        }
        MediaKind::Video => {
            let document = slot
                .owner_document()
                .ok_or_else(|| JsValue::from_str("detached media slot"))?;
            let video: web::HtmlVideoElement = document.create_element("video")?.dyn_into()?;
            video.set_src(url);
            video.set_controls(true);
            _ = video.set_attribute("playsinline", "");
            _ = video.set_attribute("style", "width:100%;border-radius:6px");
            slot.append_child(&video)?;
            Ok(video.unchecked_into())
        }
    }
}

impl MediaPlayer {
    /// Start `url`, replacing whatever was playing. A rejected `play()` is
    /// only logged; autoplay policies reject it routinely.
    pub fn play(&mut self, kind: MediaKind, url: &str, muted: bool, slot: &web::HtmlElement) {
        self.stop();
        let el = match create_element(kind, url, slot) {
            Ok(el) => el,
            Err(e) => {
                log::warn!("[media] cannot create {:?} element for {}: {:?}", kind, url, e);
                return;
            }
        };
        el.set_muted(muted);
        match el.play() {
            Ok(promise) => {
                let url = url.to_owned();
                spawn_local(async move {
                    if let Err(e) = JsFuture::from(promise).await {
                        log::warn!("[media] play() rejected for {}: {:?}", url, e);
                    }
                });
            }
            Err(e) => log::warn!("[media] play() threw for {}: {:?}", url, e),
        }
        log::info!("[media] playing {:?} {}", kind, url);
        self.current = Some(el);
    }

    pub fn set_muted(&self, muted: bool) {
        if let Some(el) = &self.current {
            el.set_muted(muted);
        }
    }

    pub fn stop(&mut self) {
        if let Some(el) = self.current.take() {
            _ = el.pause();
            // releases the network stream
            el.remove_attribute("src").ok();
            el.load();
            el.remove();
        }
    }
}

impl Drop for MediaPlayer {
    fn drop(&mut self) {
        self.stop();
    }
}
