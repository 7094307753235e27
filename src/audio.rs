use wasm_bindgen::JsCast;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

/// Looping background track backed by an `<audio>` element.
///
/// Paused when dropped so a torn-down page never leaves music running.
pub struct BackgroundMusic {
    element: web::HtmlAudioElement,
    name: &'static str,
}

impl BackgroundMusic {
    pub fn new(name: &'static str, url: &str, volume: f64) -> anyhow::Result<Self> {
        let element = web::HtmlAudioElement::new_with_src(url)
            .map_err(|e| anyhow::anyhow!("audio element for {}: {:?}", url, e))?;
        element.set_loop(true);
        element.set_volume(volume);
        element.set_preload("auto");
        Ok(Self { element, name })
    }

    /// Start playback. Browsers may refuse autoplay; that is logged and ignored.
    pub fn play(&self) {
        let name = self.name;
        match self.element.play() {
            Ok(promise) => spawn_local(async move {
                if let Err(e) = JsFuture::from(promise).await {
                    let reason = e
                        .dyn_ref::<js_sys::Error>()
                        .map(|err| String::from(err.message()))
                        .unwrap_or_else(|| format!("{:?}", e));
                    log::warn!("[audio] {} autoplay blocked: {}", name, reason);
                }
            }),
            Err(e) => log::warn!("[audio] {} play failed: {:?}", name, e),
        }
        log::info!("[audio] {} playing", name);
    }

    pub fn stop(&self) {
        _ = self.element.pause();
        self.element.set_current_time(0.0);
        log::info!("[audio] {} stopped", self.name);
    }
}

impl Drop for BackgroundMusic {
    fn drop(&mut self) {
        _ = self.element.pause();
    }
}

pub fn load(name: &'static str, url: &str, volume: f64) -> Option<BackgroundMusic> {
    match BackgroundMusic::new(name, url, volume) {
        Ok(music) => Some(music),
        Err(e) => {
            log::warn!("[audio] {}", e);
            None
        }
    }
}
