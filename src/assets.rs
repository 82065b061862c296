use crate::core::{parse_manifest, placeholder_assembly, PartSpec};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// Human-readable text for a rejected JS promise.
fn js_error_message(value: &wasm_bindgen::JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

async fn fetch_text(url: &str) -> anyhow::Result<String> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let resp = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: {}", js_error_message(&e)))?;
    let resp: web::Response = resp
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("fetch {url}: not a Response: {:?}", e))?;
    if !resp.ok() {
        anyhow::bail!("fetch {url}: HTTP {}", resp.status());
    }
    let text_promise = resp
        .text()
        .map_err(|e| anyhow::anyhow!("fetch {url}: body: {}", js_error_message(&e)))?;
    let text = JsFuture::from(text_promise)
        .await
        .map_err(|e| anyhow::anyhow!("fetch {url}: body: {}", js_error_message(&e)))?;
    text.as_string()
        .ok_or_else(|| anyhow::anyhow!("fetch {url}: body is not text"))
}

async fn load_manifest(url: &str) -> anyhow::Result<Vec<PartSpec>> {
    let text = fetch_text(url).await?;
    Ok(parse_manifest(&text)?)
}

/// Parts for the scene: the manifest at `model_url` when it loads and
/// validates, the built-in placeholder otherwise.
pub async fn load_assembly(model_url: Option<&str>) -> Vec<PartSpec> {
    let Some(url) = model_url else {
        log::info!("[assets] no model configured; using placeholder assembly");
        return placeholder_assembly();
    };
    match load_manifest(url).await {
        Ok(parts) => {
            log::info!("[assets] loaded {} parts from {}", parts.len(), url);
            parts
        }
        Err(e) => {
            log::warn!("[assets] model load failed ({:#}); using placeholder assembly", e);
            placeholder_assembly()
        }
    }
}
