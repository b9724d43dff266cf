//! Writes the static page metadata into the document head.

use shared::PageMetadata;
use wasm_bindgen::JsValue;

pub fn apply(meta: &PageMetadata) {
    match try_apply(meta) {
        Ok(()) => log::debug!("📄 Page metadata applied: {}", meta.title),
        Err(e) => log::warn!("⚠️ Could not apply page metadata: {:?}", e),
    }
}

fn try_apply(meta: &PageMetadata) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))?;

    document.set_title(meta.title);

    let description = match document.query_selector("meta[name=\"description\"]")? {
        Some(tag) => tag,
        None => {
            let tag = document.create_element("meta")?;
            tag.set_attribute("name", "description")?;
            let head = document
                .head()
                .ok_or_else(|| JsValue::from_str("document has no <head>"))?;
            head.append_child(&tag)?;
            tag
        }
    };
    description.set_attribute("content", meta.description)?;

    Ok(())
}
