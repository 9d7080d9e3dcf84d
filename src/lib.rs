//! Stanhole Trading & Projects — marketing site UI

pub mod app;
pub mod content;
pub mod panels;
pub mod reveal;
pub mod state;
pub mod theme;
pub mod view;

pub use app::SiteApp;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    use wasm_bindgen::JsCast as _;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    wasm_bindgen_futures::spawn_local(async {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .expect("no document");
        let canvas = document
            .get_element_by_id("site_canvas")
            .expect("no element with id 'site_canvas'")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("'site_canvas' is not a canvas");

        eframe::WebRunner::new()
            .start(
                canvas,
                eframe::WebOptions::default(),
                Box::new(|cc| Ok(Box::new(SiteApp::new(cc)))),
            )
            .await
            .expect("Failed to start eframe");
    });
}
