#![cfg(target_arch = "wasm32")]
//! Browser-side checks for the interceptor and the graph builder's failure
//! paths. Run with `wasm-pack test --headless --chrome crates/fx-web`.

use fx_core::{Preset, REVERB_MODULE_KEY};
use fx_web::graph;
use fx_web::intercept;
use fx_web::session::Session;
use fx_web::storage::LocalPrefs;
use wasm_bindgen_test::*;
use web_sys as web;

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> web::Document {
    web::window().unwrap().document().unwrap()
}

#[wasm_bindgen_test]
fn wrapper_passes_non_media_elements_through() {
    let prefs = LocalPrefs::new();
    let session = Session::new(&prefs);
    intercept::install(session.clone(), prefs).unwrap();

    let element = document().create_element("div").unwrap();
    assert_eq!(element.tag_name().to_lowercase(), "div");
    assert_eq!(session.media_count(), 0);
}

#[wasm_bindgen_test]
fn wrapper_rethrows_create_element_exceptions() {
    let prefs = LocalPrefs::new();
    let session = Session::new(&prefs);
    intercept::install(session.clone(), prefs).unwrap();

    // An invalid tag name throws from the native createElement; the wrapper
    // must surface the same exception, not hide it behind undefined.
    assert!(document().create_element("not a tag").is_err());

    // And the wrapper keeps working afterwards.
    assert!(document().create_element("div").is_ok());
}

#[wasm_bindgen_test]
async fn routing_without_media_is_rejected_without_side_effects() {
    let prefs = LocalPrefs::new();
    let session = Session::new(&prefs);

    assert!(graph::ensure_routed(&session, &prefs, Preset::Norm)
        .await
        .is_err());
    assert!(session.chain().context.is_none());
    assert!(!session.is_building());
}

#[wasm_bindgen_test]
async fn missing_worklet_module_leaves_the_element_unbound() {
    let storage = web::window().unwrap().local_storage().unwrap().unwrap();
    storage.remove_item(REVERB_MODULE_KEY).unwrap();

    let prefs = LocalPrefs::new();
    let session = Session::new(&prefs);
    intercept::install(session.clone(), prefs.clone()).unwrap();

    document().create_element("audio").unwrap();
    assert_eq!(session.media_count(), 1);

    // Without the module URL the build must fail before the media element is
    // captured into the context, otherwise playback would go silent.
    assert!(graph::ensure_routed(&session, &prefs, Preset::Bige)
        .await
        .is_err());
    let chain = session.chain();
    assert!(chain.source.is_none());
    assert!(!chain.module_loaded);
}
