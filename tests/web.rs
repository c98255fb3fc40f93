#![cfg(target_arch = "wasm32")]

use backdrop_web::Backdrop;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn add_canvas(id: &str) -> web_sys::HtmlCanvasElement {
    let document = web_sys::window().unwrap().document().unwrap();
    let canvas = document
        .create_element("canvas")
        .unwrap()
        .dyn_into::<web_sys::HtmlCanvasElement>()
        .unwrap();
    canvas.set_id(id);
    canvas
        .set_attribute("style", "width: 300px; height: 200px; display: block")
        .unwrap();
    document.body().unwrap().append_child(&canvas).unwrap();
    canvas
}

#[wasm_bindgen_test]
fn mount_sizes_backing_store_and_unmounts_once() {
    let canvas = add_canvas("bd-mount");
    let mut backdrop = Backdrop::mount("bd-mount", "dot-grid", None).expect("mount");
    assert!(backdrop.is_mounted());
    assert_eq!(backdrop.effect_name(), "dots");
    assert!(canvas.width() >= 300);
    assert!(canvas.height() >= 200);

    backdrop.unmount();
    assert!(!backdrop.is_mounted());
    backdrop.unmount();
    canvas.remove();
}

#[wasm_bindgen_test]
fn mount_with_seed_string() {
    let canvas = add_canvas("bd-seed");
    let mut backdrop = Backdrop::mount("bd-seed", "gravity", Some("42".into())).expect("mount");
    assert_eq!(backdrop.effect_name(), "gravity");
    backdrop.unmount();
    canvas.remove();
}

#[wasm_bindgen_test]
fn unknown_effect_is_rejected() {
    let canvas = add_canvas("bd-unknown");
    assert!(Backdrop::mount("bd-unknown", "confetti", None).is_err());
    canvas.remove();
}

#[wasm_bindgen_test]
fn missing_canvas_is_rejected() {
    assert!(Backdrop::mount("bd-nowhere", "aurora", None).is_err());
}

#[wasm_bindgen_test(async)]
async fn frames_run_until_unmount() {
    let canvas = add_canvas("bd-frames");
    let mut backdrop = Backdrop::mount("bd-frames", "network", Some("7".into())).expect("mount");
    // Let a few animation frames through before tearing down.
    for _ in 0..3 {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .request_animation_frame(&resolve)
                .unwrap();
        });
        wasm_bindgen_futures::JsFuture::from(promise).await.unwrap();
    }
    backdrop.unmount();
    assert!(!backdrop.is_mounted());
    canvas.remove();
}
