//! Decorative 3D avatar.
//!
//! A transparent three.js canvas inside `#threeMount`. The model turns
//! toward the pointer; the frame loop runs only while the page is visible.

use crate::shared::config::use_site_config;
use crate::shared::dom::{listen, listen_window, viewport_size, FrameLoop};
use crate::shared::vendor::three::{
    self, AmbientLight, Box3, DirectionalLight, GLTFLoader, Gltf, Group, PerspectiveCamera,
    RendererOptions, Scene, Vector3, WebGLRenderer,
};
use contracts::shared::motion::{fit_distance, AvatarMotion, PointerTarget};
use leptos::html::Div;
use leptos::prelude::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

const FOV_DEG: f64 = 30.0;
const PIVOT_Y: f64 = -0.05;
const PIVOT_SCALE: f64 = 0.82;
const MAX_PIXEL_RATIO: f64 = 2.0;

fn add_light(scene: &Scene, intensity: f64, position: Option<(f64, f64, f64)>) {
    match position {
        None => scene.add(&AmbientLight::new(0xffffff, intensity)),
        Some((x, y, z)) => {
            let light = DirectionalLight::new(0xffffff, intensity);
            light.position().set(x, y, z);
            scene.add(&light);
        }
    }
}

fn mount_size(mount: &web_sys::HtmlElement) -> (f64, f64) {
    let w = mount.client_width().max(1) as f64;
    let h = mount.client_height().max(1) as f64;
    (w, h)
}

/// Center the loaded model on its bounding box and move the camera back
/// until it fits.
fn frame_model(model: &three::Object3D, pivot: &Group, camera: &PerspectiveCamera) {
    let center = Box3::new().set_from_object(model).get_center(&Vector3::new());
    model.position().sub(&center);

    let size = Box3::new().set_from_object(model).get_size(&Vector3::new());
    let max_dim = size.x().max(size.y()).max(size.z());
    let distance = fit_distance(max_dim, camera.fov());
    camera.position().set(0.0, 0.0, distance);
    camera.set_near(distance / 100.0);
    camera.set_far(distance * 100.0);
    camera.update_projection_matrix();

    pivot.position().set(0.0, PIVOT_Y, 0.0);
    pivot.scale().set_scalar(PIVOT_SCALE);
    pivot.add(model);
}

fn start_avatar(mount: web_sys::HtmlElement, model_url: &str) -> Result<(), String> {
    if !three::is_available() {
        return Err("three.js or GLTFLoader is not loaded".to_string());
    }

    let scene = Scene::new();
    let camera = PerspectiveCamera::new(FOV_DEG, 1.0, 0.1, 100.0);
    camera.position().set(0.0, 0.0, 3.0);

    let renderer = WebGLRenderer::create(&RendererOptions {
        alpha: true,
        antialias: true,
        premultiplied_alpha: false,
    })?;
    let pixel_ratio = web_sys::window()
        .map(|w| w.device_pixel_ratio())
        .unwrap_or(1.0);
    renderer.set_pixel_ratio(pixel_ratio.min(MAX_PIXEL_RATIO));
    renderer.set_size(1.0, 1.0, false);
    renderer.set_clear_color(0x000000, 0.0);
    mount
        .append_child(&renderer.dom_element())
        .map_err(|e| format!("{e:?}"))?;

    add_light(&scene, 1.1, None);
    add_light(&scene, 1.6, Some((3.0, 2.0, 4.0)));
    add_light(&scene, 0.9, Some((-3.0, 1.0, 2.0)));
    add_light(&scene, 1.0, Some((-2.0, 2.0, -3.0)));

    let pivot = Group::new();
    scene.add(&pivot);

    let renderer = Rc::new(renderer);
    let camera = Rc::new(camera);

    let resize = {
        let renderer = renderer.clone();
        let camera = camera.clone();
        let mount = mount.clone();
        move || {
            let (w, h) = mount_size(&mount);
            renderer.set_size(w, h, false);
            camera.set_aspect(w / h);
            camera.update_projection_matrix();
        }
    };
    resize();
    listen_window("resize", {
        let resize = resize.clone();
        move |_| resize()
    });

    let target = Rc::new(Cell::new(PointerTarget::default()));
    listen_window("mousemove", {
        let target = target.clone();
        move |ev| {
            let Some(ev) = ev.dyn_ref::<web_sys::MouseEvent>() else {
                return;
            };
            let (w, h) = viewport_size();
            target.set(PointerTarget::from_pointer(
                ev.client_x() as f64,
                ev.client_y() as f64,
                w,
                h,
            ));
        }
    });

    let loader = GLTFLoader::new().map_err(|e| format!("{e:?}"))?;
    let on_load = Closure::<dyn FnMut(Gltf)>::new({
        let pivot = pivot.clone();
        let camera = camera.clone();
        move |gltf: Gltf| {
            frame_model(&gltf.scene(), &pivot, &camera);
            resize();
            log::info!("avatar: model loaded");
        }
    });
    let url = model_url.to_string();
    let on_error = Closure::<dyn FnMut(JsValue)>::new(move |err: JsValue| {
        log::error!("avatar: failed to load {}: {:?}", url, err);
    });
    loader.load(model_url, &on_load, &JsValue::UNDEFINED, &on_error);
    on_load.forget();
    on_error.forget();

    let motion = RefCell::new(AvatarMotion::default());
    let frames = FrameLoop::new(move |now| {
        let mut motion = motion.borrow_mut();
        motion.step(target.get(), now);
        let rotation = pivot.rotation();
        rotation.set_x(motion.pitch);
        rotation.set_y(motion.yaw);
        renderer.set_clear_alpha(0.0);
        renderer.render(&scene, &camera);
    });
    frames.start();
    log::debug!("avatar: frame loop started");

    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
        let doc = document.clone();
        listen(&document, "visibilitychange", move |_| {
            if doc.hidden() {
                frames.stop();
                log::debug!("avatar: frame loop stopped");
            } else {
                frames.start();
                log::debug!("avatar: frame loop started");
            }
        });
    }

    Ok(())
}

#[component]
pub fn AvatarCanvas() -> impl IntoView {
    let mount_ref = NodeRef::<Div>::new();
    let model_url = use_site_config().avatar.model_url.clone();

    Effect::new(move |started: Option<bool>| {
        if started == Some(true) {
            return true;
        }
        let Some(mount) = mount_ref.get() else {
            return false;
        };
        if let Err(e) = start_avatar(mount.into(), &model_url) {
            log::warn!("avatar disabled: {}", e);
        }
        true
    });

    view! { <div id="threeMount" class="threeMount" node_ref=mount_ref aria-hidden="true"></div> }
}
