use yew::prelude::*;

use crate::dom::{is_in_viewport, window_target, ScopedListener};

/// Flips to true the first time `node` scrolls into view and stays true.
///
/// The scroll listener is dropped as soon as the element has been seen.
#[hook]
pub fn use_in_view(node: NodeRef, margin: f64) -> bool {
    let seen = use_state_eq(|| false);
    let seen_now = *seen;

    {
        let seen = seen.clone();
        use_effect_with_deps(
            move |already_seen: &bool| {
                let listener = if *already_seen {
                    None
                } else {
                    window_target().and_then(|target| {
                        let seen = seen.clone();
                        ScopedListener::attach(&target, "scroll", move |_| {
                            if is_in_viewport(&node, margin) {
                                seen.set(true);
                            }
                        })
                    })
                };

                // Initial check for elements already on screen at mount
                if let Some(listener) = &listener {
                    listener.fire();
                }

                move || drop(listener)
            },
            seen_now,
        );
    }

    seen_now
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_test::*;

    use super::*;

    #[function_component(Watched)]
    fn watched() -> Html {
        let node = use_node_ref();
        let seen = use_in_view(node.clone(), 0.0);
        html! {
            <p ref={node} style="margin: 0; height: 40px;">{ if seen { "seen" } else { "hidden" } }</p>
        }
    }

    #[wasm_bindgen_test]
    async fn element_on_screen_at_mount_is_seen() {
        let document = test_document();
        let root = document.create_element("div").unwrap();
        document.body().unwrap().prepend_with_node_1(&root).unwrap();

        yew::Renderer::<Watched>::with_root(root.clone()).render();
        TimeoutFuture::new(30).await;
        TimeoutFuture::new(30).await;

        assert_eq!(root.text_content().as_deref(), Some("seen"));
        root.remove();
    }

    fn test_document() -> web_sys::Document {
        web_sys::window().unwrap().document().unwrap()
    }
}
