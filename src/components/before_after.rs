use std::rc::Rc;

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent, TouchEvent};
use yew::prelude::*;

use crate::dom::{document_target, horizontal_extent, ScopedListener};
use crate::slider::SliderState;

#[derive(Properties, PartialEq)]
pub struct BeforeAfterSliderProps {
    pub before_image: AttrValue,
    pub after_image: AttrValue,
    #[prop_or(AttrValue::Static("Before"))]
    pub before_label: AttrValue,
    #[prop_or(AttrValue::Static("After"))]
    pub after_label: AttrValue,
}

enum SliderAction {
    Begin,
    Move { client_x: f64, left: f64, width: f64 },
    End,
}

impl SliderAction {
    fn apply(self, state: &mut SliderState) {
        match self {
            SliderAction::Begin => state.begin_drag(),
            SliderAction::Move { client_x, left, width } => state.update_position(client_x, left, width),
            SliderAction::End => state.end_drag(),
        }
    }
}

#[derive(PartialEq)]
struct SliderModel(SliderState);

impl Reducible for SliderModel {
    type Action = SliderAction;

    fn reduce(self: Rc<Self>, action: SliderAction) -> Rc<Self> {
        let mut state = self.0;
        action.apply(&mut state);
        if state == self.0 {
            self
        } else {
            Rc::new(Self(state))
        }
    }
}

/// Horizontal pointer coordinate of a mouse or touch event. Touch events
/// only ever report their first contact point.
fn pointer_x(event: &Event) -> Option<f64> {
    if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
        return Some(mouse.client_x() as f64);
    }
    let touch = event.dyn_ref::<TouchEvent>()?.touches().get(0)?;
    Some(touch.client_x() as f64)
}

const MOVE_EVENTS: [&str; 2] = ["mousemove", "touchmove"];
// An interrupted touch ends with touchcancel instead of touchend.
const RELEASE_EVENTS: [&str; 3] = ["mouseup", "touchend", "touchcancel"];

/// Listeners on `target` that only exist for the length of one drag.
struct DragSession {
    _listeners: Vec<ScopedListener>,
}

impl DragSession {
    fn start(
        target: &EventTarget,
        extent: impl Fn() -> Option<(f64, f64)> + 'static,
        dispatch: Callback<SliderAction>,
    ) -> Self {
        let extent = Rc::new(extent);
        let mut listeners = Vec::with_capacity(MOVE_EVENTS.len() + RELEASE_EVENTS.len());

        for kind in MOVE_EVENTS {
            let extent = extent.clone();
            let dispatch = dispatch.clone();
            listeners.extend(ScopedListener::attach(target, kind, move |event: Event| {
                let Some(client_x) = pointer_x(&event) else {
                    return;
                };
                let Some((left, width)) = extent() else {
                    return;
                };
                dispatch.emit(SliderAction::Move { client_x, left, width });
            }));
        }
        for kind in RELEASE_EVENTS {
            let dispatch = dispatch.clone();
            listeners.extend(ScopedListener::attach(target, kind, move |_| {
                dispatch.emit(SliderAction::End)
            }));
        }

        Self { _listeners: listeners }
    }
}

#[function_component(BeforeAfterSlider)]
pub fn before_after_slider(props: &BeforeAfterSliderProps) -> Html {
    let container = use_node_ref();
    let slider = use_reducer(|| SliderModel(SliderState::default()));
    let dragging = slider.0.dragging();

    {
        let container = container.clone();
        let slider = slider.clone();
        use_effect_with_deps(
            move |dragging: &bool| {
                let session = if *dragging {
                    debug!("drag started");
                    document_target().map(|document| {
                        DragSession::start(
                            &document,
                            move || horizontal_extent(&container),
                            Callback::from(move |action: SliderAction| slider.dispatch(action)),
                        )
                    })
                } else {
                    None
                };
                move || drop(session)
            },
            dragging,
        );
    }

    let on_mouse_down = {
        let slider = slider.clone();
        Callback::from(move |_: MouseEvent| slider.dispatch(SliderAction::Begin))
    };
    let on_touch_start = {
        let slider = slider.clone();
        Callback::from(move |_: TouchEvent| slider.dispatch(SliderAction::Begin))
    };

    let position = slider.0.position();
    let container_width = horizontal_extent(&container).map_or(0.0, |(_, width)| width);
    let after_width = if container_width > 0.0 {
        format!("width: {}px;", container_width)
    } else {
        "width: 100%;".to_string()
    };

    html! {
        <div
            ref={container}
            class={classes!("before-after", dragging.then_some("dragging"))}
            onmousedown={on_mouse_down}
            ontouchstart={on_touch_start}
        >
            <style>
                {r#"
                    .before-after {
                        position: relative;
                        width: 100%;
                        height: 400px;
                        overflow: hidden;
                        border-radius: 1.5rem;
                        cursor: ew-resize;
                        user-select: none;
                    }
                    .before-after img {
                        position: absolute;
                        inset: 0;
                        height: 100%;
                        object-fit: cover;
                        pointer-events: none;
                    }
                    .before-after .before-image {
                        width: 100%;
                    }
                    .before-after .after-clip {
                        position: absolute;
                        inset: 0;
                        overflow: hidden;
                    }
                    .before-after .handle {
                        position: absolute;
                        top: 0;
                        bottom: 0;
                        width: 4px;
                        background: #fff;
                        box-shadow: 0 25px 50px rgba(0, 0, 0, 0.25);
                    }
                    .before-after .handle-knob {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        transform: translate(-50%, -50%);
                        width: 3rem;
                        height: 3rem;
                        border-radius: 50%;
                        background: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        color: #111;
                    }
                    .before-after .label {
                        position: absolute;
                        top: 1rem;
                        background: rgba(0, 0, 0, 0.5);
                        color: #fff;
                        padding: 0.25rem 0.75rem;
                        border-radius: 9999px;
                        font-size: 0.875rem;
                    }
                    .before-after .label.before { left: 1rem; }
                    .before-after .label.after { right: 1rem; }
                    @media (min-width: 768px) {
                        .before-after { height: 500px; }
                    }
                "#}
            </style>
            <img class="before-image" src={props.before_image.clone()} alt={props.before_label.clone()} />
            <div class="after-clip" style={format!("width: {}%;", position)}>
                <img src={props.after_image.clone()} alt={props.after_label.clone()} style={after_width} />
            </div>
            <div class="handle" style={format!("left: {}%;", position)}>
                <div class="handle-knob">{"‹›"}</div>
            </div>
            <div class="label before">{props.before_label.clone()}</div>
            <div class="label after">{props.after_label.clone()}</div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_way_a_touch_can_end_releases_the_drag() {
        for kind in ["mouseup", "touchend", "touchcancel"] {
            assert!(RELEASE_EVENTS.contains(&kind), "{kind} does not end the drag");
        }
        assert!(RELEASE_EVENTS.iter().all(|kind| !MOVE_EVENTS.contains(kind)));
    }

    #[test]
    fn actions_drive_the_slider_state() {
        let mut state = SliderState::default();
        SliderAction::Begin.apply(&mut state);
        SliderAction::Move { client_x: 150.0, left: 100.0, width: 200.0 }.apply(&mut state);
        SliderAction::End.apply(&mut state);
        SliderAction::Move { client_x: 290.0, left: 100.0, width: 200.0 }.apply(&mut state);
        assert_eq!(state.position(), 25.0);
        assert!(!state.dragging());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::RefCell;

    use wasm_bindgen_test::*;
    use web_sys::MouseEventInit;

    use super::*;

    fn detached_target() -> EventTarget {
        web_sys::window()
            .and_then(|w| w.document())
            .unwrap()
            .create_element("div")
            .unwrap()
            .into()
    }

    fn mouse(kind: &str, client_x: i32) -> Event {
        let mut init = MouseEventInit::new();
        init.client_x(client_x);
        MouseEvent::new_with_mouse_event_init_dict(kind, &init).unwrap().into()
    }

    /// A 200px wide container starting at x = 100, with a drag in progress.
    fn session_on(target: &EventTarget) -> (DragSession, Rc<RefCell<SliderState>>) {
        let state = Rc::new(RefCell::new(SliderState::default()));
        state.borrow_mut().begin_drag();
        let dispatch = {
            let state = state.clone();
            Callback::from(move |action: SliderAction| action.apply(&mut state.borrow_mut()))
        };
        (DragSession::start(target, || Some((100.0, 200.0)), dispatch), state)
    }

    #[wasm_bindgen_test]
    fn moves_after_mouseup_are_ignored() {
        let target = detached_target();
        let (_session, state) = session_on(&target);

        target.dispatch_event(&mouse("mousemove", 150)).unwrap();
        assert_eq!(state.borrow().position(), 25.0);

        target.dispatch_event(&mouse("mouseup", 150)).unwrap();
        assert!(!state.borrow().dragging());

        target.dispatch_event(&mouse("mousemove", 290)).unwrap();
        assert_eq!(state.borrow().position(), 25.0);
    }

    #[wasm_bindgen_test]
    fn touchcancel_ends_the_drag() {
        let target = detached_target();
        let (_session, state) = session_on(&target);

        target.dispatch_event(&Event::new("touchcancel").unwrap()).unwrap();
        assert!(!state.borrow().dragging());
    }

    #[wasm_bindgen_test]
    fn ended_session_leaves_no_listeners_behind() {
        let target = detached_target();
        let (session, state) = session_on(&target);
        drop(session);

        target.dispatch_event(&mouse("mousemove", 290)).unwrap();
        target.dispatch_event(&mouse("mouseup", 290)).unwrap();

        let state = state.borrow();
        assert_eq!(state.position(), 50.0);
        assert!(state.dragging());
    }
}
