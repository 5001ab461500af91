use yew::prelude::*;

use crate::content::Feature;

/// Rotation in degrees for a pointer at `(x, y)` inside a `width` x `height`
/// card, both relative to the card's top-left corner.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub fn at(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            rotate_x: (y - height / 2.0) / 10.0,
            rotate_y: (width / 2.0 - x) / 10.0,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ServiceCardProps {
    pub service: &'static Feature,
    #[prop_or(0)]
    pub index: usize,
}

/// Card that leans toward the pointer while hovered.
#[function_component(ServiceCard3D)]
pub fn service_card_3d(props: &ServiceCardProps) -> Html {
    let card = use_node_ref();
    let tilt = use_state(Tilt::default);

    let on_mouse_move = {
        let card = card.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            if let Some(element) = card.cast::<web_sys::Element>() {
                let rect = element.get_bounding_client_rect();
                tilt.set(Tilt::at(
                    e.client_x() as f64 - rect.left(),
                    e.client_y() as f64 - rect.top(),
                    rect.width(),
                    rect.height(),
                ));
            }
        })
    };

    let on_mouse_leave = {
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| tilt.set(Tilt::default()))
    };

    let service = props.service;
    let style = format!(
        "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d; transition: transform 0.1s; animation-delay: {:.1}s;",
        tilt.rotate_x,
        tilt.rotate_y,
        0.1 * props.index as f64
    );

    html! {
        <div
            ref={card}
            class="service-card-3d reveal"
            style={style}
            onmousemove={on_mouse_move}
            onmouseleave={on_mouse_leave}
        >
            <div class="service-card-inner">
                <div class="service-card-icon">{service.icon}</div>
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                {
                    if service.bullets.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <ul class="service-card-bullets">
                                { for service.bullets.iter().map(|bullet| html! {
                                    <li>{"✔ "}{*bullet}</li>
                                }) }
                            </ul>
                        }
                    }
                }
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_at_center() {
        assert_eq!(Tilt::at(100.0, 50.0, 200.0, 100.0), Tilt::default());
    }

    #[test]
    fn leans_toward_corner() {
        let t = Tilt::at(0.0, 0.0, 200.0, 100.0);
        assert_eq!(t.rotate_x, -5.0);
        assert_eq!(t.rotate_y, 10.0);

        let t = Tilt::at(200.0, 100.0, 200.0, 100.0);
        assert_eq!(t.rotate_x, 5.0);
        assert_eq!(t.rotate_y, -10.0);
    }
}
