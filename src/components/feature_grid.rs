use yew::prelude::*;

use crate::content::Feature;

#[derive(Properties, PartialEq)]
pub struct FeatureGridProps {
    pub items: &'static [Feature],
    #[prop_or(3)]
    pub columns: usize,
}

#[function_component(FeatureGrid)]
pub fn feature_grid(props: &FeatureGridProps) -> Html {
    html! {
        <div class={classes!("feature-grid", format!("cols-{}", props.columns))}>
            { for props.items.iter().enumerate().map(|(index, item)| html! {
                <div class="feature-card reveal" style={format!("animation-delay: {:.1}s;", 0.1 * index as f64)}>
                    <div class="feature-card-icon">{item.icon}</div>
                    <h3>{item.title}</h3>
                    <p>{item.description}</p>
                </div>
            }) }
        </div>
    }
}
