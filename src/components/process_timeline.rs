use yew::prelude::*;

use crate::content::ProcessStep;
use crate::hooks::use_in_view;

#[derive(Properties, PartialEq)]
pub struct ProcessTimelineProps {
    pub steps: &'static [ProcessStep],
}

#[function_component(ProcessTimeline)]
pub fn process_timeline(props: &ProcessTimelineProps) -> Html {
    let node = use_node_ref();
    let in_view = use_in_view(node.clone(), 100.0);

    html! {
        <div ref={node} class={classes!("process-timeline", in_view.then_some("in-view"))}>
            <style>
                {r#"
                    .process-timeline {
                        position: relative;
                    }
                    .process-timeline::before {
                        content: '';
                        position: absolute;
                        left: 2rem;
                        top: 0;
                        bottom: 0;
                        width: 2px;
                        background: linear-gradient(to bottom, #2563eb, #2563eb, transparent);
                    }
                    .process-step {
                        position: relative;
                        display: flex;
                        align-items: flex-start;
                        margin-bottom: 3rem;
                        opacity: 0;
                        transform: translateX(-50px);
                        transition: opacity 0.5s, transform 0.5s;
                    }
                    .process-step:last-child {
                        margin-bottom: 0;
                    }
                    .process-step-icon {
                        position: absolute;
                        left: 0;
                        width: 4rem;
                        height: 4rem;
                        border-radius: 50%;
                        background: #2563eb;
                        color: #fff;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        transform: scale(0);
                        transition: transform 0.3s cubic-bezier(0.34, 1.56, 0.64, 1);
                    }
                    .process-step-text {
                        margin-left: 6rem;
                    }
                    .process-timeline.in-view .process-step {
                        opacity: 1;
                        transform: translateX(0);
                    }
                    .process-timeline.in-view .process-step-icon {
                        transform: scale(1);
                    }
                "#}
            </style>
            { for props.steps.iter().enumerate().map(|(index, step)| {
                let delay = 0.2 * index as f64;
                html! {
                    <div class="process-step" style={format!("transition-delay: {:.1}s;", delay)}>
                        <div class="process-step-icon" style={format!("transition-delay: {:.1}s;", delay + 0.2)}>
                            {step.icon}
                        </div>
                        <div class="process-step-text">
                            <h3>{step.title}</h3>
                            <p>{step.description}</p>
                        </div>
                    </div>
                }
            }) }
        </div>
    }
}
