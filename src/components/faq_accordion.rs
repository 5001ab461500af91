use yew::prelude::*;

use crate::content::FaqEntry;

/// Which question, if any, is expanded. Only one at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AccordionState {
    open: Option<usize>,
}

impl AccordionState {
    pub fn toggle(self, index: usize) -> Self {
        Self {
            open: if self.open == Some(index) { None } else { Some(index) },
        }
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqAccordionProps {
    pub items: &'static [FaqEntry],
}

#[function_component(FaqAccordion)]
pub fn faq_accordion(props: &FaqAccordionProps) -> Html {
    let state = use_state(AccordionState::default);

    html! {
        <div class="faq-accordion">
            <style>
                {r#"
                    .faq-accordion {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                    }
                    .faq-item {
                        border: 1px solid rgba(0, 0, 0, 0.1);
                        border-radius: 1rem;
                        overflow: hidden;
                        opacity: 0;
                        animation: faqIn 0.4s ease-out forwards;
                    }
                    .faq-question {
                        width: 100%;
                        padding: 1rem 1.5rem;
                        display: flex;
                        justify-content: space-between;
                        align-items: center;
                        background: none;
                        border: none;
                        text-align: left;
                        font-weight: 500;
                        cursor: pointer;
                    }
                    .faq-chevron {
                        transition: transform 0.3s;
                    }
                    .faq-item.open .faq-chevron {
                        transform: rotate(180deg);
                    }
                    .faq-answer {
                        padding: 0 1.5rem 1rem;
                        animation: faqIn 0.3s ease-out;
                    }
                    @keyframes faqIn {
                        from { opacity: 0; transform: translateY(20px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                "#}
            </style>
            { for props.items.iter().enumerate().map(|(index, item)| {
                let open = state.is_open(index);
                let onclick = {
                    let state = state.clone();
                    Callback::from(move |e: MouseEvent| {
                        e.prevent_default();
                        state.set(state.toggle(index));
                    })
                };
                html! {
                    <div
                        class={classes!("faq-item", open.then_some("open"))}
                        style={format!("animation-delay: {:.1}s;", 0.1 * index as f64)}
                    >
                        <button class="faq-question" onclick={onclick}>
                            <span>{item.question}</span>
                            <span class="faq-chevron">{"⌄"}</span>
                        </button>
                        {
                            if open {
                                html! {
                                    <div class="faq-answer">
                                        <p>{item.answer}</p>
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                    </div>
                }
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = AccordionState::default();
        assert!(!(0..5).any(|i| state.is_open(i)));
    }

    #[test]
    fn opening_one_closes_the_other() {
        let state = AccordionState::default().toggle(1);
        assert!(state.is_open(1));

        let state = state.toggle(3);
        assert!(state.is_open(3));
        assert!(!state.is_open(1));
    }

    #[test]
    fn toggling_open_item_closes_it() {
        let state = AccordionState::default().toggle(2).toggle(2);
        assert_eq!(state, AccordionState::default());
    }
}
