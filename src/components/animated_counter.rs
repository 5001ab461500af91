use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use yew::prelude::*;

use crate::config;
use crate::hooks::use_in_view;

/// Value shown `elapsed_ms` into a count-up lasting `duration_ms`.
pub fn counter_value(end: u32, elapsed_ms: f64, duration_ms: f64) -> u32 {
    if duration_ms <= 0.0 {
        return end;
    }
    let progress = (elapsed_ms / duration_ms).clamp(0.0, 1.0);
    (progress * end as f64).floor() as u32
}

/// `10000` -> `"10,000"`.
pub fn with_thousands(value: u32) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct AnimatedCounterProps {
    pub end: u32,
    #[prop_or(2.0)]
    pub duration_secs: f64,
    #[prop_or_default]
    pub suffix: AttrValue,
}

#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &AnimatedCounterProps) -> Html {
    let node = use_node_ref();
    let count = use_state(|| 0u32);
    let in_view = use_in_view(node.clone(), 0.0);

    {
        let count = count.setter();
        let end = props.end;
        let duration_ms = props.duration_secs * 1000.0;
        use_effect_with_deps(
            move |in_view: &bool| {
                let ticker: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if *in_view {
                    let started = js_sys::Date::now();
                    let ticker_inner = ticker.clone();
                    let interval = Interval::new(config::COUNTER_TICK_MS, move || {
                        let value = counter_value(end, js_sys::Date::now() - started, duration_ms);
                        count.set(value);
                        if value >= end {
                            // Can't drop the interval from inside its own callback
                            let ticker = ticker_inner.clone();
                            Timeout::new(0, move || {
                                ticker.borrow_mut().take();
                            })
                            .forget();
                        }
                    });
                    *ticker.borrow_mut() = Some(interval);
                }

                move || {
                    ticker.borrow_mut().take();
                }
            },
            in_view,
        );
    }

    html! {
        <span ref={node}>
            {with_thousands(*count)}{props.suffix.clone()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_up_linearly_and_stops_at_end() {
        assert_eq!(counter_value(500, 0.0, 2000.0), 0);
        assert_eq!(counter_value(500, 1000.0, 2000.0), 250);
        assert_eq!(counter_value(98, 1999.0, 2000.0), 97);
        assert_eq!(counter_value(98, 2000.0, 2000.0), 98);
        assert_eq!(counter_value(98, 60_000.0, 2000.0), 98);
    }

    #[test]
    fn zero_duration_jumps_to_end() {
        assert_eq!(counter_value(15, 0.0, 0.0), 15);
    }

    #[test]
    fn formats_thousands() {
        assert_eq!(with_thousands(0), "0");
        assert_eq!(with_thousands(98), "98");
        assert_eq!(with_thousands(500), "500");
        assert_eq!(with_thousands(10_000), "10,000");
        assert_eq!(with_thousands(1_234_567), "1,234,567");
    }
}
