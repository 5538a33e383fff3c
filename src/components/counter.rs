use std::cell::RefCell;
use std::rc::Rc;

use chrono::Utc;
use gloo_timers::callback::Interval;
use yew::prelude::*;

const FRAME_MS: u32 = 30;

/// Linear interpolation toward `target`, floored, clamped at the target
/// once the duration has elapsed. Queried once per frame tick.
pub fn counter_value(target: u64, elapsed_ms: u32, duration_ms: u32) -> u64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return target;
    }
    target.saturating_mul(elapsed_ms as u64) / duration_ms as u64
}

/// Thousands grouping for display (36000000 -> "36,000,000").
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped.chars().rev().collect()
}

#[derive(Properties, PartialEq)]
pub struct CounterProps {
    pub target: u64,
    /// Flip to true when the counter scrolls into view.
    pub started: bool,
    #[prop_or(2000)]
    pub duration_ms: u32,
}

/// Counts up from zero to `target` over `duration_ms` once `started` goes
/// true. The interval cancels itself when the target is reached.
#[function_component(AnimatedCounter)]
pub fn animated_counter(props: &CounterProps) -> Html {
    let shown = use_state(|| 0u64);

    {
        let shown = shown.clone();
        use_effect_with_deps(
            move |&(started, target, duration_ms)| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if started {
                    let start = Utc::now().timestamp_millis();
                    let handle = interval.clone();
                    *interval.borrow_mut() = Some(Interval::new(FRAME_MS, move || {
                        let elapsed = (Utc::now().timestamp_millis() - start).max(0) as u32;
                        shown.set(counter_value(target, elapsed, duration_ms));
                        if elapsed >= duration_ms {
                            handle.borrow_mut().take();
                        }
                    }));
                }
                move || {
                    interval.borrow_mut().take();
                }
            },
            (props.started, props.target, props.duration_ms),
        );
    }

    html! { <>{ format_count(*shown) }</> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counter_starts_at_zero() {
        assert_eq!(counter_value(36_000_000, 0, 2000), 0);
    }

    #[test]
    fn counter_interpolates_linearly_with_floor() {
        assert_eq!(counter_value(100, 500, 2000), 25);
        assert_eq!(counter_value(3, 1000, 2000), 1);
    }

    #[test]
    fn counter_clamps_at_target() {
        assert_eq!(counter_value(14, 1500, 1500), 14);
        assert_eq!(counter_value(14, 9999, 1500), 14);
        assert_eq!(counter_value(14, 10, 0), 14);
    }

    #[test]
    fn format_count_groups_thousands() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(24_600_000), "24,600,000");
        assert_eq!(format_count(1_000), "1,000");
    }
}
