mod canvas;

use yew::prelude::*;
use web_sys::window;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use shared::quiz::Question;
use shared::wheel::{SpinTuning, TickCadence, WheelSession};
use crate::styles;

use canvas::{WheelCanvas, ease_out_cubic};

type TimerSlot = Rc<RefCell<Option<Timeout>>>;

#[derive(Properties, PartialEq)]
pub struct WheelProps {
    pub questions: Vec<Question>,
    pub answered_ids: Vec<String>,
    pub colors: Vec<String>,
    /// Delivers the winning question once the spin has fully played out.
    pub on_select: Callback<Question>,
    pub on_tick: Callback<()>,
    pub on_stop: Callback<()>,
    #[prop_or_default]
    pub tuning: SpinTuning,
}

#[function_component(Wheel)]
pub fn wheel(props: &WheelProps) -> Html {
    // The session is the authoritative state; the two use_state handles
    // below only mirror it for rendering. Every timer callback goes through
    // this one RefCell so a completed spin is observed consistently no
    // matter which closure fires first.
    let session = use_mut_ref(WheelSession::new);
    let is_spinning = use_state(|| false);
    let display_rotation = use_state(|| 0.0);
    let tick_timer: TimerSlot = use_mut_ref(|| None);
    let done_timer: TimerSlot = use_mut_ref(|| None);
    // A frame loop has no handle to drop the way a Timeout does, so each
    // spin stamps its frames with this counter instead. Frames whose stamp
    // no longer matches belong to a superseded spin or an unmounted view
    // and must not touch the display.
    let spin_epoch: Rc<RefCell<u64>> = use_mut_ref(|| 0);

    // Cancel in-flight timers on unmount and retire the frame loop, so
    // nothing fires into a view that no longer exists.
    {
        let tick_timer = tick_timer.clone();
        let done_timer = done_timer.clone();
        let spin_epoch = spin_epoch.clone();
        use_effect_with((), move |_| {
            Box::new(move || {
                *spin_epoch.borrow_mut() += 1;
                if let Some(timer) = tick_timer.borrow_mut().take() {
                    drop(timer);
                }
                if let Some(timer) = done_timer.borrow_mut().take() {
                    drop(timer);
                }
            }) as Box<dyn FnOnce()>
        });
    }

    let remaining = props
        .questions
        .iter()
        .filter(|q| !props.answered_ids.contains(&q.id))
        .count();

    let spin = {
        let session = session.clone();
        let is_spinning = is_spinning.clone();
        let display_rotation = display_rotation.clone();
        let tick_timer = tick_timer.clone();
        let done_timer = done_timer.clone();
        let spin_epoch = spin_epoch.clone();
        let questions = props.questions.clone();
        let answered_ids = props.answered_ids.clone();
        let tuning = props.tuning;
        let on_select = props.on_select.clone();
        let on_tick = props.on_tick.clone();
        let on_stop = props.on_stop.clone();

        Callback::from(move |_| {
            let start_rotation = session.borrow().rotation;
            let mut rng = SmallRng::from_entropy();
            let plan = session
                .borrow_mut()
                .try_begin_spin(&questions, &answered_ids, &tuning, &mut rng);
            // Busy wheel or exhausted round: ignore the click
            let plan = match plan {
                Some(plan) => plan,
                None => return,
            };

            is_spinning.set(true);

            // First tick plays immediately, the rest follow the decelerating
            // cadence
            on_tick.emit(());
            schedule_ticks(tick_timer.clone(), TickCadence::new(&tuning), on_tick.clone());

            // One completion timer per spin. It alone flips the busy flag
            // and delivers the winner captured at spin start.
            {
                let session = session.clone();
                let is_spinning = is_spinning.clone();
                let on_stop = on_stop.clone();
                let on_select = on_select.clone();
                let winner = plan.question.clone();
                let timer = Timeout::new(tuning.duration_ms, move || {
                    session.borrow_mut().finish_spin();
                    is_spinning.set(false);
                    on_stop.emit(());
                    on_select.emit(winner);
                });
                *done_timer.borrow_mut() = Some(timer);
            }

            let epoch = {
                let mut epoch = spin_epoch.borrow_mut();
                *epoch += 1;
                *epoch
            };
            animate_rotation(
                display_rotation.clone(),
                start_rotation,
                plan.target_rotation,
                tuning.duration_ms as f64,
                spin_epoch.clone(),
                epoch,
            );
        })
    };

    html! {
        <div class="flex flex-col items-center gap-6">
            <div class="w-full max-w-[450px] mx-auto">
                <WheelCanvas
                    rotation={*display_rotation}
                    is_spinning={*is_spinning}
                    questions={props.questions.clone()}
                    answered_ids={props.answered_ids.clone()}
                    colors={props.colors.clone()}
                />
            </div>
            <button
                class={styles::BUTTON_PRIMARY}
                onclick={spin}
                disabled={*is_spinning || remaining == 0}
            >
                { if *is_spinning {
                    "Spinning..."
                } else if remaining == 0 {
                    "Done"
                } else {
                    "Spin the Wheel"
                } }
            </button>
        </div>
    }
}

// Self-rescheduling tick chain. Each stage arms the next timeout through the
// shared slot, so dropping the slot's current occupant silences the rest of
// the chain.
fn schedule_ticks(slot: TimerSlot, mut cadence: TickCadence, on_tick: Callback<()>) {
    let delay = match cadence.next() {
        Some(delay) => delay,
        None => return,
    };
    let next_slot = slot.clone();
    let timer = Timeout::new(delay, move || {
        on_tick.emit(());
        schedule_ticks(next_slot, cadence, on_tick);
    });
    *slot.borrow_mut() = Some(timer);
}

// Eases the displayed rotation toward the committed target over the spin
// duration. Purely visual: the session already holds the final rotation.
// Every frame rechecks the epoch, so a frame still pending when the next
// spin begins bails out instead of writing a stale rotation.
fn animate_rotation(
    rotation: UseStateHandle<f64>,
    start_rotation: f64,
    target_rotation: f64,
    duration: f64,
    spin_epoch: Rc<RefCell<u64>>,
    epoch: u64,
) {
    let start_time = js_sys::Date::now();
    let rotation_change = target_rotation - start_rotation;

    let f: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let g = f.clone();

    *g.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if *spin_epoch.borrow() != epoch {
            return;
        }
        let elapsed = js_sys::Date::now() - start_time;
        let progress = (elapsed / duration).min(1.0);
        let eased_progress = ease_out_cubic(progress);
        rotation.set(start_rotation + rotation_change * eased_progress);

        if elapsed < duration {
            if let Some(window) = window() {
                let _ = window.request_animation_frame(
                    f.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
                );
            }
        } else {
            rotation.set(target_rotation);
        }
    }) as Box<dyn FnMut()>));

    if let Some(window) = window() {
        let _ = window.request_animation_frame(
            g.borrow().as_ref().unwrap().as_ref().unchecked_ref(),
        );
    }
}
