use yew::prelude::*;
use web_sys::MouseEvent;
use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use shared::quiz::Question;
use crate::styles;

/// How long the verdict stays on screen before the answer is reported and
/// the modal closes.
const VERDICT_DELAY_MS: u32 = 2_000;

#[derive(Properties, PartialEq)]
pub struct QuestionModalProps {
    pub question: Question,
    /// Fires the moment a choice locks in, carrying its correctness.
    pub on_choice: Callback<bool>,
    /// Fires after the verdict delay with the same correctness; the parent
    /// records the answer and closes the modal.
    pub on_result: Callback<bool>,
    /// Abandons the question without recording anything.
    pub on_close: Callback<()>,
}

#[function_component(QuestionModal)]
pub fn question_modal(props: &QuestionModalProps) -> Html {
    let selected = use_state(|| None::<usize>);
    let result_timer: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    // Cancel a pending verdict report if the modal unmounts first
    {
        let result_timer = result_timer.clone();
        use_effect_with((), move |_| {
            Box::new(move || {
                if let Some(timer) = result_timer.borrow_mut().take() {
                    drop(timer);
                }
            }) as Box<dyn FnOnce()>
        });
    }

    let choose = {
        let selected = selected.clone();
        let result_timer = result_timer.clone();
        let question = props.question.clone();
        let on_choice = props.on_choice.clone();
        let on_result = props.on_result.clone();
        Callback::from(move |index: usize| {
            // First click locks the choice
            if selected.is_some() {
                return;
            }
            selected.set(Some(index));
            let correct = question.is_correct_choice(index);
            on_choice.emit(correct);
            let on_result = on_result.clone();
            *result_timer.borrow_mut() = Some(Timeout::new(VERDICT_DELAY_MS, move || {
                on_result.emit(correct);
            }));
        })
    };

    let close = {
        let selected = selected.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| {
            if selected.is_none() {
                on_close.emit(());
            }
        })
    };

    let locked = selected.is_some();

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_CENTER}>
                <div
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class={styles::MODAL_PANEL}
                >
                    if !locked {
                        <button onclick={close} class={styles::MODAL_CLOSE} aria-label="Close">
                            {"\u{2715}"}
                        </button>
                    }
                    <div class="p-6 sm:p-8">
                        <h3 class="text-xl sm:text-2xl font-semibold text-gray-900 dark:text-white mb-6 pr-8">
                            { &props.question.text }
                        </h3>
                        <div class="flex flex-col gap-3">
                            { for props.question.options.iter().enumerate().map(|(index, option)| {
                                let choose = choose.clone();
                                let button_class = match *selected {
                                    None => "bg-gray-100 dark:bg-gray-700 text-gray-900 dark:text-white hover:bg-blue-100 dark:hover:bg-blue-900/40",
                                    Some(_) if index == props.question.correct_index => "bg-green-500 text-white",
                                    Some(picked) if picked == index => "bg-red-500 text-white",
                                    Some(_) => "bg-gray-100 dark:bg-gray-700 text-gray-400 dark:text-gray-500",
                                };
                                html! {
                                    <button
                                        onclick={move |_| choose.emit(index)}
                                        disabled={locked}
                                        class={classes!(
                                            "w-full", "px-4", "py-3", "rounded-lg", "text-left",
                                            "font-medium", "transition-colors", "duration-300",
                                            button_class
                                        )}
                                    >
                                        { option }
                                    </button>
                                }
                            }) }
                        </div>
                        if let Some(picked) = *selected {
                            if picked == props.question.correct_index {
                                <p class="mt-6 text-center text-lg font-semibold text-green-500">
                                    {"Correct!"}
                                </p>
                            } else {
                                <p class="mt-6 text-center text-lg font-semibold text-red-500">
                                    { format!("Incorrect! The right answer was: {}",
                                        props.question.options[props.question.correct_index]) }
                                </p>
                            }
                        }
                    </div>
                </div>
            </div>
        </div>
    }
}
