use yew::prelude::*;
use web_sys::{Event, HtmlInputElement, InputEvent, MouseEvent};
use uuid::Uuid;
use shared::constants::{
    DEFAULT_WHEEL_COLORS, EMPTY_COLOR_LIST_ERROR, EMPTY_QUESTION_BANK_ERROR, INVALID_COLOR_ERROR,
    INVALID_CORRECT_INDEX_ERROR, INVALID_QUESTION_OPTIONS_ERROR, INVALID_QUESTION_TEXT_ERROR,
    INVALID_TITLE_ERROR,
};
use shared::quiz::{Question, QuizConfig};
use shared::validation::validate_config;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct SettingsModalProps {
    pub config: QuizConfig,
    /// Validated config to persist; saving also restarts the round.
    pub on_save: Callback<QuizConfig>,
    pub on_reset_progress: Callback<()>,
    pub on_factory_reset: Callback<()>,
    pub on_close: Callback<()>,
}

fn describe_validation_error(code: &str) -> String {
    match code {
        "invalid_title" => INVALID_TITLE_ERROR,
        "invalid_question_text" => INVALID_QUESTION_TEXT_ERROR,
        "invalid_question_options" => INVALID_QUESTION_OPTIONS_ERROR,
        "invalid_correct_index" => INVALID_CORRECT_INDEX_ERROR,
        "empty_question_bank" => EMPTY_QUESTION_BANK_ERROR,
        "empty_color_list" => EMPTY_COLOR_LIST_ERROR,
        "invalid_color" => INVALID_COLOR_ERROR,
        _ => "The settings could not be saved",
    }
    .to_string()
}

#[function_component(SettingsModal)]
pub fn settings_modal(props: &SettingsModalProps) -> Html {
    // Working copy; nothing touches the live config until Save validates
    let draft = use_state(|| props.config.clone());
    let error = use_state(String::new);
    let confirm_progress_reset = use_state(|| false);
    let confirm_factory_reset = use_state(|| false);

    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    let save = {
        let draft = draft.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        Callback::from(move |_: MouseEvent| {
            let config = (*draft).clone();
            match validate_config(&config) {
                Ok(()) => {
                    error.set(String::new());
                    on_save.emit(config);
                }
                Err(validation_error) => {
                    error.set(describe_validation_error(&validation_error.code));
                }
            }
        })
    };

    let add_question = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.questions.push(Question {
                id: Uuid::new_v4().to_string(),
                text: String::new(),
                options: [String::new(), String::new()],
                correct_index: 0,
            });
            draft.set(next);
        })
    };

    let add_color = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.wheel_colors.push("#3B82F6".to_string());
            draft.set(next);
        })
    };

    let reset_colors = {
        let draft = draft.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*draft).clone();
            next.wheel_colors = DEFAULT_WHEEL_COLORS.iter().map(|c| c.to_string()).collect();
            draft.set(next);
        })
    };

    let only_question = draft.questions.len() == 1;
    let only_color = draft.wheel_colors.len() == 1;
    let bank_size = draft.questions.len().max(1);

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_CENTER}>
                <div
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class={styles::MODAL_PANEL_WIDE}
                >
                    <button onclick={close.clone()} class={styles::MODAL_CLOSE} aria-label="Close">
                        {"\u{2715}"}
                    </button>
                    <div class="p-6 sm:p-8 space-y-8">
                        <h2 class={styles::TEXT_H2}>{"Settings"}</h2>

                        if !(*error).is_empty() {
                            <div class={styles::ALERT_ERROR}>
                                <p>{(*error).clone()}</p>
                            </div>
                        }

                        <div>
                            <label class={styles::TEXT_LABEL}>{"Title"}</label>
                            <input
                                type="text"
                                class={styles::INPUT}
                                value={draft.title.clone()}
                                oninput={let draft = draft.clone(); move |e: InputEvent| {
                                    let input: HtmlInputElement = e.target_unchecked_into();
                                    let mut next = (*draft).clone();
                                    next.title = input.value();
                                    draft.set(next);
                                }}
                            />
                        </div>

                        <div class="space-y-3">
                            <div class="flex items-center gap-3">
                                <input
                                    type="checkbox"
                                    id="limit-questions"
                                    class="h-4 w-4 rounded"
                                    checked={draft.max_questions > 0}
                                    onchange={let draft = draft.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*draft).clone();
                                        next.max_questions = if input.checked() {
                                            next.questions.len()
                                        } else {
                                            0
                                        };
                                        draft.set(next);
                                    }}
                                />
                                <label for="limit-questions" class={styles::TEXT_LABEL}>
                                    {"Limit how many questions are in play"}
                                </label>
                            </div>
                            if draft.max_questions > 0 {
                                <input
                                    type="number"
                                    class={classes!(styles::INPUT_BARE, "max-w-[8rem]")}
                                    min="1"
                                    max={bank_size.to_string()}
                                    value={draft.max_questions.to_string()}
                                    onchange={let draft = draft.clone(); move |e: Event| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        let mut next = (*draft).clone();
                                        let bank_size = next.questions.len().max(1);
                                        next.max_questions = input
                                            .value()
                                            .parse::<usize>()
                                            .unwrap_or(1)
                                            .clamp(1, bank_size);
                                        draft.set(next);
                                    }}
                                />
                            }
                        </div>

                        <div class="space-y-3">
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                {"Wheel Colors"}
                            </h3>
                            <div class="flex flex-wrap items-center gap-3">
                                { for draft.wheel_colors.iter().enumerate().map(|(index, color)| {
                                    html! {
                                        <div class="flex items-center gap-1">
                                            <input
                                                type="color"
                                                class="h-10 w-10 cursor-pointer rounded border border-gray-300 dark:border-gray-600 bg-transparent"
                                                value={color.clone()}
                                                onchange={let draft = draft.clone(); move |e: Event| {
                                                    let input: HtmlInputElement = e.target_unchecked_into();
                                                    let mut next = (*draft).clone();
                                                    next.wheel_colors[index] = input.value();
                                                    draft.set(next);
                                                }}
                                            />
                                            <button
                                                class="p-1 text-gray-400 hover:text-red-500 disabled:opacity-40 disabled:cursor-not-allowed"
                                                disabled={only_color}
                                                onclick={let draft = draft.clone(); move |_: MouseEvent| {
                                                    let mut next = (*draft).clone();
                                                    if next.wheel_colors.len() > 1 {
                                                        next.wheel_colors.remove(index);
                                                        draft.set(next);
                                                    }
                                                }}
                                            >
                                                {"\u{2715}"}
                                            </button>
                                        </div>
                                    }
                                }) }
                            </div>
                            <div class="flex gap-3">
                                <button class={styles::BUTTON_SECONDARY} onclick={add_color}>
                                    {"Add Color"}
                                </button>
                                <button class={styles::BUTTON_SECONDARY} onclick={reset_colors}>
                                    {"Reset Palette"}
                                </button>
                            </div>
                        </div>

                        <div class="space-y-4">
                            <h3 class="text-lg font-semibold text-gray-900 dark:text-white">
                                {"Questions"}
                            </h3>
                            { for draft.questions.iter().enumerate().map(|(index, question)| {
                                html! {
                                    <div class="rounded-xl border border-gray-200 dark:border-gray-700 p-4 space-y-3">
                                        <div class="flex items-center justify-between gap-3">
                                            <label class={styles::TEXT_LABEL}>
                                                { format!("Question {}", index + 1) }
                                            </label>
                                            <button
                                                class="text-sm text-gray-400 hover:text-red-500 disabled:opacity-40 disabled:cursor-not-allowed"
                                                disabled={only_question}
                                                onclick={let draft = draft.clone(); move |_: MouseEvent| {
                                                    let mut next = (*draft).clone();
                                                    next.remove_question(index);
                                                    draft.set(next);
                                                }}
                                            >
                                                {"Remove"}
                                            </button>
                                        </div>
                                        <input
                                            type="text"
                                            class={styles::INPUT_BARE}
                                            placeholder="Question text"
                                            value={question.text.clone()}
                                            oninput={let draft = draft.clone(); move |e: InputEvent| {
                                                let input: HtmlInputElement = e.target_unchecked_into();
                                                let mut next = (*draft).clone();
                                                next.questions[index].text = input.value();
                                                draft.set(next);
                                            }}
                                        />
                                        { for (0..2).map(|option_index| {
                                            html! {
                                                <div class="flex items-center gap-3">
                                                    <input
                                                        type="radio"
                                                        class="h-4 w-4"
                                                        name={format!("correct-{}", question.id)}
                                                        title="Mark as the correct answer"
                                                        checked={question.correct_index == option_index}
                                                        onchange={let draft = draft.clone(); move |_: Event| {
                                                            let mut next = (*draft).clone();
                                                            next.questions[index].correct_index = option_index;
                                                            draft.set(next);
                                                        }}
                                                    />
                                                    <input
                                                        type="text"
                                                        class={styles::INPUT_BARE}
                                                        placeholder={format!("Option {}", option_index + 1)}
                                                        value={question.options[option_index].clone()}
                                                        oninput={let draft = draft.clone(); move |e: InputEvent| {
                                                            let input: HtmlInputElement = e.target_unchecked_into();
                                                            let mut next = (*draft).clone();
                                                            next.questions[index].options[option_index] = input.value();
                                                            draft.set(next);
                                                        }}
                                                    />
                                                </div>
                                            }
                                        }) }
                                    </div>
                                }
                            }) }
                            <button class={styles::BUTTON_SECONDARY} onclick={add_question}>
                                {"Add Question"}
                            </button>
                        </div>

                        <div class="space-y-4">
                            <h3 class="text-lg font-semibold text-red-600 dark:text-red-400">
                                {"Danger Zone"}
                            </h3>
                            if *confirm_progress_reset {
                                <div class={styles::ALERT_ERROR}>
                                    <p class="mb-3">{"This clears the current round's answers and score."}</p>
                                    <div class="flex gap-3">
                                        <button
                                            class={styles::BUTTON_DANGER}
                                            onclick={
                                                let on_reset_progress = props.on_reset_progress.clone();
                                                let confirm_progress_reset = confirm_progress_reset.clone();
                                                move |_: MouseEvent| {
                                                    confirm_progress_reset.set(false);
                                                    on_reset_progress.emit(());
                                                }
                                            }
                                        >
                                            {"Reset Progress"}
                                        </button>
                                        <button
                                            class={styles::BUTTON_SECONDARY}
                                            onclick={
                                                let confirm_progress_reset = confirm_progress_reset.clone();
                                                move |_: MouseEvent| confirm_progress_reset.set(false)
                                            }
                                        >
                                            {"Cancel"}
                                        </button>
                                    </div>
                                </div>
                            } else {
                                <button
                                    class={styles::BUTTON_DANGER}
                                    onclick={
                                        let confirm_progress_reset = confirm_progress_reset.clone();
                                        move |_: MouseEvent| confirm_progress_reset.set(true)
                                    }
                                >
                                    {"Reset Progress"}
                                </button>
                            }
                            if *confirm_factory_reset {
                                <div class={styles::ALERT_ERROR}>
                                    <p class="mb-3">
                                        {"This deletes every custom question and color along with all progress, then restores the built-in set."}
                                    </p>
                                    <div class="flex gap-3">
                                        <button
                                            class={styles::BUTTON_DANGER}
                                            onclick={
                                                let on_factory_reset = props.on_factory_reset.clone();
                                                let confirm_factory_reset = confirm_factory_reset.clone();
                                                move |_: MouseEvent| {
                                                    confirm_factory_reset.set(false);
                                                    on_factory_reset.emit(());
                                                }
                                            }
                                        >
                                            {"Factory Reset"}
                                        </button>
                                        <button
                                            class={styles::BUTTON_SECONDARY}
                                            onclick={
                                                let confirm_factory_reset = confirm_factory_reset.clone();
                                                move |_: MouseEvent| confirm_factory_reset.set(false)
                                            }
                                        >
                                            {"Cancel"}
                                        </button>
                                    </div>
                                </div>
                            } else {
                                <button
                                    class={styles::BUTTON_DANGER}
                                    onclick={
                                        let confirm_factory_reset = confirm_factory_reset.clone();
                                        move |_: MouseEvent| confirm_factory_reset.set(true)
                                    }
                                >
                                    {"Factory Reset"}
                                </button>
                            }
                        </div>

                        <div class="flex justify-end gap-3 pt-2 border-t border-gray-200 dark:border-gray-700">
                            <button class={styles::BUTTON_SECONDARY} onclick={close}>
                                {"Cancel"}
                            </button>
                            <button class={styles::BUTTON_PRIMARY} onclick={save}>
                                {"Save"}
                            </button>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
