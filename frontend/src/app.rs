use yew::prelude::*;
use web_sys::{window, MouseEvent};
use std::cell::RefCell;
use std::rc::Rc;
use gloo_timers::callback::Timeout;
use shared::quiz::{GameProgress, Question, QuizConfig};
use crate::audio::AudioPlayer;
use crate::components::{EndScreen, HelpModal, QuestionGrid, QuestionModal, SettingsModal, Wheel};
use crate::{storage, styles};

#[derive(Clone, Copy, PartialEq)]
enum ViewMode {
    Wheel,
    Grid,
}

#[derive(Clone, Copy, PartialEq)]
enum GamePhase {
    Playing,
    Ended,
}

/// Short beat between the last recorded answer and the recap screen, so
/// the closing verdict is not cut off mid-thought.
const END_SCREEN_DELAY_MS: u32 = 500;

fn apply_theme(dark_mode: bool) {
    if let Some(html) = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    {
        html.set_class_name(if dark_mode { "dark" } else { "light" });
    }
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item("theme", if dark_mode { "dark" } else { "light" });
    }
}

#[function_component(App)]
pub fn app() -> Html {
    let config = use_state(storage::load_config);
    let progress = use_state(storage::load_progress);
    // A reloaded finished round goes straight back to the recap
    let phase = {
        let config = config.clone();
        let progress = progress.clone();
        use_state(move || {
            if progress.is_complete(config.active_questions()) {
                GamePhase::Ended
            } else {
                GamePhase::Playing
            }
        })
    };
    let view_mode = use_state(|| ViewMode::Wheel);
    let active_question = use_state(|| None::<Question>);
    let show_settings = use_state(|| false);
    let show_help = use_state(|| false);
    let dark_mode = use_state(|| {
        window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item("theme").ok().flatten())
            .map_or(false, |theme| theme == "dark")
    });
    let audio = use_memo((), |_| AudioPlayer::new());
    let end_delay: Rc<RefCell<Option<Timeout>>> = use_mut_ref(|| None);

    {
        use_effect_with(*dark_mode, move |dark_mode| {
            apply_theme(*dark_mode);
            || ()
        });
    }

    {
        let end_delay = end_delay.clone();
        use_effect_with((), move |_| {
            Box::new(move || {
                if let Some(timer) = end_delay.borrow_mut().take() {
                    drop(timer);
                }
            }) as Box<dyn FnOnce()>
        });
    }

    let toggle_theme = {
        let dark_mode = dark_mode.clone();
        Callback::from(move |_: MouseEvent| dark_mode.set(!*dark_mode))
    };

    let on_tick = {
        let audio = audio.clone();
        Callback::from(move |_| audio.play_tick())
    };

    let on_stop = {
        let audio = audio.clone();
        Callback::from(move |_| audio.play_stop())
    };

    // Winner delivered by a finished spin
    let on_select = {
        let active_question = active_question.clone();
        Callback::from(move |question: Question| {
            active_question.set(Some(question));
        })
    };

    // Direct pick from the grid
    let on_grid_select = {
        let active_question = active_question.clone();
        let audio = audio.clone();
        Callback::from(move |question: Question| {
            audio.play_click();
            active_question.set(Some(question));
        })
    };

    let on_choice = {
        let audio = audio.clone();
        Callback::from(move |is_correct: bool| {
            if is_correct {
                audio.play_correct();
            } else {
                audio.play_wrong();
            }
        })
    };

    let on_result = {
        let config = config.clone();
        let progress = progress.clone();
        let active_question = active_question.clone();
        let phase = phase.clone();
        let audio = audio.clone();
        let end_delay = end_delay.clone();
        Callback::from(move |is_correct: bool| {
            let question = match (*active_question).clone() {
                Some(question) => question,
                None => return,
            };
            let mut next = (*progress).clone();
            next.record(&question.id, is_correct);
            storage::save_progress(&next);
            let complete = next.is_complete(config.active_questions());
            let score = next.score;
            progress.set(next);
            active_question.set(None);

            if complete {
                let phase = phase.clone();
                let audio = audio.clone();
                let timer = Timeout::new(END_SCREEN_DELAY_MS, move || {
                    phase.set(GamePhase::Ended);
                    if score > 0 {
                        audio.play_win();
                    }
                });
                *end_delay.borrow_mut() = Some(timer);
            }
        })
    };

    let on_abandon_question = {
        let active_question = active_question.clone();
        Callback::from(move |_| active_question.set(None))
    };

    let on_restart = {
        let progress = progress.clone();
        let phase = phase.clone();
        Callback::from(move |_| {
            let fresh = GameProgress::new();
            storage::save_progress(&fresh);
            progress.set(fresh);
            phase.set(GamePhase::Playing);
        })
    };

    let on_save_settings = {
        let config = config.clone();
        let progress = progress.clone();
        let phase = phase.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |new_config: QuizConfig| {
            storage::save_config(&new_config);
            let fresh = GameProgress::new();
            storage::save_progress(&fresh);
            config.set(new_config);
            progress.set(fresh);
            phase.set(GamePhase::Playing);
            show_settings.set(false);
        })
    };

    let on_reset_progress = {
        let progress = progress.clone();
        let phase = phase.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |_| {
            let fresh = GameProgress::new();
            storage::save_progress(&fresh);
            progress.set(fresh);
            phase.set(GamePhase::Playing);
            show_settings.set(false);
        })
    };

    let on_factory_reset = {
        let config = config.clone();
        let progress = progress.clone();
        let phase = phase.clone();
        let show_settings = show_settings.clone();
        Callback::from(move |_| {
            storage::clear_all();
            config.set(QuizConfig::default());
            progress.set(GameProgress::new());
            phase.set(GamePhase::Playing);
            show_settings.set(false);
        })
    };

    let open_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_: MouseEvent| show_settings.set(true))
    };
    let close_settings = {
        let show_settings = show_settings.clone();
        Callback::from(move |_| show_settings.set(false))
    };
    let open_help = {
        let show_help = show_help.clone();
        Callback::from(move |_: MouseEvent| show_help.set(true))
    };
    let close_help = {
        let show_help = show_help.clone();
        Callback::from(move |_| show_help.set(false))
    };

    let to_wheel = {
        let view_mode = view_mode.clone();
        Callback::from(move |_: MouseEvent| view_mode.set(ViewMode::Wheel))
    };
    let to_grid = {
        let view_mode = view_mode.clone();
        Callback::from(move |_: MouseEvent| view_mode.set(ViewMode::Grid))
    };

    let active = config.active_questions().to_vec();
    let total = active.len();
    let answered = progress.answered_within(&active);

    html! {
        <div class={styles::PAGE}>
            <header class={styles::HEADER}>
                <div class={styles::HEADER_INNER}>
                    <h1 class={styles::TEXT_H1}>{ config.title.clone() }</h1>
                    <div class="flex items-center gap-2">
                        <span class={styles::SCORE_BADGE}>
                            { format!("{} / {}", progress.score, total) }
                        </span>
                        <button class={styles::BUTTON_ICON} onclick={toggle_theme} title="Toggle theme">
                            { if *dark_mode { "\u{2600}\u{FE0F}" } else { "\u{1F319}" } }
                        </button>
                        <button class={styles::BUTTON_ICON} onclick={open_help} title="How to play">
                            {"?"}
                        </button>
                        <button class={styles::BUTTON_ICON} onclick={open_settings} title="Settings">
                            {"\u{2699}\u{FE0F}"}
                        </button>
                    </div>
                </div>
            </header>

            <main class={styles::MAIN}>
                {
                    match *phase {
                        GamePhase::Playing => html! {
                            <div class="space-y-6">
                                <div class="flex items-center justify-between flex-wrap gap-3">
                                    <div class={styles::VIEW_TOGGLE}>
                                        <button
                                            class={if *view_mode == ViewMode::Wheel { styles::VIEW_TOGGLE_ACTIVE } else { styles::VIEW_TOGGLE_IDLE }}
                                            onclick={to_wheel}
                                        >
                                            {"Wheel"}
                                        </button>
                                        <button
                                            class={if *view_mode == ViewMode::Grid { styles::VIEW_TOGGLE_ACTIVE } else { styles::VIEW_TOGGLE_IDLE }}
                                            onclick={to_grid}
                                        >
                                            {"Grid"}
                                        </button>
                                    </div>
                                    <p class={styles::TEXT_SMALL}>
                                        { format!("Answered {} of {}", answered, total) }
                                    </p>
                                </div>
                                <div class={styles::CARD}>
                                    {
                                        match *view_mode {
                                            ViewMode::Wheel => html! {
                                                <Wheel
                                                    questions={active.clone()}
                                                    answered_ids={progress.answered_ids.clone()}
                                                    colors={config.wheel_colors.clone()}
                                                    on_select={on_select.clone()}
                                                    on_tick={on_tick.clone()}
                                                    on_stop={on_stop.clone()}
                                                />
                                            },
                                            ViewMode::Grid => html! {
                                                <QuestionGrid
                                                    questions={active.clone()}
                                                    answered_ids={progress.answered_ids.clone()}
                                                    colors={config.wheel_colors.clone()}
                                                    on_select={on_grid_select.clone()}
                                                />
                                            },
                                        }
                                    }
                                </div>
                            </div>
                        },
                        GamePhase::Ended => html! {
                            <EndScreen
                                questions={active.clone()}
                                progress={(*progress).clone()}
                                on_restart={on_restart.clone()}
                            />
                        },
                    }
                }
            </main>

            <footer class={styles::FOOTER}>
                <p>{"Spin the wheel, pick a question, keep score."}</p>
            </footer>

            if let Some(question) = (*active_question).clone() {
                <QuestionModal
                    question={question}
                    on_choice={on_choice.clone()}
                    on_result={on_result.clone()}
                    on_close={on_abandon_question.clone()}
                />
            }
            if *show_settings {
                <SettingsModal
                    config={(*config).clone()}
                    on_save={on_save_settings}
                    on_reset_progress={on_reset_progress}
                    on_factory_reset={on_factory_reset}
                    on_close={close_settings}
                />
            }
            if *show_help {
                <HelpModal on_close={close_help} />
            }
        </div>
    }
}
