use yew::prelude::*;
use shared::quiz::{GameProgress, Question};
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct EndScreenProps {
    pub questions: Vec<Question>,
    pub progress: GameProgress,
    pub on_restart: Callback<()>,
}

/// Final score card with a per-question recap, shown once every question in
/// the round has been answered.
#[function_component(EndScreen)]
pub fn end_screen(props: &EndScreenProps) -> Html {
    let total = props.questions.len();
    let percent = props.progress.percent(total);

    let on_restart = {
        let on_restart = props.on_restart.clone();
        Callback::from(move |_| on_restart.emit(()))
    };

    html! {
        <div class={styles::CARD}>
            <div class="text-center mb-8">
                <h2 class={styles::TEXT_H2}>{"Round Complete!"}</h2>
                <p class="mt-4 text-5xl font-bold text-blue-600 dark:text-blue-400">
                    { format!("{} / {}", props.progress.score, total) }
                </p>
                <p class="mt-2 text-lg text-gray-600 dark:text-gray-300">
                    { format!("{}% correct", percent) }
                </p>
            </div>
            <div class="flex flex-col gap-2 mb-8">
                { for props.progress.history.iter().filter_map(|record| {
                    // Stale ids (question since deleted) are simply skipped
                    props.questions.iter().find(|q| q.id == record.question_id).map(|question| {
                        html! {
                            <div class="flex items-center justify-between gap-4 px-4 py-3 rounded-lg bg-gray-50 dark:bg-gray-700/50">
                                <span class="text-gray-900 dark:text-white">{ &question.text }</span>
                                { if record.is_correct {
                                    html! { <span class="shrink-0 font-bold text-green-500">{"\u{2713}"}</span> }
                                } else {
                                    html! { <span class="shrink-0 font-bold text-red-500">{"\u{2717}"}</span> }
                                }}
                            </div>
                        }
                    })
                }) }
            </div>
            <div class="flex justify-center">
                <button class={styles::BUTTON_PRIMARY} onclick={on_restart}>
                    {"Play Again"}
                </button>
            </div>
        </div>
    }
}
