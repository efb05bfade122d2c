use yew::prelude::*;
use shared::constants::ANSWERED_SEGMENT_COLOR;
use shared::quiz::Question;

#[derive(Properties, PartialEq)]
pub struct QuestionGridProps {
    pub questions: Vec<Question>,
    pub answered_ids: Vec<String>,
    pub colors: Vec<String>,
    pub on_select: Callback<Question>,
}

/// Flat alternative to the wheel: every question as a numbered tile, picked
/// directly instead of by chance.
#[function_component(QuestionGrid)]
pub fn question_grid(props: &QuestionGridProps) -> Html {
    html! {
        <div class="grid grid-cols-3 sm:grid-cols-4 gap-3 md:gap-4 w-full mx-auto">
            { for props.questions.iter().enumerate().map(|(index, question)| {
                let answered = props.answered_ids.contains(&question.id);
                let color = if answered {
                    ANSWERED_SEGMENT_COLOR.to_string()
                } else {
                    props.colors[index % props.colors.len()].clone()
                };
                let on_click = {
                    let on_select = props.on_select.clone();
                    let question = question.clone();
                    Callback::from(move |_| on_select.emit(question.clone()))
                };
                html! {
                    <button
                        onclick={on_click}
                        disabled={answered}
                        class="aspect-square flex items-center justify-center rounded-xl text-white text-2xl font-bold shadow-md transition-all duration-300 hover:scale-105 disabled:hover:scale-100 disabled:opacity-60 disabled:cursor-not-allowed"
                        style={format!("background-color: {};", color)}
                    >
                        { if answered { "\u{2713}".to_string() } else { (index + 1).to_string() } }
                    </button>
                }
            }) }
        </div>
    }
}
