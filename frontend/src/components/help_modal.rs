use yew::prelude::*;
use web_sys::MouseEvent;
use crate::styles;

#[derive(Properties, PartialEq)]
pub struct HelpModalProps {
    pub on_close: Callback<()>,
}

#[function_component(HelpModal)]
pub fn help_modal(props: &HelpModalProps) -> Html {
    let close = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class={styles::MODAL_OVERLAY} onclick={close.clone()}>
            <div class={styles::MODAL_CENTER}>
                <div
                    onclick={Callback::from(|e: MouseEvent| e.stop_propagation())}
                    class={styles::MODAL_PANEL}
                >
                    <button onclick={close} class={styles::MODAL_CLOSE} aria-label="Close">
                        {"\u{2715}"}
                    </button>
                    <div class="p-6 sm:p-8 space-y-4">
                        <h2 class={styles::TEXT_H2}>{"How to Play"}</h2>
                        <ul class="list-disc list-inside space-y-2 text-gray-600 dark:text-gray-300">
                            <li>{"Spin the wheel to let chance pick the next question, or switch to the grid and pick one yourself."}</li>
                            <li>{"Answer the question that pops up. You get one try, and the wheel marks it off either way."}</li>
                            <li>{"Answered segments turn gray and cannot be landed on again."}</li>
                            <li>{"Once every question is answered you get a score recap and can start a new round."}</li>
                        </ul>
                        <h3 class="text-lg font-semibold text-gray-900 dark:text-white pt-2">
                            {"Hosting your own quiz"}
                        </h3>
                        <p class={styles::TEXT_BODY}>
                            {"Open the settings panel to rename the quiz, write your own questions, change the wheel colors, or limit how many questions a round uses. Everything is saved in your browser."}
                        </p>
                    </div>
                </div>
            </div>
        </div>
    }
}
