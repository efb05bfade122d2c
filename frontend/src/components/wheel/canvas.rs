use yew::prelude::*;
use web_sys::{window, HtmlCanvasElement, CanvasRenderingContext2d};
use wasm_bindgen::JsCast;
use std::f64::consts::PI;
use shared::constants::ANSWERED_SEGMENT_COLOR;
use shared::quiz::Question;
use shared::wheel::segment_angle;

#[derive(Properties, PartialEq)]
pub struct WheelCanvasProps {
    pub rotation: f64,
    pub is_spinning: bool,
    pub questions: Vec<Question>,
    pub answered_ids: Vec<String>,
    pub colors: Vec<String>,
}

#[function_component(WheelCanvas)]
pub fn wheel_canvas(props: &WheelCanvasProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let rotation = props.rotation;
        let is_spinning = props.is_spinning;
        let questions = props.questions.clone();
        let answered_ids = props.answered_ids.clone();
        let colors = props.colors.clone();

        use_effect_with(
            (rotation, is_spinning, questions, answered_ids, colors),
            move |(rotation, is_spinning, questions, answered_ids, colors)| {
                if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                    let context = canvas
                        .get_context("2d")
                        .unwrap()
                        .unwrap()
                        .dyn_into::<CanvasRenderingContext2d>()
                        .unwrap();

                    let width = canvas.width() as f64;
                    let height = canvas.height() as f64;
                    let center_x = width / 2.0;
                    let center_y = height / 2.0;
                    let radius = if width < height { width / 2.0 - 20.0 } else { height / 2.0 - 20.0 };

                    // Clear canvas
                    context.clear_rect(0.0, 0.0, width, height);

                    // Check if dark mode is active
                    let is_dark_mode = if let Some(window) = window() {
                        if let Some(document) = window.document() {
                            document.document_element()
                                .map(|el| el.class_list().contains("dark"))
                                .unwrap_or(false)
                        } else {
                            false
                        }
                    } else {
                        false
                    };

                    // Wheel backdrop
                    context.begin_path();
                    if is_dark_mode {
                        context.set_fill_style_str("#1a1c2e");
                    } else {
                        context.set_fill_style_str("#f0f2ff");
                    }
                    let _ = context.arc(center_x, center_y, radius, 0.0, 2.0 * PI);
                    context.fill();

                    let total = questions.len();
                    let segment = segment_angle(total);

                    // Save context state before rotation
                    context.save();

                    // Move to center, rotate, then move back
                    let _ = context.translate(center_x, center_y);
                    let _ = context.rotate(*rotation * PI / 180.0);
                    let _ = context.translate(-center_x, -center_y);

                    // Segments: palette color cycling by index, neutral gray once answered
                    for (i, question) in questions.iter().enumerate() {
                        let start = (i as f64 * segment) * PI / 180.0;
                        let end = ((i as f64 + 1.0) * segment) * PI / 180.0;
                        let fill = if answered_ids.contains(&question.id) {
                            ANSWERED_SEGMENT_COLOR
                        } else {
                            colors[i % colors.len()].as_str()
                        };

                        context.begin_path();
                        context.set_fill_style_str(fill);
                        context.move_to(center_x, center_y);
                        let _ = context.arc(center_x, center_y, radius, start, end);
                        context.close_path();
                        context.fill();
                    }

                    // Dividing lines between segments
                    if total > 1 {
                        context.set_stroke_style_str(if is_dark_mode {
                            "rgba(255, 255, 255, 0.7)"
                        } else {
                            "rgba(255, 255, 255, 0.9)"
                        });
                        context.set_line_width(2.5);
                        for i in 0..total {
                            let angle = (i as f64 * segment) * PI / 180.0;
                            context.begin_path();
                            context.move_to(center_x, center_y);
                            context.line_to(
                                center_x + radius * angle.cos(),
                                center_y + radius * angle.sin(),
                            );
                            context.stroke();
                        }
                    }

                    // Segment labels: question number, or a check mark once answered
                    context.set_font("bold 20px 'Segoe UI', Roboto, system-ui, sans-serif");
                    context.set_text_align("center");
                    context.set_text_baseline("middle");
                    context.set_fill_style_str("#ffffff");
                    context.set_shadow_color(if is_dark_mode { "rgba(0, 0, 0, 0.7)" } else { "rgba(0, 0, 0, 0.5)" });
                    context.set_shadow_blur(3.0);
                    context.set_shadow_offset_x(1.0);
                    context.set_shadow_offset_y(1.0);

                    for (i, question) in questions.iter().enumerate() {
                        let label = if answered_ids.contains(&question.id) {
                            "\u{2713}".to_string()
                        } else {
                            (i + 1).to_string()
                        };
                        let center = (i as f64 * segment + segment / 2.0) * PI / 180.0;

                        context.save();
                        let _ = context.translate(center_x, center_y);
                        let _ = context.rotate(center);
                        let _ = context.translate(radius * 0.6, 0.0);
                        let _ = context.fill_text(&label, 0.0, 0.0);
                        context.restore();
                    }

                    // Reset shadow for subsequent drawing
                    context.set_shadow_color("rgba(0, 0, 0, 0)");
                    context.set_shadow_blur(0.0);
                    context.set_shadow_offset_x(0.0);
                    context.set_shadow_offset_y(0.0);

                    // Restore context to original state (no rotation)
                    context.restore();

                    // Outer ring
                    context.begin_path();
                    context.set_stroke_style_str(if is_dark_mode {
                        "rgba(180, 130, 255, 0.5)"
                    } else {
                        "rgba(130, 100, 255, 0.5)"
                    });
                    context.set_line_width(4.0);
                    let _ = context.arc(center_x, center_y, radius - 2.0, 0.0, 2.0 * PI);
                    context.stroke();

                    // Fixed pointer at the top, pointing into the wheel
                    context.begin_path();
                    context.move_to(center_x, center_y - radius + 12.0);
                    context.line_to(center_x - 14.0, center_y - radius - 14.0);
                    context.line_to(center_x + 14.0, center_y - radius - 14.0);
                    context.close_path();
                    if *is_spinning {
                        context.set_fill_style_str("#ffd700");
                    } else {
                        context.set_fill_style_str("#f59e0b");
                    }
                    context.fill();
                    context.set_stroke_style_str("#e69500");
                    context.set_line_width(1.5);
                    context.stroke();
                }
                || ()
            },
        );
    }

    html! {
        <div class="relative">
            <canvas
                ref={canvas_ref}
                width="450"
                height="450"
                class="w-full max-w-[450px] h-auto rounded-full shadow-lg transition-all duration-300"
                style={if props.is_spinning {
                    "filter: drop-shadow(0px 5px 20px rgba(130, 100, 255, 0.4));"
                } else {
                    "filter: drop-shadow(0px 5px 15px rgba(0, 0, 0, 0.2));"
                }}
            />
        </div>
    }
}

// Easing function for smooth deceleration
pub fn ease_out_cubic(t: f64) -> f64 {
    1.0 - (1.0 - t).powi(3)
}
