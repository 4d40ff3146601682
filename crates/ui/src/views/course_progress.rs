use dioxus::prelude::*;

use crate::context::AppContext;
use crate::views::{ViewState, view_state_from_resource};
use crate::vm::{CourseCardVm, map_course_cards};

#[component]
pub fn CourseProgressView() -> Element {
    let ctx = use_context::<AppContext>();
    let service = ctx.course_progress();

    // One-shot load on first display. No reactive dependencies, so the
    // resource never re-runs; there is no refresh affordance or polling.
    let resource = use_resource(move || {
        let service = service.clone();
        async move {
            match service.course_summaries().await {
                Ok(summaries) => map_course_cards(&summaries),
                Err(err) => {
                    // Swallowed: the panel renders whatever it has (an empty
                    // list on first load) and leaves the failure to operators.
                    tracing::error!(error = %err, "failed to load course progress");
                    Vec::new()
                }
            }
        }
    });

    let state = view_state_from_resource(&resource);

    rsx! {
        div { class: "page",
            match state {
                ViewState::Idle | ViewState::Loading => rsx! {
                    div { class: "spinner-wrap",
                        div { class: "spinner" }
                    }
                },
                ViewState::Ready(cards) => rsx! {
                    div { class: "panel",
                        h2 { "Course Progress Overview" }
                        div { class: "course-list",
                            for card in cards {
                                CourseCard { card }
                            }
                        }
                    }
                },
            }
        }
    }
}

#[component]
fn CourseCard(card: CourseCardVm) -> Element {
    rsx! {
        div { class: "course-card",
            div { class: "course-card-head",
                h3 { "{card.title}" }
                span { class: "{card.level_class}", "{card.level_label}" }
            }

            div { class: "course-card-stats",
                span { "{card.total_enrollments} enrolled" }
                span { "{card.duration_minutes} minutes" }
                span { "{card.completion_label}% completed" }
            }

            div { class: "course-card-progress",
                div { class: "progress-meta",
                    span { "Average Progress" }
                    span { "{card.avg_progress_label}%" }
                }
                div { class: "progress-track",
                    // Bar width uses the unrounded value; only the labels round.
                    div { class: "progress-fill", style: "width: {card.avg_progress_pct}%" }
                }
            }
        }
    }
}
