//! Pure rendering of the day preparation view.
//!
//! Nothing here touches the network or the actor; every function maps a
//! [`ViewState`] to what the user sees.

use super::state::ViewState;
use std::fmt::Write;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The prepare button as rendered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonView {
    pub label: String,
    pub disabled: bool,
}

/// The results block; empty lists are not shown
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultsView<'a> {
    pub summary: &'a str,
    pub meetings: Vec<&'a str>,
    pub tasks: Vec<&'a str>,
}

/// Button label and enabled flag for a state
pub fn button(state: &ViewState) -> ButtonView {
    let label = if state.is_loading() {
        t!("button_preparing")
    } else {
        t!("button_prepare")
    };

    ButtonView {
        label: label.to_string(),
        disabled: state.is_loading(),
    }
}

/// Results block for a state, present iff a result is
pub fn results(state: &ViewState) -> Option<ResultsView<'_>> {
    let prep = state.result()?;

    Some(ResultsView {
        summary: &prep.summary,
        meetings: prep.meetings().iter().map(|m| m.title.as_str()).collect(),
        tasks: prep.tasks().iter().map(|t| t.title.as_str()).collect(),
    })
}

/// Render the results block as text
pub fn render_results(view: &ResultsView<'_>) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", t!("summary_title"));
    let _ = writeln!(out, "  {}", view.summary);

    if !view.meetings.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", t!("meetings_title"));
        for title in &view.meetings {
            let _ = writeln!(out, "    • {}", title);
        }
    }

    if !view.tasks.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "  {}", t!("tasks_title"));
        for title in &view.tasks {
            let _ = writeln!(out, "    • {}", title);
        }
    }

    out
}

/// Render the button as text
pub fn render_button(view: &ButtonView) -> String {
    if view.disabled {
        format!("[ {} ] ({})", view.label, t!("button_disabled_hint"))
    } else {
        format!("[ {} ]", view.label)
    }
}

/// Render the whole page for a state
pub fn render_page(state: &ViewState) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "{}", t!("app_title"));
    let _ = writeln!(out, "{}", t!("tagline"));
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t!("hero_title"));
    let _ = writeln!(out, "{}", render_button(&button(state)));
    let _ = writeln!(out);

    if let Some(view) = results(state) {
        out.push_str(&render_results(&view));
        let _ = writeln!(out);
    }

    let _ = writeln!(out, "{}", t!("features_title"));
    for (title, text) in feature_cards() {
        let _ = writeln!(out, "  {}", title);
        let _ = writeln!(out, "     {}", text);
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "{}", t!("footer", version = VERSION));

    out
}

/// Feature cards shown under the results, as (title, description)
fn feature_cards() -> [(String, String); 4] {
    [
        (
            t!("feature_proactive_title").to_string(),
            t!("feature_proactive_text").to_string(),
        ),
        (
            t!("feature_workspace_title").to_string(),
            t!("feature_workspace_text").to_string(),
        ),
        (
            t!("feature_collaboration_title").to_string(),
            t!("feature_collaboration_text").to_string(),
        ),
        (
            t!("feature_time_title").to_string(),
            t!("feature_time_text").to_string(),
        ),
    ]
}

/// Input hint for the terminal
pub fn prompt() -> String {
    t!("prompt").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::day_preparation::models::{
        DayPreparation, Meeting, Task, FALLBACK_SUMMARY,
    };

    fn settled(prep: DayPreparation) -> ViewState {
        let (loading, token) = ViewState::new().begin();
        loading.settle(token, prep).unwrap()
    }

    fn standup_day() -> DayPreparation {
        DayPreparation {
            date: "2024-01-01T00:00:00Z".to_string(),
            meetings: Some(vec![Meeting {
                title: "Standup".to_string(),
            }]),
            tasks: Some(vec![]),
            summary: "All clear".to_string(),
        }
    }

    #[test]
    fn idle_button_is_enabled() {
        let view = button(&ViewState::new());
        assert_eq!(view.label, "✨ Prepare My Day");
        assert!(!view.disabled);
    }

    #[test]
    fn loading_button_is_disabled() {
        let (loading, _) = ViewState::new().begin();
        let view = button(&loading);
        assert_eq!(view.label, "Preparing...");
        assert!(view.disabled);
    }

    #[test]
    fn no_results_block_before_first_request() {
        let state = ViewState::new();
        assert!(results(&state).is_none());
        assert!(!render_page(&state).contains("Your Day Summary"));
    }

    #[test]
    fn meetings_shown_and_empty_tasks_hidden() {
        let state = settled(standup_day());
        let view = results(&state).unwrap();

        assert_eq!(view.summary, "All clear");
        assert_eq!(view.meetings, vec!["Standup"]);
        assert!(view.tasks.is_empty());

        let text = render_results(&view);
        assert!(text.contains("📅 Meetings"));
        assert!(text.contains("• Standup"));
        assert!(!text.contains("✅ Tasks"));
    }

    #[test]
    fn absent_and_empty_meetings_render_identically() {
        let mut absent = standup_day();
        absent.meetings = None;
        let mut empty = standup_day();
        empty.meetings = Some(vec![]);

        let absent_state = settled(absent);
        let empty_state = settled(empty);
        assert_eq!(
            render_results(&results(&absent_state).unwrap()),
            render_results(&results(&empty_state).unwrap())
        );
    }

    #[test]
    fn list_items_keep_response_order() {
        let mut prep = standup_day();
        prep.tasks = Some(
            ["Write report", "Call Ana", "Book flight"]
                .into_iter()
                .map(|title| Task {
                    title: title.to_string(),
                })
                .collect(),
        );

        let state = settled(prep);
        let text = render_results(&results(&state).unwrap());
        let first = text.find("Write report").unwrap();
        let second = text.find("Call Ana").unwrap();
        let third = text.find("Book flight").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn fallback_renders_summary_only() {
        let state = settled(DayPreparation::fallback());
        let view = results(&state).unwrap();

        assert_eq!(view.summary, FALLBACK_SUMMARY);
        assert!(view.meetings.is_empty());
        assert!(view.tasks.is_empty());
    }

    #[test]
    fn page_has_static_content() {
        let page = render_page(&ViewState::new());
        assert!(page.contains("🤖 Brody"));
        assert!(page.contains("Your Proactive Multi-Agent AI Hub"));
        assert!(page.contains("Prepare Your Day in One Click"));
        assert!(page.contains("[ ✨ Prepare My Day ]"));
        assert!(page.contains("Save 5-7 Hours Weekly"));
        assert!(page.contains(&format!("Brody v{} - MVP Phase", VERSION)));
    }
}
