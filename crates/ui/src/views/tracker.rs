use dioxus::prelude::*;

use tracker_core::filter::{SubjectFilter, SyllabusFilter, TopicQuery};
use tracker_core::model::{
    ProgressSet, ProgressSummary, SubjectId, ThemePreference, TopicKey,
};

use crate::context::AppContext;
use crate::views::{ViewError, ViewState, view_state_from_resource};
use crate::vm::{SubjectVm, TopicVm, map_subjects};

#[derive(Clone, Debug, PartialEq)]
struct TrackerData {
    progress: ProgressSet,
    theme: ThemePreference,
}

#[component]
pub fn TrackerView() -> Element {
    let ctx = use_context::<AppContext>();
    let progress_svc = ctx.progress();
    let settings_svc = ctx.settings();

    let resource = use_resource(move || {
        let progress_svc = progress_svc.clone();
        let settings_svc = settings_svc.clone();

        async move {
            let progress = progress_svc
                .load()
                .await
                // Keep error mapping in the UI boundary.
                .map_err(|_| ViewError::Unknown)?;
            let theme = settings_svc
                .load_theme()
                .await
                .map_err(|_| ViewError::Unknown)?;

            Ok::<_, ViewError>(TrackerData { progress, theme })
        }
    });

    let state = view_state_from_resource(resource);

    rsx! {
        match state {
            ViewState::Idle => rsx! {
                p { "Idle" }
            },
            ViewState::Loading => rsx! {
                p { "Loading..." }
            },
            ViewState::Ready(data) => rsx! {
                TrackerPage { initial: data }
            },
            ViewState::Error(err) => rsx! {
                p { "{err.message()}" }
            },
        }
    }
}

#[component]
fn TrackerPage(initial: TrackerData) -> Element {
    let ctx = use_context::<AppContext>();
    let syllabus = ctx.syllabus();
    let progress_svc = ctx.progress();
    let settings_svc = ctx.settings();

    let mut progress = use_signal(|| initial.progress.clone());
    let mut theme = use_signal(|| initial.theme);
    let mut subject_choice = use_signal(|| "all".to_string());
    let mut search = use_signal(String::new);
    let mut save_error = use_signal(|| false);

    // Checkbox toggles mirror into the signal immediately and persist in the
    // background; filters below only decide visibility.
    let on_toggle = EventHandler::new(move |(key, completed): (String, bool)| {
        let Ok(parsed) = key.parse::<TopicKey>() else {
            return;
        };
        progress.write().set_completed(parsed.clone(), completed);
        save_error.set(false);

        let progress_svc = progress_svc.clone();
        spawn(async move {
            if progress_svc.set_completed(&parsed, completed).await.is_err() {
                save_error.set(true);
            }
        });
    });

    let on_toggle_theme = move |_| {
        let next = theme().toggled();
        theme.set(next);

        let settings_svc = settings_svc.clone();
        spawn(async move {
            if settings_svc.save_theme(next).await.is_err() {
                save_error.set(true);
            }
        });
    };

    let filter = SyllabusFilter {
        subject: subject_filter_from_value(&subject_choice()),
        query: TopicQuery::new(&search()),
    };
    let current = progress();
    let subjects = map_subjects(&syllabus, &current, &filter);
    let summary = ProgressSummary::overall(&syllabus, &current);

    let page_class = if theme().is_dark() {
        "page page--dark"
    } else {
        "page"
    };
    let theme_label = match theme() {
        ThemePreference::Light => "Dark mode",
        ThemePreference::Dark => "Light mode",
    };

    rsx! {
        div { class: "{page_class}",
            header { class: "topbar",
                h1 { "Study Tracker" }
                div { class: "progress-wrap",
                    div { class: "progress-bar",
                        div {
                            class: "progress-fill",
                            style: "width: {summary.percent}%",
                        }
                    }
                    span { class: "progress-text", "{summary.percent}% done" }
                }
                button { class: "theme-toggle", onclick: on_toggle_theme, "{theme_label}" }
            }

            div { class: "controls",
                select {
                    class: "subject-filter",
                    value: "{subject_choice}",
                    onchange: move |evt| subject_choice.set(evt.value()),
                    option { value: "all", "All subjects" }
                    for subject in syllabus.subjects() {
                        option { value: "{subject.id()}", "{subject.title()}" }
                    }
                }
                input {
                    class: "search",
                    r#type: "search",
                    placeholder: "Search topics...",
                    value: "{search}",
                    oninput: move |evt| search.set(evt.value()),
                }
            }

            if save_error() {
                p { class: "save-warning", "Could not save your last change." }
            }

            main { class: "subjects",
                for subject in subjects.into_iter().filter(|s| s.visible) {
                    SubjectCard { subject, on_toggle }
                }
            }
        }
    }
}

#[component]
fn SubjectCard(subject: SubjectVm, on_toggle: EventHandler<(String, bool)>) -> Element {
    rsx! {
        section { class: "subject-card", id: "card-{subject.id}",
            h2 { "{subject.title}" }
            div { class: "chapter-list",
                for chapter in subject.chapters.into_iter().filter(|c| c.visible) {
                    details {
                        summary {
                            "{chapter.title} "
                            span { class: "small-muted", "{chapter.done}/{chapter.total}" }
                        }
                        ul {
                            for topic in chapter.topics.into_iter().filter(|t| t.visible) {
                                TopicRow { topic, on_toggle }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn TopicRow(topic: TopicVm, on_toggle: EventHandler<(String, bool)>) -> Element {
    let key = topic.key.clone();
    rsx! {
        li {
            input {
                r#type: "checkbox",
                id: "{topic.key}",
                checked: topic.completed,
                onchange: move |evt: FormEvent| on_toggle.call((key.clone(), evt.checked())),
            }
            label { r#for: "{topic.key}", "{topic.label}" }
        }
    }
}

fn subject_filter_from_value(value: &str) -> SubjectFilter {
    match value {
        "all" => SubjectFilter::All,
        other => other
            .parse::<SubjectId>()
            .map_or(SubjectFilter::All, SubjectFilter::Only),
    }
}
