use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use services::{Clock, ProgressService, SettingsService};
use storage::repository::Storage;
use tracker_core::catalog;
use tracker_core::model::Syllabus;
use tracker_core::time::fixed_now;

use crate::context::{UiApp, build_app_context};
use crate::views::TrackerView;

#[derive(Clone)]
struct TestApp {
    syllabus: Arc<Syllabus>,
    progress: Arc<ProgressService>,
    settings: Arc<SettingsService>,
}

impl UiApp for TestApp {
    fn syllabus(&self) -> Arc<Syllabus> {
        Arc::clone(&self.syllabus)
    }

    fn progress(&self) -> Arc<ProgressService> {
        Arc::clone(&self.progress)
    }

    fn settings(&self) -> Arc<SettingsService> {
        Arc::clone(&self.settings)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewHarnessRoot(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { TrackerView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub progress: Arc<ProgressService>,
    pub settings: Arc<SettingsService>,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Drives the resource load until the page leaves its loading state.
    pub async fn settle(&mut self) {
        for _ in 0..10 {
            if !self.render().contains("Loading") {
                break;
            }
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness() -> ViewHarness {
    let storage = Storage::in_memory();
    let syllabus = Arc::new(catalog::builtin());
    let clock = Clock::fixed(fixed_now());
    let progress = Arc::new(ProgressService::new(
        clock,
        Arc::clone(&syllabus),
        Arc::clone(&storage.progress),
    ));
    let settings = Arc::new(SettingsService::new(Arc::clone(&storage.settings)));

    let app = Arc::new(TestApp {
        syllabus,
        progress: Arc::clone(&progress),
        settings: Arc::clone(&settings),
    });

    let dom = VirtualDom::new_with_props(ViewHarnessRoot, ViewHarnessProps { app });

    ViewHarness {
        dom,
        progress,
        settings,
    }
}
