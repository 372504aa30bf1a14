use std::{
    collections::{BTreeMap, BTreeSet},
    time::Duration,
};

use leptos::prelude::*;
use leptos_meta::Title;

use super::{
    about::AboutSection, contact::ContactSection, hero::HeroSection, navbar::Navbar,
    popup::XpWindow, projects::{ProjectsGrid, ProjectsModal}, skills::SkillsSection, use_language,
};

/// Time a closing window keeps rendering so its exit animation can finish.
pub const CLOSE_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum WindowId {
    About,
    Projects,
    Contact,
}

impl WindowId {
    pub fn title_key(self) -> &'static str {
        match self {
            Self::About => "windows.about",
            Self::Projects => "windows.projects",
            Self::Contact => "windows.contact",
        }
    }
}

/// Windows shown over the landing page. A window being closed stays open
/// until [`OpenWindows::finish_close`] runs after [`CLOSE_DELAY`] with the
/// token its close returned.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OpenWindows {
    open: BTreeSet<WindowId>,
    closing: BTreeMap<WindowId, u64>,
    next_token: u64,
}

impl OpenWindows {
    pub fn open(&mut self, id: WindowId) {
        self.closing.remove(&id);
        self.open.insert(id);
    }

    /// Returns `None` when the window is not open or already closing.
    pub fn begin_close(&mut self, id: WindowId) -> Option<u64> {
        if !self.open.contains(&id) || self.closing.contains_key(&id) {
            return None;
        }
        self.next_token += 1;
        self.closing.insert(id, self.next_token);
        Some(self.next_token)
    }

    /// Ignored unless `token` belongs to the close still in progress.
    pub fn finish_close(&mut self, id: WindowId, token: u64) {
        if self.closing.get(&id) == Some(&token) {
            self.closing.remove(&id);
            self.open.remove(&id);
        }
    }

    pub fn is_open(&self, id: WindowId) -> bool {
        self.open.contains(&id)
    }

    pub fn is_closing(&self, id: WindowId) -> bool {
        self.closing.contains_key(&id)
    }

    /// Navbar and hero give way to the full-page windows.
    pub fn shows_landing(&self) -> bool {
        !self.is_open(WindowId::Projects) && !self.is_open(WindowId::About)
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = use_language();
    let windows = RwSignal::new(OpenWindows::default());

    let open_window = Callback::new(move |id: WindowId| windows.update(|w| w.open(id)));
    let close_window = Callback::new(move |id: WindowId| {
        let mut token = None;
        windows.update(|w| token = w.begin_close(id));
        if let Some(token) = token {
            set_timeout(move || windows.update(|w| w.finish_close(id, token)), CLOSE_DELAY);
        }
    });

    let shows_landing = Memo::new(move |_| windows.with(OpenWindows::shows_landing));
    let is_open = move |id: WindowId| Memo::new(move |_| windows.with(|w| w.is_open(id)));
    let about_open = is_open(WindowId::About);
    let projects_open = is_open(WindowId::Projects);
    let contact_open = is_open(WindowId::Contact);
    let about_closing = Signal::derive(move || windows.with(|w| w.is_closing(WindowId::About)));

    view! {
        <Title text=move || ctx.t("navbar.title") />
        <div class="min-h-screen overflow-hidden">
            {move || shows_landing.get().then(|| view! { <Navbar on_open=open_window /> })}
            <main>
                {move || {
                    shows_landing
                        .get()
                        .then(|| {
                            view! {
                                <HeroSection on_open=open_window />
                                <SkillsSection />
                                <ProjectsGrid on_open=Callback::new(move |_| {
                                    open_window.run(WindowId::Projects)
                                }) />
                            }
                        })
                }}
                {move || {
                    about_open
                        .get()
                        .then(|| {
                            view! {
                                <AboutSection
                                    closing=about_closing
                                    on_close=Callback::new(move |_| close_window.run(WindowId::About))
                                    on_contact=Callback::new(move |_| open_window.run(WindowId::Contact))
                                />
                            }
                        })
                }}
                {move || {
                    projects_open
                        .get()
                        .then(|| {
                            view! {
                                <ProjectsModal on_close=Callback::new(move |_| {
                                    close_window.run(WindowId::Projects)
                                }) />
                            }
                        })
                }}
                {move || {
                    contact_open
                        .get()
                        .then(|| {
                            view! {
                                <XpWindow
                                    title=Signal::derive(move || ctx.t(WindowId::Contact.title_key()))
                                    status=Signal::derive(move || ctx.t("windows.contactStatus"))
                                    on_close=Callback::new(move |_| close_window.run(WindowId::Contact))
                                >
                                    <ContactSection />
                                </XpWindow>
                            }
                        })
                }}
            </main>
        </div>
    }
}
