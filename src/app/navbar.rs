use leptos::{either::Either, prelude::*};

use super::{home::WindowId, use_language, LanguageToggle};

#[derive(Debug, Clone, Copy)]
enum NavTarget {
    Window(WindowId),
    Anchor(&'static str),
}

const NAV_ITEMS: [(&str, NavTarget); 4] = [
    ("navbar.about", NavTarget::Window(WindowId::About)),
    ("navbar.skills", NavTarget::Anchor("#skills")),
    ("navbar.projects", NavTarget::Window(WindowId::Projects)),
    ("navbar.contact", NavTarget::Window(WindowId::Contact)),
];

#[component]
pub fn Navbar(on_open: Callback<WindowId>) -> impl IntoView {
    let ctx = use_language();
    let (menu_open, set_menu_open) = signal(false);

    let nav_link = move |key: &'static str, target: NavTarget, mobile: bool| {
        let class = if mobile {
            "block w-full text-left py-3 text-lg hover:text-blue transition-colors"
        } else {
            "text-sm uppercase tracking-wider hover:text-blue transition-colors"
        };
        match target {
            NavTarget::Window(id) => Either::Left(view! {
                <button
                    class=class
                    on:click=move |_| {
                        set_menu_open(false);
                        on_open.run(id);
                    }
                >
                    {move || ctx.t(key)}
                </button>
            }),
            NavTarget::Anchor(href) => Either::Right(view! {
                <a href=href class=class on:click=move |_| set_menu_open(false)>
                    {move || ctx.t(key)}
                </a>
            }),
        }
    };

    view! {
        <nav class="fixed w-full z-40 py-5 bg-background/80 backdrop-blur-md shadow-lg">
            <div class="container mx-auto max-w-5xl px-4 flex items-center justify-between">
                <a href="#hero" class="text-xl font-bold text-blue">
                    {move || ctx.t("navbar.title")}
                </a>
                <div class="hidden md:flex items-center gap-8">
                    {NAV_ITEMS
                        .into_iter()
                        .map(|(key, target)| nav_link(key, target, false))
                        .collect_view()}
                    <LanguageToggle />
                </div>
                <button
                    class="md:hidden p-2 z-50"
                    aria-label=move || {
                        if menu_open.get() { ctx.t("navbar.closeMenu") } else { ctx.t("navbar.openMenu") }
                    }
                    on:click=move |_| set_menu_open.update(|o| *o = !*o)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
            {move || {
                menu_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="md:hidden fixed inset-0 bg-background/95 backdrop-blur-md z-40 flex flex-col items-center justify-center gap-4">
                                {NAV_ITEMS
                                    .into_iter()
                                    .map(|(key, target)| nav_link(key, target, true))
                                    .collect_view()}
                                <LanguageToggle />
                            </div>
                        }
                    })
            }}
        </nav>
    }
}
