use leptos::prelude::*;

use super::use_language;

const SERVICES: [(&str, &str); 3] = [
    ("about.webDevelopment", "about.webDevelopmentDesc"),
    ("about.uiuxDesign", "about.uiuxDesignDesc"),
    ("about.projectManagement", "about.projectManagementDesc"),
];

#[component]
pub fn AboutSection(
    #[prop(into)] closing: Signal<bool>,
    on_close: Callback<()>,
    on_contact: Callback<()>,
) -> impl IntoView {
    let ctx = use_language();

    view! {
        <section
            id="about"
            class=move || {
                if closing.get() {
                    "fixed inset-0 z-50 overflow-y-auto bg-background animate-page-out"
                } else {
                    "fixed inset-0 z-50 overflow-y-auto bg-background animate-page-in"
                }
            }
        >
            <button
                class="fixed top-6 right-6 z-50 text-2xl hover:text-blue transition-colors"
                aria-label=move || ctx.t("about.close")
                on:click=move |_| on_close.run(())
            >
                "✕"
            </button>
            <div class="container mx-auto max-w-5xl py-24 px-4">
                <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">
                    {move || ctx.t("about.title")}
                    " "
                    <span class="text-blue">{move || ctx.t("about.subtitle")}</span>
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="space-y-6">
                        <h3 class="text-2xl font-semibold">{move || ctx.t("about.heading")}</h3>
                        <p class="text-muted">{move || ctx.t("about.description1")}</p>
                        <p class="text-muted">{move || ctx.t("about.description2")}</p>
                        <div class="flex flex-col sm:flex-row gap-4 pt-4 justify-center">
                            <button
                                class="px-6 py-2 rounded-full bg-blue text-background font-medium"
                                on:click=move |_| on_contact.run(())
                            >
                                {move || ctx.t("about.getInTouch")}
                            </button>
                            <a
                                href="/cv.pdf"
                                target="_blank"
                                class="px-6 py-2 rounded-full border border-blue text-blue hover:bg-blue/10 transition-colors duration-300"
                            >
                                {move || ctx.t("about.downloadCV")}
                            </a>
                        </div>
                    </div>
                    <div class="grid grid-cols-1 gap-6">
                        {SERVICES
                            .into_iter()
                            .map(|(title, desc)| {
                                view! {
                                    <div class="p-6 rounded-lg bg-brightBlack/30 card-hover">
                                        <h4 class="font-semibold text-lg">{move || ctx.t(title)}</h4>
                                        <p class="text-muted">{move || ctx.t(desc)}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}
