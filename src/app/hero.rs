use leptos::prelude::*;

use super::{home::WindowId, use_language};

#[component]
pub fn HeroSection(on_open: Callback<WindowId>) -> impl IntoView {
    let ctx = use_language();

    view! {
        <section id="hero" class="relative min-h-screen flex flex-col items-center justify-center px-4">
            <div class="container max-w-4xl mx-auto text-center z-10 space-y-6">
                <h1 class="text-4xl md:text-6xl font-bold tracking-tight">
                    <span class="opacity-0 animate-fade-in">{move || ctx.t("hero.greeting")}</span>
                    " "
                    <span class="text-blue opacity-0 animate-fade-in-delay-1">
                        {move || ctx.t("hero.name")}
                    </span>
                    " "
                    <span class="opacity-0 animate-fade-in-delay-2">
                        {move || ctx.t("hero.lastname")}
                    </span>
                </h1>
                <p class="text-lg md:text-xl text-muted max-w-2xl mx-auto opacity-0 animate-fade-in-delay-3">
                    {move || ctx.t("hero.description")}
                </p>
                <div class="pt-4 opacity-0 animate-fade-in-delay-4">
                    <button
                        class="px-6 py-2 rounded-full bg-blue text-background font-medium hover:scale-105 transition-transform"
                        on:click=move |_| on_open.run(WindowId::Projects)
                    >
                        {move || ctx.t("hero.cta")}
                    </button>
                </div>
            </div>
        </section>
    }
}
