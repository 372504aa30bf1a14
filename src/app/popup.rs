use std::time::Duration;

use leptos::{ev::MouseEvent, prelude::*};

use super::use_language;

const EXIT_DELAY: Duration = Duration::from_millis(300);

/// Windows XP style dialog chrome. Minimize, close and a click on the
/// backdrop all play the exit animation before `on_close` runs.
#[component]
pub fn XpWindow(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] status: Signal<String>,
    on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    let ctx = use_language();
    let (closing, set_closing) = signal(false);

    let close = move |_: MouseEvent| {
        if closing.get_untracked() {
            return;
        }
        set_closing(true);
        set_timeout(move || on_close.run(()), EXIT_DELAY);
    };

    view! {
        <div class="fixed inset-0 flex items-center justify-center z-50">
            <div class="fixed inset-0 bg-black/70 backdrop-blur-md z-40 animate-fade-in" on:click=close />
            <div class=move || {
                if closing.get() {
                    "xp-window relative z-50 w-[900px] max-w-[90vw] max-h-[85vh] flex flex-col animate-popup-out"
                } else {
                    "xp-window relative z-50 w-[900px] max-w-[90vw] max-h-[85vh] flex flex-col animate-popup-in"
                }
            }>
                <div class="xp-title-bar flex items-center justify-between select-none px-1 py-0.5">
                    <h2 class="text-white font-bold text-sm ml-1">{move || title.get()}</h2>
                    <div class="flex gap-0.5">
                        <button
                            class="xp-button"
                            title=move || ctx.t("windows.minimize")
                            on:click=close
                        >
                            "−"
                        </button>
                        <button
                            class="xp-button xp-button-close"
                            title=move || ctx.t("windows.close")
                            on:click=close
                        >
                            "✕"
                        </button>
                    </div>
                </div>
                <div class="xp-frame m-1 flex-1 overflow-hidden flex flex-col">
                    <div class="xp-scrollbar flex-1 p-4 text-sm overflow-y-auto">{children()}</div>
                </div>
                <div class="xp-status-bar flex items-center px-1 py-0.5 text-xs">
                    <div class="w-2 h-2 rounded-full mr-1 bg-brightBlack"></div>
                    <span class="font-medium">
                        {move || {
                            let status = status.get();
                            if status.is_empty() { ctx.t("windows.ready") } else { status }
                        }}
                    </span>
                </div>
            </div>
        </div>
    }
}
