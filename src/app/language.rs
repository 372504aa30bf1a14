use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use codee::string::JsonSerdeWasmCodec;
#[cfg(feature = "hydrate")]
use leptos_use::storage::use_local_storage;

use crate::i18n::{translate, translate_args, Language};

/// Active language, shared by every component below [`super::App`].
#[derive(Debug, Clone, Copy)]
pub struct LanguageContext {
    language: RwSignal<Language>,
}

impl LanguageContext {
    pub fn provide() -> Self {
        let ctx = Self {
            language: RwSignal::new(Language::default()),
        };

        #[cfg(feature = "hydrate")]
        {
            let (stored, set_stored, _) =
                use_local_storage::<Language, JsonSerdeWasmCodec>("language");
            Effect::watch(
                || (),
                move |_, _, _| ctx.language.set(stored.get_untracked()),
                true,
            );
            Effect::watch(
                move || ctx.language.get(),
                move |language, _, _| set_stored.set(*language),
                false,
            );
        }

        provide_context(ctx);
        ctx
    }

    pub fn get(&self) -> Language {
        self.language.get()
    }

    pub fn get_untracked(&self) -> Language {
        self.language.get_untracked()
    }

    pub fn set(&self, language: Language) {
        self.language.set(language);
    }

    /// Tracked lookup: re-runs the surrounding closure when the language
    /// changes.
    pub fn t(&self, key: &str) -> String {
        translate(self.get(), key)
    }

    pub fn t_args(&self, key: &str, args: &[(&str, &str)]) -> String {
        translate_args(self.get(), key, args)
    }
}

pub fn use_language() -> LanguageContext {
    expect_context::<LanguageContext>()
}

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let ctx = use_language();
    let (open, set_open) = signal(false);

    view! {
        <div class="relative">
            <button
                class="flex items-center gap-2 px-3 py-2 border-b-2 border-transparent hover:border-blue hover:text-blue transition-colors text-sm font-light uppercase tracking-wider"
                on:click=move |_| set_open.update(|o| *o = !*o)
            >
                <span>{move || ctx.get().code().to_uppercase()}</span>
            </button>
            {move || {
                open.get()
                    .then(|| {
                        view! {
                            <div class="absolute top-full mt-3 left-0 bg-background border border-brightBlack shadow-xl min-w-[150px] py-2 z-50">
                                {Language::ALL
                                    .into_iter()
                                    .map(|language| {
                                        view! {
                                            <button
                                                class="w-full flex items-center justify-between px-4 py-2 text-sm hover:text-blue"
                                                on:click=move |_| {
                                                    ctx.set(language);
                                                    set_open(false);
                                                }
                                            >
                                                <span>{language.label()}</span>
                                                {move || (ctx.get() == language).then_some("✓")}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                    })
            }}
        </div>
    }
}
