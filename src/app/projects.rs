use std::time::Duration;

use leptos::{
    either::Either,
    ev::{self, KeyboardEvent, MouseEvent},
    html,
    prelude::*,
};

use super::use_language;
use crate::carousel::{Carousel, Phase, Slot, COPIES};

const MINIMIZE_DELAY: Duration = Duration::from_millis(650);
const ENTRANCE_DURATION: Duration = Duration::from_millis(2000);
const CLEAR_SELECTION_DELAY: Duration = Duration::from_millis(600);
const CLOSE_DELAY: Duration = Duration::from_millis(800);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub tags: &'static [&'static str],
    pub demo_url: &'static str,
    pub github_url: &'static str,
    pub client: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "SaaS Landing Page",
        description: "A beautiful landing page app using React and Tailwind.",
        image: "/projects/project1.png",
        tags: &["React", "TailwindCSS", "Supabase"],
        demo_url: "#",
        github_url: "#",
        client: "SaaS Startup",
    },
    Project {
        title: "Orbit Analytics Dashboard",
        description: "Interactive analytics dashboard with data visualization and filtering capabilities.",
        image: "/projects/project2.png",
        tags: &["TypeScript", "D3.js", "Next.js"],
        demo_url: "#",
        github_url: "#",
        client: "Tech Company",
    },
    Project {
        title: "E-commerce Platform",
        description: "Full-featured e-commerce platform with user authentication and payment processing.",
        image: "/projects/project3.png",
        tags: &["React", "Node.js", "Stripe"],
        demo_url: "#",
        github_url: "#",
        client: "Retail Brand",
    },
];

/// Runs the carousel through its remaining phases, one timer per phase.
fn schedule(carousel: RwSignal<Carousel>, phase: Option<Phase>) {
    let Some(delay) = phase.and_then(Phase::delay) else {
        return;
    };
    set_timeout(
        move || {
            let next = carousel.try_update(|c| c.advance()).flatten();
            schedule(carousel, next);
        },
        delay,
    );
}

/// Horizontal distance between the first two rendered items.
fn item_spacing(track: NodeRef<html::Div>) -> f64 {
    let Some(track) = track.get_untracked() else {
        return 1.0;
    };
    let items = track.children();
    let spacing = match (items.item(0), items.item(1)) {
        (Some(first), Some(second)) => {
            (second.get_bounding_client_rect().left() - first.get_bounding_client_rect().left())
                .abs()
        }
        _ => 0.0,
    };
    if spacing > 0.0 {
        spacing
    } else {
        1.0
    }
}

/// Landing page cards; "View Project" opens the carousel modal.
#[component]
pub fn ProjectsGrid(on_open: Callback<()>) -> impl IntoView {
    let ctx = use_language();

    view! {
        <section id="projects" class="py-24 px-4 relative">
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-4 text-center">
                    {move || ctx.t("projects.title")}
                    " "
                    <span class="text-blue">{move || ctx.t("projects.subtitle")}</span>
                </h2>
                <p class="text-center text-muted mb-12 max-w-2xl mx-auto">
                    {move || ctx.t("projects.description")}
                </p>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {PROJECTS
                        .iter()
                        .map(|project| {
                            view! {
                                <div class="group bg-brightBlack/30 rounded-lg overflow-hidden card-hover">
                                    <div class="h-48 overflow-hidden">
                                        <img
                                            src=project.image
                                            alt=project.title
                                            class="w-full h-full object-cover transition-transform duration-500 group-hover:scale-110"
                                        />
                                    </div>
                                    <div class="p-6 space-y-3">
                                        <div class="flex flex-wrap gap-2">
                                            {project
                                                .tags
                                                .iter()
                                                .map(|tag| {
                                                    view! {
                                                        <span class="px-2 py-1 text-xs font-medium border border-blue rounded-full text-blue">
                                                            {*tag}
                                                        </span>
                                                    }
                                                })
                                                .collect_view()}
                                        </div>
                                        <h3 class="text-xl font-semibold">{project.title}</h3>
                                        <p class="text-muted text-sm">{project.description}</p>
                                        <button
                                            class="text-sm text-blue hover:underline"
                                            on:click=move |_| on_open.run(())
                                        >
                                            {move || ctx.t("projects.viewProject")}
                                            " →"
                                        </button>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn ProjectsModal(on_close: Callback<()>) -> impl IntoView {
    let ctx = use_language();
    let carousel = RwSignal::new(Carousel::new(PROJECTS.len(), COPIES));
    let track_ref = NodeRef::<html::Div>::new();
    let selected = RwSignal::new(None::<usize>);
    let (show_detail, set_show_detail) = signal(false);
    let (minimizing, set_minimizing) = signal(false);
    let (entering, set_entering) = signal(true);
    let (closing, set_closing) = signal(false);

    Effect::new(move |_| set_timeout(move || set_entering(false), ENTRANCE_DURATION));

    let step = move |steps: isize| {
        let spacing = item_spacing(track_ref);
        let next = carousel.try_update(|c| c.move_by(steps, spacing)).flatten();
        schedule(carousel, next);
    };

    let open_detail = move |index: usize| {
        if minimizing.get_untracked() || show_detail.get_untracked() {
            return;
        }
        selected.set(Some(index));
        set_minimizing(true);
        set_timeout(
            move || {
                set_minimizing(false);
                set_show_detail(true);
            },
            MINIMIZE_DELAY,
        );
    };

    let back_to_carousel = Callback::new(move |_| {
        set_show_detail(false);
        set_entering(true);
        set_timeout(move || set_entering(false), ENTRANCE_DURATION);
        set_timeout(move || selected.set(None), CLEAR_SELECTION_DELAY);
    });

    let close = Callback::new(move |_| {
        if closing.get_untracked() {
            return;
        }
        set_closing(true);
        set_timeout(move || on_close.run(()), CLOSE_DELAY);
    });

    let on_mouse_down = move |ev: MouseEvent| {
        ev.prevent_default();
        carousel.update(|c| {
            c.drag_start(ev.client_x() as f64);
        });
    };

    let move_handle = window_event_listener(ev::mousemove, move |ev| {
        if carousel.with_untracked(Carousel::is_dragging) {
            carousel.update(|c| c.drag_move(ev.client_x() as f64));
        }
    });
    let up_handle = window_event_listener(ev::mouseup, move |_| {
        if !carousel.with_untracked(Carousel::is_dragging) {
            return;
        }
        let spacing = item_spacing(track_ref);
        let next = carousel.try_update(|c| c.drag_end(spacing)).flatten();
        schedule(carousel, next);
    });
    let key_handle = window_event_listener(ev::keydown, move |ev: KeyboardEvent| {
        if show_detail.get_untracked() {
            return;
        }
        match ev.key().as_str() {
            "ArrowLeft" => step(-1),
            "ArrowRight" => step(1),
            "Escape" => close.run(()),
            _ => {}
        }
    });
    on_cleanup(move || {
        move_handle.remove();
        up_handle.remove();
        key_handle.remove();
    });

    let track_style = move || {
        carousel.with(|c| {
            let transition = if c.phase() == Phase::Translating {
                "transform 800ms cubic-bezier(0.22, 1, 0.36, 1)"
            } else {
                "none"
            };
            format!(
                "transform: translateX({}px); transition: {transition};",
                c.translate_x() + c.drag_offset()
            )
        })
    };

    let carousel_item = move |slot: Slot| {
        let project = PROJECTS[slot.index];
        let position = move || {
            carousel.with(|c| c.slots().iter().position(|s| *s == slot).unwrap_or_default())
        };
        let style = move || {
            let position = position();
            carousel.with(|c| {
                let delay = if entering.get() {
                    c.stagger_at(position).as_millis()
                } else {
                    0
                };
                format!(
                    "transform: scale({}); transition: transform 150ms ease; animation-delay: {delay}ms;",
                    c.scale_at(position)
                )
            })
        };
        view! {
            <div
                class=move || {
                    if entering.get() {
                        "carousel-item flex-shrink-0 w-72 md:w-96 px-4 cursor-pointer animate-carousel-in"
                    } else {
                        "carousel-item flex-shrink-0 w-72 md:w-96 px-4 cursor-pointer"
                    }
                }
                style=style
                on:click=move |_| {
                    if carousel.with_untracked(|c| !c.is_idle()) {
                        return;
                    }
                    let offset = carousel
                        .with_untracked(|c| position() as isize - c.center_index() as isize);
                    if offset == 0 {
                        open_detail(slot.index);
                    } else {
                        step(offset);
                    }
                }
            >
                <img
                    src=project.image
                    alt=project.title
                    draggable="false"
                    class="w-full aspect-video object-cover rounded-lg shadow-2xl select-none"
                />
            </div>
        }
    };

    let current_project = move || carousel.with(|c| c.current()).map(|i| PROJECTS[i]);

    view! {
        <div class=move || {
            if closing.get() {
                "fixed inset-0 z-50 bg-black text-white overflow-hidden animate-page-out"
            } else {
                "fixed inset-0 z-50 bg-black text-white overflow-hidden animate-page-in"
            }
        }>
            <button
                class="fixed top-6 right-6 z-[60] px-4 py-2 border border-white/40 text-sm uppercase tracking-wider hover:bg-white/10"
                on:click=move |_| close.run(())
            >
                {move || ctx.t("closeAllProjects")}
            </button>
            {move || {
                if show_detail.get() {
                    let project = selected.get().map(|i| PROJECTS[i]);
                    Either::Left(
                        project
                            .map(|project| {
                                view! {
                                    <ProjectDetail project on_back=back_to_carousel on_close=close />
                                }
                            }),
                    )
                } else {
                    Either::Right(
                        view! {
                            <div class=move || {
                                if minimizing.get() {
                                    "h-full flex flex-col justify-center animate-carousel-minimize"
                                } else {
                                    "h-full flex flex-col justify-center"
                                }
                            }>
                                <h2 class="text-2xl md:text-3xl font-bold mb-8 text-center">
                                    {move || ctx.t("projects.title")}
                                    " "
                                    <span class="text-blue">{move || ctx.t("projects.subtitle")}</span>
                                </h2>
                                <div class="relative w-full overflow-hidden select-none">
                                    <div
                                        node_ref=track_ref
                                        class=move || {
                                            if carousel.with(Carousel::is_dragging) {
                                                "flex items-center justify-center cursor-grabbing"
                                            } else {
                                                "flex items-center justify-center cursor-grab"
                                            }
                                        }
                                        style=track_style
                                        on:mousedown=on_mouse_down
                                    >
                                        <For
                                            each=move || carousel.with(|c| c.slots().to_vec())
                                            key=|slot: &Slot| slot.key()
                                            children=carousel_item
                                        />
                                    </div>
                                    <button
                                        class="absolute left-4 top-1/2 -translate-y-1/2 p-3 text-3xl hover:text-blue"
                                        aria-label=move || ctx.t("projects.previous")
                                        on:click=move |_| step(-1)
                                    >
                                        "‹"
                                    </button>
                                    <button
                                        class="absolute right-4 top-1/2 -translate-y-1/2 p-3 text-3xl hover:text-blue"
                                        aria-label=move || ctx.t("projects.next")
                                        on:click=move |_| step(1)
                                    >
                                        "›"
                                    </button>
                                </div>
                                {move || {
                                    current_project()
                                        .map(|project| {
                                            view! {
                                                <div class="mt-8 text-center max-w-xl mx-auto px-4">
                                                    <h3 class="text-xl font-semibold">{project.title}</h3>
                                                    <p class="text-sm text-white/70 mt-2">{project.description}</p>
                                                </div>
                                            }
                                        })
                                }}
                                <p class="text-center text-sm text-white/60 mt-6 max-w-2xl mx-auto px-4">
                                    {move || ctx.t("projects.description")}
                                </p>
                            </div>
                        },
                    )
                }
            }}
        </div>
    }
}

#[component]
fn ProjectDetail(project: Project, on_back: Callback<()>, on_close: Callback<()>) -> impl IntoView {
    let ctx = use_language();
    let (leaving, set_leaving) = signal(false);

    let back = move |_| {
        if leaving.get_untracked() {
            return;
        }
        set_leaving(true);
        set_timeout(move || on_back.run(()), Duration::from_millis(300));
    };

    let link = |href: &'static str, key: &'static str| {
        view! {
            <a
                href=href
                target="_blank"
                rel="noopener noreferrer"
                class="px-4 py-2 border border-white/40 text-sm hover:bg-white/10 transition-colors"
            >
                {move || ctx.t(key)}
            </a>
        }
    };

    view! {
        <div class=move || {
            if leaving.get() {
                "absolute inset-0 overflow-y-auto transition-all duration-300 opacity-0 scale-95"
            } else {
                "absolute inset-0 overflow-y-auto transition-all duration-300 opacity-100 scale-100 animate-fade-in"
            }
        }>
            <div class="max-w-4xl mx-auto px-4 py-24 space-y-8">
                <button class="text-sm uppercase tracking-wider hover:text-blue" on:click=back>
                    "← "
                    {move || ctx.t("projects.back")}
                </button>
                <img src=project.image alt=project.title class="w-full rounded-lg shadow-2xl" />
                <h2 class="text-3xl md:text-4xl font-bold">{project.title}</h2>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8">
                    <div class="md:col-span-2 space-y-4">
                        <h3 class="text-sm font-semibold uppercase tracking-widest text-white/60">
                            {move || ctx.t("projects.overview")}
                        </h3>
                        <p class="text-white/80 leading-relaxed">{project.description}</p>
                    </div>
                    <div class="space-y-6">
                        <div>
                            <h3 class="text-sm font-semibold uppercase tracking-widest text-white/60">
                                {move || ctx.t("projects.client")}
                            </h3>
                            <p>{project.client}</p>
                        </div>
                        <div>
                            <h3 class="text-sm font-semibold uppercase tracking-widest text-white/60">
                                {move || ctx.t("projects.technologies")}
                            </h3>
                            <div class="flex flex-wrap gap-2 mt-2">
                                {project
                                    .tags
                                    .iter()
                                    .map(|tag| {
                                        view! {
                                            <span class="px-2 py-0.5 text-xs border border-blue text-blue">
                                                {*tag}
                                            </span>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                    </div>
                </div>
                <div class="flex flex-wrap gap-4">
                    {link(project.demo_url, "projects.demo")}
                    {link(project.github_url, "projects.source")}
                    <button
                        class="px-4 py-2 text-sm text-white/60 hover:text-white"
                        on:click=move |_| on_close.run(())
                    >
                        {move || ctx.t("windows.close")}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carousel_covers_every_project() {
        let carousel = Carousel::new(PROJECTS.len(), COPIES);
        assert_eq!(carousel.slots().len(), PROJECTS.len() * COPIES);
        for index in 0..PROJECTS.len() {
            assert_eq!(
                carousel.slots().iter().filter(|s| s.index == index).count(),
                COPIES
            );
        }
        assert!(carousel.current().is_some_and(|i| i < PROJECTS.len()));
    }
}
