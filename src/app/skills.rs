use leptos::prelude::*;

use super::use_language;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Category {
    #[default]
    All,
    Frontend,
    Backend,
    Tools,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::All, Self::Frontend, Self::Backend, Self::Tools];

    fn label_key(self) -> &'static str {
        match self {
            Self::All => "skills.all",
            Self::Frontend => "skills.frontend",
            Self::Backend => "skills.backend",
            Self::Tools => "skills.tools",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: Category,
}

const fn skill(name: &'static str, level: u8, category: Category) -> Skill {
    Skill {
        name,
        level,
        category,
    }
}

pub const SKILLS: &[Skill] = &[
    skill("HTML/CSS", 95, Category::Frontend),
    skill("JavaScript", 90, Category::Frontend),
    skill("React", 90, Category::Frontend),
    skill("TypeScript", 85, Category::Frontend),
    skill("Tailwind CSS", 90, Category::Frontend),
    skill("Next.js", 80, Category::Frontend),
    skill("Node.js", 80, Category::Backend),
    skill("Express", 75, Category::Backend),
    skill("MongoDB", 70, Category::Backend),
    skill("PostgreSQL", 65, Category::Backend),
    skill("GraphQL", 60, Category::Backend),
    skill("Git/GitHub", 90, Category::Tools),
    skill("Docker", 70, Category::Tools),
    skill("Figma", 85, Category::Tools),
    skill("VS Code", 95, Category::Tools),
];

pub fn filter_skills(category: Category) -> impl Iterator<Item = &'static Skill> {
    SKILLS
        .iter()
        .filter(move |s| category == Category::All || s.category == category)
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    let ctx = use_language();
    let (active, set_active) = signal(Category::All);

    view! {
        <section id="skills" class="py-24 px-4 relative bg-brightBlack/20">
            <div class="container mx-auto max-w-5xl">
                <h2 class="text-3xl md:text-4xl font-bold mb-12 text-center">
                    {move || ctx.t("skills.title")}
                    " "
                    <span class="text-blue">{move || ctx.t("skills.subtitle")}</span>
                </h2>
                <div class="flex flex-wrap justify-center gap-4 mb-12">
                    {Category::ALL
                        .into_iter()
                        .map(|category| {
                            view! {
                                <button
                                    class=move || {
                                        if active.get() == category {
                                            "px-5 py-2 rounded-full bg-blue text-background"
                                        } else {
                                            "px-5 py-2 rounded-full bg-brightBlack/50 hover:bg-brightBlack"
                                        }
                                    }
                                    on:click=move |_| set_active(category)
                                >
                                    {move || ctx.t(category.label_key())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6">
                    {move || {
                        filter_skills(active.get())
                            .map(|s| {
                                view! {
                                    <div class="p-6 rounded-lg bg-background shadow-xs card-hover">
                                        <h3 class="font-semibold text-lg mb-4">{s.name}</h3>
                                        <div class="w-full bg-brightBlack/50 h-2 rounded-full overflow-hidden">
                                            <div
                                                class="bg-blue h-2 rounded-full origin-left animate-grow"
                                                style=format!("width: {}%", s.level)
                                            />
                                        </div>
                                        <div class="text-right mt-1 text-sm text-muted">
                                            {format!("{}%", s.level)}
                                        </div>
                                    </div>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_skills() {
        assert_eq!(filter_skills(Category::All).count(), SKILLS.len());
        assert!(filter_skills(Category::Tools).all(|s| s.category == Category::Tools));
        let backend = filter_skills(Category::Backend)
            .map(|s| s.name)
            .collect::<Vec<_>>();
        assert_eq!(
            backend,
            ["Node.js", "Express", "MongoDB", "PostgreSQL", "GraphQL"]
        );
    }
}
