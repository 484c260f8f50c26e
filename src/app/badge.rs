use leptos::prelude::*;

/// Inert pill label for a single skill. Renders its input verbatim.
#[component]
pub fn SkillBadge(#[prop(into)] skill: String) -> impl IntoView {
    view! {
        <span class="inline-block px-4 py-1.5 m-2 text-sm bg-brightBlack text-foreground rounded-full shadow-md hover:scale-110 transition-transform duration-200">
            {skill}
        </span>
    }
}
