use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn ProfileHeader() -> impl IntoView {
    view! {
        <div class="mb-16 text-center section-content">
            <div class="w-40 h-40 mx-auto mb-8 rounded-full overflow-hidden">
                <img
                    src=SITE.profile.avatar.as_str()
                    alt=SITE.profile.name.as_str()
                    class="w-full h-full object-cover"
                />
            </div>
            <h1 class="text-5xl font-bold mb-4">{SITE.profile.name.as_str()}</h1>
            <p class="text-2xl text-muted">{SITE.profile.tagline.as_str()}</p>
        </div>
    }
}
