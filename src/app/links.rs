use leptos::prelude::*;

use crate::content::SITE;

#[component]
pub fn SocialLinks() -> impl IntoView {
    let links = &SITE.links;
    view! {
        <div class="mt-16 text-center section-content">
            <div class="flex justify-center space-x-8 mb-8">
                <a
                    href=format!("mailto:{}", links.email)
                    class="text-muted hover:text-foreground text-2xl transition-colors duration-200"
                    aria-label="Email"
                >
                    <i class="extra-email"></i>
                </a>
                <a
                    href=links.github.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-muted hover:text-foreground text-2xl transition-colors duration-200"
                    aria-label="GitHub Profile"
                >
                    <i class="devicon-github-plain"></i>
                </a>
                <a
                    href=links.linkedin.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-muted hover:text-foreground text-2xl transition-colors duration-200"
                    aria-label="LinkedIn Profile"
                >
                    <i class="devicon-linkedin-plain"></i>
                </a>
                <a
                    href=links.twitter.as_str()
                    target="_blank"
                    rel="noopener noreferrer"
                    class="text-muted hover:text-foreground text-2xl transition-colors duration-200"
                    aria-label="Twitter Profile"
                >
                    <i class="devicon-twitter-original"></i>
                </a>
            </div>
        </div>
    }
}

/// Résumé download affordance. Ships in the tree but is withheld from the
/// layout via `hidden`; flipping that class is the whole enablement.
#[component]
pub fn ResumeDownload() -> impl IntoView {
    view! {
        <div class="hidden justify-center">
            <a
                href=SITE.resume.as_str()
                download=SITE.resume.trim_start_matches('/')
                class="flex items-center justify-center px-6 py-3 bg-brightBlack/30 rounded-full shadow-lg"
            >
                <i class="extra-download mr-2"></i>
                "Download Resume"
            </a>
        </div>
    }
}
