use leptos::prelude::*;
use leptos_meta::Title;

use crate::content::{Job, Project, SITE};

use super::badge::SkillBadge;
use super::disclosure::Section;
use super::links::{ResumeDownload, SocialLinks};
use super::profile::ProfileHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Title text="Portfolio" />
        <div class="max-w-4xl mx-auto px-4 py-12 page-content">
            <ProfileHeader />
            <Section title="About Me">
                <p class="leading-relaxed">{SITE.about.as_str()}</p>
            </Section>
            <Section title="Experience">
                <div class="space-y-8">
                    {SITE.jobs.iter().map(|job| view! { <JobEntry job /> }).collect_view()}
                </div>
            </Section>
            <Section title="Projects">
                <div class="space-y-8">
                    {SITE
                        .projects
                        .iter()
                        .map(|project| view! { <ProjectEntry project /> })
                        .collect_view()}
                </div>
            </Section>
            <Section title="Skills">
                <div class="flex flex-wrap -m-2">
                    {SITE
                        .skills
                        .iter()
                        .map(|skill| view! { <SkillBadge skill=skill.as_str() /> })
                        .collect_view()}
                </div>
            </Section>
            <SocialLinks />
            <ResumeDownload />
        </div>
    }
}

#[component]
fn JobEntry(job: &'static Job) -> impl IntoView {
    view! {
        <div class="hover:scale-[1.02] transition-transform duration-200">
            <h3 class="font-semibold text-xl">{job.company.as_str()}</h3>
            <p class="text-sm text-muted mb-4">{format!("{} | {}", job.role, job.period)}</p>
        </div>
    }
}

#[component]
fn ProjectEntry(project: &'static Project) -> impl IntoView {
    view! {
        <div class="hover:scale-[1.02] transition-transform duration-200">
            <h3 class="font-semibold text-xl">
                {project.name.as_str()}
                {project
                    .highlight
                    .as_deref()
                    .map(|h| view! { <span class="text-muted font-light ml-2">{h}</span> })}
            </h3>
            <p class="mb-4 text-muted">{project.description.as_str()}</p>
            {project
                .url
                .as_deref()
                .map(|url| {
                    view! {
                        <a
                            href=url
                            target="_blank"
                            rel="noopener noreferrer"
                            class="text-blue cursor-pointer"
                        >
                            "View Project →"
                        </a>
                    }
                })}
        </div>
    }
}
