use leptos::prelude::*;

use crate::content::{EducationEntry, ExperienceEntry, ProjectEntry, SkillGroup};
use crate::content::{EDUCATION, EXPERIENCE, PROJECTS, SKILLS};
use crate::sections::SectionId;

#[component]
pub fn ExperienceSection() -> impl IntoView {
    view! {
        <section
            id=SectionId::Experience.as_str()
            class="py-20 bg-gray-50 px-4 sm:px-6 lg:px-8"
        >
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12">
                    "Professional Experience"
                </h2>
                <div class="space-y-12">
                    {EXPERIENCE.iter().map(|entry| view! { <Job entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Job(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 md:p-8 shadow-sm hover:shadow-md transition-shadow">
            <div class="flex flex-col md:flex-row md:justify-between md:items-start mb-6">
                <div>
                    <h3 class="text-xl md:text-2xl font-bold text-gray-900 mb-2">{entry.title}</h3>
                    <div class="text-blue-600 font-semibold mb-1">{entry.company}</div>
                    <div class="text-gray-600 text-sm">{entry.location}</div>
                </div>
                <Period period=entry.period tone="bg-blue-50 text-blue-600" />
            </div>
            <ul class="space-y-3">
                {entry
                    .highlights
                    .iter()
                    .map(|highlight| {
                        view! {
                            <li class="flex items-start gap-3">
                                <span class="text-blue-600 flex-shrink-0 mt-0.5">"✓"</span>
                                <span class="text-gray-700 leading-relaxed">{*highlight}</span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn Period(period: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!(
            "mt-3 md:mt-0 inline-flex items-center gap-2 px-4 py-2 rounded-lg text-sm font-medium {tone}",
        )>
            <span>"📅"</span>
            {period}
        </div>
    }
}

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=SectionId::Skills.as_str() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12 text-center">
                    "Technical Skills"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {SKILLS.iter().map(|group| view! { <SkillCard group /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow-sm border border-gray-100 hover:shadow-md transition-shadow">
            <div class="flex items-center gap-3 mb-4">
                <div class="w-1 h-8 bg-blue-600 rounded-full"></div>
                <h3 class="text-lg font-bold text-gray-900">{group.category}</h3>
            </div>
            <div class="flex flex-wrap gap-2">
                {group
                    .skills
                    .iter()
                    .map(|skill| {
                        view! {
                            <span class="px-3 py-1.5 bg-gray-50 text-gray-700 rounded-lg text-sm font-medium hover:bg-blue-50 hover:text-blue-600 transition-colors">
                                {*skill}
                            </span>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section
            id=SectionId::Projects.as_str()
            class="py-20 bg-gray-50 px-4 sm:px-6 lg:px-8"
        >
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12 text-center">
                    "Featured Projects"
                </h2>
                <div class="grid md:grid-cols-2 gap-8">
                    {PROJECTS.iter().map(|project| view! { <ProjectCard project /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static ProjectEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl overflow-hidden shadow-sm border border-gray-100 hover:shadow-md transition-shadow">
            <div class="h-2 bg-gradient-to-r from-blue-600 to-blue-400"></div>
            <div class="p-6">
                <h3 class="text-xl font-bold text-gray-900 mb-3">{project.title}</h3>
                <p class="text-gray-700 mb-4 leading-relaxed">{project.description}</p>
                <div class="flex flex-wrap gap-2 mb-4">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| {
                            view! {
                                <span class="px-3 py-1 bg-blue-50 text-blue-600 rounded-lg text-xs font-medium">
                                    {*tech}
                                </span>
                            }
                        })
                        .collect_view()}
                </div>
                <div class="pt-4 border-t border-gray-100 space-y-2">
                    {project
                        .achievements
                        .iter()
                        .map(|achievement| {
                            view! {
                                <div class="flex items-center gap-2 text-sm text-gray-600">
                                    <span class="text-green-600">"✓"</span>
                                    <span>{*achievement}</span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn EducationSection() -> impl IntoView {
    view! {
        <section id=SectionId::Education.as_str() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-12">"Education"</h2>
                <div class="space-y-6">
                    {EDUCATION.iter().map(|entry| view! { <Degree entry /> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn Degree(entry: &'static EducationEntry) -> impl IntoView {
    view! {
        <div class="bg-white rounded-xl p-6 shadow-sm border border-gray-100 hover:shadow-md transition-shadow">
            <div class="flex flex-col md:flex-row md:justify-between md:items-start">
                <div>
                    <h3 class="text-xl font-bold text-gray-900 mb-2">{entry.degree}</h3>
                    <div class="text-blue-600 font-semibold mb-1">{entry.institution}</div>
                    <div class="text-gray-600 text-sm">{entry.location}</div>
                </div>
                <Period period=entry.period tone="bg-gray-50 text-gray-700" />
            </div>
        </div>
    }
}
