use leptos::{ev, prelude::*};
use leptos_use::{use_event_listener, use_window};

use super::dom::DomLayout;
use super::footer::Footer;
use super::header::NavBar;
use super::resume::{EducationSection, ExperienceSection, ProjectsSection, SkillsSection};
use crate::content::{PROFILE, STATS};
use crate::nav::NavState;
use crate::sections::SectionId;

/// Root of the page. Owns the navigation state; nothing below it writes to
/// the state except through the handlers on [`NavState`].
#[component]
pub fn Portfolio() -> impl IntoView {
    let nav = RwSignal::new(NavState::new());

    // Removed again when this component's owner is disposed.
    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        nav.maybe_update(|state| state.on_scroll(&DomLayout));
    });

    view! {
        <div class="min-h-screen bg-white text-gray-900">
            <NavBar nav />
            <Hero nav />
            <StatsStrip />
            <About />
            <ExperienceSection />
            <SkillsSection />
            <ProjectsSection />
            <EducationSection />
            <Contact />
            <Footer />
        </div>
    }
}

#[component]
fn Hero(nav: RwSignal<NavState>) -> impl IntoView {
    let jump = move |ev: ev::MouseEvent, target: SectionId| {
        ev.prevent_default();
        nav.maybe_update(|state| state.navigate(&DomLayout, &target.href()));
    };

    view! {
        <section
            id=SectionId::Home.as_str()
            class="min-h-screen flex items-center justify-center px-4 sm:px-6 lg:px-8 pt-20"
        >
            <div class="max-w-4xl mx-auto text-center">
                <div class="inline-block px-4 py-2 bg-blue-50 text-blue-600 rounded-full text-sm font-medium mb-6">
                    {PROFILE.role}
                </div>
                <h1 class="text-4xl sm:text-5xl md:text-6xl lg:text-7xl font-bold text-gray-900 mb-6">
                    {PROFILE.name}
                </h1>
                <p class="text-lg sm:text-xl md:text-2xl text-gray-600 mb-8 max-w-3xl mx-auto leading-relaxed">
                    {PROFILE.summary}
                </p>
                <div class="flex flex-col sm:flex-row gap-4 justify-center mb-12">
                    <a
                        href=SectionId::Contact.href()
                        on:click=move |ev| jump(ev, SectionId::Contact)
                        class="px-8 py-3 bg-blue-600 text-white rounded-lg font-medium hover:bg-blue-700 transition-colors shadow-sm hover:shadow-md"
                    >
                        "Get In Touch"
                    </a>
                    <a
                        href=SectionId::Projects.href()
                        on:click=move |ev| jump(ev, SectionId::Projects)
                        class="px-8 py-3 bg-white text-gray-900 border-2 border-gray-200 rounded-lg font-medium hover:border-blue-600 hover:text-blue-600 transition-colors"
                    >
                        "View Projects"
                    </a>
                </div>
                <div class="flex justify-center gap-6 text-2xl">
                    <SocialLinks />
                </div>
            </div>
        </section>
    }
}

/// Email, LinkedIn and GitHub icon links.
#[component]
pub fn SocialLinks() -> impl IntoView {
    view! {
        <a
            href=PROFILE.mailto()
            class="text-gray-600 hover:text-blue-600 transition-colors"
            aria-label="Email"
        >
            "✉"
        </a>
        <a
            href=PROFILE.linkedin_url()
            target="_blank"
            rel="noopener noreferrer"
            class="text-gray-600 hover:text-blue-600 transition-colors"
            aria-label="LinkedIn Profile"
        >
            <i class="devicon-linkedin-plain"></i>
        </a>
        <a
            href=PROFILE.github_url()
            target="_blank"
            rel="noopener noreferrer"
            class="text-gray-600 hover:text-blue-600 transition-colors"
            aria-label="GitHub Profile"
        >
            <i class="devicon-github-plain"></i>
        </a>
    }
}

#[component]
fn StatsStrip() -> impl IntoView {
    view! {
        <section class="py-16 bg-gray-50">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="grid grid-cols-2 md:grid-cols-4 gap-8">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="text-center">
                                    <div class="text-3xl md:text-4xl font-bold text-blue-600 mb-2">
                                        {stat.number}
                                    </div>
                                    <div class="text-sm text-gray-600 font-medium">{stat.label}</div>
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
fn About() -> impl IntoView {
    view! {
        <section id=SectionId::About.as_str() class="py-20 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-8">"About Me"</h2>
                <div class="space-y-6 text-gray-700 leading-relaxed">
                    <p class="text-lg">
                        "Results-driven " <strong>"Full Stack Software Developer"</strong>
                        " with 3+ years of experience in designing and developing scalable web applications using MERN stack, JavaScript, TypeScript, React.js, Next.js, Node.js, and Express.js."
                    </p>
                    <p class="text-lg">
                        "Expertise in " <strong>"AI/ML integration"</strong> ", "
                        <strong>"LLM implementation"</strong>
                        ", RESTful API development, database management (MongoDB, MySQL), and delivering high-performance solutions that optimize efficiency and reduce operational costs."
                    </p>
                    <div class="grid md:grid-cols-3 gap-6 pt-8">
                        <div class="flex items-start gap-3">
                            <span class="text-blue-600 mt-1">"📍"</span>
                            <div>
                                <div class="font-semibold text-gray-900">"Location"</div>
                                <div class="text-gray-600">{PROFILE.location()}</div>
                            </div>
                        </div>
                        <div class="flex items-start gap-3">
                            <span class="text-blue-600 mt-1">"✉"</span>
                            <div>
                                <div class="font-semibold text-gray-900">"Email"</div>
                                <a
                                    href=PROFILE.mailto()
                                    class="text-blue-600 hover:underline text-sm"
                                >
                                    {PROFILE.email}
                                </a>
                            </div>
                        </div>
                        <div class="flex items-start gap-3">
                            <span class="text-blue-600 mt-1">"☎"</span>
                            <div>
                                <div class="font-semibold text-gray-900">"Phone"</div>
                                <a href=PROFILE.tel() class="text-gray-600 hover:text-blue-600">
                                    {PROFILE.phone}
                                </a>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn Contact() -> impl IntoView {
    let card = "bg-white rounded-xl p-6 shadow-sm border border-gray-100 hover:shadow-md transition-shadow group";
    view! {
        <section id=SectionId::Contact.as_str() class="py-20 bg-gray-50 px-4 sm:px-6 lg:px-8">
            <div class="max-w-4xl mx-auto text-center">
                <h2 class="text-3xl md:text-4xl font-bold text-gray-900 mb-6">"Let's Connect"</h2>
                <p class="text-lg text-gray-600 mb-12 max-w-2xl mx-auto">
                    "I'm always open to discussing new projects, creative ideas, or opportunities to be part of your vision."
                </p>
                <div class="grid md:grid-cols-3 gap-6 mb-12">
                    <a href=PROFILE.mailto() class=card>
                        <div class="text-3xl mb-4 text-blue-600 group-hover:scale-110 transition-transform">
                            "✉"
                        </div>
                        <div class="text-sm text-gray-600 mb-2">"Email"</div>
                        <div class="text-gray-900 font-medium text-sm break-all">
                            {PROFILE.email}
                        </div>
                    </a>
                    <a
                        href=PROFILE.linkedin_url()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=card
                    >
                        <i class="devicon-linkedin-plain text-3xl mb-4 text-blue-600 group-hover:scale-110 transition-transform"></i>
                        <div class="text-sm text-gray-600 mb-2">"LinkedIn"</div>
                        <div class="text-gray-900 font-medium">{PROFILE.linkedin}</div>
                    </a>
                    <a
                        href=PROFILE.github_url()
                        target="_blank"
                        rel="noopener noreferrer"
                        class=card
                    >
                        <i class="devicon-github-plain text-3xl mb-4 text-blue-600 group-hover:scale-110 transition-transform"></i>
                        <div class="text-sm text-gray-600 mb-2">"GitHub"</div>
                        <div class="text-gray-900 font-medium">{PROFILE.github}</div>
                    </a>
                </div>
                <div class="flex flex-col items-center gap-2">
                    <a
                        href=PROFILE.tel()
                        class="flex items-center gap-2 text-gray-600 hover:text-blue-600 transition-colors"
                    >
                        <span>"☎"</span>
                        <span class="font-medium">{PROFILE.phone}</span>
                    </a>
                    <div class="flex items-center gap-2 text-gray-500 text-sm">
                        <span>"📍"</span>
                        <span>{format!("{}, {}", PROFILE.location(), PROFILE.country)}</span>
                    </div>
                </div>
            </div>
        </section>
    }
}
