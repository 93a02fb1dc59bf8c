use leptos::prelude::*;

use super::dom::DomLayout;
use crate::content::PROFILE;
use crate::nav::NavState;
use crate::sections::{SectionId, SECTIONS};

#[component]
pub fn NavBar(nav: RwSignal<NavState>) -> impl IntoView {
    let go = move |section: SectionId| {
        nav.maybe_update(|state| state.navigate_to(&DomLayout, section));
    };
    let is_scrolled = move || nav.with(|state| state.is_scrolled);
    let menu_open = move || nav.with(|state| state.menu_open);

    view! {
        <nav class=move || {
            if is_scrolled() {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-white/95 backdrop-blur-md shadow-sm"
            } else {
                "fixed top-0 w-full z-50 transition-all duration-300 bg-transparent"
            }
        }>
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex justify-between items-center h-16 md:h-20">
                    <button
                        on:click=move |_| go(SectionId::Home)
                        class="text-xl md:text-2xl font-bold text-gray-900 hover:text-blue-600 transition-colors"
                        aria-label="Home"
                    >
                        {PROFILE.name}
                    </button>
                    <div class="hidden md:flex items-center space-x-1">
                        {SECTIONS
                            .into_iter()
                            .map(|section| {
                                let is_active = move || nav.with(|state| state.active == section);
                                view! {
                                    <button
                                        on:click=move |_| go(section)
                                        class=move || {
                                            if is_active() {
                                                "px-4 py-2 rounded-lg text-sm font-medium transition-colors text-blue-600 bg-blue-50"
                                            } else {
                                                "px-4 py-2 rounded-lg text-sm font-medium transition-colors text-gray-700 hover:text-blue-600 hover:bg-gray-50"
                                            }
                                        }
                                        aria-label=format!("Navigate to {}", section.label())
                                        aria-current=move || is_active().then_some("true")
                                    >
                                        {section.label()}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                    <button
                        on:click=move |_| nav.update(NavState::toggle_menu)
                        class="md:hidden p-2 text-gray-700 hover:text-blue-600 transition-colors text-2xl leading-none"
                        aria-label="Toggle menu"
                        aria-expanded=move || menu_open().to_string()
                    >
                        {move || if menu_open() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=menu_open>
                <div class="md:hidden bg-white border-t border-gray-100">
                    {SECTIONS
                        .into_iter()
                        .map(|section| {
                            view! {
                                <button
                                    on:click=move |_| go(section)
                                    class="w-full text-left px-6 py-3 text-gray-700 hover:bg-gray-50 hover:text-blue-600 transition-colors border-b border-gray-50"
                                >
                                    {section.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>
        </nav>
    }
}
