use leptos::prelude::*;

use super::homepage::SocialLinks;
use crate::config::BuildInfo;
use crate::content::PROFILE;

#[component]
pub fn Footer() -> impl IntoView {
    let build = BuildInfo::current();
    let copyright = match build {
        Some(info) => format!("© {} {}. All rights reserved.", info.year(), PROFILE.name),
        None => format!("© {}. All rights reserved.", PROFILE.name),
    };

    view! {
        <footer class="bg-white border-t border-gray-100 py-8">
            <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="text-gray-600 text-sm">
                        <div>{copyright}</div>
                        {build
                            .map(|info| {
                                view! {
                                    <div class="text-xs text-gray-400">
                                        "Last updated " {info.updated()}
                                    </div>
                                }
                            })}
                    </div>
                    <div class="flex items-center gap-6 text-xl">
                        <SocialLinks />
                    </div>
                </div>
            </div>
        </footer>
    }
}
