//! Feature grid anchored at `#features`.

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};

/// Number of feature cards on the landing page.
pub const FEATURE_COUNT: u8 = 6;

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="py-20 bg-gray-800">
            <div class="w-[90%] max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-16 text-blue-100">
                    "Características poderosas"
                </h2>
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">
                    {(1..=FEATURE_COUNT).map(|n| view! { <FeatureCard number=n/> }).collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(number: u8) -> impl IntoView {
    view! {
        <div class="p-6 rounded-lg bg-gray-700 hover:bg-gray-700/80 border border-gray-600 hover:shadow-lg transition-shadow">
            <div class="w-12 h-12 rounded-full bg-blue-900/50 flex items-center justify-center mb-4">
                <Icon glyph=Glyph::Building class="w-6 h-6 text-blue-400"/>
            </div>
            <h3 class="text-xl font-semibold mb-2 text-blue-100">{format!("Característica {number}")}</h3>
            <p class="text-gray-300">
                "Una característica potente que mejora tu experiencia de gestión de edificios."
            </p>
        </div>
    }
}
