//! Public landing page for the building-management product.

use leptos::prelude::*;

use crate::components::feature_grid::FeatureGrid;
use crate::components::hero::Hero;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-gray-900 text-white">
            <SiteHeader/>
            <main>
                <Hero/>
                <FeatureGrid/>
            </main>
            <SiteFooter/>
        </div>
    }
}
