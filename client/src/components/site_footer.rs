//! Footer with brand blurb, link columns and social links.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};

/// Link columns as (heading, labels).
pub const LINK_COLUMNS: [(&str, [&str; 3]); 3] = [
    ("Producto", ["Características", "Precios", "Documentación"]),
    ("Empresa", ["Acerca de", "Blog", "Carreras"]),
    ("Legal", ["Privacidad", "Términos", "Seguridad"]),
];

pub const SOCIAL_LINKS: [&str; 3] = ["Twitter", "LinkedIn", "GitHub"];

pub const COPYRIGHT_YEAR: u16 = 2025;

pub fn copyright_line(year: u16) -> String {
    format!("© {year} IPCE Gestión de Edificios. Todos los derechos reservados.")
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="bg-gray-950 text-white py-12">
            <div class="w-[90%] max-w-7xl mx-auto">
                <div class="flex flex-col md:flex-row justify-between gap-8">
                    <div id="about">
                        <div class="flex items-center gap-2 mb-4">
                            <Icon glyph=Glyph::Building class="w-6 h-6 text-blue-400"/>
                            <h2 class="text-2xl font-bold text-white">"IPCE"</h2>
                        </div>
                        <p class="text-gray-400 max-w-md">
                            "El sistema de gestión de edificios más avanzado para las necesidades de \
                             infraestructura moderna."
                        </p>
                    </div>

                    <div class="grid grid-cols-2 md:grid-cols-3 gap-8">
                        {LINK_COLUMNS
                            .iter()
                            .map(|(heading, labels)| view! {
                                <div>
                                    <h3 class="text-lg font-semibold mb-4 text-blue-100">{*heading}</h3>
                                    <ul class="space-y-2">
                                        {labels
                                            .iter()
                                            .map(|label| view! {
                                                <li>
                                                    <a href="#" class="text-gray-400 hover:text-blue-400 transition-colors">
                                                        {*label}
                                                    </a>
                                                </li>
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </div>

                <div
                    id="contact"
                    class="mt-12 pt-8 border-t border-gray-800 text-sm text-gray-500 flex flex-col md:flex-row \
                           justify-between items-center"
                >
                    <p>{copyright_line(COPYRIGHT_YEAR)}</p>
                    <div class="flex gap-6 mt-4 md:mt-0">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|name| view! { <a href="#" class="hover:text-blue-400 transition-colors">{*name}</a> })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </footer>
    }
}
