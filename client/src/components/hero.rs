//! Hero section: headline, calls to action and dashboard preview.

use leptos::prelude::*;

use crate::components::icon::{Glyph, Icon};

/// Inline style delaying the fade-up entrance by `seconds`.
fn entrance_delay(seconds: f32) -> String {
    format!("animation-delay: {seconds}s")
}

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="pt-32 pb-20 md:pt-40 md:pb-32">
            <div class="w-[90%] max-w-7xl mx-auto">
                <div class="flex flex-col items-center text-center mb-10">
                    <h1
                        class="fade-up text-4xl md:text-6xl lg:text-7xl font-bold mb-6 bg-clip-text text-transparent \
                               bg-gradient-to-r from-blue-400 to-blue-600 tracking-tight leading-tight"
                        style=entrance_delay(0.0)
                    >
                        "Sistema Inteligente de Gestión de Edificios"
                    </h1>
                    <p class="fade-up text-xl md:text-2xl text-blue-100 max-w-3xl mb-10" style=entrance_delay(0.2)>
                        "Revoluciona cómo gestionas la infraestructura de tus edificios con nuestra plataforma IPCE \
                         de última generación"
                    </p>
                    <div class="fade-up flex flex-col sm:flex-row gap-4" style=entrance_delay(0.4)>
                        <a
                            href="#features"
                            class="flex items-center bg-gradient-to-r from-blue-500 to-blue-700 hover:from-blue-600 \
                                   hover:to-blue-800 text-lg px-8 py-4 rounded-md shadow-lg hover:shadow-xl \
                                   transition-all duration-300"
                        >
                            "Comenzar"
                            <Icon glyph=Glyph::ArrowRight class="ml-2 w-5 h-5"/>
                        </a>
                        <a
                            href="#features"
                            class="border-2 border-blue-400 text-blue-400 hover:bg-blue-900/30 text-lg px-8 py-4 \
                                   rounded-md transition-all duration-300"
                        >
                            "Saber más"
                        </a>
                    </div>
                </div>

                <div
                    class="fade-up relative w-full h-64 md:h-96 lg:h-[500px] mt-10 rounded-lg overflow-hidden \
                           shadow-2xl border border-gray-700"
                    style=entrance_delay(0.6)
                >
                    <div class="absolute inset-0 bg-gradient-to-br from-blue-800/90 to-blue-900/90 flex items-center justify-center">
                        <Icon glyph=Glyph::Building class="w-20 h-20 text-blue-400 opacity-20"/>
                    </div>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <h3 class="text-white text-xl md:text-3xl font-medium">"Vista previa del panel interactivo"</h3>
                    </div>
                </div>
            </div>
        </section>
    }
}
