//! Landing page

use leptos::prelude::*;

use crate::components::{BrandMarquee, Features, Footer, Header, Hero, Testimonials};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing">
            <Header/>
            <main>
                <Hero/>
                <Features/>
                <BrandMarquee/>
                <Testimonials/>
            </main>
            <Footer/>
        </div>
    }
}
