//! SolutPag Web App - routing shell
//!
//! Unknown paths render the landing page.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::pages::{
    DashboardPage,
    KycPage,
    LandingPage,
    LoginPage,
    RegisterPage,
    SalePage,
    WithdrawalPage,
};
use crate::state::scroll::SmoothScrollProvider;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Router>
            <SmoothScrollProvider>
                <div class="app-container">
                    <Routes fallback=|| view! { <LandingPage/> }>
                        <Route path=path!("/") view=LandingPage/>
                        <Route path=path!("/auth/login") view=LoginPage/>
                        <Route path=path!("/auth/register") view=RegisterPage/>
                        <Route path=path!("/dashboard") view=DashboardPage/>
                        <Route path=path!("/dashboard/sale") view=SalePage/>
                        <Route path=path!("/dashboard/withdrawal") view=WithdrawalPage/>
                        <Route path=path!("/dashboard/kyc") view=KycPage/>
                    </Routes>
                </div>
            </SmoothScrollProvider>
        </Router>
    }
}
