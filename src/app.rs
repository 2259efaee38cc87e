//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    StaticSegment,
};

use crate::pages::dashboard::DashboardPage;
use crate::state::flash::FlashState;
use crate::state::metrics::MetricsState;
use crate::state::submission::SubmissionState;
use crate::state::tails::TailsState;
use crate::state::trend::TrendState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration. The BokehJS
/// bundle must be on the page before hydration so the trend embed call
/// can find `Bokeh.embed`.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <script src="https://cdn.bokeh.org/bokeh/release/bokeh-3.4.0.min.js"></script>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // Provide reactive state contexts for all child components.
    let flash = RwSignal::new(FlashState::default());
    let metrics = RwSignal::new(MetricsState::default());
    let submission = RwSignal::new(SubmissionState::default());
    let tails = RwSignal::new(TailsState::default());
    let trend = RwSignal::new(TrendState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(flash);
    provide_context(metrics);
    provide_context(submission);
    provide_context(tails);
    provide_context(trend);
    provide_context(ui);

    view! {
        <Stylesheet id="leptos" href="/pkg/tailboard.css"/>
        <Title text="Risk Tails Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
            </Routes>
        </Router>
    }
}
