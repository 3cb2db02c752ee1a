use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::ui::pages::{DemoPage, HomePage, IndustryPage, NotFoundPage};

/// Public site URL from the server's `Config`, when one was provided.
/// The error fallback renders without it.
#[cfg(feature = "ssr")]
fn site_url() -> Option<String> {
    use_context::<crate::core::config::Config>().and_then(|config| config.site_url)
}

#[cfg(not(feature = "ssr"))]
fn site_url() -> Option<String> {
    None
}

pub fn shell(options: LeptosOptions) -> impl IntoView {
    let og_url = site_url().map(|url| view! { <Meta property="og:url" content=url/> });

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <Meta property="og:type" content="website"/>
                {og_url}
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/datawise-site.css"/>
        <Title text="DataWise"/>

        <Router>
            <main>
                <Routes fallback=NotFoundPage>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/demo") view=DemoPage/>
                    <Route path=path!("/industries/:id") view=IndustryPage/>
                </Routes>
            </main>
        </Router>
    }
}
