//! Home page — simple landing page explaining the service.

use axum::extract::State;
use axum::response::IntoResponse;
use maud::{DOCTYPE, PreEscaped, html};

use crate::state::AppState;

/// Render the home page.
pub async fn home_page(State(state): State<AppState>) -> impl IntoResponse {
    let site_name = &state.config.site_name;
    let app_origin = &state.config.app_origin;

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (site_name) " — link previews" }
                meta name="description" content="Static preview pages for Mirador messages, with Open Graph metadata for link unfurling.";
                meta property="og:title" content=(site_name);
                meta property="og:description" content="Static preview pages for Mirador messages.";
                meta property="og:type" content="website";
                style { (PreEscaped(HOME_CSS)) }
            }
            body {
                main class="home" {
                    h1 class="home-title" { (site_name) span class="home-dot" { " previews" } }
                    p class="home-tagline" {
                        "Static preview pages for any message on the network."
                    }

                    div class="home-how" {
                        p { "Append an entity and message id to the URL:" }
                        div class="home-example" {
                            code { "/" span class="home-highlight" { "{entity_id}" } "/" span class="home-highlight" { "{message_id}" } }
                        }
                        p class="home-note" {
                            "Anything else redirects straight to the app."
                        }
                    }
                }
                footer class="footer" {
                    a href=(app_origin) { "Open " (site_name) }
                }
            }
        }
    }
}

/// Inline CSS for the home page.
const HOME_CSS: &str = r#"
*{margin:0;padding:0;box-sizing:border-box}
:root{--bg:#fafafa;--fg:#111;--fg2:#555;--fg3:#999;--accent:#5b4dff;--border:rgba(91,77,255,.18);--mono:"SF Mono",SFMono-Regular,ui-monospace,Menlo,monospace}
body{font-family:Inter,-apple-system,BlinkMacSystemFont,"Segoe UI",Roboto,sans-serif;line-height:1.6;color:var(--fg);background:var(--bg);min-height:100vh;display:flex;flex-direction:column;align-items:center;padding:1.5rem 1rem}
.home{display:flex;flex-direction:column;align-items:center;justify-content:center;min-height:60vh;text-align:center;padding:2rem 1rem}
.home-title{font-size:3rem;font-weight:800;letter-spacing:-.04em}
.home-dot{color:var(--accent)}
.home-tagline{font-size:1.1rem;color:var(--fg2);margin-top:.5rem;max-width:420px}
.home-how{margin-top:2.5rem;width:100%;max-width:420px}
.home-how>p{font-size:.95rem;color:var(--fg2);margin-bottom:1rem}
.home-example{padding:.5rem .75rem;border-radius:6px;border:1px solid var(--border)}
.home-example code{font-family:var(--mono);font-size:.9rem;color:var(--fg2)}
.home-highlight{color:var(--accent);font-weight:600}
.home-note{margin-top:1rem;font-size:.85rem;color:var(--fg3)}
.footer{text-align:center;margin-top:1rem;padding-top:.75rem;font-size:.85rem;color:var(--fg3)}
.footer a{color:var(--accent);text-decoration:none}
.footer a:hover{text-decoration:underline}
@media(prefers-color-scheme:dark){
:root{--bg:#0a0a0f;--fg:#e5e5e5;--fg2:#a0a0a0;--fg3:#666;--accent:#8d82ff;--border:rgba(141,130,255,.25)}
}
"#;
