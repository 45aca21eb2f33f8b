mod api;

use axum::Router;
use leptos::prelude::*;
use leptos_axum::{generate_route_list, LeptosRoutes};
use roasting_app::AppContext;
use roasting_ui::components::{LOADING_LABEL, NETWORK_FALLBACK_ROAST, SUBMIT_LABEL};
use roasting_ui::App;
use tower_http::compression::CompressionLayer;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let conf = get_configuration(Some("Cargo.toml")).expect("Failed to load Leptos config");
    let leptos_options = conf.leptos_options;
    let addr = leptos_options.site_addr;

    let app_context = AppContext::from_env();

    let routes = generate_route_list(App);

    let app = Router::new()
        .merge(api::roast_routes(app_context))
        .leptos_routes(&leptos_options, routes, {
            let leptos_options = leptos_options.clone();
            move || shell(leptos_options.clone())
        })
        .fallback(leptos_axum::file_and_error_handler(shell))
        .layer(CompressionLayer::new())
        .with_state(leptos_options);

    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind address");

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}

/// Client side of `POST /api/roast`. Renders answers with `textContent` so
/// roasts stay plain text.
fn roast_script() -> String {
    format!(
        r#"
        document.addEventListener('DOMContentLoaded', function() {{
            const form = document.getElementById('idea-form');
            const input = document.getElementById('idea-input');
            const button = document.getElementById('roast-button');
            const result = document.getElementById('roast-result');
            const text = document.getElementById('roast-text');
            let loading = false;

            function updateButton() {{
                button.disabled = loading || input.value.trim() === '';
                button.textContent = loading ? '{loading_label}' : '{submit_label}';
            }}

            function show(message) {{
                text.textContent = message;
                result.hidden = !message;
            }}

            form.addEventListener('submit', async function(ev) {{
                ev.preventDefault();
                if (!input.value.trim() || loading) return;

                loading = true;
                show('');
                updateButton();

                try {{
                    const res = await fetch('/api/roast', {{
                        method: 'POST',
                        headers: {{ 'Content-Type': 'application/json' }},
                        body: JSON.stringify({{ idea: input.value }}),
                    }});
                    const data = await res.json();
                    show(data.roast || data.error || '');
                }} catch (err) {{
                    show('{network_fallback}');
                }} finally {{
                    loading = false;
                    updateButton();
                }}
            }});

            input.addEventListener('input', updateButton);
            updateButton();
        }});
    "#,
        loading_label = LOADING_LABEL,
        submit_label = SUBMIT_LABEL,
        network_fallback = NETWORK_FALLBACK_ROAST,
    )
}

fn shell(_options: LeptosOptions) -> impl IntoView {
    use leptos::prelude::*;
    use leptos_meta::*;

    let css = r#"
        :root {
            --base: #000000;
            --surface: #111827;
            --border: #374151;
            --muted: #6b7280;
            --subtle: #9ca3af;
            --text: #ffffff;
            --accent: #ea580c;
            --accent-hover: #f97316;
        }
        * { box-sizing: border-box; margin: 0; padding: 0; }
        body {
            font-family: 'Inter', -apple-system, sans-serif;
            background: var(--base);
            color: var(--text);
            min-height: 100vh;
        }
        .container {
            max-width: 42rem; margin: 0 auto; padding: 2rem;
            min-height: 100vh; display: flex; flex-direction: column; justify-content: center; gap: 2rem;
        }
        .hero { text-align: center; }
        .hero__title { font-size: 3rem; font-weight: 700; letter-spacing: -0.025em; margin-bottom: 0.5rem; }
        .hero__subtitle { color: var(--subtle); font-size: 1.125rem; }
        .idea-form { display: flex; flex-direction: column; gap: 1rem; }
        .idea-form__input {
            width: 100%; height: 8rem; padding: 1rem; resize: none;
            background: var(--surface); border: 1px solid var(--border); border-radius: 8px;
            color: var(--text); font-size: 1rem; font-family: inherit;
        }
        .idea-form__input:focus { outline: none; border-color: var(--accent); }
        .idea-form__input::placeholder { color: var(--muted); }
        .idea-form__button {
            width: 100%; padding: 1rem; background: var(--accent); color: var(--text);
            border: none; border-radius: 8px; font-size: 1.125rem; font-weight: 700; cursor: pointer;
        }
        .idea-form__button:hover { background: var(--accent-hover); }
        .idea-form__button:disabled { background: var(--border); cursor: not-allowed; }
        .roast { padding: 1.5rem; background: var(--surface); border: 1px solid var(--accent); border-radius: 8px; }
        .roast__text { font-size: 1.25rem; line-height: 1.6; }
        .footer { text-align: center; color: var(--muted); font-size: 0.875rem; }
    "#;

    let roast_script = roast_script();

    view! {
        <!DOCTYPE html>
        <html lang="de">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <title>"Roast My Idea"</title>
                <link rel="icon" href="data:image/svg+xml,<svg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 100 100'><text y='.9em' font-size='90'>🔥</text></svg>"/>
                <style>{css}</style>
                <MetaTags/>
            </head>
            <body>
                <App/>
                <script>{roast_script}</script>
            </body>
        </html>
    }
}
