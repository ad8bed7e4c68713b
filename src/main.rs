// src/main.rs — SubScribeNet (Rust + Yew + WASM)
// Mock subscription-management front-end:
// - path-based view resolution with an explicit not-found fallback
// - hardcoded subscription / trade-offer collections (no backend, no network)
// - login is a visual placeholder that always lands on the dashboard

use gloo::console::log;
use gloo::events::EventListener;
use wasm_bindgen::JsValue;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const COMPANY_NAME: &str = "SubScribeNet";
const LOGO_SRC: &str = "logo.svg";
const CONTACT_EMAIL: &str = "support@subscribenet.io";

// ---------- entity store ----------

#[derive(Debug)]
struct SubscriptionRecord {
    id: u32,
    title: &'static str,
    details: &'static str,
    expires: &'static str,
    other_details: &'static str,
}

#[derive(Debug)]
struct TradeOffer {
    id: u32,
    name: &'static str,
    subscription: &'static str,
    expires: &'static str,
    other_details: &'static str,
}

const SUBSCRIPTIONS: &[SubscriptionRecord] = &[
    SubscriptionRecord {
        id: 1,
        title: "Chainlink",
        details: "Monthly Oracle Service",
        expires: "2024-12-31",
        other_details: "Reliable data feed services.",
    },
    SubscriptionRecord {
        id: 2,
        title: "Alchemy",
        details: "Annual API Access",
        expires: "2025-01-15",
        other_details: "Blockchain infrastructure services.",
    },
    SubscriptionRecord {
        id: 3,
        title: "Infura",
        details: "Monthly Ethereum API",
        expires: "2024-11-20",
        other_details: "Ethereum network access.",
    },
    SubscriptionRecord {
        id: 4,
        title: "The Graph",
        details: "Monthly Data Indexing",
        expires: "2024-10-05",
        other_details: "Blockchain data indexing services.",
    },
];

const TRADE_OFFERS: &[TradeOffer] = &[
    TradeOffer {
        id: 1,
        name: "Alice",
        subscription: "Chainlink - Monthly Oracle Service",
        expires: "2024-12-31",
        other_details: "Reliable data feed services.",
    },
    TradeOffer {
        id: 2,
        name: "Bob",
        subscription: "Alchemy - Annual API Access",
        expires: "2025-01-15",
        other_details: "Blockchain infrastructure services.",
    },
    TradeOffer {
        id: 3,
        name: "Charlie",
        subscription: "Infura - Monthly Ethereum API",
        expires: "2024-11-20",
        other_details: "Ethereum network access.",
    },
    TradeOffer {
        id: 4,
        name: "Dave",
        subscription: "The Graph - Monthly Data Indexing",
        expires: "2024-10-05",
        other_details: "Blockchain data indexing services.",
    },
];

// Id params arrive as raw path segments. Strict base-10 parse; anything that
// does not parse or does not match a record is "not found".
fn lookup_subscription(raw_id: &str) -> Option<&'static SubscriptionRecord> {
    let id: u32 = raw_id.parse().ok()?;
    SUBSCRIPTIONS.iter().find(|s| s.id == id)
}

fn lookup_trade_offer(raw_id: &str) -> Option<&'static TradeOffer> {
    let id: u32 = raw_id.parse().ok()?;
    TRADE_OFFERS.iter().find(|t| t.id == id)
}

// ---------- view resolver ----------

#[derive(Clone, Debug, PartialEq, Eq)]
enum Route {
    Landing,
    Login,
    Dashboard,
    Subscriptions,
    SubscriptionDetail { id: String },
    Trade,
    TradeDetail { id: String },
    AboutUs,
    ContactUs,
    NotFound,
}

impl Route {
    fn to_path(&self) -> String {
        match self {
            // NotFound has no address of its own; links never target it.
            Route::Landing | Route::NotFound => "/".to_string(),
            Route::Login => "/login".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::Subscriptions => "/subscriptions".to_string(),
            Route::SubscriptionDetail { id } => format!("/subscriptions/{id}"),
            Route::Trade => "/trade".to_string(),
            Route::TradeDetail { id } => format!("/trade/{id}"),
            Route::AboutUs => "/about-us".to_string(),
            Route::ContactUs => "/contact-us".to_string(),
        }
    }
}

// Exact literals take priority; the `{id}` patterns accept a single
// non-empty trailing segment and bind it verbatim (case-sensitive throughout).
fn resolve(path: &str) -> Route {
    match path {
        "/" => return Route::Landing,
        "/login" => return Route::Login,
        "/dashboard" => return Route::Dashboard,
        "/subscriptions" => return Route::Subscriptions,
        "/trade" => return Route::Trade,
        "/about-us" => return Route::AboutUs,
        "/contact-us" => return Route::ContactUs,
        _ => {}
    }
    if let Some(id) = one_segment_param(path, "/subscriptions/") {
        return Route::SubscriptionDetail { id: id.to_string() };
    }
    if let Some(id) = one_segment_param(path, "/trade/") {
        return Route::TradeDetail { id: id.to_string() };
    }
    Route::NotFound
}

fn one_segment_param<'a>(path: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = path.strip_prefix(prefix)?;
    if rest.is_empty() || rest.contains('/') {
        return None;
    }
    Some(rest)
}

// ---------- navigation ----------

// Login never authenticates; it mirrors the form's field-required gate and
// otherwise always lands on the dashboard.
fn login_transition(username: &str, password: &str) -> Option<Route> {
    if username.is_empty() || password.is_empty() {
        return None;
    }
    Some(Route::Dashboard)
}

fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

fn push_history(path: &str) {
    let Some(w) = web_sys::window() else { return };
    if let Ok(history) = w.history() {
        let _ = history.push_state_with_url(&JsValue::NULL, "", Some(path));
    }
}

// ---------- browser helpers ----------

async fn copy_to_clipboard(text: String) -> Result<(), String> {
    let w = web_sys::window().ok_or("No window".to_string())?;
    let cb = w.navigator().clipboard();
    wasm_bindgen_futures::JsFuture::from(cb.write_text(&text))
        .await
        .map_err(|_| {
            "Clipboard write failed (HTTPS + user gesture required in some browsers)".to_string()
        })?;
    Ok(())
}

// ---------- shared chrome ----------

// An in-app anchor: real href for the address bar, click intercepted so the
// transition stays client-side.
fn route_link(nav: &Callback<Route>, target: Route, class: &'static str, label: Html) -> Html {
    let href = target.to_path();
    let onclick = {
        let nav = nav.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            nav.emit(target.clone());
        })
    };
    html! { <a class={class} href={href} onclick={onclick}>{ label }</a> }
}

fn header_view() -> Html {
    html! {
        <header class="header">
            <img class="logo" src={LOGO_SRC} alt="Company Logo" />
            <h1 class="company">{ COMPANY_NAME }</h1>
        </header>
    }
}

fn status_view(s: &str) -> Html {
    if s.trim().is_empty() {
        html! {}
    } else if s.to_lowercase().contains("error") || s.to_lowercase().contains("failed") {
        html! { <div class="alert">{ s }</div> }
    } else {
        html! { <div class="ok">{ s }</div> }
    }
}

fn footer_view(nav: &Callback<Route>) -> Html {
    let year = js_sys::Date::new_0().get_full_year();
    html! {
        <footer class="footer">
            <div class="social">
                { route_link(nav, Route::AboutUs, "footer-link", html! { "About Us" }) }
                { route_link(nav, Route::ContactUs, "footer-link", html! { "Contact Us" }) }
                <a class="footer-link" href="https://instagram.com" target="_blank" rel="noopener noreferrer">{ "Instagram" }</a>
                <a class="footer-link" href="https://twitter.com" target="_blank" rel="noopener noreferrer">{ "Twitter" }</a>
            </div>
            { format!("© {year} {COMPANY_NAME}. All rights reserved.") }
        </footer>
    }
}

// ---------- page views ----------

fn landing_view(nav: &Callback<Route>) -> Html {
    html! {
        <div class="page">
            <img src={LOGO_SRC} alt="Company Logo" height="100" />
            <h1>{ COMPANY_NAME }</h1>
            <p class="description">
                { format!("Welcome to {COMPANY_NAME}, your one-stop solution for managing and trading subscriptions on the StarkNet blockchain.") }
            </p>
            { route_link(nav, Route::Login, "button-link", html! { "Login" }) }
        </div>
    }
}

fn login_view(
    username: &UseStateHandle<String>,
    password: &UseStateHandle<String>,
    on_submit: Callback<SubmitEvent>,
) -> Html {
    let on_username = {
        let username = username.clone();
        Callback::from(move |e: InputEvent| {
            username.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    let on_password = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            password.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };
    html! {
        <div class="page">
            <h1>{ "Login" }</h1>
            <form class="login-form" onsubmit={on_submit}>
                <input
                    type="text"
                    placeholder="Username"
                    required={true}
                    value={(**username).clone()}
                    oninput={on_username}
                />
                <input
                    type="password"
                    placeholder="Password"
                    required={true}
                    value={(**password).clone()}
                    oninput={on_password}
                />
                <button class="button" type="submit">{ "Login" }</button>
            </form>
        </div>
    }
}

fn dashboard_view(nav: &Callback<Route>) -> Html {
    html! {
        <div class="page">
            <h1>{ "Dashboard" }</h1>
            { route_link(nav, Route::Subscriptions, "button-link", html! { "Manage Subscriptions" }) }
            { route_link(nav, Route::Trade, "button-link", html! { "Trade Subscriptions" }) }
        </div>
    }
}

fn subscription_list_view(nav: &Callback<Route>) -> Html {
    html! {
        <div class="card-list">
            {
                for SUBSCRIPTIONS.iter().map(|sub| {
                    route_link(
                        nav,
                        Route::SubscriptionDetail { id: sub.id.to_string() },
                        "card",
                        html! {
                            <>
                                <h2>{ sub.title }</h2>
                                <p>{ sub.details }</p>
                            </>
                        },
                    )
                })
            }
        </div>
    }
}

fn subscription_detail_view(nav: &Callback<Route>, raw_id: &str) -> Html {
    let Some(sub) = lookup_subscription(raw_id) else {
        return html! {
            <div class="page">
                <h1>{ "Subscription Not Found" }</h1>
            </div>
        };
    };
    html! {
        <div class="page">
            <h1>{ sub.title }</h1>
            <p>{ format!("Details: {}", sub.details) }</p>
            <p>{ format!("Expires: {}", sub.expires) }</p>
            <p>{ format!("Other Details: {}", sub.other_details) }</p>
            { route_link(nav, Route::Subscriptions, "text-link", html! { "Back to Subscriptions" }) }
        </div>
    }
}

fn trade_list_view(nav: &Callback<Route>) -> Html {
    html! {
        <div class="page">
            <h1>{ "Trade Subscriptions" }</h1>
            <div class="card-list">
                {
                    for TRADE_OFFERS.iter().map(|offer| {
                        route_link(
                            nav,
                            Route::TradeDetail { id: offer.id.to_string() },
                            "card",
                            html! {
                                <>
                                    <h2>{ offer.name }</h2>
                                    <p>{ format!("Trading: {}", offer.subscription) }</p>
                                </>
                            },
                        )
                    })
                }
            </div>
        </div>
    }
}

fn trade_detail_view(nav: &Callback<Route>, raw_id: &str, on_buy: Callback<MouseEvent>) -> Html {
    let Some(offer) = lookup_trade_offer(raw_id) else {
        return html! {
            <div class="page">
                <h1>{ "Trade Not Found" }</h1>
            </div>
        };
    };
    html! {
        <div class="page">
            <h1>{ offer.name }</h1>
            <p>{ format!("Subscription: {}", offer.subscription) }</p>
            <p>{ format!("Expires: {}", offer.expires) }</p>
            <p>{ format!("Other Details: {}", offer.other_details) }</p>
            <button class="button" onclick={on_buy}>{ "Buy" }</button>
            { route_link(nav, Route::Trade, "text-link", html! { "Back to Trade" }) }
        </div>
    }
}

fn about_view() -> Html {
    html! {
        <div class="page">
            <h1>{ "About Us" }</h1>
            <p>{ "We are a company dedicated to providing the best subscription management and trading services on the StarkNet blockchain." }</p>
        </div>
    }
}

fn contact_view(on_copy_email: Callback<MouseEvent>) -> Html {
    html! {
        <div class="page">
            <h1>{ "Contact Us" }</h1>
            <p>{ format!("For any inquiries, please email us at {CONTACT_EMAIL}") }</p>
            <button class="button" onclick={on_copy_email}>{ "Copy Email Address" }</button>
        </div>
    }
}

fn not_found_view(nav: &Callback<Route>) -> Html {
    html! {
        <div class="page">
            <h1>{ "Page Not Found" }</h1>
            <p>{ format!("No view matches {}", current_path()) }</p>
            { route_link(nav, Route::Landing, "text-link", html! { "Back to the landing page" }) }
        </div>
    }
}

// ---------- app ----------

#[function_component(App)]
fn app() -> Html {
    let route = use_state(|| resolve(&current_path()));
    let msg = use_state(String::new);

    // login form fields
    let username = use_state(String::new);
    let password = use_state(String::new);

    let navigate = {
        let route = route.clone();
        let msg = msg.clone();
        Callback::from(move |target: Route| {
            let path = target.to_path();
            push_history(&path);
            log!(format!("nav: {path}"));
            msg.set(String::new());
            route.set(resolve(&path));
        })
    };

    // Back/forward buttons re-resolve from the address bar.
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|w| {
                EventListener::new(&w, "popstate", move |_| {
                    route.set(resolve(&current_path()));
                })
            });
            move || drop(listener)
        });
    }

    let on_login_submit = {
        let username = username.clone();
        let password = password.clone();
        let navigate = navigate.clone();
        let msg = msg.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match login_transition(&username, &password) {
                Some(target) => {
                    log!("login: submitted, entering dashboard");
                    navigate.emit(target);
                }
                None => msg.set("Login failed: username and password are required.".to_string()),
            }
        })
    };

    let on_buy = {
        let msg = msg.clone();
        Callback::from(move |_: MouseEvent| {
            msg.set("Trading is not available in this preview build.".to_string());
        })
    };

    let on_copy_email = {
        let msg = msg.clone();
        Callback::from(move |_: MouseEvent| {
            let msg2 = msg.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match copy_to_clipboard(CONTACT_EMAIL.to_string()).await {
                    Ok(_) => msg2.set("Email address copied.".to_string()),
                    Err(e) => msg2.set(e),
                }
            });
        })
    };

    let body = match &*route {
        Route::Landing => landing_view(&navigate),
        Route::Login => login_view(&username, &password, on_login_submit.clone()),
        Route::Dashboard => dashboard_view(&navigate),
        Route::Subscriptions => subscription_list_view(&navigate),
        Route::SubscriptionDetail { id } => subscription_detail_view(&navigate, id),
        Route::Trade => trade_list_view(&navigate),
        Route::TradeDetail { id } => trade_detail_view(&navigate, id, on_buy.clone()),
        Route::AboutUs => about_view(),
        Route::ContactUs => contact_view(on_copy_email.clone()),
        Route::NotFound => not_found_view(&navigate),
    };

    html! {
        <div class="app">
            { header_view() }
            { status_view(&msg) }
            { body }
            { footer_view(&navigate) }
        </div>
    }
}

fn main() {
    // index.html provides: <div id="app"></div>
    let root = web_sys::window()
        .unwrap()
        .document()
        .unwrap()
        .get_element_by_id("app")
        .unwrap();

    yew::Renderer::<App>::with_root(root).render();
}

// ---------- tests ----------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_paths_resolve_to_their_views() {
        assert_eq!(resolve("/"), Route::Landing);
        assert_eq!(resolve("/login"), Route::Login);
        assert_eq!(resolve("/dashboard"), Route::Dashboard);
        assert_eq!(resolve("/subscriptions"), Route::Subscriptions);
        assert_eq!(resolve("/trade"), Route::Trade);
        assert_eq!(resolve("/about-us"), Route::AboutUs);
        assert_eq!(resolve("/contact-us"), Route::ContactUs);
    }

    #[test]
    fn detail_paths_bind_the_raw_segment() {
        assert_eq!(
            resolve("/subscriptions/2"),
            Route::SubscriptionDetail { id: "2".to_string() }
        );
        assert_eq!(
            resolve("/trade/xyz"),
            Route::TradeDetail { id: "xyz".to_string() }
        );
    }

    #[test]
    fn unknown_paths_resolve_to_not_found() {
        assert_eq!(resolve(""), Route::NotFound);
        assert_eq!(resolve("/nope"), Route::NotFound);
        assert_eq!(resolve("/subscriptions/"), Route::NotFound);
        assert_eq!(resolve("/subscriptions/2/extra"), Route::NotFound);
        assert_eq!(resolve("/trade/"), Route::NotFound);
        // literal matching is case-sensitive
        assert_eq!(resolve("/Login"), Route::NotFound);
        assert_eq!(resolve("/SUBSCRIPTIONS"), Route::NotFound);
    }

    #[test]
    fn navigable_routes_round_trip_through_the_resolver() {
        let routes = [
            Route::Landing,
            Route::Login,
            Route::Dashboard,
            Route::Subscriptions,
            Route::SubscriptionDetail { id: "2".to_string() },
            Route::Trade,
            Route::TradeDetail { id: "3".to_string() },
            Route::AboutUs,
            Route::ContactUs,
        ];
        for route in routes {
            assert_eq!(resolve(&route.to_path()), route);
        }
    }

    #[test]
    fn every_seed_subscription_is_found_by_its_id() {
        for sub in SUBSCRIPTIONS {
            let found = lookup_subscription(&sub.id.to_string()).expect("seed id resolves");
            assert_eq!(found.title, sub.title);
            assert_eq!(found.details, sub.details);
            assert_eq!(found.expires, sub.expires);
            assert_eq!(found.other_details, sub.other_details);
        }
    }

    #[test]
    fn every_seed_trade_offer_is_found_by_its_id() {
        for offer in TRADE_OFFERS {
            let found = lookup_trade_offer(&offer.id.to_string()).expect("seed id resolves");
            assert_eq!(found.name, offer.name);
            assert_eq!(found.subscription, offer.subscription);
            assert_eq!(found.expires, offer.expires);
            assert_eq!(found.other_details, offer.other_details);
        }
    }

    #[test]
    fn missing_or_malformed_ids_are_not_found() {
        assert!(lookup_subscription("999").is_none());
        assert!(lookup_subscription("abc").is_none());
        assert!(lookup_subscription("").is_none());
        assert!(lookup_subscription("0").is_none());
        assert!(lookup_subscription("-1").is_none());
        assert!(lookup_subscription("4294967296").is_none());
        assert!(lookup_trade_offer("999").is_none());
        assert!(lookup_trade_offer("abc").is_none());
    }

    #[test]
    fn subscription_detail_example() {
        let Route::SubscriptionDetail { id } = resolve("/subscriptions/2") else {
            panic!("expected the subscription detail view");
        };
        let sub = lookup_subscription(&id).expect("record 2 exists");
        assert_eq!(sub.title, "Alchemy");
        assert_eq!(sub.details, "Annual API Access");
        assert_eq!(sub.expires, "2025-01-15");
    }

    #[test]
    fn trade_detail_example() {
        let Route::TradeDetail { id } = resolve("/trade/3") else {
            panic!("expected the trade detail view");
        };
        let offer = lookup_trade_offer(&id).expect("record 3 exists");
        assert_eq!(offer.name, "Charlie");
        assert_eq!(offer.subscription, "Infura - Monthly Ethereum API");
    }

    #[test]
    fn login_with_credentials_lands_on_dashboard() {
        assert_eq!(login_transition("alice", "hunter2"), Some(Route::Dashboard));
    }

    #[test]
    fn login_with_missing_field_stays_put() {
        assert_eq!(login_transition("", "hunter2"), None);
        assert_eq!(login_transition("alice", ""), None);
        assert_eq!(login_transition("", ""), None);
    }
}
