// ============================================================================
// APP - componente raíz: resolución de ruta + guards
// ============================================================================
// Escucha "popstate" y el evento de navegación propio; en cada cambio de
// ruta o de sesión evalúa el guard correspondiente y aplica la redirección
// como efecto. Las pantallas nunca se protegen a sí mismas.
// ============================================================================

use yew::prelude::*;

use crate::guards::{self, GuardOutcome};
use crate::hooks::use_session;
use crate::router;
use crate::routes::Route;
use crate::views::animals::AnimalsView;
use crate::views::change_password::ChangePasswordView;
use crate::views::dashboard::DashboardView;
use crate::views::iatf::IatfView;
use crate::views::login::LoginView;
use crate::views::prediction::PredictionView;
use crate::views::reports::ReportsView;
use crate::views::sign_up::SignUpView;

#[function_component(App)]
pub fn app() -> Html {
    let route = use_state(|| Route::from_path(&router::current_path()));
    // Re-render ante cada transición de sesión (login, logout, expiración)
    let session = use_session();

    // Listener global de navegación; se registra UNA sola vez
    {
        let route = route.clone();
        use_effect_with((), move |_| {
            #[cfg(target_arch = "wasm32")]
            {
                use wasm_bindgen::closure::Closure;
                use wasm_bindgen::JsCast;

                if let Some(window) = web_sys::window() {
                    let route_for_event = route.clone();
                    let closure = Closure::wrap(Box::new(move |_e: web_sys::Event| {
                        route_for_event.set(Route::from_path(&router::current_path()));
                    })
                        as Box<dyn FnMut(web_sys::Event)>);

                    let _ = window.add_event_listener_with_callback(
                        "popstate",
                        closure.as_ref().unchecked_ref(),
                    );
                    let _ = window.add_event_listener_with_callback(
                        router::NAVIGATE_EVENT,
                        closure.as_ref().unchecked_ref(),
                    );
                    // Listener global que vive toda la sesión
                    closure.forget();
                }
            }
            #[cfg(not(target_arch = "wasm32"))]
            let _ = route;
            || ()
        });
    }

    let current = *route;
    let outcome = guards::check(current);

    // La redirección es un efecto, nunca parte del render
    {
        use_effect_with((current, session.clone()), move |(current, _session)| {
            match guards::check(*current) {
                GuardOutcome::Allow => {
                    #[cfg(target_arch = "wasm32")]
                    if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                        document.set_title(current.title());
                    }
                }
                GuardOutcome::Redirect { to, query, notice } => {
                    log::info!("🔀 Guard redirige {} → {}", current.path(), to.path());
                    if let Some(notice) = notice {
                        router::set_flash(&notice);
                    }
                    let pairs: Vec<(&str, &str)> = query
                        .iter()
                        .map(|(key, value)| (key.as_str(), value.as_str()))
                        .collect();
                    router::navigate_with_query(to, &pairs);
                }
            }
            || ()
        });
    }

    if !outcome.is_allowed() {
        // Redirigiendo; el evento de navegación actualizará la ruta
        return html! {};
    }

    match current {
        Route::Login => html! { <LoginView /> },
        Route::SignUp => html! { <SignUpView /> },
        Route::ChangePassword => html! { <ChangePasswordView /> },
        Route::Dashboard => html! { <DashboardView /> },
        Route::Animals => html! { <AnimalsView /> },
        Route::Iatf => html! { <IatfView /> },
        Route::Prediction => html! { <PredictionView /> },
        Route::Reports => html! { <ReportsView /> },
    }
}
