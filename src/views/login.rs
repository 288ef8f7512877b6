use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::LoginCredentials;
use crate::router;
use crate::routes::Route;
use crate::stores::SessionStore;
use crate::utils::storage;

const REMEMBER_EMAIL_KEY: &str = "bovipred_remember_email";

#[derive(Clone, PartialEq)]
struct LoginState {
    email: String,
    password: String,
    remember_me: bool,
    show_password: bool,
    loading: bool,
    error_message: String,
    show_error: bool,
    session_expired: bool,
}

impl Default for LoginState {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            remember_me: false,
            show_password: false,
            loading: false,
            error_message: String::new(),
            show_error: false,
            session_expired: false,
        }
    }
}

#[function_component(LoginView)]
pub fn login_view() -> Html {
    let state = use_state(LoginState::default);

    // Email recordado + marcador de sesión expirada del interceptor
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut new_state = (*state).clone();
            if let Some(saved_email) = storage::load_string(REMEMBER_EMAIL_KEY) {
                new_state.email = saved_email;
                new_state.remember_me = true;
            }
            if router::query_param("sessionExpired").as_deref() == Some("true") {
                new_state.session_expired = true;
            }
            state.set(new_state);
            || ()
        });
    }

    let on_email_change = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.email = input.value();
            state.set(new_state);
        })
    };

    let on_password_change = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.password = input.value();
            state.set(new_state);
        })
    };

    let on_remember_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.remember_me = input.checked();
            state.set(new_state);
        })
    };

    let toggle_password = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_password = !new_state.show_password;
            state.set(new_state);
        })
    };

    let hide_error = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_error = false;
            new_state.error_message = String::new();
            state.set(new_state);
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*state).clone();

            // Validación básica antes de tocar la red
            let validation_error = if current.email.is_empty() || current.password.is_empty() {
                Some("Por favor complete todos los campos")
            } else if !is_valid_email(&current.email) {
                Some("Por favor ingrese un email válido")
            } else if current.password.len() < 6 {
                Some("La contraseña debe tener al menos 6 caracteres")
            } else {
                None
            };

            if let Some(message) = validation_error {
                show_error(&state, message);
                return;
            }

            let mut loading_state = current.clone();
            loading_state.loading = true;
            loading_state.show_error = false;
            state.set(loading_state);

            let credentials = LoginCredentials {
                email: current.email.trim().to_string(),
                password: current.password.clone(),
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::login(&credentials).await {
                    Ok(user) => {
                        log::info!("✅ Login exitoso: {}", user.email);

                        // Recordar email solo si el checkbox está activo
                        let current = (*state).clone();
                        if current.remember_me {
                            let _ = storage::save_string(REMEMBER_EMAIL_KEY, &current.email);
                        } else {
                            let _ = storage::remove_from_storage(REMEMBER_EMAIL_KEY);
                        }

                        // Volver al destino original si el guard lo guardó
                        let target = router::query_param("returnUrl")
                            .map(|url| Route::from_path(&url))
                            .unwrap_or(Route::Dashboard);

                        // Pequeño delay para mejor UX
                        Timeout::new(500, move || {
                            router::navigate(target);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Error en login: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.loading = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                        schedule_hide_error(&state);
                    }
                }
            });
        })
    };

    let go_to_sign_up = Callback::from(|_| router::navigate(Route::SignUp));
    let go_to_change_password = Callback::from(|_| router::navigate(Route::ChangePassword));

    html! {
        <div class="login-screen">
            <div class="login-container">
                <div class="login-header">
                    <div class="login-logo">{"🐄"}</div>
                    <h1>{"BoviPred"}</h1>
                    <p>{"Gestión Reproductiva Bovina"}</p>
                </div>

                {
                    if state.session_expired {
                        html! {
                            <div class="banner banner-warning">
                                {"Tu sesión expiró. Vuelve a iniciar sesión."}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                {
                    if state.show_error {
                        html! {
                            <div class="banner banner-error" onclick={hide_error.clone()}>
                                {&state.error_message}
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }

                <form class="login-form" onsubmit={on_submit}>
                    <div class="form-group">
                        <label for="email">{"Email"}</label>
                        <input
                            type="email"
                            id="email"
                            placeholder="correo@ejemplo.com"
                            value={state.email.clone()}
                            oninput={on_email_change}
                            disabled={state.loading}
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">{"Contraseña"}</label>
                        <div class="password-field">
                            <input
                                type={if state.show_password { "text" } else { "password" }}
                                id="password"
                                placeholder="Ingresa tu contraseña"
                                value={state.password.clone()}
                                oninput={on_password_change}
                                disabled={state.loading}
                            />
                            <button type="button" class="btn-toggle-password" onclick={toggle_password}>
                                {if state.show_password { "🙈" } else { "👁" }}
                            </button>
                        </div>
                    </div>

                    <div class="form-group form-group-inline">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                checked={state.remember_me}
                                onchange={on_remember_change}
                            />
                            {"Recordarme"}
                        </label>
                        <button type="button" class="btn-link" onclick={go_to_change_password}>
                            {"¿Olvidaste tu contraseña?"}
                        </button>
                    </div>

                    <button type="submit" class="btn-login" disabled={state.loading}>
                        {if state.loading { "Iniciando sesión..." } else { "Iniciar Sesión" }}
                    </button>

                    <div class="login-footer">
                        <p>{"¿No tienes cuenta?"}</p>
                        <button type="button" class="btn-link" onclick={go_to_sign_up}>
                            {"Crear cuenta"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

/// Muestra el banner de error y lo oculta a los 5 segundos
fn show_error(state: &UseStateHandle<LoginState>, message: &str) {
    let mut new_state = (**state).clone();
    new_state.error_message = message.to_string();
    new_state.show_error = true;
    state.set(new_state);
    schedule_hide_error(state);
}

fn schedule_hide_error(state: &UseStateHandle<LoginState>) {
    let state = state.clone();
    Timeout::new(5000, move || {
        let mut new_state = (*state).clone();
        new_state.show_error = false;
        new_state.error_message = String::new();
        state.set(new_state);
    })
    .forget();
}

fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validacion_de_email() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("usuario.nombre@bovipred.com"));
        assert!(!is_valid_email("sin-arroba"));
        assert!(!is_valid_email("@dominio.com"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email("a@b@c.com"));
    }
}
