use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::models::ChangePasswordData;
use crate::router;
use crate::routes::Route;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq)]
struct ChangePasswordState {
    // Paso de verificación de email cuando no hay sesión
    email_step: bool,
    email: String,
    email_verified: bool,

    current_password: String,
    new_password: String,
    new_password_confirmation: String,

    show_current: bool,
    show_new: bool,
    show_confirm: bool,
    loading: bool,
    error_message: String,
    show_error: bool,
    success_message: String,
    show_success: bool,
}

impl Default for ChangePasswordState {
    fn default() -> Self {
        Self {
            email_step: true,
            email: String::new(),
            email_verified: false,
            current_password: String::new(),
            new_password: String::new(),
            new_password_confirmation: String::new(),
            show_current: false,
            show_new: false,
            show_confirm: false,
            loading: false,
            error_message: String::new(),
            show_error: false,
            success_message: String::new(),
            show_success: false,
        }
    }
}

#[function_component(ChangePasswordView)]
pub fn change_password_view() -> Html {
    let state = use_state(ChangePasswordState::default);

    // Con sesión activa no se pide verificación de email
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            if SessionStore::is_authenticated() {
                let mut new_state = (*state).clone();
                new_state.email_step = false;
                new_state.email_verified = true;
                state.set(new_state);
            }
            || ()
        });
    }

    let set_field = |field: fn(&mut ChangePasswordState, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            field(&mut new_state, input.value());
            state.set(new_state);
        })
    };

    let on_email = set_field(|s, v| s.email = v);
    let on_current = set_field(|s, v| s.current_password = v);
    let on_new = set_field(|s, v| s.new_password = v);
    let on_confirm = set_field(|s, v| s.new_password_confirmation = v);

    let toggle = |field: fn(&mut ChangePasswordState)| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            field(&mut new_state);
            state.set(new_state);
        })
    };

    let toggle_current = toggle(|s| s.show_current = !s.show_current);
    let toggle_new = toggle(|s| s.show_new = !s.show_new);
    let toggle_confirm = toggle(|s| s.show_confirm = !s.show_confirm);

    // TODO: conectar la verificación de email a un endpoint real de recuperación
    let on_verify_email = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*state).clone();

            if current.email.is_empty() || !is_valid_email(&current.email) {
                show_error(&state, "Por favor ingrese un correo electrónico válido");
                return;
            }

            let mut loading_state = current;
            loading_state.loading = true;
            state.set(loading_state);

            let state = state.clone();
            Timeout::new(1000, move || {
                let mut new_state = (*state).clone();
                new_state.loading = false;
                new_state.email_verified = true;
                new_state.email_step = false;
                new_state.success_message =
                    "Email verificado. Ahora puedes cambiar tu contraseña.".to_string();
                new_state.show_success = true;
                state.set(new_state);
            })
            .forget();
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let current = (*state).clone();

            if let Err(message) = validate_form(&current) {
                show_error(&state, &message);
                return;
            }

            let mut loading_state = current.clone();
            loading_state.loading = true;
            loading_state.show_error = false;
            loading_state.show_success = false;
            state.set(loading_state);

            let data = ChangePasswordData {
                current_password: current.current_password.clone(),
                new_password: current.new_password.clone(),
                new_password_confirmation: current.new_password_confirmation.clone(),
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::change_password(&data).await {
                    Ok(()) => {
                        log::info!("✅ Contraseña actualizada");
                        let mut new_state = ChangePasswordState {
                            email_step: false,
                            email_verified: true,
                            ..ChangePasswordState::default()
                        };
                        new_state.success_message =
                            "Contraseña actualizada correctamente. Serás redirigido en 3 segundos..."
                                .to_string();
                        new_state.show_success = true;
                        state.set(new_state);

                        Timeout::new(3000, move || {
                            router::navigate(Route::Dashboard);
                        })
                        .forget();
                    }
                    Err(e) => {
                        log::error!("❌ Error al cambiar contraseña: {}", e);
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

    let on_cancel = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            if current.email_verified && !SessionStore::is_authenticated() {
                // Volver al paso de email
                state.set(ChangePasswordState::default());
            } else {
                router::navigate(Route::Dashboard);
            }
        })
    };

    html! {
        <div class="change-password-screen">
            <div class="change-password-container">
                <h1>{"Cambiar Contraseña"}</h1>

                {
                    if state.show_error {
                        html! { <div class="banner banner-error">{&state.error_message}</div> }
                    } else {
                        html! {}
                    }
                }
                {
                    if state.show_success {
                        html! { <div class="banner banner-success">{&state.success_message}</div> }
                    } else {
                        html! {}
                    }
                }

                {
                    if state.email_step {
                        html! {
                            <form class="form" onsubmit={on_verify_email}>
                                <p>{"Ingresa tu email para verificar tu identidad"}</p>
                                <div class="form-group">
                                    <label>{"Email"}</label>
                                    <input
                                        type="email"
                                        value={state.email.clone()}
                                        oninput={on_email}
                                        disabled={state.loading}
                                    />
                                </div>
                                <button type="submit" class="btn-primary btn-block" disabled={state.loading}>
                                    {if state.loading { "Verificando..." } else { "Verificar Email" }}
                                </button>
                            </form>
                        }
                    } else {
                        html! {
                            <form class="form" onsubmit={on_submit}>
                                <div class="form-group">
                                    <label>{"Contraseña actual"}</label>
                                    <div class="password-field">
                                        <input
                                            type={if state.show_current { "text" } else { "password" }}
                                            value={state.current_password.clone()}
                                            oninput={on_current}
                                            disabled={state.loading}
                                        />
                                        <button type="button" class="btn-toggle-password" onclick={toggle_current}>
                                            {if state.show_current { "🙈" } else { "👁" }}
                                        </button>
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label>{"Nueva contraseña"}</label>
                                    <div class="password-field">
                                        <input
                                            type={if state.show_new { "text" } else { "password" }}
                                            value={state.new_password.clone()}
                                            oninput={on_new}
                                            disabled={state.loading}
                                        />
                                        <button type="button" class="btn-toggle-password" onclick={toggle_new}>
                                            {if state.show_new { "🙈" } else { "👁" }}
                                        </button>
                                    </div>
                                </div>

                                <div class="form-group">
                                    <label>{"Confirmar nueva contraseña"}</label>
                                    <div class="password-field">
                                        <input
                                            type={if state.show_confirm { "text" } else { "password" }}
                                            value={state.new_password_confirmation.clone()}
                                            oninput={on_confirm}
                                            disabled={state.loading}
                                        />
                                        <button type="button" class="btn-toggle-password" onclick={toggle_confirm}>
                                            {if state.show_confirm { "🙈" } else { "👁" }}
                                        </button>
                                    </div>
                                </div>

                                <div class="form-actions">
                                    <button type="button" class="btn-secondary" onclick={on_cancel} disabled={state.loading}>
                                        {"Cancelar"}
                                    </button>
                                    <button type="submit" class="btn-primary" disabled={state.loading}>
                                        {if state.loading { "Guardando..." } else { "Cambiar Contraseña" }}
                                    </button>
                                </div>
                            </form>
                        }
                    }
                }
            </div>
        </div>
    }
}

fn validate_form(state: &ChangePasswordState) -> Result<(), String> {
    if state.current_password.is_empty() {
        return Err("Ingrese su contraseña actual".to_string());
    }
    if state.new_password.len() < 8 {
        return Err("La nueva contraseña debe tener al menos 8 caracteres".to_string());
    }
    if !is_strong_password(&state.new_password) {
        return Err("La contraseña debe contener letras y números".to_string());
    }
    if state.new_password == state.current_password {
        return Err("La nueva contraseña debe ser diferente a la actual".to_string());
    }
    if state.new_password != state.new_password_confirmation {
        return Err("Las contraseñas no coinciden".to_string());
    }
    Ok(())
}

fn show_error(state: &UseStateHandle<ChangePasswordState>, message: &str) {
    let mut new_state = (**state).clone();
    new_state.error_message = message.to_string();
    new_state.show_error = true;
    state.set(new_state);
    schedule_hide_error(state);
}

fn schedule_hide_error(state: &UseStateHandle<ChangePasswordState>) {
    let state = state.clone();
    Timeout::new(5000, move || {
        let mut new_state = (*state).clone();
        new_state.show_error = false;
        state.set(new_state);
    })
    .forget();
}

fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
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
    fn reglas_del_cambio_de_contrasena() {
        let mut state = ChangePasswordState::default();
        assert!(validate_form(&state).is_err());

        state.current_password = "vieja123".to_string();
        state.new_password = "corta1".to_string();
        state.new_password_confirmation = "corta1".to_string();
        assert!(validate_form(&state).is_err());

        // Igual a la actual
        state.new_password = "vieja123".to_string();
        state.new_password_confirmation = "vieja123".to_string();
        assert!(validate_form(&state).is_err());

        // Confirmación distinta
        state.new_password = "nueva1234".to_string();
        state.new_password_confirmation = "nueva1235".to_string();
        assert!(validate_form(&state).is_err());

        state.new_password_confirmation = "nueva1234".to_string();
        assert!(validate_form(&state).is_ok());
    }
}
