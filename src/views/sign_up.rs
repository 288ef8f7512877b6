use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{RegisterData, Rol};
use crate::router;
use crate::routes::Route;
use crate::stores::SessionStore;

#[derive(Clone, PartialEq, Default)]
struct FieldValidation {
    invalid: bool,
    message: String,
}

#[derive(Clone, PartialEq)]
struct SignUpState {
    name: String,
    apellido: String,
    email: String,
    telefono: String,
    rol: Rol,
    password: String,
    password_confirmation: String,
    accept_terms: bool,
    show_password: bool,
    show_confirm_password: bool,
    loading: bool,
    error_message: String,
    show_error: bool,
    validations: Validations,
}

#[derive(Clone, PartialEq, Default)]
struct Validations {
    name: FieldValidation,
    apellido: FieldValidation,
    email: FieldValidation,
    password: FieldValidation,
    confirm_password: FieldValidation,
}

impl Default for SignUpState {
    fn default() -> Self {
        Self {
            name: String::new(),
            apellido: String::new(),
            email: String::new(),
            telefono: String::new(),
            rol: Rol::Asistente,
            password: String::new(),
            password_confirmation: String::new(),
            accept_terms: false,
            show_password: false,
            show_confirm_password: false,
            loading: false,
            error_message: String::new(),
            show_error: false,
            validations: Validations::default(),
        }
    }
}

#[function_component(SignUpView)]
pub fn sign_up_view() -> Html {
    let state = use_state(SignUpState::default);

    let set_field = |field: fn(&mut SignUpState, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            field(&mut new_state, input.value());
            state.set(new_state);
        })
    };

    let on_name = set_field(|s, v| s.name = v);
    let on_apellido = set_field(|s, v| s.apellido = v);
    let on_email = set_field(|s, v| s.email = v);
    let on_telefono = set_field(|s, v| s.telefono = v);
    let on_password = set_field(|s, v| s.password = v);
    let on_confirm = set_field(|s, v| s.password_confirmation = v);

    let on_rol_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.rol = match select.value().as_str() {
                "admin" => Rol::Admin,
                "veterinario" => Rol::Veterinario,
                _ => Rol::Asistente,
            };
            state.set(new_state);
        })
    };

    let on_terms_change = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.accept_terms = input.checked();
            state.set(new_state);
        })
    };

    // Validaciones en tiempo real al salir de los campos críticos
    let on_email_blur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            let mut new_state = (*state).clone();
            if !new_state.email.is_empty() {
                new_state.validations.email = validate_email(&new_state.email);
            }
            state.set(new_state);
        })
    };

    let on_password_blur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            let mut new_state = (*state).clone();
            if !new_state.password.is_empty() {
                new_state.validations.password = validate_password(&new_state.password);
            }
            state.set(new_state);
        })
    };

    let on_confirm_blur = {
        let state = state.clone();
        Callback::from(move |_: FocusEvent| {
            let mut new_state = (*state).clone();
            if !new_state.password_confirmation.is_empty() {
                new_state.validations.confirm_password =
                    validate_confirmation(&new_state.password, &new_state.password_confirmation);
            }
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

    let toggle_confirm = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_confirm_password = !new_state.show_confirm_password;
            state.set(new_state);
        })
    };

    let on_submit = {
        let state = state.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let current = (*state).clone();
            let (validations, form_ok) = validate_form(&current);

            let mut new_state = current.clone();
            new_state.validations = validations;

            if !form_ok {
                new_state.error_message =
                    "Por favor corrija los errores en el formulario".to_string();
                new_state.show_error = true;
                state.set(new_state);
                schedule_hide_error(&state);
                return;
            }

            if !current.accept_terms {
                new_state.error_message =
                    "Debes aceptar los términos y condiciones".to_string();
                new_state.show_error = true;
                state.set(new_state);
                schedule_hide_error(&state);
                return;
            }

            new_state.loading = true;
            new_state.show_error = false;
            state.set(new_state);

            let telefono = current.telefono.trim().to_string();
            let data = RegisterData {
                name: current.name.trim().to_string(),
                apellido: current.apellido.trim().to_string(),
                email: current.email.trim().to_lowercase(),
                password: current.password.clone(),
                password_confirmation: current.password_confirmation.clone(),
                rol: Some(current.rol),
                telefono: if telefono.is_empty() { None } else { Some(telefono) },
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::register(&data).await {
                    Ok(user) => {
                        log::info!("✅ Registro exitoso: {}", user.email);
                        router::set_flash("¡Registro exitoso! Bienvenido a BoviPred");
                        Timeout::new(500, move || {
                            router::navigate(Route::Dashboard);
                        })
                        .forget();
                    }
                    Err(e) => {
                        // Los 422 llegan ya aplanados por el gateway
                        log::error!("❌ Error en registro: {}", e);
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

    let go_to_login = Callback::from(|_| router::navigate(Route::Login));

    let strength = password_strength(&state.password);

    html! {
        <div class="signup-screen">
            <div class="signup-container">
                <div class="signup-header">
                    <h1>{"Crear Cuenta"}</h1>
                    <p>{"Únete a BoviPred"}</p>
                </div>

                {
                    if state.show_error {
                        html! { <div class="banner banner-error">{&state.error_message}</div> }
                    } else {
                        html! {}
                    }
                }

                <form class="signup-form" onsubmit={on_submit}>
                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Nombre"}</label>
                            <input
                                type="text"
                                value={state.name.clone()}
                                oninput={on_name}
                                disabled={state.loading}
                            />
                            { field_error(&state.validations.name) }
                        </div>
                        <div class="form-group">
                            <label>{"Apellido"}</label>
                            <input
                                type="text"
                                value={state.apellido.clone()}
                                oninput={on_apellido}
                                disabled={state.loading}
                            />
                            { field_error(&state.validations.apellido) }
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Email"}</label>
                        <input
                            type="email"
                            value={state.email.clone()}
                            oninput={on_email}
                            onblur={on_email_blur}
                            disabled={state.loading}
                        />
                        { field_error(&state.validations.email) }
                    </div>

                    <div class="form-row">
                        <div class="form-group">
                            <label>{"Teléfono (opcional)"}</label>
                            <input
                                type="tel"
                                value={state.telefono.clone()}
                                oninput={on_telefono}
                                disabled={state.loading}
                            />
                        </div>
                        <div class="form-group">
                            <label>{"Rol"}</label>
                            <select onchange={on_rol_change} disabled={state.loading}>
                                <option value="asistente" selected={state.rol == Rol::Asistente}>{"Asistente"}</option>
                                <option value="veterinario" selected={state.rol == Rol::Veterinario}>{"Veterinario"}</option>
                                <option value="admin" selected={state.rol == Rol::Admin}>{"Administrador"}</option>
                            </select>
                        </div>
                    </div>

                    <div class="form-group">
                        <label>{"Contraseña"}</label>
                        <div class="password-field">
                            <input
                                type={if state.show_password { "text" } else { "password" }}
                                value={state.password.clone()}
                                oninput={on_password}
                                onblur={on_password_blur}
                                disabled={state.loading}
                            />
                            <button type="button" class="btn-toggle-password" onclick={toggle_password}>
                                {if state.show_password { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        {
                            if !strength.is_empty() {
                                html! {
                                    <div class={classes!("password-strength", format!("strength-{}", strength))}>
                                        { strength_label(strength) }
                                    </div>
                                }
                            } else {
                                html! {}
                            }
                        }
                        { field_error(&state.validations.password) }
                    </div>

                    <div class="form-group">
                        <label>{"Confirmar contraseña"}</label>
                        <div class="password-field">
                            <input
                                type={if state.show_confirm_password { "text" } else { "password" }}
                                value={state.password_confirmation.clone()}
                                oninput={on_confirm}
                                onblur={on_confirm_blur}
                                disabled={state.loading}
                            />
                            <button type="button" class="btn-toggle-password" onclick={toggle_confirm}>
                                {if state.show_confirm_password { "🙈" } else { "👁" }}
                            </button>
                        </div>
                        { field_error(&state.validations.confirm_password) }
                    </div>

                    <div class="form-group">
                        <label class="checkbox-label">
                            <input
                                type="checkbox"
                                checked={state.accept_terms}
                                onchange={on_terms_change}
                            />
                            {"Acepto los términos y condiciones"}
                        </label>
                    </div>

                    <button type="submit" class="btn-primary btn-block" disabled={state.loading}>
                        {if state.loading { "Creando cuenta..." } else { "Crear Cuenta" }}
                    </button>

                    <div class="signup-footer">
                        <p>{"¿Ya tienes cuenta?"}</p>
                        <button type="button" class="btn-link" onclick={go_to_login}>
                            {"Iniciar sesión"}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}

fn field_error(validation: &FieldValidation) -> Html {
    if validation.invalid {
        html! { <span class="field-error">{&validation.message}</span> }
    } else {
        html! {}
    }
}

fn schedule_hide_error(state: &UseStateHandle<SignUpState>) {
    let state = state.clone();
    Timeout::new(8000, move || {
        let mut new_state = (*state).clone();
        new_state.show_error = false;
        new_state.error_message = String::new();
        state.set(new_state);
    })
    .forget();
}

// ==================== VALIDACIONES ====================

fn invalid(message: &str) -> FieldValidation {
    FieldValidation {
        invalid: true,
        message: message.to_string(),
    }
}

fn validate_name(value: &str, label: &str) -> FieldValidation {
    if value.trim().len() < 2 {
        invalid(&format!("El {} debe tener al menos 2 caracteres", label))
    } else {
        FieldValidation::default()
    }
}

fn validate_email(email: &str) -> FieldValidation {
    if is_valid_email(email) {
        FieldValidation::default()
    } else {
        invalid("Ingrese un email válido")
    }
}

fn validate_password(password: &str) -> FieldValidation {
    if password.len() < 8 {
        invalid("La contraseña debe tener al menos 8 caracteres")
    } else if !is_strong_password(password) {
        invalid("La contraseña debe contener letras y números")
    } else {
        FieldValidation::default()
    }
}

fn validate_confirmation(password: &str, confirmation: &str) -> FieldValidation {
    if password != confirmation {
        invalid("Las contraseñas no coinciden")
    } else {
        FieldValidation::default()
    }
}

fn validate_form(state: &SignUpState) -> (Validations, bool) {
    let validations = Validations {
        name: validate_name(&state.name, "nombre"),
        apellido: validate_name(&state.apellido, "apellido"),
        email: validate_email(&state.email),
        password: validate_password(&state.password),
        confirm_password: validate_confirmation(&state.password, &state.password_confirmation),
    };
    let ok = !validations.name.invalid
        && !validations.apellido.invalid
        && !validations.email.invalid
        && !validations.password.invalid
        && !validations.confirm_password.invalid;
    (validations, ok)
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

/// Al menos una letra y un número
fn is_strong_password(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_alphabetic())
        && password.chars().any(|c| c.is_ascii_digit())
}

/// "" | "weak" | "medium" | "strong" para la barra de fortaleza
fn password_strength(password: &str) -> &'static str {
    if password.is_empty() {
        return "";
    }
    if password.len() < 8 {
        return "weak";
    }
    if !is_strong_password(password) {
        return "weak";
    }
    if password.len() < 12 {
        "medium"
    } else {
        "strong"
    }
}

fn strength_label(strength: &str) -> &'static str {
    match strength {
        "weak" => "Contraseña débil",
        "medium" => "Contraseña aceptable",
        "strong" => "Contraseña fuerte",
        _ => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valida_nombres_cortos() {
        assert!(validate_name("A", "nombre").invalid);
        assert!(!validate_name("Ana", "nombre").invalid);
        assert!(validate_name("  ", "apellido").invalid);
    }

    #[test]
    fn valida_contrasenas() {
        assert!(validate_password("corta1").invalid);
        assert!(validate_password("sinnumeros").invalid);
        assert!(validate_password("12345678").invalid);
        assert!(!validate_password("segura123").invalid);
        assert!(validate_confirmation("abc12345", "abc12346").invalid);
        assert!(!validate_confirmation("abc12345", "abc12345").invalid);
    }

    #[test]
    fn fortaleza_de_contrasena() {
        assert_eq!(password_strength(""), "");
        assert_eq!(password_strength("abc1"), "weak");
        assert_eq!(password_strength("soloLetras"), "weak");
        assert_eq!(password_strength("segura123"), "medium");
        assert_eq!(password_strength("muysegura1234"), "strong");
    }

    #[test]
    fn formulario_completo() {
        let mut state = SignUpState::default();
        let (_, ok) = validate_form(&state);
        assert!(!ok);

        state.name = "Ana".to_string();
        state.apellido = "Mejía".to_string();
        state.email = "ana@bovipred.com".to_string();
        state.password = "segura123".to_string();
        state.password_confirmation = "segura123".to_string();
        let (validations, ok) = validate_form(&state);
        assert!(ok);
        assert!(!validations.email.invalid);
    }
}
