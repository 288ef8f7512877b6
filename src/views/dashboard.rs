use gloo_timers::callback::Timeout;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::hooks::use_session;
use crate::models::dashboard::bar_percentage;
use crate::models::{DashboardData, UpdateProfileData, User, UserFilters};
use crate::router;
use crate::routes::Route;
use crate::services::ReportService;
use crate::stores::SessionStore;
use crate::views::shared::{ConfirmModal, ErrorModal};

#[derive(Clone, PartialEq, Default)]
struct DashboardState {
    data: DashboardData,
    loading: bool,
    // Aviso one-shot (denegación de permisos, registro exitoso, ...)
    flash: Option<String>,

    show_logout_modal: bool,
    logging_out: bool,

    // Sidebar de perfil
    show_profile: bool,
    editing_profile: bool,
    profile_name: String,
    profile_apellido: String,
    profile_email: String,
    profile_telefono: String,
    saving_profile: bool,

    // Lista de usuarios (solo admin)
    show_users: bool,
    users: Vec<User>,
    loading_users: bool,
    selected_user: Option<User>,
    show_toggle_modal: bool,
    toggling_user: bool,

    error_message: String,
    show_error: bool,
}

#[function_component(DashboardView)]
pub fn dashboard_view() -> Html {
    let state = use_state(DashboardState::default);
    let session = use_session();

    // Carga inicial: resumen del dashboard + aviso pendiente
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut initial = (*state).clone();
            initial.loading = true;
            initial.flash = router::take_flash();
            state.set(initial);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ReportService::new().dashboard().await {
                    Ok(data) => {
                        let mut new_state = (*state).clone();
                        new_state.data = data;
                        new_state.loading = false;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.loading = false;
                        state.set(new_state);
                    }
                }
            });
            || ()
        });
    }

    let dismiss_flash = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.flash = None;
            state.set(new_state);
        })
    };

    // ==================== LOGOUT ====================

    let open_logout = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_logout_modal = true;
            state.set(new_state);
        })
    };

    let cancel_logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_logout_modal = false;
            state.set(new_state);
        })
    };

    let confirm_logout = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.logging_out = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // El logout local nunca falla aunque el backend no responda
                SessionStore::logout().await;
                let mut new_state = (*state).clone();
                new_state.logging_out = false;
                new_state.show_logout_modal = false;
                state.set(new_state);
                router::navigate(Route::Login);
            });
        })
    };

    // ==================== PERFIL ====================

    let toggle_profile = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_profile = !new_state.show_profile;
            new_state.show_users = false;
            new_state.editing_profile = false;
            if new_state.show_profile {
                if let Some(user) = &session.user {
                    new_state.profile_name = user.name.clone();
                    new_state.profile_apellido = user.apellido.clone();
                    new_state.profile_email = user.email.clone();
                    new_state.profile_telefono = user.telefono.clone().unwrap_or_default();
                }
            }
            state.set(new_state);
        })
    };

    let edit_profile = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.editing_profile = true;
            state.set(new_state);
        })
    };

    let cancel_edit_profile = {
        let state = state.clone();
        let session = session.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.editing_profile = false;
            if let Some(user) = &session.user {
                new_state.profile_name = user.name.clone();
                new_state.profile_apellido = user.apellido.clone();
                new_state.profile_email = user.email.clone();
                new_state.profile_telefono = user.telefono.clone().unwrap_or_default();
            }
            state.set(new_state);
        })
    };

    let set_profile_field = |field: fn(&mut DashboardState, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            field(&mut new_state, input.value());
            state.set(new_state);
        })
    };

    let on_profile_name = set_profile_field(|s, v| s.profile_name = v);
    let on_profile_apellido = set_profile_field(|s, v| s.profile_apellido = v);
    let on_profile_email = set_profile_field(|s, v| s.profile_email = v);
    let on_profile_telefono = set_profile_field(|s, v| s.profile_telefono = v);

    let save_profile = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let telefono = current.profile_telefono.trim().to_string();
            let data = UpdateProfileData {
                name: current.profile_name.trim().to_string(),
                apellido: current.profile_apellido.trim().to_string(),
                email: current.profile_email.trim().to_string(),
                telefono: if telefono.is_empty() { None } else { Some(telefono) },
            };

            let mut saving = current;
            saving.saving_profile = true;
            state.set(saving);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::update_profile(&data).await {
                    Ok(_) => {
                        log::info!("✅ Perfil actualizado");
                        let mut new_state = (*state).clone();
                        new_state.saving_profile = false;
                        new_state.editing_profile = false;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error al actualizar perfil: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.saving_profile = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== USUARIOS (SOLO ADMIN) ====================

    let toggle_users = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            if !SessionStore::is_admin() {
                let mut new_state = (*state).clone();
                new_state.error_message =
                    "No tienes permisos para acceder a esta sección".to_string();
                new_state.show_error = true;
                state.set(new_state);
                return;
            }
            let mut new_state = (*state).clone();
            new_state.show_users = !new_state.show_users;
            new_state.show_profile = false;
            if new_state.show_users {
                new_state.loading_users = true;
                fetch_users(&state);
            }
            state.set(new_state);
        })
    };

    let open_toggle_user = {
        let state = state.clone();
        Callback::from(move |user: User| {
            let mut new_state = (*state).clone();
            new_state.selected_user = Some(user);
            new_state.show_toggle_modal = true;
            state.set(new_state);
        })
    };

    let cancel_toggle_user = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_toggle_modal = false;
            new_state.selected_user = None;
            state.set(new_state);
        })
    };

    let confirm_toggle_user = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            let Some(user) = current.selected_user.clone() else {
                return;
            };

            let mut new_state = current;
            new_state.toggling_user = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SessionStore::toggle_user_status(user.id).await {
                    Ok(_) => {
                        log::info!("✅ Estado de usuario actualizado: {}", user.email);
                        let mut new_state = (*state).clone();
                        new_state.toggling_user = false;
                        new_state.show_toggle_modal = false;
                        new_state.selected_user = None;
                        new_state.loading_users = true;
                        fetch_users(&state);
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error al cambiar estado: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.toggling_user = false;
                        new_state.show_toggle_modal = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    let close_error = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_error = false;
            state.set(new_state);
        })
    };

    // ==================== RENDER ====================

    let resumen = state.data.resumen.clone().unwrap_or_default();
    let user_name = session
        .user
        .as_ref()
        .map(|user| user.nombre_completo())
        .unwrap_or_default();
    let is_admin = SessionStore::is_admin();

    let nav = |route: Route| Callback::from(move |_: MouseEvent| router::navigate(route));

    html! {
        <div class="dashboard-screen">
            <header class="dashboard-header">
                <div class="header-brand">
                    <span class="brand-icon">{"🐄"}</span>
                    <h1>{"BoviPred"}</h1>
                </div>
                <div class="header-actions">
                    <span class="welcome">{format!("Hola, {}", user_name)}</span>
                    <button class="btn-icon-header" onclick={toggle_profile.clone()} title="Perfil">{"👤"}</button>
                    {
                        if is_admin {
                            html! {
                                <button class="btn-icon-header" onclick={toggle_users.clone()} title="Usuarios">{"👥"}</button>
                            }
                        } else {
                            html! {}
                        }
                    }
                    <button class="btn-icon-header" onclick={open_logout} title="Cerrar sesión">{"🚪"}</button>
                </div>
            </header>

            {
                if let Some(flash) = &state.flash {
                    html! {
                        <div class="banner banner-warning" onclick={dismiss_flash}>
                            {flash}
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            {
                if state.loading {
                    html! { <div class="loading">{"Cargando estadísticas..."}</div> }
                } else {
                    html! {
                        <section class="stats-grid">
                            <div class="stat-card">
                                <div class="stat-value">{resumen.total_animales}</div>
                                <div class="stat-label">{"Animales"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{resumen.total_iatf}</div>
                                <div class="stat-label">{"Registros IATF"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{resumen.total_predicciones}</div>
                                <div class="stat-label">{"Predicciones"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{format!("{:.1}%", resumen.tasa_prenez_30_dias)}</div>
                                <div class="stat-label">{"Tasa preñez 30 días"}</div>
                            </div>
                            <div class="stat-card stat-card-warning">
                                <div class="stat-value">{resumen.pendientes_confirmacion}</div>
                                <div class="stat-label">{"Pendientes de confirmación"}</div>
                            </div>
                        </section>
                    }
                }
            }

            <section class="quick-actions">
                <button class="action-card" onclick={nav(Route::Animals)}>
                    <span>{"🐮"}</span>{"Animales"}
                </button>
                <button class="action-card" onclick={nav(Route::Iatf)}>
                    <span>{"💉"}</span>{"IATF"}
                </button>
                <button class="action-card" onclick={nav(Route::Prediction)}>
                    <span>{"🤖"}</span>{"Predicciones"}
                </button>
                <button class="action-card" onclick={nav(Route::Reports)}>
                    <span>{"📊"}</span>{"Reportes"}
                </button>
            </section>

            <section class="charts-row">
                <div class="chart-card">
                    <h3>{"Top Sementales"}</h3>
                    {
                        if state.data.top_sementales.is_empty() {
                            html! { <p class="empty">{"Sin datos"}</p> }
                        } else {
                            let max = state.data.max_semental_servicios();
                            state.data.top_sementales.iter().map(|semental| {
                                let percent = bar_percentage(semental.total_servicios, max);
                                html! {
                                    <div class="bar-row" key={semental.nombre.clone()}>
                                        <span class="bar-label">{&semental.nombre}</span>
                                        <div class="bar-track">
                                            <div class="bar-fill" style={format!("width: {:.0}%", percent)}></div>
                                        </div>
                                        <span class="bar-value">{semental.total_servicios}</span>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    }
                </div>
                <div class="chart-card">
                    <h3>{"Distribución por Grupo"}</h3>
                    {
                        if state.data.distribucion_grupos.is_empty() {
                            html! { <p class="empty">{"Sin datos"}</p> }
                        } else {
                            let max = state.data.max_grupo_total();
                            state.data.distribucion_grupos.iter().map(|grupo| {
                                let percent = bar_percentage(grupo.total, max);
                                html! {
                                    <div class="bar-row" key={grupo.nombre.clone()}>
                                        <span class="bar-label">{&grupo.nombre}</span>
                                        <div class="bar-track">
                                            <div class="bar-fill" style={format!("width: {:.0}%", percent)}></div>
                                        </div>
                                        <span class="bar-value">{grupo.total}</span>
                                    </div>
                                }
                            }).collect::<Html>()
                        }
                    }
                </div>
            </section>

            // ==================== SIDEBAR DE PERFIL ====================
            {
                if state.show_profile {
                    html! {
                        <aside class="sidebar">
                            <div class="sidebar-header">
                                <h2>{"Mi Perfil"}</h2>
                                <button class="btn-close" onclick={toggle_profile.clone()}>{"✕"}</button>
                            </div>
                            {
                                if state.editing_profile {
                                    html! {
                                        <div class="profile-form">
                                            <div class="form-group">
                                                <label>{"Nombre"}</label>
                                                <input value={state.profile_name.clone()} oninput={on_profile_name} />
                                            </div>
                                            <div class="form-group">
                                                <label>{"Apellido"}</label>
                                                <input value={state.profile_apellido.clone()} oninput={on_profile_apellido} />
                                            </div>
                                            <div class="form-group">
                                                <label>{"Email"}</label>
                                                <input type="email" value={state.profile_email.clone()} oninput={on_profile_email} />
                                            </div>
                                            <div class="form-group">
                                                <label>{"Teléfono"}</label>
                                                <input type="tel" value={state.profile_telefono.clone()} oninput={on_profile_telefono} />
                                            </div>
                                            <div class="form-actions">
                                                <button class="btn-secondary" onclick={cancel_edit_profile} disabled={state.saving_profile}>
                                                    {"Cancelar"}
                                                </button>
                                                <button class="btn-primary" onclick={save_profile} disabled={state.saving_profile}>
                                                    {if state.saving_profile { "Guardando..." } else { "Guardar" }}
                                                </button>
                                            </div>
                                        </div>
                                    }
                                } else if let Some(user) = &session.user {
                                    html! {
                                        <div class="profile-view">
                                            <p><strong>{"Nombre: "}</strong>{user.nombre_completo()}</p>
                                            <p><strong>{"Email: "}</strong>{&user.email}</p>
                                            <p><strong>{"Rol: "}</strong>{user.rol.label()}</p>
                                            <p><strong>{"Teléfono: "}</strong>{user.telefono.clone().unwrap_or_else(|| "-".to_string())}</p>
                                            <button class="btn-primary" onclick={edit_profile}>{"Editar perfil"}</button>
                                        </div>
                                    }
                                } else {
                                    html! {}
                                }
                            }
                        </aside>
                    }
                } else {
                    html! {}
                }
            }

            // ==================== LISTA DE USUARIOS ====================
            {
                if state.show_users {
                    html! {
                        <aside class="sidebar sidebar-wide">
                            <div class="sidebar-header">
                                <h2>{"Usuarios"}</h2>
                                <button class="btn-close" onclick={toggle_users.clone()}>{"✕"}</button>
                            </div>
                            {
                                if state.loading_users {
                                    html! { <div class="loading">{"Cargando usuarios..."}</div> }
                                } else {
                                    html! {
                                        <table class="data-table">
                                            <thead>
                                                <tr>
                                                    <th>{"Nombre"}</th>
                                                    <th>{"Email"}</th>
                                                    <th>{"Rol"}</th>
                                                    <th>{"Estado"}</th>
                                                    <th>{"Acciones"}</th>
                                                </tr>
                                            </thead>
                                            <tbody>
                                                {
                                                    state.users.iter().map(|user| {
                                                        let on_toggle = {
                                                            let open_toggle_user = open_toggle_user.clone();
                                                            let user = user.clone();
                                                            Callback::from(move |_: MouseEvent| open_toggle_user.emit(user.clone()))
                                                        };
                                                        html! {
                                                            <tr key={user.id}>
                                                                <td>{user.nombre_completo()}</td>
                                                                <td>{&user.email}</td>
                                                                <td>{user.rol.label()}</td>
                                                                <td>
                                                                    <span class={if user.activo { "badge badge-active" } else { "badge badge-inactive" }}>
                                                                        {if user.activo { "Activo" } else { "Inactivo" }}
                                                                    </span>
                                                                </td>
                                                                <td>
                                                                    <button class="btn-small" onclick={on_toggle}>
                                                                        {if user.activo { "Desactivar" } else { "Activar" }}
                                                                    </button>
                                                                </td>
                                                            </tr>
                                                        }
                                                    }).collect::<Html>()
                                                }
                                            </tbody>
                                        </table>
                                    }
                                }
                            }
                        </aside>
                    }
                } else {
                    html! {}
                }
            }

            <ConfirmModal
                show={state.show_logout_modal}
                title="Cerrar Sesión"
                message="¿Está seguro que desea cerrar la sesión?"
                busy={state.logging_out}
                confirm_label="Cerrar Sesión"
                on_confirm={confirm_logout}
                on_cancel={cancel_logout}
            />

            <ConfirmModal
                show={state.show_toggle_modal}
                title="Cambiar estado de usuario"
                message={
                    state.selected_user.as_ref()
                        .map(|user| format!("¿Estás seguro de cambiar el estado de {}?", user.nombre_completo()))
                        .unwrap_or_default()
                }
                busy={state.toggling_user}
                confirm_label="Cambiar"
                on_confirm={confirm_toggle_user}
                on_cancel={cancel_toggle_user}
            />

            <ErrorModal
                show={state.show_error}
                message={state.error_message.clone()}
                on_close={close_error}
            />
        </div>
    }
}

/// Listado de usuarios (solo admin); el caller marca loading_users y hace el set
fn fetch_users(state: &UseStateHandle<DashboardState>) {
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match SessionStore::list_users(&UserFilters::default()).await {
            Ok(page) => {
                let mut new_state = (*state).clone();
                new_state.users = page.data;
                new_state.loading_users = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error al cargar usuarios: {}", e);
                let mut new_state = (*state).clone();
                new_state.loading_users = false;
                new_state.error_message = e.display_message();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}
