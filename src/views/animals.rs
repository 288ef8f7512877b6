// ============================================================================
// GESTIÓN DE ANIMALES - pestañas de grupos / vacas / sementales
// ============================================================================
// Las tres secciones se cargan en paralelo al entrar y cada mutación
// refresca solo su sección. El fallo de una sección no bloquea a las otras.
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{
    Animal, AnimalEstadisticas, AnimalForm, AnimalListParams, EstadoReproductivo, Grupo,
    GrupoEstadisticas, GrupoForm, ListParams, Semental, SementalForm,
};
use crate::router;
use crate::routes::Route;
use crate::services::{AnimalService, GrupoService, SementalService};
use crate::stores::SessionStore;
use crate::utils::{format_decimal, parse_opt_f64, parse_opt_i64, parse_opt_string};
use crate::views::shared::{ConfirmModal, ErrorModal, PageHeader, Paginator, SuccessModal};

#[derive(Clone, Copy, PartialEq, Eq)]
enum Tab {
    Grupos,
    Vacas,
    Sementales,
}

#[derive(Clone, PartialEq)]
struct TabData<T: Clone + PartialEq> {
    items: Vec<T>,
    loading: bool,
    page: u32,
    total_pages: u32,
    search: String,
}

impl<T: Clone + PartialEq> Default for TabData<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            page: 1,
            total_pages: 1,
            search: String::new(),
        }
    }
}

/// Acción destructiva pendiente de confirmación
#[derive(Clone, PartialEq)]
enum PendingDelete {
    Grupo(i64),
    Animal(i64),
    Semental(i64),
}

#[derive(Clone, PartialEq)]
struct AnimalsState {
    active_tab: Tab,

    grupos: TabData<Grupo>,
    animales: TabData<Animal>,
    sementales: TabData<Semental>,

    // Filtros extra de la pestaña de vacas
    filter_estado: Option<EstadoReproductivo>,
    filter_grupo_id: Option<i64>,

    // Modales CRUD
    show_grupo_modal: bool,
    grupo_form: GrupoForm,
    selected_grupo: Option<Grupo>,

    show_animal_modal: bool,
    animal_form: AnimalForm,
    selected_animal: Option<Animal>,

    show_semental_modal: bool,
    semental_form: SementalForm,
    selected_semental: Option<Semental>,

    saving: bool,

    // Modal de estadísticas
    show_estadisticas_modal: bool,
    estadisticas_grupo: Option<GrupoEstadisticas>,
    estadisticas_animal: Option<AnimalEstadisticas>,

    // Confirmación de borrado
    show_delete_modal: bool,
    delete_title: String,
    delete_message: String,
    pending_delete: Option<PendingDelete>,
    deleting: bool,

    success_message: String,
    show_success: bool,
    error_message: String,
    show_error: bool,
}

impl Default for AnimalsState {
    fn default() -> Self {
        Self {
            active_tab: Tab::Grupos,
            grupos: TabData::default(),
            animales: TabData::default(),
            sementales: TabData::default(),
            filter_estado: None,
            filter_grupo_id: None,
            show_grupo_modal: false,
            grupo_form: GrupoForm::nuevo(),
            selected_grupo: None,
            show_animal_modal: false,
            animal_form: AnimalForm::nuevo(),
            selected_animal: None,
            show_semental_modal: false,
            semental_form: SementalForm::nuevo(),
            selected_semental: None,
            saving: false,
            show_estadisticas_modal: false,
            estadisticas_grupo: None,
            estadisticas_animal: None,
            show_delete_modal: false,
            delete_title: String::new(),
            delete_message: String::new(),
            pending_delete: None,
            deleting: false,
            success_message: String::new(),
            show_success: false,
            error_message: String::new(),
            show_error: false,
        }
    }
}

#[function_component(AnimalsView)]
pub fn animals_view() -> Html {
    let state = use_state(AnimalsState::default);

    // ==================== CARGA DE DATOS ====================

    let load_grupos = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            let mut base = (*state).clone();
            fetch_grupos(&state, &mut base, page);
            state.set(base);
        })
    };

    let load_animales = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            let mut base = (*state).clone();
            fetch_animales(&state, &mut base, page);
            state.set(base);
        })
    };

    let load_sementales = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            let mut base = (*state).clone();
            fetch_sementales(&state, &mut base, page);
            state.set(base);
        })
    };

    // Las tres secciones cargan en paralelo al entrar, con un solo set
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            let mut base = (*state).clone();
            fetch_grupos(&state, &mut base, 1);
            fetch_animales(&state, &mut base, 1);
            fetch_sementales(&state, &mut base, 1);
            state.set(base);
            || ()
        });
    }

    // ==================== PESTAÑAS, BÚSQUEDA Y FILTROS ====================

    let set_tab = |tab: Tab| {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.active_tab = tab;
            state.set(new_state);
        })
    };

    let tab_grupos = set_tab(Tab::Grupos);
    let tab_vacas = set_tab(Tab::Vacas);
    let tab_sementales = set_tab(Tab::Sementales);

    let on_search_grupos = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.grupos.search = input.value();
            state.set(new_state);
        })
    };

    let on_search_animales = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.animales.search = input.value();
            state.set(new_state);
        })
    };

    let on_search_sementales = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.sementales.search = input.value();
            state.set(new_state);
        })
    };

    let search_grupos = {
        let load_grupos = load_grupos.clone();
        Callback::from(move |_: MouseEvent| load_grupos.emit(1))
    };
    let search_animales = {
        let load_animales = load_animales.clone();
        Callback::from(move |_: MouseEvent| load_animales.emit(1))
    };
    let search_sementales = {
        let load_sementales = load_sementales.clone();
        Callback::from(move |_: MouseEvent| load_sementales.emit(1))
    };

    let on_filter_estado = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_estado = match select.value().as_str() {
                "activa" => Some(EstadoReproductivo::Activa),
                "prenada" => Some(EstadoReproductivo::Prenada),
                "seca" => Some(EstadoReproductivo::Seca),
                "descarte" => Some(EstadoReproductivo::Descarte),
                _ => None,
            };
            fetch_animales(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    let on_filter_grupo = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_grupo_id = parse_opt_i64(&select.value());
            fetch_animales(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    let clear_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.filter_estado = None;
            new_state.filter_grupo_id = None;
            fetch_animales(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    // ==================== CRUD GRUPOS ====================

    let open_create_grupo = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.selected_grupo = None;
            new_state.grupo_form = GrupoForm::nuevo();
            new_state.show_grupo_modal = true;
            state.set(new_state);
        })
    };

    let open_edit_grupo = {
        let state = state.clone();
        Callback::from(move |grupo: Grupo| {
            let mut new_state = (*state).clone();
            new_state.grupo_form = GrupoForm::from_grupo(&grupo);
            new_state.selected_grupo = Some(grupo);
            new_state.show_grupo_modal = true;
            state.set(new_state);
        })
    };

    let close_grupo_modal = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_grupo_modal = false;
            new_state.selected_grupo = None;
            new_state.grupo_form = GrupoForm::nuevo();
            state.set(new_state);
        })
    };

    let on_grupo_nombre = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.grupo_form.nombre = input.value();
            state.set(new_state);
        })
    };

    let on_grupo_descripcion = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.grupo_form.descripcion = parse_opt_string(&input.value());
            state.set(new_state);
        })
    };

    let save_grupo = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            if current.grupo_form.nombre.is_empty() {
                show_error(&state, "El nombre del grupo es requerido");
                return;
            }

            let mut new_state = current.clone();
            new_state.saving = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = GrupoService::new();
                let result = match &current.selected_grupo {
                    Some(grupo) => service.update(grupo.id, &current.grupo_form).await,
                    None => service.create(&current.grupo_form).await,
                };
                match result {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.show_grupo_modal = false;
                        new_state.selected_grupo = None;
                        new_state.success_message = if current.selected_grupo.is_some() {
                            "Grupo actualizado exitosamente".to_string()
                        } else {
                            "Grupo creado exitosamente".to_string()
                        };
                        new_state.show_success = true;
                        fetch_grupos(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando grupo: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== CRUD ANIMALES ====================

    let open_create_animal = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.selected_animal = None;
            new_state.animal_form = AnimalForm::nuevo();
            new_state.show_animal_modal = true;
            state.set(new_state);
        })
    };

    let open_edit_animal = {
        let state = state.clone();
        Callback::from(move |animal: Animal| {
            let mut new_state = (*state).clone();
            new_state.animal_form = AnimalForm::from_animal(&animal);
            new_state.selected_animal = Some(animal);
            new_state.show_animal_modal = true;
            state.set(new_state);
        })
    };

    let close_animal_modal = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_animal_modal = false;
            new_state.selected_animal = None;
            new_state.animal_form = AnimalForm::nuevo();
            state.set(new_state);
        })
    };

    let edit_animal_form = |apply: fn(&mut AnimalForm, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.animal_form, input.value());
            state.set(new_state);
        })
    };

    let on_animal_arete = edit_animal_form(|form, value| form.arete = value);
    let on_animal_edad = edit_animal_form(|form, value| form.edad_meses = parse_opt_i64(&value));
    let on_animal_peso = edit_animal_form(|form, value| form.peso_kg = parse_opt_f64(&value));
    let on_animal_condicion =
        edit_animal_form(|form, value| form.condicion_corporal = parse_opt_f64(&value));
    let on_animal_partos =
        edit_animal_form(|form, value| form.numero_partos = parse_opt_i64(&value));
    let on_animal_posparto =
        edit_animal_form(|form, value| form.dias_posparto = parse_opt_i64(&value));
    let on_animal_observaciones =
        edit_animal_form(|form, value| form.observaciones = parse_opt_string(&value));

    let on_animal_grupo = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.animal_form.grupo_id = parse_opt_i64(&select.value());
            state.set(new_state);
        })
    };

    let on_animal_estado = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.animal_form.estado_reproductivo = match select.value().as_str() {
                "activa" => Some(EstadoReproductivo::Activa),
                "prenada" => Some(EstadoReproductivo::Prenada),
                "seca" => Some(EstadoReproductivo::Seca),
                "descarte" => Some(EstadoReproductivo::Descarte),
                _ => None,
            };
            state.set(new_state);
        })
    };

    let save_animal = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            if current.animal_form.arete.is_empty() {
                show_error(&state, "El número de arete es requerido");
                return;
            }

            let mut new_state = current.clone();
            new_state.saving = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = AnimalService::new();
                let result = match &current.selected_animal {
                    Some(animal) => service.update(animal.id, &current.animal_form).await,
                    None => service.create(&current.animal_form).await,
                };
                match result {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.show_animal_modal = false;
                        new_state.selected_animal = None;
                        new_state.success_message = if current.selected_animal.is_some() {
                            "Animal actualizado exitosamente".to_string()
                        } else {
                            "Animal creado exitosamente".to_string()
                        };
                        new_state.show_success = true;
                        fetch_animales(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando animal: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== CRUD SEMENTALES ====================

    let open_create_semental = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.selected_semental = None;
            new_state.semental_form = SementalForm::nuevo();
            new_state.show_semental_modal = true;
            state.set(new_state);
        })
    };

    let open_edit_semental = {
        let state = state.clone();
        Callback::from(move |semental: Semental| {
            let mut new_state = (*state).clone();
            new_state.semental_form = SementalForm::from_semental(&semental);
            new_state.selected_semental = Some(semental);
            new_state.show_semental_modal = true;
            state.set(new_state);
        })
    };

    let close_semental_modal = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_semental_modal = false;
            new_state.selected_semental = None;
            new_state.semental_form = SementalForm::nuevo();
            state.set(new_state);
        })
    };

    let edit_semental_form = |apply: fn(&mut SementalForm, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.semental_form, input.value());
            state.set(new_state);
        })
    };

    let on_semental_nombre = edit_semental_form(|form, value| form.nombre = value);
    let on_semental_raza = edit_semental_form(|form, value| form.raza = parse_opt_string(&value));
    let on_semental_codigo =
        edit_semental_form(|form, value| form.codigo_pajilla = parse_opt_string(&value));
    let on_semental_calidad =
        edit_semental_form(|form, value| form.calidad_seminal = parse_opt_f64(&value));
    let on_semental_proveedor =
        edit_semental_form(|form, value| form.proveedor = parse_opt_string(&value));
    let on_semental_precio =
        edit_semental_form(|form, value| form.precio_pajilla = parse_opt_f64(&value));

    let save_semental = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            if current.semental_form.nombre.is_empty() {
                show_error(&state, "El nombre del semental es requerido");
                return;
            }

            let mut new_state = current.clone();
            new_state.saving = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = SementalService::new();
                let result = match &current.selected_semental {
                    Some(semental) => service.update(semental.id, &current.semental_form).await,
                    None => service.create(&current.semental_form).await,
                };
                match result {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.show_semental_modal = false;
                        new_state.selected_semental = None;
                        new_state.success_message = if current.selected_semental.is_some() {
                            "Semental actualizado exitosamente".to_string()
                        } else {
                            "Semental creado exitosamente".to_string()
                        };
                        new_state.show_success = true;
                        fetch_sementales(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando semental: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    let refresh_semental_stats = {
        let state = state.clone();
        Callback::from(move |semental: Semental| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match SementalService::new().actualizar_estadisticas(semental.id).await {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.success_message =
                            "Estadísticas actualizadas exitosamente".to_string();
                        new_state.show_success = true;
                        fetch_sementales(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando estadísticas: {}", e);
                        show_error(&state, "Error al actualizar estadísticas");
                    }
                }
            });
        })
    };

    // ==================== ESTADÍSTICAS ====================

    let view_grupo_stats = {
        let state = state.clone();
        Callback::from(move |grupo: Grupo| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match GrupoService::new().estadisticas(grupo.id).await {
                    Ok(stats) => {
                        let mut new_state = (*state).clone();
                        new_state.estadisticas_grupo = Some(stats);
                        new_state.estadisticas_animal = None;
                        new_state.show_estadisticas_modal = true;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        show_error(&state, "Error al cargar estadísticas");
                    }
                }
            });
        })
    };

    let view_animal_stats = {
        let state = state.clone();
        Callback::from(move |animal: Animal| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AnimalService::new().estadisticas(animal.id).await {
                    Ok(stats) => {
                        let mut new_state = (*state).clone();
                        new_state.estadisticas_animal = Some(stats);
                        new_state.estadisticas_grupo = None;
                        new_state.show_estadisticas_modal = true;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando estadísticas: {}", e);
                        show_error(&state, "Error al cargar estadísticas");
                    }
                }
            });
        })
    };

    let close_estadisticas = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_estadisticas_modal = false;
            new_state.estadisticas_grupo = None;
            new_state.estadisticas_animal = None;
            state.set(new_state);
        })
    };

    // ==================== BORRADO ====================

    let request_delete = {
        let state = state.clone();
        Callback::from(move |(pending, title, message): (PendingDelete, String, String)| {
            let mut new_state = (*state).clone();
            new_state.pending_delete = Some(pending);
            new_state.delete_title = title;
            new_state.delete_message = message;
            new_state.show_delete_modal = true;
            state.set(new_state);
        })
    };

    let cancel_delete = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_delete_modal = false;
            new_state.pending_delete = None;
            state.set(new_state);
        })
    };

    let confirm_delete = {
        let state = state.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            let Some(pending) = current.pending_delete.clone() else {
                return;
            };

            let mut new_state = current;
            new_state.deleting = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let (result, success_message) = match pending {
                    PendingDelete::Grupo(id) => (
                        GrupoService::new().delete(id).await,
                        "Grupo eliminado exitosamente",
                    ),
                    PendingDelete::Animal(id) => (
                        AnimalService::new().delete(id).await,
                        "Animal eliminado exitosamente",
                    ),
                    PendingDelete::Semental(id) => (
                        SementalService::new().delete(id).await,
                        "Semental eliminado exitosamente",
                    ),
                };

                match result {
                    Ok(()) => {
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.success_message = success_message.to_string();
                        new_state.show_success = true;
                        match new_state.pending_delete.take() {
                            Some(PendingDelete::Grupo(_)) => {
                                fetch_grupos(&state, &mut new_state, 1)
                            }
                            Some(PendingDelete::Animal(_)) => {
                                fetch_animales(&state, &mut new_state, 1)
                            }
                            Some(PendingDelete::Semental(_)) | None => {
                                fetch_sementales(&state, &mut new_state, 1)
                            }
                        }
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.pending_delete = None;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== BANNERS ====================

    let close_success = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_success = false;
            state.set(new_state);
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

    let on_back = Callback::from(|_| router::navigate(Route::Dashboard));
    let can_edit = SessionStore::can_edit();

    html! {
        <div class="animals-screen">
            <PageHeader title="Gestión de Animales" on_back={on_back} />

            <nav class="tabs">
                <button
                    class={classes!("tab", (state.active_tab == Tab::Grupos).then_some("tab-active"))}
                    onclick={tab_grupos}
                >
                    {"Grupos"}
                </button>
                <button
                    class={classes!("tab", (state.active_tab == Tab::Vacas).then_some("tab-active"))}
                    onclick={tab_vacas}
                >
                    {"Vacas"}
                </button>
                <button
                    class={classes!("tab", (state.active_tab == Tab::Sementales).then_some("tab-active"))}
                    onclick={tab_sementales}
                >
                    {"Sementales"}
                </button>
            </nav>

            {
                match state.active_tab {
                    Tab::Grupos => render_grupos_tab(
                        &state, can_edit, on_search_grupos, search_grupos, open_create_grupo,
                        open_edit_grupo, view_grupo_stats, request_delete.clone(), load_grupos,
                    ),
                    Tab::Vacas => render_vacas_tab(
                        &state, can_edit, on_search_animales, search_animales, on_filter_estado,
                        on_filter_grupo, clear_filters, open_create_animal, open_edit_animal,
                        view_animal_stats, request_delete.clone(), load_animales,
                    ),
                    Tab::Sementales => render_sementales_tab(
                        &state, can_edit, on_search_sementales, search_sementales,
                        open_create_semental, open_edit_semental, refresh_semental_stats,
                        request_delete, load_sementales,
                    ),
                }
            }

            { render_grupo_modal(&state, on_grupo_nombre, on_grupo_descripcion, save_grupo, close_grupo_modal) }
            {
                render_animal_modal(
                    &state, on_animal_arete, on_animal_grupo, on_animal_edad, on_animal_peso,
                    on_animal_condicion, on_animal_partos, on_animal_posparto, on_animal_estado,
                    on_animal_observaciones, save_animal, close_animal_modal,
                )
            }
            {
                render_semental_modal(
                    &state, on_semental_nombre, on_semental_raza, on_semental_codigo,
                    on_semental_calidad, on_semental_proveedor, on_semental_precio,
                    save_semental, close_semental_modal,
                )
            }
            { render_estadisticas_modal(&state, close_estadisticas) }

            <ConfirmModal
                show={state.show_delete_modal}
                title={state.delete_title.clone()}
                message={state.delete_message.clone()}
                busy={state.deleting}
                confirm_label="Eliminar"
                on_confirm={confirm_delete}
                on_cancel={cancel_delete}
            />
            <SuccessModal
                show={state.show_success}
                message={state.success_message.clone()}
                on_close={close_success}
            />
            <ErrorModal
                show={state.show_error}
                message={state.error_message.clone()}
                on_close={close_error}
            />
        </div>
    }
}

// ==================== HELPERS DE ESTADO ====================

/// Auto cierre del banner de éxito después de 3 segundos
fn schedule_success_hide(state: &UseStateHandle<AnimalsState>) {
    let state = state.clone();
    Timeout::new(3000, move || {
        let mut new_state = (*state).clone();
        new_state.show_success = false;
        state.set(new_state);
    })
    .forget();
}

fn show_error(state: &UseStateHandle<AnimalsState>, message: &str) {
    let mut new_state = (**state).clone();
    new_state.error_message = message.to_string();
    new_state.show_error = true;
    state.set(new_state);
}

// ==================== FETCH POR SECCIÓN ====================
// Cada fetch parte del estado ya actualizado por el caller (filtros, modales)
// y marca el loading de SU sección; el caller hace un único set síncrono.

fn fetch_grupos(state: &UseStateHandle<AnimalsState>, base: &mut AnimalsState, page: u32) {
    base.grupos.loading = true;
    let params = ListParams {
        activo: Some(true),
        search: parse_opt_string(&base.grupos.search),
        page: Some(page),
    };

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match GrupoService::new().list(&params).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.grupos.items = result.data;
                new_state.grupos.page = result.current_page;
                new_state.grupos.total_pages = result.last_page;
                new_state.grupos.loading = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando grupos: {}", e);
                let mut new_state = (*state).clone();
                new_state.grupos.loading = false;
                new_state.error_message = "Error al cargar los grupos".to_string();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}

fn fetch_animales(state: &UseStateHandle<AnimalsState>, base: &mut AnimalsState, page: u32) {
    base.animales.loading = true;
    let params = AnimalListParams {
        activo: Some(true),
        grupo_id: base.filter_grupo_id,
        estado_reproductivo: base.filter_estado,
        search: parse_opt_string(&base.animales.search),
        page: Some(page),
        ..Default::default()
    };

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match AnimalService::new().list(&params).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.animales.items = result.data;
                new_state.animales.page = result.current_page;
                new_state.animales.total_pages = result.last_page;
                new_state.animales.loading = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando animales: {}", e);
                let mut new_state = (*state).clone();
                new_state.animales.loading = false;
                new_state.error_message = "Error al cargar los animales".to_string();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}

fn fetch_sementales(state: &UseStateHandle<AnimalsState>, base: &mut AnimalsState, page: u32) {
    base.sementales.loading = true;
    let params = ListParams {
        activo: Some(true),
        search: parse_opt_string(&base.sementales.search),
        page: Some(page),
    };

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match SementalService::new().list(&params).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.sementales.items = result.data;
                new_state.sementales.page = result.current_page;
                new_state.sementales.total_pages = result.last_page;
                new_state.sementales.loading = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando sementales: {}", e);
                let mut new_state = (*state).clone();
                new_state.sementales.loading = false;
                new_state.error_message = "Error al cargar los sementales".to_string();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}

// ==================== RENDER DE PESTAÑAS ====================

#[allow(clippy::too_many_arguments)]
fn render_grupos_tab(
    state: &AnimalsState,
    can_edit: bool,
    on_search: Callback<InputEvent>,
    search: Callback<MouseEvent>,
    open_create: Callback<MouseEvent>,
    open_edit: Callback<Grupo>,
    view_stats: Callback<Grupo>,
    request_delete: Callback<(PendingDelete, String, String)>,
    load: Callback<u32>,
) -> Html {
    let tab = &state.grupos;
    let prev = {
        let load = load.clone();
        let page = tab.page;
        Callback::from(move |_| {
            if page > 1 {
                load.emit(page - 1);
            }
        })
    };
    let next = {
        let load = load.clone();
        let page = tab.page;
        let total = tab.total_pages;
        Callback::from(move |_| {
            if page < total {
                load.emit(page + 1);
            }
        })
    };

    html! {
        <section class="tab-content">
            <div class="toolbar">
                <input
                    class="search-input"
                    placeholder="Buscar grupos..."
                    value={tab.search.clone()}
                    oninput={on_search}
                />
                <button class="btn-secondary" onclick={search}>{"Buscar"}</button>
                {
                    if can_edit {
                        html! { <button class="btn-primary" onclick={open_create}>{"+ Nuevo Grupo"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if tab.loading {
                    html! { <div class="loading">{"Cargando grupos..."}</div> }
                } else if tab.items.is_empty() {
                    html! { <p class="empty">{"No hay grupos registrados"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nombre"}</th>
                                    <th>{"Descripción"}</th>
                                    <th>{"Animales"}</th>
                                    <th>{"Acciones"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    tab.items.iter().map(|grupo| {
                                        let on_edit = {
                                            let open_edit = open_edit.clone();
                                            let grupo = grupo.clone();
                                            Callback::from(move |_: MouseEvent| open_edit.emit(grupo.clone()))
                                        };
                                        let on_stats = {
                                            let view_stats = view_stats.clone();
                                            let grupo = grupo.clone();
                                            Callback::from(move |_: MouseEvent| view_stats.emit(grupo.clone()))
                                        };
                                        let on_delete = {
                                            let request_delete = request_delete.clone();
                                            let grupo = grupo.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                request_delete.emit((
                                                    PendingDelete::Grupo(grupo.id),
                                                    "Eliminar Grupo".to_string(),
                                                    format!(
                                                        "¿Está seguro que desea eliminar el grupo \"{}\"? Esta acción no se puede deshacer.",
                                                        grupo.nombre
                                                    ),
                                                ));
                                            })
                                        };
                                        html! {
                                            <tr key={grupo.id}>
                                                <td>{&grupo.nombre}</td>
                                                <td>{grupo.descripcion.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{grupo.animals_count.unwrap_or(0)}</td>
                                                <td class="actions">
                                                    <button class="btn-small" onclick={on_stats}>{"📊"}</button>
                                                    {
                                                        if can_edit {
                                                            html! {
                                                                <>
                                                                    <button class="btn-small" onclick={on_edit}>{"✏️"}</button>
                                                                    <button class="btn-small btn-small-danger" onclick={on_delete}>{"🗑️"}</button>
                                                                </>
                                                            }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
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

            <Paginator
                current_page={tab.page}
                total_pages={tab.total_pages}
                on_prev={prev}
                on_next={next}
            />
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_vacas_tab(
    state: &AnimalsState,
    can_edit: bool,
    on_search: Callback<InputEvent>,
    search: Callback<MouseEvent>,
    on_filter_estado: Callback<Event>,
    on_filter_grupo: Callback<Event>,
    clear_filters: Callback<MouseEvent>,
    open_create: Callback<MouseEvent>,
    open_edit: Callback<Animal>,
    view_stats: Callback<Animal>,
    request_delete: Callback<(PendingDelete, String, String)>,
    load: Callback<u32>,
) -> Html {
    let tab = &state.animales;
    let prev = {
        let load = load.clone();
        let page = tab.page;
        Callback::from(move |_| {
            if page > 1 {
                load.emit(page - 1);
            }
        })
    };
    let next = {
        let load = load.clone();
        let page = tab.page;
        let total = tab.total_pages;
        Callback::from(move |_| {
            if page < total {
                load.emit(page + 1);
            }
        })
    };

    html! {
        <section class="tab-content">
            <div class="toolbar">
                <input
                    class="search-input"
                    placeholder="Buscar por arete..."
                    value={tab.search.clone()}
                    oninput={on_search}
                />
                <button class="btn-secondary" onclick={search}>{"Buscar"}</button>
                <select onchange={on_filter_estado}>
                    <option value="" selected={state.filter_estado.is_none()}>{"Todos los estados"}</option>
                    {
                        EstadoReproductivo::ALL.iter().map(|estado| {
                            html! {
                                <option
                                    value={estado.as_str()}
                                    selected={state.filter_estado == Some(*estado)}
                                >
                                    {estado.label()}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <select onchange={on_filter_grupo}>
                    <option value="" selected={state.filter_grupo_id.is_none()}>{"Todos los grupos"}</option>
                    {
                        state.grupos.items.iter().map(|grupo| {
                            html! {
                                <option
                                    value={grupo.id.to_string()}
                                    selected={state.filter_grupo_id == Some(grupo.id)}
                                >
                                    {&grupo.nombre}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <button class="btn-link" onclick={clear_filters}>{"Limpiar filtros"}</button>
                {
                    if can_edit {
                        html! { <button class="btn-primary" onclick={open_create}>{"+ Nueva Vaca"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if tab.loading {
                    html! { <div class="loading">{"Cargando animales..."}</div> }
                } else if tab.items.is_empty() {
                    html! { <p class="empty">{"No hay animales registrados"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Arete"}</th>
                                    <th>{"Grupo"}</th>
                                    <th>{"Edad (meses)"}</th>
                                    <th>{"Peso (kg)"}</th>
                                    <th>{"CC"}</th>
                                    <th>{"Estado"}</th>
                                    <th>{"Acciones"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    tab.items.iter().map(|animal| {
                                        let on_edit = {
                                            let open_edit = open_edit.clone();
                                            let animal = animal.clone();
                                            Callback::from(move |_: MouseEvent| open_edit.emit(animal.clone()))
                                        };
                                        let on_stats = {
                                            let view_stats = view_stats.clone();
                                            let animal = animal.clone();
                                            Callback::from(move |_: MouseEvent| view_stats.emit(animal.clone()))
                                        };
                                        let on_delete = {
                                            let request_delete = request_delete.clone();
                                            let animal = animal.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                request_delete.emit((
                                                    PendingDelete::Animal(animal.id),
                                                    "Eliminar Animal".to_string(),
                                                    format!(
                                                        "¿Está seguro que desea eliminar el animal con arete \"{}\"? Esta acción no se puede deshacer.",
                                                        animal.arete
                                                    ),
                                                ));
                                            })
                                        };
                                        html! {
                                            <tr key={animal.id}>
                                                <td>{&animal.arete}</td>
                                                <td>{animal.grupo.as_ref().map(|g| g.nombre.clone()).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{animal.edad_meses.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{animal.peso_kg.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{animal.condicion_corporal.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string())}</td>
                                                <td>
                                                    {
                                                        match animal.estado_reproductivo {
                                                            Some(estado) => html! {
                                                                <span class={classes!("badge", estado.badge_class())}>
                                                                    {estado.label()}
                                                                </span>
                                                            },
                                                            None => html! { {"-"} },
                                                        }
                                                    }
                                                </td>
                                                <td class="actions">
                                                    <button class="btn-small" onclick={on_stats}>{"📊"}</button>
                                                    {
                                                        if can_edit {
                                                            html! {
                                                                <>
                                                                    <button class="btn-small" onclick={on_edit}>{"✏️"}</button>
                                                                    <button class="btn-small btn-small-danger" onclick={on_delete}>{"🗑️"}</button>
                                                                </>
                                                            }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
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

            <Paginator
                current_page={tab.page}
                total_pages={tab.total_pages}
                on_prev={prev}
                on_next={next}
            />
        </section>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_sementales_tab(
    state: &AnimalsState,
    can_edit: bool,
    on_search: Callback<InputEvent>,
    search: Callback<MouseEvent>,
    open_create: Callback<MouseEvent>,
    open_edit: Callback<Semental>,
    refresh_stats: Callback<Semental>,
    request_delete: Callback<(PendingDelete, String, String)>,
    load: Callback<u32>,
) -> Html {
    let tab = &state.sementales;
    let prev = {
        let load = load.clone();
        let page = tab.page;
        Callback::from(move |_| {
            if page > 1 {
                load.emit(page - 1);
            }
        })
    };
    let next = {
        let load = load.clone();
        let page = tab.page;
        let total = tab.total_pages;
        Callback::from(move |_| {
            if page < total {
                load.emit(page + 1);
            }
        })
    };

    html! {
        <section class="tab-content">
            <div class="toolbar">
                <input
                    class="search-input"
                    placeholder="Buscar sementales..."
                    value={tab.search.clone()}
                    oninput={on_search}
                />
                <button class="btn-secondary" onclick={search}>{"Buscar"}</button>
                {
                    if can_edit {
                        html! { <button class="btn-primary" onclick={open_create}>{"+ Nuevo Semental"}</button> }
                    } else {
                        html! {}
                    }
                }
            </div>

            {
                if tab.loading {
                    html! { <div class="loading">{"Cargando sementales..."}</div> }
                } else if tab.items.is_empty() {
                    html! { <p class="empty">{"No hay sementales registrados"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Nombre"}</th>
                                    <th>{"Raza"}</th>
                                    <th>{"Código pajilla"}</th>
                                    <th>{"Servicios"}</th>
                                    <th>{"Tasa preñez"}</th>
                                    <th>{"Acciones"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    tab.items.iter().map(|semental| {
                                        let on_edit = {
                                            let open_edit = open_edit.clone();
                                            let semental = semental.clone();
                                            Callback::from(move |_: MouseEvent| open_edit.emit(semental.clone()))
                                        };
                                        let on_refresh = {
                                            let refresh_stats = refresh_stats.clone();
                                            let semental = semental.clone();
                                            Callback::from(move |_: MouseEvent| refresh_stats.emit(semental.clone()))
                                        };
                                        let on_delete = {
                                            let request_delete = request_delete.clone();
                                            let semental = semental.clone();
                                            Callback::from(move |_: MouseEvent| {
                                                request_delete.emit((
                                                    PendingDelete::Semental(semental.id),
                                                    "Eliminar Semental".to_string(),
                                                    format!(
                                                        "¿Está seguro que desea eliminar el semental \"{}\"? Esta acción no se puede deshacer.",
                                                        semental.nombre
                                                    ),
                                                ));
                                            })
                                        };
                                        html! {
                                            <tr key={semental.id}>
                                                <td>{&semental.nombre}</td>
                                                <td>{semental.raza.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{semental.codigo_pajilla.clone().unwrap_or_else(|| "-".to_string())}</td>
                                                <td>{semental.total_servicios.unwrap_or(0)}</td>
                                                <td>{format_decimal(semental.tasa_historica_prenez)}</td>
                                                <td class="actions">
                                                    <button class="btn-small" onclick={on_refresh} title="Recalcular estadísticas">{"🔄"}</button>
                                                    {
                                                        if can_edit {
                                                            html! {
                                                                <>
                                                                    <button class="btn-small" onclick={on_edit}>{"✏️"}</button>
                                                                    <button class="btn-small btn-small-danger" onclick={on_delete}>{"🗑️"}</button>
                                                                </>
                                                            }
                                                        } else {
                                                            html! {}
                                                        }
                                                    }
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

            <Paginator
                current_page={tab.page}
                total_pages={tab.total_pages}
                on_prev={prev}
                on_next={next}
            />
        </section>
    }
}

// ==================== MODALES ====================

fn render_grupo_modal(
    state: &AnimalsState,
    on_nombre: Callback<InputEvent>,
    on_descripcion: Callback<InputEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_grupo_modal {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{if state.selected_grupo.is_some() { "Editar Grupo" } else { "Nuevo Grupo" }}</h2>
                <div class="form-group">
                    <label>{"Nombre"}</label>
                    <input value={state.grupo_form.nombre.clone()} oninput={on_nombre} />
                </div>
                <div class="form-group">
                    <label>{"Descripción"}</label>
                    <textarea
                        value={state.grupo_form.descripcion.clone().unwrap_or_default()}
                        oninput={on_descripcion}
                    />
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.saving}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={save} disabled={state.saving}>
                        {if state.saving { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_animal_modal(
    state: &AnimalsState,
    on_arete: Callback<InputEvent>,
    on_grupo: Callback<Event>,
    on_edad: Callback<InputEvent>,
    on_peso: Callback<InputEvent>,
    on_condicion: Callback<InputEvent>,
    on_partos: Callback<InputEvent>,
    on_posparto: Callback<InputEvent>,
    on_estado: Callback<Event>,
    on_observaciones: Callback<InputEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_animal_modal {
        return html! {};
    }

    let form = &state.animal_form;

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                <h2>{if state.selected_animal.is_some() { "Editar Animal" } else { "Nuevo Animal" }}</h2>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Arete"}</label>
                        <input value={form.arete.clone()} oninput={on_arete} />
                    </div>
                    <div class="form-group">
                        <label>{"Grupo"}</label>
                        <select onchange={on_grupo}>
                            <option value="" selected={form.grupo_id.is_none()}>{"Sin grupo"}</option>
                            {
                                state.grupos.items.iter().map(|grupo| {
                                    html! {
                                        <option
                                            value={grupo.id.to_string()}
                                            selected={form.grupo_id == Some(grupo.id)}
                                        >
                                            {&grupo.nombre}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Edad (meses)"}</label>
                        <input
                            type="number"
                            value={form.edad_meses.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_edad}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Peso (kg)"}</label>
                        <input
                            type="number"
                            step="0.1"
                            value={form.peso_kg.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_peso}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Condición corporal (1-5)"}</label>
                        <input
                            type="number"
                            step="0.5"
                            value={form.condicion_corporal.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_condicion}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Número de partos"}</label>
                        <input
                            type="number"
                            value={form.numero_partos.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_partos}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Días posparto"}</label>
                        <input
                            type="number"
                            value={form.dias_posparto.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_posparto}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Estado reproductivo"}</label>
                        <select onchange={on_estado}>
                            <option value="" selected={form.estado_reproductivo.is_none()}>{"Sin evaluar"}</option>
                            {
                                EstadoReproductivo::ALL.iter().map(|estado| {
                                    html! {
                                        <option
                                            value={estado.as_str()}
                                            selected={form.estado_reproductivo == Some(*estado)}
                                        >
                                            {estado.label()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
                <div class="form-group">
                    <label>{"Observaciones"}</label>
                    <input
                        value={form.observaciones.clone().unwrap_or_default()}
                        oninput={on_observaciones}
                    />
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.saving}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={save} disabled={state.saving}>
                        {if state.saving { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[allow(clippy::too_many_arguments)]
fn render_semental_modal(
    state: &AnimalsState,
    on_nombre: Callback<InputEvent>,
    on_raza: Callback<InputEvent>,
    on_codigo: Callback<InputEvent>,
    on_calidad: Callback<InputEvent>,
    on_proveedor: Callback<InputEvent>,
    on_precio: Callback<InputEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_semental_modal {
        return html! {};
    }

    let form = &state.semental_form;

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                <h2>{if state.selected_semental.is_some() { "Editar Semental" } else { "Nuevo Semental" }}</h2>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Nombre"}</label>
                        <input value={form.nombre.clone()} oninput={on_nombre} />
                    </div>
                    <div class="form-group">
                        <label>{"Raza"}</label>
                        <input value={form.raza.clone().unwrap_or_default()} oninput={on_raza} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Código de pajilla"}</label>
                        <input value={form.codigo_pajilla.clone().unwrap_or_default()} oninput={on_codigo} />
                    </div>
                    <div class="form-group">
                        <label>{"Calidad seminal (%)"}</label>
                        <input
                            type="number"
                            step="0.1"
                            value={form.calidad_seminal.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_calidad}
                        />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Proveedor"}</label>
                        <input value={form.proveedor.clone().unwrap_or_default()} oninput={on_proveedor} />
                    </div>
                    <div class="form-group">
                        <label>{"Precio pajilla"}</label>
                        <input
                            type="number"
                            step="0.01"
                            value={form.precio_pajilla.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={on_precio}
                        />
                    </div>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.saving}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={save} disabled={state.saving}>
                        {if state.saving { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_estadisticas_modal(state: &AnimalsState, close: Callback<MouseEvent>) -> Html {
    if !state.show_estadisticas_modal {
        return html! {};
    }

    let body = if let Some(stats) = &state.estadisticas_grupo {
        html! {
            <>
                <h2>{format!("Estadísticas: {}", stats.grupo.nombre)}</h2>
                <ul class="stats-list">
                    <li>{format!("Total de animales: {}", stats.estadisticas.total_animales)}</li>
                    <li>{format!("Animales activos: {}", stats.estadisticas.animales_activos)}</li>
                    <li>{format!("Total IATF: {}", stats.estadisticas.total_iatf)}</li>
                    <li>{format!("Preñeces confirmadas: {}", stats.estadisticas.preneces_confirmadas)}</li>
                    <li>{format!("Tasa de preñez: {:.1}%", stats.estadisticas.tasa_prenez)}</li>
                </ul>
                {
                    if stats.estadisticas.estados_reproductivos.is_empty() {
                        html! {}
                    } else {
                        html! {
                            <>
                                <h3>{"Estados reproductivos"}</h3>
                                <ul class="stats-list">
                                    {
                                        stats.estadisticas.estados_reproductivos.iter().map(|(estado, total)| {
                                            html! { <li key={estado.clone()}>{format!("{}: {}", estado, total)}</li> }
                                        }).collect::<Html>()
                                    }
                                </ul>
                            </>
                        }
                    }
                }
            </>
        }
    } else if let Some(stats) = &state.estadisticas_animal {
        html! {
            <>
                <h2>{format!("Estadísticas: arete {}", stats.animal.arete)}</h2>
                <ul class="stats-list">
                    <li>{format!("Total IATF: {}", stats.estadisticas.total_iatf)}</li>
                    <li>{format!("Preñeces confirmadas: {}", stats.estadisticas.preneces_confirmadas)}</li>
                    <li>{format!("Muertes embrionarias: {}", stats.estadisticas.muertes_embrionarias)}</li>
                    <li>{format!("Tasa de preñez: {:.1}%", stats.estadisticas.tasa_prenez)}</li>
                </ul>
            </>
        }
    } else {
        html! {}
    };

    html! {
        <div class="modal-overlay">
            <div class="modal">
                { body }
                <div class="modal-actions">
                    <button class="btn-primary" onclick={close}>{"Cerrar"}</button>
                </div>
            </div>
        </div>
    }
}
