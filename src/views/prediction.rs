// ============================================================================
// PREDICCIONES - listado, creación y validación contra el resultado real
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::{
    IatfFilters, IatfRecord, NivelConfianza, Prediction, PredictionFilters, PredictionStats,
};
use crate::models::prediction::feature_label;
use crate::router;
use crate::routes::Route;
use crate::services::{IatfService, PredictionService};
use crate::stores::SessionStore;
use crate::utils::{format_date, format_metric, format_probability};
use crate::views::shared::{ErrorModal, PageHeader, Paginator, SuccessModal};

#[derive(Clone, PartialEq)]
struct PredictionState {
    predictions: Vec<Prediction>,
    loading: bool,
    page: u32,
    total_pages: u32,
    total_records: u64,

    // Registros IATF sin predicción, para el modal de creación
    iatf_records: Vec<IatfRecord>,
    stats: Option<PredictionStats>,

    filter_nivel: Option<NivelConfianza>,
    filter_validadas: Option<bool>,

    show_create_modal: bool,
    create_iatf_id: Option<i64>,
    creating: bool,

    show_resultado_modal: bool,
    resultado_real: bool,
    fecha_verificacion: String,
    updating: bool,

    show_detail_modal: bool,
    selected: Option<Prediction>,

    success_message: String,
    show_success: bool,
    error_message: String,
    show_error: bool,
}

impl Default for PredictionState {
    fn default() -> Self {
        Self {
            predictions: Vec::new(),
            loading: false,
            page: 1,
            total_pages: 1,
            total_records: 0,
            iatf_records: Vec::new(),
            stats: None,
            filter_nivel: None,
            filter_validadas: None,
            show_create_modal: false,
            create_iatf_id: None,
            creating: false,
            show_resultado_modal: false,
            resultado_real: true,
            fecha_verificacion: String::new(),
            updating: false,
            show_detail_modal: false,
            selected: None,
            success_message: String::new(),
            show_success: false,
            error_message: String::new(),
            show_error: false,
        }
    }
}

#[function_component(PredictionView)]
pub fn prediction_view() -> Html {
    let state = use_state(PredictionState::default);

    // Carga inicial: listado, registros disponibles y estadísticas en paralelo
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            fetch_predictions(&state, (*state).clone(), 1);
            fetch_iatf_disponibles(&state);
            fetch_stats(&state);
            || ()
        });
    }

    // ==================== FILTROS ====================

    let on_filter_nivel = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_nivel = match select.value().as_str() {
                "alto" => Some(NivelConfianza::Alto),
                "medio" => Some(NivelConfianza::Medio),
                "bajo" => Some(NivelConfianza::Bajo),
                _ => None,
            };
            fetch_predictions(&state, new_state, 1);
        })
    };

    let on_filter_validadas = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_validadas = match select.value().as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            };
            fetch_predictions(&state, new_state, 1);
        })
    };

    let clear_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.filter_nivel = None;
            new_state.filter_validadas = None;
            fetch_predictions(&state, new_state, 1);
        })
    };

    // ==================== CREAR PREDICCIÓN ====================

    let open_create = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            if current.iatf_records.is_empty() {
                show_error(
                    &state,
                    "No hay registros IATF disponibles para predicción. Primero debe crear un registro IATF.",
                );
                return;
            }
            let mut new_state = current;
            new_state.create_iatf_id = None;
            new_state.show_create_modal = true;
            state.set(new_state);
        })
    };

    let close_create = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_create_modal = false;
            state.set(new_state);
        })
    };

    let on_create_select = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.create_iatf_id = select.value().parse().ok();
            state.set(new_state);
        })
    };

    let create_prediction = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let Some(iatf_id) = current.create_iatf_id else {
                show_error(&state, "Debe seleccionar un registro IATF");
                return;
            };

            let mut new_state = current;
            new_state.creating = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match PredictionService::new().create(iatf_id).await {
                    Ok(prediction) => {
                        log::info!(
                            "🤖 Predicción generada: {:.1}% de probabilidad",
                            prediction.probabilidad_prenez * 100.0
                        );
                        // Refrescar listado, registros sin predicción y estadísticas
                        let mut new_state = (*state).clone();
                        new_state.creating = false;
                        new_state.show_create_modal = false;
                        new_state.success_message =
                            "Predicción realizada exitosamente".to_string();
                        new_state.show_success = true;
                        fetch_predictions(&state, new_state, 1);
                        fetch_iatf_disponibles(&state);
                        fetch_stats(&state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error realizando predicción: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.creating = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== RESULTADO REAL ====================

    let open_resultado = {
        let state = state.clone();
        Callback::from(move |prediction: Prediction| {
            let mut new_state = (*state).clone();
            new_state.resultado_real = prediction.resultado_real.unwrap_or(true);
            new_state.fecha_verificacion = prediction
                .fecha_verificacion
                .clone()
                .unwrap_or_else(crate::utils::today_iso);
            new_state.selected = Some(prediction);
            new_state.show_resultado_modal = true;
            state.set(new_state);
        })
    };

    let close_resultado = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_resultado_modal = false;
            new_state.selected = None;
            state.set(new_state);
        })
    };

    let on_resultado_select = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.resultado_real = select.value() == "true";
            state.set(new_state);
        })
    };

    let on_fecha_verificacion = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.fecha_verificacion = input.value();
            state.set(new_state);
        })
    };

    let save_resultado = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let Some(prediction) = current.selected.clone() else {
                return;
            };

            let mut new_state = current.clone();
            new_state.updating = true;
            state.set(new_state);

            let resultado_real = current.resultado_real;
            let fecha = if current.fecha_verificacion.is_empty() {
                None
            } else {
                Some(current.fecha_verificacion.clone())
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match PredictionService::new()
                    .update_resultado_real(prediction.id, resultado_real, fecha)
                    .await
                {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.updating = false;
                        new_state.show_resultado_modal = false;
                        new_state.selected = None;
                        new_state.success_message =
                            "Resultado actualizado exitosamente".to_string();
                        new_state.show_success = true;
                        fetch_predictions(&state, new_state, 1);
                        fetch_stats(&state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error actualizando resultado: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.updating = false;
                        new_state.error_message = e.display_message();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== DETALLE ====================

    let open_detail = {
        let state = state.clone();
        Callback::from(move |prediction: Prediction| {
            let mut new_state = (*state).clone();
            new_state.selected = Some(prediction);
            new_state.show_detail_modal = true;
            state.set(new_state);
        })
    };

    let close_detail = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_detail_modal = false;
            new_state.selected = None;
            state.set(new_state);
        })
    };

    // ==================== BANNERS Y PAGINACIÓN ====================

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

    let prev_page = {
        let state = state.clone();
        let page = state.page;
        Callback::from(move |_| {
            if page > 1 {
                fetch_predictions(&state, (*state).clone(), page - 1);
            }
        })
    };

    let next_page = {
        let state = state.clone();
        let page = state.page;
        let total = state.total_pages;
        Callback::from(move |_| {
            if page < total {
                fetch_predictions(&state, (*state).clone(), page + 1);
            }
        })
    };

    let on_back = Callback::from(|_| router::navigate(Route::Dashboard));
    let can_edit = SessionStore::can_edit();

    html! {
        <div class="prediction-screen">
            <PageHeader title="Predicciones de Preñez" on_back={on_back}>
                {
                    if can_edit {
                        html! { <button class="btn-primary" onclick={open_create}>{"+ Nueva Predicción"}</button> }
                    } else {
                        html! {}
                    }
                }
            </PageHeader>

            {
                if let Some(stats) = &state.stats {
                    html! {
                        <section class="stats-grid">
                            <div class="stat-card">
                                <div class="stat-value">{stats.total_predicciones}</div>
                                <div class="stat-label">{"Total de predicciones"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{stats.predicciones_validadas}</div>
                                <div class="stat-label">{"Validadas"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{format!("{:.1}%", stats.tasa_acierto)}</div>
                                <div class="stat-label">{"Tasa de acierto"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{format!("{:.1}%", stats.promedio_confianza)}</div>
                                <div class="stat-label">{"Confianza promedio"}</div>
                            </div>
                        </section>
                    }
                } else {
                    html! {}
                }
            }

            <div class="toolbar toolbar-filters">
                <select onchange={on_filter_nivel}>
                    <option value="" selected={state.filter_nivel.is_none()}>{"Todos los niveles"}</option>
                    <option value="alto" selected={state.filter_nivel == Some(NivelConfianza::Alto)}>{"Alto"}</option>
                    <option value="medio" selected={state.filter_nivel == Some(NivelConfianza::Medio)}>{"Medio"}</option>
                    <option value="bajo" selected={state.filter_nivel == Some(NivelConfianza::Bajo)}>{"Bajo"}</option>
                </select>
                <select onchange={on_filter_validadas}>
                    <option value="" selected={state.filter_validadas.is_none()}>{"Todas"}</option>
                    <option value="true" selected={state.filter_validadas == Some(true)}>{"Validadas"}</option>
                    <option value="false" selected={state.filter_validadas == Some(false)}>{"Sin validar"}</option>
                </select>
                <button class="btn-link" onclick={clear_filters}>{"Limpiar filtros"}</button>
                <span class="records-count">{format!("{} registros", state.total_records)}</span>
            </div>

            {
                if state.loading {
                    html! { <div class="loading">{"Cargando predicciones..."}</div> }
                } else if state.predictions.is_empty() {
                    html! { <p class="empty">{"No hay predicciones registradas"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Animal"}</th>
                                    <th>{"Probabilidad"}</th>
                                    <th>{"Predicción"}</th>
                                    <th>{"Confianza"}</th>
                                    <th>{"Resultado real"}</th>
                                    <th>{"Acciones"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    state.predictions.iter().map(|prediction| {
                                        let arete = prediction.iatf_record.as_ref()
                                            .and_then(|record| record.animal.as_ref())
                                            .map(|animal| animal.arete.clone())
                                            .unwrap_or_else(|| format!("IATF #{}", prediction.iatf_record_id));
                                        let on_view = {
                                            let open_detail = open_detail.clone();
                                            let prediction = prediction.clone();
                                            Callback::from(move |_: MouseEvent| open_detail.emit(prediction.clone()))
                                        };
                                        let on_resultado = {
                                            let open_resultado = open_resultado.clone();
                                            let prediction = prediction.clone();
                                            Callback::from(move |_: MouseEvent| open_resultado.emit(prediction.clone()))
                                        };
                                        html! {
                                            <tr key={prediction.id}>
                                                <td>{arete}</td>
                                                <td>
                                                    <span style={format!("color: {}", prediction.probabilidad_color())}>
                                                        {format_probability(prediction.probabilidad_prenez)}
                                                    </span>
                                                </td>
                                                <td>{if prediction.prediccion_binaria { "Preñada" } else { "No preñada" }}</td>
                                                <td>
                                                    <span class={classes!("badge", prediction.nivel_confianza.badge_class())}>
                                                        {prediction.nivel_confianza.label()}
                                                    </span>
                                                </td>
                                                <td>
                                                    {
                                                        match prediction.resultado_real {
                                                            Some(true) => html! { <span class="badge resultado-positivo">{"Positivo - Preñada"}</span> },
                                                            Some(false) => html! { <span class="badge resultado-negativo">{"Negativo - No Preñada"}</span> },
                                                            None => html! { <span class="badge resultado-pendiente">{"Pendiente"}</span> },
                                                        }
                                                    }
                                                </td>
                                                <td class="actions">
                                                    <button class="btn-small" onclick={on_view} title="Ver detalle">{"👁"}</button>
                                                    {
                                                        if can_edit {
                                                            html! { <button class="btn-small" onclick={on_resultado} title="Registrar resultado real">{"✔"}</button> }
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
                current_page={state.page}
                total_pages={state.total_pages}
                on_prev={prev_page}
                on_next={next_page}
            />

            { render_create_modal(&state, on_create_select, create_prediction, close_create) }
            { render_resultado_modal(&state, on_resultado_select, on_fecha_verificacion, save_resultado, close_resultado) }
            { render_detail_modal(&state, close_detail) }

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

/// Lanza el fetch del listado partiendo del estado ya actualizado por el caller.
/// Hace UN solo set síncrono; la respuesta se integra sobre el estado fresco.
fn fetch_predictions(state: &UseStateHandle<PredictionState>, mut base: PredictionState, page: u32) {
    base.loading = true;
    let filters = PredictionFilters {
        nivel_confianza: base.filter_nivel,
        validadas: base.filter_validadas,
        page: Some(page),
        per_page: Some(15),
        ..Default::default()
    };
    state.set(base);

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match PredictionService::new().list(&filters).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.predictions = result.data;
                new_state.page = result.current_page;
                new_state.total_pages = result.last_page;
                new_state.total_records = result.total;
                new_state.loading = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando predicciones: {}", e);
                let mut new_state = (*state).clone();
                new_state.loading = false;
                new_state.error_message = "Error al cargar las predicciones".to_string();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}

/// Registros IATF que todavía no tienen predicción (sin set síncrono)
fn fetch_iatf_disponibles(state: &UseStateHandle<PredictionState>) {
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        let filters = IatfFilters {
            sin_prediccion: Some(true),
            ..Default::default()
        };
        match IatfService::new().list(&filters).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.iatf_records = result.data;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando registros IATF: {}", e);
            }
        }
    });
}

fn fetch_stats(state: &UseStateHandle<PredictionState>) {
    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match PredictionService::new().estadisticas().await {
            Ok(stats) => {
                let mut new_state = (*state).clone();
                new_state.stats = Some(stats);
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando estadísticas: {}", e);
            }
        }
    });
}

fn show_error(state: &UseStateHandle<PredictionState>, message: &str) {
    let mut new_state = (**state).clone();
    new_state.error_message = message.to_string();
    new_state.show_error = true;
    state.set(new_state);
}

fn schedule_success_hide(state: &UseStateHandle<PredictionState>) {
    let state = state.clone();
    Timeout::new(3000, move || {
        let mut new_state = (*state).clone();
        new_state.show_success = false;
        state.set(new_state);
    })
    .forget();
}

fn render_create_modal(
    state: &PredictionState,
    on_select: Callback<Event>,
    create: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_create_modal {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{"Nueva Predicción"}</h2>
                <p>{"Seleccione el registro IATF para el cual generar la predicción. El modelo corre en el servidor."}</p>
                <div class="form-group">
                    <label>{"Registro IATF"}</label>
                    <select onchange={on_select}>
                        <option value="" selected={state.create_iatf_id.is_none()}>{"Seleccionar..."}</option>
                        {
                            state.iatf_records.iter().map(|record| {
                                let arete = record.animal.as_ref()
                                    .map(|animal| animal.arete.clone())
                                    .unwrap_or_else(|| format!("animal #{}", record.animal_id));
                                html! {
                                    <option
                                        value={record.id.to_string()}
                                        selected={state.create_iatf_id == Some(record.id)}
                                    >
                                        {format!("#{} - {} ({})", record.id, arete, format_date(Some(&record.fecha_iatf)))}
                                    </option>
                                }
                            }).collect::<Html>()
                        }
                    </select>
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.creating}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={create} disabled={state.creating}>
                        {if state.creating { "Generando..." } else { "Generar Predicción" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_resultado_modal(
    state: &PredictionState,
    on_select: Callback<Event>,
    on_fecha: Callback<InputEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_resultado_modal {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{"Registrar Resultado Real"}</h2>
                <div class="form-group">
                    <label>{"Resultado"}</label>
                    <select onchange={on_select}>
                        <option value="true" selected={state.resultado_real}>{"Positivo - Preñada"}</option>
                        <option value="false" selected={!state.resultado_real}>{"Negativo - No Preñada"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Fecha de verificación"}</label>
                    <input type="date" value={state.fecha_verificacion.clone()} oninput={on_fecha} />
                </div>
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.updating}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={save} disabled={state.updating}>
                        {if state.updating { "Guardando..." } else { "Guardar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_detail_modal(state: &PredictionState, close: Callback<MouseEvent>) -> Html {
    if !state.show_detail_modal {
        return html! {};
    }
    let Some(prediction) = &state.selected else {
        return html! {};
    };

    let recomendaciones = prediction.recomendaciones_lineas();
    let top_features = top_features_list(prediction);

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                <h2>{"Detalle de la Predicción"}</h2>
                <div class="details-grid">
                    <section>
                        <h3>{"Predicción"}</h3>
                        <p>
                            <strong>{"Probabilidad de preñez: "}</strong>
                            <span style={format!("color: {}", prediction.probabilidad_color())}>
                                {format_probability(prediction.probabilidad_prenez)}
                            </span>
                        </p>
                        <p><strong>{"Predicción: "}</strong>{if prediction.prediccion_binaria { "Preñada" } else { "No preñada" }}</p>
                        <p><strong>{"Nivel de confianza: "}</strong>{prediction.nivel_confianza.label()}</p>
                        <p><strong>{"Modelo: "}</strong>{format!("{} v{}", prediction.modelo_usado, prediction.version_modelo)}</p>
                    </section>
                    <section>
                        <h3>{"Métricas del modelo"}</h3>
                        <p><strong>{"Accuracy: "}</strong>{format_metric(prediction.accuracy)}</p>
                        <p><strong>{"Precision: "}</strong>{format_metric(prediction.precision)}</p>
                        <p><strong>{"Recall: "}</strong>{format_metric(prediction.recall)}</p>
                        <p><strong>{"F1: "}</strong>{format_metric(prediction.f1_score)}</p>
                        <p><strong>{"ROC AUC: "}</strong>{format_metric(prediction.roc_auc)}</p>
                    </section>
                    {
                        if top_features.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <section>
                                    <h3>{"Variables más influyentes"}</h3>
                                    <ul class="stats-list">
                                        {
                                            top_features.iter().map(|feature| {
                                                html! { <li key={feature.clone()}>{feature}</li> }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </section>
                            }
                        }
                    }
                    {
                        if recomendaciones.is_empty() {
                            html! {}
                        } else {
                            html! {
                                <section>
                                    <h3>{"Recomendaciones"}</h3>
                                    <ul class="stats-list">
                                        {
                                            recomendaciones.iter().map(|linea| {
                                                html! { <li key={linea.clone()}>{linea}</li> }
                                            }).collect::<Html>()
                                        }
                                    </ul>
                                </section>
                            }
                        }
                    }
                </div>
                <div class="modal-actions">
                    <button class="btn-primary" onclick={close}>{"Cerrar"}</button>
                </div>
            </div>
        </div>
    }
}

/// Aplana top_features (array opaco del modelo) a etiquetas legibles
fn top_features_list(prediction: &Prediction) -> Vec<String> {
    let Some(value) = &prediction.top_features else {
        return Vec::new();
    };
    let Some(items) = value.as_array() else {
        return Vec::new();
    };
    items
        .iter()
        .filter_map(|item| {
            if let Some(name) = item.as_str() {
                return Some(feature_label(name));
            }
            // También admite objetos {feature, importance}
            let name = item.get("feature").and_then(|v| v.as_str())?;
            match item.get("importance").and_then(|v| v.as_f64()) {
                Some(importance) => Some(format!(
                    "{} ({:.1}%)",
                    feature_label(name),
                    importance * 100.0
                )),
                None => Some(feature_label(name)),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn top_features_admite_strings_y_objetos() {
        let prediction: Prediction = serde_json::from_str(
            r#"{
                "id": 1,
                "iatf_record_id": 1,
                "user_id": 1,
                "probabilidad_prenez": 0.8,
                "prediccion_binaria": true,
                "nivel_confianza": "alto",
                "modelo_usado": "rf",
                "version_modelo": "1.0",
                "top_features": [
                    "condicion_corporal",
                    {"feature": "tono_uterino", "importance": 0.25}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            top_features_list(&prediction),
            vec![
                "Condición Corporal".to_string(),
                "Tono Uterino (25.0%)".to_string(),
            ]
        );
    }
}
