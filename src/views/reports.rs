// ============================================================================
// REPORTES - generación, listado de guardados y exportación PDF/Excel
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement};
use yew::prelude::*;

use crate::models::report::{
    AnalisisSementalRequest, EfectividadProtocoloRequest, TasasPrenezRequest,
};
use crate::models::{ListParams, ReportData, Reporte, Semental, TipoReporte};
use crate::router;
use crate::routes::Route;
use crate::services::{ReportService, SementalService};
use crate::utils::{format_date, parse_opt_i64, parse_opt_string};
use crate::views::shared::{ConfirmModal, ErrorModal, PageHeader, SuccessModal};

#[derive(Clone, Copy, PartialEq, Eq)]
enum ViewMode {
    Create,
    List,
}

#[derive(Clone, PartialEq)]
struct ReportsState {
    selected_report: TipoReporte,
    view_mode: ViewMode,

    report_data: Option<ReportData>,
    current_report_id: Option<i64>,

    sementales: Vec<Semental>,
    saved_reports: Vec<Reporte>,
    loading_saved: bool,

    // Filtros de generación
    fecha_inicio: String,
    fecha_fin: String,
    grupo_lote: String,
    tratamiento: String,
    semental_id: Option<i64>,

    generating: bool,
    exporting_pdf: bool,
    exporting_excel: bool,

    show_delete_modal: bool,
    report_to_delete: Option<i64>,
    deleting: bool,

    success_message: String,
    show_success: bool,
    error_message: String,
    show_error: bool,
}

impl Default for ReportsState {
    fn default() -> Self {
        Self {
            selected_report: TipoReporte::TasasPrenez,
            view_mode: ViewMode::Create,
            report_data: None,
            current_report_id: None,
            sementales: Vec::new(),
            saved_reports: Vec::new(),
            loading_saved: false,
            fecha_inicio: String::new(),
            fecha_fin: String::new(),
            grupo_lote: String::new(),
            tratamiento: String::new(),
            semental_id: None,
            generating: false,
            exporting_pdf: false,
            exporting_excel: false,
            show_delete_modal: false,
            report_to_delete: None,
            deleting: false,
            success_message: String::new(),
            show_success: false,
            error_message: String::new(),
            show_error: false,
        }
    }
}

#[function_component(ReportsView)]
pub fn reports_view() -> Html {
    let state = use_state(ReportsState::default);

    // Sementales para el filtro de análisis por semental
    {
        let state = state.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                let params = ListParams {
                    activo: Some(true),
                    ..Default::default()
                };
                match SementalService::new().list(&params).await {
                    Ok(result) => {
                        let mut new_state = (*state).clone();
                        new_state.sementales = result.data;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando sementales: {}", e);
                    }
                }
            });
            || ()
        });
    }

    let load_saved = {
        let state = state.clone();
        Callback::from(move |tipo: TipoReporte| {
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ReportService::new().list(Some(tipo)).await {
                    Ok(result) => {
                        let mut new_state = (*state).clone();
                        new_state.saved_reports = result.data;
                        new_state.loading_saved = false;
                        state.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando reportes guardados: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.loading_saved = false;
                        new_state.error_message =
                            "Error al cargar reportes guardados".to_string();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== SELECCIÓN Y MODO ====================

    let select_report = {
        let state = state.clone();
        Callback::from(move |tipo: TipoReporte| {
            let mut new_state = (*state).clone();
            new_state.selected_report = tipo;
            new_state.view_mode = ViewMode::Create;
            new_state.report_data = None;
            new_state.current_report_id = None;
            new_state.fecha_inicio = String::new();
            new_state.fecha_fin = String::new();
            new_state.grupo_lote = String::new();
            new_state.tratamiento = String::new();
            new_state.semental_id = None;
            state.set(new_state);
        })
    };

    let switch_to_list = {
        let state = state.clone();
        let load_saved = load_saved.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            load_saved.emit(current.selected_report);
            let mut new_state = current;
            new_state.view_mode = ViewMode::List;
            new_state.loading_saved = true;
            state.set(new_state);
        })
    };

    let switch_to_create = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.view_mode = ViewMode::Create;
            new_state.report_data = None;
            new_state.current_report_id = None;
            state.set(new_state);
        })
    };

    // ==================== FILTROS ====================

    let on_fecha_inicio = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.fecha_inicio = input.value();
            state.set(new_state);
        })
    };

    let on_fecha_fin = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.fecha_fin = input.value();
            state.set(new_state);
        })
    };

    let on_grupo_lote = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.grupo_lote = input.value();
            state.set(new_state);
        })
    };

    let on_tratamiento = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.tratamiento = select.value();
            state.set(new_state);
        })
    };

    let on_semental = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.semental_id = parse_opt_i64(&select.value());
            state.set(new_state);
        })
    };

    // ==================== GENERACIÓN ====================

    let generate = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();

            if !filters_validos(&current) {
                let mut new_state = current;
                new_state.error_message =
                    "Por favor complete los campos requeridos".to_string();
                new_state.show_error = true;
                state.set(new_state);
                return;
            }

            let mut new_state = current.clone();
            new_state.generating = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = ReportService::new();
                let result = match current.selected_report {
                    TipoReporte::TasasPrenez => {
                        service
                            .generar_tasas_prenez(&TasasPrenezRequest {
                                fecha_inicio: current.fecha_inicio.clone(),
                                fecha_fin: current.fecha_fin.clone(),
                                grupo_lote: parse_opt_string(&current.grupo_lote),
                            })
                            .await
                    }
                    TipoReporte::EfectividadProtocolo => {
                        service
                            .generar_efectividad_protocolo(&EfectividadProtocoloRequest {
                                fecha_inicio: current.fecha_inicio.clone(),
                                fecha_fin: current.fecha_fin.clone(),
                                tratamiento: parse_opt_string(&current.tratamiento),
                            })
                            .await
                    }
                    TipoReporte::AnalisisSemental => {
                        service
                            .generar_analisis_semental(&AnalisisSementalRequest {
                                semental_id: current.semental_id,
                                fecha_inicio: parse_opt_string(&current.fecha_inicio),
                                fecha_fin: parse_opt_string(&current.fecha_fin),
                            })
                            .await
                    }
                    TipoReporte::RendimientoMl => service.generar_rendimiento_ml().await,
                };

                match result {
                    Ok(reporte) => {
                        log::info!("📊 Reporte #{} generado", reporte.id);
                        let mut new_state = (*state).clone();
                        new_state.generating = false;
                        new_state.report_data = reporte.data_resultados;
                        new_state.current_report_id = Some(reporte.id);
                        new_state.success_message = "Reporte generado exitosamente".to_string();
                        new_state.show_success = true;
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error generando reporte: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.generating = false;
                        new_state.error_message = "Error al generar el reporte".to_string();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== REPORTES GUARDADOS ====================

    let view_saved = {
        let state = state.clone();
        Callback::from(move |reporte: Reporte| {
            let mut new_state = (*state).clone();
            new_state.selected_report = reporte.tipo_reporte;
            new_state.report_data = reporte.data_resultados.clone();
            new_state.current_report_id = Some(reporte.id);
            new_state.view_mode = ViewMode::Create;
            state.set(new_state);
        })
    };

    let request_delete = {
        let state = state.clone();
        Callback::from(move |id: i64| {
            let mut new_state = (*state).clone();
            new_state.report_to_delete = Some(id);
            new_state.show_delete_modal = true;
            state.set(new_state);
        })
    };

    let cancel_delete = {
        let state = state.clone();
        Callback::from(move |_| {
            let mut new_state = (*state).clone();
            new_state.show_delete_modal = false;
            new_state.report_to_delete = None;
            state.set(new_state);
        })
    };

    let confirm_delete = {
        let state = state.clone();
        let load_saved = load_saved.clone();
        Callback::from(move |_| {
            let current = (*state).clone();
            let Some(id) = current.report_to_delete else {
                return;
            };

            let mut new_state = current.clone();
            new_state.deleting = true;
            state.set(new_state);

            let state = state.clone();
            let load_saved = load_saved.clone();
            let tipo = current.selected_report;
            wasm_bindgen_futures::spawn_local(async move {
                match ReportService::new().delete(id).await {
                    Ok(()) => {
                        load_saved.emit(tipo);
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.report_to_delete = None;
                        new_state.loading_saved = true;
                        new_state.success_message =
                            "Reporte eliminado exitosamente".to_string();
                        new_state.show_success = true;
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando reporte: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.error_message = "Error al eliminar el reporte".to_string();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    // ==================== EXPORTACIÓN ====================

    let export_pdf = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let Some(report_id) = current.current_report_id else {
                let mut new_state = current;
                new_state.error_message = "No hay reporte para exportar".to_string();
                new_state.show_error = true;
                state.set(new_state);
                return;
            };

            let mut new_state = current.clone();
            new_state.exporting_pdf = true;
            state.set(new_state);

            let tipo = current.selected_report;
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ReportService::new().export_pdf(report_id).await {
                    Ok(bytes) => {
                        let filename =
                            format!("reporte_{}_{}.pdf", tipo.as_str(), report_id);
                        download_file(&bytes, &filename, "application/pdf");
                        let mut new_state = (*state).clone();
                        new_state.exporting_pdf = false;
                        new_state.success_message =
                            "Reporte PDF descargado exitosamente".to_string();
                        new_state.show_success = true;
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error exportando PDF: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.exporting_pdf = false;
                        new_state.error_message =
                            "Error al exportar el reporte a PDF".to_string();
                        new_state.show_error = true;
                        state.set(new_state);
                    }
                }
            });
        })
    };

    let export_excel = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let Some(report_id) = current.current_report_id else {
                let mut new_state = current;
                new_state.error_message = "No hay reporte para exportar".to_string();
                new_state.show_error = true;
                state.set(new_state);
                return;
            };

            let mut new_state = current.clone();
            new_state.exporting_excel = true;
            state.set(new_state);

            let tipo = current.selected_report;
            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match ReportService::new().export_excel(report_id).await {
                    Ok(bytes) => {
                        let filename =
                            format!("reporte_{}_{}.xlsx", tipo.as_str(), report_id);
                        download_file(
                            &bytes,
                            &filename,
                            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
                        );
                        let mut new_state = (*state).clone();
                        new_state.exporting_excel = false;
                        new_state.success_message =
                            "Reporte Excel descargado exitosamente".to_string();
                        new_state.show_success = true;
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error exportando Excel: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.exporting_excel = false;
                        new_state.error_message =
                            "Error al exportar el reporte a Excel".to_string();
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

    html! {
        <div class="reports-screen">
            <PageHeader title="Reportes" on_back={on_back}>
                {
                    if state.view_mode == ViewMode::Create {
                        html! { <button class="btn-secondary" onclick={switch_to_list}>{"Ver guardados"}</button> }
                    } else {
                        html! { <button class="btn-secondary" onclick={switch_to_create}>{"Nuevo reporte"}</button> }
                    }
                }
            </PageHeader>

            <section class="report-types">
                {
                    TipoReporte::ALL.iter().map(|tipo| {
                        let onclick = {
                            let select_report = select_report.clone();
                            let tipo = *tipo;
                            Callback::from(move |_: MouseEvent| select_report.emit(tipo))
                        };
                        html! {
                            <button
                                key={tipo.as_str()}
                                class={classes!("report-card", (state.selected_report == *tipo).then_some("report-card-active"))}
                                style={format!("border-color: {}", tipo.color())}
                                onclick={onclick}
                            >
                                <span class="report-icon">{tipo.icono()}</span>
                                <span class="report-name">{tipo.nombre()}</span>
                                <span class="report-description">{tipo.descripcion()}</span>
                            </button>
                        }
                    }).collect::<Html>()
                }
            </section>

            {
                if state.view_mode == ViewMode::Create {
                    html! {
                        <>
                            { render_filters(&state, on_fecha_inicio, on_fecha_fin, on_grupo_lote, on_tratamiento, on_semental, generate) }
                            { render_report_data(&state, export_pdf, export_excel) }
                        </>
                    }
                } else {
                    render_saved_list(&state, view_saved, request_delete)
                }
            }

            <ConfirmModal
                show={state.show_delete_modal}
                title="Eliminar Reporte"
                message="¿Está seguro que desea eliminar este reporte? Esta acción no se puede deshacer."
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

// ==================== HELPERS ====================

/// Fechas obligatorias solo para tasas de preñez y efectividad
fn filters_validos(state: &ReportsState) -> bool {
    match state.selected_report {
        TipoReporte::TasasPrenez | TipoReporte::EfectividadProtocolo => {
            !state.fecha_inicio.is_empty() && !state.fecha_fin.is_empty()
        }
        TipoReporte::AnalisisSemental | TipoReporte::RendimientoMl => true,
    }
}

fn schedule_success_hide(state: &UseStateHandle<ReportsState>) {
    let state = state.clone();
    Timeout::new(3000, move || {
        let mut new_state = (*state).clone();
        new_state.show_success = false;
        state.set(new_state);
    })
    .forget();
}

/// Descarga un payload binario via Blob + anchor; solo en navegador
fn download_file(bytes: &[u8], filename: &str, mime: &str) {
    if !crate::utils::is_browser() {
        return;
    }

    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::JsCast;

        let result = (|| -> Result<(), wasm_bindgen::JsValue> {
            let array = js_sys::Uint8Array::from(bytes);
            let parts = js_sys::Array::new();
            parts.push(&array.buffer());

            let options = web_sys::BlobPropertyBag::new();
            options.set_type(mime);
            let blob =
                web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
            let url = web_sys::Url::create_object_url_with_blob(&blob)?;

            let window = web_sys::window().ok_or("sin window")?;
            let document = window.document().ok_or("sin document")?;
            let anchor: web_sys::HtmlAnchorElement =
                document.create_element("a")?.dyn_into()?;
            anchor.set_href(&url);
            anchor.set_download(filename);
            anchor.click();
            web_sys::Url::revoke_object_url(&url)?;
            Ok(())
        })();

        if let Err(e) = result {
            log::error!("❌ Error descargando archivo {}: {:?}", filename, e);
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = (bytes, filename, mime);
}

// ==================== RENDER ====================

fn render_filters(
    state: &ReportsState,
    on_fecha_inicio: Callback<InputEvent>,
    on_fecha_fin: Callback<InputEvent>,
    on_grupo_lote: Callback<InputEvent>,
    on_tratamiento: Callback<Event>,
    on_semental: Callback<Event>,
    generate: Callback<MouseEvent>,
) -> Html {
    let needs_dates = matches!(
        state.selected_report,
        TipoReporte::TasasPrenez | TipoReporte::EfectividadProtocolo
    );

    html! {
        <section class="report-filters">
            {
                if needs_dates || state.selected_report == TipoReporte::AnalisisSemental {
                    html! {
                        <>
                            <div class="form-group">
                                <label>{if needs_dates { "Fecha inicio" } else { "Fecha inicio (opcional)" }}</label>
                                <input type="date" value={state.fecha_inicio.clone()} oninput={on_fecha_inicio} />
                            </div>
                            <div class="form-group">
                                <label>{if needs_dates { "Fecha fin" } else { "Fecha fin (opcional)" }}</label>
                                <input type="date" value={state.fecha_fin.clone()} oninput={on_fecha_fin} />
                            </div>
                        </>
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.selected_report == TipoReporte::TasasPrenez {
                    html! {
                        <div class="form-group">
                            <label>{"Grupo/Lote (opcional)"}</label>
                            <input value={state.grupo_lote.clone()} oninput={on_grupo_lote} />
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.selected_report == TipoReporte::EfectividadProtocolo {
                    html! {
                        <div class="form-group">
                            <label>{"Tratamiento (opcional)"}</label>
                            <select onchange={on_tratamiento}>
                                <option value="" selected={state.tratamiento.is_empty()}>{"Todos"}</option>
                                <option value="T1" selected={state.tratamiento == "T1"}>{"T1"}</option>
                                <option value="T2" selected={state.tratamiento == "T2"}>{"T2"}</option>
                                <option value="RS" selected={state.tratamiento == "RS"}>{"RS"}</option>
                            </select>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            {
                if state.selected_report == TipoReporte::AnalisisSemental {
                    html! {
                        <div class="form-group">
                            <label>{"Semental (opcional)"}</label>
                            <select onchange={on_semental}>
                                <option value="" selected={state.semental_id.is_none()}>{"Todos"}</option>
                                {
                                    state.sementales.iter().map(|semental| {
                                        html! {
                                            <option
                                                value={semental.id.to_string()}
                                                selected={state.semental_id == Some(semental.id)}
                                            >
                                                {&semental.nombre}
                                            </option>
                                        }
                                    }).collect::<Html>()
                                }
                            </select>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <button class="btn-primary" onclick={generate} disabled={state.generating}>
                {if state.generating { "Generando..." } else { "Generar Reporte" }}
            </button>
        </section>
    }
}

fn render_report_data(
    state: &ReportsState,
    export_pdf: Callback<MouseEvent>,
    export_excel: Callback<MouseEvent>,
) -> Html {
    let Some(data) = &state.report_data else {
        return html! { <p class="empty">{"Genere un reporte para ver los resultados"}</p> };
    };

    html! {
        <section class="report-results">
            <div class="report-results-header">
                <h2>{state.selected_report.nombre()}</h2>
                <div class="export-actions">
                    <button class="btn-secondary" onclick={export_pdf} disabled={state.exporting_pdf}>
                        {if state.exporting_pdf { "Exportando..." } else { "📄 PDF" }}
                    </button>
                    <button class="btn-secondary" onclick={export_excel} disabled={state.exporting_excel}>
                        {if state.exporting_excel { "Exportando..." } else { "📗 Excel" }}
                    </button>
                </div>
            </div>

            {
                if let Some(resumen) = &data.resumen {
                    html! {
                        <div class="stats-grid">
                            <div class="stat-card">
                                <div class="stat-value">{resumen.total_animales}</div>
                                <div class="stat-label">{"Animales"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{resumen.total_iatf}</div>
                                <div class="stat-label">{"Registros IATF"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{format!("{:.1}%", resumen.tasa_prenez_30_dias)}</div>
                                <div class="stat-label">{"Tasa de preñez"}</div>
                            </div>
                            <div class="stat-card">
                                <div class="stat-value">{resumen.pendientes_confirmacion}</div>
                                <div class="stat-label">{"Pendientes"}</div>
                            </div>
                        </div>
                    }
                } else {
                    html! {}
                }
            }

            { render_json_section("Por grupo", &data.por_grupo) }
            { render_json_section("Por tratamiento", &data.por_tratamiento) }
            { render_json_section("Uso de DIB", &data.uso_dib) }
            { render_json_section("Sementales", &data.sementales) }
            { render_json_section("Métricas promedio", &data.metricas_promedio) }
            { render_json_section("Por nivel de confianza", &data.por_nivel_confianza) }
        </section>
    }
}

/// Secciones agregadas cuya forma define el backend: tabla clave/valor plana
fn render_json_section(title: &str, value: &Option<serde_json::Value>) -> Html {
    let Some(value) = value else {
        return html! {};
    };

    let rows: Vec<(String, String)> = match value {
        serde_json::Value::Object(map) => map
            .iter()
            .map(|(key, value)| (key.clone(), flat_value(value)))
            .collect(),
        serde_json::Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| ((i + 1).to_string(), flat_value(item)))
            .collect(),
        other => vec![("valor".to_string(), flat_value(other))],
    };

    if rows.is_empty() {
        return html! {};
    }

    html! {
        <div class="report-section">
            <h3>{title}</h3>
            <table class="data-table">
                <tbody>
                    {
                        rows.iter().map(|(key, value)| {
                            html! {
                                <tr key={key.clone()}>
                                    <td>{key}</td>
                                    <td>{value}</td>
                                </tr>
                            }
                        }).collect::<Html>()
                    }
                </tbody>
            </table>
        </div>
    }
}

fn flat_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(text) => text.clone(),
        serde_json::Value::Null => "-".to_string(),
        other => other.to_string(),
    }
}

fn render_saved_list(
    state: &ReportsState,
    view_saved: Callback<Reporte>,
    request_delete: Callback<i64>,
) -> Html {
    if state.loading_saved {
        return html! { <div class="loading">{"Cargando reportes guardados..."}</div> };
    }
    if state.saved_reports.is_empty() {
        return html! { <p class="empty">{"No hay reportes guardados de este tipo"}</p> };
    }

    html! {
        <table class="data-table">
            <thead>
                <tr>
                    <th>{"ID"}</th>
                    <th>{"Tipo"}</th>
                    <th>{"Generado"}</th>
                    <th>{"Acciones"}</th>
                </tr>
            </thead>
            <tbody>
                {
                    state.saved_reports.iter().map(|reporte| {
                        let on_view = {
                            let view_saved = view_saved.clone();
                            let reporte = reporte.clone();
                            Callback::from(move |_: MouseEvent| view_saved.emit(reporte.clone()))
                        };
                        let on_delete = {
                            let request_delete = request_delete.clone();
                            let id = reporte.id;
                            Callback::from(move |_: MouseEvent| request_delete.emit(id))
                        };
                        html! {
                            <tr key={reporte.id}>
                                <td>{reporte.id}</td>
                                <td>{reporte.tipo_reporte.nombre()}</td>
                                <td>{format_date(reporte.created_at.as_deref())}</td>
                                <td class="actions">
                                    <button class="btn-small" onclick={on_view}>{"👁"}</button>
                                    <button class="btn-small btn-small-danger" onclick={on_delete}>{"🗑️"}</button>
                                </td>
                            </tr>
                        }
                    }).collect::<Html>()
                }
            </tbody>
        </table>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fechas_obligatorias_segun_tipo() {
        let mut state = ReportsState::default();
        assert_eq!(state.selected_report, TipoReporte::TasasPrenez);
        assert!(!filters_validos(&state));

        state.fecha_inicio = "2024-01-01".to_string();
        assert!(!filters_validos(&state));
        state.fecha_fin = "2024-06-30".to_string();
        assert!(filters_validos(&state));

        // Semental y ML no exigen fechas
        state.fecha_inicio = String::new();
        state.fecha_fin = String::new();
        state.selected_report = TipoReporte::AnalisisSemental;
        assert!(filters_validos(&state));
        state.selected_report = TipoReporte::RendimientoMl;
        assert!(filters_validos(&state));
    }
}
