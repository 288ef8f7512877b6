// ============================================================================
// GESTIÓN IATF - listado, wizard de 5 pasos y confirmación de resultado
// ============================================================================

use gloo_timers::callback::Timeout;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::models::{
    Animal, CondicionOvarica, ConfirmarResultadoRequest, DisponibilidadAgua, EpocaAnio,
    IatfFilters, IatfForm, IatfRecord, ListParams, ResultadoIatf, Semental, TratamientoPrevio,
};
use crate::router;
use crate::routes::Route;
use crate::services::{AnimalService, IatfService, SementalService};
use crate::stores::SessionStore;
use crate::utils::{format_bool, format_date, format_opt_number, parse_opt_f64, parse_opt_i64,
    parse_opt_string, today_iso};
use crate::viewmodels::{IatfWizard, TOTAL_STEPS};
use crate::views::shared::{ConfirmModal, ErrorModal, PageHeader, Paginator, SuccessModal};

const PER_PAGE: u32 = 15;

#[derive(Clone, PartialEq)]
struct ResultadoForm {
    resultado: ResultadoIatf,
    fecha_confirmacion: String,
    dias_gestacion: Option<i64>,
}

impl Default for ResultadoForm {
    fn default() -> Self {
        Self {
            resultado: ResultadoIatf::Pendiente,
            fecha_confirmacion: String::new(),
            // 45 días es el control ecográfico estándar
            dias_gestacion: Some(45),
        }
    }
}

#[derive(Clone, PartialEq)]
struct IatfState {
    records: Vec<IatfRecord>,
    loading: bool,
    page: u32,
    total_pages: u32,

    animales: Vec<Animal>,
    sementales: Vec<Semental>,

    // Filtros del listado
    filter_resultado: Option<ResultadoIatf>,
    filter_animal_id: Option<i64>,
    filter_semental_id: Option<i64>,
    filter_fecha_inicio: String,
    filter_fecha_fin: String,

    // Wizard
    show_wizard: bool,
    wizard: IatfWizard,
    editing_id: Option<i64>,
    saving: bool,

    // Confirmación de resultado
    show_resultado_modal: bool,
    resultado_form: ResultadoForm,
    selected: Option<IatfRecord>,

    show_details: bool,

    show_delete_modal: bool,
    delete_message: String,
    pending_delete: Option<i64>,
    deleting: bool,

    success_message: String,
    show_success: bool,
    error_message: String,
    show_error: bool,
}

impl Default for IatfState {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            loading: false,
            page: 1,
            total_pages: 1,
            animales: Vec::new(),
            sementales: Vec::new(),
            filter_resultado: None,
            filter_animal_id: None,
            filter_semental_id: None,
            filter_fecha_inicio: String::new(),
            filter_fecha_fin: String::new(),
            show_wizard: false,
            wizard: IatfWizard::nuevo(),
            editing_id: None,
            saving: false,
            show_resultado_modal: false,
            resultado_form: ResultadoForm::default(),
            selected: None,
            show_details: false,
            show_delete_modal: false,
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

#[function_component(IatfView)]
pub fn iatf_view() -> Html {
    let state = use_state(IatfState::default);

    // ==================== CARGA ====================

    let load_records = {
        let state = state.clone();
        Callback::from(move |page: u32| {
            let mut base = (*state).clone();
            fetch_records(&state, &mut base, page);
            state.set(base);
        })
    };

    // Catálogos para selects y filtros; cargan en paralelo con el listado
    {
        let state = state.clone();
        let load_records = load_records.clone();
        use_effect_with((), move |_| {
            load_records.emit(1);

            let state_animales = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let params = crate::models::AnimalListParams {
                    activo: Some(true),
                    ..Default::default()
                };
                match AnimalService::new().list(&params).await {
                    Ok(result) => {
                        let mut new_state = (*state_animales).clone();
                        new_state.animales = result.data;
                        state_animales.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando animales: {}", e);
                    }
                }
            });

            let state_sementales = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let params = ListParams {
                    activo: Some(true),
                    ..Default::default()
                };
                match SementalService::new().list(&params).await {
                    Ok(result) => {
                        let mut new_state = (*state_sementales).clone();
                        new_state.sementales = result.data;
                        state_sementales.set(new_state);
                    }
                    Err(e) => {
                        log::error!("❌ Error cargando sementales: {}", e);
                    }
                }
            });

            || ()
        });
    }

    // ==================== FILTROS ====================

    let on_filter_resultado = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_resultado = match select.value().as_str() {
                "confirmada" => Some(ResultadoIatf::Confirmada),
                "no_prenada" => Some(ResultadoIatf::NoPrenada),
                "muerte_embrionaria" => Some(ResultadoIatf::MuerteEmbrionaria),
                "pendiente" => Some(ResultadoIatf::Pendiente),
                _ => None,
            };
            fetch_records(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    let on_filter_animal = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_animal_id = parse_opt_i64(&select.value());
            fetch_records(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    let on_filter_semental = {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_semental_id = parse_opt_i64(&select.value());
            fetch_records(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    let on_filter_fecha_inicio = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_fecha_inicio = input.value();
            state.set(new_state);
        })
    };

    let on_filter_fecha_fin = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.filter_fecha_fin = input.value();
            state.set(new_state);
        })
    };

    let apply_filters = {
        let load_records = load_records.clone();
        Callback::from(move |_: MouseEvent| load_records.emit(1))
    };

    let clear_filters = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.filter_resultado = None;
            new_state.filter_animal_id = None;
            new_state.filter_semental_id = None;
            new_state.filter_fecha_inicio = String::new();
            new_state.filter_fecha_fin = String::new();
            fetch_records(&state, &mut new_state, 1);
            state.set(new_state);
        })
    };

    // ==================== WIZARD ====================

    let open_create = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.wizard = IatfWizard::nuevo();
            new_state.editing_id = None;
            new_state.show_wizard = true;
            state.set(new_state);
        })
    };

    let open_edit = {
        let state = state.clone();
        Callback::from(move |record: IatfRecord| {
            let mut new_state = (*state).clone();
            new_state.wizard = IatfWizard::editar(&record);
            new_state.editing_id = Some(record.id);
            new_state.show_wizard = true;
            state.set(new_state);
        })
    };

    let close_wizard = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_wizard = false;
            new_state.editing_id = None;
            new_state.wizard = IatfWizard::nuevo();
            state.set(new_state);
        })
    };

    let wizard_next = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            match new_state.wizard.next_step() {
                Ok(()) => state.set(new_state),
                Err(message) => {
                    new_state.error_message = message;
                    new_state.show_error = true;
                    state.set(new_state);
                }
            }
        })
    };

    let wizard_prev = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.wizard.prev_step();
            state.set(new_state);
        })
    };

    let wizard_goto = {
        let state = state.clone();
        Callback::from(move |step: u8| {
            let mut new_state = (*state).clone();
            new_state.wizard.go_to_step(step);
            state.set(new_state);
        })
    };

    let save_record = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();

            if let Err(message) = current.wizard.validate_all() {
                let mut new_state = current.clone();
                new_state.error_message = message;
                new_state.show_error = true;
                state.set(new_state);
                return;
            }

            let mut new_state = current.clone();
            new_state.saving = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let service = IatfService::new();
                let result = match current.editing_id {
                    Some(id) => service.update(id, &current.wizard.form).await,
                    None => service.create(&current.wizard.form).await,
                };
                match result {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.show_wizard = false;
                        new_state.editing_id = None;
                        new_state.wizard = IatfWizard::nuevo();
                        new_state.success_message = if current.editing_id.is_some() {
                            "Registro de IATF actualizado exitosamente".to_string()
                        } else {
                            "Registro de IATF creado exitosamente".to_string()
                        };
                        new_state.show_success = true;
                        fetch_records(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error guardando IATF: {}", e);
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

    // Ediciones del formulario del wizard
    let edit_form = |apply: fn(&mut IatfForm, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.wizard.form, input.value());
            state.set(new_state);
        })
    };

    let select_form = |apply: fn(&mut IatfForm, String)| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.wizard.form, select.value());
            state.set(new_state);
        })
    };

    let check_form = |apply: fn(&mut IatfForm, bool)| {
        let state = state.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.wizard.form, input.checked());
            state.set(new_state);
        })
    };

    let textarea_form = |apply: fn(&mut IatfForm, String)| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            apply(&mut new_state.wizard.form, input.value());
            state.set(new_state);
        })
    };

    // Paso 1
    let on_animal = select_form(|form, value| form.animal_id = parse_opt_i64(&value));
    let on_semental = select_form(|form, value| form.semental_id = parse_opt_i64(&value));
    let on_fecha_iatf = edit_form(|form, value| form.fecha_iatf = value);
    let on_hora_iatf = edit_form(|form, value| form.hora_iatf = parse_opt_string(&value));
    let on_dia_0 = edit_form(|form, value| form.fecha_protocolo_dia_0 = parse_opt_string(&value));
    let on_dia_8 = edit_form(|form, value| form.fecha_protocolo_dia_8 = parse_opt_string(&value));
    let on_dia_9 = edit_form(|form, value| form.fecha_protocolo_dia_9 = parse_opt_string(&value));
    let on_dia_10 = edit_form(|form, value| form.fecha_protocolo_dia_10 = parse_opt_string(&value));

    // Paso 2
    let on_cond_od = select_form(|form, value| form.condicion_ovarica_od = parse_condicion(&value));
    let on_cond_oi = select_form(|form, value| form.condicion_ovarica_oi = parse_condicion(&value));
    let on_tono = edit_form(|form, value| form.tono_uterino = parse_opt_f64(&value));
    let on_tratamiento = select_form(|form, value| {
        form.tratamiento_previo = match value.as_str() {
            "T1" => Some(TratamientoPrevio::T1),
            "T2" => Some(TratamientoPrevio::T2),
            "RS" => Some(TratamientoPrevio::Resincronizacion),
            "DESCARTE" => Some(TratamientoPrevio::Descarte),
            _ => None,
        }
    });

    // Paso 3
    let on_dias_tonificacion =
        edit_form(|form, value| form.dias_tonificacion = parse_opt_i64(&value));
    let on_sal_mineral = edit_form(|form, value| form.sal_mineral_gr = parse_opt_f64(&value));
    let on_modivitasan = edit_form(|form, value| form.modivitasan_ml = parse_opt_f64(&value));
    let on_fosfoton = edit_form(|form, value| form.fosfoton_ml = parse_opt_f64(&value));
    let on_seve = edit_form(|form, value| form.seve_ml = parse_opt_f64(&value));
    let on_desparasitacion = check_form(|form, checked| form.desparasitacion_previa = checked);
    let on_vitaminas = check_form(|form, checked| form.vitaminas_aplicadas = checked);
    let on_dib = check_form(|form, checked| form.dispositivo_dib = checked);
    let on_estradiol = edit_form(|form, value| form.estradiol_ml = parse_opt_f64(&value));
    let on_retirada_dib = check_form(|form, checked| form.retirada_dib = checked);
    let on_ecg = edit_form(|form, value| form.ecg_ml = parse_opt_f64(&value));
    let on_pf2 = edit_form(|form, value| form.pf2_alpha_ml = parse_opt_f64(&value));

    // Paso 4
    let on_epoca = select_form(|form, value| {
        form.epoca_anio = match value.as_str() {
            "verano" => Some(EpocaAnio::Verano),
            "invierno" => Some(EpocaAnio::Invierno),
            "lluvias" => Some(EpocaAnio::Lluvias),
            _ => None,
        }
    });
    let on_temperatura =
        edit_form(|form, value| form.temperatura_ambiente = parse_opt_f64(&value));
    let on_humedad = edit_form(|form, value| form.humedad_relativa = parse_opt_f64(&value));
    let on_estres = edit_form(|form, value| form.estres_manejo = parse_opt_f64(&value));
    let on_pasturas = edit_form(|form, value| form.calidad_pasturas = parse_opt_f64(&value));
    let on_agua = select_form(|form, value| {
        form.disponibilidad_agua = match value.as_str() {
            "adecuada" => Some(DisponibilidadAgua::Adecuada),
            "limitada" => Some(DisponibilidadAgua::Limitada),
            _ => None,
        }
    });
    let on_gestacion_previa = check_form(|form, checked| form.gestacion_previa = checked);
    let on_dias_gestacion_previa =
        edit_form(|form, value| form.dias_gestacion_previa = parse_opt_i64(&value));

    // Paso 5
    let on_observaciones = textarea_form(|form, value| form.observaciones = parse_opt_string(&value));
    let on_tecnico = edit_form(|form, value| form.tecnico_responsable = parse_opt_string(&value));

    // ==================== RESULTADO ====================

    let open_resultado = {
        let state = state.clone();
        Callback::from(move |record: IatfRecord| {
            let mut new_state = (*state).clone();
            new_state.resultado_form = ResultadoForm {
                resultado: record.resultado_iatf.unwrap_or(ResultadoIatf::Pendiente),
                fecha_confirmacion: record
                    .fecha_confirmacion
                    .clone()
                    .unwrap_or_else(today_iso),
                dias_gestacion: record.dias_gestacion_confirmada.or(Some(45)),
            };
            new_state.selected = Some(record);
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
            new_state.resultado_form.resultado = match select.value().as_str() {
                "confirmada" => ResultadoIatf::Confirmada,
                "no_prenada" => ResultadoIatf::NoPrenada,
                "muerte_embrionaria" => ResultadoIatf::MuerteEmbrionaria,
                _ => ResultadoIatf::Pendiente,
            };
            state.set(new_state);
        })
    };

    let on_resultado_fecha = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.resultado_form.fecha_confirmacion = input.value();
            state.set(new_state);
        })
    };

    let on_resultado_dias = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut new_state = (*state).clone();
            new_state.resultado_form.dias_gestacion = parse_opt_i64(&input.value());
            state.set(new_state);
        })
    };

    let save_resultado = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let current = (*state).clone();
            let Some(record) = current.selected.clone() else {
                show_error(&state, "No hay registro seleccionado");
                return;
            };
            if current.resultado_form.resultado == ResultadoIatf::Pendiente {
                show_error(&state, "Debe seleccionar un resultado válido");
                return;
            }
            if current.resultado_form.fecha_confirmacion.is_empty() {
                show_error(&state, "Debe ingresar la fecha de confirmación");
                return;
            }

            let mut new_state = current.clone();
            new_state.saving = true;
            state.set(new_state);

            let request = ConfirmarResultadoRequest {
                resultado_iatf: current.resultado_form.resultado,
                fecha_confirmacion: current.resultado_form.fecha_confirmacion.clone(),
                dias_gestacion_confirmada: current.resultado_form.dias_gestacion,
            };

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match IatfService::new().confirmar_resultado(record.id, &request).await {
                    Ok(_) => {
                        let mut new_state = (*state).clone();
                        new_state.saving = false;
                        new_state.show_resultado_modal = false;
                        new_state.selected = None;
                        new_state.success_message =
                            "Resultado confirmado exitosamente".to_string();
                        new_state.show_success = true;
                        fetch_records(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error confirmando resultado: {}", e);
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

    // ==================== DETALLES Y BORRADO ====================

    let open_details = {
        let state = state.clone();
        Callback::from(move |record: IatfRecord| {
            let mut new_state = (*state).clone();
            new_state.selected = Some(record);
            new_state.show_details = true;
            state.set(new_state);
        })
    };

    let close_details = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut new_state = (*state).clone();
            new_state.show_details = false;
            new_state.selected = None;
            state.set(new_state);
        })
    };

    let request_delete = {
        let state = state.clone();
        Callback::from(move |record: IatfRecord| {
            let arete = record
                .animal
                .as_ref()
                .map(|animal| animal.arete.clone())
                .unwrap_or_else(|| "desconocido".to_string());
            let mut new_state = (*state).clone();
            new_state.delete_message = format!(
                "¿Está seguro que desea eliminar el registro de IATF del animal {} del {}? Esta acción no se puede deshacer.",
                arete,
                format_date(Some(&record.fecha_iatf))
            );
            new_state.pending_delete = Some(record.id);
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
            let Some(id) = current.pending_delete else {
                return;
            };

            let mut new_state = current;
            new_state.deleting = true;
            state.set(new_state);

            let state = state.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match IatfService::new().delete(id).await {
                    Ok(()) => {
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.pending_delete = None;
                        new_state.success_message =
                            "Registro de IATF eliminado exitosamente".to_string();
                        new_state.show_success = true;
                        fetch_records(&state, &mut new_state, 1);
                        state.set(new_state);
                        schedule_success_hide(&state);
                    }
                    Err(e) => {
                        log::error!("❌ Error eliminando registro: {}", e);
                        let mut new_state = (*state).clone();
                        new_state.deleting = false;
                        new_state.show_delete_modal = false;
                        new_state.error_message = "Error al eliminar el registro".to_string();
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

    let prev_page = {
        let load_records = load_records.clone();
        let page = state.page;
        Callback::from(move |_| {
            if page > 1 {
                load_records.emit(page - 1);
            }
        })
    };

    let next_page = {
        let load_records = load_records.clone();
        let page = state.page;
        let total = state.total_pages;
        Callback::from(move |_| {
            if page < total {
                load_records.emit(page + 1);
            }
        })
    };

    let on_back = Callback::from(|_| router::navigate(Route::Dashboard));
    let can_edit = SessionStore::can_edit();

    html! {
        <div class="iatf-screen">
            <PageHeader title="Registros IATF" on_back={on_back}>
                {
                    if can_edit {
                        html! { <button class="btn-primary" onclick={open_create}>{"+ Nuevo Registro"}</button> }
                    } else {
                        html! {}
                    }
                }
            </PageHeader>

            <div class="toolbar toolbar-filters">
                <select onchange={on_filter_resultado}>
                    <option value="" selected={state.filter_resultado.is_none()}>{"Todos los resultados"}</option>
                    <option value="pendiente" selected={state.filter_resultado == Some(ResultadoIatf::Pendiente)}>{"Pendiente"}</option>
                    <option value="confirmada" selected={state.filter_resultado == Some(ResultadoIatf::Confirmada)}>{"Confirmada"}</option>
                    <option value="no_prenada" selected={state.filter_resultado == Some(ResultadoIatf::NoPrenada)}>{"No Preñada"}</option>
                    <option value="muerte_embrionaria" selected={state.filter_resultado == Some(ResultadoIatf::MuerteEmbrionaria)}>{"Muerte Embrionaria"}</option>
                </select>
                <select onchange={on_filter_animal}>
                    <option value="" selected={state.filter_animal_id.is_none()}>{"Todos los animales"}</option>
                    {
                        state.animales.iter().map(|animal| {
                            html! {
                                <option
                                    value={animal.id.to_string()}
                                    selected={state.filter_animal_id == Some(animal.id)}
                                >
                                    {&animal.arete}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <select onchange={on_filter_semental}>
                    <option value="" selected={state.filter_semental_id.is_none()}>{"Todos los sementales"}</option>
                    {
                        state.sementales.iter().map(|semental| {
                            html! {
                                <option
                                    value={semental.id.to_string()}
                                    selected={state.filter_semental_id == Some(semental.id)}
                                >
                                    {&semental.nombre}
                                </option>
                            }
                        }).collect::<Html>()
                    }
                </select>
                <input
                    type="date"
                    value={state.filter_fecha_inicio.clone()}
                    oninput={on_filter_fecha_inicio}
                />
                <input
                    type="date"
                    value={state.filter_fecha_fin.clone()}
                    oninput={on_filter_fecha_fin}
                />
                <button class="btn-secondary" onclick={apply_filters}>{"Filtrar"}</button>
                <button class="btn-link" onclick={clear_filters}>{"Limpiar"}</button>
            </div>

            {
                if state.loading {
                    html! { <div class="loading">{"Cargando registros de IATF..."}</div> }
                } else if state.records.is_empty() {
                    html! { <p class="empty">{"No hay registros de IATF"}</p> }
                } else {
                    html! {
                        <table class="data-table">
                            <thead>
                                <tr>
                                    <th>{"Animal"}</th>
                                    <th>{"Semental"}</th>
                                    <th>{"Fecha IATF"}</th>
                                    <th>{"Resultado"}</th>
                                    <th>{"Acciones"}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {
                                    state.records.iter().map(|record| {
                                        let resultado = record.resultado_iatf.unwrap_or(ResultadoIatf::Pendiente);
                                        let on_view = {
                                            let open_details = open_details.clone();
                                            let record = record.clone();
                                            Callback::from(move |_: MouseEvent| open_details.emit(record.clone()))
                                        };
                                        let on_resultado = {
                                            let open_resultado = open_resultado.clone();
                                            let record = record.clone();
                                            Callback::from(move |_: MouseEvent| open_resultado.emit(record.clone()))
                                        };
                                        let on_edit = {
                                            let open_edit = open_edit.clone();
                                            let record = record.clone();
                                            Callback::from(move |_: MouseEvent| open_edit.emit(record.clone()))
                                        };
                                        let on_delete = {
                                            let request_delete = request_delete.clone();
                                            let record = record.clone();
                                            Callback::from(move |_: MouseEvent| request_delete.emit(record.clone()))
                                        };
                                        html! {
                                            <tr key={record.id}>
                                                <td>{record.animal.as_ref().map(|a| a.arete.clone()).unwrap_or_else(|| format!("#{}", record.animal_id))}</td>
                                                <td>{record.semental.as_ref().map(|s| s.nombre.clone()).unwrap_or_else(|| "Sin asignar".to_string())}</td>
                                                <td>{format_date(Some(&record.fecha_iatf))}</td>
                                                <td>
                                                    <span class={classes!("badge", resultado.badge_class())}>
                                                        {resultado.label()}
                                                    </span>
                                                </td>
                                                <td class="actions">
                                                    <button class="btn-small" onclick={on_view} title="Ver detalles">{"👁"}</button>
                                                    {
                                                        if can_edit {
                                                            html! {
                                                                <>
                                                                    <button class="btn-small" onclick={on_resultado} title="Confirmar resultado">{"✔"}</button>
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
                current_page={state.page}
                total_pages={state.total_pages}
                on_prev={prev_page}
                on_next={next_page}
            />

            {
                render_wizard_modal(
                    &state, wizard_goto, wizard_prev, wizard_next, save_record, close_wizard,
                    WizardCallbacks {
                        on_animal, on_semental, on_fecha_iatf, on_hora_iatf,
                        on_dia_0, on_dia_8, on_dia_9, on_dia_10,
                        on_cond_od, on_cond_oi, on_tono, on_tratamiento,
                        on_dias_tonificacion, on_sal_mineral, on_modivitasan, on_fosfoton,
                        on_seve, on_desparasitacion, on_vitaminas, on_dib, on_estradiol,
                        on_retirada_dib, on_ecg, on_pf2,
                        on_epoca, on_temperatura, on_humedad, on_estres, on_pasturas,
                        on_agua, on_gestacion_previa, on_dias_gestacion_previa,
                        on_observaciones, on_tecnico,
                    },
                )
            }
            { render_resultado_modal(&state, on_resultado_select, on_resultado_fecha, on_resultado_dias, save_resultado, close_resultado) }
            { render_details_modal(&state, close_details) }

            <ConfirmModal
                show={state.show_delete_modal}
                title="Eliminar Registro IATF"
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

// ==================== HELPERS ====================

/// Fetch del listado partiendo del estado ya actualizado por el caller;
/// marca loading y deja al caller el único set síncrono.
fn fetch_records(state: &UseStateHandle<IatfState>, base: &mut IatfState, page: u32) {
    base.loading = true;
    let filters = IatfFilters {
        animal_id: base.filter_animal_id,
        semental_id: base.filter_semental_id,
        resultado_iatf: base.filter_resultado,
        fecha_inicio: parse_opt_string(&base.filter_fecha_inicio),
        fecha_fin: parse_opt_string(&base.filter_fecha_fin),
        page: Some(page),
        per_page: Some(PER_PAGE),
        ..Default::default()
    };

    let state = state.clone();
    wasm_bindgen_futures::spawn_local(async move {
        match IatfService::new().list(&filters).await {
            Ok(result) => {
                let mut new_state = (*state).clone();
                new_state.records = result.data;
                new_state.page = result.current_page;
                new_state.total_pages = result.last_page;
                new_state.loading = false;
                state.set(new_state);
            }
            Err(e) => {
                log::error!("❌ Error cargando registros IATF: {}", e);
                let mut new_state = (*state).clone();
                new_state.loading = false;
                new_state.error_message = "Error al cargar los registros de IATF".to_string();
                new_state.show_error = true;
                state.set(new_state);
            }
        }
    });
}

fn parse_condicion(value: &str) -> Option<CondicionOvarica> {
    CondicionOvarica::ALL
        .iter()
        .copied()
        .find(|condicion| condicion.as_str() == value)
}

fn show_error(state: &UseStateHandle<IatfState>, message: &str) {
    let mut new_state = (**state).clone();
    new_state.error_message = message.to_string();
    new_state.show_error = true;
    state.set(new_state);
}

fn schedule_success_hide(state: &UseStateHandle<IatfState>) {
    let state = state.clone();
    Timeout::new(3000, move || {
        let mut new_state = (*state).clone();
        new_state.show_success = false;
        state.set(new_state);
    })
    .forget();
}

/// Callbacks del formulario del wizard, agrupados para no desbordar firmas
struct WizardCallbacks {
    on_animal: Callback<Event>,
    on_semental: Callback<Event>,
    on_fecha_iatf: Callback<InputEvent>,
    on_hora_iatf: Callback<InputEvent>,
    on_dia_0: Callback<InputEvent>,
    on_dia_8: Callback<InputEvent>,
    on_dia_9: Callback<InputEvent>,
    on_dia_10: Callback<InputEvent>,
    on_cond_od: Callback<Event>,
    on_cond_oi: Callback<Event>,
    on_tono: Callback<InputEvent>,
    on_tratamiento: Callback<Event>,
    on_dias_tonificacion: Callback<InputEvent>,
    on_sal_mineral: Callback<InputEvent>,
    on_modivitasan: Callback<InputEvent>,
    on_fosfoton: Callback<InputEvent>,
    on_seve: Callback<InputEvent>,
    on_desparasitacion: Callback<Event>,
    on_vitaminas: Callback<Event>,
    on_dib: Callback<Event>,
    on_estradiol: Callback<InputEvent>,
    on_retirada_dib: Callback<Event>,
    on_ecg: Callback<InputEvent>,
    on_pf2: Callback<InputEvent>,
    on_epoca: Callback<Event>,
    on_temperatura: Callback<InputEvent>,
    on_humedad: Callback<InputEvent>,
    on_estres: Callback<InputEvent>,
    on_pasturas: Callback<InputEvent>,
    on_agua: Callback<Event>,
    on_gestacion_previa: Callback<Event>,
    on_dias_gestacion_previa: Callback<InputEvent>,
    on_observaciones: Callback<InputEvent>,
    on_tecnico: Callback<InputEvent>,
}

const STEP_TITLES: [&str; 5] = [
    "Datos Básicos",
    "Variables Reproductivas",
    "Protocolo IATF",
    "Variables Ambientales",
    "Observaciones",
];

fn render_wizard_modal(
    state: &IatfState,
    goto: Callback<u8>,
    prev: Callback<MouseEvent>,
    next: Callback<MouseEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
    callbacks: WizardCallbacks,
) -> Html {
    if !state.show_wizard {
        return html! {};
    }

    let wizard = &state.wizard;
    let form = &wizard.form;
    let step = wizard.current_step;

    let step_content = match step {
        1 => html! {
            <div class="wizard-step">
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Animal"}</label>
                        <select onchange={callbacks.on_animal}>
                            <option value="" selected={form.animal_id.is_none()}>{"Seleccionar animal..."}</option>
                            {
                                state.animales.iter().map(|animal| {
                                    html! {
                                        <option
                                            value={animal.id.to_string()}
                                            selected={form.animal_id == Some(animal.id)}
                                        >
                                            {&animal.arete}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Semental"}</label>
                        <select onchange={callbacks.on_semental}>
                            <option value="" selected={form.semental_id.is_none()}>{"Sin asignar"}</option>
                            {
                                state.sementales.iter().map(|semental| {
                                    html! {
                                        <option
                                            value={semental.id.to_string()}
                                            selected={form.semental_id == Some(semental.id)}
                                        >
                                            {&semental.nombre}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Fecha IATF"}</label>
                        <input type="date" value={form.fecha_iatf.clone()} oninput={callbacks.on_fecha_iatf} />
                    </div>
                    <div class="form-group">
                        <label>{"Hora IATF"}</label>
                        <input type="time" value={form.hora_iatf.clone().unwrap_or_default()} oninput={callbacks.on_hora_iatf} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Día 0 del protocolo"}</label>
                        <input type="date" value={form.fecha_protocolo_dia_0.clone().unwrap_or_default()} oninput={callbacks.on_dia_0} />
                    </div>
                    <div class="form-group">
                        <label>{"Día 8"}</label>
                        <input type="date" value={form.fecha_protocolo_dia_8.clone().unwrap_or_default()} oninput={callbacks.on_dia_8} />
                    </div>
                    <div class="form-group">
                        <label>{"Día 9"}</label>
                        <input type="date" value={form.fecha_protocolo_dia_9.clone().unwrap_or_default()} oninput={callbacks.on_dia_9} />
                    </div>
                    <div class="form-group">
                        <label>{"Día 10"}</label>
                        <input type="date" value={form.fecha_protocolo_dia_10.clone().unwrap_or_default()} oninput={callbacks.on_dia_10} />
                    </div>
                </div>
            </div>
        },
        2 => html! {
            <div class="wizard-step">
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Condición ovárica OD"}</label>
                        <select onchange={callbacks.on_cond_od}>
                            <option value="" selected={form.condicion_ovarica_od.is_none()}>{"No evaluado"}</option>
                            {
                                CondicionOvarica::ALL.iter().map(|condicion| {
                                    html! {
                                        <option
                                            value={condicion.as_str()}
                                            selected={form.condicion_ovarica_od == Some(*condicion)}
                                        >
                                            {condicion.label()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Condición ovárica OI"}</label>
                        <select onchange={callbacks.on_cond_oi}>
                            <option value="" selected={form.condicion_ovarica_oi.is_none()}>{"No evaluado"}</option>
                            {
                                CondicionOvarica::ALL.iter().map(|condicion| {
                                    html! {
                                        <option
                                            value={condicion.as_str()}
                                            selected={form.condicion_ovarica_oi == Some(*condicion)}
                                        >
                                            {condicion.label()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Tono uterino (0-100)"}</label>
                        <input
                            type="number"
                            value={form.tono_uterino.map(|v| v.to_string()).unwrap_or_default()}
                            oninput={callbacks.on_tono}
                        />
                    </div>
                    <div class="form-group">
                        <label>{"Tratamiento previo"}</label>
                        <select onchange={callbacks.on_tratamiento}>
                            <option value="" selected={form.tratamiento_previo.is_none()}>{"Ninguno"}</option>
                            {
                                TratamientoPrevio::ALL.iter().map(|tratamiento| {
                                    html! {
                                        <option
                                            value={tratamiento.as_str()}
                                            selected={form.tratamiento_previo == Some(*tratamiento)}
                                        >
                                            {tratamiento.label()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                </div>
            </div>
        },
        3 => html! {
            <div class="wizard-step">
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Días de tonificación"}</label>
                        <input type="number" value={form.dias_tonificacion.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_dias_tonificacion} />
                    </div>
                    <div class="form-group">
                        <label>{"Sal mineral (gr)"}</label>
                        <input type="number" value={form.sal_mineral_gr.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_sal_mineral} />
                    </div>
                    <div class="form-group">
                        <label>{"Modivitasan (ml)"}</label>
                        <input type="number" step="0.1" value={form.modivitasan_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_modivitasan} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Fosfotón (ml)"}</label>
                        <input type="number" step="0.1" value={form.fosfoton_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_fosfoton} />
                    </div>
                    <div class="form-group">
                        <label>{"Seve (ml)"}</label>
                        <input type="number" step="0.1" value={form.seve_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_seve} />
                    </div>
                    <div class="form-group">
                        <label>{"Estradiol (ml)"}</label>
                        <input type="number" step="0.1" value={form.estradiol_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_estradiol} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"eCG (ml)"}</label>
                        <input type="number" step="0.1" value={form.ecg_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_ecg} />
                    </div>
                    <div class="form-group">
                        <label>{"PGF2α (ml)"}</label>
                        <input type="number" step="0.1" value={form.pf2_alpha_ml.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_pf2} />
                    </div>
                </div>
                <div class="form-row form-row-checks">
                    <label class="checkbox-label">
                        <input type="checkbox" checked={form.desparasitacion_previa} onchange={callbacks.on_desparasitacion} />
                        {"Desparasitación previa"}
                    </label>
                    <label class="checkbox-label">
                        <input type="checkbox" checked={form.vitaminas_aplicadas} onchange={callbacks.on_vitaminas} />
                        {"Vitaminas aplicadas"}
                    </label>
                    <label class="checkbox-label">
                        <input type="checkbox" checked={form.dispositivo_dib} onchange={callbacks.on_dib} />
                        {"Dispositivo DIB"}
                    </label>
                    <label class="checkbox-label">
                        <input type="checkbox" checked={form.retirada_dib} onchange={callbacks.on_retirada_dib} />
                        {"Retirada DIB"}
                    </label>
                </div>
            </div>
        },
        4 => html! {
            <div class="wizard-step">
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Época del año"}</label>
                        <select onchange={callbacks.on_epoca}>
                            <option value="" selected={form.epoca_anio.is_none()}>{"No especificado"}</option>
                            {
                                EpocaAnio::ALL.iter().map(|epoca| {
                                    html! {
                                        <option
                                            value={epoca.as_str()}
                                            selected={form.epoca_anio == Some(*epoca)}
                                        >
                                            {epoca.label()}
                                        </option>
                                    }
                                }).collect::<Html>()
                            }
                        </select>
                    </div>
                    <div class="form-group">
                        <label>{"Temperatura ambiente (°C)"}</label>
                        <input type="number" step="0.1" value={form.temperatura_ambiente.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_temperatura} />
                    </div>
                    <div class="form-group">
                        <label>{"Humedad relativa (%)"}</label>
                        <input type="number" value={form.humedad_relativa.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_humedad} />
                    </div>
                </div>
                <div class="form-row">
                    <div class="form-group">
                        <label>{"Estrés de manejo (1-10)"}</label>
                        <input type="number" value={form.estres_manejo.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_estres} />
                    </div>
                    <div class="form-group">
                        <label>{"Calidad de pasturas (1-10)"}</label>
                        <input type="number" value={form.calidad_pasturas.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_pasturas} />
                    </div>
                    <div class="form-group">
                        <label>{"Disponibilidad de agua"}</label>
                        <select onchange={callbacks.on_agua}>
                            <option value="" selected={form.disponibilidad_agua.is_none()}>{"No evaluado"}</option>
                            <option value="adecuada" selected={form.disponibilidad_agua == Some(DisponibilidadAgua::Adecuada)}>{"Adecuada"}</option>
                            <option value="limitada" selected={form.disponibilidad_agua == Some(DisponibilidadAgua::Limitada)}>{"Limitada"}</option>
                        </select>
                    </div>
                </div>
                <div class="form-row">
                    <label class="checkbox-label">
                        <input type="checkbox" checked={form.gestacion_previa} onchange={callbacks.on_gestacion_previa} />
                        {"Gestación previa"}
                    </label>
                    {
                        if form.gestacion_previa {
                            html! {
                                <div class="form-group">
                                    <label>{"Días de gestación previa"}</label>
                                    <input type="number" value={form.dias_gestacion_previa.map(|v| v.to_string()).unwrap_or_default()} oninput={callbacks.on_dias_gestacion_previa} />
                                </div>
                            }
                        } else {
                            html! {}
                        }
                    }
                </div>
            </div>
        },
        _ => html! {
            <div class="wizard-step">
                <div class="form-group">
                    <label>{"Observaciones"}</label>
                    <textarea
                        rows="4"
                        value={form.observaciones.clone().unwrap_or_default()}
                        oninput={callbacks.on_observaciones}
                    />
                </div>
                <div class="form-group">
                    <label>{"Técnico responsable"}</label>
                    <input value={form.tecnico_responsable.clone().unwrap_or_default()} oninput={callbacks.on_tecnico} />
                </div>
                <p class="wizard-note">{"El resultado queda pendiente hasta la confirmación ecográfica."}</p>
            </div>
        },
    };

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wizard">
                <h2>{if state.editing_id.is_some() { "Editar Registro IATF" } else { "Nuevo Registro IATF" }}</h2>

                <div class="wizard-steps">
                    {
                        (1..=TOTAL_STEPS).map(|n| {
                            let goto = goto.clone();
                            let onclick = Callback::from(move |_: MouseEvent| goto.emit(n));
                            html! {
                                <button
                                    key={n}
                                    class={classes!("wizard-step-dot", (n == step).then_some("wizard-step-active"))}
                                    onclick={onclick}
                                    type="button"
                                >
                                    {n}
                                </button>
                            }
                        }).collect::<Html>()
                    }
                </div>
                <h3 class="wizard-title">{STEP_TITLES[(step as usize) - 1]}</h3>

                { step_content }

                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.saving}>{"Cancelar"}</button>
                    {
                        if step > 1 {
                            html! { <button class="btn-secondary" onclick={prev} disabled={state.saving}>{"‹ Anterior"}</button> }
                        } else {
                            html! {}
                        }
                    }
                    {
                        if step < TOTAL_STEPS {
                            html! { <button class="btn-primary" onclick={next} disabled={state.saving}>{"Siguiente ›"}</button> }
                        } else {
                            html! {
                                <button class="btn-primary" onclick={save} disabled={state.saving}>
                                    {if state.saving { "Guardando..." } else { "Guardar Registro" }}
                                </button>
                            }
                        }
                    }
                </div>
            </div>
        </div>
    }
}

fn render_resultado_modal(
    state: &IatfState,
    on_select: Callback<Event>,
    on_fecha: Callback<InputEvent>,
    on_dias: Callback<InputEvent>,
    save: Callback<MouseEvent>,
    close: Callback<MouseEvent>,
) -> Html {
    if !state.show_resultado_modal {
        return html! {};
    }

    let form = &state.resultado_form;

    html! {
        <div class="modal-overlay">
            <div class="modal">
                <h2>{"Confirmar Resultado"}</h2>
                <div class="form-group">
                    <label>{"Resultado"}</label>
                    <select onchange={on_select}>
                        <option value="pendiente" selected={form.resultado == ResultadoIatf::Pendiente}>{"Seleccionar..."}</option>
                        <option value="confirmada" selected={form.resultado == ResultadoIatf::Confirmada}>{"Confirmada"}</option>
                        <option value="no_prenada" selected={form.resultado == ResultadoIatf::NoPrenada}>{"No Preñada"}</option>
                        <option value="muerte_embrionaria" selected={form.resultado == ResultadoIatf::MuerteEmbrionaria}>{"Muerte Embrionaria"}</option>
                    </select>
                </div>
                <div class="form-group">
                    <label>{"Fecha de confirmación"}</label>
                    <input type="date" value={form.fecha_confirmacion.clone()} oninput={on_fecha} />
                </div>
                {
                    if form.resultado == ResultadoIatf::Confirmada {
                        html! {
                            <div class="form-group">
                                <label>{"Días de gestación confirmada"}</label>
                                <input
                                    type="number"
                                    value={form.dias_gestacion.map(|v| v.to_string()).unwrap_or_default()}
                                    oninput={on_dias}
                                />
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
                <div class="modal-actions">
                    <button class="btn-secondary" onclick={close} disabled={state.saving}>{"Cancelar"}</button>
                    <button class="btn-primary" onclick={save} disabled={state.saving}>
                        {if state.saving { "Guardando..." } else { "Confirmar" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

fn render_details_modal(state: &IatfState, close: Callback<MouseEvent>) -> Html {
    if !state.show_details {
        return html! {};
    }
    let Some(record) = &state.selected else {
        return html! {};
    };

    let resultado = record.resultado_iatf.unwrap_or(ResultadoIatf::Pendiente);

    html! {
        <div class="modal-overlay">
            <div class="modal modal-wide">
                <h2>{"Detalle del Registro IATF"}</h2>
                <div class="details-grid">
                    <section>
                        <h3>{"Datos básicos"}</h3>
                        <p><strong>{"Animal: "}</strong>{record.animal.as_ref().map(|a| a.arete.clone()).unwrap_or_else(|| format!("#{}", record.animal_id))}</p>
                        <p><strong>{"Semental: "}</strong>{record.semental.as_ref().map(|s| s.nombre.clone()).unwrap_or_else(|| "Sin asignar".to_string())}</p>
                        <p><strong>{"Fecha IATF: "}</strong>{format_date(Some(&record.fecha_iatf))}</p>
                        <p><strong>{"Hora: "}</strong>{record.hora_iatf.clone().unwrap_or_else(|| "-".to_string())}</p>
                        <p><strong>{"Técnico: "}</strong>{record.tecnico_responsable.clone().unwrap_or_else(|| "-".to_string())}</p>
                    </section>
                    <section>
                        <h3>{"Variables reproductivas"}</h3>
                        <p><strong>{"Condición ovárica OD: "}</strong>{record.condicion_ovarica_od.map(|c| c.label()).unwrap_or("No evaluado")}</p>
                        <p><strong>{"Condición ovárica OI: "}</strong>{record.condicion_ovarica_oi.map(|c| c.label()).unwrap_or("No evaluado")}</p>
                        <p><strong>{"Tono uterino: "}</strong>{format_opt_number(record.tono_uterino, "")}</p>
                        <p><strong>{"Tratamiento previo: "}</strong>{record.tratamiento_previo.map(|t| t.label()).unwrap_or("Ninguno")}</p>
                    </section>
                    <section>
                        <h3>{"Protocolo"}</h3>
                        <p><strong>{"Dispositivo DIB: "}</strong>{format_bool(record.dispositivo_dib)}</p>
                        <p><strong>{"Retirada DIB: "}</strong>{format_bool(record.retirada_dib)}</p>
                        <p><strong>{"Estradiol: "}</strong>{format_opt_number(record.estradiol_ml, " ml")}</p>
                        <p><strong>{"eCG: "}</strong>{format_opt_number(record.ecg_ml, " ml")}</p>
                        <p><strong>{"PGF2α: "}</strong>{format_opt_number(record.pf2_alpha_ml, " ml")}</p>
                        <p><strong>{"Sal mineral: "}</strong>{format_opt_number(record.sal_mineral_gr, " gr")}</p>
                    </section>
                    <section>
                        <h3>{"Ambiente"}</h3>
                        <p><strong>{"Época: "}</strong>{record.epoca_anio.map(|e| e.label()).unwrap_or("No especificado")}</p>
                        <p><strong>{"Temperatura: "}</strong>{format_opt_number(record.temperatura_ambiente, " °C")}</p>
                        <p><strong>{"Humedad: "}</strong>{format_opt_number(record.humedad_relativa, " %")}</p>
                        <p><strong>{"Agua: "}</strong>{record.disponibilidad_agua.map(|a| a.label()).unwrap_or("No evaluado")}</p>
                    </section>
                    <section>
                        <h3>{"Resultado"}</h3>
                        <p>
                            <span class={classes!("badge", resultado.badge_class())}>
                                {resultado.label()}
                            </span>
                        </p>
                        <p><strong>{"Fecha de confirmación: "}</strong>{format_date(record.fecha_confirmacion.as_deref())}</p>
                        <p><strong>{"Días de gestación: "}</strong>{record.dias_gestacion_confirmada.map(|v| v.to_string()).unwrap_or_else(|| "-".to_string())}</p>
                        <p><strong>{"Observaciones: "}</strong>{record.observaciones.clone().unwrap_or_else(|| "-".to_string())}</p>
                    </section>
                </div>
                <div class="modal-actions">
                    <button class="btn-primary" onclick={close}>{"Cerrar"}</button>
                </div>
            </div>
        </div>
    }
}
