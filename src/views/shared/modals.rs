use yew::prelude::*;

// ==================== MODAL DE CONFIRMACIÓN ====================

#[derive(Properties, PartialEq)]
pub struct ConfirmModalProps {
    pub show: bool,
    pub title: String,
    pub message: String,
    #[prop_or(false)]
    pub busy: bool,
    #[prop_or("Confirmar")]
    pub confirm_label: &'static str,
    pub on_confirm: Callback<()>,
    pub on_cancel: Callback<()>,
}

/// Confirmación antes de una acción destructiva
#[function_component(ConfirmModal)]
pub fn confirm_modal(props: &ConfirmModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal modal-confirm">
                <h2>{&props.title}</h2>
                <p>{&props.message}</p>
                <div class="modal-actions">
                    <button
                        class="btn-secondary"
                        onclick={props.on_cancel.reform(|_| ())}
                        disabled={props.busy}
                    >
                        {"Cancelar"}
                    </button>
                    <button
                        class="btn-danger"
                        onclick={props.on_confirm.reform(|_| ())}
                        disabled={props.busy}
                    >
                        {if props.busy { "Procesando..." } else { props.confirm_label }}
                    </button>
                </div>
            </div>
        </div>
    }
}

// ==================== BANNERS DE RESULTADO ====================

#[derive(Properties, PartialEq)]
pub struct SuccessModalProps {
    pub show: bool,
    pub message: String,
    pub on_close: Callback<()>,
}

/// Banner de éxito; la pantalla lo auto-cierra a los 3 segundos
#[function_component(SuccessModal)]
pub fn success_modal(props: &SuccessModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal-overlay modal-overlay-light">
            <div class="modal modal-success">
                <div class="modal-icon">{"✅"}</div>
                <p>{&props.message}</p>
                <button class="btn-primary" onclick={props.on_close.reform(|_| ())}>
                    {"Aceptar"}
                </button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorModalProps {
    pub show: bool,
    pub message: String,
    pub on_close: Callback<()>,
}

/// Banner de error; persiste hasta que el usuario lo cierre
#[function_component(ErrorModal)]
pub fn error_modal(props: &ErrorModalProps) -> Html {
    if !props.show {
        return html! {};
    }

    html! {
        <div class="modal-overlay">
            <div class="modal modal-error">
                <div class="modal-icon">{"❌"}</div>
                <p>{&props.message}</p>
                <button class="btn-primary" onclick={props.on_close.reform(|_| ())}>
                    {"Cerrar"}
                </button>
            </div>
        </div>
    }
}

// ==================== PAGINADOR ====================

#[derive(Properties, PartialEq)]
pub struct PaginatorProps {
    pub current_page: u32,
    pub total_pages: u32,
    pub on_prev: Callback<()>,
    pub on_next: Callback<()>,
}

#[function_component(Paginator)]
pub fn paginator(props: &PaginatorProps) -> Html {
    if props.total_pages <= 1 {
        return html! {};
    }

    html! {
        <div class="paginator">
            <button
                class="btn-page"
                disabled={props.current_page <= 1}
                onclick={props.on_prev.reform(|_| ())}
            >
                {"‹ Anterior"}
            </button>
            <span class="page-info">
                {format!("Página {} de {}", props.current_page, props.total_pages)}
            </span>
            <button
                class="btn-page"
                disabled={props.current_page >= props.total_pages}
                onclick={props.on_next.reform(|_| ())}
            >
                {"Siguiente ›"}
            </button>
        </div>
    }
}
