use yew::prelude::*;

use crate::hooks::use_session;

#[derive(Properties, PartialEq)]
pub struct PageHeaderProps {
    pub title: &'static str,
    pub on_back: Callback<()>,
    #[prop_or_default]
    pub children: Children,
}

/// Header común de las pantallas de gestión: volver, título y usuario actual
#[function_component(PageHeader)]
pub fn page_header(props: &PageHeaderProps) -> Html {
    let session = use_session();

    let user_label = session
        .user
        .as_ref()
        .map(|user| format!("{} ({})", user.nombre_completo(), user.rol.label()))
        .unwrap_or_default();

    html! {
        <header class="page-header">
            <div class="header-left">
                <button class="btn-back" onclick={props.on_back.reform(|_| ())}>
                    {"← Volver"}
                </button>
                <h1>{props.title}</h1>
            </div>
            <div class="header-right">
                { for props.children.iter() }
                <span class="header-user">{user_label}</span>
            </div>
        </header>
    }
}
