//! Hero section component

use leptos::*;

use crate::APP_TITLE;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>{APP_TITLE}</h1>
            <p class="subtitle">
                "Sube el datasheet del pozo (.xls, .xlsx, .xlsm) para obtener "
                "el programa de maniobras normalizado."
            </p>
        </div>
    }
}
