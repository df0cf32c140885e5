use yew::prelude::*;

use crate::components::card::{Card, CardContent, CardDescription, CardHeader, CardTitle};

const SECTIONS: &[(&str, &str)] = &[
    ("Home", "Reloj en vivo, resumen de ventas del día y transacciones de hoy."),
    ("Dashboard", "Préstamos, devoluciones, categorías y libros más prestados."),
    ("Sesión", "El acceso se recuerda en este navegador hasta cerrar sesión."),
];

#[function_component(AboutPage)]
pub fn about_page() -> Html {
    html! {
        <div class="page">
            <Card>
                <CardHeader>
                    <CardTitle>{ "Mundo Escolar · Panel de administración" }</CardTitle>
                    <CardDescription>
                        { "Panel interno para la librería: ventas del día y estadísticas de préstamos. Los datos mostrados son de ejemplo." }
                    </CardDescription>
                </CardHeader>
                <CardContent>
                    <div class="rows">
                        { for SECTIONS.iter().map(|(name, text)| html! {
                            <div class="row" key={*name}>
                                <div>
                                    <h4 class="row-title">{ *name }</h4>
                                    <p class="row-items">{ *text }</p>
                                </div>
                            </div>
                        }) }
                    </div>
                </CardContent>
            </Card>
        </div>
    }
}
